use contracts::domain::testimonial::TestimonialInput;
use leptos::prelude::*;

use crate::domain::testimonial::store::TestimonialsStore;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::toast::use_toasts;

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[component]
#[allow(non_snake_case)]
pub fn TestimonialsPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let modals = use_modals();
    let store = TestimonialsStore::new(toasts);

    store.fetch();

    let filtered = move || {
        let term = ctx.search_term.get().to_lowercase();
        store
            .testimonials
            .get()
            .into_iter()
            .filter(|t| {
                term.is_empty()
                    || t.customer.to_lowercase().contains(&term)
                    || t.comment.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let open_form = move |_| {
        modals.push(move |handle| {
            let close = Callback::new(move |_: ()| handle.close());
            view! { <TestimonialForm store=store on_close=close /> }.into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Testimonials" subtitle="Customer reviews shown on the storefront">
                <button class="button button--primary" on:click=open_form>
                    {icon("plus")}
                    "Add testimonial"
                </button>
                <button class="button button--secondary" on:click=move |_| store.fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || store.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || store.loading.get()>
                <div class="loading-banner">"Loading testimonials..."</div>
            </Show>

            <div class="card-grid">
                {move || filtered().into_iter().map(|t| {
                    let id = t.id.clone();
                    view! {
                        <div class="testimonial-card">
                            <div class="testimonial-card__header">
                                <span class="testimonial-card__customer">{t.customer.clone()}</span>
                                <span class="testimonial-card__stars">{stars(t.rating)}</span>
                            </div>
                            <p class="testimonial-card__comment">{t.comment.clone()}</p>
                            <div class="testimonial-card__footer">
                                <span class="table__secondary">{t.product_id.clone()}</span>
                                <button
                                    class="button button--danger"
                                    on:click=move |_| store.remove(id.clone())
                                >
                                    {icon("delete")}
                                    "Remove"
                                </button>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn TestimonialForm(store: TestimonialsStore, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(TestimonialInput::default());
    let saving = RwSignal::new(false);
    let incomplete = RwSignal::new(false);

    let on_save = move |_| {
        let input = form.get_untracked();
        if input.customer.trim().is_empty() || input.comment.trim().is_empty() {
            incomplete.set(true);
            return;
        }
        incomplete.set(false);
        saving.set(true);
        store.create(input, move |ok| {
            saving.set(false);
            if ok {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="form">
            <div class="form__header">
                <h2 class="form__title">"Add testimonial"</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {icon("close")}
                </button>
            </div>

            <Show when=move || incomplete.get()>
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">"Customer name and comment are required"</span>
                </div>
            </Show>

            <div class="form__grid">
                <label class="form__field">
                    <span class="form__label">"Customer"</span>
                    <input
                        class="form__input"
                        prop:value=move || form.with(|f| f.customer.clone())
                        on:input=move |ev| form.update(|f| f.customer = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Product ID"</span>
                    <input
                        class="form__input"
                        prop:value=move || form.with(|f| f.product_id.clone())
                        on:input=move |ev| form.update(|f| f.product_id = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Rating"</span>
                    <select
                        class="form__input"
                        prop:value=move || form.with(|f| f.rating.to_string())
                        on:change=move |ev| form.update(|f| {
                            f.rating = event_target_value(&ev).parse().unwrap_or(5)
                        })
                    >
                        {(1u8..=5).map(|r| view! {
                            <option value=r.to_string()>{stars(r)}</option>
                        }).collect_view()}
                    </select>
                </label>
                <label class="form__field form__field--full">
                    <span class="form__label">"Comment"</span>
                    <textarea
                        class="form__input"
                        prop:value=move || form.with(|f| f.comment.clone())
                        on:input=move |ev| form.update(|f| f.comment = event_target_value(&ev))
                    ></textarea>
                </label>
            </div>

            <div class="form__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="button button--primary" disabled=move || saving.get() on:click=on_save>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </div>
    }
}
