use contracts::domain::warehouse::WarehouseInput;
use leptos::prelude::*;

use crate::domain::warehouse::store::WarehousesStore;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::toast::use_toasts;

#[component]
#[allow(non_snake_case)]
pub fn WarehousePage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let modals = use_modals();
    let store = WarehousesStore::new(toasts);

    store.fetch();

    let filtered = move || {
        let term = ctx.search_term.get().to_lowercase();
        store
            .warehouses
            .get()
            .into_iter()
            .filter(|w| {
                term.is_empty()
                    || w.name.to_lowercase().contains(&term)
                    || w.location.to_lowercase().contains(&term)
                    || w.manager.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let open_form = move |_| {
        modals.push(move |handle| {
            let close = Callback::new(move |_: ()| handle.close());
            view! { <WarehouseForm store=store on_close=close /> }.into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Warehouse" subtitle="Storage locations and utilization">
                <button class="button button--primary" on:click=open_form>
                    {icon("plus")}
                    "Add warehouse"
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
                <div class="loading-banner">"Loading warehouses..."</div>
            </Show>

            <div class="card-grid">
                {move || filtered().into_iter().map(|w| {
                    let utilization = w.utilization_percent.clamp(0.0, 100.0);
                    let bar_class = if utilization >= 90.0 {
                        "warehouse-card__bar warehouse-card__bar--critical"
                    } else if utilization >= 70.0 {
                        "warehouse-card__bar warehouse-card__bar--high"
                    } else {
                        "warehouse-card__bar"
                    };
                    let id = w.id.clone();
                    let selected = move || ctx.selected_warehouse.get().as_deref() == Some(id.as_str());
                    let id_for_click = w.id.clone();
                    view! {
                        <div
                            class=move || if selected() { "warehouse-card warehouse-card--selected" } else { "warehouse-card" }
                            on:click=move |_| ctx.selected_warehouse.set(Some(id_for_click.clone()))
                        >
                            <div class="warehouse-card__header">
                                <h3 class="warehouse-card__name">{w.name.clone()}</h3>
                                <span class="warehouse-card__location">{w.location.clone()}</span>
                            </div>
                            <div class="warehouse-card__row">{format!("Manager: {}", w.manager)}</div>
                            <div class="warehouse-card__row">{format!("Contact: {}", w.contact)}</div>
                            <div class="warehouse-card__row">{w.address.clone()}</div>
                            <div class="warehouse-card__row">{format!("Capacity: {} units", w.capacity)}</div>
                            <div class="warehouse-card__utilization">
                                <div class="warehouse-card__track">
                                    <div class=bar_class style=format!("width: {}%", utilization)></div>
                                </div>
                                <span class="warehouse-card__percent">{format!("{:.0}% used", utilization)}</span>
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
fn WarehouseForm(store: WarehousesStore, on_close: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(WarehouseInput::default());
    let saving = RwSignal::new(false);
    let incomplete = RwSignal::new(false);

    let on_save = move |_| {
        let input = form.get_untracked();
        if !input.is_complete() {
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

    let text_field = move |label: &'static str,
                           get: fn(&WarehouseInput) -> &String,
                           set: fn(&mut WarehouseInput, String)| {
        view! {
            <label class="form__field">
                <span class="form__label">{label}</span>
                <input
                    class="form__input"
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="form">
            <div class="form__header">
                <h2 class="form__title">"Add warehouse"</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {icon("close")}
                </button>
            </div>

            <Show when=move || incomplete.get()>
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">"Name, address and manager are required"</span>
                </div>
            </Show>

            <div class="form__grid">
                {text_field("Name", |f| &f.name, |f, v| f.name = v)}
                {text_field("Address", |f| &f.address, |f, v| f.address = v)}
                {text_field("Location", |f| &f.location, |f, v| f.location = v)}
                {text_field("Manager", |f| &f.manager, |f, v| f.manager = v)}
                {text_field("Contact", |f| &f.contact, |f, v| f.contact = v)}
                <label class="form__field">
                    <span class="form__label">"Capacity (units)"</span>
                    <input
                        type="number"
                        class="form__input"
                        prop:value=move || form.with(|f| f.capacity.to_string())
                        on:input=move |ev| form.update(|f| {
                            f.capacity = event_target_value(&ev).parse().unwrap_or(0)
                        })
                    />
                </label>
            </div>

            <div class="form__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="button button--primary" disabled=move || saving.get() on:click=on_save>
                    {move || if saving.get() { "Saving..." } else { "Save warehouse" }}
                </button>
            </div>
        </div>
    }
}
