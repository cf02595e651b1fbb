use contracts::domain::blog::{BlogInput, BlogPost, BlogStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::domain::blog::store::BlogsStore;
use crate::domain::upload;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_chip::StatusChip;
use crate::shared::date_utils::cell_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::toast::use_toasts;

#[component]
#[allow(non_snake_case)]
pub fn BlogsPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let modals = use_modals();
    let store = BlogsStore::new(toasts);

    store.fetch();

    let filtered = move || {
        let term = ctx.search_term.get().to_lowercase();
        store
            .posts
            .get()
            .into_iter()
            .filter(|p| {
                term.is_empty()
                    || p.title.to_lowercase().contains(&term)
                    || p.author.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let open_form = move |post: Option<BlogPost>| {
        modals.push_with_class(Some("modal__surface modal__surface--wide".to_string()), move |handle| {
            let close = Callback::new(move |_: ()| handle.close());
            view! { <BlogForm store=store post=post.clone() on_close=close /> }.into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Blogs" subtitle="Storefront articles">
                <button class="button button--primary" on:click=move |_| open_form(None)>
                    {icon("plus")}
                    "New post"
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
                <div class="loading-banner">"Loading posts..."</div>
            </Show>

            <div class="card-grid">
                {move || filtered().into_iter().map(|post| {
                    let status = post.status;
                    let toggle_label = match status {
                        BlogStatus::Draft => "Publish",
                        BlogStatus::Published => "Unpublish",
                    };
                    let post_for_edit = post.clone();
                    let post_for_toggle = post.clone();
                    let id_for_delete = post.id.clone();
                    view! {
                        <div class="blog-card">
                            {post.cover_image.clone().map(|src| view! {
                                <img class="blog-card__cover" src=src />
                            })}
                            <div class="blog-card__body">
                                <div class="blog-card__header">
                                    <h3 class="blog-card__title">{post.title.clone()}</h3>
                                    <StatusChip
                                        status=status.as_str().to_lowercase()
                                        label=status.as_str().to_string()
                                    />
                                </div>
                                <p class="blog-card__excerpt">{post.excerpt.clone()}</p>
                                <div class="blog-card__meta">
                                    <span class="table__secondary">{post.author.clone()}</span>
                                    <span class="table__secondary">{cell_date(&post.created_at)}</span>
                                </div>
                                <div class="blog-card__actions">
                                    <button
                                        class="button button--ghost"
                                        on:click=move |_| open_form(Some(post_for_edit.clone()))
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| store.toggle_status(post_for_toggle.clone())
                                    >
                                        {toggle_label}
                                    </button>
                                    <button
                                        class="button button--danger"
                                        on:click=move |_| store.remove(id_for_delete.clone())
                                    >
                                        {icon("delete")}
                                        "Delete"
                                    </button>
                                </div>
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
fn BlogForm(store: BlogsStore, post: Option<BlogPost>, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let editing_id = post.as_ref().map(|p| p.id.clone());
    let title = if editing_id.is_some() { "Edit post" } else { "New post" };

    let form = RwSignal::new(match post {
        Some(p) => BlogInput {
            title: p.title,
            excerpt: p.excerpt,
            content: p.content,
            author: p.author,
            cover_image: p.cover_image,
            status: p.status,
        },
        None => BlogInput::default(),
    });
    let saving = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let incomplete = RwSignal::new(false);

    let on_cover_upload = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.item(0)) else {
            return;
        };
        uploading.set(true);
        spawn_local(async move {
            match upload::api::upload_single_image(&file).await {
                Ok(url) => form.update(|f| f.cover_image = Some(url)),
                Err(e) => toasts.error(e.message),
            }
            uploading.set(false);
            input.set_value("");
        });
    };

    let on_save = move |_| {
        let input = form.get_untracked();
        if input.title.trim().is_empty() || input.content.trim().is_empty() {
            incomplete.set(true);
            return;
        }
        incomplete.set(false);
        saving.set(true);
        let id = editing_id.clone();
        store.save(id, input, move |ok| {
            saving.set(false);
            if ok {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="form">
            <div class="form__header">
                <h2 class="form__title">{title}</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>
                    {icon("close")}
                </button>
            </div>

            <Show when=move || incomplete.get()>
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">"Title and content are required"</span>
                </div>
            </Show>

            <div class="form__grid">
                <label class="form__field form__field--full">
                    <span class="form__label">"Title"</span>
                    <input
                        class="form__input"
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Author"</span>
                    <input
                        class="form__input"
                        prop:value=move || form.with(|f| f.author.clone())
                        on:input=move |ev| form.update(|f| f.author = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span class="form__label">"Status"</span>
                    <select
                        class="form__input"
                        prop:value=move || form.with(|f| f.status.as_str().to_string())
                        on:change=move |ev| form.update(|f| {
                            f.status = if event_target_value(&ev) == "Published" {
                                BlogStatus::Published
                            } else {
                                BlogStatus::Draft
                            };
                        })
                    >
                        <option value="Draft">"Draft"</option>
                        <option value="Published">"Published"</option>
                    </select>
                </label>
                <label class="form__field form__field--full">
                    <span class="form__label">"Excerpt"</span>
                    <textarea
                        class="form__input"
                        prop:value=move || form.with(|f| f.excerpt.clone())
                        on:input=move |ev| form.update(|f| f.excerpt = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__field form__field--full">
                    <span class="form__label">"Content"</span>
                    <textarea
                        class="form__input form__input--tall"
                        prop:value=move || form.with(|f| f.content.clone())
                        on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                    ></textarea>
                </label>
            </div>

            <div class="form__section">
                <label class="button button--secondary">
                    {icon("upload")}
                    {move || if uploading.get() { "Uploading..." } else { "Upload cover image" }}
                    <input type="file" accept="image/*" class="form__file-input" on:change=on_cover_upload />
                </label>
                {move || form.with(|f| f.cover_image.clone()).map(|src| view! {
                    <img class="form__cover-preview" src=src />
                })}
            </div>

            <div class="form__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || saving.get() || uploading.get()
                    on:click=on_save
                >
                    {move || if saving.get() { "Saving..." } else { "Save post" }}
                </button>
            </div>
        </div>
    }
}
