use contracts::domain::blog::{BlogInput, BlogPost, BlogStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::toast::ToastService;

#[derive(Clone, Copy)]
pub struct BlogsStore {
    pub posts: RwSignal<Vec<BlogPost>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
}

impl BlogsStore {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            posts: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            toasts,
        }
    }

    pub fn fetch(&self) {
        let store = *self;
        store.loading.set(true);
        store.error.set(None);
        spawn_local(async move {
            match api::fetch_posts().await {
                Ok(list) => store.posts.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }

    pub fn save(&self, id: Option<String>, input: BlogInput, on_done: impl Fn(bool) + 'static) {
        let store = *self;
        spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_post(id, &input).await,
                None => api::create_post(&input).await,
            };
            match result {
                Ok(_) => {
                    store.toasts.success(if id.is_some() { "Post updated" } else { "Post created" });
                    store.fetch();
                    on_done(true);
                }
                Err(e) => {
                    store.toasts.error(e.message);
                    on_done(false);
                }
            }
        });
    }

    /// Flip a post between draft and published.
    pub fn toggle_status(&self, post: BlogPost) {
        let next = match post.status {
            BlogStatus::Draft => BlogStatus::Published,
            BlogStatus::Published => BlogStatus::Draft,
        };
        let input = BlogInput {
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            author: post.author,
            cover_image: post.cover_image,
            status: next,
        };
        let store = *self;
        let id = post.id;
        spawn_local(async move {
            match api::update_post(&id, &input).await {
                Ok(updated) => {
                    store.posts.update(|list| {
                        if let Some(slot) = list.iter_mut().find(|p| p.id == id) {
                            *slot = updated;
                        }
                    });
                }
                Err(e) => store.toasts.error(e.message),
            }
        });
    }

    pub fn remove(&self, id: String) {
        let store = *self;
        spawn_local(async move {
            match api::delete_post(&id).await {
                Ok(()) => {
                    store.posts.update(|list| list.retain(|p| p.id != id));
                    store.toasts.success("Post deleted");
                }
                Err(e) => store.toasts.error(e.message),
            }
        });
    }
}
