use contracts::domain::product::{Product, ProductInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::toast::ToastService;

/// Inventory state: product rows plus loading/error flags. Mutations
/// refetch the list; deletes patch it in place.
#[derive(Clone, Copy)]
pub struct ProductsStore {
    pub products: RwSignal<Vec<Product>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
}

impl ProductsStore {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            products: RwSignal::new(Vec::new()),
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
            match api::fetch_products().await {
                Ok(list) => store.products.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }

    /// Server-side product search. An empty term falls back to the full
    /// listing.
    pub fn search(&self, term: String) {
        if term.trim().is_empty() {
            self.fetch();
            return;
        }
        let store = *self;
        store.loading.set(true);
        store.error.set(None);
        spawn_local(async move {
            match api::search_products(term.trim()).await {
                Ok(list) => store.products.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }

    /// Create or update depending on whether an id is given, then refetch.
    /// `on_done` receives success for UI branching (closing the modal).
    pub fn save(&self, id: Option<String>, input: ProductInput, on_done: impl Fn(bool) + 'static) {
        let store = *self;
        spawn_local(async move {
            let result = match &id {
                Some(id) => api::update_product(id, &input).await,
                None => api::create_product(&input).await,
            };
            match result {
                Ok(_) => {
                    store.toasts.success(if id.is_some() {
                        "Product updated"
                    } else {
                        "Product created"
                    });
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

    pub fn remove(&self, id: String) {
        let store = *self;
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(_) => {
                    store.products.update(|list| list.retain(|p| p.id != id));
                    store.toasts.success("Product deleted");
                }
                Err(e) => store.toasts.error(e.message),
            }
        });
    }
}
