use contracts::domain::warehouse::{Warehouse, WarehouseInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::toast::ToastService;

#[derive(Clone, Copy)]
pub struct WarehousesStore {
    pub warehouses: RwSignal<Vec<Warehouse>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
}

impl WarehousesStore {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            warehouses: RwSignal::new(Vec::new()),
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
            match api::fetch_warehouses().await {
                Ok(list) => store.warehouses.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }

    pub fn create(&self, input: WarehouseInput, on_done: impl Fn(bool) + 'static) {
        let store = *self;
        spawn_local(async move {
            match api::create_warehouse(&input).await {
                Ok(created) => {
                    store.warehouses.update(|list| list.push(created));
                    store.toasts.success("Warehouse created");
                    on_done(true);
                }
                Err(e) => {
                    store.toasts.error(e.message);
                    on_done(false);
                }
            }
        });
    }
}
