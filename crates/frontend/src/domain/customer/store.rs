use contracts::domain::customer::Customer;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::toast::ToastService;

#[derive(Clone, Copy)]
pub struct CustomersStore {
    pub customers: RwSignal<Vec<Customer>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
}

impl CustomersStore {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            customers: RwSignal::new(Vec::new()),
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
            match api::fetch_customers().await {
                Ok(list) => store.customers.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }
}
