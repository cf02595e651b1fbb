use contracts::domain::order::TrackingData;
use contracts::domain::refurb::{RefurbRequest, RefurbStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{self, Leg};
use crate::shared::toast::ToastService;

fn replace(list: &mut Vec<RefurbRequest>, updated: RefurbRequest) {
    if let Some(slot) = list.iter_mut().find(|r| r.id == updated.id) {
        *slot = updated;
    }
}

#[derive(Clone, Copy)]
pub struct RefurbStore {
    pub requests: RwSignal<Vec<RefurbRequest>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
}

impl RefurbStore {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            requests: RwSignal::new(Vec::new()),
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
            match api::fetch_refurb_requests().await {
                Ok(list) => store.requests.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }

    /// Move a request one step forward in the pipeline. No-op when it is
    /// already completed; the step itself comes from the status, never
    /// from the UI.
    pub fn advance(&self, id: String, current: RefurbStatus) {
        let Some(next) = current.next() else { return };
        let store = *self;
        spawn_local(async move {
            match api::update_refurb_status(&id, next).await {
                Ok(updated) => {
                    store.requests.update(|list| replace(list, updated));
                    store.toasts.success(format!("Request moved to {}", next.label()));
                }
                Err(e) => store.toasts.error(e.message),
            }
        });
    }

    /// Record a dispatched shipment leg, replacing the row with whatever
    /// state the backend answers with.
    pub fn record_shipment(&self, id: String, leg: Leg, tracking: TrackingData) {
        let store = *self;
        spawn_local(async move {
            match api::record_shipment(&id, leg, &tracking).await {
                Ok(updated) => store.requests.update(|list| replace(list, updated)),
                Err(e) => store.toasts.error(e.message),
            }
        });
    }
}
