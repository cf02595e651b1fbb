use contracts::domain::complaint::{Complaint, ComplaintStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::toast::ToastService;

/// In-place status patch. Idempotent; unknown ids do nothing.
pub fn patch_status(complaints: &mut [Complaint], id: &str, status: ComplaintStatus) -> bool {
    match complaints.iter_mut().find(|c| c.id == id) {
        Some(c) if c.status != status => {
            c.status = status;
            true
        }
        _ => false,
    }
}

#[derive(Clone, Copy)]
pub struct ComplaintsStore {
    pub complaints: RwSignal<Vec<Complaint>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    toasts: ToastService,
}

impl ComplaintsStore {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            complaints: RwSignal::new(Vec::new()),
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
            match api::fetch_complaints().await {
                Ok(list) => store.complaints.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }

    /// Optimistic update: patch the row first, roll back on failure.
    pub fn set_status(&self, id: String, status: ComplaintStatus) {
        let store = *self;
        let previous = self
            .complaints
            .with_untracked(|list| list.iter().find(|c| c.id == id).map(|c| c.status));
        let Some(previous) = previous else { return };
        if previous == status {
            return;
        }
        store.complaints.update(|list| {
            patch_status(list, &id, status);
        });
        spawn_local(async move {
            match api::update_complaint_status(&id, status).await {
                Ok(()) => store.toasts.success(format!("Complaint marked {}", status.label())),
                Err(e) => {
                    store.complaints.update(|list| {
                        patch_status(list, &id, previous);
                    });
                    store.toasts.error(e.message);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(id: &str, status: ComplaintStatus) -> Complaint {
        Complaint {
            id: id.to_string(),
            status,
            ..Complaint::default()
        }
    }

    #[test]
    fn patch_is_idempotent() {
        let mut list = vec![complaint("a", ComplaintStatus::Resolved)];
        assert!(!patch_status(&mut list, "a", ComplaintStatus::Resolved));
    }

    #[test]
    fn patch_changes_only_the_target() {
        let mut list = vec![
            complaint("a", ComplaintStatus::Open),
            complaint("b", ComplaintStatus::Open),
        ];
        assert!(patch_status(&mut list, "a", ComplaintStatus::InProgress));
        assert_eq!(list[0].status, ComplaintStatus::InProgress);
        assert_eq!(list[1].status, ComplaintStatus::Open);
    }
}
