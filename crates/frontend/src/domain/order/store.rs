use contracts::domain::order::{Order, OrderStatus, OrderType, TrackingData};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::toast::ToastService;

/// Replace one order's status in place. Returns whether anything changed;
/// applying the same status twice is a no-op.
pub fn patch_status(orders: &mut [Order], id: &str, status: OrderStatus) -> bool {
    match orders.iter_mut().find(|o| o.id == id) {
        Some(order) if order.status != status => {
            order.status = status;
            true
        }
        _ => false,
    }
}

/// Record tracking data on a dispatched order without refetching the list.
pub fn patch_tracking(orders: &mut [Order], id: &str, tracking: TrackingData) {
    if let Some(order) = orders.iter_mut().find(|o| o.id == id) {
        order.tracking_data = Some(tracking);
        order.status = OrderStatus::Shipped;
    }
}

#[derive(Clone, Copy)]
pub struct OrdersStore {
    pub orders: RwSignal<Vec<Order>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Server-side list filters; `None` means no constraint.
    pub status_filter: RwSignal<Option<OrderStatus>>,
    pub type_filter: RwSignal<Option<OrderType>>,
    toasts: ToastService,
}

impl OrdersStore {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            orders: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            status_filter: RwSignal::new(None),
            type_filter: RwSignal::new(None),
            toasts,
        }
    }

    pub fn fetch(&self) {
        let store = *self;
        store.loading.set(true);
        store.error.set(None);
        let status = store.status_filter.get_untracked();
        let order_type = store.type_filter.get_untracked();
        spawn_local(async move {
            match api::fetch_orders(status, order_type).await {
                Ok(list) => store.orders.set(list),
                Err(e) => {
                    store.error.set(Some(e.message.clone()));
                    store.toasts.error(e.message);
                }
            }
            store.loading.set(false);
        });
    }

    /// Ask the backend for a transition, then patch the row with whatever
    /// status it answered with (which may differ from the requested one).
    pub fn set_status(&self, id: String, status: OrderStatus) {
        let store = *self;
        spawn_local(async move {
            match api::update_order_status(&id, status).await {
                Ok(updated) => {
                    store
                        .orders
                        .update(|list| {
                            patch_status(list, &id, updated.status);
                        });
                    store.toasts.success(format!("Order marked {}", updated.status.label()));
                }
                Err(e) => store.toasts.error(e.message),
            }
        });
    }

    pub fn record_dispatch(&self, id: &str, tracking: TrackingData) {
        let id = id.to_string();
        self.orders.update(|list| patch_tracking(list, &id, tracking));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            status,
            ..Order::default()
        }
    }

    #[test]
    fn patch_changes_only_the_named_order() {
        let mut orders = vec![order("a", OrderStatus::Pending), order("b", OrderStatus::Pending)];
        assert!(patch_status(&mut orders, "b", OrderStatus::Approved));
        assert_eq!(orders[0].status, OrderStatus::Pending);
        assert_eq!(orders[1].status, OrderStatus::Approved);
    }

    #[test]
    fn patch_is_idempotent() {
        let mut orders = vec![order("a", OrderStatus::Approved)];
        assert!(!patch_status(&mut orders, "a", OrderStatus::Approved));
        assert_eq!(orders[0].status, OrderStatus::Approved);
    }

    #[test]
    fn patch_unknown_id_is_a_noop() {
        let mut orders = vec![order("a", OrderStatus::Pending)];
        assert!(!patch_status(&mut orders, "missing", OrderStatus::Shipped));
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[test]
    fn tracking_patch_marks_the_order_shipped() {
        let mut orders = vec![order("a", OrderStatus::Approved)];
        patch_tracking(
            &mut orders,
            "a",
            TrackingData {
                courier_name: "Delhivery".to_string(),
                awb_code: "AWB123".to_string(),
            },
        );
        assert_eq!(orders[0].status, OrderStatus::Shipped);
        assert_eq!(orders[0].tracking_data.as_ref().unwrap().awb_code, "AWB123");
    }
}
