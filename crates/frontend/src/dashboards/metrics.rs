//! Pure aggregations over the order list, shared by the overview tiles
//! and the analytics charts. Cancelled orders never count as revenue.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, Utc};
use contracts::domain::order::{Order, OrderStatus};

/// Keep only orders placed within the last `days` days of `now`. Undated
/// orders are dropped by a bounded timeframe; `None` keeps everything.
pub fn within_days(orders: &[Order], days: Option<i64>, now: DateTime<Utc>) -> Vec<Order> {
    let Some(days) = days else {
        return orders.to_vec();
    };
    let cutoff = now - Duration::days(days);
    orders
        .iter()
        .filter(|o| o.created_at.is_some_and(|placed| placed >= cutoff))
        .cloned()
        .collect()
}

pub fn total_revenue(orders: &[Order]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total_amount)
        .sum()
}

pub fn count_by_status(orders: &[Order], status: OrderStatus) -> usize {
    orders.iter().filter(|o| o.status == status).count()
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Revenue per calendar month, oldest first. Orders without a placement
/// date are left out; months with no orders do not appear.
pub fn monthly_revenue(orders: &[Order]) -> Vec<(String, f64)> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for order in orders {
        if order.status == OrderStatus::Cancelled {
            continue;
        }
        if let Some(placed) = order.created_at {
            *buckets.entry((placed.year(), placed.month())).or_insert(0.0) += order.total_amount;
        }
    }
    buckets
        .into_iter()
        .map(|((year, month), total)| {
            (format!("{} {}", MONTHS[(month - 1) as usize], year), total)
        })
        .collect()
}

/// Best-selling products by unit count across non-cancelled orders.
pub fn top_products(orders: &[Order], limit: usize) -> Vec<(String, u32)> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();
    for order in orders {
        if order.status == OrderStatus::Cancelled {
            continue;
        }
        for item in &order.items {
            *counts.entry(item.name.clone()).or_insert(0) += item.quantity;
        }
    }
    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::order::OrderItem;

    fn order(status: OrderStatus, total: f64, ymd: (i32, u32, u32)) -> Order {
        Order {
            status,
            total_amount: total,
            created_at: Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 12, 0, 0).single(),
            ..Order::default()
        }
    }

    #[test]
    fn cancelled_orders_do_not_count_as_revenue() {
        let orders = vec![
            order(OrderStatus::Delivered, 1000.0, (2026, 1, 5)),
            order(OrderStatus::Cancelled, 9999.0, (2026, 1, 6)),
            order(OrderStatus::Pending, 500.0, (2026, 1, 7)),
        ];
        assert_eq!(total_revenue(&orders), 1500.0);
    }

    #[test]
    fn monthly_buckets_are_chronological_across_years() {
        let orders = vec![
            order(OrderStatus::Delivered, 100.0, (2026, 2, 1)),
            order(OrderStatus::Delivered, 200.0, (2025, 12, 1)),
            order(OrderStatus::Delivered, 50.0, (2026, 2, 15)),
        ];
        let months = monthly_revenue(&orders);
        assert_eq!(
            months,
            vec![("Dec 2025".to_string(), 200.0), ("Feb 2026".to_string(), 150.0)]
        );
    }

    #[test]
    fn undated_orders_are_skipped_in_monthly_buckets() {
        let mut undated = order(OrderStatus::Delivered, 100.0, (2026, 1, 1));
        undated.created_at = None;
        assert!(monthly_revenue(&[undated]).is_empty());
    }

    #[test]
    fn top_products_ranks_by_units_with_stable_ties() {
        let mut a = order(OrderStatus::Delivered, 0.0, (2026, 1, 1));
        a.items = vec![
            OrderItem { name: "ThinkPad T14".to_string(), quantity: 3, ..OrderItem::default() },
            OrderItem { name: "MacBook Air M1".to_string(), quantity: 5, ..OrderItem::default() },
        ];
        let mut b = order(OrderStatus::Cancelled, 0.0, (2026, 1, 2));
        b.items = vec![OrderItem { name: "ThinkPad T14".to_string(), quantity: 50, ..OrderItem::default() }];

        let ranked = top_products(&[a, b], 2);
        assert_eq!(
            ranked,
            vec![("MacBook Air M1".to_string(), 5), ("ThinkPad T14".to_string(), 3)]
        );
    }

    #[test]
    fn timeframe_filter_keeps_recent_and_drops_undated() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let recent = order(OrderStatus::Delivered, 100.0, (2026, 2, 20));
        let old = order(OrderStatus::Delivered, 200.0, (2025, 11, 1));
        let mut undated = order(OrderStatus::Delivered, 300.0, (2026, 2, 25));
        undated.created_at = None;

        let all = vec![recent, old, undated];
        let last_30 = within_days(&all, Some(30), now);
        assert_eq!(last_30.len(), 1);
        assert_eq!(last_30[0].total_amount, 100.0);
        assert_eq!(within_days(&all, None, now).len(), 3);
    }

    #[test]
    fn status_counts() {
        let orders = vec![
            order(OrderStatus::Pending, 0.0, (2026, 1, 1)),
            order(OrderStatus::Pending, 0.0, (2026, 1, 2)),
            order(OrderStatus::Shipped, 0.0, (2026, 1, 3)),
        ];
        assert_eq!(count_by_status(&orders, OrderStatus::Pending), 2);
        assert_eq!(count_by_status(&orders, OrderStatus::Delivered), 0);
    }
}
