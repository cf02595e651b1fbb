use contracts::domain::complaint::ComplaintStatus;
use contracts::domain::invoice::format_inr;
use contracts::domain::order::OrderStatus;
use contracts::domain::refurb::RefurbStatus;
use leptos::prelude::*;

use crate::dashboards::metrics;
use crate::domain::complaint::store::ComplaintsStore;
use crate::domain::customer::store::CustomersStore;
use crate::domain::order::store::OrdersStore;
use crate::domain::product::store::ProductsStore;
use crate::domain::refurb::store::RefurbStore;
use crate::layout::global_context::{use_app_context, Tab};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
#[allow(non_snake_case)]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let orders = OrdersStore::new(toasts);
    let products = ProductsStore::new(toasts);
    let customers = CustomersStore::new(toasts);
    let complaints = ComplaintsStore::new(toasts);
    let refurbs = RefurbStore::new(toasts);

    orders.fetch();
    products.fetch();
    customers.fetch();
    complaints.fetch();
    refurbs.fetch();

    let refresh = move |_| {
        orders.fetch();
        products.fetch();
        customers.fetch();
        complaints.fetch();
        refurbs.fetch();
    };

    let revenue = Signal::derive(move || {
        orders.orders.with(|list| format!("₹{}", format_inr(metrics::total_revenue(list))))
    });
    let order_count = Signal::derive(move || orders.orders.with(Vec::len).to_string());
    let pending = Signal::derive(move || {
        orders
            .orders
            .with(|list| metrics::count_by_status(list, OrderStatus::Pending))
            .to_string()
    });
    let product_count = Signal::derive(move || products.products.with(Vec::len).to_string());
    let low_stock = Signal::derive(move || {
        products
            .products
            .with(|list| list.iter().filter(|p| p.stock <= 2).count())
            .to_string()
    });
    let stock_units = Signal::derive(move || {
        products
            .products
            .with(|list| list.iter().map(|p| p.stock).sum::<u32>())
            .to_string()
    });
    let avg_rating = Signal::derive(move || {
        products.products.with(|list| {
            let rated: Vec<f64> =
                list.iter().filter(|p| p.rating > 0.0).map(|p| p.rating).collect();
            if rated.is_empty() {
                "N/A".to_string()
            } else {
                format!("{:.1}", rated.iter().sum::<f64>() / rated.len() as f64)
            }
        })
    });
    let customer_count = Signal::derive(move || customers.customers.with(Vec::len).to_string());
    let open_refurbs = Signal::derive(move || {
        refurbs
            .requests
            .with(|list| list.iter().filter(|r| r.status != RefurbStatus::Completed).count())
            .to_string()
    });
    let open_complaints = Signal::derive(move || {
        complaints
            .complaints
            .with(|list| {
                list.iter()
                    .filter(|c| {
                        matches!(c.status, ComplaintStatus::Open | ComplaintStatus::InProgress)
                    })
                    .count()
            })
            .to_string()
    });

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Today at a glance">
                <button class="button button--secondary" on:click=refresh>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total revenue".to_string()
                    icon_name="analytics".to_string()
                    value=revenue
                    subtitle=Signal::derive(|| Some("Excluding cancelled orders".to_string()))
                />
                <StatCard
                    label="Orders".to_string()
                    icon_name="orders".to_string()
                    value=order_count
                    subtitle=Signal::derive(move || Some(format!("{} pending", pending.get())))
                />
                <StatCard
                    label="Products".to_string()
                    icon_name="inventory".to_string()
                    value=product_count
                    subtitle=Signal::derive(move || Some(format!("{} low on stock", low_stock.get())))
                />
                <StatCard
                    label="Units in stock".to_string()
                    icon_name="warehouse".to_string()
                    value=stock_units
                    subtitle=Signal::derive(move || Some(format!("Avg rating {}", avg_rating.get())))
                />
                <StatCard
                    label="Customers".to_string()
                    icon_name="customers".to_string()
                    value=customer_count
                />
                <StatCard
                    label="Open refurbs".to_string()
                    icon_name="refurb".to_string()
                    value=open_refurbs
                />
                <StatCard
                    label="Open complaints".to_string()
                    icon_name="complaints".to_string()
                    value=open_complaints
                />
            </div>

            <div class="quick-links">
                <button class="button button--secondary" on:click=move |_| ctx.activate(Tab::Orders)>
                    {icon("orders")}
                    "Go to orders"
                </button>
                <button class="button button--secondary" on:click=move |_| ctx.activate(Tab::Inventory)>
                    {icon("inventory")}
                    "Go to inventory"
                </button>
                <button class="button button--secondary" on:click=move |_| ctx.activate(Tab::Complaints)>
                    {icon("complaints")}
                    "Go to complaints"
                </button>
            </div>
        </div>
    }
}
