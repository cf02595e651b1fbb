use chrono::Utc;
use contracts::domain::invoice::format_inr;
use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;

use crate::dashboards::metrics;
use crate::domain::order::store::OrdersStore;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
#[allow(non_snake_case)]
pub fn AnalyticsPage() -> impl IntoView {
    let toasts = use_toasts();
    let orders = OrdersStore::new(toasts);

    orders.fetch();

    // Days back from now; `None` means all time.
    let timeframe = RwSignal::new(Some(90_i64));
    let timeframes: &[(&str, Option<i64>)] =
        &[("30 days", Some(30)), ("90 days", Some(90)), ("12 months", Some(365)), ("All time", None)];

    let in_frame = move || -> Vec<Order> {
        orders
            .orders
            .with(|list| metrics::within_days(list, timeframe.get(), Utc::now()))
    };

    let monthly = move || metrics::monthly_revenue(&in_frame());
    let top = move || metrics::top_products(&in_frame(), 5);
    let by_status = move || {
        let frame = in_frame();
        OrderStatus::ALL
            .iter()
            .map(|s| (s.label(), metrics::count_by_status(&frame, *s)))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <PageHeader title="Analytics" subtitle="Sales and fulfilment trends">
                <div class="button-group">
                    {timeframes.iter().map(|(label, days)| {
                        let days = *days;
                        view! {
                            <button
                                class=move || if timeframe.get() == days {
                                    "button button--secondary button--selected"
                                } else {
                                    "button button--secondary"
                                }
                                on:click=move |_| timeframe.set(days)
                            >
                                {*label}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <button class="button button--secondary" on:click=move |_| orders.fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || orders.loading.get()>
                <div class="loading-banner">"Loading orders..."</div>
            </Show>

            <div class="analytics">
                <div class="analytics__panel">
                    <h3 class="analytics__title">"Revenue by month"</h3>
                    {move || {
                        let months = monthly();
                        let peak = months.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
                        if months.is_empty() {
                            return view! {
                                <div class="table__secondary">"No dated orders yet"</div>
                            }.into_any();
                        }
                        months.into_iter().map(|(label, total)| {
                            let width = if peak > 0.0 { total / peak * 100.0 } else { 0.0 };
                            view! {
                                <div class="analytics__row">
                                    <span class="analytics__label">{label}</span>
                                    <div class="analytics__track">
                                        <div class="analytics__bar" style=format!("width: {:.1}%", width)></div>
                                    </div>
                                    <span class="analytics__value">{format!("₹{}", format_inr(total))}</span>
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </div>

                <div class="analytics__panel">
                    <h3 class="analytics__title">"Top products by units"</h3>
                    {move || top().into_iter().map(|(name, units)| view! {
                        <div class="analytics__row">
                            <span class="analytics__label">{name}</span>
                            <span class="analytics__value">{format!("{} units", units)}</span>
                        </div>
                    }).collect_view()}
                </div>

                <div class="analytics__panel">
                    <h3 class="analytics__title">"Orders by status"</h3>
                    {move || by_status().into_iter().map(|(label, count)| view! {
                        <div class="analytics__row">
                            <span class="analytics__label">{label}</span>
                            <span class="analytics__value">{count}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
