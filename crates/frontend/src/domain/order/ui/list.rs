use contracts::domain::invoice::format_inr;
use contracts::domain::order::{Order, OrderStatus, OrderType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::dispatch::DispatchModal;
use crate::domain::order::invoice_pdf;
use crate::domain::order::store::OrdersStore;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_chip::StatusChip;
use crate::shared::date_utils::cell_date;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::toast::use_toasts;

impl CsvExportable for Order {
    fn headers() -> Vec<&'static str> {
        vec![
            "Order ID", "Buyer", "Email", "Type", "Items", "Total", "Status",
            "Payment", "Courier", "AWB", "Placed",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let tracking = self.tracking_data.as_ref();
        vec![
            self.id.clone(),
            self.user.name.clone(),
            self.user.email.clone(),
            self.order_type.as_str().to_string(),
            self.items.iter().map(|i| i.quantity).sum::<u32>().to_string(),
            format_inr(self.total_amount),
            self.status.label().to_string(),
            self.payment_status.clone(),
            tracking.map(|t| t.courier_name.clone()).unwrap_or_default(),
            tracking.map(|t| t.awb_code.clone()).unwrap_or_default(),
            cell_date(&self.created_at),
        ]
    }
}

fn parse_status(value: &str) -> Option<OrderStatus> {
    OrderStatus::ALL.iter().copied().find(|s| s.as_str() == value)
}

#[component]
#[allow(non_snake_case)]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let modals = use_modals();
    let store = OrdersStore::new(toasts);

    store.fetch();

    let filtered = move || {
        let term = ctx.search_term.get().to_lowercase();
        store
            .orders
            .get()
            .into_iter()
            .filter(|o| {
                term.is_empty()
                    || o.id.to_lowercase().contains(&term)
                    || o.user.name.to_lowercase().contains(&term)
                    || o.user.email.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let export = move |_| {
        let rows = filtered();
        if let Err(e) = export_to_csv(&rows, "orders.csv") {
            toasts.error(e);
        }
    };

    let open_dispatch = move |order_id: String| {
        modals.push(move |handle| {
            let order_id = order_id.clone();
            let close = Callback::new(move |_: ()| handle.close());
            let on_dispatched = Callback::new({
                let order_id = order_id.clone();
                move |tracking| store.record_dispatch(&order_id, tracking)
            });
            view! {
                <DispatchModal order_id=order_id on_dispatched=on_dispatched on_close=close />
            }
            .into_any()
        });
    };

    let download = move |order_id: String| {
        spawn_local(async move {
            if let Err(e) = invoice_pdf::download_invoice(&order_id).await {
                toasts.error(e.message);
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Orders" subtitle="B2B and B2C orders">
                <select
                    class="form__input form__input--narrow"
                    on:change=move |ev| {
                        store.status_filter.set(parse_status(&event_target_value(&ev)));
                        store.fetch();
                    }
                >
                    <option value="">"All statuses"</option>
                    {OrderStatus::ALL.iter().map(|s| view! {
                        <option value=s.as_str()>{s.label()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="form__input form__input--narrow"
                    on:change=move |ev| {
                        store.type_filter.set(match event_target_value(&ev).as_str() {
                            "B2B" => Some(OrderType::B2B),
                            "B2C" => Some(OrderType::B2C),
                            _ => None,
                        });
                        store.fetch();
                    }
                >
                    <option value="">"All types"</option>
                    <option value="B2B">"B2B"</option>
                    <option value="B2C">"B2C"</option>
                </select>
                <button class="button button--secondary" on:click=export>
                    {icon("download")}
                    "Export CSV"
                </button>
                <button class="button button--secondary" on:click=move |_| store.fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || store.error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || store.loading.get()>
                <div class="loading-banner">"Loading orders..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Order"</th>
                            <th class="table__header-cell">"Buyer"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Total"</th>
                            <th class="table__header-cell">"Payment"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Tracking"</th>
                            <th class="table__header-cell">"Placed"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered().into_iter().map(|order| {
                            let id = order.id.clone();
                            let short_id = id.chars().rev().take(6).collect::<String>()
                                .chars().rev().collect::<String>().to_uppercase();
                            let status = order.status;
                            let can_dispatch = status == OrderStatus::Approved
                                && order.tracking_data.is_none();
                            let id_for_status = id.clone();
                            let id_for_dispatch = id.clone();
                            let id_for_invoice = id.clone();
                            let tracking = order.tracking_data.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--mono">{format!("#{}", short_id)}</td>
                                    <td class="table__cell">
                                        <div class="table__primary">{order.user.name.clone()}</div>
                                        <div class="table__secondary">{order.user.email.clone()}</div>
                                    </td>
                                    <td class="table__cell">{order.order_type.as_str()}</td>
                                    <td class="table__cell">{format!("₹{}", format_inr(order.total_amount))}</td>
                                    <td class="table__cell">{order.payment_status.clone()}</td>
                                    <td class="table__cell">
                                        <StatusChip
                                            status=status.as_str().to_lowercase()
                                            label=status.label().to_string()
                                        />
                                        <select
                                            class="table__select"
                                            prop:value=status.as_str()
                                            on:change=move |ev| {
                                                if let Some(next) = parse_status(&event_target_value(&ev)) {
                                                    store.set_status(id_for_status.clone(), next);
                                                }
                                            }
                                        >
                                            {OrderStatus::ALL.iter().map(|s| view! {
                                                <option value=s.as_str() selected=*s == status>
                                                    {s.label()}
                                                </option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                    <td class="table__cell">
                                        {match tracking {
                                            Some(t) => view! {
                                                <div>
                                                    <div class="table__primary">{t.courier_name}</div>
                                                    <div class="table__secondary">{t.awb_code}</div>
                                                </div>
                                            }.into_any(),
                                            None => view! { <span class="table__secondary">"—"</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="table__cell">{cell_date(&order.created_at)}</td>
                                    <td class="table__cell table__cell--actions">
                                        <Show when=move || can_dispatch>
                                            <button
                                                class="button button--primary"
                                                on:click={
                                                    let id = id_for_dispatch.clone();
                                                    move |_| open_dispatch(id.clone())
                                                }
                                            >
                                                {icon("truck")}
                                                "Dispatch"
                                            </button>
                                        </Show>
                                        <button
                                            class="button button--ghost"
                                            on:click={
                                                let id = id_for_invoice.clone();
                                                move |_| download(id.clone())
                                            }
                                        >
                                            {icon("download")}
                                            "Invoice"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
