use contracts::domain::refurb::{RefurbStatus, ShipmentLeg};
use leptos::prelude::*;

use crate::domain::order::ui::dispatch::DispatchModal;
use crate::domain::refurb::api::Leg;
use crate::domain::refurb::store::RefurbStore;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_chip::StatusChip;
use crate::shared::date_utils::cell_date;
use crate::shared::icons::icon;
use crate::shared::modal_stack::use_modals;
use crate::shared::toast::use_toasts;

/// A dispatch is required before these statuses can advance; the button
/// opens the courier modal instead of calling the status endpoint.
fn pending_leg(status: RefurbStatus) -> Option<Leg> {
    match status {
        RefurbStatus::Approved => Some(Leg::ToWarehouse),
        RefurbStatus::InRefurb => Some(Leg::ToCustomer),
        _ => None,
    }
}

fn leg_line(leg: &Option<ShipmentLeg>) -> Option<String> {
    leg.as_ref()
        .map(|l| format!("{} · {}", l.courier_name, l.awb_code))
}

#[component]
#[allow(non_snake_case)]
pub fn RefurbishmentPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let modals = use_modals();
    let store = RefurbStore::new(toasts);

    store.fetch();

    let filtered = move || {
        let term = ctx.search_term.get().to_lowercase();
        store
            .requests
            .get()
            .into_iter()
            .filter(|r| {
                term.is_empty()
                    || r.issue.to_lowercase().contains(&term)
                    || r.order_id.to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let open_dispatch = move |request_id: String, order_id: String, leg: Leg| {
        modals.push(move |handle| {
            let request_id = request_id.clone();
            let order_id = order_id.clone();
            let close = Callback::new(move |_: ()| handle.close());
            let on_dispatched = Callback::new(move |tracking| {
                store.record_shipment(request_id.clone(), leg, tracking);
            });
            view! {
                <DispatchModal order_id=order_id on_dispatched=on_dispatched on_close=close />
            }
            .into_any()
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Refurbishment" subtitle="Repair pipeline">
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
                <div class="loading-banner">"Loading requests..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Order"</th>
                            <th class="table__header-cell">"Issue"</th>
                            <th class="table__header-cell">"Accessories"</th>
                            <th class="table__header-cell">"Shipments"</th>
                            <th class="table__header-cell">"Raised"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered().into_iter().map(|r| {
                            let status = r.status;
                            let id = r.id.clone();
                            let order_id = r.order_id.clone();
                            let to_warehouse = leg_line(&r.warehouse_shipment);
                            let to_customer = leg_line(&r.return_shipment);
                            let image_count = r.images.len();
                            let accessories = if r.accessories.is_empty() {
                                "—".to_string()
                            } else {
                                r.accessories.join(", ")
                            };
                            let action = match pending_leg(status) {
                                Some(leg) => {
                                    let id = id.clone();
                                    let order_id = order_id.clone();
                                    view! {
                                        <button
                                            class="button button--primary"
                                            on:click=move |_| open_dispatch(id.clone(), order_id.clone(), leg)
                                        >
                                            {icon("truck")}
                                            {match leg {
                                                Leg::ToWarehouse => "Ship to warehouse",
                                                Leg::ToCustomer => "Ship to customer",
                                            }}
                                        </button>
                                    }.into_any()
                                }
                                None => match status.next() {
                                    Some(next) => {
                                        let id = id.clone();
                                        view! {
                                            <button
                                                class="button button--secondary"
                                                on:click=move |_| store.advance(id.clone(), status)
                                            >
                                                {format!("Mark {}", next.label().to_lowercase())}
                                            </button>
                                        }.into_any()
                                    }
                                    None => view! {
                                        <span class="table__secondary">"Done"</span>
                                    }.into_any(),
                                },
                            };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--mono">{r.order_id.clone()}</td>
                                    <td class="table__cell table__cell--wrap">
                                        <div>{r.issue.clone()}</div>
                                        <Show when=move || { image_count > 0 }>
                                            <span class="table__secondary">
                                                {format!("{} photo(s) attached", image_count)}
                                            </span>
                                        </Show>
                                    </td>
                                    <td class="table__cell">{accessories}</td>
                                    <td class="table__cell">
                                        {to_warehouse.map(|line| view! {
                                            <div class="table__secondary">{format!("To warehouse: {}", line)}</div>
                                        })}
                                        {to_customer.map(|line| view! {
                                            <div class="table__secondary">{format!("To customer: {}", line)}</div>
                                        })}
                                    </td>
                                    <td class="table__cell">{cell_date(&r.created_at)}</td>
                                    <td class="table__cell">
                                        <StatusChip
                                            status=status.as_str().to_lowercase()
                                            label=status.label().to_string()
                                        />
                                    </td>
                                    <td class="table__cell table__cell--actions">{action}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
