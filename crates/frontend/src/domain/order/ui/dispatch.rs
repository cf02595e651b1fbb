//! Dispatch modal: dimensions -> rate quote -> courier -> shipment.
//!
//! All sequencing rules (quote invalidation on dimension edits, selection
//! survival across a failed dispatch) live in the contracts state machine;
//! this component only renders the current phase and feeds events in.

use contracts::domain::dispatch::{Dimension, DispatchMachine, DispatchPhase};
use contracts::domain::invoice::format_inr;
use contracts::domain::order::TrackingData;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::shipping;
use crate::shared::toast::use_toasts;

const DIMENSION_FIELDS: &[(Dimension, &str)] = &[
    (Dimension::Length, "Length (cm)"),
    (Dimension::Breadth, "Breadth (cm)"),
    (Dimension::Height, "Height (cm)"),
    (Dimension::Weight, "Weight (kg)"),
];

#[component]
#[allow(non_snake_case)]
pub fn DispatchModal(
    order_id: String,
    on_dispatched: Callback<TrackingData>,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let machine = RwSignal::new(DispatchMachine::new(order_id));

    let check_rates = move |_| {
        let Some(dims) = machine.try_update(|m| m.rates_requested()).flatten() else {
            return;
        };
        let order_id = machine.with_untracked(|m| m.order_id().to_string());
        spawn_local(async move {
            match shipping::api::calculate_rates(&order_id, &dims).await {
                Ok(couriers) => machine.update(|m| m.rates_received(couriers)),
                Err(e) => machine.update(|m| m.rates_failed(e.message)),
            }
        });
    };

    let dispatch = move |_| {
        let Some(request) = machine.try_update(|m| m.dispatch_started()).flatten() else {
            return;
        };
        spawn_local(async move {
            match shipping::api::create_shipment(&request).await {
                Ok(created) => {
                    machine.update(|m| m.dispatch_succeeded());
                    let tracking = TrackingData {
                        courier_name: created.courier_name.unwrap_or(request.courier_name),
                        awb_code: created.awb_code.unwrap_or_default(),
                    };
                    toasts.success("Shipment created");
                    on_dispatched.run(tracking);
                    on_close.run(());
                }
                Err(e) => machine.update(|m| m.dispatch_failed(e.message)),
            }
        });
    };

    let phase = move || machine.with(|m| m.phase());

    view! {
        <div class="dispatch">
            <div class="dispatch__header">
                <h2 class="dispatch__title">"Dispatch order"</h2>
                <button class="button button--ghost" on:click=move |_| on_close.run(())>"×"</button>
            </div>

            {move || machine.with(|m| m.error().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e.to_string()}</span>
                </div>
            }))}
            {move || machine.with(|m| m.notice().map(|n| view! {
                <div class="warning-box warning-box--info">
                    <span class="warning-box__text">{n.to_string()}</span>
                </div>
            }))}

            <div class="dispatch__dimensions">
                {DIMENSION_FIELDS.iter().map(|(field, label)| {
                    let field = *field;
                    let value = move || machine.with(|m| {
                        let d = m.dimensions();
                        let v = match field {
                            Dimension::Length => d.length,
                            Dimension::Breadth => d.breadth,
                            Dimension::Height => d.height,
                            Dimension::Weight => d.weight,
                        };
                        if v > 0.0 { v.to_string() } else { String::new() }
                    });
                    view! {
                        <label class="form__field">
                            <span class="form__label">{*label}</span>
                            <input
                                type="number"
                                min="0"
                                step="0.1"
                                class="form__input"
                                prop:value=value
                                on:input=move |ev| {
                                    let parsed = event_target_value(&ev).parse().unwrap_or(0.0);
                                    machine.update(|m| m.edit_dimension(field, parsed));
                                }
                            />
                        </label>
                    }
                }).collect_view()}
            </div>

            <button
                class="button button--primary"
                disabled=move || !machine.with(|m| m.can_check_rates())
                on:click=check_rates
            >
                {move || if phase() == DispatchPhase::RatesLoading {
                    "Checking rates..."
                } else {
                    "Check courier rates"
                }}
            </button>

            <Show when=move || machine.with(|m| !m.couriers().is_empty())>
                <div class="dispatch__couriers">
                    {move || machine.with(|m| {
                        let selected_id = m.selected().map(|c| c.courier_company_id);
                        m.couriers().iter().map(|c| {
                            let id = c.courier_company_id;
                            let class = if selected_id == Some(id) {
                                "dispatch__courier dispatch__courier--selected"
                            } else {
                                "dispatch__courier"
                            };
                            view! {
                                <button class=class on:click=move |_| machine.update(|m| m.select_courier(id))>
                                    <span class="dispatch__courier-name">{c.courier_name.clone()}</span>
                                    <span class="dispatch__courier-rate">{format!("₹{}", format_inr(c.rate))}</span>
                                    <span class="dispatch__courier-etd">{format!("ETD {}", c.etd)}</span>
                                    <span class="dispatch__courier-rating">{format!("★ {:.1}", c.rating)}</span>
                                </button>
                            }
                        }).collect_view()
                    })}
                </div>
            </Show>

            <div class="dispatch__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || !machine.with(|m| m.can_dispatch())
                    on:click=dispatch
                >
                    {move || if phase() == DispatchPhase::Dispatching {
                        "Dispatching..."
                    } else {
                        "Dispatch"
                    }}
                </button>
            </div>
        </div>
    }
}
