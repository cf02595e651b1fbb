use contracts::domain::customer::Customer;
use contracts::domain::invoice::format_inr;
use contracts::domain::order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::customer::{api, store::CustomersStore};
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_chip::StatusChip;
use crate::shared::date_utils::cell_date;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

#[component]
#[allow(non_snake_case)]
pub fn CustomersPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let store = CustomersStore::new(toasts);

    store.fetch();

    let filtered = move || {
        let term = ctx.search_term.get().to_lowercase();
        store
            .customers
            .get()
            .into_iter()
            .filter(|c| {
                term.is_empty()
                    || c.name.to_lowercase().contains(&term)
                    || c.email.to_lowercase().contains(&term)
                    || c.phone.contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let selected = move || {
        ctx.selected_customer.get().and_then(|id| {
            store
                .customers
                .get()
                .into_iter()
                .find(|c| c.id == id)
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Customers" subtitle="B2C and B2B accounts">
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
                <div class="loading-banner">"Loading customers..."</div>
            </Show>

            {move || match selected() {
                Some(customer) => view! { <CustomerDetails customer=customer /> }.into_any(),
                None => view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Name"</th>
                                    <th class="table__header-cell">"Contact"</th>
                                    <th class="table__header-cell">"Type"</th>
                                    <th class="table__header-cell">"Total spent"</th>
                                    <th class="table__header-cell">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {filtered().into_iter().map(|c| {
                                    let id = c.id.clone();
                                    let type_label = if c.is_b2b() { "B2B" } else { "B2C" };
                                    let status = if c.active { "active" } else { "inactive" };
                                    view! {
                                        <tr
                                            class="table__row table__row--clickable"
                                            on:click=move |_| ctx.selected_customer.set(Some(id.clone()))
                                        >
                                            <td class="table__cell">
                                                <div class="table__primary">{c.name.clone()}</div>
                                                {c.company_name.clone().map(|n| view! {
                                                    <div class="table__secondary">{n}</div>
                                                })}
                                            </td>
                                            <td class="table__cell">
                                                <div class="table__primary">{c.email.clone()}</div>
                                                <div class="table__secondary">{c.phone.clone()}</div>
                                            </td>
                                            <td class="table__cell">{type_label}</td>
                                            <td class="table__cell">{format!("₹{}", format_inr(c.total_spent))}</td>
                                            <td class="table__cell">
                                                <StatusChip
                                                    status=status.to_string()
                                                    label=if c.active { "Active" } else { "Inactive" }.to_string()
                                                />
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn CustomerDetails(customer: Customer) -> impl IntoView {
    let ctx = use_app_context();
    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);

    let customer_id = customer.id.clone();
    spawn_local(async move {
        if let Ok(list) = api::fetch_customer_orders(&customer_id).await {
            orders.set(list);
        }
        loading.set(false);
    });

    let addresses = customer.addresses.clone();
    let type_label = if customer.is_b2b() { "B2B" } else { "B2C" };

    view! {
        <div class="customer-details">
            <button
                class="button button--ghost"
                on:click=move |_| ctx.selected_customer.set(None)
            >
                "← Back to customers"
            </button>

            <div class="customer-details__card">
                <h2 class="customer-details__name">{customer.name.clone()}</h2>
                <div class="customer-details__row">{customer.email.clone()}</div>
                <div class="customer-details__row">{customer.phone.clone()}</div>
                <div class="customer-details__row">{format!("Account type: {}", type_label)}</div>
                {customer.company_name.clone().map(|n| view! {
                    <div class="customer-details__row">{format!("Company: {}", n)}</div>
                })}
                {customer.gst_number.clone().map(|n| view! {
                    <div class="customer-details__row">{format!("GSTIN: {}", n)}</div>
                })}
                <div class="customer-details__row">
                    {format!("Total spent: ₹{}", format_inr(customer.total_spent))}
                </div>
            </div>

            <Show when={
                let has_addresses = !addresses.is_empty();
                move || has_addresses
            }>
                <div class="customer-details__card">
                    <h3 class="customer-details__subtitle">"Addresses"</h3>
                    {addresses.iter().map(|a| view! {
                        <div class="customer-details__row">{a.one_line()}</div>
                    }).collect_view()}
                </div>
            </Show>

            <div class="customer-details__card">
                <h3 class="customer-details__subtitle">"Order history"</h3>
                <Show when=move || loading.get()>
                    <div class="loading-banner">"Loading orders..."</div>
                </Show>
                <Show when=move || !loading.get() && orders.with(Vec::is_empty)>
                    <div class="table__secondary">"No orders yet"</div>
                </Show>
                {move || orders.get().into_iter().map(|o| view! {
                    <div class="customer-details__order">
                        <span class="customer-details__order-total">
                            {format!("₹{}", format_inr(o.total_amount))}
                        </span>
                        <StatusChip
                            status=o.status.as_str().to_lowercase()
                            label=o.status.label().to_string()
                        />
                        <span class="table__secondary">{cell_date(&o.created_at)}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
