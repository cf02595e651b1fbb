use contracts::domain::complaint::ComplaintStatus;
use leptos::prelude::*;

use crate::domain::complaint::store::ComplaintsStore;
use crate::layout::global_context::use_app_context;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_chip::StatusChip;
use crate::shared::date_utils::cell_datetime;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

fn parse_status(value: &str) -> Option<ComplaintStatus> {
    ComplaintStatus::ALL.iter().copied().find(|s| s.as_str() == value)
}

#[component]
#[allow(non_snake_case)]
pub fn ComplaintsPage() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = use_toasts();
    let store = ComplaintsStore::new(toasts);

    store.fetch();

    let filtered = move || {
        let term = ctx.search_term.get().to_lowercase();
        store
            .complaints
            .get()
            .into_iter()
            .filter(|c| {
                term.is_empty()
                    || c.category.to_lowercase().contains(&term)
                    || c.description.to_lowercase().contains(&term)
                    || c.order_id.as_deref().unwrap_or("").to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let open_count = move || {
        store.complaints.with(|list| {
            list.iter()
                .filter(|c| matches!(c.status, ComplaintStatus::Open | ComplaintStatus::InProgress))
                .count()
        })
    };

    view! {
        <div class="page">
            <PageHeader
                title="Complaints"
                subtitle=Signal::derive(move || format!("{} open", open_count()))
            >
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
                <div class="loading-banner">"Loading complaints..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Order"</th>
                            <th class="table__header-cell">"Priority"</th>
                            <th class="table__header-cell">"Raised"</th>
                            <th class="table__header-cell">"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered().into_iter().map(|c| {
                            let id = c.id.clone();
                            let status = c.status;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{c.category.clone()}</td>
                                    <td class="table__cell table__cell--wrap">
                                        <div>{c.description.clone()}</div>
                                        {c.voice_message_url.clone().map(|url| view! {
                                            <audio controls class="table__audio" src=url></audio>
                                        })}
                                    </td>
                                    <td class="table__cell table__cell--mono">
                                        {c.order_id.clone().unwrap_or_else(|| "—".to_string())}
                                    </td>
                                    <td class="table__cell">{c.priority.clone()}</td>
                                    <td class="table__cell">{cell_datetime(&c.created_at)}</td>
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
                                                    store.set_status(id.clone(), next);
                                                }
                                            }
                                        >
                                            {ComplaintStatus::ALL.iter().map(|s| view! {
                                                <option value=s.as_str() selected=*s == status>
                                                    {s.label()}
                                                </option>
                                            }).collect_view()}
                                        </select>
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
