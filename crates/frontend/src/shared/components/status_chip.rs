use leptos::prelude::*;

/// Colored status label used across the order/complaint/refurb tables.
/// The modifier class is derived from the wire tag so CSS can key on it.
#[component]
pub fn StatusChip(#[prop(into)] status: Signal<String>, #[prop(into)] label: Signal<String>) -> impl IntoView {
    let class = move || format!("status-chip status-chip--{}", status.get().to_lowercase());
    view! { <span class=class>{move || label.get()}</span> }
}
