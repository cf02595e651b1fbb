use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard stat tile: label, icon, preformatted value, optional subtitle.
#[component]
pub fn StatCard(
    label: String,
    icon_name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let subtitle_view = move || {
        subtitle
            .get()
            .map(|s| view! { <div class="stat-card__subtitle">{s}</div> })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {subtitle_view}
            </div>
        </div>
    }
}
