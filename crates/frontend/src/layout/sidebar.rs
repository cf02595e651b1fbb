use leptos::prelude::*;

use super::global_context::{use_app_context, Tab};
use crate::shared::icons::icon;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || !ctx.sidebar_open.get()>
            <div class="sidebar__brand">
                <span class="sidebar__logo">{icon("inventory")}</span>
                <Show when=move || ctx.sidebar_open.get()>
                    <span class="sidebar__title">"Bright Laptop"</span>
                </Show>
            </div>
            <ul class="sidebar__list">
                {Tab::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        let is_active = move || ctx.active_tab.get() == tab;
                        view! {
                            <li class="sidebar__item">
                                <button
                                    class="sidebar__link"
                                    class:sidebar__link--active=is_active
                                    on:click=move |_| ctx.activate(tab)
                                >
                                    {icon(tab.icon_name())}
                                    <Show when=move || ctx.sidebar_open.get()>
                                        <span class="sidebar__label">{tab.title()}</span>
                                    </Show>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
