use leptos::prelude::*;

use super::global_context::use_app_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let auth = use_auth();

    let user_name = move || {
        auth.user
            .get()
            .map(|u| u.name)
            .unwrap_or_else(|| "Administrator".to_string())
    };

    view! {
        <div class="header">
            <button
                class="header__burger"
                on:click=move |_| ctx.sidebar_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>
            <h2 class="header__title">{move || ctx.active_tab.get().title()}</h2>
            <div class="header__search">
                {icon("search")}
                <input
                    type="text"
                    class="header__search-input"
                    placeholder="Search..."
                    prop:value=move || ctx.search_term.get()
                    on:input=move |ev| ctx.search_term.set(event_target_value(&ev))
                />
            </div>
            <div class="header__user">
                <span class="header__user-name">{user_name}</span>
                <button class="button button--ghost" on:click=move |_| auth.logout()>
                    {icon("logout")}
                    "Logout"
                </button>
            </div>
        </div>
    }
}
