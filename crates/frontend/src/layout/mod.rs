pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

/// Application frame: sidebar on the left, header plus page content in the
/// center column.
#[component]
pub fn Shell(left: AnyView, top: AnyView, center: AnyView) -> impl IntoView {
    view! {
        <div class="shell">
            <aside class="shell__left">{left}</aside>
            <div class="shell__main">
                <header class="shell__top">{top}</header>
                <main class="shell__center">{center}</main>
            </div>
        </div>
    }
}
