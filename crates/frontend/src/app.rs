use leptos::prelude::*;

use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use crate::system::auth::context::AuthContext;

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(ToastService::new());

    // Restore a persisted session before the first paint decision.
    auth.bootstrap();

    view! {
        <AppShell />
    }
}
