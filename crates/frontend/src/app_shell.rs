//! Application shell: the auth gate and the main layout.

use leptos::prelude::*;

use crate::dashboards::analytics::AnalyticsPage;
use crate::dashboards::overview::DashboardPage;
use crate::domain::blog::ui::BlogsPage;
use crate::domain::complaint::ui::ComplaintsPage;
use crate::domain::customer::ui::CustomersPage;
use crate::domain::order::ui::list::OrdersPage;
use crate::domain::product::ui::list::InventoryPage;
use crate::domain::refurb::ui::RefurbishmentPage;
use crate::domain::testimonial::ui::TestimonialsPage;
use crate::domain::warehouse::ui::WarehousePage;
use crate::layout::global_context::{use_app_context, Tab};
use crate::layout::header::Header;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::shared::modal_stack::ModalHost;
use crate::shared::toast::ToastHost;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();

    let center = move || match ctx.active_tab.get() {
        Tab::Dashboard => view! { <DashboardPage /> }.into_any(),
        Tab::Inventory => view! { <InventoryPage /> }.into_any(),
        Tab::Orders => view! { <OrdersPage /> }.into_any(),
        Tab::Warehouse => view! { <WarehousePage /> }.into_any(),
        Tab::Refurbishment => view! { <RefurbishmentPage /> }.into_any(),
        Tab::Customers => view! { <CustomersPage /> }.into_any(),
        Tab::Complaints => view! { <ComplaintsPage /> }.into_any(),
        Tab::Testimonials => view! { <TestimonialsPage /> }.into_any(),
        Tab::Blogs => view! { <BlogsPage /> }.into_any(),
        Tab::Analytics => view! { <AnalyticsPage /> }.into_any(),
    };

    view! {
        <Shell
            left=view! { <Sidebar /> }.into_any()
            top=view! { <Header /> }.into_any()
            center=view! { <div class="page-host">{center}</div> }.into_any()
        />
        <ModalHost />
        <ToastHost />
    }
}

/// Auth gate: login page for anonymous visitors, the dashboard otherwise.
#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.user.get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
