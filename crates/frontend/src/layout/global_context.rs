use leptos::prelude::*;

/// Dashboard screens, one per sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Inventory,
    Orders,
    Warehouse,
    Refurbishment,
    Customers,
    Complaints,
    Testimonials,
    Blogs,
    Analytics,
}

impl Tab {
    pub const ALL: &'static [Tab] = &[
        Tab::Dashboard,
        Tab::Inventory,
        Tab::Orders,
        Tab::Warehouse,
        Tab::Refurbishment,
        Tab::Customers,
        Tab::Complaints,
        Tab::Testimonials,
        Tab::Blogs,
        Tab::Analytics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Inventory => "Inventory",
            Tab::Orders => "Orders",
            Tab::Warehouse => "Warehouse",
            Tab::Refurbishment => "Refurbishment",
            Tab::Customers => "Customers",
            Tab::Complaints => "Complaints",
            Tab::Testimonials => "Testimonials",
            Tab::Blogs => "Blogs",
            Tab::Analytics => "Analytics",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Inventory => "inventory",
            Tab::Orders => "orders",
            Tab::Warehouse => "warehouse",
            Tab::Refurbishment => "refurb",
            Tab::Customers => "customers",
            Tab::Complaints => "complaints",
            Tab::Testimonials => "testimonials",
            Tab::Blogs => "blogs",
            Tab::Analytics => "analytics",
        }
    }
}

/// Cross-cutting UI state: active tab, header search term, sidebar state
/// and the entities selected for the detail views.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<Tab>,
    pub search_term: RwSignal<String>,
    pub sidebar_open: RwSignal<bool>,
    pub selected_customer: RwSignal<Option<String>>,
    pub selected_warehouse: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(Tab::Dashboard),
            search_term: RwSignal::new(String::new()),
            sidebar_open: RwSignal::new(true),
            selected_customer: RwSignal::new(None),
            selected_warehouse: RwSignal::new(None),
        }
    }

    /// Switch the active screen. The search term is per-screen in spirit,
    /// so it resets; a pending customer selection only survives within the
    /// Customers tab.
    pub fn activate(&self, tab: Tab) {
        self.active_tab.set(tab);
        self.search_term.set(String::new());
        if tab != Tab::Customers {
            self.selected_customer.set(None);
        }
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context")
}
