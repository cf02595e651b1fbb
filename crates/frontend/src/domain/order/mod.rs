pub mod api;
pub mod invoice_pdf;
pub mod store;
pub mod ui;
