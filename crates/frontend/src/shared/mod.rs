pub mod api;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod modal_stack;
pub mod toast;
