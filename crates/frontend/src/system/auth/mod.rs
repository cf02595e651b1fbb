pub mod api;
pub mod context;
pub mod session_guard;
pub mod storage;
