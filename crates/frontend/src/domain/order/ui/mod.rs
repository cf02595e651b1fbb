pub mod dispatch;
pub mod list;
