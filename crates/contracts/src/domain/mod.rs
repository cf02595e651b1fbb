pub mod blog;
pub mod complaint;
pub mod customer;
pub mod dispatch;
pub mod invoice;
pub mod order;
pub mod product;
pub mod refurb;
pub mod shipping;
pub mod testimonial;
pub mod warehouse;
