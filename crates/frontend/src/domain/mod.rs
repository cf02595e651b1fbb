pub mod blog;
pub mod complaint;
pub mod customer;
pub mod order;
pub mod product;
pub mod refurb;
pub mod shipping;
pub mod testimonial;
pub mod upload;
pub mod warehouse;
