pub mod domain;
pub mod envelope;
pub mod system;
pub mod validation;
