pub mod handlers;
pub mod pagination;
pub mod service;
pub mod store;
pub mod validation;
