pub mod api;
pub mod entities;
pub mod flow;
pub mod schemas;
pub mod store;
