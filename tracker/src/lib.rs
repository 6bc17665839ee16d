pub mod controller;
pub mod export;
pub mod query;
pub mod store;
