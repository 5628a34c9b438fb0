pub mod entity;
pub mod filter;
pub mod link;
pub mod query;
pub mod registry;
pub mod types;
