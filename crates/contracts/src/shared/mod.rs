pub mod envelope;
pub mod pagination;
pub mod query;
