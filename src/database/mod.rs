pub mod pool;
pub mod project_store;
