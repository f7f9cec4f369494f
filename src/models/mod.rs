pub mod project;
pub mod reference;
pub mod user;
