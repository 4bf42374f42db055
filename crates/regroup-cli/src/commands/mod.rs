pub mod edit;
pub mod show;
pub mod store;
