pub mod browse;
pub mod edit;
pub mod validate;
