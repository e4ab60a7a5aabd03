pub mod client;
pub mod suggestion_generator;
