pub mod builtin;
pub mod catalog;
pub mod engine;
pub mod normalize;
pub mod types;
