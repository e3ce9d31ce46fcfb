pub mod config;
#[allow(clippy::module_inception)]
pub mod runner;
pub mod tokenizer;
