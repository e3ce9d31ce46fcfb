pub mod runner;
pub mod templating;
