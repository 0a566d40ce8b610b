pub mod coverage;
pub mod install;
pub mod recipe;
