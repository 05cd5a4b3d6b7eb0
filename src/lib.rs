pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod formulas;
pub mod ranker;
pub mod species;
// cmd and reports are binary modules (in main.rs), out of the library surface.
