// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod keys;

pub use app::run;
