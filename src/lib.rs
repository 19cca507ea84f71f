// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod data;
pub mod reshape;
pub mod session;

pub mod cli;
pub mod csv;
pub mod file;
pub mod gui;
pub mod render;

pub use error::{Error, Result};
