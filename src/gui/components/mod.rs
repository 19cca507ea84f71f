// src/gui/components/mod.rs
pub mod export_bar;
pub mod help_bar;
pub mod meta_bar;
pub mod record_table;
