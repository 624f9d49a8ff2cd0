// src/gui/components/mod.rs
pub mod action_bar;
pub mod add_dialog;
pub mod filter_panel;
pub mod profile_detail;
pub mod profile_table;
pub mod tabs;
