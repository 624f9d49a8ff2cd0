// src/config/mod.rs
pub mod consts;
pub mod loader;
pub mod options;
pub mod state;
