// src/core/mod.rs

pub mod net;
pub mod presence;
pub mod text;

pub use net::Backend;
