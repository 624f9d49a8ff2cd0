// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{add,copy,export,fetch}.

mod add;     // src/gui/actions/add.rs
mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod fetch;   // src/gui/actions/fetch.rs

pub use add::add;
pub use copy::copy;
pub use export::export;
pub use fetch::fetch;
