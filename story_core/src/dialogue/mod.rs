//! Dialogue pages and the scripts that order them.

mod node;
mod script;

pub use node::*;
pub use script::*;
