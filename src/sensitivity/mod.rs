//! Re-solving a subtree while sweeping one resource.

mod config;
mod result;
mod sweep;

pub use config::*;
pub use result::*;
pub use sweep::*;
