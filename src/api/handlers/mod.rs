//! Route handlers.

mod notes;
mod system;

#[cfg(test)]
mod system_test;

pub use notes::*;
pub use system::*;
