//! Vector and matrix value types shared by the rest of the workspace.

pub mod base;

pub use base::matrix::*;
pub use base::vector::*;
