//! Compile-time configuration of the pipeline.

/// Number of parallel vertex-puller heads, and the number of varying slots a program can declare.
pub const MAX_ATTRIBUTES: usize = 16;

/// Number of uniform slots available per program.
pub const MAX_UNIFORMS: usize = 16;

/// The sentinel handle value meaning "no object". No live resource is ever assigned this id.
pub const EMPTY_ID: u64 = 0;
