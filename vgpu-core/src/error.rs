/// Errors returned by [`Gpu::draw_triangles`][crate::Gpu::draw_triangles].
///
/// Every other mutator on [`Gpu`][crate::Gpu] follows the GL-style "bad handle is a silent no-op" contract and
/// returns nothing; this is the one call with a configuration precondition worth surfacing to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GpuError {
    #[error("draw_triangles called with no vertex puller bound")]
    NoActivePuller,

    #[error("draw_triangles called with no program bound")]
    NoActiveProgram,

    #[error("vertex count {count} is not >= 3 and divisible by 3")]
    InvalidVertexCount { count: u64 },
}
