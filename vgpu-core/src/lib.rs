//! A CPU-resident virtual GPU: opaque resource handles, a configurable draw pipeline, and a framebuffer.
//!
//! [`Gpu`] is the single entry point. It owns every buffer, vertex puller, and program created against it, plus
//! one framebuffer, and runs the fixed pipeline (vertex fetch, vertex shading, primitive assembly and near-plane
//! clipping, perspective divide and viewport mapping, rasterization, fragment shading, depth test) on
//! [`Gpu::draw_triangles`].

pub mod attribute;
pub mod buffer;
pub mod constants;
mod draw;
pub mod error;
pub mod framebuffer;
pub mod gpu;
pub mod handle;
pub mod program;
pub mod puller;

pub use attribute::{Attribute, AttributeType};
pub use constants::{EMPTY_ID, MAX_ATTRIBUTES, MAX_UNIFORMS};
pub use error::GpuError;
pub use framebuffer::Framebuffer;
pub use gpu::Gpu;
pub use handle::{BufferHandle, ProgramHandle, PullerHandle};
pub use program::{FragmentShader, InFragment, InVertex, OutFragment, OutVertex, Program, Uniform, Uniforms, VertexShader};
pub use puller::{Head, IndexType, Indexing, VertexPuller};
