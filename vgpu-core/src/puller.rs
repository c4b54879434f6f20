//! Vertex puller configuration: how to gather a vertex's attributes out of vertex buffers.

use crate::attribute::AttributeType;
use crate::constants::MAX_ATTRIBUTES;
use crate::handle::BufferHandle;

/// The element width of an indexing buffer's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    U8,
    U16,
    U32,
}

impl IndexType {
    pub fn size(self) -> usize {
        match self {
            IndexType::U8 => 1,
            IndexType::U16 => 2,
            IndexType::U32 => 4,
        }
    }
}

/// One puller head: where to find an attribute's bytes for the `n`th vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Head {
    pub attr_type: AttributeType,
    pub buffer: BufferHandle,
    pub offset: usize,
    pub stride: usize,
    pub enabled: bool,
}

impl Default for Head {
    fn default() -> Self {
        Self {
            attr_type: AttributeType::Empty,
            buffer: BufferHandle::EMPTY,
            offset: 0,
            stride: 0,
            enabled: false,
        }
    }
}

/// Optional indirection through an index buffer: when set, the `n`th vertex pulled is not vertex `n` but
/// whatever index is stored at position `n` of the indexing buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indexing {
    pub buffer: BufferHandle,
    pub index_type: IndexType,
    pub offset: usize,
}

impl Default for Indexing {
    fn default() -> Self {
        Self {
            buffer: BufferHandle::EMPTY,
            index_type: IndexType::U8,
            offset: 0,
        }
    }
}

/// A vertex puller: a bank of up to [`MAX_ATTRIBUTES`] heads plus optional indexing, selecting how
/// `draw_triangles` gathers each vertex's attributes before handing them to the vertex shader.
#[derive(Debug, Clone)]
pub struct VertexPuller {
    pub heads: [Head; MAX_ATTRIBUTES],
    pub indexing: Option<Indexing>,
}

impl Default for VertexPuller {
    fn default() -> Self {
        Self {
            heads: [Head::default(); MAX_ATTRIBUTES],
            indexing: None,
        }
    }
}

impl VertexPuller {
    pub fn new() -> Self {
        Self::default()
    }
}
