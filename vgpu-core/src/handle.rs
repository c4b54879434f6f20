//! Opaque resource handles.
//!
//! Each kind of resource (buffer, vertex puller, program) is backed by its own [`slotmap::SlotMap`], which tags
//! every live entry with a generation counter. A handle is just that key's bit pattern packed into a `u64`: no
//! pointer is ever exposed, validation is an O(1) generation compare inside the slot map, and a destroyed-then-reused
//! slot can never be mistaken for the object that used to live there.

use slotmap::{new_key_type, Key, KeyData};

use crate::constants::EMPTY_ID;

new_key_type! {
    pub(crate) struct BufferKey;
    pub(crate) struct PullerKey;
    pub(crate) struct ProgramKey;
}

/// Opaque handle to a [`Buffer`][crate::buffer::Buffer].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(u64);

/// Opaque handle to a [`VertexPuller`][crate::puller::VertexPuller].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PullerHandle(u64);

/// Opaque handle to a [`Program`][crate::program::Program].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(u64);

impl BufferHandle {
    /// The distinguished sentinel representing "no buffer". Never returned by a successful `create_buffer`.
    pub const EMPTY: BufferHandle = BufferHandle(EMPTY_ID);

    pub fn is_empty(self) -> bool {
        self.0 == EMPTY_ID
    }

    pub(crate) fn from_key(key: BufferKey) -> Self {
        Self(key.data().as_ffi())
    }

    pub(crate) fn to_key(self) -> BufferKey {
        KeyData::from_ffi(self.0).into()
    }
}

impl Default for BufferHandle {
    fn default() -> Self {
        BufferHandle::EMPTY
    }
}

impl PullerHandle {
    pub const EMPTY: PullerHandle = PullerHandle(EMPTY_ID);

    pub fn is_empty(self) -> bool {
        self.0 == EMPTY_ID
    }

    pub(crate) fn from_key(key: PullerKey) -> Self {
        Self(key.data().as_ffi())
    }

    pub(crate) fn to_key(self) -> PullerKey {
        KeyData::from_ffi(self.0).into()
    }
}

impl Default for PullerHandle {
    fn default() -> Self {
        PullerHandle::EMPTY
    }
}

impl ProgramHandle {
    pub const EMPTY: ProgramHandle = ProgramHandle(EMPTY_ID);

    pub fn is_empty(self) -> bool {
        self.0 == EMPTY_ID
    }

    pub(crate) fn from_key(key: ProgramKey) -> Self {
        Self(key.data().as_ffi())
    }

    pub(crate) fn to_key(self) -> ProgramKey {
        KeyData::from_ffi(self.0).into()
    }
}

impl Default for ProgramHandle {
    fn default() -> Self {
        ProgramHandle::EMPTY
    }
}
