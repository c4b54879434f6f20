//! Raw byte storage, the thing vertex-puller heads read their attributes out of.

/// An untyped block of bytes owned by the GPU. Buffers don't know what's in them; the
/// [`VertexPuller`][crate::puller::VertexPuller] heads that read from them carry the stride/offset/type
/// information needed to interpret the bytes.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    pub fn new(size: usize) -> Self {
        Self { data: vec![0u8; size] }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Overwrites `size` bytes starting at `offset`. Out-of-bounds writes are silently clipped to the buffer's
    /// extent, matching the GL-style no-op-on-bad-input contract the rest of the resource API follows.
    pub fn set_data(&mut self, offset: usize, src: &[u8]) {
        let Some(end) = offset.checked_add(src.len()) else { return };
        if offset > self.data.len() {
            return;
        }
        let end = end.min(self.data.len());
        let copy_len = end - offset;
        self.data[offset..end].copy_from_slice(&src[..copy_len]);
    }

    /// Reads `dst.len()` bytes starting at `offset`, clipping short if the buffer doesn't extend that far.
    pub fn get_data(&self, offset: usize, dst: &mut [u8]) {
        if offset > self.data.len() {
            return;
        }
        let end = (offset + dst.len()).min(self.data.len());
        let copy_len = end - offset;
        dst[..copy_len].copy_from_slice(&self.data[offset..end]);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_data() {
        let mut buf = Buffer::new(8);
        buf.set_data(0, &[1, 2, 3, 4]);
        let mut out = [0u8; 4];
        buf.get_data(0, &mut out);
        assert_eq!(out, [1, 2, 3, 4]);
    }

    #[test]
    fn set_data_clips_past_end() {
        let mut buf = Buffer::new(4);
        buf.set_data(2, &[9, 9, 9, 9]);
        assert_eq!(buf.as_slice(), &[0, 0, 9, 9]);
    }

    #[test]
    fn set_data_with_offset_past_end_is_noop() {
        let mut buf = Buffer::new(4);
        buf.set_data(10, &[1, 2]);
        assert_eq!(buf.as_slice(), &[0, 0, 0, 0]);
    }
}
