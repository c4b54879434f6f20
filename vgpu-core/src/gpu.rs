//! The `Gpu` object: owner of every live resource, and the single entry point for the draw pipeline.

use slotmap::SlotMap;
use vgpu_math::{Mat4, Vec2, Vec3, Vec4};

use crate::attribute::AttributeType;
use crate::buffer::Buffer;
use crate::draw;
use crate::error::GpuError;
use crate::framebuffer::Framebuffer;
use crate::handle::{BufferHandle, BufferKey, ProgramHandle, ProgramKey, PullerHandle, PullerKey};
use crate::program::{FragmentShader, Program, Uniform, VertexShader};
use crate::puller::{Head, IndexType, Indexing, VertexPuller};

/// The virtual GPU. Owns every live buffer, vertex puller, and program, plus the single framebuffer, and exposes
/// the resource CRUD and the one draw entry point.
pub struct Gpu {
    buffers: SlotMap<BufferKey, Buffer>,
    pullers: SlotMap<PullerKey, VertexPuller>,
    programs: SlotMap<ProgramKey, Program>,
    framebuffer: Option<Framebuffer>,

    active_puller: Option<PullerKey>,
    active_program: Option<ProgramKey>,
}

impl Default for Gpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Gpu {
    pub fn new() -> Self {
        log::debug!("creating new Gpu instance");
        Self {
            buffers: SlotMap::with_key(),
            pullers: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            framebuffer: None,
            active_puller: None,
            active_program: None,
        }
    }

    // ---------------------------------------------------------------- buffers

    pub fn create_buffer(&mut self, size: usize) -> BufferHandle {
        let key = self.buffers.insert(Buffer::new(size));
        log::debug!("created buffer {key:?} ({size} bytes)");
        BufferHandle::from_key(key)
    }

    pub fn delete_buffer(&mut self, h: BufferHandle) {
        if self.buffers.remove(h.to_key()).is_some() {
            log::debug!("deleted buffer {:?}", h.to_key());
        }
    }

    pub fn is_buffer(&self, h: BufferHandle) -> bool {
        !h.is_empty() && self.buffers.contains_key(h.to_key())
    }

    pub fn set_buffer_data(&mut self, h: BufferHandle, offset: usize, src: &[u8]) {
        if let Some(buf) = self.buffers.get_mut(h.to_key()) {
            buf.set_data(offset, src);
        }
    }

    pub fn get_buffer_data(&self, h: BufferHandle, offset: usize, dst: &mut [u8]) {
        if let Some(buf) = self.buffers.get(h.to_key()) {
            buf.get_data(offset, dst);
        }
    }

    // ---------------------------------------------------------------- vertex pullers

    pub fn create_vertex_puller(&mut self) -> PullerHandle {
        let key = self.pullers.insert(VertexPuller::new());
        log::debug!("created vertex puller {key:?}");
        PullerHandle::from_key(key)
    }

    pub fn delete_vertex_puller(&mut self, h: PullerHandle) {
        if self.pullers.remove(h.to_key()).is_some() {
            log::debug!("deleted vertex puller {:?}", h.to_key());
        }
        if self.active_puller == Some(h.to_key()) {
            self.active_puller = None;
        }
    }

    pub fn is_vertex_puller(&self, h: PullerHandle) -> bool {
        !h.is_empty() && self.pullers.contains_key(h.to_key())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_vertex_puller_head(
        &mut self,
        h: PullerHandle,
        k: usize,
        attr_type: AttributeType,
        stride: usize,
        offset: usize,
        buffer: BufferHandle,
    ) {
        let Some(puller) = self.pullers.get_mut(h.to_key()) else { return };
        let Some(head) = puller.heads.get_mut(k) else { return };
        *head = Head {
            attr_type,
            buffer,
            offset,
            stride,
            enabled: head.enabled,
        };
    }

    pub fn set_vertex_puller_indexing(&mut self, h: PullerHandle, index_type: IndexType, buffer: BufferHandle) {
        if let Some(puller) = self.pullers.get_mut(h.to_key()) {
            puller.indexing = Some(Indexing { buffer, index_type, offset: 0 });
        }
    }

    pub fn enable_vertex_puller_head(&mut self, h: PullerHandle, k: usize) {
        if let Some(head) = self.pullers.get_mut(h.to_key()).and_then(|p| p.heads.get_mut(k)) {
            head.enabled = true;
        }
    }

    pub fn disable_vertex_puller_head(&mut self, h: PullerHandle, k: usize) {
        if let Some(head) = self.pullers.get_mut(h.to_key()).and_then(|p| p.heads.get_mut(k)) {
            head.enabled = false;
        }
    }

    pub fn bind_vertex_puller(&mut self, h: PullerHandle) {
        if self.pullers.contains_key(h.to_key()) {
            self.active_puller = Some(h.to_key());
        }
    }

    pub fn unbind_vertex_puller(&mut self) {
        self.active_puller = None;
    }

    // ---------------------------------------------------------------- programs

    pub fn create_program(&mut self) -> ProgramHandle {
        let key = self.programs.insert(Program::default());
        log::debug!("created program {key:?}");
        ProgramHandle::from_key(key)
    }

    pub fn delete_program(&mut self, h: ProgramHandle) {
        if self.programs.remove(h.to_key()).is_some() {
            log::debug!("deleted program {:?}", h.to_key());
        }
        if self.active_program == Some(h.to_key()) {
            self.active_program = None;
        }
    }

    pub fn is_program(&self, h: ProgramHandle) -> bool {
        !h.is_empty() && self.programs.contains_key(h.to_key())
    }

    pub fn attach_shaders(&mut self, h: ProgramHandle, vs: VertexShader, fs: FragmentShader) {
        if let Some(program) = self.programs.get_mut(h.to_key()) {
            program.vertex_shader = Some(vs);
            program.fragment_shader = Some(fs);
        }
    }

    pub fn set_vs2fs_type(&mut self, h: ProgramHandle, i: usize, ty: AttributeType) {
        if let Some(slot) = self.programs.get_mut(h.to_key()).and_then(|p| p.vs2fs.get_mut(i)) {
            *slot = ty;
        }
    }

    pub fn use_program(&mut self, h: ProgramHandle) {
        if self.programs.contains_key(h.to_key()) {
            self.active_program = Some(h.to_key());
        }
    }

    fn set_uniform(&mut self, h: ProgramHandle, id: usize, value: Uniform) {
        debug_assert!(id < crate::constants::MAX_UNIFORMS, "uniform id {id} out of range");
        if let Some(program) = self.programs.get_mut(h.to_key()) {
            program.uniforms.set(id, value);
        }
    }

    pub fn program_uniform_1f(&mut self, h: ProgramHandle, id: usize, value: f32) {
        self.set_uniform(h, id, Uniform::Float(value));
    }

    pub fn program_uniform_2f(&mut self, h: ProgramHandle, id: usize, value: Vec2) {
        self.set_uniform(h, id, Uniform::Vec2(value));
    }

    pub fn program_uniform_3f(&mut self, h: ProgramHandle, id: usize, value: Vec3) {
        self.set_uniform(h, id, Uniform::Vec3(value));
    }

    pub fn program_uniform_4f(&mut self, h: ProgramHandle, id: usize, value: Vec4) {
        self.set_uniform(h, id, Uniform::Vec4(value));
    }

    pub fn program_uniform_matrix_4f(&mut self, h: ProgramHandle, id: usize, value: Mat4) {
        self.set_uniform(h, id, Uniform::Mat4(value));
    }

    // ---------------------------------------------------------------- framebuffer

    pub fn create_framebuffer(&mut self, width: u32, height: u32) {
        log::debug!("created framebuffer {width}x{height}");
        self.framebuffer = Some(Framebuffer::new(width, height));
    }

    pub fn delete_framebuffer(&mut self) {
        if self.framebuffer.take().is_some() {
            log::debug!("deleted framebuffer");
        }
    }

    pub fn resize_framebuffer(&mut self, width: u32, height: u32) {
        match &mut self.framebuffer {
            Some(fb) => {
                log::debug!("resized framebuffer to {width}x{height}");
                fb.resize(width, height);
            },
            None => self.create_framebuffer(width, height),
        }
    }

    pub fn framebuffer_width(&self) -> u32 {
        self.framebuffer.as_ref().map_or(0, Framebuffer::width)
    }

    pub fn framebuffer_height(&self) -> u32 {
        self.framebuffer.as_ref().map_or(0, Framebuffer::height)
    }

    pub fn framebuffer_color(&self) -> &[[u8; 4]] {
        self.framebuffer.as_ref().map_or(&[], Framebuffer::color)
    }

    pub fn framebuffer_depth(&self) -> &[f32] {
        self.framebuffer.as_ref().map_or(&[], Framebuffer::depth)
    }

    pub fn clear(&mut self, color: Vec4) {
        if let Some(fb) = &mut self.framebuffer {
            fb.clear_color(color);
            fb.clear_depth(f32::MAX);
        }
    }

    // ---------------------------------------------------------------- draw

    /// Runs the full pipeline (F through J) against the bound puller, program, and framebuffer.
    pub fn draw_triangles(&mut self, num_vertices: u64) -> Result<(), GpuError> {
        let puller_key = self.active_puller.ok_or(GpuError::NoActivePuller)?;
        let program_key = self.active_program.ok_or(GpuError::NoActiveProgram)?;

        if num_vertices < 3 || num_vertices % 3 != 0 {
            return Err(GpuError::InvalidVertexCount { count: num_vertices });
        }

        let Some(framebuffer) = &mut self.framebuffer else {
            return Ok(());
        };
        let (width, height) = (framebuffer.width(), framebuffer.height());

        let puller = &self.pullers[puller_key];
        let program = &self.programs[program_key];

        let shaded = draw::vertex_process(puller, program, &program.uniforms, num_vertices, |h| self.buffers.get(h.to_key()));

        let clipped = draw::assemble_and_clip(&shaded);
        let mut fragments_shaded = 0usize;

        for tri in &clipped {
            let screen_tri = [
                draw::project_and_viewport(&tri[0], width, height),
                draw::project_and_viewport(&tri[1], width, height),
                draw::project_and_viewport(&tri[2], width, height),
            ];

            let fragments = draw::rasterize(&screen_tri, width, height, &program.vs2fs);

            for frag in &fragments {
                let Some(shaded_frag) = draw::shade_fragment(frag, program, &program.uniforms) else { continue };
                let Some(existing_depth) = framebuffer.depth_at(shaded_frag.x, shaded_frag.y) else { continue };
                if shaded_frag.depth < existing_depth {
                    framebuffer.write(shaded_frag.x, shaded_frag.y, shaded_frag.color, shaded_frag.depth);
                    fragments_shaded += 1;
                }
            }
        }

        log::trace!(
            "draw_triangles: {num_vertices} vertices in, {} triangles survived clipping, {fragments_shaded} fragments written",
            clipped.len(),
        );

        Ok(())
    }
}
