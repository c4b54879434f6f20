//! The demo rendering method: wires a procedural mesh and the Phong shaders into a `Gpu`.

use vgpu_core::{BufferHandle, Gpu, IndexType, ProgramHandle, PullerHandle};
use vgpu_math::{Mat4, Vec3};

use crate::mesh::{self, MeshVertex};
use crate::shaders::{phong_fs, phong_vs};

/// A Phong-lit, procedurally-textured sphere, ready to be drawn against a bound [`Gpu`].
///
/// Mirrors the resource-lifecycle shape of the reference rendering method: one vertex buffer, one index buffer,
/// one vertex puller, one program, created in [`PhongMethod::new`] and released by an explicit call to
/// [`PhongMethod::destroy`] (Rust's [`Drop`] can't reach the `&mut Gpu` these resources live in, so unlike the
/// original's destructor this cleanup has to be called explicitly).
pub struct PhongMethod {
    vertex_buffer: BufferHandle,
    index_buffer: BufferHandle,
    puller: PullerHandle,
    program: ProgramHandle,
    num_indices: u64,
}

impl PhongMethod {
    pub fn new(gpu: &mut Gpu) -> Self {
        let mesh = mesh::uv_sphere(24, 48);

        let vertex_bytes = bytemuck::cast_slice::<MeshVertex, u8>(&mesh.vertices);
        let index_bytes = bytemuck::cast_slice::<u32, u8>(&mesh.indices);

        let vertex_buffer = gpu.create_buffer(vertex_bytes.len());
        gpu.set_buffer_data(vertex_buffer, 0, vertex_bytes);

        let index_buffer = gpu.create_buffer(index_bytes.len());
        gpu.set_buffer_data(index_buffer, 0, index_bytes);

        let stride = std::mem::size_of::<MeshVertex>();
        let puller = gpu.create_vertex_puller();
        gpu.set_vertex_puller_head(puller, 0, vgpu_core::AttributeType::Vec3, stride, 0, vertex_buffer);
        gpu.set_vertex_puller_head(puller, 1, vgpu_core::AttributeType::Vec3, stride, 3 * std::mem::size_of::<f32>(), vertex_buffer);
        gpu.set_vertex_puller_indexing(puller, IndexType::U32, index_buffer);
        gpu.enable_vertex_puller_head(puller, 0);
        gpu.enable_vertex_puller_head(puller, 1);

        let program = gpu.create_program();
        gpu.attach_shaders(program, Box::new(phong_vs), Box::new(phong_fs));
        gpu.set_vs2fs_type(program, 0, vgpu_core::AttributeType::Vec3);
        gpu.set_vs2fs_type(program, 1, vgpu_core::AttributeType::Vec3);

        Self {
            vertex_buffer,
            index_buffer,
            puller,
            program,
            num_indices: mesh.indices.len() as u64,
        }
    }

    /// Clears to the reference method's mid-gray, then draws the mesh lit from `light` and viewed from `camera`.
    pub fn on_draw(&self, gpu: &mut Gpu, proj: Mat4, view: Mat4, light: Vec3, camera: Vec3) -> Result<(), vgpu_core::GpuError> {
        gpu.clear(vgpu_math::Vec4::new(0.502, 0.502, 0.502, 1.0));
        gpu.bind_vertex_puller(self.puller);
        gpu.use_program(self.program);
        gpu.program_uniform_matrix_4f(self.program, 0, view);
        gpu.program_uniform_matrix_4f(self.program, 1, proj);
        gpu.program_uniform_3f(self.program, 2, light);
        gpu.program_uniform_3f(self.program, 3, camera);
        let result = gpu.draw_triangles(self.num_indices);
        gpu.unbind_vertex_puller();
        result
    }

    pub fn destroy(self, gpu: &mut Gpu) {
        gpu.delete_buffer(self.vertex_buffer);
        gpu.delete_buffer(self.index_buffer);
        gpu.delete_vertex_puller(self.puller);
        gpu.delete_program(self.program);
    }
}
