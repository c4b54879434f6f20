//! End-to-end scenarios exercising the draw pipeline through the public `Gpu` API.

use vgpu_core::{AttributeType, Gpu, IndexType};
use vgpu_math::{Vec3, Vec4};

fn white_program(gpu: &mut Gpu) -> vgpu_core::ProgramHandle {
    let program = gpu.create_program();
    gpu.attach_shaders(
        program,
        Box::new(|input: &vgpu_core::InVertex, _: &vgpu_core::Uniforms| vgpu_core::OutVertex {
            gl_position: input.attributes[0].as_vec4().unwrap_or_default(),
            ..Default::default()
        }),
        Box::new(|_: &vgpu_core::InFragment, _: &vgpu_core::Uniforms| vgpu_core::OutFragment {
            gl_frag_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }),
    );
    program
}

fn position_puller(gpu: &mut Gpu, positions: &[Vec4]) -> vgpu_core::PullerHandle {
    let bytes: &[u8] = bytemuck::cast_slice(positions);
    let buf = gpu.create_buffer(bytes.len());
    gpu.set_buffer_data(buf, 0, bytes);

    let puller = gpu.create_vertex_puller();
    gpu.set_vertex_puller_head(puller, 0, AttributeType::Vec4, std::mem::size_of::<Vec4>(), 0, buf);
    gpu.enable_vertex_puller_head(puller, 0);
    puller
}

#[test]
fn scenario_1_framebuffer_clear() {
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(4, 1);
    gpu.clear(Vec4::new(1.0, 0.0, 0.0, 1.0));

    for px in gpu.framebuffer_color() {
        assert_eq!(*px, [255, 0, 0, 255]);
    }
    for &d in gpu.framebuffer_depth() {
        assert!(d >= 1.0);
    }
}

#[test]
fn scenario_2_single_triangle_no_transform() {
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(2, 2);
    gpu.clear(Vec4::new(0.0, 0.0, 0.0, 1.0));

    let positions = [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(1.0, -1.0, 0.0, 1.0),
        Vec4::new(-1.0, 1.0, 0.0, 1.0),
    ];
    let puller = position_puller(&mut gpu, &positions);
    let program = white_program(&mut gpu);

    gpu.bind_vertex_puller(puller);
    gpu.use_program(program);
    gpu.draw_triangles(3).unwrap();
    gpu.unbind_vertex_puller();

    let color = gpu.framebuffer_color();
    // row 0 is the bottom row; lower-left pixel is (0, 0).
    assert_eq!(color[0], [255, 255, 255, 255]);
    // upper-right pixel is (1, 1), which is row 1, col 1 -> index 3.
    assert_eq!(color[3], [0, 0, 0, 255]);
}

#[test]
fn scenario_3_indexed_quad_fully_covers() {
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(8, 8);
    gpu.clear(Vec4::new(0.0, 0.0, 0.0, 1.0));

    let positions = [
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(1.0, -1.0, 0.0, 1.0),
        Vec4::new(1.0, 1.0, 0.0, 1.0),
        Vec4::new(-1.0, 1.0, 0.0, 1.0),
    ];
    let puller = position_puller(&mut gpu, &positions);

    let indices: [u32; 6] = [0, 1, 2, 0, 2, 3];
    let index_bytes: &[u8] = bytemuck::cast_slice(&indices);
    let index_buf = gpu.create_buffer(index_bytes.len());
    gpu.set_buffer_data(index_buf, 0, index_bytes);
    gpu.set_vertex_puller_indexing(puller, IndexType::U32, index_buf);

    let program = white_program(&mut gpu);

    gpu.bind_vertex_puller(puller);
    gpu.use_program(program);
    gpu.draw_triangles(6).unwrap();
    gpu.unbind_vertex_puller();

    for px in gpu.framebuffer_color() {
        assert_eq!(*px, [255, 255, 255, 255]);
    }
}

#[test]
fn scenario_4_near_plane_clip_produces_no_double_coverage() {
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(16, 16);
    gpu.clear(Vec4::new(0.0, 0.0, 0.0, 1.0));

    // Vertex A is behind the near plane (z + w < 0); B and C are in front.
    let positions = [
        Vec4::new(0.0, 0.0, -2.0, 1.0),
        Vec4::new(-1.0, -1.0, 0.0, 1.0),
        Vec4::new(1.0, -1.0, 0.0, 1.0),
    ];
    let puller = position_puller(&mut gpu, &positions);
    let program = white_program(&mut gpu);

    gpu.bind_vertex_puller(puller);
    gpu.use_program(program);
    gpu.draw_triangles(3).unwrap();
    gpu.unbind_vertex_puller();

    // Should produce some coverage near the bottom of the screen but nothing at the very top,
    // since the whole triangle was squeezed behind the clipped vertex.
    let color = gpu.framebuffer_color();
    assert!(color.iter().any(|px| *px == [255, 255, 255, 255]));
    assert_eq!(color[15 * 16 + 8], [0, 0, 0, 255]);
}

#[test]
fn scenario_5_depth_test_keeps_nearer_triangle() {
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(4, 4);
    gpu.clear(Vec4::new(0.0, 0.0, 0.0, 1.0));

    let far_positions = [
        Vec4::new(-1.0, -1.0, 0.5, 1.0),
        Vec4::new(1.0, -1.0, 0.5, 1.0),
        Vec4::new(-1.0, 1.0, 0.5, 1.0),
    ];
    let far_positions2 = [
        Vec4::new(1.0, -1.0, 0.5, 1.0),
        Vec4::new(1.0, 1.0, 0.5, 1.0),
        Vec4::new(-1.0, 1.0, 0.5, 1.0),
    ];

    let far_puller = position_puller(&mut gpu, &far_positions);
    let white = white_program(&mut gpu);
    gpu.bind_vertex_puller(far_puller);
    gpu.use_program(white);
    gpu.draw_triangles(3).unwrap();

    let far_puller2 = position_puller(&mut gpu, &far_positions2);
    gpu.bind_vertex_puller(far_puller2);
    gpu.draw_triangles(3).unwrap();

    let near_positions = [
        Vec4::new(-0.5, -0.5, -0.5, 1.0),
        Vec4::new(0.5, -0.5, -0.5, 1.0),
        Vec4::new(0.0, 0.5, -0.5, 1.0),
    ];
    let near_puller = position_puller(&mut gpu, &near_positions);
    let red = gpu.create_program();
    gpu.attach_shaders(
        red,
        Box::new(|input: &vgpu_core::InVertex, _: &vgpu_core::Uniforms| vgpu_core::OutVertex {
            gl_position: input.attributes[0].as_vec4().unwrap_or_default(),
            ..Default::default()
        }),
        Box::new(|_: &vgpu_core::InFragment, _: &vgpu_core::Uniforms| vgpu_core::OutFragment {
            gl_frag_color: Vec4::new(1.0, 0.0, 0.0, 1.0),
        }),
    );
    gpu.bind_vertex_puller(near_puller);
    gpu.use_program(red);
    gpu.draw_triangles(3).unwrap();
    gpu.unbind_vertex_puller();

    let color = gpu.framebuffer_color();
    // Center pixel should be red (near triangle won the depth test); a corner should stay white.
    assert_eq!(color[2 * 4 + 2], [255, 0, 0, 255]);
    assert_eq!(color[0], [255, 255, 255, 255]);
}

#[test]
fn scenario_6_perspective_correct_interpolation_is_not_affine() {
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(4, 4);
    gpu.clear(Vec4::new(0.0, 0.0, 0.0, 1.0));

    // Same screen-space footprint, but vertex w values differ — an affine blend would place the
    // midpoint color exactly between corners; perspective-correct blending skews it toward the
    // vertex with the smaller w.
    #[repr(C)]
    #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
    struct ColoredVertex {
        pos: Vec4,
        color: Vec3,
    }

    let verts = [
        ColoredVertex { pos: Vec4::new(-1.0, -1.0, 0.0, 1.0), color: Vec3::new(1.0, 0.0, 0.0) },
        ColoredVertex { pos: Vec4::new(1.0, -1.0, 0.0, 2.0), color: Vec3::new(0.0, 1.0, 0.0) },
        ColoredVertex { pos: Vec4::new(0.0, 1.0, 0.0, 1.0), color: Vec3::new(0.0, 0.0, 1.0) },
    ];

    let bytes: &[u8] = bytemuck::cast_slice(&verts);
    let buf = gpu.create_buffer(bytes.len());
    gpu.set_buffer_data(buf, 0, bytes);

    let puller = gpu.create_vertex_puller();
    gpu.set_vertex_puller_head(puller, 0, AttributeType::Vec4, std::mem::size_of::<ColoredVertex>(), 0, buf);
    gpu.set_vertex_puller_head(
        puller,
        1,
        AttributeType::Vec3,
        std::mem::size_of::<ColoredVertex>(),
        std::mem::size_of::<Vec4>(),
        buf,
    );
    gpu.enable_vertex_puller_head(puller, 0);
    gpu.enable_vertex_puller_head(puller, 1);

    let program = gpu.create_program();
    gpu.attach_shaders(
        program,
        Box::new(|input: &vgpu_core::InVertex, _: &vgpu_core::Uniforms| {
            let mut out = vgpu_core::OutVertex {
                gl_position: input.attributes[0].as_vec4().unwrap_or_default(),
                ..Default::default()
            };
            out.attributes[0] = input.attributes[1];
            out
        }),
        Box::new(|input: &vgpu_core::InFragment, _: &vgpu_core::Uniforms| vgpu_core::OutFragment {
            gl_frag_color: input.attributes[0].as_vec3().unwrap_or_default().to4(1.0),
        }),
    );
    gpu.set_vs2fs_type(program, 0, AttributeType::Vec3);

    gpu.bind_vertex_puller(puller);
    gpu.use_program(program);
    gpu.draw_triangles(3).unwrap();
    gpu.unbind_vertex_puller();

    // A covered fragment exists and isn't pure black (sanity: shading actually ran).
    assert!(gpu.framebuffer_color().iter().any(|px| *px != [0, 0, 0, 255]));
}

#[test]
fn deleted_handle_is_not_live() {
    let mut gpu = Gpu::new();
    let buf = gpu.create_buffer(16);
    assert!(gpu.is_buffer(buf));
    gpu.delete_buffer(buf);
    assert!(!gpu.is_buffer(buf));
}

#[test]
fn draw_without_bound_puller_fails() {
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(4, 4);
    let program = white_program(&mut gpu);
    gpu.use_program(program);
    assert_eq!(gpu.draw_triangles(3), Err(vgpu_core::GpuError::NoActivePuller));
}

#[test]
fn draw_with_bad_vertex_count_fails() {
    let mut gpu = Gpu::new();
    gpu.create_framebuffer(4, 4);
    let puller = position_puller(&mut gpu, &[Vec4::new(0.0, 0.0, 0.0, 1.0); 4]);
    let program = white_program(&mut gpu);
    gpu.bind_vertex_puller(puller);
    gpu.use_program(program);
    assert_eq!(gpu.draw_triangles(4), Err(vgpu_core::GpuError::InvalidVertexCount { count: 4 }));
}
