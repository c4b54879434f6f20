//! A procedurally generated UV sphere, standing in for the original demo's embedded mesh asset.

use vgpu_math::Vec3;

/// One vertex: world-space position then world-space normal, matching the interleaved layout the Phong vertex
/// puller expects (`stride = 6 * size_of::<f32>()`).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

/// Builds a unit-radius UV sphere with `stacks` latitude bands and `slices` longitude bands, each sharing its
/// outward normal with its position (a sphere centered at the origin has `normal = normalize(position)`).
pub fn uv_sphere(stacks: u32, slices: u32) -> Mesh {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);

    for stack in 0..=stacks {
        let phi = std::f32::consts::PI * (stack as f32) / (stacks as f32);
        let (sin_phi, cos_phi) = phi.sin_cos();

        for slice in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * (slice as f32) / (slices as f32);
            let (sin_theta, cos_theta) = theta.sin_cos();

            let position = Vec3::new(sin_phi * cos_theta, cos_phi, sin_phi * sin_theta);
            vertices.push(MeshVertex {
                position: position.as_array(),
                normal: position.as_array(),
            });
        }
    }

    let mut indices = Vec::new();
    let row = slices + 1;

    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * row + slice;
            let b = a + row;
            let c = a + 1;
            let d = b + 1;

            indices.extend_from_slice(&[a, b, c]);
            indices.extend_from_slice(&[c, b, d]);
        }
    }

    Mesh { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_matches_stacks_and_slices() {
        let mesh = uv_sphere(4, 6);
        assert_eq!(mesh.vertices.len(), (4 + 1) * (6 + 1));
    }

    #[test]
    fn index_count_is_two_triangles_per_quad() {
        let mesh = uv_sphere(4, 6);
        assert_eq!(mesh.indices.len(), 4 * 6 * 6);
    }

    #[test]
    fn every_index_is_in_range() {
        let mesh = uv_sphere(4, 6);
        for &i in &mesh.indices {
            assert!((i as usize) < mesh.vertices.len());
        }
    }
}
