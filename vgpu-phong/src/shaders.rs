//! The Phong vertex/fragment shaders: procedural stripe-and-snow diffuse color, Phong diffuse + specular lighting.

use vgpu_core::{Attribute, InFragment, InVertex, OutFragment, OutVertex};
use vgpu_math::{Vec3, Vec4};

const SHININESS: f32 = 40.0;

/// Reads attribute 0 (world-space position) and transforms it to clip space via uniform 0 (view) and uniform 1
/// (projection); forwards position and normal unchanged as varyings 0 and 1 so the fragment shader can light in
/// world space.
pub fn phong_vs(input: &InVertex, uniforms: &vgpu_core::Uniforms) -> OutVertex {
    let position = input.attributes[0].as_vec3().unwrap_or_default();
    let normal = input.attributes[1].as_vec3().unwrap_or_default();

    let view = uniforms.get(0).as_mat4().unwrap_or(vgpu_math::Mat4::IDENTITY);
    let proj = uniforms.get(1).as_mat4().unwrap_or(vgpu_math::Mat4::IDENTITY);

    let mut out = OutVertex {
        gl_position: proj * (view * Vec4::from3(position, 1.0)),
        ..Default::default()
    };
    out.attributes[0] = Attribute::Vec3(position);
    out.attributes[1] = Attribute::Vec3(normal);
    out
}

/// Clamps to `[0, 1]`, matching the reference shader's `fit_color`.
fn fit_color(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

fn fit_color4(c: Vec4) -> Vec4 {
    Vec4::new(fit_color(c.x), fit_color(c.y), fit_color(c.z), fit_color(c.w))
}

pub fn phong_fs(input: &InFragment, uniforms: &vgpu_core::Uniforms) -> OutFragment {
    let position = input.attributes[0].as_vec3().unwrap_or_default();
    let normal = input.attributes[1].as_vec3().unwrap_or_default();

    let white = Vec4::new(1.0, 1.0, 1.0, 1.0);
    let green = Vec4::new(0.0, 0.5, 0.0, 1.0);
    let yellow = Vec4::new(1.0, 1.0, 0.0, 1.0);

    // Planar sine-stripe texture in xy: 10 bands alternating green/yellow, wavy with amplitude 0.1.
    let wobble = (position.x + (position.y * 10.0).sin() * 0.1) * 5.0;
    let texture = wobble.fract();
    let mut color = if texture > 0.5 || (texture < 0.0 && texture > -0.5) { yellow } else { green };

    // Snow cap: blend toward white based on how vertical the normal points, t = y^2.
    if normal.y > 0.0 {
        let n = normal.norm();
        let t = n.y * n.y;
        color = color + (white - color) * t;
    }

    let light_pos = uniforms.get(2).as_vec3().unwrap_or_default();
    let camera_pos = uniforms.get(3).as_vec3().unwrap_or_default();

    let light_vec = (light_pos - position).norm();
    let normal_vec = normal.norm();
    let diffuse = fit_color(normal_vec.dot(&light_vec));

    color = color * diffuse;

    let camera_vec = (camera_pos - position).norm();
    if diffuse != 0.0 && camera_vec.dot(&normal_vec) != 0.0 {
        let reflect = (normal_vec * (2.0 * diffuse) - light_vec).norm();
        let spec = camera_vec.dot(&reflect).max(0.0).powf(SHININESS);
        color = color + white * spec;
    }

    OutFragment {
        gl_frag_color: fit_color4(color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_color_clamps_above_one() {
        assert_eq!(fit_color(1.5), 1.0);
    }

    #[test]
    fn fit_color_clamps_below_zero() {
        assert_eq!(fit_color(-0.2), 0.0);
    }
}
