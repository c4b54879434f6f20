//! Shader programs: the vertex/fragment closures a draw call runs, their uniform state, and the
//! vertex-shader-to-fragment-shader varying interface between them.

use vgpu_math::{Mat4, Vec2, Vec3, Vec4};

use crate::attribute::{Attribute, AttributeType};
use crate::constants::MAX_ATTRIBUTES;

/// A uniform value. Separate from [`Attribute`] because uniforms additionally carry whole matrices, which never
/// appear as a per-vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Uniform {
    #[default]
    Empty,
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Mat4(Mat4),
}

impl Uniform {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Uniform::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<Vec2> {
        match self {
            Uniform::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Uniform::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<Vec4> {
        match self {
            Uniform::Vec4(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_mat4(&self) -> Option<Mat4> {
        match self {
            Uniform::Mat4(v) => Some(*v),
            _ => None,
        }
    }
}

/// Fixed bank of uniform slots bound to a [`Program`]. Slot count is capped at
/// [`MAX_UNIFORMS`][crate::constants::MAX_UNIFORMS]; indexing past that bound is a debug-time assertion, matching
/// the rest of the resource API's "no real GPU lets you overrun this" contract.
#[derive(Debug, Clone)]
pub struct Uniforms {
    slots: [Uniform; crate::constants::MAX_UNIFORMS],
}

impl Default for Uniforms {
    fn default() -> Self {
        Self {
            slots: [Uniform::Empty; crate::constants::MAX_UNIFORMS],
        }
    }
}

impl Uniforms {
    pub fn get(&self, slot: usize) -> Uniform {
        debug_assert!(slot < self.slots.len(), "uniform slot {slot} out of range");
        self.slots.get(slot).copied().unwrap_or_default()
    }

    pub fn set(&mut self, slot: usize, value: Uniform) {
        debug_assert!(slot < self.slots.len(), "uniform slot {slot} out of range");
        if let Some(s) = self.slots.get_mut(slot) {
            *s = value;
        }
    }
}

/// A vertex as gathered by the vertex puller, ready to be handed to a vertex shader.
#[derive(Debug, Clone)]
pub struct InVertex {
    pub gl_vertex_id: u64,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

impl Default for InVertex {
    fn default() -> Self {
        Self {
            gl_vertex_id: 0,
            attributes: [Attribute::Empty; MAX_ATTRIBUTES],
        }
    }
}

/// A vertex shader's output: clip-space position plus whatever varyings it chooses to forward to rasterization.
#[derive(Debug, Clone)]
pub struct OutVertex {
    pub gl_position: Vec4,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

impl Default for OutVertex {
    fn default() -> Self {
        Self {
            gl_position: Vec4::default(),
            attributes: [Attribute::Empty; MAX_ATTRIBUTES],
        }
    }
}

/// A fragment as interpolated by the rasterizer, ready to be handed to a fragment shader.
#[derive(Debug, Clone)]
pub struct InFragment {
    pub gl_frag_coord: Vec4,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

impl Default for InFragment {
    fn default() -> Self {
        Self {
            gl_frag_coord: Vec4::default(),
            attributes: [Attribute::Empty; MAX_ATTRIBUTES],
        }
    }
}

/// A fragment shader's output: the color written into the framebuffer if it survives the depth test.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutFragment {
    pub gl_frag_color: Vec4,
}

pub type VertexShader = Box<dyn Fn(&InVertex, &Uniforms) -> OutVertex>;
pub type FragmentShader = Box<dyn Fn(&InFragment, &Uniforms) -> OutFragment>;

/// A shader program: the vertex/fragment shader pair, the declared type of each varying slot crossing between
/// them, and the uniform state they read from.
pub struct Program {
    pub vertex_shader: Option<VertexShader>,
    pub fragment_shader: Option<FragmentShader>,
    pub vs2fs: [AttributeType; MAX_ATTRIBUTES],
    pub uniforms: Uniforms,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            vertex_shader: None,
            fragment_shader: None,
            vs2fs: [AttributeType::Empty; MAX_ATTRIBUTES],
            uniforms: Uniforms::default(),
        }
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("vertex_shader", &self.vertex_shader.as_ref().map(|_| "<fn>"))
            .field("fragment_shader", &self.fragment_shader.as_ref().map(|_| "<fn>"))
            .field("vs2fs", &self.vs2fs)
            .field("uniforms", &self.uniforms)
            .finish()
    }
}
