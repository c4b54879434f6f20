//! Per-vertex attribute values and the type tags used to declare their shape ahead of time.

use vgpu_math::{Vec2, Vec3, Vec4};

/// The shape of an attribute slot, declared before any concrete value exists: a vertex-puller head's read width,
/// or a varying slot in a program's vertex-shader-to-fragment-shader interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttributeType {
    #[default]
    Empty,
    Float,
    Vec2,
    Vec3,
    Vec4,
}

/// A concrete per-vertex value, self-tagging so [`InVertex`][crate::program::InVertex] and
/// [`OutVertex`][crate::program::OutVertex] can hold a fixed-size array of mixed-width attributes without a
/// parallel type-tag array to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Attribute {
    #[default]
    Empty,
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
}

impl Attribute {
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            Attribute::Empty => AttributeType::Empty,
            Attribute::Float(_) => AttributeType::Float,
            Attribute::Vec2(_) => AttributeType::Vec2,
            Attribute::Vec3(_) => AttributeType::Vec3,
            Attribute::Vec4(_) => AttributeType::Vec4,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Attribute::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<Vec2> {
        match self {
            Attribute::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Attribute::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<Vec4> {
        match self {
            Attribute::Vec4(v) => Some(*v),
            _ => None,
        }
    }

    /// Linear interpolation `self + (other - self) * t`, used for near-plane clipping and for the rasterizer's
    /// perspective-correct varying interpolation. Mismatched or `Empty` operands interpolate to `Empty`.
    pub fn lerp(&self, other: &Attribute, t: f32) -> Attribute {
        match (self, other) {
            (Attribute::Float(a), Attribute::Float(b)) => Attribute::Float(a + (b - a) * t),
            (Attribute::Vec2(a), Attribute::Vec2(b)) => Attribute::Vec2(*a + (*b - *a) * t),
            (Attribute::Vec3(a), Attribute::Vec3(b)) => Attribute::Vec3(*a + (*b - *a) * t),
            (Attribute::Vec4(a), Attribute::Vec4(b)) => Attribute::Vec4(*a + (*b - *a) * t),
            _ => Attribute::Empty,
        }
    }

    /// Weighted sum of three attributes sharing a type, used for barycentric interpolation in the rasterizer.
    /// Mismatched or `Empty` operands combine to `Empty`.
    pub fn barycentric(a: &Attribute, b: &Attribute, c: &Attribute, wa: f32, wb: f32, wc: f32) -> Attribute {
        match (a, b, c) {
            (Attribute::Float(a), Attribute::Float(b), Attribute::Float(c)) => {
                Attribute::Float(a * wa + b * wb + c * wc)
            }
            (Attribute::Vec2(a), Attribute::Vec2(b), Attribute::Vec2(c)) => {
                Attribute::Vec2(*a * wa + *b * wb + *c * wc)
            }
            (Attribute::Vec3(a), Attribute::Vec3(b), Attribute::Vec3(c)) => {
                Attribute::Vec3(*a * wa + *b * wb + *c * wc)
            }
            (Attribute::Vec4(a), Attribute::Vec4(b), Attribute::Vec4(c)) => {
                Attribute::Vec4(*a * wa + *b * wb + *c * wc)
            }
            _ => Attribute::Empty,
        }
    }
}

impl From<f32> for Attribute {
    fn from(v: f32) -> Self {
        Attribute::Float(v)
    }
}

impl From<Vec2> for Attribute {
    fn from(v: Vec2) -> Self {
        Attribute::Vec2(v)
    }
}

impl From<Vec3> for Attribute {
    fn from(v: Vec3) -> Self {
        Attribute::Vec3(v)
    }
}

impl From<Vec4> for Attribute {
    fn from(v: Vec4) -> Self {
        Attribute::Vec4(v)
    }
}
