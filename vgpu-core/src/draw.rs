//! The draw pipeline proper: vertex fetch, vertex shading, clipping, projection, rasterization, and the ROP.
//!
//! Each stage is a free function taking and returning plain data; [`Gpu::draw_triangles`][crate::Gpu::draw_triangles]
//! threads one draw call's scratch state through them in order. None of this state outlives the call.

use vgpu_math::Vec4;

use crate::attribute::{Attribute, AttributeType};
use crate::buffer::Buffer;
use crate::constants::MAX_ATTRIBUTES;
use crate::program::{InVertex, OutVertex, Program, Uniforms};
use crate::puller::{IndexType, VertexPuller};

const EPSILON: f32 = 1.0 / 1024.0; // 2^-10

/// Stage F: gather each vertex's attributes through the puller's heads and run the vertex shader.
pub(crate) fn vertex_process<'a>(
    puller: &VertexPuller,
    program: &Program,
    uniforms: &Uniforms,
    num_vertices: u64,
    buffer_lookup: impl Fn(crate::handle::BufferHandle) -> Option<&'a Buffer>,
) -> Vec<OutVertex> {
    let vs = program.vertex_shader.as_deref();

    (0..num_vertices)
        .map(|i| {
            let index = fetch_index(puller, i, &buffer_lookup);
            let mut in_vertex = InVertex {
                gl_vertex_id: index,
                ..Default::default()
            };

            for (k, head) in puller.heads.iter().enumerate() {
                if !head.enabled || head.attr_type == AttributeType::Empty {
                    continue;
                }
                let Some(buf) = buffer_lookup(head.buffer) else { continue };
                let byte_offset = head.offset + head.stride * (index as usize);
                in_vertex.attributes[k] = read_attribute(buf, byte_offset, head.attr_type);
            }

            match vs {
                Some(vs) => vs(&in_vertex, uniforms),
                None => OutVertex::default(),
            }
        })
        .collect()
}

fn fetch_index<'a>(puller: &VertexPuller, i: u64, buffer_lookup: &impl Fn(crate::handle::BufferHandle) -> Option<&'a Buffer>) -> u64 {
    let Some(indexing) = &puller.indexing else { return i };
    let Some(buf) = buffer_lookup(indexing.buffer) else { return i };

    let width = indexing.index_type.size();
    let byte_offset = indexing.offset + width * (i as usize);
    let mut tmp = [0u8; 4];
    buf.get_data(byte_offset, &mut tmp[..width]);

    match indexing.index_type {
        IndexType::U8 => tmp[0] as u64,
        IndexType::U16 => u16::from_ne_bytes([tmp[0], tmp[1]]) as u64,
        IndexType::U32 => u32::from_ne_bytes([tmp[0], tmp[1], tmp[2], tmp[3]]) as u64,
    }
}

fn read_attribute(buf: &Buffer, offset: usize, ty: AttributeType) -> Attribute {
    let mut raw = [0u8; 16];
    let size = match ty {
        AttributeType::Empty => return Attribute::Empty,
        AttributeType::Float => 4,
        AttributeType::Vec2 => 8,
        AttributeType::Vec3 => 12,
        AttributeType::Vec4 => 16,
    };
    buf.get_data(offset, &mut raw[..size]);

    match ty {
        AttributeType::Empty => Attribute::Empty,
        AttributeType::Float => Attribute::Float(f32::from_ne_bytes(raw[0..4].try_into().unwrap())),
        AttributeType::Vec2 => Attribute::Vec2(vgpu_math::Vec2::new(
            f32::from_ne_bytes(raw[0..4].try_into().unwrap()),
            f32::from_ne_bytes(raw[4..8].try_into().unwrap()),
        )),
        AttributeType::Vec3 => Attribute::Vec3(vgpu_math::Vec3::new(
            f32::from_ne_bytes(raw[0..4].try_into().unwrap()),
            f32::from_ne_bytes(raw[4..8].try_into().unwrap()),
            f32::from_ne_bytes(raw[8..12].try_into().unwrap()),
        )),
        AttributeType::Vec4 => Attribute::Vec4(vgpu_math::Vec4::new(
            f32::from_ne_bytes(raw[0..4].try_into().unwrap()),
            f32::from_ne_bytes(raw[4..8].try_into().unwrap()),
            f32::from_ne_bytes(raw[8..12].try_into().unwrap()),
            f32::from_ne_bytes(raw[12..16].try_into().unwrap()),
        )),
    }
}

/// Is this clip-space vertex behind the near plane?
fn is_out(v: &OutVertex) -> bool {
    v.gl_position.z + v.gl_position.w < 0.0
}

/// Intersection of segment PQ with the plane `z + w = 0`.
fn clip_intersect(p: &OutVertex, q: &OutVertex) -> OutVertex {
    let t = (-p.gl_position.w - p.gl_position.z) / (q.gl_position.w - p.gl_position.w + q.gl_position.z - p.gl_position.z);

    let mut out = OutVertex {
        gl_position: p.gl_position + (q.gl_position - p.gl_position) * t,
        ..Default::default()
    };
    for i in 0..MAX_ATTRIBUTES {
        out.attributes[i] = p.attributes[i].lerp(&q.attributes[i], t);
    }
    out
}

/// Stage G: group into triangles and clip each against the near plane, preserving winding.
pub(crate) fn assemble_and_clip(vertices: &[OutVertex]) -> Vec<[OutVertex; 3]> {
    let mut out = Vec::with_capacity(vertices.len() / 3);

    for tri in vertices.chunks_exact(3) {
        let [a, b, c] = [&tri[0], &tri[1], &tri[2]];
        let mask = (is_out(a) as u8) | ((is_out(b) as u8) << 1) | ((is_out(c) as u8) << 2);

        match mask {
            0b000 => out.push([a.clone(), b.clone(), c.clone()]),
            0b111 => {}
            0b001 => {
                let n = clip_intersect(a, b);
                let n2 = clip_intersect(a, c);
                out.push([b.clone(), c.clone(), n.clone()]);
                out.push([c.clone(), n2, n]);
            }
            0b010 => {
                let n = clip_intersect(b, c);
                let n2 = clip_intersect(b, a);
                out.push([c.clone(), a.clone(), n.clone()]);
                out.push([a.clone(), n2, n]);
            }
            0b100 => {
                let n = clip_intersect(c, a);
                let n2 = clip_intersect(c, b);
                out.push([a.clone(), b.clone(), n.clone()]);
                out.push([b.clone(), n2, n]);
            }
            0b011 => {
                // A, B out; single triangle {N(C,A), N(C,B), C}
                let nca = clip_intersect(c, a);
                let ncb = clip_intersect(c, b);
                out.push([nca, ncb, c.clone()]);
            }
            0b101 => {
                // A, C out; single triangle {N(B,A), N(B,C), B} following the same "last in-vertex" pattern
                let nba = clip_intersect(b, a);
                let nbc = clip_intersect(b, c);
                out.push([nba, nbc, b.clone()]);
            }
            0b110 => {
                // B, C out; single triangle {N(A,B), N(A,C), A}
                let nab = clip_intersect(a, b);
                let nac = clip_intersect(a, c);
                out.push([nab, nac, a.clone()]);
            }
            _ => unreachable!(),
        }
    }

    out
}

/// A post-viewport vertex: screen-space (x, y) in pixels, NDC z, clip-space w preserved for perspective correction.
#[derive(Debug, Clone)]
pub(crate) struct ScreenVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

/// Stage H: perspective divide (x, y, z only) then map NDC to pixel space.
pub(crate) fn project_and_viewport(v: &OutVertex, width: u32, height: u32) -> ScreenVertex {
    let p = v.gl_position;
    let (x, y, z, w) = if p.w != 0.0 {
        (p.x / p.w, p.y / p.w, p.z / p.w, p.w)
    } else {
        (p.x, p.y, p.z, p.w)
    };

    ScreenVertex {
        x: (x + 1.0) / 2.0 * width as f32,
        y: (y + 1.0) / 2.0 * height as f32,
        z,
        w,
        attributes: v.attributes,
    }
}

/// Signed area of triangle ABC via the shoelace formula, scaled by 2 (callers only ever compare ratios so the
/// factor cancels).
fn signed_area(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    a.0 * (b.1 - c.1) + b.0 * (c.1 - a.1) + c.0 * (a.1 - b.1)
}

/// One rasterized fragment, prior to shading.
pub(crate) struct Fragment {
    pub x: u32,
    pub y: u32,
    pub z: f32,
    pub w: f32,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

/// Stage I: enumerate covered pixels and perspective-correctly interpolate depth, w, and each declared varying.
///
/// Per-column early exit depends on the triangle being convex and the scan direction being consistent; it is not
/// valid for non-convex shapes, but every primitive here is a triangle.
pub(crate) fn rasterize(tri: &[ScreenVertex; 3], width: u32, height: u32, vs2fs: &[AttributeType; MAX_ATTRIBUTES]) -> Vec<Fragment> {
    let [a, b, c] = tri;
    let (ax, ay) = (a.x, a.y);
    let (bx, by) = (b.x, b.y);
    let (cx, cy) = (c.x, c.y);

    let xmin = ax.min(bx).min(cx).floor().max(0.0) as i64;
    let xmax = ax.max(bx).max(cx).ceil().min(width as f32) as i64;
    let ymin = ay.min(by).min(cy).floor().max(0.0) as i64;
    let ymax = ay.max(by).max(cy).ceil().min(height as f32) as i64;

    let area = signed_area((ax, ay), (bx, by), (cx, cy)).abs();
    if area == 0.0 {
        return Vec::new();
    }

    let mut fragments = Vec::new();

    for x in xmin..xmax {
        let mut was_inside = false;
        for y in ymin..ymax {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;

            let w0 = signed_area((bx, by), (cx, cy), (px, py)).abs();
            let w1 = signed_area((cx, cy), (ax, ay), (px, py)).abs();
            let w2 = signed_area((ax, ay), (bx, by), (px, py)).abs();

            let sum = w0 + w1 + w2;
            let inside = area * (1.0 - EPSILON) <= sum && sum <= area * (1.0 + EPSILON);

            if !inside {
                if was_inside {
                    break;
                }
                continue;
            }
            was_inside = true;

            let (l0, l1, l2) = (w0 / area, w1 / area, w2 / area);

            let inv_w_sum = l0 / a.w + l1 / b.w + l2 / c.w;
            if inv_w_sum == 0.0 {
                continue;
            }

            let z = (l0 * a.z / a.w + l1 * b.z / b.w + l2 * c.z / c.w) / inv_w_sum;
            let w = 1.0 / inv_w_sum;

            let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
            for i in 0..MAX_ATTRIBUTES {
                if vs2fs[i] == AttributeType::Empty {
                    continue;
                }
                attributes[i] = perspective_interpolate(&a.attributes[i], &b.attributes[i], &c.attributes[i], l0, l1, l2, a.w, b.w, c.w, w);
            }

            fragments.push(Fragment {
                x: x as u32,
                y: y as u32,
                z,
                w,
                attributes,
            });
        }
    }

    fragments
}

#[allow(clippy::too_many_arguments)]
fn perspective_interpolate(
    a: &Attribute,
    b: &Attribute,
    c: &Attribute,
    l0: f32,
    l1: f32,
    l2: f32,
    wa: f32,
    wb: f32,
    wc: f32,
    w_persp: f32,
) -> Attribute {
    Attribute::barycentric(a, b, c, l0 / wa * w_persp, l1 / wb * w_persp, l2 / wc * w_persp)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ShadedFragment {
    pub x: u32,
    pub y: u32,
    pub depth: f32,
    pub color: Vec4,
}

/// Stage J: invoke the fragment shader for one rasterized fragment.
pub(crate) fn shade_fragment(frag: &Fragment, program: &Program, uniforms: &Uniforms) -> Option<ShadedFragment> {
    let fs = program.fragment_shader.as_deref()?;
    let in_frag = crate::program::InFragment {
        gl_frag_coord: Vec4::new(frag.x as f32 + 0.5, frag.y as f32 + 0.5, frag.z, frag.w),
        attributes: frag.attributes,
    };
    let out = fs(&in_frag, uniforms);
    Some(ShadedFragment {
        x: frag.x,
        y: frag.y,
        depth: frag.z,
        color: out.gl_frag_color,
    })
}
