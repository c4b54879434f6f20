use std::fs::File;
use std::io::{BufWriter, Write};

use vgpu_core::Gpu;
use vgpu_math::{Mat4, Vec3};
use vgpu_phong::PhongMethod;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const OUTPUT_PATH: &str = "demo.ppm";

const CAMERA_POS: Vec3 = Vec3::new(3.0, 2.0, 4.0);
const CAMERA_TGT: Vec3 = Vec3::new(0.0, 0.0, 0.0);
const LIGHT_POS: Vec3 = Vec3::new(5.0, 5.0, 5.0);

fn main() {
    vgpu_demo::init_logger();

    let mut gpu = Gpu::new();
    gpu.create_framebuffer(WIDTH, HEIGHT);

    let method = PhongMethod::new(&mut gpu);

    let view = look_at(&CAMERA_POS, &CAMERA_TGT);
    let proj = perspective(60.0, WIDTH as f32 / HEIGHT as f32, 0.1, 100.0);

    method
        .on_draw(&mut gpu, proj, view, LIGHT_POS, CAMERA_POS)
        .expect("draw_triangles should succeed with a bound puller and program");
    method.destroy(&mut gpu);

    write_ppm(OUTPUT_PATH, gpu.framebuffer_color(), WIDTH, HEIGHT).expect("failed to write output image");
    log::info!("wrote {WIDTH}x{HEIGHT} render to {OUTPUT_PATH}");
}

/// Writes a binary (P6) PPM from an RGBA8 color plane, dropping alpha. The framebuffer stores row 0 at the
/// bottom; PPM expects row 0 at the top, so rows are emitted in reverse.
fn write_ppm(path: &str, color: &[[u8; 4]], width: u32, height: u32) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P6\n{width} {height}\n255\n")?;

    for y in (0..height).rev() {
        let row_start = (y as usize) * (width as usize);
        for px in &color[row_start..row_start + width as usize] {
            out.write_all(&px[0..3])?;
        }
    }

    out.flush()
}

fn look_at(from: &Vec3, to: &Vec3) -> Mat4 {
    let world_up = Vec3::UNIT_Y;

    let d = (*from - *to).norm(); // direction
    let r = world_up.cross(&d).norm(); // right
    let u = d.cross(&r); // up
    let p = -*from;

    #[rustfmt::skip]
    let m = Mat4::new(
        r.x, r.y, r.z, 0.0,
        u.x, u.y, u.z, 0.0,
        d.x, d.y, d.z, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ) * Mat4::new(
        1.0, 0.0, 0.0, p.x,
        0.0, 1.0, 0.0, p.y,
        0.0, 0.0, 1.0, p.z,
        0.0, 0.0, 0.0, 1.0,
    );
    m
}

fn perspective(fov_deg: f32, aspect: f32, near_clip: f32, far_clip: f32) -> Mat4 {
    let fov = (fov_deg.to_radians() / 2.0).tan();
    let a = aspect;
    let n = near_clip;
    let f = far_clip;

    #[rustfmt::skip]
    let m = Mat4::new_cm(
        1.0 / (a * fov),  0.0,          0.0,                        0.0,
        0.0,              1.0 / fov,    0.0,                        0.0,
        0.0,              0.0,         -(f + n) / (f - n),         -1.0,
        0.0,              0.0,         -(2.0 * f * n) / (f - n),    0.0,
    );
    m
}
