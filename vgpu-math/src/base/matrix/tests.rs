use super::{Mat2, Mat3, Mat4};
use crate::{Vec3, Vec4};

fn approx_eq(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "expected {a} ≈ {b}");
}

#[test]
fn identity_times_identity_is_identity() {
    let m = Mat4::IDENTITY * Mat4::IDENTITY;
    assert_eq!(m, Mat4::IDENTITY);
}

#[test]
fn mat4_indexing_is_row_major() {
    #[rustfmt::skip]
    let m = Mat4::new(
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    );

    approx_eq(m[[0, 0]], 1.0);
    approx_eq(m[[0, 3]], 4.0);
    approx_eq(m[[3, 0]], 13.0);
    approx_eq(m[[2, 1]], 10.0);
}

#[test]
fn mat4_new_and_new_cm_round_trip() {
    #[rustfmt::skip]
    let rm = Mat4::new(
        1.0, 2.0, 3.0, 4.0,
        5.0, 6.0, 7.0, 8.0,
        9.0, 10.0, 11.0, 12.0,
        13.0, 14.0, 15.0, 16.0,
    );
    #[rustfmt::skip]
    let cm = Mat4::new_cm(
        1.0, 5.0, 9.0, 13.0,
        2.0, 6.0, 10.0, 14.0,
        3.0, 7.0, 11.0, 15.0,
        4.0, 8.0, 12.0, 16.0,
    );
    assert_eq!(rm, cm);
}

#[test]
fn mat4_times_vec4_transforms_point() {
    let translate = Mat4::new(
        1.0, 0.0, 0.0, 10.0,
        0.0, 1.0, 0.0, 20.0,
        0.0, 0.0, 1.0, 30.0,
        0.0, 0.0, 0.0, 1.0,
    );
    let p = Vec4::new(1.0, 2.0, 3.0, 1.0);
    let q = translate * p;
    approx_eq(q.x, 11.0);
    approx_eq(q.y, 22.0);
    approx_eq(q.z, 33.0);
    approx_eq(q.w, 1.0);
}

#[test]
fn mat4_inverse_round_trips() {
    #[rustfmt::skip]
    let m = Mat4::new(
        2.0, 0.0, 0.0, 1.0,
        0.0, 3.0, 0.0, 2.0,
        0.0, 0.0, 4.0, 3.0,
        0.0, 0.0, 0.0, 1.0,
    );
    let inv = m.inverse();
    let product = m * inv;
    for row in 0..4 {
        for col in 0..4 {
            let expected = if row == col { 1.0 } else { 0.0 };
            approx_eq(product[[row, col]], expected);
        }
    }
}

#[test]
fn mat3_det_of_identity_is_one() {
    approx_eq(Mat3::IDENTITY.det(), 1.0);
}

#[test]
fn mat3_times_vec3() {
    let scale = Mat3::new(
        2.0, 0.0, 0.0,
        0.0, 3.0, 0.0,
        0.0, 0.0, 4.0,
    );
    let v = scale * Vec3::new(1.0, 1.0, 1.0);
    approx_eq(v.x, 2.0);
    approx_eq(v.y, 3.0);
    approx_eq(v.z, 4.0);
}

#[test]
fn mat2_det_and_inverse() {
    let m = Mat2::new(4.0, 7.0, 2.0, 6.0);
    approx_eq(m.det(), 10.0);
}
