use super::{Vec2, Vec3, Vec4};

fn approx_eq(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-5, "expected {a} ≈ {b}");
}

#[test]
fn dot_of_orthogonal_unit_vectors_is_zero() {
    approx_eq(Vec3::UNIT_X.dot(&Vec3::UNIT_Y), 0.0);
}

#[test]
fn cross_of_x_and_y_is_z() {
    let z = Vec3::UNIT_X.cross(&Vec3::UNIT_Y);
    assert_eq!(z, Vec3::UNIT_Z);
}

#[test]
fn norm_has_unit_magnitude() {
    let v = Vec3::new(3.0, 4.0, 0.0).norm();
    approx_eq(v.mag(), 1.0);
}

#[test]
fn vec2_to3_preserves_xy() {
    let v = Vec2::new(1.0, 2.0).to3(3.0);
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn vec4_from3_and_to3_round_trip() {
    let xyz = Vec3::new(1.0, 2.0, 3.0);
    let v = Vec4::from3(xyz, 4.0);
    assert_eq!(v.to3(), xyz);
    approx_eq(v.w, 4.0);
}

#[test]
fn as_bytes_matches_field_layout() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    let bytes = v.as_bytes();
    assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
    assert_eq!(&bytes[4..8], &2.0f32.to_ne_bytes());
    assert_eq!(&bytes[8..12], &3.0f32.to_ne_bytes());
}
