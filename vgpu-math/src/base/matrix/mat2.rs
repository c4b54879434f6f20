use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};

use crate::Vec2;


/// A 2×2 matrix of 32-bit floats, stored column-major.
///
/// This struct is `repr(C)`, so it is guaranteed to be identical to `[[f32; 2]; 2]` or `[f32; 4]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat2 {
    m: [[f32; 2]; 2],
}

impl Mat2 {
    /// The 2×2 identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Mat2 = Mat2::new(
        1.0, 0.0,
        0.0, 1.0,
    );

    /// Creates a new matrix. Arguments are provided in row-major order.
    #[inline]
    pub const fn new(r0c0: f32, r0c1: f32, r1c0: f32, r1c1: f32) -> Self {
        Self { m: [[r0c0, r1c0], [r0c1, r1c1]] }
    }

    /// Computes a new matrix which is this matrix's transpose.
    #[rustfmt::skip]
    pub fn transpose(&self) -> Mat2 {
        Mat2::new(
            self[[0, 0]], self[[1, 0]],
            self[[0, 1]], self[[1, 1]],
        )
    }

    /// Computes the determinant of this matrix.
    #[inline]
    pub fn det(&self) -> f32 {
        self[[0, 0]] * self[[1, 1]] - self[[0, 1]] * self[[1, 0]]
    }
}

impl Index<[usize; 2]> for Mat2 {
    type Output = f32;

    fn index(&self, index: [usize; 2]) -> &f32 {
        let [row, col] = index;
        &self.m[col][row]
    }
}

impl IndexMut<[usize; 2]> for Mat2 {
    fn index_mut(&mut self, index: [usize; 2]) -> &mut f32 {
        let [row, col] = index;
        &mut self.m[col][row]
    }
}

impl Index<usize> for Mat2 {
    type Output = [f32; 2];

    fn index(&self, col: usize) -> &[f32; 2] {
        &self.m[col]
    }
}

impl Mul<Mat2> for Mat2 {
    type Output = Mat2;

    #[rustfmt::skip]
    fn mul(self, b: Mat2) -> Mat2 {
        let a = self;
        Mat2::new(
            (a[[0,0]] * b[[0,0]]) + (a[[0,1]] * b[[1,0]]),
            (a[[0,0]] * b[[0,1]]) + (a[[0,1]] * b[[1,1]]),
            (a[[1,0]] * b[[0,0]]) + (a[[1,1]] * b[[1,0]]),
            (a[[1,0]] * b[[0,1]]) + (a[[1,1]] * b[[1,1]]),
        )
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, b: Vec2) -> Vec2 {
        Vec2::new(
            self[0][0] * b.x + self[1][0] * b.y,
            self[0][1] * b.x + self[1][1] * b.y,
        )
    }
}
