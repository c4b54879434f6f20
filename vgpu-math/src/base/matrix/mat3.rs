use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};

use crate::{Mat4, Vec3};

/// A 3×3 matrix of 32-bit floats, stored column-major.
///
/// This struct is `repr(C)`, so it is guaranteed to be identical to `[[f32; 3]; 3]` or `[f32; 9]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat3 {
    m: [[f32; 3]; 3],
}

impl Mat3 {
    /// The 3×3 identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Mat3 = Mat3::new(
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    );

    /// Creates a new matrix. Arguments are provided in row-major order.
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        r0c0: f32, r0c1: f32, r0c2: f32,
        r1c0: f32, r1c1: f32, r1c2: f32,
        r2c0: f32, r2c1: f32, r2c2: f32,
    ) -> Self {
        Self {
            m: [
                [r0c0, r1c0, r2c0],
                [r0c1, r1c1, r2c1],
                [r0c2, r1c2, r2c2],
            ],
        }
    }

    /// Computes a new matrix which is this matrix's transpose.
    #[rustfmt::skip]
    pub fn transpose(&self) -> Mat3 {
        Mat3::new(
            self[[0, 0]], self[[1, 0]], self[[2, 0]],
            self[[0, 1]], self[[1, 1]], self[[2, 1]],
            self[[0, 2]], self[[1, 2]], self[[2, 2]],
        )
    }

    /// Creates a [`Mat3`] from a [`Mat4`] by trimming out the last row and column.
    #[inline]
    #[rustfmt::skip]
    pub fn from_mat4(mat: &Mat4) -> Mat3 {
        Mat3::new(
            mat[[0,0]], mat[[0,1]], mat[[0,2]],
            mat[[1,0]], mat[[1,1]], mat[[1,2]],
            mat[[2,0]], mat[[2,1]], mat[[2,2]],
        )
    }

    fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[i][0], self.m[i][1], self.m[i][2])
    }

    /// Computes the determinant of this matrix.
    pub fn det(&self) -> f32 {
        self.col(0).cross(&self.col(1)).dot(&self.col(2))
    }

    /// Computes this matrix's inverse.
    ///
    /// In the interest of performance, there is no check for whether or not this matrix is invertible (its
    /// determinant is zero).
    #[rustfmt::skip]
    pub fn inverse(&self) -> Mat3 {
        let a = self.col(0);
        let b = self.col(1);
        let c = self.col(2);

        let r0 = b.cross(&c);
        let r1 = c.cross(&a);
        let r2 = a.cross(&b);

        let inv_det = 1.0 / r2.dot(&c);

        Mat3::new(
            r0.x * inv_det, r0.y * inv_det, r0.z * inv_det,
            r1.x * inv_det, r1.y * inv_det, r1.z * inv_det,
            r2.x * inv_det, r2.y * inv_det, r2.z * inv_det,
        )
    }
}

impl Index<[usize; 2]> for Mat3 {
    type Output = f32;

    fn index(&self, index: [usize; 2]) -> &f32 {
        let [row, col] = index;
        &self.m[col][row]
    }
}

impl IndexMut<[usize; 2]> for Mat3 {
    fn index_mut(&mut self, index: [usize; 2]) -> &mut f32 {
        let [row, col] = index;
        &mut self.m[col][row]
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Mat3;

    #[rustfmt::skip]
    fn mul(self, b: Mat3) -> Mat3 {
        let a = self;
        Mat3::new(
            (a[[0,0]]*b[[0,0]]) + (a[[0,1]]*b[[1,0]]) + (a[[0,2]]*b[[2,0]]),
            (a[[0,0]]*b[[0,1]]) + (a[[0,1]]*b[[1,1]]) + (a[[0,2]]*b[[2,1]]),
            (a[[0,0]]*b[[0,2]]) + (a[[0,1]]*b[[1,2]]) + (a[[0,2]]*b[[2,2]]),
            (a[[1,0]]*b[[0,0]]) + (a[[1,1]]*b[[1,0]]) + (a[[1,2]]*b[[2,0]]),
            (a[[1,0]]*b[[0,1]]) + (a[[1,1]]*b[[1,1]]) + (a[[1,2]]*b[[2,1]]),
            (a[[1,0]]*b[[0,2]]) + (a[[1,1]]*b[[1,2]]) + (a[[1,2]]*b[[2,2]]),
            (a[[2,0]]*b[[0,0]]) + (a[[2,1]]*b[[1,0]]) + (a[[2,2]]*b[[2,0]]),
            (a[[2,0]]*b[[0,1]]) + (a[[2,1]]*b[[1,1]]) + (a[[2,2]]*b[[2,1]]),
            (a[[2,0]]*b[[0,2]]) + (a[[2,1]]*b[[1,2]]) + (a[[2,2]]*b[[2,2]]),
        )
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    fn mul(self, b: Vec3) -> Vec3 {
        Vec3::new(
            self[[0, 0]] * b.x + self[[0, 1]] * b.y + self[[0, 2]] * b.z,
            self[[1, 0]] * b.x + self[[1, 1]] * b.y + self[[1, 2]] * b.z,
            self[[2, 0]] * b.x + self[[2, 1]] * b.y + self[[2, 2]] * b.z,
        )
    }
}
