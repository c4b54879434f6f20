use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};

use crate::{Mat3, Vec3, Vec4};


/// A 4×4 matrix of 32-bit floats, stored column-major.
///
/// This struct is `repr(C)`, so it is guaranteed to be identical to `[[f32; 4]; 4]` or `[f32; 16]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    m: [[f32; 4]; 4],
}

impl Mat4 {
    /// The 4×4 identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Mat4 = Mat4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    );

    /// Creates a new matrix. Arguments are provided in row-major order (the order they read on the page);
    /// internally, columns are stored contiguously.
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        r0c0: f32, r0c1: f32, r0c2: f32, r0c3: f32,
        r1c0: f32, r1c1: f32, r1c2: f32, r1c3: f32,
        r2c0: f32, r2c1: f32, r2c2: f32, r2c3: f32,
        r3c0: f32, r3c1: f32, r3c2: f32, r3c3: f32,
    ) -> Self {
        Self {
            m: [
                [r0c0, r1c0, r2c0, r3c0],
                [r0c1, r1c1, r2c1, r3c1],
                [r0c2, r1c2, r2c2, r3c2],
                [r0c3, r1c3, r2c3, r3c3],
            ],
        }
    }

    /// Creates a new matrix. Accepts arguments in column-major order instead of [row-major order][Self::new].
    #[inline]
    #[rustfmt::skip]
    pub const fn new_cm(
        c0r0: f32, c0r1: f32, c0r2: f32, c0r3: f32,
        c1r0: f32, c1r1: f32, c1r2: f32, c1r3: f32,
        c2r0: f32, c2r1: f32, c2r2: f32, c2r3: f32,
        c3r0: f32, c3r1: f32, c3r2: f32, c3r3: f32,
    ) -> Self {
        Self {
            m: [
                [c0r0, c0r1, c0r2, c0r3],
                [c1r0, c1r1, c1r2, c1r3],
                [c2r0, c2r1, c2r2, c2r3],
                [c3r0, c3r1, c3r2, c3r3],
            ],
        }
    }

    /// Computes a new matrix which is this matrix's transpose.
    #[rustfmt::skip]
    pub fn transpose(&self) -> Mat4 {
        Mat4::new(
            self[[0, 0]], self[[1, 0]], self[[2, 0]], self[[3, 0]],
            self[[0, 1]], self[[1, 1]], self[[2, 1]], self[[3, 1]],
            self[[0, 2]], self[[1, 2]], self[[2, 2]], self[[3, 2]],
            self[[0, 3]], self[[1, 3]], self[[2, 3]], self[[3, 3]],
        )
    }

    /// Creates a [`Mat3`] by trimming out the last row and column of this matrix.
    #[inline]
    pub fn to_mat3(&self) -> Mat3 {
        Mat3::from_mat4(self)
    }

    fn col(&self, i: usize) -> Vec3 {
        Vec3::new(self.m[i][0], self.m[i][1], self.m[i][2])
    }

    /// Computes the four intermediate vectors used by both [`det`][Self::det] and [`inverse`][Self::inverse].
    ///
    /// See p.47-50 in Foundations of Game Development, vol.1 for information on what this is all about.
    fn inv_det_helper(&self) -> ([Vec3; 4], [f32; 4], [Vec3; 4]) {
        let a = self.col(0);
        let b = self.col(1);
        let c = self.col(2);
        let d = self.col(3);

        let x = self[[3, 0]];
        let y = self[[3, 1]];
        let z = self[[3, 2]];
        let w = self[[3, 3]];

        let s = a.cross(&b);
        let t = c.cross(&d);
        let u = a * y - b * x;
        let v = c * w - d * z;

        ([a, b, c, d], [x, y, z, w], [s, t, u, v])
    }

    /// Computes the determinant of this matrix.
    pub fn det(&self) -> f32 {
        let (_, _, [s, t, u, v]) = self.inv_det_helper();
        s.dot(&v) + t.dot(&u)
    }

    /// Computes this matrix's inverse.
    ///
    /// In the interest of performance, there is no check for whether or not this matrix is invertible (its
    /// determinant is zero).
    #[rustfmt::skip]
    pub fn inverse(&self) -> Mat4 {
        let ([a, b, c, d], [x, y, z, w], [mut s, mut t, mut u, mut v]) = self.inv_det_helper();

        let inv_det = 1.0 / (s.dot(&v) + t.dot(&u));
        s *= inv_det;
        t *= inv_det;
        u *= inv_det;
        v *= inv_det;

        let r0 = b.cross(&v) + t * y;
        let r1 = v.cross(&a) - t * x;
        let r2 = d.cross(&u) + s * w;
        let r3 = u.cross(&c) - s * z;

        Mat4::new(
            r0.x, r0.y, r0.z, -b.dot(&t),
            r1.x, r1.y, r1.z,  a.dot(&t),
            r2.x, r2.y, r2.z, -d.dot(&s),
            r3.x, r3.y, r3.z,  c.dot(&s),
        )
    }
}

impl Index<[usize; 2]> for Mat4 {
    type Output = f32;

    /// Indexes this matrix in `[row, col]` order.
    fn index(&self, index: [usize; 2]) -> &f32 {
        let [row, col] = index;
        &self.m[col][row]
    }
}

impl IndexMut<[usize; 2]> for Mat4 {
    fn index_mut(&mut self, index: [usize; 2]) -> &mut f32 {
        let [row, col] = index;
        &mut self.m[col][row]
    }
}

impl Index<usize> for Mat4 {
    type Output = [f32; 4];

    /// Indexes this matrix by column, returning the column as `[f32; 4]`. `matrix[i][j]` is therefore column-major
    /// (`matrix[col][row]`), in contrast to the row-major `matrix[[row, col]]`.
    fn index(&self, col: usize) -> &[f32; 4] {
        &self.m[col]
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    #[rustfmt::skip]
    fn mul(self, b: Mat4) -> Mat4 {
        let a = self;
        Mat4::new(
            (a[[0,0]] * b[[0,0]]) + (a[[0,1]] * b[[1,0]]) + (a[[0,2]] * b[[2,0]]) + (a[[0,3]] * b[[3,0]]),
            (a[[0,0]] * b[[0,1]]) + (a[[0,1]] * b[[1,1]]) + (a[[0,2]] * b[[2,1]]) + (a[[0,3]] * b[[3,1]]),
            (a[[0,0]] * b[[0,2]]) + (a[[0,1]] * b[[1,2]]) + (a[[0,2]] * b[[2,2]]) + (a[[0,3]] * b[[3,2]]),
            (a[[0,0]] * b[[0,3]]) + (a[[0,1]] * b[[1,3]]) + (a[[0,2]] * b[[2,3]]) + (a[[0,3]] * b[[3,3]]),

            (a[[1,0]] * b[[0,0]]) + (a[[1,1]] * b[[1,0]]) + (a[[1,2]] * b[[2,0]]) + (a[[1,3]] * b[[3,0]]),
            (a[[1,0]] * b[[0,1]]) + (a[[1,1]] * b[[1,1]]) + (a[[1,2]] * b[[2,1]]) + (a[[1,3]] * b[[3,1]]),
            (a[[1,0]] * b[[0,2]]) + (a[[1,1]] * b[[1,2]]) + (a[[1,2]] * b[[2,2]]) + (a[[1,3]] * b[[3,2]]),
            (a[[1,0]] * b[[0,3]]) + (a[[1,1]] * b[[1,3]]) + (a[[1,2]] * b[[2,3]]) + (a[[1,3]] * b[[3,3]]),

            (a[[2,0]] * b[[0,0]]) + (a[[2,1]] * b[[1,0]]) + (a[[2,2]] * b[[2,0]]) + (a[[2,3]] * b[[3,0]]),
            (a[[2,0]] * b[[0,1]]) + (a[[2,1]] * b[[1,1]]) + (a[[2,2]] * b[[2,1]]) + (a[[2,3]] * b[[3,1]]),
            (a[[2,0]] * b[[0,2]]) + (a[[2,1]] * b[[1,2]]) + (a[[2,2]] * b[[2,2]]) + (a[[2,3]] * b[[3,2]]),
            (a[[2,0]] * b[[0,3]]) + (a[[2,1]] * b[[1,3]]) + (a[[2,2]] * b[[2,3]]) + (a[[2,3]] * b[[3,3]]),

            (a[[3,0]] * b[[0,0]]) + (a[[3,1]] * b[[1,0]]) + (a[[3,2]] * b[[2,0]]) + (a[[3,3]] * b[[3,0]]),
            (a[[3,0]] * b[[0,1]]) + (a[[3,1]] * b[[1,1]]) + (a[[3,2]] * b[[2,1]]) + (a[[3,3]] * b[[3,1]]),
            (a[[3,0]] * b[[0,2]]) + (a[[3,1]] * b[[1,2]]) + (a[[3,2]] * b[[2,2]]) + (a[[3,3]] * b[[3,2]]),
            (a[[3,0]] * b[[0,3]]) + (a[[3,1]] * b[[1,3]]) + (a[[3,2]] * b[[2,3]]) + (a[[3,3]] * b[[3,3]]),
        )
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[rustfmt::skip]
    fn mul(self, b: Vec4) -> Vec4 {
        let a = self;
        Vec4::new(
            a[0][0] * b.x + a[1][0] * b.y + a[2][0] * b.z + a[3][0] * b.w,
            a[0][1] * b.x + a[1][1] * b.y + a[2][1] * b.z + a[3][1] * b.w,
            a[0][2] * b.x + a[1][2] * b.y + a[2][2] * b.z + a[3][2] * b.w,
            a[0][3] * b.x + a[1][3] * b.y + a[2][3] * b.z + a[3][3] * b.w,
        )
    }
}
