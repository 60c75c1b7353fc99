use core::ops::Mul;

use crate::bufferable::FloatBufferable;
use crate::error::TransformError;

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

/// 4x4 homogeneous transform, column-major (`m[col * 4 + row]`).
///
/// All operations mutate in place. The type is `Clone` but deliberately not
/// `Copy`: duplicating a transform is always an explicit `clone()` or
/// [`set_from`](Self::set_from).
///
/// Composition is right-multiplication: `translate`, `scale` and `rotate_*`
/// apply their primitive *before* the existing transform when a point is
/// multiplied on the right, matching fixed-function OpenGL matrix stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    m: [f32; 16],
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Relative threshold below which a determinant counts as zero.
    ///
    /// The determinant is compared against `DETERMINANT_EPSILON` times the product
    /// of the column lengths (its Hadamard bound), so strongly scaled matrices such
    /// as pixel-space orthographic projections are not mistaken for singular ones.
    pub const DETERMINANT_EPSILON: f64 = 1e-10;

    /// Number of floats in the upload representation.
    pub const FLOAT_COUNT: usize = 16;

    #[inline]
    pub const fn identity() -> Self {
        Self { m: IDENTITY }
    }

    /// Builds a transform from 16 components already in column-major order.
    #[inline]
    pub const fn from_cols_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Identity with the given translation column.
    pub fn from_translation(x: f32, y: f32, z: f32) -> Self {
        let mut t = Self::identity();
        t.translation(x, y, z);
        t
    }

    /// Orthographic projection, see [`ortho`](Self::ortho).
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut t = Self::identity();
        t.ortho(left, right, bottom, top, near, far);
        t
    }

    /// Resets to the identity matrix.
    #[inline]
    pub fn reset(&mut self) {
        self.m = IDENTITY;
    }

    /// Copies every component of `other` into `self`.
    #[inline]
    pub fn set_from(&mut self, other: &Transform) {
        self.m = other.m;
    }

    /// Sets all 16 components.
    ///
    /// Arguments are taken in storage order: `mCR` is column `C`, row `R`, so the
    /// first four arguments form column 0 and the last four hold the translation.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn make(
        &mut self,
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) {
        self.m = [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        ];
    }

    /// Standard OpenGL orthographic projection. Overwrites every component.
    pub fn ortho(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        let rsl = right - left;
        let tsb = top - bottom;
        let fsn = far - near;

        self.m = [0.0; 16];
        self.m[0] = 2.0 / rsl;
        self.m[5] = 2.0 / tsb;
        self.m[10] = -2.0 / fsn;
        self.m[12] = -(right + left) / rsl;
        self.m[13] = -(top + bottom) / tsb;
        self.m[14] = -(far + near) / fsn;
        self.m[15] = 1.0;
    }

    /// Pixel-space projection: origin top-left, +Y down, depth range `[-2048, 0]`.
    pub fn ortho_size(&mut self, width: f32, height: f32) {
        self.ortho(0.0, width, height, 0.0, -2048.0, 0.0);
    }

    /// Resets to identity, then sets the translation column.
    pub fn translation(&mut self, x: f32, y: f32, z: f32) {
        self.m = IDENTITY;
        self.m[12] = x;
        self.m[13] = y;
        self.m[14] = z;
    }

    /// Right-multiplies by a translation.
    ///
    /// Column 3 becomes `linear * (x, y, z) + translation`; the upper-left 3x3
    /// and `m[15]` are untouched.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        let m = &mut self.m;
        let tx = m[0] * x + m[4] * y + m[8] * z + m[12];
        let ty = m[1] * x + m[5] * y + m[9] * z + m[13];
        let tz = m[2] * x + m[6] * y + m[10] * z + m[14];
        m[12] = tx;
        m[13] = ty;
        m[14] = tz;
    }

    /// Uniform scale of the linear part.
    #[inline]
    pub fn scale(&mut self, s: f32) {
        self.scale_xyz(s, s, s);
    }

    /// Scales columns 0..2 by `sx`, `sy`, `sz`. The translation column is untouched.
    pub fn scale_xyz(&mut self, sx: f32, sy: f32, sz: f32) {
        for (col, factor) in [sx, sy, sz].into_iter().enumerate() {
            for row in 0..4 {
                self.m[col * 4 + row] *= factor;
            }
        }
    }

    /// Resets to a rotation about +X (counter-clockwise looking toward the origin).
    #[rustfmt::skip]
    pub fn rotation_x(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        self.make(
            1.0, 0.0, 0.0, 0.0,
            0.0,   c,   s, 0.0,
            0.0,  -s,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
    }

    /// Resets to a rotation about +Y.
    #[rustfmt::skip]
    pub fn rotation_y(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        self.make(
              c, 0.0,  -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
              s, 0.0,   c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
    }

    /// Resets to a rotation about +Z.
    #[rustfmt::skip]
    pub fn rotation_z(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        self.make(
              c,   s, 0.0, 0.0,
             -s,   c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
    }

    /// Right-multiplies by a rotation about +X.
    pub fn rotate_x(&mut self, radians: f32) {
        let mut r = Self::identity();
        r.rotation_x(radians);
        self.multiply(&r);
    }

    /// Right-multiplies by a rotation about +Y.
    pub fn rotate_y(&mut self, radians: f32) {
        let mut r = Self::identity();
        r.rotation_y(radians);
        self.multiply(&r);
    }

    /// Right-multiplies by a rotation about +Z.
    pub fn rotate_z(&mut self, radians: f32) {
        let mut r = Self::identity();
        r.rotation_z(radians);
        self.multiply(&r);
    }

    /// `self = self * right`, standard column-major product:
    /// `result[col][row] = sum_k self[k][row] * right[col][k]`.
    ///
    /// This is the only composition formula in the crate; every other operation
    /// (and `Mul`) goes through it.
    pub fn multiply(&mut self, right: &Transform) {
        let a = &self.m;
        let b = &right.m;
        let mut r = [0.0f32; 16];

        for col in 0..4 {
            for row in 0..4 {
                r[col * 4 + row] = a[row] * b[col * 4]
                    + a[4 + row] * b[col * 4 + 1]
                    + a[8 + row] * b[col * 4 + 2]
                    + a[12 + row] * b[col * 4 + 3];
            }
        }

        self.m = r;
    }

    /// Component-wise addition.
    pub fn add(&mut self, right: &Transform) {
        for (a, b) in self.m.iter_mut().zip(right.m.iter()) {
            *a += *b;
        }
    }

    /// Component-wise subtraction.
    pub fn subtract(&mut self, right: &Transform) {
        for (a, b) in self.m.iter_mut().zip(right.m.iter()) {
            *a -= *b;
        }
    }

    /// Full 4x4 cofactor expansion.
    pub fn determinant(&self) -> f32 {
        let m = self.to_f64();
        let adj = adjugate(&m);
        cofactor_determinant(&m, &adj) as f32
    }

    /// Replaces `self` with its inverse (adjugate over determinant).
    ///
    /// # Errors
    /// Returns [`TransformError::Singular`] when the determinant is within
    /// [`DETERMINANT_EPSILON`](Self::DETERMINANT_EPSILON) of zero (relative to the
    /// column lengths) or not finite, and when the inverse does not fit in f32.
    /// `self` is left unchanged in that case.
    pub fn invert(&mut self) -> Result<(), TransformError> {
        let m = self.to_f64();
        let adj = adjugate(&m);
        let det = cofactor_determinant(&m, &adj);

        let bound = hadamard_bound(&m);
        let threshold = Self::DETERMINANT_EPSILON * bound;

        if !det.is_finite() || bound == 0.0 || det.abs() <= threshold {
            return Err(TransformError::Singular { determinant: det as f32 });
        }

        let inv_det = 1.0 / det;
        let mut inv = [0.0f32; 16];
        for (dst, src) in inv.iter_mut().zip(adj.iter()) {
            *dst = (src * inv_det) as f32;
        }

        // Well conditioned but out of f32 range.
        if !inv.iter().all(|v| v.is_finite()) {
            return Err(TransformError::Singular { determinant: det as f32 });
        }

        self.m = inv;
        Ok(())
    }

    /// Returns the inverse without modifying `self`.
    pub fn inverse(&self) -> Result<Transform, TransformError> {
        let mut t = self.clone();
        t.invert()?;
        Ok(t)
    }

    /// The 16 components in upload order (column-major).
    #[inline]
    pub fn to_flat_array(&self) -> [f32; 16] {
        self.m
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.m
    }

    /// Raw bytes in the float-array wire format (16 little-endian-native `f32`).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.m)
    }

    /// Component at column `col`, row `row`.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> f32 {
        self.m[col * 4 + row]
    }

    /// Compares every component within `eps`.
    pub fn approx_eq(&self, other: &Transform, eps: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }

    fn to_f64(&self) -> [f64; 16] {
        self.m.map(f64::from)
    }
}

impl FloatBufferable for Transform {
    #[inline]
    fn write_floats(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.m);
    }

    #[inline]
    fn float_count(&self) -> usize {
        Self::FLOAT_COUNT
    }
}

impl Mul for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Transform {
        let mut out = self.clone();
        out.multiply(rhs);
        out
    }
}

/// Transposed cofactor matrix, column-major. Evaluated in f64 so that the
/// singularity test is not dominated by f32 cancellation.
#[rustfmt::skip]
fn adjugate(m: &[f64; 16]) -> [f64; 16] {
    let mut inv = [0.0f64; 16];

    inv[0]  =  m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
             + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
    inv[4]  = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
             - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
    inv[8]  =  m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
             + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
    inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
             - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];

    inv[1]  = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
             - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
    inv[5]  =  m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
             + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
    inv[9]  = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
             - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
    inv[13] =  m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
             + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];

    inv[2]  =  m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
             + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
    inv[6]  = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
             - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
    inv[10] =  m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
             + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
    inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
             - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];

    inv[3]  = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
             - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
    inv[7]  =  m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
             + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
    inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
             - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
    inv[15] =  m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
             + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

    inv
}

/// Expansion along column 0 using the cofactors already held in `adj`.
#[inline]
fn cofactor_determinant(m: &[f64; 16], adj: &[f64; 16]) -> f64 {
    m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
}

/// Product of the column lengths; `|det| <= bound` always holds.
fn hadamard_bound(m: &[f64; 16]) -> f64 {
    m.chunks_exact(4)
        .map(|col| col.iter().map(|v| v * v).sum::<f64>().sqrt())
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    #[rustfmt::skip]
    fn sample() -> Transform {
        Transform::from_cols_array([
            2.0, 0.5, 0.0, 0.0,
            -1.0, 3.0, 0.25, 0.0,
            0.0, 1.0, 4.0, 0.0,
            5.0, -2.0, 7.0, 1.0,
        ])
    }

    /// Deterministic pseudo-random matrices (64-bit LCG).
    struct MatrixGen(u64);

    impl MatrixGen {
        fn next_f32(&mut self) -> f32 {
            self.0 = self
                .0
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // Top 24 bits -> [-1, 1).
            ((self.0 >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
        }

        fn any(&mut self) -> Transform {
            Transform::from_cols_array(std::array::from_fn(|_| self.next_f32() * 100.0))
        }

        /// Diagonally dominant, hence non-singular and well conditioned.
        fn invertible(&mut self) -> Transform {
            let mut m: [f32; 16] = std::array::from_fn(|_| self.next_f32());
            for i in 0..4 {
                m[i * 5] += if m[i * 5] < 0.0 { -4.0 } else { 4.0 };
            }
            Transform::from_cols_array(m)
        }
    }

    fn assert_close(t: &Transform, expected: &[f32; 16]) {
        for (i, (a, b)) in t.as_slice().iter().zip(expected.iter()).enumerate() {
            assert!((a - b).abs() <= EPS, "m[{i}] = {a}, expected {b}");
        }
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn default_is_identity() {
        assert_eq!(Transform::default().to_flat_array(), IDENTITY);
    }

    #[test]
    fn reset_restores_identity() {
        let mut t = sample();
        t.reset();
        assert_eq!(t, Transform::identity());
    }

    #[test]
    fn make_writes_storage_order() {
        let mut t = Transform::identity();
        t.make(
            0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
        );
        for i in 0..16 {
            assert_eq!(t.as_slice()[i], i as f32);
        }
        assert_eq!(t.get(3, 1), 13.0);
    }

    #[test]
    fn set_from_copies_without_aliasing() {
        let src = sample();
        let mut dst = Transform::identity();
        dst.set_from(&src);
        dst.translate(1.0, 0.0, 0.0);
        assert_ne!(dst, src);
        assert_eq!(src, sample());
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn ortho_pixel_space_regression() {
        let mut t = Transform::identity();
        t.ortho(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);

        #[rustfmt::skip]
        let expected = [
            0.0025, 0.0, 0.0, 0.0,
            0.0, -0.003_333_333, 0.0, 0.0,
            0.0, 0.0, -1.0, 0.0,
            -1.0, 1.0, 0.0, 1.0,
        ];
        assert_close(&t, &expected);

        let m = t.as_slice();
        assert!((m[0] - 0.0025).abs() < 1e-7);
        assert!((m[5] - (-0.003_333_333)).abs() < 1e-7);
        assert_eq!(m[10], -1.0);
        assert_eq!(m[12], -1.0);
        assert_eq!(m[13], 1.0);
        assert_eq!(m[15], 1.0);
    }

    #[test]
    fn ortho_size_maps_corners_to_ndc() {
        let mut t = Transform::identity();
        t.ortho_size(800.0, 600.0);
        // (0,0) -> (-1, 1), (800,600) -> (1, -1)
        let m = t.as_slice();
        assert!((m[12] - (-1.0)).abs() < EPS);
        assert!((m[13] - 1.0).abs() < EPS);
        assert!((m[0] * 800.0 + m[12] - 1.0).abs() < EPS);
        assert!((m[5] * 600.0 + m[13] - (-1.0)).abs() < EPS);
    }

    #[test]
    fn ortho_size_is_invertible() {
        let mut t = Transform::identity();
        t.ortho_size(1920.0, 1080.0);
        let original = t.clone();
        t.invert().expect("pixel projection must be invertible");
        t.multiply(&original);
        assert!(t.approx_eq(&Transform::identity(), EPS));
    }

    // ── translate / scale ─────────────────────────────────────────────────

    #[test]
    fn translate_on_identity_sets_column_three() {
        let mut t = Transform::identity();
        t.translate(10.0, 20.0, 0.0);
        let mut expected = IDENTITY;
        expected[12] = 10.0;
        expected[13] = 20.0;
        assert_eq!(t.to_flat_array(), expected);
    }

    #[test]
    fn translate_respects_existing_linear_part() {
        let mut t = Transform::identity();
        t.scale(2.0);
        t.translate(3.0, 4.0, 5.0);
        #[rustfmt::skip]
        let expected = [
            2.0, 0.0, 0.0, 0.0,
            0.0, 2.0, 0.0, 0.0,
            0.0, 0.0, 2.0, 0.0,
            6.0, 8.0, 10.0, 1.0,
        ];
        assert_close(&t, &expected);
    }

    #[test]
    fn translation_resets_first() {
        let mut t = sample();
        t.translation(1.0, 2.0, 3.0);
        let mut expected = IDENTITY;
        expected[12] = 1.0;
        expected[13] = 2.0;
        expected[14] = 3.0;
        assert_eq!(t.to_flat_array(), expected);
        assert_eq!(Transform::from_translation(1.0, 2.0, 3.0), t);
    }

    #[test]
    fn scale_leaves_translation_column() {
        let mut t = Transform::from_translation(7.0, 8.0, 9.0);
        t.scale_xyz(2.0, 3.0, 4.0);
        assert_eq!(t.get(0, 0), 2.0);
        assert_eq!(t.get(1, 1), 3.0);
        assert_eq!(t.get(2, 2), 4.0);
        assert_eq!(t.get(3, 0), 7.0);
        assert_eq!(t.get(3, 1), 8.0);
        assert_eq!(t.get(3, 2), 9.0);
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotate_z_quarter_turn_maps_x_to_y() {
        let mut t = Transform::identity();
        t.rotate_z(FRAC_PI_2);
        // Column 0 is the image of +X.
        assert!((t.get(0, 0)).abs() < EPS);
        assert!((t.get(0, 1) - 1.0).abs() < EPS);
        // Column 1 is the image of +Y.
        assert!((t.get(1, 0) + 1.0).abs() < EPS);
    }

    #[test]
    fn rotate_x_quarter_turn_maps_y_to_z() {
        let mut t = Transform::identity();
        t.rotate_x(FRAC_PI_2);
        assert!((t.get(1, 2) - 1.0).abs() < EPS);
        assert!((t.get(2, 1) + 1.0).abs() < EPS);
    }

    #[test]
    fn rotate_y_quarter_turn_maps_z_to_x() {
        let mut t = Transform::identity();
        t.rotate_y(FRAC_PI_2);
        assert!((t.get(2, 0) - 1.0).abs() < EPS);
        assert!((t.get(0, 2) + 1.0).abs() < EPS);
    }

    #[test]
    fn rotate_z_round_trips() {
        for theta in [0.1f32, 0.75, 1.3, PI, -2.2, 5.0] {
            let mut t = Transform::identity();
            t.rotate_z(theta);
            let mut back = Transform::identity();
            back.rotate_z(-theta);
            t.multiply(&back);
            assert!(t.approx_eq(&Transform::identity(), EPS), "theta = {theta}");
        }
    }

    // ── multiply ──────────────────────────────────────────────────────────

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let m = sample();

        let mut left = Transform::identity();
        left.multiply(&m);
        assert!(left.approx_eq(&m, EPS));

        let mut right = m.clone();
        right.multiply(&Transform::identity());
        assert!(right.approx_eq(&m, EPS));
    }

    #[test]
    fn identity_is_neutral_for_generated_matrices() {
        let mut g = MatrixGen(0x5eed);
        for i in 0..500 {
            let m = g.any();
            assert!((&Transform::identity() * &m).approx_eq(&m, EPS), "left, case {i}");
            assert!((&m * &Transform::identity()).approx_eq(&m, EPS), "right, case {i}");
        }
    }

    #[test]
    fn multiply_composes_translate_then_scale() {
        // T * S applied to a point scales first, then translates.
        let mut t = Transform::from_translation(10.0, 0.0, 0.0);
        let mut s = Transform::identity();
        s.scale(2.0);
        t.multiply(&s);
        assert_eq!(t.get(0, 0), 2.0);
        assert_eq!(t.get(3, 0), 10.0);

        let mut s_then = s.clone();
        s_then.multiply(&Transform::from_translation(10.0, 0.0, 0.0));
        assert_eq!(s_then.get(3, 0), 20.0);
    }

    #[test]
    fn multiply_matches_hand_computed_product() {
        #[rustfmt::skip]
        let a = Transform::from_cols_array([
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        ]);
        let mut b = Transform::identity();
        b.make(
            1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        );
        // b swaps the roles of columns 1 and 2.
        let r = &a * &b;
        assert_eq!(r.get(0, 0), 1.0);
        assert_eq!(r.get(1, 0), 9.0);
        assert_eq!(r.get(2, 0), 5.0);
        assert_eq!(r.get(3, 3), 16.0);
    }

    #[test]
    fn mul_operator_agrees_with_multiply() {
        let a = sample();
        let mut b = Transform::identity();
        b.rotate_z(0.4);
        b.translate(1.0, 2.0, 3.0);

        let via_op = &a * &b;
        let mut via_method = a.clone();
        via_method.multiply(&b);
        assert_eq!(via_op, via_method);
    }

    // ── add / subtract ────────────────────────────────────────────────────

    #[test]
    fn add_then_subtract_restores() {
        let mut t = sample();
        let other = Transform::from_translation(1.0, 1.0, 1.0);
        t.add(&other);
        assert_eq!(t.get(0, 0), 3.0);
        t.subtract(&other);
        assert!(t.approx_eq(&sample(), EPS));
    }

    // ── determinant / invert ──────────────────────────────────────────────

    #[test]
    fn determinant_of_known_matrices() {
        assert_eq!(Transform::identity().determinant(), 1.0);

        let mut s = Transform::identity();
        s.scale_xyz(2.0, 3.0, 4.0);
        assert!((s.determinant() - 24.0).abs() < EPS);

        let mut r = Transform::identity();
        r.rotate_y(1.1);
        assert!((r.determinant() - 1.0).abs() < EPS);
    }

    #[test]
    fn invert_round_trips() {
        let original = sample();
        let mut t = original.clone();
        t.invert().expect("sample is non-singular");
        t.multiply(&original);
        assert!(t.approx_eq(&Transform::identity(), EPS));

        let mut t = original.clone();
        t.multiply(&original.inverse().expect("non-singular"));
        assert!(t.approx_eq(&Transform::identity(), EPS));
    }

    #[test]
    fn invert_round_trips_for_generated_matrices() {
        let mut g = MatrixGen(0xc0ffee);
        for i in 0..500 {
            let original = g.invertible();
            let mut t = original.clone();
            t.invert().expect("diagonally dominant");
            t.multiply(&original);
            assert!(t.approx_eq(&Transform::identity(), 1e-4), "case {i}: {t:?}");
        }
    }

    #[test]
    fn invert_composed_transform() {
        let mut t = Transform::identity();
        t.translate(12.0, -3.0, 0.5);
        t.rotate_z(0.8);
        t.rotate_x(-0.3);
        t.scale_xyz(2.0, 0.5, 1.5);
        let original = t.clone();

        t.invert().expect("affine transform with non-zero scale");
        t.multiply(&original);
        assert!(t.approx_eq(&Transform::identity(), 1e-4));
    }

    #[test]
    fn invert_singular_fails_and_preserves() {
        let mut t = Transform::identity();
        t.scale_xyz(1.0, 0.0, 1.0);
        let before = t.clone();

        let err = t.invert().unwrap_err();
        assert!(matches!(err, TransformError::Singular { .. }));
        assert_eq!(t, before);
    }

    #[test]
    fn invert_near_singular_within_epsilon_fails() {
        // Columns 0 and 1 are parallel up to 1e-12.
        #[rustfmt::skip]
        let mut t = Transform::from_cols_array([
            1.0, 0.0, 0.0, 0.0,
            1.0, 1e-12, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let before = t.clone();
        assert!(t.invert().is_err());
        assert_eq!(t, before);
    }

    #[test]
    fn invert_tiny_but_well_conditioned_scale_succeeds() {
        let mut t = Transform::identity();
        t.scale_xyz(1e-4, 1e-4, 1e-4);
        t.invert().expect("uniform scale is well conditioned");
        assert!((t.get(0, 0) - 1e4).abs() < 1.0);
    }

    #[test]
    fn invert_overflowing_inverse_fails() {
        // Well conditioned, but 1/1e-39 does not fit in f32.
        let mut t = Transform::identity();
        t.scale(1e-39);
        let before = t.clone();

        let err = t.invert().unwrap_err();
        assert!(matches!(err, TransformError::Singular { .. }));
        assert_eq!(t, before);
        assert!(t.is_finite());
    }

    #[test]
    fn invert_zero_matrix_fails() {
        let mut t = Transform::from_cols_array([0.0; 16]);
        assert!(t.invert().is_err());
    }

    // ── serialization ─────────────────────────────────────────────────────

    #[test]
    fn write_floats_appends_sixteen_in_column_major_order() {
        let t = sample();
        let mut out = Vec::new();
        t.write_floats(&mut out);
        assert_eq!(out.len(), t.float_count());
        assert_eq!(out.as_slice(), t.as_slice());
    }

    #[test]
    fn as_bytes_is_tightly_packed() {
        let t = sample();
        let bytes = t.as_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[48..52], &5.0f32.to_ne_bytes());
    }
}
