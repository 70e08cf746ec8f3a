use std::ops::{Mul, MulAssign};
use std::sync::Arc;

use crate::{
    COEFF_COUNT, Transformation,
    error::{Error, Result},
};

/// How the translation column is computed when inverting a matrix.
///
/// The linear part of the inverse is the same in both modes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InverseTranslation {
    /// `tx' = (c*ty - d*tx) / det` and `ty' = (b*tx - a*ty) / det`,
    /// giving the true inverse.
    #[default]
    Exact,
    /// `tx' = c*ty - d*tx / det` and `ty' = -a*ty + b*tx / det`.
    ///
    /// Only the second term of each numerator is divided by the determinant.
    /// This is not an inverse in general (inverting twice does not restore the translation),
    /// but matches the coefficients emitted by older `matrix()` inversion code
    /// for callers which must stay bit-compatible with it.
    Legacy,
}

/// A 2D affine transformation: a linear map followed by a translation.
///
/// The coefficients describe the augmented matrix
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// | 0  0  1  |
/// ```
///
/// so that a point `(x, y)` maps to `(a*x + c*y + tx, b*x + d*y + ty)`.
///
/// Operations which apply a further transform (translate, scale, rotate, skew, multiply, invert)
/// mutate the matrix in place and return `&mut Self` so they can be chained.
/// Each has a `with_*` counterpart which consumes a copy and returns the result instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "[f64; 6]", into = "[f64; 6]")
)]
pub struct AffineMatrix {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    tx: f64,
    ty: f64,
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineMatrix {
    pub const IDENTITY: AffineMatrix = AffineMatrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// A pure translation.
    pub const fn from_translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// A pure scale along each axis.
    pub const fn from_scale(x: f64, y: f64) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// A rotation by `angle` radians.
    ///
    /// A positive angle rotates the positive x axis towards the positive y axis,
    /// i.e. `(1, 0)` maps to `(cos(angle), sin(angle))`.
    pub fn from_rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// A skew by `x` radians along the x axis and `y` radians along the y axis.
    ///
    /// The tangent diverges as either angle approaches ±π/2;
    /// the resulting coefficients are then very large or infinite.
    pub fn from_skew(x: f64, y: f64) -> Self {
        Self::new(1.0, y.tan(), x.tan(), 1.0, 0.0, 0.0)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    /// Translation along the x axis.
    pub fn tx(&self) -> f64 {
        self.tx
    }

    /// Translation along the y axis.
    pub fn ty(&self) -> f64 {
        self.ty
    }

    pub fn set_a(&mut self, a: f64) {
        self.a = a;
    }

    pub fn set_b(&mut self, b: f64) {
        self.b = b;
    }

    pub fn set_c(&mut self, c: f64) {
        self.c = c;
    }

    pub fn set_d(&mut self, d: f64) {
        self.d = d;
    }

    pub fn set_tx(&mut self, tx: f64) {
        self.tx = tx;
    }

    pub fn set_ty(&mut self, ty: f64) {
        self.ty = ty;
    }

    /// Add to the translation.
    ///
    /// The offset is added to the stored translation as-is,
    /// rather than being composed with the linear part.
    pub fn translate(&mut self, x: f64, y: f64) -> &mut Self {
        self.tx += x;
        self.ty += y;
        self
    }

    /// Scale along each axis before the existing transform.
    pub fn scale(&mut self, x: f64, y: f64) -> &mut Self {
        self.multiply(&Self::from_scale(x, y))
    }

    /// Rotate by `angle` radians before the existing transform.
    ///
    /// See [AffineMatrix::from_rotation] for the direction convention.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.multiply(&Self::from_rotation(angle))
    }

    /// Skew by the given angles (in radians) before the existing transform.
    ///
    /// See [AffineMatrix::from_skew].
    pub fn skew(&mut self, x: f64, y: f64) -> &mut Self {
        self.multiply(&Self::from_skew(x, y))
    }

    /// Right-multiply by `other`, so that `other` is applied first
    /// and this matrix's existing transform afterwards.
    pub fn multiply(&mut self, other: &AffineMatrix) -> &mut Self {
        *self = self.composed(other);
        self
    }

    /// Replace this matrix with its inverse.
    ///
    /// Fails with [Error::InvalidOperation] if the determinant is exactly zero,
    /// in which case the matrix is left unchanged.
    pub fn invert(&mut self) -> Result<&mut Self> {
        self.invert_with(InverseTranslation::Exact)
    }

    /// As [AffineMatrix::invert], choosing how the translation is computed.
    pub fn invert_with(&mut self, mode: InverseTranslation) -> Result<&mut Self> {
        *self = self.inverse_with(mode)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_translate(mut self, x: f64, y: f64) -> Self {
        self.translate(x, y);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, x: f64, y: f64) -> Self {
        self.scale(x, y);
        self
    }

    #[must_use]
    pub fn with_rotate(mut self, angle: f64) -> Self {
        self.rotate(angle);
        self
    }

    #[must_use]
    pub fn with_skew(mut self, x: f64, y: f64) -> Self {
        self.skew(x, y);
        self
    }

    #[must_use]
    pub fn with_multiply(self, other: &AffineMatrix) -> Self {
        self.composed(other)
    }

    /// Return the inverse of this matrix without modifying it.
    pub fn inverse(&self) -> Result<Self> {
        self.inverse_with(InverseTranslation::Exact)
    }

    pub fn inverse_with(&self, mode: InverseTranslation) -> Result<Self> {
        let det = self.determinant();
        // exact comparison: near-singular matrices are still inverted
        if det == 0.0 {
            log::debug!("Refusing to invert singular matrix {self}");
            return Err(Error::InvalidOperation(
                "matrix is non-invertible (determinant is zero)".into(),
            ));
        }
        let Self { a, b, c, d, tx, ty } = *self;
        let (inv_tx, inv_ty) = match mode {
            InverseTranslation::Exact => ((c * ty - d * tx) / det, (b * tx - a * ty) / det),
            InverseTranslation::Legacy => (c * ty - d * tx / det, -a * ty + b * tx / det),
        };
        Ok(Self::new(d / det, -b / det, -c / det, a / det, inv_tx, inv_ty))
    }

    /// Map a point through this transform.
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    pub fn is_invertible(&self) -> bool {
        self.determinant() != 0.0
    }

    /// Whether the coefficients are exactly those of the identity.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Set all coefficients from `[a, b, c, d, tx, ty]`.
    ///
    /// Fails with [Error::InvalidInput] if fewer than 6 values are given,
    /// in which case the matrix is left unchanged.
    /// Values after the sixth are ignored.
    pub fn set_array(&mut self, values: &[f64]) -> Result<()> {
        let Some(coeffs) = values.first_chunk::<COEFF_COUNT>() else {
            return Err(Error::InvalidInput(format!(
                "expected {COEFF_COUNT} coefficients, got {}",
                values.len()
            )));
        };
        *self = Self::from(*coeffs);
        Ok(())
    }

    /// The coefficients as `[a, b, c, d, tx, ty]`,
    /// the layout expected by image backends performing affine resampling.
    pub fn to_array(&self) -> [f64; COEFF_COUNT] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }

    /// `self · other`, computed from a snapshot of both operands.
    fn composed(&self, other: &AffineMatrix) -> Self {
        Self::new(
            self.a * other.a + self.c * other.b,
            self.b * other.a + self.d * other.b,
            self.a * other.c + self.c * other.d,
            self.b * other.c + self.d * other.d,
            self.a * other.tx + self.c * other.ty + self.tx,
            self.b * other.tx + self.d * other.ty + self.ty,
        )
    }
}

impl From<[f64; COEFF_COUNT]> for AffineMatrix {
    fn from(value: [f64; COEFF_COUNT]) -> Self {
        let [a, b, c, d, tx, ty] = value;
        Self::new(a, b, c, d, tx, ty)
    }
}

impl From<AffineMatrix> for [f64; COEFF_COUNT] {
    fn from(value: AffineMatrix) -> Self {
        value.to_array()
    }
}

impl TryFrom<&[f64]> for AffineMatrix {
    type Error = Error;

    fn try_from(value: &[f64]) -> Result<Self> {
        let mut out = Self::IDENTITY;
        out.set_array(value)?;
        Ok(out)
    }
}

/// `lhs * rhs` applies `rhs` first, then `lhs`.
impl Mul for AffineMatrix {
    type Output = AffineMatrix;

    fn mul(self, rhs: AffineMatrix) -> Self::Output {
        self.composed(&rhs)
    }
}

impl MulAssign for AffineMatrix {
    fn mul_assign(&mut self, rhs: AffineMatrix) {
        self.multiply(&rhs);
    }
}

impl Transformation for AffineMatrix {
    fn transform(&self, pt: [f64; 2]) -> [f64; 2] {
        let (x, y) = self.transform_point(pt[0], pt[1]);
        [x, y]
    }

    fn column_transform_into(
        &self,
        xs: &[f64],
        ys: &[f64],
        out_xs: &mut [f64],
        out_ys: &mut [f64],
    ) {
        for (((x, y), ox), oy) in xs
            .iter()
            .zip(ys.iter())
            .zip(out_xs.iter_mut())
            .zip(out_ys.iter_mut())
        {
            *ox = self.a * x + self.c * y + self.tx;
            *oy = self.b * x + self.d * y + self.ty;
        }
    }

    fn try_invert(&self) -> Option<Arc<dyn Transformation>> {
        self.inverse()
            .ok()
            .map(|inv| Arc::new(inv) as Arc<dyn Transformation>)
    }

    fn is_identity(&self) -> bool {
        AffineMatrix::is_identity(self)
    }
}
