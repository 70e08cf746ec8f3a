//! 2D affine transformation matrices.
//!
//! [AffineMatrix] holds the six coefficients of an affine map,
//! composes it with translations, scales, rotations and skews,
//! inverts it, applies it to points,
//! and renders it in the `matrix(a,b,c,d,tx,ty)` notation understood by CSS and SVG.
//! [AffineMatrix::to_array] gives the coefficient layout expected by image-resampling backends.
use smallvec::SmallVec;

mod affine;
pub use affine::{AffineMatrix, InverseTranslation};

pub mod error;
pub use error::{Error, Result};

mod traits;
pub use traits::Transformation;

mod transform_string;

#[cfg(feature = "ndarray")]
mod ndarr;
#[cfg(feature = "ndarray")]
pub use ndarr::transform_array;

/// Number of coefficients in a 2D affine matrix.
pub const COEFF_COUNT: usize = 6;

/// A short vector type alias for convenience,
/// sized to hold one matrix's coefficients without allocating.
type ShortVec<T> = SmallVec<[T; COEFF_COUNT]>;
