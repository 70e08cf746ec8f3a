//! The `matrix(a,b,c,d,tx,ty)` notation used by the CSS `transform` property
//! and the SVG `transform` attribute.
//!
//! Coefficients are rendered with Rust's default `f64` formatting,
//! i.e. the shortest decimal which round-trips, with no trailing `.0` on whole numbers.
use std::{fmt, str::FromStr};

use crate::{
    AffineMatrix, COEFF_COUNT, ShortVec,
    error::{Error, Result},
};

const NAME: &str = "matrix";
const OPEN: char = '(';
const CLOSE: char = ')';

impl AffineMatrix {
    /// Render as `matrix(a,b,c,d,tx,ty)`, as for the [fmt::Display] implementation.
    pub fn to_transform_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AffineMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, tx, ty] = self.to_array();
        write!(f, "{NAME}{OPEN}{a},{b},{c},{d},{tx},{ty}{CLOSE}")
    }
}

/// Parse `matrix(a,b,c,d,tx,ty)`.
///
/// Coefficients may be separated by a comma, by whitespace, or both,
/// as the SVG transform grammar allows; empty fields between commas are rejected.
/// Whitespace is allowed around the whole string and between `matrix` and `(`.
impl FromStr for AffineMatrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some(inner) = s
            .trim()
            .strip_prefix(NAME)
            .and_then(|rest| rest.trim_start().strip_prefix(OPEN))
            .and_then(|rest| rest.strip_suffix(CLOSE))
        else {
            log::trace!("Not a matrix() transform: {s:?}");
            return Err(Error::InvalidInput(format!(
                "expected `{NAME}{OPEN}a,b,c,d,tx,ty{CLOSE}`, got {s:?}"
            )));
        };

        let mut tokens: ShortVec<&str> = ShortVec::new();
        for field in inner.split(',') {
            let before = tokens.len();
            tokens.extend(field.split_whitespace());
            if tokens.len() == before {
                log::trace!("Empty coefficient in {s:?}");
                return Err(Error::InvalidInput(format!(
                    "empty coefficient between commas in {s:?}"
                )));
            }
        }
        if tokens.len() != COEFF_COUNT {
            return Err(Error::InvalidInput(format!(
                "expected {COEFF_COUNT} coefficients, got {}",
                tokens.len()
            )));
        }

        let mut coeffs: ShortVec<f64> = ShortVec::with_capacity(COEFF_COUNT);
        for token in tokens {
            let value = token.parse::<f64>().map_err(|e| {
                log::trace!("Bad coefficient {token:?} in {s:?}");
                Error::InvalidInput(format!("invalid coefficient {token:?}: {e}"))
            })?;
            coeffs.push(value);
        }
        AffineMatrix::try_from(coeffs.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{init_logger, new_rng, random_matrix};

    #[test]
    fn test_identity_string() {
        assert_eq!(
            AffineMatrix::identity().to_transform_string(),
            "matrix(1,0,0,1,0,0)"
        );
    }

    #[test]
    fn test_fractional_string() {
        let mut m = AffineMatrix::identity();
        m.scale(0.5, 0.25).translate(100.0, -12.5);
        assert_eq!(m.to_string(), "matrix(0.5,0,0,0.25,100,-12.5)");
    }

    #[test]
    fn test_non_finite_string() {
        let m = AffineMatrix::new(f64::NAN, f64::INFINITY, 0.0, 1.0, 0.0, 0.0);
        assert_eq!(m.to_string(), "matrix(NaN,inf,0,1,0,0)");
    }

    #[test]
    fn test_parse_round_trip() {
        let mut rng = new_rng();
        for _ in 0..100 {
            let m = random_matrix(&mut rng);
            let parsed: AffineMatrix = m.to_transform_string().parse().unwrap();
            assert_eq!(parsed, m);
        }
    }

    #[test]
    fn test_parse_separators() {
        let expected = AffineMatrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        for s in [
            "matrix(1,2,3,4,5,6)",
            "  matrix(1, 2, 3, 4, 5, 6)\n",
            "matrix( 1 ,2 ,3 ,4 ,5 ,6 )",
            "matrix(1 2 3 4 5 6)",
            "matrix(1.0 2e0\t3 4 5 6)",
            "matrix(1 2,3 4,5 6)",
            "matrix(1, 2 3,4\n5 ,6)",
            "matrix (1,2,3,4,5,6)",
            "matrix\t( 1 2 3 4 5 6 )",
        ] {
            assert_eq!(s.parse::<AffineMatrix>().unwrap(), expected, "{s:?}");
        }
    }

    #[test]
    fn test_parse_errors() {
        init_logger();
        for s in [
            "",
            "matrix(1,2,3,4,5,6",
            "translate(1,2)",
            "matrix(1,2,3,4,5)",
            "matrix(1,2,3,4,5,6,7)",
            "matrix(1,2,3,4,5,x)",
            "matrix(1,,3,4,5,6)",
            "matrix(,1,2,3,4,5,6)",
            "matrix(1,2,3,4,5,6,)",
            "matrix(1, ,3,4,5,6)",
            "matrix()",
            "matrixx(1,2,3,4,5,6)",
        ] {
            let err = s.parse::<AffineMatrix>().unwrap_err();
            assert!(matches!(err, Error::InvalidInput(_)), "{s:?}: {err}");
        }
    }
}
