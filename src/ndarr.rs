use ndarray::{Array2, ArrayView2};

use crate::{
    Transformation,
    error::{Error, Result},
};

/// Transform an array of points with shape `(n, 2)`, where each row is `[x, y]`.
///
/// Fails with [Error::InvalidInput] if the second axis does not have length 2.
pub fn transform_array<T: Transformation + ?Sized>(
    t: &T,
    points: ArrayView2<f64>,
) -> Result<Array2<f64>> {
    if points.ncols() != 2 {
        return Err(Error::InvalidInput(format!(
            "expected points of shape (n, 2), got {:?}",
            points.shape()
        )));
    }
    let mut out = Array2::from_elem(points.raw_dim(), f64::NAN);
    for (pt, mut buf) in points.rows().into_iter().zip(out.rows_mut()) {
        let [x, y] = t.transform([pt[0], pt[1]]);
        buf[0] = x;
        buf[1] = y;
    }
    Ok(out)
}
