use std::sync::Arc;

/// Point transformation interface, as consumed by image-warping backends.
///
/// Implementations may not perform any bounds checks on the input,
/// as these transformations generally happen in performance-critical hot loops.
/// Output buffers should be at least as long as the input:
/// a shorter buffer may leave the output incomplete or, for columnar transforms, panic.
pub trait Transformation: std::fmt::Debug + Send + Sync {
    /// Transform a single `[x, y]` point.
    fn transform(&self, pt: [f64; 2]) -> [f64; 2];

    /// Transform multiple points, writing to pre-allocated output buffers.
    ///
    /// Stops at the shorter of `pts` and `bufs`; any further buffer slots are left untouched.
    ///
    /// The trait default implementation simply calls [Transformation::transform] in turn;
    /// specific transforms may override it.
    fn bulk_transform_into(&self, pts: &[[f64; 2]], bufs: &mut [[f64; 2]]) {
        for (pt, buf) in pts.iter().zip(bufs.iter_mut()) {
            *buf = self.transform(*pt);
        }
    }

    /// Transform multiple points given as separate x and y columns.
    /// Writes to pre-allocated output columns.
    ///
    /// The trait implementation is inefficient,
    /// simply wrapping [Transformation::transform],
    /// and should be overridden by implementors where optimisations are available.
    ///
    /// Panics if an output column is shorter than the shorter of `xs` and `ys`.
    fn column_transform_into(
        &self,
        xs: &[f64],
        ys: &[f64],
        out_xs: &mut [f64],
        out_ys: &mut [f64],
    ) {
        for (idx, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
            let [ox, oy] = self.transform([*x, *y]);
            out_xs[idx] = ox;
            out_ys[idx] = oy;
        }
    }

    /// Transform multiple points into a newly-allocated buffer.
    fn transform_many(&self, pts: &[[f64; 2]]) -> Vec<[f64; 2]> {
        let mut out = vec![[f64::NAN; 2]; pts.len()];
        self.bulk_transform_into(pts, &mut out);
        out
    }

    /// Return the inverse transformation, if it exists.
    fn try_invert(&self) -> Option<Arc<dyn Transformation>>;

    /// Whether this transformation definitely leaves every point unchanged.
    fn is_identity(&self) -> bool;
}
