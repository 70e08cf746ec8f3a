use criterion::{Criterion, criterion_group, criterion_main};
use faer::rand::{Rng, SeedableRng, rngs::SmallRng};
use image_affine_matrix::{AffineMatrix, Transformation};
use std::{hint::black_box, sync::Arc};

/// Wraps a matrix but only implements the required methods,
/// to determine the overhead of the trait default implementations.
#[derive(Debug, Clone, Copy)]
struct DefaultAffine(AffineMatrix);

impl Transformation for DefaultAffine {
    fn transform(&self, pt: [f64; 2]) -> [f64; 2] {
        self.0.transform(pt)
    }

    fn try_invert(&self) -> Option<Arc<dyn Transformation>> {
        self.0.try_invert()
    }

    fn is_identity(&self) -> bool {
        self.0.is_identity()
    }
}

fn points(npoints: usize) -> Vec<[f64; 2]> {
    let mut rng = SmallRng::seed_from_u64(1991);
    let mut pts = Vec::with_capacity(npoints);
    for _ in 0..npoints {
        pts.push([rng.random::<f64>() * 100.0, rng.random::<f64>() * 100.0]);
    }
    pts
}

fn matrix() -> AffineMatrix {
    let mut m = AffineMatrix::identity();
    m.skew(-0.35, -0.09).rotate(0.785).scale(0.5, 0.5);
    m
}

fn bench_bulk<T: Transformation>(c: &mut Criterion, name: &str, t: &T) {
    let pts = points(1000);
    let mut out = vec![[f64::NAN; 2]; pts.len()];
    c.bench_function(name, |b| {
        b.iter(|| {
            t.bulk_transform_into(black_box(&pts), &mut out);
        })
    });
}

fn bench_columns<T: Transformation>(c: &mut Criterion, name: &str, t: &T) {
    let (xs, ys): (Vec<f64>, Vec<f64>) = points(1000).into_iter().map(|[x, y]| (x, y)).unzip();
    let mut out_xs = vec![f64::NAN; xs.len()];
    let mut out_ys = vec![f64::NAN; ys.len()];
    c.bench_function(name, |b| {
        b.iter(|| {
            t.column_transform_into(black_box(&xs), black_box(&ys), &mut out_xs, &mut out_ys);
        })
    });
}

fn bulk(c: &mut Criterion) {
    bench_bulk(c, "bulk", &matrix());
    bench_bulk(c, "bulk_default", &DefaultAffine(matrix()));
}

fn columns(c: &mut Criterion) {
    bench_columns(c, "columns", &matrix());
    bench_columns(c, "columns_default", &DefaultAffine(matrix()));
}

fn compose(c: &mut Criterion) {
    c.bench_function("compose", |b| {
        b.iter(|| {
            let mut m = AffineMatrix::identity();
            m.skew(black_box(-0.35), black_box(-0.09))
                .rotate(black_box(0.785))
                .translate(black_box(100.0), black_box(100.0));
            black_box(m)
        })
    });
}

fn invert(c: &mut Criterion) {
    let m = matrix();
    c.bench_function("invert", |b| b.iter(|| black_box(m).inverse()));
}

criterion_group!(atoms, bulk, columns, compose, invert);
criterion_main!(atoms);
