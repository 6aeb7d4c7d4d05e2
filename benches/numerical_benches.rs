#![allow(non_snake_case)]
use RustedNumDrill::numerical::function_catalog::Integrand;
use RustedNumDrill::numerical::inter_n_extrapolate::{Point, lagrange, newton_divided_differences};
use RustedNumDrill::numerical::quadrature::{IntegrationMethod, integrate};
use RustedNumDrill::problems::generator::{generate_problem, generate_problem_set};
use RustedNumDrill::problems::problem_instance::Method;
use RustedNumDrill::somelinalg::iterative_solvers_cpu::IterativeConfig;
use RustedNumDrill::somelinalg::linear_sys_api::{LinearMethod, solve_linear_system};
use criterion::{Criterion, criterion_group, criterion_main};
use nalgebra::{Matrix3, Vector3};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;
use strum::IntoEnumIterator;

fn bench_interpolation(c: &mut Criterion) {
    let points: Vec<Point> = (0..8)
        .map(|i| Point::new(3.0 * i as f64, (i as f64).powi(3) - 2.0 * i as f64))
        .collect();
    c.bench_function("lagrange 8 points", |b| {
        b.iter(|| lagrange(black_box(10.0), black_box(&points)))
    });
    c.bench_function("divided differences 8 points", |b| {
        b.iter(|| newton_divided_differences(black_box(10.0), black_box(&points)))
    });
}

fn bench_linear_solvers(c: &mut Criterion) {
    let A = Matrix3::new(10.0, -1.0, 2.0, -1.0, 11.0, -1.0, 2.0, -1.0, 10.0);
    let rhs = Vector3::new(6.0, 25.0, -11.0);
    let config = IterativeConfig::default();
    let mut group = c.benchmark_group("3x3 solvers");
    for method in LinearMethod::iter() {
        group.bench_function(method.to_string(), |b| {
            b.iter(|| solve_linear_system(method, black_box(&A), black_box(&rhs), &config))
        });
    }
    group.finish();
}

fn bench_quadrature(c: &mut Criterion) {
    let f = |x: f64| Integrand::Gaussian.evaluate(x);
    let mut group = c.benchmark_group("quadrature");
    for method in IntegrationMethod::iter() {
        let n = method.subdivision_choices()[0];
        group.bench_function(method.to_string(), |b| {
            b.iter(|| integrate(method, f, black_box(0.0), black_box(1.0), n))
        });
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("generate one problem per method", |b| {
        b.iter(|| {
            for method in Method::all() {
                black_box(generate_problem(method, 3, &mut rng));
            }
        })
    });
    c.bench_function("generate problem set of 15", |b| {
        b.iter(|| black_box(generate_problem_set(15, 1, &mut rng)))
    });
}

criterion_group!(
    benches,
    bench_interpolation,
    bench_linear_solvers,
    bench_quadrature,
    bench_generation
);
criterion_main!(benches);
