use crate::Utils::engine_settings::EngineSettings;
use crate::numerical::inter_n_extrapolate::{Point, lagrange, newton_forward};
use crate::numerical::function_catalog::RootEquation;
use crate::numerical::quadrature::trapezoidal;
use crate::numerical::scalar_roots::{RootFindingMethod, ScalarRootFinder, find_real_roots};
use crate::problems::generator::{
    generate_problem_set_with_settings, generate_problem_with_settings,
    solve_reference,
};
use crate::problems::problem_instance::{Method, Problem, ReferenceAnswer};
use crate::somelinalg::linear_sys_api::{LinearMethod, solve_linear_system};
use crate::verifier::answer_check::{verify, verify_with_settings};
use log::{info, warn};
use nalgebra::{Matrix3, Vector3};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Answers a player could type for `reference`: the exact value in the slot format
fn sample_inputs(reference: &ReferenceAnswer) -> Vec<String> {
    match reference {
        ReferenceAnswer::Scalar(v) => vec![format!("{:.4}", v)],
        ReferenceAnswer::PerTarget(pairs) => {
            pairs.iter().map(|(_, y)| format!("{:.3}", y).replace('.', ",")).collect()
        }
        ReferenceAnswer::Triple(values) => values.iter().map(|v| format!("{:.2}", v)).collect(),
        ReferenceAnswer::RootSet(roots) => vec![format!("{:.3}", roots[roots.len() - 1])],
    }
}

/// `settings` are the ones `main` started with; example 3 builds its own
pub fn drill_examples(example: usize, settings: &EngineSettings) {
    match example {
        0 => {
            // numeric core on its own
            let points: Vec<Point> = vec![(0.0, 0.0).into(), (1.0, 1.0).into(), (4.0, 2.0).into()];
            info!("Lagrange through {:?} at x = 2: {}", points, lagrange(2.0, &points));
            let even: Vec<Point> = (0..4).map(|i| Point::new(i as f64, (i * i) as f64)).collect();
            info!("Newton forward for x^2 at 2.5: {}", newton_forward(2.5, &even));

            let equation = RootEquation::DepressedCubic;
            let (min, max) = equation.scan_range();
            info!("roots of {}: {:?}", equation.description(), find_real_roots(&equation, min, max, 1000));
            let solver = ScalarRootFinder::with_config(settings.root_finding.clone());
            match solver.newton_raphson(&equation, 2.0) {
                Ok(result) => info!("Newton-Raphson from 2.0: {} in {} iterations", result.root, result.iterations),
                Err(e) => warn!("Newton-Raphson from 2.0: {}", e),
            }

            let A = Matrix3::new(10.0, -1.0, 2.0, -1.0, 11.0, -1.0, 2.0, -1.0, 10.0);
            let b = Vector3::new(6.0, 25.0, -11.0);
            for method in [LinearMethod::Montante, LinearMethod::GaussSeidel] {
                match solve_linear_system(method, &A, &b, &settings.iterative) {
                    Ok(x) => info!("{}: {:?}", method, x.as_slice()),
                    Err(e) => warn!("{}: {}", method, e),
                }
            }

            match trapezoidal(|x| x * x, 0.0, 2.0, 4) {
                Ok(value) => info!("trapezoidal x^2 on [0, 2], n = 4: {}", value),
                Err(e) => warn!("{}", e),
            }
        }
        1 => {
            // one round per method, answered with the reference values
            let mut rng = StdRng::seed_from_u64(2024);
            for method in Method::all() {
                let problem = generate_problem_with_settings(method, 1, settings, &mut rng);
                let inputs = sample_inputs(&solve_reference(&problem));
                let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
                let verdict = verify_with_settings(&problem, &inputs, settings);
                info!(
                    "{}: {}/{} correct\n{}",
                    method,
                    verdict.correct_count(),
                    verdict.entries.len(),
                    verdict.table()
                );
            }
        }
        2 => {
            // a round of distinct methods with one wrong and one unreadable answer
            let mut rng = StdRng::seed_from_u64(7);
            let set = generate_problem_set_with_settings(6, 1, settings, &mut rng);
            for (i, problem) in set.iter().enumerate() {
                let mut inputs = sample_inputs(&problem.reference_answer());
                match i {
                    1 => inputs[0] = "1000".to_string(),
                    2 => inputs[0] = "three".to_string(),
                    _ => {}
                }
                let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
                let verdict = verify_with_settings(&problem, &inputs, settings);
                info!("{}\n{}", problem.description(), verdict.table());
            }
        }
        3 => {
            // tighter tolerances and a coarser root finder from a settings document
            let document = "tolerance\nroot_finding: 0.0001, 0.0001\nroot_finding\ntolerance: 1e-6\nverbose: true";
            let tight = match EngineSettings::from_document(document) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("{}", e);
                    EngineSettings::default()
                }
            };
            let mut rng = StdRng::seed_from_u64(3);
            let problem =
                generate_problem_with_settings(Method::from(RootFindingMethod::Secant), 1, &tight, &mut rng);
            let inputs = sample_inputs(&problem.reference_answer());
            let inputs: Vec<&str> = inputs.iter().map(String::as_str).collect();
            info!("default rule:\n{}", verify(&problem, &inputs).table());
            info!("settings rule:\n{}", verify_with_settings(&problem, &inputs, &tight).table());
        }
        _ => {}
    }
}
