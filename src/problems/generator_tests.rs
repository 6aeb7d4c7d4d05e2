/////////////////////////////TESTS////////////////////////////////////////////////////
/*
tests:
every method generates a well-posed problem over many seeds
reference answers agree with a recomputation
properties of the numeric core on generated data
problem sets
*/

#[cfg(test)]
mod tests {
    use crate::numerical::inter_n_extrapolate::{
        InterpolationMethod, is_equally_spaced, newton_divided_differences,
    };
    use crate::Utils::engine_settings::EngineSettings;
    use crate::numerical::scalar_roots::RootFindingMethod;
    use crate::problems::generator::{
        generate_problem, generate_problem_set, generate_problem_set_with_settings,
        generate_problem_with_settings, generate_random_problem, solve_reference,
    };
    use crate::problems::problem_instance::{
        Method, Problem, ProblemFamily, ProblemInstance, ReferenceAnswer,
    };
    use crate::somelinalg::linear_sys_api::{LinearMethod, solve_linear_system};
    use crate::somelinalg::iterative_solvers_cpu::IterativeConfig;
    use crate::somelinalg::linear_sys_diagnostics::{determinant, is_strictly_diagonally_dominant};
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    const SEEDS: u64 = 25;

    #[test]
    fn test_every_method_generates_consistent_problems() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            for method in Method::all() {
                let problem = generate_problem(method, 1 + (seed % 4) as u32, &mut rng);
                assert_eq!(problem.method(), method);
                assert_eq!(problem.family(), method.family());
                let reference = problem.reference_answer();
                assert_eq!(reference.slots(), problem.answer_labels().len());
                assert_eq!(solve_reference(&problem), reference);
                assert!(!problem.description().is_empty());
            }
        }
    }

    #[test]
    fn test_interpolation_invariants() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            for method in InterpolationMethod::iter() {
                for difficulty in [1, 3] {
                    let ProblemInstance::Interpolation(problem) =
                        generate_problem(method.into(), difficulty, &mut rng)
                    else {
                        panic!("wrong family");
                    };
                    let xs: HashSet<i64> =
                        problem.known_points.iter().map(|p| p.x as i64).collect();
                    assert_eq!(xs.len(), problem.known_points.len());
                    assert!((2..=3).contains(&problem.targets.len()));
                    for t in &problem.targets {
                        assert!(!xs.contains(&(*t as i64)));
                    }
                    match method {
                        InterpolationMethod::NewtonForward | InterpolationMethod::NewtonBackward => {
                            assert!(is_equally_spaced(&problem.known_points))
                        }
                        InterpolationMethod::DividedDifferences => {
                            assert!(!is_equally_spaced(&problem.known_points))
                        }
                        InterpolationMethod::Lagrange => {}
                    }
                    let degree = problem.polynomial.degree();
                    if difficulty <= 2 {
                        assert!((2..=3).contains(&degree));
                    } else {
                        assert!((3..=4).contains(&degree));
                    }
                    // more nodes than the degree needs: every method reproduces the polynomial
                    for (i, t) in problem.targets.iter().enumerate() {
                        let scale = problem.exact[i].abs().max(1.0);
                        assert!((problem.reference[i] - problem.exact[i]).abs() < 1e-6 * scale);
                        let dd = newton_divided_differences(*t, &problem.known_points);
                        assert!((problem.reference[i] - dd).abs() < 1e-6 * scale);
                    }
                }
            }
        }
    }

    #[test]
    fn test_linear_system_invariants() {
        let config = IterativeConfig::default();
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            for method in LinearMethod::iter() {
                let ProblemInstance::LinearSystem(problem) =
                    generate_problem(method.into(), 1, &mut rng)
                else {
                    panic!("wrong family");
                };
                assert!(determinant(&problem.A).abs() >= 0.1);
                if method.is_iterative() {
                    assert!(is_strictly_diagonally_dominant(&problem.A));
                    let direct =
                        solve_linear_system(LinearMethod::GaussElimination, &problem.A, &problem.b, &config)
                            .unwrap();
                    assert_relative_eq!(problem.reference, direct, epsilon = 1e-6);
                } else {
                    assert!(problem.A.iter().all(|c| *c != 0.0));
                    for i in 0..3 {
                        let tol = 0.01 * problem.exact[i].abs() + 0.01;
                        assert!((problem.reference[i] - problem.exact[i]).abs() <= tol);
                    }
                }
            }
        }
    }

    #[test]
    fn test_root_sets_are_roots() {
        for seed in 0..SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let problem = generate_random_problem(ProblemFamily::RootFinding, 1, &mut rng);
            let ReferenceAnswer::RootSet(roots) = problem.reference_answer() else {
                panic!("root finding must answer with a set");
            };
            assert!(!roots.is_empty());
            let ProblemInstance::RootFinding(inner) = &problem else {
                panic!("wrong family");
            };
            let (lo, hi) = inner.search_range;
            for root in roots {
                assert!(root >= lo && root <= hi);
                assert!(inner.equation.value(root).abs() < 1e-6);
            }
            if inner.method.is_bracketing() {
                assert!(inner.equation.brackets_a_root());
            }
        }
    }

    #[test]
    fn test_problem_set_spreads_methods() {
        let mut rng = StdRng::seed_from_u64(8);
        let set = generate_problem_set(15, 1, &mut rng);
        assert_eq!(set.len(), 15);
        let methods: HashSet<Method> = set.iter().map(|p| p.method()).collect();
        assert_eq!(methods.len(), 15);
        assert!(set.iter().all(|p| p.family() != ProblemFamily::Interpolation));

        let set = generate_problem_set(20, 1, &mut rng);
        let methods: HashSet<Method> = set.iter().map(|p| p.method()).collect();
        assert_eq!(methods.len(), 15);
    }

    #[test]
    fn test_same_seed_same_problem() {
        let method = Method::from(LinearMethod::Montante);
        let first = generate_problem(method, 1, &mut StdRng::seed_from_u64(99));
        let second = generate_problem(method, 1, &mut StdRng::seed_from_u64(99));
        assert_eq!(first.description(), second.description());
        assert_eq!(first.reference_answer(), second.reference_answer());
    }

    #[test]
    fn test_settings_reach_the_generated_problems() {
        let document = "root_finding\ntolerance: 1e-6\nmax_iterations: 60\nlinear_iterative\ntolerance: 1e-6\nmax_iterations: 50";
        let settings = EngineSettings::from_document(document).unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        let ProblemInstance::LinearSystem(problem) =
            generate_problem_with_settings(LinearMethod::GaussSeidel.into(), 1, &settings, &mut rng)
        else {
            panic!("wrong family");
        };
        assert_eq!(problem.config, settings.iterative);
        let rerun =
            solve_linear_system(LinearMethod::GaussSeidel, &problem.A, &problem.b, &settings.iterative)
                .unwrap();
        assert_eq!(problem.reference, rerun);

        let ProblemInstance::RootFinding(problem) =
            generate_problem_with_settings(RootFindingMethod::Secant.into(), 1, &settings, &mut rng)
        else {
            panic!("wrong family");
        };
        assert_eq!(problem.config, settings.root_finding);

        let set = generate_problem_set_with_settings(15, 1, &settings, &mut rng);
        for problem in &set {
            match problem {
                ProblemInstance::LinearSystem(p) => assert_eq!(p.config.max_iterations, 50),
                ProblemInstance::RootFinding(p) => assert_eq!(p.config.max_iterations, 60),
                _ => {}
            }
        }
    }
}
