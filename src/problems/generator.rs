use crate::Utils::engine_settings::EngineSettings;
use crate::problems::integration_task::IntegrationProblem;
use crate::problems::interpolation_task::InterpolationProblem;
use crate::problems::linear_system_task::LinearSystemProblem;
use crate::problems::problem_instance::{
    Method, Problem, ProblemFamily, ProblemInstance, ReferenceAnswer,
};
use crate::problems::root_finding_task::RootFindingProblem;
use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

/// New problem for `method`. `difficulty` (level, starting at 1) only changes
/// interpolation rounds, where higher levels use higher-degree polynomials.
pub fn generate_problem<R: Rng + ?Sized>(
    method: Method,
    difficulty: u32,
    rng: &mut R,
) -> ProblemInstance {
    generate_problem_with_settings(method, difficulty, &EngineSettings::default(), rng)
}

/// Same as `generate_problem`; root finders and iterative linear solvers run with
/// the stop rules of `settings`
pub fn generate_problem_with_settings<R: Rng + ?Sized>(
    method: Method,
    difficulty: u32,
    settings: &EngineSettings,
    rng: &mut R,
) -> ProblemInstance {
    let problem: ProblemInstance = match method {
        Method::Interpolation(m) => {
            let problem = InterpolationProblem::generate(m, difficulty, rng);
            info!("ground truth polynomial: {}", problem.polynomial);
            info!(
                "exact values at targets: {:?}",
                problem.exact.iter().map(|v| format!("{:.4}", v)).collect::<Vec<_>>()
            );
            problem.into()
        }
        Method::LinearSystem(m) => {
            LinearSystemProblem::generate_with_config(m, &settings.iterative, rng).into()
        }
        Method::RootFinding(m) => {
            RootFindingProblem::generate_with_config(m, &settings.root_finding, rng).into()
        }
        Method::Integration(m) => IntegrationProblem::generate(m, rng).into(),
    };
    info!("generated {} problem:\n{}", method, problem.description());
    info!("reference answer: {}", problem.reference_answer());
    problem
}

/// Problem for a method drawn at random from `family`
pub fn generate_random_problem<R: Rng + ?Sized>(
    family: ProblemFamily,
    difficulty: u32,
    rng: &mut R,
) -> ProblemInstance {
    let methods = Method::all_in(family);
    let method = methods[rng.random_range(0..methods.len())];
    generate_problem(method, difficulty, rng)
}

/// `count` problems over the linear system, root finding and integration
/// methods. Methods are shuffled and only repeat once every one has been used.
pub fn generate_problem_set<R: Rng + ?Sized>(
    count: usize,
    difficulty: u32,
    rng: &mut R,
) -> Vec<ProblemInstance> {
    generate_problem_set_with_settings(count, difficulty, &EngineSettings::default(), rng)
}

pub fn generate_problem_set_with_settings<R: Rng + ?Sized>(
    count: usize,
    difficulty: u32,
    settings: &EngineSettings,
    rng: &mut R,
) -> Vec<ProblemInstance> {
    let pool: Vec<Method> = Method::all()
        .into_iter()
        .filter(|m| m.family() != ProblemFamily::Interpolation)
        .collect();
    let mut methods = Vec::with_capacity(count);
    while methods.len() < count {
        let mut round = pool.clone();
        round.shuffle(rng);
        methods.extend(round);
    }
    methods.truncate(count);
    methods
        .into_iter()
        .map(|method| generate_problem_with_settings(method, difficulty, settings, rng))
        .collect()
}

/// Answer recomputed from the problem data
pub fn solve_reference(problem: &ProblemInstance) -> ReferenceAnswer {
    problem.solve()
}
