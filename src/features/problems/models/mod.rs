mod problem;

pub use problem::{CreateProblem, Problem, ProblemWithReporter};
