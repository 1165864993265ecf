//! Judge domain - verdicts and the judging seam

mod evaluator;
mod verdict;

pub use evaluator::Judge;
pub use verdict::{Label, Verdict};

#[cfg(test)]
pub use evaluator::MockJudge;
