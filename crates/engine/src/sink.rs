//! Receivers for the solutions a search finds.

use std::convert::Infallible;

use crate::solution::{Placement, Solution};

/// Called once per complete tiling. The slice is only valid for the call;
/// returning an error stops the search and hands the error to the caller.
pub trait SolutionSink {
    type Error;

    fn accept(&mut self, placements: &[Placement]) -> Result<(), Self::Error>;
}

/// Keeps an owned copy of every solution, in discovery order.
#[derive(Clone, Debug, Default)]
pub struct SolutionCollector {
    solutions: Vec<Solution>,
}

impl SolutionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

impl SolutionSink for SolutionCollector {
    type Error = Infallible;

    fn accept(&mut self, placements: &[Placement]) -> Result<(), Self::Error> {
        self.solutions.push(Solution::new(placements));
        Ok(())
    }
}

/// Counts solutions without looking at them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolutionCounter {
    pub count: u64,
}

impl SolutionSink for SolutionCounter {
    type Error = Infallible;

    #[inline(always)]
    fn accept(&mut self, _placements: &[Placement]) -> Result<(), Self::Error> {
        self.count += 1;
        Ok(())
    }
}
