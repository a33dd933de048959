// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::stats::OptimizerStatistics;
use gantry_model::{counts::BuildCounts, plan::BuildPlan};
use num_traits::{PrimInt, Signed};

/// Result of the optimizer after a successful run.
///
/// The exhaustive sweep over finish times proves optimality, so an outcome
/// always carries a proven-optimal plan (possibly the empty one). In
/// exploratory mode it additionally carries every distinct count profile
/// that achieves the optimal profit.
#[derive(Debug, Clone)]
pub struct OptimizeOutcome<T> {
    plan: BuildPlan<T>,
    tied_counts: Option<Vec<BuildCounts>>,
    statistics: OptimizerStatistics,
}

impl<T> OptimizeOutcome<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn optimal(plan: BuildPlan<T>, statistics: OptimizerStatistics) -> Self {
        Self {
            plan,
            tied_counts: None,
            statistics,
        }
    }

    #[inline]
    pub fn optimal_with_ties(
        plan: BuildPlan<T>,
        tied_counts: Vec<BuildCounts>,
        statistics: OptimizerStatistics,
    ) -> Self {
        Self {
            plan,
            tied_counts: Some(tied_counts),
            statistics,
        }
    }

    /// Returns the proven-optimal plan.
    #[inline]
    pub fn plan(&self) -> &BuildPlan<T> {
        &self.plan
    }

    /// Returns the optimal profit.
    #[inline]
    pub fn max_profit(&self) -> T {
        self.plan.profit()
    }

    /// Returns the count profile of the optimal plan.
    #[inline]
    pub fn best_counts(&self) -> BuildCounts {
        self.plan.counts()
    }

    /// Returns every distinct count profile achieving the optimal profit, in
    /// ascending order of the finish time at which each was first discovered.
    /// `None` unless the run was exploratory.
    #[inline]
    pub fn tied_counts(&self) -> Option<&[BuildCounts]> {
        self.tied_counts.as_deref()
    }

    /// Returns the optimizer statistics.
    #[inline]
    pub fn statistics(&self) -> &OptimizerStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for OptimizeOutcome<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plan)?;

        if let Some(profiles) = self.tied_counts() {
            writeln!(f)?;
            writeln!(f, "Optimal count profiles:")?;
            for counts in profiles {
                writeln!(f, "   {}", counts)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_model::building::BuildingTag;

    type IntegerType = i64;

    fn stats() -> OptimizerStatistics {
        OptimizerStatistics::default()
    }

    #[test]
    fn test_optimal_carries_plan_and_no_ties() {
        let plan = BuildPlan::<IntegerType>::new(4500, vec![BuildingTag::Theatre], 5);
        let outcome = OptimizeOutcome::optimal(plan.clone(), stats());

        assert_eq!(outcome.plan(), &plan);
        assert_eq!(outcome.max_profit(), 4500);
        assert_eq!(outcome.best_counts(), BuildCounts::new(1, 0, 0));
        assert!(outcome.tied_counts().is_none());
    }

    #[test]
    fn test_optimal_with_ties_exposes_profiles() {
        let plan = BuildPlan::<IntegerType>::new(3000, vec![BuildingTag::Theatre], 5);
        let ties = vec![BuildCounts::new(0, 1, 0), BuildCounts::new(1, 0, 0)];
        let outcome = OptimizeOutcome::optimal_with_ties(plan, ties.clone(), stats());

        assert_eq!(outcome.tied_counts(), Some(&ties[..]));
    }

    #[test]
    fn test_empty_plan_outcome() {
        let outcome = OptimizeOutcome::optimal(BuildPlan::<IntegerType>::empty(), stats());
        assert_eq!(outcome.max_profit(), 0);
        assert!(outcome.best_counts().is_empty());
    }

    #[test]
    fn test_display_with_tied_profiles() {
        let plan = BuildPlan::<IntegerType>::new(3000, vec![BuildingTag::Theatre], 5);
        let ties = vec![BuildCounts::new(0, 1, 0), BuildCounts::new(1, 0, 0)];
        let outcome = OptimizeOutcome::optimal_with_ties(plan, ties, stats());

        let displayed = format!("{}", outcome);

        let mut expected = String::new();
        expected.push_str("Build Plan Summary\n");
        expected.push_str("   Profit:      3000\n");
        expected.push_str("   Finish Time: 5\n");
        expected.push_str("   Counts:      T: 1 P: 0 C: 0\n");
        expected.push('\n');
        expected.push_str("   Step       | Building  \n");
        expected.push_str("   -----------+-----------\n");
        expected.push_str("   0          | Theatre   \n");
        expected.push('\n');
        expected.push_str("Optimal count profiles:\n");
        expected.push_str("   T: 0 P: 1 C: 0\n");
        expected.push_str("   T: 1 P: 0 C: 0\n");

        assert_eq!(displayed, expected);
    }
}
