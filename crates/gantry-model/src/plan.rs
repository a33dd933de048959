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

use crate::{building::BuildingTag, counts::BuildCounts};
use num_traits::{PrimInt, Signed};

/// One optimal construction plan for a given time horizon.
///
/// A plan is the profit it achieves, the buildings it constructs in build
/// order, and the time at which the last construction finishes. The empty
/// plan (profit 0, no buildings, finish time 0) is valid and represents the
/// decision to build nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildPlan<T> {
    /// The total profit of this plan.
    profit: T,

    /// The constructed buildings in build order.
    sequence: Vec<BuildingTag>,

    /// The time at which the last construction finishes (0 for the empty plan).
    finish_time: T,
}

impl<T> BuildPlan<T>
where
    T: PrimInt + Signed,
{
    /// Constructs a new `BuildPlan`.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty but `finish_time` is non-zero, or if
    /// `sequence` is non-empty but `finish_time` is zero. Construction
    /// durations are strictly positive, so a plan finishes at time zero
    /// exactly when it builds nothing.
    pub fn new(profit: T, sequence: Vec<BuildingTag>, finish_time: T) -> Self {
        assert_eq!(
            sequence.is_empty(),
            finish_time.is_zero(),
            "called BuildPlan::new with inconsistent finish time: sequence.len() = {} but finish_time = {:?}",
            sequence.len(),
            finish_time.to_i64()
        );

        Self {
            profit,
            sequence,
            finish_time,
        }
    }

    /// Constructs the empty plan: build nothing, earn nothing.
    #[inline]
    pub fn empty() -> Self {
        Self {
            profit: T::zero(),
            sequence: Vec::new(),
            finish_time: T::zero(),
        }
    }

    /// Returns the total profit of this plan.
    #[inline]
    pub fn profit(&self) -> T {
        self.profit
    }

    /// Returns the constructed buildings in build order.
    #[inline]
    pub fn sequence(&self) -> &[BuildingTag] {
        &self.sequence
    }

    /// Returns the time at which the last construction finishes.
    #[inline]
    pub fn finish_time(&self) -> T {
        self.finish_time
    }

    /// Returns the number of buildings in this plan.
    #[inline]
    pub fn num_buildings(&self) -> usize {
        self.sequence.len()
    }

    /// Checks whether this is the empty plan.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Tallies the plan's sequence into a per-kind count profile.
    #[inline]
    pub fn counts(&self) -> BuildCounts {
        BuildCounts::tally(&self.sequence)
    }
}

impl<T> std::fmt::Display for BuildPlan<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Build Plan Summary")?;
        writeln!(f, "   Profit:      {}", self.profit)?;
        writeln!(f, "   Finish Time: {}", self.finish_time)?;
        writeln!(f, "   Counts:      {}", self.counts())?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "   (No buildings constructed)")?;
            return Ok(());
        }

        writeln!(f, "   {:<10} | {:<10}", "Step", "Building")?;
        writeln!(f, "   {:-<10}-+-{:-<10}", "", "")?;
        for (step, tag) in self.sequence.iter().enumerate() {
            writeln!(f, "   {:<10} | {:<10}", step, tag.name())?;
        }

        Ok(())
    }
}
