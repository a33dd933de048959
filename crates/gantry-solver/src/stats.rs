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

use std::time::Duration;

/// Statistics collected during one run of the profit optimizer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptimizerStatistics {
    /// Reachable cells whose outgoing transitions were generated.
    pub states_expanded: u64,
    /// Candidate transitions generated, including those discarded for
    /// finishing beyond the horizon.
    pub transitions_considered: u64,
    /// Transitions written into the table (first discovery or strict
    /// improvement of a cell).
    pub transitions_installed: u64,
    /// Reachable cells in the table when the fill finished.
    pub cells_reachable: u64,
    /// Total time spent in the optimizer.
    pub time_total: Duration,
}

impl OptimizerStatistics {
    #[inline]
    pub fn on_state_expanded(&mut self) {
        self.states_expanded = self.states_expanded.saturating_add(1);
    }

    #[inline]
    pub fn on_transition_considered(&mut self) {
        self.transitions_considered = self.transitions_considered.saturating_add(1);
    }

    #[inline]
    pub fn on_transition_installed(&mut self) {
        self.transitions_installed = self.transitions_installed.saturating_add(1);
    }

    #[inline]
    pub fn set_cells_reachable(&mut self, count: u64) {
        self.cells_reachable = count;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for OptimizerStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Gantry Optimizer Statistics:")?;
        writeln!(f, "  States expanded:        {}", self.states_expanded)?;
        writeln!(f, "  Transitions considered: {}", self.transitions_considered)?;
        writeln!(f, "  Transitions installed:  {}", self.transitions_installed)?;
        writeln!(f, "  Cells reachable:        {}", self.cells_reachable)?;
        writeln!(f, "  Total time:             {:.2?}", self.time_total)?;
        Ok(())
    }
}
