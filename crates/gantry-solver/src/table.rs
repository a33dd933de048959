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

//! Finish-time table for the profit dynamic program.
//!
//! This module provides `FinishTimeTable`, a compact container holding the
//! best-known state for every point on the time axis: the profit of the best
//! plan finishing exactly at that time, plus a back-pointer (predecessor time
//! and building) from which that plan can be reconstructed.
//!
//! Key responsibilities:
//! - Distinguish decided cells from untouched ones via a reachability bitset,
//!   so a stored profit of zero is never confused with "no plan known".
//! - Store one back-pointer per reachable cell instead of a full sequence
//!   copy; a single walk from any cell to the origin recovers its plan.
//! - Maintain the invariant that the origin cell (time zero, empty plan,
//!   profit zero) is always reachable and has no predecessor.
//!
//! Performance considerations:
//! - Structure of Arrays layout: profits and back-pointers live in parallel
//!   vectors indexed by cell.
//! - Provides both checked and unchecked (unsafe) accessors. Unchecked
//!   variants avoid bounds checks in the fill loop under the assumption that
//!   the caller ensures validity.
//!
//! Safety and invariants:
//! - All methods with `unchecked` in their name require the caller to ensure
//!   the provided cells are within bounds and the logical preconditions
//!   (reachability, non-origin for back-pointer reads) are satisfied.
//! - Debug assertions catch invariant violations in debug builds.

use fixedbitset::FixedBitSet;
use gantry_model::index::{BuildingIndex, TimeIndex};
use num_traits::Zero;

/// Best-known plan data per finish time.
///
/// The table covers cells `0..num_cells()`, one per point on the time axis.
/// A cell is in one of two states:
/// - unreachable: no plan finishing at this time has been discovered; the
///   profit and back-pointer slots hold no meaningful data.
/// - reachable: `profit` holds the best profit discovered so far, and for a
///   non-origin cell the back-pointer names the predecessor finish time and
///   the building whose construction ends here.
///
/// Invariants (debug-checked):
/// - Cell 0 is reachable with profit zero and is never written again.
/// - A back-pointer always names a reachable cell strictly earlier on the
///   time axis, so reconstruction terminates at the origin.
#[derive(Debug, Clone)]
pub struct FinishTimeTable<T> {
    // We optimize layout for T=i64 here,
    // grouping fields by alignment to minimize padding.

    // Heap-managed, pointer-sized fields (8-aligned on 64-bit)
    profits: Vec<T>,
    pred_times: Vec<TimeIndex>,
    pred_buildings: Vec<BuildingIndex>,
    reachable: FixedBitSet,

    // Counters (usize) grouped at the end
    num_reachable: usize,
}

impl<T> FinishTimeTable<T> {
    /// Creates a new table with the specified number of cells.
    /// The initial state has only the origin cell reachable, carrying the
    /// empty plan with profit zero.
    ///
    /// # Panics
    ///
    /// Panics if `num_cells` is zero; the origin cell always exists.
    #[inline]
    pub fn new(num_cells: usize) -> Self
    where
        T: Copy + Zero,
    {
        assert!(
            num_cells > 0,
            "called `FinishTimeTable::new` with zero cells: the origin cell always exists"
        );

        let mut reachable = FixedBitSet::with_capacity(num_cells);
        reachable.insert(0);

        Self {
            profits: vec![T::zero(); num_cells],
            pred_times: vec![TimeIndex::new(0); num_cells],
            pred_buildings: vec![BuildingIndex::new(0); num_cells],
            reachable,
            num_reachable: 1,
        }
    }

    /// Returns the number of cells in this table.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.profits.len()
    }

    /// Returns the time horizon this table covers (the last cell).
    #[inline]
    pub fn horizon(&self) -> usize {
        self.num_cells() - 1
    }

    /// Returns the number of reachable cells.
    #[inline]
    pub fn num_reachable(&self) -> usize {
        self.num_reachable
    }

    /// Checks if the specified cell is reachable.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `cell` is out of bounds `0..num_cells()`.
    #[inline]
    pub fn is_reachable(&self, cell: TimeIndex) -> bool {
        let index = cell.get();
        debug_assert!(
            index < self.num_cells(),
            "called `FinishTimeTable::is_reachable` with cell out of bounds: the len is {} but the index is {}",
            self.num_cells(),
            index
        );

        self.reachable.contains(index)
    }

    /// Checks if the specified cell is reachable without bounds checking.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `cell` is out of bounds `0..num_cells()`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `cell` is within bounds `0..num_cells()`.
    #[inline]
    pub unsafe fn is_reachable_unchecked(&self, cell: TimeIndex) -> bool {
        let index = cell.get();
        debug_assert!(
            index < self.num_cells(),
            "called `FinishTimeTable::is_reachable_unchecked` with cell out of bounds: the len is {} but the index is {}",
            self.num_cells(),
            index
        );

        unsafe { self.reachable.contains_unchecked(index) }
    }

    /// Returns the best profit stored for the specified cell.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `cell` is out of bounds or unreachable.
    #[inline]
    pub fn profit(&self, cell: TimeIndex) -> T
    where
        T: Copy,
    {
        let index = cell.get();
        debug_assert!(
            index < self.num_cells(),
            "called `FinishTimeTable::profit` with cell out of bounds: the len is {} but the index is {}",
            self.num_cells(),
            index
        );
        debug_assert!(
            self.reachable.contains(index),
            "called `FinishTimeTable::profit` on unreachable cell {}",
            index
        );

        self.profits[index]
    }

    /// Returns the best profit stored for the specified cell without bounds
    /// checking.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `cell` is out of bounds or unreachable.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `cell` is within bounds `0..num_cells()`
    /// and reachable.
    #[inline]
    pub unsafe fn profit_unchecked(&self, cell: TimeIndex) -> T
    where
        T: Copy,
    {
        let index = cell.get();
        debug_assert!(
            index < self.num_cells(),
            "called `FinishTimeTable::profit_unchecked` with cell out of bounds: the len is {} but the index is {}",
            self.num_cells(),
            index
        );
        debug_assert!(
            self.reachable.contains(index),
            "called `FinishTimeTable::profit_unchecked` on unreachable cell {}",
            index
        );

        unsafe { *self.profits.get_unchecked(index) }
    }

    /// Returns the predecessor finish time of the specified cell.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `cell` is out of bounds, unreachable, or the
    /// origin (which has no predecessor).
    #[inline]
    pub fn pred_time(&self, cell: TimeIndex) -> TimeIndex {
        let index = cell.get();
        debug_assert!(
            index < self.num_cells(),
            "called `FinishTimeTable::pred_time` with cell out of bounds: the len is {} but the index is {}",
            self.num_cells(),
            index
        );
        debug_assert!(
            self.reachable.contains(index),
            "called `FinishTimeTable::pred_time` on unreachable cell {}",
            index
        );
        debug_assert!(
            !cell.is_zero(),
            "called `FinishTimeTable::pred_time` on the origin cell, which has no predecessor"
        );

        self.pred_times[index]
    }

    /// Returns the building whose construction ends at the specified cell.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `cell` is out of bounds, unreachable, or the
    /// origin (which has no predecessor).
    #[inline]
    pub fn pred_building(&self, cell: TimeIndex) -> BuildingIndex {
        let index = cell.get();
        debug_assert!(
            index < self.num_cells(),
            "called `FinishTimeTable::pred_building` with cell out of bounds: the len is {} but the index is {}",
            self.num_cells(),
            index
        );
        debug_assert!(
            self.reachable.contains(index),
            "called `FinishTimeTable::pred_building` on unreachable cell {}",
            index
        );
        debug_assert!(
            !cell.is_zero(),
            "called `FinishTimeTable::pred_building` on the origin cell, which has no predecessor"
        );

        self.pred_buildings[index]
    }

    /// Stores a plan at the specified cell: its profit and the back-pointer
    /// naming the predecessor finish time and the building ending here. Marks
    /// the cell reachable. The caller decides whether the write is an
    /// improvement; the table writes unconditionally.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `cell` is out of bounds or the origin, if
    /// `pred_time` is not strictly earlier than `cell`, or if `pred_time` is
    /// unreachable.
    #[inline]
    pub fn install(
        &mut self,
        cell: TimeIndex,
        profit: T,
        pred_time: TimeIndex,
        pred_building: BuildingIndex,
    ) {
        let index = cell.get();
        debug_assert!(
            index < self.num_cells(),
            "called `FinishTimeTable::install` with cell out of bounds: the len is {} but the index is {}",
            self.num_cells(),
            index
        );
        debug_assert!(
            !cell.is_zero(),
            "called `FinishTimeTable::install` on the origin cell, which is never rewritten"
        );
        debug_assert!(
            pred_time < cell,
            "called `FinishTimeTable::install` with a back-pointer that does not move towards the origin: cell is {} but pred_time is {}",
            index,
            pred_time.get()
        );
        debug_assert!(
            self.reachable.contains(pred_time.get()),
            "called `FinishTimeTable::install` with unreachable predecessor cell {}",
            pred_time.get()
        );

        self.profits[index] = profit;
        self.pred_times[index] = pred_time;
        self.pred_buildings[index] = pred_building;
        if !self.reachable.put(index) {
            self.num_reachable += 1;
        }
    }

    /// Reconstructs the build order of the plan stored at the specified cell
    /// by walking back-pointers to the origin.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `cell` is out of bounds or unreachable.
    pub fn reconstruct(&self, cell: TimeIndex) -> Vec<BuildingIndex> {
        let index = cell.get();
        debug_assert!(
            index < self.num_cells(),
            "called `FinishTimeTable::reconstruct` with cell out of bounds: the len is {} but the index is {}",
            self.num_cells(),
            index
        );
        debug_assert!(
            self.reachable.contains(index),
            "called `FinishTimeTable::reconstruct` on unreachable cell {}",
            index
        );

        let mut sequence = Vec::new();
        let mut current = cell;
        while !current.is_zero() {
            sequence.push(self.pred_buildings[current.get()]);
            current = self.pred_times[current.get()];
        }
        sequence.reverse();
        sequence
    }
}
