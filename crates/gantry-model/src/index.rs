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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! Newtype wrappers around `usize` to prevent mixing indices from different
//! domains (catalog positions vs. finish-time cells). Both compile down to a
//! transparent `usize` with no runtime overhead.
//!
//! ## Motivation
//!
//! The optimizer juggles two index spaces at once: positions in the building
//! catalog and cells in the finish-time table. Raw `usize` invites accidental
//! swaps and hard-to-trace bugs; dedicated newtypes make the compiler catch
//! them.
//!
//! ## Usage
//!
//! ```rust
//! use gantry_model::index::{BuildingIndex, TimeIndex};
//!
//! let cell = TimeIndex::new(9);
//! assert_eq!(cell.get(), 9);
//! assert_eq!(format!("{}", cell), "TimeIndex(9)");
//!
//! let slot = BuildingIndex::new(2);
//! assert_eq!(slot.get(), 2);
//! ```

/// Index of a cell in the finish-time table (a point on the time axis).
///
/// This struct wraps a `usize` to provide type safety, ensuring that time
/// cells are not accidentally mixed with catalog positions throughout the API.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeIndex(usize);

impl TimeIndex {
    /// Creates a new `TimeIndex`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_model::index::TimeIndex;
    ///
    /// let cell = TimeIndex::new(42);
    /// assert_eq!(cell.get(), 42);
    /// ```
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        TimeIndex(index)
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }

    /// Checks whether this is the origin cell (time zero).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_model::index::TimeIndex;
    ///
    /// assert!(TimeIndex::new(0).is_zero());
    /// assert!(!TimeIndex::new(5).is_zero());
    /// ```
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for TimeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeIndex({})", self.0)
    }
}

impl From<usize> for TimeIndex {
    fn from(index: usize) -> Self {
        TimeIndex(index)
    }
}

impl From<TimeIndex> for usize {
    fn from(index: TimeIndex) -> Self {
        index.0
    }
}

/// Index of a building kind in the catalog.
///
/// This struct wraps a `usize` to provide type safety, ensuring that catalog
/// positions are not accidentally mixed with time cells throughout the API.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildingIndex(usize);

impl BuildingIndex {
    /// Creates a new `BuildingIndex`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_model::index::BuildingIndex;
    ///
    /// let slot = BuildingIndex::new(1);
    /// assert_eq!(slot.get(), 1);
    /// ```
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        BuildingIndex(index)
    }

    /// Returns the underlying `usize` index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for BuildingIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BuildingIndex({})", self.0)
    }
}

impl From<usize> for BuildingIndex {
    fn from(index: usize) -> Self {
        BuildingIndex(index)
    }
}

impl From<BuildingIndex> for usize {
    fn from(index: BuildingIndex) -> Self {
        index.0
    }
}
