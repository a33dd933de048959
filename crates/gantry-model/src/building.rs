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

//! # Building Catalog
//!
//! The immutable data model describing the establishments the optimizer may
//! construct: their tags, construction durations, and per-unit-time earnings
//! rates.
//!
//! ## Motivation
//!
//! Every optimization run draws from the same fixed set of building kinds.
//! Keeping the catalog as a plain immutable value (built once, then only
//! read) makes the search engine a pure function of the time horizon and
//! keeps transition generation a simple indexed loop.
//!
//! ## Highlights
//!
//! - `BuildingTag` names the three kinds and fixes their canonical order.
//! - `BuildingKind<T>` is one catalog row: tag, duration, earnings rate.
//! - `Catalog<T>` is the fixed three-row table with checked and unchecked
//!   row access.

use crate::index::BuildingIndex;
use num_traits::{FromPrimitive, PrimInt, Signed};

const THEATRE_DURATION: i64 = 5;
const THEATRE_RATE: i64 = 1500;
const PUB_DURATION: i64 = 4;
const PUB_RATE: i64 = 1000;
const COMMERCIAL_DURATION: i64 = 10;
const COMMERCIAL_RATE: i64 = 2000;

/// The number of building kinds in the standard catalog.
pub const NUM_BUILDING_KINDS: usize = 3;

/// Identifies one of the three establishment kinds.
///
/// The declaration order (Theatre, Pub, Commercial) is the canonical catalog
/// order. The engine generates transitions in exactly this order, which makes
/// tie resolution between equal-profit plans deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuildingTag {
    /// Theatre: builds in 5 units, earns 1500 per remaining unit.
    Theatre,
    /// Pub: builds in 4 units, earns 1000 per remaining unit.
    Pub,
    /// Commercial park: builds in 10 units, earns 2000 per remaining unit.
    Commercial,
}

impl BuildingTag {
    /// All tags in canonical catalog order.
    pub const ALL: [BuildingTag; NUM_BUILDING_KINDS] =
        [BuildingTag::Theatre, BuildingTag::Pub, BuildingTag::Commercial];

    /// Returns the single-letter identifier used in textual summaries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_model::building::BuildingTag;
    ///
    /// assert_eq!(BuildingTag::Theatre.letter(), 'T');
    /// assert_eq!(BuildingTag::Pub.letter(), 'P');
    /// assert_eq!(BuildingTag::Commercial.letter(), 'C');
    /// ```
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            BuildingTag::Theatre => 'T',
            BuildingTag::Pub => 'P',
            BuildingTag::Commercial => 'C',
        }
    }

    /// Returns the human-readable name of the kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            BuildingTag::Theatre => "Theatre",
            BuildingTag::Pub => "Pub",
            BuildingTag::Commercial => "Commercial",
        }
    }
}

impl std::fmt::Display for BuildingTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One row of the building catalog: a tag plus its construction parameters.
///
/// `duration` is the number of time units the building occupies the
/// construction crew; `earnings_rate` is the profit earned per time unit
/// remaining in the horizon after the building is finished. Both are
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildingKind<T>
where
    T: PrimInt + Signed,
{
    tag: BuildingTag,
    duration: T,
    earnings_rate: T,
}

impl<T> BuildingKind<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new catalog row.
    ///
    /// # Panics
    ///
    /// Panics if `duration` or `earnings_rate` is not strictly positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_model::building::{BuildingKind, BuildingTag};
    ///
    /// let kind = BuildingKind::<i64>::new(BuildingTag::Pub, 4, 1000);
    /// assert_eq!(kind.tag(), BuildingTag::Pub);
    /// assert_eq!(kind.duration(), 4);
    /// assert_eq!(kind.earnings_rate(), 1000);
    /// ```
    #[inline]
    pub fn new(tag: BuildingTag, duration: T, earnings_rate: T) -> Self {
        assert!(
            duration > T::zero(),
            "called `BuildingKind::new` with non-positive duration"
        );
        assert!(
            earnings_rate > T::zero(),
            "called `BuildingKind::new` with non-positive earnings rate"
        );

        BuildingKind {
            tag,
            duration,
            earnings_rate,
        }
    }

    /// Returns the tag of this kind.
    #[inline]
    pub const fn tag(&self) -> BuildingTag {
        self.tag
    }

    /// Returns the construction duration in time units.
    #[inline]
    pub fn duration(&self) -> T {
        self.duration
    }

    /// Returns the profit earned per remaining time unit after completion.
    #[inline]
    pub fn earnings_rate(&self) -> T {
        self.earnings_rate
    }
}

/// The fixed, immutable table of building kinds available to the optimizer.
///
/// The standard catalog holds exactly three rows in canonical order:
/// Theatre (duration 5, rate 1500), Pub (duration 4, rate 1000) and
/// Commercial (duration 10, rate 2000). A catalog is built once and only
/// read afterwards; it is a plain value, not shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<T>
where
    T: PrimInt + Signed,
{
    kinds: [BuildingKind<T>; NUM_BUILDING_KINDS],
}

impl<T> Catalog<T>
where
    T: PrimInt + Signed + FromPrimitive,
{
    /// Builds the standard three-kind catalog.
    ///
    /// # Panics
    ///
    /// Panics if the catalog constants cannot be represented in `T`. Any
    /// signed integer type of at least 16 bits can hold them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_model::building::{BuildingTag, Catalog};
    ///
    /// let catalog = Catalog::<i64>::standard();
    /// assert_eq!(catalog.len(), 3);
    /// assert_eq!(catalog.kinds()[0].tag(), BuildingTag::Theatre);
    /// ```
    pub fn standard() -> Self {
        let value = |raw: i64| {
            T::from_i64(raw)
                .expect("standard catalog constant is out of range for the chosen numeric type")
        };

        Catalog {
            kinds: [
                BuildingKind::new(
                    BuildingTag::Theatre,
                    value(THEATRE_DURATION),
                    value(THEATRE_RATE),
                ),
                BuildingKind::new(BuildingTag::Pub, value(PUB_DURATION), value(PUB_RATE)),
                BuildingKind::new(
                    BuildingTag::Commercial,
                    value(COMMERCIAL_DURATION),
                    value(COMMERCIAL_RATE),
                ),
            ],
        }
    }
}

impl<T> Catalog<T>
where
    T: PrimInt + Signed,
{
    /// Returns the number of building kinds in the catalog.
    #[inline]
    pub const fn len(&self) -> usize {
        NUM_BUILDING_KINDS
    }

    /// A catalog always holds at least one kind.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns all rows in canonical catalog order.
    #[inline]
    pub fn kinds(&self) -> &[BuildingKind<T>] {
        &self.kinds
    }

    /// Returns an iterator over the rows in canonical catalog order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, BuildingKind<T>> {
        self.kinds.iter()
    }

    /// Returns the catalog row at the specified position.
    ///
    /// # Panics
    ///
    /// Panics if `building_index` is not in `0..len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gantry_model::building::{BuildingTag, Catalog};
    /// use gantry_model::index::BuildingIndex;
    ///
    /// let catalog = Catalog::<i64>::standard();
    /// let row = catalog.kind(BuildingIndex::new(1));
    /// assert_eq!(row.tag(), BuildingTag::Pub);
    /// ```
    #[inline]
    pub fn kind(&self, building_index: BuildingIndex) -> &BuildingKind<T> {
        let index = building_index.get();
        debug_assert!(
            index < self.len(),
            "called `Catalog::kind` with building index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );

        &self.kinds[index]
    }

    /// Returns the catalog row at the specified position without bounds checking.
    ///
    /// # Safety
    ///
    /// This function is unsafe because it does not perform bounds checking on
    /// `building_index`. The caller must ensure that `building_index` is in
    /// `0..len()`. Undefined behavior may occur if this precondition is
    /// violated.
    #[inline]
    pub unsafe fn kind_unchecked(&self, building_index: BuildingIndex) -> &BuildingKind<T> {
        let index = building_index.get();
        debug_assert!(
            index < self.len(),
            "called `Catalog::kind_unchecked` with building index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );

        unsafe { self.kinds.get_unchecked(index) }
    }
}

impl<T> Default for Catalog<T>
where
    T: PrimInt + Signed + FromPrimitive,
{
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_standard_catalog_contents() {
        let catalog = Catalog::<IntegerType>::standard();
        assert_eq!(catalog.len(), 3);

        let theatre = &catalog.kinds()[0];
        assert_eq!(theatre.tag(), BuildingTag::Theatre);
        assert_eq!(theatre.duration(), 5);
        assert_eq!(theatre.earnings_rate(), 1500);

        let pub_kind = &catalog.kinds()[1];
        assert_eq!(pub_kind.tag(), BuildingTag::Pub);
        assert_eq!(pub_kind.duration(), 4);
        assert_eq!(pub_kind.earnings_rate(), 1000);

        let commercial = &catalog.kinds()[2];
        assert_eq!(commercial.tag(), BuildingTag::Commercial);
        assert_eq!(commercial.duration(), 10);
        assert_eq!(commercial.earnings_rate(), 2000);
    }

    #[test]
    fn test_catalog_order_matches_tag_order() {
        let catalog = Catalog::<IntegerType>::standard();
        for (slot, kind) in catalog.iter().enumerate() {
            assert_eq!(kind.tag(), BuildingTag::ALL[slot]);
        }
    }

    #[test]
    fn test_indexed_access() {
        let catalog = Catalog::<IntegerType>::standard();
        let row = catalog.kind(BuildingIndex::new(2));
        assert_eq!(row.tag(), BuildingTag::Commercial);

        let row = unsafe { catalog.kind_unchecked(BuildingIndex::new(0)) };
        assert_eq!(row.tag(), BuildingTag::Theatre);
    }

    #[test]
    fn test_letters_and_names() {
        assert_eq!(BuildingTag::Theatre.letter(), 'T');
        assert_eq!(BuildingTag::Pub.letter(), 'P');
        assert_eq!(BuildingTag::Commercial.letter(), 'C');

        assert_eq!(format!("{}", BuildingTag::Theatre), "Theatre");
        assert_eq!(format!("{}", BuildingTag::Pub), "Pub");
        assert_eq!(format!("{}", BuildingTag::Commercial), "Commercial");
    }

    #[test]
    fn test_narrow_numeric_type() {
        let catalog = Catalog::<i16>::standard();
        assert_eq!(catalog.kinds()[2].earnings_rate(), 2000);
    }

    #[test]
    #[should_panic(expected = "called `BuildingKind::new` with non-positive duration")]
    fn test_kind_rejects_non_positive_duration() {
        let _ = BuildingKind::<IntegerType>::new(BuildingTag::Pub, 0, 1000);
    }

    #[test]
    #[should_panic(expected = "called `BuildingKind::new` with non-positive earnings rate")]
    fn test_kind_rejects_non_positive_rate() {
        let _ = BuildingKind::<IntegerType>::new(BuildingTag::Pub, 4, -1);
    }
}
