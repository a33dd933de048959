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

//! # Count Profiles
//!
//! A count profile records how many buildings of each kind a plan contains,
//! independent of construction order. Profiles are the unit of comparison
//! when enumerating alternative optima: two plans that build the same
//! multiset of buildings in different orders collapse to one profile.

use crate::building::BuildingTag;

/// Per-kind building tally of a construction plan.
///
/// The `Display` implementation renders the canonical summary line
/// `T: <theatres> P: <pubs> C: <commercials>` with single spaces and no
/// trailing whitespace. Downstream consumers parse this line; its format is
/// a stable contract.
///
/// # Examples
///
/// ```rust
/// use gantry_model::building::BuildingTag;
/// use gantry_model::counts::BuildCounts;
///
/// let counts = BuildCounts::tally(&[BuildingTag::Theatre, BuildingTag::Theatre, BuildingTag::Pub]);
/// assert_eq!(counts.theatres(), 2);
/// assert_eq!(counts.pubs(), 1);
/// assert_eq!(counts.commercials(), 0);
/// assert_eq!(format!("{}", counts), "T: 2 P: 1 C: 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BuildCounts {
    theatres: usize,
    pubs: usize,
    commercials: usize,
}

impl BuildCounts {
    /// Creates a profile with the given per-kind counts.
    #[inline]
    pub const fn new(theatres: usize, pubs: usize, commercials: usize) -> Self {
        BuildCounts {
            theatres,
            pubs,
            commercials,
        }
    }

    /// Tallies a build sequence into a profile.
    pub fn tally(sequence: &[BuildingTag]) -> Self {
        let mut counts = BuildCounts::default();
        for &tag in sequence {
            counts.record(tag);
        }
        counts
    }

    /// Increments the count for one tag.
    #[inline]
    pub fn record(&mut self, tag: BuildingTag) {
        match tag {
            BuildingTag::Theatre => self.theatres += 1,
            BuildingTag::Pub => self.pubs += 1,
            BuildingTag::Commercial => self.commercials += 1,
        }
    }

    /// Returns the number of theatres.
    #[inline]
    pub const fn theatres(&self) -> usize {
        self.theatres
    }

    /// Returns the number of pubs.
    #[inline]
    pub const fn pubs(&self) -> usize {
        self.pubs
    }

    /// Returns the number of commercial parks.
    #[inline]
    pub const fn commercials(&self) -> usize {
        self.commercials
    }

    /// Returns the count for the specified tag.
    #[inline]
    pub const fn count(&self, tag: BuildingTag) -> usize {
        match tag {
            BuildingTag::Theatre => self.theatres,
            BuildingTag::Pub => self.pubs,
            BuildingTag::Commercial => self.commercials,
        }
    }

    /// Returns the total number of buildings in the profile.
    #[inline]
    pub const fn total(&self) -> usize {
        self.theatres + self.pubs + self.commercials
    }

    /// Checks whether the profile contains no buildings at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl std::fmt::Display for BuildCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "T: {} P: {} C: {}",
            self.theatres, self.pubs, self.commercials
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_and_accessors() {
        let sequence = [
            BuildingTag::Pub,
            BuildingTag::Theatre,
            BuildingTag::Theatre,
            BuildingTag::Commercial,
            BuildingTag::Theatre,
        ];
        let counts = BuildCounts::tally(&sequence);

        assert_eq!(counts.theatres(), 3);
        assert_eq!(counts.pubs(), 1);
        assert_eq!(counts.commercials(), 1);
        assert_eq!(counts.total(), 5);
        assert!(!counts.is_empty());

        assert_eq!(counts.count(BuildingTag::Theatre), 3);
        assert_eq!(counts.count(BuildingTag::Pub), 1);
        assert_eq!(counts.count(BuildingTag::Commercial), 1);
    }

    #[test]
    fn test_empty_profile() {
        let counts = BuildCounts::tally(&[]);
        assert_eq!(counts, BuildCounts::default());
        assert_eq!(counts.total(), 0);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(format!("{}", BuildCounts::new(0, 0, 0)), "T: 0 P: 0 C: 0");
        assert_eq!(format!("{}", BuildCounts::new(1, 0, 0)), "T: 1 P: 0 C: 0");
        assert_eq!(format!("{}", BuildCounts::new(8, 2, 0)), "T: 8 P: 2 C: 0");
        assert_eq!(
            format!("{}", BuildCounts::new(12, 34, 56)),
            "T: 12 P: 34 C: 56"
        );
    }

    #[test]
    fn test_display_has_no_trailing_whitespace() {
        let line = format!("{}", BuildCounts::new(3, 1, 4));
        assert_eq!(line, line.trim_end());
    }

    #[test]
    fn test_profiles_are_hashable() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        assert!(seen.insert(BuildCounts::new(1, 0, 0)));
        assert!(seen.insert(BuildCounts::new(0, 1, 0)));
        assert!(!seen.insert(BuildCounts::new(1, 0, 0)));
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_order_independence() {
        let forwards = BuildCounts::tally(&[BuildingTag::Theatre, BuildingTag::Pub]);
        let backwards = BuildCounts::tally(&[BuildingTag::Pub, BuildingTag::Theatre]);
        assert_eq!(forwards, backwards);
    }
}
