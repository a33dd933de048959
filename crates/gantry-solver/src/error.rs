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

//! Error types for the profit optimizer.
//!
//! An optimization run fails in exactly two ways: the horizon itself is
//! invalid, or the run would exceed what the chosen state-table
//! representation can hold. Both surface synchronously as typed values with
//! descriptive `Display` output; there are no partial results and no
//! retries.

use std::fmt::{Debug, Display};

/// The error type for an optimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizeError<T> {
    /// The requested horizon is negative.
    InvalidHorizon(InvalidHorizonError<T>),
    /// The run would exceed the state-table ceiling or the numeric range
    /// of the chosen profit type.
    ResourceExhausted(ResourceExhaustedError),
}

/// Details about a rejected horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHorizonError<T> {
    /// The horizon value that was rejected.
    pub horizon: T,
}

impl<T> Display for InvalidHorizonError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Horizon {} is negative; the time axis starts at zero",
            self.horizon
        )
    }
}

impl<T> std::error::Error for InvalidHorizonError<T> where T: Debug + Display {}

/// The resource that an over-large run would exhaust.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceExhaustedError {
    /// The horizon needs more state-table cells than the supported maximum.
    TableTooLarge(TableTooLargeError),
    /// A profit computation exceeded the numeric range of the chosen type.
    ProfitOverflow(ProfitOverflowError),
}

/// Details about a state table that would exceed the supported maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableTooLargeError {
    /// The largest number of table cells the optimizer supports.
    pub max_cells: usize,
}

impl Display for TableTooLargeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "The requested horizon needs more than {} state-table cells",
            self.max_cells
        )
    }
}

impl std::error::Error for TableTooLargeError {}

/// Details about a profit value that overflowed the chosen numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitOverflowError {
    /// The name of the numeric type whose range was exceeded (e.g., "i16").
    pub type_name: &'static str,
}

impl Display for ProfitOverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A profit computation exceeded the numeric range of type {}",
            self.type_name
        )
    }
}

impl std::error::Error for ProfitOverflowError {}

impl Display for ResourceExhaustedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TableTooLarge(e) => write!(f, "{}", e),
            Self::ProfitOverflow(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ResourceExhaustedError {}

impl<T> Display for OptimizeError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHorizon(e) => write!(f, "Invalid horizon: {}", e),
            Self::ResourceExhausted(e) => write!(f, "Resources exhausted: {}", e),
        }
    }
}

impl<T> std::error::Error for OptimizeError<T> where T: Debug + Display {}

impl<T> From<InvalidHorizonError<T>> for OptimizeError<T> {
    fn from(e: InvalidHorizonError<T>) -> Self {
        Self::InvalidHorizon(e)
    }
}

impl<T> From<ResourceExhaustedError> for OptimizeError<T> {
    fn from(e: ResourceExhaustedError) -> Self {
        Self::ResourceExhausted(e)
    }
}

impl From<TableTooLargeError> for ResourceExhaustedError {
    fn from(e: TableTooLargeError) -> Self {
        Self::TableTooLarge(e)
    }
}

impl From<ProfitOverflowError> for ResourceExhaustedError {
    fn from(e: ProfitOverflowError) -> Self {
        Self::ProfitOverflow(e)
    }
}

impl<T> From<TableTooLargeError> for OptimizeError<T> {
    fn from(e: TableTooLargeError) -> Self {
        Self::ResourceExhausted(ResourceExhaustedError::TableTooLarge(e))
    }
}

impl<T> From<ProfitOverflowError> for OptimizeError<T> {
    fn from(e: ProfitOverflowError) -> Self {
        Self::ResourceExhausted(ResourceExhaustedError::ProfitOverflow(e))
    }
}
