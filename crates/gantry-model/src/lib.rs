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

//! # Gantry Model
//!
//! **The Core Domain Model for the Gantry Construction Profit Optimizer.**
//!
//! This crate defines the data structures shared between the problem
//! definition (the fixed building catalog) and the solving engine
//! (`gantry_solver`): what can be built, what a finished plan looks like,
//! and how plans are summarized.
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed wrappers (`TimeIndex`, `BuildingIndex`) to
//!   prevent logical indexing errors between the time axis and the catalog.
//! * **`building`**: The immutable `Catalog` of building kinds with their
//!   durations and earnings rates.
//! * **`counts`**: Per-kind tallies (`BuildCounts`) and the canonical
//!   `T: .. P: .. C: ..` summary line.
//! * **`plan`**: The output format (`BuildPlan`): profit, build order, and
//!   finish time.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally
//!     use a catalog position to address a cell on the time axis.
//! 2.  **Immutability**: The catalog is built once and only read afterwards;
//!     the engine stays a pure function of the horizon.
//! 3.  **Fail-Fast**: Constructors validate inputs eagerly so the engine
//!     never observes an inconsistent plan or catalog row.

pub mod building;
pub mod counts;
pub mod index;
pub mod plan;
