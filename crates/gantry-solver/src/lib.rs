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

//! Gantry Solver: deterministic profit optimization over a time horizon
//!
//! High-level crate that implements a dynamic-programming optimizer for the
//! construction profit problem: given a bounded time horizon and a fixed
//! catalog of building kinds, find a build order maximizing the total
//! earnings accrued between each completion and the end of the horizon.
//!
//! Core flow
//! - Create an `optimizer::ProfitOptimizer` over the standard catalog.
//! - Call `optimize` for one proven-optimal plan, or `optimize_with_ties`
//!   to additionally enumerate every distinct count profile achieving the
//!   optimal profit.
//! - Inspect the returned `result::OptimizeOutcome`: the plan, its profit
//!   and count profile, and run statistics.
//!
//! Design highlights
//! - One table cell per point on the time axis; cells store profit plus a
//!   back-pointer, and plans are reconstructed by a single walk to the
//!   origin instead of being copied per cell.
//! - Ties are never overwritten, so results are deterministic: the same
//!   horizon always yields the same plan.
//! - Generic over the profit type via `num::OptimizerNumeric`; overflows
//!   surface as errors instead of wrapping.
//!
//! Module map
//! - `error`: error types for rejected horizons and exhausted resources.
//! - `num`: the numeric trait bundle profit types must satisfy.
//! - `optimizer`: the optimizer facade and session orchestration.
//! - `result`: optimization outcomes carrying plan, ties, and statistics.
//! - `stats`: lightweight counters/timing.
//! - `table`: the finish-time table with reachability and back-pointers.

pub mod error;
pub mod num;
pub mod optimizer;
pub mod result;
pub mod stats;
pub mod table;
