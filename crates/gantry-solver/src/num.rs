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

//! # Optimizer Numeric Trait
//!
//! Unified numeric bounds for the profit optimizer. `OptimizerNumeric`
//! collects the integer capabilities the engine requires into a single
//! alias, simplifying generic signatures and keeping overflow handling
//! consistent.
//!
//! ## Motivation
//!
//! The engine should remain generic over signed integer types while
//! retaining predictable arithmetic semantics: profit accumulation uses
//! checked arithmetic so that a horizon whose optimum does not fit the
//! chosen type surfaces as an error instead of wrapping silently.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed + FromPrimitive` for numeric fundamentals
//!   and catalog-constant conversion.
//! - Adds `CheckedAdd` and `CheckedMul` for overflow-aware profit math.
//! - `Debug`/`Display` for error and summary formatting, `Hash` so profit
//!   values can key hashed collections.
//!
//! Note: the optimizer is single-threaded by contract, so no `Send`/`Sync`
//! bounds are imposed here.

use std::hash::Hash;

use num_traits::{CheckedAdd, CheckedMul, FromPrimitive, PrimInt, Signed};

/// A trait alias for numeric types the optimizer can work with.
/// These are usually all signed integer types `i16`, `i32`, `i64` and
/// `isize`; `i8` satisfies the bounds but cannot represent the catalog
/// earnings rates and is rejected when the catalog is built.
pub trait OptimizerNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + CheckedAdd
    + CheckedMul
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
{
}

impl<T> OptimizerNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + CheckedAdd
        + CheckedMul
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
{
}
