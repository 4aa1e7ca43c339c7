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

//! # Math Primitives
//!
//! Combinatorial index math for partitioning subset enumeration across
//! workers.
//!
//! ## Submodules
//!
//! - `binomial`: exact binomial coefficients over unsigned primitive
//!   integers, and unranking of the `k`-th r-subset in lexicographic
//!   order.
//!
//! ## Motivation
//!
//! Enumerating all `C(n, r)` subsets eagerly would force a single producer
//! to walk the whole space before any scoring can start. Treating the
//! subset space as a dense rank interval `[0, C(n, r))` instead lets every
//! worker convert its own rank range into subsets independently, with no
//! shared cursor and no allocation.

pub mod binomial;
