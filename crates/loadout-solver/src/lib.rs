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

//! # Loadout Solver
//!
//! High-level entry point of the Loadout module-set optimizer. This crate
//! wires the two search strategies behind one configurable facade: exact
//! enumeration when the 4-subset space is affordable, randomized greedy
//! plus local search when it is not.
//!
//! ## Modules
//!
//! - `solver`: The `Solver` facade and its builder, including the
//!   automatic strategy dispatch.
//!
//! ## Motivation
//!
//! Hosts should not have to care which strategy ran: both accept the same
//! module records and return the same solution records, sorted by combat
//! power. The facade owns the defaults (60 solutions, 8 workers, 20x
//! attempt budget, 30 local-search rounds), which are part of the
//! engine's contract.

pub mod solver;

pub use loadout_model::constraints::{AttrPreferences, Constraints};
pub use loadout_model::index::AttrId;
pub use loadout_model::module::{ModuleInfo, ModulePart};
pub use loadout_model::solution::ModuleSolution;
pub use loadout_search::error::SolverError;
pub use solver::{Solver, SolverBuilder};
