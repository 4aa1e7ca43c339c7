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

//! # Loadout Model
//!
//! **The Core Domain Model for the Loadout Module-Set Optimizer.**
//!
//! This crate defines the data structures exchanged between the host
//! application (which owns module inventories and presentation) and the
//! search strategies (which only ever see plain in-memory records).
//!
//! ## Architecture
//!
//! * **`index`**: A strongly-typed wrapper (`AttrId`) for attribute
//!   identifiers, so raw `i32` attribute ids and attribute values cannot
//!   be confused.
//! * **`module`**: `ModulePart` (one attribute line on a module) and
//!   `ModuleInfo` (one equipment module with its part list).
//! * **`constraints`**: Caller preferences (`AttrPreferences`) and hard
//!   requirements (`Constraints`) applied during search.
//! * **`solution`**: `LightweightSolution` (index tuple + score, used
//!   inside the search) and `ModuleSolution` (hydrated result returned to
//!   the caller).
//!
//! ## Design Philosophy
//!
//! 1.  **Plain values**: Everything here is an owned value type. Search
//!     strategies share module lists by reference or `Arc`; nothing in
//!     this crate performs I/O or holds global state.
//! 2.  **Cheap search records**: `LightweightSolution` keeps its four
//!     indices inline so the inner loops never touch the heap for
//!     candidate bookkeeping.
//! 3.  **Fail-Fast**: Constructors validate eagerly (e.g. part values must
//!     be positive) so the strategies never see an invalid record.

pub mod constraints;
pub mod index;
pub mod module;
pub mod solution;
