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

//! Exact binomial coefficients and lexicographic combination unranking.
//!
//! The rank space `[0, C(n, r))` is a bijection onto the r-subsets of
//! `{0..n-1}` in lexicographic order. `binomial` computes the space size
//! and `unrank_combination` inverts a rank into its subset, so disjoint
//! rank ranges handed to different workers always produce disjoint
//! combinations whose union covers the whole space exactly once.

use num_traits::{PrimInt, Unsigned};

/// Computes the binomial coefficient `C(n, r)` exactly.
///
/// Uses the multiplicative form with the `C(n, r) = C(n, n - r)` symmetry.
/// Every intermediate `result * (n - i)` is divisible by `i + 1`, so the
/// division at each step is exact and the intermediate values stay as
/// small as possible. For `n <= 10_000` and `r = 4` the intermediates fit
/// comfortably into 64 bits.
///
/// Returns zero when `r > n`.
///
/// # Examples
///
/// ```rust
/// # use loadout_core::math::binomial::binomial;
///
/// assert_eq!(binomial(5_u64, 3), 10);
/// assert_eq!(binomial(52_u64, 5), 2_598_960);
/// assert_eq!(binomial(4_u64, 7), 0);
/// ```
pub fn binomial<T>(n: T, r: T) -> T
where
    T: PrimInt + Unsigned,
{
    if r > n {
        return T::zero();
    }

    let mut r = r;
    if r > n - r {
        r = n - r;
    }

    let mut result = T::one();
    let mut i = T::zero();
    while i < r {
        result = result * (n - i) / (i + T::one());
        i = i + T::one();
    }
    result
}

/// Writes the `rank`-th r-subset of `{0..n-1}` (lexicographic order) into
/// `out`.
///
/// The walk fixes one position at a time: starting the scan at the
/// successor of the previous element, it skips a whole tail block of
/// `C(n - j - 1, r - i - 1)` combinations per candidate `j` until the
/// remaining rank falls inside the block. The output is strictly
/// increasing; rank `0` yields `[0, 1, .., r - 1]` and rank
/// `C(n, r) - 1` yields `[n - r, .., n - 1]`.
///
/// # Panics
///
/// In debug builds, panics if `out.len() != r`, if `r > n`, or if `rank`
/// is not within `0..C(n, r)`.
///
/// # Examples
///
/// ```rust
/// # use loadout_core::math::binomial::unrank_combination;
///
/// let mut subset = [0_usize; 3];
/// unrank_combination(5, 3, 7, &mut subset);
/// assert_eq!(subset, [1, 2, 4]);
/// ```
pub fn unrank_combination(n: usize, r: usize, rank: u64, out: &mut [usize]) {
    debug_assert!(
        out.len() == r,
        "called `unrank_combination` with mismatched output buffer: the buffer len is {} but r is {}",
        out.len(),
        r
    );
    debug_assert!(
        r <= n,
        "called `unrank_combination` with r > n: r is {} but n is {}",
        r,
        n
    );
    debug_assert!(
        rank < binomial(n as u64, r as u64),
        "called `unrank_combination` with rank out of bounds: the space size is {} but the rank is {}",
        binomial(n as u64, r as u64),
        rank
    );

    let mut remaining = rank;
    for i in 0..r {
        let start = if i == 0 { 0 } else { out[i - 1] + 1 };
        for j in start..n {
            let tail = binomial((n - j - 1) as u64, (r - i - 1) as u64);
            if remaining < tail {
                out[i] = j;
                break;
            }
            remaining -= tail;
        }
    }
}
