// ============================================================================
// This code is part of Rusty-PBBS.
// ----------------------------------------------------------------------------
// MIT License
// 
// Copyright (c) 2023-present Javad Abdi, Mark C. Jeffrey
// 
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
// 
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
// 
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.
// ============================================================================

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use num_traits::ToPrimitive;


/// Element types a [`Searcher`](crate::Searcher) can hold.
///
/// Keys must be totally ordered and must support the proportional index
/// estimate used by interpolation steps.
pub trait SearchKey: Copy + PartialOrd + Debug + Display + Send + Sync {
    /// the total order used for sorting, range checks and probes.
    fn key_cmp(&self, other: &Self) -> Ordering;

    /// Returns `floor(width * (q - lo) / (hi - lo))`.
    ///
    /// Requires `lo < hi` and `lo <= q <= hi`; the result is then in
    /// `0..=width`.
    fn interpolate(width: usize, q: Self, lo: Self, hi: Self) -> usize;

    #[inline(always)]
    fn key_eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

macro_rules! int_search_key {
    ($($t: ty),*) => {$(
        impl SearchKey for $t {
            #[inline(always)]
            fn key_cmp(&self, other: &Self) -> Ordering { self.cmp(other) }

            #[inline(always)]
            fn interpolate(width: usize, q: Self, lo: Self, hi: Self) -> usize {
                debug_assert!(lo < hi && lo <= q && q <= hi);
                // both differences are non-negative and below 2^64, so the
                // product fits in 128 bits and floor division is plain division
                let num = (q as i128 - lo as i128) as u128;
                let den = (hi as i128 - lo as i128) as u128;
                let off = width as u128 * num / den;
                off.to_usize().unwrap_or(width).min(width)
            }
        }
    )*}
}

macro_rules! float_search_key {
    ($($t: ty),*) => {$(
        impl SearchKey for $t {
            #[inline(always)]
            fn key_cmp(&self, other: &Self) -> Ordering { self.total_cmp(other) }

            #[inline(always)]
            fn interpolate(width: usize, q: Self, lo: Self, hi: Self) -> usize {
                let (q, lo, hi) = (q as f64, lo as f64, hi as f64);
                let off = (width as f64 * (q - lo) / (hi - lo)).floor();
                // infinite bounds give NaN or infinite ratios; saturate them
                off.to_usize().unwrap_or(0).min(width)
            }
        }
    )*}
}

int_search_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
float_search_key!(f32, f64);
