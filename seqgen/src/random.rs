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

/// calculates a hash of u based on numerical recipes.
#[inline(always)]
pub fn hash64(u: u64) -> u64 {
    let mut v = u.wrapping_mul(3_935_559_000_370_003_845);
    v = v.wrapping_add(2_691_343_689_449_507_681);
    v ^= v >> 21;
    v ^= v << 37;
    v ^= v >> 4;
    v = v.wrapping_mul(4_768_777_513_237_032_717);
    v ^= v << 20;
    v ^= v >> 41;
    v ^= v << 5;
    v
}

/// A counter-based random number generator.
///
/// The i-th value only depends on the seed and `i`, so sequences can be
/// tabulated in parallel and regenerated exactly from the seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Random {
    state: u64,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// An independent generator for the i-th sub-stream.
    pub fn fork(&self, i: u64) -> Self {
        Self::new(hash64(hash64(i.wrapping_add(self.state))))
    }

    pub fn next(&self) -> Self {
        self.fork(0)
    }

    pub fn ith_rand(&self, i: u64) -> u64 {
        hash64(i.wrapping_add(self.state))
    }

    pub fn rand(&self) -> u64 {
        self.ith_rand(0)
    }

    /// the i-th value drawn uniformly from `[min, max]` (inclusive).
    pub fn ith_in_range(&self, i: u64, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        let span = (max as i128 - min as i128) as u128 + 1;
        let off = self.ith_rand(i) as u128 % span;
        (min as i128 + off as i128) as i64
    }

    /// the i-th value drawn uniformly from `[0, 1)`.
    pub fn ith_unit(&self, i: u64) -> f64 {
        // top 53 bits fill the mantissa exactly
        (self.ith_rand(i) >> 11) as f64 / (1u64 << 53) as f64
    }
}
