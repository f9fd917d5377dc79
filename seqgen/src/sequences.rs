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

use rayon::prelude::*;
use num_traits::{NumCast, PrimInt};

use crate::error::GenError;
use crate::random::Random;


/// Collects a tabulated sequence whose elements may have overflowed,
/// reporting the first overflowing position.
fn first_overflow<T>(kind: &'static str, v: Vec<Option<T>>) -> Result<Vec<T>, GenError> {
    match v.iter().position(Option::is_none) {
        Some(index) => Err(GenError::Overflow { kind, index }),
        None => Ok(v.into_iter().flatten().collect()),
    }
}

/// `n` random integers drawn from `[min, max]`, sorted ascending.
pub fn uniform_ints(n: usize, min: i64, max: i64, seed: u64) -> Result<Vec<i64>, GenError> {
    if min > max { return Err(GenError::InvalidRange { min, max }); }
    let r = Random::new(seed);
    let mut v: Vec<i64> = (0..n)
        .into_par_iter()
        .map(|i| r.ith_in_range(i as u64, min, max))
        .collect();
    v.par_sort_unstable();
    Ok(v)
}

/// `n` random reals drawn from `[min, max)`, sorted ascending.
pub fn uniform_reals(n: usize, min: f64, max: f64, seed: u64) -> Result<Vec<f64>, GenError> {
    if min >= max || !min.is_finite() || !max.is_finite() {
        return Err(GenError::InvalidRealRange { min, max });
    }
    let r = Random::new(seed);
    let mut v: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|i| min + (max - min) * r.ith_unit(i as u64))
        .collect();
    v.par_sort_unstable_by(f64::total_cmp);
    Ok(v)
}

/// The arithmetic progression `start + i * step` for `i` in `0..n`, sorted
/// ascending (a negative `step` counts down from `start`).
pub fn arithmetic<T>(n: usize, start: T, step: T) -> Result<Vec<T>, GenError>
where
    T: PrimInt + Send + Sync,
{
    let v: Vec<Option<T>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let i = <T as NumCast>::from(i)?;
            i.checked_mul(&step)?.checked_add(&start)
        })
        .collect();
    let mut v = first_overflow("arithmetic", v)?;
    v.par_sort_unstable();
    Ok(v)
}

/// The geometric progression `start * factor^i` for `i` in `0..n`, sorted
/// ascending.
pub fn geometric<T>(n: usize, start: T, factor: T) -> Result<Vec<T>, GenError>
where
    T: PrimInt,
{
    let mut v = Vec::with_capacity(n);
    let mut cur = start;
    for i in 0..n {
        if i > 0 {
            cur = cur
                .checked_mul(&factor)
                .ok_or(GenError::Overflow { kind: "geometric", index: i })?;
        }
        v.push(cur);
    }
    v.sort_unstable();
    Ok(v)
}

/// The first `n` Fibonacci numbers, starting from 0, 1.
pub fn fibonacci(n: usize) -> Result<Vec<i64>, GenError> {
    let mut v: Vec<i64> = Vec::with_capacity(n);
    for i in 0..n {
        let f = match i {
            0 => 0,
            1 => 1,
            _ => v[i - 1]
                .checked_add(v[i - 2])
                .ok_or(GenError::Overflow { kind: "fibonacci", index: i })?,
        };
        v.push(f);
    }
    Ok(v)
}

/// `1, 2, .., n-1` followed by a single `outlier`, sorted ascending.
///
/// With a large outlier, interpolation guesses on this sequence land far
/// below the key for every value but the outlier itself.
pub fn skewed(n: usize, outlier: i64) -> Vec<i64> {
    if n == 0 { return vec![]; }
    let mut v: Vec<i64> = (1..n as i64).into_par_iter().collect();
    v.push(outlier);
    v.par_sort_unstable();
    v
}

/// A random element of `arr`.
pub fn choose<T: Copy>(arr: &[T], seed: u64) -> Result<T, GenError> {
    if arr.is_empty() { return Err(GenError::Empty); }
    let i = Random::new(seed).rand() % arr.len() as u64;
    Ok(arr[i as usize])
}

/// A random key in `[min, max]`, which need not occur in any sequence.
pub fn key_in_range(min: i64, max: i64, seed: u64) -> Result<i64, GenError> {
    if min > max { return Err(GenError::InvalidRange { min, max }); }
    Ok(Random::new(seed).ith_in_range(0, min, max))
}
