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

use std::time::{Duration, Instant};


/// Runs `f` repeatedly for at least `warmup`, then times `rounds` runs of it
/// and returns their mean.
///
/// `init` and `end` run before and after every call of `f` and are not
/// timed.
pub fn time_loop<I, F, E>(
    name: &str,
    rounds: usize,
    warmup: Duration,
    mut init: I,
    mut f: F,
    mut end: E
) -> Duration where
    I: FnMut(),
    F: FnMut(),
    E: FnMut(),
{
    let start = Instant::now();
    loop {
        init();
        f();
        end();
        if start.elapsed() >= warmup { break; }
    }

    let mut total = Duration::ZERO;
    for _ in 0..rounds {
        init();
        let t = Instant::now();
        f();
        let d = t.elapsed();
        end();
        println!("{}:\t{:.9}", name, d.as_secs_f64());
        total += d;
    }
    total / rounds.max(1) as u32
}
