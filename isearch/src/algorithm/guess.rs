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

use crate::key::SearchKey;


/// Inclusive search bounds into the sorted sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub bottom: usize,
    pub top: usize,
}

impl Window {
    pub fn new(bottom: usize, top: usize) -> Self {
        debug_assert!(bottom <= top);
        Self { bottom, top }
    }

    /// `top - bottom`, the quantity every non-terminal step decreases.
    #[inline(always)]
    pub fn width(&self) -> usize { self.top - self.bottom }

    /// the number of elements in the window.
    #[inline(always)]
    pub fn size(&self) -> usize { self.top + 1 - self.bottom }
}

/// How the probed element compares with the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Found,
    /// the probed element is smaller than the query.
    TooLow,
    /// the probed element is larger than the query.
    TooHigh,
}

/// Estimates the position of `q` proportionally to its value between the
/// window's end values.
///
/// Requires `seq[w.bottom] < seq[w.top]` and `q` within those values.
pub fn interpolation_guess<K: SearchKey>(seq: &[K], w: Window, q: K) -> usize {
    w.bottom + K::interpolate(w.width(), q, seq[w.bottom], seq[w.top])
}

/// The middle of the window, rounded down.
#[inline(always)]
pub fn binary_guess(w: Window) -> usize {
    w.bottom + w.width() / 2
}

/// The fraction of `w` a probe at `guess` discards.
///
/// Both cases are measured against the window before it is narrowed.
pub fn elimination_fraction(guess: usize, w: Window, probe: Probe) -> f64 {
    let removed = match probe {
        Probe::Found => return 1.0,
        Probe::TooLow => (guess + 1) - w.bottom,
        Probe::TooHigh => (w.top + 1) - guess,
    };
    removed as f64 / w.size() as f64
}

/// The window left after a probe at `guess`, or `None` once it is exhausted.
pub fn narrow(guess: usize, w: Window, probe: Probe) -> Option<Window> {
    match probe {
        Probe::Found => None,
        Probe::TooLow if guess < w.top => Some(Window::new(guess + 1, w.top)),
        Probe::TooHigh if guess > w.bottom => Some(Window::new(w.bottom, guess - 1)),
        _ => None,
    }
}
