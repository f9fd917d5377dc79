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

use std::fmt;


/// The strategy a whole search runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// interpolation guesses only.
    Interpolation,
    /// halving guesses only.
    Binary,
    /// interpolation guesses, with a single binary step whenever an
    /// interpolation step discards less than the threshold.
    #[default]
    Mixed,
}

/// The rule used for the next index guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
    Interpolation,
    Binary,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Interpolation, Strategy::Mixed, Strategy::Binary];

    pub fn initial_mode(self) -> SearchMode {
        match self {
            Strategy::Interpolation | Strategy::Mixed => SearchMode::Interpolation,
            Strategy::Binary => SearchMode::Binary,
        }
    }

    /// Binary searches run with the threshold pinned to 1.0.
    pub fn effective_threshold(self, threshold: f64) -> f64 {
        match self {
            Strategy::Binary => 1.0,
            Strategy::Interpolation | Strategy::Mixed => threshold,
        }
    }

    /// Picks the mode for the step after one that used `mode` and
    /// discarded `eliminated` of the window.
    pub fn next_mode(self, mode: SearchMode, eliminated: f64, threshold: f64) -> SearchMode {
        match self {
            Strategy::Interpolation | Strategy::Binary => mode,
            Strategy::Mixed => switch_mode(mode, eliminated, threshold),
        }
    }
}

/// The mixed policy: a binary step is always followed by interpolation, and
/// an interpolation step that discarded less than `threshold` is followed
/// by one binary step.
pub fn switch_mode(mode: SearchMode, eliminated: f64, threshold: f64) -> SearchMode {
    match mode {
        SearchMode::Binary => SearchMode::Interpolation,
        SearchMode::Interpolation if eliminated < threshold => SearchMode::Binary,
        SearchMode::Interpolation => SearchMode::Interpolation,
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Strategy::Interpolation => write!(f, "interpolation"),
            Strategy::Binary => write!(f, "binary"),
            Strategy::Mixed => write!(f, "mixed"),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SearchMode::Interpolation => write!(f, "interpolation"),
            SearchMode::Binary => write!(f, "binary"),
        }
    }
}
