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
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::key::SearchKey;
use super::guess::{
    binary_guess, elimination_fraction, interpolation_guess, narrow, Probe, Window
};
use super::strategy::{SearchMode, Strategy};

pub const DEFAULT_THRESHOLD: f64 = 0.25;


/// Per-call search settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// an interpolation step that discards less than this fraction of the
    /// window is followed by a binary step (mixed strategy only).
    pub threshold: f64,
    pub strategy: Strategy,
    /// keep every step in [`SearchReport::trace`].
    pub record_trace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            strategy: Strategy::Mixed,
            record_trace: false,
        }
    }
}

impl SearchConfig {
    pub fn new(threshold: f64, strategy: Strategy) -> Self {
        Self { threshold, strategy, record_trace: false }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }
}

/// Guesses made during one search, split by the rule that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepCounts {
    pub total: usize,
    pub interpolation: usize,
    pub binary: usize,
}

impl StepCounts {
    fn record(&mut self, mode: SearchMode) {
        self.total += 1;
        match mode {
            SearchMode::Interpolation => self.interpolation += 1,
            SearchMode::Binary => self.binary += 1,
        }
    }
}

/// One guess of a search, in the window it was made in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStep {
    pub window: Window,
    pub mode: SearchMode,
    pub guess: usize,
    pub probe: Probe,
    /// `None` when the guess hit the query.
    pub eliminated: Option<f64>,
}

/// The outcome of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// the position the query was found at, `None` if the query lies inside
    /// the sequence range but does not occur in it.
    pub index: Option<usize>,
    pub steps: StepCounts,
    pub strategy: Strategy,
    /// the threshold the strategy actually ran with.
    pub threshold: f64,
    /// empty unless [`SearchConfig::record_trace`] is set.
    pub trace: Vec<TraceStep>,
}

impl SearchReport {
    pub fn found(&self) -> bool { self.index.is_some() }
}

/// Finds positions of values in a sorted sequence with interpolation,
/// binary or mixed guessing.
///
/// The sequence is sorted once at construction and never mutated, so a
/// `Searcher` can be shared between threads; every search keeps its window
/// and counters on its own stack.
///
/// With duplicates, the index returned is the first matching position the
/// guesses happen to hit, which need not be the lowest or highest one.
#[derive(Debug, Clone, PartialEq)]
pub struct Searcher<K> {
    seq: Vec<K>,
}

impl<K: SearchKey> Searcher<K> {
    /// Sorts `values` ascending and takes ownership of them.
    pub fn new<I: IntoIterator<Item = K>>(values: I) -> Self {
        let mut seq: Vec<K> = values.into_iter().collect();
        seq.par_sort_unstable_by(K::key_cmp);
        Self { seq }
    }

    /// Takes `seq` as is, rejecting it if it is not ascending.
    pub fn from_sorted(seq: Vec<K>) -> Result<Self, SearchError<K>> {
        match seq.windows(2).position(|p| p[1].key_cmp(&p[0]) == Ordering::Less) {
            Some(i) => Err(SearchError::Unsorted { index: i + 1 }),
            None => Ok(Self { seq }),
        }
    }

    pub fn as_slice(&self) -> &[K] { &self.seq }

    pub fn len(&self) -> usize { self.seq.len() }

    pub fn is_empty(&self) -> bool { self.seq.is_empty() }

    pub fn min(&self) -> Option<K> { self.seq.first().copied() }

    pub fn max(&self) -> Option<K> { self.seq.last().copied() }

    /// Returns the position of `query`, or `None` if it lies in the sequence
    /// range but does not occur.
    pub fn search(
        &self,
        query: K,
        threshold: f64,
        strategy: Strategy
    ) -> Result<Option<usize>, SearchError<K>>
    {
        self.search_with(query, &SearchConfig::new(threshold, strategy))
            .map(|r| r.index)
    }

    /// Like [`search`](Self::search), but returns the step counts (and the
    /// trace, if requested) along with the position.
    pub fn search_with(
        &self,
        query: K,
        config: &SearchConfig
    ) -> Result<SearchReport, SearchError<K>>
    {
        let (min, max) = match (self.min(), self.max()) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(SearchError::EmptySequence),
        };
        if query.key_cmp(&min) == Ordering::Less || query.key_cmp(&max) == Ordering::Greater {
            return Err(SearchError::OutOfRange { query, min, max });
        }

        let strategy = config.strategy;
        let threshold = strategy.effective_threshold(config.threshold);
        let seq = &self.seq[..];
        let mut w = Window::new(0, seq.len() - 1);
        let mut mode = strategy.initial_mode();
        let mut steps = StepCounts::default();
        let mut trace = Vec::new();

        trace!(
            target: "isearch::search",
            %query, %strategy, threshold, len = seq.len(),
            "starting search"
        );

        let index = loop {
            let (lo, hi) = (seq[w.bottom], seq[w.top]);

            // a single elimination can leave a window of one repeated value
            if lo.key_eq(&hi) {
                break lo.key_eq(&query).then_some(w.bottom);
            }
            if query.key_cmp(&lo) == Ordering::Less || query.key_cmp(&hi) == Ordering::Greater {
                break None;
            }

            let guess = match mode {
                SearchMode::Interpolation => interpolation_guess(seq, w, query),
                SearchMode::Binary => binary_guess(w),
            };
            let probed = seq[guess];
            steps.record(mode);
            trace!(
                target: "isearch::search",
                iteration = steps.total, %mode,
                bottom = w.bottom, top = w.top,
                bottom_value = %lo, top_value = %hi,
                guess, guess_value = %probed,
                "index guess"
            );

            let probe = match probed.key_cmp(&query) {
                Ordering::Equal => Probe::Found,
                Ordering::Less => Probe::TooLow,
                Ordering::Greater => Probe::TooHigh,
            };
            if probe == Probe::Found {
                if config.record_trace {
                    trace.push(TraceStep { window: w, mode, guess, probe, eliminated: None });
                }
                break Some(guess);
            }

            let eliminated = elimination_fraction(guess, w, probe);
            trace!(
                target: "isearch::search",
                iteration = steps.total, ?probe, eliminated,
                "window narrowed"
            );
            if config.record_trace {
                trace.push(TraceStep { window: w, mode, guess, probe, eliminated: Some(eliminated) });
            }

            mode = strategy.next_mode(mode, eliminated, threshold);
            match narrow(guess, w, probe) {
                Some(next) => w = next,
                None => break None,
            }
        };

        debug!(
            target: "isearch::search",
            %query, %strategy, ?index,
            steps = steps.total,
            interpolation_steps = steps.interpolation,
            binary_steps = steps.binary,
            "search finished"
        );

        Ok(SearchReport { index, steps, strategy, threshold, trace })
    }
}
