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

use std::collections::BTreeMap;

use crate::error::SearchError;
use crate::key::SearchKey;
use super::searcher::{SearchConfig, SearchReport, Searcher, DEFAULT_THRESHOLD};
use super::strategy::Strategy;


/// One strategy's run in a [`Comparison`].
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRun {
    pub label: String,
    pub strategy: Strategy,
    /// the threshold requested for this run.
    pub threshold: f64,
    pub report: SearchReport,
}

impl MethodRun {
    pub fn total_steps(&self) -> usize { self.report.steps.total }
}

/// Runs of every strategy against the same query, in run order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comparison {
    runs: Vec<MethodRun>,
}

impl Comparison {
    pub fn runs(&self) -> &[MethodRun] { &self.runs }

    pub fn get(&self, label: &str) -> Option<&MethodRun> {
        self.runs.iter().find(|r| r.label == label)
    }

    /// label -> total steps taken.
    pub fn step_counts(&self) -> BTreeMap<String, usize> {
        self.runs
            .iter()
            .map(|r| (r.label.clone(), r.total_steps()))
            .collect()
    }

    pub fn len(&self) -> usize { self.runs.len() }

    pub fn is_empty(&self) -> bool { self.runs.is_empty() }
}

/// the label of a mixed run with an explicit threshold.
pub fn mixed_label(threshold: f64) -> String {
    format!("{} ({threshold} threshold)", Strategy::Mixed)
}

impl<K: SearchKey> Searcher<K> {
    /// Searches for `query` with interpolation, mixed and binary guessing.
    ///
    /// With `thresholds`, the mixed strategy runs once per distinct threshold
    /// (labelled `"mixed (T threshold)"`) instead of once with the default.
    /// Repeated thresholds only run the first time, so labels are unique.
    pub fn compare_methods(
        &self,
        query: K,
        thresholds: Option<&[f64]>
    ) -> Result<Comparison, SearchError<K>>
    {
        let mut plan: Vec<(String, Strategy, f64)> = vec![];
        plan.push((Strategy::Interpolation.to_string(), Strategy::Interpolation, DEFAULT_THRESHOLD));
        match thresholds {
            Some(ts) => {
                for &t in ts {
                    let label = mixed_label(t);
                    if plan.iter().all(|(l, _, _)| *l != label) {
                        plan.push((label, Strategy::Mixed, t));
                    }
                }
            }
            None => plan.push((Strategy::Mixed.to_string(), Strategy::Mixed, DEFAULT_THRESHOLD)),
        }
        plan.push((Strategy::Binary.to_string(), Strategy::Binary, DEFAULT_THRESHOLD));

        let runs = plan
            .into_iter()
            .map(|(label, strategy, threshold)| {
                let report = self.search_with(query, &SearchConfig::new(threshold, strategy))?;
                Ok(MethodRun { label, strategy, threshold, report })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Comparison { runs })
    }
}
