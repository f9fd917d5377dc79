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

//! Adaptive interpolation search over sorted numeric sequences.
//!
//! A [`Searcher`] sorts its input once and answers position queries with
//! interpolation guesses, binary guesses, or a mix of both that falls back
//! to a single binary step whenever an interpolation step discards too
//! little of the window.
//!
//! ```
//! use isearch::{Searcher, Strategy};
//!
//! let s = Searcher::new(vec![11, 3, 7, 1, 9, 5]);
//! assert_eq!(s.search(7, 0.25, Strategy::Mixed), Ok(Some(3)));
//! assert_eq!(s.search(4, 0.25, Strategy::Mixed), Ok(None));
//! assert!(s.search(12, 0.25, Strategy::Binary).is_err());
//! ```

pub mod key;
pub mod error;
pub mod algorithm;
pub mod utilities;

pub use key::SearchKey;
pub use error::SearchError;
pub use algorithm::guess::{Probe, Window};
pub use algorithm::strategy::{SearchMode, Strategy};
pub use algorithm::searcher::{
    SearchConfig, SearchReport, Searcher, StepCounts, TraceStep, DEFAULT_THRESHOLD
};
pub use algorithm::compare::{Comparison, MethodRun};
