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

/// Errors reported by [`Searcher`](crate::Searcher).
///
/// A query that lies inside the sequence range but does not occur in it is
/// not an error; the search reports it as absent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError<K> {
    /// The query is below the smallest or above the largest element.
    #[error("the query value ({query}) is outside of the sequence range [{min}, {max}]")]
    OutOfRange { query: K, min: K, max: K },

    #[error("cannot search an empty sequence")]
    EmptySequence,

    /// `from_sorted` input is not ascending at `index`.
    #[error("input is not sorted: element {index} is smaller than its predecessor")]
    Unsorted { index: usize },
}
