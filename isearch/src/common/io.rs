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

use std::{fs, io};
use rayon::prelude::*;


/// A sequence file: PBBS `sequenceInt` or `sequenceDouble`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Sequence {
    Int(Vec<i64>),
    Double(Vec<f64>),
}

fn parse_lines<T>(lines: &[&str]) -> io::Result<Vec<T>> where
    T: std::str::FromStr + Send,
{
    lines
        .par_iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.parse::<T>().map_err(|_| io::Error::new(
            io::ErrorKind::InvalidData,
            format!("cannot parse \"{l}\"")
        )))
        .collect()
}

/// reads a sequence file; the header line picks the element type.
#[allow(dead_code)]
pub(crate) fn read_sequence_file<P>(fname: P) -> io::Result<Sequence> where
    P: AsRef<std::path::Path>,
{
    let s = fs::read_to_string(fname)?;
    let w: Vec<_> = s.par_split('\n').collect();
    match w.first().map(|h| h.trim()) {
        Some("sequenceInt") => Ok(Sequence::Int(parse_lines(&w[1..])?)),
        Some("sequenceDouble") => Ok(Sequence::Double(parse_lines(&w[1..])?)),
        h => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("unknown sequence header {:?}", h.unwrap_or(""))
        )),
    }
}

#[allow(dead_code)]
pub(crate) fn write_slice_to_file_seq<T, F>(s: &[T], of: F) -> io::Result<()>
where
    T: std::string::ToString,
    F: AsRef<std::path::Path>,
{
    let s: Vec<String> = s
        .iter()
        .map(T::to_string)
        .collect();
    fs::write(of, s.join("\n"))
}
