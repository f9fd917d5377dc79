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

use std::{fmt, fs};
use clap::{Parser, ValueEnum};

use seqgen::*;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Kind {
    Uniform,
    UniformReal,
    Arithmetic,
    Geometric,
    Fibonacci,
    Skewed,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Kind::Uniform => write!(f, "uniform"),
            Kind::UniformReal => write!(f, "uniform-real"),
            Kind::Arithmetic => write!(f, "arithmetic"),
            Kind::Geometric => write!(f, "geometric"),
            Kind::Fibonacci => write!(f, "fibonacci"),
            Kind::Skewed => write!(f, "skewed"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the kind of sequence to generate
    #[clap(value_parser)]
    kind: Kind,

    /// the output filename
    #[clap(value_parser, required=true)]
    ofname: String,

    /// the number of elements
    #[clap(short, long, value_parser, default_value_t=100)]
    n: usize,

    /// the smallest value (uniform kinds)
    #[clap(long, value_parser, default_value_t=1, allow_negative_numbers=true)]
    min: i64,

    /// the largest value (uniform kinds) or the outlier (skewed)
    #[clap(long, value_parser, default_value_t=10000, allow_negative_numbers=true)]
    max: i64,

    /// the first element (progressions)
    #[clap(long, value_parser, default_value_t=1, allow_negative_numbers=true)]
    start: i64,

    /// the common difference or ratio (progressions)
    #[clap(long, value_parser, default_value_t=2, allow_negative_numbers=true)]
    factor: i64,

    /// the random seed
    #[clap(short, long, value_parser, default_value_t=0)]
    seed: u64,
}

fn write_sequence<T: ToString>(header: &str, s: &[T], of: &str) -> std::io::Result<()> {
    let mut lines = Vec::with_capacity(s.len() + 1);
    lines.push(header.to_string());
    lines.extend(s.iter().map(T::to_string));
    fs::write(of, lines.join("\n"))
}

fn generate(args: &Args) -> Result<(), String> {
    let of = &args.ofname;
    let io_err = |e: std::io::Error| format!("cannot write {of}: {e}");
    let ints = match args.kind {
        Kind::UniformReal => {
            let v = uniform_reals(args.n, args.min as f64, args.max as f64, args.seed)
                .map_err(|e| e.to_string())?;
            return write_sequence("sequenceDouble", &v, of).map_err(io_err);
        }
        Kind::Uniform => uniform_ints(args.n, args.min, args.max, args.seed),
        Kind::Arithmetic => arithmetic(args.n, args.start, args.factor),
        Kind::Geometric => geometric(args.n, args.start, args.factor),
        Kind::Fibonacci => fibonacci(args.n),
        Kind::Skewed => Ok(skewed(args.n, args.max)),
    }
    .map_err(|e| e.to_string())?;
    write_sequence("sequenceInt", &ints, of).map_err(io_err)
}

fn main() {
    let args = Args::parse();
    if let Err(e) = generate(&args) {
        eprintln!("seq_gen ({}): {e}", args.kind);
        std::process::exit(1);
    }
}
