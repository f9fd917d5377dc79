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

use clap::Parser;
use std::cmp::Ordering;

#[path ="../macros.rs"] mod macros;
#[path ="../../common/io.rs"] mod io;

use isearch::utilities::binary_step_bound;
use isearch::{SearchError, SearchKey, Searcher, Strategy, DEFAULT_THRESHOLD};
use io::{read_sequence_file, Sequence};
use seqgen::Random;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    /// the input sequence's filename
    #[clap(value_parser, required=true)]
    ifname: String,

    /// the number of present and of absent queries to check
    #[clap(short, long, value_parser, required=false, default_value_t=100)]
    queries: usize,

    /// the seed used to pick queries
    #[clap(short, long, value_parser, required=false, default_value_t=0)]
    seed: u64,

    /// trace every search step
    #[clap(short, long, required=false)]
    verbose: bool,
}

fn contains<K: SearchKey>(arr: &[K], q: &K) -> bool {
    arr.binary_search_by(|x| x.key_cmp(q)).is_ok()
}

/// Checks every strategy on `present`, `absent` and `outside` queries and
/// returns the number of failures.
pub fn check<K: SearchKey>(
    searcher: &Searcher<K>,
    present: &[K],
    absent: &[K],
    outside: &[K]
) -> usize
{
    let arr = searcher.as_slice();
    let bound = binary_step_bound(arr.len());
    let mut errors = 0usize;

    for strategy in Strategy::ALL {
        let cfg = isearch::SearchConfig::new(DEFAULT_THRESHOLD, strategy);
        for &q in present {
            match searcher.search_with(q, &cfg) {
                Ok(r) => match r.index {
                    Some(i) if arr[i].key_eq(&q) => {
                        if strategy == Strategy::Binary && r.steps.total > bound {
                            eprintln!("{strategy}: {q} took {} steps (bound {bound})", r.steps.total);
                            errors += 1;
                        }
                    }
                    i => {
                        eprintln!("{strategy}: {q} is present but search returned {i:?}");
                        errors += 1;
                    }
                },
                Err(e) => {
                    eprintln!("{strategy}: {q} is present but search failed: {e}");
                    errors += 1;
                }
            }
        }
        for &q in absent {
            match searcher.search(q, DEFAULT_THRESHOLD, strategy) {
                Ok(None) => {}
                r => {
                    eprintln!("{strategy}: {q} is absent but search returned {r:?}");
                    errors += 1;
                }
            }
        }
        for &q in outside {
            if !matches!(
                searcher.search(q, DEFAULT_THRESHOLD, strategy),
                Err(SearchError::OutOfRange { .. })
            ) {
                eprintln!("{strategy}: {q} is out of range but was not rejected");
                errors += 1;
            }
        }
    }
    errors
}

fn pick_present<K: SearchKey>(arr: &[K], n: usize, r: Random) -> Vec<K> {
    (0..n as u64)
        .map(|i| arr[(r.ith_rand(i) % arr.len() as u64) as usize])
        .collect()
}

fn int_queries(arr: &[i64], n: usize, seed: u64) -> (Vec<i64>, Vec<i64>, Vec<i64>) {
    let r = Random::new(seed);
    let present = pick_present(arr, n, r);
    let (min, max) = (arr[0], arr[arr.len() - 1]);
    let ra = r.fork(1);
    let absent = (0..4 * n as u64)
        .map(|i| ra.ith_in_range(i, min, max))
        .filter(|q| !contains(arr, q))
        .take(n)
        .collect();
    let outside = [min.checked_sub(1), max.checked_add(1)]
        .into_iter()
        .flatten()
        .collect();
    (present, absent, outside)
}

fn double_queries(arr: &[f64], n: usize, seed: u64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let r = Random::new(seed);
    let present = pick_present(arr, n, r);
    let (min, max) = (arr[0], arr[arr.len() - 1]);
    let ra = r.fork(1);
    let mut absent = vec![];
    if arr.len() > 1 {
        for i in 0..4 * n as u64 {
            if absent.len() == n { break; }
            let j = (ra.ith_rand(i) % (arr.len() as u64 - 1)) as usize;
            let m = arr[j] + (arr[j + 1] - arr[j]) / 2.0;
            if m.key_cmp(&arr[j]) == Ordering::Greater
                && m.key_cmp(&arr[j + 1]) == Ordering::Less
                && !contains(arr, &m)
            {
                absent.push(m);
            }
        }
    }
    let outside = [min - 1.0, max + 1.0]
        .into_iter()
        .filter(|q| {
            q.key_cmp(&min) == Ordering::Less || q.key_cmp(&max) == Ordering::Greater
        })
        .collect();
    (present, absent, outside)
}

fn main() {
    let args = Args::parse();
    init!(args.verbose);
    let errors = match read_sequence_file(&args.ifname) {
        Ok(Sequence::Int(v)) if !v.is_empty() => {
            let searcher = Searcher::new(v);
            let (p, a, o) = int_queries(searcher.as_slice(), args.queries, args.seed);
            check(&searcher, &p, &a, &o)
        }
        Ok(Sequence::Double(v)) if !v.is_empty() => {
            let searcher = Searcher::new(v);
            let (p, a, o) = double_queries(searcher.as_slice(), args.queries, args.seed);
            check(&searcher, &p, &a, &o)
        }
        Ok(_) => {
            eprintln!("{} holds an empty sequence.", args.ifname);
            1
        }
        Err(e) => {
            eprintln!("cannot read {}: {e}", args.ifname);
            1
        }
    };

    if errors == 0 { println!("OK"); }
    else {
        eprintln!("{errors} check(s) failed.");
        eprintln!("ERR");
        std::process::exit(1);
    }
}
