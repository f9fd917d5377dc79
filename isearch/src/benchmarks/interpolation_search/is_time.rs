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

use std::str::FromStr;
use std::time::Duration;

#[path ="../macros.rs"] mod macros;
#[path ="../../common/io.rs"] mod io;

use isearch::{SearchConfig, SearchKey, Searcher, Strategy};
use io::{read_sequence_file, write_slice_to_file_seq, Sequence};

define_args!(
    Algs::MIXED,
    (query, String, ("").to_string(), "the value to search for (a random element if empty)"),
    (threshold, f64, isearch::DEFAULT_THRESHOLD, "the interpolation threshold of the mixed strategy"),
    (thresholds, String, ("").to_string(), "comma separated thresholds for the compare sweep"),
    (seed, u64, 0, "the seed used to pick a random query")
);

define_algs!(
    (MIXED, "mixed"),
    (INTERPOLATION, "interpolation"),
    (BINARY, "binary"),
    (COMPARE, "compare")
);

fn fail(msg: String) -> ! {
    eprintln!("is_time: {msg}");
    std::process::exit(1);
}

fn parse_thresholds(s: &str) -> Result<Option<Vec<f64>>, String> {
    if s.trim().is_empty() { return Ok(None); }
    s.split(',')
        .map(|t| {
            let t = t.trim();
            match t.parse::<f64>() {
                Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
                _ => Err(format!("threshold \"{t}\" is not a fraction in [0, 1]")),
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// one `label,steps,interpolation_steps,binary_steps,index` line per run.
pub fn run<K: SearchKey>(
    alg: Algs,
    rounds: usize,
    searcher: &Searcher<K>,
    query: K,
    threshold: f64,
    thresholds: Option<&[f64]>
) -> Result<(Vec<String>, Duration), String>
{
    let strategy = match alg {
        Algs::MIXED => Strategy::Mixed,
        Algs::INTERPOLATION => Strategy::Interpolation,
        Algs::BINARY => Strategy::Binary,
        Algs::COMPARE => {
            let mut r = searcher.compare_methods(query, thresholds);
            let mean = time_loop(
                "compare",
                rounds,
                Duration::from_millis(100),
                || {},
                || { r = searcher.compare_methods(query, thresholds); },
                || {}
            );
            let cmp = r.map_err(|e| e.to_string())?;
            let lines = cmp
                .runs()
                .iter()
                .map(|m| format_line(&m.label, &m.report))
                .collect();
            return Ok((lines, mean));
        }
    };

    let config = SearchConfig::new(threshold, strategy);
    let mut r = searcher.search_with(query, &config);
    let mean = time_loop(
        "search",
        rounds,
        Duration::from_millis(100),
        || {},
        || { r = searcher.search_with(query, &config); },
        || {}
    );
    let report = r.map_err(|e| e.to_string())?;
    Ok((vec![format_line(&strategy.to_string(), &report)], mean))
}

fn format_line(label: &str, report: &isearch::SearchReport) -> String {
    let index = report.index.map_or("none".to_string(), |i| i.to_string());
    format!(
        "{label},{},{},{},{index}",
        report.steps.total, report.steps.interpolation, report.steps.binary
    )
}

fn bench<K>(args: &Args, values: Vec<K>) where
    K: SearchKey + FromStr,
{
    let searcher = Searcher::new(values);
    let query = if args.query.is_empty() {
        seqgen::choose(searcher.as_slice(), args.seed).unwrap_or_else(|e| fail(e.to_string()))
    } else {
        args.query
            .parse::<K>()
            .unwrap_or_else(|_| fail(format!("cannot parse query \"{}\"", args.query)))
    };
    let thresholds = parse_thresholds(&args.thresholds).unwrap_or_else(|e| fail(e));
    println!("query: {query}");

    let (r, d) = run(
        args.algorithm,
        args.rounds,
        &searcher,
        query,
        args.threshold,
        thresholds.as_deref()
    ).unwrap_or_else(|e| fail(e));

    finalize!(
        args,
        r,
        d,
        write_slice_to_file_seq(&r, &args.ofname)
    );
}

fn main() {
    let args = Args::parse();
    init!(args.verbose);
    if !(0.0..=1.0).contains(&args.threshold) {
        fail(format!("threshold {} is not a fraction in [0, 1]", args.threshold));
    }
    match read_sequence_file(&args.ifname) {
        Ok(Sequence::Int(v)) => bench(&args, v),
        Ok(Sequence::Double(v)) => bench(&args, v),
        Err(e) => fail(format!("cannot read {}: {e}", args.ifname)),
    }
}
