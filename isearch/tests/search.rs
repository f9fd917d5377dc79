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

use isearch::*;


fn all_find<K: SearchKey>(s: &Searcher<K>, q: K) -> Vec<Option<usize>> {
    Strategy::ALL
        .iter()
        .map(|&st| s.search(q, DEFAULT_THRESHOLD, st).unwrap())
        .collect()
}

#[test]
fn sorts_on_construction() {
    let s = Searcher::new(vec![9, 1, 5, 1]);
    assert_eq!(s.as_slice(), &[1, 1, 5, 9]);
    assert_eq!(s.len(), 4);
    assert_eq!(s.min(), Some(1));
    assert_eq!(s.max(), Some(9));
}

#[test]
fn from_sorted_checks_order() {
    assert!(Searcher::from_sorted(vec![1, 2, 2, 3]).is_ok());
    assert_eq!(
        Searcher::from_sorted(vec![1, 3, 2]),
        Err(SearchError::Unsorted { index: 2 })
    );
}

#[test]
fn uniform_sequence_mixed() {
    let s = Searcher::new(vec![1, 3, 5, 7, 9, 11]);
    let r = s.search_with(7, &SearchConfig::default()).unwrap();
    assert_eq!(r.index, Some(3));
    assert!(r.steps.total <= 2);
    assert_eq!(r.strategy, Strategy::Mixed);
}

#[test]
fn repeated_value_needs_no_guess() {
    let s = Searcher::new(vec![5, 5, 5, 5]);
    for strategy in Strategy::ALL {
        let r = s.search_with(5, &SearchConfig::default().with_strategy(strategy)).unwrap();
        assert_eq!(r.index, Some(0));
        assert_eq!(r.steps, StepCounts::default());
    }
}

#[test]
fn single_element() {
    let s = Searcher::new(vec![42u32]);
    let r = s.search_with(42, &SearchConfig::default()).unwrap();
    assert_eq!(r.index, Some(0));
    assert_eq!(r.steps.total, 0);
}

#[test]
fn arithmetic_sequence_found_in_one_interpolation_step() {
    let s = Searcher::new(1..=1000);
    let r = s
        .search_with(500, &SearchConfig::new(DEFAULT_THRESHOLD, Strategy::Interpolation))
        .unwrap();
    assert_eq!(r.index, Some(499));
    assert_eq!(r.steps, StepCounts { total: 1, interpolation: 1, binary: 0 });
}

#[test]
fn evenly_spaced_floats_found_in_one_interpolation_step() {
    let cfg = SearchConfig::new(DEFAULT_THRESHOLD, Strategy::Interpolation);

    let s = Searcher::new((0..50).map(|i| i as f64));
    let r = s.search_with(1.0, &cfg).unwrap();
    assert_eq!(r.index, Some(1));
    assert_eq!(r.steps, StepCounts { total: 1, interpolation: 1, binary: 0 });

    let s = Searcher::new((1..=1000).map(|i| i as f64));
    let r = s.search_with(500.0, &cfg).unwrap();
    assert_eq!(r.index, Some(499));
    assert_eq!(r.steps.total, 1);
}

#[test]
fn skewed_sequence_falls_back_to_binary() {
    let s = Searcher::new((1..=50).chain([10_000]));
    let cfg = SearchConfig::default().with_threshold(0.25).with_trace(true);
    let r = s.search_with(40, &cfg).unwrap();
    assert_eq!(r.index, Some(39));
    assert_eq!(r.steps, StepCounts { total: 5, interpolation: 3, binary: 2 });

    use SearchMode::*;
    let modes: Vec<_> = r.trace.iter().map(|t| t.mode).collect();
    assert_eq!(modes, vec![Interpolation, Binary, Interpolation, Binary, Interpolation]);
    let first = r.trace[0];
    assert_eq!(first.guess, 0);
    assert_eq!(first.probe, Probe::TooLow);
    assert!(first.eliminated.unwrap() < 0.25);
    assert_eq!(r.trace[4].probe, Probe::Found);
    assert_eq!(r.trace[4].eliminated, None);

    // the outlier itself is hit by the first guess
    let r = s.search_with(10_000, &cfg).unwrap();
    assert_eq!(r.index, Some(50));
    assert_eq!(r.steps.total, 1);
}

#[test]
fn skewed_sequence_degrades_pure_interpolation() {
    let s = Searcher::new((1..=50).chain([10_000]));
    let cfg = SearchConfig::new(DEFAULT_THRESHOLD, Strategy::Interpolation);
    let r = s.search_with(40, &cfg).unwrap();
    assert_eq!(r.index, Some(39));
    assert_eq!(r.steps.total, 40);
    assert_eq!(r.steps.binary, 0);

    // a zero threshold never triggers a binary step
    let r = s.search_with(40, &SearchConfig::new(0.0, Strategy::Mixed)).unwrap();
    assert_eq!(r.steps.total, 40);
}

#[test]
fn out_of_range_rejected_by_every_strategy() {
    let s = Searcher::new(vec![10, 20, 30]);
    for strategy in Strategy::ALL {
        assert_eq!(
            s.search(5, DEFAULT_THRESHOLD, strategy),
            Err(SearchError::OutOfRange { query: 5, min: 10, max: 30 })
        );
        assert_eq!(
            s.search(35, DEFAULT_THRESHOLD, strategy),
            Err(SearchError::OutOfRange { query: 35, min: 10, max: 30 })
        );
    }
}

#[test]
fn out_of_range_message() {
    let s = Searcher::new(vec![10, 20, 30]);
    let e = s.search(5, DEFAULT_THRESHOLD, Strategy::Mixed).unwrap_err();
    assert_eq!(
        e.to_string(),
        "the query value (5) is outside of the sequence range [10, 30]"
    );
}

#[test]
fn empty_sequence_is_an_error() {
    let s: Searcher<i32> = Searcher::new(vec![]);
    assert!(s.is_empty());
    for strategy in Strategy::ALL {
        assert_eq!(s.search(1, DEFAULT_THRESHOLD, strategy), Err(SearchError::EmptySequence));
    }
}

#[test]
fn absent_value_in_range() {
    let s = Searcher::new(vec![1, 3, 5, 7, 9, 11]);
    for q in [2, 4, 6, 8, 10] {
        assert_eq!(all_find(&s, q), vec![None, None, None]);
    }

    // the last window collapses to one value that differs from the query
    let s = Searcher::new(vec![1, 1, 1, 3, 3, 3]);
    assert_eq!(all_find(&s, 2), vec![None, None, None]);
}

#[test]
fn every_element_found() {
    let v = vec![-100, -50, -7, 0, 3, 8, 8, 8, 13, 500, 501, 90_000];
    let s = Searcher::new(v.clone());
    for &q in &v {
        for i in all_find(&s, q) {
            let i = i.unwrap();
            assert_eq!(s.as_slice()[i], q);
        }
    }
}

#[test]
fn duplicates_return_some_matching_index() {
    let s = Searcher::new(vec![1, 2, 2, 2, 2, 2, 3]);
    for i in all_find(&s, 2) {
        assert!((1..=5).contains(&i.unwrap()));
    }
}

#[test]
fn two_elements_binary() {
    let s = Searcher::new(vec![1, 2]);
    let r = s
        .search_with(2, &SearchConfig::new(DEFAULT_THRESHOLD, Strategy::Binary))
        .unwrap();
    assert_eq!(r.index, Some(1));
    assert_eq!(r.steps, StepCounts { total: 1, interpolation: 0, binary: 1 });
    assert_eq!(r.threshold, 1.0);
}

#[test]
fn float_keys() {
    let s = Searcher::new(vec![10.0, 0.5, 3.75, 1.25, 2.0]);
    assert_eq!(s.as_slice(), &[0.5, 1.25, 2.0, 3.75, 10.0]);
    assert_eq!(all_find(&s, 3.75), vec![Some(3); 3]);
    assert_eq!(all_find(&s, 3.0), vec![None; 3]);
    assert!(s.search(11.0, DEFAULT_THRESHOLD, Strategy::Mixed).is_err());
    assert!(s.search(f64::NAN, DEFAULT_THRESHOLD, Strategy::Mixed).is_err());
}

#[test]
fn large_threshold_alternates_modes() {
    let s = Searcher::new((1..=50).chain([10_000]));
    let r = s.search_with(40, &SearchConfig::new(1.5, Strategy::Mixed)).unwrap();
    assert_eq!(r.index, Some(39));
    assert!(r.steps.binary > 0);
    assert!(r.steps.binary <= r.steps.interpolation);
}

#[test]
fn generated_sequence() {
    let v = seqgen::uniform_ints(10_000, -10_000, 100_000_000, 7).unwrap();
    let s = Searcher::new(v);
    for i in 0..50u64 {
        let q = seqgen::choose(s.as_slice(), i).unwrap();
        for st in Strategy::ALL {
            let r = s.search_with(q, &SearchConfig::new(DEFAULT_THRESHOLD, st)).unwrap();
            assert_eq!(s.as_slice()[r.index.unwrap()], q);
            if st == Strategy::Binary {
                assert!(r.steps.total <= utilities::binary_step_bound(s.len()));
            }
        }
    }
}

#[test]
fn shared_between_threads() {
    let s = Searcher::new(seqgen::uniform_ints(5_000, 0, 1_000_000, 3).unwrap());
    std::thread::scope(|scope| {
        for t in 0..4u64 {
            let s = &s;
            scope.spawn(move || {
                for i in 0..100u64 {
                    let q = seqgen::choose(s.as_slice(), t * 1000 + i).unwrap();
                    let i = s.search(q, DEFAULT_THRESHOLD, Strategy::Mixed).unwrap().unwrap();
                    assert_eq!(s.as_slice()[i], q);
                }
            });
        }
    });
}
