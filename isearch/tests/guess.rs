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

use isearch::algorithm::guess::*;
use isearch::algorithm::strategy::switch_mode;
use isearch::utilities::{binary_step_bound, log2_up};
use isearch::{SearchKey, SearchMode, Strategy};


#[test]
fn interpolation_guess_on_uniform_values() {
    let s = [1, 3, 5, 7, 9, 11];
    assert_eq!(interpolation_guess(&s, Window::new(0, 5), 7), 3);
    assert_eq!(interpolation_guess(&s, Window::new(0, 5), 1), 0);
    assert_eq!(interpolation_guess(&s, Window::new(0, 5), 11), 5);
    assert_eq!(interpolation_guess(&s, Window::new(2, 5), 8), 3);
}

#[test]
fn interpolation_guess_on_skewed_values() {
    let s: Vec<i64> = (1..=50).chain([10_000]).collect();
    assert_eq!(interpolation_guess(&s, Window::new(0, 50), 40), 0);
    assert_eq!(interpolation_guess(&s, Window::new(0, 50), 10_000), 50);
}

#[test]
fn binary_guess_rounds_down() {
    assert_eq!(binary_guess(Window::new(0, 5)), 2);
    assert_eq!(binary_guess(Window::new(3, 4)), 3);
    assert_eq!(binary_guess(Window::new(7, 7)), 7);
}

#[test]
fn interpolate_integers_floors() {
    assert_eq!(i32::interpolate(4, -5, -10, 10), 1);
    assert_eq!(i32::interpolate(3, 2, 0, 3), 2);
    assert_eq!(u8::interpolate(255, 255, 0, 255), 255);
}

#[test]
fn interpolate_integers_does_not_overflow() {
    assert_eq!(i64::interpolate(10, 0, i64::MIN, i64::MAX), 5);
    assert_eq!(u64::interpolate(4, u64::MAX, 0, u64::MAX), 4);
    assert_eq!(u64::interpolate(usize::MAX, 0, 0, u64::MAX), 0);
    assert_eq!(i64::interpolate(usize::MAX, i64::MAX, i64::MIN, i64::MAX), usize::MAX);
}

#[test]
fn interpolate_floats() {
    assert_eq!(f64::interpolate(10, 2.5, 0.0, 10.0), 2);
    assert_eq!(f64::interpolate(10, 10.0, 0.0, 10.0), 10);
    assert_eq!(f32::interpolate(8, -1.0, -2.0, 2.0), 2);
    // multiplying before dividing keeps 49 * 1 / 49 exact
    assert_eq!(f64::interpolate(49, 1.0, 0.0, 49.0), 1);
    assert_eq!(f64::interpolate(10, 5.0, 0.0, f64::INFINITY), 0);
    assert_eq!(f64::interpolate(10, f64::INFINITY, 0.0, f64::INFINITY), 0);
}

#[test]
fn float_keys_use_total_order() {
    assert!(f64::NAN.key_cmp(&f64::INFINITY).is_gt());
    assert!((-0.0f64).key_cmp(&0.0).is_lt());
    assert!(1.5f64.key_eq(&1.5));
}

#[test]
fn elimination_fraction_uses_window_before_narrowing() {
    let w = Window::new(0, 5);
    let low = elimination_fraction(1, w, Probe::TooLow);
    let high = elimination_fraction(4, w, Probe::TooHigh);
    assert!((low - 2.0 / 6.0).abs() < 1e-12);
    assert!((high - 2.0 / 6.0).abs() < 1e-12);

    let w = Window::new(10, 19);
    assert!((elimination_fraction(10, w, Probe::TooLow) - 0.1).abs() < 1e-12);
    assert!((elimination_fraction(19, w, Probe::TooHigh) - 0.1).abs() < 1e-12);
    assert!((elimination_fraction(18, w, Probe::TooLow) - 0.9).abs() < 1e-12);
    assert_eq!(elimination_fraction(12, w, Probe::Found), 1.0);
}

#[test]
fn narrow_excludes_the_guess() {
    let w = Window::new(0, 5);
    assert_eq!(narrow(1, w, Probe::TooLow), Some(Window::new(2, 5)));
    assert_eq!(narrow(4, w, Probe::TooHigh), Some(Window::new(0, 3)));
    assert_eq!(narrow(5, w, Probe::TooLow), None);
    assert_eq!(narrow(0, w, Probe::TooHigh), None);
    assert_eq!(narrow(2, w, Probe::Found), None);
}

#[test]
fn window_sizes() {
    let w = Window::new(3, 7);
    assert_eq!(w.width(), 4);
    assert_eq!(w.size(), 5);
}

#[test]
fn mixed_policy() {
    use SearchMode::*;
    assert_eq!(switch_mode(Binary, 0.0, 0.25), Interpolation);
    assert_eq!(switch_mode(Binary, 0.9, 0.25), Interpolation);
    assert_eq!(switch_mode(Interpolation, 0.1, 0.25), Binary);
    assert_eq!(switch_mode(Interpolation, 0.25, 0.25), Interpolation);
    assert_eq!(switch_mode(Interpolation, 0.6, 0.25), Interpolation);
}

#[test]
fn pure_strategies_never_switch() {
    use SearchMode::*;
    assert_eq!(Strategy::Interpolation.next_mode(Interpolation, 0.01, 0.25), Interpolation);
    assert_eq!(Strategy::Binary.next_mode(Binary, 0.5, 1.0), Binary);
    assert_eq!(Strategy::Mixed.next_mode(Interpolation, 0.01, 0.25), Binary);
    assert_eq!(Strategy::Mixed.next_mode(Binary, 0.01, 0.25), Interpolation);
}

#[test]
fn initial_modes_and_thresholds() {
    assert_eq!(Strategy::Mixed.initial_mode(), SearchMode::Interpolation);
    assert_eq!(Strategy::Interpolation.initial_mode(), SearchMode::Interpolation);
    assert_eq!(Strategy::Binary.initial_mode(), SearchMode::Binary);
    assert_eq!(Strategy::Binary.effective_threshold(0.1), 1.0);
    assert_eq!(Strategy::Mixed.effective_threshold(0.1), 0.1);
    assert_eq!(Strategy::default(), Strategy::Mixed);
    assert_eq!(Strategy::Mixed.to_string(), "mixed");
}

#[test]
fn step_bounds() {
    assert_eq!(log2_up(1usize), 0);
    assert_eq!(log2_up(2usize), 1);
    assert_eq!(log2_up(5usize), 3);
    assert_eq!(log2_up(1024usize), 10);
    assert_eq!(binary_step_bound(0), 0);
    assert_eq!(binary_step_bound(1), 0);
    assert_eq!(binary_step_bound(2), 1);
    assert_eq!(binary_step_bound(1000), 10);
}
