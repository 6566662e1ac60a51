// SPDX-License-Identifier: MIT

use super::*;

#[test]
fn system_clock_returns_valid_fields() {
    let clock = SystemClock;
    let now = clock.now_local();

    assert!(now.hour < 24);
    assert!(now.minute < 60);
    assert!(now.second < 60);
}

#[test]
fn fake_clock_starts_at_midnight() {
    let clock = FakeClock::new();
    assert_eq!(clock.now_local(), LocalTime::new(0, 0, 0));
}

#[test]
fn fake_clock_set_and_read() {
    let clock = FakeClock::new();
    clock.set(9, 30, 0);
    assert_eq!(clock.now_local(), LocalTime::new(9, 30, 0));
}

#[test]
fn fake_clock_advance_carries_into_minutes() {
    let clock = FakeClock::at(9, 30, 58);
    clock.advance_secs(3);
    assert_eq!(clock.now_local(), LocalTime::new(9, 31, 1));
}

#[test]
fn fake_clock_advance_wraps_at_midnight() {
    let clock = FakeClock::at(23, 59, 59);
    clock.advance_secs(2);
    assert_eq!(clock.now_local(), LocalTime::new(0, 0, 1));
}

#[test]
fn fake_clock_clones_share_time() {
    let clock = FakeClock::new();
    let other = clock.clone();
    clock.set(12, 0, 0);
    assert_eq!(other.now_local(), LocalTime::new(12, 0, 0));
}

#[test]
fn local_time_display_pads_fields() {
    assert_eq!(LocalTime::new(9, 5, 0).to_string(), "09:05:00");
    assert_eq!(LocalTime::new(23, 59, 59).to_string(), "23:59:59");
}
