// SPDX-License-Identifier: MIT

use super::*;
use std::time::{Duration, SystemTime};

fn stamp(secs: u64) -> SourceStamp {
    SourceStamp(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
}

#[test]
fn unchanged_marker_reports_no_change() {
    let detector = ChangeDetector::new(Some(stamp(100)));

    assert!(!detector.changed(Some(&stamp(100))));
}

#[test]
fn different_marker_reports_change() {
    let detector = ChangeDetector::new(Some(stamp(100)));

    assert!(detector.changed(Some(&stamp(101))));
}

#[test]
fn unreadable_marker_reads_as_no_change() {
    let detector = ChangeDetector::new(Some(stamp(100)));

    assert!(!detector.changed(None));
}

#[test]
fn missing_baseline_treats_readable_marker_as_change() {
    let detector = ChangeDetector::new(None);

    assert!(detector.changed(Some(&stamp(100))));
    assert!(!detector.changed(None));
}

#[test]
fn acknowledge_resets_the_baseline() {
    let mut detector = ChangeDetector::new(Some(stamp(100)));
    assert!(detector.changed(Some(&stamp(101))));

    detector.acknowledge(stamp(101));

    assert!(!detector.changed(Some(&stamp(101))));
    assert!(detector.changed(Some(&stamp(102))));
}

#[test]
fn change_keeps_reporting_until_acknowledged() {
    let detector = ChangeDetector::new(Some(stamp(100)));

    // poll() has no side effect; only acknowledge() clears the report
    assert!(detector.changed(Some(&stamp(101))));
    assert!(detector.changed(Some(&stamp(101))));
}

#[test]
fn reverted_marker_still_counts_as_change_until_acknowledged() {
    let mut detector = ChangeDetector::new(Some(stamp(100)));
    detector.acknowledge(stamp(101));

    // A file restored to an older mtime is still a different marker
    assert!(detector.changed(Some(&stamp(100))));
}
