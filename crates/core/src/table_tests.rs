// SPDX-License-Identifier: MIT

use super::*;
use crate::parser::ParseError;
use crate::timespec::TimeField;

#[test]
fn parses_jobs_in_order() {
    let lines = ["0:0:0 first", "1:1:1 second a", "*:*:30 third"];
    let table = JobTable::parse(0, &lines).unwrap();

    assert_eq!(table.generation(), 0);
    assert_eq!(table.len(), 3);
    assert_eq!(table.jobs()[0].command, "first");
    assert_eq!(table.jobs()[1].command, "second");
    assert_eq!(table.jobs()[2].command, "third");
}

#[test]
fn skips_blank_and_comment_lines() {
    let lines = ["", "# nightly batch", "  ", "0:0:0 job"];
    let table = JobTable::parse(0, &lines).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.jobs()[0].command, "job");
}

#[test]
fn one_bad_line_rejects_the_whole_load() {
    let lines = ["0:0:0 good", "1:2:3:4 bad", "2:2:2 also-good"];
    let err = JobTable::parse(0, &lines).unwrap_err();

    assert_eq!(err.line, 2);
    assert_eq!(err.source, ParseError::TooManyTimeFields);
}

#[test]
fn error_line_numbers_count_skipped_lines() {
    let lines = ["# comment", "", "bad"];
    let err = JobTable::parse(0, &lines).unwrap_err();

    assert_eq!(err.line, 3);
}

#[test]
fn empty_source_yields_empty_table() {
    let table = JobTable::parse(5, &[] as &[&str]).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.generation(), 5);
}

#[test]
fn wildcard_fields_survive_table_parse() {
    let table = JobTable::parse(0, &["*:30:0 cmd"]).unwrap();

    assert_eq!(table.jobs()[0].spec.hour, TimeField::Any);
    assert_eq!(table.jobs()[0].spec.minute, TimeField::At(30));
}
