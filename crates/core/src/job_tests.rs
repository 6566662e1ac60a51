// SPDX-License-Identifier: MIT

use super::*;
use crate::timespec::TimeField;

#[test]
fn display_renders_crontab_line() {
    let job = Job::new(
        TimeSpec::new(TimeField::At(9), TimeField::At(30), 0),
        "/usr/bin/say",
        vec!["hello".to_string(), "world".to_string()],
    );

    assert_eq!(job.to_string(), "9:30:0 /usr/bin/say hello world");
}

#[test]
fn display_without_args_has_no_trailing_space() {
    let job = Job::new(
        TimeSpec::new(TimeField::Any, TimeField::Any, 15),
        "/bin/echo",
        vec![],
    );

    assert_eq!(job.to_string(), "*:*:15 /bin/echo");
}

#[test]
fn jobs_with_same_fields_are_equal() {
    let make = || {
        Job::new(
            TimeSpec::new(TimeField::At(1), TimeField::At(2), 3),
            "cmd",
            vec!["a".to_string()],
        )
    };
    assert_eq!(make(), make());
}
