// SPDX-License-Identifier: MIT

//! Crontab line parser
//!
//! Grammar, left to right: `<hour>:<minute>:<second> <command> [<arg> ...]`.
//! Hour and minute are `*` or a run of decimal digits; the second is digits
//! only. A small state machine walks the line and commits a field whenever it
//! meets a separator. Values are accepted without range validation; a job
//! with hour 99 parses and simply never matches.

use crate::job::Job;
use crate::timespec::{TimeField, TimeSpec};
use thiserror::Error;

/// Errors from parsing a single crontab line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("too many time fields, expected hour:minute:second")]
    TooManyTimeFields,
    #[error("time spec ended early, expected hour:minute:second")]
    IncompleteTimeSpec,
    #[error("missing command")]
    MissingCommand,
    #[error("the second field cannot be a wildcard")]
    WildcardSecond,
    #[error("time field mixes digits and a wildcard")]
    MixedWildcard,
    #[error("unexpected character {0:?} in time field")]
    UnexpectedCharacter(char),
}

/// Parser position within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Hour,
    Minute,
    Second,
    Command,
    Args,
}

/// Accumulator for the time field currently being read
#[derive(Default)]
struct FieldAcc {
    value: u32,
    digits: bool,
    wildcard: bool,
}

impl FieldAcc {
    fn push_digit(&mut self, digit: u32) -> Result<(), ParseError> {
        if self.wildcard {
            return Err(ParseError::MixedWildcard);
        }
        // Saturate rather than validate: oversized values pass through
        // uninterpreted and match nothing.
        self.value = self.value.saturating_mul(10).saturating_add(digit);
        self.digits = true;
        Ok(())
    }

    fn push_wildcard(&mut self) -> Result<(), ParseError> {
        if self.digits {
            return Err(ParseError::MixedWildcard);
        }
        self.wildcard = true;
        Ok(())
    }

    /// Commit as hour/minute: `*` or digits; an empty field reads as 0
    fn take_field(&mut self) -> TimeField {
        let field = if self.wildcard {
            TimeField::Any
        } else {
            TimeField::At(self.value)
        };
        *self = Self::default();
        field
    }

    /// Commit as the second, which must be literal digits
    fn take_second(&mut self) -> Result<u32, ParseError> {
        if self.wildcard {
            return Err(ParseError::WildcardSecond);
        }
        let value = self.value;
        *self = Self::default();
        Ok(value)
    }
}

/// Parse one crontab line into a [`Job`]
pub fn parse_line(line: &str) -> Result<Job, ParseError> {
    if line.trim().is_empty() {
        return Err(ParseError::MissingCommand);
    }

    let mut state = State::Hour;
    let mut field = FieldAcc::default();
    let mut hour = TimeField::At(0);
    let mut minute = TimeField::At(0);
    let mut second = 0u32;
    let mut command = String::new();
    let mut args: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for ch in line.chars() {
        match state {
            State::Hour | State::Minute | State::Second => match ch {
                '*' => field.push_wildcard()?,
                ':' => match state {
                    State::Hour => {
                        hour = field.take_field();
                        state = State::Minute;
                    }
                    State::Minute => {
                        minute = field.take_field();
                        state = State::Second;
                    }
                    _ => return Err(ParseError::TooManyTimeFields),
                },
                ' ' => {
                    if state != State::Second {
                        return Err(ParseError::IncompleteTimeSpec);
                    }
                    second = field.take_second()?;
                    state = State::Command;
                }
                _ => match ch.to_digit(10) {
                    Some(digit) => field.push_digit(digit)?,
                    None => return Err(ParseError::UnexpectedCharacter(ch)),
                },
            },
            State::Command | State::Args => {
                if ch == ' ' {
                    // Runs of spaces collapse: an empty buffer commits nothing
                    if !buffer.is_empty() {
                        if state == State::Command {
                            command = std::mem::take(&mut buffer);
                            state = State::Args;
                        } else {
                            args.push(std::mem::take(&mut buffer));
                        }
                    }
                } else {
                    buffer.push(ch);
                }
            }
        }
    }

    // Commit the trailing token
    if !buffer.is_empty() {
        if state == State::Command {
            command = buffer;
        } else {
            args.push(buffer);
        }
    }

    match state {
        State::Hour | State::Minute => Err(ParseError::IncompleteTimeSpec),
        _ if command.is_empty() => Err(ParseError::MissingCommand),
        _ => Ok(Job::new(TimeSpec::new(hour, minute, second), command, args)),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
