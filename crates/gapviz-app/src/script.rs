//! Event scripts
//!
//! One event per line; blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! year 2019
//! next-year
//! prev-year
//! level Lower secondary
//! map India
//! bar Primary | South Asia (WB)
//! line Sub-Saharan Africa (WB)
//! reset
//! ```

use gapviz_core::{UiEvent, Year, YearStep};
use thiserror::Error;

/// An event together with the script line it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptEvent {
    pub line: usize,
    pub event: UiEvent,
}

#[derive(Error, Debug, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: '{command}' takes no argument")]
    UnexpectedArgument { line: usize, command: &'static str },

    #[error("line {line}: invalid year '{value}'")]
    InvalidYear { line: usize, value: String },
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        let line = idx + 1;
        events.push(ScriptEvent {
            line,
            event: parse_line(line, text)?,
        });
    }
    Ok(events)
}

fn parse_line(line: usize, text: &str) -> Result<UiEvent, ScriptError> {
    let (command, rest) = match text.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (text, ""),
    };

    match command {
        "year" => {
            let value = required(line, "year", "a year", rest)?;
            value
                .parse::<Year>()
                .map(UiEvent::year)
                .map_err(|_| ScriptError::InvalidYear {
                    line,
                    value: value.to_string(),
                })
        }
        "next-year" => no_argument(line, "next-year", rest).map(|_| UiEvent::YearStepped { step: YearStep::Next }),
        "prev-year" => no_argument(line, "prev-year", rest).map(|_| UiEvent::YearStepped {
            step: YearStep::Previous,
        }),
        "level" => required(line, "level", "a level", rest).map(UiEvent::level),
        "map" => required(line, "map", "a country", rest).map(UiEvent::map_click),
        "bar" => {
            let expected = "'<level> | <region>'";
            let (level, region) = required(line, "bar", expected, rest)?
                .split_once('|')
                .map(|(level, region)| (level.trim(), region.trim()))
                .filter(|(level, region)| !level.is_empty() && !region.is_empty())
                .ok_or(ScriptError::MissingArgument {
                    line,
                    command: "bar",
                    expected,
                })?;
            Ok(UiEvent::bar_click(level, region))
        }
        "line" => required(line, "line", "a region", rest).map(UiEvent::line_click),
        "reset" => no_argument(line, "reset", rest).map(|_| UiEvent::ResetRegion),
        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}

fn required<'a>(
    line: usize,
    command: &'static str,
    expected: &'static str,
    rest: &'a str,
) -> Result<&'a str, ScriptError> {
    if rest.is_empty() {
        Err(ScriptError::MissingArgument {
            line,
            command,
            expected,
        })
    } else {
        Ok(rest)
    }
}

fn no_argument(line: usize, command: &'static str, rest: &str) -> Result<(), ScriptError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ScriptError::UnexpectedArgument { line, command })
    }
}
