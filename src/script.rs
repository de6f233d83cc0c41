//! Line-oriented command scripts for driving the editor from a terminal.
//!
//! One command per line; blank lines and `#` comments are skipped. Text
//! arguments run to the end of the line and understand `\n`, `\t` and `\\`.
//!
//! ```text
//! # uppercase the first word
//! select 0 5
//! convert upper
//! column 0 0
//! extend down
//! type >
//! escape
//! ```

use std::path::PathBuf;

use thiserror::Error;

use crate::case::{CaseError, CaseStyle};
use crate::editable::{ExtendDirection, Position, Selection};
use crate::messages::{AppMsg, ColumnMsg, Direction, DocumentMsg, InputMsg, Msg, SearchMsg};

/// Script parse errors, all tagged with the 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: `{command}` expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: `{command}` takes no argument")]
    UnexpectedArgument { line: usize, command: String },

    #[error("line {line}: `{value}` is not a valid number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: `{value}` is not a valid direction")]
    InvalidDirection { line: usize, value: String },

    #[error("line {line}: expected `on` or `off`, got `{value}`")]
    InvalidToggle { line: usize, value: String },

    #[error("line {line}: invalid escape `{sequence}`")]
    InvalidEscape { line: usize, sequence: String },

    #[error("line {line}: {source}")]
    InvalidStyle {
        line: usize,
        #[source]
        source: CaseError,
    },
}

impl ScriptError {
    /// 1-based line the error was found on
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::MissingArgument { line, .. }
            | ScriptError::UnexpectedArgument { line, .. }
            | ScriptError::InvalidNumber { line, .. }
            | ScriptError::InvalidDirection { line, .. }
            | ScriptError::InvalidToggle { line, .. }
            | ScriptError::InvalidEscape { line, .. }
            | ScriptError::InvalidStyle { line, .. } => *line,
        }
    }
}

/// Parse a whole script into the messages it dispatches, in order
pub fn parse_script(source: &str) -> Result<Vec<Msg>, ScriptError> {
    let mut msgs = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        msgs.extend(parse_line(idx + 1, raw)?);
    }
    Ok(msgs)
}

/// Parse one script line. Blank lines and comments yield no messages.
pub fn parse_line(line: usize, raw: &str) -> Result<Vec<Msg>, ScriptError> {
    let raw = raw.strip_suffix('\r').unwrap_or(raw).trim_start();
    if raw.trim().is_empty() || raw.starts_with('#') {
        return Ok(Vec::new());
    }

    let (command, rest) = match raw.split_once(' ') {
        Some((command, rest)) => (command, Some(rest)),
        None => (raw.trim_end(), None),
    };
    let args = Args {
        line,
        command,
        rest,
    };

    let msgs = match command {
        // === Editing ===
        "type" => vec![Msg::Input(InputMsg::Type(args.text()?))],
        "backspace" => args.none(Msg::Input(InputMsg::Backspace))?,
        "delete" => args.none(Msg::Input(InputMsg::Delete))?,
        "copy" => args.none(Msg::Input(InputMsg::Copy))?,
        "cut" => args.none(Msg::Input(InputMsg::Cut))?,
        "paste" => match args.rest {
            Some(rest) if !rest.is_empty() => vec![Msg::Input(InputMsg::Paste(args.text()?))],
            _ => vec![Msg::Input(InputMsg::PasteFromClipboard)],
        },
        "escape" => args.none(Msg::Input(InputMsg::Escape))?,
        "click" => {
            let (l, c) = args.two_numbers("<line> <col>")?;
            vec![Msg::Input(InputMsg::Click(Position::new(l, c)))]
        }
        "clear" => args.none(Msg::Document(DocumentMsg::Clear))?,
        "undo" => args.none(Msg::Document(DocumentMsg::Undo))?,
        "redo" => args.none(Msg::Document(DocumentMsg::Redo))?,
        "convert" => vec![Msg::Document(DocumentMsg::ConvertCase(args.style()?))],

        // === Selection ===
        "select" => {
            let (start, end) = args.two_numbers("<start> <end>")?;
            vec![Msg::Document(DocumentMsg::SetSelection(Selection::new(start, end)))]
        }
        "select-all" => args.none(Msg::Document(DocumentMsg::SelectAll))?,
        "move" => vec![Msg::Document(DocumentMsg::MoveCaret(args.direction()?))],

        // === Column mode ===
        "column" => {
            if args.has_word() {
                let (l, c) = args.two_numbers("<line> <col>")?;
                vec![Msg::Column(ColumnMsg::Enter(Some(Position::new(l, c))))]
            } else {
                vec![Msg::Column(ColumnMsg::Enter(None))]
            }
        }
        "toggle-column" => args.none(Msg::App(AppMsg::ToggleColumnMode))?,
        "extend" => vec![Msg::Column(ColumnMsg::Extend(args.extend_direction()?))],

        // === Search ===
        "find" => vec![
            Msg::Search(SearchMsg::SetTerm(args.text()?)),
            Msg::Search(SearchMsg::Find),
        ],
        "find-next" => args.none(Msg::Search(SearchMsg::FindNext))?,
        "find-prev" => args.none(Msg::Search(SearchMsg::FindPrevious))?,
        "replace-with" => vec![Msg::Search(SearchMsg::SetReplacement(
            args.optional_text()?,
        ))],
        "replace" => args.none(Msg::Search(SearchMsg::Replace))?,
        "replace-all" => args.none(Msg::Search(SearchMsg::ReplaceAll))?,
        "change-case" => vec![Msg::Search(SearchMsg::ChangeCase(args.style()?))],
        "ignore-case" => vec![Msg::Search(SearchMsg::SetCaseSensitive(!args.toggle()?))],

        // === App ===
        "dictionary" => vec![Msg::App(AppMsg::LoadDictionary(args.path()?))],
        "new" => args.none(Msg::App(AppMsg::NewDocument))?,
        "save" => {
            if args.has_word() {
                vec![Msg::App(AppMsg::SaveFileAs(args.path()?))]
            } else {
                vec![Msg::App(AppMsg::SaveFile)]
            }
        }

        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };
    Ok(msgs)
}

/// Argument accessors for one command line
struct Args<'a> {
    line: usize,
    command: &'a str,
    rest: Option<&'a str>,
}

impl Args<'_> {
    fn missing(&self, expected: &'static str) -> ScriptError {
        ScriptError::MissingArgument {
            line: self.line,
            command: self.command.to_string(),
            expected,
        }
    }

    /// The command takes no argument
    fn none(&self, msg: Msg) -> Result<Vec<Msg>, ScriptError> {
        match self.rest.map(str::trim) {
            None | Some("") => Ok(vec![msg]),
            Some(_) => Err(ScriptError::UnexpectedArgument {
                line: self.line,
                command: self.command.to_string(),
            }),
        }
    }

    /// Rest of the line, unescaped; must not be empty
    fn text(&self) -> Result<String, ScriptError> {
        let text = self.optional_text()?;
        if text.is_empty() {
            return Err(self.missing("a text argument"));
        }
        Ok(text)
    }

    /// Rest of the line, unescaped; may be empty
    fn optional_text(&self) -> Result<String, ScriptError> {
        unescape(self.line, self.rest.unwrap_or(""))
    }

    fn has_word(&self) -> bool {
        self.rest.is_some_and(|r| !r.trim().is_empty())
    }

    fn word(&self, expected: &'static str) -> Result<&str, ScriptError> {
        self.rest
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or_else(|| self.missing(expected))
    }

    fn two_numbers(&self, expected: &'static str) -> Result<(usize, usize), ScriptError> {
        let rest = self.word(expected)?;
        let mut parts = rest.split_whitespace();
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(self.missing(expected));
        };
        Ok((self.number(a)?, self.number(b)?))
    }

    fn number(&self, value: &str) -> Result<usize, ScriptError> {
        value.parse().map_err(|_| ScriptError::InvalidNumber {
            line: self.line,
            value: value.to_string(),
        })
    }

    fn direction(&self) -> Result<Direction, ScriptError> {
        let value = self.word("a direction")?;
        match value {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(self.invalid_direction(value)),
        }
    }

    fn extend_direction(&self) -> Result<ExtendDirection, ScriptError> {
        let value = self.word("a direction")?;
        match value {
            "left" => Ok(ExtendDirection::Left),
            "right" => Ok(ExtendDirection::Right),
            "up" => Ok(ExtendDirection::Up),
            "down" => Ok(ExtendDirection::Down),
            "page-up" | "pageup" => Ok(ExtendDirection::PageUp),
            "page-down" | "pagedown" => Ok(ExtendDirection::PageDown),
            _ => Err(self.invalid_direction(value)),
        }
    }

    fn invalid_direction(&self, value: &str) -> ScriptError {
        ScriptError::InvalidDirection {
            line: self.line,
            value: value.to_string(),
        }
    }

    fn style(&self) -> Result<CaseStyle, ScriptError> {
        let value = self.word("a case style")?;
        value.parse::<CaseStyle>().map_err(|source| ScriptError::InvalidStyle {
            line: self.line,
            source,
        })
    }

    fn toggle(&self) -> Result<bool, ScriptError> {
        match self.word("on or off")? {
            "on" => Ok(true),
            "off" => Ok(false),
            other => Err(ScriptError::InvalidToggle {
                line: self.line,
                value: other.to_string(),
            }),
        }
    }

    fn path(&self) -> Result<PathBuf, ScriptError> {
        self.word("a path").map(PathBuf::from)
    }
}

/// Expand `\n`, `\t` and `\\`
pub fn unescape(line: usize, text: &str) -> Result<String, ScriptError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                return Err(ScriptError::InvalidEscape {
                    line,
                    sequence: format!("\\{}", other),
                })
            }
            None => {
                return Err(ScriptError::InvalidEscape {
                    line,
                    sequence: "\\".to_string(),
                })
            }
        }
    }
    Ok(out)
}
