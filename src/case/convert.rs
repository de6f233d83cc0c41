//! Case styles and the converter that applies them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dictionary::Dictionary;
use super::segment::segment_words;
use super::CaseError;

/// Target case style for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CaseStyle {
    SnakeCase,
    CamelCase,
    PascalCase,
    UpperCase,
    LowerCase,
    TitleCase,
    SentenceCase,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 7] = [
        CaseStyle::SnakeCase,
        CaseStyle::CamelCase,
        CaseStyle::PascalCase,
        CaseStyle::UpperCase,
        CaseStyle::LowerCase,
        CaseStyle::TitleCase,
        CaseStyle::SentenceCase,
    ];

    /// Display label, written in the style itself
    pub fn label(self) -> &'static str {
        match self {
            CaseStyle::SnakeCase => "snake_case",
            CaseStyle::CamelCase => "camelCase",
            CaseStyle::PascalCase => "PascalCase",
            CaseStyle::UpperCase => "UPPERCASE",
            CaseStyle::LowerCase => "lowercase",
            CaseStyle::TitleCase => "Title Case",
            CaseStyle::SentenceCase => "Sentence case",
        }
    }

    /// Whether the style needs word segmentation (and so a dictionary)
    pub fn requires_dictionary(self) -> bool {
        !matches!(self, CaseStyle::UpperCase | CaseStyle::LowerCase)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseStyle {
    type Err = CaseError;

    /// Accepts the labels plus kebab/snake/plain aliases, ignoring case
    /// (`snake`, `camel-case`, `title_case`, `UPPER`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        let style = match key.as_str() {
            "snakecase" | "snake" => CaseStyle::SnakeCase,
            "camelcase" | "camel" => CaseStyle::CamelCase,
            "pascalcase" | "pascal" => CaseStyle::PascalCase,
            "uppercase" | "upper" => CaseStyle::UpperCase,
            "lowercase" | "lower" => CaseStyle::LowerCase,
            "titlecase" | "title" => CaseStyle::TitleCase,
            "sentencecase" | "sentence" => CaseStyle::SentenceCase,
            _ => return Err(CaseError::UnknownStyle(s.to_string())),
        };
        Ok(style)
    }
}

impl TryFrom<String> for CaseStyle {
    type Error = CaseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CaseStyle> for String {
    fn from(style: CaseStyle) -> Self {
        style.label().to_string()
    }
}

/// Uppercase the first character, keep the rest as-is
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character, lowercase the rest
fn capitalize_lower(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Convert `input` to `style`.
///
/// `UPPERCASE` and `lowercase` work on the raw characters and never need a
/// dictionary; every other style segments the input first and fails with
/// [`CaseError::DictionaryRequired`] when `dict` is `None`.
pub fn convert_case(input: &str, style: CaseStyle, dict: Option<&Dictionary>) -> Result<String, CaseError> {
    match style {
        CaseStyle::UpperCase => return Ok(input.to_uppercase()),
        CaseStyle::LowerCase => return Ok(input.to_lowercase()),
        _ => {}
    }

    let dict = dict.ok_or(CaseError::DictionaryRequired(style))?;
    let words = segment_words(input, dict);
    if words.is_empty() {
        return Ok(String::new());
    }

    let converted = match style {
        CaseStyle::SnakeCase => words.join("_"),
        CaseStyle::CamelCase => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
            .collect(),
        CaseStyle::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
        CaseStyle::TitleCase => words
            .iter()
            .map(|w| capitalize_lower(w))
            .collect::<Vec<_>>()
            .join(" "),
        CaseStyle::SentenceCase => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { capitalize_lower(w) } else { w.to_lowercase() })
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string(),
        CaseStyle::UpperCase => input.to_uppercase(),
        CaseStyle::LowerCase => input.to_lowercase(),
    };
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        ["booking", "passengers", "hello", "world"].iter().collect()
    }

    #[test]
    fn test_dictionary_styles() {
        let d = dict();
        let cases = [
            (CaseStyle::SnakeCase, "booking_passengers"),
            (CaseStyle::CamelCase, "bookingPassengers"),
            (CaseStyle::PascalCase, "BookingPassengers"),
            (CaseStyle::TitleCase, "Booking Passengers"),
            (CaseStyle::SentenceCase, "Booking passengers"),
        ];
        for (style, expected) in cases {
            assert_eq!(
                convert_case("bookingpassengers", style, Some(&d)).unwrap(),
                expected,
                "style {style}"
            );
        }
    }

    #[test]
    fn test_upper_lower_need_no_dictionary() {
        assert_eq!(convert_case("MixedCase", CaseStyle::UpperCase, None).unwrap(), "MIXEDCASE");
        assert_eq!(convert_case("MixedCase", CaseStyle::LowerCase, None).unwrap(), "mixedcase");
    }

    #[test]
    fn test_dictionary_required() {
        for style in CaseStyle::ALL.into_iter().filter(|s| s.requires_dictionary()) {
            assert_eq!(
                convert_case("helloWorld", style, None),
                Err(CaseError::DictionaryRequired(style))
            );
        }
    }

    #[test]
    fn test_empty_input() {
        let d = dict();
        for style in CaseStyle::ALL {
            assert_eq!(convert_case("", style, Some(&d)).unwrap(), "");
        }
    }

    #[test]
    fn test_snake_input_reconverts() {
        let d = dict();
        assert_eq!(convert_case("hello_world", CaseStyle::PascalCase, Some(&d)).unwrap(), "HelloWorld");
        assert_eq!(convert_case("HelloWorld", CaseStyle::SnakeCase, Some(&d)).unwrap(), "hello_world");
    }

    #[test]
    fn test_unsegmentable_input_is_one_word() {
        let d = dict();
        assert_eq!(convert_case("xyzzy", CaseStyle::TitleCase, Some(&d)).unwrap(), "Xyzzy");
    }

    #[test]
    fn test_parse_labels_and_aliases() {
        for style in CaseStyle::ALL {
            assert_eq!(style.label().parse::<CaseStyle>().unwrap(), style);
        }
        assert_eq!("snake".parse::<CaseStyle>().unwrap(), CaseStyle::SnakeCase);
        assert_eq!("camel-case".parse::<CaseStyle>().unwrap(), CaseStyle::CamelCase);
        assert_eq!("title_case".parse::<CaseStyle>().unwrap(), CaseStyle::TitleCase);
        assert_eq!("UPPER".parse::<CaseStyle>().unwrap(), CaseStyle::UpperCase);
        assert_eq!(
            "kebab".parse::<CaseStyle>(),
            Err(CaseError::UnknownStyle("kebab".to_string()))
        );
    }
}
