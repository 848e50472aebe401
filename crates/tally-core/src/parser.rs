//! Raw message parsing
//!
//! An entry message is a number followed by free-form category text, e.g.
//! "1500 дом" or "1 500 такси". Spaces inside the number are a
//! thousands-separator convention and are stripped before conversion.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Corrective example shown when a message cannot be parsed
const PARSE_HELP: &str = "Не могу понять сообщение. Пример:\n1500 дом";

/// Amount and category text extracted from one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub amount: i64,
    /// Trimmed and lowercased remainder of the message
    pub category_text: String,
}

// Anchored at the start only: the digit run must open the message, but
// anything after the category text is carried along as part of it.
static MESSAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9][0-9 ]*) (.+)").expect("static pattern compiles"));

/// Parse raw entry text into an amount and category text.
///
/// The amount is syntactically allowed to be zero here; positivity is a
/// store-level invariant enforced at insert time.
pub fn parse_message(text: &str) -> Result<ParsedMessage> {
    let caps = MESSAGE_RE
        .captures(text)
        .ok_or_else(|| Error::InvalidMessage(PARSE_HELP.to_string()))?;

    let digits: String = caps[1].chars().filter(|c| *c != ' ').collect();
    let amount: i64 = digits
        .parse()
        .map_err(|_| Error::InvalidMessage(PARSE_HELP.to_string()))?;

    let category_text = caps[2].trim().to_lowercase();
    if category_text.is_empty() {
        return Err(Error::InvalidMessage(PARSE_HELP.to_string()));
    }

    Ok(ParsedMessage {
        amount,
        category_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_entry() {
        let parsed = parse_message("1500 дом").unwrap();
        assert_eq!(parsed.amount, 1500);
        assert_eq!(parsed.category_text, "дом");
    }

    #[test]
    fn test_parse_strips_thousands_separator_spaces() {
        let parsed = parse_message("1 500 дом").unwrap();
        assert_eq!(parsed.amount, 1500);
        assert_eq!(parsed.category_text, "дом");
    }

    #[test]
    fn test_parse_lowercases_category_text() {
        let parsed = parse_message("200 Такси").unwrap();
        assert_eq!(parsed.category_text, "такси");
    }

    #[test]
    fn test_parse_zero_amount_is_accepted() {
        let parsed = parse_message("0 кофе").unwrap();
        assert_eq!(parsed.amount, 0);
    }

    #[test]
    fn test_parse_rejects_amount_after_text() {
        assert!(matches!(
            parse_message("дом 1500"),
            Err(Error::InvalidMessage(_))
        ));
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        assert!(matches!(
            parse_message("hello"),
            Err(Error::InvalidMessage(_))
        ));
    }

    #[test]
    fn test_parse_rejects_amount_without_category() {
        assert!(matches!(
            parse_message("1500"),
            Err(Error::InvalidMessage(_))
        ));
        assert!(matches!(
            parse_message("1500 "),
            Err(Error::InvalidMessage(_))
        ));
    }

    #[test]
    fn test_parse_error_carries_example() {
        let err = parse_message("hello").unwrap_err();
        assert!(err.to_string().contains("1500 дом"));
    }
}
