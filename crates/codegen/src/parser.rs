use enumgen_core::{EnumGenError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// One `<code>: <Name>` pair. The name is a single word; spaces are not part
/// of the grammar, so multi-word descriptions must be written `In_Progress`.
/// Only ASCII whitespace may follow the colon.
static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+):[ \t\n\x0B\x0C\r]*([A-Za-z0-9_]+)$")
        .expect("entry pattern is a valid regex")
});

/// Strip leading and trailing ASCII control characters and spaces.
///
/// Non-ASCII whitespace such as U+00A0 or U+3000 is kept, so input carrying
/// it does not match the entry grammar.
pub fn trim_input(input: &str) -> &str {
    input.trim_matches(|c: char| c <= ' ')
}

/// One member of the generated enum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub code: i32,
    pub raw_name: String,
}

impl EnumEntry {
    pub fn new(code: i32, raw_name: impl Into<String>) -> Self {
        Self {
            code,
            raw_name: raw_name.into(),
        }
    }

    /// Constant name used for this member, e.g. `IN_PROGRESS`
    pub fn member_identifier(&self) -> String {
        member_identifier(&self.raw_name)
    }
}

/// Upper-case `raw_name` and join its whitespace-separated words with `_`
pub fn member_identifier(raw_name: &str) -> String {
    raw_name
        .split(|c: char| c.is_ascii_whitespace())
        .filter(|word| !word.is_empty())
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Parse a comma-separated entry list.
///
/// Segments are checked left to right and the first one that does not match
/// aborts the parse; its trimmed text is carried in the error. On success the
/// entries keep input order.
pub fn parse(raw_input: &str) -> Result<Vec<EnumEntry>> {
    let entries = raw_input
        .split(',')
        .map(parse_segment)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(entries = entries.len(), "parsed enum entries");
    Ok(entries)
}

/// Parse a single `<code>: <Name>` segment
pub fn parse_segment(segment: &str) -> Result<EnumEntry> {
    let segment = trim_input(segment);

    let captures = ENTRY_PATTERN
        .captures(segment)
        .ok_or_else(|| EnumGenError::malformed(segment))?;

    let code = captures[1]
        .parse::<i32>()
        .map_err(|_| EnumGenError::CodeOutOfRange {
            segment: segment.to_string(),
        })?;

    Ok(EnumEntry::new(code, &captures[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_list() {
        let entries = parse("1: Waiting, 2: Processing, 3: Done").unwrap();
        assert_eq!(
            entries,
            vec![
                EnumEntry::new(1, "Waiting"),
                EnumEntry::new(2, "Processing"),
                EnumEntry::new(3, "Done"),
            ]
        );
    }

    #[test]
    fn test_parse_without_space() {
        let entries = parse("1:Waiting").unwrap();
        assert_eq!(entries, vec![EnumEntry::new(1, "Waiting")]);
    }

    #[test]
    fn test_parse_keeps_input_order() {
        let entries = parse("30: Done, 10: Waiting, 20: Processing").unwrap();
        let codes: Vec<i32> = entries.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![30, 10, 20]);
    }

    #[test]
    fn test_parse_tolerates_newlines_and_tabs() {
        let entries = parse("1:\tWaiting,\n2: Processing\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].raw_name, "Processing");
    }

    #[test]
    fn test_non_ascii_whitespace_is_malformed() {
        let err = parse("1:\u{3000}Waiting").unwrap_err();
        assert_eq!(err.failing_segment(), Some("1:\u{3000}Waiting"));

        let err = parse("1: Waiting\u{a0}").unwrap_err();
        assert_eq!(err.failing_segment(), Some("1: Waiting\u{a0}"));

        let err = parse("1: Waiting,\u{3000}2: Done").unwrap_err();
        assert_eq!(err.failing_segment(), Some("\u{3000}2: Done"));
    }

    #[test]
    fn test_trim_input() {
        assert_eq!(trim_input(" \t1: Waiting\r\n\x0B"), "1: Waiting");
        assert_eq!(trim_input("\u{a0}1: Waiting\u{3000}"), "\u{a0}1: Waiting\u{3000}");
        assert_eq!(trim_input("   "), "");
    }

    #[test]
    fn test_malformed_entry_reports_segment() {
        let err = parse("1: Waiting, two: Processing").unwrap_err();
        assert!(matches!(err, EnumGenError::MalformedEntry { ref segment } if segment == "two: Processing"));
    }

    #[test]
    fn test_fail_fast_on_first_bad_segment() {
        let err = parse("1: A, x: B, y: C, 4 D").unwrap_err();
        assert_eq!(err.failing_segment(), Some("x: B"));
    }

    #[test]
    fn test_multi_word_name_is_rejected() {
        let err = parse("1: In Progress").unwrap_err();
        assert_eq!(err.failing_segment(), Some("1: In Progress"));
    }

    #[test]
    fn test_trailing_comma_is_malformed() {
        let err = parse("1: Waiting,").unwrap_err();
        assert_eq!(err.failing_segment(), Some(""));
    }

    #[test]
    fn test_negative_code_is_malformed() {
        let err = parse("-1: Unknown").unwrap_err();
        assert!(matches!(err, EnumGenError::MalformedEntry { .. }));
    }

    #[test]
    fn test_code_out_of_range() {
        assert_eq!(parse("2147483647: Max").unwrap()[0].code, i32::MAX);

        let err = parse("1: Ok, 2147483648: TooBig").unwrap_err();
        assert!(matches!(err, EnumGenError::CodeOutOfRange { ref segment } if segment == "2147483648: TooBig"));
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(parse("007: Bond").unwrap()[0].code, 7);
    }

    #[test]
    fn test_member_identifier() {
        assert_eq!(member_identifier("In Progress"), "IN_PROGRESS");
        assert_eq!(member_identifier("  waiting   for\tinput "), "WAITING_FOR_INPUT");
        assert_eq!(EnumEntry::new(1, "In_progress").member_identifier(), "IN_PROGRESS");
        assert_eq!(EnumEntry::new(2, "done2").member_identifier(), "DONE2");
    }
}
