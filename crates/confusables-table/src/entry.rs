use crate::error::TableError;

/// Highest valid Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

// confusables.txt has the form:
//   0021 ;	01C3 ;	MA	#* ( ! → ǃ ) EXCLAMATION MARK → LATIN LETTER ALVEOLAR CLICK
// Fields are separated by " ;\t"; the class tag carries the trailing comment.
const FIELD_SEPARATOR: &str = " ;\t";
const FIELD_COUNT: usize = 3;
const SOURCE_FIELD: usize = 0;
const TARGET_FIELD: usize = 1;
const CLASS_FIELD: usize = 2;

/// Whole-script class tag. Older datasets also carry SL, SA and ML; MA is a
/// superset of what we need.
const WHOLE_SCRIPT_CLASS: &str = "MA";

/// One source codepoint and the sequence it is confusable with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusableEntry {
    pub source: char,
    pub target: Vec<char>,
}

impl ConfusableEntry {
    pub fn new(source: char, target: impl Into<Vec<char>>) -> Self {
        Self {
            source,
            target: target.into(),
        }
    }

    /// The target codepoints decoded into a string.
    pub fn target_string(&self) -> String {
        self.target.iter().collect()
    }
}

/// Parse a hexadecimal codepoint such as `"1D4C5"`.
pub fn parse_codepoint(text: &str) -> Result<char, TableError> {
    let text = text.trim();
    let value = u32::from_str_radix(text, 16).map_err(|e| TableError::InvalidCodepoint {
        text: text.to_string(),
        reason: e.to_string(),
    })?;
    if value == 0 {
        return Err(TableError::NullCodepoint);
    }
    if value > MAX_CODEPOINT {
        return Err(TableError::OutOfRange { value });
    }
    char::from_u32(value).ok_or(TableError::Surrogate { value })
}

/// Parse one dataset line.
///
/// Blank and comment lines yield `Ok(None)`, as do entries outside the MA
/// class. A data line with the wrong number of fields is an error.
pub fn parse_line(line: &str) -> Result<Option<ConfusableEntry>, TableError> {
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(TableError::FieldCount {
            found: fields.len(),
            expected: FIELD_COUNT,
        });
    }

    if !fields[CLASS_FIELD].starts_with(WHOLE_SCRIPT_CLASS) {
        return Ok(None);
    }

    let source = parse_codepoint(fields[SOURCE_FIELD])?;
    let target = fields[TARGET_FIELD]
        .split(' ')
        .map(parse_codepoint)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(ConfusableEntry { source, target }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codepoint() {
        assert_eq!(parse_codepoint("0041"), Ok('A'));
        assert_eq!(parse_codepoint("1d4c5"), Ok('\u{1D4C5}'));
        assert_eq!(parse_codepoint(" 10FFFF "), Ok('\u{10FFFF}'));
    }

    #[test]
    fn test_parse_codepoint_rejects_zero() {
        assert_eq!(parse_codepoint("0000"), Err(TableError::NullCodepoint));
    }

    #[test]
    fn test_parse_codepoint_rejects_out_of_range() {
        assert_eq!(
            parse_codepoint("110000"),
            Err(TableError::OutOfRange { value: 0x110000 })
        );
    }

    #[test]
    fn test_parse_codepoint_rejects_surrogate() {
        assert_eq!(
            parse_codepoint("D800"),
            Err(TableError::Surrogate { value: 0xD800 })
        );
    }

    #[test]
    fn test_parse_codepoint_rejects_garbage() {
        assert!(matches!(
            parse_codepoint("XYZ"),
            Err(TableError::InvalidCodepoint { .. })
        ));
        assert!(matches!(
            parse_codepoint(""),
            Err(TableError::InvalidCodepoint { .. })
        ));
        assert!(matches!(
            parse_codepoint("FFFFFFFFFF"),
            Err(TableError::InvalidCodepoint { .. })
        ));
    }

    #[test]
    fn test_parse_line_single_target() {
        let entry = parse_line("0430 ;\t0061 ;\tMA\t# ( а → a ) CYRILLIC SMALL LETTER A")
            .unwrap()
            .unwrap();
        assert_eq!(entry, ConfusableEntry::new('\u{0430}', vec!['a']));
    }

    #[test]
    fn test_parse_line_multiple_targets() {
        let entry = parse_line("006D ;\t0072 006E ;\tMA\t# ( m → rn )")
            .unwrap()
            .unwrap();
        assert_eq!(entry.source, 'm');
        assert_eq!(entry.target_string(), "rn");
    }

    #[test]
    fn test_parse_line_comment_containing_semicolon() {
        // GREEK QUESTION MARK → SEMICOLON; the comment carries a bare ';'
        let entry = parse_line("037E ;\t003B ;\tMA\t# ( ; → ; ) GREEK QUESTION MARK → SEMICOLON")
            .unwrap()
            .unwrap();
        assert_eq!(entry.target_string(), ";");
    }

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# total: 6355"), Ok(None));
    }

    #[test]
    fn test_parse_line_filters_non_ma_classes() {
        assert_eq!(parse_line("309C ;\t030A ;\tSL\t#* ( ゜ → ̊ )"), Ok(None));
        assert_eq!(parse_line("0430 ;\t0061 ;\tSA\t#"), Ok(None));
        assert_eq!(parse_line("0430 ;\t0061 ;\tML\t#"), Ok(None));
    }

    #[test]
    fn test_parse_line_class_filter_runs_before_codepoints() {
        assert_eq!(parse_line("ZZZZ ;\t0061 ;\tSA\t#"), Ok(None));
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        assert_eq!(
            parse_line("0430 ;\t0061"),
            Err(TableError::FieldCount {
                found: 2,
                expected: 3
            })
        );
        assert_eq!(
            parse_line("0430 ;\t0061 ;\tMA ;\textra"),
            Err(TableError::FieldCount {
                found: 4,
                expected: 3
            })
        );
    }

    #[test]
    fn test_parse_line_bad_target_codepoint() {
        assert_eq!(
            parse_line("0430 ;\t0061 110000 ;\tMA\t#"),
            Err(TableError::OutOfRange { value: 0x110000 })
        );
    }
}
