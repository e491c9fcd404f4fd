//! Line classification for QIF input
//!
//! Each trimmed input line is mapped to a [`Tag`] by its leading characters.
//! Matching is by prefix only: a line starting with `D`, `T`, `P`, `L` or `M`
//! is always that field, there is no escaping.

/// Account-type marker prefix
const TYPE_MARKER: &str = "!Type:";

/// Record terminator line
const TERMINATOR: &str = "^";

/// Classified input line
///
/// Field variants borrow the value that follows the tag character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag<'a> {
    /// Blank line
    Skip,
    /// `!Type:<value>`
    AccountTypeMarker(&'a str),
    /// `D<raw date>`
    DateField(&'a str),
    /// `T<amount>`
    AmountField(&'a str),
    /// `P<payee>`
    PayeeField(&'a str),
    /// `L<category>`
    CategoryField(&'a str),
    /// `M<memo>`
    MemoField(&'a str),
    /// `^`
    Terminator,
    /// Any other line
    Unrecognized,
}

/// Classify one line whose surrounding whitespace is already stripped
///
/// Rules are checked in a fixed order and the first match wins. Unknown lines
/// yield [`Tag::Unrecognized`] rather than an error.
pub fn classify(line: &str) -> Tag<'_> {
    if line.is_empty() {
        return Tag::Skip;
    }
    if let Some(value) = line.strip_prefix(TYPE_MARKER) {
        return Tag::AccountTypeMarker(value);
    }

    // Field tags are single ASCII bytes, so `rest` starts on a char boundary
    // in every arm that uses it.
    let rest = move || &line[1..];
    match line.as_bytes()[0] {
        b'D' => Tag::DateField(rest()),
        b'T' => Tag::AmountField(rest()),
        b'P' => Tag::PayeeField(rest()),
        b'L' => Tag::CategoryField(rest()),
        b'M' => Tag::MemoField(rest()),
        _ if line == TERMINATOR => Tag::Terminator,
        _ => Tag::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::blank("", Tag::Skip)]
    #[case::account_type("!Type:Bank", Tag::AccountTypeMarker("Bank"))]
    #[case::account_type_empty("!Type:", Tag::AccountTypeMarker(""))]
    #[case::account_type_keeps_colons("!Type:Invst:Sub", Tag::AccountTypeMarker("Invst:Sub"))]
    #[case::date("D01/05/2024", Tag::DateField("01/05/2024"))]
    #[case::amount("T-50.00", Tag::AmountField("-50.00"))]
    #[case::payee("PGrocery Store", Tag::PayeeField("Grocery Store"))]
    #[case::category("LFood", Tag::CategoryField("Food"))]
    #[case::memo("MWeekly shop", Tag::MemoField("Weekly shop"))]
    #[case::empty_value("P", Tag::PayeeField(""))]
    #[case::value_keeps_inner_spaces("P  Corner Shop", Tag::PayeeField("  Corner Shop"))]
    #[case::terminator("^", Tag::Terminator)]
    #[case::other_header("!Account", Tag::Unrecognized)]
    #[case::unknown_tag("N1234", Tag::Unrecognized)]
    #[case::lowercase_tag("d01/05/2024", Tag::Unrecognized)]
    #[case::terminator_with_trailer("^x", Tag::Unrecognized)]
    #[case::non_ascii_first_char("éclair", Tag::Unrecognized)]
    fn test_classify(#[case] line: &str, #[case] expected: Tag<'_>) {
        assert_eq!(classify(line), expected);
    }

    #[test]
    fn test_prefix_wins_over_meaning() {
        // "Dinner" is a date line, not a payee
        assert_eq!(classify("Dinner"), Tag::DateField("inner"));
        assert_eq!(classify("Total"), Tag::AmountField("otal"));
    }
}
