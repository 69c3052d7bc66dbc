//! Line-oriented draft load parser

use crate::model::DraftFields;

/// Parse free text into draft fields.
///
/// Lines are trimmed and blank ones dropped *before* positions are assigned,
/// so "Alice\n\n\nTrucking Co" puts "Trucking Co" in `carrier_name`. Lines past
/// the sixth are ignored and missing ones stay empty. Nothing is validated here.
pub fn parse_draft(text: &str) -> DraftFields {
    let mut lines = text
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string);
    let mut next = || lines.next().unwrap_or_default();

    DraftFields {
        driver_name: next(),
        carrier_name: next(),
        driver_rate: next(),
        broker_rate: next(),
        empty_miles: next(),
        loaded_miles: next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_draft(""), DraftFields::default());
        assert!(parse_draft("").is_empty());
    }

    #[test]
    fn test_positional_assignment() {
        let fields = parse_draft("Alice\nTrucking Co\n500\n650\n50\n300");
        assert_eq!(fields.driver_name, "Alice");
        assert_eq!(fields.carrier_name, "Trucking Co");
        assert_eq!(fields.driver_rate, "500");
        assert_eq!(fields.broker_rate, "650");
        assert_eq!(fields.empty_miles, "50");
        assert_eq!(fields.loaded_miles, "300");
    }

    #[test]
    fn test_seventh_line_ignored() {
        let six = parse_draft("Alice\nTrucking Co\n500\n650\n50\n300");
        let seven = parse_draft("Alice\nTrucking Co\n500\n650\n50\n300\nextra notes");
        assert_eq!(six, seven);
    }

    #[test]
    fn test_blank_lines_skipped_before_assignment() {
        let fields = parse_draft("Alice\n\n\nTrucking Co");
        assert_eq!(fields.driver_name, "Alice");
        assert_eq!(fields.carrier_name, "Trucking Co");
        assert_eq!(fields.driver_rate, "");
        assert_eq!(fields.broker_rate, "");
        assert_eq!(fields.empty_miles, "");
        assert_eq!(fields.loaded_miles, "");
    }

    #[test]
    fn test_whitespace_only_lines_and_trimming() {
        let fields = parse_draft("   \n  Bob Smith  \n\t\n  Haulers LLC\r\n $1,200 ");
        assert_eq!(fields.driver_name, "Bob Smith");
        assert_eq!(fields.carrier_name, "Haulers LLC");
        assert_eq!(fields.driver_rate, "$1,200");
        assert_eq!(fields.broker_rate, "");
    }

    #[test]
    fn test_values_in_entry_order() {
        let fields = parse_draft("a\nb\nc\nd\ne\nf");
        assert_eq!(fields.values(), ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_reparse_is_identical() {
        let text = "Alice\n\nTrucking Co\n$500\n650\n50\n300\n";
        assert_eq!(parse_draft(text), parse_draft(text));
    }
}
