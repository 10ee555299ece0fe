//! Localized month names for destination folders

use crate::config::Language;

const ENGLISH: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SWEDISH: [&str; 12] = [
    "Januari",
    "Februari",
    "Mars",
    "April",
    "Maj",
    "Juni",
    "Juli",
    "Augusti",
    "September",
    "Oktober",
    "November",
    "December",
];

/// Folder name for a calendar month in the given language.
///
/// `month` is 1-based as chrono reports it; values outside 1..=12 are a
/// caller bug and panic.
pub fn localized_month(month: u32, language: Language) -> &'static str {
    let table = match language {
        Language::English => &ENGLISH,
        Language::Swedish => &SWEDISH,
    };
    table[(month - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_for_both_languages() {
        for month in 1..=12 {
            assert!(!localized_month(month, Language::English).is_empty());
            assert!(!localized_month(month, Language::Swedish).is_empty());
        }
    }

    #[test]
    fn test_swedish_translations() {
        assert_eq!(localized_month(1, Language::Swedish), "Januari");
        assert_eq!(localized_month(3, Language::Swedish), "Mars");
        assert_eq!(localized_month(5, Language::Swedish), "Maj");
        assert_eq!(localized_month(8, Language::Swedish), "Augusti");
        assert_eq!(localized_month(10, Language::Swedish), "Oktober");
    }

    #[test]
    fn test_shared_spellings() {
        // April, September, November and December are spelled the same
        for month in [4, 9, 11, 12] {
            assert_eq!(
                localized_month(month, Language::English),
                localized_month(month, Language::Swedish)
            );
        }
    }

    #[test]
    fn test_april_matches_spec_example() {
        assert_eq!(localized_month(4, Language::English), "April");
        assert_eq!(localized_month(4, Language::Swedish), "April");
    }

    #[test]
    #[should_panic]
    fn test_month_zero_is_a_contract_violation() {
        localized_month(0, Language::English);
    }
}
