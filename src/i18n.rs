//! Localized status strings and system language detection
//!
//! Status texts shown to the user follow the run's language.
//! Log messages remain in English for consistency.

use crate::config::{Language, TransferMode};

/// Detect the display language from the system locale.
///
/// Swedish locales select Swedish, anything else falls back to English.
pub fn detect_language() -> Language {
    let locale = sys_locale::get_locale().unwrap_or_default().to_lowercase();
    if locale.starts_with("sv") {
        Language::Swedish
    } else {
        Language::English
    }
}

/// Localized strings for run status reporting
pub struct Strings;

impl Strings {
    pub fn scanning(language: Language) -> &'static str {
        match language {
            Language::English => "Scanning source folder...",
            Language::Swedish => "Söker igenom källmappen...",
        }
    }

    pub fn starting(language: Language) -> &'static str {
        match language {
            Language::English => "Starting organization...",
            Language::Swedish => "Startar organisering...",
        }
    }

    pub fn processing(language: Language, filename: &str) -> String {
        match language {
            Language::English => format!("Processing: {filename}"),
            Language::Swedish => format!("Bearbetar: {filename}"),
        }
    }

    pub fn completed(language: Language, processed: usize, mode: TransferMode) -> String {
        match language {
            Language::English => {
                let verb = match mode {
                    TransferMode::Copy => "copied",
                    TransferMode::Move => "moved",
                };
                format!("Organization completed! {processed} files have been {verb}.")
            }
            Language::Swedish => {
                let verb = match mode {
                    TransferMode::Copy => "kopierats",
                    TransferMode::Move => "flyttats",
                };
                format!("Organiseringen är klar! {processed} filer har {verb}.")
            }
        }
    }

    pub fn cancelled(language: Language) -> &'static str {
        match language {
            Language::English => "Organization cancelled.",
            Language::Swedish => "Organiseringen avbröts.",
        }
    }
}
