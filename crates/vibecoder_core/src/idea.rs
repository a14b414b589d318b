//! Example prompts offered to the user.

use serde::{Deserialize, Serialize};

/// Upper bound on the number of ideas shown at once.
pub const MAX_IDEAS: usize = 5;

/// A suggested prompt: a short chip label and the full description it expands to.
///
/// Serializes as `{"short": ..., "long": ...}`, the shape the idea model is asked to emit.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_more::Display,
)]
#[display("{}", short_label)]
pub struct IdeaChip {
    /// Two or three word label
    #[serde(rename = "short")]
    short_label: String,
    /// Full prompt submitted when the chip is picked
    #[serde(rename = "long")]
    long_prompt: String,
}

impl IdeaChip {
    /// Create a chip.
    pub fn new(short_label: impl Into<String>, long_prompt: impl Into<String>) -> Self {
        Self {
            short_label: short_label.into(),
            long_prompt: long_prompt.into(),
        }
    }
}

const FALLBACK_IDEAS: [(&str, &str); 8] = [
    (
        "Email Automation",
        "Create a script that automatically sends personalized emails to a list of recipients from a spreadsheet. The email should include their name, company, and a custom message based on their role.",
    ),
    (
        "Data Cleaner",
        "Build a script that cleans data in a spreadsheet by removing duplicates, fixing formatting issues, and standardizing text entries like names, addresses, and phone numbers.",
    ),
    (
        "Calendar Scheduler",
        "Create a script that automatically schedules events in Google Calendar based on data in a spreadsheet. Include functionality to avoid scheduling conflicts and send notifications.",
    ),
    (
        "Invoice Generator",
        "Develop a script that generates PDF invoices based on order data in a spreadsheet. The invoice should include company logo, line items, taxes, and payment information.",
    ),
    (
        "Form Response Handler",
        "Create a script that processes Google Form responses, categorizes them based on specific criteria, and sends automated follow-up emails to respondents based on their answers.",
    ),
    (
        "Inventory Tracker",
        "Build an inventory management script that tracks stock levels, sends alerts when items are low, and generates purchase orders automatically based on predefined thresholds.",
    ),
    (
        "Project Dashboard",
        "Create a script that generates a visual dashboard from project data in a spreadsheet. Include progress bars, status indicators, and deadline trackers that update automatically.",
    ),
    (
        "Expense Approver",
        "Develop a script that routes expense reports for approval, sends reminder emails to approvers, and updates status in the spreadsheet when approved or rejected.",
    ),
];

/// The static idea set used whenever model-generated ideas are unavailable.
///
/// # Examples
///
/// ```
/// let ideas = vibecoder_core::fallback_ideas();
/// assert_eq!(ideas.len(), 8);
/// assert_eq!(ideas[0].short_label(), "Email Automation");
/// ```
pub fn fallback_ideas() -> Vec<IdeaChip> {
    FALLBACK_IDEAS
        .iter()
        .map(|(short, long)| IdeaChip::new(*short, *long))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_uses_short_and_long_on_the_wire() {
        let chip = IdeaChip::new("Data Cleaner", "Clean the sheet");
        let json = serde_json::to_value(&chip).unwrap();
        assert_eq!(json["short"], "Data Cleaner");
        assert_eq!(json["long"], "Clean the sheet");
    }

    #[test]
    fn fallback_labels_are_unique() {
        let ideas = fallback_ideas();
        let labels: std::collections::HashSet<_> =
            ideas.iter().map(|i| i.short_label().clone()).collect();
        assert_eq!(labels.len(), ideas.len());
    }
}
