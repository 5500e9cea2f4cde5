//! Static page content: feature cards and FAQ entries.
//!
//! Everything here is fixed at build time and lives for the whole process.
//! Components map these slices into repeated child elements, in order.

use std::fmt;

use serde::Serialize;

/// One page of the horizontal feature carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    /// Card heading
    pub title: &'static str,
    /// Card paragraph
    pub description: &'static str,
}

/// One question/answer pair of the FAQ slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    /// Question, shown in the panel header
    pub title: &'static str,
    /// Answer, shown only while the panel is open
    pub body: &'static str,
}

/// Number of feature cards the carousel is laid out for.
pub const FEATURE_CARD_COUNT: usize = 4;

/// Number of FAQ entries on the FAQ slide.
pub const FAQ_ENTRY_COUNT: usize = 5;

/// Feature cards, in carousel order.
pub const FEATURE_CARDS: [FeatureCard; FEATURE_CARD_COUNT] = [
    FeatureCard {
        title: "For the Visually Impaired",
        description: "HawkEye reads printed text aloud, names the objects in front of you \
                      and answers questions about your surroundings, all from a pair of glasses.",
    },
    FeatureCard {
        title: "Cutting the Edge",
        description: "Eye tracking, a forward camera and a speech model work together: \
                      look at something, ask about it, and hear the answer in seconds.",
    },
    FeatureCard {
        title: "Changing the World",
        description: "Everyday independence should not depend on someone else being nearby. \
                      HawkEye brings a second pair of eyes to every room, menu and street sign.",
    },
    FeatureCard {
        title: "Correcting the World",
        description: "Blink tracking turns eye health into data you can act on, with a \
                      personal dashboard that shows how your eyes behave through the day.",
    },
];

/// FAQ entries, in display order.
pub const FAQ_ENTRIES: [FaqEntry; FAQ_ENTRY_COUNT] = [
    FaqEntry {
        title: "What is HawkEye?",
        body: "HawkEye is a pair of smart glasses that describes the world to people with \
               low vision. It combines eye tracking, a camera and voice commands.",
    },
    FaqEntry {
        title: "How do I use it?",
        body: "Look at what you are curious about and ask out loud. HawkEye captures \
               what you are looking at and answers through its speaker.",
    },
    FaqEntry {
        title: "What can it recognize?",
        body: "Printed and handwritten text, everyday objects, colors, and the general \
               layout of a scene such as doors, stairs or obstacles.",
    },
    FaqEntry {
        title: "How much is it?",
        body: "HawkEye is currently free to use! We are working with clinics and schools \
               to keep it that way for the people who need it most.",
    },
    FaqEntry {
        title: "Where can I see my blink data?",
        body: "Log in to the dashboard to see your blink timeline, left and right eye \
               comparison and recommendations based on your blink patterns.",
    },
];

/// A problem found in the static content or in the configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentIssue {
    /// A feature card has a blank title or description.
    BlankCard {
        /// Position in the card list
        index: usize,
        /// `title` or `description`
        field: &'static str,
    },
    /// An FAQ entry has a blank title or body.
    BlankFaq {
        /// Position in the FAQ list
        index: usize,
        /// `title` or `body`
        field: &'static str,
    },
    /// A collection does not have the number of items the layout expects.
    WrongCount {
        /// Collection name
        what: &'static str,
        /// Count the layout is built for
        expected: usize,
        /// Actual count
        found: usize,
    },
    /// A configuration value is outside its usable range.
    Config {
        /// Dotted config key, e.g. `deck.mousewheel.sensitivity`
        field: &'static str,
        /// What is wrong with the value
        reason: String,
    },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::BlankCard { index, field } => {
                write!(f, "feature card #{index} has a blank {field}")
            }
            ContentIssue::BlankFaq { index, field } => {
                write!(f, "FAQ entry #{index} has a blank {field}")
            }
            ContentIssue::WrongCount {
                what,
                expected,
                found,
            } => write!(f, "expected {expected} {what}, found {found}"),
            ContentIssue::Config { field, reason } => write!(f, "config `{field}`: {reason}"),
        }
    }
}

/// Check card and FAQ collections for blank fields and unexpected counts.
pub fn validate(cards: &[FeatureCard], faqs: &[FaqEntry]) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if cards.len() != FEATURE_CARD_COUNT {
        issues.push(ContentIssue::WrongCount {
            what: "feature cards",
            expected: FEATURE_CARD_COUNT,
            found: cards.len(),
        });
    }
    if faqs.len() != FAQ_ENTRY_COUNT {
        issues.push(ContentIssue::WrongCount {
            what: "FAQ entries",
            expected: FAQ_ENTRY_COUNT,
            found: faqs.len(),
        });
    }

    for (index, card) in cards.iter().enumerate() {
        if card.title.trim().is_empty() {
            issues.push(ContentIssue::BlankCard { index, field: "title" });
        }
        if card.description.trim().is_empty() {
            issues.push(ContentIssue::BlankCard {
                index,
                field: "description",
            });
        }
    }
    for (index, entry) in faqs.iter().enumerate() {
        if entry.title.trim().is_empty() {
            issues.push(ContentIssue::BlankFaq { index, field: "title" });
        }
        if entry.body.trim().is_empty() {
            issues.push(ContentIssue::BlankFaq { index, field: "body" });
        }
    }

    issues
}

/// Validate the built-in content.
pub fn validate_builtin() -> Vec<ContentIssue> {
    validate(&FEATURE_CARDS, &FAQ_ENTRIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_content_is_valid() {
        assert!(validate_builtin().is_empty());
    }

    #[test]
    fn feature_cards_keep_their_order() {
        let titles: Vec<_> = FEATURE_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec![
                "For the Visually Impaired",
                "Cutting the Edge",
                "Changing the World",
                "Correcting the World",
            ]
        );
    }

    #[test]
    fn every_faq_entry_has_title_and_body() {
        assert_eq!(FAQ_ENTRIES.len(), 5);
        for entry in FAQ_ENTRIES {
            assert!(!entry.title.trim().is_empty());
            assert!(!entry.body.trim().is_empty());
        }
    }

    #[test]
    fn reports_blank_fields_and_counts() {
        let cards = [FeatureCard {
            title: " ",
            description: "ok",
        }];
        let faqs = [FaqEntry {
            title: "Q",
            body: "",
        }];

        let issues = validate(&cards, &faqs);

        assert_eq!(
            issues,
            vec![
                ContentIssue::WrongCount {
                    what: "feature cards",
                    expected: 4,
                    found: 1,
                },
                ContentIssue::WrongCount {
                    what: "FAQ entries",
                    expected: 5,
                    found: 1,
                },
                ContentIssue::BlankCard {
                    index: 0,
                    field: "title",
                },
                ContentIssue::BlankFaq {
                    index: 0,
                    field: "body",
                },
            ]
        );
        assert_eq!(issues[2].to_string(), "feature card #0 has a blank title");
    }
}
