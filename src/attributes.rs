use crate::schema::AttributeItem;
use crate::schema::CardList;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::btree_map::Entry;
use tracing::debug;

/// Placeholder note for suggested definitions of undefined attributes.
pub const SUGGESTED_NOTE: &str = "NEW ATTRIBUTE - please define";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeIssue {
    Undefined {
        attribute: String,
    },
    Unused {
        attribute: String,
    },
    ConflictingNotes {
        attribute: String,
        first: String,
        second: String,
    },
}

impl std::fmt::Display for AttributeIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AttributeIssue::Undefined { attribute } => write!(
                f,
                "attribute '{}' found on a card but not defined in root attributes",
                attribute
            ),
            AttributeIssue::Unused { attribute } => write!(
                f,
                "attribute '{}' defined in root attributes but not found on any card",
                attribute
            ),
            AttributeIssue::ConflictingNotes {
                attribute,
                first,
                second,
            } => write!(
                f,
                "attribute '{}' defined with conflicting notes '{}' and '{}'",
                attribute, first, second
            ),
        }
    }
}

/// Cross-checks the attribute tags on cards against the root definitions.
///
/// Conflicts come first in definition order, then undefined and unused
/// attributes, each sorted by name.
pub fn check(card_list: &CardList) -> Vec<AttributeIssue> {
    let mut issues = vec![];

    let mut defined: BTreeMap<&str, &str> = BTreeMap::new();
    for item in card_list.attributes.iter().flatten() {
        match defined.entry(item.attribute.as_str()) {
            Entry::Vacant(vacant) => {
                vacant.insert(item.note.as_str());
            }
            Entry::Occupied(occupied) if *occupied.get() == item.note.as_str() => {}
            Entry::Occupied(occupied) => issues.push(AttributeIssue::ConflictingNotes {
                attribute: item.attribute.clone(),
                first: occupied.get().to_string(),
                second: item.note.clone(),
            }),
        }
    }

    let used: BTreeSet<&str> = card_list
        .cards()
        .flat_map(|card| card.attributes.iter().flatten())
        .map(String::as_str)
        .collect();

    issues.extend(
        used.iter()
            .filter(|attribute| !defined.contains_key(*attribute))
            .map(|attribute| AttributeIssue::Undefined {
                attribute: attribute.to_string(),
            }),
    );
    issues.extend(
        defined
            .keys()
            .filter(|attribute| !used.contains(*attribute))
            .map(|attribute| AttributeIssue::Unused {
                attribute: attribute.to_string(),
            }),
    );

    debug!(
        defined = defined.len(),
        used = used.len(),
        issues = issues.len(),
        "checked attributes"
    );
    issues
}

/// Template definitions for every undefined attribute among `issues`.
pub fn suggestions(issues: &[AttributeIssue]) -> Vec<AttributeItem> {
    issues
        .iter()
        .filter_map(|issue| match issue {
            AttributeIssue::Undefined { attribute } => Some(AttributeItem {
                attribute: attribute.clone(),
                note: SUGGESTED_NOTE.to_string(),
            }),
            AttributeIssue::Unused { .. } | AttributeIssue::ConflictingNotes { .. } => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;
    use super::AttributeIssue::*;

    fn check_str(input: &str) -> Vec<AttributeIssue> {
        check(&decode(input.as_bytes()).unwrap())
    }

    fn undefined(attribute: &str) -> AttributeIssue {
        Undefined {
            attribute: attribute.into(),
        }
    }

    fn unused(attribute: &str) -> AttributeIssue {
        Unused {
            attribute: attribute.into(),
        }
    }

    #[test]
    fn test_consistent_document() {
        let issues = check_str(
            r#"{"name":"X","attributes":[{"attribute":"RC","note":"Rookie Card"}],
                "sets":[{"name":"Base","cards":[{"name":"A","attributes":["RC"]},{"name":"B"}]}]}"#,
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_no_attributes_anywhere() {
        assert!(check_str(r#"{"name":"X","sets":[]}"#).is_empty());
    }

    #[test]
    fn test_undefined_without_root_list() {
        let issues = check_str(
            r#"{"name":"X","sets":[{"name":"Base","cards":[{"name":"A","attributes":["SP","AU"]}]},
                {"name":"Inserts","cards":[{"name":"B","attributes":["AU"]}]}]}"#,
        );
        assert_eq!(issues, vec![undefined("AU"), undefined("SP")]);
    }

    #[test]
    fn test_unused_definition() {
        let issues = check_str(
            r#"{"name":"X","attributes":[{"attribute":"RC","note":"Rookie Card"},{"attribute":"AU","note":"Autograph"}],
                "sets":[{"name":"Base","cards":[{"name":"A","attributes":["RC"]}]}]}"#,
        );
        assert_eq!(issues, vec![unused("AU")]);
    }

    #[test]
    fn test_conflicting_notes() {
        let issues = check_str(
            r#"{"name":"X","attributes":[
                {"attribute":"RC","note":"Rookie Card"},
                {"attribute":"RC","note":"Rookie Card"},
                {"attribute":"RC","note":"Rookie"}],
                "sets":[{"name":"Base","cards":[{"name":"A","attributes":["RC","SP"]}]}]}"#,
        );
        assert_eq!(
            issues,
            vec![
                ConflictingNotes {
                    attribute: "RC".into(),
                    first: "Rookie Card".into(),
                    second: "Rookie".into(),
                },
                undefined("SP"),
            ]
        );
    }

    #[test]
    fn test_suggestions() {
        let issues = vec![undefined("SP"), unused("RC"), undefined("AU")];
        assert_eq!(
            suggestions(&issues),
            vec![
                AttributeItem {
                    attribute: "SP".into(),
                    note: SUGGESTED_NOTE.into(),
                },
                AttributeItem {
                    attribute: "AU".into(),
                    note: SUGGESTED_NOTE.into(),
                },
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            undefined("SP").to_string(),
            "attribute 'SP' found on a card but not defined in root attributes"
        );
    }
}
