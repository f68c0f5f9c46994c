//! Record types for a trading-card checklist document.
//!
//! Optional fields are `Option`s that are skipped when absent, so a document
//! keeps its key set across a decode/encode cycle. An explicitly empty array
//! decodes to `Some(vec![])` and is written back as `[]`.

use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CardList {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<AttributeItem>>,
    pub sets: Vec<Set>,
}

/// Root-level definition of an attribute tag used on cards.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AttributeItem {
    pub attribute: String,
    pub note: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    /// Print run limit. Absent means the set is not serial-numbered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered_to: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<Vec<InsertOdd>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<Variation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallels: Option<Vec<Parallel>>,
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Card {
    /// Checklist number, e.g. "12" or "A1".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub name: String,
    /// Tags matched by value against `AttributeItem::attribute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<Vec<Variation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallels: Option<Vec<Parallel>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub variation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<Vec<InsertOdd>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallels: Option<Vec<Parallel>>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parallel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbered_to: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_odds: Option<Vec<InsertOdd>>,
}

/// Pack odds for pulling a card, kept as free text ("1:24").
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InsertOdd {
    pub product: String,
    pub odds: String,
}

impl CardList {
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.sets.iter().flat_map(|set| set.cards.iter())
    }
}
