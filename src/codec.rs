use crate::schema::CardList;
use serde_json::Deserializer;
use serde_json::error::Category;
use snafu::prelude::*;
use tracing::debug;

const ROOT_LOCATION: &str = "document root";

#[derive(Debug, Snafu)]
pub enum DecodeError {
    #[snafu(display("malformed JSON: {source}"))]
    Syntax { source: serde_json::Error },

    #[snafu(display("schema mismatch at {path}: {source}"))]
    Shape {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Snafu)]
#[snafu(display("could not format card list: {source}"))]
pub struct EncodeError {
    source: serde_json::Error,
}

pub type DecodeResult<T> = Result<T, DecodeError>;
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Decodes a complete card list document.
///
/// Unknown keys are ignored. Anything after the top-level value other than
/// whitespace is a syntax error.
pub fn decode(bytes: &[u8]) -> DecodeResult<CardList> {
    let mut deserializer = Deserializer::from_slice(bytes);

    let card_list: CardList =
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
            let path = match e.path().to_string() {
                path if path == "." => ROOT_LOCATION.to_string(),
                path => path,
            };
            let source = e.into_inner();
            match source.classify() {
                Category::Data => DecodeError::Shape { path, source },
                Category::Io | Category::Syntax | Category::Eof => DecodeError::Syntax { source },
            }
        })?;
    deserializer.end().context(SyntaxSnafu)?;

    debug!(
        sets = card_list.sets.len(),
        cards = card_list.cards().count(),
        "decoded card list"
    );
    Ok(card_list)
}

/// Encodes a card list as JSON indented by two spaces, keys in declaration order.
pub fn encode(card_list: &CardList) -> EncodeResult<String> {
    serde_json::to_string_pretty(card_list).context(EncodeSnafu)
}
