use crate::codec::DecodeError;
use crate::codec::decode;
use crate::schema::CardList;
use snafu::prelude::*;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;

/// Path argument that reads the document from standard input.
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Snafu)]
pub enum LoadError {
    #[snafu(display("Error reading file '{}': {source}", path.display()))]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Error parsing JSON in '{}': {source}", path.display()))]
    Decode { path: PathBuf, source: DecodeError },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Reads the whole document before decoding. The file handle is closed before
/// decoding starts, whatever the outcome.
pub fn load(path: &Path) -> LoadResult<CardList> {
    let bytes = read_source(path).context(ReadSnafu { path })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read card list");

    decode(&bytes).context(DecodeSnafu { path })
}

fn read_source(path: &Path) -> std::io::Result<Vec<u8>> {
    if path == Path::new(STDIN_PATH) {
        let mut bytes = vec![];
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        std::fs::read(path)
    }
}
