//! The precomputed answer table: a gzip-compressed JSON object keyed by
//! fingerprint (`m,60,c,nw,day,n,ib`).
//!
//! Decoding is all-or-nothing. Any malformed entry fails the whole load.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use flate2::read::GzDecoder;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::info;
use wtw_core::{Result, WtwError};

/// Snapshot compiled into the binary.
static EMBEDDED_ANSWERS: &[u8] = include_bytes!("../assets/answers.json.gz");

static EMBEDDED_TABLE: OnceCell<Arc<AnswerTable>> = OnceCell::new();

/// One table entry. The categorical fields are echoed from the key and are
/// not used for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub temp: String,
    #[serde(default)]
    pub conditions: String,
    #[serde(default)]
    pub wind: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub intensity: String,
    #[serde(default)]
    pub feel: String,
    pub clothes: Vec<String>,
}

/// Read-only fingerprint -> answer map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerTable {
    answers: HashMap<String, Answer>,
}

impl AnswerTable {
    /// Decode an uncompressed JSON object.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let answers: HashMap<String, Answer> = serde_json::from_reader(reader)
            .map_err(|e| WtwError::TableLoad(format!("decode answers: {e}")))?;
        Ok(Self { answers })
    }

    /// Decode a gzip stream wrapping the JSON object.
    pub fn from_gzip_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_json_reader(GzDecoder::new(reader))
    }

    pub fn from_gzip_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_gzip_reader(bytes)
    }

    /// Load a gzip snapshot from disk.
    pub fn load_path(path: &Path) -> Result<Self> {
        let f = File::open(path)
            .map_err(|e| WtwError::TableLoad(format!("open {}: {e}", path.display())))?;
        let table = Self::from_gzip_reader(BufReader::new(f))?;
        info!(path = %path.display(), entries = table.len(), "loaded answer table");
        Ok(table)
    }

    /// The compiled-in snapshot, decoded once per process.
    pub fn embedded() -> Result<Arc<AnswerTable>> {
        EMBEDDED_TABLE
            .get_or_try_init(|| {
                let table = Self::from_gzip_bytes(EMBEDDED_ANSWERS)?;
                info!(entries = table.len(), "loaded embedded answer table");
                Ok::<_, WtwError>(Arc::new(table))
            })
            .cloned()
    }

    pub fn get(&self, fingerprint: &str) -> Option<&Answer> {
        self.answers.get(fingerprint)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
