//! On-disk corpus cache.
//!
//! Assembling the corpus means re-parsing three CSV files and re-decoding all
//! their nested JSON columns, so the assembled raw records are cached as a
//! single JSON file. Session scores are never cached: the file stores raw
//! records only, and [`Corpus::from_data`] recomputes the derived sets and
//! the initial likeness on every load.

use crate::corpus::Corpus;
use crate::error::{CorpusError, Result};
use crate::types::MovieData;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

impl Corpus {
    /// Load the corpus, preferring the cache over the CSV files.
    ///
    /// Steps:
    /// 1. If `cache_path` holds a readable cache, build the corpus from it
    /// 2. A present-but-unreadable cache is discarded with a warning
    /// 3. Otherwise assemble from `data_dir` and write the cache back
    pub fn load(data_dir: &Path, cache_path: &Path) -> Result<Self> {
        if cache_path.exists() {
            match read_cache(cache_path) {
                Ok(data) => {
                    info!("Loaded {} movies from cache {:?}", data.len(), cache_path);
                    return Ok(Corpus::from_data(data));
                }
                Err(e) => {
                    warn!("Discarding unreadable cache {:?}: {}", cache_path, e);
                }
            }
        }

        let corpus = Corpus::assemble(data_dir)?;
        write_cache(cache_path, &corpus)?;
        Ok(corpus)
    }
}

/// Read the cached raw records.
pub fn read_cache(path: &Path) -> Result<Vec<MovieData>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| CorpusError::Cache(e.to_string()))
}

/// Write the corpus's raw records to the cache file.
pub fn write_cache(path: &Path, corpus: &Corpus) -> Result<()> {
    let data: Vec<&MovieData> = corpus.records().iter().map(|r| r.data()).collect();
    let contents = serde_json::to_string(&data).map_err(|e| CorpusError::Cache(e.to_string()))?;
    fs::write(path, contents)?;
    info!("Wrote {} movies to cache {:?}", data.len(), path);
    Ok(())
}
