use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use business::domain::matches::model::Match;

use crate::matches::entity::MatchEntity;

const EMBEDDED_MATCHES: &str = include_str!("../data/matches.json");

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("fixtures.read_error: {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fixtures.parse_error: {0}")]
    ParseError(#[source] serde_json::Error),
    #[error("fixtures.invalid_record: {0}")]
    InvalidRecord(i64),
    #[error("fixtures.duplicate_id: {0}")]
    DuplicateId(i64),
}

/// Where the match catalog is read from
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureSource {
    Embedded,
    File(PathBuf),
}

impl FixtureSource {
    /// Uses the file when a path is given, the embedded catalog otherwise
    pub fn from_path(path: Option<String>) -> Self {
        match path.map(|p| p.trim().to_string()).filter(|p| !p.is_empty()) {
            Some(p) => FixtureSource::File(PathBuf::from(p)),
            None => FixtureSource::Embedded,
        }
    }
}

/// Loads the catalog, keeping the order of the source
pub fn load_matches(source: &FixtureSource) -> Result<Vec<Match>, FixtureError> {
    let matches = match source {
        FixtureSource::Embedded => parse_matches(EMBEDDED_MATCHES)?,
        FixtureSource::File(path) => parse_matches(&read_file(path)?)?,
    };

    tracing::info!(count = matches.len(), ?source, "Match catalog loaded");
    Ok(matches)
}

fn read_file(path: &Path) -> Result<String, FixtureError> {
    std::fs::read_to_string(path).map_err(|source| FixtureError::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a JSON array of match records. Ids must be unique.
pub fn parse_matches(json: &str) -> Result<Vec<Match>, FixtureError> {
    let entities: Vec<MatchEntity> =
        serde_json::from_str(json).map_err(FixtureError::ParseError)?;

    let mut seen = HashSet::new();
    let mut matches = Vec::with_capacity(entities.len());
    for entity in entities {
        if !seen.insert(entity.id) {
            return Err(FixtureError::DuplicateId(entity.id));
        }
        matches.push(entity.into_domain()?);
    }

    Ok(matches)
}
