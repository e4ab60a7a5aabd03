use fixtures::source::FixtureSource;

/// Where the match catalog comes from
///
/// Environment variables:
/// - MATCHES_FIXTURE_PATH: JSON file with the catalog (default: embedded data)
pub struct FixturesConfig {
    pub source: FixtureSource,
}

impl FixturesConfig {
    pub fn from_env() -> Self {
        Self {
            source: FixtureSource::from_path(std::env::var("MATCHES_FIXTURE_PATH").ok()),
        }
    }
}
