use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("failed to read schedule file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("bundled schedule asset `{0}` is missing")]
    MissingAsset(String),
    #[error("invalid schedule data: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown time zone `{0}`")]
    UnknownTimeZone(String),
    #[error("talk `{id}` ends before it starts")]
    InvertedTimeRange { id: String },
    #[error("duplicate entry id `{0}`")]
    DuplicateId(String),
}
