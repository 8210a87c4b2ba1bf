use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// The operation needs a current region but the track has no history yet.
    #[error("track {0} has no bounds history")]
    EmptyHistory(u64),
}
