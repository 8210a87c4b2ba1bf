/// Lifecycle of a track as seen by the controller that drives it.
///
/// `Track` itself never reads or changes this; controllers keep one next to
/// each track and move it along using `frames_since_target_seen` and their own
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackState {
    /// Received a region this frame
    #[default]
    Active,
    /// Kept alive on blank frames while the target is unseen
    Coasting,
    /// Given up on; no more frames will be added
    Abandoned,
    /// Clip ended, track trimmed and ready for classification
    Finalized,
}

impl TrackState {
    /// Whether the track should still be offered candidate regions.
    pub fn is_live(&self) -> bool {
        matches!(self, TrackState::Active | TrackState::Coasting)
    }
}
