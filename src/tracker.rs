mod error;
mod ids;
mod rect;
mod region;
mod stats;
mod track;
mod track_state;

pub use error::TrackError;
pub use ids::TrackIdGenerator;
pub use rect::Rect;
pub use region::Region;
pub use stats::{DELTA_STD_WEIGHT, MAX_COMPONENT_POINTS, TrackMovementStatistics};
pub use track::{DEFAULT_OVERLAP_THRESHOLD, Track, TrackConfig, UNKNOWN_TAG};
pub use track_state::TrackState;
