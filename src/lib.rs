//! Single-object track history for motion-triggered camera clips.
//!
//! A [`Track`] accumulates one region per frame for a moving object and
//! provides the primitives a frame-by-frame controller needs: region match
//! costs, trimming, size smoothing, movement statistics and overlap with
//! other tracks. Matching regions to tracks and deciding a track's fate are
//! left to the controller.

pub mod tracker;

pub use tracker::{
    DEFAULT_OVERLAP_THRESHOLD, Rect, Region, Track, TrackConfig, TrackError, TrackIdGenerator,
    TrackMovementStatistics, TrackState,
};
