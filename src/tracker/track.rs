//! Bounds history of a single tracked object.

use std::fmt;

use nalgebra::Vector2;
use tracing::{debug, trace};

use crate::tracker::error::TrackError;
use crate::tracker::ids::TrackIdGenerator;
use crate::tracker::rect::Rect;
use crate::tracker::region::Region;
use crate::tracker::stats::TrackMovementStatistics;

/// Minimum fraction of a frame's box that must be covered to count as overlapping.
pub const DEFAULT_OVERLAP_THRESHOLD: f32 = 0.05;

/// Tag given to tracks that have not been classified yet.
pub const UNKNOWN_TAG: &str = "unknown";

/// Tunables for trimming and region scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackConfig {
    /// Frames whose whole-number mass is at or below this are empty for `trim`
    pub empty_mass_threshold: i64,
    /// Added to the current area when computing the size difference of a candidate
    pub size_padding: f32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            empty_mass_threshold: 2,
            size_padding: 50.0,
        }
    }
}

/// Bounds of a tracked object over time.
///
/// The track only records what it is given. Deciding when to create, extend,
/// coast, merge or drop a track belongs to the controller that owns it, which
/// also owns `frames_since_target_seen` apart from the reset done by
/// [`Track::add_frame`].
#[derive(Debug, Clone)]
pub struct Track {
    id: u64,
    /// Frame number of the first entry in `bounds_history`
    start_frame: u32,
    bounds_history: Vec<Region>,
    frames_since_target_seen: u32,
    vel_x: f32,
    vel_y: f32,
    tag: String,
    config: TrackConfig,
}

impl Track {
    /// Create an empty track with an explicit id.
    pub fn new(id: u64) -> Self {
        Self::with_config(id, TrackConfig::default())
    }

    pub fn with_config(id: u64, config: TrackConfig) -> Self {
        Self {
            id,
            start_frame: 0,
            bounds_history: Vec::new(),
            frames_since_target_seen: 0,
            vel_x: 0.0,
            vel_y: 0.0,
            tag: UNKNOWN_TAG.to_string(),
            config,
        }
    }

    /// Create an empty track with the next id from `ids`.
    pub fn from_generator(ids: &TrackIdGenerator) -> Self {
        Self::new(ids.next_id())
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn start_frame(&self) -> u32 {
        self.start_frame
    }

    /// Set the frame number the first history entry belongs to.
    pub fn set_start_frame(&mut self, start_frame: u32) {
        self.start_frame = start_frame;
    }

    /// Exclusive frame number one past the last history entry.
    ///
    /// Widened to `u64` so a track starting near `u32::MAX` still has an end.
    pub fn end_frame(&self) -> u64 {
        self.start_frame as u64 + self.bounds_history.len() as u64
    }

    pub fn bounds_history(&self) -> &[Region] {
        &self.bounds_history
    }

    pub fn len(&self) -> usize {
        self.bounds_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds_history.is_empty()
    }

    /// Most recent region.
    pub fn bounds(&self) -> Result<&Region, TrackError> {
        self.bounds_history
            .last()
            .ok_or(TrackError::EmptyHistory(self.id))
    }

    /// Mass of the most recent region.
    pub fn mass(&self) -> Result<f32, TrackError> {
        self.bounds().map(|bounds| bounds.mass)
    }

    /// Current velocity `(vel_x, vel_y)`, the midpoint delta of the last two frames.
    pub fn velocity(&self) -> (f32, f32) {
        (self.vel_x, self.vel_y)
    }

    pub fn frames_since_target_seen(&self) -> u32 {
        self.frames_since_target_seen
    }

    pub fn set_frames_since_target_seen(&mut self, frames: u32) {
        self.frames_since_target_seen = frames;
    }

    pub fn inc_frames_since_target_seen(&mut self) {
        self.frames_since_target_seen = self.frames_since_target_seen.saturating_add(1);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    /// Append a copy of `region` as the next frame and refresh the velocity.
    ///
    /// Resets `frames_since_target_seen` to 0.
    pub fn add_frame(&mut self, region: &Region) {
        self.bounds_history.push(*region);
        self.frames_since_target_seen = 0;
        self.update_velocity();
        trace!(
            track_id = self.id,
            frames = self.bounds_history.len(),
            vel_x = self.vel_x,
            vel_y = self.vel_y,
            "added frame"
        );
    }

    /// Carry the current bounds forward one frame with no mass or variance.
    ///
    /// Velocity drops to zero. `frames_since_target_seen` is left alone: the
    /// controller counts unseen frames itself, typically with
    /// [`Track::inc_frames_since_target_seen`].
    pub fn add_blank_frame(&mut self) -> Result<(), TrackError> {
        let mut blank = *self.bounds()?;
        blank.mass = 0.0;
        blank.pixel_variance = 0.0;
        blank.frame_index = blank.frame_index.saturating_add(1);
        self.bounds_history.push(blank);
        self.vel_x = 0.0;
        self.vel_y = 0.0;
        trace!(
            track_id = self.id,
            frames = self.bounds_history.len(),
            frame_index = blank.frame_index,
            "added blank frame"
        );
        Ok(())
    }

    fn update_velocity(&mut self) {
        match self.bounds_history.as_slice() {
            [.., prev, last] => {
                self.vel_x = last.mid_x() - prev.mid_x();
                self.vel_y = last.mid_y() - prev.mid_y();
            }
            _ => {
                self.vel_x = 0.0;
                self.vel_y = 0.0;
            }
        }
    }

    /// Movement statistics over the whole history; all zero below two frames.
    pub fn get_stats(&self) -> TrackMovementStatistics {
        TrackMovementStatistics::from_history(&self.bounds_history)
    }

    /// Smooth out quick changes in box size.
    ///
    /// Each frame's width and height become the mean over itself and its two
    /// neighbours (the ends reuse themselves as the missing neighbour), keeping
    /// the frame's own midpoint. Boxes are cropped to `frame_bounds`. Mass,
    /// pixel variance and frame index carry over from the original frame.
    pub fn smooth(&mut self, frame_bounds: &Rect) {
        if self.bounds_history.is_empty() {
            return;
        }

        let last = self.bounds_history.len() - 1;
        let smoothed: Vec<Region> = (0..=last)
            .map(|i| {
                let prev = &self.bounds_history[i.saturating_sub(1)];
                let cur = &self.bounds_history[i];
                let next = &self.bounds_history[(i + 1).min(last)];

                let width = (prev.width() + cur.width() + next.width()) / 3.0;
                let height = (prev.height() + cur.height() + next.height()) / 3.0;

                let mut region = Region::centered(cur.mid_x(), cur.mid_y(), width, height)
                    .with_mass(cur.mass)
                    .with_pixel_variance(cur.pixel_variance)
                    .with_frame_index(cur.frame_index);
                region.crop(frame_bounds);
                region
            })
            .collect();

        debug!(track_id = self.id, frames = smoothed.len(), "smoothed track");
        self.bounds_history = smoothed;
    }

    /// Remove empty frames from the start and end of the track.
    ///
    /// A frame is empty when its whole-number mass is at most
    /// `config.empty_mass_threshold`. A track with no non-empty frames is
    /// cleared and its start frame reset to 0.
    pub fn trim(&mut self) {
        let threshold = self.config.empty_mass_threshold;
        let empty = |region: &Region| region.int_mass() <= threshold;

        let Some(start) = self.bounds_history.iter().position(|r| !empty(r)) else {
            debug!(track_id = self.id, frames = self.bounds_history.len(), "trimmed whole track");
            self.start_frame = 0;
            self.bounds_history.clear();
            return;
        };
        // A non-empty frame exists, so this always finds one at or after `start`.
        let end = self
            .bounds_history
            .iter()
            .rposition(|r| !empty(r))
            .unwrap_or(start);

        let trimmed_tail = self.bounds_history.len() - 1 - end;
        if start == 0 && trimmed_tail == 0 {
            return;
        }

        self.bounds_history.truncate(end + 1);
        self.bounds_history.drain(..start);
        let head = u32::try_from(start).unwrap_or(u32::MAX);
        self.start_frame = self.start_frame.saturating_add(head);
        debug!(
            track_id = self.id,
            trimmed_head = start,
            trimmed_tail,
            frames = self.bounds_history.len(),
            start_frame = self.start_frame,
            "trimmed track"
        );
    }

    /// Match cost terms of `region` against this track's predicted next position.
    ///
    /// Returns `(distance, size_difference)`: the distance from the region's
    /// midpoint to the current midpoint advanced by one step of velocity
    /// (truncated to whole pixels), and the absolute area change as a
    /// percentage of the current area padded by `config.size_padding`. How the
    /// two are weighed or gated is up to the caller.
    pub fn get_track_region_score(&self, region: &Region) -> Result<(f32, f32), TrackError> {
        let bounds = self.bounds()?;
        let expected = Vector2::new(
            (bounds.mid_x() + self.vel_x).trunc(),
            (bounds.mid_y() + self.vel_y).trunc(),
        );

        let distance = (Vector2::new(region.mid_x(), region.mid_y()) - expected).norm();
        let padded_area = bounds.area() + self.config.size_padding;
        let size_difference = (region.area() - bounds.area()).abs() / padded_area * 100.0;

        Ok((distance, size_difference))
    }

    /// Fraction of this track's frames that overlap `other` by at least `threshold`.
    ///
    /// A shared frame counts when the intersection covers at least `threshold`
    /// of this track's box. The count is divided by this track's full length,
    /// so the ratio is directional: `a.get_overlap_ratio(&b)` and
    /// `b.get_overlap_ratio(&a)` generally differ. It is not an IoU.
    pub fn get_overlap_ratio(&self, other: &Track, threshold: f32) -> f32 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }

        let start = self.start_frame.max(other.start_frame) as u64;
        let end = self.end_frame().min(other.end_frame());

        let mut frames_overlapped = 0usize;
        for pos in start..=end {
            let (Some(ours), Some(theirs)) = (self.region_at(pos), other.region_at(pos)) else {
                continue;
            };
            let area = ours.area();
            if area <= 0.0 {
                continue;
            }
            if theirs.overlap_area(ours) / area >= threshold {
                frames_overlapped += 1;
            }
        }

        let ratio = frames_overlapped as f32 / self.len() as f32;
        debug!(
            track_id = self.id,
            other_id = other.id,
            frames_overlapped,
            ratio,
            "overlap ratio"
        );
        ratio
    }

    /// Region recorded for absolute frame number `frame`, if the track covers it.
    fn region_at(&self, frame: u64) -> Option<&Region> {
        let index = frame.checked_sub(self.start_frame as u64)?;
        self.bounds_history.get(usize::try_from(index).ok()?)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Track:{} frames", self.len())
    }
}
