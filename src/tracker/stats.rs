//! Movement statistics for a finished (or in-progress) track.

use nalgebra::Vector2;
use ndarray::Array1;

use crate::tracker::region::Region;

/// Upper bound for each of the two components summed into the score.
pub const MAX_COMPONENT_POINTS: f32 = 100.0;

/// Weight applied to `delta_std` when converting it to points.
pub const DELTA_STD_WEIGHT: f32 = 25.0;

/// Summary of how much a track moves and how much detail it contains.
///
/// Every field is zero for tracks with fewer than two frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackMovementStatistics {
    /// Total distance travelled by the region midpoint, frame to frame
    pub movement: f32,
    /// Largest distance of any midpoint from the first one
    pub max_offset: f32,
    /// Quality score in `[0, 200]`; higher is more likely a real animal
    pub score: f32,
    pub average_mass: f32,
    pub median_mass: f32,
    /// Square root of the mean per-frame pixel variance
    pub delta_std: f32,
}

impl TrackMovementStatistics {
    /// Compute statistics over a track's bounds history.
    pub fn from_history(history: &[Region]) -> Self {
        if history.len() <= 1 {
            return Self::default();
        }

        let mids: Vec<Vector2<f32>> = history
            .iter()
            .map(|region| Vector2::new(region.mid_x(), region.mid_y()))
            .collect();

        let movement: f32 = mids.windows(2).map(|pair| (pair[1] - pair[0]).norm()).sum();
        let origin = mids[0];
        let max_offset = mids
            .iter()
            .map(|mid| (mid - origin).norm())
            .fold(0.0_f32, f32::max);

        // Mean of per-frame variances, square rooted. Score thresholds downstream
        // are calibrated against this, not a pooled standard deviation.
        let variances: Array1<f64> = history
            .iter()
            .map(|region| region.pixel_variance as f64)
            .collect();
        let delta_std = variances.mean().unwrap_or(0.0).sqrt() as f32;

        let masses: Vec<i64> = history.iter().map(Region::int_mass).collect();
        let mass_array: Array1<f64> = masses.iter().map(|&m| m as f64).collect();
        let average_mass = mass_array.mean().unwrap_or(0.0) as f32;
        let median_mass = median(&masses) as f32;

        let movement_points = movement.sqrt() + max_offset;
        let delta_points = delta_std * DELTA_STD_WEIGHT;
        let score =
            movement_points.min(MAX_COMPONENT_POINTS) + delta_points.min(MAX_COMPONENT_POINTS);

        Self {
            movement,
            max_offset,
            score,
            average_mass,
            median_mass,
            delta_std,
        }
    }
}

/// Median of a non-empty sequence; the mean of the two middle values for even lengths.
fn median(values: &[i64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}
