//! Per-frame region of interest produced by motion detection.

use crate::tracker::rect::Rect;

/// A single frame's bounding box together with the motion measurements taken inside it.
///
/// Regions are plain values: a track stores its own copy of every region it is
/// given, so mutating the caller's region afterwards never reaches the history.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Region {
    /// Bounding box in frame pixel coordinates
    pub rect: Rect,
    /// Strength of the motion signal inside the box
    pub mass: f32,
    /// Intensity variance of the pixels inside the box
    pub pixel_variance: f32,
    /// Index of the video frame this region was taken from
    pub frame_index: u32,
}

impl Region {
    /// Create a region from top-left coordinates and dimensions, with no mass or variance.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::from_rect(Rect::new(x, y, width, height))
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self {
            rect,
            ..Default::default()
        }
    }

    /// Build a region of the given size centred on `(mid_x, mid_y)`.
    ///
    /// Position and size are truncated toward zero to whole pixels.
    pub fn centered(mid_x: f32, mid_y: f32, width: f32, height: f32) -> Self {
        Self::new(
            (mid_x - width / 2.0).trunc(),
            (mid_y - height / 2.0).trunc(),
            width.trunc(),
            height.trunc(),
        )
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_pixel_variance(mut self, pixel_variance: f32) -> Self {
        self.pixel_variance = pixel_variance;
        self
    }

    pub fn with_frame_index(mut self, frame_index: u32) -> Self {
        self.frame_index = frame_index;
        self
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.rect.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.rect.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.rect.height
    }

    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.rect.center().0
    }

    #[inline]
    pub fn mid_y(&self) -> f32 {
        self.rect.center().1
    }

    #[inline]
    pub fn area(&self) -> f32 {
        self.rect.area()
    }

    /// Mass as the whole number used by trimming and statistics.
    #[inline]
    pub fn int_mass(&self) -> i64 {
        self.mass as i64
    }

    /// Clip the bounding box in place to `bounds`, leaving measurements untouched.
    pub fn crop(&mut self, bounds: &Rect) {
        self.rect.crop(bounds);
    }

    /// Intersection area of the two bounding boxes.
    pub fn overlap_area(&self, other: &Region) -> f32 {
        self.rect.intersection_area(&other.rect)
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
