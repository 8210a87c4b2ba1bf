/// Axis-aligned bounding box in TLWH form (top-left x, top-left y, width, height).
///
/// Used both for per-frame detection boxes and for the video frame itself,
/// which acts as the crop target when smoothing a track.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Top-left x coordinate
    pub x: f32,
    /// Top-left y coordinate
    pub y: f32,
    /// Width of the bounding box
    pub width: f32,
    /// Height of the bounding box
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from top-left coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Get the area of the bounding box.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Area shared by both boxes, 0 when they are disjoint.
    pub fn intersection_area(&self, other: &Rect) -> f32 {
        let x1 = self.left().max(other.left());
        let y1 = self.top().max(other.top());
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        (x2 - x1).max(0.0) * (y2 - y1).max(0.0)
    }

    /// Clip this box in place so it lies inside `bounds`.
    ///
    /// A box entirely outside `bounds` collapses to zero width and/or height.
    pub fn crop(&mut self, bounds: &Rect) {
        let x1 = self.left().max(bounds.left());
        let y1 = self.top().max(bounds.top());
        let x2 = self.right().min(bounds.right());
        let y2 = self.bottom().min(bounds.bottom());

        self.x = x1;
        self.y = y1;
        self.width = (x2 - x1).max(0.0);
        self.height = (y2 - y1).max(0.0);
    }
}
