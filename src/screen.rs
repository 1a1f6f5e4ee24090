use glam::Vec2;

/// World-space viewport rectangle, as the camera host reports it each tick.
///
/// `extent` is the half-size: the vector from `center` to the top-right
/// corner of the visible region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub center: Vec2,
    pub extent: Vec2,
}

impl Screen {
    pub fn new(center: Vec2, extent: Vec2) -> Self {
        Self { center, extent }
    }

    /// Bounds test: true while `pos` is inside the visible region.
    pub fn contains(&self, pos: Vec2) -> bool {
        let d = pos - self.center;
        d.x.abs() <= self.extent.x && d.y.abs() <= self.extent.y
    }

    /// Magnitude of the half-extent vector. Pointer offsets are normalized
    /// against this when mapping pointer distance to requested speed.
    pub fn extent_len(&self) -> f32 {
        self.extent.length()
    }
}

impl Default for Screen {
    /// 16:9-ish world viewport centered on the origin.
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            extent: Vec2::new(8.0, 4.5),
        }
    }
}
