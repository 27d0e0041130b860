use crate::color::HexColor;

// ── Data Model ──────────────────────────────────────────────────────────────

/// Sequential box identifier. Equals the box's index in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub usize);

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user-drawn box. `width` and `height` are signed: dragging above or to
/// the left of the origin yields negative values.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub id: BoxId,
    pub top_left_x: f32,
    pub top_left_y: f32,
    pub width: f32,
    pub height: f32,
    pub color: HexColor,
}

impl BoundingBox {
    pub fn new(id: BoxId, x: f32, y: f32, color: HexColor) -> Self {
        Self {
            id,
            top_left_x: x,
            top_left_y: y,
            width: 1.0,
            height: 1.0,
            color,
        }
    }

    /// Copy of this box stretched so its far corner sits at (x, y).
    pub fn stretched_to(&self, x: f32, y: f32) -> Self {
        Self {
            width: x - self.top_left_x,
            height: y - self.top_left_y,
            ..self.clone()
        }
    }

    pub fn geometry(&self) -> RectGeometry {
        RectGeometry::normalized(self.top_left_x, self.top_left_y, self.width, self.height)
    }

    /// Text shown in the list. Uses the raw signed dimensions.
    pub fn description(&self) -> String {
        format!(
            "Box #{} at ({}, {}) has width: {}px, height: {}px",
            self.id, self.top_left_x, self.top_left_y, self.width, self.height
        )
    }
}

/// On-screen rectangle with non-negative size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectGeometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectGeometry {
    /// Flip negative extents so the origin moves to the smaller coordinate.
    pub fn normalized(mut x: f32, mut y: f32, mut width: f32, mut height: f32) -> Self {
        if width < 0.0 {
            x += width;
            width = width.abs();
        }
        if height < 0.0 {
            y += height;
            height = height.abs();
        }
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
