//! Cursor-driven decorative motion.

use crate::persona::Persona;

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tilt-and-drift effect of an element following the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollow {
    /// Rotation at the window edge, in degrees.
    pub max_rotation_deg: f64,
    /// Fraction of the cursor offset the element drifts by.
    pub follow_intensity: f64,
}

impl Default for CursorFollow {
    fn default() -> Self {
        Self {
            max_rotation_deg: 15.0,
            follow_intensity: 0.03,
        }
    }
}

impl CursorFollow {
    /// Subtle tuning for the hero portrait, small enough not to clip it.
    pub fn profile_image() -> Self {
        Self {
            max_rotation_deg: 5.0,
            follow_intensity: 0.005,
        }
    }

    /// Pose of an element centred at `center` for a cursor at `cursor`.
    pub fn pose(&self, cursor: Point, center: Point, window_width: f64, window_height: f64) -> FollowPose {
        let dx = cursor.x - center.x;
        let dy = center.y - cursor.y;
        let rotate_y = if window_width > 0.0 {
            dx / window_width * self.max_rotation_deg
        } else {
            0.0
        };
        let rotate_x = if window_height > 0.0 {
            dy / window_height * self.max_rotation_deg
        } else {
            0.0
        };
        FollowPose {
            rotate_x,
            rotate_y,
            shift_x: dx * self.follow_intensity,
            shift_y: (cursor.y - center.y) * self.follow_intensity,
        }
    }
}

/// Rotation (degrees) and drift (pixels) of a cursor-following element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FollowPose {
    /// Rotation about the X axis.
    pub rotate_x: f64,
    /// Rotation about the Y axis.
    pub rotate_y: f64,
    /// Horizontal drift.
    pub shift_x: f64,
    /// Vertical drift.
    pub shift_y: f64,
}

impl FollowPose {
    /// CSS transform, optionally flipped half a turn about Y.
    pub fn to_css(&self, flip: bool) -> String {
        let mut css = format!(
            "perspective(1000px) rotateX({:.3}deg) rotateY({:.3}deg) translate({:.3}px, {:.3}px)",
            self.rotate_x, self.rotate_y, self.shift_x, self.shift_y
        );
        if flip {
            css.push_str(" rotateY(180deg)");
        }
        css
    }
}

/// The glow disc that trails the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGlow {
    /// Last cursor position.
    pub position: Point,
    /// Persona whose colour the glow takes.
    pub persona: Persona,
}

impl CursorGlow {
    /// Diameter of the disc.
    pub const SIZE_PX: f64 = 200.0;

    /// A glow parked at the origin.
    pub fn new(persona: Persona) -> Self {
        Self {
            position: Point::default(),
            persona,
        }
    }

    /// Move the glow to the cursor.
    pub fn track(&mut self, cursor: Point) {
        self.position = cursor;
    }

    /// Top-left offset that centres the disc on the cursor.
    pub fn offset(&self) -> Point {
        let half = Self::SIZE_PX / 2.0;
        Point::new(self.position.x - half, self.position.y - half)
    }

    /// CSS transform.
    pub fn transform(&self) -> String {
        let offset = self.offset();
        format!("translate({}px, {}px)", offset.x, offset.y)
    }

    /// CSS class.
    pub fn class(&self) -> String {
        format!("cursor-glow {}", self.persona.glow_class())
    }
}
