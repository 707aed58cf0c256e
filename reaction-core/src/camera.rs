use crate::physics::{PhysicsPrecision, Point2};

/// Destination rectangle in screen space: top-left corner plus size,
/// all in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Maps physical positions to screen-space rectangles. The origin sits
/// at the horizontal center of the viewport with the vertical axis
/// flipped (physical +y is up, screen +y is down).
pub struct Camera {
    viewport: (u32, u32),
    pixels_per_unit: f32,
}

impl Camera {
    pub fn new(viewport: (u32, u32), pixels_per_unit: f32) -> Self {
        Self {
            viewport,
            pixels_per_unit,
        }
    }

    /// Follows the window size; no graphics resource depends on it.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn project(&self, position: Point2<PhysicsPrecision>) -> ScreenRect {
        ScreenRect {
            left: self.viewport.0 as f32 / 2.0 + position.x * self.pixels_per_unit / 2.0,
            top: self.viewport.1 as f32 - position.y * self.pixels_per_unit / 2.0,
            width: self.pixels_per_unit,
            height: self.pixels_per_unit,
        }
    }
}

/// Draw calls take their rotation in degrees; the physics world reports
/// radians.
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}
