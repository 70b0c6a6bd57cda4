use std::f32::consts::PI;

/// One minute position of arc, also one second of the second hand.
pub const TICK: f32 = PI / 30.0;

pub const HALF_PI: f32 = 0.5 * PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    // Point at `radius` along `angle`, with the axis flip that puts
    // angle π/2 at 12 o'clock in screen coordinates.
    pub fn on_dial(self, radius: f32, angle: f32) -> Self {
        Self {
            x: self.x - radius * angle.cos(),
            y: self.y - radius * angle.sin(),
        }
    }

    // Distance from this point to another
    pub fn distance_to(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    // Convert to pixel coordinates
    pub fn as_coords(self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

pub struct Angle;

// Angles in radians; π/2 is 12 o'clock, advancing clockwise around the dial.
impl Angle {
    pub fn tick(index: u32) -> f32 {
        HALF_PI + index as f32 * TICK
    }

    pub fn second(second: u32) -> f32 {
        HALF_PI + second as f32 * TICK
    }

    pub fn minute(minute: u32, second: u32) -> f32 {
        HALF_PI + minute as f32 * TICK + second as f32 * TICK / 60.0
    }

    pub fn hour(hour: u32, minute: u32) -> f32 {
        HALF_PI + (hour % 12) as f32 * TICK * 5.0 + minute as f32 * TICK / 12.0
    }
}
