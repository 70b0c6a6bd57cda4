mod app;
mod canvas;
pub mod clock;
pub mod geometry;
mod registry;
pub mod scene;
mod theme;
pub mod wayland;

pub use app::{RunState, WallClock, is_quit_key};
pub use canvas::Canvas;
pub use theme::{Bgra, Theme};

/// Surface dimensions: a 700-pixel square dial area plus the text panel.
pub const WIDTH: i32 = 1200;
pub const HEIGHT: i32 = 700;
