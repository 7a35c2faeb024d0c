//! The drawing boundary. A Surface is anything that can
//! fill a background and stroke lines and circles in pixel
//! coordinates: a window canvas, an image buffer, or the
//! [`SvgSurface`] provided here.
mod svg;

pub use svg::SvgSurface;

use pulsenet::colors::Color;

/// A point in pixel coordinates, origin at the top left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }
}

/// A 2D drawing target.
pub trait Surface {
    /// Width and height of the surface, in pixels.
    fn size(&self) -> (f32, f32);

    /// Fills the whole surface with `color`, discarding
    /// anything drawn before.
    fn clear(&mut self, color: Color);

    /// Strokes a straight line.
    fn line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Fills a circle.
    fn circle(&mut self, center: Point, radius: f32, color: Color);
}
