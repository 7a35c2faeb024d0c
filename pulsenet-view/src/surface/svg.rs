use super::{Point, Surface};

use pulsenet::colors::Color;

/// A surface recording one frame as an SVG document.
///
/// Each [`clear`](Surface::clear) starts a new frame.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
}

impl SvgSurface {
    /// Creates an empty surface of the given pixel size.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::colors::Color;
    /// use pulsenet_view::surface::{Point, Surface, SvgSurface};
    ///
    /// let mut surface = SvgSurface::new(100.0, 50.0);
    /// surface.clear(Color::BLACK);
    /// surface.circle(Point::new(10.0, 10.0), 4.0, Color::WHITE);
    ///
    /// let svg = surface.finish();
    /// assert!(svg.contains(r#"<circle cx="10" cy="10" r="4""#));
    /// ```
    pub fn new(width: f32, height: f32) -> SvgSurface {
        SvgSurface {
            width,
            height,
            body: String::new(),
        }
    }

    /// Number of shapes drawn in the current frame,
    /// background included.
    pub fn shape_count(&self) -> usize {
        self.body.lines().count()
    }

    /// Returns the current frame as a complete SVG document.
    pub fn finish(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    fn push(&mut self, shape: String) {
        self.body.push_str(&shape);
        self.body.push('\n');
    }
}

/// Formats a color as an SVG paint attribute and its opacity.
fn paint(attribute: &str, color: Color) -> String {
    let [r, g, b] = color.to_rgb8();
    format!(
        "{a}=\"rgb({r},{g},{b})\" {a}-opacity=\"{o:.3}\"",
        a = attribute,
        r = r,
        g = g,
        b = b,
        o = color.alpha
    )
}

impl Surface for SvgSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.body.clear();
        let shape = format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" {}/>",
            self.width,
            self.height,
            paint("fill", color)
        );
        self.push(shape);
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.push(format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} stroke-width=\"{}\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            paint("stroke", color),
            width
        ));
    }

    fn circle(&mut self, center: Point, radius: f32, color: Color) {
        self.push(format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            center.x,
            center.y,
            radius,
            paint("fill", color)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_starts_new_frame() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        surface.clear(Color::BLACK);
        surface.line(
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Color::WHITE,
            2.0,
        );
        assert_eq!(surface.shape_count(), 2);
        surface.clear(Color::BLACK);
        assert_eq!(surface.shape_count(), 1);
    }

    #[test]
    fn line_markup() {
        let mut surface = SvgSurface::new(10.0, 10.0);
        surface.line(
            Point::new(1.0, 2.0),
            Point::new(3.5, 4.0),
            Color::rgba(0.0, 1.0, 0.0, 0.5),
            2.0,
        );
        assert_eq!(
            surface.finish().lines().nth(1).unwrap(),
            r#"<line x1="1" y1="2" x2="3.5" y2="4" stroke="rgb(0,255,0)" stroke-opacity="0.500" stroke-width="2"/>"#
        );
    }

    #[test]
    fn background_markup() {
        let mut surface = SvgSurface::new(640.0, 480.0);
        surface.clear(Color::BLACK);
        let svg = surface.finish();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="640" height="480""#));
        assert!(svg.contains(
            r#"<rect x="0" y="0" width="640" height="480" fill="rgb(0,0,0)" fill-opacity="1.000"/>"#
        ));
        assert!(svg.ends_with("</svg>\n"));
    }
}
