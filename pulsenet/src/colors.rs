//! Display colors derived from weights and strengths.

/// Opacity of anything attached to a node of zero strength.
pub const MIN_ALPHA: f32 = 0.2;

/// A straight (non-premultiplied) RGBA color with
/// channels in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Color {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns the color of an edge with the given weight
    /// leaving a node with the given strength.
    ///
    /// Positive weights fade from white to green and negative
    /// weights from white to red as their magnitude grows. A zero
    /// weight is fully transparent, whatever the source strength.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::colors::Color;
    ///
    /// let excitatory = Color::for_edge(0.75, 1.0);
    /// assert!(excitatory.green > excitatory.red);
    ///
    /// let inhibitory = Color::for_edge(-0.75, 1.0);
    /// assert!(inhibitory.red > inhibitory.green);
    ///
    /// assert_eq!(Color::for_edge(0.0, 1.0), Color::TRANSPARENT);
    /// ```
    pub fn for_edge(weight: f32, source_strength: f32) -> Color {
        let alpha = strength_alpha(source_strength);
        if weight > 0.0 {
            Color::rgba(1.0 - weight, 1.0, 1.0 - weight, alpha)
        } else if weight < 0.0 {
            Color::rgba(1.0, 1.0 + weight, 1.0 + weight, alpha)
        } else {
            Color::TRANSPARENT
        }
    }

    /// Returns the color of a node with the given strength:
    /// white, growing more opaque with strength.
    pub fn for_node(strength: f32) -> Color {
        Color::rgba(1.0, 1.0, 1.0, strength_alpha(strength))
    }

    /// Whether drawing this color would leave any mark.
    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    /// The color channels as 8-bit values, alpha excluded.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.red, self.green, self.blue].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

/// Opacity for a given strength, scaling linearly from
/// [`MIN_ALPHA`] at 0 to fully opaque at 1.
///
/// Strengths are not bounded by activation, so the
/// result is clamped into `[0.0, 1.0]`.
pub fn strength_alpha(strength: f32) -> f32 {
    (MIN_ALPHA + (1.0 - MIN_ALPHA) * strength).clamp(0.0, 1.0)
}
