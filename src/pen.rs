//! Pen state: the mutable drawing attributes consulted by every primitive.

use crate::color::{self, Color, ColorSpec};
use crate::error::Result;

/// The pen's mutable drawing attributes.
///
/// Shape primitives read the colors and width; only turtle movement
/// ([`Canvas::draw_forward`](crate::Canvas::draw_forward)) consults the
/// position and direction. The position is stored as floating point because
/// trigonometric movement produces fractional endpoints, but external
/// positioning is integer-only.
#[derive(Clone, Debug, PartialEq)]
pub struct Pen {
    position: (f64, f64),
    /// Degrees, kept normalized to [0, 360).
    direction: f64,
    width: u32,
    fill: Color,
    outline: Color,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            position: (0.0, 0.0),
            direction: 0.0,
            width: 1,
            fill: color::WHITE,
            outline: color::BLACK,
        }
    }
}

impl Pen {
    /// Creates a pen with the default attributes: position (0, 0),
    /// direction 0, width 1, white fill, black outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the drawing position.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x as f64, y as f64);
    }

    /// Sets the x-coordinate of the position, leaving y unchanged.
    pub fn set_x(&mut self, x: i32) {
        self.position.0 = x as f64;
    }

    /// Sets the y-coordinate of the position, leaving x unchanged.
    pub fn set_y(&mut self, y: i32) {
        self.position.1 = y as f64;
    }

    /// Current drawing position. Fractional after turtle movement.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    /// Sets the drawing direction to `theta` degrees, normalized into
    /// [0, 360). Any real input is accepted, including negatives.
    pub fn set_direction(&mut self, theta: f64) {
        self.direction = theta.rem_euclid(360.0);
    }

    /// Rotates the drawing direction by `delta` degrees.
    ///
    /// Uses a true mathematical modulo so negative deltas wrap correctly:
    /// direction 10 rotated by -30 lands on 340.
    pub fn rotate(&mut self, delta: f64) {
        self.direction = (self.direction + delta).rem_euclid(360.0);
    }

    /// Current drawing direction in degrees, in [0, 360).
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Sets the stroke width in pixels.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Current stroke width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sets the fill color from any accepted color specification.
    pub fn set_fill_color(&mut self, spec: impl Into<ColorSpec>) -> Result<()> {
        self.fill = Color::parse(spec)?;
        Ok(())
    }

    /// Current fill color.
    pub fn fill_color(&self) -> Color {
        self.fill
    }

    /// Sets the outline color from any accepted color specification.
    pub fn set_outline_color(&mut self, spec: impl Into<ColorSpec>) -> Result<()> {
        self.outline = Color::parse(spec)?;
        Ok(())
    }

    /// Current outline color.
    pub fn outline_color(&self) -> Color {
        self.outline
    }

    /// Moves the position to the given (possibly fractional) point.
    /// Internal: turtle movement only.
    pub(crate) fn move_to(&mut self, x: f64, y: f64) {
        self.position = (x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use crate::error::Error;

    #[test]
    fn defaults_match_contract() {
        let pen = Pen::new();
        assert_eq!(pen.position(), (0.0, 0.0));
        assert_eq!(pen.direction(), 0.0);
        assert_eq!(pen.width(), 1);
        assert_eq!(pen.fill_color(), WHITE);
        assert_eq!(pen.outline_color(), BLACK);
    }

    #[test]
    fn direction_normalizes_into_range() {
        let mut pen = Pen::new();
        pen.set_direction(450.0);
        assert_eq!(pen.direction(), 90.0);
        pen.set_direction(-90.0);
        assert_eq!(pen.direction(), 270.0);
        pen.set_direction(360.0);
        assert_eq!(pen.direction(), 0.0);
    }

    #[test]
    fn negative_rotation_wraps() {
        let mut pen = Pen::new();
        pen.set_direction(10.0);
        pen.rotate(-30.0);
        assert_eq!(pen.direction(), 340.0);
        pen.rotate(30.0);
        assert_eq!(pen.direction(), 10.0);
    }

    #[test]
    fn single_axis_setters_leave_other_unchanged() {
        let mut pen = Pen::new();
        pen.set_position(3, 7);
        pen.set_x(12);
        assert_eq!(pen.position(), (12.0, 7.0));
        pen.set_y(-4);
        assert_eq!(pen.position(), (12.0, -4.0));
    }

    #[test]
    fn color_setters_reject_bad_specs() {
        let mut pen = Pen::new();
        assert!(matches!(
            pen.set_fill_color("no-such-color"),
            Err(Error::InvalidColorSpec(_))
        ));
        assert!(matches!(
            pen.set_outline_color((256, 0, 0)),
            Err(Error::ColorRange(..))
        ));
        // failed sets leave the previous colors in place
        assert_eq!(pen.fill_color(), WHITE);
        assert_eq!(pen.outline_color(), BLACK);
    }

    #[test]
    fn color_setters_accept_all_forms() {
        let mut pen = Pen::new();
        pen.set_fill_color("burlywood").unwrap();
        assert_eq!(pen.fill_color(), Color::new(222, 184, 135));
        pen.set_outline_color((95, 158, 160)).unwrap();
        assert_eq!(pen.outline_color(), Color::new(95, 158, 160));
        pen.set_outline_color("#FF802A").unwrap();
        assert_eq!(pen.outline_color(), Color::new(255, 128, 42));
    }
}
