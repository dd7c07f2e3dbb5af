//! The drawing surface: a pixel buffer, its pen, and the shape primitives.

use cairo::{Context, Format, ImageSurface};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::font;
use crate::pen::Pen;
use crate::pixmap::Pixmap;

/// A raster drawing surface with an associated [`Pen`].
///
/// Every primitive reads the pen's colors and width, renders into the
/// backing buffer, and commits immediately - there is no retained model and
/// no undo. The pen's position and direction are consulted only by turtle
/// movement ([`draw_forward`](Canvas::draw_forward)).
///
/// A `Canvas` is an ordinary caller-owned value; create as many independent
/// canvases as needed.
///
/// # Examples
///
/// ```no_run
/// use rasterpen::Canvas;
///
/// let mut canvas = Canvas::new(400, 300)?;
/// canvas.pen_mut().set_fill_color("burlywood")?;
/// canvas.pen_mut().set_outline_color("dark red")?;
/// canvas.pen_mut().set_width(8);
/// canvas.fill_rectangle(10, 30, 100, 200)?;
/// canvas.save("example.png")?;
/// # Ok::<(), rasterpen::Error>(())
/// ```
pub struct Canvas {
    surface: ImageSurface,
    pen: Pen,
    font_candidates: Vec<String>,
}

impl Canvas {
    /// Creates a canvas of the given size with a white buffer and a
    /// default pen.
    ///
    /// Zero dimensions fail with [`Error::InvalidArgument`].
    pub fn new(width: u32, height: u32) -> Result<Canvas> {
        let surface = Self::blank_surface(width, height)?;
        log::debug!("created {width}x{height} canvas");
        Ok(Canvas {
            surface,
            pen: Pen::new(),
            font_candidates: font::DEFAULT_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
    }

    /// Discards the buffer, replacing it with a blank one of the given
    /// size, and resets the pen to its defaults.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.surface = Self::blank_surface(width, height)?;
        self.pen = Pen::new();
        log::debug!("resized canvas to {width}x{height}");
        Ok(())
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    /// The canvas's pen.
    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    /// Mutable access to the canvas's pen.
    pub fn pen_mut(&mut self) -> &mut Pen {
        &mut self.pen
    }

    /// Replaces the ordered font candidate chain used by
    /// [`draw_text`](Canvas::draw_text).
    pub fn set_font_candidates<I, S>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.font_candidates = candidates.into_iter().map(Into::into).collect();
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    /// Draws a straight line from (x1, y1) to (x2, y2) in the outline
    /// color at the current pen width.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        self.line(x1 as f64, y1 as f64, x2 as f64, y2 as f64)
    }

    /// Draws the outline of an ellipse centered at (cx, cy) with
    /// horizontal radius `hrad` and vertical radius `vrad`.
    ///
    /// A zero radius draws nothing (the degenerate ellipse has no area to
    /// outline).
    pub fn draw_oval(&mut self, cx: i32, cy: i32, hrad: i32, vrad: i32) -> Result<()> {
        if hrad == 0 || vrad == 0 {
            return Ok(());
        }
        let ctx = self.geometry_context()?;
        ellipse_path(&ctx, cx, cy, hrad, vrad)?;
        self.stroke(&ctx)
    }

    /// Fills an ellipse with the fill color and strokes its outline in the
    /// outline color at the current pen width.
    ///
    /// A zero radius draws nothing, like [`draw_oval`](Canvas::draw_oval).
    pub fn fill_oval(&mut self, cx: i32, cy: i32, hrad: i32, vrad: i32) -> Result<()> {
        if hrad == 0 || vrad == 0 {
            return Ok(());
        }
        let ctx = self.geometry_context()?;
        ellipse_path(&ctx, cx, cy, hrad, vrad)?;
        self.fill_and_stroke(&ctx)
    }

    /// Draws the outline of a circle centered at (cx, cy) with radius `r`.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32) -> Result<()> {
        self.draw_oval(cx, cy, r, r)
    }

    /// Fills a circle and strokes its outline.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32) -> Result<()> {
        self.fill_oval(cx, cy, r, r)
    }

    /// Draws a portion of a circle between two angles, as a curved stroke
    /// only.
    ///
    /// Angles are in degrees, measured from the positive x-axis and
    /// sweeping toward positive y (clockwise on a top-left-origin raster).
    pub fn draw_arc(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        start_deg: f64,
        end_deg: f64,
    ) -> Result<()> {
        let ctx = self.geometry_context()?;
        arc_path(&ctx, cx, cy, radius, start_deg, end_deg);
        self.stroke(&ctx)
    }

    /// Draws an arc and closes its two endpoints with a straight segment.
    pub fn draw_chord(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        start_deg: f64,
        end_deg: f64,
    ) -> Result<()> {
        let ctx = self.geometry_context()?;
        arc_path(&ctx, cx, cy, radius, start_deg, end_deg);
        ctx.close_path();
        self.stroke(&ctx)
    }

    /// Fills the region enclosed by a chord with the fill color and
    /// strokes its boundary in the outline color.
    pub fn fill_chord(
        &mut self,
        cx: i32,
        cy: i32,
        radius: i32,
        start_deg: f64,
        end_deg: f64,
    ) -> Result<()> {
        let ctx = self.geometry_context()?;
        arc_path(&ctx, cx, cy, radius, start_deg, end_deg);
        ctx.close_path();
        self.fill_and_stroke(&ctx)
    }

    /// Draws the outline of an axis-aligned rectangle with corners (x, y)
    /// and (x + w, y + h).
    pub fn draw_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<()> {
        let ctx = self.geometry_context()?;
        rectangle_path(&ctx, x, y, w, h);
        self.stroke(&ctx)
    }

    /// Fills a rectangle with the fill color and strokes its outline.
    pub fn fill_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<()> {
        let ctx = self.geometry_context()?;
        rectangle_path(&ctx, x, y, w, h);
        self.fill_and_stroke(&ctx)
    }

    /// Draws the outline of a square with top-left corner (x, y).
    pub fn draw_square(&mut self, x: i32, y: i32, side: i32) -> Result<()> {
        self.draw_rectangle(x, y, side, side)
    }

    /// Fills a square and strokes its outline.
    pub fn fill_square(&mut self, x: i32, y: i32, side: i32) -> Result<()> {
        self.fill_rectangle(x, y, side, side)
    }

    /// Strokes a closed path connecting the vertices in order and closing
    /// back to the first vertex.
    ///
    /// An empty vertex list fails with [`Error::InvalidArgument`].
    pub fn draw_polygon(&mut self, vertices: &[(i32, i32)]) -> Result<()> {
        check_vertices(vertices)?;
        let ctx = self.geometry_context()?;
        polygon_path(&ctx, vertices);
        self.stroke(&ctx)
    }

    /// Fills a polygon's interior with the fill color, then strokes the
    /// closed boundary in the outline color.
    ///
    /// The fill pass paints the interior only; the boundary is produced by
    /// a second, independent stroke pass identical to
    /// [`draw_polygon`](Canvas::draw_polygon), so the outline is visible
    /// regardless of the fill color.
    pub fn fill_polygon(&mut self, vertices: &[(i32, i32)]) -> Result<()> {
        check_vertices(vertices)?;
        let ctx = self.geometry_context()?;
        polygon_path(&ctx, vertices);
        set_source(&ctx, self.pen.fill_color());
        ctx.fill()?;
        drop(ctx);
        self.draw_polygon(vertices)
    }

    /// Renders text with its top-left corner anchored at (x, y) in the
    /// outline color.
    ///
    /// The font family is the first installed candidate from the canvas's
    /// font chain (see [`set_font_candidates`](Canvas::set_font_candidates));
    /// if none is installed the call fails with
    /// [`Error::FontUnavailable`](crate::Error::FontUnavailable) before
    /// touching any pixel.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, font_size: f64) -> Result<()> {
        let family = font::resolve(&self.font_candidates)?;

        let ctx = self.context()?;
        ctx.set_antialias(cairo::Antialias::Best);

        let layout = pangocairo::functions::create_layout(&ctx);
        let mut desc = pango::FontDescription::new();
        desc.set_family(&family);
        desc.set_absolute_size(font_size * pango::SCALE as f64);
        layout.set_font_description(Some(&desc));
        layout.set_text(text);

        set_source(&ctx, self.pen.outline_color());
        ctx.move_to(x as f64, y as f64);
        pangocairo::functions::show_layout(&ctx, &layout);
        Ok(())
    }

    /// Pastes an image's full contents with its top-left corner at (x, y),
    /// overwriting destination pixels. Regions falling outside the canvas
    /// are clipped.
    pub fn draw_image(&mut self, x: i32, y: i32, image: &Pixmap) -> Result<()> {
        let src = surface_from_pixmap(image)?;
        let ctx = self.geometry_context()?;
        ctx.set_source_surface(&src, x as f64, y as f64)?;
        ctx.rectangle(
            x as f64,
            y as f64,
            image.width() as f64,
            image.height() as f64,
        );
        ctx.fill()?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Turtle movement
    // ------------------------------------------------------------------

    /// Draws a line from the pen's position along its direction for
    /// `distance` pixels, then moves the pen to the endpoint.
    ///
    /// The endpoint may be fractional; direction is read, never mutated.
    pub fn draw_forward(&mut self, distance: f64) -> Result<()> {
        let (sx, sy) = self.pen.position();
        let radians = self.pen.direction().to_radians();
        let ex = sx + radians.cos() * distance;
        let ey = sy + radians.sin() * distance;
        self.line(sx, sy, ex, ey)?;
        self.pen.move_to(ex, ey);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Buffer access
    // ------------------------------------------------------------------

    /// Copies the current buffer into a [`Pixmap`].
    ///
    /// This is the presentation boundary: a display surface (or a test)
    /// takes the snapshot and shows or inspects it.
    pub fn snapshot(&mut self) -> Result<Pixmap> {
        let (width, height) = (self.width(), self.height());
        let stride = self.surface.stride() as usize;
        self.surface.flush();

        let data = self.surface.data()?;
        let mut out = Pixmap::blank(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let off = y as usize * stride + x as usize * 4;
                let px = u32::from_ne_bytes([
                    data[off],
                    data[off + 1],
                    data[off + 2],
                    data[off + 3],
                ]);
                out.put(
                    x,
                    y,
                    Color::new(
                        ((px >> 16) & 0xFF) as u8,
                        ((px >> 8) & 0xFF) as u8,
                        (px & 0xFF) as u8,
                    ),
                );
            }
        }
        Ok(out)
    }

    /// Saves the current buffer to disk; the codec is chosen by file
    /// extension. Overwrites without confirmation.
    pub fn save(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.snapshot()?.save(path)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn blank_surface(width: u32, height: u32) -> Result<ImageSurface> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "canvas dimensions must be positive, got {width}x{height}"
            )));
        }
        let surface = ImageSurface::create(Format::Rgb24, width as i32, height as i32)?;
        let ctx = Context::new(&surface)?;
        ctx.set_source_rgb(1.0, 1.0, 1.0);
        ctx.paint()?;
        Ok(surface)
    }

    fn context(&self) -> Result<Context> {
        Ok(Context::new(&self.surface)?)
    }

    /// Context for shape primitives: antialiasing off so fills and thick
    /// strokes land on exact pixels.
    fn geometry_context(&self) -> Result<Context> {
        let ctx = self.context()?;
        ctx.set_antialias(cairo::Antialias::None);
        Ok(ctx)
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        let ctx = self.geometry_context()?;
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.move_to(x1, y1);
        ctx.line_to(x2, y2);
        self.stroke(&ctx)
    }

    /// Strokes the current path in the outline color at the pen width.
    /// A width of zero draws nothing.
    fn stroke(&self, ctx: &Context) -> Result<()> {
        if self.pen.width() == 0 {
            ctx.new_path();
            return Ok(());
        }
        set_source(ctx, self.pen.outline_color());
        ctx.set_line_width(self.pen.width() as f64);
        ctx.stroke()?;
        Ok(())
    }

    /// Fills the current path in the fill color, then strokes its boundary
    /// in the outline color.
    fn fill_and_stroke(&self, ctx: &Context) -> Result<()> {
        set_source(ctx, self.pen.fill_color());
        ctx.fill_preserve()?;
        self.stroke(ctx)
    }
}

fn set_source(ctx: &Context, color: Color) {
    ctx.set_source_rgb(
        color.r as f64 / 255.0,
        color.g as f64 / 255.0,
        color.b as f64 / 255.0,
    );
}

fn check_vertices(vertices: &[(i32, i32)]) -> Result<()> {
    if vertices.is_empty() {
        return Err(Error::InvalidArgument(
            "polygon requires at least one vertex".to_string(),
        ));
    }
    Ok(())
}

fn ellipse_path(ctx: &Context, cx: i32, cy: i32, hrad: i32, vrad: i32) -> Result<()> {
    ctx.save()?;
    ctx.translate(cx as f64, cy as f64);
    ctx.scale(hrad as f64, vrad as f64);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore()?;
    Ok(())
}

fn arc_path(ctx: &Context, cx: i32, cy: i32, radius: i32, start_deg: f64, end_deg: f64) {
    ctx.arc(
        cx as f64,
        cy as f64,
        radius as f64,
        start_deg.to_radians(),
        end_deg.to_radians(),
    );
}

fn rectangle_path(ctx: &Context, x: i32, y: i32, w: i32, h: i32) {
    // Normalize negative extents so (x, y)-(x+w, y+h) always describes
    // the same rectangle cairo expects.
    let (x0, w0) = if w >= 0 { (x, w) } else { (x + w, -w) };
    let (y0, h0) = if h >= 0 { (y, h) } else { (y + h, -h) };
    ctx.rectangle(x0 as f64, y0 as f64, w0 as f64, h0 as f64);
}

fn polygon_path(ctx: &Context, vertices: &[(i32, i32)]) {
    let (x0, y0) = vertices[0];
    ctx.move_to(x0 as f64, y0 as f64);
    for &(x, y) in &vertices[1..] {
        ctx.line_to(x as f64, y as f64);
    }
    ctx.close_path();
}

fn surface_from_pixmap(image: &Pixmap) -> Result<ImageSurface> {
    let (w, h) = (image.width(), image.height());
    let mut src = ImageSurface::create(Format::Rgb24, w as i32, h as i32)?;
    let stride = src.stride() as usize;
    {
        let mut data = src.data()?;
        for y in 0..h {
            for x in 0..w {
                let c = image.at(x, y);
                let px = ((c.r as u32) << 16) | ((c.g as u32) << 8) | (c.b as u32);
                let off = y as usize * stride + x as usize * 4;
                data[off..off + 4].copy_from_slice(&px.to_ne_bytes());
            }
        }
    }
    Ok(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};

    #[test]
    fn new_canvas_is_white_with_default_pen() {
        let mut canvas = Canvas::new(20, 10).unwrap();
        assert_eq!(canvas.width(), 20);
        assert_eq!(canvas.height(), 10);
        assert_eq!(canvas.pen().width(), 1);
        assert_eq!(canvas.pen().outline_color(), BLACK);

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(0, 0).unwrap(), WHITE);
        assert_eq!(snap.get_pixel(19, 9).unwrap(), WHITE);
    }

    #[test]
    fn zero_dimension_canvas_is_rejected() {
        assert!(matches!(Canvas::new(0, 5), Err(Error::InvalidArgument(_))));
        assert!(matches!(Canvas::new(5, 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn resize_replaces_buffer_and_resets_pen() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.pen_mut().set_width(7);
        canvas.pen_mut().set_outline_color("red").unwrap();
        canvas.draw_line(0, 5, 9, 5).unwrap();

        canvas.resize(6, 4).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (6, 4));
        assert_eq!(canvas.pen().width(), 1);
        assert_eq!(canvas.pen().outline_color(), BLACK);
        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(3, 2).unwrap(), WHITE);
    }

    #[test]
    fn draw_line_strokes_in_outline_color() {
        let mut canvas = Canvas::new(120, 120).unwrap();
        canvas.pen_mut().set_width(2);
        canvas.pen_mut().set_outline_color("red").unwrap();
        canvas.draw_line(10, 50, 90, 50).unwrap();

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(50, 50).unwrap(), Color::new(255, 0, 0));
        assert_eq!(snap.get_pixel(50, 49).unwrap(), Color::new(255, 0, 0));
        assert_eq!(snap.get_pixel(50, 60).unwrap(), WHITE);
    }

    #[test]
    fn fill_rectangle_paints_interior_and_outline() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.pen_mut().set_fill_color("blue").unwrap();
        canvas.pen_mut().set_outline_color("red").unwrap();
        canvas.pen_mut().set_width(2);
        canvas.fill_rectangle(10, 10, 50, 30).unwrap();

        let snap = canvas.snapshot().unwrap();
        // interior
        assert_eq!(snap.get_pixel(35, 25).unwrap(), Color::new(0, 0, 255));
        // left edge stroke (width 2 centered on x = 10)
        assert_eq!(snap.get_pixel(10, 25).unwrap(), Color::new(255, 0, 0));
        // outside
        assert_eq!(snap.get_pixel(70, 25).unwrap(), WHITE);
    }

    #[test]
    fn rectangle_with_negative_extent_normalizes() {
        let mut canvas = Canvas::new(60, 60).unwrap();
        canvas.pen_mut().set_fill_color("green").unwrap();
        canvas.pen_mut().set_width(0);
        canvas.fill_rectangle(40, 40, -20, -20).unwrap();

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(30, 30).unwrap(), Color::new(0, 255, 0));
    }

    #[test]
    fn fill_polygon_keeps_boundary_in_outline_color() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.pen_mut().set_fill_color("blue").unwrap();
        canvas.pen_mut().set_outline_color("red").unwrap();
        canvas.pen_mut().set_width(3);
        canvas
            .fill_polygon(&[(20, 20), (80, 20), (50, 70)])
            .unwrap();

        let snap = canvas.snapshot().unwrap();
        // boundary stroked over the fill
        assert_eq!(snap.get_pixel(50, 20).unwrap(), Color::new(255, 0, 0));
        // interior filled
        assert_eq!(snap.get_pixel(50, 35).unwrap(), Color::new(0, 0, 255));
    }

    #[test]
    fn empty_polygon_is_rejected_before_drawing() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        assert!(matches!(
            canvas.draw_polygon(&[]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            canvas.fill_polygon(&[]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn fill_circle_paints_center_and_rim() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.pen_mut().set_fill_color("green").unwrap();
        canvas.pen_mut().set_outline_color("black").unwrap();
        canvas.pen_mut().set_width(2);
        canvas.fill_circle(50, 50, 20).unwrap();

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(50, 50).unwrap(), Color::new(0, 255, 0));
        assert_eq!(snap.get_pixel(50, 30).unwrap(), BLACK);
        assert_eq!(snap.get_pixel(90, 90).unwrap(), WHITE);
    }

    #[test]
    fn draw_arc_strokes_curve_without_closing_segment() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.pen_mut().set_outline_color("red").unwrap();
        canvas.pen_mut().set_width(2);
        // lower semicircle from (80, 50) through (50, 80) to (20, 50)
        canvas.draw_arc(50, 50, 30, 0.0, 180.0).unwrap();

        let snap = canvas.snapshot().unwrap();
        // a point on the curve is stroked
        assert_eq!(snap.get_pixel(50, 80).unwrap(), Color::new(255, 0, 0));
        // the midpoint of the would-be chord stays untouched
        assert_eq!(snap.get_pixel(50, 50).unwrap(), WHITE);
    }

    #[test]
    fn draw_chord_strokes_curve_and_closing_segment() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.pen_mut().set_outline_color("red").unwrap();
        canvas.pen_mut().set_width(2);
        canvas.draw_chord(50, 50, 30, 0.0, 180.0).unwrap();

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(50, 80).unwrap(), Color::new(255, 0, 0));
        // the closing segment between the endpoints is stroked too
        assert_eq!(snap.get_pixel(50, 50).unwrap(), Color::new(255, 0, 0));
        // interior stays unfilled
        assert_eq!(snap.get_pixel(50, 65).unwrap(), WHITE);
    }

    #[test]
    fn zero_radius_oval_draws_nothing() {
        let mut canvas = Canvas::new(30, 30).unwrap();
        canvas.pen_mut().set_outline_color("red").unwrap();
        canvas.pen_mut().set_fill_color("blue").unwrap();
        canvas.draw_oval(15, 15, 0, 10).unwrap();
        canvas.fill_oval(15, 15, 10, 0).unwrap();

        let snap = canvas.snapshot().unwrap();
        for y in 0..30 {
            for x in 0..30 {
                assert_eq!(snap.get_pixel(x, y).unwrap(), WHITE);
            }
        }
    }

    #[test]
    fn fill_chord_fills_enclosed_region() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.pen_mut().set_fill_color("blue").unwrap();
        canvas.pen_mut().set_width(1);
        // lower semicircle: 0 deg to 180 deg sweeps through +y
        canvas.fill_chord(50, 50, 30, 0.0, 180.0).unwrap();

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(50, 65).unwrap(), Color::new(0, 0, 255));
        assert_eq!(snap.get_pixel(50, 35).unwrap(), WHITE);
    }

    #[test]
    fn draw_forward_moves_pen_and_draws() {
        let mut canvas = Canvas::new(200, 200).unwrap();
        canvas.pen_mut().set_position(100, 100);
        canvas.pen_mut().set_direction(0.0);
        canvas.pen_mut().set_width(2);
        canvas.draw_forward(10.0).unwrap();

        assert_eq!(canvas.pen().position(), (110.0, 100.0));
        assert_eq!(canvas.pen().direction(), 0.0);

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(105, 100).unwrap(), BLACK);
    }

    #[test]
    fn draw_forward_zero_distance_keeps_position() {
        let mut canvas = Canvas::new(50, 50).unwrap();
        canvas.pen_mut().set_position(25, 25);
        canvas.pen_mut().set_direction(123.0);
        canvas.draw_forward(0.0).unwrap();
        assert_eq!(canvas.pen().position(), (25.0, 25.0));
    }

    #[test]
    fn draw_image_pastes_and_clips() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        let mut img = Pixmap::blank(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                img.set_pixel(x, y, "red").unwrap();
            }
        }
        canvas.draw_image(2, 2, &img).unwrap();

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(2, 2).unwrap(), Color::new(255, 0, 0));
        assert_eq!(snap.get_pixel(3, 3).unwrap(), Color::new(255, 0, 0));
        assert_eq!(snap.get_pixel(1, 1).unwrap(), WHITE);
    }

    #[test]
    fn draw_image_overwrites_destination() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.pen_mut().set_fill_color("green").unwrap();
        canvas.pen_mut().set_width(0);
        canvas.fill_rectangle(0, 0, 10, 10).unwrap();

        let mut img = Pixmap::blank(2, 2).unwrap();
        img.set_pixel(0, 0, "blue").unwrap();
        canvas.draw_image(4, 4, &img).unwrap();

        let snap = canvas.snapshot().unwrap();
        assert_eq!(snap.get_pixel(4, 4).unwrap(), Color::new(0, 0, 255));
        // opaque paste: the image's white pixels overwrite the green fill
        assert_eq!(snap.get_pixel(5, 5).unwrap(), WHITE);
        assert_eq!(snap.get_pixel(2, 2).unwrap(), Color::new(0, 255, 0));
    }

    #[test]
    fn draw_text_with_missing_fonts_fails_cleanly() {
        let mut canvas = Canvas::new(50, 50).unwrap();
        canvas.set_font_candidates(["No Such Family 999"]);
        assert!(matches!(
            canvas.draw_text(5, 5, "hi", 12.0),
            Err(Error::FontUnavailable { .. })
        ));
        // nothing was drawn
        let snap = canvas.snapshot().unwrap();
        for y in 0..50 {
            for x in 0..50 {
                assert_eq!(snap.get_pixel(x, y).unwrap(), WHITE);
            }
        }
    }

    #[test]
    fn draw_text_uses_first_available_candidate() {
        let mut canvas = Canvas::new(120, 60).unwrap();
        match canvas.draw_text(5, 5, "Hello", 20.0) {
            Ok(()) => {
                // some glyph pixels should no longer be white
                let snap = canvas.snapshot().unwrap();
                let mut painted = 0;
                for y in 0..60 {
                    for x in 0..120 {
                        if snap.get_pixel(x, y).unwrap() != WHITE {
                            painted += 1;
                        }
                    }
                }
                assert!(painted > 0);
            }
            // hosts without either candidate font are acceptable
            Err(Error::FontUnavailable { .. }) => {}
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
}
