//! Stateful pen-and-canvas 2D raster drawing.
//!
//! A [`Canvas`] owns a pixel buffer and a [`Pen`]; callers mutate the pen's
//! attributes (position, direction, width, fill/outline colors) and invoke
//! primitives that render immediately into the buffer. [`Pixmap`] provides
//! independent off-screen images with per-pixel access and file I/O.
//!
//! # Examples
//!
//! ```no_run
//! use rasterpen::Canvas;
//!
//! let mut canvas = Canvas::new(400, 300)?;
//! canvas.draw_text(200, 20, "A fun little picture!", 16.0)?;
//! canvas.pen_mut().set_fill_color("burlywood")?;
//! canvas.pen_mut().set_outline_color("dark red")?;
//! canvas.pen_mut().set_width(8);
//!
//! canvas.fill_rectangle(10, 30, 100, 200)?;
//! canvas.pen_mut().set_outline_color("green")?;
//! canvas.draw_square(20, 40, 100)?;
//!
//! canvas.pen_mut().set_position(100, 150);
//! canvas.pen_mut().set_outline_color("purple")?;
//! canvas.pen_mut().set_direction(0.0);
//! for distance in [100.0, 75.0, 50.0, 25.0, 12.0] {
//!     canvas.draw_forward(distance)?;
//!     canvas.pen_mut().rotate(30.0);
//! }
//!
//! canvas.pen_mut().set_width(2);
//! canvas.pen_mut().set_outline_color("aquamarine")?;
//! canvas.draw_polygon(&[(200, 100), (250, 100), (225, 150)])?;
//!
//! canvas.save("example.png")?;
//! # Ok::<(), rasterpen::Error>(())
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod font;
pub mod pen;
pub mod pixmap;

pub use canvas::Canvas;
pub use color::{Color, ColorSpec};
pub use error::{Error, Result};
pub use pen::Pen;
pub use pixmap::Pixmap;

// Re-export color constants for the public API
pub use color::{BLACK, BLUE, GREEN, RED, WHITE};
