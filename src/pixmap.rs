//! Addressable off-screen images with per-pixel access and file I/O.

use std::path::Path;

use crate::color::{self, Channel, Color, ColorSpec};
use crate::error::{Error, Result};

/// An addressable width x height grid of RGB pixels.
///
/// Independent of any canvas: create one blank, load one from disk, poke
/// pixels, then save it or paste it onto a [`Canvas`](crate::Canvas) with
/// [`draw_image`](crate::Canvas::draw_image). Pixels never store
/// transparency; images with an alpha channel are flattened onto opaque
/// white at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    /// Row-major, `width * height` entries.
    pixels: Vec<Color>,
}

impl Pixmap {
    /// Creates a blank image with every pixel set to white.
    ///
    /// Zero dimensions fail with [`Error::InvalidArgument`], as do
    /// dimensions whose pixel count exceeds the addressable range.
    pub fn blank(width: u32, height: u32) -> Result<Pixmap> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidArgument(format!(
                "image dimensions must be positive, got {width}x{height}"
            )));
        }
        // Coordinates are i32, so anything past i32::MAX pixels could
        // never be addressed anyway.
        if width as u64 * height as u64 > i32::MAX as u64 {
            return Err(Error::InvalidArgument(format!(
                "image dimensions {width}x{height} exceed addressable size"
            )));
        }
        Ok(Pixmap {
            width,
            height,
            pixels: vec![color::WHITE; width as usize * height as usize],
        })
    }

    /// Loads an image from disk; the codec is chosen by file extension.
    ///
    /// Sources with an alpha channel are composited over an opaque white
    /// background, discarding transparency. All other pixel formats are
    /// converted to 8-bit RGB directly.
    pub fn load(path: impl AsRef<Path>) -> Result<Pixmap> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let pixmap = if decoded.color().has_alpha() {
            Self::flatten_over_white(&decoded.to_rgba8())
        } else {
            Self::from_rgb(&decoded.to_rgb8())
        };
        log::debug!(
            "loaded {}x{} image from {}",
            pixmap.width,
            pixmap.height,
            path.display()
        );
        Ok(pixmap)
    }

    /// Saves the image to disk; the codec is chosen by file extension.
    ///
    /// Overwrites any existing file at the path without confirmation.
    /// Round-tripping through `save` then [`load`](Pixmap::load) is
    /// pixel-exact for lossless formats such as PNG.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = image::RgbImage::new(self.width, self.height);
        for (i, color) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            out.put_pixel(x, y, image::Rgb([color.r, color.g, color.b]));
        }
        out.save(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Number of pixels in each row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of pixels in each column.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel at (x, y).
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Color> {
        Ok(self.pixels[self.index(x, y)?])
    }

    /// Sets the pixel at (x, y) from any accepted color specification.
    pub fn set_pixel(&mut self, x: i32, y: i32, spec: impl Into<ColorSpec>) -> Result<()> {
        let color = Color::parse(spec)?;
        let i = self.index(x, y)?;
        self.pixels[i] = color;
        Ok(())
    }

    /// Red value of the pixel at (x, y).
    pub fn red(&self, x: i32, y: i32) -> Result<u8> {
        Ok(self.get_pixel(x, y)?.channel(Channel::Red))
    }

    /// Green value of the pixel at (x, y).
    pub fn green(&self, x: i32, y: i32) -> Result<u8> {
        Ok(self.get_pixel(x, y)?.channel(Channel::Green))
    }

    /// Blue value of the pixel at (x, y).
    pub fn blue(&self, x: i32, y: i32) -> Result<u8> {
        Ok(self.get_pixel(x, y)?.channel(Channel::Blue))
    }

    /// Replaces the red value of the pixel at (x, y), preserving the
    /// other channels.
    pub fn set_red(&mut self, x: i32, y: i32, value: i32) -> Result<()> {
        self.set_channel(x, y, Channel::Red, value)
    }

    /// Replaces the green value of the pixel at (x, y), preserving the
    /// other channels.
    pub fn set_green(&mut self, x: i32, y: i32, value: i32) -> Result<()> {
        self.set_channel(x, y, Channel::Green, value)
    }

    /// Replaces the blue value of the pixel at (x, y), preserving the
    /// other channels.
    pub fn set_blue(&mut self, x: i32, y: i32, value: i32) -> Result<()> {
        self.set_channel(x, y, Channel::Blue, value)
    }

    /// Read-modify-write of a single channel. Not atomic: a concurrent
    /// write to the same pixel between the read and the write is out of
    /// contract.
    fn set_channel(&mut self, x: i32, y: i32, channel: Channel, value: i32) -> Result<()> {
        let i = self.index(x, y)?;
        let current = self.pixels[i];
        let (mut r, mut g, mut b) = (current.r as i32, current.g as i32, current.b as i32);
        match channel {
            Channel::Red => r = value,
            Channel::Green => g = value,
            Channel::Blue => b = value,
        }
        self.pixels[i] = color::rgb(r, g, b)?;
        Ok(())
    }

    /// Direct unchecked-by-parse write used by canvas snapshots.
    pub(crate) fn put(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    /// Direct in-bounds read used when pasting onto a canvas.
    pub(crate) fn at(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    fn from_rgb(rgb: &image::RgbImage) -> Pixmap {
        let pixels = rgb
            .pixels()
            .map(|p| Color::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        Pixmap {
            width: rgb.width(),
            height: rgb.height(),
            pixels,
        }
    }

    fn flatten_over_white(rgba: &image::RgbaImage) -> Pixmap {
        let blend = |c: u8, a: u8| -> u8 {
            let c = c as u32;
            let a = a as u32;
            ((c * a + 255 * (255 - a) + 127) / 255) as u8
        };
        let pixels = rgba
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                Color::new(blend(r, a), blend(g, a), blend(b, a))
            })
            .collect();
        Pixmap {
            width: rgba.width(),
            height: rgba.height(),
            pixels,
        }
    }
}
