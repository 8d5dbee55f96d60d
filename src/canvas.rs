//! Frame storage.
//!
//! [`PixelBuffer`] owns one color per physical LED plus a trash pixel. Any
//! write at or past the LED count, including the matrix sentinel, lands in the
//! trash pixel and never reaches the output.

use crate::color::{BLACK, Rgb};
use crate::layout::{ClockLayout, MatrixMap};

#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
    trash: Rgb,
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelBuffer<N> {
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; N],
            trash: BLACK,
        }
    }

    /// Visible pixels, in physical order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Last color written out of range
    pub const fn trash(&self) -> Rgb {
        self.trash
    }

    /// Borrow the buffer for drawing against `layout`
    pub fn canvas(&mut self, layout: &'static ClockLayout) -> Canvas<'_> {
        Canvas {
            pixels: &mut self.pixels,
            trash: &mut self.trash,
            layout,
        }
    }
}

/// Drawing surface over a [`PixelBuffer`]
pub struct Canvas<'a> {
    pixels: &'a mut [Rgb],
    trash: &'a mut Rgb,
    layout: &'static ClockLayout,
}

impl Canvas<'_> {
    pub const fn layout(&self) -> &'static ClockLayout {
        self.layout
    }

    pub const fn matrix(&self) -> Option<MatrixMap> {
        self.layout.matrix
    }

    pub fn pixels(&self) -> &[Rgb] {
        self.pixels
    }

    pub fn set(&mut self, index: u16, color: Rgb) {
        match self.pixels.get_mut(usize::from(index)) {
            Some(pixel) => *pixel = color,
            None => *self.trash = color,
        }
    }

    pub fn get(&self, index: u16) -> Rgb {
        self.pixels
            .get(usize::from(index))
            .copied()
            .unwrap_or(*self.trash)
    }

    /// Write through the coordinate table; without a matrix the write is
    /// discarded into the trash pixel
    pub fn set_xy(&mut self, x: i16, y: i16, color: Rgb) {
        let index = self.xy(x, y);
        self.set(index, color);
    }

    pub fn get_xy(&self, x: i16, y: i16) -> Rgb {
        self.get(self.xy(x, y))
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Apply `f` to every visible pixel
    pub fn map_pixels(&mut self, mut f: impl FnMut(Rgb) -> Rgb) {
        for pixel in self.pixels.iter_mut() {
            *pixel = f(*pixel);
        }
    }

    fn xy(&self, x: i16, y: i16) -> u16 {
        match self.layout.matrix {
            Some(matrix) => matrix.index(x, y),
            None => self.layout.sentinel(),
        }
    }
}
