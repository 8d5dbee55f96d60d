//! Coordinate table for matrix-addressed layouts.
//!
//! Every (x, y) resolves to a physical LED index through a precomputed table.
//! Coordinates outside the grid resolve to the sentinel, an index one past the
//! last visible LED, so a stray draw lands in the trash pixel instead of the
//! visible frame.

/// Precomputed mapping from grid coordinates to physical LED indices
#[derive(Debug, Clone, Copy)]
pub struct MatrixMap {
    width: u8,
    height: u8,
    table: &'static [u16],
    sentinel: u16,
}

impl MatrixMap {
    /// Create a map over a row-major `table` of `width * height` entries
    pub const fn new(width: u8, height: u8, table: &'static [u16], sentinel: u16) -> Self {
        assert!(
            table.len() == width as usize * height as usize,
            "matrix table must have width * height entries"
        );
        Self {
            width,
            height,
            table,
            sentinel,
        }
    }

    pub const fn width(&self) -> u8 {
        self.width
    }

    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Index that out-of-range coordinates resolve to
    pub const fn sentinel(&self) -> u16 {
        self.sentinel
    }

    /// Physical index of (x, y), or the sentinel when outside the grid
    #[allow(clippy::cast_sign_loss)]
    pub const fn index(&self, x: i16, y: i16) -> u16 {
        if x < 0 || y < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return self.sentinel;
        }
        self.table[y as usize * self.width as usize + x as usize]
    }

    /// Iterate every in-bounds coordinate, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + use<> {
        let width = i16::from(self.width);
        let height = i16::from(self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}

/// Build a row-major serpentine table: even rows run left to right, odd rows
/// right to left.
#[allow(clippy::cast_possible_truncation)]
pub const fn serpentine_rows<const CELLS: usize>(width: u8) -> [u16; CELLS] {
    assert!(width > 0, "matrix width must be non-zero");
    assert!(CELLS % width as usize == 0, "cells must fill whole rows");
    assert!(CELLS <= u16::MAX as usize, "matrix must fit u16 indices");

    let width = width as usize;
    let mut table = [0u16; CELLS];
    let mut cell = 0;
    while cell < CELLS {
        let y = cell / width;
        let x = cell % width;
        let led = if y % 2 == 0 {
            cell
        } else {
            y * width + (width - 1 - x)
        };
        table[cell] = led as u16;
        cell += 1;
    }
    table
}

/// Grid cell of pixel `i` of `segment` within a glyph of `length`-pixel
/// segments, relative to the glyph's top-left corner.
///
/// A glyph is `length + 2` wide and `2 * length + 3` tall.
pub const fn glyph_cell(segment: u8, i: u8, length: u8) -> (u8, u8) {
    match segment {
        0 => (length + 1, 1 + i),
        1 => (1 + i, 0),
        2 => (0, 1 + i),
        3 => (1 + i, length + 1),
        4 => (length + 1, length + 2 + i),
        5 => (1 + i, 2 * length + 2),
        _ => (0, length + 2 + i),
    }
}
