use crate::color::{Rgb, blend_colors, rgb_from_u32};

/// Create a palette from a list of hex colors (0xRRGGBB format)
macro_rules! hex_palette {
    ($($color:expr),*) => {
        [
            $(rgb_from_u32($color)),*
        ]
    };
}

// Black body ramp used by the fire program
#[allow(clippy::unreadable_literal)]
pub const HEAT_PALETTE: [Rgb; 6] = hex_palette![
    0x000000, // Cold
    0x800000, // Embers
    0xFF0000, // Red
    0xFF6600, // Orange
    0xFFCC00, // Yellow
    0xFFFFCC  // White hot
];

/// Sample a palette at position t (0-255), blending neighbouring entries
#[allow(clippy::cast_possible_truncation)]
pub fn sample_palette(palette: &[Rgb], t: u8) -> Rgb {
    let segments = palette.len().saturating_sub(1);
    if segments == 0 {
        return palette.first().copied().unwrap_or_default();
    }

    let scaled = u16::from(t) * (segments as u16); // 0..255*(N-1)
    let segment = (scaled >> 8).min(segments.saturating_sub(1) as u16) as usize;
    let local_t = (scaled & 0xFF) as u8;

    blend_colors(palette[segment], palette[segment + 1], local_t)
}
