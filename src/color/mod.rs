mod palette;
mod utils;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use palette::{HEAT_PALETTE, sample_palette};
pub use utils::{blend_colors, fade, hsv, hsv2rgb, is_black, rgb_from_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 128, b: 0 };
pub const YELLOW: Rgb = Rgb { r: 255, g: 255, b: 0 };
