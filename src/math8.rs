//! 8-bit fixed-point helpers in the spirit of `FastLED`'s `lib8tion`.

use core::f32::consts::TAU;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Blend two 8-bit values
#[inline]
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub const fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let delta = b as i16 - a as i16;

    let mut partial: u32 = (a as u32) << 16;
    partial = partial.wrapping_add(
        (delta as u32)
            .wrapping_mul(amount_of_b as u32)
            .wrapping_mul(257),
    );
    partial = partial.wrapping_add(0x8000);

    (partial >> 16) as u8
}

/// Ease in out quadratic
pub const fn ease_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj = scale8(j, j);
    let jj2 = jj << 1;
    if i & 0x80 == 0 { jj2 } else { 255 - jj2 }
}

/// Sine of an 8-bit angle (256 = full turn), mapped to 0-255
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sin8(theta: u8) -> u8 {
    let radians = f32::from(theta) * TAU / 256.0;
    libm::roundf(128.0 + 127.0 * libm::sinf(radians)) as u8
}

/// Cosine of an 8-bit angle (256 = full turn), mapped to 0-255
pub fn cos8(theta: u8) -> u8 {
    sin8(theta.wrapping_add(64))
}

/// Cosine of a 16-bit angle (65536 = full turn), in -32767..=32767
#[allow(clippy::cast_possible_truncation)]
pub fn cos16(theta: u16) -> i16 {
    let radians = f32::from(theta) * TAU / 65536.0;
    libm::roundf(32767.0 * libm::cosf(radians)) as i16
}
