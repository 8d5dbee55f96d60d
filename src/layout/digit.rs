use super::SEGMENT_COUNT;

/// Physical description of one seven-segment digit built from chained strips
///
/// The strips run through all seven segments and alternate direction, so strip
/// 0 visits segments 0..7 while strip 1 comes back through 6..=0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitDescriptor {
    /// Address of the first LED in the digit
    pub starting_index: u16,
    /// Number of parallel strips lighting each segment
    pub strips_per_segment: u8,
    /// Number of LEDs a strip contributes to one segment
    pub leds_per_strip: u8,
}

impl DigitDescriptor {
    pub const fn new(starting_index: u16, strips_per_segment: u8, leds_per_strip: u8) -> Self {
        Self {
            starting_index,
            strips_per_segment,
            leds_per_strip,
        }
    }

    /// Total LEDs owned by the digit
    #[allow(clippy::cast_possible_truncation)]
    pub const fn led_count(self) -> u16 {
        self.strips_per_segment as u16 * SEGMENT_COUNT as u16 * self.leds_per_strip as u16
    }

    /// One past the last LED owned by the digit
    pub const fn end_index(self) -> u16 {
        self.starting_index + self.led_count()
    }

    /// First LED of the run that `strip` contributes to `segment`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn run_start(self, strip: u8, segment: u8) -> u16 {
        let segments = SEGMENT_COUNT as u16;
        let run = if strip % 2 == 1 {
            (strip as u16 + 1) * segments - 1 - segment as u16
        } else {
            strip as u16 * segments + segment as u16
        };
        self.starting_index + run * self.leds_per_strip as u16
    }
}

/// Iterator over the LEDs of one segment of a strip-built digit
#[derive(Debug, Clone)]
pub struct StripPixels {
    digit: DigitDescriptor,
    segment: u8,
    strip: u8,
    offset: u8,
}

impl StripPixels {
    pub(crate) const fn new(digit: DigitDescriptor, segment: u8) -> Self {
        Self {
            digit,
            segment,
            strip: 0,
            offset: 0,
        }
    }
}

impl Iterator for StripPixels {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.strip >= self.digit.strips_per_segment || self.digit.leds_per_strip == 0 {
            return None;
        }

        let index = self.digit.run_start(self.strip, self.segment) + u16::from(self.offset);
        self.offset += 1;
        if self.offset == self.digit.leds_per_strip {
            self.offset = 0;
            self.strip += 1;
        }
        Some(index)
    }
}
