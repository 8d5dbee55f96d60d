mod tests {
    use led_clock_composer::Error;
    use led_clock_composer::layout::{
        ClockLayout, MATRIX_CLOCK, MATRIX_CLOCK_LEDS, SEGMENT_CLOCK, SEGMENT_CLOCK_LEDS,
        SEGMENT_COUNT,
    };

    /// Every pixel lit by any segment of any digit, in visiting order
    fn all_segment_pixels(layout: &ClockLayout) -> Vec<u16> {
        let mut pixels = Vec::new();
        for place in 0..layout.digit_count() as u8 {
            for segment in 0..SEGMENT_COUNT {
                pixels.extend(layout.segment_pixels(place, segment).unwrap());
            }
        }
        pixels
    }

    #[test]
    fn test_strip_segment_addressing() {
        let pixels: Vec<u16> = SEGMENT_CLOCK.segment_pixels(0, 0).unwrap().collect();
        assert_eq!(pixels, [0, 1, 2, 39, 40, 41]);

        let pixels: Vec<u16> = SEGMENT_CLOCK.segment_pixels(0, 6).unwrap().collect();
        assert_eq!(pixels, [18, 19, 20, 21, 22, 23]);

        let pixels: Vec<u16> = SEGMENT_CLOCK.segment_pixels(2, 3).unwrap().collect();
        assert_eq!(pixels, [95, 96, 97, 116, 117, 118]);
    }

    #[test]
    fn test_strip_segments_are_disjoint_and_cover_digits() {
        for place in 0..4 {
            for segment in 0..SEGMENT_COUNT {
                let count = SEGMENT_CLOCK.segment_pixels(place, segment).unwrap().count();
                assert_eq!(count, 6);
            }
        }

        let mut pixels = all_segment_pixels(&SEGMENT_CLOCK);
        pixels.extend_from_slice(SEGMENT_CLOCK.colon);
        pixels.sort_unstable();
        let expected: Vec<u16> = (0..SEGMENT_CLOCK_LEDS as u16).collect();
        assert_eq!(pixels, expected);
    }

    #[test]
    fn test_segment_pixels_out_of_range() {
        assert_eq!(
            SEGMENT_CLOCK.segment_pixels(4, 0).err(),
            Some(Error::DigitOutOfRange(4))
        );
        assert_eq!(
            SEGMENT_CLOCK.segment_pixels(0, 7).err(),
            Some(Error::SegmentOutOfRange(7))
        );
    }

    #[test]
    fn test_serpentine_matrix_index() {
        let matrix = MATRIX_CLOCK.matrix.unwrap();
        assert_eq!(matrix.width(), 25);
        assert_eq!(matrix.height(), 9);

        assert_eq!(matrix.index(0, 0), 0);
        assert_eq!(matrix.index(24, 0), 24);
        assert_eq!(matrix.index(0, 1), 49);
        assert_eq!(matrix.index(24, 1), 25);
        assert_eq!(matrix.index(0, 2), 50);
        assert_eq!(matrix.index(24, 8), 224);
    }

    #[test]
    fn test_matrix_out_of_bounds_is_sentinel() {
        let matrix = MATRIX_CLOCK.matrix.unwrap();
        let sentinel = MATRIX_CLOCK_LEDS as u16;
        assert_eq!(matrix.sentinel(), sentinel);
        assert_eq!(MATRIX_CLOCK.sentinel(), sentinel);

        assert_eq!(matrix.index(-1, 0), sentinel);
        assert_eq!(matrix.index(0, -1), sentinel);
        assert_eq!(matrix.index(25, 0), sentinel);
        assert_eq!(matrix.index(0, 9), sentinel);
    }

    #[test]
    fn test_matrix_cells_visit_every_led_once() {
        let matrix = MATRIX_CLOCK.matrix.unwrap();
        let mut indices: Vec<u16> = matrix.cells().map(|(x, y)| matrix.index(x, y)).collect();
        indices.sort_unstable();
        let expected: Vec<u16> = (0..MATRIX_CLOCK_LEDS as u16).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn test_matrix_glyph_segments() {
        for place in 0..4 {
            for segment in 0..SEGMENT_COUNT {
                let count = MATRIX_CLOCK.segment_pixels(place, segment).unwrap().count();
                assert_eq!(count, 3);
            }
        }

        let mut pixels = all_segment_pixels(&MATRIX_CLOCK);
        let total = pixels.len();
        assert!(pixels.iter().all(|&index| index < MATRIX_CLOCK_LEDS as u16));
        assert!(pixels.iter().all(|index| !MATRIX_CLOCK.colon.contains(index)));

        pixels.sort_unstable();
        pixels.dedup();
        assert_eq!(pixels.len(), total);
    }

    #[test]
    fn test_matrix_glyph_top_segment() {
        // Top bar of the rightmost digit, glyph origin at x = 20
        let pixels: Vec<u16> = MATRIX_CLOCK.segment_pixels(0, 1).unwrap().collect();
        assert_eq!(pixels, [21, 22, 23]);
    }
}
