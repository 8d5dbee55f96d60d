mod tests {
    use led_clock_composer::canvas::PixelBuffer;
    use led_clock_composer::color::{BLACK, RED, Rgb, YELLOW};
    use led_clock_composer::font::{CHAR_DASH, FONT};
    use led_clock_composer::layout::{
        MATRIX_CLOCK, MATRIX_CLOCK_LEDS, SEGMENT_CLOCK, SEGMENT_CLOCK_LEDS, SEGMENT_COUNT,
    };
    use led_clock_composer::segment::{PROGRESS_PATH, ProgressBar, progress_bars};
    use led_clock_composer::Error;

    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_write_digit_matches_font() {
        let mut buffer = PixelBuffer::<SEGMENT_CLOCK_LEDS>::new();
        for character in 0..FONT.len() as u8 {
            let mut canvas = buffer.canvas(&SEGMENT_CLOCK);
            canvas.write_digit(character, 1, RED).unwrap();

            for segment in 0..SEGMENT_COUNT {
                let lit = FONT[usize::from(character)] & (1 << segment) != 0;
                let expected = if lit { RED } else { BLACK };
                for index in SEGMENT_CLOCK.segment_pixels(1, segment).unwrap() {
                    assert_eq!(canvas.get(index), expected);
                }
            }
        }
    }

    #[test]
    fn test_write_digit_rejects_unknown_glyph() {
        let mut buffer = PixelBuffer::<SEGMENT_CLOCK_LEDS>::new();
        let mut canvas = buffer.canvas(&SEGMENT_CLOCK);
        canvas.write_digit(8, 0, BLUE).unwrap();

        assert_eq!(canvas.write_digit(19, 0, RED), Err(Error::UnknownGlyph(19)));
        assert_eq!(canvas.write_digit(255, 0, RED), Err(Error::UnknownGlyph(255)));
        for segment in 0..SEGMENT_COUNT {
            for index in SEGMENT_CLOCK.segment_pixels(0, segment).unwrap() {
                assert_eq!(canvas.get(index), BLUE);
            }
        }
    }

    #[test]
    fn test_write_digit_out_of_range_place() {
        let mut buffer = PixelBuffer::<SEGMENT_CLOCK_LEDS>::new();
        let mut canvas = buffer.canvas(&SEGMENT_CLOCK);
        assert_eq!(canvas.write_digit(1, 4, RED), Err(Error::DigitOutOfRange(4)));
    }

    #[test]
    fn test_write_all_digits_and_colon() {
        let mut buffer = PixelBuffer::<SEGMENT_CLOCK_LEDS>::new();
        let mut canvas = buffer.canvas(&SEGMENT_CLOCK);
        canvas.write_all_digits(CHAR_DASH, RED).unwrap();
        canvas.write_colon(BLUE);

        for place in 0..4 {
            for index in SEGMENT_CLOCK.segment_pixels(place, 3).unwrap() {
                assert_eq!(canvas.get(index), RED);
            }
            for index in SEGMENT_CLOCK.segment_pixels(place, 1).unwrap() {
                assert_eq!(canvas.get(index), BLACK);
            }
        }
        assert_eq!(canvas.get(84), BLUE);
        assert_eq!(canvas.get(85), BLUE);
    }

    #[test]
    fn test_sentinel_writes_only_touch_trash() {
        let mut buffer = PixelBuffer::<MATRIX_CLOCK_LEDS>::new();
        {
            let mut canvas = buffer.canvas(&MATRIX_CLOCK);
            canvas.set_xy(-1, 0, RED);
            canvas.set_xy(25, 4, RED);
            canvas.set_xy(3, 9, RED);
            canvas.set(MATRIX_CLOCK.sentinel(), RED);
        }
        assert!(buffer.pixels().iter().all(|&pixel| pixel == BLACK));
        assert_eq!(buffer.trash(), RED);
    }

    #[test]
    fn test_set_xy_without_matrix_is_discarded() {
        let mut buffer = PixelBuffer::<SEGMENT_CLOCK_LEDS>::new();
        {
            let mut canvas = buffer.canvas(&SEGMENT_CLOCK);
            canvas.set_xy(0, 0, RED);
        }
        assert!(buffer.pixels().iter().all(|&pixel| pixel == BLACK));
    }

    #[test]
    fn test_progress_bars() {
        assert_eq!(progress_bars(0), 0);
        assert_eq!(progress_bars(7), 0);
        assert_eq!(progress_bars(8), 1);
        assert_eq!(progress_bars(50), 7);
        assert_eq!(progress_bars(100), PROGRESS_PATH.len());
        assert_eq!(progress_bars(200), PROGRESS_PATH.len());

        let mut last = 0;
        for percentage in 0..=100 {
            let bars = progress_bars(percentage);
            assert!(bars >= last);
            last = bars;
        }
    }

    #[test]
    fn test_progress_bar_draw_and_dedupe() {
        let mut buffer = PixelBuffer::<SEGMENT_CLOCK_LEDS>::new();
        let mut bar = ProgressBar::new();

        let mut canvas = buffer.canvas(&SEGMENT_CLOCK);
        canvas.fill(BLUE);
        assert_eq!(bar.draw(&mut canvas, 50, YELLOW), Ok(true));
        assert_eq!(bar.draw(&mut canvas, 50, YELLOW), Ok(false));

        for (step, &(place, segment)) in PROGRESS_PATH.iter().enumerate() {
            let expected = if step < 7 { YELLOW } else { BLACK };
            for index in SEGMENT_CLOCK.segment_pixels(place, segment).unwrap() {
                assert_eq!(canvas.get(index), expected);
            }
        }
        assert_eq!(canvas.get(84), BLACK);

        assert_eq!(bar.draw(&mut canvas, 40, YELLOW), Ok(true));
        bar.reset();
        assert_eq!(bar.draw(&mut canvas, 40, YELLOW), Ok(true));
    }
}
