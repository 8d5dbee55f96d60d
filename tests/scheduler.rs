mod tests {
    use embassy_time::{Duration, Instant};
    use led_clock_composer::canvas::PixelBuffer;
    use led_clock_composer::color::{BLACK, GREEN};
    use led_clock_composer::layout::{MATRIX_CLOCK, MATRIX_CLOCK_LEDS};
    use led_clock_composer::program::{ClockColors, ProgramId};
    use led_clock_composer::scheduler::ProgramScheduler;
    use led_clock_composer::timezone::LocalTime;

    fn at(minute: u8, second: u8) -> Option<LocalTime> {
        Some(LocalTime {
            hour: 9,
            minute,
            second,
            abbrev: "CST",
        })
    }

    fn matrix_scheduler(surprise: bool) -> ProgramScheduler {
        ProgramScheduler::new(ClockColors::default(), 7, true, surprise)
    }

    #[test]
    fn test_selection_rules() {
        let mut scheduler = matrix_scheduler(false);
        assert_eq!(scheduler.active(), ProgramId::Clock);

        assert!(!scheduler.select(ProgramId::Clock));
        assert!(!scheduler.select_index(5));
        assert!(!scheduler.select_index(200));
        assert!(!scheduler.select_by_name("Fire"));
        assert!(!scheduler.select_by_name("lava"));
        assert_eq!(scheduler.active(), ProgramId::Clock);

        assert!(scheduler.select_by_name("fire"));
        assert_eq!(scheduler.active(), ProgramId::Fire);
        assert!(!scheduler.select_index(3));

        assert!(scheduler.select_index(4));
        assert_eq!(scheduler.active(), ProgramId::Plasma);
    }

    #[test]
    fn test_matrix_programs_need_a_matrix() {
        let mut scheduler = ProgramScheduler::new(ClockColors::default(), 7, false, true);
        assert!(!scheduler.surprise_enabled());
        for id in ProgramId::ALL {
            assert_eq!(scheduler.is_available(id), id == ProgramId::Clock);
        }
        assert!(!scheduler.select(ProgramId::Rainbow));
        assert!(!scheduler.select_by_name("matrix"));
        assert_eq!(scheduler.active(), ProgramId::Clock);
    }

    #[test]
    fn test_surprise_switch_and_switch_back() {
        let mut buffer = PixelBuffer::<MATRIX_CLOCK_LEDS>::new();
        let mut scheduler = matrix_scheduler(true);
        let mut now = Instant::from_secs(100);

        let mut canvas = buffer.canvas(&MATRIX_CLOCK);
        assert!(scheduler.tick(now, at(59, 58), &mut canvas));
        assert_eq!(scheduler.active(), ProgramId::Clock);

        now += Duration::from_secs(2);
        assert!(scheduler.tick(now, at(0, 0), &mut canvas));
        let surprise = scheduler.active();
        assert!(matches!(
            surprise,
            ProgramId::MatrixRain | ProgramId::Rainbow | ProgramId::Fire
        ));

        now += Duration::from_secs(9);
        scheduler.tick(now, at(0, 9), &mut canvas);
        assert_eq!(scheduler.active(), surprise);

        now += Duration::from_secs(1);
        assert!(scheduler.tick(now, at(0, 10), &mut canvas));
        assert_eq!(scheduler.active(), ProgramId::Clock);

        now += Duration::from_secs(1);
        scheduler.tick(now, at(0, 11), &mut canvas);
        assert_eq!(scheduler.active(), ProgramId::Clock);
    }

    #[test]
    fn test_surprise_never_picks_plasma() {
        for seed in 0..64 {
            let mut buffer = PixelBuffer::<MATRIX_CLOCK_LEDS>::new();
            let mut scheduler = ProgramScheduler::new(ClockColors::default(), seed, true, true);
            let mut canvas = buffer.canvas(&MATRIX_CLOCK);
            scheduler.tick(Instant::from_secs(1), at(0, 3), &mut canvas);
            assert_ne!(scheduler.active(), ProgramId::Clock);
            assert_ne!(scheduler.active(), ProgramId::Plasma);
        }
    }

    #[test]
    fn test_surprise_outside_top_of_hour() {
        let mut buffer = PixelBuffer::<MATRIX_CLOCK_LEDS>::new();
        let mut canvas = buffer.canvas(&MATRIX_CLOCK);

        let mut scheduler = matrix_scheduler(true);
        scheduler.tick(Instant::from_secs(1), at(1, 5), &mut canvas);
        assert_eq!(scheduler.active(), ProgramId::Clock);
        scheduler.tick(Instant::from_secs(2), None, &mut canvas);
        assert_eq!(scheduler.active(), ProgramId::Clock);

        let mut scheduler = matrix_scheduler(false);
        scheduler.tick(Instant::from_secs(1), at(0, 5), &mut canvas);
        assert_eq!(scheduler.active(), ProgramId::Clock);
    }

    #[test]
    fn test_first_frame_after_selection() {
        let mut buffer = PixelBuffer::<MATRIX_CLOCK_LEDS>::new();
        let mut canvas = buffer.canvas(&MATRIX_CLOCK);
        let mut scheduler = matrix_scheduler(false);
        let now = Instant::from_secs(10);

        assert!(scheduler.tick(now, at(30, 0), &mut canvas));
        // Clock repaints once per second
        assert!(!scheduler.tick(now + Duration::from_millis(100), at(30, 0), &mut canvas));

        assert!(scheduler.select(ProgramId::Rainbow));
        assert!(scheduler.tick(now + Duration::from_millis(110), at(30, 0), &mut canvas));
        assert!(!scheduler.tick(now + Duration::from_millis(115), at(30, 0), &mut canvas));
        assert!(scheduler.tick(now + Duration::from_millis(130), at(30, 0), &mut canvas));
    }

    #[test]
    fn test_unsynced_clock_blanks_stale_animation() {
        let mut buffer = PixelBuffer::<MATRIX_CLOCK_LEDS>::new();
        let mut canvas = buffer.canvas(&MATRIX_CLOCK);
        let mut scheduler = matrix_scheduler(false);
        let now = Instant::from_secs(10);

        // A status screen drawn before the clock ever ran is left alone
        canvas.fill(GREEN);
        assert!(!scheduler.tick(now, None, &mut canvas));
        assert!(canvas.pixels().iter().all(|&pixel| pixel == GREEN));

        assert!(scheduler.select(ProgramId::Fire));
        assert!(scheduler.tick(now + Duration::from_millis(10), None, &mut canvas));

        assert!(scheduler.select(ProgramId::Clock));
        assert!(scheduler.tick(now + Duration::from_millis(20), None, &mut canvas));
        assert!(canvas.pixels().iter().all(|&pixel| pixel == BLACK));
        assert!(!scheduler.tick(now + Duration::from_millis(30), None, &mut canvas));

        // The first synced frame is still a full repaint
        assert!(scheduler.tick(now + Duration::from_millis(40), at(30, 1), &mut canvas));
    }
}
