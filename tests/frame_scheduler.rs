mod tests {
    use embassy_time::{Duration, Instant};
    use led_clock_composer::color::Rgb;
    use led_clock_composer::engine::ClockEngine;
    use led_clock_composer::event::{ClockEvent, EventChannel, OtaError};
    use led_clock_composer::frame_scheduler::FrameScheduler;
    use led_clock_composer::layout::{SEGMENT_CLOCK, SEGMENT_CLOCK_LEDS};
    use led_clock_composer::settings::SettingsStore;
    use led_clock_composer::time_sync::TimeSource;
    use led_clock_composer::timezone::UnixSeconds;
    use led_clock_composer::{EngineConfig, Error, OutputDriver, Result};

    #[derive(Default)]
    struct CountingDriver {
        writes: usize,
    }

    impl OutputDriver for CountingDriver {
        fn write(&mut self, _colors: &[Rgb], _brightness: u8) {
            self.writes += 1;
        }
    }

    struct EmptyStore;

    impl SettingsStore for EmptyStore {
        fn load<'b>(&mut self, _buf: &'b mut [u8]) -> Result<&'b [u8]> {
            Err(Error::Storage)
        }

        fn save(&mut self, _json: &[u8]) -> Result<()> {
            Ok(())
        }
    }

    struct Offline;

    impl TimeSource for Offline {
        fn fetch(&mut self) -> Option<UnixSeconds> {
            None
        }
    }

    fn engine() -> ClockEngine<CountingDriver, EmptyStore, SEGMENT_CLOCK_LEDS> {
        let config = EngineConfig::for_layout(&SEGMENT_CLOCK);
        ClockEngine::new(CountingDriver::default(), EmptyStore, &config).unwrap()
    }

    #[test]
    fn test_tick_paces_the_loop() {
        let events = EventChannel::<4>::new();
        let mut scheduler = FrameScheduler::new(engine(), Offline, events.receiver());

        let start = Instant::from_millis(1000);
        let result = scheduler.tick(start);
        // Far behind the initial deadline: the backlog is dropped
        assert_eq!(result.next_deadline, start + Duration::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
        assert!(!result.restart);

        let result = scheduler.tick(start + Duration::from_millis(4));
        assert_eq!(result.next_deadline, start + Duration::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(16));

        // Behind schedule but within the drift limit: no sleep
        let result = scheduler.tick(start + Duration::from_millis(35));
        assert_eq!(result.next_deadline, start + Duration::from_millis(30));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_tick_yields_after_flush() {
        let events = EventChannel::<4>::new();
        let mut scheduler = FrameScheduler::new(engine(), Offline, events.receiver());
        let start = Instant::from_millis(1000);
        scheduler.tick(start);
        scheduler.tick(start + Duration::from_millis(10));

        let writes = scheduler.engine().output().writes;
        events.sender().send(ClockEvent::PortalStarted).unwrap();
        let result = scheduler.tick(start + Duration::from_millis(29));
        assert_eq!(scheduler.engine().output().writes, writes + 1);
        assert_eq!(result.sleep_duration, Duration::from_millis(2));
    }

    #[test]
    fn test_tick_reports_restart() {
        let events = EventChannel::<4>::new();
        let mut scheduler = FrameScheduler::new(engine(), Offline, events.receiver());
        let start = Instant::from_millis(1000);

        events.sender().send(ClockEvent::UpdateStarted).unwrap();
        events
            .sender()
            .send(ClockEvent::UpdateFailed(OtaError::End))
            .unwrap();
        assert!(!scheduler.tick(start).restart);
        assert!(scheduler.tick(start + Duration::from_secs(2)).restart);
    }
}
