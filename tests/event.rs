mod tests {
    use led_clock_composer::event::{ClockEvent, EventChannel, OtaError, QueueFull, percent};

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 1000), 0);
        assert_eq!(percent(500, 1000), 50);
        assert_eq!(percent(999, 1000), 99);
        assert_eq!(percent(1000, 1000), 100);
        assert_eq!(percent(2000, 1000), 100);
        assert_eq!(percent(10, 0), 0);
        assert_eq!(percent(u32::MAX, u32::MAX), 100);
    }

    #[test]
    fn test_only_end_failure_is_fatal() {
        assert!(OtaError::End.is_fatal());
        for error in [
            OtaError::Auth,
            OtaError::Begin,
            OtaError::Connect,
            OtaError::Receive,
        ] {
            assert!(!error.is_fatal());
        }
    }

    #[test]
    fn test_channel_is_fifo_and_bounded() {
        let channel = EventChannel::<2>::new();
        let sender = channel.sender();
        let receiver = channel.receiver();
        assert!(channel.is_empty());

        sender.send(ClockEvent::PortalStarted).unwrap();
        sender.send(ClockEvent::UpdateProgress(10)).unwrap();
        assert_eq!(
            sender.send(ClockEvent::NetworkLost),
            Err(QueueFull(ClockEvent::NetworkLost))
        );

        assert_eq!(receiver.receive(), Some(ClockEvent::PortalStarted));
        assert_eq!(receiver.receive(), Some(ClockEvent::UpdateProgress(10)));
        assert_eq!(receiver.receive(), None);
        assert!(channel.is_empty());
    }
}
