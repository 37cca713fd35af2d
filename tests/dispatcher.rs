mod common;

mod tests {
    use super::common::{RecordingSink, surface};
    use myrtio_grid_composer::channel::TrySendError;
    use myrtio_grid_composer::color::{GREEN, RED};
    use myrtio_grid_composer::{
        Animator, Color, Dispatcher, DispatcherConfig, Duration, Event, EventChannel, NoDelay,
        Palette, Surface,
    };

    fn dispatcher() -> Dispatcher<NoDelay> {
        Dispatcher::new(Animator::new(NoDelay::new()))
    }

    const PRESS_ORIGIN: Event = Event::Note {
        note: 0,
        velocity: 100,
    };

    #[test]
    fn test_note_toggles_cell() {
        let mut surface = surface();
        let mut dispatcher = dispatcher();
        assert_eq!(dispatcher.selected_color(), RED);

        dispatcher.handle(&mut surface, PRESS_ORIGIN).unwrap();
        assert_eq!(surface.grid().get(0, 0), Some(RED));
        assert_eq!(surface.sink().writes.last(), Some(&(0, RED)));

        dispatcher.handle(&mut surface, PRESS_ORIGIN).unwrap();
        assert_eq!(surface.grid().get(0, 0), Some(0));
        assert!(surface.grid().cells().all(|(_, _, code)| code == 0));
    }

    #[test]
    fn test_note_plays_tap_splash() {
        let mut surface = surface();
        let mut dispatcher = dispatcher();
        dispatcher.handle(&mut surface, PRESS_ORIGIN).unwrap();

        let pacer = dispatcher.animator_mut().pacer();
        assert_eq!(pacer.frames(), 4);
        assert_eq!(pacer.total(), Duration::from_millis(120));
        // Four frames, the restoring resync, then the toggle itself
        assert_eq!(surface.sink().writes.len(), 5 * 64 + 1);
    }

    #[test]
    fn test_note_replaces_other_color() {
        let mut surface = surface();
        surface.write_cell(2, 1, Color::Code(19)).unwrap();
        let mut dispatcher = dispatcher();
        dispatcher
            .handle(&mut surface, Event::Note { note: 18, velocity: 1 })
            .unwrap();
        assert_eq!(surface.grid().get(2, 1), Some(RED));
    }

    #[test]
    fn test_side_button_folds_onto_last_column() {
        let mut surface = surface();
        let mut dispatcher = dispatcher();
        dispatcher
            .handle(&mut surface, Event::Note { note: 40, velocity: 127 })
            .unwrap();
        assert_eq!(surface.grid().get(7, 2), Some(RED));
    }

    #[test]
    fn test_note_below_short_grid_is_ignored() {
        let mut surface: Surface<RecordingSink, 8, 4> =
            Surface::new(RecordingSink::default(), Palette::launchpad_mini());
        let mut dispatcher = dispatcher();

        // Note 100 is row 6, past the last of four rows
        dispatcher
            .handle(&mut surface, Event::Note { note: 100, velocity: 127 })
            .unwrap();

        assert!(surface.sink().writes.is_empty());
        assert!(surface.grid().cells().all(|(_, _, code)| code == 0));
        assert_eq!(dispatcher.animator_mut().pacer().frames(), 0);
    }

    #[test]
    fn test_releases_are_ignored() {
        let mut surface = surface();
        let mut dispatcher = dispatcher();
        dispatcher
            .handle(&mut surface, Event::Note { note: 0, velocity: 0 })
            .unwrap();
        dispatcher
            .handle(&mut surface, Event::Control { control: 1, value: 0 })
            .unwrap();
        assert!(surface.sink().writes.is_empty());
        assert_eq!(dispatcher.selected_color(), RED);
    }

    #[test]
    fn test_control_selects_top_row_color() {
        let mut surface = surface();
        let mut dispatcher = dispatcher();

        dispatcher
            .handle(&mut surface, Event::Control { control: 1, value: 127 })
            .unwrap();
        assert_eq!(dispatcher.selected_color(), 19);
        assert!(surface.sink().writes.is_empty());

        dispatcher
            .handle(&mut surface, Event::Note { note: 17, velocity: 127 })
            .unwrap();
        assert_eq!(surface.grid().get(1, 1), Some(19));

        dispatcher
            .handle(&mut surface, Event::Control { control: 104, value: 127 })
            .unwrap();
        assert_eq!(dispatcher.selected_color(), GREEN);

        dispatcher
            .handle(&mut surface, Event::Control { control: 7, value: 127 })
            .unwrap();
        assert_eq!(dispatcher.selected_color(), RED);
    }

    #[test]
    fn test_clear_control_flushes() {
        let mut surface = surface();
        surface.grid_mut().fill(GREEN);
        let mut dispatcher = dispatcher();
        dispatcher
            .handle(&mut surface, Event::Control { control: 5, value: 127 })
            .unwrap();
        let selected = dispatcher.selected_color();

        dispatcher
            .handle(&mut surface, Event::Control { control: 111, value: 127 })
            .unwrap();
        assert!(surface.grid().cells().all(|(_, _, code)| code == 0));
        assert_eq!(dispatcher.selected_color(), selected);
        assert_eq!(dispatcher.animator_mut().pacer().frames(), 128);
    }

    #[test]
    fn test_custom_config() {
        let mut surface = surface();
        surface.grid_mut().fill(RED);
        let config = DispatcherConfig {
            clear_control: 104,
            default_color: GREEN,
        };
        let mut dispatcher = Dispatcher::with_config(Animator::new(NoDelay::new()), config);
        assert_eq!(dispatcher.selected_color(), GREEN);

        dispatcher
            .handle(&mut surface, Event::Control { control: 104, value: 1 })
            .unwrap();
        assert!(surface.grid().cells().all(|(_, _, code)| code == 0));
        assert_eq!(dispatcher.selected_color(), GREEN);
    }

    #[test]
    fn test_run_until_stream_ends() {
        let mut surface = surface();
        let mut dispatcher = dispatcher();
        let events = [
            Event::Control { control: 6, value: 127 },
            Event::Note { note: 3, velocity: 127 },
            Event::Note { note: 3, velocity: 0 },
            Event::Note { note: 35, velocity: 127 },
        ];
        dispatcher.run(&mut surface, events).unwrap();
        assert_eq!(surface.grid().get(3, 0), Some(GREEN));
        assert_eq!(surface.grid().get(3, 2), Some(GREEN));
    }

    #[test]
    fn test_process_pending() {
        let channel: EventChannel<4> = EventChannel::new();
        let sender = channel.sender();
        sender.try_send(PRESS_ORIGIN).unwrap();
        sender
            .try_send(Event::Control { control: 2, value: 127 })
            .unwrap();
        sender
            .try_send(Event::Note { note: 1, velocity: 127 })
            .unwrap();
        assert_eq!(channel.len(), 3);

        let mut surface = surface();
        let mut dispatcher = dispatcher();
        let handled = dispatcher
            .process_pending(&mut surface, &channel.receiver())
            .unwrap();

        assert_eq!(handled, 3);
        assert!(channel.is_empty());
        assert_eq!(surface.grid().get(0, 0), Some(RED));
        assert_eq!(surface.grid().get(1, 0), Some(35));
    }

    #[test]
    fn test_channel_is_bounded() {
        let channel: EventChannel<2> = EventChannel::new();
        channel.try_send(PRESS_ORIGIN).unwrap();
        channel.try_send(PRESS_ORIGIN).unwrap();
        let extra = Event::Control { control: 0, value: 1 };
        assert_eq!(channel.try_send(extra), Err(TrySendError(extra)));

        let receiver = channel.receiver();
        assert_eq!(receiver.drain().count(), 2);
        assert!(receiver.try_receive().is_err());
    }

    #[test]
    fn test_event_is_press() {
        assert!(PRESS_ORIGIN.is_press());
        assert!(!Event::Note { note: 5, velocity: 0 }.is_press());
        assert!(Event::Control { control: 111, value: 127 }.is_press());
    }
}
