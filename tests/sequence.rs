mod tests {
    use myrtio_grid_composer::sequence::SEQUENCE_CAPACITY;
    use myrtio_grid_composer::{AnimationSequence, Color, Palette};

    #[test]
    fn test_rotate_right() {
        let mut sequence = AnimationSequence::from_symbols(&["R", "G", "N"]).unwrap();
        sequence.rotate_right();
        assert_eq!(
            sequence.as_slice(),
            &[Color::NoOp, Color::Named("R"), Color::Named("G")]
        );
    }

    #[test]
    fn test_get_wraps() {
        let sequence = AnimationSequence::new(&[Color::Code(1), Color::Code(2)]).unwrap();
        assert_eq!(sequence.get(0), Color::Code(1));
        assert_eq!(sequence.get(3), Color::Code(2));
    }

    #[test]
    fn test_builtin_sequences() {
        let splash = AnimationSequence::splash();
        assert_eq!(splash.len(), 21);
        assert!(splash.as_slice()[..8].iter().all(|&c| c == Color::Named("Z")));
        assert_eq!(splash.get(8), Color::Named("R"));
        assert_eq!(splash.get(9), Color::NoOp);
        assert_eq!(splash.get(20), Color::Named("G"));

        let tap = AnimationSequence::tap();
        assert_eq!(
            tap.as_slice(),
            &[Color::NoOp, Color::NoOp, Color::NoOp, Color::Named("R")]
        );
    }

    #[test]
    fn test_fresh_sequences_are_independent() {
        let mut first = AnimationSequence::splash();
        first.rotate_right();
        assert_ne!(first, AnimationSequence::splash());
        assert_eq!(AnimationSequence::splash().get(0), Color::Named("Z"));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert!(AnimationSequence::from_symbols(&[]).is_none());
        assert!(AnimationSequence::new(&[]).is_none());
        let long = [Color::NoOp; SEQUENCE_CAPACITY + 1];
        assert!(AnimationSequence::new(&long).is_none());
        assert!(AnimationSequence::new(&long[..SEQUENCE_CAPACITY]).is_some());
    }

    #[test]
    fn test_validate() {
        let palette = Palette::launchpad_mini();
        assert!(AnimationSequence::splash().validate(&palette).is_ok());
        let bad = AnimationSequence::from_symbols(&["N", "Q"]).unwrap();
        assert_eq!(bad.validate(&palette).unwrap_err().name(), "Q");
    }
}
