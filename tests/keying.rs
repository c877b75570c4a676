// tests/keying.rs  —  public API: message → encoding → sample stream
use morse_keyer::synth::SegmentKind;
use morse_keyer::{build, build_at, translate, SynthConfig, SynthesisError};

#[test]
fn qso_messages_key_end_to_end() {
    let cfg = SynthConfig::new(0.5, 700.0, 20);
    for msg in [
        "CQ CQ CQ DE BA1ZZZ BA1ZZZ BA1ZZZ PSE K",
        "BA1ZZZ DE BA1YYY BA1YYY BA1YYY UR RST 599 5NN MY RST HW? K",
        "BA1ZZZ DE BA1YYY THX FER UR QSO ES RST RPRT 73 <SK> E E",
    ] {
        let code = translate(msg).unwrap();
        let stream = build(msg, &cfg).unwrap();
        let unit = cfg.timing().unit_frames(stream.sample_rate());
        assert_eq!(stream.total_frames(), code.units() * unit, "{msg}");
        assert_eq!(stream.segments().first().map(|s| s.kind), Some(SegmentKind::Tone));
        assert_eq!(stream.segments().last().map(|s| s.kind), Some(SegmentKind::Tone));
    }
}

#[test]
fn word_gap_is_seven_units() {
    let cfg = SynthConfig::new(0.5, 700.0, 30);
    let s = build_at("E E", &cfg, 48_000).unwrap();
    let unit = 1920;
    let frames: Vec<u64> = s.segments().iter().map(|g| g.frames).collect();
    assert_eq!(frames, vec![unit, 7 * unit, unit]);
}

#[test]
fn config_checked_before_message() {
    let err = build("\0", &SynthConfig::new(1.5, 700.0, 30)).unwrap_err();
    assert!(matches!(err, SynthesisError::InvalidConfiguration { name: "gain", .. }));
    let err = build("\0", &SynthConfig::new(0.5, 700.0, 30)).unwrap_err();
    assert!(matches!(err, SynthesisError::InvalidCharacter { .. }));
}
