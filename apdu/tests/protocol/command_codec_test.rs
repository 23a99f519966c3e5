#[path = "../common/mod.rs"]
mod common;

use apdu::protocol::Command;
use apdu::Error;

#[test]
fn four_byte_frame_is_bare_header() {
    let cmd = Command::decode(&[0x11, 0x22, 0x33, 0x44]).unwrap();
    assert_eq!(cmd.cla, 0x11);
    assert_eq!(cmd.ins, 0x22);
    assert_eq!(cmd.p1, 0x33);
    assert_eq!(cmd.p2, 0x44);
    assert!(cmd.data.is_empty());
    assert_eq!(cmd.le, 0);
}

#[test]
fn five_byte_frame_carries_le() {
    let cmd = Command::decode(&[0x11, 0x22, 0x33, 0x44, 0x55]).unwrap();
    assert!(cmd.data.is_empty());
    assert_eq!(cmd.le, 0x55);
}

#[test]
fn data_without_le_defaults_to_zero() {
    let cmd = Command::decode(&[0x11, 0x22, 0x33, 0x44, 0x02, 0x77, 0x88]).unwrap();
    assert_eq!(cmd.data, vec![0x77, 0x88]);
    assert_eq!(cmd.le, 0);
}

#[test]
fn data_with_trailing_le() {
    let cmd = Command::decode(&[0x11, 0x22, 0x33, 0x44, 0x02, 0x77, 0x88, 0x99]).unwrap();
    assert_eq!(cmd.data, vec![0x77, 0x88]);
    assert_eq!(cmd.le, 0x99);
}

#[test]
fn short_frame_is_rejected_regardless_of_content() {
    for bytes in [&[][..], &[0x00][..], &[0xFF, 0xFF][..], &[0x11, 0x22, 0x33][..]] {
        match Command::decode(bytes) {
            Err(Error::InvalidLength { .. }) => {}
            other => panic!("expected InvalidLength for {:?}, got: {:?}", bytes, other),
        }
    }
}

#[test]
fn declared_length_underflow() {
    match Command::decode(&[0x11, 0x22, 0x33, 0x44, 0x03, 0x77]) {
        Err(Error::DataLengthMismatch { .. }) => {}
        other => panic!("expected DataLengthMismatch, got: {:?}", other),
    }
}

#[test]
fn trailing_overflow() {
    match Command::decode(&[0x11, 0x22, 0x33, 0x44, 0x02, 0x77, 0x88, 0x99, 0xFF]) {
        Err(Error::InvalidLength { .. }) => {}
        other => panic!("expected InvalidLength, got: {:?}", other),
    }
}

#[test]
fn encode_matches_reference_frame() {
    let cmd = common::fixtures::sample_command();
    assert_eq!(cmd.encode(), common::fixtures::sample_command_bytes());
}

#[test]
fn reference_frame_roundtrips() {
    let decoded = Command::decode(&common::fixtures::sample_command_bytes()).unwrap();
    assert_eq!(decoded, common::fixtures::sample_command());
}

#[test]
fn select_aid_encoding() {
    let aid = common::fixtures::sample_aid();
    let cmd = Command::select(&aid);
    assert_eq!(cmd.cla, 0x00);
    assert_eq!(cmd.ins, 0xA4);
    assert_eq!(cmd.p1, 0x04);
    assert_eq!(cmd.p2, 0x00);
    assert_eq!(cmd.data, aid);
    assert_eq!(cmd.le, 0);

    let frame = cmd.encode();
    assert_eq!(&frame[..4], &[0x00, 0xA4, 0x04, 0x00]);
    assert_eq!(frame[4] as usize, aid.len());
    assert_eq!(frame[frame.len() - 1], 0);
}

#[test]
fn hex_text_entry_point_tolerates_whitespace() {
    let spaced = Command::from_hex("1122 3344").unwrap();
    let compact = Command::from_hex("11223344").unwrap();
    assert_eq!(spaced, compact);

    let multiline = Command::from_hex("11 22\n33\t44\r").unwrap();
    assert_eq!(multiline, compact);
}

#[test]
fn hex_text_entry_point_rejects_garbage() {
    match Command::from_hex("000W") {
        Err(Error::HexParse(_)) => {}
        other => panic!("expected HexParse, got: {:?}", other),
    }
}

#[test]
fn display_roundtrips_through_from_hex() {
    let cmd = common::fixtures::sample_command();
    let rendered = cmd.to_string();
    assert_eq!(rendered, "1122334402889977");
    assert_eq!(Command::from_hex(&rendered).unwrap(), cmd);
}
