// fixtures.rs — provides commonly used frames and commands
#![allow(dead_code)]

use apdu::protocol::Command;

/// A 7-byte payment-style application identifier.
pub fn sample_aid() -> Vec<u8> {
    vec![0xA0, 0x00, 0x00, 0x02, 0x47, 0x10, 0x01]
}

pub fn sample_command() -> Command {
    Command {
        cla: 0x11,
        ins: 0x22,
        p1: 0x33,
        p2: 0x44,
        data: vec![0x88, 0x99],
        le: 0x77,
    }
}

pub fn sample_command_bytes() -> Vec<u8> {
    vec![0x11, 0x22, 0x33, 0x44, 0x02, 0x88, 0x99, 0x77]
}

pub fn response_ok_with_data() -> Vec<u8> {
    vec![0x11, 0x22, 0x33, 0x90, 0x00]
}

pub fn response_status_only_ok() -> Vec<u8> {
    vec![0x90, 0x00]
}

pub fn response_file_not_found() -> Vec<u8> {
    vec![0x6A, 0x82]
}

pub fn response_more_data(data: &[u8], remaining: u8) -> Vec<u8> {
    let mut out = data.to_vec();
    out.push(0x9F);
    out.push(remaining);
    out
}
