//! Encode a SELECT command and parse a canned response.
//!
//! Usage:
//!   cargo run -p apdu --example select_and_parse

use apdu::protocol::{Command, Response};
use apdu::utils::bytes_to_hex_spaced;

fn main() -> apdu::Result<()> {
    env_logger::init();

    let select = Command::select(&[0xA0, 0x00, 0x00, 0x02, 0x47, 0x10, 0x01]);
    println!("SELECT -> {}", select);

    // Pretend the transport answered with a bit of FCI data and 0x9000.
    let wire = [
        0x6F, 0x07, 0x84, 0x05, 0xA0, 0x00, 0x00, 0x02, 0x47, 0x90, 0x00,
    ];
    let response = Response::decode(&wire)?;
    println!(
        "response <- {} status {}",
        bytes_to_hex_spaced(&response.data),
        response.status_word
    );

    match Response::parse(&wire) {
        Ok(data) => println!("selected, {} bytes of FCI", data.len()),
        Err(e) => println!("select failed: {e}"),
    }

    // A frame that did not go well.
    match Response::parse(&[0x6A, 0x82]) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("select failed: {e}"),
    }

    Ok(())
}
