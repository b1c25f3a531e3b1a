//! This module contains the pure, stateless kernels for fixed-width ("single digit")
//! Run-Length Encoding and decoding.
//!
//! Every run is written as a two-character packet: one decimal digit holding the
//! run length (1-9) followed by the character itself, so `"aabbbccde"` encodes to
//! `"2a3b2c1d1e"`. Runs longer than nine are split into several packets. Because
//! packets have a fixed width the payload character may itself be a digit.
//! This module is PURE RUST and panic-free.

use crate::error::BwtError;

/// Longest run a single packet can describe.
pub const MAX_RUN: u32 = 9;

//==================================================================================
// 1. Private Core Logic
//==================================================================================

fn write_packet(packets: &mut Vec<String>, count: u32, current: char) {
    packets.push(format!("{}{}", count, current));
}

fn expand_packet(packet: &[char], output: &mut String) -> Result<(), BwtError> {
    let [count, target] = packet else {
        return Err(BwtError::RleDecodeError(format!(
            "packet must hold exactly 2 characters, got {}",
            packet.len()
        )));
    };

    let count = count
        .to_digit(10)
        .filter(|&n| n >= 1)
        .ok_or_else(|| {
            BwtError::RleDecodeError(format!("invalid run length {:?}; expected a digit 1-9", count))
        })?;

    output.extend(std::iter::repeat(*target).take(count as usize));
    Ok(())
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Encodes `input` as a list of two-character packets.
pub fn encode_as_packets(input: &str) -> Vec<String> {
    let mut packets = Vec::new();
    let mut chars = input.chars();

    let Some(mut current) = chars.next() else {
        return packets;
    };
    let mut count: u32 = 1;

    for c in chars {
        if c == current {
            if count >= MAX_RUN {
                write_packet(&mut packets, count, current);
                count = 1;
                continue;
            }
            count += 1;
        } else {
            write_packet(&mut packets, count, current);
            current = c;
            count = 1;
        }
    }
    write_packet(&mut packets, count, current);

    packets
}

/// Encodes `input` as one concatenated string of packets.
pub fn encode(input: &str) -> String {
    encode_as_packets(input).concat()
}

/// Decodes a concatenated packet string.
pub fn decode(input: &str) -> Result<String, BwtError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(BwtError::RleDecodeError(
            "input string must have an even number of characters".to_string(),
        ));
    }

    let mut output = String::with_capacity(chars.len());
    for packet in chars.chunks(2) {
        expand_packet(packet, &mut output)?;
    }
    Ok(output)
}

/// Decodes an already split list of packets.
pub fn decode_packets<S: AsRef<str>>(packets: &[S]) -> Result<String, BwtError> {
    let mut output = String::new();
    for packet in packets {
        let packet: Vec<char> = packet.as_ref().chars().collect();
        expand_packet(&packet, &mut output)?;
    }
    log::trace!("single-digit rle: expanded {} packets", packets.len());
    Ok(output)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
