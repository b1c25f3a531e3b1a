//! This module contains the pure, stateless kernels for single-byte Run-Length
//! Encoding and decoding.
//!
//! The on-disk format is a flat sequence of 3-byte packets: one byte holding the
//! run length (1-255) followed by the UTF-16 code unit in little-endian order.
//! `"AAABB"` encodes to `[3, 65, 0, 2, 66, 0]`. Runs are counted over UTF-16 code
//! units, so characters outside the Basic Multilingual Plane become two packets.
//! Packets are `bytemuck::Pod`, so both directions are plain slice casts.

use bytemuck::{Pod, Zeroable};

use crate::error::BwtError;

/// Size in bytes of one encoded packet.
pub const PACKET_SIZE: usize = std::mem::size_of::<Packet>();

//==================================================================================
// 1. Packet Definition
//==================================================================================

/// One run: a count byte followed by a little-endian UTF-16 code unit.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Packet {
    amount: u8,
    code_unit: [u8; 2],
}

impl Packet {
    pub fn new(amount: u8, code_unit: u16) -> Self {
        Self {
            amount,
            code_unit: code_unit.to_le_bytes(),
        }
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    pub fn code_unit(&self) -> u16 {
        u16::from_le_bytes(self.code_unit)
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Splits `input` into packets, cutting runs at `u8::MAX`.
pub fn generate_packets(input: &str) -> Vec<Packet> {
    let mut packets = Vec::new();
    let mut units = input.encode_utf16();

    let Some(mut current) = units.next() else {
        return packets;
    };
    let mut amount: u8 = 1;

    for unit in units {
        if unit == current {
            if amount == u8::MAX {
                packets.push(Packet::new(amount, current));
                amount = 1;
                continue;
            }
            amount += 1;
        } else {
            packets.push(Packet::new(amount, current));
            current = unit;
            amount = 1;
        }
    }
    packets.push(Packet::new(amount, current));

    packets
}

/// Encodes `input` into `output_buf`, replacing its previous contents.
pub fn encode(input: &str, output_buf: &mut Vec<u8>) {
    output_buf.clear();
    output_buf.extend_from_slice(bytemuck::cast_slice(&generate_packets(input)));
}

/// Reinterprets `bytes` as packets. The length must be a multiple of `PACKET_SIZE`.
pub fn packets_from_bytes(bytes: &[u8]) -> Result<&[Packet], BwtError> {
    if bytes.len() % PACKET_SIZE != 0 {
        return Err(BwtError::RleDecodeError(format!(
            "byte length {} must be a multiple of {}",
            bytes.len(),
            PACKET_SIZE
        )));
    }
    bytemuck::try_cast_slice(bytes).map_err(|e| BwtError::RleDecodeError(e.to_string()))
}

/// Expands packets back into a string.
pub fn generate_string(packets: &[Packet]) -> Result<String, BwtError> {
    let mut units: Vec<u16> = Vec::new();
    for (index, packet) in packets.iter().enumerate() {
        if packet.amount() == 0 {
            return Err(BwtError::RleDecodeError(format!(
                "packet {} has a run length of zero",
                index
            )));
        }
        units.extend(std::iter::repeat(packet.code_unit()).take(packet.amount() as usize));
    }

    String::from_utf16(&units).map_err(|e| BwtError::RleDecodeError(e.to_string()))
}

/// Decodes a packet byte stream.
pub fn decode(bytes: &[u8]) -> Result<String, BwtError> {
    let packets = packets_from_bytes(bytes)?;
    generate_string(packets)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
