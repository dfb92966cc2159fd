//! Unit tests for the line-packet decoder.

use proptest::prelude::*;
use rstest::rstest;

use super::{
    DecodeError,
    Geometry,
    ImageId,
    LINE_HEADER_BYTES,
    LineIndex,
    MAX_DIMENSION,
    decode_datagram,
    decode_line,
};
use crate::{
    byte_order::write_network_u32,
    policy::{TIMESTAMP_WRAP, Timestamp},
};

/// Encode one line record per the documented wire layout.
fn encode_record(
    id: u32,
    index: u32,
    height: u32,
    width: u32,
    timestamp: u32,
    pixels: &[u8],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(LINE_HEADER_BYTES + pixels.len());
    for field in [id, index, height, width, timestamp] {
        out.extend_from_slice(&write_network_u32(field));
    }
    out.extend_from_slice(pixels);
    out
}

/// Prefix encoded records with a declared record count.
fn encode_datagram(declared: u32, records: &[Vec<u8>]) -> Vec<u8> {
    let mut out = write_network_u32(declared).to_vec();
    for record in records {
        out.extend_from_slice(record);
    }
    out
}

#[test]
fn decode_line_extracts_header_and_pixels() {
    let pixels: Vec<u8> = (0..12).collect();
    let payload = encode_record(7, 3, 10, 4, 5_000, &pixels);

    let packet = decode_line(&payload).expect("well-formed payload");
    let header = packet.header();
    assert_eq!(header.image_id(), ImageId::new(7));
    assert_eq!(header.line_index(), LineIndex::new(3));
    assert_eq!(header.geometry(), Geometry::new(10, 4));
    assert_eq!(header.timestamp(), Timestamp::new(5_000));
    assert_eq!(packet.pixels(), pixels.as_slice());
}

#[test]
fn decode_line_rejects_short_header() {
    let err = decode_line(&[0u8; LINE_HEADER_BYTES - 1]).expect_err("header too short");
    assert_eq!(
        err,
        DecodeError::TruncatedHeader {
            len: LINE_HEADER_BYTES - 1,
            required: LINE_HEADER_BYTES,
        },
    );
}

#[rstest]
#[case::zero_height(0, 4)]
#[case::zero_width(10, 0)]
#[case::negative_height_on_wire(0x8000_0000, 4)]
#[case::negative_width_on_wire(10, 0xFFFF_FFFF)]
fn decode_line_rejects_out_of_range_geometry(#[case] height: u32, #[case] width: u32) {
    let payload = encode_record(1, 0, height, width, 0, &[]);
    let err = decode_line(&payload).expect_err("geometry out of range");
    assert_eq!(err, DecodeError::InvalidGeometry { height, width });
}

#[rstest]
#[case::height_beyond_bound(0x7FFF_FFFF, 1)]
#[case::width_beyond_bound(1, MAX_DIMENSION + 1)]
#[case::both_beyond_bound(0x7FFF_FFFF, 0x7FFF_FFFF)]
fn decode_line_rejects_geometry_beyond_the_allocation_bound(
    #[case] height: u32,
    #[case] width: u32,
) {
    // Positive on the wire, so it passes the sign check, but routing it
    // would allocate gigabytes on the say-so of a 23-byte payload.
    let payload = encode_record(1, 0, height, width, 0, &[0; 3]);
    let err = decode_line(&payload).expect_err("geometry exceeds the bound");
    assert_eq!(
        err,
        DecodeError::GeometryTooLarge {
            height,
            width,
            limit: MAX_DIMENSION,
        },
    );
}

#[test]
fn decode_line_accepts_dimensions_at_the_bound() {
    let payload = encode_record(1, 0, MAX_DIMENSION, 1, 0, &[0; 3]);
    let packet = decode_line(&payload).expect("boundary geometry decodes");
    assert_eq!(packet.header().geometry(), Geometry::new(MAX_DIMENSION, 1));
}

#[rstest]
#[case::index_equals_height(10, 10)]
#[case::index_past_height(10, 11)]
fn decode_line_rejects_line_index_outside_height(#[case] height: u32, #[case] index: u32) {
    let payload = encode_record(1, index, height, 4, 0, &[0; 12]);
    let err = decode_line(&payload).expect_err("index outside height");
    assert_eq!(
        err,
        DecodeError::LineIndexOutOfRange {
            index: LineIndex::new(index),
            height,
        },
    );
}

#[rstest]
#[case::pixels_short(11)]
#[case::pixels_long(13)]
fn decode_line_rejects_pixel_length_mismatch(#[case] pixel_len: usize) {
    let payload = encode_record(1, 0, 10, 4, 0, &vec![0xAB; pixel_len]);
    let err = decode_line(&payload).expect_err("pixel section length is wrong");
    assert_eq!(
        err,
        DecodeError::PixelLengthMismatch {
            expected: 12,
            actual: pixel_len,
        },
    );
}

#[test]
fn decode_datagram_yields_records_in_wire_order() {
    let first = encode_record(7, 0, 2, 4, 100, &[0x11; 12]);
    let second = encode_record(7, 1, 2, 4, 150, &[0x22; 12]);
    let payload = encode_datagram(2, &[first, second]);

    let mut records = decode_datagram(&payload).expect("count prefix present");
    assert_eq!(records.remaining_records(), 2);

    let packet = records.next().expect("first record").expect("decodes");
    assert_eq!(packet.header().line_index(), LineIndex::zero());
    assert_eq!(packet.pixels(), &[0x11; 12]);

    let packet = records.next().expect("second record").expect("decodes");
    assert_eq!(packet.header().line_index(), LineIndex::new(1));
    assert_eq!(packet.header().timestamp(), Timestamp::new(150));

    assert!(records.next().is_none());
}

#[test]
fn decode_datagram_fuses_after_a_malformed_record() {
    // The sender pads the final datagram of an image: the count declares
    // more records than were actually packed.
    let only = encode_record(7, 0, 2, 4, 100, &[0x11; 12]);
    let payload = encode_datagram(3, &[only]);

    let mut records = decode_datagram(&payload).expect("count prefix present");
    assert!(records.next().expect("first record").is_ok());

    let err = records
        .next()
        .expect("stale record surfaces an error")
        .expect_err("nothing left to decode");
    assert_eq!(
        err,
        DecodeError::TruncatedHeader {
            len: 0,
            required: LINE_HEADER_BYTES,
        },
    );

    assert!(records.next().is_none(), "iterator fuses after the error");
}

#[test]
fn decode_datagram_surfaces_truncated_pixels_mid_record() {
    let mut record = encode_record(7, 0, 2, 4, 100, &[0x11; 12]);
    record.truncate(LINE_HEADER_BYTES + 5);
    let payload = encode_datagram(1, &[record]);

    let mut records = decode_datagram(&payload).expect("count prefix present");
    let err = records.next().expect("record yielded").expect_err("pixels cut short");
    assert_eq!(
        err,
        DecodeError::TruncatedPixels {
            expected: 12,
            actual: 5,
        },
    );
}

#[test]
fn decode_datagram_rejects_missing_count_prefix() {
    let err = decode_datagram(&[0u8; 3]).expect_err("prefix incomplete");
    assert_eq!(err, DecodeError::TruncatedDatagram { len: 3, required: 4 });
}

fn line_record_strategy() -> impl Strategy<Value = (u32, u32, u32, u32, u32, Vec<u8>)> {
    (any::<u32>(), 1u32..=48, 1u32..=32, 0u32..=TIMESTAMP_WRAP).prop_flat_map(
        |(id, height, width, timestamp)| {
            (
                Just(id),
                Just(height),
                Just(width),
                0..height,
                Just(timestamp),
                proptest::collection::vec(any::<u8>(), 3 * width as usize),
            )
        },
    )
}

proptest! {
    /// Decoding loses nothing: re-encoding a decoded packet reproduces the
    /// original payload byte for byte.
    #[test]
    fn well_formed_payloads_round_trip(
        (id, height, width, index, timestamp, pixels) in line_record_strategy()
    ) {
        let payload = encode_record(id, index, height, width, timestamp, &pixels);
        let packet = decode_line(&payload).expect("well-formed payload decodes");

        let header = packet.header();
        prop_assert_eq!(header.image_id(), ImageId::new(id));
        prop_assert_eq!(header.line_index(), LineIndex::new(index));
        prop_assert_eq!(header.geometry(), Geometry::new(height, width));
        prop_assert_eq!(header.timestamp(), Timestamp::new(timestamp));
        prop_assert_eq!(packet.pixels(), pixels.as_slice());

        let reencoded = encode_record(
            header.image_id().get(),
            header.line_index().get(),
            header.geometry().height(),
            header.geometry().width(),
            header.timestamp().get(),
            packet.pixels(),
        );
        prop_assert_eq!(reencoded, payload);
    }
}
