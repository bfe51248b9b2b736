//! Tests for PNG encoding functionality.
//!
//! Walks the chunk structure of encoded output and round-trips the IDAT
//! payload to verify the scanlines.

use std::io::Read;

use renderer::png::create_png;
use renderer::surface::render_surface;
use test_utils::create_test_grid;

// ============================================================================
// Helper functions
// ============================================================================

/// Parse the chunk sequence of a PNG: (type, data) pairs, CRC-checked.
fn parse_chunks(png: &[u8]) -> Vec<(String, Vec<u8>)> {
    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

    let mut chunks = Vec::new();
    let mut pos = 8;
    while pos < png.len() {
        let len = u32::from_be_bytes(png[pos..pos + 4].try_into().unwrap()) as usize;
        let chunk_type = &png[pos + 4..pos + 8];
        let data = &png[pos + 8..pos + 8 + len];

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(chunk_type);
        hasher.update(data);
        let expected = hasher.finalize();
        let stored = u32::from_be_bytes(png[pos + 8 + len..pos + 12 + len].try_into().unwrap());
        assert_eq!(stored, expected, "chunk CRC mismatch");

        chunks.push((
            String::from_utf8(chunk_type.to_vec()).unwrap(),
            data.to_vec(),
        ));
        pos += 12 + len;
    }
    chunks
}

/// Decompress an IDAT payload back to filter-prefixed scanlines.
fn inflate_idat(data: &[u8]) -> Vec<u8> {
    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).unwrap();
    out
}

// ============================================================================
// create_png tests
// ============================================================================

#[test]
fn test_chunk_sequence() {
    let pixels = vec![128u8; 5 * 4 * 4];
    let png = create_png(&pixels, 5, 4).unwrap();

    let chunks = parse_chunks(&png);
    let types: Vec<&str> = chunks.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(types, vec!["IHDR", "IDAT", "IEND"]);
}

#[test]
fn test_idat_round_trip() {
    // 2x2 image with distinct pixels
    let pixels: Vec<u8> = vec![
        255, 0, 0, 255, // red
        0, 255, 0, 255, // green
        0, 0, 255, 255, // blue
        0, 0, 0, 0, // transparent
    ];
    let png = create_png(&pixels, 2, 2).unwrap();

    let chunks = parse_chunks(&png);
    let idat = &chunks[1].1;
    let scanlines = inflate_idat(idat);

    // Each scanline: filter byte 0 then 2 RGBA pixels.
    assert_eq!(scanlines.len(), 2 * (1 + 2 * 4));
    assert_eq!(scanlines[0], 0);
    assert_eq!(&scanlines[1..9], &pixels[0..8]);
    assert_eq!(scanlines[9], 0);
    assert_eq!(&scanlines[10..18], &pixels[8..16]);
}

#[test]
fn test_rendered_surface_encodes_cleanly() {
    let data = create_test_grid(6, 4);
    let pixels = render_surface(&data, 6, 4, 60, 40);
    let png = create_png(&pixels, 60, 40).unwrap();

    let chunks = parse_chunks(&png);
    // IHDR carries the canvas dimensions.
    let ihdr = &chunks[0].1;
    assert_eq!(&ihdr[0..4], &60u32.to_be_bytes());
    assert_eq!(&ihdr[4..8], &40u32.to_be_bytes());
}

#[test]
fn test_mismatched_buffer_is_rejected() {
    assert!(create_png(&[0u8; 12], 2, 2).is_err());
}
