//! PNG output tests: decode what we encode and check orientation.

use std::fs::File;

use texforge_backend::{
    encode_png, encode_png_with_hash, hash_png, synthesize, write_png, PixelBuffer, PngConfig,
};
use texforge_spec::{Dimensions, FillSpec, GradientAxis, GradientStop, Rgb};

/// Decode PNG bytes into (width, height, color type, rgb bytes).
fn decode(data: &[u8]) -> (u32, u32, png::ColorType, Vec<u8>) {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().expect("valid PNG header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("valid PNG frame");
    buf.truncate(info.buffer_size());
    (info.width, info.height, info.color_type, buf)
}

fn vertical_ramp() -> PixelBuffer {
    synthesize(
        Dimensions::new(2, 3),
        &FillSpec::gradient(
            GradientAxis::Vertical,
            vec![
                GradientStop::new(0.0, Rgb::RED),
                GradientStop::new(1.0, Rgb::BLUE),
            ],
        ),
    )
}

#[test]
fn test_encode_with_hash_matches_bytes() {
    let buffer = vertical_ramp();
    let config = PngConfig::default();
    let (data, hash) = encode_png_with_hash(&buffer, &config).unwrap();

    assert_eq!(data, encode_png(&buffer, &config).unwrap());
    assert_eq!(hash, hash_png(&data));
}

#[test]
fn test_png_is_opaque_rgb() {
    let buffer = synthesize(Dimensions::new(5, 4), &FillSpec::solid(Rgb::GREEN));
    let (w, h, color_type, data) = decode(&encode_png(&buffer, &PngConfig::default()).unwrap());

    assert_eq!((w, h), (5, 4));
    assert_eq!(color_type, png::ColorType::Rgb);
    assert_eq!(data.len(), 5 * 4 * 3);
    assert!(data.chunks(3).all(|px| px == [0, 255, 0]));
}

#[test]
fn test_png_first_row_is_top_of_texture() {
    let (_, _, _, data) = decode(&encode_png(&vertical_ramp(), &PngConfig::default()).unwrap());

    // File row 0 is buffer row 2 (t = 0, red); file row 2 is buffer row 0 (blue).
    assert_eq!(&data[0..3], &[255, 0, 0]);
    assert_eq!(&data[6..9], &[128, 0, 128]);
    assert_eq!(&data[12..15], &[0, 0, 255]);
}

#[test]
fn test_png_round_trips_pixels() {
    let buffer = synthesize(
        Dimensions::new(13, 7),
        &FillSpec::outlined(Rgb::new(1, 2, 3), Rgb::new(250, 251, 252), 2),
    );
    for config in [PngConfig::default(), PngConfig::fast(), PngConfig::best_compression()] {
        let (_, _, _, data) = decode(&encode_png(&buffer, &config).unwrap());
        assert_eq!(data, buffer.to_rgb8_top_down());
    }
}

#[test]
fn test_write_png_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ramp.png");
    let buffer = vertical_ramp();

    write_png(&buffer, &path, &PngConfig::default()).unwrap();

    let decoder = png::Decoder::new(File::open(&path).unwrap());
    let reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().width, 2);
    assert_eq!(reader.info().height, 3);
}

#[test]
fn test_identical_buffers_encode_identically() {
    let a = encode_png(&vertical_ramp(), &PngConfig::default()).unwrap();
    let b = encode_png(&vertical_ramp(), &PngConfig::default()).unwrap();
    assert_eq!(a, b);
}
