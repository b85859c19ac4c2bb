use std::io::Cursor;

use super::*;

#[test]
fn decode_png_keeps_straight_alpha() {
    let src_rgba = vec![100u8, 50u8, 200u8, 128u8, 0, 0, 0, 0];
    let img = image::RgbaImage::from_raw(2, 1, src_rgba.clone()).unwrap();

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();

    let buf = decode_png(&bytes).unwrap();
    assert_eq!(buf.width(), 2);
    assert_eq!(buf.height(), 1);
    assert_eq!(buf.as_bytes(), src_rgba.as_slice());
}

#[test]
fn encode_then_decode_preserves_pixels() {
    let mut buf = PixelBuffer::new(3, 2).unwrap();
    buf.set_rgba(1, 1, [1, 2, 3, 4]).unwrap();
    let bytes = encode_png(&buf).unwrap();
    assert_eq!(decode_png(&bytes).unwrap(), buf);
}

#[test]
fn decode_garbage_is_error() {
    assert!(decode_png(b"not a png").is_err());
}

#[test]
fn load_missing_file_mentions_path() {
    let err = load_png("target/does/not/exist.png").unwrap_err();
    assert!(err.to_string().contains("exist.png"));
}
