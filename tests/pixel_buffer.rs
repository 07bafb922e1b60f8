use edgebench::{EdgeBenchError, PixelBuffer, PixelRead, PixelWrite, Rgb};

#[test]
fn pixel_buffer_rejects_invalid_dimensions() {
    let err = PixelBuffer::from_vec(vec![0u8; 4], 0, 1).err().unwrap();
    assert_eq!(
        err,
        EdgeBenchError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = PixelBuffer::zeroed(1, 0).err().unwrap();
    assert_eq!(
        err,
        EdgeBenchError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn pixel_buffer_rejects_wrong_length() {
    let err = PixelBuffer::from_vec(vec![0u8; 15], 2, 2).err().unwrap();
    assert_eq!(err, EdgeBenchError::DimensionMismatch { needed: 16, got: 15 });

    let err = PixelBuffer::from_vec(vec![0u8; 17], 2, 2).err().unwrap();
    assert_eq!(err, EdgeBenchError::DimensionMismatch { needed: 16, got: 17 });
}

#[test]
fn pixel_buffer_layout_matches_coordinates() {
    // 2x2 image with distinct channel bytes per pixel.
    let data: Vec<u8> = (0u8..16).collect();
    let buffer = PixelBuffer::from_vec(data, 2, 2).unwrap();

    assert_eq!(buffer.width(), 2);
    assert_eq!(buffer.height(), 2);
    assert_eq!(buffer.stride(), 8);

    assert_eq!(buffer.get(0, 0), Some(Rgb { r: 0, g: 1, b: 2 }));
    assert_eq!(buffer.get(1, 0), Some(Rgb { r: 4, g: 5, b: 6 }));
    assert_eq!(buffer.get(0, 1), Some(Rgb { r: 8, g: 9, b: 10 }));
    assert_eq!(buffer.get(1, 1), Some(Rgb { r: 12, g: 13, b: 14 }));
    assert_eq!(buffer.get(2, 0), None);
    assert_eq!(buffer.get(0, 2), None);
}

#[test]
fn pixel_write_sets_channels_and_alpha() {
    let mut buffer = PixelBuffer::zeroed(3, 3).unwrap();
    buffer.set(1, 2, Rgb { r: 10, g: 20, b: 30 });

    let at = (2 * 3 + 1) * 4;
    assert_eq!(&buffer.as_bytes()[at..at + 4], &[10, 20, 30, 255]);

    // Out-of-bounds writes are ignored, not panics.
    buffer.set(3, 0, Rgb { r: 1, g: 1, b: 1 });
    buffer.set(0, 3, Rgb { r: 1, g: 1, b: 1 });
}

#[test]
fn zeroed_buffer_is_all_zero() {
    let buffer = PixelBuffer::zeroed(4, 2).unwrap();
    assert_eq!(buffer.as_bytes().len(), 32);
    assert!(buffer.as_bytes().iter().all(|&b| b == 0));
}
