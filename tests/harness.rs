use edgebench::{default_workers, run, EdgeBenchError, Mode, PixelBuffer, RunConfig};

fn make_raster(width: usize, height: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let value = (((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF) as u8;
            data.extend_from_slice(&[value, value.wrapping_mul(3), value ^ 0x55, 255]);
        }
    }
    PixelBuffer::from_vec(data, width, height).unwrap()
}

#[test]
fn mode_codes_parse_to_strategies() {
    assert_eq!("0".parse::<Mode>().unwrap(), Mode::Scalar);
    assert_eq!("1".parse::<Mode>().unwrap(), Mode::Buffer);
    assert_eq!("2".parse::<Mode>().unwrap(), Mode::Parallel);
    assert_eq!("3".parse::<Mode>().unwrap(), Mode::DeviceA);
    assert_eq!("4".parse::<Mode>().unwrap(), Mode::DeviceB);
}

#[test]
fn unrecognized_mode_codes_are_rejected() {
    for code in ["5", "-1", "", "scalar", "01"] {
        let err = code.parse::<Mode>().err().unwrap();
        assert_eq!(
            err,
            EdgeBenchError::UnsupportedMode {
                given: code.to_string(),
            }
        );
    }
}

#[test]
fn mode_labels_are_stable() {
    assert_eq!(Mode::Scalar.label(), "scalar");
    assert_eq!(Mode::Buffer.label(), "buffer");
    assert_eq!(Mode::Parallel.label(), "parallel");
    assert_eq!(Mode::DeviceA.label(), "cuda");
    assert_eq!(Mode::DeviceB.label(), "opencl");
}

#[test]
fn run_rejects_mismatched_output_dimensions() {
    let input = make_raster(8, 8);
    let mut output = PixelBuffer::zeroed(8, 7).unwrap();
    let err = run(Mode::Buffer, &input, &mut output, &RunConfig::default())
        .err()
        .unwrap();
    assert!(matches!(err, EdgeBenchError::DimensionMismatch { .. }));
}

#[test]
fn scalar_and_buffer_modes_agree_through_the_harness() {
    let input = make_raster(24, 18);
    let config = RunConfig::default();

    let mut scalar_out = PixelBuffer::zeroed(24, 18).unwrap();
    run(Mode::Scalar, &input, &mut scalar_out, &config).unwrap();

    let mut buffer_out = PixelBuffer::zeroed(24, 18).unwrap();
    run(Mode::Buffer, &input, &mut buffer_out, &config).unwrap();

    assert_eq!(scalar_out.as_bytes(), buffer_out.as_bytes());
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_mode_agrees_through_the_harness() {
    let input = make_raster(24, 18);

    let mut buffer_out = PixelBuffer::zeroed(24, 18).unwrap();
    run(Mode::Buffer, &input, &mut buffer_out, &RunConfig::default()).unwrap();

    for workers in [1, 3] {
        let config = RunConfig {
            workers,
            ..RunConfig::default()
        };
        let mut parallel_out = PixelBuffer::zeroed(24, 18).unwrap();
        run(Mode::Parallel, &input, &mut parallel_out, &config).unwrap();
        assert_eq!(buffer_out.as_bytes(), parallel_out.as_bytes());
    }
}

#[test]
fn runs_without_interior_are_timed_noops() {
    let input = make_raster(2, 2);
    let mut output = PixelBuffer::zeroed(2, 2).unwrap();
    run(Mode::Buffer, &input, &mut output, &RunConfig::default()).unwrap();
    assert!(output.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn default_worker_count_is_at_least_one() {
    assert!(default_workers() >= 1);
}
