use image::{Rgba, RgbaImage};
use pathsign::kurbo::Point;
use pathsign::{
    edges, extract_sign, rdp, trace_path, DetectError, DetectorConfig, InMemory, Pixel,
    PixelBuffer,
};

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

fn single_bright_pixel() -> PixelBuffer {
    let mut buffer = PixelBuffer::filled(3, 3, [0, 0, 0, 255]);
    buffer.set(1, 1, [255, 255, 255, 255]);
    buffer
}

/// A white path two to four pixels wide meandering down a dark image.
fn meandering_path() -> PixelBuffer {
    let img = RgbaImage::from_fn(40, 30, |x, y| {
        let centre = 20.0 + 8.0 * (y as f64 / 6.0).sin();
        if (x as f64 - centre).abs() <= 1.5 {
            Rgba([250, 250, 250, 255])
        } else {
            Rgba([20, 25, 30, 255])
        }
    });
    PixelBuffer::from(&img)
}

fn ring_sign() -> PixelBuffer {
    let img = RgbaImage::from_fn(31, 31, |x, y| {
        let d = (x as f64 - 15.0).hypot(y as f64 - 15.0);
        if (10.0..=13.0).contains(&d) {
            Rgba([240, 10, 10, 255])
        } else if x == 15 && (11..=19).contains(&y) {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    PixelBuffer::from(&img)
}

#[test]
fn single_bright_pixel_end_to_end() {
    let config = DetectorConfig::default();
    let threshold = edges::luminance_threshold(&[BLACK, WHITE], &config).unwrap();
    assert!((threshold - 0.75).abs() < 1e-12);

    let source = InMemory::new(single_bright_pixel(), vec![BLACK, WHITE]);
    let detected = trace_path(&source, &config).unwrap();
    assert_eq!(detected.edges, vec![Pixel::new(1, 1)]);
    // One edge in the row: no pair to take the midpoint of.
    assert!(detected.midpoints.is_empty());
    assert!(detected.path.is_empty());

    let lone = [Point::new(1.0, 1.0)];
    assert_eq!(rdp::simplify(&lone, config.rdp_epsilon).unwrap(), lone.to_vec());
}

#[test]
fn path_detection_is_deterministic() {
    let source = InMemory::with_extracted_palette(meandering_path(), 5);
    let config = DetectorConfig::default();
    let first = trace_path(&source, &config).unwrap();
    let second = trace_path(&source, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn meandering_path_is_simplified() {
    let source = InMemory::with_extracted_palette(meandering_path(), 5);
    let config = DetectorConfig {
        rdp_epsilon: 1.0,
        ..DetectorConfig::default()
    };
    let detected = trace_path(&source, &config).unwrap();

    assert_eq!(detected.midpoints.len(), 30, "every row has two edges");
    assert!(detected.path.len() >= 3, "the meander is not straight");
    assert!(detected.path.len() < detected.midpoints.len());
    assert_eq!(detected.path.first(), detected.midpoints.first());
    assert_eq!(detected.path.last(), detected.midpoints.last());
    assert!(detected.path.windows(2).all(|w| w[0].y < w[1].y));

    let coarse = trace_path(
        &source,
        &DetectorConfig {
            rdp_epsilon: f64::INFINITY,
            ..DetectorConfig::default()
        },
    )
    .unwrap();
    assert_eq!(coarse.path.len(), 2);
}

#[test]
fn translucent_buffer_rejected_for_paths_only() {
    let mut buffer = ring_sign();
    buffer.set(0, 0, [255, 255, 255, 10]);
    let source = InMemory::new(buffer, vec![BLACK, WHITE]);
    let config = DetectorConfig::default();

    assert_eq!(
        trace_path(&source, &config).unwrap_err(),
        DetectError::InvalidAlphaChannel { index: 0, alpha: 10 }
    );
    assert!(extract_sign(&source, &config).is_ok());
}

#[test]
fn sign_is_extracted_and_prepared() {
    let source = InMemory::new(ring_sign(), Vec::new());
    let config = DetectorConfig::default();
    let detected = extract_sign(&source, &config).unwrap();

    assert_eq!(detected.centre, Point::new(15.0, 15.0));
    assert_eq!(detected.radius, 10.0);
    assert_eq!(detected.side, 19);
    assert_eq!(detected.sign.len(), 19 * 19);
    let marked = detected.sign.iter().filter(|&&v| v == 255).count();
    assert_eq!(marked, 9, "only the vertical stroke is marked");

    let again = extract_sign(&source, &config).unwrap();
    assert_eq!(detected, again);

    let prepared = detected.prepare(config.classifier_width).unwrap();
    assert_eq!(prepared.len(), 28 * 28);
    assert!(prepared.iter().all(|&v| (0.0..=255.0).contains(&v)));
}

#[test]
fn squashed_ring_is_not_a_sign() {
    // Ring centred between columns 14 and 15.
    let img = RgbaImage::from_fn(30, 31, |x, y| {
        let d = (x as f64 - 14.5).hypot(y as f64 - 15.0);
        if (9.5..=12.0).contains(&d) {
            Rgba([240, 10, 10, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let source = InMemory::new(PixelBuffer::from(&img), Vec::new());
    let err = extract_sign(&source, &DetectorConfig::default()).unwrap_err();
    assert!(matches!(err, DetectError::NonCircularSign { .. }), "{:?}", err);
}
