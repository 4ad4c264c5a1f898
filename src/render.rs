//! Debug overlays of detection results on the source image.

use std::path::Path;

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_cross_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use kurbo::PathEl;

use crate::bitmap::PixelBuffer;
use crate::error::DetectError;
use crate::path::DetectedPath;
use crate::sign::DetectedSign;

const EDGE: Rgba<u8> = Rgba([0, 120, 255, 255]);
const PATH: Rgba<u8> = Rgba([255, 40, 40, 255]);
const SIGN: Rgba<u8> = Rgba([0, 200, 0, 255]);

/// Source image with edges painted blue and the simplified path in red.
pub fn render_path_overlay(buffer: &PixelBuffer, detected: &DetectedPath) -> RgbaImage {
    let mut canvas = buffer.to_rgba_image();
    for edge in &detected.edges {
        if edge.x < canvas.width() && edge.y < canvas.height() {
            canvas.put_pixel(edge.x, edge.y, EDGE);
        }
    }

    let mut current = None;
    for el in detected.to_bezpath().elements() {
        match *el {
            PathEl::MoveTo(p) => current = Some(p),
            PathEl::LineTo(p) => {
                if let Some(from) = current {
                    draw_line_segment_mut(
                        &mut canvas,
                        (from.x as f32, from.y as f32),
                        (p.x as f32, p.y as f32),
                        PATH,
                    );
                }
                current = Some(p);
            }
            _ => {}
        }
    }
    // A one-point path still deserves a mark.
    if let [only] = detected.path.as_slice() {
        draw_cross_mut(&mut canvas, PATH, only.x.round() as i32, only.y.round() as i32);
    }
    canvas
}

/// Source image with the inscribed circle and its centre in green.
pub fn render_sign_overlay(buffer: &PixelBuffer, detected: &DetectedSign) -> RgbaImage {
    let mut canvas = buffer.to_rgba_image();
    let centre = (
        detected.centre.x.round() as i32,
        detected.centre.y.round() as i32,
    );
    draw_hollow_circle_mut(&mut canvas, centre, detected.radius.floor() as i32, SIGN);
    draw_cross_mut(&mut canvas, SIGN, centre.0, centre.1);
    canvas
}

/// Write an overlay (or any RGBA image) as PNG.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), DetectError> {
    img.save(path)
        .map_err(|e| DetectError::ImageWrite(e.to_string()))
}
