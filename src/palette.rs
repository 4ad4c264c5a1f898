//! Representative colours of an image.
//!
//! Each pixel is quantized to 4 bits per channel; the most populated
//! buckets are reported as the mean colour of their members.

use std::collections::BTreeMap;

use crate::bitmap::{PixelBuffer, Rgb};
use crate::conversions::rgba_to_rgb;

#[derive(Default)]
struct Bucket {
    count: u64,
    sum: [u64; 3],
}

fn bucket_key(rgb: Rgb) -> u16 {
    let [r, g, b] = rgb.map(|c| u16::from(c >> 4));
    (r << 8) | (g << 4) | b
}

/// Up to `count` colours, most frequent first. Buckets with equal
/// population are ordered by their quantized colour, darkest channel
/// pattern first, so the result is deterministic.
pub fn extract_palette(buffer: &PixelBuffer, count: usize) -> Vec<Rgb> {
    let mut buckets: BTreeMap<u16, Bucket> = BTreeMap::new();
    for &rgba in buffer.pixels() {
        let rgb = rgba_to_rgb(rgba);
        let bucket = buckets.entry(bucket_key(rgb)).or_default();
        bucket.count += 1;
        for (sum, c) in bucket.sum.iter_mut().zip(rgb) {
            *sum += u64::from(c);
        }
    }

    let mut ranked: Vec<(u16, Bucket)> = buckets.into_iter().collect();
    // Stable sort keeps ascending key order among equal counts.
    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count));

    ranked
        .into_iter()
        .take(count)
        .map(|(_, bucket)| {
            bucket
                .sum
                .map(|s| ((s as f64 / bucket.count as f64).round()) as u8)
        })
        .collect()
}
