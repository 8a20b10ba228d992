//! Build script for mpdtray.
//!
//! Renders the progress wheel asset table: 101 ARGB32 bitmaps (network byte
//! order, as the StatusNotifierItem `IconPixmap` property expects), one per
//! percent from 0 to 100. The bitmaps are written to `OUT_DIR` and embedded
//! by `src/icons.rs`.

use std::env;
use std::f64::consts::TAU;
use std::fs;
use std::path::PathBuf;

const ICON_SIZE: usize = 24;
const ICON_COUNT: usize = 101;
// Sub-pixel samples per axis used for edge anti-aliasing.
const SAMPLES: usize = 4;

const RING_RGB: [u8; 3] = [0x9a, 0x9a, 0x9a];
const FILL_RGB: [u8; 3] = [0xee, 0xee, 0xee];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

    let mut table = Vec::with_capacity(ICON_COUNT * ICON_SIZE * ICON_SIZE * 4);
    for percent in 0..ICON_COUNT {
        render_wheel(percent as f64 / 100.0, &mut table);
    }

    fs::write(out_dir.join("progress_icons.bin"), &table).expect("write progress_icons.bin");
    fs::write(
        out_dir.join("progress_icons.rs"),
        format!(
            "pub const ICON_SIZE: i32 = {ICON_SIZE};\n\
             pub const ICON_COUNT: usize = {ICON_COUNT};\n\
             static PROGRESS_ICONS: &[u8] = include_bytes!(concat!(env!(\"OUT_DIR\"), \"/progress_icons.bin\"));\n"
        ),
    )
    .expect("write progress_icons.rs");
}

/// Append one wheel filled clockwise from twelve o'clock up to `fraction`.
fn render_wheel(fraction: f64, out: &mut Vec<u8>) {
    let center = ICON_SIZE as f64 / 2.0;
    let outer = center - 0.5;
    let inner = outer - 1.5;
    let sweep = fraction * TAU;

    for y in 0..ICON_SIZE {
        for x in 0..ICON_SIZE {
            let mut ring_hits = 0usize;
            let mut fill_hits = 0usize;

            for sy in 0..SAMPLES {
                for sx in 0..SAMPLES {
                    let px = x as f64 + (sx as f64 + 0.5) / SAMPLES as f64;
                    let py = y as f64 + (sy as f64 + 0.5) / SAMPLES as f64;
                    let dx = px - center;
                    let dy = py - center;
                    let dist = (dx * dx + dy * dy).sqrt();

                    if dist > outer {
                        continue;
                    }
                    if dist > inner {
                        ring_hits += 1;
                        continue;
                    }

                    // Angle measured clockwise from straight up, in [0, TAU).
                    let mut angle = dx.atan2(-dy);
                    if angle < 0.0 {
                        angle += TAU;
                    }
                    if angle < sweep {
                        fill_hits += 1;
                    }
                }
            }

            let total = (SAMPLES * SAMPLES) as f64;
            let (rgb, coverage) = if ring_hits >= fill_hits {
                (RING_RGB, (ring_hits + fill_hits) as f64 / total)
            } else {
                (FILL_RGB, (ring_hits + fill_hits) as f64 / total)
            };
            let alpha = (coverage * 255.0).round() as u8;

            out.push(alpha);
            out.extend_from_slice(&rgb);
        }
    }
}
