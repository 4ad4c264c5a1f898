use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pathsign::{render, DetectorConfig, ImageFile, PixelSource};

#[derive(Parser)]
#[command(name = "pathsign", about = "Thin-path and red-ring sign extraction from raster images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect a thin bright path and print its simplified polyline
    Path {
        /// Input image path (PNG, JPEG, BMP)
        #[arg(short, long)]
        input: PathBuf,

        /// RDP tolerance in pixels (higher = fewer path points)
        #[arg(short, long, default_value = "5.0")]
        epsilon: f64,

        /// Fraction of the way from the second-brightest to the brightest
        /// palette colour where the brightness threshold sits
        #[arg(long, default_value = "0.75")]
        brightness: f64,

        /// Number of palette colours extracted from the image
        #[arg(long, default_value = "5")]
        palette_size: usize,

        /// Write a PNG with edges and path drawn over the input
        #[arg(long)]
        overlay: Option<PathBuf>,
    },

    /// Detect a red-ringed sign and print its bitmap
    Sign {
        /// Input image path (PNG, JPEG, BMP)
        #[arg(short, long)]
        input: PathBuf,

        /// Channel fraction for red detection (r > 1-f, g and b < f)
        #[arg(long, default_value = "0.2")]
        red_fraction: f64,

        /// Write a PNG with the detected circle drawn over the input
        #[arg(long)]
        overlay: Option<PathBuf>,

        /// Write the extracted sign bitmap as a grayscale PNG
        #[arg(long)]
        bitmap: Option<PathBuf>,

        /// Also print the sign resampled to this side length
        #[arg(long)]
        classifier_width: Option<u32>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Path {
            input,
            epsilon,
            brightness,
            palette_size,
            overlay,
        } => {
            let config = DetectorConfig {
                rdp_epsilon: epsilon,
                brightness_fraction: brightness,
                palette_size,
                ..DetectorConfig::default()
            };
            let source = ImageFile::new(&input, config.palette_size);
            let detected = pathsign::trace_path(&source, &config)?;

            eprintln!();
            eprintln!("  pathsign \u{00b7} path \u{00b7} {}", input.display());
            eprintln!(
                "  Result      {} edges \u{00b7} {} midpoints \u{00b7} {} path points",
                detected.edges.len(),
                detected.midpoints.len(),
                detected.path.len(),
            );

            for p in &detected.path {
                println!("{} {}", p.x, p.y);
            }

            if let Some(out) = overlay {
                let canvas = render::render_path_overlay(&source.pixels()?, &detected);
                render::save_png(&canvas, &out)?;
                eprintln!("  Overlay     {}", out.display());
            }
        }
        Command::Sign {
            input,
            red_fraction,
            overlay,
            bitmap,
            classifier_width,
        } => {
            let config = DetectorConfig {
                red_channel_fraction: red_fraction,
                classifier_width: classifier_width.unwrap_or(DetectorConfig::default().classifier_width),
                ..DetectorConfig::default()
            };
            let source = ImageFile::new(&input, config.palette_size);
            let detected = pathsign::extract_sign(&source, &config)?;

            eprintln!();
            eprintln!("  pathsign \u{00b7} sign \u{00b7} {}", input.display());
            eprintln!(
                "  Result      {} ring pixels \u{00b7} centre ({:.2}, {:.2}) \u{00b7} radius {:.2} \u{00b7} {}x{}",
                detected.points.len(),
                detected.centre.x,
                detected.centre.y,
                detected.radius,
                detected.side,
                detected.side,
            );

            for row in detected.sign.chunks(detected.side.max(1) as usize) {
                let line: String = row.iter().map(|&v| if v > 0 { '#' } else { '.' }).collect();
                println!("{}", line);
            }

            if classifier_width.is_some() {
                let prepared = detected.prepare(config.classifier_width)?;
                let values: Vec<String> = prepared.iter().map(|v| format!("{:.0}", v)).collect();
                println!("{}", values.join(","));
            }

            if let Some(out) = overlay {
                let canvas = render::render_sign_overlay(&source.pixels()?, &detected);
                render::save_png(&canvas, &out)?;
                eprintln!("  Overlay     {}", out.display());
            }

            if let Some(out) = bitmap {
                detected.to_image()?.save(&out)?;
                eprintln!("  Bitmap      {}", out.display());
            }
        }
    }

    eprintln!();
    Ok(())
}
