//! Filter demo
//! Draws a gradient test image, triggers every action once on a fresh engine and saves each result

use image::{Rgba, RgbaImage};
use pixel_filter::{Action, FilterEngine, FilterSettings, SourceImage};
use std::path::{Path, PathBuf};

fn test_image(width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let b = ((x + y) * 255 / (width + height)) as u8;
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }

    img
}

fn run(output_dir: &Path, source: RgbaImage) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output_dir)?;

    let source_path = output_dir.join("source.png");
    source.save(&source_path)?;
    let source = SourceImage::open(&source_path)?;

    let mut outputs = vec![];
    for action in Action::all() {
        let mut engine = FilterEngine::with_source_size(source.clone(), FilterSettings::default());
        engine.on_load();
        engine.trigger(*action)?;

        let path = output_dir.join(format!("{}.png", action.name()));
        engine.surface().save(&path)?;
        println!("✓ Generated {}", path.display());
        outputs.push(path);
    }

    Ok(outputs)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Path::new("tmp"), test_image(800, 600))?;

    println!("\n✓ All filters applied successfully!");
    println!("  Images saved to: tmp/");

    Ok(())
}
