//! Filter demo: synthetic image processing pipeline
//!
//! Generates a 200x200 synthetic grayscale image with:
//! - Uniform background (value 50)
//! - Large bright rectangle (value 200)
//! - Small bright spots (single-pixel, value 220), "salt" noise
//! - Large dark ellipse (value 10)
//! - Small dark spots (single-pixel, value 5), "pepper" noise
//!
//! Then runs morphology, mean filtering, Gabor filtering and the texture
//! and moment descriptors, printing summary statistics after each step.
//!
//! Run:
//!   cargo run -p tessera-algorithms --example filter_demo

use tessera_algorithms::gabor::{gabor_filter, GaborParams};
use tessera_algorithms::moments::{area, hu_moments};
use tessera_algorithms::morphology::{closing, opening, StructuringElement};
use tessera_algorithms::smoothing::{mean_filter, MeanMode, MeanParams};
use tessera_algorithms::statistics::image_statistics;
use tessera_algorithms::texture::{
    cooccurrence_matrix, haralick, local_binary_pattern, GlcmParams, GlcmTexture,
};
use tessera_core::{Bitmap, Result};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

const ROWS: usize = 200;
const COLS: usize = 200;

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let input = build_synthetic_image()?;
    println!("Synthetic image: {}x{}", COLS, ROWS);
    print_stats("  input", &input);

    let se = StructuringElement::flat(1);
    println!("\nStructuring element: flat 3x3");

    let mut opened = input.clone();
    opening(&mut opened, &se)?;
    print_stats("  opened", &opened);

    let mut cleaned = opened.clone();
    closing(&mut cleaned, &se)?;
    print_stats("  cleaned", &cleaned);

    for mode in [MeanMode::Arithmetic, MeanMode::Harmonic, MeanMode::Geometric] {
        let mut smoothed = input.clone();
        mean_filter(
            &mut smoothed,
            &MeanParams {
                mode,
                ..Default::default()
            },
        )?;
        print_stats(&format!("  {:?}", mode), &smoothed);
    }

    let mut gabor = input.clone();
    gabor_filter(&mut gabor, &GaborParams::default())?;
    print_stats("  gabor", &gabor);

    println!("\n--- Descriptors ---");
    let glcm = cooccurrence_matrix(&cleaned, &GlcmParams::default())?;
    println!(
        "GLCM levels={} pairs={} contrast={:.3} energy={:.4}",
        glcm.levels(),
        glcm.pairs(),
        haralick(&glcm, GlcmTexture::Contrast),
        haralick(&glcm, GlcmTexture::Energy),
    );

    let lbp = local_binary_pattern(&input)?;
    println!("LBP dominant code={} entropy={:.3} bits", lbp.mode(), lbp.entropy());

    let hu = hu_moments(cleaned.to_field()?.view());
    println!("Hu invariants: {:?}", hu);

    let mut mask = cleaned.clone();
    mask.map_planes(|plane| Ok(plane.mapv(|v| if v >= 200 { 255 } else { 0 })))?;
    println!("Bright region area: {} px", area(&mask)?);

    Ok(())
}

/// Build a 200x200 synthetic bitmap with geometric objects and noise.
fn build_synthetic_image() -> Result<Bitmap> {
    let mut img = Bitmap::filled_gray(ROWS, COLS, 50);

    // Large bright rectangle: rows 30..70, cols 30..90
    for r in 30..70 {
        for c in 30..90 {
            img.set_gray(r, c, 200)?;
        }
    }

    // Large dark ellipse: center (140, 100), semi-axes 30x20
    for r in 0..ROWS {
        for c in 0..COLS {
            let dr = (r as f64 - 140.0) / 30.0;
            let dc = (c as f64 - 100.0) / 20.0;
            if dr * dr + dc * dc <= 1.0 {
                img.set_gray(r, c, 10)?;
            }
        }
    }

    // Deterministic noise positions from a simple LCG
    let mut seed: u64 = 42;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        (seed >> 33) as usize
    };
    for _ in 0..80 {
        let (r, c) = (next() % ROWS, next() % COLS);
        img.set_gray(r, c, 220)?;
    }
    for _ in 0..80 {
        let (r, c) = (next() % ROWS, next() % COLS);
        img.set_gray(r, c, 5)?;
    }

    Ok(img)
}

fn print_stats(label: &str, bitmap: &Bitmap) {
    let stats = image_statistics(bitmap);
    match stats.gray() {
        Ok(h) => println!(
            "{:<14} min={:>3}  max={:>3}  mean={:>6.1}  median={:>3}  std={:>6.2}",
            label,
            h.min(),
            h.max(),
            h.mean(),
            h.median(),
            h.std_dev(),
        ),
        Err(e) => println!("{:<14} {}", label, e),
    }
}
