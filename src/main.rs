// src/main.rs

use std::env;
use std::error::Error;

use perlin_drift::constants::{
    DEFAULT_FAR_OFFSET, DEFAULT_GRID_SIZE, DEFAULT_OUTPUT_ROOT, DEFAULT_SAMPLE_STEP, DEFAULT_SEED,
};
use perlin_drift::crate_version;
use perlin_drift::data_analysis::comparison::{ComparisonReport, FieldStats};
use perlin_drift::field_gen::{generate_field, FieldSpec};
use perlin_drift::field_names::FIELD_NAMES;
use perlin_drift::noise::perlin::Perlin;
use perlin_drift::plot_functions::plot_noise_heatmap::plot_noise_heatmap;
use perlin_drift::plot_functions::plot_row_profile::plot_row_profile;
use perlin_drift::plot_functions::plot_value_distribution::plot_value_distribution;
use perlin_drift::types::FieldPair;

fn print_usage_and_exit(program: &str) -> ! {
    eprintln!("perlin-drift v{}", crate_version());
    eprintln!("Usage: {program} [far_offset] [grid_size] [seed] [output_root]");
    eprintln!("  far_offset   coordinate offset of the far field (default {DEFAULT_FAR_OFFSET})");
    eprintln!("  grid_size    samples per grid edge (default {DEFAULT_GRID_SIZE})");
    eprintln!("  seed         permutation table seed (default {DEFAULT_SEED})");
    eprintln!("  output_root  stem for generated PNG files (default '{DEFAULT_OUTPUT_ROOT}')");
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() > 5 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        print_usage_and_exit(&args[0]);
    }

    let far_offset: f64 = match args.get(1) {
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Error: invalid far_offset '{s}'");
                print_usage_and_exit(&args[0]);
            }
        },
        None => DEFAULT_FAR_OFFSET,
    };
    let grid_size: usize = match args.get(2) {
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Error: invalid grid_size '{s}'");
                print_usage_and_exit(&args[0]);
            }
        },
        None => DEFAULT_GRID_SIZE,
    };
    let seed: u64 = match args.get(3) {
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Error: invalid seed '{s}'");
                print_usage_and_exit(&args[0]);
            }
        },
        None => DEFAULT_SEED,
    };
    let output_root = args
        .get(4)
        .cloned()
        .unwrap_or_else(|| DEFAULT_OUTPUT_ROOT.to_string());

    println!("Simulating Perlin noise precision at large coordinate offsets...");
    println!("  Far offset: {far_offset}");
    println!("  Grid: {grid_size}x{grid_size} samples, step {DEFAULT_SAMPLE_STEP}, seed {seed}");

    let noise = Perlin::new(seed);
    let specs = [
        FieldSpec {
            offset: 0.0,
            size: grid_size,
            step: DEFAULT_SAMPLE_STEP,
        },
        FieldSpec {
            offset: far_offset,
            size: grid_size,
            step: DEFAULT_SAMPLE_STEP,
        },
    ];

    // --- Field Generation ---
    println!("\n--- Generating Noise Fields ---");
    println!(
        "  Generating {} field (offset {})...",
        FIELD_NAMES[0], specs[0].offset
    );
    let near_field = generate_field(&noise, &specs[0]);
    println!(
        "  Generating {} field (offset {})...",
        FIELD_NAMES[1], specs[1].offset
    );
    let far_field = generate_field(&noise, &specs[1]);
    let fields: FieldPair = [near_field, far_field];

    // --- Statistics ---
    println!("\n--- Computing Comparative Statistics ---");
    let report = ComparisonReport::new(
        FieldStats::from_field(&fields[0]),
        FieldStats::from_field(&fields[1]),
    );
    print!("{}", report.to_report_string());

    // --- Plots ---
    println!("\n--- Generating Plots ---");
    plot_noise_heatmap(&fields, &specs, &output_root)?;
    plot_value_distribution(
        &[report.near.histogram.clone(), report.far.histogram.clone()],
        &output_root,
    )?;
    plot_row_profile(&fields, &specs, &output_root)?;

    // --- Verdict ---
    println!("\n--- Verdict ---");
    print!("{}", report.verdict.to_report_string());

    Ok(())
}
