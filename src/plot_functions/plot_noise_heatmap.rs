// src/plot_functions/plot_noise_heatmap.rs

use std::error::Error;

use ndarray_stats::QuantileExt;

use crate::field_gen::FieldSpec;
use crate::field_names::FIELD_NAMES;
use crate::plot_framework::{draw_comparative_heatmap_plot, HeatmapData, HeatmapPlotConfig};
use crate::types::FieldPair;

/// Generates a comparative image with the near and far noise fields rendered
/// side by side as viridis heatmaps over a shared color scale.
///
/// Panels are drawn in local lattice coordinates (i/step) so both share the
/// same axis labels; the coordinate offset goes into the panel title.
pub fn plot_noise_heatmap(
    fields: &FieldPair,
    specs: &[FieldSpec; 2],
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_Noise_Field_comparative.png");
    let plot_type_name = "Noise Field";

    let mut all_heatmap_data: [Option<HeatmapPlotConfig>; 2] = Default::default();

    for (field_index, (field, spec)) in fields.iter().zip(specs.iter()).enumerate() {
        let field_name = FIELD_NAMES[field_index];
        let (rows, cols) = field.dim();
        if rows == 0 || cols == 0 {
            println!("  No samples in the {field_name} field. Skipping its heatmap panel.");
            continue;
        }

        let x_bins: Vec<f64> = (0..rows).map(|i| i as f64 / spec.step).collect();
        let y_bins: Vec<f64> = (0..cols).map(|j| j as f64 / spec.step).collect();
        let values: Vec<Vec<f64>> = (0..rows)
            .map(|i| (0..cols).map(|j| field[[i, j]]).collect())
            .collect();

        let bin_width = 1.0 / spec.step;
        let x_range_plot = if rows > 1 {
            x_bins[0]..x_bins[rows - 1]
        } else {
            x_bins[0]..x_bins[0] + bin_width
        };
        let y_range_plot = if cols > 1 {
            y_bins[0]..y_bins[cols - 1]
        } else {
            y_bins[0]..y_bins[0] + bin_width
        };

        // Per-panel extrema feed the joint color scale in the framework.
        let (min_value, max_value) = match (field.min(), field.max()) {
            (Ok(&min), Ok(&max)) => (min, max),
            _ => (f64::NAN, f64::NAN),
        };

        all_heatmap_data[field_index] = Some(HeatmapPlotConfig {
            title: format!("{field_name} Field (offset {})", spec.offset),
            x_range: x_range_plot,
            y_range: y_range_plot,
            heatmap_data: HeatmapData {
                x_bins,
                y_bins,
                values,
            },
            x_label: "X (lattice units)".to_string(),
            y_label: "Y (lattice units)".to_string(),
            min_value,
            max_value,
        });
    }

    draw_comparative_heatmap_plot(&output_file, root_name, plot_type_name, move |field_index| {
        all_heatmap_data[field_index].take()
    })
}

// src/plot_functions/plot_noise_heatmap.rs
