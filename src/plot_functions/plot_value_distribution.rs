// src/plot_functions/plot_value_distribution.rs

use std::error::Error;

use crate::constants::{
    COLOR_FAR_FIELD, COLOR_NEAR_FIELD, HISTOGRAM_BINS, LINE_WIDTH_PLOT, NOISE_VALUE_MIN,
};
use crate::data_analysis::histogram::bin_width;
use crate::field_names::FIELD_NAMES;
use crate::plot_framework::{calculate_range, draw_single_chart_plot, PlotConfig, PlotSeries};
use crate::types::HistogramDensity;

/// Converts a density histogram into a step-line series: two points per bin,
/// at the left and right bin edges.
fn histogram_step_series(density: &HistogramDensity) -> Vec<(f64, f64)> {
    let width = bin_width();
    let mut points = Vec::with_capacity(density.len() * 2);
    for (bin, &d) in density.iter().enumerate() {
        let left = NOISE_VALUE_MIN + bin as f64 * width;
        points.push((left, d));
        points.push((left + width, d));
    }
    points
}

/// Generates an image overlaying the value-density histograms of the near and
/// far fields, so a collapsed or skewed far-field distribution is visible at
/// a glance.
pub fn plot_value_distribution(
    histograms: &[HistogramDensity; 2],
    root_name: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{root_name}_Value_Distribution_comparative.png");
    let plot_type_name = "Value Distribution";

    if histograms.iter().all(|h| h.iter().all(|&d| d == 0.0)) {
        println!("\n  INFO: Both value histograms are empty. Drawing placeholder.");
        return draw_single_chart_plot(&output_file, root_name, plot_type_name, None);
    }

    let max_density = histograms
        .iter()
        .flat_map(|h| h.iter().cloned())
        .fold(0.0, f64::max);
    let (_, y_max) = calculate_range(0.0, max_density);

    let width = bin_width();
    let x_min = NOISE_VALUE_MIN;
    let x_max = NOISE_VALUE_MIN + HISTOGRAM_BINS as f64 * width;

    let series = vec![
        PlotSeries {
            data: histogram_step_series(&histograms[0]),
            label: format!("{} field", FIELD_NAMES[0]),
            color: *COLOR_NEAR_FIELD,
            stroke_width: LINE_WIDTH_PLOT,
        },
        PlotSeries {
            data: histogram_step_series(&histograms[1]),
            label: format!("{} field", FIELD_NAMES[1]),
            color: *COLOR_FAR_FIELD,
            stroke_width: LINE_WIDTH_PLOT,
        },
    ];

    let config = PlotConfig {
        title: "Noise Value Distribution (near vs far)".to_string(),
        x_range: x_min..x_max,
        y_range: 0.0..y_max,
        series,
        x_label: "Noise value".to_string(),
        y_label: "Density".to_string(),
    };

    draw_single_chart_plot(&output_file, root_name, plot_type_name, Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_series_has_two_points_per_bin() {
        let density = vec![0.5; HISTOGRAM_BINS];
        let series = histogram_step_series(&density);
        assert_eq!(series.len(), HISTOGRAM_BINS * 2);
        // Flat histogram: every point at the same density.
        assert!(series.iter().all(|&(_, d)| d == 0.5));
        // Edges span the full value range.
        assert_eq!(series.first().unwrap().0, NOISE_VALUE_MIN);
        let last_x = series.last().unwrap().0;
        assert!((last_x - (NOISE_VALUE_MIN + HISTOGRAM_BINS as f64 * bin_width())).abs() < 1e-12);
    }
}

// src/plot_functions/plot_value_distribution.rs
