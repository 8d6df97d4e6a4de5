// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::PathElement;
use plotters::element::Rectangle;
use plotters::element::Text;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::ops::Range;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, NOISE_VALUE_MAX, NOISE_VALUE_MIN, PLOT_HEIGHT,
    PLOT_WIDTH,
};
use crate::field_names::FIELD_NAMES;

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    field_index: usize,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let field_name = if field_index < FIELD_NAMES.len() {
        FIELD_NAMES[field_index]
    } else {
        "Unknown"
    };
    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{field_name} {plot_type} Data Unavailable:\n{reason}");

    // Estimate text dimensions for better centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Clone)]
pub struct HeatmapData {
    pub x_bins: Vec<f64>,
    pub y_bins: Vec<f64>,
    pub values: Vec<Vec<f64>>,
}

#[derive(Clone)]
pub struct HeatmapPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub heatmap_data: HeatmapData,
    pub x_label: String,
    pub y_label: String,
    // Value bounds for color scaling; the framework takes the joint bounds
    // over both panels so the two colorbars agree.
    pub min_value: f64,
    pub max_value: f64,
}

fn map_value_to_color(value: f64, min_value: f64, max_value: f64) -> RGBColor {
    // Validate input parameters
    if !value.is_finite() || !min_value.is_finite() || !max_value.is_finite() {
        return RGBColor(0, 0, 0); // Black for invalid values
    }

    // Ensure span is non-zero to avoid division by zero
    let span = (max_value - min_value).abs().max(1e-9);

    let clamped = value.clamp(min_value, max_value);
    let t = ((clamped - min_value) / span).clamp(0.0, 1.0);

    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

/// Draws a single line chart from a PlotConfig.
fn draw_single_line_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        if s.data.is_empty() {
            continue;
        }
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            s.color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            let color = s.color;
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Draws a single heatmap chart for one field within the comparative image.
fn draw_single_heatmap_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &HeatmapPlotConfig,
    min_value: f64,
    max_value: f64,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let heatmap_data = &plot_config.heatmap_data;

    // Calculate bin widths for rectangle sizing
    let x_bin_width = if heatmap_data.x_bins.len() > 1 {
        heatmap_data.x_bins[1] - heatmap_data.x_bins[0]
    } else {
        1.0 // fallback for single bin
    };
    let y_bin_width = if heatmap_data.y_bins.len() > 1 {
        heatmap_data.y_bins[1] - heatmap_data.y_bins[0]
    } else {
        1.0 // fallback for single bin
    };

    for (x_idx, &x_val) in heatmap_data.x_bins.iter().enumerate() {
        for (y_idx, &y_val) in heatmap_data.y_bins.iter().enumerate() {
            if let Some(row) = heatmap_data.values.get(x_idx) {
                if let Some(&value) = row.get(y_idx) {
                    let color = map_value_to_color(value, min_value, max_value);
                    let rect = Rectangle::new(
                        [
                            (x_val - x_bin_width * 0.5, y_val - y_bin_width * 0.5),
                            (x_val + x_bin_width * 0.5, y_val + y_bin_width * 0.5),
                        ],
                        color.filled(),
                    );
                    chart.draw_series(std::iter::once(rect))?;
                }
            }
        }
    }
    Ok(())
}

/// Creates a full-image plot with a single chart.
pub fn draw_single_chart_plot<'a>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    plot_config: Option<PlotConfig>,
) -> Result<(), Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    match plot_config {
        Some(config) => {
            let has_data = config.series.iter().any(|s| !s.data.is_empty());
            let valid_ranges = config.x_range.end > config.x_range.start
                && config.y_range.end > config.y_range.start;
            if has_data && valid_ranges {
                draw_single_line_chart(&margined_root_area, &config)?;
                root_area.present()?;
                println!("  Plot saved as '{output_filename}'.");
            } else {
                let reason = if !has_data {
                    "No data points"
                } else {
                    "Invalid ranges"
                };
                draw_unavailable_message(&margined_root_area, 0, plot_type_name, reason)?;
                root_area.present()?;
                println!("  Skipping '{output_filename}' plot saving: No data available, only placeholder message shown.");
            }
        }
        None => {
            draw_unavailable_message(
                &margined_root_area,
                0,
                plot_type_name,
                "Calculation/Data Extraction Failed",
            )?;
            root_area.present()?;
            println!("  Skipping '{output_filename}' plot saving: No data available, only placeholder message shown.");
        }
    }
    Ok(())
}

/// Creates a comparative image with one heatmap panel per field, side by side.
/// Both panels share a color scale so their cells are directly comparable.
pub fn draw_comparative_heatmap_plot<'a, F>(
    output_filename: &'a str,
    root_name: &str,
    plot_type_name: &str,
    mut get_field_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<HeatmapPlotConfig> + Send + Sync + 'static,
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area =
        BitMapBackend::new(output_filename, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((1, FIELD_NAMES.len()));
    let mut any_plot_drawn = false;

    let configs: Vec<Option<HeatmapPlotConfig>> =
        (0..FIELD_NAMES.len()).map(&mut get_field_plot_data).collect();

    // Joint color bounds over all panels; fall back to the theoretical noise
    // bounds when no panel reports finite extrema.
    let mut joint_min = f64::INFINITY;
    let mut joint_max = f64::NEG_INFINITY;
    for config in configs.iter().flatten() {
        if config.min_value.is_finite() {
            joint_min = joint_min.min(config.min_value);
        }
        if config.max_value.is_finite() {
            joint_max = joint_max.max(config.max_value);
        }
    }
    if !joint_min.is_finite() || !joint_max.is_finite() || joint_min >= joint_max {
        joint_min = NOISE_VALUE_MIN;
        joint_max = NOISE_VALUE_MAX;
    }

    for (field_index, config_option) in configs.iter().enumerate() {
        let area = &sub_plot_areas[field_index];
        if let Some(config) = config_option {
            let has_data = !config.heatmap_data.values.is_empty()
                && config.heatmap_data.values.iter().any(|row| !row.is_empty());
            let valid_ranges = config.x_range.end > config.x_range.start
                && config.y_range.end > config.y_range.start;

            if has_data && valid_ranges {
                draw_single_heatmap_chart(area, config, joint_min, joint_max)?;
                any_plot_drawn = true;
            } else {
                let reason = if !has_data {
                    "No data points"
                } else {
                    "Invalid ranges"
                };
                draw_unavailable_message(area, field_index, plot_type_name, reason)?;
            }
        } else {
            draw_unavailable_message(area, field_index, plot_type_name, "Data Not Available")?;
        }
    }

    if any_plot_drawn {
        root_area.present()?;
        println!("  Comparative heatmap plot saved as '{output_filename}'.");
    } else {
        root_area.present()?;
        println!("  Skipping '{output_filename}' heatmap plot saving: No data available for any field to plot, only placeholder messages shown.");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_range_pads_proportionally() {
        let (min, max) = calculate_range(0.0, 10.0);
        assert!((min - (-1.5)).abs() < 1e-12);
        assert!((max - 11.5).abs() < 1e-12);
    }

    #[test]
    fn calculate_range_handles_degenerate_input() {
        let (min, max) = calculate_range(2.0, 2.0);
        assert!((min - 1.5).abs() < 1e-12);
        assert!((max - 2.5).abs() < 1e-12);
    }

    #[test]
    fn calculate_range_orders_swapped_bounds() {
        let (min, max) = calculate_range(10.0, 0.0);
        assert!(min < max);
        assert!(min < 0.0 && max > 10.0);
    }

    #[test]
    fn color_mapping_spans_viridis() {
        let low = map_value_to_color(-1.0, -1.0, 1.0);
        let high = map_value_to_color(1.0, -1.0, 1.0);
        assert_ne!((low.0, low.1, low.2), (high.0, high.1, high.2));
    }

    #[test]
    fn color_mapping_rejects_non_finite() {
        let color = map_value_to_color(f64::NAN, -1.0, 1.0);
        assert_eq!((color.0, color.1, color.2), (0, 0, 0));
    }

    #[test]
    fn color_mapping_clamps_out_of_range() {
        let below = map_value_to_color(-10.0, -1.0, 1.0);
        let at_min = map_value_to_color(-1.0, -1.0, 1.0);
        assert_eq!((below.0, below.1, below.2), (at_min.0, at_min.1, at_min.2));
    }
}

// src/plot_framework.rs
