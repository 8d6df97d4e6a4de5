// src/data_analysis/comparison.rs
//
// Pairs the per-field statistics into far/near ratios and derives the final
// drift verdict from the configured thresholds.

use crate::constants::{
    DIFF_RATIO_THRESHOLD, ENTROPY_RATIO_HIGH, ENTROPY_RATIO_LOW, RANGE_RATIO_HIGH, RANGE_RATIO_LOW,
};
use crate::data_analysis::continuity::{horizontal_mean_abs_diff, vertical_mean_abs_diff};
use crate::data_analysis::field_stats::value_range;
use crate::data_analysis::histogram::{density_histogram, histogram_entropy};
use crate::types::{HistogramDensity, NoiseField};

/// Summary statistics of a single noise field.
#[derive(Debug, Clone)]
pub struct FieldStats {
    pub horizontal_diff: f64,
    pub vertical_diff: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub entropy: f64,
    pub histogram: HistogramDensity,
}

impl FieldStats {
    pub fn from_field(field: &NoiseField) -> Self {
        let (min, max, range) = value_range(field);
        let histogram = density_histogram(field);
        let entropy = histogram_entropy(&histogram);
        Self {
            horizontal_diff: horizontal_mean_abs_diff(field),
            vertical_diff: vertical_mean_abs_diff(field),
            min,
            max,
            range,
            entropy,
            histogram,
        }
    }
}

/// Outcome of the near/far comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriftVerdict {
    /// At least one statistic ratio crossed its threshold.
    Degraded { indicators: Vec<String> },
    /// All ratios within their bands.
    Consistent,
}

impl DriftVerdict {
    pub fn to_report_string(&self) -> String {
        match self {
            DriftVerdict::Degraded { indicators } => {
                let mut report =
                    String::from("PRECISION DEGRADATION DETECTED at the far offset:\n");
                for indicator in indicators {
                    report.push_str(&format!("  - {indicator}\n"));
                }
                report
            }
            DriftVerdict::Consistent => String::from(
                "No precision degradation detected: near and far fields are statistically consistent.\n",
            ),
        }
    }
}

/// Far/near comparison of two field statistics.
///
/// Ratios are `None` when the near-field denominator is zero; such a ratio
/// still counts as a degradation indicator when the far field is nonzero
/// there, since the fields then plainly disagree.
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub near: FieldStats,
    pub far: FieldStats,
    pub horizontal_diff_ratio: Option<f64>,
    pub vertical_diff_ratio: Option<f64>,
    pub range_ratio: Option<f64>,
    pub entropy_ratio: Option<f64>,
    pub verdict: DriftVerdict,
}

fn ratio(far: f64, near: f64) -> Option<f64> {
    if near == 0.0 {
        None
    } else {
        Some(far / near)
    }
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{r:.2}x"),
        None => "n/a (near-field value is zero)".to_string(),
    }
}

impl ComparisonReport {
    pub fn new(near: FieldStats, far: FieldStats) -> Self {
        let horizontal_diff_ratio = ratio(far.horizontal_diff, near.horizontal_diff);
        let vertical_diff_ratio = ratio(far.vertical_diff, near.vertical_diff);
        let range_ratio = ratio(far.range, near.range);
        let entropy_ratio = ratio(far.entropy, near.entropy);

        let mut indicators = Vec::new();

        match horizontal_diff_ratio {
            Some(r) if r > DIFF_RATIO_THRESHOLD => indicators.push(format!(
                "horizontal continuity ratio {r:.2}x exceeds {DIFF_RATIO_THRESHOLD:.2}x"
            )),
            None if far.horizontal_diff != 0.0 => indicators.push(format!(
                "near field has zero horizontal variation while far field shows {:.6}",
                far.horizontal_diff
            )),
            _ => {}
        }
        match vertical_diff_ratio {
            Some(r) if r > DIFF_RATIO_THRESHOLD => indicators.push(format!(
                "vertical continuity ratio {r:.2}x exceeds {DIFF_RATIO_THRESHOLD:.2}x"
            )),
            None if far.vertical_diff != 0.0 => indicators.push(format!(
                "near field has zero vertical variation while far field shows {:.6}",
                far.vertical_diff
            )),
            _ => {}
        }
        match range_ratio {
            Some(r) if !(RANGE_RATIO_LOW..=RANGE_RATIO_HIGH).contains(&r) => indicators.push(
                format!("value range ratio {r:.2}x outside [{RANGE_RATIO_LOW:.2}, {RANGE_RATIO_HIGH:.2}]"),
            ),
            None if far.range != 0.0 => indicators.push(format!(
                "near field has zero value range while far field spans {:.6}",
                far.range
            )),
            _ => {}
        }
        match entropy_ratio {
            Some(r) if !(ENTROPY_RATIO_LOW..=ENTROPY_RATIO_HIGH).contains(&r) => indicators.push(
                format!("entropy ratio {r:.2}x outside [{ENTROPY_RATIO_LOW:.2}, {ENTROPY_RATIO_HIGH:.2}]"),
            ),
            None if far.entropy != 0.0 => indicators.push(format!(
                "near field has zero entropy while far field has {:.6}",
                far.entropy
            )),
            _ => {}
        }

        let verdict = if indicators.is_empty() {
            DriftVerdict::Consistent
        } else {
            DriftVerdict::Degraded { indicators }
        };

        Self {
            near,
            far,
            horizontal_diff_ratio,
            vertical_diff_ratio,
            range_ratio,
            entropy_ratio,
            verdict,
        }
    }

    /// Renders the statistics table in the order the console report prints it.
    pub fn to_report_string(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "  Horizontal diff (near): {:.6}\n",
            self.near.horizontal_diff
        ));
        report.push_str(&format!(
            "  Horizontal diff (far):  {:.6}\n",
            self.far.horizontal_diff
        ));
        report.push_str(&format!(
            "  Horizontal diff ratio:  {}\n",
            format_ratio(self.horizontal_diff_ratio)
        ));
        report.push_str(&format!(
            "  Vertical diff (near):   {:.6}\n",
            self.near.vertical_diff
        ));
        report.push_str(&format!(
            "  Vertical diff (far):    {:.6}\n",
            self.far.vertical_diff
        ));
        report.push_str(&format!(
            "  Vertical diff ratio:    {}\n",
            format_ratio(self.vertical_diff_ratio)
        ));
        report.push_str(&format!(
            "  Value range (near):     {:.6} [{:.6}, {:.6}]\n",
            self.near.range, self.near.min, self.near.max
        ));
        report.push_str(&format!(
            "  Value range (far):      {:.6} [{:.6}, {:.6}]\n",
            self.far.range, self.far.min, self.far.max
        ));
        report.push_str(&format!(
            "  Range ratio:            {}\n",
            format_ratio(self.range_ratio)
        ));
        report.push_str(&format!("  Entropy (near):         {:.6}\n", self.near.entropy));
        report.push_str(&format!("  Entropy (far):          {:.6}\n", self.far.entropy));
        report.push_str(&format!(
            "  Entropy ratio:          {}\n",
            format_ratio(self.entropy_ratio)
        ));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn smooth_field(amplitude: f64) -> NoiseField {
        // Gentle sinusoidal field bounded by `amplitude`.
        Array2::from_shape_fn((20, 20), |(i, j)| {
            amplitude * ((i as f64 * 0.3).sin() * (j as f64 * 0.3).cos())
        })
    }

    fn noisy_field(amplitude: f64) -> NoiseField {
        // Alternating checkerboard, maximally discontinuous.
        Array2::from_shape_fn((20, 20), |(i, j)| {
            if (i + j) % 2 == 0 {
                amplitude
            } else {
                -amplitude
            }
        })
    }

    #[test]
    fn identical_fields_are_consistent() {
        let field = smooth_field(0.8);
        let report = ComparisonReport::new(
            FieldStats::from_field(&field),
            FieldStats::from_field(&field),
        );
        assert_eq!(report.verdict, DriftVerdict::Consistent);
        assert_eq!(report.horizontal_diff_ratio, Some(1.0));
        assert_eq!(report.vertical_diff_ratio, Some(1.0));
        assert_eq!(report.range_ratio, Some(1.0));
        assert_eq!(report.entropy_ratio, Some(1.0));
    }

    #[test]
    fn checkerboard_far_field_triggers_continuity_indicator() {
        let report = ComparisonReport::new(
            FieldStats::from_field(&smooth_field(0.8)),
            FieldStats::from_field(&noisy_field(0.8)),
        );
        match &report.verdict {
            DriftVerdict::Degraded { indicators } => {
                assert!(indicators
                    .iter()
                    .any(|s| s.contains("horizontal continuity ratio")));
            }
            DriftVerdict::Consistent => panic!("checkerboard field should flag degradation"),
        }
    }

    #[test]
    fn collapsed_far_range_triggers_range_indicator() {
        let near = smooth_field(0.8);
        let far = smooth_field(0.1); // same shape, collapsed amplitude
        let report =
            ComparisonReport::new(FieldStats::from_field(&near), FieldStats::from_field(&far));
        match &report.verdict {
            DriftVerdict::Degraded { indicators } => {
                assert!(indicators.iter().any(|s| s.contains("value range ratio")));
            }
            DriftVerdict::Consistent => panic!("collapsed range should flag degradation"),
        }
    }

    #[test]
    fn zero_near_denominator_yields_absent_ratio() {
        let constant = NoiseField::from_elem((10, 10), 0.0);
        let report = ComparisonReport::new(
            FieldStats::from_field(&constant),
            FieldStats::from_field(&smooth_field(0.8)),
        );
        assert_eq!(report.horizontal_diff_ratio, None);
        assert_eq!(report.range_ratio, None);
        match &report.verdict {
            DriftVerdict::Degraded { indicators } => {
                assert!(indicators.iter().any(|s| s.contains("zero horizontal variation")));
            }
            DriftVerdict::Consistent => panic!("disagreeing fields should flag degradation"),
        }
    }

    #[test]
    fn zero_denominator_with_zero_numerator_is_benign() {
        let constant = NoiseField::from_elem((10, 10), 0.0);
        let report = ComparisonReport::new(
            FieldStats::from_field(&constant),
            FieldStats::from_field(&constant),
        );
        // Entropy of a point-mass histogram is nonzero, so its ratio exists;
        // everything else is 0/0 and stays benign.
        assert_eq!(report.verdict, DriftVerdict::Consistent);
    }

    #[test]
    fn report_string_marks_absent_ratios() {
        let constant = NoiseField::from_elem((10, 10), 0.0);
        let report = ComparisonReport::new(
            FieldStats::from_field(&constant),
            FieldStats::from_field(&constant),
        );
        let rendered = report.to_report_string();
        assert!(rendered.contains("n/a"));
    }

    #[test]
    fn verdict_report_strings() {
        let consistent = DriftVerdict::Consistent;
        assert!(consistent.to_report_string().contains("statistically consistent"));

        let degraded = DriftVerdict::Degraded {
            indicators: vec!["entropy ratio 1.50x outside [0.80, 1.20]".to_string()],
        };
        let rendered = degraded.to_report_string();
        assert!(rendered.contains("PRECISION DEGRADATION DETECTED"));
        assert!(rendered.contains("entropy ratio"));
    }
}

// src/data_analysis/comparison.rs
