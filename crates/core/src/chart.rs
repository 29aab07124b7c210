use crate::aqi::AQI_SCALE_MAX;
use crate::forecast::{ImportanceEntry, Pollutant, PollutantsHistory, Prediction};
use serde::Serialize;

/// Number of past days plotted in the pollutant trend chart.
pub const HISTORY_DAYS: usize = 7;

/// Importance values are floats; bar widgets take integers, so they are scaled.
pub const IMPORTANCE_SCALE: f64 = 1000.0;

/// One x-axis point of the pollutant chart. Cells are indexed by
/// [`Pollutant::index`] and are `None` where the source series has no value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollutantRow {
    pub day: String,
    pub values: [Option<f64>; 6],
}

impl PollutantRow {
    pub const fn value(&self, pollutant: Pollutant) -> Option<f64> {
        self.values[pollutant.index()]
    }
}

/// Zips the six pollutant series into `HISTORY_DAYS` rows labelled
/// "Day 1".."Day 7". Missing or short series and `null` entries leave gaps in
/// their column only.
pub fn shape_pollutant_rows(history: &PollutantsHistory) -> Vec<PollutantRow> {
    (0..HISTORY_DAYS)
        .map(|day| {
            let mut values = [None; 6];
            for pollutant in Pollutant::ALL {
                values[pollutant.index()] = history
                    .series(pollutant)
                    .and_then(|series| series.get(day).copied().flatten());
            }
            PollutantRow {
                day: format!("Day {}", day + 1),
                values,
            }
        })
        .collect()
}

/// Splits one pollutant column into contiguous line segments of `(x, y)`
/// points, x being the 1-based day. A gap ends the current segment.
pub fn series_segments(rows: &[PollutantRow], pollutant: Pollutant) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        if let Some(value) = row.value(pollutant) {
            #[allow(clippy::cast_precision_loss)]
            current.push(((index + 1) as f64, value));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Largest value present across every column, used to size the y axis.
pub fn max_value(rows: &[PollutantRow]) -> Option<f64> {
    rows.iter()
        .flat_map(|row| row.values.iter().flatten().copied())
        .fold(None, |max, value| match max {
            Some(current) if current >= value => Some(current),
            _ => Some(value),
        })
}

pub fn average_aqi(predictions: &[Prediction]) -> Option<f64> {
    if predictions.is_empty() {
        return None;
    }
    let total: f64 = predictions.iter().map(|p| p.predicted_aqi).sum();
    #[allow(clippy::cast_precision_loss)]
    Some(total / predictions.len() as f64)
}

/// Normalises an average AQI into the gauge's 0..=1 range.
pub fn gauge_fraction(average: f64) -> f64 {
    (average / AQI_SCALE_MAX).clamp(0.0, 1.0)
}

/// Integer bar height for one importance value. Negative and non-finite
/// values draw as an empty bar.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn importance_bar_value(importance: f64) -> u64 {
    if importance.is_finite() && importance > 0.0 {
        (importance * IMPORTANCE_SCALE).round() as u64
    } else {
        0
    }
}

/// Tallest bar across the report, at least 1 so an all-zero chart has a scale.
pub fn importance_bar_max(entries: &[ImportanceEntry]) -> u64 {
    entries
        .iter()
        .map(|entry| importance_bar_value(entry.importance))
        .max()
        .unwrap_or(0)
        .max(1)
}
