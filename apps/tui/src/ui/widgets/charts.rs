use crate::ui::theme::{border_style, muted, pollutant_color, IMPORTANCE_BAR};
use aqi_core::chart::{
    importance_bar_max, importance_bar_value, max_value, series_segments, PollutantRow,
    HISTORY_DAYS,
};
use aqi_core::{ImportanceEntry, Pollutant};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, LegendPosition,
    Paragraph, Wrap,
};
use ratatui::Frame;

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style())
}

fn render_placeholder(title: &str, lines: Vec<TextLine<'_>>, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(Text::from(lines))
        .block(chart_block(title))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Past week of pollutant averages, one line per pollutant. Gaps in a
/// series break its line instead of being drawn as zero.
pub fn render_pollutant_chart(rows: &[PollutantRow], f: &mut Frame<'_>, area: Rect) {
    const TITLE: &str = "Past 7 Days Pollutant Trends";

    let Some(max) = max_value(rows) else {
        render_placeholder(
            TITLE,
            vec![TextLine::from("No pollutant history available")],
            f,
            area,
        );
        return;
    };

    let series: Vec<(Pollutant, Vec<Vec<(f64, f64)>>)> = Pollutant::ALL
        .into_iter()
        .map(|pollutant| (pollutant, series_segments(rows, pollutant)))
        .collect();

    let mut datasets = Vec::new();
    for (pollutant, segments) in &series {
        for (index, segment) in segments.iter().enumerate() {
            // A lone point has no neighbour to draw a line to.
            let graph_type = if segment.len() == 1 {
                GraphType::Scatter
            } else {
                GraphType::Line
            };
            let mut dataset = Dataset::default()
                .marker(Marker::Braille)
                .graph_type(graph_type)
                .style(Style::default().fg(pollutant_color(*pollutant)))
                .data(segment);
            if index == 0 {
                dataset = dataset.name(pollutant.code());
            }
            datasets.push(dataset);
        }
    }

    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };
    #[allow(clippy::cast_precision_loss)]
    let x_max = HISTORY_DAYS as f64;

    let x_labels = vec![
        Span::raw("Day 1"),
        Span::raw(format!("Day {}", HISTORY_DAYS.div_ceil(2))),
        Span::raw(format!("Day {HISTORY_DAYS}")),
    ];
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{:.0}", y_max / 2.0)),
        Span::raw(format!("{y_max:.0}")),
    ];

    let chart = Chart::new(datasets)
        .block(chart_block(TITLE))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([1.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        )
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    f.render_widget(chart, area);
}

/// SHAP feature importance in the order the report lists it.
pub fn render_importance_chart(
    entries: &[ImportanceEntry],
    error: Option<&str>,
    f: &mut Frame<'_>,
    area: Rect,
) {
    const TITLE: &str = "Feature Importance (SHAP Analysis)";

    if entries.is_empty() {
        let mut lines = vec![TextLine::from("No feature importance data")];
        if let Some(error) = error {
            lines.push(TextLine::from(""));
            lines.push(TextLine::from(Span::styled(error.to_string(), muted())));
        }
        render_placeholder(TITLE, lines, f, area);
        return;
    }

    let bars: Vec<Bar<'_>> = entries
        .iter()
        .map(|entry| {
            Bar::default()
                .value(importance_bar_value(entry.importance))
                .text_value(format!("{:.3}", entry.importance))
                .label(TextLine::from(entry.feature.as_str()))
                .style(Style::default().fg(IMPORTANCE_BAR))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(IMPORTANCE_BAR)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let count = u16::try_from(entries.len()).unwrap_or(u16::MAX);
    let bar_width = (inner_width / count.max(1)).saturating_sub(1).clamp(3, 12);

    let chart = BarChart::default()
        .block(chart_block(TITLE))
        .data(BarGroup::default().bars(&bars))
        .max(importance_bar_max(entries))
        .bar_gap(1)
        .bar_width(bar_width);

    f.render_widget(chart, area);
}
