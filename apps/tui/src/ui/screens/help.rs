use crate::ui::theme::category_color;
use crate::ui::widgets::popup::centered_rect;
use aqi_core::AqiCategory;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn shortcut(key: &'static str, description: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            format!("  {key:<10}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "AQI Forecast Dashboard",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        shortcut("Tab / ←→", "Switch between Dashboard and Analytics"),
        shortcut("1 / d", "Dashboard"),
        shortcut("2 / a", "Analytics"),
        shortcut("? / F1", "Toggle this help popup"),
        shortcut("q / Esc", "Quit"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "AQI Bands:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let mut lower = 0.0;
    for category in AqiCategory::ALL {
        let range = category.upper_bound().map_or_else(
            || format!("> {lower:.0}"),
            |upper| format!("{lower:.0}-{upper:.0}"),
        );
        lines.push(TextLine::from(vec![
            Span::styled(
                format!("  {range:<10}"),
                Style::default().fg(category_color(category)),
            ),
            Span::raw(category.label()),
        ]));
        lower = category.upper_bound().unwrap_or(lower);
    }

    lines
}
