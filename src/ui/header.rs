use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Category};
use crate::ui::colors::{HIGHLIGHT_BG, MARQUEE_GOLD, TEXT_DIM, TEXT_PRIMARY};

/// Side-menu rendered as a tab bar: Home plus the four category sections
pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " matinee ",
            Style::default()
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(TEXT_DIM)),
    ];

    // Home stays highlighted while a detail screen has no owning category
    let home_active = app.view.active_category.is_none();
    spans.push(menu_entry("1", "Home", home_active));

    for (index, category) in Category::all().iter().enumerate() {
        let key = (index + 2).to_string();
        let active = app.view.active_category == Some(*category);
        spans.push(menu_entry(&key, category.display_name(), active));
    }

    spans.push(Span::styled(
        format!("  {} movies", app.catalog.len()),
        Style::default().fg(TEXT_DIM),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn menu_entry(key: &str, label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(MARQUEE_GOLD)
            .bg(HIGHLIGHT_BG)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY)
    };
    Span::styled(format!(" {} {} ", key, label), style)
}
