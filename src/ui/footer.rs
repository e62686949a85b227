use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, CurrentScreen};

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::White);

    let mut spans = vec![
        Span::styled(" q ", key_style),
        Span::styled("Quit  ", label_style),
        Span::styled(" 1-5 ", key_style),
        Span::styled("Menu  ", label_style),
        Span::styled(" \u{2191}\u{2193} ", key_style),
        Span::styled("Move  ", label_style),
    ];

    match app.view.screen {
        CurrentScreen::Home => {
            if app.search_mode {
                spans.push(Span::styled(" Esc ", key_style));
                spans.push(Span::styled("Stop Typing  ", label_style));
            } else {
                spans.push(Span::styled(" / ", key_style));
                spans.push(Span::styled("Search  ", label_style));
                spans.push(Span::styled(" r ", key_style));
                spans.push(Span::styled("Recommend  ", label_style));
                spans.push(Span::styled(" Enter ", key_style));
                spans.push(Span::styled("View Details  ", label_style));
                if !app.panel_names.is_empty() {
                    spans.push(Span::styled(" Tab ", key_style));
                    spans.push(Span::styled("Panel  ", label_style));
                }
            }
        }
        CurrentScreen::Detail => {
            spans.push(Span::styled(" Esc ", key_style));
            spans.push(Span::styled("Go Back  ", label_style));
            spans.push(Span::styled(" Enter ", key_style));
            spans.push(Span::styled("Open Recommendation  ", label_style));
        }
        CurrentScreen::Category => {
            spans.push(Span::styled(" Enter ", key_style));
            spans.push(Span::styled("View Details  ", label_style));
            spans.push(Span::styled(" m ", key_style));
            let toggle = if app.view.show_more {
                "Show Less  "
            } else {
                "Show More  "
            };
            spans.push(Span::styled(toggle, label_style));
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );
}
