use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, HomeFocus};
use crate::ui::colors::{HIGHLIGHT_BG, MARQUEE_GOLD, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::spinner_frame;

pub fn render_home(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Min(0),    // Results + panel
        ])
        .split(area);

    render_search_box(f, app, chunks[0]);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(0)])
        .split(chunks[1]);

    render_matches(f, app, content[0]);
    render_panel(f, app, content[1]);
}

fn render_search_box(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search_mode {
        Style::default().fg(MARQUEE_GOLD)
    } else {
        Style::default().fg(TEXT_DIM)
    };
    let input = Paragraph::new(app.search_input.value())
        .style(Style::default().fg(TEXT_PRIMARY))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Search for a movie "),
        );
    f.render_widget(input, area);

    if app.search_mode {
        // Cursor sits after the typed text, inside the border
        let x = area.x + 1 + app.search_input.visual_cursor() as u16;
        f.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

fn render_matches(f: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.home_focus == HomeFocus::Results && !app.search_mode;
    let items: Vec<ListItem> = app
        .matched_titles
        .iter()
        .map(|title| {
            ListItem::new(Line::from(vec![Span::styled(
                format!("  {}", title),
                Style::default().fg(TEXT_PRIMARY),
            )]))
        })
        .collect();

    let title_style = if focused {
        Style::default()
            .fg(MARQUEE_GOLD)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(TEXT_DIM))
                .title(Span::styled(" titles ", title_style)),
        )
        .highlight_style(
            Style::default()
                .bg(HIGHLIGHT_BG)
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" ▎");
    f.render_stateful_widget(list, area, &mut app.match_list_state);
}

fn render_panel(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(source) = app.view.recommend_title.clone() else {
        let hints = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "  Pick a title, then:",
                Style::default().fg(TEXT_SECONDARY),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  r      ", Style::default().fg(MARQUEE_GOLD)),
                Span::styled(
                    "recommend five similar movies",
                    Style::default().fg(TEXT_PRIMARY),
                ),
            ]),
            Line::from(vec![
                Span::styled("  enter  ", Style::default().fg(MARQUEE_GOLD)),
                Span::styled("open the full detail view", Style::default().fg(TEXT_PRIMARY)),
            ]),
        ]);
        f.render_widget(hints, area);
        return;
    };

    let focused = app.home_focus == HomeFocus::Panel;
    let title_style = if focused {
        Style::default()
            .fg(MARQUEE_GOLD)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_SECONDARY)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(Span::styled(
            format!(" recommended for {} ", source),
            title_style,
        ));

    if app.panel_loading {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(
                    "  {} fetching recommendations...",
                    spinner_frame(app.loading_tick)
                ),
                Style::default().fg(TEXT_DIM),
            )))
            .block(block),
            area,
        );
        return;
    }

    if app.panel_names.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  No recommendations found.",
                Style::default().fg(TEXT_DIM),
            )))
            .block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .panel_names
        .iter()
        .zip(poster_lines(&app.panel_posters, app.panel_names.len()))
        .map(|(name, poster)| {
            ListItem::new(vec![
                Line::from(vec![Span::styled(
                    format!("  {}", name),
                    Style::default()
                        .fg(TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from(vec![Span::styled(
                    format!("    {}", poster),
                    Style::default().fg(TEXT_DIM),
                )]),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).fg(MARQUEE_GOLD))
        .highlight_symbol(" ▎");
    f.render_stateful_widget(list, area, &mut app.panel_list_state);
}

/// Poster URLs padded so names and posters always zip 1:1
fn poster_lines(posters: &[String], len: usize) -> Vec<&str> {
    (0..len)
        .map(|i| posters.get(i).map(String::as_str).unwrap_or(""))
        .collect()
}
