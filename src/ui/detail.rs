use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::colors::{HIGHLIGHT_BG, MARQUEE_GOLD, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::spinner_frame;

pub fn render_detail(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(detail) = app.detail.clone() else {
        let message = if app.detail_loading {
            format!("  {} loading movie details...", spinner_frame(app.loading_tick))
        } else {
            "  no movie selected".to_string()
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(TEXT_DIM),
            ))),
            area,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(8), // Poster + overview
            Constraint::Length(7), // Cast
            Constraint::Min(0),    // Recommendations
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("  {}", detail.title),
            Style::default()
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(0)])
        .split(chunks[1]);

    render_facts(f, app, &detail, columns[0]);

    let overview = Paragraph::new(detail.overview.clone())
        .style(Style::default().fg(TEXT_PRIMARY))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(TEXT_DIM))
                .title(Span::styled(
                    " overview ",
                    Style::default().fg(TEXT_SECONDARY),
                )),
        );
    f.render_widget(overview, columns[1]);

    render_cast(f, &detail, chunks[2]);
    render_recommendations(f, app, chunks[3]);
}

fn render_facts(f: &mut Frame, app: &App, detail: &crate::tmdb::MovieDetail, area: Rect) {
    // Rating and popularity come from the catalog row, not the API
    let (rating, popularity) = match app.selected_movie() {
        Some(movie) => (
            format!("{:.1}", movie.vote_average),
            format!("{:.1}", movie.popularity),
        ),
        None => ("N/A".to_string(), "N/A".to_string()),
    };

    let fact = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<13}", label), Style::default().fg(TEXT_SECONDARY)),
            Span::styled(value, Style::default().fg(TEXT_PRIMARY)),
        ])
    };

    let genres = if detail.genres.is_empty() {
        "N/A".to_string()
    } else {
        detail.genres.clone()
    };
    let lines = vec![
        Line::from(""),
        fact("Rating", rating),
        fact("Popularity", popularity),
        fact("Release Year", detail.release_year.clone()),
        fact("Genre", genres),
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("  {}", detail.poster),
            Style::default().fg(TEXT_DIM),
        )]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_cast(f: &mut Frame, detail: &crate::tmdb::MovieDetail, area: Rect) {
    let mut lines = vec![Line::from(vec![Span::styled(
        "  top cast",
        Style::default()
            .fg(TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD),
    )])];
    if detail.cast.is_empty() {
        lines.push(Line::from(vec![Span::styled(
            "  no cast information",
            Style::default().fg(TEXT_DIM),
        )]));
    }
    for member in &detail.cast {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<24}", member.name),
                Style::default().fg(TEXT_PRIMARY),
            ),
            Span::styled(member.poster.clone(), Style::default().fg(TEXT_DIM)),
        ]));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_recommendations(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(Span::styled(
            " recommended movies ",
            Style::default().fg(TEXT_SECONDARY),
        ));

    if app.detail_rec_names.is_empty() {
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

    let items: Vec<ListItem> = app
        .detail_rec_names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let poster = app
                .detail_rec_posters
                .get(i)
                .map(String::as_str)
                .unwrap_or("");
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("  {:<32}", name),
                    Style::default().fg(TEXT_PRIMARY),
                ),
                Span::styled(poster.to_string(), Style::default().fg(TEXT_DIM)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(HIGHLIGHT_BG)
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" ▎");
    f.render_stateful_widget(list, area, &mut app.detail_rec_list_state);
}
