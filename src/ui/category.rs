use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, Category};
use crate::catalog::MovieRecord;
use crate::tmdb::PLACEHOLDER_IMAGE;
use crate::ui::colors::{HIGHLIGHT_BG, MARQUEE_GOLD, TEXT_DIM, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::utils::format_revenue;

pub fn render_category(f: &mut Frame, app: &mut App, area: Rect) {
    let Some(category) = app.view.active_category else {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  no category selected",
                Style::default().fg(TEXT_DIM),
            ))),
            area,
        );
        return;
    };

    let items: Vec<ListItem> = app
        .category_rows
        .iter()
        .filter_map(|&row| app.catalog.get(row))
        .map(|movie| {
            let poster = app
                .category_posters
                .get(&movie.id)
                .map(String::as_str)
                .unwrap_or(PLACEHOLDER_IMAGE);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("  {:<36}", movie.title),
                        Style::default()
                            .fg(TEXT_PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(metric_text(category, movie), Style::default().fg(TEXT_SECONDARY)),
                ]),
                Line::from(vec![Span::styled(
                    format!("    {}", poster),
                    Style::default().fg(TEXT_DIM),
                )]),
            ])
        })
        .collect();

    let toggle_hint = if app.view.show_more {
        "m: show less"
    } else {
        "m: show more"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
        .title(Span::styled(
            format!(" {} ", category.display_name()),
            Style::default()
                .fg(MARQUEE_GOLD)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            format!(" {} ", toggle_hint),
            Style::default().fg(TEXT_DIM),
        ));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(HIGHLIGHT_BG).fg(MARQUEE_GOLD))
        .highlight_symbol(" ▎");
    f.render_stateful_widget(list, area, &mut app.category_list_state);
}

/// Per-row metric matching the category, as the section listings show it
fn metric_text(category: Category, movie: &MovieRecord) -> String {
    match category {
        Category::Trending => format!("Popularity: {:.1}", movie.popularity),
        Category::TopRated => format!("Rating: {:.1}", movie.vote_average),
        Category::Latest => {
            let year = movie
                .release_date
                .map(|d| d.format("%Y").to_string())
                .unwrap_or_else(|| "N/A".to_string());
            format!("Release Year: {}", year)
        }
        Category::Blockbuster => format!("Revenue: {}", format_revenue(movie.revenue)),
    }
}
