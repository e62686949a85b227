use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

use crate::app::{App, AsyncAction, Category, CurrentScreen, HomeFocus, NavEvent};

pub enum InputResult {
    Continue,
    Quit,
}

pub fn handle_key_event(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<AsyncAction>,
) -> InputResult {
    // Only process key press events, not release (Windows sends both)
    if key.kind != KeyEventKind::Press {
        return InputResult::Continue;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Quit;
    }

    // Search box editing captures everything except Esc/Enter
    if app.search_mode {
        match key.code {
            KeyCode::Esc => {
                app.search_mode = false;
            }
            KeyCode::Enter => {
                app.search_mode = false;
                app.home_focus = HomeFocus::Results;
            }
            _ => {
                app.search_input.handle_event(&Event::Key(key));
                app.update_matches();
            }
        }
        return InputResult::Continue;
    }

    if key.code == KeyCode::Char('q') {
        return InputResult::Quit;
    }

    // Side menu: Home plus the four categories
    match key.code {
        KeyCode::Char('1') => {
            dispatch(app, NavEvent::GoHome, tx);
            return InputResult::Continue;
        }
        KeyCode::Char('2') => {
            dispatch(app, NavEvent::SelectCategory(Category::Trending), tx);
            return InputResult::Continue;
        }
        KeyCode::Char('3') => {
            dispatch(app, NavEvent::SelectCategory(Category::TopRated), tx);
            return InputResult::Continue;
        }
        KeyCode::Char('4') => {
            dispatch(app, NavEvent::SelectCategory(Category::Latest), tx);
            return InputResult::Continue;
        }
        KeyCode::Char('5') => {
            dispatch(app, NavEvent::SelectCategory(Category::Blockbuster), tx);
            return InputResult::Continue;
        }
        _ => {}
    }

    match app.view.screen {
        CurrentScreen::Home => handle_home_keys(app, key, tx),
        CurrentScreen::Detail => handle_detail_keys(app, key, tx),
        CurrentScreen::Category => handle_category_keys(app, key, tx),
    }

    InputResult::Continue
}

fn handle_home_keys(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncAction>) {
    match key.code {
        KeyCode::Char('/') | KeyCode::Char('e') => {
            app.search_mode = true;
            app.home_focus = HomeFocus::Results;
        }
        KeyCode::Tab => {
            if !app.panel_names.is_empty() {
                app.home_focus = match app.home_focus {
                    HomeFocus::Results => HomeFocus::Panel,
                    HomeFocus::Panel => HomeFocus::Results,
                };
            }
        }
        KeyCode::Down | KeyCode::Char('j') => match app.home_focus {
            HomeFocus::Results => {
                move_selection(
                    &mut app.selected_match_index,
                    app.matched_titles.len(),
                    1,
                );
                app.match_list_state.select(Some(app.selected_match_index));
            }
            HomeFocus::Panel => {
                move_selection(&mut app.selected_panel_index, app.panel_names.len(), 1);
                app.panel_list_state.select(Some(app.selected_panel_index));
            }
        },
        KeyCode::Up | KeyCode::Char('k') => match app.home_focus {
            HomeFocus::Results => {
                move_selection(
                    &mut app.selected_match_index,
                    app.matched_titles.len(),
                    -1,
                );
                app.match_list_state.select(Some(app.selected_match_index));
            }
            HomeFocus::Panel => {
                move_selection(&mut app.selected_panel_index, app.panel_names.len(), -1);
                app.panel_list_state.select(Some(app.selected_panel_index));
            }
        },
        KeyCode::Char('r') => {
            if let Some(title) = app.selected_search_title() {
                dispatch(app, NavEvent::Recommend(title.to_string()), tx);
            }
        }
        KeyCode::Enter => match app.home_focus {
            HomeFocus::Results => {
                if let Some(title) = app.selected_search_title() {
                    dispatch(app, NavEvent::ViewDetails(title.to_string()), tx);
                }
            }
            HomeFocus::Panel => {
                if let Some(name) = app.panel_names.get(app.selected_panel_index) {
                    dispatch(app, NavEvent::SelectRecommended(name.clone()), tx);
                }
            }
        },
        _ => {}
    }
}

fn handle_detail_keys(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncAction>) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            dispatch(app, NavEvent::GoBack, tx);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(
                &mut app.selected_detail_rec_index,
                app.detail_rec_names.len(),
                1,
            );
            app.detail_rec_list_state
                .select(Some(app.selected_detail_rec_index));
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(
                &mut app.selected_detail_rec_index,
                app.detail_rec_names.len(),
                -1,
            );
            app.detail_rec_list_state
                .select(Some(app.selected_detail_rec_index));
        }
        // Self-transition: re-resolve and re-render, no history stack
        KeyCode::Enter => {
            if let Some(name) = app.detail_rec_names.get(app.selected_detail_rec_index) {
                dispatch(app, NavEvent::SelectRecommended(name.clone()), tx);
            }
        }
        _ => {}
    }
}

fn handle_category_keys(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncAction>) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            dispatch(app, NavEvent::GoBack, tx);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(&mut app.selected_category_index, app.category_rows.len(), 1);
            app.category_list_state
                .select(Some(app.selected_category_index));
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(
                &mut app.selected_category_index,
                app.category_rows.len(),
                -1,
            );
            app.category_list_state
                .select(Some(app.selected_category_index));
        }
        KeyCode::Char('m') => {
            dispatch(app, NavEvent::ToggleShowMore, tx);
        }
        KeyCode::Enter => {
            if let Some(movie) = app.selected_category_movie() {
                let id = movie.id;
                dispatch(app, NavEvent::SelectListed(id), tx);
            }
        }
        _ => {}
    }
}

fn move_selection(index: &mut usize, len: usize, delta: i64) {
    if len == 0 {
        return;
    }
    let len = len as i64;
    *index = ((*index as i64 + delta).rem_euclid(len)) as usize;
}

/// Apply a navigation event and kick off whatever fetches the new state
/// needs. Each event resolves synchronously into the new ViewState before
/// any fetch is spawned.
pub fn dispatch(app: &mut App, event: NavEvent, tx: &mpsc::Sender<AsyncAction>) {
    let prev_movie = app.view.selected_movie_id;
    let panel_title = match &event {
        NavEvent::Recommend(title) => Some(title.clone()),
        _ => None,
    };

    app.apply_nav(event);

    if app.view.screen == CurrentScreen::Detail && app.view.selected_movie_id != prev_movie {
        spawn_detail_fetch(app, tx);
    }
    if let Some(title) = panel_title {
        spawn_panel_recommend(app, &title, tx);
    }
    if app.view.screen == CurrentScreen::Category {
        spawn_category_posters(app, tx);
    }
}

fn spawn_detail_fetch(app: &mut App, tx: &mpsc::Sender<AsyncAction>) {
    let Some(movie) = app.selected_movie() else {
        return;
    };
    let movie_id = movie.id;
    let title = movie.title.clone();

    let tmdb = app.tmdb.clone();
    let detail_tx = tx.clone();
    tokio::spawn(async move {
        let detail = tmdb.fetch_details(movie_id).await;
        let _ = detail_tx
            .send(AsyncAction::DetailsLoaded(movie_id, detail))
            .await;
    });

    let recommender = app.recommender.clone();
    let tmdb = app.tmdb.clone();
    let rec_tx = tx.clone();
    tokio::spawn(async move {
        let (names, posters) = recommender.recommend(&title, &tmdb).await;
        let _ = rec_tx
            .send(AsyncAction::DetailRecommendationsLoaded {
                movie_id,
                names,
                posters,
            })
            .await;
    });
}

fn spawn_panel_recommend(app: &mut App, title: &str, tx: &mpsc::Sender<AsyncAction>) {
    app.panel_names.clear();
    app.panel_posters.clear();
    app.selected_panel_index = 0;
    app.panel_list_state.select(None);
    app.panel_loading = true;
    app.home_focus = HomeFocus::Results;

    let source = title.to_string();
    let recommender = app.recommender.clone();
    let tmdb = app.tmdb.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let (names, posters) = recommender.recommend(&source, &tmdb).await;
        let _ = tx
            .send(AsyncAction::PanelRecommendationsLoaded {
                source,
                names,
                posters,
            })
            .await;
    });
}

/// Fetch posters for the listed category rows that don't have one yet.
/// The per-screen map is dropped when the category changes.
fn spawn_category_posters(app: &App, tx: &mpsc::Sender<AsyncAction>) {
    for &row in &app.category_rows {
        let Some(movie) = app.catalog.get(row) else {
            continue;
        };
        if app.category_posters.contains_key(&movie.id) {
            continue;
        }
        let id = movie.id;
        let tmdb = app.tmdb.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let poster = tmdb.fetch_poster(id).await;
            let _ = tx.send(AsyncAction::PosterLoaded(id, poster)).await;
        });
    }
}
