//! View-state machine coverage: every navigation transition as a pure
//! function of (state, event, catalog), no rendering layer involved.

use matinee_lib::app::{Category, CurrentScreen, NavEvent, ViewState};
use matinee_lib::catalog::{Catalog, MovieRecord};

fn record(id: u32, title: &str) -> MovieRecord {
    MovieRecord {
        id,
        title: title.to_string(),
        popularity: 0.0,
        vote_average: 0.0,
        release_date: None,
        revenue: 0.0,
    }
}

fn catalog() -> Catalog {
    Catalog::from_records(vec![record(1, "A"), record(2, "B"), record(3, "C")]).unwrap()
}

#[test]
fn home_to_detail_on_view_details() {
    let catalog = catalog();
    let mut state = ViewState::default();
    state.apply(NavEvent::ViewDetails("B".to_string()), &catalog);
    assert_eq!(state.screen, CurrentScreen::Detail);
    assert_eq!(state.selected_movie_id, Some(2));
}

#[test]
fn view_details_for_unknown_title_is_a_noop() {
    let catalog = catalog();
    let mut state = ViewState::default();
    state.apply(NavEvent::ViewDetails("Unknown Title".to_string()), &catalog);
    assert_eq!(state.screen, CurrentScreen::Home);
    assert_eq!(state.selected_movie_id, None);
}

#[test]
fn recommend_stays_on_home_and_sets_panel_title() {
    let catalog = catalog();
    let mut state = ViewState::default();
    state.apply(NavEvent::Recommend("A".to_string()), &catalog);
    assert_eq!(state.screen, CurrentScreen::Home);
    assert_eq!(state.recommend_title.as_deref(), Some("A"));
}

#[test]
fn recommend_and_view_details_stay_distinct_for_the_same_title() {
    let catalog = catalog();

    let mut recommended = ViewState::default();
    recommended.apply(NavEvent::Recommend("A".to_string()), &catalog);
    assert_eq!(recommended.screen, CurrentScreen::Home);

    let mut detailed = ViewState::default();
    detailed.apply(NavEvent::ViewDetails("A".to_string()), &catalog);
    assert_eq!(detailed.screen, CurrentScreen::Detail);
}

#[test]
fn go_back_from_detail_returns_home_and_clears_selection() {
    let catalog = catalog();
    let mut state = ViewState::default();
    state.apply(NavEvent::ViewDetails("A".to_string()), &catalog);
    state.apply(NavEvent::GoBack, &catalog);
    assert_eq!(state.screen, CurrentScreen::Home);
    assert_eq!(state.selected_movie_id, None);
}

#[test]
fn detail_self_transition_re_resolves_the_new_id() {
    let catalog = catalog();
    let mut state = ViewState::default();
    state.apply(NavEvent::ViewDetails("A".to_string()), &catalog);
    state.apply(NavEvent::SelectRecommended("C".to_string()), &catalog);
    assert_eq!(state.screen, CurrentScreen::Detail);
    assert_eq!(state.selected_movie_id, Some(3));
}

#[test]
fn category_to_detail_on_selecting_a_listed_movie() {
    let catalog = catalog();
    let mut state = ViewState::default();
    state.apply(NavEvent::SelectCategory(Category::Trending), &catalog);
    assert_eq!(state.screen, CurrentScreen::Category);
    state.apply(NavEvent::SelectListed(2), &catalog);
    assert_eq!(state.screen, CurrentScreen::Detail);
    assert_eq!(state.selected_movie_id, Some(2));
}

#[test]
fn selecting_an_unknown_id_is_a_noop() {
    let catalog = catalog();
    let mut state = ViewState::default();
    state.apply(NavEvent::SelectCategory(Category::Trending), &catalog);
    state.apply(NavEvent::SelectListed(99), &catalog);
    assert_eq!(state.screen, CurrentScreen::Category);
    assert_eq!(state.selected_movie_id, None);
}

#[test]
fn show_more_toggle_is_independent_of_screen() {
    let catalog = catalog();
    let mut state = ViewState::default();
    assert!(!state.show_more);
    state.apply(NavEvent::ToggleShowMore, &catalog);
    assert!(state.show_more);
    assert_eq!(state.screen, CurrentScreen::Home);

    state.apply(NavEvent::SelectCategory(Category::Blockbuster), &catalog);
    state.apply(NavEvent::ToggleShowMore, &catalog);
    assert!(!state.show_more);
    assert_eq!(state.screen, CurrentScreen::Category);
}

#[test]
fn go_home_clears_category_and_selection() {
    let catalog = catalog();
    let mut state = ViewState::default();
    state.apply(NavEvent::SelectCategory(Category::Latest), &catalog);
    state.apply(NavEvent::SelectListed(1), &catalog);
    state.apply(NavEvent::GoHome, &catalog);
    assert_eq!(state.screen, CurrentScreen::Home);
    assert_eq!(state.selected_movie_id, None);
    assert_eq!(state.active_category, None);
}
