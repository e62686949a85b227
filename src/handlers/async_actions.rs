use crate::app::{App, AsyncAction, CurrentScreen};

/// Fold a completed fetch back into the App. Results for a selection the
/// user has already navigated away from are dropped on the floor.
pub fn handle_async_action(app: &mut App, action: AsyncAction) {
    match action {
        AsyncAction::DetailsLoaded(movie_id, detail) => {
            if app.view.screen == CurrentScreen::Detail
                && app.view.selected_movie_id == Some(movie_id)
            {
                app.detail = Some(detail);
                app.detail_loading = false;
            }
        }
        AsyncAction::DetailRecommendationsLoaded {
            movie_id,
            names,
            posters,
        } => {
            if app.view.screen == CurrentScreen::Detail
                && app.view.selected_movie_id == Some(movie_id)
            {
                app.detail_rec_names = names;
                app.detail_rec_posters = posters;
                app.selected_detail_rec_index = 0;
                if app.detail_rec_names.is_empty() {
                    app.detail_rec_list_state.select(None);
                } else {
                    app.detail_rec_list_state.select(Some(0));
                }
            }
        }
        AsyncAction::PanelRecommendationsLoaded {
            source,
            names,
            posters,
        } => {
            if app.view.recommend_title.as_deref() == Some(source.as_str()) {
                app.panel_names = names;
                app.panel_posters = posters;
                app.panel_loading = false;
                app.selected_panel_index = 0;
                if app.panel_names.is_empty() {
                    app.panel_list_state.select(None);
                } else {
                    app.panel_list_state.select(Some(0));
                }
            }
        }
        AsyncAction::PosterLoaded(movie_id, url) => {
            app.category_posters.insert(movie_id, url);
        }
    }
}
