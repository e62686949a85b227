use std::collections::HashMap;
use std::sync::Arc;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::widgets::ListState;
use tui_input::Input;

use crate::catalog::{Catalog, MovieRecord, SortKey};
use crate::config::AppConfig;
use crate::errors::SimilarityError;
use crate::recommend::Recommender;
use crate::similarity::SimilarityMatrix;
use crate::tmdb::{MovieDetail, TmdbClient};

/// Category rows shown before / after the show-more toggle
pub const CATEGORY_ROWS: usize = 5;
pub const CATEGORY_ROWS_EXPANDED: usize = 10;

const MAX_TITLE_MATCHES: usize = 8;

/// Results of spawned fetch tasks, folded into the App between renders
#[derive(Debug, Clone)]
pub enum AsyncAction {
    DetailsLoaded(u32, MovieDetail),
    DetailRecommendationsLoaded {
        movie_id: u32,
        names: Vec<String>,
        posters: Vec<String>,
    },
    PanelRecommendationsLoaded {
        source: String,
        names: Vec<String>,
        posters: Vec<String>,
    },
    PosterLoaded(u32, String),
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum CurrentScreen {
    #[default]
    Home,
    Detail,
    Category,
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Category {
    Trending,
    TopRated,
    Latest,
    Blockbuster,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Trending => "Trending Movies",
            Category::TopRated => "Top Rated Movies",
            Category::Latest => "Latest Releases",
            Category::Blockbuster => "Blockbuster Movies",
        }
    }

    pub fn sort_key(&self) -> SortKey {
        match self {
            Category::Trending => SortKey::Popularity,
            Category::TopRated => SortKey::VoteAverage,
            Category::Latest => SortKey::ReleaseDate,
            Category::Blockbuster => SortKey::Revenue,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Trending,
            Category::TopRated,
            Category::Latest,
            Category::Blockbuster,
        ]
    }
}

/// Which part of the Home screen receives list navigation
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub enum HomeFocus {
    #[default]
    Results,
    Panel,
}

/// User-triggered navigation events. "Recommend" and "view details" stay
/// distinct operations for the same title: one populates the inline panel,
/// the other navigates to the full detail screen.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    ViewDetails(String),
    Recommend(String),
    SelectRecommended(String),
    SelectListed(u32),
    SelectCategory(Category),
    GoHome,
    GoBack,
    ToggleShowMore,
}

/// Navigation state for one session. Mutated only through `apply`, which
/// keeps every transition a pure function of (state, event, catalog) so the
/// state machine tests run without a rendering layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub screen: CurrentScreen,
    pub selected_movie_id: Option<u32>,
    /// Title driving the Home screen's inline recommendation panel
    pub recommend_title: Option<String>,
    pub show_more: bool,
    pub active_category: Option<Category>,
}

impl ViewState {
    pub fn apply(&mut self, event: NavEvent, catalog: &Catalog) {
        match event {
            // Unknown titles degrade to a no-op, never an error screen
            NavEvent::ViewDetails(title) | NavEvent::SelectRecommended(title) => {
                if let Ok(movie) = catalog.by_title(&title) {
                    self.selected_movie_id = Some(movie.id);
                    self.screen = CurrentScreen::Detail;
                }
            }
            NavEvent::Recommend(title) => {
                // Screen does not change; the panel renders inline on Home
                self.recommend_title = Some(title);
            }
            NavEvent::SelectListed(id) => {
                if catalog.by_id(id).is_ok() {
                    self.selected_movie_id = Some(id);
                    self.screen = CurrentScreen::Detail;
                }
            }
            NavEvent::SelectCategory(category) => {
                self.active_category = Some(category);
                self.screen = CurrentScreen::Category;
                self.selected_movie_id = None;
            }
            NavEvent::GoHome => {
                self.screen = CurrentScreen::Home;
                self.selected_movie_id = None;
                self.active_category = None;
            }
            NavEvent::GoBack => match self.screen {
                CurrentScreen::Detail => {
                    self.selected_movie_id = None;
                    self.screen = CurrentScreen::Home;
                }
                CurrentScreen::Category => {
                    self.active_category = None;
                    self.screen = CurrentScreen::Home;
                }
                CurrentScreen::Home => {}
            },
            NavEvent::ToggleShowMore => {
                self.show_more = !self.show_more;
            }
        }
    }
}

pub struct App {
    pub config: AppConfig,
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
    pub tmdb: TmdbClient,

    pub view: ViewState,
    pub should_quit: bool,
    pub loading_tick: u64,

    // Home — title search
    pub search_input: Input,
    pub search_mode: bool,
    pub home_focus: HomeFocus,
    pub matched_titles: Vec<String>,
    pub selected_match_index: usize,
    pub match_list_state: ListState,

    // Home — inline recommendation panel
    pub panel_names: Vec<String>,
    pub panel_posters: Vec<String>,
    pub panel_loading: bool,
    pub selected_panel_index: usize,
    pub panel_list_state: ListState,

    // Detail screen (transient — dropped when the screen changes)
    pub detail: Option<MovieDetail>,
    pub detail_loading: bool,
    pub detail_rec_names: Vec<String>,
    pub detail_rec_posters: Vec<String>,
    pub selected_detail_rec_index: usize,
    pub detail_rec_list_state: ListState,

    // Category screen
    pub category_rows: Vec<usize>,
    pub selected_category_index: usize,
    pub category_list_state: ListState,
    pub category_posters: HashMap<u32, String>,
}

impl App {
    pub fn new(
        config: AppConfig,
        catalog: Arc<Catalog>,
        similarity: Arc<SimilarityMatrix>,
    ) -> Result<App, SimilarityError> {
        let recommender = Recommender::new(catalog.clone(), similarity)?;
        let tmdb = match &config.api_base_url {
            Some(base) => TmdbClient::with_base_url(base.clone(), config.api_key()),
            None => TmdbClient::new(config.api_key()),
        };

        let mut app = App {
            config,
            catalog,
            recommender,
            tmdb,
            view: ViewState::default(),
            should_quit: false,
            loading_tick: 0,
            search_input: Input::default(),
            search_mode: false,
            home_focus: HomeFocus::default(),
            matched_titles: Vec::new(),
            selected_match_index: 0,
            match_list_state: ListState::default(),
            panel_names: Vec::new(),
            panel_posters: Vec::new(),
            panel_loading: false,
            selected_panel_index: 0,
            panel_list_state: ListState::default(),
            detail: None,
            detail_loading: false,
            detail_rec_names: Vec::new(),
            detail_rec_posters: Vec::new(),
            selected_detail_rec_index: 0,
            detail_rec_list_state: ListState::default(),
            category_rows: Vec::new(),
            selected_category_index: 0,
            category_list_state: ListState::default(),
            category_posters: HashMap::new(),
        };
        app.update_matches();
        Ok(app)
    }

    /// Apply a navigation event and resync derived screen state.
    pub fn apply_nav(&mut self, event: NavEvent) {
        let prev_screen = self.view.screen;
        let prev_movie = self.view.selected_movie_id;
        let prev_category = self.view.active_category;

        self.view.apply(event, &self.catalog);

        // Detail data never outlives the selection that requested it
        if self.view.selected_movie_id != prev_movie
            || (prev_screen == CurrentScreen::Detail && self.view.screen != CurrentScreen::Detail)
        {
            self.clear_detail();
        }
        if self.view.screen == CurrentScreen::Detail && self.view.selected_movie_id != prev_movie {
            self.detail_loading = true;
        }

        if self.view.active_category != prev_category {
            self.category_posters.clear();
            self.selected_category_index = 0;
        }
        self.refresh_category_rows();
    }

    fn clear_detail(&mut self) {
        self.detail = None;
        self.detail_loading = false;
        self.detail_rec_names.clear();
        self.detail_rec_posters.clear();
        self.selected_detail_rec_index = 0;
        self.detail_rec_list_state.select(None);
    }

    /// Recompute the category rows from the catalog's sorted view
    pub fn refresh_category_rows(&mut self) {
        match self.view.active_category {
            Some(category) => {
                let limit = if self.view.show_more {
                    CATEGORY_ROWS_EXPANDED
                } else {
                    CATEGORY_ROWS
                };
                self.category_rows = self.catalog.sorted_view(category.sort_key(), true, limit);
                if self.selected_category_index >= self.category_rows.len() {
                    self.selected_category_index = self.category_rows.len().saturating_sub(1);
                }
                if self.category_rows.is_empty() {
                    self.category_list_state.select(None);
                } else {
                    self.category_list_state
                        .select(Some(self.selected_category_index));
                }
            }
            None => {
                self.category_rows.clear();
                self.selected_category_index = 0;
                self.category_list_state.select(None);
            }
        }
    }

    /// Fuzzy-match the search input against catalog titles. An empty query
    /// shows the head of the catalog so Enter always has a target.
    pub fn update_matches(&mut self) {
        let query = self.search_input.value().trim().to_string();
        if query.is_empty() {
            self.matched_titles = self
                .catalog
                .titles()
                .take(MAX_TITLE_MATCHES)
                .map(str::to_string)
                .collect();
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(i64, &str)> = self
                .catalog
                .titles()
                .filter_map(|title| matcher.fuzzy_match(title, &query).map(|s| (s, title)))
                .collect();
            scored.sort_by(|a, b| b.0.cmp(&a.0));
            self.matched_titles = scored
                .into_iter()
                .take(MAX_TITLE_MATCHES)
                .map(|(_, title)| title.to_string())
                .collect();
        }
        self.selected_match_index = 0;
        if self.matched_titles.is_empty() {
            self.match_list_state.select(None);
        } else {
            self.match_list_state.select(Some(0));
        }
    }

    pub fn selected_search_title(&self) -> Option<&str> {
        self.matched_titles
            .get(self.selected_match_index)
            .map(String::as_str)
    }

    pub fn selected_movie(&self) -> Option<&MovieRecord> {
        let id = self.view.selected_movie_id?;
        self.catalog.by_id(id).ok()
    }

    pub fn selected_category_movie(&self) -> Option<&MovieRecord> {
        let row = *self.category_rows.get(self.selected_category_index)?;
        self.catalog.get(row)
    }
}
