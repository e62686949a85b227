//! End-to-end recommendation contract: catalog + matrix + poster fallback.

use std::sync::Arc;

use matinee_lib::catalog::{Catalog, MovieRecord};
use matinee_lib::recommend::Recommender;
use matinee_lib::similarity::SimilarityMatrix;
use matinee_lib::tmdb::{TmdbClient, PLACEHOLDER_IMAGE};

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

fn abc_recommender() -> Recommender {
    let catalog =
        Catalog::from_records(vec![record(1, "A"), record(2, "B"), record(3, "C")]).unwrap();
    let matrix = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.9, 0.2],
        vec![0.9, 1.0, 0.4],
        vec![0.2, 0.4, 1.0],
    ])
    .unwrap();
    Recommender::new(Arc::new(catalog), Arc::new(matrix)).unwrap()
}

/// A client whose every request fails fast, forcing the placeholder path
fn unreachable_client() -> TmdbClient {
    TmdbClient::with_base_url("http://127.0.0.1:9".to_string(), String::new())
}

#[test]
fn scenario_a_recommends_b_then_c() {
    let rec = abc_recommender();
    assert_eq!(rec.recommend_titles("A"), vec!["B", "C"]);
}

#[test]
fn scores_are_non_increasing_with_ascending_row_tiebreak() {
    let catalog = Catalog::from_records(
        (0..6).map(|i| record(i + 1, &format!("M{}", i))).collect(),
    )
    .unwrap();
    // Row 0 has a three-way tie at 0.5 between rows 2, 3, 4
    let matrix = SimilarityMatrix::from_rows(vec![
        vec![1.0, 0.8, 0.5, 0.5, 0.5, 0.1],
        vec![0.8, 1.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.5, 0.0, 1.0, 0.0, 0.0, 0.0],
        vec![0.5, 0.0, 0.0, 1.0, 0.0, 0.0],
        vec![0.5, 0.0, 0.0, 0.0, 1.0, 0.0],
        vec![0.1, 0.0, 0.0, 0.0, 0.0, 1.0],
    ])
    .unwrap();
    let rec = Recommender::new(Arc::new(catalog), Arc::new(matrix)).unwrap();

    let rows = rec.neighbor_rows("M0");
    let scores: Vec<f32> = rows.iter().map(|&(_, s)| s).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(
        rows.iter().map(|&(r, _)| r).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn valid_title_returns_min_five_and_size_minus_one() {
    let rec = abc_recommender();
    assert_eq!(rec.recommend_titles("B").len(), 2);

    let catalog = Catalog::from_records(
        (0..8).map(|i| record(i + 1, &format!("M{}", i))).collect(),
    )
    .unwrap();
    let rows: Vec<Vec<f32>> = (0..8)
        .map(|i| (0..8).map(|j| if i == j { 1.0 } else { 0.5 }).collect())
        .collect();
    let matrix = SimilarityMatrix::from_rows(rows).unwrap();
    let rec = Recommender::new(Arc::new(catalog), Arc::new(matrix)).unwrap();
    assert_eq!(rec.recommend_titles("M0").len(), 5);
}

#[tokio::test]
async fn unknown_title_returns_two_empty_sequences() {
    let rec = abc_recommender();
    let (names, posters) = rec.recommend("Unknown Title", &unreachable_client()).await;
    assert!(names.is_empty());
    assert!(posters.is_empty());
}

#[tokio::test]
async fn failed_poster_fetches_fall_back_to_placeholder() {
    let rec = abc_recommender();
    let (names, posters) = rec.recommend("A", &unreachable_client()).await;
    assert_eq!(names, vec!["B", "C"]);
    assert_eq!(posters, vec![PLACEHOLDER_IMAGE, PLACEHOLDER_IMAGE]);
}

#[test]
fn loading_the_catalog_twice_preserves_row_to_id_order() {
    let path = std::env::temp_dir().join("matinee_catalog_stability.json");
    let artifact = r#"[
        {"movie_id": 19995, "title": "Avatar", "popularity": 150.4, "vote_average": 7.2,
         "release_date": "2009-12-10", "revenue": 2787965087.0},
        {"movie_id": 285, "title": "Pirates of the Caribbean: At World's End",
         "popularity": 139.1, "vote_average": 6.9, "release_date": "2007-05-19",
         "revenue": 961000000.0},
        {"movie_id": 206647, "title": "Spectre", "popularity": 107.4, "vote_average": 6.3,
         "release_date": "2015-10-26", "revenue": 880674609.0}
    ]"#;
    std::fs::write(&path, artifact).unwrap();

    let first = Catalog::load(&path).unwrap();
    let second = Catalog::load(&path).unwrap();
    let ids = |c: &Catalog| c.movies().iter().map(|m| m.id).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    assert_eq!(ids(&first), vec![19995, 285, 206647]);

    let _ = std::fs::remove_file(&path);
}
