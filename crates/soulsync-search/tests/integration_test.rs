//! End-to-end tests: CSV dataset → catalog → similarity matrix → queries.

use std::io::Write;

use soulsync_core::Catalog;
use soulsync_search::{recommend, RecommendContext, StopWords, DEFAULT_LIMIT};
use tempfile::NamedTempFile;

const DATASET: &str = "\
Song-Name,Singer/Artists,Genre,Album/Movie,Language,User-Rating
Tum Hi Ho,Arijit Singh,Romantic,Aashiqui 2,Hindi,4.9
Channa Mereya,Arijit Singh,Romantic,Ae Dil Hai Mushkil,Hindi,4.7
Kesariya,Arijit Singh,Romantic,Brahmastra,Hindi,4.6
,Ghost Writer,Romantic,Aashiqui 2,Hindi,4.0
Kun Faya Kun,A.R. Rahman,Sufi,Rockstar,Hindi,4.8
Perfect,Ed Sheeran,Pop,Divide,English,4.8
Shape of You,Ed Sheeran,Pop,Divide,English,4.5
Photograph,Ed Sheeran,Pop,Multiply,English,4.4
Believer,Imagine Dragons,Rock,Evolve,English,4.3
Thunder,Imagine Dragons,Rock,Evolve,English,4.2
Blinding Lights,The Weeknd,Synthpop,After Hours,English,4.6
Levitating,Dua Lipa,Pop,Future Nostalgia,English,4.1
Incomplete Song,Someone,Pop,,English,3.0
";

fn load_context() -> RecommendContext {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(DATASET.as_bytes()).expect("write dataset");
    let catalog = Catalog::load(file.path()).expect("load dataset");
    RecommendContext::build(catalog, StopWords::english())
}

fn names(ctx: &RecommendContext, title: &str) -> Vec<String> {
    ctx.recommend(title)
        .expect("title should be in the catalog")
        .into_iter()
        .map(|r| r.name)
        .collect()
}

#[test]
fn test_every_song_gets_full_list_without_itself() {
    let ctx = load_context();
    assert_eq!(ctx.catalog().len(), 11);

    for song in ctx.catalog() {
        let recs = names(&ctx, &song.name);
        assert_eq!(recs.len(), DEFAULT_LIMIT, "for {}", song.name);
        assert!(!recs.contains(&song.name), "{} recommended itself", song.name);
    }
}

#[test]
fn test_case_insensitive_query() {
    let ctx = load_context();
    assert_eq!(names(&ctx, "TUM HI HO"), names(&ctx, "tum hi ho"));
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let ctx = load_context();
    assert_eq!(names(&ctx, "  Perfect  "), names(&ctx, "Perfect"));
}

#[test]
fn test_unknown_title_not_found() {
    let ctx = load_context();
    let err = ctx.recommend("Not A Real Song Title XYZ").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_repeated_queries_are_deterministic() {
    let ctx = load_context();
    let first = ctx.recommend("Kesariya").unwrap();
    for _ in 0..5 {
        assert_eq!(ctx.recommend("Kesariya").unwrap(), first);
    }
}

#[test]
fn test_matrix_symmetric_with_row_maximum_on_diagonal() {
    let ctx = load_context();
    let matrix = ctx.matrix();
    assert_eq!(matrix.dim(), ctx.catalog().len());

    for i in 0..matrix.dim() {
        let row = matrix.row(i).unwrap();
        let max = row.iter().copied().fold(f64::MIN, f64::max);
        assert_eq!(row[i], max);
        for j in 0..matrix.dim() {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
        }
    }
}

#[test]
fn test_dropped_rows_never_recommended() {
    let ctx = load_context();
    assert_eq!(ctx.catalog().dropped_rows(), 2);
    assert!(ctx.catalog().iter().all(|s| !s.name.is_empty()));

    for song in ctx.catalog() {
        for rec in ctx.recommend(&song.name).unwrap() {
            assert!(!rec.name.is_empty());
            assert_ne!(rec.artists, "Ghost Writer");
            assert_ne!(rec.name, "Incomplete Song");
        }
    }
}

#[test]
fn test_same_artist_ranked_first() {
    let ctx = load_context();
    let recs = names(&ctx, "Tum Hi Ho");
    assert_eq!(&recs[..3], &["Kesariya", "Channa Mereya", "Kun Faya Kun"]);

    let recs = names(&ctx, "Perfect");
    assert_eq!(recs[0], "Shape of You");
    assert_eq!(recs[1], "Photograph");
}

#[test]
fn test_shared_artist_and_genre_beats_unrelated() {
    let data = "\
Song-Name,Singer/Artists,Genre,Album/Movie,Language,User-Rating
A,Kavi Raman,Qawwali,Roshni,Urdu,4.0
D,Delta Band,Metal,Iron,English,3.0
E,Echo Duo,Jazz,Blue,English,3.1
B,Kavi Raman,Qawwali,Sitara,Punjabi,4.2
F,Foxtrot,Country,Road,English,3.2
G,Golf Club,Reggae,Island,English,3.3
C,Kavi Raman,Qawwali,Chand,Marathi,4.4
H,Hotel Lobby,Blues,Night,English,3.4
I,India Ink,Techno,Pulse,English,3.5
J,Juliet Moon,Folk,Meadow,English,3.6
";
    let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
    assert_eq!(catalog.len(), 10);
    let ctx = RecommendContext::build(catalog, StopWords::english());

    let recs = names(&ctx, "A");
    assert_eq!(recs.len(), 6);
    let mut top_two = recs[..2].to_vec();
    top_two.sort();
    assert_eq!(top_two, vec!["B", "C"]);
    // The rest are all unrelated and tie at zero, so they keep catalog order.
    assert_eq!(&recs[2..], &["D", "E", "F", "G"]);
}

#[test]
fn test_catalog_of_seven_or_fewer() {
    let data = "\
Song-Name,Singer/Artists,Genre,Album/Movie,Language,User-Rating
One,Alpha,Pop,First,English,4
Two,Beta,Pop,Second,English,4
Three,Gamma,Rock,Third,English,4
";
    let catalog = Catalog::from_reader(data.as_bytes()).unwrap();
    let ctx = RecommendContext::build(catalog, StopWords::english());
    assert_eq!(ctx.recommend("three").unwrap().len(), 2);
}

#[test]
fn test_free_function_matches_context() {
    let ctx = load_context();
    let direct = recommend("Believer", ctx.catalog(), ctx.matrix()).unwrap();
    assert_eq!(direct, ctx.recommend("Believer").unwrap());
    assert_eq!(direct[0].name, "Thunder");
}
