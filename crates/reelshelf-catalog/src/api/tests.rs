use super::*;
use chrono::NaiveDate;

const TRENDING_MOVIES: &str = r#"{
    "page": 2,
    "total_pages": 500,
    "results": [
        {"id": 550, "title": "Fight Club", "poster_path": "/fc.jpg", "backdrop_path": null,
         "release_date": "1999-10-15", "vote_average": 8.4, "genre_ids": [18, 53]},
        {"id": 603, "title": "The Matrix", "poster_path": "/m.jpg",
         "release_date": "", "vote_average": null, "genre_ids": [28, 878]},
        {"title": "No id at all", "genre_ids": [28]}
    ]
}"#;

#[test]
fn test_decode_movie_list() {
    let page = decode_movie_list(RequestId::TrendingMovie, TRENDING_MOVIES.as_bytes(), 2).unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, Some(500));
    // entry without id is dropped, not returned half-filled
    assert_eq!(page.results.len(), 2);

    let fight_club = &page.results[0];
    assert_eq!(fight_club.id, 550);
    assert_eq!(fight_club.release_date, NaiveDate::from_ymd_opt(1999, 10, 15));
    assert!(fight_club.genre_ids.contains(&53));
    assert_eq!(fight_club.backdrop_path, None);

    let matrix = &page.results[1];
    assert_eq!(matrix.release_date, None);
    assert_eq!(matrix.vote_average, 0.0);
}

#[test]
fn test_decode_list_without_results_is_schema_error() {
    let err = decode_movie_list(RequestId::TopRatedMovie, br#"{"page": 1}"#, 1).unwrap_err();
    assert!(err.is_schema());
    assert_eq!(err.request(), RequestId::TopRatedMovie);
}

#[test]
fn test_decode_garbage_is_schema_error() {
    let err = decode_movie_details(b"<html>502 Bad Gateway</html>").unwrap_err();
    assert!(err.is_schema());
}

#[test]
fn test_decode_movie_details_with_named_genres() {
    let body = br#"{"id": 27205, "title": "Inception", "overview": "Dreams.",
        "release_date": "2010-07-15", "runtime": 148, "imdb_id": "tt1375666",
        "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]}"#;
    let movie = decode_movie_details(body).unwrap();
    assert_eq!(movie.runtime_minutes, Some(148));
    assert_eq!(movie.genres.len(), 2);
    assert!(movie.genre_ids.is_empty());
    assert_eq!(movie.imdb_id.as_deref(), Some("tt1375666"));
}

#[test]
fn test_decode_movie_details_with_credits_and_companies() {
    let body = br#"{"id": 550, "title": "Fight Club", "overview": "Soap.",
        "credits": {
            "cast": [{"name": "Edward Norton", "character": "The Narrator", "profile_path": "/en.jpg"},
                     {"name": "Brad Pitt", "character": "Tyler Durden", "profile_path": null},
                     {"character": "Nameless"}],
            "crew": [{"name": "Jim Uhls", "job": "Screenplay"}, {"name": "David Fincher", "job": "Director"}]
        },
        "production_companies": [{"name": "Regency Enterprises", "logo_path": "/re.png"}, {"name": "", "logo_path": null}]}"#;
    let movie = decode_movie_details(body).unwrap();
    let credits = movie.credits.as_ref().unwrap();
    assert_eq!(credits.cast.len(), 2);
    assert_eq!(credits.cast[1].profile_path, None);
    assert_eq!(credits.director().map(|d| d.name.as_str()), Some("David Fincher"));
    assert_eq!(movie.production_companies.len(), 1);
    assert_eq!(movie.production_companies[0].logo_path.as_deref(), Some("/re.png"));

    let bare = decode_movie_details(br#"{"id": 1, "title": "Bare"}"#).unwrap();
    assert!(bare.credits.is_none());
    assert!(bare.production_companies.is_empty());
}

#[test]
fn test_decode_tv_details_creators_networks_runtime() {
    let body = br#"{"id": 1399, "name": "Game of Thrones", "overview": "Winter.",
        "episode_run_time": [60, 0],
        "created_by": [{"name": "David Benioff"}, {"name": "D. B. Weiss"}, {}],
        "networks": [{"name": "HBO", "logo_path": "/hbo.png"}]}"#;
    let show = decode_tv_details(body).unwrap();
    assert_eq!(show.episode_run_time, vec![60]);
    assert_eq!(show.created_by, vec!["David Benioff", "D. B. Weiss"]);
    assert_eq!(show.networks[0].name, "HBO");
}

#[test]
fn test_decode_movie_details_missing_title() {
    let err = decode_movie_details(br#"{"id": 1, "overview": "x"}"#).unwrap_err();
    assert!(err.is_schema());
    assert!(err.to_string().contains("title"));
}

#[test]
fn test_decode_tv_details_requires_name_id_overview() {
    let missing_overview = br#"{"id": 1399, "name": "Game of Thrones", "overview": ""}"#;
    assert!(decode_tv_details(missing_overview).unwrap_err().is_schema());

    let missing_name = br#"{"id": 1399, "overview": "Seven kingdoms."}"#;
    assert!(decode_tv_details(missing_name).unwrap_err().is_schema());

    let missing_id = br#"{"name": "Game of Thrones", "overview": "Seven kingdoms."}"#;
    assert!(decode_tv_details(missing_id).unwrap_err().is_schema());
}

#[test]
fn test_decode_tv_details_sorts_seasons() {
    let body = br#"{"id": 1399, "name": "Game of Thrones", "overview": "Seven kingdoms.",
        "first_air_date": "2011-04-17",
        "genres": [{"id": 10765, "name": "Sci-Fi & Fantasy"}],
        "seasons": [
            {"id": 2, "name": "Season 2", "season_number": 2, "episode_count": 10},
            {"id": 0, "name": "Specials", "season_number": 0, "episode_count": 3},
            {"id": 1, "season_number": 1, "episode_count": 10, "air_date": "2011-04-17"}
        ]}"#;
    let show = decode_tv_details(body).unwrap();
    let numbers: Vec<u32> = show.seasons.iter().map(|s| s.season_number).collect();
    assert_eq!(numbers, vec![0, 1, 2]);
    assert_eq!(show.season(1).map(|s| s.name.as_str()), Some("Season 1"));
    assert_eq!(show.genres[0].id, 10765);
}

#[test]
fn test_decode_tv_list_does_not_require_overview() {
    let body = br#"{"results": [{"id": 1, "name": "Show", "genre_ids": [18]}]}"#;
    let page = decode_tv_list(RequestId::TrendingTvDay, body, 1).unwrap();
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.page, 1);
}

#[test]
fn test_decode_search_normalizes_and_drops_people() {
    let body = br#"{"page": 1, "results": [
        {"id": 550, "media_type": "movie", "title": "Fight Club", "release_date": "1999-10-15"},
        {"id": 1399, "media_type": "tv", "name": "Game of Thrones", "first_air_date": "2011-04-17"},
        {"id": 287, "media_type": "person", "name": "Brad Pitt"}
    ]}"#;
    let page = decode_search(body, 1).unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].kind, MediaKind::Movie);
    assert_eq!(page.results[0].year, Some(1999));
    assert_eq!(page.results[1].title, "Game of Thrones");
    assert_eq!(page.results[1].api_path(), "/tv/1399");
}

#[test]
fn test_search_people_are_skipped_not_invalid() {
    let hits: Vec<RawSearchHit> = serde_json::from_str(
        r#"[
            {"id": 550, "media_type": "movie", "title": "Fight Club"},
            {"id": 287, "media_type": "person", "name": "Brad Pitt"},
            {"id": 1399, "media_type": "tv"},
            {"media_type": "movie", "title": "No id"}
        ]"#,
    )
    .unwrap();
    let (items, invalid) = convert_entries(RequestId::SearchMulti, hits, convert_search_hit);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 550);
    // the untitled show and the id-less movie; the person is not a failure
    assert_eq!(invalid, 2);
}

#[test]
fn test_decode_videos_and_images() {
    let videos = decode_videos(
        RequestId::MovieVideos,
        br#"{"results": [{"key": "abc", "name": "Trailer", "site": "YouTube", "type": "Trailer"}, {"name": "no key"}]}"#,
    )
    .unwrap();
    assert_eq!(videos.len(), 1);
    assert!(videos[0].is_trailer());

    let images = decode_images(
        RequestId::MovieImages,
        br#"{"backdrops": [{"file_path": "/b1.jpg", "width": 1920, "height": 1080}]}"#,
    )
    .unwrap();
    assert_eq!(images[0].file_path, "/b1.jpg");

    assert!(decode_images(RequestId::TvImages, br#"{"posters": []}"#).unwrap_err().is_schema());
}

#[test]
fn test_decode_streams() {
    let body = br#"{"data": {"sources": [
        {"quality": "Hindi", "url": "https://cdn/x/master.m3u8", "source": "asiacloud", "format": "hls"},
        {"quality": "English", "url": "https://cdn/y.mp4", "source": "asiacloud", "format": "mp4"}
    ]}}"#;
    let sources = decode_streams(RequestId::MovieVideoProvider, body).unwrap();
    assert_eq!(sources.len(), 2);
    assert!(sources[0].is_hls());
    assert!(!sources[1].is_hls());
}

#[test]
fn test_decode_streams_schema_errors() {
    let no_envelope = decode_streams(RequestId::TvVideoProvider, br#"{"sources": []}"#).unwrap_err();
    assert!(no_envelope.is_schema());

    let no_url = decode_streams(
        RequestId::TvVideoProvider,
        br#"{"data": {"sources": [{"quality": "720p"}]}}"#,
    )
    .unwrap_err();
    assert!(no_url.is_schema());
}
