//! Built-in demo catalog. All content is hardcoded; ids are stable so view
//! state keyed by them survives re-renders.

use chrono::NaiveDate;

use crate::domain::{
    ContentRow, HeroItem, MovieListing, MovieNight, PosterItem, ShortClip, VideoId,
};

fn hero(id: &str, title: &str, meta: &str, video: &str) -> HeroItem {
    HeroItem {
        id: id.to_string(),
        title: title.to_string(),
        meta: meta.to_string(),
        video: VideoId::new(video),
    }
}

fn poster(id: &str, title: &str, meta: &str, video: &str, badge: Option<&str>) -> PosterItem {
    PosterItem {
        id: id.to_string(),
        title: title.to_string(),
        meta: meta.to_string(),
        video: VideoId::new(video),
        badge: badge.map(str::to_string),
    }
}

fn clip(id: &str, title: &str, movie_title: &str, video: &str) -> ShortClip {
    ShortClip {
        id: id.to_string(),
        title: title.to_string(),
        movie_title: movie_title.to_string(),
        video: VideoId::new(video),
    }
}

/// Spotlight entries rotated at the top of the home screen.
pub fn heroes() -> Vec<HeroItem> {
    vec![
        hero("h1", "No Vacancy", "2h 23mins • 2025", "n0MFXx8y3zo"),
        hero("h2", "Mental Home", "1h 54mins • 2024", "bOiWOE2dGKA"),
        hero("h3", "Ring Of Trust", "2h 10mins • 2025", "ogKsuxOn6DA"),
    ]
}

fn trending() -> Vec<PosterItem> {
    vec![
        poster("t1", "Where Love Lives", "Romance • Drama", "we7pr8gDCn8", None),
        poster("t2", "Love Again", "Romance", "AJDN7Ao6UN8", None),
        poster("t3", "Midnight", "Thriller", "RjE_tQIS_8U", None),
        poster("t4", "The Chase", "Action", "XIwVeuU9UEg", None),
    ]
}

fn new_releases() -> Vec<PosterItem> {
    vec![
        poster("n1", "Broken Vows", "Romance • New", "JwfQxQ-Lz88", Some("NEW")),
        poster("n2", "Last Promise", "Drama • New", "UdvAoFaRWhQ", Some("NEW")),
        poster("n3", "Midnight Call", "Thriller • New", "UXQ09ZZqceA", Some("NEW")),
        poster("n4", "The Chase II", "Action • New", "veM7Q5dYRHk", Some("NEW")),
    ]
}

/// Teaser clips shown in the horizontal shorts row on home.
pub fn shorts_row() -> Vec<PosterItem> {
    vec![
        poster("s1", "Crazy Plot Twist", "Short", "rPigpPryn3g", None),
        poster("s2", "This Scene Went Viral", "Short", "FwRKimvLQGs", None),
        poster("s3", "One Minute Madness", "Short", "S7BAmITwQAw", None),
        poster("s4", "She Didn't Expect This", "Short", "OP5wL2TI4ts", None),
        poster("s5", "Best Moment", "Short", "CevxZvSJLk8", None),
    ]
}

/// Trailer cards for the auto-advancing featured carousel.
pub fn featured_trailers() -> Vec<PosterItem> {
    vec![
        poster("f1", "Epic Adventure", "Action", "EVGwxjRsXVw", None),
        poster("f2", "Love Stories", "Romance", "6YkS-Pd4ZQs", None),
        poster("f3", "Comedy Gold", "Comedy", "tY1e4vk2SGc", None),
        poster("f4", "Thriller Night", "Thriller", "mdAhwxUt5SY", None),
        poster("f5", "Drama Series", "Drama", "yLGlclnGJBo", None),
    ]
}

/// Clips for the full-screen vertical shorts feed.
pub fn shorts_feed() -> Vec<ShortClip> {
    vec![
        clip("sf1", "She Didn't Expect This", "Still Yours", "OP5wL2TI4ts"),
        clip("sf2", "This Scene Went Viral", "The Boy Before Me", "FwRKimvLQGs"),
        clip("sf3", "Crazy Plot Twist", "Ring Of Trust", "rPigpPryn3g"),
        clip("sf4", "One Minute Madness", "Broken Vows", "S7BAmITwQAw"),
    ]
}

/// Titled content rows below the hero card, in display order.
pub fn home_rows() -> Vec<ContentRow> {
    let releases = new_releases();
    let mut rows = vec![ContentRow {
        title: "Trending now".to_string(),
        items: trending(),
    }];
    for title in [
        "New Releases",
        "Top Movies",
        "Epic Classics",
        "Critics' Picks",
    ] {
        rows.push(ContentRow {
            title: title.to_string(),
            items: releases.clone(),
        });
    }
    rows
}

/// The movie-night ticket page content.
pub fn movie_night() -> MovieNight {
    let listing = |title: &str,
                   genre: &str,
                   showtime: &str,
                   duration_min: u32,
                   rating: &str,
                   poster: &str,
                   slug: &str| MovieListing {
        title: title.to_string(),
        genre: genre.to_string(),
        showtime: showtime.to_string(),
        duration_min,
        rating: rating.to_string(),
        poster_url: format!("https://image.tmdb.org/t/p/original/{poster}"),
        single_ticket_url: format!("https://example.com/single-ticket-{slug}"),
        double_ticket_url: format!("https://example.com/double-ticket-{slug}"),
    };

    MovieNight {
        // NaiveDate::from_ymd_opt only fails on out-of-range input.
        date: NaiveDate::from_ymd_opt(2025, 2, 13).unwrap_or_default(),
        headline: "Valentine Movie Night".to_string(),
        tagline: "Four films · One unforgettable evening".to_string(),
        listings: vec![
            listing(
                "Mike and Dave",
                "Comedy",
                "9:00 PM – 10:50 PM",
                110,
                "9.6",
                "2qVWrNSaIq1eYODj1St6lsgaoQS.jpg",
                "mike-dave",
            ),
            listing(
                "Without Remorse",
                "Romance • Drama",
                "11:00 PM – 12:50 AM",
                112,
                "8.9",
                "6GCOpT8QcNzup09TAMmvvk22LTR.jpg",
                "without-remorse",
            ),
            listing(
                "Marked Men",
                "Action",
                "1:00 AM – 2:50 AM",
                118,
                "9.4",
                "hGPiYGCQ6IQHPSsp08jY4gCIRxL.jpg",
                "marked-men",
            ),
            listing(
                "Evil Dead Rise",
                "Horror",
                "3:00 AM – 4:00 AM",
                108,
                "9.5",
                "5ik4ATKmNtmJU6AYD0bLm56BCVM.jpg",
                "evil-dead",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_urls_point_at_the_demo_cdn() {
        let heroes = heroes();
        assert_eq!(heroes.len(), 3);
        assert_eq!(
            heroes[0].video.thumbnail_url(),
            "https://i.ytimg.com/vi/n0MFXx8y3zo/hq720.jpg"
        );
    }

    #[test]
    fn home_rows_are_nonempty_and_titled() {
        let rows = home_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| !row.items.is_empty()));
        assert_eq!(rows[0].title, "Trending now");
    }

    #[test]
    fn movie_night_listings_round_trip_through_json() {
        let night = movie_night();
        assert_eq!(night.listings.len(), 4);
        let text = serde_json::to_string(&night).expect("serialize");
        let back: MovieNight = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back.listings[0].title, "Mike and Dave");
        assert_eq!(back.date, night.date);
    }
}
