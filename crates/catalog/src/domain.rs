use serde::{Deserialize, Serialize};

/// Reference to a hosted video, keyed the way the demo CDN keys thumbnails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Poster-quality still for this video.
    pub fn thumbnail_url(&self) -> String {
        format!("https://i.ytimg.com/vi/{}/hq720.jpg", self.0)
    }
}

/// Spotlight entry rotated through the top of the home screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroItem {
    pub id: String,
    pub title: String,
    pub meta: String,
    pub video: VideoId,
}

/// One card in a horizontally scrolling content row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterItem {
    pub id: String,
    pub title: String,
    pub meta: String,
    pub video: VideoId,
    pub badge: Option<String>,
}

/// Full-screen clip in the vertical shorts feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortClip {
    pub id: String,
    pub title: String,
    pub movie_title: String,
    pub video: VideoId,
}

/// Titled horizontal row on the home screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRow {
    pub title: String,
    pub items: Vec<PosterItem>,
}

/// One film on the movie-night ticket page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListing {
    pub title: String,
    pub genre: String,
    pub showtime: String,
    pub duration_min: u32,
    pub rating: String,
    pub poster_url: String,
    pub single_ticket_url: String,
    pub double_ticket_url: String,
}

/// The movie-night event: a date and its ordered screenings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieNight {
    pub date: chrono::NaiveDate,
    pub headline: String,
    pub tagline: String,
    pub listings: Vec<MovieListing>,
}

/// Content filter pills under the home header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFilter {
    Shows,
    Movies,
    Categories,
}

impl ContentFilter {
    pub const ALL: [ContentFilter; 3] = [
        ContentFilter::Shows,
        ContentFilter::Movies,
        ContentFilter::Categories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentFilter::Shows => "Shows",
            ContentFilter::Movies => "Movies",
            ContentFilter::Categories => "Categories",
        }
    }
}
