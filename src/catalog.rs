use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Landscape,
    #[serde(rename = "9:16")]
    Portrait,
}

impl AspectRatio {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Landscape => "aspect-landscape",
            Self::Portrait => "aspect-portrait",
        }
    }
}

/// One playable piece of work. `id` is the stable identity of the entry;
/// titles are display text only and may repeat.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub id: String,
    pub src: String,
    pub poster: String,
    pub title: String,
    pub aspect_ratio: AspectRatio,
}

impl VideoEntry {
    /// Identity for a rendered player. A new `src` under the same id must
    /// remount the `<video>`, since swapping its `<source>` alone does not
    /// reload the media.
    pub fn render_key(&self) -> String {
        format!("{}|{}", self.id, self.src)
    }

    fn from_literal(literal: &VideoLiteral, aspect_ratio: AspectRatio) -> Self {
        let (id, src, poster, title) = *literal;
        Self {
            id: id.to_string(),
            src: src.to_string(),
            poster: poster.to_string(),
            title: title.to_string(),
            aspect_ratio,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub showreel: VideoEntry,
    pub landscape: Vec<VideoEntry>,
    pub portrait: Vec<VideoEntry>,
}

/// Full-bleed still behind the hero section.
pub const HERO_BACKDROP_URL: &str = "https://i.ibb.co/SDm5Vcfn/Firefly-20250726064723-1.png";

type VideoLiteral = (&'static str, &'static str, &'static str, &'static str);

const SAMPLE_BASE: &str = "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample";

const SHOWREEL: VideoLiteral = (
    "showreel",
    "BigBuckBunny.mp4",
    "https://images.pexels.com/photos/1112598/pexels-photo-1112598.jpeg?auto=compress&cs=tinysrgb&w=1200",
    "Showreel",
);

const LANDSCAPE: [VideoLiteral; 6] = [
    (
        "commercial-project",
        "BigBuckBunny.mp4",
        "https://images.pexels.com/photos/1112598/pexels-photo-1112598.jpeg?auto=compress&cs=tinysrgb&w=800",
        "Commercial Project",
    ),
    (
        "music-video",
        "ElephantsDream.mp4",
        "https://images.pexels.com/photos/1181677/pexels-photo-1181677.jpeg?auto=compress&cs=tinysrgb&w=800",
        "Music Video",
    ),
    (
        "documentary",
        "ForBiggerBlazes.mp4",
        "https://images.pexels.com/photos/1181677/pexels-photo-1181677.jpeg?auto=compress&cs=tinysrgb&w=800",
        "Documentary",
    ),
    (
        "short-film",
        "ForBiggerEscapes.mp4",
        "https://images.pexels.com/photos/1181677/pexels-photo-1181677.jpeg?auto=compress&cs=tinysrgb&w=800",
        "Short Film",
    ),
    (
        "brand-campaign",
        "SubaruOutbackOnStreetAndDirt.mp4",
        "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=800",
        "Brand Campaign",
    ),
    (
        "cinematic-trailer",
        "TearsOfSteel.mp4",
        "https://images.pexels.com/photos/1181248/pexels-photo-1181248.jpeg?auto=compress&cs=tinysrgb&w=800",
        "Cinematic Trailer",
    ),
];

const PORTRAIT: [VideoLiteral; 8] = [
    (
        "social-media-ad",
        "ForBiggerFun.mp4",
        "https://images.pexels.com/photos/1181676/pexels-photo-1181676.jpeg?auto=compress&cs=tinysrgb&w=400",
        "Social Media Ad",
    ),
    (
        "instagram-reel",
        "ForBiggerJoyrides.mp4",
        "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=400",
        "Instagram Reel",
    ),
    (
        "tiktok-video",
        "ForBiggerMeltdowns.mp4",
        "https://images.pexels.com/photos/1181674/pexels-photo-1181674.jpeg?auto=compress&cs=tinysrgb&w=400",
        "TikTok Video",
    ),
    (
        "mobile-story",
        "Sintel.mp4",
        "https://images.pexels.com/photos/1181673/pexels-photo-1181673.jpeg?auto=compress&cs=tinysrgb&w=400",
        "Mobile Story",
    ),
    (
        "product-review",
        "VolkswagenGTIReview.mp4",
        "https://images.pexels.com/photos/1181672/pexels-photo-1181672.jpeg?auto=compress&cs=tinysrgb&w=400",
        "Product Review",
    ),
    (
        "event-promo",
        "WeAreGoingOnBullrun.mp4",
        "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=400",
        "Event Promo",
    ),
    (
        "tutorial-video",
        "WhatCarCanYouGetForAGrand.mp4",
        "https://images.pexels.com/photos/1181670/pexels-photo-1181670.jpeg?auto=compress&cs=tinysrgb&w=400",
        "Tutorial Video",
    ),
    (
        "brand-story",
        "BigBuckBunny.mp4",
        "https://images.pexels.com/photos/1181669/pexels-photo-1181669.jpeg?auto=compress&cs=tinysrgb&w=400",
        "Brand Story",
    ),
];

fn sample_entry(literal: &VideoLiteral, aspect_ratio: AspectRatio) -> VideoEntry {
    let mut entry = VideoEntry::from_literal(literal, aspect_ratio);
    entry.src = format!("{SAMPLE_BASE}/{}", entry.src);
    entry
}

fn sample_entries(literals: &[VideoLiteral], aspect_ratio: AspectRatio) -> Vec<VideoEntry> {
    literals
        .iter()
        .map(|literal| sample_entry(literal, aspect_ratio))
        .collect()
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            showreel: sample_entry(&SHOWREEL, AspectRatio::Landscape),
            landscape: sample_entries(&LANDSCAPE, AspectRatio::Landscape),
            portrait: sample_entries(&PORTRAIT, AspectRatio::Portrait),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &VideoEntry> {
        std::iter::once(&self.showreel)
            .chain(self.landscape.iter())
            .chain(self.portrait.iter())
    }

    pub fn duplicate_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.entries()
            .map(|entry| entry.id.as_str())
            .find(|id| !seen.insert(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_matches_gallery_layout() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.showreel.title, "Showreel");
        assert_eq!(catalog.landscape.len(), 6);
        assert_eq!(catalog.portrait.len(), 8);
        assert!(catalog
            .landscape
            .iter()
            .all(|entry| entry.aspect_ratio == AspectRatio::Landscape));
        assert!(catalog
            .portrait
            .iter()
            .all(|entry| entry.aspect_ratio == AspectRatio::Portrait));
    }

    #[test]
    fn builtin_ids_are_unique_even_where_sources_repeat() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.duplicate_id(), None);
        assert_eq!(catalog.landscape[0].src, catalog.portrait[7].src);
        assert_ne!(catalog.landscape[0].id, catalog.portrait[7].id);
    }

    #[test]
    fn sample_sources_are_absolute() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .entries()
            .all(|entry| entry.src.starts_with("https://") && entry.poster.starts_with("https://")));
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let mut catalog = Catalog::builtin();
        catalog.portrait[0].id = "music-video".to_string();

        assert_eq!(catalog.duplicate_id(), Some("music-video"));
    }

    #[test]
    fn aspect_ratio_uses_ratio_notation_on_the_wire() {
        let json = serde_json::to_string(&Catalog::builtin().portrait[0]).expect("serializable");

        assert!(json.contains(r#""aspectRatio":"9:16""#));
    }

    #[test]
    fn render_key_changes_with_the_source() {
        let entry = Catalog::builtin().landscape[0].clone();
        let mut recut = entry.clone();
        recut.src = "https://cdn.example.com/recut.mp4".to_string();

        assert!(entry.render_key().starts_with(&format!("{}|", entry.id)));
        assert_ne!(entry.render_key(), recut.render_key());

        let mut retitled = entry.clone();
        retitled.title = "Another title".to_string();
        assert_eq!(entry.render_key(), retitled.render_key());
    }

    #[test]
    fn hero_backdrop_is_an_https_image() {
        let url = url::Url::parse(HERO_BACKDROP_URL).expect("valid URL");

        assert_eq!(url.scheme(), "https");
        assert!(url.path().ends_with(".png"));
        assert!(!HERO_BACKDROP_URL.contains('\''));
    }
}
