use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
static GLOBAL_EVENT_CACHE: LazyLock<DashMap<String, TimelineEvent>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "timeline"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct TimelineAssets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    #[serde(rename = "youtube")]
    YoutubeVideo,
    InstagramReel,
    GenericVideo,
    BeforeAfter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub src: String,
    /// Second image of a before/after pair.
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl MediaItem {
    pub fn alt_text(&self) -> &str {
        if let Some(alt) = self.alt.as_deref().filter(|a| !a.trim().is_empty()) {
            return alt;
        }
        match self.kind {
            MediaKind::Image => "Portfolio image",
            MediaKind::YoutubeVideo => "YouTube video player",
            MediaKind::InstagramReel | MediaKind::GenericVideo => "Video",
            MediaKind::BeforeAfter => "Before and after comparison",
        }
    }

    #[cfg_attr(not(any(feature = "ssr", test)), allow(dead_code))]
    fn validate(&self) -> Result<(), String> {
        if self.src.trim().is_empty() {
            return Err("missing src".to_string());
        }
        match (self.kind, self.after.as_deref()) {
            (MediaKind::BeforeAfter, None) => Err("before_after needs an `after` image".to_string()),
            (MediaKind::BeforeAfter, Some(after)) if after.trim().is_empty() => {
                Err("before_after needs an `after` image".to_string())
            }
            (MediaKind::BeforeAfter, Some(_)) | (_, None) => Ok(()),
            (kind, Some(_)) => Err(format!("`after` is only valid for before_after, not {kind:?}")),
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    date: String,
    category: String,
    #[serde(default)]
    order: u32,
    profile_image: String,
    #[serde(default)]
    autoplay: bool,
    #[serde(default)]
    media: Vec<MediaItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub order: u32,
    pub date: String,
    pub title: String,
    pub category: String,
    pub description_html: String,
    pub profile_image: String,
    pub autoplay: bool,
    pub media: Vec<MediaItem>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Timeline event not found")]
    NotFound,
    #[error("Couldn't parse front matter of {0}")]
    FrontMatter(String),
    #[error("Invalid media item {index} in {event}: {reason}")]
    InvalidMedia {
        event: String,
        index: usize,
        reason: String,
    },
    #[error("{0} is not valid UTF-8")]
    Encoding(String),
}

#[cfg(feature = "ssr")]
fn event_id(name: &str) -> &str {
    name.strip_suffix(".md").unwrap_or(name)
}

#[cfg(feature = "ssr")]
pub fn parse_event(name: &str, content: &str) -> Result<TimelineEvent, ContentError> {
    let id = event_id(name).to_string();
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ContentError::FrontMatter(name.to_string()))?;

    for (index, item) in fm.data.media.iter().enumerate() {
        item.validate().map_err(|reason| ContentError::InvalidMedia {
            event: id.clone(),
            index,
            reason,
        })?;
    }

    let parser = Parser::new_ext(&fm.content, Options::all());
    let mut description_html = String::new();
    pulldown_cmark::html::push_html(&mut description_html, parser);

    Ok(TimelineEvent {
        id,
        order: fm.data.order,
        date: fm.data.date,
        title: fm.data.title,
        category: fm.data.category,
        description_html,
        profile_image: fm.data.profile_image,
        autoplay: fm.data.autoplay,
        media: fm.data.media,
    })
}

#[cfg(feature = "ssr")]
pub fn get_event(name: &str) -> Result<TimelineEvent, ContentError> {
    if let Some(event) = GLOBAL_EVENT_CACHE.get(name) {
        return Ok(event.clone());
    }
    let file = TimelineAssets::get(name).ok_or(ContentError::NotFound)?;
    let content =
        String::from_utf8(file.data.into()).map_err(|_| ContentError::Encoding(name.to_string()))?;
    let event = parse_event(name, &content)?;
    GLOBAL_EVENT_CACHE.insert(name.to_string(), event.clone());
    Ok(event)
}

/// All embedded events, ordered by their `order` field.
#[cfg(feature = "ssr")]
pub fn load_events() -> Result<Vec<TimelineEvent>, ContentError> {
    let mut events = TimelineAssets::iter()
        .map(|name| get_event(&name))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| tracing::error!("failed to load timeline: {e}"))?;
    events.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
    tracing::info!(count = events.len(), "loaded timeline events");
    Ok(events)
}
