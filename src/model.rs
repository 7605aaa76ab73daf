use scraper::ElementRef;
use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// A single feed subscription: display label plus feed URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub label: String,
    pub url: String,
}

impl Feed {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Feed {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Ordered feed list. Order is display order; labels are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedList(Vec<Feed>);

impl FeedList {
    /// Builds a feed list, rejecting duplicate labels
    ///
    /// The host groups articles under the feed label, so a repeated label
    /// would merge two sections.
    pub fn new(feeds: Vec<Feed>) -> Result<Self, RecipeError> {
        for (index, feed) in feeds.iter().enumerate() {
            if feeds[..index].iter().any(|other| other.label == feed.label) {
                return Err(RecipeError::DuplicateFeedLabel(feed.label.clone()));
            }
        }
        Ok(FeedList(feeds))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feed> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Feed] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a FeedList {
    type Item = &'a Feed;
    type IntoIter = std::slice::Iter<'a, Feed>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Marker element used by the host to slice article content.
///
/// A selector names a tag and optionally one attribute/value pair that must
/// both be present on the element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSelector {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<AttrMatch>,
}

/// Attribute/value pair a [`TagSelector`] requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrMatch {
    pub name: String,
    pub value: String,
}

impl TagSelector {
    /// Selector matching any element with the given tag name
    pub fn tag(tag: impl Into<String>) -> Self {
        TagSelector {
            tag: tag.into(),
            attr: None,
        }
    }

    /// Selector matching a tag carrying the given attribute value
    pub fn tag_with_attr(
        tag: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        TagSelector {
            tag: tag.into(),
            attr: Some(AttrMatch {
                name: name.into(),
                value: value.into(),
            }),
        }
    }

    /// Tests an element against this selector.
    ///
    /// `class` is matched per token so `class="headgross fett"` still
    /// matches a selector for `headgross`; every other attribute is compared
    /// as a whole string.
    pub fn matches(&self, element: &ElementRef) -> bool {
        if element.value().name() != self.tag {
            return false;
        }
        match &self.attr {
            None => true,
            Some(attr) => match element.value().attr(&attr.name) {
                None => false,
                Some(actual) if attr.name == "class" => {
                    actual.split_whitespace().any(|token| token == attr.value)
                }
                Some(actual) => actual == attr.value,
            },
        }
    }
}

/// Static descriptor fields the host reads once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    pub publisher: String,
    pub category: String,
    /// Two-letter language code, e.g. "de"
    pub language: String,
    /// Full locale tag, e.g. "de_DE"
    pub locale: String,
    /// Character encoding the source pages are served in
    pub encoding: String,
    /// Skip articles older than this many days
    pub oldest_article: u32,
    pub max_articles_per_feed: u32,
    pub no_stylesheets: bool,
    pub use_embedded_content: bool,
}
