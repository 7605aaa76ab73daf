use scraper::Html;

use crate::model::{Feed, FeedList, RecipeMetadata, TagSelector};
use crate::recipes::NewsRecipe;
use crate::transform;

/// Cover image served from the maintainer's mirror
pub const RGA_COVER_URL: &str = "http://rga.werner-gerard.de/rga.jpg";

// Section feeds of www.rga-online.de: the four local editions first, then
// the topical sections, in the order the paper lists them.
const RGA_FEEDS: [(&str, &str); 10] = [
    ("Remscheid", "http://www.rga-online.de/rss/feed/rga_remscheid"),
    (
        "Wermelskirchen",
        "http://www.rga-online.de/rss/feed/rga_wermelskirchen",
    ),
    (
        "Radevormwald",
        "http://www.rga-online.de/rss/feed/rga_radevormwald",
    ),
    (
        "Hückeswagen",
        "http://www.rga-online.de/rss/feed/rga_hueckeswagen",
    ),
    (
        "Bergisches Land",
        "http://www.rga-online.de/rss/feed/rga_bergisches_land",
    ),
    ("Sport", "http://www.rga-online.de/rss/feed/rga_sport"),
    ("Politik", "http://www.rga-online.de/rss/feed/rga_politik"),
    ("Wirtschaft", "http://www.rga-online.de/rss/feed/rga_wirtschaft"),
    ("Kultur", "http://www.rga-online.de/rss/feed/rga_kultur"),
    (
        "Vermischtes",
        "http://www.rga-online.de/rss/feed/rga_vermischtes",
    ),
];

/// News-download recipe for the Remscheider General-Anzeiger (RGA Online).
pub struct RgaOnline {
    metadata: RecipeMetadata,
    feeds: FeedList,
    content_start: TagSelector,
    content_end: TagSelector,
}

impl RgaOnline {
    pub fn new() -> Self {
        let feeds = RGA_FEEDS
            .iter()
            .map(|&(label, url)| Feed::new(label, url))
            .collect();

        RgaOnline {
            metadata: RecipeMetadata {
                title: "RGA Online".to_string(),
                author: "Volker Heggemann".to_string(),
                description: "Nachrichten aus Remscheid und dem Bergischen Land".to_string(),
                publisher: "Remscheider General-Anzeiger".to_string(),
                category: "news, Germany".to_string(),
                language: "de".to_string(),
                locale: "de_DE".to_string(),
                encoding: "utf-8".to_string(),
                oldest_article: 1,
                max_articles_per_feed: 100,
                no_stylesheets: true,
                use_embedded_content: false,
            },
            // The static list above is known duplicate-free
            feeds: FeedList::new(feeds).expect("RGA feed labels are unique"),
            // Article body starts at the headline span and ends at the
            // clearing line break the CMS emits after the text.
            content_start: TagSelector::tag_with_attr("span", "class", "headgross"),
            content_end: TagSelector::tag_with_attr("br", "clear", "all"),
        }
    }
}

impl Default for RgaOnline {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsRecipe for RgaOnline {
    fn metadata(&self) -> &RecipeMetadata {
        &self.metadata
    }

    fn feeds(&self) -> &FeedList {
        &self.feeds
    }

    fn remove_tags_before(&self) -> Option<&TagSelector> {
        Some(&self.content_start)
    }

    fn remove_tags_after(&self) -> Option<&TagSelector> {
        Some(&self.content_end)
    }

    fn cover_url(&self) -> Option<&str> {
        Some(RGA_COVER_URL)
    }

    fn postprocess_html<'a>(&self, document: &'a mut Html, _first_fetch: bool) -> &'a mut Html {
        transform::flatten_tables(document);
        document
    }
}
