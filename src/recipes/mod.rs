use scraper::Html;

use crate::model::{FeedList, RecipeMetadata, TagSelector};

mod rga;

pub use self::rga::{RgaOnline, RGA_COVER_URL};

/// Base contract every news-download recipe implements.
///
/// The host application reads the descriptor once per run, fetches the
/// feeds, slices each article between the boundary markers and then invokes
/// the hooks: [`cover_url`](NewsRecipe::cover_url) while assembling the
/// output, [`postprocess_html`](NewsRecipe::postprocess_html) on every
/// sliced article tree.
pub trait NewsRecipe {
    fn metadata(&self) -> &RecipeMetadata;

    fn feeds(&self) -> &FeedList;

    /// Marker element; the host drops everything before its first match
    fn remove_tags_before(&self) -> Option<&TagSelector> {
        None
    }

    /// Marker element; the host drops everything after its first match
    fn remove_tags_after(&self) -> Option<&TagSelector> {
        None
    }

    /// URL of the cover image, if the recipe provides one
    fn cover_url(&self) -> Option<&str> {
        None
    }

    /// Called once per article after slicing. `first_fetch` is true for the
    /// first article of a run. The tree is mutated in place and handed back
    /// to the caller; the default implementation leaves it untouched.
    fn postprocess_html<'a>(&self, document: &'a mut Html, first_fetch: bool) -> &'a mut Html {
        let _ = first_fetch;
        document
    }
}
