pub mod config;
pub mod error;
pub mod model;
pub mod recipes;
pub mod transform;

use log::debug;
use scraper::Html;

pub use crate::config::DownloadOptions;
pub use crate::error::RecipeError;
pub use crate::model::{AttrMatch, Feed, FeedList, RecipeMetadata, TagSelector};
pub use crate::recipes::{NewsRecipe, RgaOnline, RGA_COVER_URL};

/// Runs a recipe's post-processing hook over a serialized article fragment.
///
/// Convenience entry point for the CLI and for tests; a host application
/// already holding a parsed tree calls
/// [`postprocess_html`](NewsRecipe::postprocess_html) on it directly.
pub fn postprocess_fragment(recipe: &dyn NewsRecipe, html: &str, first_fetch: bool) -> String {
    let mut document = Html::parse_fragment(html);
    debug!("postprocessing fragment of {} bytes", html.len());

    recipe.postprocess_html(&mut document, first_fetch);
    document.root_element().inner_html()
}

/// Serializes a recipe's descriptor to pretty-printed JSON.
pub fn describe(recipe: &dyn NewsRecipe) -> Result<String, RecipeError> {
    describe_with_options(recipe, &DownloadOptions::default())
}

/// Serializes a recipe's descriptor with download overrides applied
///
/// # Arguments
/// * `recipe` - The recipe to describe
/// * `options` - Per-run overrides merged into the metadata block
///
/// # Returns
/// The descriptor (metadata, feeds, boundary markers, cover URL) as JSON
pub fn describe_with_options(
    recipe: &dyn NewsRecipe,
    options: &DownloadOptions,
) -> Result<String, RecipeError> {
    let descriptor = serde_json::json!({
        "metadata": options.apply(recipe.metadata()),
        "feeds": recipe.feeds(),
        "remove_tags_before": recipe.remove_tags_before(),
        "remove_tags_after": recipe.remove_tags_after(),
        "cover_url": recipe.cover_url(),
    });

    Ok(serde_json::to_string_pretty(&descriptor)?)
}
