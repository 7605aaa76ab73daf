use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::RecipeError;
use crate::model::RecipeMetadata;

/// Per-run download overrides
///
/// A recipe ships fixed freshness and volume limits; a host installation can
/// tighten or relax them for one run without touching the recipe itself.
/// Fields left unset keep the recipe's own values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DownloadOptions {
    /// Override for the maximum article age in days
    #[serde(default)]
    pub oldest_article: Option<u32>,
    /// Override for the per-feed article cap
    #[serde(default)]
    pub max_articles_per_feed: Option<u32>,
}

impl DownloadOptions {
    /// Load download overrides from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RGA_ prefix
    /// 2. recipe.toml file in current directory
    /// 3. The recipe's own values (nothing overridden)
    ///
    /// Environment variable format: RGA_OLDEST_ARTICLE
    pub fn load() -> Result<Self, RecipeError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("recipe").required(false))
            .add_source(
                Environment::with_prefix("RGA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Returns a copy of `metadata` with the set overrides applied.
    ///
    /// The descriptor itself stays read-only; the host uses the returned
    /// copy for the current run.
    pub fn apply(&self, metadata: &RecipeMetadata) -> RecipeMetadata {
        let mut effective = metadata.clone();
        if let Some(days) = self.oldest_article {
            effective.oldest_article = days;
        }
        if let Some(count) = self.max_articles_per_feed {
            effective.max_articles_per_feed = count;
        }
        effective
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipes::{NewsRecipe, RgaOnline};

    #[test]
    fn test_default_options_override_nothing() {
        let recipe = RgaOnline::new();
        let options = DownloadOptions::default();

        let effective = options.apply(recipe.metadata());
        assert_eq!(effective, *recipe.metadata());
    }

    #[test]
    fn test_set_options_replace_limits() {
        let recipe = RgaOnline::new();
        let options = DownloadOptions {
            oldest_article: Some(3),
            max_articles_per_feed: Some(25),
        };

        let effective = options.apply(recipe.metadata());
        assert_eq!(effective.oldest_article, 3);
        assert_eq!(effective.max_articles_per_feed, 25);
        // Everything else is untouched
        assert_eq!(effective.title, recipe.metadata().title);
        assert_eq!(effective.encoding, recipe.metadata().encoding);
    }

    #[test]
    fn test_partial_options_keep_other_limit() {
        let recipe = RgaOnline::new();
        let options = DownloadOptions {
            oldest_article: None,
            max_articles_per_feed: Some(10),
        };

        let effective = options.apply(recipe.metadata());
        assert_eq!(effective.oldest_article, recipe.metadata().oldest_article);
        assert_eq!(effective.max_articles_per_feed, 10);
    }
}
