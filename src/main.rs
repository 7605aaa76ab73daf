use log::error;
use std::env;
use std::fs;

use rga_recipe::{
    describe_with_options, postprocess_fragment, DownloadOptions, FeedList, NewsRecipe, RgaOnline,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("describe");

    let recipe = RgaOnline::new();

    match command {
        "describe" => {
            let options = DownloadOptions::load()?;
            println!("{}", describe_with_options(&recipe, &options)?);
        }
        "feeds" => {
            print_feeds(recipe.feeds());
        }
        "postprocess" => {
            let path = args
                .get(2)
                .ok_or("Usage: rga-recipe postprocess <article.html>")?;
            let html = fs::read_to_string(path)?;
            println!("{}", postprocess_fragment(&recipe, &html, true));
        }
        other => {
            error!("Unknown command: {}", other);
            return Err("Expected one of: describe, feeds, postprocess <article.html>".into());
        }
    }

    Ok(())
}

fn print_feeds(feeds: &FeedList) {
    for feed in feeds {
        println!("{}\t{}", feed.label, feed.url);
    }
}
