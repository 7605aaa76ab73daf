use rga_recipe::{Feed, FeedList, RecipeError};

#[test]
fn test_order_is_preserved() {
    let feeds = FeedList::new(vec![
        Feed::new("Sport", "http://example.de/sport"),
        Feed::new("Politik", "http://example.de/politik"),
        Feed::new("Kultur", "http://example.de/kultur"),
    ])
    .unwrap();

    let labels: Vec<&str> = feeds.iter().map(|feed| feed.label.as_str()).collect();
    assert_eq!(labels, ["Sport", "Politik", "Kultur"]);
}

#[test]
fn test_duplicate_labels_are_rejected() {
    let result = FeedList::new(vec![
        Feed::new("Sport", "http://example.de/sport"),
        Feed::new("Sport", "http://example.de/lokalsport"),
    ]);

    match result {
        Err(RecipeError::DuplicateFeedLabel(label)) => assert_eq!(label, "Sport"),
        other => panic!("expected duplicate label error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_urls_under_distinct_labels_are_allowed() {
    // Two sections may legitimately point at the same endpoint; only the
    // label is the grouping key.
    let feeds = FeedList::new(vec![
        Feed::new("Sport", "http://example.de/rss"),
        Feed::new("Lokalsport", "http://example.de/rss"),
    ]);

    assert!(feeds.is_ok());
}

#[test]
fn test_empty_list_is_valid() {
    let feeds = FeedList::new(Vec::new()).unwrap();
    assert!(feeds.is_empty());
    assert_eq!(feeds.len(), 0);
}
