use rga_recipe::TagSelector;
use scraper::{ElementRef, Html, Selector};

fn first_element<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
    let selector = Selector::parse(css).unwrap();
    document.select(&selector).next().unwrap()
}

#[test]
fn test_tag_only_selector_ignores_attributes() {
    let document = Html::parse_fragment(r#"<br clear="all"><br>"#);
    let selector = TagSelector::tag("br");

    let breaks = Selector::parse("br").unwrap();
    for element in document.select(&breaks) {
        assert!(selector.matches(&element));
    }
}

#[test]
fn test_class_matching_is_per_token() {
    let document = Html::parse_fragment(
        r#"<span class="headgross fett">A</span><span class="headgross-sub">B</span>"#,
    );
    let selector = TagSelector::tag_with_attr("span", "class", "headgross");

    let spans = Selector::parse("span").unwrap();
    let mut matched: Vec<bool> = Vec::new();
    for element in document.select(&spans) {
        matched.push(selector.matches(&element));
    }

    // The token list matches, the lookalike class does not.
    assert_eq!(matched, [true, false]);
}

#[test]
fn test_plain_attributes_require_the_whole_value() {
    let document = Html::parse_fragment(r#"<br clear="all"><br clear="left all">"#);
    let selector = TagSelector::tag_with_attr("br", "clear", "all");

    let breaks = Selector::parse("br").unwrap();
    let matched: Vec<bool> = document
        .select(&breaks)
        .map(|element| selector.matches(&element))
        .collect();

    assert_eq!(matched, [true, false]);
}

#[test]
fn test_missing_attribute_never_matches() {
    let document = Html::parse_fragment("<br>");
    let selector = TagSelector::tag_with_attr("br", "clear", "all");

    assert!(!selector.matches(&first_element(&document, "br")));
}

#[test]
fn test_wrong_tag_never_matches() {
    let document = Html::parse_fragment(r#"<div class="headgross">X</div>"#);
    let selector = TagSelector::tag_with_attr("span", "class", "headgross");

    assert!(!selector.matches(&first_element(&document, "div")));
}
