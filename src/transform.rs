use html5ever::{LocalName, Namespace, QualName};
use log::debug;
use scraper::{Html, Node};

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// Tags legacy table layouts are built from
const TABLE_TAGS: [&str; 3] = ["table", "tr", "td"];

/// Collapses table markup into inline flow.
///
/// Every `table`, `tr` and `td` element becomes a `span`; attributes,
/// children and tree position stay as they are. The paginated output
/// renderer has no tabular layout, so table-based article markup has to be
/// flattened before assembly. Returns the number of renamed elements.
pub fn flatten_tables(document: &mut Html) -> usize {
    rename_tags(document, &TABLE_TAGS, "span")
}

/// Renames every element whose tag is in `targets` to `replacement`,
/// in document order, mutating the tree in place
///
/// # Arguments
/// * `document` - Parsed article tree, modified in place
/// * `targets` - Tag names to rewrite
/// * `replacement` - Tag name the matches are renamed to
///
/// # Returns
/// The number of elements renamed
pub fn rename_tags(document: &mut Html, targets: &[&str], replacement: &str) -> usize {
    // Two passes: the borrow of the tree during traversal must end before
    // any node is mutated.
    let ids: Vec<_> = document
        .tree
        .root()
        .descendants()
        .filter(|node| {
            node.value()
                .as_element()
                .map_or(false, |element| targets.contains(&element.name()))
        })
        .map(|node| node.id())
        .collect();

    let name = QualName::new(None, Namespace::from(HTML_NS), LocalName::from(replacement));
    for &id in &ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            if let Node::Element(element) = node.value() {
                element.name = name.clone();
            }
        }
    }

    debug!(
        "renamed {} element(s) {:?} to <{}>",
        ids.len(),
        targets,
        replacement
    );
    ids.len()
}
