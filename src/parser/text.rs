//! Flatten documentation subtrees into plain text.
//!
//! Depth-first concatenation of every text node under the subtree, trimmed
//! once at the end. `parameterlist` and `simplesect` are structured carriers
//! read by their own resolvers, so they contribute nothing here, and
//! neither does the text trailing them up to the next element.

use roxmltree::Node;

/// Tags whose content never appears in general flattened text.
const SUPPRESSED: &[&str] = &["parameterlist", "simplesect"];

/// Flatten `node`; `None` in, `None` out.
///
/// A suppressed node passed directly yields `Some("")`.
pub fn flatten(node: Option<Node<'_, '_>>) -> Option<String> {
    node.map(|n| {
        let mut out = String::new();
        collect(n, &mut out);
        out.trim().to_string()
    })
}

/// Flatten the children of `node` without applying suppression to `node`
/// itself. Used to read the content of a `simplesect`.
pub fn flatten_contents(node: Node<'_, '_>) -> String {
    let mut out = String::new();
    collect_children(node, &mut out);
    out.trim().to_string()
}

/// Flatten a description element, treating empty text as absent.
pub fn description(node: Option<Node<'_, '_>>) -> Option<String> {
    flatten(node).filter(|text| !text.is_empty())
}

fn collect(node: Node<'_, '_>, out: &mut String) {
    if node.is_text() {
        out.push_str(node.text().unwrap_or_default());
        return;
    }
    if is_suppressed(node) {
        return;
    }
    collect_children(node, out);
}

fn collect_children(node: Node<'_, '_>, out: &mut String) {
    // Set after a suppressed element; its tail text is dropped with it.
    let mut in_tail = false;
    for child in node.children() {
        if child.is_element() {
            in_tail = is_suppressed(child);
        } else if in_tail {
            continue;
        }
        collect(child, out);
    }
}

fn is_suppressed(node: Node<'_, '_>) -> bool {
    node.is_element() && SUPPRESSED.contains(&node.tag_name().name())
}
