//! Resolvers for parameter descriptions, return type and return description.

use super::text::{description, flatten, flatten_contents};
use super::xml::child;
use crate::config::ExtractConfig;
use roxmltree::Node;
use std::collections::HashMap;

/// Map each documented parameter name to its description.
///
/// Pairing is structural: every `parametername` inside a `parameteritem`
/// receives that item's own `parameterdescription`, so `@param a,b text`
/// documents both names and a nameless item documents nothing. Only
/// `parameterlist`s of kind `param` (or without a kind) count; `retval`
/// and `exception` lists are ignored.
pub fn parameter_descriptions(detailed: Node<'_, '_>) -> HashMap<String, String> {
    let mut descriptions = HashMap::new();
    let lists = detailed.descendants().filter(|n| {
        n.has_tag_name("parameterlist") && matches!(n.attribute("kind"), None | Some("param"))
    });
    for list in lists {
        for item in list.children().filter(|n| n.has_tag_name("parameteritem")) {
            let Some(text) = description(child(item, "parameterdescription")) else {
                continue;
            };
            let names = item
                .children()
                .filter(|n| n.has_tag_name("parameternamelist"))
                .flat_map(|list| list.children().filter(|n| n.has_tag_name("parametername")));
            for name in names {
                if let Some(name) = flatten(Some(name)).filter(|n| !n.is_empty()) {
                    descriptions.insert(name, text.clone());
                }
            }
        }
    }
    descriptions
}

/// Resolve a return type from the member's `<type>` node.
///
/// The last `<ref>` inside the node wins over the raw text, so
/// `const struct <ref>foo</ref> *` resolves to `foo`. The export marker is
/// stripped either way.
pub fn return_type(type_node: Option<Node<'_, '_>>, config: &ExtractConfig) -> String {
    let linked = type_node.and_then(|node| {
        node.descendants()
            .filter(|n| n.has_tag_name("ref"))
            .last()
    });
    let raw = match linked {
        Some(link) => flatten(Some(link)),
        None => flatten(type_node),
    };
    config.strip_marker(&raw.unwrap_or_default())
}

/// Text of the first `return` simple section in the detailed description.
pub fn return_description(detailed: Option<Node<'_, '_>>) -> Option<String> {
    let section = detailed?.descendants().find(|n| {
        n.has_tag_name("simplesect") && matches!(n.attribute("kind"), None | Some("return"))
    })?;
    Some(flatten_contents(section)).filter(|text| !text.is_empty())
}
