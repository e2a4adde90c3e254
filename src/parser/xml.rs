//! Small lookups over roxmltree nodes with the crate's error type.

use super::text::flatten;
use crate::error::ExtractError;
use roxmltree::Node;

/// First direct child element named `tag`.
pub fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

/// Direct child elements named `tag`.
pub fn children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |n| n.has_tag_name(tag))
}

pub fn required_attr(node: Node<'_, '_>, attribute: &str) -> Result<String, ExtractError> {
    node.attribute(attribute)
        .map(str::to_string)
        .ok_or_else(|| ExtractError::MissingAttribute {
            attribute: attribute.to_string(),
            element: node.tag_name().name().to_string(),
        })
}

/// Flattened text of a required child such as `<name>` or `<compoundname>`.
pub fn required_text(node: Node<'_, '_>, tag: &str, context: &str) -> Result<String, ExtractError> {
    flatten(child(node, tag)).ok_or_else(|| ExtractError::MissingElement {
        element: tag.to_string(),
        context: context.to_string(),
    })
}
