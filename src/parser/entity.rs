//! Entity builders — one complete record per compound or member.

use super::describe::{parameter_descriptions, return_description, return_type};
use super::text::{description, flatten};
use super::xml::{child, children, required_attr, required_text};
use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::model::*;
use roxmltree::Node;
use tracing::trace;

/// Build a function from a `memberdef kind="function"`.
pub fn build_function(
    member: Node<'_, '_>,
    config: &ExtractConfig,
) -> Result<Function, ExtractError> {
    let id = required_attr(member, "id")?;
    let name = required_text(member, "name", &format!("memberdef {id}"))?;
    let detailed = child(member, "detaileddescription");
    let documented = detailed.map(parameter_descriptions).unwrap_or_default();

    let mut parameters = Vec::new();
    for param in children(member, "param") {
        let declname = flatten(child(param, "declname"));
        let ty = flatten(child(param, "type"));
        let (Some(param_name), Some(ty)) = (declname, ty) else {
            trace!(function = %name, "skipping parameter without name or type");
            continue;
        };
        let description = documented.get(&param_name).cloned();
        parameters.push(FunctionParameter {
            name: param_name,
            ty: config.strip_marker(&ty),
            description,
        });
    }

    Ok(Function {
        id,
        name,
        parameters,
        return_type: return_type(child(member, "type"), config),
        return_description: return_description(detailed),
        brief_description: description(child(member, "briefdescription")),
        detailed_description: description(detailed),
    })
}

/// Build a structure and its registry entry from a `compounddef kind="struct"`.
pub fn build_structure(compound: Node<'_, '_>) -> Result<(Structure, TypeEntry), ExtractError> {
    let id = required_attr(compound, "id")?;
    let name = required_text(compound, "compoundname", &format!("compounddef {id}"))?;

    let mut members = Vec::new();
    for member in members_of_kind(compound, "variable") {
        let context = format!("member of {name}");
        members.push(StructureMember {
            name: required_text(member, "name", &context)?,
            ty: flatten(child(member, "type")).unwrap_or_default(),
            brief_description: description(child(member, "briefdescription")),
            detailed_description: description(child(member, "detaileddescription")),
        });
    }

    let entry = TypeEntry {
        id: id.clone(),
        kind: TypeKind::Structure,
    };
    let structure = Structure {
        id,
        name,
        members,
        brief_description: description(child(compound, "briefdescription")),
        detailed_description: description(child(compound, "detaileddescription")),
    };
    Ok((structure, entry))
}

/// Build an enumeration and its registry entry.
///
/// Accepts either a `compounddef kind="enum"` (named by `compoundname`) or
/// a `memberdef kind="enum"` inside a file or group (named by `name`).
/// Values are the `enumvalue` elements anywhere below `node`.
pub fn build_enumeration(node: Node<'_, '_>) -> Result<(Enumeration, TypeEntry), ExtractError> {
    let id = required_attr(node, "id")?;
    let context = format!("{} {id}", node.tag_name().name());
    let name = if node.has_tag_name("compounddef") {
        required_text(node, "compoundname", &context)?
    } else {
        required_text(node, "name", &context)?
    };

    let mut values = Vec::new();
    for value in node.descendants().filter(|n| n.has_tag_name("enumvalue")) {
        values.push(EnumerationValue {
            name: required_text(value, "name", &format!("enumvalue of {name}"))?,
            brief_description: description(child(value, "briefdescription")),
            detailed_description: description(child(value, "detaileddescription")),
        });
    }

    let entry = TypeEntry {
        id: id.clone(),
        kind: TypeKind::Enumeration,
    };
    let enumeration = Enumeration {
        id,
        name,
        values,
        brief_description: description(child(node, "briefdescription")),
        detailed_description: description(child(node, "detaileddescription")),
    };
    Ok((enumeration, entry))
}

/// Ids referenced by a file or group compound.
#[derive(Debug, Default)]
pub struct References {
    pub functions: Vec<String>,
    pub structures: Vec<String>,
    pub enumerations: Vec<String>,
}

pub fn build_file(compound: Node<'_, '_>, refs: References) -> Result<File, ExtractError> {
    let id = required_attr(compound, "id")?;
    let name = required_text(compound, "compoundname", &format!("compounddef {id}"))?;
    Ok(File {
        id,
        name,
        functions: refs.functions,
        structures: refs.structures,
        enumerations: refs.enumerations,
    })
}

pub fn build_module(compound: Node<'_, '_>, refs: References) -> Result<Module, ExtractError> {
    let id = required_attr(compound, "id")?;
    let name = required_text(compound, "compoundname", &format!("compounddef {id}"))?;
    Ok(Module {
        id,
        name,
        functions: refs.functions,
        structures: refs.structures,
        enumerations: refs.enumerations,
    })
}

/// `memberdef`s of `kind` inside any `sectiondef` of `compound`.
pub fn members_of_kind<'a, 'input>(
    compound: Node<'a, 'input>,
    kind: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    children(compound, "sectiondef")
        .flat_map(|section| children(section, "memberdef"))
        .filter(move |member| member.attribute("kind") == Some(kind))
}
