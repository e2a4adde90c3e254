//! Data model for extracted documentation — serialized as-is by the JSON emitter.
//!
//! Every record is built completely before it is pushed into a collection.
//! Optional text is `Option<String>` all the way down and serializes as
//! `null`, never as an omitted key or an empty string.

use serde::Serialize;
use std::collections::BTreeMap;

/// One documented source file. Holds references (ids) only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct File {
    pub id: String,
    pub name: String,
    pub functions: Vec<String>,
    pub structures: Vec<String>,
    pub enumerations: Vec<String>,
}

/// A documentation group (`@defgroup`), orthogonal to file membership.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    pub id: String,
    pub name: String,
    pub functions: Vec<String>,
    pub structures: Vec<String>,
    pub enumerations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub id: String,
    pub name: String,
    pub parameters: Vec<FunctionParameter>,
    pub return_type: String,
    pub return_description: Option<String>,
    pub brief_description: Option<String>,
    pub detailed_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// `None` when the function's `@param` table has no entry for this name.
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Structure {
    pub id: String,
    pub name: String,
    pub members: Vec<StructureMember>,
    pub brief_description: Option<String>,
    pub detailed_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub brief_description: Option<String>,
    pub detailed_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enumeration {
    pub id: String,
    pub name: String,
    pub values: Vec<EnumerationValue>,
    pub brief_description: Option<String>,
    pub detailed_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumerationValue {
    pub name: String,
    pub brief_description: Option<String>,
    pub detailed_description: Option<String>,
}

/// Which typed collection a type id lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Structure,
    Enumeration,
}

/// Type registry entry: lets a consumer resolve an id without scanning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeEntry {
    pub id: String,
    pub kind: TypeKind,
}

/// Everything the extractor accumulates during one pass, in input order.
#[derive(Debug, Default)]
pub struct Collections {
    pub files: Vec<File>,
    pub modules: Vec<Module>,
    pub functions: Vec<Function>,
    pub structures: Vec<Structure>,
    pub enumerations: Vec<Enumeration>,
    pub types: Vec<TypeEntry>,
}

/// The assembled, key-addressed model written to the output file.
///
/// Field order is the key order of the emitted JSON object.
#[derive(Debug, Default, Serialize)]
pub struct DocumentationSet {
    pub files: BTreeMap<String, File>,
    pub functions: BTreeMap<String, Function>,
    pub modules: BTreeMap<String, Module>,
    pub structures: BTreeMap<String, Structure>,
    pub enumerations: BTreeMap<String, Enumeration>,
    pub types: BTreeMap<String, TypeEntry>,
}
