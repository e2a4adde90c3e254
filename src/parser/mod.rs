//! Parser module — dispatch compound definitions by kind.

pub mod describe;
pub mod entity;
pub mod text;
pub mod xml;

use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::model::Collections;
use entity::References;
use roxmltree::{Document, Node};
use tracing::debug;

/// Compound kinds the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundKind {
    File,
    Group,
    Struct,
    Enum,
    /// Namespaces, classes, pages, dirs... loaded but not modelled.
    Ignored,
}

impl CompoundKind {
    pub fn from_attr(kind: Option<&str>) -> Self {
        match kind {
            Some("file") => Self::File,
            Some("group") => Self::Group,
            Some("struct") => Self::Struct,
            Some("enum") => Self::Enum,
            _ => Self::Ignored,
        }
    }
}

/// Single-pass accumulator. Owns every collection for the run.
pub struct Extractor<'c> {
    config: &'c ExtractConfig,
    collected: Collections,
}

impl<'c> Extractor<'c> {
    pub fn new(config: &'c ExtractConfig) -> Self {
        Self {
            config,
            collected: Collections::default(),
        }
    }

    /// Fold every `compounddef` of one parsed XML file into the collections.
    pub fn extract(&mut self, doc: &Document<'_>) -> Result<(), ExtractError> {
        for compound in doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("compounddef"))
        {
            self.compound(compound)?;
        }
        Ok(())
    }

    pub fn finish(self) -> Collections {
        self.collected
    }

    fn compound(&mut self, node: Node<'_, '_>) -> Result<(), ExtractError> {
        let kind = CompoundKind::from_attr(node.attribute("kind"));
        debug!(id = node.attribute("id").unwrap_or("?"), ?kind, "compound");
        match kind {
            CompoundKind::File => {
                let refs = self.scope_members(node)?;
                let file = entity::build_file(node, refs)?;
                self.collected.files.push(file);
            }
            CompoundKind::Group => {
                let refs = self.scope_members(node)?;
                let module = entity::build_module(node, refs)?;
                self.collected.modules.push(module);
            }
            CompoundKind::Struct => {
                let (structure, entry) = entity::build_structure(node)?;
                self.collected.structures.push(structure);
                self.collected.types.push(entry);
            }
            CompoundKind::Enum => {
                let (enumeration, entry) = entity::build_enumeration(node)?;
                self.collected.enumerations.push(enumeration);
                self.collected.types.push(entry);
            }
            CompoundKind::Ignored => {}
        }
        Ok(())
    }

    /// Build the functions and enumerations declared in a file or group and
    /// return the ids it references.
    fn scope_members(&mut self, compound: Node<'_, '_>) -> Result<References, ExtractError> {
        let mut refs = References::default();

        for section in xml::children(compound, "sectiondef") {
            match section.attribute("kind") {
                Some("func") => {
                    for member in xml::children(section, "memberdef")
                        .filter(|m| m.attribute("kind") == Some("function"))
                    {
                        let function = entity::build_function(member, self.config)?;
                        refs.functions.push(function.id.clone());
                        self.collected.functions.push(function);
                    }
                }
                Some("enum") => {
                    for member in xml::children(section, "memberdef")
                        .filter(|m| m.attribute("kind") == Some("enum"))
                    {
                        let (enumeration, entry) = entity::build_enumeration(member)?;
                        refs.enumerations.push(enumeration.id.clone());
                        self.collected.enumerations.push(enumeration);
                        self.collected.types.push(entry);
                    }
                }
                _ => {}
            }
        }

        refs.structures = xml::children(compound, "innerclass")
            .filter_map(|inner| inner.attribute("refid"))
            .map(str::to_string)
            .collect();
        Ok(refs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeKind;

    const FILE_XML: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.1">
  <compounddef id="motor_8h" kind="file" language="C++">
    <compoundname>motor.h</compoundname>
    <innerclass refid="structmotor__state" prot="public">motor_state</innerclass>
    <sectiondef kind="enum">
      <memberdef kind="enum" id="motor_8h_1dir" prot="public" static="no">
        <name>motor_direction</name>
        <enumvalue id="motor_8h_1fwd" prot="public"><name>MOTOR_FORWARD</name></enumvalue>
        <briefdescription></briefdescription>
        <detaileddescription></detaileddescription>
      </memberdef>
    </sectiondef>
    <sectiondef kind="func">
      <memberdef kind="function" id="motor_8h_1off">
        <type>EXPORT_SYM void</type>
        <name>off</name>
        <param><type>int</type><declname>port</declname></param>
        <briefdescription><para>Turn a motor off. </para></briefdescription>
        <detaileddescription></detaileddescription>
      </memberdef>
      <memberdef kind="define" id="motor_8h_1macro"><name>NOT_A_FUNCTION</name></memberdef>
    </sectiondef>
    <sectiondef kind="define">
      <memberdef kind="function" id="motor_8h_1misfiled"><name>misfiled</name></memberdef>
    </sectiondef>
  </compounddef>
  <compounddef id="namespacestd" kind="namespace">
    <compoundname>std</compoundname>
  </compounddef>
</doxygen>"#;

    fn extract(xml: &str) -> Result<Collections, ExtractError> {
        let config = ExtractConfig::default();
        let doc = Document::parse(xml).unwrap();
        let mut extractor = Extractor::new(&config);
        extractor.extract(&doc)?;
        Ok(extractor.finish())
    }

    #[test]
    fn dispatches_kinds() {
        assert_eq!(CompoundKind::from_attr(Some("file")), CompoundKind::File);
        assert_eq!(CompoundKind::from_attr(Some("group")), CompoundKind::Group);
        assert_eq!(CompoundKind::from_attr(Some("struct")), CompoundKind::Struct);
        assert_eq!(CompoundKind::from_attr(Some("enum")), CompoundKind::Enum);
        assert_eq!(CompoundKind::from_attr(Some("namespace")), CompoundKind::Ignored);
        assert_eq!(CompoundKind::from_attr(None), CompoundKind::Ignored);
    }

    #[test]
    fn file_collects_functions_enums_and_structs() {
        let c = extract(FILE_XML).unwrap();
        assert_eq!(c.files.len(), 1);
        let file = &c.files[0];
        assert_eq!(file.name, "motor.h");
        assert_eq!(file.functions, ["motor_8h_1off"]);
        assert_eq!(file.enumerations, ["motor_8h_1dir"]);
        assert_eq!(file.structures, ["structmotor__state"]);

        assert_eq!(c.functions.len(), 1, "only function members of func sections");
        assert_eq!(c.functions[0].return_type, "void");
        assert_eq!(c.enumerations[0].name, "motor_direction");
        assert_eq!(c.types.len(), 1);
        assert_eq!(c.types[0].kind, TypeKind::Enumeration);
    }

    #[test]
    fn ignored_kinds_produce_nothing() {
        let c = extract(
            r#"<doxygen><compounddef id="classfoo" kind="class"><compoundname>foo</compoundname></compounddef></doxygen>"#,
        )
        .unwrap();
        assert!(c.files.is_empty() && c.structures.is_empty() && c.types.is_empty());
    }

    #[test]
    fn group_becomes_module() {
        let c = extract(
            r#"<doxygen><compounddef id="group__motor" kind="group">
<compoundname>motor</compoundname><title>Motors</title>
<sectiondef kind="func">
<memberdef kind="function" id="motor_8h_1off"><type>void</type><name>off</name></memberdef>
</sectiondef>
</compounddef></doxygen>"#,
        )
        .unwrap();
        assert_eq!(c.modules.len(), 1);
        assert_eq!(c.modules[0].name, "motor");
        assert_eq!(c.modules[0].functions, ["motor_8h_1off"]);
        assert_eq!(c.functions.len(), 1);
    }

    #[test]
    fn missing_compoundname_aborts() {
        let err = extract(r#"<doxygen><compounddef id="x_8h" kind="file"/></doxygen>"#).unwrap_err();
        assert!(matches!(err, ExtractError::MissingElement { .. }));
    }
}
