//! Model assembler — turn accumulated lists into key-addressed maps.
//!
//! Last write wins on duplicate keys. References held by files and
//! modules are rewritten to the final keys of the typed maps, and any
//! reference that has no entity behind it is dropped.

use crate::config::TypeKeys;
use crate::model::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

pub fn assemble(collected: Collections, type_keys: TypeKeys) -> DocumentationSet {
    let Collections {
        files,
        modules,
        functions,
        structures,
        enumerations,
        types,
    } = collected;

    // id → output key for the typed collections.
    let structure_keys: HashMap<String, String> = structures
        .iter()
        .map(|s| (s.id.clone(), type_key(type_keys, &s.id, &s.name)))
        .collect();
    let enumeration_keys: HashMap<String, String> = enumerations
        .iter()
        .map(|e| (e.id.clone(), type_key(type_keys, &e.id, &e.name)))
        .collect();
    let type_names: HashMap<String, String> = structure_keys
        .iter()
        .chain(enumeration_keys.iter())
        .map(|(id, key)| (id.clone(), key.clone()))
        .collect();

    let functions = keyed("functions", functions, |f| f.id.clone());
    let structures = keyed("structures", structures, |s| {
        type_key(type_keys, &s.id, &s.name)
    });
    let enumerations = keyed("enumerations", enumerations, |e| {
        type_key(type_keys, &e.id, &e.name)
    });
    let types = keyed("types", types, |t| {
        type_names.get(&t.id).cloned().unwrap_or_else(|| t.id.clone())
    });

    let function_ids: HashSet<&str> = functions.keys().map(String::as_str).collect();

    let files = keyed("files", files, |f| f.id.clone())
        .into_iter()
        .map(|(key, mut file)| {
            file.functions = retain_known(&file.id, file.functions, &function_ids);
            file.structures = resolve_refs(&file.id, file.structures, &structure_keys, "structure");
            file.enumerations =
                resolve_refs(&file.id, file.enumerations, &enumeration_keys, "enumeration");
            (key, file)
        })
        .collect();
    let modules = keyed("modules", modules, |m| m.id.clone())
        .into_iter()
        .map(|(key, mut module)| {
            module.functions = retain_known(&module.id, module.functions, &function_ids);
            module.structures =
                resolve_refs(&module.id, module.structures, &structure_keys, "structure");
            module.enumerations =
                resolve_refs(&module.id, module.enumerations, &enumeration_keys, "enumeration");
            (key, module)
        })
        .collect();

    DocumentationSet {
        files,
        functions,
        modules,
        structures,
        enumerations,
        types,
    }
}

fn type_key(mode: TypeKeys, id: &str, name: &str) -> String {
    match mode {
        TypeKeys::Id => id.to_string(),
        TypeKeys::Name => name.to_string(),
    }
}

fn keyed<T>(collection: &str, items: Vec<T>, key: impl Fn(&T) -> String) -> BTreeMap<String, T> {
    let mut map = BTreeMap::new();
    for item in items {
        let k = key(&item);
        if map.insert(k.clone(), item).is_some() {
            debug!(collection, key = %k, "duplicate key, keeping last");
        }
    }
    map
}

fn retain_known(owner: &str, ids: Vec<String>, known: &HashSet<&str>) -> Vec<String> {
    ids.into_iter()
        .filter(|id| {
            let found = known.contains(id.as_str());
            if !found {
                warn!(owner, reference = %id, "dropping dangling function reference");
            }
            found
        })
        .collect()
}

fn resolve_refs(
    owner: &str,
    ids: Vec<String>,
    keys: &HashMap<String, String>,
    what: &str,
) -> Vec<String> {
    let mut resolved = Vec::new();
    for id in ids {
        match keys.get(&id) {
            Some(key) if !resolved.contains(key) => resolved.push(key.clone()),
            Some(_) => {}
            None => warn!(owner, reference = %id, "dropping dangling {what} reference"),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn function(id: &str, name: &str) -> Function {
        Function {
            id: id.into(),
            name: name.into(),
            parameters: vec![],
            return_type: "void".into(),
            return_description: None,
            brief_description: None,
            detailed_description: None,
        }
    }

    fn structure(id: &str, name: &str) -> Structure {
        Structure {
            id: id.into(),
            name: name.into(),
            members: vec![],
            brief_description: None,
            detailed_description: None,
        }
    }

    fn collections() -> Collections {
        Collections {
            files: vec![File {
                id: "motor_8h".into(),
                name: "motor.h".into(),
                functions: vec!["f1".into(), "f2".into()],
                structures: vec!["structstate".into(), "classmissing".into()],
                enumerations: vec![],
            }],
            modules: vec![Module {
                id: "group__motor".into(),
                name: "motor".into(),
                functions: vec!["f1".into()],
                structures: vec!["structstate".into()],
                enumerations: vec![],
            }],
            functions: vec![function("f1", "off"), function("f2", "on"), function("f1", "off_again")],
            structures: vec![structure("structstate", "state")],
            enumerations: vec![],
            types: vec![TypeEntry {
                id: "structstate".into(),
                kind: TypeKind::Structure,
            }],
        }
    }

    #[test]
    fn keys_by_id_last_write_wins() {
        let set = assemble(collections(), TypeKeys::Id);
        assert_eq!(set.functions.len(), 2);
        assert_eq!(set.functions["f1"].name, "off_again");
        assert!(set.structures.contains_key("structstate"));
        assert_eq!(set.types["structstate"].kind, TypeKind::Structure);
    }

    #[test]
    fn dangling_references_are_dropped() {
        let set = assemble(collections(), TypeKeys::Id);
        let file = &set.files["motor_8h"];
        assert_eq!(file.structures, ["structstate"]);
        for f in &file.functions {
            assert!(set.functions.contains_key(f));
        }
    }

    #[test]
    fn name_keys_rewrite_references() {
        let set = assemble(collections(), TypeKeys::Name);
        assert!(set.structures.contains_key("state"));
        assert_eq!(set.types["state"].id, "structstate");
        assert_eq!(set.modules["group__motor"].structures, ["state"]);
        assert!(set.functions.contains_key("f1"), "functions stay keyed by id");
    }
}
