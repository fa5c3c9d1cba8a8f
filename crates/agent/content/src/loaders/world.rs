//! World snapshot loader.

use std::path::Path;

use agent_core::{Catalog, WorldSnapshot};

use crate::catalog::default_catalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for world snapshots from RON or JSON files.
pub struct WorldLoader;

impl WorldLoader {
    /// Load a snapshot, choosing the format by file extension, and fill any
    /// catalog gaps from the built-in catalog.
    ///
    /// Example (`.ron`):
    /// ```ron
    /// (
    ///     class: grey_goo,
    ///     attributes: { adventures: 40, moxie: 350 },
    ///     inventory: { "June cleaver": 1 },
    ///     skills: ["Nanoshock", "Infinite Loop"],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<WorldSnapshot> {
        Self::load_with_catalog(path, &default_catalog())
    }

    pub fn load_with_catalog(path: &Path, defaults: &Catalog) -> LoadResult<WorldSnapshot> {
        let content = read_file(path)?;

        let mut snapshot: WorldSnapshot = match path.extension().and_then(|ext| ext.to_str()) {
            Some("ron") => ron::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Failed to parse world RON at {:?}: {}", path, e)
            })?,
            Some("json") => serde_json::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Failed to parse world JSON at {:?}: {}", path, e)
            })?,
            other => anyhow::bail!(
                "Unsupported world snapshot format {:?} for {}",
                other,
                path.display()
            ),
        };

        snapshot.catalog.merge_defaults(defaults);
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::{Attribute, CharacterClass, ItemType, WorldQuery};
    use std::io::Write;

    use crate::names::items;

    fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_ron_and_merges_catalog() {
        let file = write_temp(
            ".ron",
            r#"(
                class: grey_goo,
                attributes: { adventures: 40, moxie: 350 },
                inventory: { "June cleaver": 1 },
                skills: ["Nanoshock"],
            )"#,
        );

        let world = WorldLoader::load(file.path()).unwrap();

        assert_eq!(world.character_class(), CharacterClass::GreyGoo);
        assert_eq!(world.attribute(Attribute::Moxie), 350);
        assert_eq!(world.item_type(&items::JUNE_CLEAVER), ItemType::Weapon);
    }

    #[test]
    fn loads_json() {
        let file = write_temp(
            ".json",
            r#"{ "attributes": { "adventures": 12 }, "flags": ["canInteract"] }"#,
        );

        let world = WorldLoader::load(file.path()).unwrap();

        assert_eq!(world.attribute(Attribute::Adventures), 12);
        assert!(world.has_flag("canInteract"));
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_temp(".yaml", "class: sauceror");
        assert!(WorldLoader::load(file.path()).is_err());
    }
}
