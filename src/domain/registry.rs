use std::collections::BTreeMap;
use std::collections::btree_map;

use super::{AppError, ScriptName};

/// Rendered file contents keyed by their file name, built fresh for each install.
///
/// Iteration follows name order so that installs are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptRegistry {
    scripts: BTreeMap<ScriptName, String>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register rendered content under `name`. Names must be unique.
    pub fn insert(&mut self, name: &str, content: String) -> Result<(), AppError> {
        let name = ScriptName::new(name)?;
        match self.scripts.entry(name) {
            btree_map::Entry::Occupied(entry) => {
                Err(AppError::DuplicateScript(entry.key().to_string()))
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(content);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &ScriptName> {
        self.scripts.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ScriptName, &str)> {
        self.scripts.iter().map(|(name, content)| (name, content.as_str()))
    }
}

impl<'a> IntoIterator for &'a ScriptRegistry {
    type Item = (&'a ScriptName, &'a String);
    type IntoIter = btree_map::Iter<'a, ScriptName, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.scripts.iter()
    }
}

/// Scripts and config files destined for the same directory.
///
/// Scripts get the executable mode chosen for the install, configs are
/// always written owner read/write only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedFiles {
    pub scripts: ScriptRegistry,
    pub configs: ScriptRegistry,
}

impl GeneratedFiles {
    pub fn len(&self) -> usize {
        self.scripts.len() + self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.configs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut registry = ScriptRegistry::new();
        registry.insert("start", "#!/bin/bash\n".to_string()).unwrap();

        assert_eq!(registry.get("start"), Some("#!/bin/bash\n"));
        assert_eq!(registry.get("stop"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = ScriptRegistry::new();
        registry.insert("start", String::new()).unwrap();

        let err = registry.insert("start", String::new()).unwrap_err();
        assert!(matches!(err, AppError::DuplicateScript(name) if name == "start"));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let mut registry = ScriptRegistry::new();
        assert!(registry.insert("../start", String::new()).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn iterates_in_name_order() {
        let mut registry = ScriptRegistry::new();
        registry.insert("use", String::new()).unwrap();
        registry.insert("send_kill", String::new()).unwrap();
        registry.insert("start", String::new()).unwrap();

        let names: Vec<&str> = registry.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["send_kill", "start", "use"]);

        let mut looped = Vec::new();
        for (name, _) in &registry {
            looped.push(name.as_str());
        }
        assert_eq!(looped, names);
    }

    #[test]
    fn generated_files_count_both_registries() {
        let mut files = GeneratedFiles::default();
        assert!(files.is_empty());

        files.scripts.insert("start", String::new()).unwrap();
        files.configs.insert("my.sandbox.cnf", String::new()).unwrap();

        assert!(!files.is_empty());
        assert_eq!(files.len(), 2);
    }
}
