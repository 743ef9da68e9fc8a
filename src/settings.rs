use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Tunables for newly created hierarchies, read from `hierarchy.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchySettings {
    #[serde(default = "HierarchySettings::default_initial_capacity")]
    pub initial_capacity: usize,
    #[serde(default)]
    pub constraint_parsing: ParseMode,
}

impl Default for HierarchySettings {
    fn default() -> Self {
        Self {
            initial_capacity: Self::default_initial_capacity(),
            constraint_parsing: ParseMode::default(),
        }
    }
}

impl HierarchySettings {
    pub fn load() -> Self {
        Self::load_from_path("hierarchy.json")
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Self {
        use std::fs;

        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<HierarchySettings>(&contents) {
                Ok(settings) => {
                    info!("Loaded hierarchy settings from {:?}", path);
                    settings.validate()
                }
                Err(err) => {
                    warn!(
                        "Failed to parse {:?} ({}). Falling back to default hierarchy settings.",
                        path, err
                    );
                    HierarchySettings::default()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Hierarchy settings file {:?} not found. Using default settings.",
                    path
                );
                HierarchySettings::default()
            }
            Err(err) => {
                warn!(
                    "Failed to read {:?} ({}). Falling back to default hierarchy settings.",
                    path, err
                );
                HierarchySettings::default()
            }
        }
    }

    fn validate(mut self) -> Self {
        if self.initial_capacity == 0 {
            warn!("Initial capacity must be greater than zero. Using default value.");
            self.initial_capacity = Self::default_initial_capacity();
        }

        self
    }

    const fn default_initial_capacity() -> usize {
        16
    }
}

/// How constraint text is read by [`crate::Hierarchy::set_constraint_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Field count and every token must be valid
    #[default]
    Strict,
    /// Never fails; gaps fall back to unbounded ranges
    Lenient,
}
