use std::fmt;

use crate::model::table::ManagedTable;

/// Optional command groups that the owner can load and unload at runtime.
///
/// Administration commands are always available and are not a feature module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureModule {
    Logging,
    Customisation,
    Utility,
}

impl FeatureModule {
    pub const ALL: [FeatureModule; 3] = [Self::Logging, Self::Customisation, Self::Utility];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Logging => "logging",
            Self::Customisation => "customisation",
            Self::Utility => "utility",
        }
    }

    /// Capitalised name used in page titles.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Logging => "Logging",
            Self::Customisation => "Customisation",
            Self::Utility => "Utility",
        }
    }

    /// Case-insensitive lookup by module name.
    pub fn from_name(name: &str) -> Option<Self> {
        let lowered = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|module| module.name() == lowered)
    }

    /// Tables created when this module is loaded.
    pub fn tables(&self) -> Vec<ManagedTable> {
        ManagedTable::ALL
            .into_iter()
            .filter(|table| table.module() == *self)
            .collect()
    }
}

impl fmt::Display for FeatureModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
