use std::fmt;

use crate::model::module::FeatureModule;

/// Tables the owner may reset or drop.
///
/// Destructive table commands only accept these names; nothing user supplied is
/// ever spliced into a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagedTable {
    Customisation,
    LoggingConfig,
    Permissions,
    Blacklist,
    Config,
    ItemStats,
}

impl ManagedTable {
    pub const ALL: [ManagedTable; 6] = [
        Self::Customisation,
        Self::LoggingConfig,
        Self::Permissions,
        Self::Blacklist,
        Self::Config,
        Self::ItemStats,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Customisation => "customisation",
            Self::LoggingConfig => "logging_config",
            Self::Permissions => "permissions",
            Self::Blacklist => "blacklist",
            Self::Config => "config",
            Self::ItemStats => "item_stats",
        }
    }

    /// Looks up a table by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|table| table.name() == name.trim())
    }

    /// The feature module whose load step (re)creates this table.
    pub fn module(&self) -> FeatureModule {
        match self {
            Self::LoggingConfig | Self::Config => FeatureModule::Logging,
            Self::Customisation => FeatureModule::Customisation,
            Self::Permissions | Self::Blacklist | Self::ItemStats => FeatureModule::Utility,
        }
    }
}

impl fmt::Display for ManagedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
