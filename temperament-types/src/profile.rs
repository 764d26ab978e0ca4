use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DefinitionError, TypeCode};

/// Read-only descriptions for all 16 type codes.
///
/// A table missing any code is rejected, so lookups on a loaded table always succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<TypeCode, String>", into = "BTreeMap<TypeCode, String>")]
pub struct ProfileTable {
    profiles: BTreeMap<TypeCode, String>,
}

impl ProfileTable {
    /// Build a table from `(code, description)` entries; every code must be present.
    pub fn new(
        entries: impl IntoIterator<Item = (TypeCode, String)>,
    ) -> Result<Self, DefinitionError> {
        let profiles: BTreeMap<TypeCode, String> = entries.into_iter().collect();
        if let Some(missing) = TypeCode::all().find(|code| !profiles.contains_key(code)) {
            return Err(DefinitionError::MissingProfile(missing));
        }
        Ok(Self { profiles })
    }

    /// Description for a type code.
    pub fn describe(&self, code: TypeCode) -> Option<&str> {
        self.profiles.get(&code).map(String::as_str)
    }

    /// Iterate over all entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeCode, &str)> {
        self.profiles
            .iter()
            .map(|(code, description)| (*code, description.as_str()))
    }
}

impl TryFrom<BTreeMap<TypeCode, String>> for ProfileTable {
    type Error = DefinitionError;

    fn try_from(profiles: BTreeMap<TypeCode, String>) -> Result<Self, Self::Error> {
        Self::new(profiles)
    }
}

impl From<ProfileTable> for BTreeMap<TypeCode, String> {
    fn from(table: ProfileTable) -> Self {
        table.profiles
    }
}
