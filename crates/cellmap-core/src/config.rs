use crate::DEFAULT_SHEET_NAME;
use serde::Deserialize;

///
/// MapperConfig
///
/// Mapper-wide settings. Every field has a default, so partial documents
/// deserialize cleanly from any serde format.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    /// Sheet name for row types that do not declare one.
    pub default_sheet_name: String,

    /// Trim surrounding whitespace before numeric and boolean parsing.
    pub trim_numeric: bool,

    /// Read empty cells into nullable fields as `None`.
    pub empty_as_null: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            default_sheet_name: DEFAULT_SHEET_NAME.to_string(),
            trim_numeric: true,
            empty_as_null: true,
        }
    }
}

///
/// TESTS
///
