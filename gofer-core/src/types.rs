//! Field type tags accepted in `name:type` arguments.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Supported field types.
///
/// This is a language-agnostic representation; the code generators map
/// each tag to a concrete type in the target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Int,
    Bool,
    #[serde(alias = "time.Time")]
    Timestamp,
}

impl FieldType {
    /// Every supported type, in declaration order.
    pub const ALL: [FieldType; 4] = [
        FieldType::String,
        FieldType::Int,
        FieldType::Bool,
        FieldType::Timestamp,
    ];

    /// Get the tag as written on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(FieldType::String),
            "int" => Ok(FieldType::Int),
            "bool" => Ok(FieldType::Bool),
            "timestamp" | "time.Time" => Ok(FieldType::Timestamp),
            _ => Err(format!("unknown field type '{}'", s)),
        }
    }
}

/// The set of field types a command accepts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<FieldType>")]
pub struct TypeSet {
    types: BTreeSet<FieldType>,
}

impl TypeSet {
    /// Create a set from the given types (duplicates are ignored).
    pub fn new(types: impl IntoIterator<Item = FieldType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }

    /// The full set of supported types.
    pub fn all() -> Self {
        Self::new(FieldType::ALL)
    }

    pub fn contains(&self, ty: FieldType) -> bool {
        self.types.contains(&ty)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldType> + '_ {
        self.types.iter().copied()
    }

    /// Comma separated tag list for help messages (e.g., "string, int, bool")
    pub fn names(&self) -> String {
        self.iter()
            .map(|ty| ty.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for TypeSet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<FieldType>> for TypeSet {
    fn from(types: Vec<FieldType>) -> Self {
        Self::new(types)
    }
}
