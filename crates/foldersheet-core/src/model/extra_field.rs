/// Optional export columns the user can append to the base schema.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An optional output column.
///
/// Declaration order is the canonical column order: because selections are
/// kept in a [`BTreeSet`], columns always come out as created date, hidden,
/// extension, path no matter in which order the user picked them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum ExtraField {
    CreatedDate,
    IsHidden,
    Extension,
    Path,
}

/// A set of selected extra fields, iterated in canonical order.
pub type ExtraFieldSet = BTreeSet<ExtraField>;

impl ExtraField {
    /// Every extra field, in canonical order.
    pub const ALL: [ExtraField; 4] = [
        ExtraField::CreatedDate,
        ExtraField::IsHidden,
        ExtraField::Extension,
        ExtraField::Path,
    ];

    /// Identifier used in config files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::CreatedDate => "createdDate",
            Self::IsHidden => "isHidden",
            Self::Extension => "extension",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for ExtraField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name an extra field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown extra field `{0}` (expected one of: createdDate, isHidden, extension, path)")]
pub struct UnknownExtraField(pub String);

impl FromStr for ExtraField {
    type Err = UnknownExtraField;

    /// Accepts the camelCase key as well as kebab/snake spellings,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "createddate" | "created" => Ok(Self::CreatedDate),
            "ishidden" | "hidden" => Ok(Self::IsHidden),
            "extension" | "ext" => Ok(Self::Extension),
            "path" => Ok(Self::Path),
            _ => Err(UnknownExtraField(s.to_string())),
        }
    }
}

/// Config files accept the same spellings as the command line.
impl TryFrom<String> for ExtraField {
    type Error = UnknownExtraField;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_iterates_in_canonical_order() {
        let mut selection = ExtraFieldSet::new();
        selection.insert(ExtraField::Path);
        selection.insert(ExtraField::CreatedDate);
        selection.insert(ExtraField::Extension);

        let order: Vec<_> = selection.into_iter().collect();
        assert_eq!(
            order,
            vec![ExtraField::CreatedDate, ExtraField::Extension, ExtraField::Path]
        );
    }

    #[test]
    fn parses_keys_and_aliases() {
        assert_eq!("createdDate".parse(), Ok(ExtraField::CreatedDate));
        assert_eq!("is-hidden".parse(), Ok(ExtraField::IsHidden));
        assert_eq!("EXTENSION".parse(), Ok(ExtraField::Extension));
        assert_eq!("path".parse(), Ok(ExtraField::Path));
    }

    #[test]
    fn rejects_unknown_field() {
        let err = "author".parse::<ExtraField>().unwrap_err();
        assert_eq!(err, UnknownExtraField("author".to_string()));
    }

    #[test]
    fn key_round_trips_through_from_str() {
        for field in ExtraField::ALL {
            assert_eq!(field.key().parse(), Ok(field));
        }
    }
}
