//! Sort keys, directions and ordered sort specifications

use crate::types::error::SortError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Separator between path segments in a sort key
pub const PATH_SEPARATOR: char = '.';

/// Dotted field path naming a (possibly nested) field, e.g. `Address.City`
///
/// Segments are kept verbatim. A key with empty segments (`"A..B"`) names no
/// field and fails validation like any other unknown key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SortKey {
    segments: Vec<String>,
}

impl SortKey {
    /// Parse a sort key from dot-separated string
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split(PATH_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Create a sort key from already split segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of field accesses in this path
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Check if this is a single segment key
    pub fn is_simple(&self) -> bool {
        self.segments.len() == 1
    }

    pub fn to_dot_notation(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dot_notation())
    }
}

impl From<&str> for SortKey {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for SortKey {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl From<&SortKey> for SortKey {
    fn from(key: &SortKey) -> Self {
        key.clone()
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.to_dot_notation()
    }
}

/// Sort direction for a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, Direction::Descending)
    }

    /// Apply this direction to an ascending comparison result
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(SortError::invalid_spec(
                s,
                "direction must be one of asc, ascending, desc, descending",
            )),
        }
    }
}

/// One (key, direction) pair of a sort specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub key: SortKey,
    #[serde(default)]
    pub direction: Direction,
}

impl SortEntry {
    pub fn new(key: impl Into<SortKey>, direction: Direction) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }
}

/// Ordered sequence of (key, direction) pairs.
///
/// The first entry is the primary key; later entries break ties in order.
/// Only ordered constructors exist so precedence is always explicit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortSpec {
    entries: Vec<SortEntry>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec with a single primary key
    pub fn single(key: impl Into<SortKey>, direction: Direction) -> Self {
        Self {
            entries: vec![SortEntry::new(key, direction)],
        }
    }

    pub fn ascending(key: impl Into<SortKey>) -> Self {
        Self::single(key, Direction::Ascending)
    }

    pub fn descending(key: impl Into<SortKey>) -> Self {
        Self::single(key, Direction::Descending)
    }

    /// Append a tie-breaking key
    pub fn then_by(mut self, key: impl Into<SortKey>, direction: Direction) -> Self {
        self.push(key, direction);
        self
    }

    pub fn then_by_descending(self, key: impl Into<SortKey>) -> Self {
        self.then_by(key, Direction::Descending)
    }

    pub fn push(&mut self, key: impl Into<SortKey>, direction: Direction) {
        self.entries.push(SortEntry::new(key, direction));
    }

    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SortKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<SortKey>> FromIterator<(K, Direction)> for SortSpec {
    fn from_iter<I: IntoIterator<Item = (K, Direction)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, direction)| SortEntry::new(key, direction))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SortSpec {
    type Item = &'a SortEntry;
    type IntoIter = std::slice::Iter<'a, SortEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", entry.key, entry.direction)?;
        }
        Ok(())
    }
}

/// Parses `"Name, Address.City desc, Age asc"`.
///
/// Entries are comma separated; each entry is a key optionally followed by a
/// direction. Missing directions default to ascending.
impl FromStr for SortSpec {
    type Err = SortError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().is_empty() {
            return Err(SortError::invalid_spec(input, "sort spec is empty"));
        }

        let mut spec = SortSpec::new();
        for (index, raw_entry) in input.split(',').enumerate() {
            let mut parts = raw_entry.split_whitespace();
            let key = parts.next().ok_or_else(|| {
                SortError::invalid_spec(input, format!("entry {} is empty", index + 1))
            })?;
            let direction = match parts.next() {
                Some(word) => word
                    .parse::<Direction>()
                    .map_err(|_| SortError::invalid_spec(input, format!("unknown direction '{}'", word)))?,
                None => Direction::Ascending,
            };
            if let Some(extra) = parts.next() {
                return Err(SortError::invalid_spec(
                    input,
                    format!("unexpected token '{}' in entry {}", extra, index + 1),
                ));
            }
            spec.push(key, direction);
        }

        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_sort_key_parsing() {
        let key = SortKey::parse("Property4.PropertyW.PropertyA");
        assert_eq!(key.depth(), 3);
        assert!(!key.is_simple());
        assert_eq!(key.segments()[1], "PropertyW");
        assert_eq!(key.to_dot_notation(), "Property4.PropertyW.PropertyA");
    }

    #[test]
    fn test_sort_key_keeps_empty_segments() {
        let key = SortKey::parse("A..B");
        assert_eq!(key.segments(), &["A", "", "B"]);
        assert_eq!(SortKey::parse("").segments(), &[""]);
    }

    #[test]
    fn test_direction_apply() {
        assert_eq!(Direction::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Direction::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Direction::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Direction::default(), Direction::Ascending);
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("DESC".parse::<Direction>().unwrap(), Direction::Descending);
        assert_eq!("ascending".parse::<Direction>().unwrap(), Direction::Ascending);
        assert_matches!("up".parse::<Direction>(), Err(SortError::InvalidSpec { .. }));
    }

    #[test]
    fn test_spec_preserves_precedence() {
        let spec = SortSpec::ascending("Property1")
            .then_by_descending("Property4.PropertyW.PropertyA")
            .then_by("Property4.PropertyZ", Direction::Descending);

        let keys: Vec<String> = spec.keys().map(|k| k.to_dot_notation()).collect();
        assert_eq!(
            keys,
            vec!["Property1", "Property4.PropertyW.PropertyA", "Property4.PropertyZ"]
        );
    }

    #[test]
    fn test_spec_from_str() {
        let spec: SortSpec = "Property1, Property4.PropertyZ desc ,Property2 ASC"
            .parse()
            .unwrap();
        assert_eq!(spec.len(), 3);
        assert_eq!(spec.entries()[0].direction, Direction::Ascending);
        assert_eq!(spec.entries()[1].key.to_dot_notation(), "Property4.PropertyZ");
        assert_eq!(spec.entries()[1].direction, Direction::Descending);
        assert_eq!(spec.to_string(), "Property1 asc, Property4.PropertyZ desc, Property2 asc");
    }

    #[test]
    fn test_spec_from_str_errors() {
        assert_matches!("".parse::<SortSpec>(), Err(SortError::InvalidSpec { .. }));
        assert_matches!("Name,,Age".parse::<SortSpec>(), Err(SortError::InvalidSpec { .. }));
        assert_matches!("Name sideways".parse::<SortSpec>(), Err(SortError::InvalidSpec { .. }));
        assert_matches!("Name asc extra".parse::<SortSpec>(), Err(SortError::InvalidSpec { .. }));
    }

    #[test]
    fn test_spec_serde() {
        let json = r#"[{"key":"Address.City","direction":"desc"},{"key":"Name"}]"#;
        let spec: SortSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec, SortSpec::descending("Address.City").then_by("Name", Direction::Ascending));

        let encoded = serde_json::to_string(&spec).unwrap();
        assert!(encoded.contains("\"key\":\"Address.City\""));
        assert!(encoded.contains("\"direction\":\"descending\""));
    }
}
