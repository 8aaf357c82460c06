// ============================================================================
// Place Table
// Resolves human-readable place names to signed digit offsets
// ============================================================================

use std::fmt;

use super::errors::{NumericError, NumericResult};

/// Name-to-offset table, kept sorted by name so error messages can list the
/// supported names without re-sorting. "ones" and "units" are synonyms.
///
/// Positive offsets are digits to the right of the decimal point, negative
/// offsets digits to the left, zero the ones place.
const PLACE_TABLE: &[(&str, i8)] = &[
    ("billions", -9),
    ("billionths", 9),
    ("hundred thousands", -5),
    ("hundred thousandths", 5),
    ("hundreds", -2),
    ("hundredths", 2),
    ("millions", -6),
    ("millionths", 6),
    ("ones", 0),
    ("ten thousands", -4),
    ("ten thousandths", 4),
    ("tens", -1),
    ("tenths", 1),
    ("thousands", -3),
    ("thousandths", 3),
    ("trillions", -12),
    ("trillionths", 12),
    ("units", 0),
];

/// All supported place names, in sorted order.
pub(super) fn names() -> impl Iterator<Item = &'static str> {
    PLACE_TABLE.iter().map(|&(name, _)| name)
}

/// A resolved rounding place: the signed digit offset targeted by a
/// rounding operation.
///
/// Obtained by resolving a place name against the fixed table. The table is
/// the only way to construct a `Place`, so a value of this type always
/// denotes a supported offset.
///
/// # Example
/// ```ignore
/// use utilkit::numeric::Place;
///
/// let place = Place::resolve("Tens")?;
/// assert_eq!(place.offset(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Place(i8);

impl Place {
    /// Resolve a place name to its digit offset.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// There is no partial or fuzzy matching: the normalized name must be
    /// present in the table exactly.
    ///
    /// # Errors
    /// Returns `UnrecognizedPlace` (listing the supported names) if the
    /// normalized name is absent from the table.
    pub fn resolve(name: &str) -> NumericResult<Self> {
        let normalized = name.trim().to_lowercase();
        PLACE_TABLE
            .binary_search_by_key(&normalized.as_str(), |&(entry, _)| entry)
            .map(|idx| Self(PLACE_TABLE[idx].1))
            .map_err(|_| NumericError::UnrecognizedPlace(name.trim().to_string()))
    }

    /// The signed digit offset.
    ///
    /// Positive = right of the decimal point, negative = left, zero = ones.
    #[inline]
    pub const fn offset(self) -> i8 {
        self.0
    }

    /// The canonical name for this place.
    ///
    /// Synonyms collapse to the first table entry with the same offset, so
    /// both "ones" and "units" report "ones".
    pub fn canonical_name(self) -> &'static str {
        PLACE_TABLE
            .iter()
            .find(|&&(_, offset)| offset == self.0)
            .map(|&(name, _)| name)
            .unwrap_or("ones")
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

impl std::str::FromStr for Place {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

// Serde goes through the place name, not the raw offset, so a deserialized
// Place is always a table entry.
#[cfg(feature = "serde")]
impl serde::Serialize for Place {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.canonical_name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Place {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::resolve(&name).map_err(serde::de::Error::custom)
    }
}
