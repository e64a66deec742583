use chrono::{DateTime, Utc};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Key of a loosely typed [`Series`] index.
///
/// Deserialises untagged, so `"2024-01-02T00:00:00Z"` is a [`IndexKey::Time`], `7` is an
/// [`IndexKey::Integer`] and any other string is an [`IndexKey::Label`].
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize, From)]
#[serde(untagged)]
pub enum IndexKey {
    Time(DateTime<Utc>),
    Integer(i64),
    Label(SmolStr),
}

impl IndexKey {
    pub fn kind(&self) -> IndexKind {
        match self {
            IndexKey::Time(_) => IndexKind::Time,
            IndexKey::Integer(_) => IndexKind::Integer,
            IndexKey::Label(_) => IndexKind::Label,
        }
    }

    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            IndexKey::Time(time) => Some(*time),
            _ => None,
        }
    }
}

impl From<&str> for IndexKey {
    fn from(value: &str) -> Self {
        Self::Label(SmolStr::new(value))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    #[display("time")]
    Time,
    #[display("integer")]
    Integer,
    #[display("label")]
    Label,
}

/// Ordered `(key, value)` observations exactly as supplied by a caller, prior to any validation.
///
/// A [`Series<IndexKey>`] is converted into a validated
/// [`PriceSeries`](crate::prices::PriceSeries) via `TryFrom`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Series<K>(pub Vec<(K, f64)>);

impl<K> Series<K> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, f64)> {
        self.0.iter()
    }
}

impl<K, Key> FromIterator<(Key, f64)> for Series<K>
where
    Key: Into<K>,
{
    fn from_iter<Iter: IntoIterator<Item = (Key, f64)>>(iter: Iter) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }
}

impl<K> IntoIterator for Series<K> {
    type Item = (K, f64);
    type IntoIter = std::vec::IntoIter<(K, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
