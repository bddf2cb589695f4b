//! Whole-collection JSON persistence on top of a [`KeyValueStore`].
//!
//! Each collection lives under one key as a JSON array. Reads fetch the full
//! array and decode it record by record; writes serialize and replace it.
//! A record that does not decode is kept as raw JSON and written back
//! unchanged, so one odd entry never hides or destroys the others.

use crate::domain::{GameError, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Store key of the users collection.
pub const USERS_KEY: &str = "treasureHuntUsers";

/// Store key of the leaderboard collection.
pub const LEADERBOARD_KEY: &str = "treasureHuntLeaderboard";

/// One stored record, decoded if possible.
#[derive(Serialize)]
#[serde(untagged)]
enum Entry<T> {
    Known(T),
    Unknown(Value),
}

/// The records of one collection, in stored order.
#[derive(Serialize)]
#[serde(transparent)]
pub(crate) struct Records<T>(Vec<Entry<T>>);

impl<T> Default for Records<T> {
    fn default() -> Self {
        Records(Vec::new())
    }
}

impl<T: DeserializeOwned> Records<T> {
    // ---
    fn decode(raw: Vec<Value>, key: &'static str) -> Self {
        // ---
        let entries = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| match serde_json::from_value(value.clone()) {
                Ok(item) => Entry::Known(item),
                Err(err) => {
                    tracing::warn!(key, index, error = %err, "Keeping undecodable record as-is");
                    Entry::Unknown(value)
                }
            })
            .collect();

        Records(entries)
    }
}

impl<T> Records<T> {
    // ---
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        // ---
        self.0.iter().filter_map(|entry| match entry {
            Entry::Known(item) => Some(item),
            Entry::Unknown(_) => None,
        })
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        // ---
        self.0.iter_mut().filter_map(|entry| match entry {
            Entry::Known(item) => Some(item),
            Entry::Unknown(_) => None,
        })
    }

    pub(crate) fn push(&mut self, item: T) {
        // ---
        self.0.push(Entry::Known(item));
    }

    /// Decoded records only.
    pub(crate) fn into_known(self) -> Vec<T> {
        // ---
        self.0
            .into_iter()
            .filter_map(|entry| match entry {
                Entry::Known(item) => Some(item),
                Entry::Unknown(_) => None,
            })
            .collect()
    }

    /// Whether an undecodable record carries `field == value`.
    pub(crate) fn unknown_has(&self, field: &str, value: &str) -> bool {
        // ---
        self.0.iter().any(|entry| match entry {
            Entry::Unknown(raw) => raw.get(field).and_then(Value::as_str) == Some(value),
            Entry::Known(_) => false,
        })
    }
}

/// One collection as read from the store.
pub(crate) enum Collection<T> {
    // ---
    /// Missing keys read as an empty collection.
    Parsed(Records<T>),

    /// The stored blob is not a JSON array.
    Corrupt(serde_json::Error),
}

impl<T> Collection<T> {
    // ---
    /// Records for read paths: a corrupt blob counts as empty.
    pub(crate) fn or_empty(self, key: &'static str) -> Records<T> {
        // ---
        match self {
            Collection::Parsed(records) => records,
            Collection::Corrupt(err) => {
                tracing::warn!(key, error = %err, "Ignoring unparsable collection");
                Records::default()
            }
        }
    }

    /// Records for write paths: a corrupt blob must not be overwritten.
    pub(crate) fn or_refuse(self, key: &'static str) -> Result<Records<T>, GameError> {
        // ---
        match self {
            Collection::Parsed(records) => Ok(records),
            Collection::Corrupt(err) => {
                tracing::error!(key, error = %err, "Refusing to overwrite unparsable collection");
                Err(GameError::CorruptCollection(key))
            }
        }
    }
}

pub(crate) async fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &'static str,
) -> Result<Collection<T>, GameError> {
    // ---
    let Some(raw) = store.get(key).await? else {
        return Ok(Collection::Parsed(Records::default()));
    };

    Ok(match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(values) => Collection::Parsed(Records::decode(values, key)),
        Err(err) => Collection::Corrupt(err),
    })
}

pub(crate) async fn write_collection<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &'static str,
    records: &Records<T>,
) -> Result<(), GameError> {
    // ---
    let raw = serde_json::to_string(records).map_err(anyhow::Error::from)?;
    store.set(key, &raw).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::infrastructure::store::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        score: u32,
    }

    fn row(name: &str, score: u32) -> Row {
        // ---
        Row {
            name: name.to_string(),
            score,
        }
    }

    #[tokio::test]
    async fn missing_key_is_empty_collection() -> Result<(), GameError> {
        // ---
        let store = MemoryStore::new();
        let records: Records<Row> = read_collection(&store, USERS_KEY)
            .await?
            .or_refuse(USERS_KEY)?;

        assert_eq!(records.iter().count(), 0);
        Ok(())
    }

    #[tokio::test]
    async fn non_array_blob_is_empty_on_read_and_refused_on_write() -> Result<(), GameError> {
        // ---
        let store = MemoryStore::new();
        store.set(LEADERBOARD_KEY, "{not json").await?;

        let records: Records<Row> = read_collection(&store, LEADERBOARD_KEY)
            .await?
            .or_empty(LEADERBOARD_KEY);
        assert_eq!(records.iter().count(), 0);

        let refused = read_collection::<Row>(&store, LEADERBOARD_KEY)
            .await?
            .or_refuse(LEADERBOARD_KEY);
        assert!(matches!(
            refused,
            Err(GameError::CorruptCollection(LEADERBOARD_KEY))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn write_then_read_returns_same_items() -> Result<(), GameError> {
        // ---
        let store = MemoryStore::new();
        let mut records = Records::default();
        records.push(row("c", 3));
        records.push(row("a", 1));
        write_collection(&store, USERS_KEY, &records).await?;

        let read: Vec<Row> = read_collection(&store, USERS_KEY)
            .await?
            .or_refuse(USERS_KEY)?
            .into_known();
        assert_eq!(read, vec![row("c", 3), row("a", 1)]);
        Ok(())
    }

    #[tokio::test]
    async fn undecodable_records_survive_a_rewrite() -> Result<(), GameError> {
        // ---
        let store = MemoryStore::new();
        store
            .set(
                USERS_KEY,
                r#"[{"name":"a","score":1},{"name":"odd"},42,{"name":"b","score":2}]"#,
            )
            .await?;

        let mut records: Records<Row> = read_collection(&store, USERS_KEY)
            .await?
            .or_refuse(USERS_KEY)?;
        assert_eq!(records.iter().count(), 2);
        assert!(records.unknown_has("name", "odd"));
        assert!(!records.unknown_has("name", "a"));

        for item in records.iter_mut() {
            item.score += 10;
        }
        records.push(row("c", 3));
        write_collection(&store, USERS_KEY, &records).await?;

        let raw: Value = serde_json::from_str(&store.get(USERS_KEY).await?.unwrap_or_default())
            .map_err(anyhow::Error::from)?;
        assert_eq!(
            raw,
            serde_json::json!([
                {"name": "a", "score": 11},
                {"name": "odd"},
                42,
                {"name": "b", "score": 12},
                {"name": "c", "score": 3}
            ])
        );
        Ok(())
    }
}
