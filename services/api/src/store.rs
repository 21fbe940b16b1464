//! In-memory media collections
//!
//! Each collection is an ordered, index-addressed sequence of items behind
//! its own lock. All read-modify-write operations hold the write lock for
//! their full duration, so concurrent mutations cannot interleave and
//! index shifts stay consistent.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::{MediaDraft, MediaItem, MediaPatch};

/// Custom error type for collection store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was absent from a creation payload
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An index-based access fell outside the current collection bounds
    #[error("Index {index} out of range for collection of length {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// An ordered, index-addressed media collection
///
/// Items keep insertion order; removing an item shifts every later index
/// down by one.
#[derive(Clone)]
pub struct MediaStore {
    name: &'static str,
    items: Arc<RwLock<Vec<MediaItem>>>,
}

impl MediaStore {
    /// Create an empty collection
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Build a collection from seed drafts, validating every entry
    pub fn from_drafts(name: &'static str, drafts: Vec<MediaDraft>) -> StoreResult<Self> {
        let mut items = Vec::with_capacity(drafts.len());
        for draft in drafts {
            items.push(materialize(draft)?);
        }

        Ok(Self {
            name,
            items: Arc::new(RwLock::new(items)),
        })
    }

    /// Full ordered snapshot of the collection
    pub async fn list_all(&self) -> Vec<MediaItem> {
        self.items.read().await.clone()
    }

    /// Number of items currently stored
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Get the item at `index`
    pub async fn get(&self, index: usize) -> StoreResult<MediaItem> {
        let items = self.items.read().await;
        items.get(index).cloned().ok_or(StoreError::OutOfRange {
            index,
            len: items.len(),
        })
    }

    /// Append a new item, assigning it the next available index
    pub async fn append(&self, draft: MediaDraft) -> StoreResult<MediaItem> {
        let item = materialize(draft)?;

        let mut items = self.items.write().await;
        items.push(item.clone());
        info!(
            "Appended \"{}\" to {} at index {}",
            item.title,
            self.name,
            items.len() - 1
        );

        Ok(item)
    }

    /// Merge the fields present in `patch` into the item at `index`
    ///
    /// The merge is shallow and last-write-wins per field; fields not
    /// present in the patch are preserved.
    pub async fn update(&self, index: usize, patch: MediaPatch) -> StoreResult<MediaItem> {
        let mut items = self.items.write().await;
        let len = items.len();
        let item = items
            .get_mut(index)
            .ok_or(StoreError::OutOfRange { index, len })?;

        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(year) = patch.year {
            item.year = year;
        }
        if let Some(genre) = patch.genre {
            item.genre = Some(genre);
        }
        if let Some(ratings) = patch.ratings {
            item.ratings = Some(ratings);
        }
        if let Some(director) = patch.director {
            item.director = Some(director);
        }
        item.updated_at = Utc::now();

        Ok(item.clone())
    }

    /// Remove and return the item at `index`, shifting later items down
    pub async fn remove(&self, index: usize) -> StoreResult<MediaItem> {
        let mut items = self.items.write().await;
        if index >= items.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: items.len(),
            });
        }

        let item = items.remove(index);
        info!("Removed \"{}\" from {} at index {}", item.title, self.name, index);

        Ok(item)
    }

    /// Up to `n` items ranked by rating, highest first
    ///
    /// The sort is stable: ties keep insertion order, and unrated items
    /// rank below every rated one.
    pub async fn top_n(&self, n: usize) -> Vec<MediaItem> {
        let mut ranked = self.items.read().await.clone();
        ranked.sort_by(|a, b| {
            let a = a.ratings.unwrap_or(f64::NEG_INFINITY);
            let b = b.ratings.unwrap_or(f64::NEG_INFINITY);
            b.total_cmp(&a)
        });
        ranked.truncate(n);
        ranked
    }
}

/// Validate a draft and promote it to a stored item
fn materialize(draft: MediaDraft) -> StoreResult<MediaItem> {
    let title = draft.title.ok_or(StoreError::MissingField("title"))?;
    let year = draft.year.ok_or(StoreError::MissingField("year"))?;

    let now = Utc::now();
    Ok(MediaItem {
        id: Uuid::new_v4(),
        title,
        year,
        genre: draft.genre,
        ratings: draft.ratings,
        director: draft.director,
        created_at: now,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, year: i32, ratings: Option<f64>) -> MediaDraft {
        MediaDraft {
            title: Some(title.to_string()),
            year: Some(year),
            ratings,
            ..MediaDraft::default()
        }
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let store = MediaStore::new("movies");
        for (title, year) in [("A", 2000), ("B", 2001), ("C", 2002)] {
            store.append(draft(title, year, None)).await.unwrap();
        }

        let titles: Vec<String> = store
            .list_all()
            .await
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn append_requires_title_and_year() {
        let store = MediaStore::new("movies");

        let missing_title = MediaDraft {
            year: Some(1999),
            ..MediaDraft::default()
        };
        assert_eq!(
            store.append(missing_title).await,
            Err(StoreError::MissingField("title"))
        );

        let missing_year = MediaDraft {
            title: Some("No Year".to_string()),
            ..MediaDraft::default()
        };
        assert_eq!(
            store.append(missing_year).await,
            Err(StoreError::MissingField("year"))
        );

        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn out_of_range_access_leaves_collection_unchanged() {
        let store = MediaStore::new("movies");
        store.append(draft("A", 2000, None)).await.unwrap();
        store.append(draft("B", 2001, None)).await.unwrap();

        let expected = StoreError::OutOfRange { index: 2, len: 2 };
        assert_eq!(store.get(2).await, Err(expected.clone()));
        assert_eq!(
            store.update(2, MediaPatch::default()).await,
            Err(expected.clone())
        );
        assert_eq!(store.remove(2).await, Err(expected));

        let titles: Vec<String> = store
            .list_all()
            .await
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let store = MediaStore::new("movies");
        let original = store
            .append(MediaDraft {
                title: Some("Heat".to_string()),
                year: Some(1995),
                genre: Some("Crime".to_string()),
                ratings: Some(8.3),
                director: Some("Michael Mann".to_string()),
            })
            .await
            .unwrap();

        let patch = MediaPatch {
            ratings: Some(9.5),
            ..MediaPatch::default()
        };
        let updated = store.update(0, patch).await.unwrap();

        assert_eq!(updated.ratings, Some(9.5));
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.title, "Heat");
        assert_eq!(updated.year, 1995);
        assert_eq!(updated.genre.as_deref(), Some("Crime"));
        assert_eq!(updated.director.as_deref(), Some("Michael Mann"));
    }

    #[tokio::test]
    async fn remove_shifts_subsequent_items() {
        let store = MediaStore::new("movies");
        for (title, year) in [("A", 2000), ("B", 2001), ("C", 2002)] {
            store.append(draft(title, year, None)).await.unwrap();
        }

        let removed = store.remove(0).await.unwrap();
        assert_eq!(removed.title, "A");
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(0).await.unwrap().title, "B");
        assert_eq!(store.get(1).await.unwrap().title, "C");
    }

    #[tokio::test]
    async fn top_n_ranks_by_rating_with_stable_ties() {
        let store = MediaStore::new("movies");
        store.append(draft("A", 2000, Some(8.0))).await.unwrap();
        store.append(draft("B", 2001, Some(9.0))).await.unwrap();
        store.append(draft("C", 2002, Some(9.0))).await.unwrap();
        store.append(draft("D", 2003, None)).await.unwrap();
        store.append(draft("E", 2004, Some(8.5))).await.unwrap();

        let top: Vec<String> = store
            .top_n(3)
            .await
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(top, ["B", "C", "E"]);

        // Asking for more than the collection holds returns everything,
        // with unrated items last
        let all: Vec<String> = store
            .top_n(10)
            .await
            .into_iter()
            .map(|item| item.title)
            .collect();
        assert_eq!(all, ["B", "C", "E", "A", "D"]);
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let store = MediaStore::new("movies");

        let mut handles = Vec::new();
        for task in 0..4 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..25 {
                    store
                        .append(draft(&format!("t{}-{}", task, i), 2000, None))
                        .await
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 100);
    }

    #[tokio::test]
    async fn from_drafts_validates_seed_entries() {
        let bad = vec![MediaDraft {
            title: Some("No Year".to_string()),
            ..MediaDraft::default()
        }];
        assert!(matches!(
            MediaStore::from_drafts("movies", bad),
            Err(StoreError::MissingField("year"))
        ));
    }
}
