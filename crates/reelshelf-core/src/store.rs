use crate::backend::{KeyValueBackend, StoreError};
use reelshelf_models::{MediaItem, MediaKey, WatchStateEntry};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

/// Maximum length of the recently viewed history.
pub const RECENTLY_VIEWED_CAP: usize = 10;

/// The three persisted lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Watchlist,
    MyList,
    RecentlyViewed,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Watchlist, Collection::MyList, Collection::RecentlyViewed];

    /// Storage key; matches what older installs already have on disk.
    pub fn storage_key(&self) -> &'static str {
        match self {
            Collection::Watchlist => "watchlist",
            Collection::MyList => "myList",
            Collection::RecentlyViewed => "recentlyViewed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Collection::Watchlist => "Watchlist",
            Collection::MyList => "My List",
            Collection::RecentlyViewed => "Recently Viewed",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Watchlist, "My List" and the recently viewed history on top of a
/// [`KeyValueBackend`].
///
/// Every collection holds at most one entry per [`MediaKey`]. Stored data
/// that cannot be decoded reads as an empty collection.
#[derive(Debug)]
pub struct WatchStateStore<B: KeyValueBackend> {
    backend: B,
}

impl<B: KeyValueBackend> WatchStateStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_inner(self) -> B {
        self.backend
    }

    pub fn get_all(&self, collection: Collection) -> Vec<WatchStateEntry> {
        let key = collection.storage_key();
        let Some(raw) = self.backend.get(key) else {
            return Vec::new();
        };

        let entries: Vec<WatchStateEntry> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Stored {} is not a valid list, treating it as empty: {}", key, e);
                return Vec::new();
            }
        };

        // Older writers did not dedupe; keep the first occurrence of each key
        let mut seen = HashSet::new();
        let mut entries: Vec<WatchStateEntry> = entries.into_iter().filter(|e| seen.insert(e.key())).collect();
        if collection == Collection::RecentlyViewed {
            entries.truncate(RECENTLY_VIEWED_CAP);
        }
        entries
    }

    pub fn contains(&self, collection: Collection, key: MediaKey) -> bool {
        self.get_all(collection).iter().any(|e| e.key() == key)
    }

    /// Append `entry` unless an entry with the same key is already present.
    /// Returns whether the collection changed.
    ///
    /// Adding to [`Collection::RecentlyViewed`] goes through
    /// [`record_view`](Self::record_view) so the history keeps its ordering.
    pub fn add(&mut self, collection: Collection, entry: WatchStateEntry) -> Result<bool, StoreError> {
        if collection == Collection::RecentlyViewed {
            self.record_view(entry)?;
            return Ok(true);
        }

        let mut entries = self.get_all(collection);
        if entries.iter().any(|e| e.key() == entry.key()) {
            debug!("{} already in {}", entry.key(), collection);
            return Ok(false);
        }
        entries.push(entry);
        self.write(collection, &entries)?;
        Ok(true)
    }

    /// Remove the entry with `key`. Returns whether anything was removed.
    pub fn remove(&mut self, collection: Collection, key: MediaKey) -> Result<bool, StoreError> {
        let mut entries = self.get_all(collection);
        let before = entries.len();
        entries.retain(|e| e.key() != key);
        if entries.len() == before {
            return Ok(false);
        }
        self.write(collection, &entries)?;
        Ok(true)
    }

    /// Remove `entry` if present, add it otherwise. Returns the new membership.
    pub fn toggle(&mut self, collection: Collection, entry: WatchStateEntry) -> Result<bool, StoreError> {
        let key = entry.key();
        if self.remove(collection, key)? {
            Ok(false)
        } else {
            self.add(collection, entry)?;
            Ok(true)
        }
    }

    /// Put `item` at the front of the history, dropping any older entry for
    /// the same key and anything beyond [`RECENTLY_VIEWED_CAP`].
    pub fn add_recently_viewed(&mut self, item: &MediaItem) -> Result<(), StoreError> {
        self.record_view(WatchStateEntry::from_item(item))
    }

    pub fn record_view(&mut self, entry: WatchStateEntry) -> Result<(), StoreError> {
        let collection = Collection::RecentlyViewed;
        let key = entry.key();
        let mut entries = self.get_all(collection);
        entries.retain(|e| e.key() != key);
        entries.insert(0, entry);
        entries.truncate(RECENTLY_VIEWED_CAP);
        self.write(collection, &entries)
    }

    pub fn clear(&mut self, collection: Collection) -> Result<(), StoreError> {
        self.backend.remove(collection.storage_key())
    }

    fn write(&mut self, collection: Collection, entries: &[WatchStateEntry]) -> Result<(), StoreError> {
        let key = collection.storage_key();
        let json = serde_json::to_string(entries).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &json)?;
        debug!("{}: {} entries", key, entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FileBackend, MemoryBackend};
    use reelshelf_models::{MediaKind, Movie, TvShow};

    fn create_entry(kind: MediaKind, id: u64, title: &str) -> WatchStateEntry {
        WatchStateEntry {
            id,
            kind,
            title: title.to_string(),
            poster_path: Some(format!("/{}.jpg", id)),
            date: Some("2020-01-01".to_string()),
        }
    }

    fn movie(id: u64) -> WatchStateEntry {
        create_entry(MediaKind::Movie, id, &format!("Movie {}", id))
    }

    fn store() -> WatchStateStore<MemoryBackend> {
        WatchStateStore::new(MemoryBackend::new())
    }

    fn ids(entries: &[WatchStateEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = store();
        assert!(store.add(Collection::Watchlist, movie(1)).unwrap());
        assert!(!store.add(Collection::Watchlist, movie(1)).unwrap());
        assert_eq!(store.get_all(Collection::Watchlist).len(), 1);
        assert!(store.contains(Collection::Watchlist, MediaKey::movie(1)));
    }

    #[test]
    fn test_same_id_different_kind_are_distinct() {
        let mut store = store();
        store.add(Collection::MyList, create_entry(MediaKind::Movie, 1399, "A movie")).unwrap();
        store.add(Collection::MyList, create_entry(MediaKind::Tv, 1399, "A show")).unwrap();

        assert_eq!(store.get_all(Collection::MyList).len(), 2);
        store.remove(Collection::MyList, MediaKey::movie(1399)).unwrap();

        let remaining = store.get_all(Collection::MyList);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].key(), MediaKey::tv(1399));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = store();
        store.add(Collection::Watchlist, movie(1)).unwrap();
        assert!(!store.remove(Collection::Watchlist, MediaKey::movie(2)).unwrap());
        assert_eq!(ids(&store.get_all(Collection::Watchlist)), vec![1]);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut store = store();
        assert!(store.toggle(Collection::MyList, movie(7)).unwrap());
        assert!(store.contains(Collection::MyList, MediaKey::movie(7)));
        assert!(!store.toggle(Collection::MyList, movie(7)).unwrap());
        assert!(!store.contains(Collection::MyList, MediaKey::movie(7)));
    }

    #[test]
    fn test_collections_are_independent() {
        let mut store = store();
        store.add(Collection::Watchlist, movie(1)).unwrap();
        assert!(!store.contains(Collection::MyList, MediaKey::movie(1)));
        assert!(store.get_all(Collection::RecentlyViewed).is_empty());
    }

    #[test]
    fn test_recently_viewed_moves_to_front() {
        let mut store = store();
        for id in [3, 2, 1] {
            store.record_view(movie(id)).unwrap();
        }
        // history is now [1, 2, 3]; viewing 2 again moves it to the front
        store.record_view(movie(2)).unwrap();
        assert_eq!(ids(&store.get_all(Collection::RecentlyViewed)), vec![2, 1, 3]);
    }

    #[test]
    fn test_recently_viewed_is_capped() {
        let mut store = store();
        for id in 1..=RECENTLY_VIEWED_CAP as u64 + 3 {
            store.record_view(movie(id)).unwrap();
        }
        let history = store.get_all(Collection::RecentlyViewed);
        assert_eq!(history.len(), RECENTLY_VIEWED_CAP);
        assert_eq!(history[0].id, RECENTLY_VIEWED_CAP as u64 + 3);
        assert!(!history.iter().any(|e| e.id <= 3));
    }

    #[test]
    fn test_add_recently_viewed_from_item() {
        let mut store = store();
        let show = MediaItem::from(TvShow {
            id: 1399,
            name: "Game of Thrones".to_string(),
            ..TvShow::default()
        });
        let film = MediaItem::from(Movie {
            id: 1399,
            title: "Other".to_string(),
            ..Movie::default()
        });
        store.add_recently_viewed(&show).unwrap();
        store.add_recently_viewed(&film).unwrap();

        let history = store.get_all(Collection::RecentlyViewed);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].key(), MediaKey::movie(1399));
        assert_eq!(history[1].title, "Game of Thrones");
    }

    #[test]
    fn test_add_to_recently_viewed_goes_through_history() {
        let mut store = store();
        store.add(Collection::RecentlyViewed, movie(1)).unwrap();
        store.add(Collection::RecentlyViewed, movie(2)).unwrap();
        assert_eq!(ids(&store.get_all(Collection::RecentlyViewed)), vec![2, 1]);
    }

    #[test]
    fn test_malformed_data_reads_as_empty() {
        let mut backend = MemoryBackend::new();
        backend.set("watchlist", "not json").unwrap();
        // an older format stored bare ids
        backend.set("myList", "[550, 1399]").unwrap();

        let mut store = WatchStateStore::new(backend);
        assert!(store.get_all(Collection::Watchlist).is_empty());
        assert!(store.get_all(Collection::MyList).is_empty());

        // and the next write replaces the garbage
        store.add(Collection::Watchlist, movie(1)).unwrap();
        assert_eq!(ids(&store.get_all(Collection::Watchlist)), vec![1]);
    }

    #[test]
    fn test_duplicates_on_disk_are_collapsed() {
        let mut backend = MemoryBackend::new();
        let entries = vec![movie(1), movie(1), movie(2)];
        backend.set("watchlist", &serde_json::to_string(&entries).unwrap()).unwrap();

        let store = WatchStateStore::new(backend);
        assert_eq!(ids(&store.get_all(Collection::Watchlist)), vec![1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut store = store();
        store.add(Collection::Watchlist, movie(1)).unwrap();
        store.add(Collection::MyList, movie(1)).unwrap();
        store.clear(Collection::Watchlist).unwrap();
        assert!(store.get_all(Collection::Watchlist).is_empty());
        assert_eq!(store.get_all(Collection::MyList).len(), 1);
    }

    #[test]
    fn test_file_backed_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = WatchStateStore::new(FileBackend::new(dir.path()));
            store.add(Collection::MyList, create_entry(MediaKind::Tv, 1399, "Game of Thrones")).unwrap();
        }
        let store = WatchStateStore::new(FileBackend::new(dir.path()));
        assert!(store.contains(Collection::MyList, MediaKey::tv(1399)));
        assert!(dir.path().join("myList.json").exists());
    }
}
