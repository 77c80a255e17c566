//! Flat-file JSON storage implementation

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{error, warn};

use super::ReservationStore;
use crate::domain::{
    DomainError, DomainResult, NewReservation, Reservation, ReservationFilter, ReservationPatch,
};

/// Reservation store backed by a single JSON array file.
///
/// Every operation performs an independent load-modify-save cycle: the full
/// collection is read from the file, mutated in memory and written back.
/// There is no locking; concurrent mutations can read the same snapshot and
/// the last write wins, so two simultaneous creates may assign the same id
/// and one of the records is lost. Storage failures are absorbed: an
/// unreadable or corrupted file behaves as an empty collection, and a
/// failed write is logged and ignored.
pub struct JsonFileStore {
    data_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// Read the full collection; any failure degrades to an empty one.
    async fn read_all(&self) -> Vec<Reservation> {
        let contents = match tokio::fs::read_to_string(&self.data_path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read {}: {}", self.data_path.display(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(reservations) => reservations,
            Err(e) => {
                warn!("Failed to parse {}: {}", self.data_path.display(), e);
                Vec::new()
            }
        }
    }

    /// Write the full collection; failures are logged, never propagated.
    async fn write_all(&self, reservations: &[Reservation]) {
        let contents = match serde_json::to_string_pretty(reservations) {
            Ok(contents) => contents,
            Err(e) => {
                error!("Failed to serialize reservations: {}", e);
                return;
            }
        };
        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = tokio::fs::create_dir_all(parent).await;
            }
        }
        if let Err(e) = tokio::fs::write(&self.data_path, contents).await {
            error!("Failed to write {}: {}", self.data_path.display(), e);
        }
    }

    /// Load the collection, apply `op`, write back only when `op` succeeds.
    async fn mutate<T, F>(&self, op: F) -> DomainResult<T>
    where
        F: FnOnce(&mut Vec<Reservation>) -> DomainResult<T> + Send,
        T: Send,
    {
        let mut reservations = self.read_all().await;
        let value = op(&mut reservations)?;
        self.write_all(&reservations).await;
        Ok(value)
    }
}

#[async_trait]
impl ReservationStore for JsonFileStore {
    async fn create(&self, new: NewReservation) -> DomainResult<Reservation> {
        self.mutate(move |reservations| {
            // Next id continues from the last element; deleting the tail
            // record frees its id.
            let id = reservations.last().map(|r| r.id + 1).unwrap_or(1);
            let reservation = Reservation::from_new(id, new);
            reservations.push(reservation.clone());
            Ok(reservation)
        })
        .await
    }

    async fn list(&self, filter: &ReservationFilter) -> DomainResult<Vec<Reservation>> {
        let matching: Vec<Reservation> = self
            .read_all()
            .await
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        if matching.is_empty() {
            return Err(DomainError::NoMatches);
        }
        Ok(matching)
    }

    async fn get(&self, id: u32) -> DomainResult<Reservation> {
        self.read_all()
            .await
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(DomainError::NotFound(id))
    }

    async fn update(&self, id: u32, patch: ReservationPatch) -> DomainResult<Reservation> {
        self.mutate(move |reservations| {
            let reservation = reservations
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or(DomainError::NotFound(id))?;
            reservation.apply(&patch);
            Ok(reservation.clone())
        })
        .await
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        self.mutate(move |reservations| {
            let index = reservations
                .iter()
                .position(|r| r.id == id)
                .ok_or(DomainError::NotFound(id))?;
            reservations.remove(index);
            Ok(())
        })
        .await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("reservas.json"))
    }

    fn sample(hotel: &str, guest_count: u32) -> NewReservation {
        NewReservation {
            hotel: hotel.to_string(),
            room_type: "Doble".to_string(),
            guest_count,
            date: "2025-02-10".to_string(),
            status: "Confirmada".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for expected in 1..=3 {
            let created = store.create(sample("H1", 2)).await.unwrap();
            assert_eq!(created.id, expected);
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let created = store.create(sample("Hotel Molina", 2)).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.get(42).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(42)));
    }

    #[tokio::test]
    async fn update_overwrites_only_provided_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let created = store.create(sample("H1", 2)).await.unwrap();

        let updated = store
            .update(
                created.id,
                ReservationPatch {
                    status: Some("Cancelada".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "Cancelada");
        assert_eq!(updated.hotel, created.hotel);
        assert_eq!(updated.guest_count, created.guest_count);

        // The change survived the write-back
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store
            .update(9, ReservationPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(9)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let created = store.create(sample("H1", 2)).await.unwrap();

        store.delete(created.id).await.unwrap();
        let err = store.get(created.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.delete(5).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(5)));
    }

    #[tokio::test]
    async fn list_without_filters_returns_everything() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.create(sample("H1", 2)).await.unwrap();
        store.create(sample("H2", 4)).await.unwrap();

        let all = store.list(&ReservationFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn list_filter_selects_matching_subset() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let a = store.create(sample("Hotel Molina", 2)).await.unwrap();
        store.create(sample("Otro Hotel", 2)).await.unwrap();

        let filter = ReservationFilter {
            hotel: Some("hotel molina".to_string()),
            ..Default::default()
        };
        let matching = store.list(&filter).await.unwrap();
        assert_eq!(matching, vec![a]);
    }

    #[tokio::test]
    async fn list_with_no_matches_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.create(sample("H1", 2)).await.unwrap();

        let filter = ReservationFilter {
            hotel: Some("Nowhere".to_string()),
            ..Default::default()
        };
        let err = store.list(&filter).await.unwrap_err();
        assert!(matches!(err, DomainError::NoMatches));
    }

    #[tokio::test]
    async fn list_on_empty_collection_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.list(&ReservationFilter::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::NoMatches));
    }

    #[tokio::test]
    async fn corrupted_file_behaves_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservas.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        let created = store.create(sample("H1", 2)).await.unwrap();
        assert_eq!(created.id, 1);

        // The file was rewritten as a valid collection
        let fetched = store.get(1).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn missing_parent_directory_is_created_on_write() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("reservas.json"));

        let created = store.create(sample("H1", 2)).await.unwrap();
        assert_eq!(store.get(created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn deleting_the_last_record_frees_its_id() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.create(sample("H1", 2)).await.unwrap();
        let second = store.create(sample("H2", 3)).await.unwrap();
        assert_eq!(second.id, 2);

        store.delete(second.id).await.unwrap();
        let third = store.create(sample("H3", 4)).await.unwrap();
        assert_eq!(third.id, 2);
    }

    #[tokio::test]
    async fn disk_format_uses_legacy_field_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservas.json");
        let store = JsonFileStore::new(&path);
        store.create(sample("H1", 2)).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        for key in ["tipo_habitacion", "num_huespedes", "fecha", "estado"] {
            assert!(contents.contains(key), "missing key {key}: {contents}");
        }
    }
}
