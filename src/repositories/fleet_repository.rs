use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::{FleetData, FleetSnapshot};
use crate::services::stats_service::compute_stats;
use crate::storage::FleetStore;
use crate::utils::errors::AppResult;

/// Acceso serializado al documento de flota
///
/// Cada mutación ejecuta `leer → mutar → recalcular stats → escribir` con el
/// mutex tomado, así dos peticiones concurrentes no se pisan. Si el cierre
/// devuelve error no se escribe nada.
pub struct FleetRepository {
    store: Arc<dyn FleetStore>,
    write_lock: Mutex<()>,
}

impl FleetRepository {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Documento completo con las estadísticas al día
    pub async fn load(&self) -> AppResult<FleetData> {
        let mut data = self.store.read().await?;
        data.system_stats = compute_stats(&data);
        Ok(data)
    }

    pub async fn snapshot(&self) -> AppResult<FleetSnapshot> {
        Ok(FleetSnapshot::from(self.load().await?))
    }

    /// Consulta de solo lectura sobre el documento
    pub async fn read<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&FleetData) -> AppResult<T>,
    {
        let data = self.load().await?;
        f(&data)
    }

    pub async fn mutate<T, F>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut FleetData) -> AppResult<T>,
    {
        let _guard = self.write_lock.lock().await;

        let mut data = self.store.read().await?;
        let result = f(&mut data)?;
        data.system_stats = compute_stats(&data);
        self.store.write(&data).await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JourneyStatus;
    use crate::storage::seed::demo_fleet_data;
    use crate::utils::errors::AppError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Almacén en memoria que puede fallar al escribir
    struct MemoryStore {
        data: std::sync::Mutex<FleetData>,
        fail_writes: bool,
        writes: AtomicUsize,
    }

    impl MemoryStore {
        fn new(fail_writes: bool) -> Self {
            Self {
                data: std::sync::Mutex::new(demo_fleet_data()),
                fail_writes,
                writes: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl FleetStore for MemoryStore {
        async fn read(&self) -> AppResult<FleetData> {
            Ok(self.data.lock().unwrap().clone())
        }

        async fn write(&self, data: &FleetData) -> AppResult<()> {
            if self.fail_writes {
                return Err(AppError::Internal("disk full".to_string()));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            *self.data.lock().unwrap() = data.clone();
            Ok(())
        }
    }

    fn add_pending_journey(data: &mut FleetData, user_id: &str) {
        let mut journey = serde_json::from_value::<crate::models::Journey>(serde_json::json!({
            "id": format!("j-{}", user_id),
            "userId": user_id,
            "startLocation": "Head Office",
            "endLocation": "Airport",
            "status": "requested",
            "startTime": "2024-06-01T09:00:00Z"
        }))
        .unwrap();
        journey.user_name = user_id.to_string();
        data.journeys.push(journey);
    }

    #[tokio::test]
    async fn test_mutate_recomputes_stats_before_write() {
        let store = Arc::new(MemoryStore::new(false));
        let repository = FleetRepository::new(store.clone());

        repository
            .mutate(|data| {
                add_pending_journey(data, "u1");
                Ok(())
            })
            .await
            .unwrap();

        let stored = store.read().await.unwrap();
        assert_eq!(stored.system_stats.pending_requests, 1);
        assert_eq!(stored.journeys[0].status, JourneyStatus::Requested);
    }

    #[tokio::test]
    async fn test_failed_closure_writes_nothing() {
        let store = Arc::new(MemoryStore::new(false));
        let repository = FleetRepository::new(store.clone());

        let result: AppResult<()> = repository
            .mutate(|data| {
                add_pending_journey(data, "u1");
                Err(AppError::InvalidState("nope".to_string()))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.writes.load(Ordering::SeqCst), 0);
        assert!(store.read().await.unwrap().journeys.is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_surfaces_as_internal_error() {
        let store = Arc::new(MemoryStore::new(true));
        let repository = FleetRepository::new(store.clone());

        let err = repository
            .mutate(|data| {
                add_pending_journey(data, "u1");
                Ok(())
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(store.read().await.unwrap().journeys.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_mutations_do_not_lose_updates() {
        let store = Arc::new(MemoryStore::new(false));
        let repository = Arc::new(FleetRepository::new(store.clone()));

        let mut handles = Vec::new();
        for i in 0..16 {
            let repository = repository.clone();
            handles.push(tokio::spawn(async move {
                repository
                    .mutate(move |data| {
                        add_pending_journey(data, &format!("user-{}", i));
                        Ok(())
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = store.read().await.unwrap();
        assert_eq!(stored.journeys.len(), 16);
        assert_eq!(stored.system_stats.pending_requests, 16);
    }
}
