use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use wayfare_core::{repository::PackageRepository, Error, Result, TourPackage};

use crate::validate::{validate_draft, PackageDraft};

/// CRUD over the package collection. Validation is all-or-nothing: an
/// invalid draft never reaches the repository, so nothing is persisted on
/// rejection.
#[derive(Clone)]
pub struct PackageService {
    repo: Arc<dyn PackageRepository>,
}

impl PackageService {
    pub fn new(repo: Arc<dyn PackageRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<TourPackage>> {
        self.repo.list().await
    }

    pub async fn get(&self, id: Uuid) -> Result<TourPackage> {
        self.repo.get(id).await?.ok_or(Error::NotFound("Package"))
    }

    pub async fn create(&self, draft: PackageDraft) -> Result<TourPackage> {
        let fields = validate_draft(draft)?;
        let created = self.repo.insert(fields).await?;
        info!(package_id = %created.id, title = %created.title, "package created");
        Ok(created)
    }

    /// Full-record replace; partial updates are not supported.
    pub async fn update(&self, id: Uuid, draft: PackageDraft) -> Result<TourPackage> {
        let fields = validate_draft(draft)?;
        let updated = self
            .repo
            .replace(id, fields)
            .await?
            .ok_or(Error::NotFound("Package"))?;
        info!(package_id = %updated.id, "package updated");
        Ok(updated)
    }

    /// Removes and returns the record. A second delete of the same id is a
    /// `NotFound`; dependent bookings are left untouched.
    pub async fn delete(&self, id: Uuid) -> Result<TourPackage> {
        let removed = self
            .repo
            .remove(id)
            .await?
            .ok_or(Error::NotFound("Package"))?;
        info!(package_id = %removed.id, "package deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use wayfare_core::PackageFields;

    #[derive(Default)]
    struct MemoryRepo {
        packages: Mutex<HashMap<Uuid, TourPackage>>,
    }

    #[async_trait]
    impl PackageRepository for MemoryRepo {
        async fn list(&self) -> Result<Vec<TourPackage>> {
            Ok(self.packages.lock().unwrap().values().cloned().collect())
        }

        async fn get(&self, id: Uuid) -> Result<Option<TourPackage>> {
            Ok(self.packages.lock().unwrap().get(&id).cloned())
        }

        async fn insert(&self, fields: PackageFields) -> Result<TourPackage> {
            let package = fields.into_package(Uuid::new_v4());
            self.packages
                .lock()
                .unwrap()
                .insert(package.id, package.clone());
            Ok(package)
        }

        async fn replace(&self, id: Uuid, fields: PackageFields) -> Result<Option<TourPackage>> {
            let mut packages = self.packages.lock().unwrap();
            if !packages.contains_key(&id) {
                return Ok(None);
            }
            let package = fields.into_package(id);
            packages.insert(id, package.clone());
            Ok(Some(package))
        }

        async fn remove(&self, id: Uuid) -> Result<Option<TourPackage>> {
            Ok(self.packages.lock().unwrap().remove(&id))
        }
    }

    fn service() -> (PackageService, Arc<MemoryRepo>) {
        let repo = Arc::new(MemoryRepo::default());
        (PackageService::new(repo.clone()), repo)
    }

    fn draft() -> PackageDraft {
        PackageDraft {
            title: Some("Beach Tour".into()),
            description: Some("A day at the coast".into()),
            price: Some(100.0),
            image: Some("https://example.com/beach.jpg".into()),
            date: Some("2024-06-15".into()),
            time: Some("10:00".into()),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let (service, _) = service();
        let created = service.create(draft()).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn rejected_create_persists_nothing() {
        let (service, repo) = service();
        let bad = PackageDraft {
            price: Some(-5.0),
            ..draft()
        };
        assert!(service.create(bad).await.is_err());
        assert!(repo.packages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_absent_id_is_not_found() {
        let (service, _) = service();
        let err = service.update(Uuid::new_v4(), draft()).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let (service, _) = service();
        let created = service.create(draft()).await.unwrap();
        let replacement = PackageDraft {
            title: Some("Mountain Hike".into()),
            price: Some(75.0),
            ..draft()
        };
        let updated = service.update(created.id, replacement).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Mountain Hike");
        assert_eq!(updated.price, 75.0);
    }

    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let (service, _) = service();
        let created = service.create(draft()).await.unwrap();
        let removed = service.delete(created.id).await.unwrap();
        assert_eq!(removed, created);
        let err = service.delete(created.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
