//! # Resource Catalog
//!
//! Owns every [`Resource`] and the id allocator that names them. The catalog
//! only knows how to run a predicate; composing predicates (title AND author,
//! say) is up to the caller.

use crate::error::CatalogError;
use crate::ids::{IdAllocator, ResourceId};
use crate::resource::{
    is_valid_isbn, Condition, Holding, HoldingCreate, PhysicalResource, PooledResource, Resource,
    ResourceCreate,
};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

/// The collection of lendable resources, in insertion order.
#[derive(Debug, Default)]
pub struct ResourceCatalog {
    resources: Vec<Resource>,
    ids: IdAllocator<ResourceId>,
    scans: AtomicU64,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource and returns the id assigned to it.
    ///
    /// # Errors
    /// - [`CatalogError::InvalidIsbn`] if an ISBN is given and malformed
    /// - [`CatalogError::NoLicenses`] for a pooled resource with zero licenses
    pub fn add(&mut self, params: ResourceCreate) -> Result<ResourceId, CatalogError> {
        if let Some(isbn) = params.isbn.as_deref() {
            if !is_valid_isbn(isbn) {
                return Err(CatalogError::InvalidIsbn(isbn.to_string()));
            }
        }

        let holding = match &params.holding {
            HoldingCreate::Physical { location } => {
                Holding::Physical(PhysicalResource::new(location.clone()))
            }
            HoldingCreate::Pooled { licenses } => {
                let capacity = NonZeroU32::new(*licenses)
                    .ok_or_else(|| CatalogError::NoLicenses(params.title.clone()))?;
                Holding::Pooled(PooledResource::new(capacity))
            }
        };

        let id = self.ids.allocate()?;
        let resource = params.into_resource(id, holding);
        debug!(%id, title = resource.title(), kind = ?resource.media_kind(), "Resource added");
        self.resources.push(resource);
        info!(%id, size = self.resources.len(), "Catalog updated");
        Ok(id)
    }

    /// Snapshot of every resource. Mutating it does not touch the catalog.
    pub fn all(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    /// Snapshot of the resources matching `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<Resource>
    where
        P: Fn(&Resource) -> bool,
    {
        self.scans.fetch_add(1, Ordering::Relaxed);
        self.resources
            .iter()
            .filter(|resource| predicate(resource))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.id() == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: ResourceId) -> Option<&mut Resource> {
        self.resources.iter_mut().find(|resource| resource.id() == id)
    }

    /// Updates the wear state of a physical copy.
    pub fn set_condition(
        &mut self,
        id: ResourceId,
        condition: Condition,
    ) -> Result<(), CatalogError> {
        let resource = self.find_by_id_mut(id).ok_or(CatalogError::NotFound(id))?;
        match resource.holding_mut() {
            Holding::Physical(copy) => {
                copy.set_condition(condition);
                info!(%id, ?condition, "Condition updated");
                Ok(())
            }
            Holding::Pooled(_) => Err(CatalogError::NotPhysical(id)),
        }
    }

    /// Number of `filter` scans run so far.
    pub fn scans(&self) -> u64 {
        self.scans.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::HolderId;
    use crate::resource::Reservable;

    fn seeded() -> ResourceCatalog {
        let mut catalog = ResourceCatalog::new();
        catalog
            .add(ResourceCreate::physical("Design Patterns", "Gang of Four"))
            .unwrap();
        catalog
            .add(ResourceCreate::pooled("Clean Code", "Robert Martin", 3))
            .unwrap();
        catalog
            .add(ResourceCreate::physical("Clean Architecture", "Robert Martin"))
            .unwrap();
        catalog
    }

    #[test]
    fn test_ids_are_assigned_monotonically() {
        let catalog = seeded();
        let ids: Vec<_> = catalog.all().iter().map(Resource::id).collect();
        assert_eq!(ids, vec![ResourceId(1), ResourceId(2), ResourceId(3)]);
    }

    #[test]
    fn test_all_is_a_detached_snapshot() {
        let catalog = seeded();
        let mut snapshot = catalog.all();
        snapshot[0].reserve(HolderId(1));
        snapshot.clear();

        assert_eq!(catalog.len(), 3);
        let original = catalog.find_by_id(ResourceId(1)).unwrap();
        assert!(original.is_reservable());
    }

    #[test]
    fn test_filter_keeps_insertion_order_and_counts_scans() {
        let catalog = seeded();
        assert_eq!(catalog.scans(), 0);

        let found = catalog.filter(|r| r.author().contains("Martin"));

        let titles: Vec<_> = found.iter().map(Resource::title).collect();
        assert_eq!(titles, vec!["Clean Code", "Clean Architecture"]);
        assert_eq!(catalog.scans(), 1);
    }

    #[test]
    fn test_find_by_id_misses_unknown_id() {
        let catalog = seeded();
        assert!(catalog.find_by_id(ResourceId(2)).is_some());
        assert!(catalog.find_by_id(ResourceId(99)).is_none());
    }

    #[test]
    fn test_add_rejects_bad_isbn_and_empty_pool() {
        let mut catalog = ResourceCatalog::new();

        let bad_isbn = ResourceCreate::physical("A", "B").with_isbn("12345");
        assert_eq!(
            catalog.add(bad_isbn),
            Err(CatalogError::InvalidIsbn("12345".into()))
        );

        let empty_pool = ResourceCreate::pooled("Empty", "Nobody", 0);
        assert_eq!(
            catalog.add(empty_pool),
            Err(CatalogError::NoLicenses("Empty".into()))
        );

        // Rejected adds do not burn ids.
        let id = catalog
            .add(ResourceCreate::physical("A", "B").with_isbn("978-85-7522-123-4"))
            .unwrap();
        assert_eq!(id, ResourceId(1));
    }

    #[test]
    fn test_set_condition_only_for_physical_copies() {
        let mut catalog = seeded();

        catalog
            .set_condition(ResourceId(1), Condition::Damaged)
            .unwrap();
        assert!(!catalog.find_by_id(ResourceId(1)).unwrap().is_reservable());

        assert_eq!(
            catalog.set_condition(ResourceId(2), Condition::Used),
            Err(CatalogError::NotPhysical(ResourceId(2)))
        );
        assert_eq!(
            catalog.set_condition(ResourceId(42), Condition::Used),
            Err(CatalogError::NotFound(ResourceId(42)))
        );
    }
}
