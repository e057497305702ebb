//! # Reservation Service
//!
//! The orchestrator in front of the catalog, the holder registry and the
//! reservation ledger.
//!
//! ## Search
//!
//! ```text
//! search(title, author?)
//!   -> normalise terms into a SearchKey
//!   -> cache hit?  return the cached views unchanged
//!   -> cache miss: catalog.filter(title AND author) -> cache.put -> return
//! ```
//!
//! Cached views are snapshots. If the catalog changes afterwards a hit can
//! return stale availability; nothing invalidates entries automatically.
//! [`ReservationService::clear_cache`] drops them on demand.
//!
//! ## Reserve
//!
//! ```text
//! reserve(holder, resource)
//!   -> holder lookup        (HolderNotFound)
//!   -> resource lookup      (ResourceNotFound)
//!   -> holder.can_reserve() (HolderIneligible)
//!   -> resource.is_reservable() (ResourceUnavailable)
//!   -> ledger.open          (Ids, when no reservation id is left)
//!   -> resource.reserve, holder.record_reservation
//! ```
//!
//! Every refusal happens before the first mutation, and the steps after
//! `ledger.open` cannot fail, so a failed call leaves no trace. The method
//! takes `&mut self`: whoever shares a service across threads must hold one
//! exclusive lock (or one owning task) around the whole call.

use crate::cache::BoundedCache;
use crate::catalog::ResourceCatalog;
use crate::config::LendingConfig;
use crate::error::{CatalogError, CloseError, ConfigError, IdExhausted, ReserveError};
use crate::holder::{Holder, HolderRegistry, Member};
use crate::ids::{HolderId, ReservationId, ResourceId};
use crate::reservation::{Reservation, ReservationLedger, ReservationStatus, UsageSummary};
use crate::resource::{Condition, MediaKind, Reservable, Resource, ResourceCreate, ResourceView};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Normalised search terms, used as the cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    title: String,
    author: Option<String>,
}

impl SearchKey {
    /// Trims and lower-cases both terms. A blank author means "any author".
    pub fn new(title: &str, author: Option<&str>) -> Self {
        Self {
            title: title.trim().to_lowercase(),
            author: author
                .map(|author| author.trim().to_lowercase())
                .filter(|author| !author.is_empty()),
        }
    }

    /// Case-insensitive substring match on title and, if given, author.
    pub fn matches(&self, resource: &Resource) -> bool {
        let title_match = resource.title().to_lowercase().contains(&self.title);
        let author_match = self
            .author
            .as_ref()
            .is_none_or(|author| resource.author().to_lowercase().contains(author));
        title_match && author_match
    }
}

/// Counts over the catalog by media kind and availability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total: usize,
    pub physical: usize,
    pub digital: usize,
    pub available: usize,
    pub reserved: usize,
}

/// Catalog search, eligibility checks and reservation bookkeeping.
#[derive(Debug)]
pub struct ReservationService<H: Holder = Member> {
    catalog: ResourceCatalog,
    holders: HolderRegistry<H>,
    ledger: ReservationLedger,
    cache: BoundedCache<SearchKey, Vec<ResourceView>>,
    loan_period: Duration,
}

impl<H: Holder> ReservationService<H> {
    /// Creates a service with an empty catalog and registry.
    pub fn new(config: &LendingConfig) -> Result<Self, ConfigError> {
        Self::with_parts(ResourceCatalog::new(), HolderRegistry::new(), config)
    }

    /// Creates a service around an already populated catalog and registry.
    pub fn with_parts(
        catalog: ResourceCatalog,
        holders: HolderRegistry<H>,
        config: &LendingConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            catalog,
            holders,
            ledger: ReservationLedger::new(),
            cache: BoundedCache::new(config.cache_capacity)?,
            loan_period: config.loan_period(),
        })
    }

    /// Finds resources whose title (and optionally author) contains the
    /// query, ignoring case.
    pub fn search(&mut self, title: &str, author: Option<&str>) -> Vec<ResourceView> {
        let key = SearchKey::new(title, author);

        if let Some(cached) = self.cache.get(&key) {
            debug!(?key, hits = cached.len(), "Search served from cache");
            return cached.clone();
        }

        let views: Vec<ResourceView> = self
            .catalog
            .filter(|resource| key.matches(resource))
            .iter()
            .map(Resource::view)
            .collect();
        debug!(?key, hits = views.len(), "Search evaluated against catalog");

        if let Some(evicted) = self.cache.put(key, views.clone()) {
            debug!(?evicted, "Search cache evicted oldest entry");
        }
        views
    }

    /// Reserves one unit of `resource_id` for `holder_id`.
    ///
    /// # Errors
    /// One [`ReserveError`] variant per refusal reason, checked in this order:
    /// holder lookup, resource lookup, holder eligibility, availability.
    /// [`ReserveError::Ids`] if the ledger has run out of reservation ids.
    pub fn reserve(
        &mut self,
        holder_id: HolderId,
        resource_id: ResourceId,
    ) -> Result<Reservation, ReserveError> {
        let holder = self
            .holders
            .find_mut(holder_id)
            .ok_or(ReserveError::HolderNotFound(holder_id))?;
        let resource = self
            .catalog
            .find_by_id_mut(resource_id)
            .ok_or(ReserveError::ResourceNotFound(resource_id))?;

        if !holder.can_reserve() {
            warn!(%holder_id, active = holder.active_reservations(), "Holder not eligible");
            return Err(ReserveError::HolderIneligible(holder_id));
        }
        if !resource.is_reservable() {
            warn!(%resource_id, detail = %resource.describe_reservation(), "Resource unavailable");
            return Err(ReserveError::ResourceUnavailable(resource_id));
        }

        let reservation = self
            .ledger
            .open(holder_id, resource_id, self.loan_period)?
            .clone();
        resource.reserve(holder_id);
        holder.record_reservation();

        info!(
            reservation_id = %reservation.id,
            %holder_id,
            %resource_id,
            expires_at = %reservation.expires_at,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Closes an active reservation and releases one unit of its resource.
    ///
    /// The release is not matched against the holder: on a pooled resource it
    /// simply frees one license.
    pub fn close(&mut self, reservation_id: ReservationId) -> Result<Reservation, CloseError> {
        let reservation = self
            .ledger
            .find_mut(reservation_id)
            .ok_or(CloseError::ReservationNotFound(reservation_id))?;
        if !reservation.is_active() {
            return Err(CloseError::AlreadyClosed(reservation_id));
        }

        reservation.status = ReservationStatus::Closed;
        if let Some(resource) = self.catalog.find_by_id_mut(reservation.resource_id) {
            resource.release();
        }
        if let Some(holder) = self.holders.find_mut(reservation.holder_id) {
            holder.record_release();
        }

        info!(%reservation_id, resource_id = %reservation.resource_id, "Reservation closed");
        Ok(reservation.clone())
    }

    pub fn add_resource(&mut self, params: ResourceCreate) -> Result<ResourceId, CatalogError> {
        self.catalog.add(params)
    }

    pub fn set_condition(
        &mut self,
        id: ResourceId,
        condition: Condition,
    ) -> Result<(), CatalogError> {
        self.catalog.set_condition(id, condition)
    }

    pub fn register_holder(&mut self, params: H::Create) -> Result<HolderId, IdExhausted> {
        self.holders.register(params)
    }

    pub fn resource(&self, id: ResourceId) -> Option<ResourceView> {
        self.catalog.find_by_id(id).map(Resource::view)
    }

    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.ledger.find(id)
    }

    pub fn reservations(&self) -> Vec<Reservation> {
        self.ledger.all()
    }

    pub fn usage_summary(&self) -> UsageSummary {
        self.ledger.usage()
    }

    pub fn inventory_summary(&self) -> InventorySummary {
        self.catalog
            .all()
            .iter()
            .fold(InventorySummary::default(), |mut summary, resource| {
                summary.total += 1;
                match resource.media_kind() {
                    MediaKind::Physical => summary.physical += 1,
                    MediaKind::Digital => summary.digital += 1,
                }
                if resource.is_reservable() {
                    summary.available += 1;
                } else {
                    summary.reserved += 1;
                }
                summary
            })
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Drops every cached search result.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        info!("Search cache cleared");
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut ResourceCatalog {
        &mut self.catalog
    }

    pub fn holders(&self) -> &HolderRegistry<H> {
        &self.holders
    }

    pub fn holders_mut(&mut self) -> &mut HolderRegistry<H> {
        &mut self.holders
    }
}
