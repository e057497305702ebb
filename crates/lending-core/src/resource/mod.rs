//! # Resources
//!
//! Lendable catalog items and the two allocation policies behind them.
//!
//! ## Structure
//!
//! - [`reservable`] - the [`Reservable`] capability and the [`Lease`] record
//! - [`physical`] - [`PhysicalResource`], one copy, exclusive lock
//! - [`pooled`] - [`PooledResource`], a counted license pool
//!
//! A [`Resource`] pairs immutable metadata (title, author, ISBN, category) with
//! a [`Holding`]: the policy chosen when the resource is created. The policy is
//! never re-tagged afterwards.

pub mod physical;
pub mod pooled;
pub mod reservable;

pub use physical::*;
pub use pooled::*;
pub use reservable::*;

use crate::ids::{HolderId, ResourceId};
use serde::{Deserialize, Serialize};

/// Allocation policy plus its live state.
#[derive(Debug, Clone, PartialEq)]
pub enum Holding {
    /// One copy, one holder at a time.
    Physical(PhysicalResource),
    /// A bounded number of concurrent licenses.
    Pooled(PooledResource),
}

impl Reservable for Holding {
    fn is_reservable(&self) -> bool {
        match self {
            Holding::Physical(copy) => copy.is_reservable(),
            Holding::Pooled(licenses) => licenses.is_reservable(),
        }
    }

    fn reserve(&mut self, holder: HolderId) {
        match self {
            Holding::Physical(copy) => copy.reserve(holder),
            Holding::Pooled(licenses) => licenses.reserve(holder),
        }
    }

    fn release(&mut self) {
        match self {
            Holding::Physical(copy) => copy.release(),
            Holding::Pooled(licenses) => licenses.release(),
        }
    }

    fn describe_reservation(&self) -> String {
        match self {
            Holding::Physical(copy) => copy.describe_reservation(),
            Holding::Pooled(licenses) => licenses.describe_reservation(),
        }
    }
}

/// Media tag exposed to reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Physical,
    Digital,
}

/// A catalogued item.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    id: ResourceId,
    title: String,
    author: String,
    isbn: Option<String>,
    category: Option<String>,
    holding: Holding,
}

impl Resource {
    pub fn id(&self) -> ResourceId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> Option<&str> {
        self.isbn.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn holding(&self) -> &Holding {
        &self.holding
    }

    pub(crate) fn holding_mut(&mut self) -> &mut Holding {
        &mut self.holding
    }

    pub fn media_kind(&self) -> MediaKind {
        match self.holding {
            Holding::Physical(_) => MediaKind::Physical,
            Holding::Pooled(_) => MediaKind::Digital,
        }
    }

    /// Read-only projection handed to reporting and search callers.
    pub fn view(&self) -> ResourceView {
        ResourceView {
            id: self.id,
            title: self.title.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            media_kind: self.media_kind(),
            available: self.is_reservable(),
            reservation_detail: self.describe_reservation(),
        }
    }
}

impl Reservable for Resource {
    fn is_reservable(&self) -> bool {
        self.holding.is_reservable()
    }

    fn reserve(&mut self, holder: HolderId) {
        self.holding.reserve(holder)
    }

    fn release(&mut self) {
        self.holding.release()
    }

    fn describe_reservation(&self) -> String {
        self.holding.describe_reservation()
    }
}

/// Snapshot of a resource as seen by callers outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceView {
    pub id: ResourceId,
    pub title: String,
    pub author: String,
    pub category: Option<String>,
    pub media_kind: MediaKind,
    pub available: bool,
    pub reservation_detail: String,
}

/// Policy requested when a resource is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoldingCreate {
    Physical { location: Option<String> },
    Pooled { licenses: u32 },
}

/// Payload for adding a resource to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCreate {
    pub title: String,
    pub author: String,
    pub isbn: Option<String>,
    pub category: Option<String>,
    pub holding: HoldingCreate,
}

impl ResourceCreate {
    /// A single physical copy with no shelf location.
    pub fn physical(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: None,
            category: None,
            holding: HoldingCreate::Physical { location: None },
        }
    }

    /// A digital title lent through `licenses` concurrent licenses.
    pub fn pooled(title: impl Into<String>, author: impl Into<String>, licenses: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: None,
            category: None,
            holding: HoldingCreate::Pooled { licenses },
        }
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the shelf location. Ignored for pooled resources.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        if let HoldingCreate::Physical { location: slot } = &mut self.holding {
            *slot = Some(location.into());
        }
        self
    }

    pub(crate) fn into_resource(self, id: ResourceId, holding: Holding) -> Resource {
        Resource {
            id,
            title: self.title,
            author: self.author,
            isbn: self.isbn,
            category: self.category,
            holding,
        }
    }
}

/// Checks the `ddd-dd-dddd-ddd-d` ISBN layout.
pub fn is_valid_isbn(isbn: &str) -> bool {
    const GROUPS: [usize; 5] = [3, 2, 4, 3, 1];

    let parts: Vec<&str> = isbn.split('-').collect();
    parts.len() == GROUPS.len()
        && parts
            .iter()
            .zip(GROUPS)
            .all(|(part, width)| part.len() == width && part.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroU32;

    #[test]
    fn test_isbn_layout() {
        assert!(is_valid_isbn("978-85-7522-123-4"));
        assert!(!is_valid_isbn("978-85-7522-123"));
        assert!(!is_valid_isbn("978-85-752A-123-4"));
        assert!(!is_valid_isbn("9788575221234"));
        assert!(!is_valid_isbn("978-850-752-123-4"));
    }

    #[test]
    fn test_view_reflects_policy_and_state() {
        let licenses = PooledResource::new(NonZeroU32::new(1).unwrap());
        let mut resource = ResourceCreate::pooled("Clean Code", "Robert Martin", 1)
            .with_category("Programming")
            .into_resource(ResourceId(7), Holding::Pooled(licenses));

        let view = resource.view();
        assert_eq!(view.id, ResourceId(7));
        assert_eq!(view.media_kind, MediaKind::Digital);
        assert_eq!(view.category.as_deref(), Some("Programming"));
        assert!(view.available);

        resource.reserve(HolderId(1));
        assert!(!resource.view().available);
    }

    #[test]
    fn test_location_only_applies_to_physical() {
        let physical = ResourceCreate::physical("A", "B").with_location("Shelf A1");
        assert_eq!(
            physical.holding,
            HoldingCreate::Physical {
                location: Some("Shelf A1".into())
            }
        );

        let pooled = ResourceCreate::pooled("A", "B", 2).with_location("Shelf A1");
        assert_eq!(pooled.holding, HoldingCreate::Pooled { licenses: 2 });
    }
}
