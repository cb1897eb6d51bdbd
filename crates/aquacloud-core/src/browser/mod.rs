//! Source/destination file browsing for the transfer screen.
//!
//! One [`Pane`] implementation, instantiated once per [`PaneId`]. The panes
//! share no state; operations on one never touch the other.

mod pane;

use std::fmt;

use crate::catalog::{Catalog, ListingSource};
use crate::error::BrowseError;

pub use pane::{Crumb, ListingTicket, Pane};

/// Which side of the transfer a pane browses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaneId {
    Source,
    Destination,
}

impl PaneId {
    pub const ALL: [PaneId; 2] = [PaneId::Source, PaneId::Destination];

    pub fn label(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Destination => "Destination",
        }
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Both panes of the transfer setup screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferBrowser {
    source: Pane,
    destination: Pane,
}

impl TransferBrowser {
    pub fn new() -> Self {
        Self {
            source: Pane::new(PaneId::Source),
            destination: Pane::new(PaneId::Destination),
        }
    }

    pub fn pane(&self, id: PaneId) -> &Pane {
        match id {
            PaneId::Source => &self.source,
            PaneId::Destination => &self.destination,
        }
    }

    pub fn pane_mut(&mut self, id: PaneId) -> &mut Pane {
        match id {
            PaneId::Source => &mut self.source,
            PaneId::Destination => &mut self.destination,
        }
    }

    pub fn source(&self) -> &Pane {
        &self.source
    }

    pub fn destination(&self) -> &Pane {
        &self.destination
    }

    pub fn select_provider<L: ListingSource>(
        &mut self,
        pane: PaneId,
        provider_id: &str,
        catalog: &Catalog<L>,
    ) {
        self.pane_mut(pane).select_provider(provider_id, catalog);
    }

    pub fn navigate_into<L: ListingSource>(
        &mut self,
        pane: PaneId,
        entry_id: &str,
        catalog: &Catalog<L>,
    ) -> Result<(), BrowseError> {
        self.pane_mut(pane).navigate_into(entry_id, catalog)
    }

    pub fn navigate_to_breadcrumb<L: ListingSource>(
        &mut self,
        pane: PaneId,
        crumb: Crumb,
        catalog: &Catalog<L>,
    ) -> Result<Crumb, BrowseError> {
        self.pane_mut(pane).navigate_to_breadcrumb(crumb, catalog)
    }

    pub fn toggle_select(&mut self, pane: PaneId, entry_id: &str) -> Option<bool> {
        self.pane_mut(pane).toggle_select(entry_id)
    }

    pub fn selected_count(&self, pane: PaneId) -> usize {
        self.pane(pane).selected_count()
    }
}

impl Default for TransferBrowser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panes_are_independent() {
        let catalog = Catalog::bundled();
        let mut browser = TransferBrowser::new();

        browser.select_provider(PaneId::Source, "google-drive", &catalog);
        browser.select_provider(PaneId::Destination, "dropbox", &catalog);
        let dest_before = browser.destination().clone();

        browser.toggle_select(PaneId::Source, "5");
        browser.navigate_into(PaneId::Source, "1", &catalog).unwrap();

        assert_eq!(browser.destination(), &dest_before);
        assert_eq!(browser.source().segments(), ["Documents".to_string()]);
    }

    #[test]
    fn test_same_ids_in_both_panes() {
        let catalog = Catalog::bundled();
        let mut browser = TransferBrowser::new();
        browser.select_provider(PaneId::Source, "google-drive", &catalog);
        browser.select_provider(PaneId::Destination, "google-drive", &catalog);

        browser.toggle_select(PaneId::Destination, "6");
        assert_eq!(browser.selected_count(PaneId::Destination), 1);
        assert_eq!(browser.selected_count(PaneId::Source), 0);
    }

    #[test]
    fn test_pane_lookup() {
        let browser = TransferBrowser::default();
        for id in PaneId::ALL {
            assert_eq!(browser.pane(id).id(), id);
        }
        assert_eq!(PaneId::Destination.to_string(), "Destination");
    }
}
