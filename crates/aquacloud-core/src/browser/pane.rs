//! Single file-browser pane.
//!
//! States are `NoProvider` (no provider id) and `Browsing(path)`. Every
//! transition replaces the listing wholesale, which also resets selection.
//!
//! Listing changes go through a [`ListingTicket`]: a navigation first issues
//! a ticket, and the listing is only applied if that ticket is still the
//! newest one for the pane. Synchronous sources resolve immediately; an
//! asynchronous source can hold the ticket while its request is in flight,
//! and a newer navigation makes the stale response a no-op.

use crate::catalog::{Catalog, ListingSource};
use crate::error::BrowseError;
use crate::log;
use crate::models::{DirectoryKey, Entry};

use super::PaneId;

/// Breadcrumb target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crumb {
    /// Provider root (breadcrumb index -1)
    Root,
    /// Truncate the path to its first `i + 1` segments
    Segment(usize),
}

impl Crumb {
    /// Convert a UI breadcrumb index. `-1` means root; other negative
    /// indices are clamped to root with a warning.
    pub fn from_index(index: isize) -> Self {
        match usize::try_from(index) {
            Ok(i) => Self::Segment(i),
            Err(_) => {
                if index != -1 {
                    log::warn(&format!(
                        "breadcrumb index {} out of range, clamped to Root",
                        index
                    ));
                }
                Self::Root
            }
        }
    }
}

/// Claim on the next listing for a pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingTicket {
    pane: PaneId,
    generation: u64,
    provider_id: Option<String>,
    segments: Vec<String>,
}

impl ListingTicket {
    pub fn pane(&self) -> PaneId {
        self.pane
    }

    /// Key to fetch, or `None` when the pane is being cleared.
    pub fn key(&self) -> Option<DirectoryKey> {
        self.provider_id
            .as_ref()
            .map(|id| DirectoryKey::new(id.clone(), self.segments.clone()))
    }
}

/// Browsing state of one pane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pane {
    id: PaneId,
    provider_id: Option<String>,
    segments: Vec<String>,
    entries: Vec<Entry>,
    generation: u64,
}

impl Pane {
    pub fn new(id: PaneId) -> Self {
        Self {
            id,
            provider_id: None,
            segments: Vec::new(),
            entries: Vec::new(),
            generation: 0,
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn provider_id(&self) -> Option<&str> {
        self.provider_id.as_deref()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_browsing(&self) -> bool {
        self.provider_id.is_some()
    }

    /// Key of the listing currently shown.
    pub fn current_key(&self) -> Option<DirectoryKey> {
        self.provider_id
            .as_ref()
            .map(|id| DirectoryKey::new(id.clone(), self.segments.clone()))
    }

    // ------------------------------------------------------------------------
    // Ticketed listing updates
    // ------------------------------------------------------------------------

    /// Issue a ticket for `(provider_id, segments)`, superseding older ones.
    pub fn request(&mut self, provider_id: Option<String>, segments: Vec<String>) -> ListingTicket {
        self.generation += 1;
        ListingTicket {
            pane: self.id,
            generation: self.generation,
            provider_id,
            segments,
        }
    }

    /// Apply a resolved listing. Returns `false` for a stale ticket.
    pub fn resolve(&mut self, ticket: ListingTicket, entries: Vec<Entry>) -> bool {
        if ticket.pane != self.id || ticket.generation != self.generation {
            return false;
        }

        self.entries = if ticket.provider_id.is_some() {
            entries
                .into_iter()
                .map(|mut e| {
                    e.selected = false;
                    e
                })
                .collect()
        } else {
            Vec::new()
        };
        self.provider_id = ticket.provider_id;
        self.segments = ticket.segments;
        true
    }

    fn load<L: ListingSource>(
        &mut self,
        provider_id: Option<String>,
        segments: Vec<String>,
        catalog: &Catalog<L>,
    ) {
        let ticket = self.request(provider_id, segments);
        let entries = ticket
            .key()
            .map(|key| catalog.listing(&key))
            .unwrap_or_default();
        self.resolve(ticket, entries);
    }

    // ------------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------------

    /// Switch to `provider_id` and show its root listing.
    ///
    /// Unknown or disconnected providers are selected but show nothing.
    pub fn select_provider<L: ListingSource>(&mut self, provider_id: &str, catalog: &Catalog<L>) {
        self.load(Some(provider_id.to_string()), Vec::new(), catalog);
    }

    /// Return to the `NoProvider` state.
    pub fn clear_provider(&mut self) {
        let ticket = self.request(None, Vec::new());
        self.resolve(ticket, Vec::new());
    }

    /// Descend into the folder with `entry_id` from the current listing.
    pub fn navigate_into<L: ListingSource>(
        &mut self,
        entry_id: &str,
        catalog: &Catalog<L>,
    ) -> Result<(), BrowseError> {
        let provider_id = self.provider_id.clone().ok_or(BrowseError::NoProvider)?;
        let entry = self
            .entries
            .iter()
            .find(|e| e.id == entry_id)
            .ok_or_else(|| BrowseError::EntryNotFound(entry_id.to_string()))?;
        if !entry.is_folder() {
            return Err(BrowseError::NotAFolder(entry.name.clone()));
        }

        let mut segments = self.segments.clone();
        segments.push(entry.name.clone());
        self.load(Some(provider_id), segments, catalog);
        Ok(())
    }

    /// Jump to an ancestor via the breadcrumb bar.
    ///
    /// An out-of-range segment index is clamped to the deepest segment (or
    /// root for an empty path). Returns the crumb actually applied.
    pub fn navigate_to_breadcrumb<L: ListingSource>(
        &mut self,
        crumb: Crumb,
        catalog: &Catalog<L>,
    ) -> Result<Crumb, BrowseError> {
        let provider_id = self.provider_id.clone().ok_or(BrowseError::NoProvider)?;

        let applied = match crumb {
            Crumb::Segment(i) if i >= self.segments.len() => {
                let clamped = self
                    .segments
                    .len()
                    .checked_sub(1)
                    .map_or(Crumb::Root, Crumb::Segment);
                log::warn(&format!(
                    "{} pane: breadcrumb index {} out of range (depth {}), clamped to {:?}",
                    self.id,
                    i,
                    self.segments.len(),
                    clamped
                ));
                clamped
            }
            other => other,
        };

        let segments = match applied {
            Crumb::Root => Vec::new(),
            Crumb::Segment(i) => self.segments[..=i].to_vec(),
        };
        self.load(Some(provider_id), segments, catalog);
        Ok(applied)
    }

    /// Breadcrumb targets for the current path, root excluded.
    pub fn breadcrumbs(&self) -> Vec<(Crumb, String)> {
        self.segments
            .iter()
            .enumerate()
            .map(|(i, name)| (Crumb::Segment(i), name.clone()))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Flip the selection flag of `entry_id`.
    ///
    /// Returns the new flag, or `None` if no such entry is listed.
    pub fn toggle_select(&mut self, entry_id: &str) -> Option<bool> {
        let entry = self.entries.iter_mut().find(|e| e.id == entry_id)?;
        entry.selected = !entry.selected;
        Some(entry.selected)
    }

    pub fn selected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.selected).count()
    }

    pub fn selected_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.selected)
    }

    /// Entries whose name contains `query`, case-insensitively.
    ///
    /// View-only: neither the listing nor selection is modified.
    pub fn visible(&self, query: &str) -> Vec<&Entry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.entries.iter().collect();
        }
        self.entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Provider, ProviderRegistry};
    use crate::catalog::StaticListings;

    fn catalog() -> Catalog {
        Catalog::bundled()
    }

    fn id_of(pane: &Pane, name: &str) -> String {
        pane.entries()
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.id.clone())
            .unwrap()
    }

    fn deep_catalog() -> Catalog {
        let mut source = StaticListings::default();
        source.insert(DirectoryKey::root("p"), vec![Entry::folder("a", "A")]);
        source.insert(
            DirectoryKey::new("p", vec!["A".into()]),
            vec![Entry::folder("b", "B"), Entry::file("f", "f.txt", "1 KB", "2024-01-01")],
        );
        source.insert(
            DirectoryKey::new("p", vec!["A".into(), "B".into()]),
            vec![Entry::folder("c", "C")],
        );
        let providers = ProviderRegistry::from_providers(vec![Provider::new("p", "P", true)]);
        Catalog::new(providers, source)
    }

    fn descend(pane: &mut Pane, catalog: &Catalog, names: &[&str]) {
        for name in names {
            let id = id_of(pane, name);
            pane.navigate_into(&id, catalog).unwrap();
        }
    }

    #[test]
    fn test_new_pane_has_no_provider() {
        let pane = Pane::new(PaneId::Source);
        assert!(!pane.is_browsing());
        assert!(pane.entries().is_empty());
        assert!(pane.segments().is_empty());
        assert_eq!(pane.current_key(), None);
    }

    #[test]
    fn test_select_connected_provider() {
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog());
        assert_eq!(pane.provider_id(), Some("google-drive"));
        assert_eq!(pane.entries().len(), 6);
        assert!(pane.segments().is_empty());
    }

    #[test]
    fn test_select_disconnected_provider_is_empty() {
        let catalog = catalog();
        for provider in catalog.providers().all().filter(|p| !p.connected) {
            let mut pane = Pane::new(PaneId::Destination);
            pane.select_provider(&provider.id, &catalog);
            assert_eq!(pane.provider_id(), Some(provider.id.as_str()));
            assert!(pane.entries().is_empty());
        }
    }

    #[test]
    fn test_select_unknown_provider() {
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("nonexistent", &catalog());
        assert_eq!(pane.provider_id(), Some("nonexistent"));
        assert!(pane.entries().is_empty());
        assert!(pane.is_browsing());
    }

    #[test]
    fn test_select_provider_resets_path() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog);
        descend(&mut pane, &catalog, &["Documents"]);
        pane.select_provider("dropbox", &catalog);
        assert!(pane.segments().is_empty());
        assert_eq!(pane.entries().len(), 6);
    }

    #[test]
    fn test_navigate_into_folder() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog);
        descend(&mut pane, &catalog, &["Documents"]);
        assert_eq!(pane.segments(), ["Documents".to_string()]);
        assert_eq!(pane.entries().len(), 5);
    }

    #[test]
    fn test_navigate_into_dead_end_is_empty() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog);
        descend(&mut pane, &catalog, &["Documents", "Contracts"]);
        assert_eq!(pane.segments().len(), 2);
        assert!(pane.entries().is_empty());
    }

    #[test]
    fn test_navigate_into_rejections_leave_state() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        assert_eq!(
            pane.navigate_into("1", &catalog),
            Err(BrowseError::NoProvider)
        );

        pane.select_provider("google-drive", &catalog);
        let before = pane.clone();
        let file_id = id_of(&pane, "Backup.zip");
        assert_eq!(
            pane.navigate_into(&file_id, &catalog),
            Err(BrowseError::NotAFolder("Backup.zip".to_string()))
        );
        assert_eq!(
            pane.navigate_into("999", &catalog),
            Err(BrowseError::EntryNotFound("999".to_string()))
        );
        assert_eq!(pane, before);
    }

    #[test]
    fn test_breadcrumb_truncates() {
        let catalog = deep_catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("p", &catalog);
        descend(&mut pane, &catalog, &["A", "B", "C"]);
        assert_eq!(pane.segments().len(), 3);

        for i in (0..3).rev() {
            let before = pane.segments().to_vec();
            let applied = pane.navigate_to_breadcrumb(Crumb::Segment(i), &catalog).unwrap();
            assert_eq!(applied, Crumb::Segment(i));
            assert_eq!(pane.segments(), &before[..=i]);
        }
        assert_eq!(pane.entries().len(), 2);
    }

    #[test]
    fn test_breadcrumb_root() {
        let catalog = deep_catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("p", &catalog);
        descend(&mut pane, &catalog, &["A", "B"]);
        pane.navigate_to_breadcrumb(Crumb::from_index(-1), &catalog)
            .unwrap();
        assert!(pane.segments().is_empty());
        assert_eq!(pane.entries(), [Entry::folder("a", "A")]);
    }

    #[test]
    fn test_breadcrumb_out_of_range_clamps() {
        let catalog = deep_catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("p", &catalog);
        descend(&mut pane, &catalog, &["A", "B"]);

        let applied = pane.navigate_to_breadcrumb(Crumb::Segment(7), &catalog).unwrap();
        assert_eq!(applied, Crumb::Segment(1));
        assert_eq!(pane.segments(), ["A".to_string(), "B".to_string()]);
        assert_eq!(pane.entries(), [Entry::folder("c", "C")]);

        pane.navigate_to_breadcrumb(Crumb::Root, &catalog).unwrap();
        let applied = pane.navigate_to_breadcrumb(Crumb::Segment(0), &catalog).unwrap();
        assert_eq!(applied, Crumb::Root);
        assert!(pane.segments().is_empty());
    }

    #[test]
    fn test_negative_breadcrumb_index_goes_to_root() {
        let catalog = deep_catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("p", &catalog);
        descend(&mut pane, &catalog, &["A", "B"]);

        let applied = pane
            .navigate_to_breadcrumb(Crumb::from_index(-5), &catalog)
            .unwrap();
        assert_eq!(applied, Crumb::Root);
        assert!(pane.segments().is_empty());
        assert_eq!(pane.entries(), [Entry::folder("a", "A")]);
    }

    #[test]
    fn test_breadcrumb_without_provider() {
        let mut pane = Pane::new(PaneId::Source);
        assert_eq!(
            pane.navigate_to_breadcrumb(Crumb::Root, &catalog()),
            Err(BrowseError::NoProvider)
        );
    }

    #[test]
    fn test_crumb_from_index() {
        assert_eq!(Crumb::from_index(-1), Crumb::Root);
        assert_eq!(Crumb::from_index(-5), Crumb::Root);
        assert_eq!(Crumb::from_index(isize::MIN), Crumb::Root);
        assert_eq!(Crumb::from_index(0), Crumb::Segment(0));
        assert_eq!(Crumb::from_index(3), Crumb::Segment(3));
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog);
        let before = pane.entries().to_vec();
        let id = id_of(&pane, "Backup.zip");

        assert_eq!(pane.toggle_select(&id), Some(true));
        assert_eq!(pane.selected_count(), 1);
        assert!(
            pane.entries()
                .iter()
                .filter(|e| e.id != id)
                .all(|e| !e.selected)
        );

        assert_eq!(pane.toggle_select(&id), Some(false));
        assert_eq!(pane.entries(), before.as_slice());
        assert_eq!(pane.toggle_select("missing"), None);
    }

    #[test]
    fn test_navigation_resets_selection() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog);
        for entry in pane.entries().to_vec() {
            pane.toggle_select(&entry.id);
        }
        assert_eq!(pane.selected_count(), 6);

        let docs = id_of(&pane, "Documents");
        pane.navigate_into(&docs, &catalog).unwrap();
        assert_eq!(pane.selected_count(), 0);

        let id = id_of(&pane, "Meeting_Notes.docx");
        pane.toggle_select(&id);
        pane.navigate_to_breadcrumb(Crumb::Segment(0), &catalog)
            .unwrap();
        assert_eq!(pane.selected_count(), 0);

        pane.toggle_select(&id);
        pane.select_provider("google-drive", &catalog);
        assert_eq!(pane.selected_count(), 0);
    }

    #[test]
    fn test_selected_count() {
        let mut pane = Pane::new(PaneId::Source);
        let ticket = pane.request(Some("p".into()), Vec::new());
        pane.resolve(
            ticket,
            vec![
                Entry::folder("1", "a"),
                Entry::folder("2", "b"),
                Entry::folder("3", "c"),
            ],
        );
        pane.toggle_select("1");
        pane.toggle_select("3");
        assert_eq!(pane.selected_count(), 2);
        let ids: Vec<_> = pane.selected_entries().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut pane = Pane::new(PaneId::Source);
        let stale = pane.request(Some("p".into()), Vec::new());
        let fresh = pane.request(Some("q".into()), Vec::new());

        assert!(pane.resolve(fresh, vec![Entry::folder("q1", "Q")]));
        assert!(!pane.resolve(stale, vec![Entry::folder("p1", "P")]));
        assert_eq!(pane.provider_id(), Some("q"));
        assert_eq!(pane.entries(), [Entry::folder("q1", "Q")]);
    }

    #[test]
    fn test_ticket_for_other_pane_is_ignored() {
        let mut source = Pane::new(PaneId::Source);
        let mut dest = Pane::new(PaneId::Destination);
        let ticket = source.request(Some("p".into()), Vec::new());
        dest.request(Some("p".into()), Vec::new());
        assert!(!dest.resolve(ticket, vec![Entry::folder("1", "x")]));
        assert!(dest.entries().is_empty());
    }

    #[test]
    fn test_pending_ticket_keeps_previous_selection() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog);
        let id = id_of(&pane, "Backup.zip");
        pane.toggle_select(&id);

        let ticket = pane.request(Some("dropbox".into()), Vec::new());
        assert_eq!(ticket.key(), Some(DirectoryKey::root("dropbox")));
        assert_eq!(pane.selected_count(), 1);

        let entries = catalog.listing(&ticket.key().unwrap());
        pane.resolve(ticket, entries);
        assert_eq!(pane.selected_count(), 0);
        assert_eq!(pane.provider_id(), Some("dropbox"));
    }

    #[test]
    fn test_clear_provider() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog);
        pane.clear_provider();
        assert!(!pane.is_browsing());
        assert!(pane.entries().is_empty());
    }

    #[test]
    fn test_visible_filter() {
        let catalog = catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("google-drive", &catalog);
        let id = id_of(&pane, "Photos");
        pane.toggle_select(&id);

        let hits: Vec<_> = pane.visible("  PHO ").iter().map(|e| e.name.clone()).collect();
        assert_eq!(hits, ["Photos"]);
        assert_eq!(pane.visible("").len(), 6);
        assert!(pane.visible("zzz").is_empty());
        assert_eq!(pane.entries().len(), 6);
        assert_eq!(pane.selected_count(), 1);
    }

    #[test]
    fn test_breadcrumbs() {
        let catalog = deep_catalog();
        let mut pane = Pane::new(PaneId::Source);
        pane.select_provider("p", &catalog);
        descend(&mut pane, &catalog, &["A", "B"]);
        assert_eq!(
            pane.breadcrumbs(),
            vec![
                (Crumb::Segment(0), "A".to_string()),
                (Crumb::Segment(1), "B".to_string())
            ]
        );
    }
}
