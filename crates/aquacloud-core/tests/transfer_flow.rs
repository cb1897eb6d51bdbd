//! End-to-end browsing over the bundled mock catalog.

use aquacloud_core::transfer::{can_start, selection_summary};
use aquacloud_core::{Catalog, Crumb, Entry, PaneId, TransferBrowser};

fn find<'a>(entries: &'a [Entry], name: &str) -> &'a Entry {
    entries
        .iter()
        .find(|e| e.name == name)
        .unwrap_or_else(|| panic!("{} not listed", name))
}

#[test]
fn browse_documents_and_back() {
    let catalog = Catalog::bundled();
    let mut browser = TransferBrowser::new();

    browser.select_provider(PaneId::Source, "google-drive", &catalog);
    let root = browser.source().entries().to_vec();
    assert_eq!(root.len(), 6);
    let documents = find(&root, "Documents");
    assert!(documents.is_folder());

    browser
        .navigate_into(PaneId::Source, &documents.id, &catalog)
        .unwrap();
    assert_eq!(browser.source().segments(), ["Documents".to_string()]);
    assert_eq!(browser.source().entries().len(), 5);
    find(browser.source().entries(), "Meeting_Notes.docx");

    browser
        .navigate_to_breadcrumb(PaneId::Source, Crumb::from_index(-1), &catalog)
        .unwrap();
    assert!(browser.source().segments().is_empty());
    assert_eq!(browser.source().entries(), root.as_slice());
}

#[test]
fn pick_files_and_destination() {
    let catalog = Catalog::bundled();
    let mut browser = TransferBrowser::new();

    browser.select_provider(PaneId::Source, "google-drive", &catalog);
    let photos = find(browser.source().entries(), "Photos").id.clone();
    browser.navigate_into(PaneId::Source, &photos, &catalog).unwrap();

    let files: Vec<String> = browser
        .source()
        .entries()
        .iter()
        .filter(|e| !e.is_folder())
        .map(|e| e.id.clone())
        .collect();
    for id in &files {
        browser.toggle_select(PaneId::Source, id);
    }
    assert_eq!(
        selection_summary(browser.selected_count(PaneId::Source)),
        "2 files selected"
    );
    assert!(!can_start(&browser));

    browser.select_provider(PaneId::Destination, "samsung-cloud", &catalog);
    assert!(can_start(&browser));

    // Descending in the destination leaves the source selection alone.
    let work = find(browser.destination().entries(), "Work_Files").id.clone();
    browser
        .navigate_into(PaneId::Destination, &work, &catalog)
        .unwrap();
    assert!(browser.destination().entries().is_empty());
    assert_eq!(browser.selected_count(PaneId::Source), 2);
}

#[test]
fn disconnected_and_unknown_providers_show_nothing() {
    let catalog = Catalog::bundled();
    let mut browser = TransferBrowser::new();

    for id in ["onedrive", "icloud", "nonexistent"] {
        browser.select_provider(PaneId::Destination, id, &catalog);
        assert_eq!(browser.destination().provider_id(), Some(id));
        assert!(browser.destination().entries().is_empty());
    }
}
