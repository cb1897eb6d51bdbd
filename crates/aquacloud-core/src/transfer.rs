//! Transfer session bookkeeping for the setup screen.
//!
//! There is no transfer engine: this module only decides when the
//! "Start Transfer" action is enabled and what the session card shows.

use std::fmt;

use rand::Rng;

use crate::browser::{PaneId, TransferBrowser};
use crate::models::ProviderRegistry;

const SESSION_PREFIX: &str = "session_";
const SESSION_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const ESTIMATED_COST: &str = "$0.00";

/// Per-page-load session identifier, display only.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// `session_` followed by nine random base-36 characters.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..SESSION_SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("{}{}", SESSION_PREFIX, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The transfer being set up on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferSession {
    pub id: SessionId,
    pub browser: TransferBrowser,
}

impl TransferSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::generate(),
            browser: TransferBrowser::new(),
        }
    }

    pub fn can_start(&self) -> bool {
        can_start(&self.browser)
    }

    /// "Google Drive → Not Selected"
    pub fn providers_line(&self, providers: &ProviderRegistry) -> String {
        format!(
            "{} → {}",
            providers.display_name(self.browser.source().provider_id()),
            providers.display_name(self.browser.destination().provider_id())
        )
    }
}

impl Default for TransferSession {
    fn default() -> Self {
        Self::new()
    }
}

/// A transfer can start once the source has a selection and a destination
/// provider is chosen.
pub fn can_start(browser: &TransferBrowser) -> bool {
    browser.selected_count(PaneId::Source) > 0 && browser.destination().is_browsing()
}

/// "No files selected", "1 file selected", "3 files selected".
pub fn selection_summary(count: usize) -> String {
    match count {
        0 => "No files selected".to_string(),
        1 => "1 file selected".to_string(),
        n => format!("{} files selected", n),
    }
}

/// Cost shown on the controls card. There is no pricing yet.
pub fn estimated_cost() -> &'static str {
    ESTIMATED_COST
}
