//! Common test utilities and harness for folio-shell integration tests.

use async_trait::async_trait;
use folio_core::contact::{ContactSubmission, ContactTransport, Field};
use folio_core::{Error, Result};
use folio_shell::{FileStore, Shell};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Transport that records every submission and answers with a fixed status.
pub struct MockTransport {
    status: u16,
    /// Submissions received, in order
    pub sent: Mutex<Vec<ContactSubmission>>,
}

impl MockTransport {
    /// A transport answering `status` to every request.
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Number of requests received.
    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactTransport for MockTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<()> {
        self.sent.lock().unwrap().push(submission.clone());
        if (200..300).contains(&self.status) {
            Ok(())
        } else {
            Err(Error::transport_status(self.status, "Failed to send email."))
        }
    }
}

/// Test harness owning a temporary preference file.
pub struct TestHarness {
    /// Temporary directory holding the store
    pub dir: TempDir,
}

impl TestHarness {
    /// Creates a harness with an empty preference directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Path of the preference file.
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("prefs.json")
    }

    /// Opens a fresh shell over the preference file, as a page reload does.
    pub fn open_shell(&self) -> Shell {
        let store = FileStore::open(self.store_path()).unwrap();
        Shell::builtin(Arc::new(store)).unwrap().with_year(2025)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills the contact form of `shell` with a valid message.
pub fn fill_contact(shell: &mut Shell, email: &str) {
    shell.set_contact_field(Field::Name, "Ada");
    shell.set_contact_field(Field::Email, email);
    shell.set_contact_field(Field::Subject, "Hello");
    shell.set_contact_field(Field::Body, "<p>Nice portfolio</p>");
}
