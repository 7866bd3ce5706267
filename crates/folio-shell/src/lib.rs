#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Folio Shell
//!
//! A headless rendition of the portfolio site. The shell owns the persisted
//! persona and theme toggles, routes paths to pages, fans viewport events
//! out to mounted reveal sections and drives the contact form. Views are
//! plain data that a renderer turns into markup.
//!
//! # Example
//!
//! ```rust
//! use folio_shell::{MemoryStore, Shell};
//! use std::sync::Arc;
//!
//! let mut shell = Shell::builtin(Arc::new(MemoryStore::new())).unwrap();
//! shell.navigate("/projects");
//! assert_eq!(shell.frame().page.title(), "Projects");
//! ```

pub mod contact;
pub mod events;
pub mod section;
pub mod shell;
pub mod state;
pub mod storage;
pub mod view;

mod registry;

// Re-export core types
pub use folio_core::{Error, Result};

pub use contact::{ContactForm, SubmitStatus};
pub use registry::Registration;
pub use events::{EventHub, EventKind, ListenerGuard, ViewportEvent, ViewportMetrics};
pub use section::{ContainerRef, RevealSection};
pub use shell::{Frame, Shell};
pub use state::{AppState, StateChange, Subscription};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use view::{ChromeView, PageView};
