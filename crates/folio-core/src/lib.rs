#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Folio Core Library
//!
//! Domain types of the Folio portfolio site: the persona and theme toggles,
//! the static content catalogue, client-side routes, the scroll reveal
//! sequencer, decorative cursor motion and contact form validation.
//!
//! Everything here is synchronous and free of I/O apart from the
//! [`ContactTransport`] seam, which the client crate implements over HTTP.

pub mod contact;
pub mod content;
pub mod error;
pub mod motion;
pub mod persona;
pub mod reveal;
pub mod route;

mod proptests;

// Re-exports for convenience
pub use contact::{ContactPayload, ContactSubmission, ContactTransport, Field};
pub use content::{Catalog, PersonaProfile, ProjectItem, ResumeLinks, Skill, SocialLink};
pub use error::{Error, Result};
pub use motion::{CursorFollow, CursorGlow, FollowPose, Point};
pub use persona::{Accent, Persona, Theme};
pub use reveal::{
    DeviceClass, Phase, Rect, RevealConfig, RevealSequencer, RevealState, RevealVariant, Viewport,
};
pub use route::{NAV_LINKS, NavLink, Route};
