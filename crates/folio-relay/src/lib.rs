//! # folio-relay
//!
//! Mail relay behind the portfolio contact form.
//!
//! The relay accepts one JSON endpoint, `POST /api/contact`, checks that
//! every field is present, composes an HTML mail and hands it to a
//! [`Mailer`]. It keeps no state between requests and never retries a
//! delivery.
//!
//! ```text
//! POST /api/contact ──▶ presence check ──▶ MailMessage::compose ──▶ Mailer::send
//!        │ 400                                                        │ 500
//!        ▼                                                            ▼
//!  {"error": "All fields are required."}          {"error": "Failed to send email."}
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod mailer;
pub mod routes;
pub mod server;

pub use config::RelayConfig;
pub use error::{Error, Result};
pub use mailer::{HttpMailer, MailMessage, Mailbox, Mailer};
pub use server::Server;
