//! # folio-client
//!
//! HTTP side of the Folio front end:
//! - [`ContactClient`] posts contact submissions to the relay
//! - [`MediaUploader`] uploads editor images to the media CDN
//! - [`ClientConfig`] reads endpoints from the environment

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod contact;
pub mod error;
pub mod media;

pub use config::{ClientConfig, MediaConfig};
pub use contact::ContactClient;
pub use error::{Error, Result};
pub use media::MediaUploader;
