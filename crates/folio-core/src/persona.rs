//! Persona and theme selections.
//!
//! Both are small closed sum types with a lenient string form used for
//! client-side persistence. Parsing never fails: unknown or absent values
//! fall back to the default variant, so a stale or hand-edited storage entry
//! can never stop the shell from starting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key holding the persona selection.
pub const PERSONA_KEY: &str = "activeRole";

/// Storage key holding the theme selection.
pub const THEME_KEY: &str = "theme";

// ============================================================================
// Persona
// ============================================================================

/// The two mutually exclusive content modes the site presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub enum Persona {
    /// Software developer view.
    #[default]
    Programmer,
    /// 3D artist view.
    #[serde(rename = "3D Artist")]
    Artist,
}

impl Persona {
    /// Both personas, in toggle order.
    pub fn all() -> [Persona; 2] {
        [Persona::Programmer, Persona::Artist]
    }

    /// Parse a persisted value. Anything other than `"3D Artist"` is
    /// [`Persona::Programmer`].
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("3D Artist") => Persona::Artist,
            _ => Persona::Programmer,
        }
    }

    /// The value written to client storage.
    pub fn storage_value(self) -> &'static str {
        self.label()
    }

    /// Human-readable label used on the persona switch.
    pub fn label(self) -> &'static str {
        match self {
            Persona::Programmer => "Programmer",
            Persona::Artist => "3D Artist",
        }
    }

    /// The other persona.
    pub fn toggle(self) -> Self {
        match self {
            Persona::Programmer => Persona::Artist,
            Persona::Artist => Persona::Programmer,
        }
    }

    /// Accent colour family for this persona.
    pub fn accent(self) -> Accent {
        match self {
            Persona::Programmer => Accent::Blue,
            Persona::Artist => Accent::Red,
        }
    }

    /// CSS class of the cursor glow overlay.
    pub fn glow_class(self) -> &'static str {
        match self {
            Persona::Programmer => "programmer-glow",
            Persona::Artist => "artist-glow",
        }
    }

    /// Whether the portrait is shown flipped (rotated 180° about Y).
    pub fn flips_portrait(self) -> bool {
        matches!(self, Persona::Artist)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accent colour family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    /// Programmer accent.
    Blue,
    /// Artist accent.
    Red,
}

impl Accent {
    /// Hex colour used for focused borders and primary buttons.
    pub fn hex(self) -> &'static str {
        match self {
            Accent::Blue => "#2563eb",
            Accent::Red => "#dc2626",
        }
    }

    /// Colour family name, as used in utility class names.
    pub fn name(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Red => "red",
        }
    }
}

// ============================================================================
// Theme
// ============================================================================

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light scheme (default).
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Parse a persisted value. Anything other than `"dark"` is
    /// [`Theme::Light`].
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The value written to client storage.
    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns `true` for the dark scheme.
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class applied to the document root, if any.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Light => None,
            Theme::Dark => Some("dark"),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_value())
    }
}
