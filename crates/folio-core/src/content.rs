//! Static portfolio content.
//!
//! The catalogue is immutable data baked into the binary and parsed once at
//! startup. Nothing here is created or destroyed at runtime; views only
//! filter and slice it per [`Persona`].

use crate::persona::Persona;
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The catalogue shipped with the site.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Number of projects featured on the home page.
pub const FEATURED_COUNT: usize = 3;

// ============================================================================
// Items
// ============================================================================

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectItem {
    /// Stable identifier, unique within the catalogue.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Cover image URL on the media CDN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Technology tags.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Source repository.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Live demo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Creation date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<NaiveDate>,
    /// Personas the project is listed under; absent means both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Persona>>,
}

impl ProjectItem {
    /// Whether this project is listed for `persona`.
    pub fn applies_to(&self, persona: Persona) -> bool {
        applies(self.roles.as_deref(), persona)
    }

    /// Card footer text, e.g. `Created on: 2024-07-05`.
    pub fn created_label(&self) -> Option<String> {
        self.created_on
            .map(|date| format!("Created on: {}", date.format("%Y-%m-%d")))
    }

    /// Link target of the card: the live demo, or `#` when there is none.
    pub fn link(&self) -> &str {
        self.live_url.as_deref().unwrap_or("#")
    }
}

/// A skill badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Display name.
    pub name: String,
    /// Icon identifier understood by the icon renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Hover description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Personas the skill is listed under; absent means both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<Persona>>,
}

impl Skill {
    /// Whether this skill is listed for `persona`.
    pub fn applies_to(&self, persona: Persona) -> bool {
        applies(self.roles.as_deref(), persona)
    }
}

fn applies(roles: Option<&[Persona]>, persona: Persona) -> bool {
    roles.is_none_or(|roles| roles.contains(&persona))
}

/// Per-persona hero content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaProfile {
    /// Portrait URL.
    pub image_url: String,
    /// Bullet points under the greeting.
    pub headline: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profiles {
    programmer: PersonaProfile,
    artist: PersonaProfile,
}

/// Resume document links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeLinks {
    /// Embeddable preview.
    pub preview_url: String,
    /// Direct download.
    pub download_url: String,
    /// Suggested file name for the download.
    pub file_name: String,
}

/// A footer/social link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Accessible label.
    pub label: String,
    /// Target URL.
    pub url: String,
}

// ============================================================================
// Catalog
// ============================================================================

/// All static content of the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Site owner, shown in the greeting and footer.
    pub owner: String,
    /// Footer links.
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    /// Resume links.
    pub resume: ResumeLinks,
    profiles: Profiles,
    projects: Vec<ProjectItem>,
    #[serde(default)]
    skills: Vec<Skill>,
}

impl Catalog {
    /// Parse the catalogue compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalogue from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!(
            "Loaded catalog: {} projects, {} skills",
            catalog.projects.len(),
            catalog.skills.len()
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id.as_str()) {
                return Err(Error::validation_field(
                    "projects.id",
                    format!("duplicate project id '{}'", project.id),
                ));
            }
        }
        Ok(())
    }

    /// Every project, in declaration order.
    pub fn projects(&self) -> &[ProjectItem] {
        &self.projects
    }

    /// Projects listed for `persona`, in declaration order.
    pub fn projects_for(&self, persona: Persona) -> Vec<&ProjectItem> {
        self.projects
            .iter()
            .filter(|p| p.applies_to(persona))
            .collect()
    }

    /// The first [`FEATURED_COUNT`] projects listed for `persona`.
    pub fn featured_projects(&self, persona: Persona) -> Vec<&ProjectItem> {
        self.projects
            .iter()
            .filter(|p| p.applies_to(persona))
            .take(FEATURED_COUNT)
            .collect()
    }

    /// Skills listed for `persona`, in declaration order.
    pub fn skills_for(&self, persona: Persona) -> Vec<&Skill> {
        self.skills.iter().filter(|s| s.applies_to(persona)).collect()
    }

    /// Hero content for `persona`.
    pub fn profile(&self, persona: Persona) -> &PersonaProfile {
        match persona {
            Persona::Programmer => &self.profiles.programmer,
            Persona::Artist => &self.profiles.artist,
        }
    }

    /// Look a project up by id.
    pub fn project(&self, id: &str) -> Option<&ProjectItem> {
        self.projects.iter().find(|p| p.id == id)
    }
}
