//! Page and chrome view models.
//!
//! Views are plain data derived from the catalogue and the current toggles.
//! They are rebuilt, never mutated, when their inputs change.

use crate::contact::ContactForm;
use folio_core::content::{Catalog, ProjectItem, Skill, SocialLink};
use folio_core::contact::ContactSubmission;
use folio_core::motion::{CursorGlow, FollowPose};
use folio_core::persona::{Accent, Persona, Theme};
use folio_core::reveal::{ItemStyle, RevealSequencer};
use folio_core::route::{NAV_LINKS, Route};

/// Number of skills shown on the home page.
pub const HOME_SKILL_LIMIT: usize = 10;

// ============================================================================
// Building blocks
// ============================================================================

/// A rendered project card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    /// Project id.
    pub id: String,
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Cover image.
    pub image: Option<String>,
    /// Technology tags.
    pub technologies: Vec<String>,
    /// Source link.
    pub github_url: Option<String>,
    /// Card link (live demo or `#`).
    pub link: String,
    /// `Created on: …` footer.
    pub created_label: Option<String>,
    /// Reveal style, for cards inside a reveal section.
    pub style: Option<ItemStyle>,
}

impl ProjectCard {
    fn new(item: &ProjectItem, style: Option<ItemStyle>) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
            technologies: item.technologies.clone(),
            github_url: item.github_url.clone(),
            link: item.link().to_string(),
            created_label: item.created_label(),
            style,
        }
    }
}

/// A rendered skill badge.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBadge {
    /// Name.
    pub name: String,
    /// Icon identifier.
    pub icon: Option<String>,
    /// Hover text.
    pub description: Option<String>,
}

impl From<&Skill> for SkillBadge {
    fn from(skill: &Skill) -> Self {
        Self {
            name: skill.name.clone(),
            icon: skill.icon.clone(),
            description: skill.description.clone(),
        }
    }
}

fn skill_badges(catalog: &Catalog, persona: Persona, limit: usize) -> Vec<SkillBadge> {
    catalog
        .skills_for(persona)
        .into_iter()
        .take(limit)
        .map(SkillBadge::from)
        .collect()
}

// ============================================================================
// Pages
// ============================================================================

/// The landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    /// Greeting line with the owner's name.
    pub greeting: String,
    /// Persona the hero is written for.
    pub persona: Persona,
    /// Hero bullet points.
    pub headline: Vec<String>,
    /// Portrait URL.
    pub image_url: String,
    /// Portrait CSS transform (cursor tilt, flipped for the artist).
    pub portrait_transform: String,
    /// Featured project cards with their reveal styles.
    pub featured: Vec<ProjectCard>,
    /// Whether the "view all projects" link is shown.
    pub view_all_visible: bool,
    /// Skill badges.
    pub skills: Vec<SkillBadge>,
}

impl HomeView {
    /// Build the home page. Without a sequencer every card is shown hidden.
    pub fn build(
        catalog: &Catalog,
        persona: Persona,
        reveal: Option<&RevealSequencer>,
        portrait: FollowPose,
    ) -> Self {
        let profile = catalog.profile(persona);
        let featured = catalog
            .featured_projects(persona)
            .into_iter()
            .enumerate()
            .map(|(i, item)| ProjectCard::new(item, reveal.map(|r| r.item_style(i))))
            .collect();
        Self {
            greeting: format!("Hi, I'm {}", catalog.owner),
            persona,
            headline: profile.headline.clone(),
            image_url: profile.image_url.clone(),
            portrait_transform: portrait.to_css(persona.flips_portrait()),
            featured,
            view_all_visible: reveal.is_some_and(RevealSequencer::link_visible),
            skills: skill_badges(catalog, persona, HOME_SKILL_LIMIT),
        }
    }
}

/// The projects page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsView {
    /// Every card listed for the persona.
    pub cards: Vec<ProjectCard>,
}

impl ProjectsView {
    /// Build the projects page.
    pub fn build(catalog: &Catalog, persona: Persona) -> Self {
        Self {
            cards: catalog
                .projects_for(persona)
                .into_iter()
                .map(|item| ProjectCard::new(item, None))
                .collect(),
        }
    }
}

/// The profile page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    /// Persona the page is written for.
    pub persona: Persona,
    /// Portrait URL.
    pub image_url: String,
    /// Every skill listed for the persona.
    pub skills: Vec<SkillBadge>,
    /// Accent of the section headings.
    pub accent: Accent,
}

impl ProfileView {
    /// Build the profile page.
    pub fn build(catalog: &Catalog, persona: Persona) -> Self {
        Self {
            persona,
            image_url: catalog.profile(persona).image_url.clone(),
            skills: skill_badges(catalog, persona, usize::MAX),
            accent: persona.accent(),
        }
    }
}

/// The resume page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeView {
    /// Embeddable preview.
    pub preview_url: String,
    /// Download link.
    pub download_url: String,
    /// Download file name.
    pub file_name: String,
    /// Accent of the download button.
    pub accent: Accent,
}

impl ResumeView {
    /// Build the resume page.
    pub fn build(catalog: &Catalog, persona: Persona) -> Self {
        Self {
            preview_url: catalog.resume.preview_url.clone(),
            download_url: catalog.resume.download_url.clone(),
            file_name: catalog.resume.file_name.clone(),
            accent: persona.accent(),
        }
    }
}

/// The contact page.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    /// Field values.
    pub fields: ContactSubmission,
    /// Hint under the email input.
    pub email_hint: Option<&'static str>,
    /// Submit button label.
    pub submit_label: &'static str,
    /// Whether the submit button is enabled.
    pub can_submit: bool,
    /// Inline error.
    pub error: Option<&'static str>,
    /// Success modal text while open.
    pub modal: Option<&'static str>,
    /// Accent of focused inputs and the button.
    pub accent: Accent,
}

impl ContactView {
    /// Build the contact page from the form state.
    pub fn build(form: &ContactForm, persona: Persona) -> Self {
        Self {
            fields: form.fields().clone(),
            email_hint: form.email_hint(),
            submit_label: form.submit_label(),
            can_submit: form.can_submit(),
            error: form.error_message(),
            modal: form.modal_message(),
            accent: persona.accent(),
        }
    }
}

/// The fallback page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundView {
    /// Explanation.
    pub message: &'static str,
    /// Where the "go home" link points.
    pub home_path: &'static str,
}

impl Default for NotFoundView {
    fn default() -> Self {
        Self {
            message: "The page you are looking for does not exist.",
            home_path: "/",
        }
    }
}

/// The page body for the current route.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// `/`
    Home(HomeView),
    /// `/projects`
    Projects(ProjectsView),
    /// `/profile`
    Profile(ProfileView),
    /// `/resume`
    Resume(ResumeView),
    /// `/contact`
    Contact(ContactView),
    /// Anything else.
    NotFound(NotFoundView),
}

impl PageView {
    /// Route this page renders.
    pub fn route(&self) -> Route {
        match self {
            PageView::Home(_) => Route::Home,
            PageView::Projects(_) => Route::Projects,
            PageView::Profile(_) => Route::Profile,
            PageView::Resume(_) => Route::Resume,
            PageView::Contact(_) => Route::Contact,
            PageView::NotFound(_) => Route::NotFound,
        }
    }

    /// Page heading.
    pub fn title(&self) -> &'static str {
        self.route().title()
    }
}

// ============================================================================
// Chrome
// ============================================================================

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Link text.
    pub name: &'static str,
    /// Target path.
    pub path: &'static str,
    /// Highlighted for the current route.
    pub selected: bool,
}

/// Everything around the page: root class, navigation, glow and footer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeView {
    /// Class on the document root (`dark` or none).
    pub theme_class: Option<&'static str>,
    /// Theme toggle state.
    pub theme: Theme,
    /// Persona switch state.
    pub persona: Persona,
    /// Persona accent.
    pub accent: Accent,
    /// Navigation entries.
    pub nav: Vec<NavItem>,
    /// Cursor glow CSS class.
    pub glow_class: String,
    /// Cursor glow CSS transform.
    pub glow_transform: String,
    /// Footer copyright line.
    pub footer: String,
    /// Footer links.
    pub social_links: Vec<SocialLink>,
}

impl ChromeView {
    /// Build the chrome.
    pub fn build(
        catalog: &Catalog,
        theme: Theme,
        route: Route,
        glow: &CursorGlow,
        year: i32,
    ) -> Self {
        let persona = glow.persona;
        Self {
            theme_class: theme.root_class(),
            theme,
            persona,
            accent: persona.accent(),
            nav: NAV_LINKS
                .iter()
                .filter_map(|link| {
                    link.route.path().map(|path| NavItem {
                        name: link.name,
                        path,
                        selected: link.is_selected(route),
                    })
                })
                .collect(),
            glow_class: glow.class(),
            glow_transform: glow.transform(),
            footer: format!("\u{a9} {year} {}", catalog.owner),
            social_links: catalog.social_links.clone(),
        }
    }
}
