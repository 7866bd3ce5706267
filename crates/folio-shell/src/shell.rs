//! The application shell.
//!
//! [`Shell`] wires the catalogue, persisted toggles, router and event hub
//! together and hands out the current [`Frame`]. Views are cached and only
//! rebuilt when one of their inputs changed:
//!
//! | Input            | Chrome | Page |
//! |------------------|--------|------|
//! | persona          | yes    | yes  |
//! | theme            | yes    | no   |
//! | navigation       | yes    | yes  |
//! | pointer movement | yes    | home |
//! | reveal progress  | no     | home |
//! | contact form     | no     | yes  |

use crate::contact::ContactForm;
use crate::events::{EventHub, EventKind, ListenerGuard, ViewportEvent};
use crate::registry::lock;
use crate::section::{ContainerRef, RevealSection};
use crate::state::{AppState, StateChange, Subscription};
use crate::storage::KeyValueStore;
use crate::view::{
    ChromeView, ContactView, HomeView, NotFoundView, PageView, ProfileView, ProjectsView,
    ResumeView,
};
use crate::{Error, Result};
use chrono::Datelike;
use folio_core::contact::{ContactTransport, Field};
use folio_core::content::Catalog;
use folio_core::motion::{CursorFollow, CursorGlow, FollowPose, Point};
use folio_core::persona::{Persona, Theme};
use folio_core::reveal::{RevealVariant, Viewport};
use folio_core::route::Route;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Viewport assumed until the first resize event.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

/// Chrome and page of the current screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Navigation, theme, glow and footer.
    pub chrome: ChromeView,
    /// Body of the current route.
    pub page: PageView,
}

#[derive(Debug, Default)]
struct Dirty {
    chrome: AtomicBool,
    page: AtomicBool,
    persona: AtomicBool,
}

impl Dirty {
    fn all() -> Self {
        Self {
            chrome: AtomicBool::new(true),
            page: AtomicBool::new(true),
            persona: AtomicBool::new(false),
        }
    }
}

/// Pointer-driven decoration state, updated from the hub.
#[derive(Debug)]
struct Motion {
    glow: CursorGlow,
    portrait_center: Option<Point>,
    portrait: FollowPose,
}

/// The headless site.
pub struct Shell {
    catalog: Catalog,
    state: AppState,
    hub: EventHub,
    route: Route,
    contact: ContactForm,
    featured_container: ContainerRef,
    featured: Option<RevealSection>,
    motion: Arc<Mutex<Motion>>,
    dirty: Arc<Dirty>,
    year: i32,
    frame: Option<Frame>,
    _state_changes: Subscription,
    _pointer: ListenerGuard,
}

impl Shell {
    /// Create a shell over `catalog`, reading the toggles from `store`.
    pub fn new(catalog: Catalog, store: Arc<dyn KeyValueStore>, viewport: Viewport) -> Result<Self> {
        let state = AppState::load(store)?;
        let hub = EventHub::new(viewport);
        let dirty = Arc::new(Dirty::all());
        let motion = Arc::new(Mutex::new(Motion {
            glow: CursorGlow::new(state.persona()),
            portrait_center: None,
            portrait: FollowPose::default(),
        }));

        let state_changes = {
            let dirty = Arc::clone(&dirty);
            let motion = Arc::clone(&motion);
            state.subscribe(move |change| {
                dirty.chrome.store(true, Ordering::SeqCst);
                if let StateChange::Persona(persona) = change {
                    lock(&motion).glow.persona = persona;
                    dirty.persona.store(true, Ordering::SeqCst);
                    dirty.page.store(true, Ordering::SeqCst);
                }
            })
        };

        let pointer = {
            let dirty = Arc::clone(&dirty);
            let motion = Arc::clone(&motion);
            hub.listen(EventKind::MouseMove, move |_, metrics| {
                let mut motion = lock(&motion);
                motion.glow.track(metrics.cursor);
                if let Some(center) = motion.portrait_center {
                    motion.portrait = CursorFollow::profile_image().pose(
                        metrics.cursor,
                        center,
                        metrics.viewport.width,
                        metrics.viewport.height,
                    );
                }
                dirty.chrome.store(true, Ordering::SeqCst);
                dirty.page.store(true, Ordering::SeqCst);
            })
        };

        let mut shell = Self {
            catalog,
            state,
            hub,
            route: Route::Home,
            contact: ContactForm::new(),
            featured_container: ContainerRef::new(),
            featured: None,
            motion,
            dirty,
            year: chrono::Local::now().year(),
            frame: None,
            _state_changes: state_changes,
            _pointer: pointer,
        };
        shell.enter(Route::Home);
        Ok(shell)
    }

    /// Create a shell over the built-in catalogue with the default viewport.
    pub fn builtin(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        Self::new(Catalog::builtin()?, store, DEFAULT_VIEWPORT)
    }

    /// Override the footer year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self.dirty.chrome.store(true, Ordering::SeqCst);
        self
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// The content catalogue.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The window event hub. Renderers dispatch scroll, resize and pointer
    /// events here.
    pub fn hub(&self) -> &EventHub {
        &self.hub
    }

    /// Current route.
    pub fn route(&self) -> Route {
        self.route
    }

    /// Active persona.
    pub fn persona(&self) -> Persona {
        self.state.persona()
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.state.theme()
    }

    /// Container of the featured projects section on the home page.
    pub fn featured_container(&self) -> &ContainerRef {
        &self.featured_container
    }

    /// The mounted featured section, while the home page is shown.
    pub fn featured_section(&self) -> Option<&RevealSection> {
        self.featured.as_ref()
    }

    /// The contact form.
    pub fn contact_form(&self) -> &ContactForm {
        &self.contact
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    /// Forward a window event to the hub.
    pub fn dispatch(&self, event: ViewportEvent) {
        self.hub.dispatch(event);
    }

    /// Go to `path`. Returns the resolved route.
    pub fn navigate(&mut self, path: &str) -> Route {
        let route = Route::resolve(path);
        if route != self.route {
            log::debug!("Navigating {} -> {route}", self.route);
            self.enter(route);
        }
        route
    }

    /// Flip the persona.
    pub fn toggle_persona(&mut self) -> Result<Persona> {
        self.state.toggle_persona()
    }

    /// Flip the theme.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.state.toggle_theme()
    }

    /// Centre of the hero portrait, once the renderer has laid it out.
    pub fn set_portrait_center(&self, center: Point) {
        lock(&self.motion).portrait_center = Some(center);
    }

    /// Edit one contact field.
    pub fn set_contact_field(&mut self, field: Field, value: impl Into<String>) {
        self.contact.set_field(field, value);
        self.mark_page();
    }

    /// Submit the contact form through `transport`.
    pub async fn submit_contact(&mut self, transport: &dyn ContactTransport) -> Result<()> {
        if self.route != Route::Contact {
            return Err(Error::validation("the contact form is not shown"));
        }
        self.mark_page();
        self.contact.submit(transport).await
    }

    /// Report a failed editor image upload.
    pub fn report_upload_error(&mut self, error: &Error) {
        self.contact.report_upload_error(error);
        self.mark_page();
    }

    /// Insert an uploaded image into the message body.
    pub fn insert_image(&mut self, url: &str) {
        self.contact.insert_image(url);
        self.mark_page();
    }

    /// Close the success modal.
    pub fn dismiss_modal(&mut self) {
        self.contact.dismiss_modal();
        self.mark_page();
    }

    /// The current frame, rebuilding whatever changed since the last call.
    pub fn frame(&mut self) -> &Frame {
        if self.dirty.persona.swap(false, Ordering::SeqCst) {
            let count = self.featured_count();
            if let Some(section) = &self.featured {
                section.set_item_count(count);
            }
        }
        if self
            .featured
            .as_ref()
            .is_some_and(RevealSection::take_changed)
        {
            self.mark_page();
        }

        let chrome_dirty = self.dirty.chrome.swap(false, Ordering::SeqCst);
        let page_dirty = self.dirty.page.swap(false, Ordering::SeqCst);

        let frame = match self.frame.take() {
            Some(mut frame) => {
                if chrome_dirty {
                    frame.chrome = self.build_chrome();
                }
                if page_dirty {
                    frame.page = self.build_page();
                }
                frame
            }
            None => Frame {
                chrome: self.build_chrome(),
                page: self.build_page(),
            },
        };
        self.frame.insert(frame)
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn enter(&mut self, route: Route) {
        self.route = route;
        // Leaving home unmounts the section and releases its listeners.
        self.featured = (route == Route::Home).then(|| {
            RevealSection::mount(
                &self.hub,
                self.featured_container.clone(),
                RevealVariant::Grid.config(),
                self.featured_count(),
            )
        });
        self.dirty.chrome.store(true, Ordering::SeqCst);
        self.mark_page();
    }

    fn featured_count(&self) -> usize {
        self.catalog.featured_projects(self.state.persona()).len()
    }

    fn mark_page(&self) {
        self.dirty.page.store(true, Ordering::SeqCst);
    }

    fn build_chrome(&self) -> ChromeView {
        let motion = lock(&self.motion);
        ChromeView::build(
            &self.catalog,
            self.state.theme(),
            self.route,
            &motion.glow,
            self.year,
        )
    }

    fn build_page(&self) -> PageView {
        let persona = self.state.persona();
        match self.route {
            Route::Home => {
                let reveal = self.featured.as_ref().map(RevealSection::snapshot);
                let portrait = lock(&self.motion).portrait;
                PageView::Home(HomeView::build(
                    &self.catalog,
                    persona,
                    reveal.as_ref(),
                    portrait,
                ))
            }
            Route::Projects => PageView::Projects(ProjectsView::build(&self.catalog, persona)),
            Route::Profile => PageView::Profile(ProfileView::build(&self.catalog, persona)),
            Route::Resume => PageView::Resume(ResumeView::build(&self.catalog, persona)),
            Route::Contact => PageView::Contact(ContactView::build(&self.contact, persona)),
            Route::NotFound => PageView::NotFound(NotFoundView::default()),
        }
    }
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell")
            .field("route", &self.route)
            .field("state", &self.state)
            .field("hub", &self.hub)
            .finish()
    }
}
