//! Persisted persona and theme.

use crate::registry::{Registration, Registry};
use crate::storage::KeyValueStore;
use crate::Result;
use folio_core::persona::{PERSONA_KEY, Persona, THEME_KEY, Theme};
use std::sync::Arc;

/// Handle of an [`AppState`] subscriber. Dropping it unsubscribes.
pub type Subscription = Registration;

/// A change broadcast to subscribers after it has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// The active persona changed.
    Persona(Persona),
    /// The colour theme changed.
    Theme(Theme),
}

/// The two global toggles of the site.
///
/// Every setter writes the store before updating memory, so the stored
/// value and the in-memory value never disagree once the call returns.
pub struct AppState {
    store: Arc<dyn KeyValueStore>,
    persona: Persona,
    theme: Theme,
    subscribers: Registry<StateChange>,
}

impl AppState {
    /// Read the toggles from `store`. Absent or unknown values fall back to
    /// the defaults (Programmer, light).
    pub fn load(store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let persona = Persona::from_storage(store.get(PERSONA_KEY)?.as_deref());
        let theme = Theme::from_storage(store.get(THEME_KEY)?.as_deref());
        log::debug!("Loaded state: persona={persona}, theme={theme}");
        Ok(Self {
            store,
            persona,
            theme,
            subscribers: Registry::new(),
        })
    }

    /// Active persona.
    pub fn persona(&self) -> Persona {
        self.persona
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to `persona`. Returns whether anything changed.
    pub fn set_persona(&mut self, persona: Persona) -> Result<bool> {
        if persona == self.persona {
            return Ok(false);
        }
        self.store.set(PERSONA_KEY, persona.storage_value())?;
        self.persona = persona;
        log::info!("Persona switched to {persona}");
        self.subscribers.emit(&StateChange::Persona(persona));
        Ok(true)
    }

    /// Flip the persona and return the new one.
    pub fn toggle_persona(&mut self) -> Result<Persona> {
        self.set_persona(self.persona.toggle())?;
        Ok(self.persona)
    }

    /// Switch to `theme`. Returns whether anything changed.
    pub fn set_theme(&mut self, theme: Theme) -> Result<bool> {
        if theme == self.theme {
            return Ok(false);
        }
        self.store.set(THEME_KEY, theme.storage_value())?;
        self.theme = theme;
        log::info!("Theme switched to {theme}");
        self.subscribers.emit(&StateChange::Theme(theme));
        Ok(true)
    }

    /// Flip the theme and return the new one.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.toggle())?;
        Ok(self.theme)
    }

    /// Call `f` after every persisted change until the handle is dropped.
    pub fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(StateChange) + Send + Sync + 'static,
    {
        self.subscribers.add(move |change: &StateChange| f(*change))
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("persona", &self.persona)
            .field("theme", &self.theme)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
