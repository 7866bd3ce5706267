//! Catalogue filtering as the home and projects pages use it.

use folio_core::content::{Catalog, FEATURED_COUNT};
use folio_core::persona::Persona;
use folio_core::reveal::RevealVariant;

use crate::common::{DESKTOP, PageHarness};

#[test]
fn test_toggling_persona_swaps_project_list() {
    let catalog = Catalog::builtin().unwrap();
    let programmer = catalog.projects_for(Persona::Programmer);
    let artist = catalog.projects_for(Persona::Programmer.toggle());
    assert_ne!(programmer, artist);
}

#[test]
fn test_featured_section_reveals_every_card() {
    let catalog = Catalog::builtin().unwrap();
    for persona in Persona::all() {
        let featured = catalog.featured_projects(persona);
        assert!(featured.len() <= FEATURED_COUNT);

        let mut page = PageHarness::new(RevealVariant::ModelGrid.config(), featured.len(), DESKTOP);
        page.scroll_to(900.0);
        assert_eq!(page.visible().len(), featured.len());
    }
}
