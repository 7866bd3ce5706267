//! Window listeners are released with the sections that own them.

use folio_core::reveal::{Phase, Rect, RevealVariant, Viewport};
use folio_shell::{ContainerRef, EventHub, RevealSection, ViewportEvent};

use crate::common::TestHarness;

#[test]
fn test_navigation_releases_section_listeners() {
    let harness = TestHarness::new();
    let mut shell = harness.open_shell();
    let on_home = shell.hub().listener_count();

    shell.navigate("/profile");
    assert_eq!(shell.hub().listener_count(), on_home - 2);

    shell.navigate("/");
    assert_eq!(shell.hub().listener_count(), on_home);
}

#[test]
fn test_events_after_teardown_are_ignored() {
    let hub = EventHub::new(Viewport::new(1280.0, 800.0));
    let container = ContainerRef::new();
    container.attach(Rect::new(1000.0, 600.0));

    let kept = RevealSection::mount(&hub, container.clone(), RevealVariant::Grid.config(), 3);
    let dropped = RevealSection::mount(&hub, container.clone(), RevealVariant::Grid.config(), 3);
    assert_eq!(hub.listener_count(), 4);
    drop(dropped);
    assert_eq!(hub.listener_count(), 2);

    container.shift(-700.0);
    hub.dispatch(ViewportEvent::Scroll { scroll_y: 700.0 });
    assert_eq!(kept.snapshot().phase(), Phase::Active);
    assert_eq!(kept.snapshot().state().len(), 3);
}

#[test]
fn test_resize_to_phone_switches_tuning() {
    let hub = EventHub::new(Viewport::new(1280.0, 800.0));
    let container = ContainerRef::new();
    container.attach(Rect::new(600.0, 600.0));
    let section = RevealSection::mount(&hub, container, RevealVariant::Grid.config(), 4);

    hub.dispatch(ViewportEvent::Resize(Viewport::new(375.0, 800.0)));
    let snapshot = section.snapshot();
    assert_eq!(snapshot.device(), folio_core::DeviceClass::Mobile);
    assert_eq!(snapshot.profile().stagger_secs, 0.08);
}
