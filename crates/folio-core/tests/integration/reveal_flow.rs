//! Scroll-through scenarios for both list layouts.

use folio_core::reveal::{DeviceClass, Phase, RevealVariant};

use crate::common::{DESKTOP, PHONE, PageHarness};

#[test]
fn test_grid_stays_hidden_until_section_intersects() {
    let mut page = PageHarness::new(RevealVariant::Grid.config(), 4, DESKTOP);
    assert_eq!(page.sequencer.phase(), Phase::Unobserved);

    assert!(!page.scroll_to(100.0));
    assert_eq!(page.sequencer.phase(), Phase::Unobserved);
    assert!(page.visible().is_empty());
    assert!(page.sequencer.styles().iter().all(|s| s.opacity == 0.0));
}

#[test]
fn test_grid_reveals_progressively_in_index_order() {
    let mut page = PageHarness::new(RevealVariant::Grid.config(), 4, DESKTOP);

    // top = 600: progress = (1 - 600/800) * 1.8 = 0.45
    assert!(page.scroll_to(400.0));
    assert_eq!(page.sequencer.phase(), Phase::Active);
    assert_eq!(page.visible(), vec![0, 1, 2]);
    assert!(!page.sequencer.link_visible());

    // top = 300: progress clamps to 1
    assert!(page.scroll_to(700.0));
    assert_eq!(page.visible(), vec![0, 1, 2, 3]);
    assert!(page.sequencer.link_visible());

    let delays: Vec<f64> = page.sequencer.styles().iter().map(|s| s.delay_secs).collect();
    assert!(delays.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_grid_keeps_reveal_after_scrolling_away() {
    let mut page = PageHarness::new(RevealVariant::Grid.config(), 4, DESKTOP);
    page.scroll_to(700.0);
    assert_eq!(page.visible().len(), 4);

    // Section back below the fold: tick skipped, nothing hides again.
    assert!(!page.scroll_to(0.0));
    assert_eq!(page.sequencer.phase(), Phase::Active);
    assert_eq!(page.visible().len(), 4);
}

#[test]
fn test_reset_on_leave_hides_everything() {
    let config = RevealVariant::Grid.config().with_reset_on_leave(true);
    let mut page = PageHarness::new(config, 4, DESKTOP);
    page.scroll_to(700.0);
    assert_eq!(page.visible().len(), 4);

    assert!(page.scroll_to(0.0));
    assert_eq!(page.sequencer.phase(), Phase::Unobserved);
    assert!(page.visible().is_empty());
}

#[test]
fn test_phone_uses_mobile_tuning() {
    let mut page = PageHarness::new(RevealVariant::Grid.config(), 4, PHONE);
    assert_eq!(page.sequencer.device(), DeviceClass::Mobile);

    // progress = 0.25 * 2.2 = 0.55, thresholds 0.15, 0.19, 0.38, 0.58
    page.scroll_to(400.0);
    assert_eq!(page.visible(), vec![0, 1, 2]);
    assert!(page.sequencer.link_visible());

    assert!(page.resize(DESKTOP));
    assert_eq!(page.sequencer.device(), DeviceClass::Desktop);
}

#[test]
fn test_model_grid_placeholder_follows_progress() {
    let mut page = PageHarness::new(RevealVariant::ModelGrid.config(), 4, DESKTOP);

    // progress = 0.25 * 1.5 = 0.375, thresholds 0.1, 0.3, 0.5, 0.7
    page.scroll_to(400.0);
    assert_eq!(page.visible(), vec![0, 1]);
    let pose = page.sequencer.placeholder();
    assert!((pose.top_px - 150.0).abs() < 1e-9);
    assert!((pose.opacity - 0.55).abs() < 1e-9);
    assert_eq!(pose.z_index, 2);

    page.scroll_to(900.0);
    assert_eq!(page.visible().len(), 4);
    let pose = page.sequencer.placeholder();
    assert_eq!(pose.top_px, 400.0);
    assert_eq!(pose.opacity, 0.0);
    assert_eq!(pose.z_index, 0);
}

#[test]
fn test_empty_section_is_inert() {
    let mut page = PageHarness::new(RevealVariant::Grid.config(), 0, DESKTOP);
    page.scroll_to(700.0);
    assert!(page.visible().is_empty());
    assert!(page.sequencer.styles().is_empty());
}
