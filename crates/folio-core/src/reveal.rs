//! Scroll-driven reveal sequencing for project lists.
//!
//! A section of `n` items is revealed progressively as its container scrolls
//! into the viewport. Everything here is a pure function of scroll geometry
//! and item count; [`RevealSequencer`] only adds the activation gate and the
//! last computed [`RevealState`].
//!
//! # Flow
//!
//! ```text
//! container rect ──▶ intersection gate ──▶ scroll progress ──▶ reveal set ──▶ item styles
//!                    (Unobserved/Active)   clamp(ratio × m)    threshold(i)    opacity/transform/blur/delay
//! ```
//!
//! Both list layouts of the site (the plain grid and the grid under the
//! rotating model placeholder) are presets of the same [`RevealConfig`].

use crate::{Error, Result};
use std::collections::BTreeSet;

/// Viewport width below which the mobile tuning applies.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ============================================================================
// Geometry
// ============================================================================

/// Device class, derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Narrow viewport.
    Mobile,
    /// Everything else.
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width in CSS pixels.
    pub fn from_viewport_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Inner width.
    pub width: f64,
    /// Inner height.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Device class of this viewport.
    pub fn device(&self) -> DeviceClass {
        DeviceClass::from_viewport_width(self.width)
    }
}

/// Vertical extent of a container, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the viewport top to the container top (negative once
    /// scrolled past).
    pub top: f64,
    /// Container height.
    pub height: f64,
}

impl Rect {
    /// Create a rect.
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge, relative to the viewport top.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

// ============================================================================
// Intersection gate
// ============================================================================

/// Insets shrinking the observation root, so the gate fires slightly before
/// the container's top reaches the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    /// Pixels removed from the top of the viewport.
    pub top_px: f64,
    /// Fraction of the viewport height removed from the bottom.
    pub bottom_fraction: f64,
}

impl RootMargin {
    /// Shrink the root by `top_px` at the top and `bottom_fraction` of the
    /// viewport height at the bottom.
    pub const fn shrink(top_px: f64, bottom_fraction: f64) -> Self {
        Self {
            top_px,
            bottom_fraction,
        }
    }
}

/// Visibility gate configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the container height that must overlap the root.
    pub threshold: f64,
    /// Root insets.
    pub root_margin: RootMargin,
}

impl ObserverOptions {
    /// Fraction of `rect` overlapping the shrunken viewport, in `[0, 1]`.
    pub fn intersection_ratio(&self, rect: Rect, viewport: Viewport) -> f64 {
        if rect.height <= 0.0 {
            return 0.0;
        }
        self.overlap(rect, viewport) / rect.height
    }

    /// Whether the gate considers `rect` intersecting.
    pub fn is_intersecting(&self, rect: Rect, viewport: Viewport) -> bool {
        self.overlap(rect, viewport) > 0.0
            && self.intersection_ratio(rect, viewport) >= self.threshold
    }

    fn overlap(&self, rect: Rect, viewport: Viewport) -> f64 {
        let root_top = self.root_margin.top_px;
        let root_bottom = viewport.height * (1.0 - self.root_margin.bottom_fraction);
        let overlap = rect.bottom().min(root_bottom) - rect.top.max(root_top);
        overlap.clamp(0.0, rect.height.max(0.0))
    }
}

// ============================================================================
// Thresholds
// ============================================================================

/// Per-item reveal threshold:
/// `max(min_threshold, (i + index_lead) / (n × count_scale + count_offset))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdCurve {
    /// Floor so the first items can appear early.
    pub min_threshold: f64,
    /// Added to the index before dividing.
    pub index_lead: f64,
    /// Multiplies the item count in the denominator.
    pub count_scale: f64,
    /// Added to the scaled item count in the denominator.
    pub count_offset: f64,
}

impl ThresholdCurve {
    /// Scroll progress at or above which item `index` of `count` is visible.
    ///
    /// A non-positive denominator yields `max(min_threshold, 1.0)`.
    pub fn threshold(&self, index: usize, count: usize) -> f64 {
        let denominator = count as f64 * self.count_scale + self.count_offset;
        let natural = if denominator > 0.0 {
            (index as f64 + self.index_lead) / denominator
        } else {
            1.0
        };
        natural.max(self.min_threshold)
    }

    /// Check that progress 0 reveals nothing and progress 1 reveals every
    /// item, for every item count.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_threshold) {
            return Err(Error::validation_field(
                "min_threshold",
                "must lie in [0, 1]",
            ));
        }
        if self.min_threshold <= 0.0 && self.index_lead <= 0.0 {
            return Err(Error::validation_field(
                "index_lead",
                "first item would be visible at zero progress",
            ));
        }
        if self.count_scale < 1.0 || self.count_offset < 0.0 {
            return Err(Error::validation_field(
                "count_scale",
                "denominator must grow at least as fast as the item count",
            ));
        }
        if self.index_lead < 0.0 || self.index_lead > self.count_scale + self.count_offset {
            return Err(Error::validation_field(
                "index_lead",
                "last item would never be revealed",
            ));
        }
        Ok(())
    }
}

/// Indices revealed at `progress`: exactly `{ i : threshold(i, count) <= progress }`.
pub fn reveal_set(progress: f64, count: usize, curve: &ThresholdCurve) -> BTreeSet<usize> {
    (0..count)
        .filter(|&i| curve.threshold(i, count) <= progress)
        .collect()
}

/// Normalised scroll progress of a container.
///
/// Returns `None` while the container top is still at or below the viewport
/// bottom (`1 - top / height <= 0`), or for a degenerate viewport; callers
/// skip the tick in that case.
pub fn scroll_progress(rect: Rect, viewport_height: f64, multiplier: f64) -> Option<f64> {
    if viewport_height <= 0.0 {
        return None;
    }
    let visible_ratio = 1.0 - rect.top / viewport_height;
    if visible_ratio <= 0.0 {
        return None;
    }
    Some((visible_ratio * multiplier).clamp(0.0, 1.0))
}

// ============================================================================
// Styles
// ============================================================================

/// Pose of an item that is not yet revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiddenPose {
    /// Vertical offset (positive is down).
    pub translate_y_px: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Gaussian blur radius.
    pub blur_px: f64,
}

/// Animation target of one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// 1 when revealed, else 0.
    pub opacity: f64,
    /// 0 when revealed.
    pub translate_y_px: f64,
    /// 1 when revealed.
    pub scale: f64,
    /// 0 when revealed.
    pub blur_px: f64,
    /// Transition delay, `index × stagger`.
    pub delay_secs: f64,
}

impl ItemStyle {
    /// Style of item `index` given whether it is revealed.
    pub fn new(revealed: bool, index: usize, profile: &RevealProfile) -> Self {
        let delay_secs = index as f64 * profile.stagger_secs;
        if revealed {
            Self {
                opacity: 1.0,
                translate_y_px: 0.0,
                scale: 1.0,
                blur_px: 0.0,
                delay_secs,
            }
        } else {
            Self {
                opacity: 0.0,
                translate_y_px: profile.hidden.translate_y_px,
                scale: profile.hidden.scale,
                blur_px: profile.hidden.blur_px,
                delay_secs,
            }
        }
    }

    /// Inline CSS declarations for this style.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px) scale({}); filter: blur({}px); transition-delay: {:.2}s",
            self.opacity, self.translate_y_px, self.scale, self.blur_px, self.delay_secs
        )
    }
}

/// Pose of the model placeholder floating above the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderPose {
    /// Downward travel, `min(progress × 400, 400)`.
    pub top_px: f64,
    /// `max(0, 1 − 1.2 × progress)`.
    pub opacity: f64,
    /// Drops behind the grid once every item is revealed.
    pub z_index: i32,
}

impl PlaceholderPose {
    const TRAVEL_PX: f64 = 400.0;
    const FADE_RATE: f64 = 1.2;

    /// Pose for the given progress.
    pub fn new(progress: f64, all_revealed: bool) -> Self {
        Self {
            top_px: (progress * Self::TRAVEL_PX).min(Self::TRAVEL_PX),
            opacity: (1.0 - progress * Self::FADE_RATE).max(0.0),
            z_index: if all_revealed { 0 } else { 2 },
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Tuning for one device class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealProfile {
    /// Scales the visible ratio; larger finishes the sequence sooner.
    pub multiplier: f64,
    /// Per-item threshold curve.
    pub curve: ThresholdCurve,
    /// Delay between consecutive items.
    pub stagger_secs: f64,
    /// Pose of hidden items.
    pub hidden: HiddenPose,
    /// Activation gate.
    pub observer: ObserverOptions,
    /// Progress above which the trailing "view all" link shows.
    pub link_threshold: f64,
}

/// The two list layouts of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealVariant {
    /// Plain card grid.
    Grid,
    /// Grid under a rotating 3D-model placeholder.
    ModelGrid,
}

impl RevealVariant {
    /// Preset configuration of this layout.
    pub fn config(self) -> RevealConfig {
        match self {
            RevealVariant::Grid => RevealConfig {
                desktop: GRID_DESKTOP,
                mobile: GRID_MOBILE,
                reset_on_leave: false,
            },
            RevealVariant::ModelGrid => RevealConfig {
                desktop: MODEL_GRID,
                mobile: MODEL_GRID,
                reset_on_leave: false,
            },
        }
    }
}

const GRID_HIDDEN: HiddenPose = HiddenPose {
    translate_y_px: 40.0,
    scale: 0.96,
    blur_px: 3.0,
};

const GRID_DESKTOP: RevealProfile = RevealProfile {
    multiplier: 1.8,
    curve: ThresholdCurve {
        min_threshold: 0.15,
        index_lead: 0.0,
        count_scale: 1.0,
        count_offset: 1.0,
    },
    stagger_secs: 0.12,
    hidden: GRID_HIDDEN,
    observer: ObserverOptions {
        threshold: 0.1,
        root_margin: RootMargin::shrink(50.0, 0.10),
    },
    link_threshold: 0.7,
};

const GRID_MOBILE: RevealProfile = RevealProfile {
    multiplier: 2.2,
    curve: ThresholdCurve {
        min_threshold: 0.15,
        index_lead: 0.0,
        count_scale: 1.3,
        count_offset: 0.0,
    },
    stagger_secs: 0.08,
    hidden: GRID_HIDDEN,
    observer: ObserverOptions {
        threshold: 0.1,
        root_margin: RootMargin::shrink(20.0, 0.05),
    },
    link_threshold: 0.5,
};

const MODEL_GRID: RevealProfile = RevealProfile {
    multiplier: 1.5,
    curve: ThresholdCurve {
        min_threshold: 0.0,
        index_lead: 0.5,
        count_scale: 1.0,
        count_offset: 1.0,
    },
    stagger_secs: 0.1,
    hidden: HiddenPose {
        translate_y_px: -50.0,
        scale: 0.9,
        blur_px: 2.0,
    },
    observer: ObserverOptions {
        threshold: 0.15,
        root_margin: RootMargin::shrink(100.0, 0.10),
    },
    link_threshold: 0.0,
};

/// Desktop and mobile tuning of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    desktop: RevealProfile,
    mobile: RevealProfile,
    reset_on_leave: bool,
}

impl RevealConfig {
    /// Build a validated configuration.
    pub fn new(desktop: RevealProfile, mobile: RevealProfile) -> Result<Self> {
        for profile in [&desktop, &mobile] {
            profile.curve.validate()?;
            if profile.multiplier <= 0.0 {
                return Err(Error::validation_field("multiplier", "must be positive"));
            }
        }
        Ok(Self {
            desktop,
            mobile,
            reset_on_leave: false,
        })
    }

    /// Close the gate again (and hide everything) when the section leaves
    /// the viewport.
    pub fn with_reset_on_leave(mut self, reset: bool) -> Self {
        self.reset_on_leave = reset;
        self
    }

    /// Profile for a device class.
    pub fn profile(&self, device: DeviceClass) -> &RevealProfile {
        match device {
            DeviceClass::Desktop => &self.desktop,
            DeviceClass::Mobile => &self.mobile,
        }
    }

    /// Whether the gate re-closes on scroll-away.
    pub fn resets_on_leave(&self) -> bool {
        self.reset_on_leave
    }
}

// ============================================================================
// Sequencer
// ============================================================================

/// Visible indices and progress of the latest tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealState {
    /// Revealed item indices.
    pub visible: BTreeSet<usize>,
    /// Scroll progress in `[0, 1]`.
    pub progress: f64,
}

impl RevealState {
    /// Whether item `index` is revealed.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    /// Number of revealed items.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns `true` when nothing is revealed.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Activation state of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the container to intersect the viewport.
    Unobserved,
    /// Recomputing on every scroll and resize.
    Active,
}

/// Per-container reveal state machine.
///
/// `Unobserved → Active` when the gate first intersects; `Active →
/// Unobserved` only with [`RevealConfig::with_reset_on_leave`]. Tearing the
/// section down is dropping the sequencer.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    config: RevealConfig,
    item_count: usize,
    device: DeviceClass,
    phase: Phase,
    state: RevealState,
}

impl RevealSequencer {
    /// Create an unobserved sequencer for `item_count` items.
    pub fn new(config: RevealConfig, item_count: usize) -> Self {
        Self {
            config,
            item_count,
            device: DeviceClass::default(),
            phase: Phase::Unobserved,
            state: RevealState::default(),
        }
    }

    /// Viewport changed size: re-detect the device class, then tick.
    ///
    /// Returns whether the observable state changed.
    pub fn on_resize(&mut self, container: Option<Rect>, viewport: Viewport) -> bool {
        let device = viewport.device();
        let device_changed = device != self.device;
        if device_changed {
            log::debug!("Reveal section switched to {device:?} tuning");
            self.device = device;
        }
        self.tick(container, viewport) || device_changed
    }

    /// Page scrolled: tick.
    ///
    /// Returns whether the observable state changed.
    pub fn on_scroll(&mut self, container: Option<Rect>, viewport: Viewport) -> bool {
        self.tick(container, viewport)
    }

    fn tick(&mut self, container: Option<Rect>, viewport: Viewport) -> bool {
        // Not mounted yet.
        let Some(rect) = container else {
            return false;
        };
        let profile = *self.config.profile(self.device);
        let intersecting = profile.observer.is_intersecting(rect, viewport);

        let mut changed = false;
        match self.phase {
            Phase::Unobserved if intersecting => {
                log::debug!("Reveal section entered view");
                self.phase = Phase::Active;
            }
            Phase::Active if !intersecting && self.config.reset_on_leave => {
                log::debug!("Reveal section left view, resetting");
                self.phase = Phase::Unobserved;
                changed = self.state != RevealState::default();
                self.state = RevealState::default();
            }
            _ => {}
        }

        if self.phase != Phase::Active {
            return changed;
        }
        let Some(progress) = scroll_progress(rect, viewport.height, profile.multiplier) else {
            return changed;
        };
        let next = RevealState {
            visible: reveal_set(progress, self.item_count, &profile.curve),
            progress,
        };
        changed |= next != self.state;
        self.state = next;
        changed
    }

    /// Change the number of items, keeping the current progress.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        if self.phase == Phase::Active {
            let curve = self.profile().curve;
            self.state.visible = reveal_set(self.state.progress, item_count, &curve);
        }
    }

    /// Number of items sequenced.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current activation phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Device class of the latest resize.
    pub fn device(&self) -> DeviceClass {
        self.device
    }

    /// Profile in effect for the current device class.
    pub fn profile(&self) -> &RevealProfile {
        self.config.profile(self.device)
    }

    /// State of the latest tick.
    pub fn state(&self) -> &RevealState {
        &self.state
    }

    /// Style of item `index`.
    pub fn item_style(&self, index: usize) -> ItemStyle {
        ItemStyle::new(self.state.is_visible(index), index, self.profile())
    }

    /// Styles of every item, in index order.
    pub fn styles(&self) -> Vec<ItemStyle> {
        (0..self.item_count).map(|i| self.item_style(i)).collect()
    }

    /// Whether the trailing "view all" link is shown.
    pub fn link_visible(&self) -> bool {
        self.state.progress > self.profile().link_threshold
    }

    /// Pose of the model placeholder.
    pub fn placeholder(&self) -> PlaceholderPose {
        PlaceholderPose::new(
            self.state.progress,
            self.state.len() == self.item_count,
        )
    }
}
