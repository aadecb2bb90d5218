//! Vertical scroll container with smooth scrolling and mandatory snap points

use std::time::{Duration, Instant};

/// How long a smooth scroll takes from start to target
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(300);

/// An in-flight smooth scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScrollAnimation {
    from: u32,
    to: u32,
    started: Instant,
}

/// The survey's scroll container, measured in terminal rows
///
/// Snap points sit at every multiple of the viewport height. The offset is
/// always clamped to `[0, content_height - viewport_height]`.
#[derive(Debug, Clone)]
pub struct ScrollContainer {
    offset: u32,
    viewport_height: u16,
    content_height: u32,
    animation: Option<ScrollAnimation>,
}

impl ScrollContainer {
    pub fn new(viewport_height: u16) -> Self {
        ScrollContainer {
            offset: 0,
            viewport_height,
            content_height: 0,
            animation: None,
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn content_height(&self) -> u32 {
        self.content_height
    }

    /// Whether a smooth scroll is still running
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn max_offset(&self) -> u32 {
        self.content_height
            .saturating_sub(u32::from(self.viewport_height))
    }

    /// Lay out `panels` snap panels of one viewport each
    pub fn set_panel_count(&mut self, panels: usize) {
        self.content_height = u32::from(self.viewport_height).saturating_mul(panels as u32);
        self.offset = self.offset.min(self.max_offset());
    }

    /// Resize the viewport, keeping `panel` aligned at the top
    ///
    /// A smooth scroll in flight keeps heading for the same panel, measured
    /// in the new height. Returns true if the offset changed.
    pub fn resize(&mut self, viewport_height: u16, panels: usize, panel: usize) -> bool {
        let before = self.offset;
        let old_height = u32::from(self.viewport_height);
        let target_panel = self
            .animation
            .filter(|_| old_height > 0)
            .map(|anim| ((anim.to + old_height / 2) / old_height) as usize);

        self.viewport_height = viewport_height;
        self.set_panel_count(panels);
        self.offset = self.snap_offset(panel).min(self.max_offset());

        let retarget = match (target_panel, self.animation) {
            (Some(target), Some(anim)) => {
                let to = self.snap_offset(target).min(self.max_offset());
                (to != self.offset).then_some(ScrollAnimation {
                    from: self.offset,
                    to,
                    started: anim.started,
                })
            }
            _ => None,
        };
        self.animation = retarget;
        self.offset != before
    }

    /// Jump straight to the top, dropping any animation
    pub fn reset(&mut self) {
        self.offset = 0;
        self.animation = None;
    }

    /// Start offset of snap panel `panel`
    pub fn snap_offset(&self, panel: usize) -> u32 {
        u32::from(self.viewport_height).saturating_mul(panel as u32)
    }

    /// Begin a smooth scroll towards `target`
    ///
    /// A scroll already in flight is retargeted from the current offset.
    pub fn scroll_to_smooth(&mut self, target: u32, now: Instant) {
        let to = target.min(self.max_offset());
        if to == self.offset {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to,
            started: now,
        });
    }

    /// Move the offset directly by `delta` rows
    ///
    /// Returns true if the offset changed. Any running animation is cancelled.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.animation = None;
        let before = self.offset;
        let target = i64::from(self.offset) + i64::from(delta);
        self.offset = target.clamp(0, i64::from(self.max_offset())) as u32;
        self.offset != before
    }

    /// Settle on a snap point after a user scroll moving in direction `delta`
    pub fn snap(&mut self, delta: i32, now: Instant) {
        let height = u32::from(self.viewport_height);
        if height == 0 {
            return;
        }
        let panel = match delta.signum() {
            1 => self.offset.div_ceil(height),
            -1 => self.offset / height,
            _ => (self.offset + height / 2) / height,
        };
        self.scroll_to_smooth(panel * height, now);
    }

    /// Advance the running animation to `now`
    ///
    /// Returns true if the offset changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(anim) = self.animation else {
            return false;
        };
        let before = self.offset;
        let elapsed = now.saturating_duration_since(anim.started);
        let progress = elapsed.as_secs_f64() / SMOOTH_SCROLL_DURATION.as_secs_f64();
        if progress >= 1.0 {
            self.offset = anim.to;
            self.animation = None;
        } else {
            let eased = ease_in_out(progress);
            let from = f64::from(anim.from);
            let to = f64::from(anim.to);
            self.offset = (from + (to - from) * eased).round() as u32;
        }
        self.offset != before
    }
}

fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
