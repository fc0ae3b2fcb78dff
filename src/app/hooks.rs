use leptos::html;
use leptos::prelude::*;
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// One-shot latch for visibility-triggered entrances: reports `true` exactly
/// once, the first time the target intersects, no matter how often the
/// target scrolls in and out afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EntranceLatch {
    fired: bool,
}

impl EntranceLatch {
    /// Feeds one observation; returns whether the entrance should fire now.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.fired {
            self.fired = true;
            true
        } else {
            false
        }
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Margin pulling the trigger zone inside the viewport, so entrances start
/// once a section is meaningfully on screen.
const TRIGGER_MARGIN: &str = "-100px";

/// Signal that flips to `true` the first time `target` enters the
/// margin-adjusted viewport, and never changes again for this mount. The
/// observer is stopped after firing.
pub fn use_visible_once(target: NodeRef<html::Section>) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let latch = StoredValue::new(EntranceLatch::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            if latch
                .try_update_value(|latch| latch.observe(intersecting))
                .unwrap_or(false)
            {
                set_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default().root_margin(TRIGGER_MARGIN.to_string()),
    );

    Effect::new(move |_| {
        if visible.get() {
            stop();
        }
    });

    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_first_intersection() {
        let mut latch = EntranceLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.fired());
    }

    #[test]
    fn never_fires_again_across_scroll_flapping() {
        let mut latch = EntranceLatch::default();
        let mut fires = 0;
        for intersecting in [false, true, false, true, true, false, true] {
            if latch.observe(intersecting) {
                fires += 1;
            }
        }
        assert_eq!(fires, 1);
    }

    #[test]
    fn does_not_fire_while_never_visible() {
        let mut latch = EntranceLatch::default();
        for _ in 0..10 {
            assert!(!latch.observe(false));
        }
        assert!(!latch.fired());
    }
}
