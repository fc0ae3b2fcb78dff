//! Declarative entrance timelines.
//!
//! A section authors its choreography as data: a list of steps, each with an
//! offset from section-visible time, a target, and a cue. One scheduler
//! interprets the list, which makes relative ordering testable with a virtual
//! clock instead of real timers. Targets are generic so tests can use plain
//! labels where components use DOM element handles.

use super::intent::Intent;

/// What to do to a step's target when its offset elapses.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    /// Play one intent on the target.
    Play(Intent),
    /// Split the target's text into characters and play the intent on each,
    /// staggered.
    PlayChars { intent: Intent, stagger_ms: f64 },
    /// Play the intent on each child element of the target, staggered.
    PlayEach { intent: Intent, stagger_ms: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step<T> {
    pub at_ms: u32,
    pub target: T,
    pub cue: Cue,
}

/// Ordered list of authored steps. Offsets are relative to timeline start
/// (section-visible time), not to each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<T> {
    steps: Vec<Step<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(mut self, at_ms: u32, target: T, intent: Intent) -> Self {
        self.steps.push(Step {
            at_ms,
            target,
            cue: Cue::Play(intent),
        });
        self
    }

    pub fn play_chars(mut self, at_ms: u32, target: T, intent: Intent, stagger_ms: f64) -> Self {
        self.steps.push(Step {
            at_ms,
            target,
            cue: Cue::PlayChars { intent, stagger_ms },
        });
        self
    }

    pub fn play_each(mut self, at_ms: u32, target: T, intent: Intent, stagger_ms: f64) -> Self {
        self.steps.push(Step {
            at_ms,
            target,
            cue: Cue::PlayEach { intent, stagger_ms },
        });
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in firing order: by offset, authored order breaking ties.
    pub fn into_steps(self) -> Vec<Step<T>> {
        let mut steps = self.steps;
        steps.sort_by_key(|step| step.at_ms);
        steps
    }

    pub fn into_playback(self) -> Playback<T> {
        Playback {
            pending: self.into_steps(),
            cursor: 0,
        }
    }
}

/// Clock-driven view of a timeline: feed it the current time and it yields
/// the steps that are due, in firing order.
#[derive(Debug)]
pub struct Playback<T> {
    pending: Vec<Step<T>>,
    cursor: usize,
}

impl<T> Playback<T> {
    /// Advances the virtual clock to `now_ms`, returning every step whose
    /// offset has elapsed and has not fired yet.
    pub fn advance_to(&mut self, now_ms: u32) -> Vec<Step<T>>
    where
        T: Clone,
    {
        let mut fired = Vec::new();
        while self.cursor < self.pending.len() && self.pending[self.cursor].at_ms <= now_ms {
            fired.push(self.pending[self.cursor].clone());
            self.cursor += 1;
        }
        fired
    }

    pub fn remaining(&self) -> usize {
        self.pending.len() - self.cursor
    }

    pub fn next_due(&self) -> Option<u32> {
        self.pending.get(self.cursor).map(|step| step.at_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade() -> Intent {
        Intent::EntranceFade {
            rise_px: 40.0,
            duration_ms: 800.0,
            delay_ms: 0.0,
        }
    }

    fn pop() -> Intent {
        Intent::EntrancePop {
            duration_ms: 600.0,
            delay_ms: 0.0,
        }
    }

    #[test]
    fn steps_fire_in_offset_order_regardless_of_authoring_order() {
        let timeline = Timeline::new()
            .play(1000, "badge", pop())
            .play(0, "title", fade())
            .play(400, "tags", pop())
            .play(200, "cta", pop());
        let order: Vec<_> = timeline
            .into_steps()
            .into_iter()
            .map(|step| step.target)
            .collect();
        assert_eq!(order, vec!["title", "cta", "tags", "badge"]);
    }

    #[test]
    fn ties_preserve_authored_order() {
        let timeline = Timeline::new()
            .play(600, "subtitle", fade())
            .play(600, "decoration", fade());
        let order: Vec<_> = timeline
            .into_steps()
            .into_iter()
            .map(|step| step.target)
            .collect();
        assert_eq!(order, vec!["subtitle", "decoration"]);
    }

    #[test]
    fn virtual_clock_drains_only_due_steps() {
        let timeline = Timeline::new()
            .play(0, "a", fade())
            .play(200, "b", pop())
            .play(1000, "c", pop());
        let mut playback = timeline.into_playback();

        let first: Vec<_> = playback
            .advance_to(250)
            .into_iter()
            .map(|s| s.target)
            .collect();
        assert_eq!(first, vec!["a", "b"]);
        assert_eq!(playback.remaining(), 1);
        assert_eq!(playback.next_due(), Some(1000));

        // moving the clock backwards fires nothing
        assert!(playback.advance_to(100).is_empty());

        let last: Vec<_> = playback
            .advance_to(5000)
            .into_iter()
            .map(|s| s.target)
            .collect();
        assert_eq!(last, vec!["c"]);
        assert_eq!(playback.remaining(), 0);
        assert_eq!(playback.next_due(), None);
    }

    #[test]
    fn steps_fire_at_most_once() {
        let timeline = Timeline::new().play(100, "once", fade());
        let mut playback = timeline.into_playback();
        assert_eq!(playback.advance_to(100).len(), 1);
        assert!(playback.advance_to(100).is_empty());
        assert!(playback.advance_to(10_000).is_empty());
    }
}
