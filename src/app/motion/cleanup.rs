use std::cell::RefCell;
use std::rc::Rc;

/// Registry of teardown actions for everything the motion layer starts:
/// event listeners, armed timers, and engine animations.
///
/// `run` drains the registry, so teardown is idempotent: a second call
/// finds nothing left to do.
#[derive(Clone, Default)]
pub struct CleanupRegistry {
    actions: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
}

impl CleanupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a teardown action to be invoked on `run`.
    pub fn defer(&self, action: impl FnOnce() + 'static) {
        self.actions.borrow_mut().push(Box::new(action));
    }

    /// Invokes and discards every registered action, oldest first.
    pub fn run(&self) {
        // take first so an action that registers more cleanup can't deadlock
        // the borrow
        let actions = std::mem::take(&mut *self.actions.borrow_mut());
        for action in actions {
            action();
        }
    }

    pub fn pending(&self) -> usize {
        self.actions.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn run_invokes_all_actions_in_order() {
        let registry = CleanupRegistry::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let log = log.clone();
            registry.defer(move || log.borrow_mut().push(i));
        }
        assert_eq!(registry.pending(), 3);
        registry.run();
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert_eq!(registry.pending(), 0);
    }

    #[test]
    fn run_is_idempotent() {
        let registry = CleanupRegistry::new();
        let count = Rc::new(Cell::new(0u32));
        {
            let count = count.clone();
            registry.defer(move || count.set(count.get() + 1));
        }
        registry.run();
        registry.run();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn action_registered_during_run_survives_for_next_run() {
        let registry = CleanupRegistry::new();
        let count = Rc::new(Cell::new(0u32));
        {
            let registry_inner = registry.clone();
            let count = count.clone();
            registry.defer(move || {
                let count = count.clone();
                registry_inner.defer(move || count.set(count.get() + 1));
            });
        }
        registry.run();
        assert_eq!(registry.pending(), 1);
        registry.run();
        assert_eq!(count.get(), 1);
    }
}
