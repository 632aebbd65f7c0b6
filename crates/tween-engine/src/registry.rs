//! Scheduler/registry: tracks live tweens for a named context, fans clock
//! ticks out to them, and offers bulk lifecycle operations. The `Directory`
//! is the process-wide named-instance map.
//!
//! A tween created through a registry is queued and started on the *next*
//! tick, so every configuration call made right after creation is applied
//! before the first state transition. Tick iteration works on a snapshot of
//! the tracked list: a lifecycle handler may create or kill tweens in the
//! same registry mid-tick without entries being skipped or visited twice.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::clock::Clock;
use crate::property::Property;
use crate::time::TweenTime;
use crate::tween::{Tween, TweenHandle};
use crate::value::Value;

/// Name of the distinguished shared context.
pub const SHARED_CONTEXT: &str = "shared";

/// Name of the context `Directory::tick_all` never advances; it is fully
/// caller-driven.
pub const MANUAL_CONTEXT: &str = "manual";

pub(crate) struct RegistryShared {
    name: String,
    /// Insertion order is update order.
    tracked: Vec<Box<dyn TweenHandle>>,
    /// Created this tick, started on the next.
    queued: Vec<Box<dyn TweenHandle>>,
    clock: Option<Box<dyn Clock>>,
}

/// Remove a tween from both collections by identity. Idempotent.
pub(crate) fn detach(shared: &Rc<RefCell<RegistryShared>>, addr: usize) {
    let mut inner = shared.borrow_mut();
    inner.tracked.retain(|handle| handle.addr() != addr);
    inner.queued.retain(|handle| handle.addr() != addr);
}

/// Move a revived tween back onto the queue so it restarts through the
/// normal one-tick deferral.
pub(crate) fn requeue(shared: &Rc<RefCell<RegistryShared>>, handle: Box<dyn TweenHandle>) {
    let mut inner = shared.borrow_mut();
    let addr = handle.addr();
    inner.tracked.retain(|tracked| tracked.addr() != addr);
    if !inner.queued.iter().any(|queued| queued.addr() == addr) {
        inner.queued.push(handle);
    }
}

/// Handle to one named scheduler context. Clones refer to the same context.
#[derive(Clone)]
pub struct Registry {
    shared: Rc<RefCell<RegistryShared>>,
}

impl Registry {
    /// Create a standalone registry. Contexts obtained through a
    /// [`Directory`] are created the same way, keyed by name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shared: Rc::new(RefCell::new(RegistryShared {
                name: name.into(),
                tracked: Vec::new(),
                queued: Vec::new(),
                clock: None,
            })),
        }
    }

    pub fn name(&self) -> String {
        self.shared.borrow().name.clone()
    }

    pub(crate) fn shared(&self) -> &Rc<RefCell<RegistryShared>> {
        &self.shared
    }

    /// Create a tween over `target`, queue it to start on the next tick, and
    /// return its handle for configuration.
    pub fn tween<T: 'static>(
        &self,
        target: &Rc<RefCell<T>>,
        duration: impl Into<TweenTime>,
    ) -> Tween<T> {
        let tween = Tween::new(target, duration);
        self.add(&tween);
        tween
    }

    /// Convenience for the common single-property case.
    pub fn tween_property<T: 'static>(
        &self,
        target: &Rc<RefCell<T>>,
        property: impl Property<T> + 'static,
        to: impl Into<Value>,
        duration: impl Into<TweenTime>,
    ) -> Tween<T> {
        let tween = self.tween(target, duration);
        tween.add_property(property, to);
        tween
    }

    /// Adopt a tween into this context. Idempotent: adding an
    /// already-tracked or already-queued tween is a no-op.
    pub fn add<T: 'static>(&self, tween: &Tween<T>) {
        let addr = TweenHandle::addr(tween);
        {
            let inner = self.shared.borrow();
            if inner.tracked.iter().any(|h| h.addr() == addr)
                || inner.queued.iter().any(|h| h.addr() == addr)
            {
                return;
            }
        }
        tween.attach(self);
        self.shared.borrow_mut().queued.push(tween.boxed());
    }

    /// Drop a tween from this context without killing it. Idempotent.
    pub fn remove<T: 'static>(&self, tween: &Tween<T>) {
        detach(&self.shared, TweenHandle::addr(tween));
    }

    pub fn tracked_count(&self) -> usize {
        self.shared.borrow().tracked.len()
    }

    pub fn queued_count(&self) -> usize {
        self.shared.borrow().queued.len()
    }

    /// Deliver a clock delta: start everything queued on a previous tick,
    /// then advance every tracked tween in insertion order.
    pub fn tick(&self, delta: impl Into<TweenTime>) {
        let delta = delta.into();

        let queued: Vec<Box<dyn TweenHandle>> =
            self.shared.borrow_mut().queued.drain(..).collect();
        for handle in queued {
            // Track before starting so a kill fired from the start handler
            // can remove the tween again.
            self.shared.borrow_mut().tracked.push(handle.boxed());
            handle.start();
        }

        let snapshot: Vec<Box<dyn TweenHandle>> = self
            .shared
            .borrow()
            .tracked
            .iter()
            .map(|handle| handle.boxed())
            .collect();
        for handle in snapshot {
            // A tween killed earlier in this same tick no-ops here.
            handle.update(delta);
        }
    }

    /// Attach the clock that `pump` reads. Registered once per registry;
    /// attaching again replaces the previous clock.
    pub fn attach_clock(&self, clock: impl Clock + 'static) {
        self.shared.borrow_mut().clock = Some(Box::new(clock));
    }

    /// Tick with the delta reported by the attached clock. Returns `false`
    /// when no clock is attached.
    pub fn pump(&self) -> bool {
        let delta = {
            let mut inner = self.shared.borrow_mut();
            match inner.clock.as_mut() {
                Some(clock) => clock.delta_seconds(),
                None => return false,
            }
        };
        self.tick(delta);
        true
    }

    fn snapshot(&self) -> Vec<Box<dyn TweenHandle>> {
        self.shared
            .borrow()
            .tracked
            .iter()
            .map(|handle| handle.boxed())
            .collect()
    }

    pub fn start_all(&self) {
        for handle in self.snapshot() {
            handle.start();
        }
    }

    pub fn stop_all(&self) {
        for handle in self.snapshot() {
            handle.stop();
        }
    }

    pub fn pause_all(&self) {
        for handle in self.snapshot() {
            handle.pause();
        }
    }

    pub fn resume_all(&self) {
        for handle in self.snapshot() {
            handle.resume();
        }
    }

    pub fn complete_all(&self) {
        for handle in self.snapshot() {
            handle.complete();
        }
    }

    pub fn restart_all(&self) {
        for handle in self.snapshot() {
            handle.restart();
        }
    }

    /// Kill every tracked tween in order, then every queued one. Leaves the
    /// context empty; each tween fires its kill handler exactly once.
    pub fn kill_all(&self) {
        let tracked = self.snapshot();
        let queued: Vec<Box<dyn TweenHandle>> =
            self.shared.borrow_mut().queued.drain(..).collect();
        for handle in tracked {
            handle.kill();
        }
        for handle in queued {
            handle.kill();
        }
    }
}

/// Process-wide directory of named scheduler contexts.
///
/// Contexts are created on first reference to their name and persist for
/// process lifetime; there is no teardown. The `"shared"` context is the
/// conventional default; the `"manual"` context is never advanced by
/// `tick_all` and must be ticked by its owner.
#[derive(Default)]
pub struct Directory {
    contexts: HashMap<String, Registry>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the context with the given name.
    pub fn context(&mut self, name: impl Into<String>) -> Registry {
        let name = name.into();
        self.contexts
            .entry(name.clone())
            .or_insert_with(|| Registry::new(name))
            .clone()
    }

    /// The distinguished shared context.
    pub fn shared(&mut self) -> Registry {
        self.context(SHARED_CONTEXT)
    }

    /// The caller-driven context `tick_all` never touches.
    pub fn manual(&mut self) -> Registry {
        self.context(MANUAL_CONTEXT)
    }

    pub fn context_names(&self) -> Vec<String> {
        self.contexts.keys().cloned().collect()
    }

    pub fn context_count(&self) -> usize {
        self.contexts.len()
    }

    /// Fan one clock delta out to every context except `"manual"`.
    /// Registries are independent; relative order between contexts is
    /// unspecified.
    pub fn tick_all(&self, delta: impl Into<TweenTime>) {
        let delta = delta.into();
        for (name, registry) in &self.contexts {
            if name != MANUAL_CONTEXT {
                registry.tick(delta);
            }
        }
    }
}
