//! The per-animation state machine.
//!
//! A [`Tween`] is a cheap-clone handle over shared single-threaded state.
//! Every guarded operation returns a success flag; calling one from a state
//! where its guard fails is a no-op that returns `false`. Lifecycle handlers
//! always fire with no internal borrows held, so a handler may re-enter the
//! tween or its registry.

pub mod callbacks;
pub mod state;

pub use callbacks::{Callbacks, Handler, TweenEvent};
pub use state::TweenState;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::easing::Ease;
use crate::property::{InterpolationPair, Property};
use crate::registry::{self, Registry, RegistryShared};
use crate::time::{Timer, TweenTime};
use crate::value::Value;

/// One animated property: its adapter, the configured end value, and the
/// pair captured at the most recent (re)start.
struct TrackedProperty<T> {
    property: Box<dyn Property<T>>,
    end: Value,
    pair: Option<InterpolationPair>,
}

struct TweenInner<T> {
    /// Shared, not owned; the engine only reads/writes declared properties.
    target: Rc<RefCell<T>>,
    properties: Vec<TrackedProperty<T>>,
    ease: Ease,
    duration: TweenTime,
    delay: TweenTime,
    reversed: bool,
    auto_kill: bool,
    time_scale: f64,
    state: TweenState,
    delay_elapsed: TweenTime,
    timer: Timer,
    callbacks: Callbacks,
    registry: Weak<RefCell<RegistryShared>>,
}

impl<T> TweenInner<T> {
    /// Capture the interpolation pair for every property, swapping start and
    /// end when reversed. A failed capture drops the property for this run.
    fn capture_pairs(&mut self) {
        let target = self.target.borrow();
        for tracked in &mut self.properties {
            match tracked.property.capture(&target) {
                Ok(current) => {
                    let pair = InterpolationPair::new(current, tracked.end);
                    tracked.pair = Some(if self.reversed { pair.reversed() } else { pair });
                }
                Err(err) => {
                    log::warn!("capture failed, property skipped for this run: {}", err);
                    tracked.pair = None;
                }
            }
        }
    }

    /// Recompute every captured property at `elapsed` and write it to the
    /// target. One bad property never aborts the rest of the batch.
    fn apply_at(&mut self, elapsed: TweenTime) {
        let ease = self.ease;
        let duration = self.duration;
        let mut target = self.target.borrow_mut();
        for tracked in &mut self.properties {
            let pair = match &tracked.pair {
                Some(pair) => pair,
                None => continue,
            };
            match tracked
                .property
                .combine(&pair.start, &pair.end, ease, elapsed, duration)
            {
                Ok(value) => {
                    if let Err(err) = tracked.property.apply(&mut target, &value) {
                        log::warn!("apply failed, property update skipped: {}", err);
                    }
                }
                Err(err) => {
                    log::warn!("combine failed, property update skipped: {}", err);
                }
            }
        }
    }

    /// The capture step of `start`: runs immediately when there is no delay,
    /// or on the tick that crosses the delay boundary.
    fn activate(&mut self) {
        self.capture_pairs();
        self.state = TweenState::Active;
        if self.reversed {
            // The target visibly starts at the configured end value.
            self.apply_at(TweenTime::zero());
        }
    }

    /// Stop side effects, shared by `stop` and `restart`.
    fn halt(&mut self) {
        self.timer.stop();
        self.timer.reset();
        self.delay_elapsed = TweenTime::zero();
        self.state = TweenState::Inactive;
    }
}

/// Handle to one animation. Clones refer to the same animation.
pub struct Tween<T> {
    inner: Rc<RefCell<TweenInner<T>>>,
}

impl<T> Clone for Tween<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Tween<T> {
    /// Create a standalone tween over a shared target.
    ///
    /// The tween belongs to no registry until adopted via
    /// [`Registry::add`] or created through [`Registry::tween`].
    pub fn new(target: &Rc<RefCell<T>>, duration: impl Into<TweenTime>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(TweenInner {
                target: Rc::clone(target),
                properties: Vec::new(),
                ease: Ease::default(),
                duration: duration.into(),
                delay: TweenTime::zero(),
                reversed: false,
                auto_kill: true,
                time_scale: 1.0,
                state: TweenState::New,
                delay_elapsed: TweenTime::zero(),
                timer: Timer::new(),
                callbacks: Callbacks::new(),
                registry: Weak::new(),
            })),
        }
    }

    /// Animate one property of the target toward `to`.
    ///
    /// Properties update in the order they were added. The start value is
    /// captured from the target when the tween (re)starts.
    pub fn add_property(&self, property: impl Property<T> + 'static, to: impl Into<Value>) {
        self.inner.borrow_mut().properties.push(TrackedProperty {
            property: Box::new(property),
            end: to.into(),
            pair: None,
        });
    }

    /// Register a lifecycle handler, replacing any previous one for the
    /// event. `reset` clears every registered handler.
    pub fn on(&self, event: TweenEvent, handler: impl FnMut() + 'static) {
        self.inner
            .borrow_mut()
            .callbacks
            .set(event, Box::new(handler));
    }

    /// Remove the handler for one event
    pub fn clear_callback(&self, event: TweenEvent) {
        self.inner.borrow_mut().callbacks.clear(event);
    }

    pub fn set_ease(&self, ease: Ease) {
        self.inner.borrow_mut().ease = ease;
    }

    pub fn ease(&self) -> Ease {
        self.inner.borrow().ease
    }

    /// Change the duration. An already-active tween picks the new duration
    /// up on its very next update, since progress is recomputed from
    /// elapsed/duration every tick.
    pub fn set_duration(&self, duration: impl Into<TweenTime>) {
        self.inner.borrow_mut().duration = duration.into();
    }

    pub fn duration(&self) -> TweenTime {
        self.inner.borrow().duration
    }

    /// Change the delay. Observed at the next `start`.
    pub fn set_delay(&self, delay: impl Into<TweenTime>) {
        self.inner.borrow_mut().delay = delay.into();
    }

    pub fn delay(&self) -> TweenTime {
        self.inner.borrow().delay
    }

    /// Swap the captured start/end pair at the next capture.
    pub fn set_reversed(&self, reversed: bool) {
        self.inner.borrow_mut().reversed = reversed;
    }

    pub fn is_reversed(&self) -> bool {
        self.inner.borrow().reversed
    }

    /// Whether `complete` immediately kills the tween.
    pub fn set_auto_kill(&self, auto_kill: bool) {
        self.inner.borrow_mut().auto_kill = auto_kill;
    }

    pub fn auto_kill(&self) -> bool {
        self.inner.borrow().auto_kill
    }

    /// Scale the delta this tween consumes each tick. Clamped to
    /// non-negative; zero freezes the tween without pausing it.
    pub fn set_time_scale(&self, time_scale: f64) {
        self.inner.borrow_mut().time_scale = time_scale.max(0.0);
    }

    pub fn time_scale(&self) -> f64 {
        self.inner.borrow().time_scale
    }

    pub fn state(&self) -> TweenState {
        self.inner.borrow().state
    }

    /// Accumulated active time
    pub fn elapsed(&self) -> TweenTime {
        self.inner.borrow().timer.elapsed()
    }

    /// Progress in `0.0..=1.0`; zero-duration tweens report 0 until
    /// completed.
    pub fn progress(&self) -> f64 {
        let inner = self.inner.borrow();
        if inner.duration.is_zero() {
            return if inner.state == TweenState::Completed {
                1.0
            } else {
                0.0
            };
        }
        (inner.timer.elapsed().as_seconds() / inner.duration.as_seconds()).clamp(0.0, 1.0)
    }

    /// Begin playing. Valid from `new` and `inactive`.
    ///
    /// With a pending delay the tween parks in `delayed` and captures its
    /// pairs on the tick that crosses the boundary; otherwise pairs are
    /// captured now.
    pub fn start(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.can_start() {
                return false;
            }
            inner.timer.reset();
            inner.timer.start();
            inner.delay_elapsed = TweenTime::zero();
            if inner.delay.is_zero() {
                inner.activate();
            } else {
                inner.state = TweenState::Delayed;
            }
        }
        self.fire(TweenEvent::Start);
        true
    }

    /// Stop and rewind. Valid from `active`, `paused`, and `delayed`.
    pub fn stop(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.can_stop() {
                return false;
            }
            inner.halt();
        }
        self.fire(TweenEvent::Stop);
        true
    }

    /// Stop, then start again from a fresh capture. Valid from `active`,
    /// `paused`, and `completed`.
    pub fn restart(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.can_restart() {
                return false;
            }
            inner.halt();
        }
        self.fire(TweenEvent::Stop);
        self.fire(TweenEvent::Restart);
        self.start();
        true
    }

    /// Freeze mid-flight. Valid from `active`.
    pub fn pause(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.can_pause() {
                return false;
            }
            inner.timer.stop();
            inner.state = TweenState::Paused;
        }
        self.fire(TweenEvent::Pause);
        true
    }

    /// Continue after a pause. Valid from `paused`; lands back in `delayed`
    /// when the configured delay has not fully elapsed.
    pub fn resume(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.can_resume() {
                return false;
            }
            inner.timer.start();
            inner.state = if inner.delay_elapsed < inner.delay {
                TweenState::Delayed
            } else {
                TweenState::Active
            };
        }
        self.fire(TweenEvent::Resume);
        true
    }

    /// Jump to the end. Valid from `active` and `paused`.
    ///
    /// Forces elapsed time to the full duration, applies the final property
    /// values, and immediately kills when auto-kill is enabled.
    pub fn complete(&self) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.can_complete() {
                return false;
            }
            inner.timer.stop();
            let duration = inner.duration;
            inner.timer.set(duration);
            inner.apply_at(duration);
            inner.state = TweenState::Completed;
        }
        self.fire(TweenEvent::Complete);
        if self.inner.borrow().auto_kill {
            self.kill();
        }
        true
    }

    /// Remove from the registry and terminate. Valid from any state except
    /// `killed`. Immediate and synchronous.
    pub fn kill(&self) -> bool {
        let registry = {
            let mut inner = self.inner.borrow_mut();
            if !inner.state.can_kill() {
                return false;
            }
            inner.timer.stop();
            inner.state = TweenState::Killed;
            inner.registry.upgrade()
        };
        if let Some(shared) = registry {
            registry::detach(&shared, self.addr());
        }
        self.fire(TweenEvent::Kill);
        true
    }

    /// Revive to a blank `new` state.
    ///
    /// Clears captured pairs, the reversed flag, ease, and delay; re-queues
    /// the tween with its registry so it restarts through the normal
    /// one-tick deferral; fires the reset handler and then clears every
    /// registered handler.
    pub fn reset(&self) -> bool {
        let registry = {
            let mut inner = self.inner.borrow_mut();
            for tracked in &mut inner.properties {
                tracked.pair = None;
            }
            inner.reversed = false;
            inner.ease = Ease::default();
            inner.delay = TweenTime::zero();
            inner.delay_elapsed = TweenTime::zero();
            inner.timer.stop();
            inner.timer.reset();
            inner.state = TweenState::New;
            inner.registry.upgrade()
        };
        if let Some(shared) = registry {
            registry::requeue(&shared, Box::new(self.clone()));
        }
        self.fire(TweenEvent::Reset);
        self.inner.borrow_mut().callbacks.clear_all();
        true
    }

    /// Advance by a clock delta. Only `active` and `delayed` tweens consume
    /// time; any other state returns `false`.
    pub fn update(&self, delta: impl Into<TweenTime>) -> bool {
        let delta = delta.into();
        let mut fire_update = false;
        let mut run_complete = false;
        {
            let mut inner = self.inner.borrow_mut();
            let scaled = delta.scale(inner.time_scale);
            match inner.state {
                TweenState::Delayed => {
                    inner.delay_elapsed += scaled;
                    if inner.delay_elapsed >= inner.delay {
                        // Excess beyond the boundary is discarded; the first
                        // interpolated frame lands on the next tick.
                        inner.activate();
                    }
                }
                TweenState::Active => {
                    inner.timer.advance(scaled);
                    let elapsed = inner.timer.elapsed();
                    let clamped = elapsed.clamp(TweenTime::zero(), inner.duration);
                    inner.apply_at(clamped);
                    fire_update = true;
                    run_complete = elapsed >= inner.duration;
                }
                _ => return false,
            }
        }
        if fire_update {
            self.fire(TweenEvent::Update);
        }
        if run_complete {
            self.complete();
        }
        true
    }

    /// Stable identity of the underlying animation, shared by all clones.
    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }

    pub(crate) fn attach(&self, registry: &Registry) {
        self.inner.borrow_mut().registry = Rc::downgrade(registry.shared());
    }

    /// Fire one lifecycle handler with no internal borrows held.
    fn fire(&self, event: TweenEvent) {
        let (handler, epoch) = self.inner.borrow_mut().callbacks.take(event);
        if let Some(mut handler) = handler {
            handler();
            self.inner
                .borrow_mut()
                .callbacks
                .restore(event, handler, epoch);
        }
    }
}

/// Object-safe view of a tween, letting a registry track animations over
/// heterogeneous target types.
pub trait TweenHandle {
    fn start(&self) -> bool;
    fn stop(&self) -> bool;
    fn restart(&self) -> bool;
    fn pause(&self) -> bool;
    fn resume(&self) -> bool;
    fn complete(&self) -> bool;
    fn kill(&self) -> bool;
    fn reset(&self) -> bool;
    fn update(&self, delta: TweenTime) -> bool;
    fn state(&self) -> TweenState;
    /// Stable identity shared by every clone of the same tween
    fn addr(&self) -> usize;
    fn boxed(&self) -> Box<dyn TweenHandle>;
}

impl<T: 'static> TweenHandle for Tween<T> {
    fn start(&self) -> bool {
        Tween::start(self)
    }

    fn stop(&self) -> bool {
        Tween::stop(self)
    }

    fn restart(&self) -> bool {
        Tween::restart(self)
    }

    fn pause(&self) -> bool {
        Tween::pause(self)
    }

    fn resume(&self) -> bool {
        Tween::resume(self)
    }

    fn complete(&self) -> bool {
        Tween::complete(self)
    }

    fn kill(&self) -> bool {
        Tween::kill(self)
    }

    fn reset(&self) -> bool {
        Tween::reset(self)
    }

    fn update(&self, delta: TweenTime) -> bool {
        Tween::update(self, delta)
    }

    fn state(&self) -> TweenState {
        Tween::state(self)
    }

    fn addr(&self) -> usize {
        Tween::addr(self)
    }

    fn boxed(&self) -> Box<dyn TweenHandle> {
        Box::new(self.clone())
    }
}
