use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle events a tween can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TweenEvent {
    Update,
    Start,
    Stop,
    Restart,
    Pause,
    Resume,
    Complete,
    Kill,
    Reset,
}

impl TweenEvent {
    /// Get the name of this event
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Complete => "complete",
            Self::Kill => "kill",
            Self::Reset => "reset",
        }
    }
}

/// A registered lifecycle handler.
pub type Handler = Box<dyn FnMut()>;

/// One optional handler slot per lifecycle event.
///
/// An explicit struct rather than a keyed map keeps the event set statically
/// checked. Re-registering replaces the previous handler. The epoch counter
/// makes firing well-defined when a handler replaces or clears handlers
/// while it runs: a slot taken out for firing is only restored if nothing
/// mutated the set in between.
#[derive(Default)]
pub struct Callbacks {
    epoch: u64,
    update: Option<Handler>,
    start: Option<Handler>,
    stop: Option<Handler>,
    restart: Option<Handler>,
    pause: Option<Handler>,
    resume: Option<Handler>,
    complete: Option<Handler>,
    kill: Option<Handler>,
    reset: Option<Handler>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot_mut(&mut self, event: TweenEvent) -> &mut Option<Handler> {
        match event {
            TweenEvent::Update => &mut self.update,
            TweenEvent::Start => &mut self.start,
            TweenEvent::Stop => &mut self.stop,
            TweenEvent::Restart => &mut self.restart,
            TweenEvent::Pause => &mut self.pause,
            TweenEvent::Resume => &mut self.resume,
            TweenEvent::Complete => &mut self.complete,
            TweenEvent::Kill => &mut self.kill,
            TweenEvent::Reset => &mut self.reset,
        }
    }

    /// Register a handler, replacing any previous one for the event
    pub fn set(&mut self, event: TweenEvent, handler: Handler) {
        self.epoch += 1;
        *self.slot_mut(event) = Some(handler);
    }

    /// Remove the handler for one event
    pub fn clear(&mut self, event: TweenEvent) {
        self.epoch += 1;
        *self.slot_mut(event) = None;
    }

    /// Remove every registered handler
    pub fn clear_all(&mut self) {
        self.epoch += 1;
        self.update = None;
        self.start = None;
        self.stop = None;
        self.restart = None;
        self.pause = None;
        self.resume = None;
        self.complete = None;
        self.kill = None;
        self.reset = None;
    }

    pub fn is_set(&self, event: TweenEvent) -> bool {
        match event {
            TweenEvent::Update => self.update.is_some(),
            TweenEvent::Start => self.start.is_some(),
            TweenEvent::Stop => self.stop.is_some(),
            TweenEvent::Restart => self.restart.is_some(),
            TweenEvent::Pause => self.pause.is_some(),
            TweenEvent::Resume => self.resume.is_some(),
            TweenEvent::Complete => self.complete.is_some(),
            TweenEvent::Kill => self.kill.is_some(),
            TweenEvent::Reset => self.reset.is_some(),
        }
    }

    /// Take a handler out for firing, along with the epoch at take time
    pub(crate) fn take(&mut self, event: TweenEvent) -> (Option<Handler>, u64) {
        let epoch = self.epoch;
        (self.slot_mut(event).take(), epoch)
    }

    /// Put a fired handler back, unless the set changed while it ran
    pub(crate) fn restore(&mut self, event: TweenEvent, handler: Handler, epoch: u64) {
        if self.epoch == epoch {
            let slot = self.slot_mut(event);
            if slot.is_none() {
                *slot = Some(handler);
            }
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events = [
            TweenEvent::Update,
            TweenEvent::Start,
            TweenEvent::Stop,
            TweenEvent::Restart,
            TweenEvent::Pause,
            TweenEvent::Resume,
            TweenEvent::Complete,
            TweenEvent::Kill,
            TweenEvent::Reset,
        ];
        let registered: Vec<_> = events
            .iter()
            .filter(|e| self.is_set(**e))
            .map(|e| e.name())
            .collect();
        f.debug_struct("Callbacks")
            .field("registered", &registered)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn set_replaces_previous_handler() {
        let hits = Rc::new(Cell::new(0));
        let mut callbacks = Callbacks::new();

        let first = hits.clone();
        callbacks.set(TweenEvent::Start, Box::new(move || first.set(1)));
        let second = hits.clone();
        callbacks.set(TweenEvent::Start, Box::new(move || second.set(2)));

        let (handler, epoch) = callbacks.take(TweenEvent::Start);
        let mut handler = handler.unwrap();
        handler();
        callbacks.restore(TweenEvent::Start, handler, epoch);

        assert_eq!(hits.get(), 2);
        assert!(callbacks.is_set(TweenEvent::Start));
    }

    #[test]
    fn restore_is_skipped_after_clear_all() {
        let mut callbacks = Callbacks::new();
        callbacks.set(TweenEvent::Complete, Box::new(|| {}));

        let (handler, epoch) = callbacks.take(TweenEvent::Complete);
        callbacks.clear_all();
        callbacks.restore(TweenEvent::Complete, handler.unwrap(), epoch);

        assert!(!callbacks.is_set(TweenEvent::Complete));
    }

    #[test]
    fn restore_keeps_a_replacement_registered_mid_fire() {
        let mut callbacks = Callbacks::new();
        callbacks.set(TweenEvent::Update, Box::new(|| {}));

        let (old, epoch) = callbacks.take(TweenEvent::Update);
        callbacks.set(TweenEvent::Update, Box::new(|| {}));
        callbacks.restore(TweenEvent::Update, old.unwrap(), epoch);

        assert!(callbacks.is_set(TweenEvent::Update));
    }
}
