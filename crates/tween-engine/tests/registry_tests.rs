use std::cell::{Cell, RefCell};
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use tween_engine::{
    Directory, ManualClock, Property, Registry, Tween, TweenError, TweenEvent, TweenState, Value,
    ValueKind, MANUAL_CONTEXT, SHARED_CONTEXT,
};

#[derive(Debug, Default)]
struct Sprite {
    x: f64,
}

struct X;

impl Property<Sprite> for X {
    fn capture(&self, target: &Sprite) -> Result<Value, TweenError> {
        Ok(Value::Scalar(target.x))
    }

    fn apply(&self, target: &mut Sprite, value: &Value) -> Result<(), TweenError> {
        match value {
            Value::Scalar(v) => {
                target.x = *v;
                Ok(())
            }
            other => Err(TweenError::ValueMismatch {
                expected: ValueKind::Scalar,
                actual: other.kind(),
            }),
        }
    }
}

fn sprite() -> Rc<RefCell<Sprite>> {
    Rc::new(RefCell::new(Sprite::default()))
}

fn make_tween(registry: &Registry, target: &Rc<RefCell<Sprite>>, duration: f64) -> Tween<Sprite> {
    let tween = registry.tween_property(target, X, 10.0, duration);
    tween.set_auto_kill(false);
    tween
}

#[test]
fn creation_defers_the_start_to_the_next_tick() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = make_tween(&registry, &target, 1.0);

    assert_eq!(tween.state(), TweenState::New);
    assert_eq!(registry.queued_count(), 1);
    assert_eq!(registry.tracked_count(), 0);

    registry.tick(0.5);
    assert_eq!(tween.state(), TweenState::Active);
    assert_eq!(registry.queued_count(), 0);
    assert_eq!(registry.tracked_count(), 1);
}

#[test]
fn queue_deferral_holds_even_for_zero_duration() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = make_tween(&registry, &target, 0.0);

    assert_eq!(tween.state(), TweenState::New);
    registry.tick(0.1);
    assert_eq!(tween.state(), TweenState::Completed);
    assert_abs_diff_eq!(target.borrow().x, 10.0, epsilon = 1e-6);
}

#[test]
fn configuration_after_creation_is_honored_on_the_first_tick() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = make_tween(&registry, &target, 1.0);

    // Everything configured between creation and the next tick applies
    // before the first state transition.
    tween.set_delay(5.0);
    tween.set_reversed(true);

    registry.tick(0.1);
    assert_eq!(tween.state(), TweenState::Delayed);
    assert_abs_diff_eq!(target.borrow().x, 0.0, epsilon = 1e-6);
}

#[test]
fn tick_updates_tracked_tweens_in_insertion_order() {
    let registry = Registry::new("test");
    let order: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));

    for index in 0..3 {
        let target = sprite();
        let tween = make_tween(&registry, &target, 10.0);
        let order = order.clone();
        tween.on(TweenEvent::Update, move || order.borrow_mut().push(index));
    }

    registry.tick(0.1);
    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn kill_all_empties_the_registry_and_fires_each_kill_once() {
    let registry = Registry::new("test");
    let kills = Rc::new(Cell::new(0));

    let mut tweens = Vec::new();
    for _ in 0..2 {
        let target = sprite();
        let tween = make_tween(&registry, &target, 1.0);
        let kills = kills.clone();
        tween.on(TweenEvent::Kill, move || kills.set(kills.get() + 1));
        tweens.push(tween);
    }
    registry.tick(0.1); // two tracked

    let target = sprite();
    let queued = make_tween(&registry, &target, 1.0);
    {
        let kills = kills.clone();
        queued.on(TweenEvent::Kill, move || kills.set(kills.get() + 1));
    }
    assert_eq!(registry.queued_count(), 1);

    registry.kill_all();
    assert_eq!(registry.tracked_count(), 0);
    assert_eq!(registry.queued_count(), 0);
    assert_eq!(kills.get(), 3);
    for tween in &tweens {
        assert_eq!(tween.state(), TweenState::Killed);
    }
    assert_eq!(queued.state(), TweenState::Killed);

    // Killing again is a no-op; the counter stays put.
    registry.kill_all();
    assert_eq!(kills.get(), 3);
}

#[test]
fn auto_kill_removes_a_completed_tween_from_its_registry() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = registry.tween_property(&target, X, 10.0, 0.5);
    assert!(tween.auto_kill());

    registry.tick(0.3);
    assert_eq!(registry.tracked_count(), 1);
    registry.tick(0.3);
    assert_eq!(tween.state(), TweenState::Killed);
    assert_eq!(registry.tracked_count(), 0);
    assert_abs_diff_eq!(target.borrow().x, 10.0, epsilon = 1e-6);
}

#[test]
fn without_auto_kill_a_completed_tween_stays_tracked() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = make_tween(&registry, &target, 0.5);

    registry.tick(0.3);
    registry.tick(0.3);
    assert_eq!(tween.state(), TweenState::Completed);
    assert_eq!(registry.tracked_count(), 1);

    tween.kill();
    assert_eq!(registry.tracked_count(), 0);
}

#[test]
fn add_and_remove_are_idempotent() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = Tween::new(&target, 1.0);
    tween.add_property(X, 10.0);

    registry.add(&tween);
    registry.add(&tween);
    assert_eq!(registry.queued_count(), 1);

    registry.remove(&tween);
    registry.remove(&tween);
    assert_eq!(registry.queued_count(), 0);
    assert_eq!(registry.tracked_count(), 0);
}

#[test]
fn a_complete_handler_may_spawn_into_the_same_registry_mid_tick() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = make_tween(&registry, &target, 0.5);

    {
        let registry = registry.clone();
        let target = target.clone();
        tween.on(TweenEvent::Complete, move || {
            let spawned = registry.tween_property(&target, X, 20.0, 1.0);
            spawned.set_auto_kill(false);
        });
    }

    registry.tick(0.1);
    registry.tick(0.5); // completes; handler enqueues a successor
    assert_eq!(registry.queued_count(), 1);

    registry.tick(0.1);
    assert_eq!(registry.queued_count(), 0);
    assert_eq!(registry.tracked_count(), 2);
}

#[test]
fn an_update_handler_may_kill_another_tween_mid_tick() {
    let registry = Registry::new("test");
    let target_a = sprite();
    let target_b = sprite();

    let killer = make_tween(&registry, &target_a, 10.0);
    let victim = make_tween(&registry, &target_b, 10.0);
    {
        let victim = victim.clone();
        killer.on(TweenEvent::Update, move || {
            victim.kill();
        });
    }

    registry.tick(0.1);
    assert_eq!(victim.state(), TweenState::Killed);
    assert_eq!(killer.state(), TweenState::Active);
    assert_eq!(registry.tracked_count(), 1);
    // The victim was captured at start but never advanced past its kill.
    assert_abs_diff_eq!(target_b.borrow().x, 0.0, epsilon = 1e-6);
}

#[test]
fn bulk_operations_touch_every_tracked_tween() {
    let registry = Registry::new("test");
    let targets: Vec<_> = (0..3).map(|_| sprite()).collect();
    let tweens: Vec<_> = targets
        .iter()
        .map(|target| make_tween(&registry, target, 1.0))
        .collect();

    registry.tick(0.1);
    for tween in &tweens {
        assert_eq!(tween.state(), TweenState::Active);
    }

    registry.pause_all();
    for tween in &tweens {
        assert_eq!(tween.state(), TweenState::Paused);
    }

    registry.resume_all();
    for tween in &tweens {
        assert_eq!(tween.state(), TweenState::Active);
    }

    registry.stop_all();
    for tween in &tweens {
        assert_eq!(tween.state(), TweenState::Inactive);
    }

    registry.start_all();
    for tween in &tweens {
        assert_eq!(tween.state(), TweenState::Active);
    }

    registry.complete_all();
    for (tween, target) in tweens.iter().zip(&targets) {
        assert_eq!(tween.state(), TweenState::Completed);
        assert_abs_diff_eq!(target.borrow().x, 10.0, epsilon = 1e-6);
    }

    registry.restart_all();
    for tween in &tweens {
        assert_eq!(tween.state(), TweenState::Active);
    }
}

#[test]
fn reset_requeues_a_killed_tween_with_its_registry() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = make_tween(&registry, &target, 1.0);

    registry.tick(0.1);
    tween.kill();
    assert_eq!(registry.tracked_count(), 0);

    tween.reset();
    assert_eq!(tween.state(), TweenState::New);
    assert_eq!(registry.queued_count(), 1);

    // Revived tweens restart through the normal one-tick deferral. The
    // reset cleared the property pairs but kept the property list.
    tween.set_auto_kill(false);
    registry.tick(0.1);
    assert_eq!(tween.state(), TweenState::Active);
    tween.update(0.4); // tick already advanced 0.1
    assert_abs_diff_eq!(target.borrow().x, 5.0, epsilon = 1e-6);
}

#[test]
fn registries_are_independent() {
    let ui = Registry::new("ui");
    let world = Registry::new("world");
    let target_ui = sprite();
    let target_world = sprite();

    let tween_ui = make_tween(&ui, &target_ui, 1.0);
    let tween_world = make_tween(&world, &target_world, 1.0);

    ui.tick(0.5);
    assert_eq!(tween_ui.state(), TweenState::Active);
    assert_eq!(tween_world.state(), TweenState::New);

    world.tick(0.5);
    ui.kill_all();
    assert_eq!(tween_ui.state(), TweenState::Killed);
    assert_eq!(tween_world.state(), TweenState::Active);
}

#[test]
fn directory_contexts_are_created_on_first_use_and_shared_by_name() {
    let mut directory = Directory::new();
    let target = sprite();

    let ui = directory.context("ui");
    let tween = make_tween(&ui, &target, 1.0);
    assert_eq!(directory.context("ui").queued_count(), 1);
    assert_eq!(directory.context_count(), 1);

    assert_eq!(directory.shared().name(), SHARED_CONTEXT);
    assert_eq!(directory.manual().name(), MANUAL_CONTEXT);
    assert_eq!(directory.context_count(), 3);

    directory.tick_all(0.1);
    assert_eq!(tween.state(), TweenState::Active);
}

#[test]
fn the_manual_context_is_never_auto_ticked() {
    let mut directory = Directory::new();
    let target = sprite();

    let manual = directory.manual();
    let tween = make_tween(&manual, &target, 1.0);

    directory.tick_all(0.5);
    directory.tick_all(0.5);
    assert_eq!(tween.state(), TweenState::New);
    assert_eq!(manual.queued_count(), 1);

    manual.tick(0.5);
    assert_eq!(tween.state(), TweenState::Active);
}

#[test]
fn pump_reads_the_attached_clock() {
    let registry = Registry::new("test");
    let target = sprite();
    let tween = make_tween(&registry, &target, 1.0);

    assert!(!registry.pump()); // no clock attached yet

    let clock = ManualClock::new();
    registry.attach_clock(clock.clone());

    clock.advance(0.5);
    assert!(registry.pump());
    assert_eq!(tween.state(), TweenState::Active);
    assert_abs_diff_eq!(target.borrow().x, 5.0, epsilon = 1e-6);

    clock.advance(0.5);
    assert!(registry.pump());
    assert_eq!(tween.state(), TweenState::Completed);
    assert_abs_diff_eq!(target.borrow().x, 10.0, epsilon = 1e-6);
}
