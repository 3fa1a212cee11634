//! Deferred one-shot callbacks keyed by owner and purpose.
//!
//! The [`Scheduler`] resource replaces ad-hoc timers. Each entry is keyed by
//! a [`ScheduleKey`] (`owner` entity plus a [`Purpose`]) and fires once after
//! a number of frames. Scheduling again under the same key cancels the
//! pending entry and registers the new one (last write wins), which is what
//! keeps reloads, ability resets and action replenishment from doubling up.
//!
//! # Frame flow
//!
//! 1. Any system or command calls [`Scheduler::schedule`]
//! 2. Once per frame, [`fire_scheduled_callbacks`] calls [`Scheduler::tick`]
//! 3. `tick` decrements every entry and hands back those reaching zero, in
//!    registration order
//! 4. The callbacks run with exclusive `&mut World` access
//!
//! A callback registered with a delay of `n` frames fires on the `n`-th tick
//! after registration, counting the tick of the frame it was registered in.
//!
//! [`fire_scheduled_callbacks`]: crate::systems::scheduler::fire_scheduled_callbacks

use bevy_ecs::prelude::{Entity, Resource, World};
use log::trace;

use crate::resources::worldtime::{DEFAULT_FPS, seconds_to_frames};

pub type Callback = Box<dyn FnOnce(&mut World) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Purpose {
    /// Lifespan ran out.
    Expire,
    /// Active ability wears off and the baseline is restored.
    AbilityReset,
    /// Cooldown over, action points come back.
    ReplenishActions,
    /// Weapon ready to fire again.
    Reload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleKey {
    pub owner: Entity,
    pub purpose: Purpose,
}

impl ScheduleKey {
    pub fn new(owner: Entity, purpose: Purpose) -> Self {
        Self { owner, purpose }
    }
}

struct Pending {
    key: ScheduleKey,
    remaining: u32,
    callback: Callback,
}

#[derive(Resource)]
pub struct Scheduler {
    fps: u32,
    pending: Vec<Pending>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl Scheduler {
    pub fn new(fps: u32) -> Self {
        Self {
            fps: fps.max(1),
            pending: Vec::new(),
        }
    }

    /// Register `callback` to fire after `delay_seconds` of simulated time.
    /// Delays shorter than one frame fire on the next tick.
    pub fn schedule<F>(&mut self, key: ScheduleKey, delay_seconds: f32, callback: F)
    where
        F: FnOnce(&mut World) + Send + Sync + 'static,
    {
        let frames = seconds_to_frames(delay_seconds, self.fps).max(1);
        self.schedule_frames(key, frames, callback);
    }

    pub fn schedule_frames<F>(&mut self, key: ScheduleKey, frames: u32, callback: F)
    where
        F: FnOnce(&mut World) + Send + Sync + 'static,
    {
        if self.cancel(key) {
            trace!("Replacing pending callback {:?}", key);
        }
        self.pending.push(Pending {
            key,
            remaining: frames.max(1),
            callback: Box::new(callback),
        });
    }

    /// Drop the pending entry for `key`. Returns whether one existed.
    pub fn cancel(&mut self, key: ScheduleKey) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.key != key);
        self.pending.len() != before
    }

    /// Drop every pending entry owned by `owner`.
    pub fn cancel_owner(&mut self, owner: Entity) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.key.owner != owner);
        before - self.pending.len()
    }

    pub fn is_pending(&self, key: ScheduleKey) -> bool {
        self.pending.iter().any(|p| p.key == key)
    }

    pub fn remaining_frames(&self, key: ScheduleKey) -> Option<u32> {
        self.pending
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.remaining)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance every entry by one frame and return the callbacks that are due,
    /// in registration order. Returned callbacks are no longer pending.
    pub fn tick(&mut self) -> Vec<Callback> {
        let mut due = Vec::new();
        let mut kept = Vec::with_capacity(self.pending.len());
        for mut entry in self.pending.drain(..) {
            entry.remaining -= 1;
            if entry.remaining == 0 {
                trace!("Firing callback {:?}", entry.key);
                due.push(entry.callback);
            } else {
                kept.push(entry);
            }
        }
        self.pending = kept;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::Resource;

    #[derive(Resource, Default)]
    struct Log(Vec<&'static str>);

    fn key(world: &mut World, purpose: Purpose) -> ScheduleKey {
        ScheduleKey::new(world.spawn_empty().id(), purpose)
    }

    fn run_due(world: &mut World, scheduler: &mut Scheduler) {
        for callback in scheduler.tick() {
            callback(world);
        }
    }

    #[test]
    fn fires_after_exact_frame_count() {
        let mut world = World::new();
        world.init_resource::<Log>();
        let mut scheduler = Scheduler::new(60);
        let k = key(&mut world, Purpose::Reload);
        scheduler.schedule(k, 0.5, |w: &mut World| w.resource_mut::<Log>().0.push("reload"));

        for _ in 0..29 {
            run_due(&mut world, &mut scheduler);
        }
        assert!(world.resource::<Log>().0.is_empty());
        assert_eq!(scheduler.remaining_frames(k), Some(1));

        run_due(&mut world, &mut scheduler);
        assert_eq!(world.resource::<Log>().0, vec!["reload"]);
        assert!(scheduler.is_empty());

        for _ in 0..100 {
            run_due(&mut world, &mut scheduler);
        }
        assert_eq!(world.resource::<Log>().0.len(), 1);
    }

    #[test]
    fn same_key_replaces_pending_entry() {
        let mut world = World::new();
        world.init_resource::<Log>();
        let mut scheduler = Scheduler::new(60);
        let k = key(&mut world, Purpose::AbilityReset);
        scheduler.schedule_frames(k, 5, |w: &mut World| w.resource_mut::<Log>().0.push("first"));
        scheduler.schedule_frames(k, 10, |w: &mut World| {
            w.resource_mut::<Log>().0.push("second")
        });
        assert_eq!(scheduler.len(), 1);

        for _ in 0..10 {
            run_due(&mut world, &mut scheduler);
        }
        assert_eq!(world.resource::<Log>().0, vec!["second"]);
    }

    #[test]
    fn different_purposes_do_not_collide() {
        let mut world = World::new();
        let owner = world.spawn_empty().id();
        let mut scheduler = Scheduler::new(60);
        scheduler.schedule(ScheduleKey::new(owner, Purpose::Reload), 1.0, |_| {});
        scheduler.schedule(ScheduleKey::new(owner, Purpose::Expire), 1.0, |_| {});
        assert_eq!(scheduler.len(), 2);
        assert_eq!(scheduler.cancel_owner(owner), 2);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn same_tick_expirations_keep_registration_order() {
        let mut world = World::new();
        world.init_resource::<Log>();
        let mut scheduler = Scheduler::new(60);
        let a = key(&mut world, Purpose::Expire);
        let b = key(&mut world, Purpose::Expire);
        scheduler.schedule_frames(a, 3, |w: &mut World| w.resource_mut::<Log>().0.push("a"));
        scheduler.schedule_frames(b, 3, |w: &mut World| w.resource_mut::<Log>().0.push("b"));
        for _ in 0..3 {
            run_due(&mut world, &mut scheduler);
        }
        assert_eq!(world.resource::<Log>().0, vec!["a", "b"]);
    }

    #[test]
    fn tiny_delays_fire_next_tick() {
        let mut world = World::new();
        let mut scheduler = Scheduler::new(60);
        let k = key(&mut world, Purpose::Reload);
        scheduler.schedule(k, 0.0001, |_| {});
        assert_eq!(scheduler.remaining_frames(k), Some(1));
        assert_eq!(scheduler.tick().len(), 1);
    }

    #[test]
    fn cancel_reports_missing_keys() {
        let mut world = World::new();
        let mut scheduler = Scheduler::new(60);
        let k = key(&mut world, Purpose::Reload);
        assert!(!scheduler.cancel(k));
        scheduler.schedule(k, 1.0, |_| {});
        assert!(scheduler.is_pending(k));
        assert!(scheduler.cancel(k));
        assert!(!scheduler.is_pending(k));
    }
}
