//! Integration tests for parent/child attachment.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test hierarchy_integration
//! ```

use bevy_ecs::prelude::*;
use glam::Vec2;

use astroshot::components::attachment::{AttachedTo, Attachments};
use astroshot::components::mapposition::MapPosition;
use astroshot::components::status::Status;
use astroshot::entity::{add_child, is_alive, kill, move_entity};
use astroshot::resources::gameconfig::GameConfig;
use astroshot::resources::input::InputState;
use astroshot::resources::registry::WorldRegistry;
use astroshot::resources::scheduler::{Purpose, ScheduleKey, Scheduler};
use astroshot::simulation::Simulation;
use astroshot::spawn::spawn_reflector;
use astroshot::systems::attachment::sync_attachments;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn quiet_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.asteroids_per_second = 0.0;
    config.powerups_per_second = 0.0;
    config.player.autopilot = false;
    config.boss.autopilot = false;
    config
}

fn tick_sync(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(sync_attachments);
    schedule.run(world);
}

fn pos(world: &World, entity: Entity) -> Vec2 {
    world.get::<MapPosition>(entity).unwrap().pos
}

#[test]
fn sync_places_children_from_their_offsets() {
    let mut world = World::new();
    let parent = world.spawn((MapPosition::new(10.0, 10.0), Status::default())).id();
    let child = world.spawn((MapPosition::new(10.0, -20.0), Status::default())).id();
    let grandchild = world.spawn((MapPosition::new(15.0, -20.0), Status::default())).id();
    assert!(add_child(&mut world, parent, child));
    assert!(add_child(&mut world, child, grandchild));

    // Move the parent behind the hierarchy's back, then resync.
    world.get_mut::<MapPosition>(parent).unwrap().pos = Vec2::new(100.0, 100.0);
    tick_sync(&mut world);

    assert!(approx_eq(pos(&world, child), Vec2::new(100.0, 70.0)));
    assert!(approx_eq(pos(&world, grandchild), Vec2::new(105.0, 70.0)));
}

#[test]
fn move_entity_keeps_children_in_lockstep() {
    let mut world = World::new();
    let parent = world.spawn((MapPosition::new(0.0, 0.0), Status::default())).id();
    let child = world.spawn((MapPosition::new(3.0, 4.0), Status::default())).id();
    assert!(add_child(&mut world, parent, child));
    let offset = world.get::<AttachedTo>(child).unwrap().offset;

    for delta in [Vec2::new(1.5, 0.0), Vec2::new(-7.0, 2.25), Vec2::new(0.0, -9.0)] {
        move_entity(&mut world, parent, delta);
        assert!(approx_eq(pos(&world, child), pos(&world, parent) + offset));
    }
}

#[test]
fn steered_ship_drags_its_reflector() {
    let config = quiet_config();
    let mut sim = Simulation::empty(&config);
    let ship = sim.spawn_player(Vec2::new(500.0, 700.0), &config.player);
    let reflector = spawn_reflector(sim.world_mut(), ship, 5.0).unwrap();
    let left = InputState {
        left: true,
        ..Default::default()
    };

    for _ in 0..10 {
        sim.step(left);
        let world = sim.world();
        assert!(approx_eq(
            pos(world, reflector),
            pos(world, ship) + Vec2::new(0.0, -60.0)
        ));
    }
    assert!(approx_eq(pos(sim.world(), ship), Vec2::new(450.0, 700.0)));
}

#[test]
fn children_die_with_their_parent() {
    let config = quiet_config();
    let mut sim = Simulation::empty(&config);
    let ship = sim.spawn_player(Vec2::new(500.0, 700.0), &config.player);
    let reflector = spawn_reflector(sim.world_mut(), ship, 5.0).unwrap();

    kill(sim.world_mut(), ship);
    sim.step(InputState::idle());

    let world = sim.world();
    assert!(!is_alive(world, reflector));
    assert!(world.get_entity(ship).is_err());
    assert!(world.get_entity(reflector).is_err());
    assert!(world.resource::<WorldRegistry>().objects.is_empty());
    let expiry = ScheduleKey::new(reflector, Purpose::Expire);
    assert!(!world.resource::<Scheduler>().is_pending(expiry));
}

#[test]
fn swept_child_leaves_parent_list() {
    let config = quiet_config();
    let mut sim = Simulation::empty(&config);
    let ship = sim.spawn_player(Vec2::new(500.0, 700.0), &config.player);
    let reflector = spawn_reflector(sim.world_mut(), ship, 5.0).unwrap();

    kill(sim.world_mut(), reflector);
    sim.step(InputState::idle());

    let world = sim.world();
    assert!(is_alive(world, ship));
    assert!(world.get::<Attachments>(ship).unwrap().is_empty());
}
