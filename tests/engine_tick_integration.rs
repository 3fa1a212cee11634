//! Engine tick integration tests for movement, lifespan, collision and weapon
//! reload.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test engine_tick_integration
//! ```

use bevy_ecs::prelude::*;
use glam::Vec2;

use astroshot::components::hazard::PowerupEffect;
use astroshot::components::health::Health;
use astroshot::components::mapposition::MapPosition;
use astroshot::components::motion::Motion;
use astroshot::components::projectile::Projectile;
use astroshot::components::rotation::{Rotation, Spin};
use astroshot::components::status::Status;
use astroshot::components::team::Team;
use astroshot::components::weapon::{ShotSpec, Weapon, WeaponStats};
use astroshot::entity::is_alive;
use astroshot::resources::gameconfig::GameConfig;
use astroshot::resources::input::InputState;
use astroshot::resources::registry::WorldRegistry;
use astroshot::resources::scheduler::{Purpose, ScheduleKey, Scheduler};
use astroshot::simulation::Simulation;
use astroshot::spawn::{
    spawn_asteroid, spawn_powerup, spawn_projectile, spawn_reflector, ASTEROID_DAMAGE,
};
use astroshot::systems::collision::RAM_DAMAGE;
use astroshot::systems::movement::movement;
use astroshot::systems::spaceship::fire_weapon;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn quiet_config() -> GameConfig {
    let mut config = GameConfig::new();
    config.asteroids_per_second = 0.0;
    config.powerups_per_second = 0.0;
    config.seed = 7;
    config.player.autopilot = false;
    config.boss.autopilot = false;
    config
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn steps(sim: &mut Simulation, n: usize) {
    for _ in 0..n {
        sim.step(InputState::idle());
    }
}

fn shot(pos: Vec2, facing: f32, damage: i32, team: Team, source: Entity) -> ShotSpec {
    ShotSpec {
        pos,
        facing,
        speed: 0.0,
        damage,
        team,
        source,
    }
}

#[test]
fn movement_follows_facing_convention() {
    let mut world = World::new();
    let up = world
        .spawn((MapPosition::new(0.0, 0.0), Motion::facing(5.0, 0.0), Status::default()))
        .id();
    let right = world
        .spawn((MapPosition::new(0.0, 0.0), Motion::facing(5.0, 90.0), Status::default()))
        .id();
    let down = world
        .spawn((MapPosition::new(0.0, 0.0), Motion::facing(5.0, 180.0), Status::default()))
        .id();

    tick_movement(&mut world);

    let up = world.get::<MapPosition>(up).unwrap().pos;
    let right = world.get::<MapPosition>(right).unwrap().pos;
    let down = world.get::<MapPosition>(down).unwrap().pos;
    assert!(approx_eq(up.x, 0.0) && approx_eq(up.y, -5.0));
    assert!(approx_eq(right.x, 5.0) && approx_eq(right.y, 0.0));
    assert!(approx_eq(down.x, 0.0) && approx_eq(down.y, 5.0));
}

#[test]
fn movement_spins_and_skips_the_dead() {
    let mut world = World::new();
    let mut dead = Status::default();
    dead.kill();
    let corpse = world
        .spawn((MapPosition::new(3.0, 3.0), Motion::facing(5.0, 0.0), dead))
        .id();
    let rock = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Motion::facing(0.0, 0.0),
            Rotation::new(350.0),
            Spin {
                degrees_per_frame: 15.0,
            },
            Status::default(),
        ))
        .id();

    tick_movement(&mut world);

    assert_eq!(world.get::<MapPosition>(corpse).unwrap().pos, Vec2::new(3.0, 3.0));
    assert!(approx_eq(world.get::<Rotation>(rock).unwrap().degrees, 5.0));
}

#[test]
fn lifespan_kills_after_exact_frame_count() {
    let mut sim = Simulation::empty(&quiet_config());
    let ship = sim.spawn_player(Vec2::new(500.0, 700.0), &quiet_config().player);
    let reflector = spawn_reflector(sim.world_mut(), ship, 1.0).unwrap();

    steps(&mut sim, 59);
    assert!(is_alive(sim.world(), reflector));

    steps(&mut sim, 1);
    assert!(!is_alive(sim.world(), reflector));

    steps(&mut sim, 1);
    assert!(sim.world().get_entity(reflector).is_err());
    assert!(is_alive(sim.world(), ship));
}

#[test]
fn stalled_shot_expires_after_ten_seconds() {
    let mut sim = Simulation::empty(&quiet_config());
    let ship = sim.spawn_player(Vec2::new(500.0, 700.0), &quiet_config().player);
    let bullet = spawn_projectile(
        sim.world_mut(),
        &shot(Vec2::new(500.0, 400.0), 0.0, 4, Team::Player, ship),
    );

    steps(&mut sim, 599);
    assert!(is_alive(sim.world(), bullet));

    steps(&mut sim, 1);
    assert!(!is_alive(sim.world(), bullet));

    steps(&mut sim, 1);
    assert!(sim.world().get_entity(bullet).is_err());
}

#[test]
fn objects_leaving_the_field_are_killed() {
    let mut sim = Simulation::empty(&quiet_config());
    let rock = spawn_asteroid(sim.world_mut(), Vec2::new(500.0, 845.0), 10.0, 180.0, 0.0);
    steps(&mut sim, 1);
    assert!(!is_alive(sim.world(), rock));
    assert!(sim.world().resource::<WorldRegistry>().objects.is_empty());
}

#[test]
fn enemy_shot_hurts_ship_and_explodes() {
    let mut sim = Simulation::empty(&quiet_config());
    let ship = sim.spawn_player(Vec2::new(500.0, 700.0), &quiet_config().player);
    let boss = sim.spawn_boss(Vec2::new(500.0, 80.0), &quiet_config().boss);
    let bullet = spawn_projectile(
        sim.world_mut(),
        &shot(Vec2::new(500.0, 700.0), 180.0, 7, Team::Enemy, boss),
    );

    steps(&mut sim, 1);

    assert_eq!(sim.world().get::<Health>(ship).unwrap().current(), 43);
    assert!(!is_alive(sim.world(), bullet));
    assert_eq!(sim.world().resource::<WorldRegistry>().effects.len(), 1);
}

#[test]
fn reflector_turns_shots_around_and_takes_them_over() {
    let mut sim = Simulation::empty(&quiet_config());
    let ship = sim.spawn_player(Vec2::new(500.0, 700.0), &quiet_config().player);
    let boss = sim.spawn_boss(Vec2::new(500.0, 80.0), &quiet_config().boss);
    let reflector = spawn_reflector(sim.world_mut(), ship, 5.0).unwrap();
    let bullet = spawn_projectile(
        sim.world_mut(),
        &shot(Vec2::new(500.0, 640.0), 180.0, 7, Team::Enemy, boss),
    );

    steps(&mut sim, 1);

    let world = sim.world();
    assert!(is_alive(world, bullet));
    assert!(is_alive(world, reflector));
    assert_eq!(*world.get::<Team>(bullet).unwrap(), Team::Player);
    assert!(approx_eq(world.get::<Motion>(bullet).unwrap().facing_degrees(), 0.0));
    assert!(approx_eq(world.get::<Rotation>(bullet).unwrap().degrees, 0.0));
    assert_eq!(world.get::<Projectile>(bullet).unwrap().source, Some(ship));
}

#[test]
fn ships_ram_each_other_and_crush_asteroids() {
    let mut sim = Simulation::empty(&quiet_config());
    let ship = sim.spawn_player(Vec2::new(500.0, 400.0), &quiet_config().player);
    let boss = sim.spawn_boss(Vec2::new(500.0, 400.0), &quiet_config().boss);
    let rock = spawn_asteroid(sim.world_mut(), Vec2::new(500.0, 400.0), 0.0, 180.0, 0.0);

    steps(&mut sim, 1);

    let world = sim.world();
    let hit = ASTEROID_DAMAGE + RAM_DAMAGE;
    assert_eq!(world.get::<Health>(ship).unwrap().current(), 50 - hit);
    assert_eq!(world.get::<Health>(boss).unwrap().current(), 200 - hit);
    assert!(!is_alive(world, rock));
}

#[test]
fn shots_die_on_asteroids_but_pass_powerups() {
    let mut sim = Simulation::empty(&quiet_config());
    let ship = sim.spawn_player(Vec2::new(100.0, 700.0), &quiet_config().player);
    let rock = spawn_asteroid(sim.world_mut(), Vec2::new(300.0, 400.0), 0.0, 180.0, 0.0);
    let gift = spawn_powerup(sim.world_mut(), Vec2::new(600.0, 400.0), PowerupEffect::ExtraBarrel);
    let into_rock = spawn_projectile(
        sim.world_mut(),
        &shot(Vec2::new(300.0, 400.0), 0.0, 4, Team::Player, ship),
    );
    let into_gift = spawn_projectile(
        sim.world_mut(),
        &shot(Vec2::new(600.0, 400.0), 0.0, 4, Team::Player, ship),
    );

    steps(&mut sim, 1);

    let world = sim.world();
    assert!(!is_alive(world, into_rock));
    assert_eq!(world.get::<Health>(rock).unwrap().current(), 6);
    assert!(is_alive(world, into_gift));
    assert!(is_alive(world, gift));
}

#[test]
fn weapon_fires_three_barrels_then_reloads_once() {
    let mut config = quiet_config();
    config.player.weapon = WeaponStats::new(2.0, 3, 5, 8.0);
    let mut sim = Simulation::empty(&config);
    let ship = sim.spawn_player(Vec2::new(100.0, 500.0), &config.player);

    let shots = fire_weapon(sim.world_mut(), ship);
    assert_eq!(shots.len(), 3);
    let positions: Vec<Vec2> = shots
        .iter()
        .map(|e| sim.world().get::<MapPosition>(*e).unwrap().pos)
        .collect();
    let expected = [
        Vec2::new(80.0, 500.0),
        Vec2::new(100.0, 450.0),
        Vec2::new(120.0, 500.0),
    ];
    for (got, want) in positions.iter().zip(expected.iter()) {
        assert!(approx_eq(got.x, want.x) && approx_eq(got.y, want.y));
    }

    assert!(fire_weapon(sim.world_mut(), ship).is_empty());
    steps(&mut sim, 29);
    assert!(!sim.world().get::<Weapon>(ship).unwrap().ready);
    assert!(fire_weapon(sim.world_mut(), ship).is_empty());

    steps(&mut sim, 1);
    assert!(sim.world().get::<Weapon>(ship).unwrap().ready);
    let key = ScheduleKey::new(ship, Purpose::Reload);
    assert!(!sim.world().resource::<Scheduler>().is_pending(key));
}

#[test]
fn held_trigger_fires_at_the_weapon_rate() {
    let mut config = quiet_config();
    config.player.weapon = WeaponStats::new(2.0, 1, 5, 8.0);
    let mut sim = Simulation::empty(&config);
    sim.spawn_player(Vec2::new(500.0, 700.0), &config.player);
    let fire = InputState {
        space: true,
        ..Default::default()
    };

    let mut fired = 0;
    for _ in 0..60 {
        let before = sim.world().resource::<WorldRegistry>().objects.len();
        sim.step(fire);
        let after = sim.world().resource::<WorldRegistry>().objects.len();
        if after > before {
            fired += 1;
        }
    }
    assert_eq!(fired, 2);
}

#[test]
fn enemy_ships_ignore_powerups() {
    let mut sim = Simulation::empty(&quiet_config());
    let boss = sim.spawn_boss(Vec2::new(500.0, 80.0), &quiet_config().boss);
    let gift = spawn_powerup(sim.world_mut(), Vec2::new(500.0, 80.0), PowerupEffect::ExtraBarrel);

    steps(&mut sim, 1);

    assert!(is_alive(sim.world(), gift));
    assert_eq!(sim.world().get::<Weapon>(boss).unwrap().barrels(), 2);
}

#[test]
fn player_collects_powerups() {
    let mut sim = Simulation::empty(&quiet_config());
    let ship = sim.spawn_player(Vec2::new(500.0, 700.0), &quiet_config().player);
    sim.world_mut().get_mut::<Health>(ship).unwrap().set(20);
    let repair = spawn_powerup(sim.world_mut(), Vec2::new(500.0, 700.0), PowerupEffect::Repair(10));

    steps(&mut sim, 1);

    assert!(!is_alive(sim.world(), repair));
    assert_eq!(sim.world().get::<Health>(ship).unwrap().current(), 30);
}

#[test]
fn object_cap_drops_newest_objects() {
    let mut config = quiet_config();
    config.object_limit = 5;
    let mut sim = Simulation::empty(&config);
    let rocks: Vec<Entity> = (0..8)
        .map(|i| {
            spawn_asteroid(
                sim.world_mut(),
                Vec2::new(60.0 + i as f32 * 100.0, 400.0),
                0.0,
                180.0,
                0.0,
            )
        })
        .collect();

    steps(&mut sim, 1);

    assert_eq!(sim.world().resource::<WorldRegistry>().objects, rocks[..5].to_vec());
}
