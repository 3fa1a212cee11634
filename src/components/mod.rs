//! ECS components for simulated objects.
//!
//! Every object in the play field (ships, projectiles, asteroids, powerups,
//! reflectors) is an entity assembled from these components. Components hold
//! data and small invariant-keeping helpers; behaviour lives in
//! [`crate::systems`].
//!
//! Submodules overview:
//! - [`ability`] – named one-shot ship abilities
//! - [`attachment`] – parent/child links with a fixed offset
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`effect`] – transient visual effects
//! - [`hazard`] – asteroids, powerups and reflectors
//! - [`health`] – hit points clamped to `[-1, max]`
//! - [`lifespan`] – scheduled self-destruction
//! - [`mapposition`] – world-space pivot position
//! - [`motion`] – speed and travel direction
//! - [`pilot`] – per-ship control source and control flags
//! - [`projectile`] – ballistic shots
//! - [`rotation`] – facing angle and spin
//! - [`spaceship`] – ability/cooldown state machine and baseline snapshot
//! - [`sprite`] – image key for the renderer
//! - [`status`] – alive/collidable flags
//! - [`team`] – faction and entity kind tags
//! - [`weapon`] – multi-barrel gun

pub mod ability;
pub mod attachment;
pub mod boxcollider;
pub mod effect;
pub mod hazard;
pub mod health;
pub mod lifespan;
pub mod mapposition;
pub mod motion;
pub mod pilot;
pub mod projectile;
pub mod rotation;
pub mod spaceship;
pub mod sprite;
pub mod status;
pub mod team;
pub mod weapon;
