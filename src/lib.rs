//! Astroshot simulation core.
//!
//! The entity/world simulation of a top-down arcade shooter, built on
//! `bevy_ecs`: object lifecycle, parent/child attachment, movement, collision
//! dispatch, keyed deferred callbacks and the spaceship ability state
//! machine. Rendering and input devices stay outside; the core takes an
//! [`InputState`](resources::input::InputState) per frame and hands back a
//! draw-ordered [`FrameSnapshot`](snapshot::FrameSnapshot).
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, motion, health, weapons, ships, etc.)
//! - [`events`] – observer-driven events (collision dispatch)
//! - [`resources`] – ECS resources (clock, scheduler, registry, config, etc.)
//! - [`systems`] – ECS systems, one per concern of the frame
//! - [`abilities`] – the ability catalog
//! - [`entity`] – kill, damage, attach and move operations
//! - [`spawn`] – constructors for every kind of object
//! - [`simulation`] – the simulation context and its frame schedule

pub mod abilities;
pub mod components;
pub mod entity;
pub mod events;
pub mod resources;
pub mod simulation;
pub mod snapshot;
pub mod spawn;
pub mod systems;
