//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `gameconfig` – INI-backed settings for the field, spawners and ships
//! - `input` – per-frame keyboard state polled by keyboard pilots
//! - `playarea` – field bounds and the culling margin
//! - `registry` – draw-ordered object list, effects and the game outcome
//! - `rng` – seeded random source
//! - `scheduler` – keyed one-shot callbacks measured in frames
//! - `worldtime` – fixed-step clock
pub mod gameconfig;
pub mod input;
pub mod playarea;
pub mod registry;
pub mod rng;
pub mod scheduler;
pub mod worldtime;
