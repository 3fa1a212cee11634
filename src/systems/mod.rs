//! ECS systems.
//!
//! Each module holds one concern of the per-frame update. The
//! [`Simulation`](crate::simulation::Simulation) chains them in this order:
//!
//! 1. `time` – advance the fixed-step clock
//! 2. `environment` – roll for new asteroids and powerups
//! 3. `pilot` – resolve each ship's controls
//! 4. `collision` – detect cross-team overlaps and dispatch them
//! 5. `movement` – move free objects and spin asteroids
//! 6. `spaceship` – steer, trigger abilities, fire weapons
//! 7. `attachment` – place attached children on their parents
//! 8. `vitality` – kill out-of-bounds and depleted objects
//! 9. `effects` – count down transient effects
//! 10. `sweep` – despawn dead objects and decide the game outcome
//! 11. `scheduler` – run the callbacks due this frame
pub mod attachment;
pub mod collision;
pub mod effects;
pub mod environment;
pub mod movement;
pub mod pilot;
pub mod scheduler;
pub mod spaceship;
pub mod sweep;
pub mod time;
pub mod vitality;
