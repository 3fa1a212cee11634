use bevy_ecs::prelude::Component;

/// Image key handed to the renderer. The core never loads or draws images.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub key: String,
}

impl Sprite {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}
