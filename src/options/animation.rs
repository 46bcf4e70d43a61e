use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::AnimationMode;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Per-frame animation options.
pub struct AnimationOptions {
    /// Which transform the helix animates.
    pub mode: AnimationMode,
}
