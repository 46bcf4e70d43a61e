use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::{HelixParameters, ParameterBounds};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[schemars(title = "Helix", inline)]
#[serde(default)]
/// Starting helix parameters and the ranges the UI may move them in.
pub struct HelixOptions {
    /// Parameters the scene starts with.
    pub initial: HelixParameters,
    /// Inclusive ranges; snapshots outside them are rejected.
    #[schemars(skip)]
    pub bounds: ParameterBounds,
}
