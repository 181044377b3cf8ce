use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::frame_timing::DEFAULT_MAX_FRAME_DT;

/// Frame-loop parameters for hosts driving the controllers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Frame", inline)]
#[serde(default)]
pub struct FrameOptions {
    /// Longest step, in seconds, a single frame may integrate.
    #[schemars(title = "Max Frame Step", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub max_frame_dt: f32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
        }
    }
}
