use serde::{Deserialize, Serialize};

use crate::core::random::DEFAULT_SEED;

/// Largest grid accepted from configuration
pub const MAX_CELLS: u64 = 4096 * 4096;

/// World configuration, loadable from JSON.
///
/// Missing fields fall back to defaults; unknown fields are rejected.
/// ```json
/// { "width": 160, "height": 120, "seed": 7 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldSettings {
    pub width: u32,
    pub height: u32,
    /// Seed for the xorshift random source (0 is replaced by the default)
    pub seed: u32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            seed: DEFAULT_SEED,
        }
    }
}

impl WorldSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let parsed = serde_json::from_str::<WorldSettings>(json)
            .map_err(|e| e.to_string())
            .and_then(|settings| settings.validate().map(|_| settings));
        if let Err(e) = &parsed {
            console_warn!("settings rejected: {}", e);
        }
        parsed
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "grid dimensions must be non-zero (got {}x{})",
                self.width, self.height
            ));
        }
        let cells = self.width as u64 * self.height as u64;
        if cells > MAX_CELLS {
            return Err(format!(
                "grid of {} cells exceeds the limit of {}",
                cells, MAX_CELLS
            ));
        }
        Ok(())
    }
}
