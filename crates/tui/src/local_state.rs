use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_SUMMARY_INTERVAL: u32 = 7;
const MAX_SUMMARY_INTERVAL: u32 = 366;

/// UI preferences that survive restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub lightmode: bool,
    /// Length in days of the summary window ending today.
    #[serde(rename = "summary-date-interval")]
    pub summary_date_interval: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            lightmode: false,
            summary_date_interval: DEFAULT_SUMMARY_INTERVAL,
        }
    }
}

impl Preferences {
    pub fn load(path: &str) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let parent = Path::new(path).parent();
        if let Some(parent) = parent {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(self)?;
        fs::write(path, payload)?;
        Ok(())
    }

    pub fn toggle_lightmode(&mut self) {
        self.lightmode = !self.lightmode;
    }

    /// Grows or shrinks the summary window, keeping it at least one day long.
    pub fn adjust_interval(&mut self, delta: i32) {
        let next = self.summary_date_interval as i64 + delta as i64;
        self.summary_date_interval = next.clamp(1, MAX_SUMMARY_INTERVAL as i64) as u32;
    }
}
