//! Profile snapshot
//!
//! Versioned JSON bundle of one user's records. Used as the local fallback
//! record when no backend is reachable, and as the CLI's input format.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::entities::*;
use crate::error::{EngineError, Result};

pub const SNAPSHOT_VERSION: u8 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub version: u8, // Schema version for forward compatibility
    pub user: User,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub dreams: Vec<Dream>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub finances: Vec<FinancialRecord>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

impl ProfileSnapshot {
    /// Empty snapshot for a freshly signed-up user
    pub fn new(user: User) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            user,
            goals: Vec::new(),
            dreams: Vec::new(),
            activities: Vec::new(),
            finances: Vec::new(),
            notifications: Vec::new(),
            preferences: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: ProfileSnapshot = serde_json::from_str(json)?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(EngineError::UnsupportedSnapshotVersion {
                version: snapshot.version,
            });
        }

        info!(
            user = %snapshot.user.id,
            goals = snapshot.goals.len(),
            dreams = snapshot.dreams.len(),
            activities = snapshot.activities.len(),
            finances = snapshot.finances.len(),
            "loaded profile snapshot"
        );
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
