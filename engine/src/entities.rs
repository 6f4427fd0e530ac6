//! Record shapes exchanged with the external database
//!
//! Field names and enum tags match the stored rows, so these types can be
//! deserialized straight from the backend's JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::age::BirthDate;
use crate::error::Result;

// ============================================================================
// User
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    /// ISO date string, parsed lazily so a bad row does not block loading
    pub birth_date: String,
    pub created_at: String,
}

impl User {
    pub fn birth(&self) -> Result<BirthDate> {
        BirthDate::parse(&self.birth_date)
    }

    pub fn age(&self, today: NaiveDate) -> Result<u32> {
        self.birth()?.age_years(today)
    }

    /// First word of the full name, for greetings
    pub fn first_name(&self) -> &str {
        self.full_name.split_whitespace().next().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Rounded,
    Sharp,
    Minimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub id: String,
    pub user_id: String,
    pub theme: Theme,
    pub accent_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    pub icon_style: IconStyle,
    pub notifications_enabled: bool,
}

// ============================================================================
// Goals & Dreams
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Professional,
    Financial,
    Health,
    Spiritual,
    Relationships,
    Personal,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 6] = [
        GoalCategory::Professional,
        GoalCategory::Financial,
        GoalCategory::Health,
        GoalCategory::Spiritual,
        GoalCategory::Relationships,
        GoalCategory::Personal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Professional => "professional",
            GoalCategory::Financial => "financial",
            GoalCategory::Health => "health",
            GoalCategory::Spiritual => "spiritual",
            GoalCategory::Relationships => "relationships",
            GoalCategory::Personal => "personal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Archived,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub status: GoalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    /// Stored percentage. The backend column is an unconstrained number,
    /// so fractional or out-of-range values are kept as-is.
    pub progress: f64,
    pub created_at: String,
}

impl Goal {
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }

    /// Stored progress rounded and clamped to 0..=100 for display
    pub fn progress_percent(&self) -> u8 {
        self.progress.clamp(0.0, 100.0).round() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DreamStatus {
    Dreaming,
    Planning,
    InProgress,
    Achieved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dream {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    pub status: DreamStatus,
    pub created_at: String,
}

// ============================================================================
// Activities
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Learning,
    Recreation,
    Development,
    Routine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub category: ActivityCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    pub created_at: String,
}

// ============================================================================
// Finances & Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub category: String,
    pub read: bool,
    pub created_at: String,
}
