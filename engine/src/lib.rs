//! LifePath Engine
//!
//! Age-tailored recommendations for the LifePath personal development
//! tracker: birth date to age, age to life stage, life stage to focus areas
//! and suggestions. Also carries the money helpers and the dashboard
//! summary the front end renders.

pub mod age;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod entities;
pub mod error;
pub mod money;
pub mod recommendations;
pub mod snapshot;

#[cfg(feature = "napi")]
pub mod napi_bindings;

pub use age::{calculate_age, today_local, BirthDate};
pub use config::EngineConfig;
pub use dashboard::Dashboard;
pub use error::{EngineError, Result};
pub use money::{calculate_progress, format_currency};
pub use recommendations::{
    get_age_based_recommendations, recommendations_for_birth_date, FocusArea, LifeStage,
    Recommendation,
};
pub use snapshot::ProfileSnapshot;
