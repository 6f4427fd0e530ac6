//! Recommendation Selector
//!
//! Maps an age onto one of four life stages and returns the fixed set of
//! focus areas and suggestions for that stage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::age::calculate_age;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    /// Under 18
    Youth,
    /// 18 to 29
    YoungAdult,
    /// 30 to 49
    Adult,
    /// 50 and over
    Senior,
}

/// Lower bound (inclusive) of each stage, ascending
const STAGE_BRACKETS: &[(u32, LifeStage)] = &[
    (0, LifeStage::Youth),
    (18, LifeStage::YoungAdult),
    (30, LifeStage::Adult),
    (50, LifeStage::Senior),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusArea {
    Education,
    Hobbies,
    SocialSkills,
    Career,
    FinancialBasics,
    Relationships,
    CareerGrowth,
    Investments,
    Health,
    Family,
    Legacy,
    WisdomSharing,
}

impl FocusArea {
    /// Tag as stored and rendered by the front end
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusArea::Education => "education",
            FocusArea::Hobbies => "hobbies",
            FocusArea::SocialSkills => "social_skills",
            FocusArea::Career => "career",
            FocusArea::FinancialBasics => "financial_basics",
            FocusArea::Relationships => "relationships",
            FocusArea::CareerGrowth => "career_growth",
            FocusArea::Investments => "investments",
            FocusArea::Health => "health",
            FocusArea::Family => "family",
            FocusArea::Legacy => "legacy",
            FocusArea::WisdomSharing => "wisdom_sharing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub stage: LifeStage,
    pub focus: Vec<FocusArea>,
    pub suggestions: Vec<String>,
}

impl LifeStage {
    /// Same tag the serde form uses
    pub fn as_str(&self) -> &'static str {
        match self {
            LifeStage::Youth => "youth",
            LifeStage::YoungAdult => "young_adult",
            LifeStage::Adult => "adult",
            LifeStage::Senior => "senior",
        }
    }

    pub fn from_age(years: u32) -> Self {
        STAGE_BRACKETS
            .iter()
            .rev()
            .find(|(lower, _)| years >= *lower)
            .map(|(_, stage)| *stage)
            .unwrap_or(LifeStage::Youth)
    }

    pub fn focus(&self) -> &'static [FocusArea] {
        use FocusArea::*;
        match self {
            LifeStage::Youth => &[Education, Hobbies, SocialSkills],
            LifeStage::YoungAdult => &[Career, FinancialBasics, Relationships],
            LifeStage::Adult => &[CareerGrowth, Investments, Health, Family],
            LifeStage::Senior => &[Health, Legacy, WisdomSharing, Hobbies],
        }
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            LifeStage::Youth => &[
                "Desenvolva habilidades de estudo",
                "Explore diferentes atividades",
                "Construa amizades saudáveis",
            ],
            LifeStage::YoungAdult => &[
                "Invista em sua carreira",
                "Aprenda sobre finanças pessoais",
                "Construa uma rede profissional",
            ],
            LifeStage::Adult => &[
                "Avance na carreira",
                "Diversifique investimentos",
                "Mantenha hábitos saudáveis",
                "Fortaleça laços familiares",
            ],
            LifeStage::Senior => &[
                "Priorize sua saúde",
                "Compartilhe sua experiência",
                "Planeje seu legado",
                "Aproveite hobbies e lazer",
            ],
        }
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation {
            stage: *self,
            focus: self.focus().to_vec(),
            suggestions: self.suggestions().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Recommendation for `age`. Negative ages are rejected instead of
/// falling into the youngest bracket.
pub fn get_age_based_recommendations(age: i64) -> Result<Recommendation> {
    if age < 0 {
        return Err(EngineError::InvalidAge { age });
    }

    let years = u32::try_from(age).unwrap_or(u32::MAX);
    let stage = LifeStage::from_age(years);
    debug!(age, ?stage, "selected life stage");

    Ok(stage.recommendation())
}

/// Age calculation and stage selection in one step
pub fn recommendations_for_birth_date(birth_date: &str, today: NaiveDate) -> Result<Recommendation> {
    let age = calculate_age(birth_date, today)?;
    get_age_based_recommendations(i64::from(age))
}
