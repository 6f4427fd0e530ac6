//! N-API bindings for Node.js

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::age::today_local;
use crate::error::EngineError;
use crate::recommendations::Recommendation;

fn to_napi(err: EngineError) -> Error {
    Error::new(Status::InvalidArg, err.to_string())
}

#[napi(object)]
pub struct JsRecommendation {
    pub stage: String,
    pub focus: Vec<String>,
    pub suggestions: Vec<String>,
}

impl From<Recommendation> for JsRecommendation {
    fn from(rec: Recommendation) -> Self {
        Self {
            stage: rec.stage.as_str().to_string(),
            focus: rec.focus.iter().map(|f| f.as_str().to_string()).collect(),
            suggestions: rec.suggestions,
        }
    }
}

/// `today` defaults to the local date when omitted
#[napi]
pub fn calculate_age(birth_date: String, today: Option<String>) -> Result<u32> {
    let today = match today {
        Some(raw) => crate::age::BirthDate::parse(&raw).map_err(to_napi)?.date(),
        None => today_local(),
    };
    crate::age::calculate_age(&birth_date, today).map_err(to_napi)
}

#[napi]
pub fn get_age_based_recommendations(age: i64) -> Result<JsRecommendation> {
    crate::recommendations::get_age_based_recommendations(age)
        .map(JsRecommendation::from)
        .map_err(to_napi)
}

#[napi]
pub fn format_currency(value: f64) -> Result<String> {
    crate::money::format_currency(value).map_err(to_napi)
}

#[napi]
pub fn calculate_progress(current: f64, target: f64) -> Result<i64> {
    crate::money::calculate_progress(current, target).map_err(to_napi)
}
