//! Dashboard - assembles everything the overview screen shows for one user

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{
    category_info, suggestions_for_category, todays_suggestions, ActivitySuggestion,
    DevelopmentArea, DEVELOPMENT_AREAS,
};
use crate::entities::{Goal, GoalCategory, GoalStatus, RecordType};
use crate::error::Result;
use crate::money::{calculate_progress, format_currency};
use crate::recommendations::{get_age_based_recommendations, Recommendation};
use crate::snapshot::ProfileSnapshot;

#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub title: String,
    pub category: GoalCategory,
    pub category_label: &'static str,
    pub category_color: &'static str,
    pub status: GoalStatus,
    pub progress: u8,
    /// Catalog activity that works toward this goal's category
    pub suggested_activity: Option<&'static str>,
}

impl GoalProgress {
    fn from_goal(goal: &Goal) -> Self {
        let info = category_info(goal.category);
        Self {
            title: goal.title.clone(),
            category: goal.category,
            category_label: info.map(|i| i.label).unwrap_or(goal.category.as_str()),
            category_color: info.map(|i| i.color).unwrap_or_default(),
            status: goal.status,
            progress: goal.progress_percent(),
            suggested_activity: suggestions_for_category(goal.category)
                .first()
                .map(|s| s.title),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DreamProgress {
    pub title: String,
    pub estimated_cost: String,
    /// Share of the cost covered by the current balance
    pub funded_percent: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinanceSummary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub income_display: String,
    pub expenses_display: String,
    pub balance_display: String,
}

impl FinanceSummary {
    fn from_totals(income: f64, expenses: f64) -> Result<Self> {
        let balance = income - expenses;
        Ok(Self {
            income,
            expenses,
            balance,
            income_display: format_currency(income)?,
            expenses_display: format_currency(expenses)?,
            balance_display: format_currency(balance)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub greeting_name: String,
    pub age: u32,
    pub recommendation: Recommendation,
    pub active_goals: usize,
    pub dreams: usize,
    pub activities: usize,
    pub unread_notifications: usize,
    pub goals: Vec<GoalProgress>,
    pub development_areas: &'static [DevelopmentArea],
    pub dream_progress: Vec<DreamProgress>,
    pub finances: FinanceSummary,
    pub todays_suggestions: Vec<ActivitySuggestion>,
}

impl Dashboard {
    pub fn build<R: Rng + ?Sized>(
        snapshot: &ProfileSnapshot,
        today: NaiveDate,
        rng: &mut R,
        daily_count: usize,
    ) -> Result<Self> {
        let user = &snapshot.user;
        let age = user.age(today)?;
        let recommendation = get_age_based_recommendations(i64::from(age))?;

        let (income, expenses) = snapshot.finances.iter().fold((0.0, 0.0), |(inc, exp), r| {
            match r.record_type {
                RecordType::Income => (inc + r.amount, exp),
                RecordType::Expense => (inc, exp + r.amount),
            }
        });
        let finances = FinanceSummary::from_totals(income, expenses)?;

        let goals = snapshot
            .goals
            .iter()
            .map(GoalProgress::from_goal)
            .collect::<Vec<_>>();

        let mut dream_progress = Vec::new();
        for dream in &snapshot.dreams {
            // A zero or missing cost has nothing to measure against
            let Some(cost) = dream.estimated_cost.filter(|c| *c != 0.0) else {
                continue;
            };
            dream_progress.push(DreamProgress {
                title: dream.title.clone(),
                estimated_cost: format_currency(cost)?,
                funded_percent: calculate_progress(finances.balance, cost)?,
            });
        }

        let dashboard = Dashboard {
            greeting_name: user.first_name().to_string(),
            age,
            recommendation,
            active_goals: snapshot.goals.iter().filter(|g| g.is_active()).count(),
            dreams: snapshot.dreams.len(),
            activities: snapshot.activities.len(),
            unread_notifications: snapshot.notifications.iter().filter(|n| !n.read).count(),
            goals,
            development_areas: DEVELOPMENT_AREAS,
            dream_progress,
            finances,
            todays_suggestions: todays_suggestions(rng, daily_count),
        };

        debug!(
            user = %user.id,
            age,
            stage = ?dashboard.recommendation.stage,
            active_goals = dashboard.active_goals,
            "built dashboard"
        );
        Ok(dashboard)
    }
}
