//! Development Catalog
//!
//! Fixed categories, development areas and suggested activities shown on
//! the dashboard.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::entities::GoalCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub category: GoalCategory,
    pub label: &'static str,
    /// Gradient classes used by the front end
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivitySuggestion {
    pub title: &'static str,
    pub category: GoalCategory,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevelopmentArea {
    pub id: GoalCategory,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { category: GoalCategory::Professional, label: "Profissional", color: "from-blue-500 to-indigo-600" },
    CategoryInfo { category: GoalCategory::Financial, label: "Financeiro", color: "from-emerald-400 to-teal-600" },
    CategoryInfo { category: GoalCategory::Health, label: "Saúde & Corpo", color: "from-orange-400 to-pink-600" },
    CategoryInfo { category: GoalCategory::Spiritual, label: "Espiritual", color: "from-purple-500 to-pink-500" },
    CategoryInfo { category: GoalCategory::Relationships, label: "Relacionamentos", color: "from-pink-400 to-red-500" },
    CategoryInfo { category: GoalCategory::Personal, label: "Pessoal", color: "from-cyan-500 to-blue-600" },
];

pub const ACTIVITY_SUGGESTIONS: &[ActivitySuggestion] = &[
    ActivitySuggestion { title: "Meditação Diária", category: GoalCategory::Spiritual, duration: "15 min" },
    ActivitySuggestion { title: "Exercício Físico", category: GoalCategory::Health, duration: "30 min" },
    ActivitySuggestion { title: "Leitura", category: GoalCategory::Personal, duration: "20 min" },
    ActivitySuggestion { title: "Networking", category: GoalCategory::Professional, duration: "1 hora" },
    ActivitySuggestion { title: "Planejamento Financeiro", category: GoalCategory::Financial, duration: "30 min" },
    ActivitySuggestion { title: "Tempo em Família", category: GoalCategory::Relationships, duration: "2 horas" },
];

pub const DEVELOPMENT_AREAS: &[DevelopmentArea] = &[
    DevelopmentArea { id: GoalCategory::Professional, label: "Desenvolvimento Profissional", icon: "Briefcase" },
    DevelopmentArea { id: GoalCategory::Financial, label: "Educação Financeira", icon: "DollarSign" },
    DevelopmentArea { id: GoalCategory::Health, label: "Saúde e Bem-estar", icon: "Heart" },
    DevelopmentArea { id: GoalCategory::Spiritual, label: "Crescimento Espiritual", icon: "Sparkles" },
    DevelopmentArea { id: GoalCategory::Relationships, label: "Relacionamentos", icon: "Users" },
    DevelopmentArea { id: GoalCategory::Personal, label: "Desenvolvimento Pessoal", icon: "User" },
];

pub fn category_info(category: GoalCategory) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|info| info.category == category)
}

pub fn suggestions_for_category(category: GoalCategory) -> Vec<&'static ActivitySuggestion> {
    ACTIVITY_SUGGESTIONS
        .iter()
        .filter(|s| s.category == category)
        .collect()
}

/// Pick `count` distinct activity suggestions for today.
/// Asking for more than the catalog holds returns every suggestion.
pub fn todays_suggestions<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ActivitySuggestion> {
    ACTIVITY_SUGGESTIONS
        .choose_multiple(rng, count)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_category_has_info_and_area() {
        for category in GoalCategory::ALL {
            assert!(category_info(category).is_some(), "{:?}", category);
            assert!(DEVELOPMENT_AREAS.iter().any(|a| a.id == category));
            assert_eq!(suggestions_for_category(category).len(), 1);
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(category_info(GoalCategory::Health).unwrap().label, "Saúde & Corpo");
        assert_eq!(suggestions_for_category(GoalCategory::Financial)[0].title, "Planejamento Financeiro");
    }

    #[test]
    fn test_todays_suggestions_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let picks = todays_suggestions(&mut rng, 3);
        assert_eq!(picks.len(), 3);
        for (i, a) in picks.iter().enumerate() {
            for b in &picks[i + 1..] {
                assert_ne!(a.title, b.title);
            }
        }
    }

    #[test]
    fn test_todays_suggestions_seeded_is_stable() {
        let first = todays_suggestions(&mut StdRng::seed_from_u64(42), 3);
        let second = todays_suggestions(&mut StdRng::seed_from_u64(42), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_todays_suggestions_capped_at_catalog() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(todays_suggestions(&mut rng, 50).len(), ACTIVITY_SUGGESTIONS.len());
        assert!(todays_suggestions(&mut rng, 0).is_empty());
    }
}
