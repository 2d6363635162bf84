//! Termination variants and dismissal categories.

use serde::{Deserialize, Serialize};

/// The legal category of an employer-initiated dismissal.
///
/// The category determines whether the worker is owed severance
/// compensation under article 366.º of the Código do Trabalho.
///
/// # Example
///
/// ```
/// use severance_engine::models::DismissalCategory;
///
/// assert!(DismissalCategory::Collective.entitles_compensation());
/// assert!(!DismissalCategory::ForCause.entitles_compensation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissalCategory {
    /// Collective dismissal (despedimento coletivo).
    Collective,
    /// Extinction of the job position or business closure.
    BusinessClosure,
    /// Dismissal without just cause.
    WithoutJustCause,
    /// Dismissal with just cause; no compensation is owed.
    ForCause,
}

impl DismissalCategory {
    /// Returns true when this category entitles the worker to severance
    /// compensation.
    pub fn entitles_compensation(&self) -> bool {
        matches!(
            self,
            DismissalCategory::Collective
                | DismissalCategory::BusinessClosure
                | DismissalCategory::WithoutJustCause
        )
    }
}

/// Which of the two calculators a computation runs as.
///
/// The variants share all common formulas; only the variant-specific terms
/// differ (outstanding salary and proportional vacation for resignations,
/// base salary and severance compensation for dismissals).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerminationVariant {
    /// The worker resigns voluntarily.
    Resignation,
    /// The employer terminates the contract.
    Dismissal {
        /// The legal category of the dismissal.
        category: DismissalCategory,
        /// Whether statutory notice was given. Does not change any amount;
        /// a missing notice is surfaced as a trace warning.
        notice_given: bool,
    },
}

impl TerminationVariant {
    /// Returns true for the dismissal variant.
    pub fn is_dismissal(&self) -> bool {
        matches!(self, TerminationVariant::Dismissal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compensated_categories() {
        assert!(DismissalCategory::Collective.entitles_compensation());
        assert!(DismissalCategory::BusinessClosure.entitles_compensation());
        assert!(DismissalCategory::WithoutJustCause.entitles_compensation());
        assert!(!DismissalCategory::ForCause.entitles_compensation());
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&DismissalCategory::Collective).unwrap(),
            "\"collective\""
        );
        assert_eq!(
            serde_json::to_string(&DismissalCategory::BusinessClosure).unwrap(),
            "\"business_closure\""
        );
        assert_eq!(
            serde_json::to_string(&DismissalCategory::WithoutJustCause).unwrap(),
            "\"without_just_cause\""
        );
        assert_eq!(
            serde_json::to_string(&DismissalCategory::ForCause).unwrap(),
            "\"for_cause\""
        );
    }

    #[test]
    fn test_category_deserialization() {
        let category: DismissalCategory = serde_json::from_str("\"without_just_cause\"").unwrap();
        assert_eq!(category, DismissalCategory::WithoutJustCause);
    }

    #[test]
    fn test_variant_tagged_serialization() {
        let variant = TerminationVariant::Dismissal {
            category: DismissalCategory::Collective,
            notice_given: true,
        };
        let json = serde_json::to_string(&variant).unwrap();
        assert!(json.contains("\"kind\":\"dismissal\""));
        assert!(json.contains("\"category\":\"collective\""));

        let resignation = serde_json::to_string(&TerminationVariant::Resignation).unwrap();
        assert_eq!(resignation, "{\"kind\":\"resignation\"}");
    }

    #[test]
    fn test_is_dismissal() {
        assert!(!TerminationVariant::Resignation.is_dismissal());
        assert!(TerminationVariant::Dismissal {
            category: DismissalCategory::ForCause,
            notice_given: false,
        }
        .is_dismissal());
    }
}
