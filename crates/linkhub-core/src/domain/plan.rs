// ============================================================================
// LinkHub Core - Plan Entity
// File: crates/linkhub-core/src/domain/plan.rs
// Description: Billing plan enumeration and badge presentation mapping
// ============================================================================

use serde::{Deserialize, Serialize};

/// Billing plan enumeration. Unrecognized values deserialize to `Free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[serde(from = "String")]
pub enum Plan {
    Free,
    Pro,
    Enterprise,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Pro => "pro",
            Plan::Enterprise => "enterprise",
        }
    }

    /// Badge style for this plan. Total over the input domain: every plan
    /// maps to a variant, unknown plan strings already collapsed to `Free`.
    pub fn badge(&self) -> PlanBadge {
        let variant = match self {
            Plan::Enterprise => BadgeVariant::Violet,
            Plan::Pro => BadgeVariant::Blue,
            Plan::Free => BadgeVariant::Black,
        };
        PlanBadge {
            variant,
            label: self.as_str(),
        }
    }
}

impl Default for Plan {
    fn default() -> Self {
        Plan::Free
    }
}

impl From<String> for Plan {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pro" => Plan::Pro,
            "enterprise" => Plan::Enterprise,
            _ => Plan::Free,
        }
    }
}

/// Visual style of a plan badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Violet,
    Blue,
    Black,
}

/// Presentational badge: a label and its visual variant. No state, no
/// error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanBadge {
    pub variant: BadgeVariant,
    pub label: &'static str,
}
