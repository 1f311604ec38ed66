use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::checklist;
use crate::enums::{Lens, LensStatus};

/// A reviewer's answer to one checklist item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistResponse {
    pub item_id: String,
    pub passed: bool,
    pub notes: Option<String>,
}

/// One lens's review of an asset.
///
/// Holds exactly one [`ChecklistResponse`] per catalog item for `lens`.
/// Checklist answers are evidence for the reviewer; only `status` feeds the
/// asset's derived status.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LensReview {
    pub lens: Lens,
    pub status: LensStatus,
    pub reviewer_name: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub checklist_responses: Vec<ChecklistResponse>,
    pub overall_notes: Option<String>,
}

impl LensReview {
    /// A fresh `not_started` review with every checklist item unanswered.
    #[must_use]
    pub fn empty_at(lens: Lens, now: DateTime<Utc>) -> Self {
        Self {
            lens,
            status: LensStatus::NotStarted,
            reviewer_name: None,
            last_updated: now,
            checklist_responses: checklist(lens)
                .iter()
                .map(|item| ChecklistResponse {
                    item_id: item.id.to_string(),
                    passed: false,
                    notes: None,
                })
                .collect(),
            overall_notes: None,
        }
    }

    /// [`LensReview::empty_at`] stamped with the current time.
    #[must_use]
    pub fn empty(lens: Lens) -> Self {
        Self::empty_at(lens, Utc::now())
    }

    /// Find the response for `item_id`, if this lens has one.
    #[must_use]
    pub fn response(&self, item_id: &str) -> Option<&ChecklistResponse> {
        self.checklist_responses
            .iter()
            .find(|response| response.item_id == item_id)
    }

    /// Number of checklist items marked as passed.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.checklist_responses.iter().filter(|r| r.passed).count()
    }

    /// Check the one-response-per-item invariant against the catalog.
    ///
    /// True when the responses cover every catalog item for this lens exactly
    /// once, in catalog order, with nothing extra.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let items = checklist(self.lens);
        items.len() == self.checklist_responses.len()
            && items
                .iter()
                .zip(&self.checklist_responses)
                .all(|(item, response)| item.id == response.item_id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn empty_review_has_one_response_per_item() {
        for lens in Lens::ALL {
            let review = LensReview::empty(lens);
            let items = checklist(lens);
            assert_eq!(review.checklist_responses.len(), items.len());

            let ids: HashSet<_> = review
                .checklist_responses
                .iter()
                .map(|r| r.item_id.as_str())
                .collect();
            assert_eq!(ids.len(), items.len());
            assert!(items.iter().all(|item| ids.contains(item.id)));
            assert!(review.is_consistent());
        }
    }

    #[test]
    fn empty_review_starts_unanswered() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let review = LensReview::empty_at(Lens::BrandEthics, now);
        assert_eq!(review.status, LensStatus::NotStarted);
        assert_eq!(review.last_updated, now);
        assert!(review.reviewer_name.is_none());
        assert!(review.overall_notes.is_none());
        assert_eq!(review.passed_count(), 0);
        assert!(review.checklist_responses.iter().all(|r| r.notes.is_none()));
    }

    #[test]
    fn duplicate_response_breaks_consistency() {
        let mut review = LensReview::empty(Lens::UxSafety);
        let first = review.checklist_responses[0].clone();
        review.checklist_responses[1] = first;
        assert!(!review.is_consistent());
    }

    #[test]
    fn foreign_item_breaks_consistency() {
        let mut review = LensReview::empty(Lens::UxSafety);
        review.checklist_responses.push(ChecklistResponse {
            item_id: "legal-1".into(),
            passed: true,
            notes: None,
        });
        assert!(!review.is_consistent());
    }

    #[test]
    fn response_lookup() {
        let review = LensReview::empty(Lens::LegalCompliance);
        assert!(review.response("legal-3").is_some());
        assert!(review.response("brand-3").is_none());
    }
}
