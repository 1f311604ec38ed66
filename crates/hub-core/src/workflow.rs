//! Review workflow operations.
//!
//! Every operation takes an `&Asset` and returns a new `Asset` with the
//! mutation applied and the touched lens's `last_updated` stamped. Inputs are
//! never modified, so callers can diff, undo, or discard the result if
//! persisting it fails.
//!
//! Only a lens status change re-derives the asset's `status`. Checklist
//! answers and notes carry the stored status over untouched, so an archived
//! asset stays archived while reviewers annotate it.
//!
//! No status transition rules are enforced: any lens status may follow any
//! other so reviewers can correct mistakes.

use chrono::{DateTime, Utc};

use crate::derive::derive_asset_status;
use crate::entities::{Asset, LensReview};
use crate::enums::{AssetStatus, Lens, LensStatus};

/// Apply `mutate` to a copy of the lens and stamp it. `status` is left as stored.
fn update_lens(
    asset: &Asset,
    lens: Lens,
    now: DateTime<Utc>,
    mutate: impl FnOnce(&mut LensReview),
) -> Asset {
    let mut next = asset.clone();
    let review = next.lens_mut(lens);
    mutate(review);
    review.last_updated = now;
    next
}

/// Set a lens's status and re-derive the asset's status.
///
/// Keeps the lens's existing reviewer; if it has none, stamps `fallback_reviewer`.
#[must_use]
pub fn set_lens_status_at(
    asset: &Asset,
    lens: Lens,
    status: LensStatus,
    fallback_reviewer: &str,
    now: DateTime<Utc>,
) -> Asset {
    let mut next = update_lens(asset, lens, now, |review| {
        review.status = status;
        if review.reviewer_name.is_none() {
            review.reviewer_name = Some(fallback_reviewer.to_string());
        }
    });
    next.status = derive_asset_status(&next);
    next
}

/// [`set_lens_status_at`] stamped with the current time.
#[must_use]
pub fn set_lens_status(
    asset: &Asset,
    lens: Lens,
    status: LensStatus,
    fallback_reviewer: &str,
) -> Asset {
    set_lens_status_at(asset, lens, status, fallback_reviewer, Utc::now())
}

/// Record a checklist answer on an existing item.
///
/// An `item_id` the lens has no response for is a no-op: the returned asset
/// equals the input, `last_updated` included. Checklist answers change
/// neither the lens status nor the asset status; a lens with nothing checked
/// can still be approved.
#[must_use]
pub fn set_checklist_response_at(
    asset: &Asset,
    lens: Lens,
    item_id: &str,
    passed: bool,
    notes: Option<&str>,
    now: DateTime<Utc>,
) -> Asset {
    if asset.lens(lens).response(item_id).is_none() {
        return asset.clone();
    }

    update_lens(asset, lens, now, |review| {
        if let Some(response) = review
            .checklist_responses
            .iter_mut()
            .find(|r| r.item_id == item_id)
        {
            response.passed = passed;
            response.notes = notes.map(String::from);
        }
    })
}

/// [`set_checklist_response_at`] stamped with the current time.
#[must_use]
pub fn set_checklist_response(
    asset: &Asset,
    lens: Lens,
    item_id: &str,
    passed: bool,
    notes: Option<&str>,
) -> Asset {
    set_checklist_response_at(asset, lens, item_id, passed, notes, Utc::now())
}

/// Replace a lens's free-text notes. Blank notes clear them.
///
/// The asset's `status` is carried over unchanged.
#[must_use]
pub fn set_overall_notes_at(asset: &Asset, lens: Lens, notes: &str, now: DateTime<Utc>) -> Asset {
    update_lens(asset, lens, now, |review| {
        review.overall_notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes.to_string())
        };
    })
}

/// [`set_overall_notes_at`] stamped with the current time.
#[must_use]
pub fn set_overall_notes(asset: &Asset, lens: Lens, notes: &str) -> Asset {
    set_overall_notes_at(asset, lens, notes, Utc::now())
}

/// A validated comment waiting to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDraft {
    pub asset_id: String,
    pub text: String,
}

impl CommentDraft {
    /// Returns `None` for empty or whitespace-only text.
    #[must_use]
    pub fn new(asset_id: &str, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            asset_id: asset_id.to_string(),
            text: text.to_string(),
        })
    }
}

/// A change in derived asset status between two versions of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub from: AssetStatus,
    pub to: AssetStatus,
}

/// `Some` when `after.status` differs from `before.status`.
#[must_use]
pub fn status_change(before: &Asset, after: &Asset) -> Option<StatusChange> {
    (before.status != after.status).then_some(StatusChange {
        from: before.status,
        to: after.status,
    })
}
