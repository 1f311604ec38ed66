//! Demonstration data for a user with an empty store.
//!
//! The set covers all five asset statuses. Stored status for every entry but
//! the archived one is whatever derivation yields for its lenses.

use chrono::{DateTime, Duration, Utc};

use crate::derive::derive_asset_status;
use crate::entities::{Asset, LensReview};
use crate::enums::{AssetStatus, AssetType, Channel, Lens, LensStatus, RiskLevel};

/// Number of assets produced by [`demo_assets`].
pub const DEMO_ASSET_COUNT: usize = 6;

struct DemoLens {
    status: LensStatus,
    reviewer: Option<&'static str>,
    passed: &'static [&'static str],
    notes: Option<&'static str>,
    hours_ago: i64,
}

const UNTOUCHED: DemoLens = DemoLens {
    status: LensStatus::NotStarted,
    reviewer: None,
    passed: &[],
    notes: None,
    hours_ago: 0,
};

struct DemoAsset {
    title: &'static str,
    asset_type: AssetType,
    channel: Channel,
    link_or_path: Option<&'static str>,
    description: Option<&'static str>,
    tags: &'static [&'static str],
    risk_level: RiskLevel,
    age_hours: i64,
    archived: bool,
    legal: DemoLens,
    brand: DemoLens,
    ux: DemoLens,
}

const DEMO: [DemoAsset; DEMO_ASSET_COUNT] = [
    DemoAsset {
        title: "Spring collection teaser",
        asset_type: AssetType::TiktokScript,
        channel: Channel::Tiktok,
        link_or_path: Some("drive://campaigns/spring/teaser-v1.docx"),
        description: Some("15s script for the spring drop countdown."),
        tags: &["spring", "launch"],
        risk_level: RiskLevel::Low,
        age_hours: 6,
        archived: false,
        legal: UNTOUCHED,
        brand: UNTOUCHED,
        ux: UNTOUCHED,
    },
    DemoAsset {
        title: "Referral program landing page",
        asset_type: AssetType::LandingPage,
        channel: Channel::Site,
        link_or_path: Some("https://staging.example.com/refer"),
        description: Some("Give $20, get $20 referral flow."),
        tags: &["referral", "growth"],
        risk_level: RiskLevel::Medium,
        age_hours: 30,
        archived: false,
        legal: DemoLens {
            status: LensStatus::InReview,
            reviewer: Some("Priya N."),
            passed: &["legal-1", "legal-2"],
            notes: None,
            hours_ago: 2,
        },
        brand: UNTOUCHED,
        ux: UNTOUCHED,
    },
    DemoAsset {
        title: "Customer story: Northwind",
        asset_type: AssetType::IgStatic,
        channel: Channel::Instagram,
        link_or_path: Some("figma://northwind-carousel"),
        description: None,
        tags: &["case-study"],
        risk_level: RiskLevel::Low,
        age_hours: 72,
        archived: false,
        legal: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Priya N."),
            passed: &["legal-1", "legal-2", "legal-3", "legal-4"],
            notes: Some("Customer consent form on file."),
            hours_ago: 20,
        },
        brand: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Marco D."),
            passed: &["brand-1", "brand-2", "brand-3", "brand-4"],
            notes: None,
            hours_ago: 18,
        },
        ux: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Jo K."),
            passed: &["ux-1", "ux-2", "ux-3", "ux-4"],
            notes: None,
            hours_ago: 16,
        },
    },
    DemoAsset {
        title: "Supplement ad: clinically proven energy",
        asset_type: AssetType::IgStatic,
        channel: Channel::PaidAds,
        link_or_path: None,
        description: Some("Retargeting creative for the wellness line."),
        tags: &["paid", "wellness"],
        risk_level: RiskLevel::High,
        age_hours: 48,
        archived: false,
        legal: DemoLens {
            status: LensStatus::ChangesRequested,
            reviewer: Some("Priya N."),
            passed: &["legal-1"],
            notes: Some("\"Clinically proven\" needs a cited study or must go."),
            hours_ago: 4,
        },
        brand: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Marco D."),
            passed: &["brand-1", "brand-2", "brand-3", "brand-4"],
            notes: None,
            hours_ago: 10,
        },
        ux: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Jo K."),
            passed: &["ux-1", "ux-2", "ux-3", "ux-4"],
            notes: None,
            hours_ago: 9,
        },
    },
    DemoAsset {
        title: "Q3 newsletter: product updates",
        asset_type: AssetType::Email,
        channel: Channel::Email,
        link_or_path: Some("drive://newsletters/q3-draft.html"),
        description: None,
        tags: &["newsletter"],
        risk_level: RiskLevel::Medium,
        age_hours: 40,
        archived: false,
        legal: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Priya N."),
            passed: &["legal-1", "legal-2", "legal-3", "legal-4"],
            notes: None,
            hours_ago: 12,
        },
        brand: DemoLens {
            status: LensStatus::ChangesRequested,
            reviewer: Some("Marco D."),
            passed: &["brand-2"],
            notes: Some("Header tone is off-brand; use the approved tagline."),
            hours_ago: 3,
        },
        ux: DemoLens {
            status: LensStatus::InReview,
            reviewer: Some("Jo K."),
            passed: &[],
            notes: None,
            hours_ago: 1,
        },
    },
    DemoAsset {
        title: "Holiday gift guide deck",
        asset_type: AssetType::DeckSlide,
        channel: Channel::Deck,
        link_or_path: Some("drive://decks/holiday-gift-guide.pdf"),
        description: Some("Last season's partner deck."),
        tags: &["holiday", "partners"],
        risk_level: RiskLevel::Low,
        age_hours: 24 * 90,
        archived: true,
        legal: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Priya N."),
            passed: &["legal-1", "legal-2", "legal-3", "legal-4"],
            notes: None,
            hours_ago: 24 * 80,
        },
        brand: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Marco D."),
            passed: &["brand-1", "brand-2", "brand-3", "brand-4"],
            notes: None,
            hours_ago: 24 * 80,
        },
        ux: DemoLens {
            status: LensStatus::Approved,
            reviewer: Some("Jo K."),
            passed: &["ux-1", "ux-2", "ux-3", "ux-4"],
            notes: None,
            hours_ago: 24 * 80,
        },
    },
];

fn build_lens(lens: Lens, demo: &DemoLens, now: DateTime<Utc>) -> LensReview {
    let mut review = LensReview::empty_at(lens, now - Duration::hours(demo.hours_ago));
    review.status = demo.status;
    review.reviewer_name = demo.reviewer.map(String::from);
    review.overall_notes = demo.notes.map(String::from);
    for response in &mut review.checklist_responses {
        response.passed = demo.passed.contains(&response.item_id.as_str());
    }
    review
}

fn build(id: String, demo: &DemoAsset, created_by: &str, now: DateTime<Utc>) -> Asset {
    let created_at = now - Duration::hours(demo.age_hours);
    let mut asset = Asset {
        id,
        title: demo.title.to_string(),
        asset_type: demo.asset_type,
        channel: demo.channel,
        link_or_path: demo.link_or_path.map(String::from),
        description: demo.description.map(String::from),
        created_by: created_by.to_string(),
        created_at,
        status: AssetStatus::Draft,
        tags: demo.tags.iter().map(|t| (*t).to_string()).collect(),
        risk_level: demo.risk_level,
        legal: build_lens(Lens::LegalCompliance, &demo.legal, now),
        brand: build_lens(Lens::BrandEthics, &demo.brand, now),
        ux: build_lens(Lens::UxSafety, &demo.ux, now),
    };
    // Untouched lenses carry the creation time.
    for lens in Lens::ALL {
        let review = asset.lens_mut(lens);
        if review.status == LensStatus::NotStarted && review.reviewer_name.is_none() {
            review.last_updated = created_at;
        }
    }
    asset.status = if demo.archived {
        AssetStatus::Archived
    } else {
        derive_asset_status(&asset)
    };
    asset
}

/// Build the demonstration set, one asset per id, authored by `created_by`.
///
/// Timestamps are placed relative to `now` so the set sorts sensibly by
/// recent activity.
#[must_use]
pub fn demo_assets(
    ids: [String; DEMO_ASSET_COUNT],
    created_by: &str,
    now: DateTime<Utc>,
) -> Vec<Asset> {
    ids.into_iter()
        .zip(DEMO.iter())
        .map(|(id, demo)| build(id, demo, created_by, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids() -> [String; DEMO_ASSET_COUNT] {
        std::array::from_fn(|i| format!("ast-demo000{i}"))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn covers_every_asset_status() {
        let assets = demo_assets(ids(), "user_1", now());
        assert_eq!(assets.len(), DEMO_ASSET_COUNT);
        let statuses: HashSet<_> = assets.iter().map(|a| a.status).collect();
        for status in AssetStatus::ALL {
            assert!(statuses.contains(&status), "missing {status}");
        }
    }

    #[test]
    fn non_archived_status_matches_derivation() {
        for asset in demo_assets(ids(), "user_1", now()) {
            if asset.status == AssetStatus::Archived {
                continue;
            }
            assert_eq!(asset.status, derive_asset_status(&asset), "{}", asset.title);
        }
    }

    #[test]
    fn lenses_are_catalog_consistent() {
        for asset in demo_assets(ids(), "user_1", now()) {
            for lens in Lens::ALL {
                assert!(asset.lens(lens).is_consistent());
                assert_eq!(asset.lens(lens).lens, lens);
            }
        }
    }

    #[test]
    fn ids_and_author_are_applied() {
        let assets = demo_assets(ids(), "user_42", now());
        let got: Vec<_> = assets.iter().map(|a| a.id.clone()).collect();
        assert_eq!(got, ids().to_vec());
        assert!(assets.iter().all(|a| a.created_by == "user_42"));
    }

    #[test]
    fn blocked_entry_is_high_risk() {
        let assets = demo_assets(ids(), "user_1", now());
        let blocked = assets
            .iter()
            .find(|a| a.status == AssetStatus::Blocked)
            .unwrap();
        assert_eq!(blocked.risk_level, RiskLevel::High);
        assert_eq!(blocked.legal.status, LensStatus::ChangesRequested);
    }

    #[test]
    fn timestamps_do_not_run_ahead_of_now() {
        for asset in demo_assets(ids(), "user_1", now()) {
            assert!(asset.created_at <= now());
            assert!(asset.last_activity() <= now());
        }
    }
}
