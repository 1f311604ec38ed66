//! Serde roundtrip and JsonSchema validation tests for stored entity types.

use std::collections::BTreeSet;

use chrono::Utc;
use hub_core::audit_detail::{
    CommentedDetail, LensChange, LensUpdatedDetail, StatusChangedDetail,
};
use hub_core::entities::*;
use hub_core::enums::*;
use hub_core::identity::ReviewerIdentity;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn reviewed_lens() -> LensReview {
    let mut review = LensReview::empty(Lens::BrandEthics);
    review.status = LensStatus::ChangesRequested;
    review.reviewer_name = Some("Marco D.".into());
    review.overall_notes = Some("Swap the hero image.".into());
    review.checklist_responses[0].passed = true;
    review.checklist_responses[2].notes = Some("Logo too small".into());
    review
}

fn new_asset() -> NewAsset {
    NewAsset {
        title: "Referral landing page".into(),
        asset_type: AssetType::LandingPage,
        channel: Channel::Site,
        link_or_path: Some("https://staging.example.com/refer".into()),
        description: None,
        tags: vec!["growth".into(), "referral".into()],
        risk_level: RiskLevel::Medium,
    }
}

roundtrip_and_validate!(lens_review_roundtrip, LensReview, reviewed_lens());

roundtrip_and_validate!(
    checklist_response_roundtrip,
    ChecklistResponse,
    ChecklistResponse {
        item_id: "ux-3".into(),
        passed: true,
        notes: None,
    }
);

roundtrip_and_validate!(new_asset_roundtrip, NewAsset, new_asset());

roundtrip_and_validate!(asset_roundtrip, Asset, {
    let mut asset = Asset::new_at("ast-a3f8b2c1", new_asset(), "user_1", Utc::now()).unwrap();
    asset.brand = reviewed_lens();
    asset.status = AssetStatus::InReview;
    asset
});

roundtrip_and_validate!(
    archived_asset_roundtrip,
    Asset,
    Asset {
        status: AssetStatus::Archived,
        tags: BTreeSet::new(),
        ..Asset::new_at("ast-0000beef", new_asset(), "user_1", Utc::now()).unwrap()
    }
);

roundtrip_and_validate!(
    comment_roundtrip,
    Comment,
    Comment {
        id: "cmt-1b2c3d4e".into(),
        asset_id: "ast-a3f8b2c1".into(),
        text: "Can we get legal eyes on the footer?".into(),
        created_by: "user_1".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: "aud-9f8e7d6c".into(),
        user_id: "user_1".into(),
        asset_id: "ast-a3f8b2c1".into(),
        action: AuditAction::LensUpdated,
        detail: Some(
            serde_json::to_value(LensUpdatedDetail {
                lens: Lens::UxSafety,
                change: LensChange::Checklist {
                    item_id: "ux-2".into(),
                    passed: true,
                },
            })
            .unwrap()
        ),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    audit_entry_without_detail_roundtrip,
    AuditEntry,
    AuditEntry {
        id: "aud-00000001".into(),
        user_id: "user_1".into(),
        asset_id: "ast-a3f8b2c1".into(),
        action: AuditAction::Created,
        detail: None,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    status_changed_detail_roundtrip,
    StatusChangedDetail,
    StatusChangedDetail {
        from: AssetStatus::InReview,
        to: AssetStatus::Blocked,
    }
);

roundtrip_and_validate!(
    lens_updated_notes_roundtrip,
    LensUpdatedDetail,
    LensUpdatedDetail {
        lens: Lens::LegalCompliance,
        change: LensChange::Notes,
    }
);

roundtrip_and_validate!(
    lens_updated_status_roundtrip,
    LensUpdatedDetail,
    LensUpdatedDetail {
        lens: Lens::BrandEthics,
        change: LensChange::Status {
            status: LensStatus::Approved,
        },
    }
);

roundtrip_and_validate!(
    commented_detail_roundtrip,
    CommentedDetail,
    CommentedDetail {
        comment_id: "cmt-1b2c3d4e".into(),
    }
);

roundtrip_and_validate!(
    reviewer_identity_roundtrip,
    ReviewerIdentity,
    ReviewerIdentity::new("user_1", Some("Dana".into()))
);

#[test]
fn lens_review_json_shape() {
    let json = serde_json::to_value(reviewed_lens()).unwrap();
    assert_eq!(json["lens"], "brand_ethics");
    assert_eq!(json["status"], "changes_requested");
    assert_eq!(json["checklist_responses"].as_array().unwrap().len(), 6);
}

#[test]
fn lens_change_is_internally_tagged() {
    let json = serde_json::to_value(LensChange::Status {
        status: LensStatus::InReview,
    })
    .unwrap();
    assert_eq!(json["kind"], "status");
    assert_eq!(json["status"], "in_review");
}
