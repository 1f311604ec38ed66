//! Checklist catalog: the fixed questions each lens asks of an asset.
//!
//! The catalog is compiled in. Adding or removing an item is a deployment
//! change; nothing mutates it at runtime. Every `LensReview` holds exactly one
//! response per item listed here for its lens.

use serde::Serialize;

use crate::enums::Lens;

/// A single yes/no question within a lens checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistItem {
    pub id: &'static str,
    pub lens: Lens,
    pub label: &'static str,
    pub description: &'static str,
    pub required: bool,
}

const fn item(
    id: &'static str,
    lens: Lens,
    label: &'static str,
    description: &'static str,
    required: bool,
) -> ChecklistItem {
    ChecklistItem {
        id,
        lens,
        label,
        description,
        required,
    }
}

const LEGAL_COMPLIANCE: [ChecklistItem; 6] = [
    item(
        "legal-1",
        Lens::LegalCompliance,
        "Claims substantiated",
        "Every performance, health, or financial claim is backed by documented evidence.",
        true,
    ),
    item(
        "legal-2",
        Lens::LegalCompliance,
        "Required disclosures present",
        "Sponsorship, affiliate, and #ad disclosures are visible without expanding the post.",
        true,
    ),
    item(
        "legal-3",
        Lens::LegalCompliance,
        "Third-party rights cleared",
        "Music, footage, fonts, and trademarks are licensed or owned.",
        true,
    ),
    item(
        "legal-4",
        Lens::LegalCompliance,
        "Talent releases on file",
        "Anyone identifiable in the asset has signed a release.",
        true,
    ),
    item(
        "legal-5",
        Lens::LegalCompliance,
        "Promotion terms linked",
        "Giveaways, discounts, and contests link to official terms.",
        false,
    ),
    item(
        "legal-6",
        Lens::LegalCompliance,
        "Privacy language reviewed",
        "Any data collection is covered by the current privacy policy.",
        false,
    ),
];

const BRAND_ETHICS: [ChecklistItem; 6] = [
    item(
        "brand-1",
        Lens::BrandEthics,
        "Voice and tone on brand",
        "Copy matches the brand voice guide.",
        true,
    ),
    item(
        "brand-2",
        Lens::BrandEthics,
        "Visual identity respected",
        "Logo usage, colors, and typography follow the brand kit.",
        true,
    ),
    item(
        "brand-3",
        Lens::BrandEthics,
        "Inclusive representation",
        "Imagery and language avoid stereotypes and exclusionary framing.",
        true,
    ),
    item(
        "brand-4",
        Lens::BrandEthics,
        "No manipulative urgency",
        "Scarcity or countdown messaging reflects real constraints.",
        true,
    ),
    item(
        "brand-5",
        Lens::BrandEthics,
        "Competitor mentions fair",
        "Comparisons are accurate and not disparaging.",
        false,
    ),
    item(
        "brand-6",
        Lens::BrandEthics,
        "Cultural context checked",
        "References, holidays, and slang were checked for the target audience.",
        false,
    ),
];

const UX_SAFETY: [ChecklistItem; 6] = [
    item(
        "ux-1",
        Lens::UxSafety,
        "Accessible contrast and text",
        "Text meets contrast guidelines and is legible on mobile.",
        true,
    ),
    item(
        "ux-2",
        Lens::UxSafety,
        "Captions and alt text",
        "Video is captioned and images have alt text.",
        true,
    ),
    item(
        "ux-3",
        Lens::UxSafety,
        "Links resolve",
        "Every link and QR code points to a live, correct destination.",
        true,
    ),
    item(
        "ux-4",
        Lens::UxSafety,
        "No harmful challenges",
        "The asset does not encourage unsafe behavior or trends.",
        true,
    ),
    item(
        "ux-5",
        Lens::UxSafety,
        "Flashing content avoided",
        "No rapid flashing that could trigger photosensitive viewers.",
        false,
    ),
    item(
        "ux-6",
        Lens::UxSafety,
        "Age-appropriate audience",
        "Targeting and content are suitable for the intended age range.",
        false,
    ),
];

/// Ordered checklist for `lens`, stable for the lifetime of the process.
#[must_use]
pub const fn checklist(lens: Lens) -> &'static [ChecklistItem] {
    match lens {
        Lens::LegalCompliance => &LEGAL_COMPLIANCE,
        Lens::BrandEthics => &BRAND_ETHICS,
        Lens::UxSafety => &UX_SAFETY,
    }
}

/// Look up `item_id` within a single lens. Items from other lenses never match.
#[must_use]
pub fn find_item(lens: Lens, item_id: &str) -> Option<&'static ChecklistItem> {
    checklist(lens).iter().find(|item| item.id == item_id)
}
