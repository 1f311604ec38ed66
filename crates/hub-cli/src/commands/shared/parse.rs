use hub_core::enums::Lens;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional filter value.
pub fn parse_opt_enum<T>(raw: Option<&str>, field: &str) -> anyhow::Result<Option<T>>
where
    T: DeserializeOwned,
{
    raw.map(|value| parse_enum(value, field)).transpose()
}

/// Parse a lens by short name (`legal`, `brand`, `ux`) or full snake_case name.
pub fn parse_lens(raw: &str) -> anyhow::Result<Lens> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "legal" => Ok(Lens::LegalCompliance),
        "brand" => Ok(Lens::BrandEthics),
        "ux" => Ok(Lens::UxSafety),
        _ => parse_enum(raw, "lens"),
    }
}

#[cfg(test)]
mod tests {
    use hub_core::enums::{AssetType, Channel, Lens, LensStatus};

    use super::{parse_enum, parse_lens, parse_opt_enum};

    #[test]
    fn parses_snake_case_enum() {
        let status: LensStatus = parse_enum("approved", "status").expect("status should parse");
        assert_eq!(status, LensStatus::Approved);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: LensStatus =
            parse_enum("changes-requested", "status").expect("status should parse");
        assert_eq!(status, LensStatus::ChangesRequested);

        let asset_type: AssetType =
            parse_enum("tiktok-script", "type").expect("type should parse");
        assert_eq!(asset_type, AssetType::TiktokScript);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Channel>("web", "channel").expect_err("should fail");
        assert!(err.to_string().contains("invalid channel 'web'"));
    }

    #[test]
    fn optional_none_stays_none() {
        let parsed: Option<Channel> = parse_opt_enum(None, "channel").expect("none parses");
        assert_eq!(parsed, None);
        let parsed: Option<Channel> =
            parse_opt_enum(Some("paid-ads"), "channel").expect("value parses");
        assert_eq!(parsed, Some(Channel::PaidAds));
    }

    #[test]
    fn lens_accepts_short_and_full_names() {
        assert_eq!(parse_lens("legal").expect("short"), Lens::LegalCompliance);
        assert_eq!(parse_lens("Brand").expect("short"), Lens::BrandEthics);
        assert_eq!(parse_lens("ux-safety").expect("full"), Lens::UxSafety);
        assert!(parse_lens("seo").is_err());
    }
}
