//! Pure string encodings of the vector logos.
//!
//! A rendering-capable front end can embed the markup directly or via a
//! data URL, bypassing rasterization entirely.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::LogoConfig;
use crate::error::Result;
use crate::logo::Variant;

/// Output encoding for [`logo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Raw SVG markup.
    Svg,
    /// `data:image/svg+xml;base64,...`, suitable for `src`/`href` attributes.
    DataUrl,
    /// Base64 of the markup, without the data-URL prefix.
    Base64,
}

/// Renders a variant and applies the requested encoding.
pub fn logo(config: &LogoConfig, variant: Variant, format: Format) -> Result<String> {
    let svg = variant.render(config)?;
    Ok(match format {
        Format::Svg => svg,
        Format::Base64 => STANDARD.encode(svg.as_bytes()),
        Format::DataUrl => format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_format_is_identity() {
        let config = LogoConfig::default();
        let direct = Variant::Color.render(&config).unwrap();
        let via_logo = logo(&config, Variant::Color, Format::Svg).unwrap();
        assert_eq!(direct, via_logo);
    }

    #[test]
    fn data_url_round_trips() {
        let config = LogoConfig::default();
        let url = logo(&config, Variant::Mono, Format::DataUrl).unwrap();
        let payload = url.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, Variant::Mono.render(&config).unwrap().as_bytes());
    }

    #[test]
    fn base64_format_has_no_prefix() {
        let config = LogoConfig::default();
        let encoded = logo(&config, Variant::White, Format::Base64).unwrap();
        assert!(!encoded.contains(':'));
        let decoded = STANDARD.decode(&encoded).unwrap();
        assert!(String::from_utf8(decoded).unwrap().starts_with("<svg"));
    }
}
