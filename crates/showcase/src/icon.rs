//! Icon resolution for service cards

/// Glyph shown at the top of a service card, selected by the offering's
/// icon token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceIcon {
    Api,
    Shield,
    Chart,
}

impl ServiceIcon {
    /// Resolve an icon token.
    ///
    /// Any token outside the known set, including the empty string,
    /// resolves to `Api`. The fallback is silent: an unrecognized token
    /// is valid input, not an error.
    pub fn from_key(key: &str) -> Self {
        match key {
            "shield" => ServiceIcon::Shield,
            "chart" => ServiceIcon::Chart,
            // "api" and every unknown token, including "", land here
            _ => ServiceIcon::Api,
        }
    }

    /// Token this icon is registered under
    pub fn key(&self) -> &'static str {
        match self {
            ServiceIcon::Api => "api",
            ServiceIcon::Shield => "shield",
            ServiceIcon::Chart => "chart",
        }
    }

    /// Inline SVG glyph for the card header
    pub fn svg(&self) -> &'static str {
        match self {
            ServiceIcon::Api => API_GLYPH,
            ServiceIcon::Shield => SHIELD_GLYPH,
            ServiceIcon::Chart => CHART_GLYPH,
        }
    }
}

const API_GLYPH: &str = r#"<svg class="card-glyph" data-icon="api" xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/></svg>"#;

const SHIELD_GLYPH: &str = r#"<svg class="card-glyph" data-icon="shield" xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/></svg>"#;

const CHART_GLYPH: &str = r#"<svg class="card-glyph" data-icon="chart" xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="12" y1="20" x2="12" y2="10"/><line x1="18" y1="20" x2="18" y2="4"/><line x1="6" y1="20" x2="6" y2="16"/></svg>"#;
