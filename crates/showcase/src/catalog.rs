//! The fixed service catalog behind the Services page

use serde::{Deserialize, Serialize};

/// A single service offering, displayed as one card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Unique within the catalog; used only as a list key
    pub id: u32,

    /// Display title
    pub title: String,

    /// Marketing description
    pub description: String,

    /// Icon token resolved by the renderer; unrecognized tokens are
    /// valid and resolve to the default glyph
    pub icon: String,
}

/// The payload handed from the catalog endpoint to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPayload {
    /// Page title, also the hero heading
    pub title: String,

    /// Offerings in display order
    pub services: Vec<ServiceOffering>,
}

/// Build the catalog payload for the Services page.
///
/// Pure and total: takes no input, performs no I/O, and has no side
/// effects. Every call returns a fresh, structurally equal payload.
pub fn service_catalog() -> CatalogPayload {
    CatalogPayload {
        title: "Our Web Services".to_string(),
        services: vec![
            ServiceOffering {
                id: 1,
                title: "REST API Development".to_string(),
                description: "Custom REST API solutions featuring robust authentication, \
                              rate limiting, and comprehensive documentation."
                    .to_string(),
                icon: "api".to_string(),
            },
            ServiceOffering {
                id: 2,
                title: "Authentication as a Service".to_string(),
                description: "Secure, scalable authentication systems with multi-factor \
                              authentication, OAuth integration, and user management."
                    .to_string(),
                icon: "shield".to_string(),
            },
            ServiceOffering {
                id: 3,
                title: "Data Processing & Analytics".to_string(),
                description: "Real-time data processing pipelines, analytics dashboards, \
                              and business intelligence solutions tailored to your needs."
                    .to_string(),
                icon: "chart".to_string(),
            },
        ],
    }
}
