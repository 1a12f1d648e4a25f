use showcase::{CatalogPayload, FixedClock, ServiceOffering, render_page, service_catalog};
use time::macros::datetime;

fn clock() -> FixedClock {
    FixedClock(datetime!(2026-08-30 12:00:00 UTC))
}

fn card_count(html: &str) -> usize {
    html.matches("<article class=\"card\">").count()
}

fn offering(id: u32, title: &str, icon: &str) -> ServiceOffering {
    ServiceOffering {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        icon: icon.to_string(),
    }
}

#[test]
fn test_renders_one_card_per_offering_in_payload_order() {
    let html = render_page(&service_catalog(), &clock());

    assert_eq!(card_count(&html), 3);

    let api = html.find("data-icon=\"api\"").unwrap();
    let shield = html.find("data-icon=\"shield\"").unwrap();
    let chart = html.find("data-icon=\"chart\"").unwrap();
    assert!(api < shield);
    assert!(shield < chart);

    let first = html.find("REST API Development").unwrap();
    let second = html.find("Authentication as a Service").unwrap();
    assert!(first < second);
}

#[test]
fn test_full_page_scenario() {
    let html = render_page(&service_catalog(), &clock());

    // Hero carries the payload title
    assert!(html.contains("<h1>Our Web Services</h1>"));

    // Header nav and call-to-action link to the external routes
    assert!(html.contains("href=\"/\""));
    assert!(html.contains("href=\"/contact\""));
    assert!(html.contains("Ready to Get Started?"));
    assert!(html.contains("Contact Us Today"));

    // Footer interpolates the injected clock's year
    assert!(html.contains("&copy; 2026"));
}

#[test]
fn test_footer_year_tracks_the_injected_clock() {
    let past = FixedClock(datetime!(1999-12-31 23:59:59 UTC));
    let html = render_page(&service_catalog(), &past);

    assert!(html.contains("&copy; 1999"));
    assert!(!html.contains("&copy; 2026"));
}

#[test]
fn test_empty_catalog_renders_zero_cards() {
    let payload = CatalogPayload {
        title: "Our Web Services".to_string(),
        services: Vec::new(),
    };
    let html = render_page(&payload, &clock());

    assert_eq!(card_count(&html), 0);
    // The page around the grid is still intact
    assert!(html.contains("<h1>Our Web Services</h1>"));
    assert!(html.contains("&copy; 2026"));
}

#[test]
fn test_unknown_icon_token_renders_the_api_glyph() {
    let payload = CatalogPayload {
        title: "Catalog".to_string(),
        services: vec![offering(1, "Mystery Service", "unknown")],
    };
    let html = render_page(&payload, &clock());

    assert_eq!(card_count(&html), 1);
    assert!(html.contains("data-icon=\"api\""));
    assert!(!html.contains("data-icon=\"shield\""));
    assert!(!html.contains("data-icon=\"chart\""));
}

#[test]
fn test_display_strings_are_escaped() {
    let payload = CatalogPayload {
        title: "Tools & <Tips>".to_string(),
        services: vec![offering(1, "\"Quoted\" <Service>", "api")],
    };
    let html = render_page(&payload, &clock());

    assert!(html.contains("Tools &amp; &lt;Tips&gt;"));
    assert!(html.contains("&quot;Quoted&quot; &lt;Service&gt;"));
    assert!(!html.contains("<Tips>"));
    assert!(!html.contains("<Service>"));
}

#[test]
fn test_ampersand_in_catalog_title_is_escaped() {
    let html = render_page(&service_catalog(), &clock());
    assert!(html.contains("Data Processing &amp; Analytics"));
}
