//! Renders a catalog payload into the Services page markup
//!
//! Single-pass transformation: header, hero, one card per offering in
//! payload order, call-to-action, footer. The only conditional is the
//! icon fallback in [`ServiceIcon::from_key`]; the only ambient read is
//! the footer year taken from the injected [`Clock`].

use crate::catalog::{CatalogPayload, ServiceOffering};
use crate::clock::Clock;
use crate::icon::ServiceIcon;

/// Brand shown in the header link and the copyright line
const SITE_NAME: &str = "Showcase Web Studio";

// Link destinations owned by the surrounding routing layer
const HOME_HREF: &str = "/";
const CONTACT_HREF: &str = "/contact";

const HERO_COPY: &str = "We provide cutting-edge web development services designed to \
     help your business thrive in the digital landscape. Our expert team delivers \
     scalable, secure, and innovative solutions tailored to your specific needs.";

const CTA_HEADING: &str = "Ready to Get Started?";
const CTA_COPY: &str = "Let's discuss how our web services can help transform your \
     business. Our team is ready to bring your vision to life.";
const CTA_LABEL: &str = "Contact Us Today";

const STYLE: &str = "\
    body{margin:0;font-family:system-ui,sans-serif;color:#1a1a2e;background:#fafafa}\
    .container{max-width:72rem;margin:0 auto;padding:0 1rem}\
    header{border-bottom:1px solid #e5e5e5;padding:1rem 0}\
    nav{display:flex;justify-content:space-between;align-items:center}\
    nav a{color:inherit;text-decoration:none}\
    .hero{text-align:center;margin:4rem 0}\
    .grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr));gap:2rem}\
    .card{border:1px solid #e5e5e5;border-radius:0.75rem;padding:1.5rem;text-align:center;background:#fff}\
    .card-glyph{color:#4338ca}\
    .cta{text-align:center;border:1px solid #e5e5e5;border-radius:1rem;padding:3rem;margin:4rem 0;background:#fff}\
    .cta a{display:inline-block;background:#4338ca;color:#fff;padding:0.75rem 2rem;border-radius:0.5rem;text-decoration:none}\
    footer{border-top:1px solid #e5e5e5;padding:2rem 0;text-align:center;color:#6b7280}";

/// Render the full Services page for the given payload.
///
/// Cards appear in `payload.services` order; an empty payload renders an
/// empty grid. The footer year is read from `clock` at call time, never
/// cached across renders.
pub fn render_page(payload: &CatalogPayload, clock: &dyn Clock) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>");
    push_escaped(&mut html, &payload.title);
    html.push_str("</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    push_header(&mut html);

    html.push_str("<main class=\"container\">\n");
    push_hero(&mut html, &payload.title);

    html.push_str("<div class=\"grid\">\n");
    for service in &payload.services {
        push_card(&mut html, service);
    }
    html.push_str("</div>\n");

    push_cta(&mut html);
    html.push_str("</main>\n");

    push_footer(&mut html, clock.year());
    html.push_str("</body>\n</html>\n");

    html
}

fn push_header(html: &mut String) {
    html.push_str("<header>\n<div class=\"container\">\n<nav>\n");
    html.push_str(&format!(
        "<a class=\"brand\" href=\"{HOME_HREF}\">{SITE_NAME}</a>\n"
    ));
    html.push_str(&format!(
        "<div>\n<a href=\"{HOME_HREF}\">Home</a>\n<a href=\"{CONTACT_HREF}\">Contact</a>\n</div>\n"
    ));
    html.push_str("</nav>\n</div>\n</header>\n");
}

fn push_hero(html: &mut String, title: &str) {
    html.push_str("<section class=\"hero\">\n<h1>");
    push_escaped(html, title);
    html.push_str("</h1>\n<p>");
    html.push_str(HERO_COPY);
    html.push_str("</p>\n</section>\n");
}

fn push_card(html: &mut String, service: &ServiceOffering) {
    html.push_str("<article class=\"card\">\n");
    html.push_str(ServiceIcon::from_key(&service.icon).svg());
    html.push_str("\n<h2>");
    push_escaped(html, &service.title);
    html.push_str("</h2>\n<p>");
    push_escaped(html, &service.description);
    html.push_str("</p>\n</article>\n");
}

fn push_cta(html: &mut String) {
    html.push_str("<section class=\"cta\">\n<h2>");
    html.push_str(CTA_HEADING);
    html.push_str("</h2>\n<p>");
    html.push_str(CTA_COPY);
    html.push_str("</p>\n");
    html.push_str(&format!("<a href=\"{CONTACT_HREF}\">{CTA_LABEL}</a>\n"));
    html.push_str("</section>\n");
}

fn push_footer(html: &mut String, year: i32) {
    html.push_str("<footer>\n<div class=\"container\">\n<p>&copy; ");
    html.push_str(&year.to_string());
    html.push(' ');
    html.push_str(SITE_NAME);
    html.push_str(". All rights reserved.</p>\n</div>\n</footer>\n");
}

/// Append `text` with HTML metacharacters escaped. Payload strings are
/// trusted content today, but they still pass through here so a future
/// data source cannot break the markup.
fn push_escaped(html: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '"' => html.push_str("&quot;"),
            '\'' => html.push_str("&#39;"),
            _ => html.push(c),
        }
    }
}
