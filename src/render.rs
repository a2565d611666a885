//! Static page renderer
//!
//! Produces the full HTML document for the landing page from a projected
//! [`TenantProfile`], or the "profile unavailable" placeholder when the
//! lookup failed soft. Presentation glue only: conditional display of
//! optional fields, one carousel slide per service label, and the contact
//! form posting to the relay endpoint. All interpolated fields are
//! HTML-escaped; tenant documents are authored out-of-band and not trusted.

use crate::profile::TenantProfile;

/// Render the landing page, falling back to the placeholder when no profile
/// is available.
pub fn page(profile: Option<&TenantProfile>) -> String {
    match profile {
        Some(profile) => profile_page(profile),
        None => not_found(),
    }
}

/// Placeholder served when the tenant record is missing or the store is
/// unreachable. Deliberately a plain 200 page: a broken data layer must not
/// surface as a server error.
pub fn not_found() -> String {
    document(
        "Profile unavailable",
        r#"    <h1>Profile unavailable</h1>
    <p>This page is not set up yet. Please check back soon.</p>
"#
        .to_string(),
    )
}

fn profile_page(profile: &TenantProfile) -> String {
    let title = if profile.company_name.is_empty() {
        escape(&profile.name)
    } else {
        escape(&profile.company_name)
    };

    let mut body = String::new();

    body.push_str(&format!("    <h1>{}</h1>\n", escape(&profile.name)));
    if !profile.company_name.is_empty() {
        body.push_str(&format!(
            "    <h2>{}</h2>\n",
            escape(&profile.company_name)
        ));
    }
    if !profile.intro.is_empty() {
        body.push_str(&format!(
            "    <p class=\"intro\">{}</p>\n",
            escape(&profile.intro)
        ));
    }

    body.push_str("    <ul class=\"contact-details\">\n");
    body.push_str(&format!(
        "      <li>{}</li>\n",
        escape(&profile.telephone)
    ));
    body.push_str(&format!(
        "      <li>{}</li>\n",
        escape(&profile.address_one)
    ));
    if !profile.address_two.is_empty() {
        body.push_str(&format!(
            "      <li>{}</li>\n",
            escape(&profile.address_two)
        ));
    }
    body.push_str(&format!("      <li>{}</li>\n", escape(&profile.email)));
    body.push_str("    </ul>\n");

    body.push_str(&social_links(profile));

    if !profile.skills.is_empty() {
        body.push_str(&format!(
            "    <p class=\"skills\">{}</p>\n",
            escape(&profile.skills)
        ));
    }

    body.push_str(&carousel(&profile.skills_list));
    body.push_str(CONTACT_FORM);

    document(&title, body)
}

fn social_links(profile: &TenantProfile) -> String {
    let handles = [
        ("facebook", &profile.facebook),
        ("instagram", &profile.instagram),
        ("twitter", &profile.twitter),
    ];

    let mut items = String::new();
    for (platform, handle) in handles {
        if !handle.is_empty() {
            items.push_str(&format!(
                "      <li class=\"social-{platform}\">{}</li>\n",
                escape(handle)
            ));
        }
    }

    if items.is_empty() {
        return String::new();
    }
    format!("    <ul class=\"social-links\">\n{items}    </ul>\n")
}

/// One slide per service label; an absent list renders zero slides.
fn carousel(skills_list: &[String]) -> String {
    if skills_list.is_empty() {
        return String::new();
    }

    let mut slides = String::new();
    for skill in skills_list {
        slides.push_str(&format!(
            "      <div class=\"carousel-slide\">{}</div>\n",
            escape(skill)
        ));
    }
    format!("    <div class=\"carousel\">\n{slides}    </div>\n")
}

const CONTACT_FORM: &str = r#"    <form class="contact-form" method="post" action="/api/contact">
      <input type="text" name="name" placeholder="Your name" required>
      <input type="email" name="email" placeholder="Your email" required>
      <textarea name="message" placeholder="Your message" required></textarea>
      <button type="submit">Send</button>
    </form>
"#;

fn document(title: &str, body: String) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
  </head>
  <body>
{body}  </body>
</html>
"#
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
