//! Shared document shell: head metadata, header navigation, and footer.

use std::fmt::Write;

use chrono::{Datelike, Utc};
use serde_json::Value;

use super::catalog::{
    COMPANY_NAME, CONTACT_CONSENT_NOTICE, LEGAL_LINKS, MAIN_NAVIGATION, SUPPORT_LINKS,
};
use super::html::{escape, link, script_json};
use super::structured_data;
use super::SiteContext;

pub const DEFAULT_KEYWORDS: &str = "CGM, continuous glucose monitor, diabetic supplies, Medicare Part B, insurance coverage, diabetes management";

const FOOTER_TAGLINE: &str =
    "HIPAA-compliant diabetes management platform trusted by 50,000+ patients nationwide.";

/// Head metadata for one page.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta<'a> {
    pub path: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub keywords: &'a str,
}

/// Wrap a rendered `<main>` body in the full document.
pub fn render_document(
    site: &SiteContext,
    meta: &PageMeta<'_>,
    body: &str,
    page_schemas: &[Value],
) -> String {
    let mut out = String::with_capacity(body.len() + 4096);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape(meta.title));
    let _ = writeln!(
        out,
        "<meta name=\"description\" content=\"{}\">",
        escape(meta.description)
    );
    let _ = writeln!(
        out,
        "<meta name=\"keywords\" content=\"{}\">",
        escape(meta.keywords)
    );
    out.push_str("<meta name=\"robots\" content=\"index, follow\">\n");
    let _ = writeln!(
        out,
        "<link rel=\"canonical\" href=\"{}\">",
        escape(&site.url(meta.path))
    );
    let _ = writeln!(
        out,
        "<meta property=\"og:title\" content=\"{}\">\n<meta property=\"og:description\" content=\"{}\">",
        escape(meta.title),
        escape(meta.description)
    );
    out.push_str("<meta property=\"og:type\" content=\"website\">\n");
    out.push_str("<meta property=\"og:locale\" content=\"en_US\">\n");
    out.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");

    for schema in structured_data::site_wide(site)
        .iter()
        .chain(page_schemas.iter())
    {
        let _ = writeln!(
            out,
            "<script type=\"application/ld+json\">{}</script>",
            script_json(schema)
        );
    }
    out.push_str("</head>\n<body>\n");

    render_header(&mut out, meta.path);
    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("\n</main>\n");
    render_footer(&mut out);

    out.push_str("</body>\n</html>\n");
    out
}

fn render_header(out: &mut String, active_path: &str) {
    out.push_str("<header class=\"site-header\">\n<nav aria-label=\"Global\">\n");
    let _ = write!(
        out,
        "<a class=\"brand\" href=\"/\"><span class=\"brand-mark\">C</span>{}</a>",
        escape(COMPANY_NAME)
    );
    out.push_str("<ul class=\"nav-links\">");
    for item in MAIN_NAVIGATION {
        let current = if item.href == active_path {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = write!(
            out,
            "<li><a href=\"{}\"{}>{}</a></li>",
            escape(item.href),
            current,
            escape(item.label)
        );
    }
    out.push_str("</ul>");
    link(out, "/patient-portal", "Patient Portal", "nav-secondary");
    link(out, "/check-coverage", "Check Coverage", "button primary");
    out.push_str("\n</nav>\n</header>\n");
}

fn render_footer(out: &mut String) {
    out.push_str("<footer class=\"site-footer\">\n");
    let _ = write!(
        out,
        "<div class=\"footer-brand\"><strong>{}</strong><p>{}</p></div>",
        escape(COMPANY_NAME),
        escape(FOOTER_TAGLINE)
    );

    for (heading, links) in [
        ("Services", MAIN_NAVIGATION),
        ("Support", SUPPORT_LINKS),
        ("Legal", LEGAL_LINKS),
    ] {
        let _ = write!(out, "<div class=\"footer-links\"><h3>{}</h3><ul>", heading);
        for item in links {
            let _ = write!(
                out,
                "<li><a href=\"{}\">{}</a></li>",
                escape(item.href),
                escape(item.label)
            );
        }
        out.push_str("</ul></div>");
    }

    let _ = write!(
        out,
        "\n<p class=\"disclaimer\">{}</p>\n<p class=\"copyright\">&copy; {} {}. All rights reserved.</p>\n",
        escape(CONTACT_CONSENT_NOTICE),
        Utc::now().year(),
        escape(COMPANY_NAME)
    );
    out.push_str("</footer>\n");
}
