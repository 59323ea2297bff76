//! schema.org JSON-LD documents embedded in page heads.

use serde_json::{json, Value};

use super::catalog::{CgmDevice, COMPANY_NAME, FAQ, STRUCTURED_FAQ_COUNT};
use super::SiteContext;

const SCHEMA_CONTEXT: &str = "https://schema.org";

pub fn organization(site: &SiteContext) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": COMPANY_NAME,
        "description": "Get your CGM and diabetic supplies covered by your insurance. Medicare Part B and select PPOs supported.",
        "url": site.base_url(),
        "logo": site.url("/logo.png"),
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": "+1-800-CGM-CARE",
            "contactType": "customer service",
            "availableLanguage": "English"
        },
        "address": {
            "@type": "PostalAddress",
            "streetAddress": "123 Healthcare Ave, Suite 100",
            "addressLocality": "Medical City",
            "addressRegion": "MC",
            "postalCode": "12345",
            "addressCountry": "US"
        },
        "sameAs": [
            "https://facebook.com/cgmcare",
            "https://twitter.com/cgmcare",
            "https://linkedin.com/company/cgmcare"
        ]
    })
}

pub fn medical_business(site: &SiteContext) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "MedicalBusiness",
        "name": COMPANY_NAME,
        "description": "Medical device supplier specializing in continuous glucose monitors and diabetic supplies",
        "url": site.base_url(),
        "medicalSpecialty": "Endocrinology",
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Diabetic Supplies",
            "itemListElement": [
                offered_product("Continuous Glucose Monitors", "CGM devices for diabetes management"),
                offered_product("Diabetic Supplies", "Test strips, lancets, and monitoring supplies"),
            ]
        }
    })
}

fn offered_product(name: &str, description: &str) -> Value {
    json!({
        "@type": "Offer",
        "itemOffered": {
            "@type": "Product",
            "name": name,
            "description": description
        }
    })
}

pub fn faq_page() -> Value {
    let questions: Vec<Value> = FAQ
        .iter()
        .take(STRUCTURED_FAQ_COUNT)
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": entry.answer
                }
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions
    })
}

/// Product schema for a cash-pay device; the price is the bare dollar amount.
pub fn product(device: &CgmDevice) -> Value {
    let dollars = f64::from(device.price_cents) / 100.0;
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Product",
        "name": device.name,
        "description": device.description,
        "brand": {
            "@type": "Brand",
            "name": device.brand
        },
        "category": "Medical Device",
        "offers": {
            "@type": "Offer",
            "price": format!("{dollars:.2}"),
            "priceCurrency": "USD",
            "availability": if device.in_stock {
                "https://schema.org/InStock"
            } else {
                "https://schema.org/OutOfStock"
            },
            "seller": {
                "@type": "Organization",
                "name": COMPANY_NAME
            }
        }
    })
}

pub fn speakable() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebPage",
        "speakable": {
            "@type": "SpeakableSpecification",
            "cssSelector": [".faq-question", ".hero-title", ".step-title"]
        }
    })
}

/// Documents every page carries.
pub fn site_wide(site: &SiteContext) -> Vec<Value> {
    vec![
        organization(site),
        medical_business(site),
        faq_page(),
        speakable(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::CGM_DEVICES;

    #[test]
    fn organization_uses_configured_base_url() {
        let site = SiteContext::new("https://staging.cgmcare.test");
        let org = organization(&site);
        assert_eq!(org["url"], "https://staging.cgmcare.test");
        assert_eq!(org["logo"], "https://staging.cgmcare.test/logo.png");
        assert_eq!(org["@type"], "Organization");
    }

    #[test]
    fn faq_schema_lists_leading_questions() {
        let faq = faq_page();
        let entities = faq["mainEntity"].as_array().expect("array of questions");
        assert_eq!(entities.len(), STRUCTURED_FAQ_COUNT);
        assert_eq!(entities[0]["name"], FAQ[0].question);
    }

    #[test]
    fn product_schema_carries_price_and_brand() {
        let schema = product(&CGM_DEVICES[0]);
        assert_eq!(schema["offers"]["price"], "299.00");
        assert_eq!(schema["offers"]["priceCurrency"], "USD");
        assert_eq!(schema["brand"]["name"], "Dexcom");
    }
}
