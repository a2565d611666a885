//! Tenant profile domain model and record projector
//!
//! Tenant documents are authored out-of-band by administrative tooling and
//! carry no store-level schema, so any field may be missing. The projector
//! here converts that loosely-shaped document into a fully-shaped
//! [`TenantProfile`] in one place, so downstream consumers (renderer, CLI)
//! never null-check optional fields.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

/// Optional scalar fields and the wire keys they are read from.
///
/// Each of these defaults to the empty string when the stored document omits
/// it; `skillsList` (the only non-scalar optional field) defaults to an empty
/// vector. The table exists so the missing-field policy stays auditable in
/// one place rather than scattered through accessor chains.
pub const OPTIONAL_STRING_FIELDS: &[&str] = &[
    "addressTwo",
    "facebook",
    "instagram",
    "twitter",
    "skills",
    "intro",
];

/// Required scalar fields.
///
/// The projector passes these through unchanged but does not verify their
/// presence or type; a document missing one yields an empty string in the
/// projected record. That is a known weakness of the stored shape, carried
/// over deliberately rather than silently tightened.
pub const REQUIRED_STRING_FIELDS: &[&str] =
    &["name", "telephone", "addressOne", "companyName", "email"];

/// Fully-shaped tenant record handed to the presentation layer.
///
/// Read-only from this service's perspective; created and mutated entirely
/// out-of-band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantProfile {
    pub name: String,
    pub telephone: String,
    pub address_one: String,
    pub company_name: String,
    pub email: String,
    /// Defaults to `""` when absent from storage.
    pub address_two: String,
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    /// Free-text services description.
    pub skills: String,
    /// Ordered service labels, one carousel slide each. Defaults to empty.
    pub skills_list: Vec<String>,
    pub intro: String,
}

/// Contact-form submission. Ephemeral: constructed from form input, exists
/// only for the duration of one outbound send, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Project a possibly-partial stored document into a [`TenantProfile`].
///
/// Pure function of its input. `None` in yields `None` out; a present
/// document always projects, substituting the declared defaults for absent
/// optional fields and passing present fields through unchanged. Never
/// raises on missing fields; upstream lookup failures are the caller's
/// responsibility.
pub fn project_profile(document: Option<Document>) -> Option<TenantProfile> {
    let doc = document?;

    Some(TenantProfile {
        name: string_field(&doc, "name"),
        telephone: string_field(&doc, "telephone"),
        address_one: string_field(&doc, "addressOne"),
        company_name: string_field(&doc, "companyName"),
        email: string_field(&doc, "email"),
        address_two: string_field(&doc, "addressTwo"),
        facebook: string_field(&doc, "facebook"),
        instagram: string_field(&doc, "instagram"),
        twitter: string_field(&doc, "twitter"),
        skills: string_field(&doc, "skills"),
        skills_list: string_list_field(&doc, "skillsList"),
        intro: string_field(&doc, "intro"),
    })
}

fn string_field(doc: &Document, key: &str) -> String {
    doc.get_str(key).unwrap_or_default().to_string()
}

fn string_list_field(doc: &Document, key: &str) -> Vec<String> {
    match doc.get_array(key) {
        Ok(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::to_string)
            .collect(),
        Err(_) => Vec::new(),
    }
}

impl TenantProfile {
    /// Look up a projected optional scalar by its wire key. Used by tests to
    /// audit the default table against the struct shape.
    pub fn optional_field(&self, key: &str) -> Option<&str> {
        match key {
            "addressTwo" => Some(&self.address_two),
            "facebook" => Some(&self.facebook),
            "instagram" => Some(&self.instagram),
            "twitter" => Some(&self.twitter),
            "skills" => Some(&self.skills),
            "intro" => Some(&self.intro),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use proptest::prelude::*;

    fn full_document() -> Document {
        doc! {
            "name": "Dan Turnbull",
            "telephone": "07700 900123",
            "addressOne": "1 High Street",
            "companyName": "Turnbull Landscaping",
            "email": "dan@example.com",
            "addressTwo": "Leeds",
            "facebook": "turnbull.landscaping",
            "instagram": "@turnbull_gardens",
            "twitter": "@turnbulls",
            "skills": "Patios, decking and garden design",
            "skillsList": ["Patios", "Decking", "Turfing"],
            "intro": "Family-run landscapers covering West Yorkshire.",
        }
    }

    #[test]
    fn absent_input_projects_to_absent_output() {
        assert_eq!(project_profile(None), None);
    }

    #[test]
    fn full_document_passes_through_unchanged() {
        let profile = project_profile(Some(full_document())).unwrap();
        assert_eq!(profile.name, "Dan Turnbull");
        assert_eq!(profile.company_name, "Turnbull Landscaping");
        assert_eq!(profile.address_two, "Leeds");
        assert_eq!(
            profile.skills_list,
            vec!["Patios", "Decking", "Turfing"]
        );
    }

    #[test]
    fn missing_optional_fields_take_declared_defaults() {
        let doc = doc! {
            "name": "Dan Turnbull",
            "telephone": "07700 900123",
            "addressOne": "1 High Street",
            "companyName": "Turnbull Landscaping",
            "email": "dan@example.com",
        };

        let profile = project_profile(Some(doc)).unwrap();
        for key in OPTIONAL_STRING_FIELDS {
            assert_eq!(profile.optional_field(key), Some(""), "field {key}");
        }
        assert!(profile.skills_list.is_empty());
    }

    #[test]
    fn missing_required_field_yields_empty_value_not_error() {
        // Known weakness of the stored shape: required fields are not
        // validated, only passed through.
        let profile = project_profile(Some(doc! { "name": "Dan" })).unwrap();
        assert_eq!(profile.telephone, "");
        assert_eq!(profile.email, "");
    }

    #[test]
    fn non_string_list_entries_are_skipped() {
        let mut doc = full_document();
        doc.insert("skillsList", vec![mongodb::bson::Bson::Int32(7)]);
        let profile = project_profile(Some(doc)).unwrap();
        assert!(profile.skills_list.is_empty());
    }

    proptest! {
        /// For any subset of absent optional fields, the projection carries
        /// the default in exactly those positions and passes the rest
        /// through unchanged.
        #[test]
        fn optional_subset_defaults_exactly(present in proptest::collection::vec(any::<bool>(), 6)) {
            let mut doc = doc! {
                "name": "Dan Turnbull",
                "telephone": "07700 900123",
                "addressOne": "1 High Street",
                "companyName": "Turnbull Landscaping",
                "email": "dan@example.com",
            };
            for (key, keep) in OPTIONAL_STRING_FIELDS.iter().zip(&present) {
                if *keep {
                    doc.insert(*key, format!("value-{key}"));
                }
            }

            let profile = project_profile(Some(doc)).unwrap();
            for (key, keep) in OPTIONAL_STRING_FIELDS.iter().zip(&present) {
                let expected = if *keep {
                    format!("value-{key}")
                } else {
                    String::new()
                };
                prop_assert_eq!(profile.optional_field(key).unwrap(), expected);
            }
        }
    }
}
