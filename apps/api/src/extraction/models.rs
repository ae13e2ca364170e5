use serde::{Deserialize, Serialize};

/// Contact details lifted from an uploaded résumé.
///
/// Every field is a `String` and every field has a serde default: a
/// schema-conformant provider response can never produce a null or missing
/// field here, only an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
}

impl CandidateContact {
    /// Renders the contact header that gets re-attached to the optimized
    /// résumé body. Non-empty fields joined by newlines in order:
    /// name, address, "phone | email", linkedin.
    pub fn header(&self) -> String {
        let reach: Vec<&str> = [self.phone.as_str(), self.email.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        let reach = reach.join(" | ");

        [
            self.name.as_str(),
            self.address.as_str(),
            reach.as_str(),
            self.linkedin.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Structured fields lifted from a job description once the input settles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub hiring_manager_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_defaults_when_fields_missing() {
        // A provider that drops fields still yields five strings.
        let contact: CandidateContact = serde_json::from_str("{\"name\": \"Jane Doe\"}").unwrap();
        assert_eq!(contact.name, "Jane Doe");
        assert_eq!(contact.address, "");
        assert_eq!(contact.phone, "");
        assert_eq!(contact.email, "");
        assert_eq!(contact.linkedin, "");
    }

    #[test]
    fn test_job_posting_defaults_when_fields_missing() {
        let posting: JobPosting = serde_json::from_str("{}").unwrap();
        assert_eq!(posting.role, "");
        assert_eq!(posting.company, "");
        assert_eq!(posting.hiring_manager_name, "");
    }

    #[test]
    fn test_header_all_fields() {
        let contact = CandidateContact {
            name: "Jane Doe".to_string(),
            address: "123 Main St".to_string(),
            phone: "555-1212".to_string(),
            email: "jane@x.com".to_string(),
            linkedin: "linkedin.com/in/janedoe".to_string(),
        };
        assert_eq!(
            contact.header(),
            "Jane Doe\n123 Main St\n555-1212 | jane@x.com\nlinkedin.com/in/janedoe"
        );
    }

    #[test]
    fn test_header_skips_empty_fields() {
        let contact = CandidateContact {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..Default::default()
        };
        assert_eq!(contact.header(), "Jane Doe\njane@x.com");
    }

    #[test]
    fn test_header_phone_only_has_no_separator() {
        let contact = CandidateContact {
            name: "Jane Doe".to_string(),
            phone: "555-1212".to_string(),
            ..Default::default()
        };
        assert_eq!(contact.header(), "Jane Doe\n555-1212");
    }

    #[test]
    fn test_header_empty_contact_is_empty() {
        assert_eq!(CandidateContact::default().header(), "");
    }
}
