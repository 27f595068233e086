/// Lowercase, collapse whitespace runs to a single space, trim.
/// Punctuation is left alone.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decides which raw sightings refer to the same person or organization.
pub trait IdentityPolicy: Send + Sync {
    fn person_key(&self, name: &str, email: Option<&str>) -> String;
    fn org_key(&self, name: &str) -> String;
}

/// Email first, name slug otherwise.
///
/// Two different people with the same name and no email collapse into one
/// person. Swap in another policy when that matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIdentity;

impl IdentityPolicy for DefaultIdentity {
    fn person_key(&self, name: &str, email: Option<&str>) -> String {
        match email.filter(|email| !email.is_empty()) {
            Some(email) => format!("person:{}", email.to_lowercase()),
            None => format!("person:{}", slugify(name)),
        }
    }

    fn org_key(&self, name: &str) -> String {
        format!("org:{}", slugify(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_whitespace_and_case() {
        assert_eq!(slugify("  Hope\t  Foundation \n"), "hope foundation");
        assert_eq!(slugify("St. Mary's"), "st. mary's");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_person_key_prefers_email() {
        let identity = DefaultIdentity;
        assert_eq!(
            identity.person_key("Alice Smith", Some("Alice@Example.org")),
            "person:alice@example.org"
        );
        assert_eq!(
            identity.person_key("  Bob   LEE ", None),
            "person:bob lee"
        );
    }

    #[test]
    fn test_empty_email_falls_back_to_name() {
        let identity = DefaultIdentity;
        assert_eq!(identity.person_key("Chris Young", Some("")), "person:chris young");
    }

    #[test]
    fn test_org_key_uses_slug() {
        assert_eq!(DefaultIdentity.org_key("Water  Now"), "org:water now");
    }
}
