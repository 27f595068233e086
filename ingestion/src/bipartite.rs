use boardmap_core::identity::{DefaultIdentity, IdentityPolicy};
use boardmap_core::model::{Bipartite, BoardRole, BoardRow, Org, Person};
use indexmap::IndexMap;

/// Folds raw rows into deduplicated people and orgs joined by roles.
pub struct BipartiteBuilder {
    identity: Box<dyn IdentityPolicy>,
}

impl BipartiteBuilder {
    pub fn new() -> Self {
        Self {
            identity: Box::new(DefaultIdentity),
        }
    }

    pub fn with_identity(identity: Box<dyn IdentityPolicy>) -> Self {
        Self { identity }
    }

    pub fn build(&self, rows: &[BoardRow]) -> Bipartite {
        self.build_from(rows)
    }

    /// Same as `build`, for callers that already hold a filtered view of rows.
    pub fn build_from<'a>(&self, rows: impl IntoIterator<Item = &'a BoardRow>) -> Bipartite {
        let mut people: IndexMap<String, Person> = IndexMap::new();
        let mut orgs: IndexMap<String, Org> = IndexMap::new();
        let mut roles = Vec::new();

        for row in rows {
            if !row.is_complete() {
                continue;
            }

            let person_name = row.person_name.trim();
            let org_name = row.org_name.trim();
            let email = row.email();

            let person_id = self.identity.person_key(person_name, email);
            match people.get_mut(&person_id) {
                Some(existing) => merge_person(existing, person_name, email),
                None => {
                    people.insert(
                        person_id.clone(),
                        Person {
                            id: person_id.clone(),
                            name: person_name.to_string(),
                            email: email.map(str::to_string),
                        },
                    );
                }
            }

            let org_id = self.identity.org_key(org_name);
            orgs.entry(org_id.clone()).or_insert_with(|| Org {
                id: org_id.clone(),
                name: org_name.to_string(),
            });

            roles.push(BoardRole {
                person_id,
                org_id,
                role: row.role.clone(),
                start_year: row.start_year,
                end_year: row.end_year,
            });
        }

        Bipartite {
            people: people.into_values().collect(),
            orgs: orgs.into_values().collect(),
            roles,
        }
    }
}

impl Default for BipartiteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds with the email-then-name identity policy.
pub fn build_bipartite(rows: &[BoardRow]) -> Bipartite {
    BipartiteBuilder::new().build(rows)
}

// Keep the longest name seen; adopt an email only if none is stored yet.
fn merge_person(existing: &mut Person, name: &str, email: Option<&str>) {
    if existing.email.is_none() {
        if let Some(email) = email {
            existing.email = Some(email.to_string());
        }
    }
    if name.chars().count() > existing.name.chars().count() {
        existing.name = name.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_longest_name() {
        let rows = vec![
            BoardRow::new("Bob", "Hope").with_email("bob@x.org"),
            BoardRow::new("Robert Lee", "Hope").with_email("BOB@x.org"),
            BoardRow::new("Rob", "Hope").with_email("bob@x.org"),
        ];
        let bi = build_bipartite(&rows);
        assert_eq!(bi.people.len(), 1);
        assert_eq!(bi.people[0].name, "Robert Lee");
        assert_eq!(bi.people[0].email.as_deref(), Some("bob@x.org"));
        assert_eq!(bi.roles.len(), 3);
    }

    #[test]
    fn test_merge_adopts_email_when_absent() {
        let rows = vec![
            BoardRow::new("Dana Cruz", "Hope"),
            BoardRow::new("dana  cruz", "Water Now"),
        ];
        let mut bi = build_bipartite(&rows);
        assert_eq!(bi.people.len(), 1);
        assert_eq!(bi.people[0].email, None);

        // A later email sighting under a name key is adopted onto the stored person.
        let mut person = bi.people.remove(0);
        merge_person(&mut person, "Dana Cruz", Some("dana@x.org"));
        assert_eq!(person.email.as_deref(), Some("dana@x.org"));
        merge_person(&mut person, "Dana Cruz", Some("other@x.org"));
        assert_eq!(person.email.as_deref(), Some("dana@x.org"));
    }

    #[test]
    fn test_equal_length_name_does_not_replace() {
        let rows = vec![
            BoardRow::new("ann lee", "Hope"),
            BoardRow::new("Ann Lee", "Hope"),
        ];
        let bi = build_bipartite(&rows);
        assert_eq!(bi.people[0].name, "ann lee");
    }

    #[test]
    fn test_org_name_fixed_at_first_sight() {
        let rows = vec![
            BoardRow::new("A", "hope foundation"),
            BoardRow::new("B", "Hope   Foundation"),
        ];
        let bi = build_bipartite(&rows);
        assert_eq!(bi.orgs.len(), 1);
        assert_eq!(bi.orgs[0].name, "hope foundation");
        assert_eq!(bi.orgs[0].id, "org:hope foundation");
    }
}
