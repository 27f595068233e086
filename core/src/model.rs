use serde::{Deserialize, Serialize};

/// One membership record as it arrives from a CSV upload or the persistence API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardRow {
    pub person_name: String,
    #[serde(default)]
    pub person_email: Option<String>,
    pub org_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
}

impl BoardRow {
    pub fn new(person_name: impl Into<String>, org_name: impl Into<String>) -> Self {
        Self {
            person_name: person_name.into(),
            org_name: org_name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.person_email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_years(mut self, start_year: Option<i32>, end_year: Option<i32>) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Rows missing either name after trimming never reach entity construction.
    pub fn is_complete(&self) -> bool {
        !self.person_name.trim().is_empty() && !self.org_name.trim().is_empty()
    }

    /// Email treated as present only when non-empty.
    pub fn email(&self) -> Option<&str> {
        self.person_email.as_deref().filter(|email| !email.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Org {
    pub id: String,
    pub name: String,
}

/// A single seat held by a person at an organization. Not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRole {
    pub person_id: String,
    pub org_id: String,
    #[serde(default)]
    pub role: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// People and organizations joined by roles. `people` and `orgs` keep first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bipartite {
    pub people: Vec<Person>,
    pub orgs: Vec<Org>,
    pub roles: Vec<BoardRole>,
}

impl Bipartite {
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn org(&self, id: &str) -> Option<&Org> {
        self.orgs.iter().find(|org| org.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty() && self.orgs.is_empty() && self.roles.is_empty()
    }
}

/// Which side of the bipartite graph a projection keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    People,
    Orgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Person,
    Org,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Number of incident links, not the sum of their weights.
    pub degree: u32,
}

/// Undirected link; `source` always sorts before `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

impl GraphLink {
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectedGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl ProjectedGraph {
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Looks up the link between `a` and `b` in either order.
    pub fn link(&self, a: &str, b: &str) -> Option<&GraphLink> {
        let (source, target) = if a < b { (a, b) } else { (b, a) };
        self.links
            .iter()
            .find(|link| link.source == source && link.target == target)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}

/// Shared-member counts between organizations, indexed in `orgs` order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlapMatrix {
    pub matrix: Vec<Vec<u32>>,
    pub orgs: Vec<Org>,
}

impl OverlapMatrix {
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        self.matrix.get(i).and_then(|row| row.get(j)).copied()
    }

    pub fn shared_members(&self, org_a: &str, org_b: &str) -> Option<u32> {
        let i = self.orgs.iter().position(|org| org.id == org_a)?;
        let j = self.orgs.iter().position(|org| org.id == org_b)?;
        self.get(i, j)
    }

    pub fn len(&self) -> usize {
        self.orgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orgs.is_empty()
    }
}
