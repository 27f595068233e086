use crate::grouping::{group_members, GroupBy, Membership};
use boardmap_core::model::{Bipartite, GraphLink, GraphNode, NodeKind, ProjectedGraph, ViewMode};
use indexmap::IndexMap;
use std::collections::HashMap;

/// People connected whenever they share an organization.
pub fn project_people_graph(bi: &Bipartite) -> ProjectedGraph {
    let groups = group_members(&bi.roles, GroupBy::Org, Membership::Multiset);
    let entities = bi.people.iter().map(|p| (p.id.as_str(), p.name.as_str()));
    assemble(entities, NodeKind::Person, co_occurrence(&groups))
}

/// Organizations connected whenever they share a person.
pub fn project_org_graph(bi: &Bipartite) -> ProjectedGraph {
    let groups = group_members(&bi.roles, GroupBy::Person, Membership::Multiset);
    let entities = bi.orgs.iter().map(|o| (o.id.as_str(), o.name.as_str()));
    assemble(entities, NodeKind::Org, co_occurrence(&groups))
}

pub fn project(bi: &Bipartite, mode: ViewMode) -> ProjectedGraph {
    match mode {
        ViewMode::People => project_people_graph(bi),
        ViewMode::Orgs => project_org_graph(bi),
    }
}

/// Counts every unordered pair of positions within each group. Cost is the
/// sum of squared group sizes.
fn co_occurrence<'a>(groups: &IndexMap<&'a str, Vec<&'a str>>) -> IndexMap<(&'a str, &'a str), u32> {
    let mut weights: IndexMap<(&str, &str), u32> = IndexMap::new();

    for members in groups.values() {
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                if a == b {
                    continue;
                }
                let key = if a < b { (*a, *b) } else { (*b, *a) };
                *weights.entry(key).or_insert(0) += 1;
            }
        }
    }

    weights
}

fn assemble<'a>(
    entities: impl Iterator<Item = (&'a str, &'a str)>,
    kind: NodeKind,
    weights: IndexMap<(&str, &str), u32>,
) -> ProjectedGraph {
    let mut degree: HashMap<&str, u32> = HashMap::new();
    let mut links = Vec::with_capacity(weights.len());

    for ((source, target), weight) in weights {
        *degree.entry(source).or_insert(0) += 1;
        *degree.entry(target).or_insert(0) += 1;
        links.push(GraphLink {
            source: source.to_string(),
            target: target.to_string(),
            weight,
        });
    }

    let nodes = entities
        .map(|(id, label)| GraphNode {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            degree: degree.get(id).copied().unwrap_or(0),
        })
        .collect();

    ProjectedGraph { nodes, links }
}
