use crate::grouping::{group_members, GroupBy, Membership};
use boardmap_core::model::{Bipartite, OverlapMatrix};
use std::collections::HashMap;

/// `matrix[i][j]` is the number of distinct people seated at both org `i`
/// and org `j`, with orgs in `bi.orgs` order. The diagonal stays zero.
pub fn build_org_overlap_matrix(bi: &Bipartite) -> OverlapMatrix {
    let index: HashMap<&str, usize> = bi
        .orgs
        .iter()
        .enumerate()
        .map(|(idx, org)| (org.id.as_str(), idx))
        .collect();

    let n = bi.orgs.len();
    let mut matrix = vec![vec![0u32; n]; n];

    let memberships = group_members(&bi.roles, GroupBy::Person, Membership::Distinct);
    for org_ids in memberships.values() {
        let positions: Vec<usize> = org_ids
            .iter()
            .filter_map(|org_id| index.get(org_id).copied())
            .collect();

        for (k, &i) in positions.iter().enumerate() {
            for &j in &positions[k + 1..] {
                matrix[i][j] += 1;
                matrix[j][i] += 1;
            }
        }
    }

    OverlapMatrix {
        matrix,
        orgs: bi.orgs.clone(),
    }
}
