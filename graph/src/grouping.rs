use boardmap_core::model::BoardRole;
use indexmap::IndexMap;

/// How repeated roles for the same pair show up inside a group.
///
/// The people/org projections count with `Multiset`, so two seats at one org
/// weigh twice against each co-member. The overlap matrix counts with
/// `Distinct`. Both behaviours are relied on downstream; do not unify them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Multiset,
    Distinct,
}

/// Which role endpoint becomes the group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// Key by org, collect person ids.
    Org,
    /// Key by person, collect org ids.
    Person,
}

/// Groups in first-seen key order; members keep role order.
pub fn group_members(
    roles: &[BoardRole],
    by: GroupBy,
    membership: Membership,
) -> IndexMap<&str, Vec<&str>> {
    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for role in roles {
        let (key, member) = match by {
            GroupBy::Org => (role.org_id.as_str(), role.person_id.as_str()),
            GroupBy::Person => (role.person_id.as_str(), role.org_id.as_str()),
        };

        let members = groups.entry(key).or_default();
        if membership == Membership::Distinct && members.contains(&member) {
            continue;
        }
        members.push(member);
    }

    groups
}
