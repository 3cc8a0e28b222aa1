//! Aggregation rules shared by the view services
//!
//! These are the only derivations the client performs on fetched data.
//! Percentages supplied by the server are rendered as-is and never
//! recomputed here; the gamification level is the single client-side
//! derived statistic, and even that defers to the server stats value when
//! both are available.

use brick_domain::constants::{CATEGORY_ALL, POINTS_PER_LEVEL};
use brick_domain::Organization;

/// Case-insensitive substring match against one or more text fields
///
/// An empty query matches everything.
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Exact category match, with a distinguished "all" value bypassing the filter
pub fn matches_category(selected: &str, category: &str) -> bool {
    selected == CATEGORY_ALL || selected == category
}

/// Partition a flat list into (key, items) groups
///
/// Both the key order and the order of items within each group follow
/// encounter order in the input; grouping never reorders.
pub fn group_by<T, F>(items: Vec<T>, key_fn: F) -> Vec<(String, Vec<T>)>
where
    F: Fn(&T) -> String,
{
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    groups
}

/// Gamification level derived from accumulated points
///
/// `level = floor(points / 100) + 1`. Display continuity only; the server
/// stats value is authoritative when present.
pub fn level_for_points(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

/// Directory filter: name or any service matches the query, plus category
pub fn filter_organizations<'a>(
    organizations: &'a [Organization],
    query: &str,
    category: &str,
) -> Vec<&'a Organization> {
    organizations
        .iter()
        .filter(|org| {
            let mut fields: Vec<&str> = vec![&org.name];
            fields.extend(org.services.iter().map(String::as_str));
            matches_search(query, &fields) && matches_category(category, &org.category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: &str, name: &str, category: &str, services: &[&str]) -> Organization {
        Organization {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            services: services.iter().map(|s| s.to_string()).collect(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            hours: String::new(),
            website: String::new(),
            color: String::new(),
            icon: String::new(),
            applications: Vec::new(),
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(matches_search("SHEL", &["Emergency Shelter"]));
        assert!(matches_search("meals", &["Hot Meals", "Showers"]));
        assert!(!matches_search("dental", &["Hot Meals", "Showers"]));
    }

    #[test]
    fn empty_query_matches_all() {
        assert!(matches_search("", &[]));
        assert!(matches_search("", &["anything"]));
    }

    #[test]
    fn all_sentinel_bypasses_category_filter() {
        assert!(matches_category("all", "shelter"));
        assert!(matches_category("shelter", "shelter"));
        assert!(!matches_category("food", "shelter"));
    }

    #[test]
    fn organization_filter_combines_search_and_category() {
        let orgs = vec![
            org("a", "H.E.L.P. of Southern Nevada", "shelter", &["Emergency Shelter", "Hot Meals"]),
            org("b", "Three Square Food Bank", "food", &["Food Pantries"]),
            org("c", "TRAC-B Harm Reduction", "health", &["Needle Exchange"]),
        ];

        let hits = filter_organizations(&orgs, "meals", "all");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");

        // Query matches a service, category must still agree
        let hits = filter_organizations(&orgs, "meals", "food");
        assert!(hits.is_empty());

        let hits = filter_organizations(&orgs, "", "food");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn grouping_preserves_encounter_order() {
        let items = vec![
            ("housing", 1),
            ("legal", 2),
            ("housing", 3),
            ("health", 4),
            ("legal", 5),
        ];
        let grouped = group_by(items, |(category, _)| category.to_string());

        let keys: Vec<&str> = grouped.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["housing", "legal", "health"]);

        let housing: Vec<i32> = grouped[0].1.iter().map(|(_, n)| *n).collect();
        assert_eq!(housing, [1, 3]);
    }

    #[test]
    fn grouping_is_stable_across_applications() {
        let items = vec![("a", 1), ("b", 2), ("a", 3), ("b", 4)];
        let first = group_by(items.clone(), |(k, _)| k.to_string());
        let second = group_by(items, |(k, _)| k.to_string());
        assert_eq!(first, second);
    }

    #[test]
    fn level_derivation_boundaries() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(250), 3);
        // Idempotent: re-deriving from the same points yields the same level
        assert_eq!(level_for_points(250), level_for_points(250));
    }
}
