//! Matcher-based list maintenance.
//!
//! Helpers for keeping lists of config items (tags, assignments) in sync
//! without caring about positions: items are located by a predicate, not by
//! index.

use serde_json::Value;

/// Remove the first element matching `matcher` from `list`.
///
/// Removing an item that is not present is not an error; the list is left
/// untouched. This happens when an item is added and removed again within
/// the same session.
pub fn remove_item<F>(list: &mut Vec<Value>, mut matcher: F)
where
    F: FnMut(&Value) -> bool,
{
    if let Some(position) = list.iter().position(|item| matcher(item)) {
        list.remove(position);
    }
}

/// Replace the first element matching `matcher` with `item`, or append
/// `item` when nothing matches.
pub fn upsert_item<F>(list: &mut Vec<Value>, item: Value, mut matcher: F)
where
    F: FnMut(&Value) -> bool,
{
    match list.iter().position(|existing| matcher(existing)) {
        Some(position) => list[position] = item,
        None => list.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tag_list() -> Vec<Value> {
        vec![
            json!({"label": "role", "value": "spine"}),
            json!({"label": "site", "value": "dc1"}),
        ]
    }

    #[test]
    fn test_remove_item() {
        let mut list = tag_list();
        remove_item(&mut list, |item| item["label"] == "role");
        assert_eq!(list, vec![json!({"label": "site", "value": "dc1"})]);
    }

    #[test]
    fn test_remove_item_absent_is_noop() {
        let mut list = tag_list();
        remove_item(&mut list, |item| item["label"] == "rack");
        assert_eq!(list, tag_list());
    }

    #[test]
    fn test_remove_item_only_removes_first_match() {
        let mut list = vec![json!(1), json!(2), json!(1)];
        remove_item(&mut list, |item| item == &json!(1));
        assert_eq!(list, vec![json!(2), json!(1)]);
    }

    #[test]
    fn test_upsert_item_replaces_match() {
        let mut list = tag_list();
        upsert_item(
            &mut list,
            json!({"label": "role", "value": "leaf"}),
            |item| item["label"] == "role",
        );
        assert_eq!(list[0], json!({"label": "role", "value": "leaf"}));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_upsert_item_appends_when_absent() {
        let mut list = tag_list();
        upsert_item(
            &mut list,
            json!({"label": "rack", "value": "r12"}),
            |item| item["label"] == "rack",
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list[2], json!({"label": "rack", "value": "r12"}));
    }
}
