use serde::Deserialize;

use crate::types::Username;

/// One relationship entry. Export versions vary in which fields they
/// carry, so everything beyond the handle itself is optional.
#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(default)]
    string_list_data: Vec<StringListItem>,
}

#[derive(Debug, Deserialize)]
struct StringListItem {
    value: Option<String>,
}

/// The following export wraps its entries in an object; a missing
/// collection field behaves like an empty one.
#[derive(Debug, Deserialize)]
struct FollowingDocument {
    #[serde(default)]
    relationships_following: Vec<Entry>,
}

pub(crate) fn followers(input: &str) -> Vec<Username> {
    let entries: Vec<Entry> = match serde_json::from_str(input) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    extract(entries)
}

pub(crate) fn following(input: &str) -> Vec<Username> {
    let document: FollowingDocument = match serde_json::from_str(input) {
        Ok(document) => document,
        Err(_) => return Vec::new(),
    };

    extract(document.relationships_following)
}

/// Pulls the handle out of each entry, in source order. Entries without a
/// first `string_list_data` value are skipped, as are empty handles.
fn extract(entries: Vec<Entry>) -> Vec<Username> {
    entries
        .into_iter()
        .filter_map(|entry| entry.string_list_data.into_iter().next())
        .filter_map(|item| item.value)
        .filter(|value| !value.is_empty())
        .map(Username::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_followers() {
        let have = followers(include_str!("fixtures/followers_1.json"));
        assert_eq!(
            have,
            vec![
                Username::from("alice"),
                Username::from("bob"),
                Username::from("carol")
            ]
        );
    }

    #[test]
    fn test_following() {
        let have = following(include_str!("fixtures/following.json"));
        assert_eq!(
            have,
            vec![
                Username::from("alice"),
                Username::from("dave"),
                Username::from("erin")
            ]
        );
    }

    #[test]
    fn test_followers_skips_entries_without_values() {
        let have = followers(
            r#"[
                {"string_list_data": [{"value": "alice"}]},
                {"string_list_data": []},
                {"media_list_data": []},
                {"string_list_data": [{"href": "https://example.com"}]},
                {"string_list_data": [{"value": ""}]},
                {"string_list_data": [{"value": "bob"}]}
            ]"#,
        );
        assert_eq!(have, vec![Username::from("alice"), Username::from("bob")]);
    }

    #[test]
    fn test_followers_takes_first_value_only() {
        let have = followers(
            r#"[{"string_list_data": [{"value": "alice"}, {"value": "shadow"}]}]"#,
        );
        assert_eq!(have, vec![Username::from("alice")]);
    }

    #[test]
    fn test_malformed_input_is_empty() {
        assert!(followers("").is_empty());
        assert!(followers("{not json").is_empty());
        assert!(followers(r#"{"an": "object"}"#).is_empty());
        assert!(following("").is_empty());
        assert!(following("[1, 2, 3]").is_empty());
    }

    #[test]
    fn test_following_without_collection_field_is_empty() {
        assert!(following(r#"{"relationships_followers": []}"#).is_empty());
        assert!(following("{}").is_empty());
    }
}
