use std::collections::BTreeMap;

use quickcheck::{quickcheck, TestResult};
use serde_json::{json, Value};
use sub_json::extract;

/// keys that need no escaping and can be spelled as a path field
fn addressable(key: &str) -> bool {
    !key.is_empty()
        && !key.contains(['.', '['])
        && serde_json::to_string(key).map_or(false, |s| s.len() == key.len() + 2)
}

quickcheck! {
    fn array_elements_are_returned_verbatim(items: Vec<i64>, index: usize) -> bool {
        let json = serde_json::to_string(&json!({ "items": items })).unwrap();
        let index = index % (items.len() + 3);
        let found = extract(&json, &format!("items[{}]", index));
        match items.get(index) {
            Some(item) => found == Some(item.to_string().as_str()),
            None => found.is_none(),
        }
    }

    fn string_values_survive_escapes(members: BTreeMap<String, String>) -> TestResult {
        let members: BTreeMap<String, String> = members
            .into_iter()
            .filter(|(k, _)| addressable(k))
            .collect();
        if members.is_empty() {
            return TestResult::discard();
        }
        let json = serde_json::to_string(&members).unwrap();
        for (key, value) in &members {
            let raw = match extract(&json, key) {
                Some(raw) => raw,
                None => return TestResult::failed(),
            };
            if serde_json::from_str::<String>(raw).ok().as_ref() != Some(value) {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }

    fn prefix_keys_never_match(key: String, suffix: String, value: u32) -> TestResult {
        if suffix.is_empty() || !addressable(&key) {
            return TestResult::discard();
        }
        let longer = format!("{}{}", key, suffix);
        let json = serde_json::to_string(&json!({ longer: value })).unwrap();
        TestResult::from_bool(extract(&json, &key).is_none())
    }

    fn nested_containers_are_balanced(depth: u8, leaf: i32) -> bool {
        let depth = depth % 16;
        let mut value = json!(leaf);
        let mut path = String::new();
        for level in 0..depth {
            value = if level % 2 == 0 { json!([value]) } else { json!({ "k": value }) };
        }
        for level in (0..depth).rev() {
            path.push_str(if level % 2 == 0 { "[0]" } else { ".k" });
        }
        let json = serde_json::to_string(&json!({ "root": value.clone(), "after": [1] })).unwrap();
        let root = extract(&json, "root");
        let parsed: Option<Value> = root.and_then(|raw| serde_json::from_str(raw).ok());
        parsed == Some(value)
            && extract(&json, &format!("root{}", path)) == Some(leaf.to_string().as_str())
    }

    fn extraction_is_idempotent(json: String, path: String) -> bool {
        extract(&json, &path) == extract(&json, &path)
    }

    fn arbitrary_input_never_panics(json: String, path: String) -> bool {
        match extract(&json, &path) {
            Some(found) => json.contains(found),
            None => true,
        }
    }
}
