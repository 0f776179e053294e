//! JSON output for item listings.
//!
//! Serializes the listing for scripting and piping.

use serde::Serialize;

#[derive(Serialize)]
struct ItemCount<'a> {
    item: &'a str,
    count: u64,
}

#[derive(Serialize)]
struct Listing<'a> {
    items: Vec<ItemCount<'a>>,
    total: u64,
}

pub fn render(items: &[(String, u64)]) -> String {
    let listing = Listing {
        items: items
            .iter()
            .map(|(item, count)| ItemCount { item, count: *count })
            .collect(),
        total: items.iter().fold(0u64, |acc, (_, c)| acc.saturating_add(*c)),
    };

    serde_json::to_string_pretty(&listing).unwrap_or_else(|_| String::from("{}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_items_in_order_with_total() {
        let items = vec![("bread".to_string(), 2), ("milk".to_string(), 3)];
        let value: serde_json::Value = serde_json::from_str(&render(&items)).unwrap();

        assert_eq!(value["items"][0]["item"], "bread");
        assert_eq!(value["items"][0]["count"], 2);
        assert_eq!(value["items"][1]["item"], "milk");
        assert_eq!(value["total"], 5);
    }

    #[test]
    fn empty_listing() {
        let value: serde_json::Value = serde_json::from_str(&render(&[])).unwrap();
        assert_eq!(value["items"].as_array().map(Vec::len), Some(0));
        assert_eq!(value["total"], 0);
    }
}
