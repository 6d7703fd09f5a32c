pub mod serpapi;

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use crate::cli::Args;
use crate::error::AssistantError;
use crate::models::api::ProductResult;
use self::serpapi::SerpApiClient;

/// Number of externally ranked results handed back to callers.
pub const TOP_RESULTS: usize = 3;

#[async_trait]
pub trait ProductSearch: Send + Sync {
    /// Raw shopping records, in the ranking order of the search service.
    async fn search(&self, query: &str) -> Result<Vec<Value>, AssistantError>;
}

pub fn new_client(args: &Args) -> Arc<dyn ProductSearch> {
    Arc::new(
        SerpApiClient::new(
            args.search_base_url.clone(),
            args.search_engine.clone(),
            args.serpapi_key.clone()
        )
    )
}

/// Reduces the first [`TOP_RESULTS`] records to the fields the frontend renders.
pub fn project_results(records: &[Value]) -> Vec<ProductResult> {
    records
        .iter()
        .take(TOP_RESULTS)
        .map(|r| ProductResult {
            title: field(r, "title"),
            price: field(r, "price"),
            link: field(r, "product_link"),
            source: field(r, "source"),
        })
        .collect()
}

fn field(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_first_three_in_order() {
        let records: Vec<Value> = (1..=5)
            .map(|i| json!({ "title": format!("item {}", i), "price": "$1" }))
            .collect();

        let titles: Vec<_> = project_results(&records)
            .into_iter()
            .map(|p| p.title.unwrap())
            .collect();
        assert_eq!(titles, ["item 1", "item 2", "item 3"]);
    }

    #[test]
    fn fewer_records_return_fewer_results() {
        let records = vec![json!({ "title": "only" })];
        assert_eq!(project_results(&records).len(), 1);
        assert!(project_results(&[]).is_empty());
    }

    #[test]
    fn link_comes_from_product_link() {
        let records = vec![json!({
            "title": "Mug",
            "price": "$9.99",
            "link": "https://ignored",
            "product_link": "https://shop/mug",
            "source": "Shop",
            "rating": 4.5
        })];

        let result = &project_results(&records)[0];
        assert_eq!(result.link.as_deref(), Some("https://shop/mug"));
        assert_eq!(result.source.as_deref(), Some("Shop"));
    }

    #[test]
    fn missing_fields_stay_absent() {
        let records = vec![json!({ "price": 12.5, "source": null })];
        let result = &project_results(&records)[0];

        assert_eq!(result.title, None);
        assert_eq!(result.price.as_deref(), Some("12.5"));
        assert_eq!(result.link, None);
        assert_eq!(result.source, None);
    }
}
