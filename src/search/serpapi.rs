use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde_json::Value;
use url::Url;
use super::ProductSearch;
use crate::error::AssistantError;

/// Shopping search backed by SerpAPI's `search.json` endpoint.
#[derive(Debug)]
pub struct SerpApiClient {
    http: HttpClient,
    base_url: String,
    engine: String,
    api_key: String,
}

impl SerpApiClient {
    pub fn new(base_url: String, engine: String, api_key: String) -> Self {
        Self { http: HttpClient::new(), base_url, engine, api_key }
    }

    fn search_url(&self, query: &str) -> Result<Url, AssistantError> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("engine", self.engine.as_str()),
                ("q", query),
                ("api_key", self.api_key.as_str()),
            ]
        )?;
        Ok(url)
    }
}

#[async_trait]
impl ProductSearch for SerpApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Value>, AssistantError> {
        let url = self.search_url(query)?;
        debug!("Shopping search for {:?}", query);

        let resp = self.http.get(url).send().await?.error_for_status()?;
        let mut data = resp.json::<Value>().await?;

        match data.get_mut("shopping_results").map(Value::take) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(records)) => Ok(records),
            Some(_) => Err(AssistantError::UnexpectedResponse(
                "Unexpected search response format.".to_string()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_url_encoded() {
        let client = SerpApiClient::new(
            "https://serpapi.com/search.json".into(),
            "google_shopping".into(),
            "k&y".into()
        );
        let url = client.search_url("red shoes & socks").unwrap();

        assert_eq!(
            url.as_str(),
            "https://serpapi.com/search.json?engine=google_shopping&q=red+shoes+%26+socks&api_key=k%26y"
        );
    }

    #[test]
    fn bad_base_url_is_an_error() {
        let client = SerpApiClient::new("not a url".into(), "google_shopping".into(), String::new());
        assert!(matches!(client.search_url("x"), Err(AssistantError::InvalidUrl(_))));
    }
}
