use super::http_client::get_json;
use crate::domain::content::FetchError;
use crate::domain::hadith::{HadithEdition, HadithRepository};
use async_trait::async_trait;
use reqwest::Client;

const PROVIDER: &str = "hadith-api";

/// Static JSON editions served from the hadith API CDN
pub struct HadithApiRepository {
    client: Client,
    base_url: String,
}

impl HadithApiRepository {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl HadithRepository for HadithApiRepository {
    async fn fetch_edition(&self, edition: &str, book: u32) -> Result<HadithEdition, FetchError> {
        let url = format!("{}/editions/{}/{}.json", self.base_url, edition, book);
        get_json(&self.client, PROVIDER, &url, &[]).await
    }
}
