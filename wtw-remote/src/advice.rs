//! Remote resolution against the advice service's "what to wear" page.
//!
//! One GET per call, no retry. The HTML answer is handed to an `Extractor`.

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info};
use wtw_core::{
    validate, AnchorExtractor, CanonicalKey, Extractor, QueryStyle, RecommendationSet, Resolver,
    Result, WtwError,
};

pub const DEFAULT_ADVICE_URL: &str = "http://www.runnersworld.com/what-to-wear";

pub struct RemoteResolver {
    client: reqwest::Client,
    base_url: String,
    style: QueryStyle,
    extractor: Box<dyn Extractor>,
}

impl RemoteResolver {
    pub fn new(base_url: impl Into<String>, style: QueryStyle) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            style,
            extractor: Box::new(AnchorExtractor),
        }
    }

    /// Swap the HTML extraction strategy.
    pub fn with_extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Base URL with the seven fields as query parameters.
    pub fn request_url(&self, key: &CanonicalKey) -> Result<Url> {
        Url::parse_with_params(&self.base_url, key.query_pairs(self.style))
            .map_err(|e| WtwError::Remote(format!("invalid advice url {}: {e}", self.base_url)))
    }

    async fn fetch_body(&self, url: Url) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .header("Access-Control-Allow-Origin", "no-cors")
            .send()
            .await
            .map_err(|e| WtwError::Remote(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WtwError::Remote(status.to_string()));
        }

        resp.text()
            .await
            .map_err(|e| WtwError::Remote(format!("read body: {e}")))
    }
}

#[async_trait]
impl Resolver for RemoteResolver {
    async fn resolve(&self, key: &CanonicalKey) -> Result<RecommendationSet> {
        validate(&key.categorical())?;

        let url = self.request_url(key)?;
        info!(%url, "querying advice service");

        let body = self.fetch_body(url).await?;
        debug!(bytes = body.len(), "advice response");

        let items = self.extractor.extract(&body)?;
        Ok(RecommendationSet::new(items))
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
