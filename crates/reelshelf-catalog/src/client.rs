use crate::api;
use crate::error::{CatalogError, ClientBuildError, Result};
use crate::request::RequestId;
use crate::traits::Catalog;
use async_trait::async_trait;
use reelshelf_config::ApiConfig;
use reelshelf_models::{ImageAsset, Movie, Page, SearchResult, StreamSource, TvShow, Video};
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the aggregation endpoint.
#[derive(Clone)]
pub struct CatalogClient {
    client: Arc<Client>,
    endpoint: Url,
    language: String,
    streaming_service: String,
}

impl CatalogClient {
    pub fn new(api: &ApiConfig) -> std::result::Result<Self, ClientBuildError> {
        let mut builder = Client::builder().user_agent(concat!("reelshelf/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Self::with_client(api, builder.build()?)
    }

    pub fn with_client(api: &ApiConfig, client: Client) -> std::result::Result<Self, ClientBuildError> {
        let endpoint = if api.use_proxy {
            format!("{}{}", api.cors_proxy, api.base_url)
        } else {
            api.base_url.clone()
        };
        let endpoint = Url::parse(&endpoint).map_err(|source| ClientBuildError::InvalidEndpoint {
            endpoint: endpoint.clone(),
            source,
        })?;

        Ok(Self {
            client: Arc::new(client),
            endpoint,
            language: api.language.clone(),
            streaming_service: api.streaming_service.clone(),
        })
    }

    /// Use a different `service` for the video provider requests.
    pub fn with_streaming_service(mut self, service: impl Into<String>) -> Self {
        self.streaming_service = service.into();
        self
    }

    pub fn streaming_service(&self) -> &str {
        &self.streaming_service
    }

    /// Full request URL: endpoint plus `requestID`, `language` where the
    /// request takes one, then the request-specific parameters.
    pub fn request_url(&self, request: RequestId, params: &[(&str, String)]) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("requestID", request.as_str());
            if request.is_localized() {
                query.append_pair("language", &self.language);
            }
            for (key, value) in params {
                query.append_pair(key, value);
            }
        }
        url
    }

    async fn fetch(&self, request: RequestId, params: &[(&str, String)]) -> Result<Vec<u8>> {
        let url = self.request_url(request, params);
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| CatalogError::Transport { request, source })?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} returned {}", request, status);
            return Err(CatalogError::Status {
                request,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Transport { request, source })?;
        debug!("{} returned {} bytes", request, body.len());
        Ok(body.to_vec())
    }

    fn page_param(page: u32) -> (&'static str, String) {
        ("page", page.max(1).to_string())
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn trending_movies(&self, page: u32) -> Result<Page<Movie>> {
        let request = RequestId::TrendingMovie;
        let body = self.fetch(request, &[Self::page_param(page)]).await?;
        api::decode_movie_list(request, &body, page)
    }

    async fn top_rated_movies(&self, page: u32) -> Result<Page<Movie>> {
        let request = RequestId::TopRatedMovie;
        let body = self.fetch(request, &[Self::page_param(page)]).await?;
        api::decode_movie_list(request, &body, page)
    }

    async fn trending_tv(&self, page: u32) -> Result<Page<TvShow>> {
        let request = RequestId::TrendingTvDay;
        let body = self.fetch(request, &[Self::page_param(page)]).await?;
        api::decode_tv_list(request, &body, page)
    }

    async fn search(&self, query: &str, page: u32) -> Result<Page<SearchResult>> {
        let params = [("query", query.to_string()), Self::page_param(page)];
        let body = self.fetch(RequestId::SearchMulti, &params).await?;
        api::decode_search(&body, page)
    }

    async fn movie_details(&self, id: u64) -> Result<Movie> {
        let body = self.fetch(RequestId::MovieData, &[("id", id.to_string())]).await?;
        api::decode_movie_details(&body)
    }

    async fn tv_details(&self, id: u64) -> Result<TvShow> {
        let body = self.fetch(RequestId::TvData, &[("id", id.to_string())]).await?;
        api::decode_tv_details(&body)
    }

    async fn movie_videos(&self, id: u64) -> Result<Vec<Video>> {
        let request = RequestId::MovieVideos;
        let body = self.fetch(request, &[("id", id.to_string())]).await?;
        api::decode_videos(request, &body)
    }

    async fn tv_videos(&self, id: u64) -> Result<Vec<Video>> {
        let request = RequestId::TvVideos;
        let body = self.fetch(request, &[("id", id.to_string())]).await?;
        api::decode_videos(request, &body)
    }

    async fn movie_images(&self, id: u64) -> Result<Vec<ImageAsset>> {
        let request = RequestId::MovieImages;
        let body = self.fetch(request, &[("id", id.to_string())]).await?;
        api::decode_images(request, &body)
    }

    async fn tv_images(&self, id: u64) -> Result<Vec<ImageAsset>> {
        let request = RequestId::TvImages;
        let body = self.fetch(request, &[("id", id.to_string())]).await?;
        api::decode_images(request, &body)
    }

    async fn movie_streams(&self, id: u64) -> Result<Vec<StreamSource>> {
        let request = RequestId::MovieVideoProvider;
        let params = [("id", id.to_string()), ("service", self.streaming_service.clone())];
        let body = self.fetch(request, &params).await?;
        api::decode_streams(request, &body)
    }

    async fn tv_streams(&self, id: u64, season: u32, episode: u32) -> Result<Vec<StreamSource>> {
        let request = RequestId::TvVideoProvider;
        let params = [
            ("id", id.to_string()),
            ("season", season.to_string()),
            ("episode", episode.to_string()),
            ("service", self.streaming_service.clone()),
        ];
        let body = self.fetch(request, &params).await?;
        api::decode_streams(request, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn api_config(base_url: &str, use_proxy: bool) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            use_proxy,
            ..ApiConfig::default()
        }
    }

    /// Serve exactly one canned HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{}/api/backendfetch", addr)
    }

    #[test]
    fn test_request_url_through_proxy() {
        let client = CatalogClient::new(&ApiConfig::default()).unwrap();
        let url = client.request_url(RequestId::MovieData, &[("id", "550".to_string())]);
        let url = url.as_str();
        assert!(url.starts_with("https://cors-proxy.rdpsell01.workers.dev/https://rivestream.live/api/backendfetch?"));
        assert!(url.contains("requestID=movieData"));
        assert!(url.contains("language=en-US"));
        assert!(url.contains("id=550"));
    }

    #[test]
    fn test_request_url_encodes_query_and_skips_language() {
        let client = CatalogClient::new(&api_config("https://example.com/api", false)).unwrap();
        let url = client.request_url(RequestId::SearchMulti, &[("query", "fight club & co".to_string())]);
        assert_eq!(
            url.as_str(),
            "https://example.com/api?requestID=searchMulti&query=fight+club+%26+co"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = CatalogClient::new(&api_config("not a url", false)).err().unwrap();
        assert!(matches!(err, ClientBuildError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_streaming_service_override() {
        let client = CatalogClient::new(&ApiConfig::default())
            .unwrap()
            .with_streaming_service("indian");
        assert_eq!(client.streaming_service(), "indian");
    }

    #[tokio::test]
    async fn test_fetch_decodes_success() {
        let base = serve_once("200 OK", r#"{"page":1,"results":[{"id":1,"name":"Show","genre_ids":[18]}]}"#).await;
        let client = CatalogClient::new(&api_config(&base, false)).unwrap();
        let page = client.trending_tv(1).await.unwrap();
        assert_eq!(page.results[0].name, "Show");
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let base = serve_once("503 Service Unavailable", "{}").await;
        let client = CatalogClient::new(&api_config(&base, false)).unwrap();
        let err = client.movie_details(550).await.unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(err, CatalogError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = CatalogClient::new(&api_config(&format!("http://{}/api", addr), false)).unwrap();
        let err = client.top_rated_movies(1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_incomplete_payload_is_schema_error() {
        let base = serve_once("200 OK", r#"{"id": 1399, "name": "Game of Thrones"}"#).await;
        let client = CatalogClient::new(&api_config(&base, false)).unwrap();
        let err = client.tv_details(1399).await.unwrap_err();
        assert!(err.is_schema());
    }
}
