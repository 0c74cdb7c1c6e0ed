//! Street View Static API HTTP client

use crate::types::{FetchResult, StreetViewParams};
use reqwest::{Client, Request};
use std::future::Future;
use streetpath_map::GeoCoord;

/// Default Street View Static API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/streetview";

/// Source of raw image bytes for a coordinate
///
/// [`crate::fetcher::fetch_images`] drives any source one coordinate at a
/// time, in path order.
pub trait ImageSource {
    /// Fetch the raw response body for `coord`
    fn fetch(&self, coord: &GeoCoord) -> impl Future<Output = FetchResult<Vec<u8>>>;
}

/// Street View Static API client
///
/// # Example
///
/// ```no_run
/// use streetview::StreetViewClient;
/// use streetview::client::ImageSource;
/// use streetpath_map::GeoCoord;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = StreetViewClient::new("YOUR_API_KEY");
///     let bytes = client.fetch(&GeoCoord::new(48.8584, 2.2945)).await?;
///     println!("Received {} bytes", bytes.len());
///     Ok(())
/// }
/// ```
pub struct StreetViewClient {
    client: Client,
    api_key: String,
    endpoint: String,
    params: StreetViewParams,
}

impl StreetViewClient {
    /// Create a client for the default endpoint with default camera parameters
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            params: StreetViewParams::default(),
        }
    }

    /// Set the endpoint base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Use a preconfigured HTTP client (proxy, timeouts, TLS settings)
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the camera parameters
    pub fn with_params(mut self, params: StreetViewParams) -> Self {
        self.params = params;
        self
    }

    /// Build the GET request for `coord`
    ///
    /// Fails only if the endpoint is not a valid URL.
    pub fn request(&self, coord: &GeoCoord) -> FetchResult<Request> {
        let params = &self.params;
        let request = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("location", coord.to_string()),
                ("size", params.size()),
                ("key", self.api_key.clone()),
                ("fov", params.fov.to_string()),
                ("heading", params.heading.to_string()),
                ("pitch", params.pitch.to_string()),
            ])
            .build()?;
        Ok(request)
    }
}

impl ImageSource for StreetViewClient {
    async fn fetch(&self, coord: &GeoCoord) -> FetchResult<Vec<u8>> {
        let request = self.request(coord)?;
        tracing::debug!(%coord, "requesting street view image");

        let response = self.client.execute(request).await?;
        let status = response.status();
        // The body is still returned; the provider answers errors with a
        // body that gets saved like any other image.
        if !status.is_success() {
            tracing::warn!(%coord, %status, "street view request returned non-success status");
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FetchError;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Answer a single HTTP request with `status_line` and `body`, returning
    /// the raw request head once done.
    async fn serve_once(status_line: &'static str, body: &'static [u8]) -> (SocketAddr, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "{status_line}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.write_all(body).await.unwrap();
            socket.shutdown().await.unwrap();

            String::from_utf8_lossy(&head).into_owned()
        });

        (addr, handle)
    }

    fn local_client(addr: SocketAddr) -> StreetViewClient {
        let http = Client::builder().no_proxy().build().unwrap();
        StreetViewClient::new("KEY")
            .with_http_client(http)
            .with_endpoint(format!("http://{addr}/streetview"))
    }

    fn query(request: &Request) -> Vec<(String, String)> {
        request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_request_carries_fixed_parameters() {
        let client = StreetViewClient::new("secret-key");
        let request = client.request(&GeoCoord::new(51.5, -0.25)).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().host_str(), Some("maps.googleapis.com"));
        assert_eq!(request.url().path(), "/maps/api/streetview");
        assert_eq!(
            query(&request),
            vec![
                ("location".to_string(), "51.5,-0.25".to_string()),
                ("size".to_string(), "600x600".to_string()),
                ("key".to_string(), "secret-key".to_string()),
                ("fov".to_string(), "120".to_string()),
                ("heading".to_string(), "65".to_string()),
                ("pitch".to_string(), "-1".to_string()),
            ]
        );
    }

    #[test]
    fn test_custom_endpoint_and_params() {
        let params = StreetViewParams {
            width: 320,
            height: 240,
            ..StreetViewParams::default()
        };
        let client = StreetViewClient::new("k")
            .with_endpoint("http://localhost:9000/streetview/")
            .with_params(params);
        let request = client.request(&GeoCoord::new(1.0, 2.0)).unwrap();

        assert_eq!(request.url().port(), Some(9000));
        assert_eq!(request.url().path(), "/streetview");
        assert!(query(&request).contains(&("size".to_string(), "320x240".to_string())));
    }

    #[test]
    fn test_key_is_url_encoded() {
        let client = StreetViewClient::new("a&b=c");
        let request = client.request(&GeoCoord::default()).unwrap();

        assert!(!request.url().as_str().contains("a&b=c"));
        assert!(query(&request).contains(&("key".to_string(), "a&b=c".to_string())));
    }

    #[test]
    fn test_invalid_endpoint() {
        let client = StreetViewClient::new("k").with_endpoint("not a url");
        let result = client.request(&GeoCoord::default());
        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let (addr, server) = serve_once("HTTP/1.1 200 OK", b"\x89PNG image bytes").await;

        let bytes = local_client(addr).fetch(&GeoCoord::new(1.5, 2.5)).await.unwrap();
        assert_eq!(bytes, b"\x89PNG image bytes");

        let head = server.await.unwrap();
        assert!(head.starts_with("GET /streetview?location=1.5%2C2.5&size=600x600&key=KEY"), "{head}");
    }

    #[tokio::test]
    async fn test_fetch_returns_body_of_non_success_status() {
        let (addr, server) = serve_once("HTTP/1.1 404 Not Found", b"no such panorama").await;

        let result = local_client(addr).fetch(&GeoCoord::default()).await;
        assert_eq!(result.unwrap(), b"no such panorama");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = local_client(addr).fetch(&GeoCoord::default()).await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }
}
