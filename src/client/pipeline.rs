//! The request/response pipeline that every endpoint call funnels through.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};

use super::{Error, ErrorDetail};

/// Base URL of the production API.
const PRODUCTION_URL: &str = "https://api.cygnetbank.com";

/// User agent reported on every request.
const USER_AGENT: &str = concat!("cygnet/", env!("CARGO_PKG_VERSION"));

/// An authenticated API client.
///
/// The client holds the bearer credential and base URL, both read-only
/// after construction, so a single instance can be shared freely across
/// tasks. Every endpoint method builds a request, dispatches it over
/// the configured transport, and classifies the outcome: a 2xx body
/// decodes into the caller's type, anything else becomes [`Error::Api`]
/// carrying the status and the provider's error detail. Exactly one
/// network round trip happens per call; nothing is retried.
///
/// Cancellation is structural (drop the future to abort the call) and
/// deadlines belong to the transport; see
/// [`ReqwestClient::from_client`](crate::transport::ReqwestClient::from_client).
///
/// # Type Parameters
///
/// - `C`: The HTTP transport implementation
///
/// # Example
///
/// ```no_run
/// use cygnet::Client;
///
/// # async fn example() -> Result<(), cygnet::Error> {
/// let client = Client::new("personal-access-token");
/// let accounts = client.accounts().await?;
/// println!("{} accounts", accounts.len());
/// # Ok(())
/// # }
/// ```
pub struct Client<C = ReqwestClient> {
    http: C,
    base_url: url::Url,
    token: String,
}

impl Client<ReqwestClient> {
    /// Creates a client for the production API with the default transport.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: ReqwestClient::new(),
            base_url: url::Url::parse(PRODUCTION_URL).expect("production URL parses"),
            token: token.into(),
        }
    }
}

impl<C> Client<C> {
    /// Overrides the base URL, e.g. to point at a sandbox environment.
    #[must_use]
    pub fn with_base_url(mut self, base_url: url::Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Swaps the HTTP transport.
    ///
    /// Any [`HttpClient`] implementation works, including mocks in tests
    /// and reqwest clients with custom timeouts.
    #[must_use]
    pub fn with_http_client<C2>(self, http: C2) -> Client<C2> {
        Client {
            http,
            base_url: self.base_url,
            token: self.token,
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub const fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Resolves an API path plus query parameters against the base URL.
    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<url::Url, Error> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| Error::Construction(Box::new(e)))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Builds an authenticated request, attaching the JSON body if present.
    fn build_request(
        &self,
        method: http::Method,
        url: url::Url,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest, Error> {
        let bearer = http::HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| Error::Construction(Box::new(e)))?;

        let mut request = HttpRequest::new(method, url)
            .with_header(http::header::AUTHORIZATION, bearer)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            )
            .with_header(
                http::header::USER_AGENT,
                http::HeaderValue::from_static(USER_AGENT),
            );

        if let Some(body) = body {
            request = request
                .with_header(
                    http::header::CONTENT_TYPE,
                    http::HeaderValue::from_static("application/json"),
                )
                .with_body(body);
        }

        Ok(request)
    }
}

impl<C: HttpClient> Client<C> {
    /// Performs one round trip and classifies the status.
    ///
    /// A non-2xx response becomes [`Error::Api`] with a best-effort
    /// parse of the error body; the body text rides along for callers
    /// that need more than the message.
    async fn execute(
        &self,
        method: http::Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, Error> {
        let url = self.endpoint(path, query)?;
        let request = self.build_request(method, url, body)?;

        tracing::debug!(method = %request.method, url = %request.url, "dispatching API request");
        let response = self.http.request(request).await?;
        tracing::debug!(status = %response.status, "API response received");

        if response.is_success() {
            return Ok(response);
        }

        Err(Error::Api {
            status: response.status,
            detail: ErrorDetail::from_body(&response.body),
            body: response.body_text().map(ToString::to_string),
        })
    }

    /// GET `path` and decode the 2xx body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on construction, transport, non-2xx or decode
    /// failure.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.get_json_with_query(path, &[]).await
    }

    /// GET `path` with query parameters and decode the 2xx body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on construction, transport, non-2xx or decode
    /// failure.
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, Error> {
        let response = self.execute(http::Method::GET, path, query, None).await?;
        decode(&response)
    }

    /// PUT a JSON body to `path` and decode the 2xx body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on construction, transport, non-2xx or decode
    /// failure.
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = to_payload(body)?;
        let response = self
            .execute(http::Method::PUT, path, &[], Some(payload))
            .await?;
        decode(&response)
    }

    /// PUT a JSON body to `path`, ignoring any 2xx response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on construction, transport or non-2xx failure.
    pub async fn put_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), Error> {
        let payload = to_payload(body)?;
        self.execute(http::Method::PUT, path, &[], Some(payload))
            .await?;
        Ok(())
    }

    /// POST a JSON body to `path`, ignoring any 2xx response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on construction, transport or non-2xx failure.
    pub async fn post_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), Error> {
        let payload = to_payload(body)?;
        self.execute(http::Method::POST, path, &[], Some(payload))
            .await?;
        Ok(())
    }

    /// DELETE `path`, ignoring any 2xx response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] on construction, transport or non-2xx failure.
    pub async fn delete_empty(&self, path: &str) -> Result<(), Error> {
        self.execute(http::Method::DELETE, path, &[], None).await?;
        Ok(())
    }
}

// Keep the credential out of logs.
impl<C: std::fmt::Debug> std::fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("http", &self.http)
            .field("base_url", &self.base_url.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

fn to_payload<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(body).map_err(|e| Error::Construction(Box::new(e)))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, Error> {
    serde_json::from_slice(&response.body).map_err(Error::Decode)
}
