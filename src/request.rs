//! The closed set of request shapes the client knows how to execute.

use serde::Serialize;

/// Content type for a [`ApiRequest::Post`] body.
///
/// Maps onto the transport's native content type at dispatch. A POST body
/// with no content type is rejected at dispatch as a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `application/json`
    ApplicationJson,
}

/// An HTTP request as plain data.
///
/// Each variant carries only its relevant fields. Headers are an ordered
/// list of `(name, value)` pairs; duplicate names are all transmitted, never
/// deduplicated. A constructed request is immutable — the builder-style
/// methods and [`with_bearer_token`](ApiRequest::with_bearer_token) consume
/// the value and return a derived copy.
///
/// # Examples
///
/// ```
/// use wicket::{ApiRequest, ContentType};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct CreateDocument {
///     title: String,
/// }
///
/// let get = ApiRequest::get("https://api.example.com/documents")
///     .with_query_param("page", "1");
///
/// let post = ApiRequest::post(
///     "https://api.example.com/documents",
///     Some(CreateDocument { title: "passport".to_string() }),
///     Some(ContentType::ApplicationJson),
/// );
///
/// let form = ApiRequest::form_url_encoded(
///     "https://auth.example.com/token",
///     vec![("grant_type".to_string(), "client_credentials".to_string())],
/// );
/// # let _ = (get, post, form);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest<B = ()> {
    /// A GET request.
    Get {
        /// The absolute request URL.
        url: String,
        /// Ordered header pairs; duplicates are all sent.
        headers: Vec<(String, String)>,
        /// Ordered query parameter pairs appended to the URL.
        query_params: Vec<(String, String)>,
    },

    /// A POST request with an optional JSON-serializable body.
    Post {
        /// The absolute request URL.
        url: String,
        /// The request body, serialized according to `content_type`.
        body: Option<B>,
        /// Ordered header pairs; duplicates are all sent.
        headers: Vec<(String, String)>,
        /// How to encode the body. `None` with a body present is a
        /// configuration error at dispatch.
        content_type: Option<ContentType>,
    },

    /// A POST request with an `application/x-www-form-urlencoded` body.
    ///
    /// The form encoding is fixed for this variant; `ContentType` does not
    /// apply to it.
    FormUrlEncoded {
        /// The absolute request URL.
        url: String,
        /// Ordered header pairs; duplicates are all sent.
        headers: Vec<(String, String)>,
        /// Ordered form parameter pairs.
        params: Vec<(String, String)>,
    },
}

impl ApiRequest<()> {
    /// Creates a GET request with no headers or query parameters.
    pub fn get(url: impl Into<String>) -> Self {
        ApiRequest::Get {
            url: url.into(),
            headers: Vec::new(),
            query_params: Vec::new(),
        }
    }

    /// Creates a form-urlencoded POST request with the given parameters.
    pub fn form_url_encoded(url: impl Into<String>, params: Vec<(String, String)>) -> Self {
        ApiRequest::FormUrlEncoded {
            url: url.into(),
            headers: Vec::new(),
            params,
        }
    }
}

impl<B: Serialize> ApiRequest<B> {
    /// Creates a POST request.
    ///
    /// A `body` of `None` sends an empty request body. When a body is
    /// present, `content_type` decides its encoding; leaving it `None` is
    /// rejected at dispatch.
    pub fn post(url: impl Into<String>, body: Option<B>, content_type: Option<ContentType>) -> Self {
        ApiRequest::Post {
            url: url.into(),
            body,
            headers: Vec::new(),
            content_type,
        }
    }

    /// Returns the request URL.
    pub fn url(&self) -> &str {
        match self {
            ApiRequest::Get { url, .. }
            | ApiRequest::Post { url, .. }
            | ApiRequest::FormUrlEncoded { url, .. } => url,
        }
    }

    /// Returns the HTTP method this request dispatches as.
    pub fn method(&self) -> http::Method {
        match self {
            ApiRequest::Get { .. } => http::Method::GET,
            ApiRequest::Post { .. } | ApiRequest::FormUrlEncoded { .. } => http::Method::POST,
        }
    }

    /// Returns the ordered header pairs.
    pub fn headers(&self) -> &[(String, String)] {
        match self {
            ApiRequest::Get { headers, .. }
            | ApiRequest::Post { headers, .. }
            | ApiRequest::FormUrlEncoded { headers, .. } => headers,
        }
    }

    /// Appends a header, returning the derived request.
    ///
    /// Appending never replaces: adding a name that is already present
    /// results in both headers being sent.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers_mut().push((name.into(), value.into()));
        self
    }

    /// Appends a query parameter, returning the derived request.
    ///
    /// Only the GET variant carries query parameters; other variants are
    /// returned unchanged.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let ApiRequest::Get { query_params, .. } = &mut self {
            query_params.push((key.into(), value.into()));
        }
        self
    }

    /// Returns a derived request with `Authorization: Bearer {token}`
    /// appended to the headers.
    ///
    /// Any pre-existing `Authorization` header is kept; both are sent.
    pub fn with_bearer_token(self, token: &str) -> Self {
        self.with_header("Authorization", format!("Bearer {token}"))
    }

    fn headers_mut(&mut self) -> &mut Vec<(String, String)> {
        match self {
            ApiRequest::Get { headers, .. }
            | ApiRequest::Post { headers, .. }
            | ApiRequest::FormUrlEncoded { headers, .. } => headers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_is_appended() {
        let request = ApiRequest::get("https://api.example.com/doc")
            .with_bearer_token("ExpectedBearerToken");

        assert_eq!(
            request.headers(),
            &[(
                "Authorization".to_string(),
                "Bearer ExpectedBearerToken".to_string()
            )]
        );
    }

    #[test]
    fn bearer_token_keeps_existing_authorization_header() {
        let request = ApiRequest::get("url")
            .with_header("Authorization", "Basic abc123")
            .with_bearer_token("token");

        assert_eq!(
            request.headers(),
            &[
                ("Authorization".to_string(), "Basic abc123".to_string()),
                ("Authorization".to_string(), "Bearer token".to_string()),
            ]
        );
    }

    #[test]
    fn injection_derives_a_new_value() {
        let original = ApiRequest::get("url").with_header("Accept", "application/json");
        let derived = original.clone().with_bearer_token("token");

        assert_eq!(original.headers().len(), 1);
        assert_eq!(derived.headers().len(), 2);
    }

    #[test]
    fn duplicate_headers_are_preserved_in_order() {
        let request = ApiRequest::get("url")
            .with_header("Accept", "application/json")
            .with_header("Accept", "text/plain");

        assert_eq!(
            request.headers(),
            &[
                ("Accept".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "text/plain".to_string()),
            ]
        );
    }

    #[test]
    fn methods_map_by_variant() {
        assert_eq!(ApiRequest::get("url").method(), http::Method::GET);
        assert_eq!(
            ApiRequest::form_url_encoded("url", vec![]).method(),
            http::Method::POST
        );
        assert_eq!(
            ApiRequest::post("url", Some(serde_json::json!({})), Some(ContentType::ApplicationJson))
                .method(),
            http::Method::POST
        );
    }

    #[test]
    fn query_params_only_apply_to_get() {
        let post: ApiRequest<()> = ApiRequest::post("url", None, None)
            .with_query_param("a", "b");
        assert!(matches!(post, ApiRequest::Post { .. }));

        let get = ApiRequest::get("url").with_query_param("a", "b");
        match get {
            ApiRequest::Get { query_params, .. } => {
                assert_eq!(query_params, vec![("a".to_string(), "b".to_string())]);
            }
            _ => panic!("expected Get"),
        }
    }
}
