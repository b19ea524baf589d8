use std::{fmt, sync::Arc};

use reqwest::{
    StatusCode,
    header::{self, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    Error, Result,
    transport::{ApiRequest, Method, Transport},
};

/// Statuses treated as success. Anything else becomes [`Error::Http`].
const SUCCESS: [StatusCode; 4] = [
    StatusCode::OK,
    StatusCode::CREATED,
    StatusCode::ACCEPTED,
    StatusCode::NO_CONTENT,
];

/// Shared plumbing of every resource client: resolves endpoints against the
/// versioned host, authenticates and checks the response status.
#[derive(Clone)]
pub struct RestBase {
    uri: String,
    auth: HeaderValue,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for RestBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestBase")
            .field("uri", &self.uri)
            .finish_non_exhaustive()
    }
}

impl RestBase {
    pub fn new(
        host: &str,
        api_version: &str,
        token: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let mut auth = HeaderValue::try_from(format!("Bearer {token}"))?;
        auth.set_sensitive(true);

        Ok(Self {
            uri: format!(
                "{}/{}/",
                host.trim_end_matches('/'),
                api_version.trim_matches('/')
            ),
            auth,
            transport,
        })
    }

    /// Resolves `endpoint` against `{host}/{version}/`, dropping a single
    /// leading `/` so the two never double up.
    pub fn resolve(&self, endpoint: &str) -> String {
        let endpoint = endpoint.strip_prefix('/').unwrap_or(endpoint);
        format!("{}{endpoint}", self.uri)
    }

    fn headers(&self, method: Method) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, self.auth.clone());
        if method.is_write() {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        headers
    }

    /// Performs one call and returns the decoded JSON body.
    ///
    /// An empty body (e.g. `204 No Content`) decodes to `Value::Null`.
    pub fn call(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value> {
        let request = ApiRequest {
            method,
            url: self.resolve(endpoint),
            headers: self.headers(method),
            query: query
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
            body: body.or_else(|| method.is_write().then(|| Value::Object(Default::default()))),
        };
        tracing::debug!("{method} {}", request.url);

        let resp = self.transport.execute(request)?;
        if !SUCCESS.contains(&resp.status) {
            tracing::warn!("{method} {endpoint} failed with {}", resp.status);
            return Err(Error::Http {
                status: resp.status,
                body: resp.body,
            });
        }

        if resp.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&resp.body)?)
    }

    pub fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        let value = self.call(Method::Get, endpoint, query, None)?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Value,
    ) -> Result<T> {
        let value = self.call(method, endpoint, &[], Some(body))?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::ApiResponse;

    struct Nothing;

    impl Transport for Nothing {
        fn execute(&self, _request: ApiRequest) -> Result<ApiResponse> {
            Ok(ApiResponse {
                status: StatusCode::NO_CONTENT,
                body: String::new(),
            })
        }
    }

    fn base(host: &str) -> RestBase {
        RestBase::new(host, "v1", "secret", Arc::new(Nothing)).unwrap()
    }

    #[test]
    fn resolve_strips_one_leading_separator() {
        let rest = base("https://api.ynab.com");
        assert_eq!(
            rest.resolve("/budgets/b1/accounts"),
            "https://api.ynab.com/v1/budgets/b1/accounts"
        );
        assert_eq!(
            rest.resolve("budgets/b1/accounts"),
            "https://api.ynab.com/v1/budgets/b1/accounts"
        );
    }

    #[test]
    fn resolve_tolerates_trailing_slash_on_host() {
        let rest = base("http://localhost:8080/");
        assert_eq!(rest.resolve("/x"), "http://localhost:8080/v1/x");
    }

    #[test]
    fn content_type_only_on_writes() {
        let rest = base("https://api.ynab.com");
        let get = rest.headers(Method::Get);
        assert!(get.get(header::CONTENT_TYPE).is_none());
        assert_eq!(get[header::AUTHORIZATION], "Bearer secret");
        assert!(get[header::AUTHORIZATION].is_sensitive());

        for method in [Method::Post, Method::Put, Method::Patch] {
            let headers = rest.headers(method);
            assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        }
    }

    #[test]
    fn empty_body_decodes_to_null() {
        let rest = base("https://api.ynab.com");
        let value = rest.call(Method::Get, "/anything", &[], None).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn rejects_token_with_control_characters() {
        let err = RestBase::new("https://api.ynab.com", "v1", "bad\ntoken", Arc::new(Nothing))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidToken(_)));
    }
}
