/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::Request;

use crate::config::Secrets;
use crate::error::ClientError;
use crate::requests::RequestHook;
use crate::storage::TokenStore;

pub const APP_ID_KEY: HeaderName = HeaderName::from_static("x-app-id");
pub const APP_KEY_KEY: HeaderName = HeaderName::from_static("x-app-key");

/// The app identification pair, sent with every request.
///
/// Headers the request already carries are left alone. The content type
/// is set along with the body, so bodiless requests go out without one.
#[derive(Debug, Clone)]
pub struct StaticHeaders {
    headers: HeaderMap,
}

impl StaticHeaders {
    pub fn new(secrets: &Secrets) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(APP_ID_KEY, header_value(APP_ID_KEY.as_str(), &secrets.app_id)?);
        headers.insert(APP_KEY_KEY, header_value(APP_KEY_KEY.as_str(), &secrets.app_key)?);
        Ok(StaticHeaders { headers })
    }
}

impl RequestHook for StaticHeaders {
    fn apply(&self, mut request: Request) -> Result<Request, ClientError> {
        let headers = request.headers_mut();
        for (name, value) in &self.headers {
            headers.entry(name).or_insert_with(|| value.clone());
        }
        Ok(request)
    }
}

/// Attaches `Authorization: Bearer <token>` when the store holds a token.
///
/// The store is read again for every request, so logging in or out
/// takes effect on the next call.
#[derive(Clone)]
pub struct BearerAuth {
    store: Arc<dyn TokenStore>,
}

impl BearerAuth {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        BearerAuth { store }
    }
}

impl RequestHook for BearerAuth {
    fn apply(&self, mut request: Request) -> Result<Request, ClientError> {
        let token = self.store.token().map_err(ClientError::Credential)?;
        if let Some(token) = token.filter(|token| !token.is_empty()) {
            let mut value = header_value(AUTHORIZATION.as_str(), &format!("Bearer {}", token))?;
            value.set_sensitive(true);
            request.headers_mut().insert(AUTHORIZATION, value);
        }
        Ok(request)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value).map_err(|source| ClientError::InvalidHeader {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use reqwest::header::CONTENT_TYPE;
    use reqwest::Method;

    use super::*;
    use crate::auth::{Login, Logout};
    use crate::requests::test_support::context;
    use crate::storage::{MemoryTokenStore, StoreError};

    fn secrets() -> Secrets {
        Secrets {
            app_id: "my-app".to_string(),
            app_key: "my-key".to_string(),
        }
    }

    fn request() -> Request {
        context()
            .prepare(&Login::new("alice", "pw", None))
            .unwrap()
    }

    struct BrokenStore;

    impl TokenStore for BrokenStore {
        fn token(&self) -> Result<Option<String>, StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "locked").into())
        }
    }

    #[test]
    fn static_headers_are_added() {
        let request = StaticHeaders::new(&secrets()).unwrap().apply(request()).unwrap();

        assert_eq!(request.headers()[&APP_ID_KEY], "my-app");
        assert_eq!(request.headers()[&APP_KEY_KEY], "my-key");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn bodiless_request_gets_no_content_type() {
        let request = context().prepare(&Logout).unwrap();
        let request = StaticHeaders::new(&secrets()).unwrap().apply(request).unwrap();

        assert_eq!(request.headers()[&APP_ID_KEY], "my-app");
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn static_headers_keep_existing_values() {
        let mut request = Request::new(Method::GET, "https://example.com".parse().unwrap());
        request
            .headers_mut()
            .insert(APP_ID_KEY, HeaderValue::from_static("other-app"));
        let request = StaticHeaders::new(&secrets()).unwrap().apply(request).unwrap();

        assert_eq!(request.headers()[&APP_ID_KEY], "other-app");
        assert_eq!(request.headers()[&APP_KEY_KEY], "my-key");
    }

    #[test]
    fn invalid_app_key_is_rejected() {
        let secrets = Secrets {
            app_id: "my-app".to_string(),
            app_key: "line\nbreak".to_string(),
        };
        let err = StaticHeaders::new(&secrets).unwrap_err();
        assert!(matches!(err, ClientError::InvalidHeader { name, .. } if name == "x-app-key"));
    }

    #[test]
    fn bearer_token_is_attached_when_stored() {
        let hook = BearerAuth::new(Arc::new(MemoryTokenStore::with_token("t0k3n")));
        let request = hook.apply(request()).unwrap();

        assert_eq!(request.headers()[AUTHORIZATION], "Bearer t0k3n");
        assert!(request.headers()[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn no_authorization_without_token() {
        let store = Arc::new(MemoryTokenStore::new());
        let hook = BearerAuth::new(store.clone());
        assert!(hook.apply(request()).unwrap().headers().get(AUTHORIZATION).is_none());

        store.set("");
        assert!(hook.apply(request()).unwrap().headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn token_is_read_for_each_request() {
        let store = Arc::new(MemoryTokenStore::new());
        let hook = BearerAuth::new(store.clone());

        store.set("first");
        assert_eq!(hook.apply(request()).unwrap().headers()[AUTHORIZATION], "Bearer first");
        store.set("second");
        assert_eq!(hook.apply(request()).unwrap().headers()[AUTHORIZATION], "Bearer second");
        store.clear();
        assert!(hook.apply(request()).unwrap().headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn store_failure_rejects_request() {
        let hook = BearerAuth::new(Arc::new(BrokenStore));
        assert!(matches!(hook.apply(request()), Err(ClientError::Credential(_))));
    }
}
