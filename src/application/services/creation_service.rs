//! Short URL creation service.

use std::iter;
use std::sync::Arc;
use std::time::Duration;

use tokio_retry::RetryIf;
use tracing::{debug, error, info, warn};

use crate::domain::entities::Mapping;
use crate::domain::repositories::{KeyValueStore, StorageError};
use crate::error::AppError;
use crate::utils::code_generator::IdGenerator;

/// Path segment between the base URL and the short identifier.
pub const SHORTEN_PATH: &str = "/shorten/";

/// Default number of identifiers tried before giving up on collisions.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

pub const EMPTY_LONG_URL_MESSAGE: &str = "longUrl cannot be null or empty.";
pub const STORE_FAILED_MESSAGE: &str = "Failed to store URL.";

/// Returns true if `value` has nothing but ASCII control characters and spaces.
///
/// Other Unicode whitespace (e.g. U+00A0) counts as content.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c <= ' ').is_empty()
}

/// Service for registering long URLs under freshly generated short identifiers.
///
/// Writes are conditional: a generated identifier that is already taken is
/// discarded and a new one is drawn, up to `max_attempts` identifiers in total.
pub struct CreationService {
    store: Arc<dyn KeyValueStore>,
    id_generator: Arc<dyn IdGenerator>,
    base_url: String,
    max_attempts: usize,
}

impl CreationService {
    /// Creates a new creation service.
    ///
    /// A trailing `/` on `base_url` is dropped. `max_attempts` is at least 1.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        id_generator: Arc<dyn IdGenerator>,
        base_url: impl Into<String>,
        max_attempts: usize,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            store,
            id_generator,
            base_url,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Shortens a long URL and returns the externally visible short URL.
    ///
    /// The stored value is `long_url` exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `long_url` is empty or whitespace-only;
    /// nothing is written in that case.
    ///
    /// Returns [`AppError::Storage`] if the store fails, or if every attempted
    /// identifier collided with an existing mapping.
    pub async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        if is_blank(long_url) {
            debug!("Rejected shorten request: longUrl is null or empty");
            return Err(AppError::bad_request(EMPTY_LONG_URL_MESSAGE));
        }

        let retries = iter::repeat(Duration::ZERO).take(self.max_attempts - 1);

        let short_url_id = RetryIf::start(
            retries,
            || self.try_store(long_url),
            |e: &StorageError| e.is_key_exists(),
        )
        .await
        .map_err(|e| {
            error!("Error storing shortUrlId for longUrl {}: {}", long_url, e);
            AppError::storage(STORE_FAILED_MESSAGE, e)
        })?;

        let short_url = self.short_url(&short_url_id);
        info!("Stored shortUrlId {} -> {}", short_url_id, long_url);

        Ok(short_url)
    }

    /// Constructs the full short URL for an identifier.
    pub fn short_url(&self, short_url_id: &str) -> String {
        format!("{}{}{}", self.base_url, SHORTEN_PATH, short_url_id)
    }

    /// Draws one identifier and attempts a write-once put.
    async fn try_store(&self, long_url: &str) -> Result<String, StorageError> {
        let mapping = Mapping::new(self.id_generator.generate(), long_url);
        debug!("Generated shortUrlId: {}", mapping.short_url_id);

        match self
            .store
            .put(&mapping.short_url_id, &mapping.long_url)
            .await
        {
            Ok(()) => Ok(mapping.short_url_id),
            Err(e) => {
                if e.is_key_exists() {
                    warn!(
                        "shortUrlId collision on {}, drawing a new one",
                        mapping.short_url_id
                    );
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockKeyValueStore;
    use crate::utils::code_generator::MockIdGenerator;

    const BASE_URL: &str = "https://api.example.org";

    fn generator_yielding(ids: &[&str]) -> MockIdGenerator {
        let mut ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        ids.reverse();
        let count = ids.len();

        let mut generator = MockIdGenerator::new();
        generator
            .expect_generate()
            .times(count)
            .returning(move || ids.pop().unwrap());
        generator
    }

    fn service(store: MockKeyValueStore, generator: MockIdGenerator) -> CreationService {
        CreationService::new(
            Arc::new(store),
            Arc::new(generator),
            BASE_URL,
            DEFAULT_MAX_ATTEMPTS,
        )
    }

    fn key_exists(key: &str) -> StorageError {
        StorageError::KeyExists {
            key: key.to_string(),
        }
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_put()
            .withf(|key, value| key == "ab12cd34" && value == "https://example.com/article")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(store, generator_yielding(&["ab12cd34"]));

        let short_url = service
            .shorten("https://example.com/article")
            .await
            .unwrap();

        assert_eq!(short_url, "https://api.example.org/shorten/ab12cd34");
    }

    #[tokio::test]
    async fn test_shorten_stores_url_verbatim() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_put()
            .withf(|_, value| value == "  https://example.com/padded  ")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(store, generator_yielding(&["ab12cd34"]));

        assert!(
            service
                .shorten("  https://example.com/padded  ")
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_shorten_rejects_empty_and_blank() {
        for input in ["", "   ", "\t\n", "\u{1}\u{1f}"] {
            let mut store = MockKeyValueStore::new();
            store.expect_put().times(0);
            let mut generator = MockIdGenerator::new();
            generator.expect_generate().times(0);

            let service = service(store, generator);
            let err = service.shorten(input).await.unwrap_err();

            assert!(matches!(err, AppError::Validation { .. }));
            assert_eq!(err.to_string(), EMPTY_LONG_URL_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_shorten_accepts_non_ascii_whitespace() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_put()
            .withf(|_, value| value == "\u{a0}")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(store, generator_yielding(&["ab12cd34"]));

        assert!(service.shorten("\u{a0}").await.is_ok());
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n\u{0}"));
        assert!(!is_blank("\u{a0}"));
        assert!(!is_blank("\u{3000}"));
        assert!(!is_blank(" x "));
    }

    #[tokio::test]
    async fn test_shorten_retries_after_collision() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_put()
            .withf(|key, _| key == "taken001")
            .times(1)
            .returning(|key, _| Err(key_exists(key)));
        store
            .expect_put()
            .withf(|key, _| key == "fresh002")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = service(store, generator_yielding(&["taken001", "fresh002"]));

        let short_url = service.shorten("https://example.com").await.unwrap();

        assert_eq!(short_url, "https://api.example.org/shorten/fresh002");
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_attempt_budget() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_put()
            .times(3)
            .returning(|key, _| Err(key_exists(key)));

        let service = CreationService::new(
            Arc::new(store),
            Arc::new(generator_yielding(&["dupe0001", "dupe0002", "dupe0003"])),
            BASE_URL,
            3,
        );

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Storage {
                source: StorageError::KeyExists { .. },
                ..
            }
        ));
        assert_eq!(err.to_string(), STORE_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_shorten_does_not_retry_backend_failure() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_put()
            .times(1)
            .returning(|_, _| Err(StorageError::backend("postgres", "connection refused")));

        let service = service(store, generator_yielding(&["ab12cd34"]));

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(
            err,
            AppError::Storage {
                source: StorageError::Backend { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let service = CreationService::new(
            Arc::new(MockKeyValueStore::new()),
            Arc::new(MockIdGenerator::new()),
            "https://api.example.org/test/",
            DEFAULT_MAX_ATTEMPTS,
        );

        assert_eq!(
            service.short_url("ab12cd34"),
            "https://api.example.org/test/shorten/ab12cd34"
        );
    }

    #[test]
    fn test_zero_attempts_is_clamped() {
        let service = CreationService::new(
            Arc::new(MockKeyValueStore::new()),
            Arc::new(MockIdGenerator::new()),
            BASE_URL,
            0,
        );

        assert_eq!(service.max_attempts, 1);
    }
}
