//! Parsing of raw JSON sub-configurations.
//!
//! Nested records (docker daemon, caches, global flags) reach the plugin as
//! JSON text. Each one is either absent or fully parsed; partial overlays
//! onto pre-filled records are not supported.

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::{Error, Result};

/// Parses `raw` into a sub-configuration record.
///
/// Blank text means "no override" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`Error::FlagEncoding`] naming `field` when the text is not
/// valid JSON for `T`.
///
/// # Examples
///
/// ```
/// use shoyu_core::{parse_sub_config, DockerDaemonConfig};
///
/// let docker: Option<DockerDaemonConfig> =
///     parse_sub_config("build.docker-options", r#"{"scheme": "https"}"#).unwrap();
/// assert_eq!(docker.unwrap().scheme, "https");
///
/// let absent: Option<DockerDaemonConfig> =
///     parse_sub_config("build.docker-options", "  ").unwrap();
/// assert!(absent.is_none());
/// ```
pub fn parse_sub_config<T: DeserializeOwned>(field: &str, raw: &str) -> Result<Option<T>> {
    if raw.trim().is_empty() {
        trace!(field, "no sub-configuration provided");
        return Ok(None);
    }

    trace!(field, "parsing sub-configuration");
    serde_json::from_str(raw)
        .map(Some)
        .map_err(|err| Error::flag_encoding(field, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{HttpCacheConfig, RedisCacheConfig};
    use crate::duration::DurationValue;

    #[test]
    fn test_blank_is_absent() {
        let cache: Option<HttpCacheConfig> =
            parse_sub_config("build.http-cache-options", "").unwrap();
        assert!(cache.is_none());
    }

    #[test]
    fn test_redis_ttl_as_nanoseconds() {
        let redis: Option<RedisCacheConfig> =
            parse_sub_config("build.redis-cache-options", r#"{"ttl": 60000000000}"#).unwrap();
        assert_eq!(
            redis.unwrap().ttl,
            Some(DurationValue::Native(std::time::Duration::from_secs(60)))
        );
    }

    #[test]
    fn test_malformed_names_field() {
        let result: Result<Option<RedisCacheConfig>> =
            parse_sub_config("build.redis-cache-options", r#"{"addr": }"#);
        let err = result.unwrap_err();
        assert!(matches!(err, Error::FlagEncoding { .. }));
        assert_eq!(err.field(), "build.redis-cache-options");
    }

    #[test]
    fn test_wrong_shape_is_rejected() {
        let result: Result<Option<HttpCacheConfig>> =
            parse_sub_config("build.http-cache-options", r#"{"headers": "not-a-list"}"#);
        assert!(result.is_err());
    }
}
