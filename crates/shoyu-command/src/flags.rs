//! makisu flag names.

// global

/// Enables CPU profiling.
pub const CPU_PROFILE: &str = "--cpu-profile";
/// Log encoding.
pub const LOG_FMT: &str = "--log-fmt";
/// Log verbosity.
pub const LOG_LEVEL: &str = "--log-level";
/// Log destination.
pub const LOG_OUTPUT: &str = "--log-output";

// build and push

/// Build-time variable, repeated per value.
pub const BUILD_ARG: &str = "--build-arg";
/// Path left out of the image, repeated per value.
pub const BLACKLIST: &str = "--blacklist";
/// Registry to push to, repeated per value.
pub const PUSH: &str = "--push";
/// Additional image name, repeated per value.
pub const REPLICA: &str = "--replica";
/// Commit hash used for the cache id.
pub const COMMIT: &str = "--commit";
/// Layer compression level.
pub const COMPRESSION: &str = "--compression";
/// Image tarball destination.
pub const DEST: &str = "--dest";
/// Dockerfile path.
pub const FILE: &str = "--file";
/// Local cache lifetime.
pub const LOCAL_CACHE_TTL: &str = "--local-cache-ttl";
/// Registry auth file.
pub const REGISTRY_CONFIG: &str = "--registry-config";
/// makisu storage directory.
pub const STORAGE: &str = "--storage";
/// Image tag.
pub const TAG: &str = "--tag";
/// Build stage to target.
pub const TARGET: &str = "--target";
/// Loads the image into the docker daemon.
pub const LOAD: &str = "--load";
/// Lets makisu modify the local filesystem.
pub const MODIFY_FS: &str = "--modifyfs";
/// Keeps the root filesystem between steps.
pub const PRESERVE_ROOT: &str = "--preserve-root";

// nested sub-configs

/// Docker daemon address.
pub const DOCKER_HOST: &str = "--docker-host";
/// Docker daemon scheme.
pub const DOCKER_SCHEME: &str = "--docker-scheme";
/// Docker API version.
pub const DOCKER_VERSION: &str = "--docker-version";
/// HTTP cache address.
pub const HTTP_CACHE_ADDR: &str = "--http-cache-addr";
/// Header sent to the HTTP cache.
pub const HTTP_CACHE_HEADER: &str = "--http-cache-header";
/// Redis cache address.
pub const REDIS_CACHE_ADDR: &str = "--redis-cache-addr";
/// Redis cache password.
pub const REDIS_CACHE_PASSWORD: &str = "--redis-cache-password";
/// Redis cache entry lifetime.
pub const REDIS_CACHE_TTL: &str = "--redis-cache-ttl";

/// Flags whose values are hidden when an argument vector is displayed.
pub const SECRET_FLAGS: &[&str] = &[REDIS_CACHE_PASSWORD];
