//! Per-action argument builders.

use std::fmt;

use tracing::trace;

use shoyu_core::{
    BuildConfig, DockerDaemonConfig, Error, GlobalOptions, HttpCacheConfig, PushConfig,
    RedisCacheConfig, Result,
};

use crate::args::ArgVector;
use crate::flags;

/// makisu actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `makisu build`
    Build,
    /// `makisu push`
    Push,
}

impl Action {
    /// Returns the action name as passed to makisu.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Push => "push",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration record that maps to one makisu action.
pub trait ActionArgs {
    /// The action this record configures.
    fn action(&self) -> Action;

    /// Builds the action's flags followed by its positional argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlagEncoding`] if a duration string does not parse.
    fn to_args(&self) -> Result<ArgVector>;
}

/// A nested record that contributes flags to its parent's vector.
///
/// Appending is purely additive; a record with every field empty appends
/// nothing.
pub trait AppendFlags {
    /// Appends this record's flags to `args`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FlagEncoding`] if a field cannot be encoded.
    fn append_flags(&self, args: &mut ArgVector) -> Result<()>;
}

impl<T: AppendFlags> AppendFlags for Option<T> {
    fn append_flags(&self, args: &mut ArgVector) -> Result<()> {
        match self {
            Some(inner) => inner.append_flags(args),
            None => Ok(()),
        }
    }
}

impl ActionArgs for BuildConfig {
    fn action(&self) -> Action {
        Action::Build
    }

    fn to_args(&self) -> Result<ArgVector> {
        trace!("creating makisu build arguments");

        let mut args = ArgVector::new();

        args.flag_each(flags::BUILD_ARG, &self.build_args)
            .flag_each(flags::BLACKLIST, &self.deny_list)
            .flag_each(flags::PUSH, &self.pushes)
            .flag_each(flags::REPLICA, &self.replicas);

        args.flag(flags::COMMIT, &self.commit)
            .flag(flags::COMPRESSION, &self.compression)
            .flag(flags::DEST, &self.destination)
            .flag(flags::FILE, &self.file)
            .flag_duration(flags::LOCAL_CACHE_TTL, self.local_cache_ttl)
            .flag(flags::REGISTRY_CONFIG, &self.registry_config)
            .flag(flags::STORAGE, &self.storage)
            .flag(flags::TAG, &self.tag)
            .flag(flags::TARGET, &self.target);

        args.switch(flags::LOAD, self.load)
            .switch(flags::MODIFY_FS, self.modify_fs)
            .switch(flags::PRESERVE_ROOT, self.preserve_root);

        self.docker.append_flags(&mut args)?;
        self.http_cache.append_flags(&mut args)?;
        self.redis_cache.append_flags(&mut args)?;

        args.positional(self.context.as_str());

        Ok(args)
    }
}

impl ActionArgs for PushConfig {
    fn action(&self) -> Action {
        Action::Push
    }

    fn to_args(&self) -> Result<ArgVector> {
        trace!("creating makisu push arguments");

        let mut args = ArgVector::new();

        args.flag_each(flags::PUSH, &self.pushes)
            .flag_each(flags::REPLICA, &self.replicas)
            .flag(flags::REGISTRY_CONFIG, &self.registry_config)
            .flag(flags::TAG, &self.tag)
            .positional(self.path.as_str());

        Ok(args)
    }
}

impl AppendFlags for DockerDaemonConfig {
    fn append_flags(&self, args: &mut ArgVector) -> Result<()> {
        args.flag(flags::DOCKER_HOST, &self.host)
            .flag(flags::DOCKER_SCHEME, &self.scheme)
            .flag(flags::DOCKER_VERSION, &self.version);
        Ok(())
    }
}

impl AppendFlags for HttpCacheConfig {
    fn append_flags(&self, args: &mut ArgVector) -> Result<()> {
        args.flag(flags::HTTP_CACHE_ADDR, &self.addr)
            .flag_each(flags::HTTP_CACHE_HEADER, &self.headers);
        Ok(())
    }
}

impl AppendFlags for RedisCacheConfig {
    fn append_flags(&self, args: &mut ArgVector) -> Result<()> {
        // resolve before touching `args` so a bad ttl leaves nothing behind
        let ttl = self
            .ttl
            .as_ref()
            .map(|ttl| {
                ttl.resolve()
                    .map_err(|err| Error::flag_encoding("redis_cache.ttl", err))
            })
            .transpose()?
            .unwrap_or_default();

        args.flag(flags::REDIS_CACHE_ADDR, &self.addr)
            .flag(flags::REDIS_CACHE_PASSWORD, &self.password)
            .flag_duration(flags::REDIS_CACHE_TTL, ttl);
        Ok(())
    }
}

/// Builds the global flags shared by every action.
#[must_use]
pub fn global_args(options: &GlobalOptions) -> ArgVector {
    trace!("creating global makisu arguments");

    let mut args = ArgVector::new();
    args.switch(flags::CPU_PROFILE, options.cpu.profile)
        .flag(flags::LOG_FMT, &options.log.fmt)
        .flag(flags::LOG_LEVEL, &options.log.level)
        .flag(flags::LOG_OUTPUT, &options.log.output);
    args
}
