//! Registry flags.

use clap::Args;

use shoyu_core::{RegistryCredential, DEFAULT_REGISTRY};

/// The registry the image is published to.
#[derive(Args, Debug, Clone)]
pub struct RegistryArgs {
    /// Registry host
    #[arg(long = "registry.name", env = "PARAMETER_REGISTRY", default_value = DEFAULT_REGISTRY)]
    pub name: String,

    /// Mirror used for anonymous pulls
    #[arg(long = "registry.mirror", env = "PARAMETER_MIRROR")]
    pub mirror: Option<String>,

    /// Registry username
    #[arg(long = "registry.username", env = "PARAMETER_USERNAME")]
    pub username: Option<String>,

    /// Registry password
    #[arg(long = "registry.password", env = "PARAMETER_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Build without pushing
    #[arg(long = "registry.dry-run", env = "PARAMETER_DRY_RUN")]
    pub dry_run: bool,
}

impl From<&RegistryArgs> for RegistryCredential {
    fn from(args: &RegistryArgs) -> Self {
        Self {
            host: args.name.clone(),
            mirror: args.mirror.clone().unwrap_or_default(),
            username: args.username.clone().unwrap_or_default(),
            password: args.password.clone().unwrap_or_default(),
            dry_run: args.dry_run,
        }
    }
}
