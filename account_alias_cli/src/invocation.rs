//! Invocation flags and the decision of what a run will do
//!
//! The plan is computed from the flags alone, before configuration is loaded
//! or any AWS client is built, so the usage and invalid-state paths can never
//! reach the network.

use account_alias_core::{AliasDesiredState, AliasName, CredentialOverrides};
use clap::Args;

/// Message printed when the desired state is not recognised
pub const INVALID_STATE_MESSAGE: &str = "aws account state can be only present or absent";

/// Flags describing the desired alias and credential overrides
#[derive(Args, Debug, Clone)]
pub struct AliasArgs {
    /// AWS account alias name. If not set, nothing is done
    #[arg(long = "aws_account_alias", value_name = "NAME")]
    pub aws_account_alias: Option<String>,

    /// AWS account alias state: 'present' creates the alias, 'absent' deletes it
    #[arg(
        long = "aws_account_state",
        value_name = "STATE",
        default_value = "present"
    )]
    pub aws_account_state: String,

    /// Access key id. If not set, AWS_ACCESS_KEY_ID is used
    #[arg(long = "aws_access_key_id", value_name = "ID")]
    pub aws_access_key_id: Option<String>,

    /// Secret access key. If not set, AWS_SECRET_ACCESS_KEY is used
    #[arg(long = "aws_secret_key", alias = "aws_access_key", value_name = "KEY")]
    pub aws_secret_key: Option<String>,
}

impl AliasArgs {
    /// Credential overrides given on the command line
    pub fn credential_overrides(&self) -> CredentialOverrides {
        CredentialOverrides::new()
            .with_access_key_id(self.aws_access_key_id.clone())
            .with_secret_access_key(self.aws_secret_key.clone())
    }
}

/// What a single invocation is going to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// No alias was given: print the usage hint
    Usage,
    /// The state flag was not `present` or `absent`
    InvalidState(String),
    /// Reconcile the alias
    Reconcile {
        state: AliasDesiredState,
        alias: AliasName,
    },
}

impl Plan {
    pub fn from_args(args: &AliasArgs) -> Self {
        let Ok(alias) = AliasName::from_optional(args.aws_account_alias.as_deref()) else {
            return Self::Usage;
        };

        match args.aws_account_state.parse() {
            Ok(state) => Self::Reconcile { state, alias },
            Err(_) => Self::InvalidState(args.aws_account_state.clone()),
        }
    }
}

/// Usage hint printed when no alias is given
pub fn usage_line(program: &str) -> String {
    format!("{program}  -h")
}

/// Base name of the running executable
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(|p| p.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "aws-account-alias".to_string())
}
