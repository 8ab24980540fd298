//! AWS SDK backed service implementations
//!
//! IAM account aliases are global, but the SDK still needs a region to sign
//! requests. When neither the configuration nor the SDK region chain yields
//! one, `us-east-1` is used.

use crate::AwsConfig;
use crate::credentials::CredentialSource;
use crate::error::RemoteError;
use crate::service::{AliasApi, CallerIdentity};
use crate::types::{AccountIdentifier, AliasName};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::profile::ProfileFileRegionProvider;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_iam::config::Credentials;
use aws_sdk_iam::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_iam::operation::create_account_alias::CreateAccountAliasError;
use aws_sdk_iam::operation::delete_account_alias::DeleteAccountAliasError;
use log::debug;

const FALLBACK_REGION: &str = "us-east-1";
const CREDENTIALS_PROVIDER_NAME: &str = "aws-account-alias";

const CREATE_OPERATION: &str = "CreateAccountAlias";
const DELETE_OPERATION: &str = "DeleteAccountAlias";

/// Build the shared SDK configuration
pub async fn load_sdk_config(config: &AwsConfig, credentials: &CredentialSource) -> SdkConfig {
    let region = match (&config.region, &config.profile) {
        (Some(region), _) => RegionProviderChain::first_try(Region::new(region.clone())),
        (None, Some(profile)) => RegionProviderChain::first_try(
            ProfileFileRegionProvider::builder()
                .profile_name(profile)
                .build(),
        )
        .or_default_provider(),
        (None, None) => RegionProviderChain::default_provider(),
    }
    .or_else(Region::from_static(FALLBACK_REGION));

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

    if let Some(profile) = &config.profile {
        debug!("Using AWS profile {profile}");
        loader = loader.profile_name(profile);
    }

    if let Some(endpoint_url) = &config.endpoint_url {
        debug!("Using custom endpoint {endpoint_url}");
        loader = loader.endpoint_url(endpoint_url);
    }

    if let CredentialSource::Static {
        access_key_id,
        secret_access_key,
        session_token,
    } = credentials
    {
        loader = loader.credentials_provider(Credentials::new(
            access_key_id.clone(),
            secret_access_key.expose_secret(),
            session_token.as_ref().map(|t| t.expose_secret().to_string()),
            None,
            CREDENTIALS_PROVIDER_NAME,
        ));
    }

    loader.load().await
}

/// IAM and STS handles built from one SDK configuration
pub struct AwsServices {
    pub aliases: IamAliasApi,
    pub identity: StsCallerIdentity,
}

impl AwsServices {
    /// Load the SDK configuration and create both clients
    pub async fn connect(config: &AwsConfig, credentials: &CredentialSource) -> Self {
        let sdk_config = load_sdk_config(config, credentials).await;
        Self::from_sdk_config(&sdk_config)
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Self {
        Self {
            aliases: IamAliasApi::new(aws_sdk_iam::Client::new(sdk_config)),
            identity: StsCallerIdentity::new(aws_sdk_sts::Client::new(sdk_config)),
        }
    }
}

/// Account alias management through `aws_sdk_iam`
#[derive(Clone, Debug)]
pub struct IamAliasApi {
    client: aws_sdk_iam::Client,
}

impl IamAliasApi {
    pub fn new(client: aws_sdk_iam::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AliasApi for IamAliasApi {
    async fn create_account_alias(&self, alias: &AliasName) -> Result<(), RemoteError> {
        debug!("{CREATE_OPERATION}: {alias}");
        self.client
            .create_account_alias()
            .account_alias(alias.as_str())
            .send()
            .await
            .map(|_| ())
            .map_err(|e| classify_create_error(e.into_service_error(), alias))
    }

    async fn delete_account_alias(&self, alias: &AliasName) -> Result<(), RemoteError> {
        debug!("{DELETE_OPERATION}: {alias}");
        self.client
            .delete_account_alias()
            .account_alias(alias.as_str())
            .send()
            .await
            .map(|_| ())
            .map_err(|e| classify_delete_error(e.into_service_error(), alias))
    }
}

fn classify_create_error(err: CreateAccountAliasError, alias: &AliasName) -> RemoteError {
    if err.is_entity_already_exists_exception() {
        return RemoteError::entity_already_exists(alias.as_str());
    }

    RemoteError::unexpected(
        CREATE_OPERATION,
        err.code(),
        DisplayErrorContext(&err).to_string(),
    )
}

fn classify_delete_error(err: DeleteAccountAliasError, alias: &AliasName) -> RemoteError {
    if err.is_no_such_entity_exception() {
        return RemoteError::no_such_entity(alias.as_str());
    }

    RemoteError::unexpected(
        DELETE_OPERATION,
        err.code(),
        DisplayErrorContext(&err).to_string(),
    )
}

/// Caller identity lookup through `aws_sdk_sts`
#[derive(Clone, Debug)]
pub struct StsCallerIdentity {
    client: aws_sdk_sts::Client,
}

impl StsCallerIdentity {
    pub fn new(client: aws_sdk_sts::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CallerIdentity for StsCallerIdentity {
    async fn account_id(&self) -> Result<AccountIdentifier, RemoteError> {
        let out = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| RemoteError::identity_lookup(DisplayErrorContext(&e).to_string()))?;

        out.account()
            .map(AccountIdentifier::new)
            .ok_or(RemoteError::MissingAccount)
    }
}
