//! SSM Parameter Store implementation
//!
//! Wraps the async AWS SDK client behind the synchronous ParameterStore
//! trait by blocking on a private current-thread runtime.

use crate::domain::{Page, PageRequest, PaginationToken, Parameter};
use crate::error::StoreError;
use crate::store::traits::ParameterStore;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::operation::get_parameters_by_path::GetParametersByPathOutput;
use aws_sdk_ssm::Client;
use tokio::runtime::Runtime;

/// Connection settings for the SSM client
///
/// Unset fields fall back to the SDK's default provider chains
/// (`AWS_REGION`, `AWS_PROFILE`, instance metadata, ...).
#[derive(Debug, Clone, Default)]
pub struct SsmStoreConfig {
    /// Region override
    pub region: Option<String>,
    /// Custom endpoint (e.g., LocalStack)
    pub endpoint_url: Option<String>,
}

/// Parameter store backed by AWS Systems Manager
pub struct SsmStore {
    client: Client,
    runtime: Runtime,
}

impl SsmStore {
    /// Load AWS configuration and create a new store
    pub fn new(config: &SsmStoreConfig) -> Result<Self, StoreError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::InitializationFailed(e.to_string()))?;

        let shared_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &config.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(endpoint) = &config.endpoint_url {
                loader = loader.endpoint_url(endpoint);
            }
            loader.load().await
        });

        if shared_config.region().is_none() {
            log::warn!("No AWS region configured; requests will likely fail");
        }

        Ok(Self {
            client: Client::new(&shared_config),
            runtime,
        })
    }
}

impl ParameterStore for SsmStore {
    fn get_parameters_by_path(&self, request: &PageRequest) -> Result<Page, StoreError> {
        log::debug!(
            "GetParametersByPath path={} recursive={} token={}",
            request.path,
            request.recursive,
            request.next_token.is_some()
        );

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters_by_path()
                    .path(&request.path)
                    .recursive(request.recursive)
                    .with_decryption(request.with_decryption)
                    .set_next_token(
                        request
                            .next_token
                            .as_ref()
                            .map(|t| t.as_str().to_string()),
                    )
                    .send(),
            )
            .map_err(|e| StoreError::RequestFailed {
                path: request.path.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        page_from_output(&output)
    }
}

/// Convert an SDK response into a domain page
fn page_from_output(output: &GetParametersByPathOutput) -> Result<Page, StoreError> {
    let parameters = output
        .parameters()
        .iter()
        .map(|p| {
            let name = p.name().ok_or(StoreError::MissingField("name"))?;
            let value = p.value().ok_or(StoreError::MissingField("value"))?;
            Ok(Parameter::new(name, value))
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    let next_token = output.next_token().and_then(PaginationToken::new);

    Ok(Page::new(parameters, next_token))
}
