//! S3 blob store implementation with prefix listing support.

use crate::{BlobRef, BlobStore, StoreError};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use tokio::io::AsyncReadExt;

/// Credential bundle for connecting to an S3-compatible endpoint.
///
/// Passed as plain parameters; region and endpoint fall back to the SDK
/// defaults when unset.
#[derive(Debug, Clone, Default)]
pub struct StoreCredentials {
    /// Access key id
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Region name (default: us-east-1)
    pub region: Option<String>,
    /// Custom endpoint URL, for S3-compatible stores
    pub endpoint_url: Option<String>,
}

/// Blob store backed by an S3 bucket.
///
/// Creating an S3 client is relatively expensive, so this struct holds one
/// client and reuses it across operations.
pub struct S3Store {
    client: aws_sdk_s3::Client,
}

impl S3Store {
    /// Connect using an explicit credential bundle.
    ///
    /// Endpoint resolution and credential validation happen lazily, on the
    /// first request.
    pub async fn connect(credentials: &StoreCredentials) -> Result<Self, StoreError> {
        let provider = aws_sdk_s3::config::Credentials::new(
            credentials.access_key_id.clone(),
            credentials.secret_access_key.clone(),
            None,
            None,
            "blobtab",
        );

        let region = aws_config::Region::new(
            credentials
                .region
                .clone()
                .unwrap_or_else(|| "us-east-1".to_string()),
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(provider)
            .region(region);

        if let Some(endpoint) = &credentials.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Ok(Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
        })
    }

    /// Connect from the ambient AWS config (environment, profile, IMDS).
    pub async fn from_env() -> Result<Self, StoreError> {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        Ok(Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
        })
    }
}

#[async_trait]
impl BlobStore for S3Store {
    async fn list_prefix(
        &self,
        container: &str,
        prefix: &str,
    ) -> Result<Vec<BlobRef>, StoreError> {
        let mut results = Vec::new();
        let mut continuation_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .list_objects_v2()
                .bucket(container)
                .prefix(prefix);

            if let Some(token) = &continuation_token {
                request = request.continuation_token(token);
            }

            let response = request.send().await.map_err(|err| {
                if err
                    .as_service_error()
                    .map(|e| e.is_no_such_bucket())
                    .unwrap_or(false)
                {
                    StoreError::NotFound(format!("s3://{container}"))
                } else {
                    classify(err, &format!("failed to list s3://{container}/{prefix}"))
                }
            })?;

            if let Some(contents) = response.contents {
                for object in contents {
                    if let Some(key) = object.key {
                        // Skip zero-byte "directory" markers
                        if key.ends_with('/') {
                            continue;
                        }

                        results.push(BlobRef {
                            name: key,
                            size: object.size,
                        });
                    }
                }
            }

            // Handle pagination
            if response.is_truncated == Some(true) {
                continuation_token = response.next_continuation_token;
            } else {
                break;
            }
        }

        tracing::debug!(
            "Listed {} blobs in s3://{}/{}",
            results.len(),
            container,
            prefix
        );

        Ok(results)
    }

    async fn fetch(&self, container: &str, name: &str) -> Result<Vec<u8>, StoreError> {
        let response = self
            .client
            .get_object()
            .bucket(container)
            .key(name)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .map(|e| e.is_no_such_key())
                    .unwrap_or(false)
                {
                    StoreError::NotFound(format!("s3://{container}/{name}"))
                } else {
                    classify(err, &format!("failed to fetch s3://{container}/{name}"))
                }
            })?;

        let mut bytes = Vec::new();
        let mut stream = response.body.into_async_read();
        stream.read_to_end(&mut bytes).await?;

        Ok(bytes)
    }
}

/// Split an SDK failure into connection-level and request-level errors.
///
/// Dispatch and timeout failures never reached the service; unauthorized
/// responses mean the credentials were rejected.
fn classify<E>(err: SdkError<E>, what: &str) -> StoreError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let connect = match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => true,
        SdkError::ServiceError(context) => {
            let status = context.raw().status().as_u16();
            status == 401 || status == 403
        }
        _ => false,
    };

    let message = format!("{what}: {}", DisplayErrorContext(err));
    if connect {
        StoreError::Connect(message)
    } else {
        StoreError::Request(message)
    }
}
