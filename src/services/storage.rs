/// S3 storage for chat attachments
///
/// Thin wrapper over the AWS SDK: client construction from config, a single
/// put-object call, and the key/URL scheme for uploaded files.
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};

use crate::config::S3Config;
use crate::error::AppError;

/// Initialize the S3 client from config.
///
/// Static credentials and a custom endpoint (MinIO and friends) are applied
/// when configured; otherwise the default AWS credential chain is used.
pub async fn get_s3_client(config: &S3Config) -> Client {
    use aws_sdk_s3::config::Region;

    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new(config.region.clone()));

    if let (Some(access_key_id), Some(secret_access_key)) =
        (&config.access_key_id, &config.secret_access_key)
    {
        use aws_sdk_s3::config::Credentials;

        let credentials =
            Credentials::new(access_key_id, secret_access_key, None, None, "chat_service_s3");
        builder = builder.credentials_provider(credentials);
    }

    if let Some(endpoint) = &config.endpoint {
        builder = builder.endpoint_url(endpoint);
    }

    let aws_config = builder.load().await;
    Client::new(&aws_config)
}

/// Storage key for an uploaded attachment.
///
/// The UTC second-resolution prefix keeps same-named files from distinct
/// uploads apart; two same-named uploads within one second share a key and
/// the later write wins.
pub fn object_key(now: DateTime<Utc>, file_name: &str) -> String {
    format!("chat/{}_{}", now.format("%Y%m%d_%H%M%S"), file_name)
}

/// Public URL for a stored object. Reachability is not verified.
pub fn object_url(config: &S3Config, key: &str) -> String {
    format!("{}/{}", config.public_base_url.trim_end_matches('/'), key)
}

pub async fn put_object(
    client: &Client,
    config: &S3Config,
    key: &str,
    bytes: Vec<u8>,
    content_type: &str,
) -> Result<(), AppError> {
    client
        .put_object()
        .bucket(&config.bucket)
        .key(key)
        .body(ByteStream::from(bytes))
        .content_type(content_type)
        .send()
        .await
        .map_err(|e| AppError::Storage(format!("s3 put failed: {e}")))?;

    tracing::debug!(%key, "stored attachment");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn s3_config(public_base_url: &str) -> S3Config {
        S3Config {
            bucket: "files".into(),
            region: "us-east-1".into(),
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
            public_base_url: public_base_url.into(),
        }
    }

    #[test]
    fn object_key_is_timestamp_prefixed() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 41).unwrap();
        assert_eq!(object_key(now, "photo.png"), "chat/20240307_090541_photo.png");
    }

    #[test]
    fn same_second_same_name_collides() {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 41).unwrap();
        assert_eq!(object_key(now, "a.bin"), object_key(now, "a.bin"));
    }

    #[test]
    fn object_url_joins_base_and_key() {
        let cfg = s3_config("https://cdn.example.com/files/");
        assert_eq!(
            object_url(&cfg, "chat/20240307_090541_photo.png"),
            "https://cdn.example.com/files/chat/20240307_090541_photo.png"
        );
    }
}
