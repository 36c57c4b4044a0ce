/// S3オブジェクト書き込み
use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::primitives::ByteStream;
use tracing::{info, warn};

use super::ServiceError;

const SERVICE_NAME: &str = "s3";

/// オブジェクトストア書き込みトレイト
#[async_trait]
pub trait ObjectStoreOps: Send + Sync {
    /// オブジェクトを1件書き込む
    ///
    /// # 引数
    /// * `bucket` - バケット名
    /// * `key` - オブジェクトキー
    /// * `body` - オブジェクト本体
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), ServiceError>;
}

/// ObjectStoreOpsのS3実装
#[derive(Debug, Clone)]
pub struct S3ObjectStoreOps {
    client: S3Client,
}

impl S3ObjectStoreOps {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// 共有のAWS設定からクライアントを作成
    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(S3Client::new(config))
    }
}

#[async_trait]
impl ObjectStoreOps for S3ObjectStoreOps {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), ServiceError> {
        let size = body.len();

        let result = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await;

        match result {
            Ok(_) => {
                info!(bucket = %bucket, key = %key, size = size, "S3 PutObject成功");
                Ok(())
            }
            Err(err) => {
                let error = ServiceError::from_sdk_error(SERVICE_NAME, &err);

                warn!(
                    bucket = %bucket,
                    key = %key,
                    transient = error.is_transient(),
                    error = %error,
                    "S3 PutObjectエラー"
                );

                Err(error)
            }
        }
    }
}
