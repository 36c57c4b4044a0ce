//! SNS操作モジュール
//!
//! 通知ハンドラーとキュー処理ハンドラーが使うメッセージ発行機能を提供する。

use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use tracing::{info, warn};

use super::ServiceError;

const SERVICE_NAME: &str = "sns";

/// SNS操作トレイト（テスト用の抽象化）
#[async_trait]
pub trait SnsOps: Send + Sync {
    /// メッセージをSNSトピックに発行する
    ///
    /// # 引数
    /// * `topic_arn` - SNSトピックARN
    /// * `message` - 発行するメッセージ
    ///
    /// # 戻り値
    /// * `Ok(String)` - SNSが採番したメッセージID
    /// * `Err(ServiceError)` - 分類済みのエラー
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<String, ServiceError>;
}

/// 実際のAWS SNS SDKを使用したSNS操作実装
#[derive(Debug, Clone)]
pub struct AwsSnsOps {
    client: SnsClient,
}

impl AwsSnsOps {
    /// 新しいAwsSnsOpsを作成
    pub fn new(client: SnsClient) -> Self {
        Self { client }
    }

    /// 共有のAWS設定からクライアントを作成
    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(SnsClient::new(config))
    }
}

#[async_trait]
impl SnsOps for AwsSnsOps {
    async fn publish(&self, topic_arn: &str, message: &str) -> Result<String, ServiceError> {
        info!(
            topic_arn = %topic_arn,
            message_length = message.len(),
            "SNSメッセージ発行開始"
        );

        let result = self
            .client
            .publish()
            .topic_arn(topic_arn)
            .message(message)
            .send()
            .await;

        match result {
            Ok(response) => {
                let message_id = response.message_id().unwrap_or("unknown").to_string();

                info!(
                    topic_arn = %topic_arn,
                    message_id = %message_id,
                    "SNS Publish成功"
                );

                Ok(message_id)
            }
            Err(err) => {
                let error = ServiceError::from_sdk_error(SERVICE_NAME, &err);

                warn!(
                    topic_arn = %topic_arn,
                    transient = error.is_transient(),
                    error = %error,
                    "SNS Publishエラー"
                );

                Err(error)
            }
        }
    }
}
