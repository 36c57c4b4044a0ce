/// 通知ハンドラー
///
/// 呼び出しごとに、現在時刻を埋め込んだメッセージを設定済みのSNSトピックへ1回発行する。
use serde_json::Value;
use tracing::info;

use super::HandlerError;
use crate::domain::{Clock, ResponseEnvelope, SystemClock};
use crate::infrastructure::SnsOps;

/// 発行成功時のレスポンスメッセージ
pub const NOTIFY_RESPONSE_MESSAGE: &str = "Hello lambda";

/// 通知ハンドラー
pub struct NotifyHandler<S, C = SystemClock>
where
    S: SnsOps,
    C: Clock,
{
    sns_ops: S,
    topic_arn: String,
    clock: C,
}

impl<S> NotifyHandler<S, SystemClock>
where
    S: SnsOps,
{
    /// 新しいNotifyHandlerを作成
    pub fn new(sns_ops: S, topic_arn: impl Into<String>) -> Self {
        Self::with_clock(sns_ops, topic_arn, SystemClock)
    }
}

impl<S, C> NotifyHandler<S, C>
where
    S: SnsOps,
    C: Clock,
{
    /// 時計を指定してNotifyHandlerを作成
    pub fn with_clock(sns_ops: S, topic_arn: impl Into<String>, clock: C) -> Self {
        Self {
            sns_ops,
            topic_arn: topic_arn.into(),
            clock,
        }
    }

    /// 発行するメッセージを生成
    pub fn build_message(timestamp_millis: u64) -> String {
        format!("lambda send a message to sns {}", timestamp_millis)
    }

    /// イベントを処理する
    ///
    /// イベントの内容は参照しない。発行に失敗した場合はエラーをそのまま返す。
    pub async fn handle(&self, _event: &Value) -> Result<ResponseEnvelope, HandlerError> {
        let timestamp = self.clock.now_millis();
        let message = Self::build_message(timestamp);

        let message_id = self.sns_ops.publish(&self.topic_arn, &message).await?;

        info!(
            topic_arn = %self.topic_arn,
            message_id = %message_id,
            timestamp = timestamp,
            "通知メッセージを発行"
        );

        Ok(ResponseEnvelope::ok(NOTIFY_RESPONSE_MESSAGE))
    }
}
