/// キュー処理ハンドラー
///
/// SQSから配信されたバッチのレコードを1件ずつログに出力し、
/// イベント全体を埋め込んだメッセージをSNSトピックへ1回だけ発行する。
/// 発行回数はレコード数に依存しない（0件でも1回）。
use aws_lambda_events::event::sqs::SqsMessage;
use serde_json::Value;
use tracing::info;

use super::HandlerError;
use crate::domain::ResponseEnvelope;
use crate::infrastructure::SnsOps;

/// 処理成功時のレスポンスメッセージ
pub const QUEUE_RESPONSE_MESSAGE: &str = "lambda process sqs message";

/// キュー処理ハンドラー
pub struct QueueDrainHandler<S>
where
    S: SnsOps,
{
    sns_ops: S,
    topic_arn: String,
}

impl<S> QueueDrainHandler<S>
where
    S: SnsOps,
{
    /// 新しいQueueDrainHandlerを作成
    pub fn new(sns_ops: S, topic_arn: impl Into<String>) -> Self {
        Self {
            sns_ops,
            topic_arn: topic_arn.into(),
        }
    }

    /// イベントからレコード列を取り出す
    ///
    /// `Records`が存在しない（またはnull）場合は空とみなす。
    /// 配列でない値はそのまま1件のレコードとして扱う。
    pub fn records(event: &Value) -> &[Value] {
        match event.get("Records") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(records)) => records.as_slice(),
            Some(other) => std::slice::from_ref(other),
        }
    }

    /// 発行するメッセージを生成（イベント全体をJSONで埋め込む）
    pub fn build_message(event: &Value) -> String {
        format!("lambda process message from queue {}", event)
    }

    /// イベントを処理する
    pub async fn handle(&self, event: &Value) -> Result<ResponseEnvelope, HandlerError> {
        let records = Self::records(event);
        info!(record_count = records.len(), "キューイベントを受信");

        for (index, record) in records.iter().enumerate() {
            log_record(index, record);
        }

        let message = Self::build_message(event);
        let message_id = self.sns_ops.publish(&self.topic_arn, &message).await?;

        info!(
            topic_arn = %self.topic_arn,
            message_id = %message_id,
            record_count = records.len(),
            "キューイベントを通知"
        );

        Ok(ResponseEnvelope::ok(QUEUE_RESPONSE_MESSAGE))
    }
}

/// レコードを1件ログに出力する
///
/// SQSメッセージ形式として解釈できればメッセージIDと本文長を、
/// できなければレコードそのものを出力する。
fn log_record(index: usize, record: &Value) {
    match serde_json::from_value::<SqsMessage>(record.clone()) {
        Ok(message) => {
            info!(
                index = index,
                message_id = message.message_id.as_deref().unwrap_or("(none)"),
                body_length = message.body.as_deref().map(str::len).unwrap_or(0),
                record = %record,
                "SQSレコード"
            );
        }
        Err(_) => {
            info!(index = index, record = %record, "レコード");
        }
    }
}
