/// テーブル書き込みハンドラー
///
/// 呼び出しごとに、タイムスタンプをキーとしたアイテムを設定済みのテーブルへ1件書き込む。
use serde_json::Value;
use tracing::info;

use super::HandlerError;
use crate::domain::{Clock, ResponseEnvelope, SystemClock, TableItem};
use crate::infrastructure::TableOps;

/// 書き込み成功時のレスポンスメッセージ
pub const TABLE_WRITE_RESPONSE_MESSAGE: &str = "Hello lambda";

/// テーブル書き込みハンドラー
pub struct TableWriteHandler<T, C = SystemClock>
where
    T: TableOps,
    C: Clock,
{
    table_ops: T,
    table_name: String,
    clock: C,
}

impl<T> TableWriteHandler<T, SystemClock>
where
    T: TableOps,
{
    pub fn new(table_ops: T, table_name: impl Into<String>) -> Self {
        Self::with_clock(table_ops, table_name, SystemClock)
    }
}

impl<T, C> TableWriteHandler<T, C>
where
    T: TableOps,
    C: Clock,
{
    pub fn with_clock(table_ops: T, table_name: impl Into<String>, clock: C) -> Self {
        Self {
            table_ops,
            table_name: table_name.into(),
            clock,
        }
    }

    /// イベントを処理する（イベントの内容は参照しない）
    pub async fn handle(&self, _event: &Value) -> Result<ResponseEnvelope, HandlerError> {
        let item = TableItem::from_timestamp(self.clock.now_millis());

        self.table_ops.put_item(&self.table_name, &item).await?;

        info!(table_name = %self.table_name, id = %item.id, "アイテムを書き込み");

        Ok(ResponseEnvelope::ok(TABLE_WRITE_RESPONSE_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::tests::{FixedClock, SteppingClock};
    use crate::infrastructure::ServiceError;
    use crate::infrastructure::table_ops::tests::MockTableOps;
    use serde_json::json;

    const TABLE: &str = "S3LambdaEventTable";

    #[tokio::test]
    async fn test_handle_writes_timestamp_item() {
        let table = MockTableOps::new();
        let handler =
            TableWriteHandler::with_clock(table.clone(), TABLE, FixedClock(1_700_000_000_555));

        let envelope = handler.handle(&json!({})).await.unwrap();

        let writes = table.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, TABLE);
        assert_eq!(writes[0].1.id, "1700000000555");
        assert_eq!(writes[0].1.message, "lambda write to ddb 1700000000555");
        assert_eq!(envelope.message(), Some("Hello lambda".to_string()));
        assert_eq!(envelope.status_code, 200);
    }

    #[tokio::test]
    async fn test_calls_one_millisecond_apart_get_distinct_ids() {
        let table = MockTableOps::new();
        let handler = TableWriteHandler::with_clock(table.clone(), TABLE, SteppingClock::new(100, 1));

        handler.handle(&json!({})).await.unwrap();
        handler.handle(&json!({})).await.unwrap();

        let ids: Vec<String> = table.writes().into_iter().map(|(_, item)| item.id).collect();
        assert_eq!(ids, vec!["100".to_string(), "101".to_string()]);
        assert_eq!(table.table(TABLE).len(), 2);
    }

    #[tokio::test]
    async fn test_same_millisecond_collides() {
        // 同一ミリ秒内の書き込みは同じキーになり後勝ちで上書きされる
        let table = MockTableOps::new();
        let handler = TableWriteHandler::with_clock(table.clone(), TABLE, FixedClock(7));

        handler.handle(&json!({})).await.unwrap();
        handler.handle(&json!({})).await.unwrap();

        assert_eq!(table.writes().len(), 2);
        assert_eq!(table.table(TABLE).len(), 1);
    }

    #[tokio::test]
    async fn test_system_clock_id_is_non_negative_integer() {
        let table = MockTableOps::new();
        let handler = TableWriteHandler::new(table.clone(), TABLE);

        handler.handle(&json!({ "Records": [] })).await.unwrap();

        let writes = table.writes();
        let id = &writes[0].1.id;
        assert!(id.parse::<u64>().is_ok());
    }

    #[tokio::test]
    async fn test_put_failure_propagates() {
        let table = MockTableOps::new();
        table.set_next_error(ServiceError::classify(
            "dynamodb",
            Some("AccessDeniedException"),
            false,
            "denied",
        ));
        let handler = TableWriteHandler::with_clock(table.clone(), TABLE, FixedClock(1));

        let err = handler.handle(&json!({})).await.unwrap_err();

        assert!(!err.is_retryable());
        assert_eq!(table.call_count(), 1);
        assert!(table.writes().is_empty());
    }
}
