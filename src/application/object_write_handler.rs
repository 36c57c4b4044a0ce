/// オブジェクト書き込みハンドラー
///
/// 呼び出しごとに、タイムスタンプを埋め込んだテキストをS3へ1件書き込む。
/// キーは`<プレフィックス>hello-message-<タイムスタンプ>`。
use serde_json::Value;
use tracing::info;

use super::HandlerError;
use crate::domain::{Clock, ResponseEnvelope, SystemClock};
use crate::infrastructure::{BucketConfig, ObjectStoreOps};

/// 書き込み成功時のレスポンスメッセージ
pub const OBJECT_WRITE_RESPONSE_MESSAGE: &str = "Hello lambda";

/// オブジェクト書き込みハンドラー
pub struct ObjectWriteHandler<O, C = SystemClock>
where
    O: ObjectStoreOps,
    C: Clock,
{
    object_store: O,
    bucket: BucketConfig,
    clock: C,
}

impl<O> ObjectWriteHandler<O, SystemClock>
where
    O: ObjectStoreOps,
{
    pub fn new(object_store: O, bucket: BucketConfig) -> Self {
        Self::with_clock(object_store, bucket, SystemClock)
    }
}

impl<O, C> ObjectWriteHandler<O, C>
where
    O: ObjectStoreOps,
    C: Clock,
{
    pub fn with_clock(object_store: O, bucket: BucketConfig, clock: C) -> Self {
        Self {
            object_store,
            bucket,
            clock,
        }
    }

    /// オブジェクトキーを生成
    pub fn object_key(key_prefix: &str, timestamp_millis: u64) -> String {
        format!("{}hello-message-{}", key_prefix, timestamp_millis)
    }

    /// オブジェクト本体（UTF-8）を生成
    pub fn object_body(timestamp_millis: u64) -> Vec<u8> {
        format!("lambda write message to s3 {}", timestamp_millis).into_bytes()
    }

    /// イベントを処理する（イベントの内容は参照しない）
    pub async fn handle(&self, _event: &Value) -> Result<ResponseEnvelope, HandlerError> {
        let timestamp = self.clock.now_millis();
        let key = Self::object_key(self.bucket.key_prefix(), timestamp);

        self.object_store
            .put_object(self.bucket.bucket_name(), &key, Self::object_body(timestamp))
            .await?;

        info!(bucket = %self.bucket.bucket_name(), key = %key, "オブジェクトを書き込み");

        Ok(ResponseEnvelope::ok(OBJECT_WRITE_RESPONSE_MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::tests::FixedClock;
    use crate::infrastructure::ServiceError;
    use crate::infrastructure::config::DEFAULT_KEY_PREFIX;
    use crate::infrastructure::object_store_ops::tests::MockObjectStoreOps;
    use serde_json::json;

    fn bucket() -> BucketConfig {
        BucketConfig::new("haimtran-workspace", DEFAULT_KEY_PREFIX)
    }

    #[tokio::test]
    async fn test_handle_writes_object_under_prefix() {
        let store = MockObjectStoreOps::new();
        let handler = ObjectWriteHandler::with_clock(store.clone(), bucket(), FixedClock(1_700_000_000_999));

        let envelope = handler.handle(&json!({})).await.unwrap();

        let objects = store.objects();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].bucket, "haimtran-workspace");
        assert_eq!(objects[0].key, "lambda-write-to-s3/hello-message-1700000000999");
        assert_eq!(
            String::from_utf8(objects[0].body.clone()).unwrap(),
            "lambda write message to s3 1700000000999"
        );
        assert_eq!(envelope.message(), Some("Hello lambda".to_string()));
    }

    #[tokio::test]
    async fn test_key_prefix_and_suffix_match_body_timestamp() {
        let store = MockObjectStoreOps::new();
        let handler = ObjectWriteHandler::new(store.clone(), BucketConfig::new("b", "uploads"));

        handler.handle(&json!({})).await.unwrap();

        let objects = store.objects();
        let object = &objects[0];
        let body = String::from_utf8(object.body.clone()).unwrap();
        let timestamp = body.rsplit(' ').next().unwrap();

        assert!(object.key.starts_with("uploads/"));
        assert!(object.key.ends_with(timestamp));
        assert!(timestamp.parse::<u64>().is_ok());
    }

    #[tokio::test]
    async fn test_put_failure_propagates() {
        let store = MockObjectStoreOps::new();
        store.set_next_error(ServiceError::classify("s3", Some("SlowDown"), false, "slow down"));
        let handler = ObjectWriteHandler::with_clock(store.clone(), bucket(), FixedClock(5));

        let err = handler.handle(&json!({})).await.unwrap_err();

        assert!(matches!(err, HandlerError::Service(ServiceError::Transient { .. })));
        assert_eq!(store.call_count(), 1);
        assert!(store.objects().is_empty());
    }

    #[test]
    fn test_object_key_without_prefix() {
        assert_eq!(
            ObjectWriteHandler::<MockObjectStoreOps, FixedClock>::object_key("", 12),
            "hello-message-12"
        );
    }
}
