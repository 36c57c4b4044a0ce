/// DynamoDBテーブルへのアイテム書き込み
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{info, warn};

use super::ServiceError;
use crate::domain::TableItem;

const SERVICE_NAME: &str = "dynamodb";

/// テーブル書き込みトレイト
///
/// 実際のDynamoDBとテスト用モックを差し替えられるように抽象化する。
#[async_trait]
pub trait TableOps: Send + Sync {
    /// アイテムを1件書き込む（同じ`id`が存在すれば上書き）
    async fn put_item(&self, table_name: &str, item: &TableItem) -> Result<(), ServiceError>;
}

/// TableOpsのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoTableOps {
    client: DynamoDbClient,
}

impl DynamoTableOps {
    pub fn new(client: DynamoDbClient) -> Self {
        Self { client }
    }

    /// 共有のAWS設定からクライアントを作成
    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(DynamoDbClient::new(config))
    }
}

#[async_trait]
impl TableOps for DynamoTableOps {
    async fn put_item(&self, table_name: &str, item: &TableItem) -> Result<(), ServiceError> {
        let result = self
            .client
            .put_item()
            .table_name(table_name)
            .item("id", AttributeValue::S(item.id.clone()))
            .item("message", AttributeValue::S(item.message.clone()))
            .send()
            .await;

        match result {
            Ok(_) => {
                info!(table_name = %table_name, id = %item.id, "DynamoDB PutItem成功");
                Ok(())
            }
            Err(err) => {
                let error = ServiceError::from_sdk_error(SERVICE_NAME, &err);

                warn!(
                    table_name = %table_name,
                    id = %item.id,
                    transient = error.is_transient(),
                    error = %error,
                    "DynamoDB PutItemエラー"
                );

                Err(error)
            }
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// ユニットテスト用のモックTableOps
    ///
    /// `call_count`は失敗も含めた呼び出し回数、`writes`は成功した書き込みのみ。
    #[derive(Debug, Clone, Default)]
    pub struct MockTableOps {
        /// 書き込まれたアイテム: (table_name, item)、書き込み順
        writes: Arc<Mutex<Vec<(String, TableItem)>>>,
        calls: Arc<AtomicUsize>,
        /// 次の操作で返すエラー
        next_error: Arc<Mutex<Option<ServiceError>>>,
    }

    impl MockTableOps {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_next_error(&self, error: ServiceError) {
            *self.next_error.lock().unwrap() = Some(error);
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn writes(&self) -> Vec<(String, TableItem)> {
            self.writes.lock().unwrap().clone()
        }

        /// テーブルの最終状態（同じidは後勝ち）
        pub fn table(&self, table_name: &str) -> HashMap<String, TableItem> {
            self.writes
                .lock()
                .unwrap()
                .iter()
                .filter(|(table, _)| table == table_name)
                .map(|(_, item)| (item.id.clone(), item.clone()))
                .collect()
        }
    }

    #[async_trait]
    impl TableOps for MockTableOps {
        async fn put_item(&self, table_name: &str, item: &TableItem) -> Result<(), ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(err) = self.next_error.lock().unwrap().take() {
                return Err(err);
            }

            self.writes
                .lock()
                .unwrap()
                .push((table_name.to_string(), item.clone()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_mock_put_item_overwrites_same_id() {
        let mock = MockTableOps::new();

        mock.put_item("events", &TableItem::from_timestamp(10))
            .await
            .unwrap();
        mock.put_item("events", &TableItem::from_timestamp(10))
            .await
            .unwrap();
        mock.put_item("events", &TableItem::from_timestamp(11))
            .await
            .unwrap();

        assert_eq!(mock.writes().len(), 3);
        assert_eq!(mock.table("events").len(), 2);
        assert!(mock.table("other").is_empty());
    }

    #[tokio::test]
    async fn test_mock_put_item_error() {
        let mock = MockTableOps::new();
        mock.set_next_error(ServiceError::classify(
            SERVICE_NAME,
            Some("ResourceNotFoundException"),
            false,
            "table not found",
        ));

        let result = mock.put_item("events", &TableItem::from_timestamp(1)).await;

        assert!(matches!(result, Err(ServiceError::Permanent { .. })));
        assert_eq!(mock.call_count(), 1);
        assert!(mock.writes().is_empty());
    }
}
