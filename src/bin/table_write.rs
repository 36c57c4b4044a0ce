/// テーブル書き込みLambda関数
///
/// 呼び出しごとにタイムスタンプをキーとしたアイテムをDynamoDBテーブルへ書き込む。
/// 元の構成ではS3の`notify-lambda/`配下へのObjectCreatedイベントでトリガーされる。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use serverless_demo::application::TableWriteHandler;
use serverless_demo::domain::ResponseEnvelope;
use serverless_demo::infrastructure::{DynamoTableOps, TableConfig, init_logging, invocation_span};
use tracing::{Instrument, error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let config = TableConfig::from_env()
        .inspect_err(|err| error!(error = %err, "テーブル設定読み込み失敗"))?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let table_write =
        TableWriteHandler::new(DynamoTableOps::from_sdk_config(&aws_config), config.table_name());

    info!(table_name = config.table_name(), "テーブル書き込み Lambda関数を初期化");

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handler(&table_write, event)
    }))
    .await?;
    Ok(())
}

async fn handler(
    table_write: &TableWriteHandler<DynamoTableOps>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();

    async {
        table_write.handle(&payload).await.map_err(|err| {
            error!(error = %err, retryable = err.is_retryable(), "テーブル書き込み失敗");
            Error::from(err)
        })
    }
    .instrument(invocation_span("table_write", &context.request_id))
    .await
}
