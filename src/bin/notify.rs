/// 通知Lambda関数
///
/// 呼び出しごとに現在時刻を埋め込んだメッセージをSNSトピックへ発行する。
/// 元の構成ではDynamoDBテーブルのストリームからトリガーされるが、
/// イベントの内容は参照しないため直接呼び出しでも動作する。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use serverless_demo::application::NotifyHandler;
use serverless_demo::domain::ResponseEnvelope;
use serverless_demo::infrastructure::{AwsSnsOps, TopicConfig, init_logging, invocation_span};
use tracing::{Instrument, error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 設定は起動時に一度だけ解決する
    let config = TopicConfig::from_env()
        .inspect_err(|err| error!(error = %err, "通知設定読み込み失敗"))?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let notify = NotifyHandler::new(AwsSnsOps::from_sdk_config(&aws_config), config.topic_arn());

    info!(topic_arn = config.topic_arn(), "通知 Lambda関数を初期化");

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| handler(&notify, event))).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// 発行に失敗した場合はエラーをランタイムへ返し、呼び出し失敗として扱わせる。
async fn handler(
    notify: &NotifyHandler<AwsSnsOps>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();

    async {
        notify.handle(&payload).await.map_err(|err| {
            error!(error = %err, retryable = err.is_retryable(), "通知失敗");
            Error::from(err)
        })
    }
    .instrument(invocation_span("notify", &context.request_id))
    .await
}
