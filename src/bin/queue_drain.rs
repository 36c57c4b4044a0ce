/// キュー処理Lambda関数
///
/// SQSキューからトリガーされ、受信したバッチ全体をSNSトピックへ1回だけ通知する。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use serverless_demo::application::QueueDrainHandler;
use serverless_demo::domain::ResponseEnvelope;
use serverless_demo::infrastructure::{AwsSnsOps, TopicConfig, init_logging, invocation_span};
use tracing::{Instrument, error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let config = TopicConfig::from_env()
        .inspect_err(|err| error!(error = %err, "通知設定読み込み失敗"))?;

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let queue_drain =
        QueueDrainHandler::new(AwsSnsOps::from_sdk_config(&aws_config), config.topic_arn());

    info!(topic_arn = config.topic_arn(), "キュー処理 Lambda関数を初期化");

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handler(&queue_drain, event)
    }))
    .await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// エラー時はランタイムへ返却し、SQSの再配信に委ねる。
async fn handler(
    queue_drain: &QueueDrainHandler<AwsSnsOps>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();

    async {
        queue_drain.handle(&payload).await.map_err(|err| {
            error!(error = %err, retryable = err.is_retryable(), "キュー処理失敗");
            Error::from(err)
        })
    }
    .instrument(invocation_span("queue_drain", &context.request_id))
    .await
}
