/// オブジェクト書き込みLambda関数
///
/// 呼び出しごとにタイムスタンプを埋め込んだテキストをS3バケットへ書き込む。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use serverless_demo::application::ObjectWriteHandler;
use serverless_demo::domain::ResponseEnvelope;
use serverless_demo::infrastructure::{BucketConfig, S3ObjectStoreOps, init_logging, invocation_span};
use tracing::{Instrument, error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let config = BucketConfig::from_env()
        .inspect_err(|err| error!(error = %err, "バケット設定読み込み失敗"))?;

    info!(
        bucket = config.bucket_name(),
        key_prefix = config.key_prefix(),
        "オブジェクト書き込み Lambda関数を初期化"
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let object_write = ObjectWriteHandler::new(S3ObjectStoreOps::from_sdk_config(&aws_config), config);

    lambda_runtime::run(service_fn(|event: LambdaEvent<Value>| {
        handler(&object_write, event)
    }))
    .await?;
    Ok(())
}

async fn handler(
    object_write: &ObjectWriteHandler<S3ObjectStoreOps>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();

    async {
        object_write.handle(&payload).await.map_err(|err| {
            error!(error = %err, retryable = err.is_retryable(), "オブジェクト書き込み失敗");
            Error::from(err)
        })
    }
    .instrument(invocation_span("object_write", &context.request_id))
    .await
}
