/// 外部サービス呼び出しのエラー分類
///
/// AWS SDKのエラーを「再試行で回復しうる」か「しない」かの2種類に分類する。
/// 分類結果はログに記録され、Lambdaランタイムへそのまま返却される。
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// 再試行で回復しうるとみなすサービスエラーコード
const TRANSIENT_ERROR_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "TooManyRequestsException",
    "RequestLimitExceeded",
    "RequestThrottled",
    "RequestThrottledException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "SlowDown",
    "InternalError",
    "InternalFailure",
    "InternalServerError",
    "ServiceUnavailable",
    "KMSThrottlingException",
];

/// 外部サービス呼び出しのエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// 一時的なエラー（スロットリング、タイムアウト、通信失敗）
    #[error("{service} 一時エラー: {message}")]
    Transient {
        service: &'static str,
        message: String,
    },
    /// 恒久的なエラー（権限不足、存在しないリソース、不正なリクエスト）
    #[error("{service} 恒久エラー: {message}")]
    Permanent {
        service: &'static str,
        message: String,
    },
}

impl ServiceError {
    /// SDKエラーの情報から分類する
    ///
    /// # 引数
    /// * `service` - サービス名（ログ用）
    /// * `code` - サービスが返したエラーコード（サービスエラーの場合のみ）
    /// * `transport_failure` - タイムアウト、送信失敗、応答の解釈失敗のいずれか
    /// * `message` - エラー詳細
    pub fn classify(
        service: &'static str,
        code: Option<&str>,
        transport_failure: bool,
        message: impl Into<String>,
    ) -> Self {
        let message = message.into();
        let transient_code = code.is_some_and(|c| TRANSIENT_ERROR_CODES.contains(&c));

        if transport_failure || transient_code {
            ServiceError::Transient { service, message }
        } else {
            ServiceError::Permanent { service, message }
        }
    }

    /// SDK呼び出しのエラーから分類する
    ///
    /// `SdkError`は各SDKクレート共通の型の再エクスポートなので、SNS以外のクライアントにも使える。
    /// タイムアウト、送信失敗に加えて応答の解釈失敗（途中で切れた応答等）も一時エラーとする。
    /// SDK自身のリトライ分類器と同じ扱い。
    pub fn from_sdk_error<E, R>(service: &'static str, err: &SdkError<E, R>) -> Self
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        let transport_failure = matches!(
            err,
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_)
        );
        let code = err.as_service_error().and_then(|e| e.code());

        Self::classify(
            service,
            code,
            transport_failure,
            DisplayErrorContext(err).to_string(),
        )
    }

    /// 再試行で回復しうるか
    pub fn is_transient(&self) -> bool {
        matches!(self, ServiceError::Transient { .. })
    }

    /// エラーが発生したサービス名
    pub fn service(&self) -> &'static str {
        match self {
            ServiceError::Transient { service, .. } | ServiceError::Permanent { service, .. } => {
                service
            }
        }
    }
}
