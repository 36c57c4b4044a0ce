/// ハンドラー共通のエラー型
///
/// ハンドラーはローカルで回復を試みない。エラーはLambdaランタイムへそのまま返却され、
/// 再試行等の扱いはトリガー元のプラットフォームに委ねる。
use thiserror::Error;

use crate::infrastructure::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// 外部サービス呼び出しの失敗
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl HandlerError {
    /// 再試行で回復しうるか
    pub fn is_retryable(&self) -> bool {
        match self {
            HandlerError::Service(err) => err.is_transient(),
        }
    }
}
