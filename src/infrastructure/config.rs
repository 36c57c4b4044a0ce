/// リソース識別子の設定
///
/// 各ハンドラーが操作するSNSトピック、DynamoDBテーブル、S3バケットを
/// 環境変数から読み込む。プロセス起動時に一度だけ解決する。
use std::env::VarError;

use thiserror::Error;

/// SNSトピックARNの環境変数名
pub const TOPIC_ARN_ENV: &str = "TOPIC_ARN";
/// DynamoDBテーブル名の環境変数名
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";
/// S3バケット名の環境変数名
pub const BUCKET_NAME_ENV: &str = "BUCKET_NAME";
/// S3キープレフィックスの環境変数名
pub const KEY_PREFIX_ENV: &str = "KEY_PREFIX";

/// KEY_PREFIX未設定時のデフォルト
pub const DEFAULT_KEY_PREFIX: &str = "lambda-write-to-s3/";

/// 設定読み込みのエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("環境変数が設定されていません: {0}")]
    MissingEnvVar(String),
    #[error("環境変数が空です: {0}")]
    EmptyEnvVar(String),
    #[error("環境変数がUTF-8ではありません: {0}")]
    InvalidUnicode(String),
}

/// 環境変数を読み込む（未設定は`None`）
fn read_env(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidUnicode(name.to_string())),
    }
}

/// 必須の環境変数を読み込む（前後の空白は除去）
fn require_env(name: &str) -> Result<String, ConfigError> {
    let value = read_env(name)?.ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;
    let value = value.trim();

    if value.is_empty() {
        return Err(ConfigError::EmptyEnvVar(name.to_string()));
    }

    Ok(value.to_string())
}

/// 通知先SNSトピックの設定
///
/// 環境変数:
/// - TOPIC_ARN: 発行先SNSトピックARN
#[derive(Debug, Clone)]
pub struct TopicConfig {
    topic_arn: String,
}

impl TopicConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            topic_arn: require_env(TOPIC_ARN_ENV)?,
        })
    }

    /// 明示的な値で設定を作成（テスト用）
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
        }
    }

    /// SNSトピックARNを取得
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

/// 書き込み先DynamoDBテーブルの設定
///
/// 環境変数:
/// - TABLE_NAME: 書き込み先テーブル名
#[derive(Debug, Clone)]
pub struct TableConfig {
    table_name: String,
}

impl TableConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            table_name: require_env(TABLE_NAME_ENV)?,
        })
    }

    /// 明示的な値で設定を作成（テスト用）
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }

    /// テーブル名を取得
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// 書き込み先S3バケットの設定
///
/// 環境変数:
/// - BUCKET_NAME: 書き込み先バケット名
/// - KEY_PREFIX: オブジェクトキーのプレフィックス（省略時は`lambda-write-to-s3/`）
#[derive(Debug, Clone)]
pub struct BucketConfig {
    bucket_name: String,
    key_prefix: String,
}

impl BucketConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        let bucket_name = require_env(BUCKET_NAME_ENV)?;
        let key_prefix =
            read_env(KEY_PREFIX_ENV)?.unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string());

        Ok(Self::new(bucket_name, key_prefix))
    }

    /// 明示的な値で設定を作成
    ///
    /// 空でないプレフィックスは末尾が`/`になるよう正規化する。
    pub fn new(bucket_name: impl Into<String>, key_prefix: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            key_prefix: Self::normalize_prefix(key_prefix.into()),
        }
    }

    fn normalize_prefix(prefix: String) -> String {
        let prefix = prefix.trim().to_string();
        if prefix.is_empty() || prefix.ends_with('/') {
            prefix
        } else {
            format!("{}/", prefix)
        }
    }

    /// バケット名を取得
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// キープレフィックスを取得
    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }
}
