// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod object_store_ops;
pub mod service_error;
pub mod sns_ops;
pub mod table_ops;

// Re-exports
pub use config::{BucketConfig, ConfigError, TableConfig, TopicConfig};
pub use logging::{init_logging, invocation_span};
pub use object_store_ops::{ObjectStoreOps, S3ObjectStoreOps};
pub use service_error::ServiceError;
pub use sns_ops::{AwsSnsOps, SnsOps};
pub use table_ops::{DynamoTableOps, TableOps};
