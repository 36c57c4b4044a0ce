// Domain layer modules
pub mod clock;
pub mod response_envelope;
pub mod table_item;

// Re-exports
pub use clock::{Clock, SystemClock};
pub use response_envelope::ResponseEnvelope;
pub use table_item::TableItem;
