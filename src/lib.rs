pub mod config;
pub mod error;
pub mod publisher;

pub mod kafka;

pub use config::{ClientSettings, TopicSpec};
pub use error::{Error, Result};
pub use publisher::{OutboundRecord, PublishLoop, RecordSink};
