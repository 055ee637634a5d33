//! Error types and result handling for topic-publisher.
//!
//! Only startup can fail: building the clients, listing topics, and
//! creating the topic all surface here. Delivery failures during the
//! publish loop are logged by the completion task and never become an
//! [`Error`].

use rdkafka::error::RDKafkaErrorCode;
use thiserror::Error;

/// The main error type for topic-publisher operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Kafka client, metadata, or broker connection error.
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// Topic creation rejected by the broker for a reason other than
    /// the topic already existing.
    #[error("failed to create topic `{topic}`: {code}")]
    TopicCreation {
        /// Name of the topic the creation request was for.
        topic: String,
        /// Broker-reported error code.
        code: RDKafkaErrorCode,
    },
}

/// A convenient Result type alias for topic-publisher operations.
pub type Result<T> = std::result::Result<T, Error>;
