use std::time::Duration;

use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use tracing::{debug, error};

use crate::config::ClientSettings;
use crate::error::Result;
use crate::publisher::{OutboundRecord, RecordSink};

/// Fire-and-forget publisher backed by an rdkafka [`FutureProducer`].
pub struct RecordPublisher {
    producer: FutureProducer,
}

impl RecordPublisher {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let producer: FutureProducer = settings.client_config().create()?;
        Ok(Self { producer })
    }
}

impl RecordSink for RecordPublisher {
    fn dispatch(&self, record: OutboundRecord) {
        let queued = self.producer.send_result(
            FutureRecord::to(&record.topic)
                .key(&record.key)
                .payload(&record.value),
        );
        match queued {
            Ok(delivery) => {
                // The delivery future resolves on librdkafka's I/O
                // threads, possibly after later ticks have dispatched;
                // the task owns nothing but the record it reports on.
                tokio::spawn(async move {
                    match delivery.await {
                        Ok(Ok((partition, offset))) => {
                            debug!(
                                topic = %record.topic,
                                key = %record.key,
                                partition,
                                offset,
                                "record delivered"
                            );
                        }
                        Ok(Err((err, _message))) => {
                            error!(
                                topic = %record.topic,
                                key = %record.key,
                                value = %record.value,
                                %err,
                                "could not deliver record"
                            );
                        }
                        Err(_canceled) => {
                            error!(
                                topic = %record.topic,
                                key = %record.key,
                                "producer dropped before reporting delivery"
                            );
                        }
                    }
                });
            }
            Err((err, _record)) => {
                error!(
                    topic = %record.topic,
                    key = %record.key,
                    value = %record.value,
                    %err,
                    "could not enqueue record"
                );
            }
        }
    }

    fn flush(&self, timeout: Duration) {
        if let Err(err) = self.producer.flush(Timeout::After(timeout)) {
            error!(%err, "flush on shutdown failed");
        }
    }
}
