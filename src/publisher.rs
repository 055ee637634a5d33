//! The periodic publish loop.
//!
//! One record per second, alternating between two logical keys. Each
//! key owns a counter that feeds the record value and is incremented
//! on every send, before the delivery outcome is known.

use std::future::Future;
use std::time::Duration;

use tracing::info;

use crate::error::Result;

/// Pause between sends, measured after each dispatch rather than
/// aligned to the wall clock.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long shutdown waits for in-flight deliveries.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

/// One record on its way to the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRecord {
    pub topic: String,
    pub key: String,
    pub value: String,
}

/// Destination for outbound records.
///
/// `dispatch` must not block on broker acknowledgement; the
/// implementation reports delivery outcomes on its own (logging, in
/// this tool) and must not touch the loop's counters.
pub trait RecordSink {
    fn dispatch(&self, record: OutboundRecord);

    /// Wait for in-flight records before shutdown.
    fn flush(&self, _timeout: Duration) {}
}

/// Drives the send schedule and owns the per-key counters.
pub struct PublishLoop<S> {
    sink: S,
    topic: String,
    counters: [u64; 2],
}

impl<S: RecordSink> PublishLoop<S> {
    pub fn new(sink: S, topic: impl Into<String>) -> Self {
        Self {
            sink,
            topic: topic.into(),
            counters: [0, 0],
        }
    }

    /// Counter values in logical-key order.
    pub fn counters(&self) -> [u64; 2] {
        self.counters
    }

    /// One send: pick a key at random, format the record from that
    /// key's counter, dispatch, then increment the counter whether or
    /// not the delivery eventually succeeds.
    pub fn tick(&mut self) {
        let key_index = usize::from(rand::random::<bool>());
        let record = OutboundRecord {
            topic: self.topic.clone(),
            key: format!("Key {key_index}"),
            value: format!("Value {}", self.counters[key_index]),
        };
        info!(key = %record.key, value = %record.value, "sending record");
        self.sink.dispatch(record);
        self.counters[key_index] += 1;
    }

    /// Send one record per tick until `shutdown` completes, then flush
    /// the sink and return.
    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) -> Result<()> {
        info!(topic = %self.topic, "sending data to topic");
        tokio::pin!(shutdown);
        loop {
            self.tick();
            tokio::select! {
                _ = &mut shutdown => {
                    info!("shutdown requested, flushing in-flight records");
                    self.sink.flush(FLUSH_TIMEOUT);
                    return Ok(());
                }
                _ = tokio::time::sleep(TICK_INTERVAL) => {}
            }
        }
    }
}
