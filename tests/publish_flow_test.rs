use std::sync::{Arc, Mutex};
use std::time::Duration;

use topic_publisher::kafka::{RecordPublisher, TopicManager};
use topic_publisher::{ClientSettings, OutboundRecord, PublishLoop, RecordSink, TopicSpec};

#[derive(Clone, Default)]
struct CollectingSink {
    records: Arc<Mutex<Vec<OutboundRecord>>>,
}

impl RecordSink for CollectingSink {
    fn dispatch(&self, record: OutboundRecord) {
        self.records.lock().unwrap().push(record);
    }
}

#[test]
fn five_ticks_publish_counter_values_in_order() {
    let sink = CollectingSink::default();
    let mut publish_loop = PublishLoop::new(sink.clone(), "sample");

    for _ in 0..5 {
        publish_loop.tick();
    }

    let records = sink.records.lock().unwrap();
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|record| record.topic == "sample"));

    // Both counters start at zero, so the first record always carries
    // "Value 0" whichever key was drawn.
    assert!(records[0].key == "Key 0" || records[0].key == "Key 1");
    assert_eq!(records[0].value, "Value 0");

    // Per key, values count up from zero in send order.
    for key in ["Key 0", "Key 1"] {
        let values: Vec<&str> = records
            .iter()
            .filter(|record| record.key == key)
            .map(|record| record.value.as_str())
            .collect();
        let expected: Vec<String> = (0..values.len()).map(|n| format!("Value {n}")).collect();
        assert_eq!(values, expected);
    }

    let [key0, key1] = publish_loop.counters();
    assert_eq!(key0 + key1, 5);
}

#[tokio::test]
#[ignore] // Run with a local broker: cargo test -- --ignored publish_to_live_broker
async fn publish_to_live_broker() {
    tracing_subscriber::fmt()
        .with_env_filter("topic_publisher=debug,rdkafka=info")
        .try_init()
        .ok();

    let settings = ClientSettings::from_vars([(
        "KAFKA_BOOTSTRAP_SERVERS".to_string(),
        "localhost:9092".to_string(),
    )]);
    let topic = TopicSpec::default();

    // Provisioning twice must not fail (idempotence against live
    // broker state).
    let manager = TopicManager::new(&settings).unwrap();
    manager.ensure_topic(&topic).await.unwrap();
    manager.ensure_topic(&topic).await.unwrap();

    let publisher = RecordPublisher::new(&settings).unwrap();
    let mut publish_loop = PublishLoop::new(publisher, topic.name.clone());
    publish_loop
        .run(tokio::time::sleep(Duration::from_secs(5)))
        .await
        .unwrap();

    let [key0, key1] = publish_loop.counters();
    assert!(key0 + key1 >= 5);
}
