use std::collections::HashSet;
use std::time::Duration;

use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::error::RDKafkaErrorCode;
use rdkafka::ClientConfig;
use tracing::{debug, info, instrument};

use crate::config::{ClientSettings, TopicSpec};
use crate::error::{Error, Result};

const METADATA_TIMEOUT: Duration = Duration::from_secs(5);
const CREATE_TIMEOUT: Duration = Duration::from_secs(30);

pub struct TopicManager {
    admin_client: AdminClient<DefaultClientContext>,
}

impl TopicManager {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let config: ClientConfig = settings.client_config();
        let admin_client: AdminClient<_> = config.create()?;
        Ok(Self { admin_client })
    }

    /// Make sure the topic exists, creating it if the cluster does not
    /// know it yet. A create rejected because another actor won the
    /// race counts as success; every other failure aborts startup.
    #[instrument(skip_all, fields(topic = %spec.name))]
    pub async fn ensure_topic(&self, spec: &TopicSpec) -> Result<()> {
        if self.topic_names()?.contains(&spec.name) {
            debug!("topic already exists");
            return Ok(());
        }

        info!(
            partitions = spec.partitions,
            replication_factor = spec.replication_factor,
            "creating topic"
        );
        let new_topic = NewTopic::new(
            &spec.name,
            spec.partitions,
            TopicReplication::Fixed(spec.replication_factor),
        );
        let opts = AdminOptions::new().operation_timeout(Some(CREATE_TIMEOUT));
        let results = self.admin_client.create_topics(&[new_topic], &opts).await?;

        for result in results {
            match result {
                Ok(topic) => {
                    info!(topic = %topic, "created topic");
                }
                Err((topic, RDKafkaErrorCode::TopicAlreadyExists)) => {
                    info!(topic = %topic, "topic created concurrently elsewhere");
                }
                Err((topic, code)) => {
                    return Err(Error::TopicCreation { topic, code });
                }
            }
        }
        Ok(())
    }

    fn topic_names(&self) -> Result<HashSet<String>> {
        let metadata = self
            .admin_client
            .inner()
            .fetch_metadata(None, METADATA_TIMEOUT)?;

        Ok(metadata
            .topics()
            .iter()
            .map(|topic| topic.name().to_string())
            .collect())
    }
}
