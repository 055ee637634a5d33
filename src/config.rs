use std::collections::BTreeMap;
use std::env;

use rdkafka::ClientConfig;

/// Environment variables carrying this prefix become client options.
pub const ENV_PREFIX: &str = "KAFKA_";

const DEFAULT_BOOTSTRAP_SERVERS: &str = "localhost:9092";
const DEFAULT_FORMAT: &str = "string";

/// Options that describe this tool's record formatting rather than the
/// client; librdkafka rejects properties it does not know, so these
/// never reach the handed-off configuration.
const LOCAL_KEYS: &[&str] = &["key.format", "value.format"];

/// Client options assembled from the environment over fixed defaults.
///
/// `KAFKA_FOO_BAR=v` becomes the entry `foo.bar = v`; defaults fill in
/// whatever the environment left unset. Construction never fails: an
/// empty environment yields exactly the defaults.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    entries: BTreeMap<String, String>,
}

impl ClientSettings {
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    /// Build from an explicit variable set instead of the process
    /// environment.
    pub fn from_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries: BTreeMap<String, String> = vars
            .into_iter()
            .filter_map(|(name, value)| {
                let option = name.strip_prefix(ENV_PREFIX)?;
                Some((option.to_lowercase().replace('_', "."), value))
            })
            .collect();

        let defaults = [
            ("bootstrap.servers", DEFAULT_BOOTSTRAP_SERVERS),
            ("key.format", DEFAULT_FORMAT),
            ("value.format", DEFAULT_FORMAT),
        ];
        for (key, value) in defaults {
            entries
                .entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The rdkafka configuration both the admin client and the
    /// producer are created from.
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        for (key, value) in &self.entries {
            if LOCAL_KEYS.contains(&key.as_str()) {
                continue;
            }
            config.set(key, value);
        }
        config
    }
}

/// The one topic this tool manages.
#[derive(Debug, Clone)]
pub struct TopicSpec {
    pub name: String,
    pub partitions: i32,
    pub replication_factor: i32,
}

impl Default for TopicSpec {
    fn default() -> Self {
        Self {
            name: "sample".to_string(),
            partitions: 2,
            replication_factor: 1,
        }
    }
}
