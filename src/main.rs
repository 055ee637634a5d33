use topic_publisher::kafka::{RecordPublisher, TopicManager};
use topic_publisher::{ClientSettings, PublishLoop, Result, TopicSpec};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let settings = ClientSettings::from_env();
    let topic = TopicSpec::default();

    info!(
        bootstrap_servers = settings.get("bootstrap.servers").unwrap_or_default(),
        topic = %topic.name,
        "starting topic-publisher"
    );

    let manager = TopicManager::new(&settings)?;
    manager.ensure_topic(&topic).await?;

    let publisher = RecordPublisher::new(&settings)?;
    let mut publish_loop = PublishLoop::new(publisher, topic.name.clone());
    publish_loop
        .run(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("topic_publisher=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();
}
