use aws_config::BehaviorVersion;
use aws_sdk_kinesis::{config::Builder as ConfigBuilder, Client};
use kinesis_shard_reader::ENV_KINESIS_ENDPOINT_URL;
use std::env;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

const STREAM: &str = "orders";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)?;

    let url = env::var(ENV_KINESIS_ENDPOINT_URL)
        .map_err(|_| anyhow::anyhow!("env {ENV_KINESIS_ENDPOINT_URL} is required"))?;
    let config = ConfigBuilder::from(&aws_config::load_defaults(BehaviorVersion::latest()).await)
        .endpoint_url(url)
        .build();
    let client = Client::from_conf(config);

    if let Err(err) = client
        .create_stream()
        .stream_name(STREAM)
        .shard_count(1)
        .send()
        .await
    {
        error!("{:#?}", err);
        return Ok(());
    }

    match client.list_shards().stream_name(STREAM).send().await {
        Ok(output) => {
            for shard in output.shards() {
                info!("Shard ID: {}", shard.shard_id());
            }
        }
        Err(err) => {
            error!("{:#?}", err);
        }
    }

    Ok(())
}
