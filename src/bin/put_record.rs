use aws_config::BehaviorVersion;
use aws_sdk_kinesis::{config::Builder as ConfigBuilder, primitives::Blob, Client};
use kinesis_shard_reader::ENV_KINESIS_ENDPOINT_URL;
use std::env;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use ulid::Ulid;

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

    let payload = env::args().nth(1).unwrap_or_else(|| "hello".into());

    match client
        .put_record()
        .stream_name(STREAM)
        .partition_key(Ulid::new().to_string())
        .data(Blob::new(payload))
        .send()
        .await
    {
        Ok(output) => {
            info!(
                "Shard ID: {}, Sequence Number: {}",
                output.shard_id(),
                output.sequence_number()
            );
        }
        Err(err) => {
            error!("{:#?}", err);
        }
    }

    Ok(())
}
