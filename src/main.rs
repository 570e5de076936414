mod appsettings;

use std::io::Read;

use anyhow::Context;
use chrono::Utc;
use recuerda_skill::{
    DeviceSettingsClient, RemindersClient, RequestEnvelope, ResponseEnvelope, handle_envelope,
};

/// One invocation handles one request envelope: read it from stdin, dispatch,
/// write the response envelope to stdout.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();

    let settings = appsettings::get();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading request envelope from stdin")?;
    let envelope: RequestEnvelope =
        serde_json::from_str(&input).context("deserializing request envelope")?;
    log::info!("received request envelope ({} bytes)", input.len());

    let time_zones = DeviceSettingsClient::from_system(&envelope.context.system);
    let reminders = RemindersClient::from_system(&envelope.context.system);

    let response = handle_envelope(
        &envelope,
        &time_zones,
        &reminders,
        Utc::now(),
        &settings.skill.locale,
    )
    .await;

    let body = serde_json::to_string_pretty(&ResponseEnvelope::new(response))
        .context("serializing response envelope")?;
    println!("{body}");

    Ok(())
}
