use anyhow::Result;

use demodash::client::DashboardClient;
use demodash::config::Config;
use demodash::logging::{json_log, obj, v_num, v_str};
use demodash::orchestrator::Orchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    json_log(
        "startup",
        obj(&[
            ("api_base", v_str(&cfg.api_base)),
            ("refresh_secs", v_num(cfg.refresh_secs as f64)),
        ]),
    );

    let client = DashboardClient::new(cfg.api_base.clone());
    let mut orchestrator = Orchestrator::new(client, cfg.refresh_secs);
    orchestrator.run().await
}
