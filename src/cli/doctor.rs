use triage_client::{AnalysisClient, BackendConfig};

pub async fn run(config: BackendConfig) -> anyhow::Result<()> {
    println!("🩺 Triage Doctor\n");

    let client = AnalysisClient::new(config)?;

    println!(
        "Backend: {} (timeout: {}s)",
        client.config().base_url,
        client.config().timeout.as_secs()
    );

    let mut all_ok = true;

    all_ok &= check_banner(&client).await;
    all_ok &= check_health(&client).await;

    println!();
    if all_ok {
        println!("✅ Backend is reachable. Ready to analyze.");
    } else {
        println!("⚠️  Backend is not reachable. Start it, then re-run 'triage doctor'.");
        std::process::exit(1);
    }

    Ok(())
}

async fn check_banner(client: &AnalysisClient) -> bool {
    print!("Checking API banner... ");

    match client.status().await {
        Ok(status) if status.status == "active" => {
            println!("✅ {}", status.message);
            true
        }
        Ok(status) => {
            println!("⚠️  API answered but reports status '{}'", status.status);
            false
        }
        Err(e) => {
            println!("❌ {}", e);
            false
        }
    }
}

async fn check_health(client: &AnalysisClient) -> bool {
    print!("Checking health endpoint... ");

    match client.health().await {
        Ok(health) if health.is_ok() => {
            println!("✅ ok");
            true
        }
        Ok(health) => {
            println!("⚠️  Unexpected status: '{}'", health.status);
            false
        }
        Err(e) => {
            println!("❌ {}", e);
            false
        }
    }
}
