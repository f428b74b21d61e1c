//! Demo binary: seeds the demo network, prints the popularity ranking and the hobby
//! catalog, and shows a rejected delete.

use social_graph::clients::SocialGraph;
use social_graph::config::SystemConfig;
use social_graph::lifecycle::{setup_tracing, SocialSystem};
use social_graph::seed;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Starting social graph");

    let (system, demo_ids) = if config.seed_demo_data {
        let (store, ids) = seed::demo_store().map_err(|e| e.to_string())?;
        (SocialSystem::with_store(&config, store), ids)
    } else {
        (SocialSystem::new(&config), Vec::new())
    };
    let client = system.client.clone();

    // The first demo user has friends, so the store must refuse to delete them.
    if let Some(first) = demo_ids.first() {
        match client.delete_user(first).await {
            Ok(user) => warn!(user_id = %user.id(), "Linked user was deleted"),
            Err(e) => info!(error = %e, "Delete refused as expected"),
        }
    }

    let ranking = client
        .users_by_popularity()
        .await
        .map_err(|e| e.to_string())?;
    for (rank, entry) in ranking.iter().enumerate() {
        info!(
            rank = rank + 1,
            username = entry.user.username(),
            friends = entry.user.friends().len(),
            score = entry.popularity.score,
            popular = entry.popularity.popular,
            "Ranking"
        );
    }

    let catalog = client.hobby_catalog().await.map_err(|e| e.to_string())?;
    for (hobby, users) in &catalog {
        info!(hobby = %hobby, users, "Hobby");
    }

    drop(client);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
