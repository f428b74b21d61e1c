use social_graph::actor::ClientError;
use social_graph::clients::SocialGraph;
use social_graph::config::SystemConfig;
use social_graph::lifecycle::SocialSystem;
use social_graph::model::{UserCreate, UserId, UserUpdate};
use social_graph::query::FriendshipEdge;
use social_graph::seed::seed_demo_network;
use social_graph::store::{GraphError, HobbyOutcome};

fn config() -> SystemConfig {
    SystemConfig {
        channel_capacity: 8,
        seed_demo_data: false,
    }
}

/// Full lifecycle through the actor: create, link, guard, unlink, delete.
#[tokio::test]
async fn test_full_social_system_integration() {
    let system = SocialSystem::new(&config());
    let client = &system.client;

    let alice = client
        .create_user(UserCreate::new("alice", 28, ["reading", "hiking"]))
        .await
        .expect("Failed to create alice");
    let bob = client
        .create_user(UserCreate::new("bob", 32, ["reading"]))
        .await
        .expect("Failed to create bob");
    assert!(alice.friends().is_empty());
    assert_ne!(alice.id(), bob.id());

    // Link is symmetric
    client.link_users(alice.id(), bob.id()).await.unwrap();
    let bob_now = client.get_user(bob.id()).await.unwrap().expect("bob exists");
    assert!(bob_now.is_friend_of(alice.id()));

    // Second link is a conflict
    let err = client.link_users(bob.id(), alice.id()).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Graph(GraphError::AlreadyLinked(..))
    ));

    // Delete is guarded while linked
    let err = client.delete_user(alice.id()).await.unwrap_err();
    assert!(err.graph_error().is_some_and(GraphError::is_conflict));
    assert_eq!(client.list_users().await.unwrap().len(), 2);

    assert_eq!(client.popularity_score(alice.id()).await.unwrap(), 1.5);

    // Unlink twice: second is a no-op
    assert!(client.unlink_users(alice.id(), bob.id()).await.unwrap());
    assert!(!client.unlink_users(alice.id(), bob.id()).await.unwrap());

    let removed = client.delete_user(alice.id()).await.unwrap();
    assert_eq!(removed.username(), "alice");
    assert_eq!(client.popularity_score(alice.id()).await.unwrap(), 0.0);

    let final_store = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(final_store.len(), 1);
    assert!(final_store.contains(bob.id()));
}

#[tokio::test]
async fn test_update_and_hobbies_through_client() {
    let system = SocialSystem::new(&config());
    let client = system.client.clone();

    let user = client
        .create_user(UserCreate::new("carol", 25, ["yoga"]))
        .await
        .unwrap();

    assert_eq!(
        client.add_hobby(user.id(), "painting".into()).await.unwrap(),
        HobbyOutcome::Added
    );
    assert_eq!(
        client.add_hobby(user.id(), "painting".into()).await.unwrap(),
        HobbyOutcome::AlreadyPresent
    );

    let err = client
        .update_user(user.id(), UserUpdate::default().username("").age(40))
        .await
        .unwrap_err();
    assert_eq!(err, ClientError::Graph(GraphError::EmptyUsername));

    let updated = client
        .update_user(user.id(), UserUpdate::default().age(26))
        .await
        .unwrap();
    assert_eq!(updated.age(), 26);
    assert_eq!(updated.username(), "carol");
    assert_eq!(updated.hobbies().len(), 2);

    let ghost = UserId::from("ghost");
    let err = client.add_hobby(&ghost, "x".into()).await.unwrap_err();
    assert_eq!(err, ClientError::Graph(GraphError::NotFound(ghost)));

    assert_eq!(client.all_hobbies().await.unwrap(), ["painting", "yoga"]);

    drop(client);
    system.shutdown().await.unwrap();
}

/// The demo network ranks, catalogs and exports as expected.
#[tokio::test]
async fn test_demo_network_views() {
    let system = SocialSystem::new(&config());
    let client = &system.client;

    let ids = seed_demo_network(client).await.expect("Failed to seed");
    assert_eq!(ids.len(), 5);

    let ranking = client.users_by_popularity().await.unwrap();
    let order: Vec<(&str, f64)> = ranking
        .iter()
        .map(|r| (r.user.username(), r.popularity.score))
        .collect();
    assert_eq!(
        order,
        vec![
            ("carol_creative", 3.0),
            ("alice_wonder", 2.5),
            ("bob_builder", 2.5),
            ("david_dev", 1.5),
            ("emma_explorer", 1.5),
        ]
    );
    assert!(ranking.iter().all(|r| !r.popularity.popular));

    let catalog = client.hobby_catalog().await.unwrap();
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog[0], ("coding".to_string(), 2));
    assert_eq!(catalog[9], ("yoga".to_string(), 2));
    assert!(catalog.windows(2).all(|w| w[0].0 < w[1].0));

    let mut edges = client.friendship_edges().await.unwrap();
    let mut expected: Vec<FriendshipEdge> = [(0, 1), (0, 2), (1, 3), (2, 4)]
        .into_iter()
        .map(|(a, b)| FriendshipEdge {
            source: ids[a].clone(),
            target: ids[b].clone(),
        })
        .collect();
    let key = |e: &FriendshipEdge| (e.source.clone(), e.target.clone());
    edges.sort_by_key(key);
    expected.sort_by_key(key);
    assert_eq!(edges, expected);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_user_serializes_with_camel_case_fields() {
    let system = SocialSystem::new(&config());
    let user = system
        .client
        .create_user(UserCreate::new("dave", 30, ["coding"]))
        .await
        .unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["username"], "dave");
    assert_eq!(json["age"], 30);
    assert_eq!(json["hobbies"], serde_json::json!(["coding"]));
    assert_eq!(json["friends"], serde_json::json!([]));
    assert!(json["createdAt"].is_string());
    assert_eq!(json["id"], user.id().as_str());

    let ranking = system.client.users_by_popularity().await.unwrap();
    let json = serde_json::to_value(&ranking[0]).unwrap();
    assert_eq!(json["score"], 0.0);
    assert_eq!(json["popular"], false);
    assert_eq!(json["username"], "dave");

    system.shutdown().await.unwrap();
}
