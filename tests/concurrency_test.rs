use social_graph::clients::SocialGraph;
use social_graph::config::SystemConfig;
use social_graph::lifecycle::SocialSystem;
use social_graph::model::UserCreate;
use social_graph::store::GraphError;

/// Racing links on the same pair: exactly one wins, the rest conflict.
#[tokio::test]
async fn test_concurrent_links_on_same_pair() {
    let system = SocialSystem::new(&SystemConfig::default());
    let a = system
        .client
        .create_user(UserCreate::new("a", 20, ["chess"]))
        .await
        .unwrap();
    let b = system
        .client
        .create_user(UserCreate::new("b", 21, ["chess"]))
        .await
        .unwrap();

    let mut handles = vec![];
    for i in 0..10 {
        let client = system.client.clone();
        let (a, b) = (a.id().clone(), b.id().clone());
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                client.link_users(&a, &b).await
            } else {
                client.link_users(&b, &a).await
            }
        }));
    }

    let mut linked = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => linked += 1,
            Err(e) => {
                assert!(e.graph_error().is_some_and(GraphError::is_conflict));
                conflicts += 1;
            }
        }
    }
    assert_eq!(linked, 1, "Expected exactly one successful link");
    assert_eq!(conflicts, 9);

    let store = system.shutdown().await.unwrap();
    assert_eq!(store.get(a.id()).unwrap().friends().len(), 1);
    assert_eq!(store.get(b.id()).unwrap().friends().len(), 1);
}

/// Readers running alongside writers only ever see symmetric friendships.
#[tokio::test]
async fn test_reads_never_observe_half_links() {
    let system = SocialSystem::new(&SystemConfig::default());
    let mut ids = vec![];
    for i in 0..6 {
        let user = system
            .client
            .create_user(UserCreate::new(format!("u{}", i), 30, Vec::<String>::new()))
            .await
            .unwrap();
        ids.push(user.id().clone());
    }

    let writer = {
        let client = system.client.clone();
        let ids = ids.clone();
        tokio::spawn(async move {
            for round in 0..5 {
                for i in 0..ids.len() {
                    for j in (i + 1)..ids.len() {
                        if (i + j + round) % 2 == 0 {
                            let _ = client.link_users(&ids[i], &ids[j]).await;
                        } else {
                            client.unlink_users(&ids[i], &ids[j]).await.unwrap();
                        }
                    }
                }
            }
        })
    };

    let reader = {
        let client = system.client.clone();
        tokio::spawn(async move {
            for _ in 0..50 {
                let users = client.list_users().await.unwrap();
                for user in &users {
                    for friend_id in user.friends() {
                        let friend = users
                            .iter()
                            .find(|u| u.id() == friend_id)
                            .expect("friend exists");
                        assert!(friend.is_friend_of(user.id()), "torn friendship");
                    }
                }
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
    system.shutdown().await.unwrap();
}
