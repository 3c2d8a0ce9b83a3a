//! Concurrent calls over one shared bridge

mod support;

use bridge::{KeyBridge, Outcome, OPERATION_FAILED};
use tokio::task::JoinSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_key_agreements() {
    support::init_tracing();
    let bridge = KeyBridge::native();
    let mut tasks = JoinSet::new();

    for _ in 0..64 {
        let bridge = bridge.clone();
        tasks.spawn(async move {
            let alice = support::random_seed();
            let bob = support::random_seed();

            let alice_secret = bridge.secret_key_from_ed25519_secret_key(&alice).await;
            let bob_public = bridge
                .public_key_from_ed25519_public_key(&support::ed25519_public(&bob))
                .await;
            let shared = bridge
                .shared_secret_key_from_secret_key_and_public_key(
                    &alice_secret.into_bytes().unwrap(),
                    &bob_public.into_bytes().unwrap(),
                )
                .await;

            let expected = support::reference_shared_secret(
                support::reference_x25519_secret(&alice),
                support::reference_x25519_public(&support::ed25519_public(&bob)),
            );
            (shared, expected)
        });
    }

    let mut completed = 0;
    while let Some(result) = tasks.join_next().await {
        let (shared, expected) = result.unwrap();
        assert_eq!(shared, Outcome::Success(expected));
        completed += 1;
    }
    assert_eq!(completed, 64);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_failures_do_not_affect_concurrent_successes() {
    let bridge = KeyBridge::native();
    let mut tasks = JoinSet::new();

    for i in 0..32 {
        let bridge = bridge.clone();
        tasks.spawn(async move {
            let seed = support::random_seed();
            if i % 2 == 0 {
                let outcome = bridge.secret_key_from_ed25519_secret_key(&seed).await;
                (outcome, Outcome::Success(support::reference_x25519_secret(&seed)))
            } else {
                let outcome = bridge.secret_key_from_ed25519_secret_key(&seed[..31]).await;
                (outcome, OPERATION_FAILED)
            }
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (outcome, expected) = result.unwrap();
        assert_eq!(outcome, expected);
    }
}
