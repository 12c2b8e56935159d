//! # Concurrent Replica-State Access
//!
//! The tracker mutation is a single atomic read-modify-write: two
//! concurrent first-detections for the same validator must not each
//! insert independently - the loser observes the winner's entry and
//! falls into the update-minimum branch.

#[cfg(test)]
mod tests {
    use crate::integration::{admit, block, validator};
    use equivocation_detector::{
        EquivocationApi, EquivocationError, EquivocationService, InMemoryDagStore,
    };
    use rand::Rng;
    use std::sync::Arc;
    use std::time::Duration;

    fn forked_replica() -> (Arc<InMemoryDagStore>, Arc<EquivocationService<InMemoryDagStore>>) {
        let dag = Arc::new(InMemoryDagStore::new());
        let service = Arc::new(EquivocationService::new(Arc::clone(&dag)));
        (dag, service)
    }

    async fn jitter() {
        let micros = rand::thread_rng().gen_range(0..200);
        tokio::time::sleep(Duration::from_micros(micros)).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_detections_commit_one_entry_at_minimum_rank() {
        let (dag, service) = forked_replica();

        // V1's honest history: B1 at rank 1, B2 at rank 2 (latest).
        let b1 = block(1, 1, &[]);
        let h1 = admit(&dag, &b1);
        let b2 = block(1, 2, &[(1, h1)]);
        admit(&dag, &b2);

        // V2's independent genesis-level block.
        let other = block(2, 0, &[]);
        let h_other = admit(&dag, &other);

        // Two conflicting fork branches from V1, submitted concurrently.
        // fork_a exposes base rank 1 (via B1); fork_b exposes rank 0
        // (no own message reachable at all).
        let mut fork_a = block(1, 2, &[(1, h1)]);
        fork_a.header.timestamp = 1;
        let fork_b = block(1, 1, &[(2, h_other)]);

        let mut handles = Vec::new();
        for candidate in [fork_a, fork_b] {
            for _ in 0..4 {
                let service = Arc::clone(&service);
                let candidate = candidate.clone();
                handles.push(tokio::spawn(async move {
                    jitter().await;
                    service.check_equivocation_with_update(&candidate).await
                }));
            }
        }

        let mut rejections: u64 = 0;
        for handle in handles {
            let verdict = handle.await.unwrap();
            assert!(matches!(
                verdict,
                Err(EquivocationError::EquivocatedBlock { .. })
            ));
            rejections += 1;
        }

        // Exactly one tracker entry, committed at the minimum exposed rank.
        assert_eq!(service.known_equivocators().await, vec![validator(1)]);
        assert_eq!(service.equivocation_base_rank(&validator(1)).await, Some(0));
        assert_eq!(service.blocks_rejected().await, rejections);

        // Only the winning first detection emitted an event.
        assert_eq!(service.take_detection_events().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_honest_validators_are_all_accepted() {
        let (dag, service) = forked_replica();

        let mut handles = Vec::new();
        for creator in 1..=16u8 {
            let service = Arc::clone(&service);
            let dag = Arc::clone(&dag);
            handles.push(tokio::spawn(async move {
                jitter().await;
                let b1 = block(creator, 1, &[]);
                service.check_equivocation_with_update(&b1).await?;
                let h1 = admit(&dag, &b1);

                jitter().await;
                let b2 = block(creator, 2, &[(creator, h1)]);
                service.check_equivocation_with_update(&b2).await?;
                admit(&dag, &b2);
                Ok::<(), EquivocationError>(())
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert!(service.known_equivocators().await.is_empty());
        assert_eq!(service.blocks_rejected().await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn tracked_validator_is_rejected_from_every_task() {
        let (dag, service) = forked_replica();

        let b1 = block(1, 1, &[]);
        let h1 = admit(&dag, &b1);
        let b2 = block(1, 2, &[(1, h1)]);
        admit(&dag, &b2);

        let mut fork = block(1, 2, &[(1, h1)]);
        fork.header.timestamp = 1;
        assert!(service.check_equivocation_with_update(&fork).await.is_err());

        let mut handles = Vec::new();
        for i in 0..8u64 {
            let service = Arc::clone(&service);
            let retry = block(1, 3 + i, &[(1, h1)]);
            handles.push(tokio::spawn(async move {
                jitter().await;
                service.check_equivocation_with_update(&retry).await
            }));
        }

        for handle in handles {
            assert!(matches!(
                handle.await.unwrap(),
                Err(EquivocationError::EquivocatedBlock { .. })
            ));
        }
        assert_eq!(service.blocks_rejected().await, 9);
    }
}
