use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use vitalgrid::cache::SeriesCache;

const TTL: Duration = Duration::from_millis(30_000);

#[tokio::test(start_paused = true)]
async fn concurrent_gets_share_one_fetch() {
    let cache: SeriesCache<Vec<i64>> = SeriesCache::new();
    let calls = AtomicUsize::new(0);
    let calls = &calls;

    let slow_fetch = move || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        Ok(vec![1, 2, 3])
    };
    let second_fetch = move || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![9, 9, 9])
    };

    let (a, b) = tokio::join!(
        cache.get("p1", TTL, slow_fetch),
        cache.get("p1", TTL, second_fetch)
    );

    // the second call rode the first fetch; its own fetcher never ran
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(a, Some(vec![1, 2, 3]));
    assert_eq!(b, a);
}

#[tokio::test(start_paused = true)]
async fn fresh_entry_skips_the_fetcher() {
    let cache: SeriesCache<u32> = SeriesCache::new();
    let calls = AtomicUsize::new(0);
    let calls = &calls;

    for _ in 0..3 {
        let got = cache
            .get("p1", TTL, move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .await;
        assert_eq!(got, Some(7));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn expired_entry_refetches() {
    let cache: SeriesCache<u32> = SeriesCache::new();
    let calls = AtomicUsize::new(0);
    let calls = &calls;

    let got = cache
        .get("p1", TTL, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(7)
        })
        .await;
    assert_eq!(got, Some(7));

    tokio::time::advance(TTL + Duration::from_millis(1)).await;

    let got = cache
        .get("p1", TTL, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(8)
        })
        .await;
    assert_eq!(got, Some(8));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn failure_is_cached_as_absent_until_expiry() {
    let cache: SeriesCache<u32> = SeriesCache::new();
    let calls = AtomicUsize::new(0);
    let calls = &calls;

    let failing = move || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(eyre::eyre!("boom"))
    };
    assert_eq!(cache.get("p1", TTL, failing).await, None);

    // within the TTL the absence itself is served, no retry
    let failing = move || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Err(eyre::eyre!("boom"))
    };
    assert_eq!(cache.get("p1", TTL, failing).await, None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    tokio::time::advance(TTL + Duration::from_millis(1)).await;
    let recovered = move || async move {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(5)
    };
    assert_eq!(cache.get("p1", TTL, recovered).await, Some(5));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn distinct_keys_fetch_independently() {
    let cache: SeriesCache<u32> = SeriesCache::new();
    let calls = AtomicUsize::new(0);
    let calls = &calls;

    let got = cache
        .get("p1", TTL, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(1)
        })
        .await;
    assert_eq!(got, Some(1));

    let got = cache
        .get("p2", TTL, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(2)
        })
        .await;
    assert_eq!(got, Some(2));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
