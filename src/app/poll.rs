//! Fixed-interval polling against a retry budget.

use std::future::Future;

use tokio::time::sleep;
use tracing::debug;

use crate::domain::RetryBudget;
use crate::error::{Error, Result, WaitCondition};

/// Probe until `accept` holds for an observation or the budget runs out.
///
/// The first probe happens immediately; the budget's fixed delay sits only
/// between failed attempts, so at most `max_attempts` probes are made and the
/// last failure is not followed by a sleep. A probe error aborts the loop at
/// once — retries are for conditions that have not held *yet*, not for
/// control-plane failures.
pub async fn poll_until<T, F, Fut, P>(
    budget: &RetryBudget,
    condition: WaitCondition,
    mut probe: F,
    mut accept: P,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    P: FnMut(&T) -> bool,
{
    for attempt in 1..=budget.max_attempts {
        let observed = probe().await?;
        if accept(&observed) {
            return Ok(observed);
        }
        if attempt < budget.max_attempts {
            debug!(%condition, attempt, "condition not met yet, waiting");
            sleep(budget.delay).await;
        }
    }

    Err(Error::RetryBudgetExhausted {
        condition,
        attempts: budget.max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    fn budget(attempts: u32, secs: u64) -> RetryBudget {
        RetryBudget::new(attempts, Duration::from_secs(secs))
    }

    #[tokio::test(start_paused = true)]
    async fn returns_on_first_accepted_observation() {
        let probes = AtomicU32::new(0);
        let started = tokio::time::Instant::now();

        let value = poll_until(
            &budget(40, 15),
            WaitCondition::ServiceNotStable,
            || {
                probes.fetch_add(1, Ordering::SeqCst);
                async { Ok(7u32) }
            },
            |v| *v == 7,
        )
        .await
        .unwrap();

        assert_eq!(value, 7);
        assert_eq!(probes.load(Ordering::SeqCst), 1);
        // Accepted on the first attempt: no sleep at all.
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_consuming_attempts_after_success() {
        let probes = AtomicU32::new(0);

        poll_until(
            &budget(10, 1),
            WaitCondition::ServiceNotStable,
            || {
                let n = probes.fetch_add(1, Ordering::SeqCst) + 1;
                async move { Ok(n) }
            },
            |n| *n >= 3,
        )
        .await
        .unwrap();

        assert_eq!(probes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_probes_exactly_the_budget_spaced_by_the_delay() {
        let probes = AtomicU32::new(0);
        let started = tokio::time::Instant::now();

        let err = poll_until(
            &budget(5, 15),
            WaitCondition::TargetGroupNotHealthy,
            || {
                probes.fetch_add(1, Ordering::SeqCst);
                async { Ok(0u32) }
            },
            |v| *v > 0,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            Error::RetryBudgetExhausted {
                condition: WaitCondition::TargetGroupNotHealthy,
                attempts: 5,
            }
        ));
        assert_eq!(probes.load(Ordering::SeqCst), 5);
        // Four sleeps between five attempts, none after the last.
        assert_eq!(started.elapsed(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn probe_errors_abort_immediately() {
        let probes = AtomicU32::new(0);

        let err = poll_until(
            &budget(40, 15),
            WaitCondition::ServiceNotStable,
            || {
                probes.fetch_add(1, Ordering::SeqCst);
                async { Err::<u32, _>(Error::NotFound("service web".into())) }
            },
            |_| true,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(probes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_budget_still_probes_once() {
        let probes = AtomicU32::new(0);

        let value = poll_until(
            &budget(0, 15),
            WaitCondition::ServiceNotStable,
            || {
                probes.fetch_add(1, Ordering::SeqCst);
                async { Ok(1u32) }
            },
            |v| *v == 1,
        )
        .await
        .unwrap();

        assert_eq!(value, 1);
        assert_eq!(probes.load(Ordering::SeqCst), 1);
    }
}
