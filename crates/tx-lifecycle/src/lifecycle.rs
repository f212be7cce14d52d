use std::{fmt, sync::Arc};

use tokio::{
    runtime::Handle,
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::*;
use vault_primitives::prelude::{TxHash, WithdrawRequest};

use crate::{
    errors::{LifecycleError, LifecycleResult},
    event::{LifecycleEvent, LifecycleUpdate},
    failure::TxFailure,
    step::TxStep,
    submitter::TxSubmitter,
    traits::TransactionLifecycle,
};

/// Observable status of the lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TxStatus {
    /// Seq of the last update published, 0 before the first one.
    pub seq: u64,
    pub step: TxStep,
    pub failure: Option<TxFailure>,
    pub tx_hash: Option<TxHash>,
}

impl TxStatus {
    /// Label the action button should carry in this status, if any.
    pub fn button_label(&self) -> Option<String> {
        match self.step {
            TxStep::Error => Some(
                self.failure
                    .as_ref()
                    .map(|f| f.button_label())
                    .unwrap_or("Transaction Failed")
                    .to_owned(),
            ),
            step => step.progress_label().map(str::to_owned),
        }
    }
}

enum Transition {
    Advance(TxStep),
    Succeed(TxHash),
    Fail(TxFailure),
    Reset,
}

impl Transition {
    fn target(&self) -> TxStep {
        match self {
            Transition::Advance(step) => *step,
            Transition::Succeed(_) => TxStep::Success,
            Transition::Fail(_) => TxStep::Error,
            Transition::Reset => TxStep::Ready,
        }
    }
}

/// Applies transitions to the status and emits the matching updates.
///
/// The update is sent while the watch lock is held so the update channel sees
/// transitions in the same order as the status.
#[derive(Clone)]
struct StatusPublisher {
    status: Arc<watch::Sender<TxStatus>>,
    updates: mpsc::UnboundedSender<LifecycleUpdate>,
}

impl StatusPublisher {
    fn apply(&self, transition: Transition) -> LifecycleResult<()> {
        let to = transition.target();
        let mut res = Ok(());

        self.status.send_if_modified(|st| {
            if !st.step.can_advance_to(to) {
                res = Err(LifecycleError::InvalidTransition { from: st.step, to });
                return false;
            }

            st.seq += 1;
            st.step = to;
            let event = match transition {
                Transition::Advance(_) => LifecycleEvent::StepChanged {
                    step: to,
                    label: st.button_label(),
                },
                Transition::Succeed(tx_hash) => {
                    st.tx_hash = Some(tx_hash.clone());
                    LifecycleEvent::Success { tx_hash }
                }
                Transition::Fail(failure) => {
                    st.failure = Some(failure.clone());
                    LifecycleEvent::Error { failure }
                }
                Transition::Reset => {
                    st.failure = None;
                    st.tx_hash = None;
                    LifecycleEvent::StepChanged {
                        step: to,
                        label: None,
                    }
                }
            };

            trace!(seq = st.seq, step = %to, "lifecycle transition");
            if self.updates.send(LifecycleUpdate::new(st.seq, event)).is_err() {
                debug!("lifecycle update receiver dropped");
            }
            true
        });

        res
    }
}

/// Withdraw transaction state machine.
///
/// Steps are advanced by a task spawned on submit which walks the
/// [`TxSubmitter`] through estimate, post and broadcast.
pub struct TxLifecycle {
    submitter: Arc<dyn TxSubmitter>,
    publisher: StatusPublisher,
    status_rx: watch::Receiver<TxStatus>,
    inflight: Option<JoinHandle<()>>,
}

impl fmt::Debug for TxLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TxLifecycle")
            .field("status", &*self.status_rx.borrow())
            .field("inflight", &self.inflight.is_some())
            .finish()
    }
}

impl TxLifecycle {
    /// Creates a lifecycle in [`TxStep::Ready`] together with the receiving end
    /// of its update channel.
    pub fn new(
        submitter: Arc<dyn TxSubmitter>,
    ) -> (Self, mpsc::UnboundedReceiver<LifecycleUpdate>) {
        let (status_tx, status_rx) = watch::channel(TxStatus::default());
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let lifecycle = Self {
            submitter,
            publisher: StatusPublisher {
                status: Arc::new(status_tx),
                updates: updates_tx,
            },
            status_rx,
            inflight: None,
        };
        (lifecycle, updates_rx)
    }

    /// Gets the latest [`TxStatus`].
    pub fn status(&self) -> TxStatus {
        self.status_rx.borrow().clone()
    }

    /// Create a subscription to the status watcher.
    pub fn subscribe(&self) -> watch::Receiver<TxStatus> {
        self.publisher.status.subscribe()
    }
}

impl TransactionLifecycle for TxLifecycle {
    fn seq(&self) -> u64 {
        self.status_rx.borrow().seq
    }

    fn current_step(&self) -> TxStep {
        self.status_rx.borrow().step
    }

    fn button_label(&self) -> Option<String> {
        self.status_rx.borrow().button_label()
    }

    fn submit(&mut self, request: WithdrawRequest) -> LifecycleResult<()> {
        let step = self.current_step();
        if step != TxStep::Ready {
            warn!(%step, "submit while not ready, ignoring");
            return Err(LifecycleError::Busy(step));
        }

        let handle = Handle::try_current().map_err(|_| LifecycleError::NoRuntime)?;
        self.publisher.apply(Transition::Advance(TxStep::Estimating))?;

        info!(vault = %request.vault_address, amount = %request.amount.amount, "submitting withdraw");
        let task = drive_submission(self.submitter.clone(), request, self.publisher.clone());
        self.inflight = Some(handle.spawn(task));
        Ok(())
    }

    fn reset(&mut self) -> LifecycleResult<()> {
        let step = self.current_step();
        if step == TxStep::Ready {
            return Ok(());
        }
        if step.is_in_flight() {
            return Err(LifecycleError::InFlight(step));
        }

        self.inflight = None;
        debug!(from = %step, "resetting lifecycle");
        self.publisher.apply(Transition::Reset)
    }
}

impl Drop for TxLifecycle {
    fn drop(&mut self) {
        if let Some(task) = self.inflight.take() {
            task.abort();
        }
    }
}

async fn drive_submission(
    submitter: Arc<dyn TxSubmitter>,
    request: WithdrawRequest,
    publisher: StatusPublisher,
) {
    let span = info_span!("withdraw", vault = %request.vault_address, lp = %request.lp_token);
    async move {
        let transition = match run_steps(submitter.as_ref(), &request, &publisher).await {
            Ok(tx_hash) => {
                info!(%tx_hash, "withdraw broadcast");
                Transition::Succeed(tx_hash)
            }
            Err(failure) => {
                warn!(%failure, "withdraw failed");
                Transition::Fail(failure)
            }
        };

        if let Err(e) = publisher.apply(transition) {
            error!(%e, "could not settle withdraw");
        }
    }
    .instrument(span)
    .await
}

async fn run_steps(
    submitter: &dyn TxSubmitter,
    request: &WithdrawRequest,
    publisher: &StatusPublisher,
) -> Result<TxHash, TxFailure> {
    let advance = |step| {
        publisher
            .apply(Transition::Advance(step))
            .map_err(|e| TxFailure::other(e.to_string()))
    };

    debug!("estimating fee");
    let fee = submitter.estimate(request).await?;
    debug!(gas = fee.gas_limit, fee = %fee.fee_amount, denom = %fee.fee_denom, "fee estimated");

    advance(TxStep::Posting)?;
    let signed = submitter.post(request, &fee).await?;

    advance(TxStep::Broadcasting)?;
    submitter.broadcast(signed).await
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        failure::FailureKind,
        test_utils::{sample_request, ScriptedSubmitter},
    };

    async fn collect_until_terminal(
        rx: &mut mpsc::UnboundedReceiver<LifecycleUpdate>,
    ) -> Vec<LifecycleUpdate> {
        let mut out = Vec::new();
        loop {
            let upd = tokio::time::timeout(Duration::from_secs(5), rx.recv())
                .await
                .expect("lifecycle stalled")
                .expect("channel closed");
            let done = upd.event.step().is_terminal();
            out.push(upd);
            if done {
                return out;
            }
        }
    }

    #[test]
    fn test_submit_without_runtime() {
        let (mut lc, _rx) = TxLifecycle::new(Arc::new(ScriptedSubmitter::succeeding("0xabc")));
        let res = lc.submit(sample_request(5));
        assert_eq!(res, Err(LifecycleError::NoRuntime));
        assert_eq!(lc.current_step(), TxStep::Ready, "state must be untouched");
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let (mut lc, mut rx) = TxLifecycle::new(Arc::new(ScriptedSubmitter::succeeding("0xabc")));
        lc.submit(sample_request(5)).unwrap();
        assert_eq!(lc.current_step(), TxStep::Estimating);

        let updates = collect_until_terminal(&mut rx).await;
        let steps: Vec<_> = updates.iter().map(|u| u.event.step()).collect();
        assert_eq!(
            steps,
            vec![
                TxStep::Estimating,
                TxStep::Posting,
                TxStep::Broadcasting,
                TxStep::Success
            ]
        );

        let seqs: Vec<_> = updates.iter().map(|u| u.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3, 4]);

        assert_eq!(
            updates.last().unwrap().event,
            LifecycleEvent::Success {
                tx_hash: "0xabc".parse().unwrap()
            }
        );
        assert_eq!(lc.status().tx_hash, Some("0xabc".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_in_progress_labels_in_updates() {
        let (mut lc, mut rx) = TxLifecycle::new(Arc::new(ScriptedSubmitter::succeeding("0xabc")));
        lc.submit(sample_request(1)).unwrap();

        let updates = collect_until_terminal(&mut rx).await;
        let labels: Vec<_> = updates
            .iter()
            .filter_map(|u| match &u.event {
                LifecycleEvent::StepChanged { label, .. } => label.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec!["Estimating Fees", "Waiting for Approval", "Broadcasting"]
        );
    }

    #[tokio::test]
    async fn test_submit_fails_fast_when_busy() {
        let submitter = ScriptedSubmitter::succeeding("0xabc").with_delay(Duration::from_millis(50));
        let (mut lc, mut rx) = TxLifecycle::new(Arc::new(submitter));
        lc.submit(sample_request(5)).unwrap();

        let res = lc.submit(sample_request(7));
        assert_eq!(res, Err(LifecycleError::Busy(TxStep::Estimating)));

        let updates = collect_until_terminal(&mut rx).await;
        assert_eq!(updates.len(), 4, "second submit must not add updates");
    }

    #[tokio::test]
    async fn test_reset_refused_in_flight() {
        let submitter = ScriptedSubmitter::succeeding("0xabc").with_delay(Duration::from_millis(50));
        let (mut lc, mut rx) = TxLifecycle::new(Arc::new(submitter));
        lc.submit(sample_request(5)).unwrap();

        assert_eq!(lc.reset(), Err(LifecycleError::InFlight(TxStep::Estimating)));
        assert_eq!(lc.current_step(), TxStep::Estimating);

        collect_until_terminal(&mut rx).await;
        assert_eq!(lc.current_step(), TxStep::Success);
    }

    #[tokio::test]
    async fn test_failure_then_reset() {
        let submitter = ScriptedSubmitter::failing_at(
            TxStep::Posting,
            TxFailure::new(FailureKind::Rejected, "user denied"),
        );
        let (mut lc, mut rx) = TxLifecycle::new(Arc::new(submitter));
        lc.submit(sample_request(5)).unwrap();

        let updates = collect_until_terminal(&mut rx).await;
        let last = updates.last().unwrap();
        assert!(matches!(
            &last.event,
            LifecycleEvent::Error { failure } if failure.kind == FailureKind::Rejected
        ));
        assert_eq!(lc.current_step(), TxStep::Error);
        assert_eq!(lc.button_label().as_deref(), Some("Rejected"));

        // Resubmitting is refused until reset.
        assert_eq!(
            lc.submit(sample_request(5)),
            Err(LifecycleError::Busy(TxStep::Error))
        );

        lc.reset().unwrap();
        assert_eq!(lc.current_step(), TxStep::Ready);
        assert_eq!(lc.status().failure, None);
        assert_eq!(lc.button_label(), None);

        let upd = rx.recv().await.unwrap();
        assert_eq!(upd.seq, last.seq + 1);
        assert_eq!(
            upd.event,
            LifecycleEvent::StepChanged {
                step: TxStep::Ready,
                label: None
            }
        );
    }

    #[tokio::test]
    async fn test_reset_when_ready_is_noop() {
        let (mut lc, mut rx) = TxLifecycle::new(Arc::new(ScriptedSubmitter::succeeding("0xabc")));
        lc.reset().unwrap();
        assert_eq!(lc.status().seq, 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_seq_keeps_growing_across_attempts() {
        let (mut lc, mut rx) = TxLifecycle::new(Arc::new(ScriptedSubmitter::succeeding("0xabc")));

        lc.submit(sample_request(1)).unwrap();
        let first = collect_until_terminal(&mut rx).await;
        lc.reset().unwrap();
        let reset = rx.recv().await.unwrap();

        lc.submit(sample_request(2)).unwrap();
        let second = collect_until_terminal(&mut rx).await;

        assert!(reset.seq > first.last().unwrap().seq);
        assert!(second.first().unwrap().seq > reset.seq);
    }

    #[tokio::test]
    async fn test_status_subscription_sees_terminal_step() {
        let (mut lc, _rx) = TxLifecycle::new(Arc::new(ScriptedSubmitter::succeeding("0xabc")));
        let mut status = lc.subscribe();
        lc.submit(sample_request(1)).unwrap();

        let st = tokio::time::timeout(
            Duration::from_secs(5),
            status.wait_for(|st| st.step.is_terminal()),
        )
        .await
        .expect("lifecycle stalled")
        .unwrap()
        .clone();
        assert_eq!(st.step, TxStep::Success);
    }
}
