use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::*;
use vault_primitives::{amount::from_chain_amount, prelude::*};
use vault_tx_lifecycle::{
    LifecycleEvent, LifecycleUpdate, TransactionLifecycle, TxFailure, TxStep,
};

use crate::{
    button::ButtonState,
    errors::{WithdrawError, WithdrawResult},
    notify::{Notification, NotificationSink},
};

/// Static inputs of a withdraw form, one per vault position.
#[derive(Clone, Debug)]
pub struct FormConfig {
    pub vault_address: ContractAddr,
    pub lp_token: ContractAddr,
    /// Symbol the amount input starts with.
    pub default_token: String,
    /// LP balance in chain units, if known.
    pub balance: Option<u128>,
    pub decimals: u32,
    /// Explorer domain used for the Finder link in notifications.
    pub explorer_domain: String,
}

/// Mediates between the amount input and the transaction lifecycle.
///
/// Everything runs on the caller's thread: user actions come in through
/// [`set_amount`](Self::set_amount) and [`submit`](Self::submit), lifecycle
/// progress through [`handle_update`](Self::handle_update). The button is
/// derived from the observed state on demand.
pub struct WithdrawFormController<L, N, R> {
    config: FormConfig,
    wallet: WalletState,
    amount: AmountInput,

    lifecycle: L,
    sink: N,
    refetch: R,

    observed_step: TxStep,
    observed_label: Option<String>,
    last_seq: u64,
    last_failure: Option<TxFailure>,
    last_tx_hash: Option<TxHash>,
}

impl<L, N, R> WithdrawFormController<L, N, R>
where
    L: TransactionLifecycle,
    N: NotificationSink,
    R: FnMut(),
{
    pub fn new(config: FormConfig, wallet: WalletState, lifecycle: L, sink: N, refetch: R) -> Self {
        let amount = AmountInput::empty(config.default_token.clone());
        let mut this = Self {
            config,
            wallet,
            amount,
            lifecycle,
            sink,
            refetch,
            observed_step: TxStep::Ready,
            observed_label: None,
            last_seq: 0,
            last_failure: None,
            last_tx_hash: None,
        };
        this.sync_from_lifecycle();
        this
    }

    // Inputs

    /// Replaces the amount input. Sanitising is up to the asset input.
    pub fn set_amount(&mut self, value: AmountInput) {
        trace!(amount = %value.amount, token = %value.token_symbol, "amount changed");
        self.amount = value;
    }

    /// Takes a new snapshot of the wallet store.
    pub fn set_wallet_state(&mut self, wallet: WalletState) {
        if wallet.status != self.wallet.status {
            debug!(status = %wallet.status, chain = %wallet.chain_id, "wallet status changed");
        }
        self.wallet = wallet;
    }

    // Derived state

    pub fn button(&self) -> ButtonState {
        ButtonState::derive(
            self.wallet.status,
            &self.amount,
            self.observed_step,
            self.observed_label.as_deref(),
        )
    }

    pub fn amount(&self) -> &AmountInput {
        &self.amount
    }

    pub fn wallet_state(&self) -> &WalletState {
        &self.wallet
    }

    pub fn observed_step(&self) -> TxStep {
        self.observed_step
    }

    pub fn last_failure(&self) -> Option<&TxFailure> {
        self.last_failure.as_ref()
    }

    pub fn last_tx_hash(&self) -> Option<&TxHash> {
        self.last_tx_hash.as_ref()
    }

    /// Balance in display units, for the asset input.
    pub fn display_balance(&self) -> Option<Decimal> {
        self.config
            .balance
            .and_then(|b| from_chain_amount(b, self.config.decimals).ok())
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut L {
        &mut self.lifecycle
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    // Actions

    /// Forwards the current amount to the lifecycle.
    ///
    /// Does nothing unless the button is enabled, the returned error says why.
    pub fn submit(&mut self) -> WithdrawResult<()> {
        if !self.wallet.status.is_connected() {
            return Err(WithdrawError::NotConnected);
        }
        if self.amount.is_empty() {
            return Err(WithdrawError::ZeroAmount);
        }
        if self.observed_step != TxStep::Ready {
            debug!(step = %self.observed_step, "submit ignored, lifecycle busy");
            return Err(WithdrawError::LifecycleBusy(self.observed_step));
        }

        let request = WithdrawRequest::new(
            self.config.vault_address.clone(),
            self.config.lp_token.clone(),
            self.amount.clone(),
        );
        info!(vault = %request.vault_address, amount = %request.amount.amount, "forwarding withdraw");
        self.lifecycle.submit(request)?;

        self.last_failure = None;
        self.sync_from_lifecycle();
        Ok(())
    }

    /// Applies one lifecycle update.
    ///
    /// Returns `false` if the update was older than what we already observed
    /// and got dropped.
    pub fn handle_update(&mut self, update: LifecycleUpdate) -> WithdrawResult<bool> {
        if update.seq <= self.last_seq {
            trace!(seq = update.seq, last = self.last_seq, "dropping stale lifecycle update");
            return Ok(false);
        }
        self.last_seq = update.seq;

        match update.event {
            LifecycleEvent::StepChanged { step, label } => {
                debug!(%step, "lifecycle step");
                self.observed_step = step;
                self.observed_label = label;
            }
            LifecycleEvent::Success { tx_hash } => {
                self.observed_step = TxStep::Success;
                self.observed_label = None;
                self.on_lifecycle_success(tx_hash)?;
            }
            LifecycleEvent::Error { failure } => {
                warn!(%failure, "withdraw failed, keeping amount");
                self.observed_step = TxStep::Error;
                self.observed_label = Some(failure.button_label().to_owned());
                self.last_failure = Some(failure);
            }
        }
        Ok(true)
    }

    /// Wraps up a confirmed withdraw.
    ///
    /// Refetches balances, notifies, clears the amount and resets the
    /// lifecycle, in that order.
    pub fn on_lifecycle_success(&mut self, tx_hash: TxHash) -> WithdrawResult<()> {
        info!(%tx_hash, chain = %self.wallet.chain_id, "withdraw succeeded");

        (self.refetch)();
        self.sink.notify(Notification::withdraw_success(
            &tx_hash,
            &self.wallet.chain_id,
            &self.config.explorer_domain,
        ));
        self.amount = self.amount.cleared();
        self.last_tx_hash = Some(tx_hash);

        self.lifecycle.reset()?;
        self.sync_from_lifecycle();
        Ok(())
    }

    /// Leaves a terminal step so the user can retry with the same amount.
    ///
    /// Also covers a lifecycle that was already in `Success` when handed to
    /// the form, since no update will ever arrive to move it on.
    pub fn acknowledge_failure(&mut self) -> WithdrawResult<()> {
        if !self.observed_step.is_terminal() {
            return Ok(());
        }

        self.lifecycle.reset()?;
        self.last_failure = None;
        self.sync_from_lifecycle();
        Ok(())
    }

    /// Applies updates until the current submission settles.
    ///
    /// `on_change` sees the button after every applied update.
    pub async fn run_until_settled(
        &mut self,
        updates: &mut mpsc::UnboundedReceiver<LifecycleUpdate>,
        mut on_change: impl FnMut(&ButtonState),
    ) -> WithdrawResult<TxHash> {
        loop {
            let update = updates.recv().await.ok_or(WithdrawError::UpdatesClosed)?;
            let event = update.event.clone();
            if !self.handle_update(update)? {
                continue;
            }
            on_change(&self.button());

            match event {
                LifecycleEvent::Success { tx_hash } => return Ok(tx_hash),
                LifecycleEvent::Error { failure } => {
                    return Err(WithdrawError::LifecycleFailure(failure))
                }
                LifecycleEvent::StepChanged { .. } => {}
            }
        }
    }

    /// Catches up with the lifecycle's own view.
    ///
    /// The seq is read before the step, so a racing update can at worst be
    /// applied twice, never skipped.
    fn sync_from_lifecycle(&mut self) {
        let seq = self.lifecycle.seq();
        self.observed_step = self.lifecycle.current_step();
        self.observed_label = self.lifecycle.button_label();
        self.last_seq = self.last_seq.max(seq);
    }
}
