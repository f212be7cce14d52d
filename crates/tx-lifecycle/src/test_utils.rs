//! Helpers for exercising the lifecycle without a chain.

use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use async_trait::async_trait;
use vault_primitives::prelude::*;

use crate::{
    failure::TxFailure,
    step::TxStep,
    submitter::{FeeEstimate, SignedTx, TxSubmitter},
};

/// Builds a withdraw request for `amount` whole LP tokens.
pub fn sample_request(amount: i64) -> WithdrawRequest {
    WithdrawRequest::new(
        "terra1vault".parse().expect("valid vault addr"),
        "terra1lptoken".parse().expect("valid lp addr"),
        AmountInput::new(amount.into(), "LP"),
    )
}

/// Submitter that follows a fixed script: succeeds with a given hash, or
/// fails while the lifecycle is in a given step.
#[derive(Debug)]
pub struct ScriptedSubmitter {
    tx_hash: TxHash,
    fail_at: Option<(TxStep, TxFailure)>,
    delay: Duration,
    broadcasts: AtomicUsize,
}

impl ScriptedSubmitter {
    pub fn succeeding(tx_hash: &str) -> Self {
        Self {
            tx_hash: tx_hash.parse().expect("valid tx hash"),
            fail_at: None,
            delay: Duration::ZERO,
            broadcasts: AtomicUsize::new(0),
        }
    }

    pub fn failing_at(step: TxStep, failure: TxFailure) -> Self {
        let mut this = Self::succeeding("unused");
        this.fail_at = Some((step, failure));
        this
    }

    /// Sleeps this long in every step.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of broadcasts attempted so far.
    pub fn broadcasts(&self) -> usize {
        self.broadcasts.load(Ordering::SeqCst)
    }

    async fn step(&self, step: TxStep) -> Result<(), TxFailure> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.fail_at {
            Some((at, failure)) if *at == step => Err(failure.clone()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl TxSubmitter for ScriptedSubmitter {
    async fn estimate(&self, _request: &WithdrawRequest) -> Result<FeeEstimate, TxFailure> {
        self.step(TxStep::Estimating).await?;
        Ok(FeeEstimate {
            gas_limit: 200_000,
            fee_amount: 30_000,
            fee_denom: "uluna".to_owned(),
        })
    }

    async fn post(
        &self,
        request: &WithdrawRequest,
        _fee: &FeeEstimate,
    ) -> Result<SignedTx, TxFailure> {
        self.step(TxStep::Posting).await?;
        Ok(SignedTx(request.amount.token_symbol.as_bytes().to_vec()))
    }

    async fn broadcast(&self, _tx: SignedTx) -> Result<TxHash, TxFailure> {
        self.broadcasts.fetch_add(1, Ordering::SeqCst);
        self.step(TxStep::Broadcasting).await?;
        Ok(self.tx_hash.clone())
    }
}
