//! Submitter that walks through every step without touching a chain.

use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::*;
use vault_primitives::prelude::{TxHash, WithdrawRequest};
use vault_tx_lifecycle::{FailureKind, FeeEstimate, SignedTx, TxFailure, TxStep, TxSubmitter};

use crate::constants::{DRY_RUN_FEE_AMOUNT, DRY_RUN_FEE_DENOM, DRY_RUN_GAS_LIMIT};

#[derive(Debug)]
pub struct DryRunSubmitter {
    delay: Duration,
    decimals: u32,
    fail_at: Option<TxStep>,
}

impl DryRunSubmitter {
    pub fn new(delay: Duration, decimals: u32, fail_at: Option<TxStep>) -> Self {
        Self {
            delay,
            decimals,
            fail_at,
        }
    }

    async fn pause(&self, step: TxStep) -> Result<(), TxFailure> {
        tokio::time::sleep(self.delay).await;
        if self.fail_at != Some(step) {
            return Ok(());
        }
        let kind = match step {
            TxStep::Estimating => FailureKind::Estimation,
            TxStep::Posting => FailureKind::Rejected,
            TxStep::Broadcasting => FailureKind::Broadcast,
            _ => FailureKind::Other,
        };
        Err(TxFailure::new(kind, format!("dry run: injected failure while {step}")))
    }
}

#[async_trait]
impl TxSubmitter for DryRunSubmitter {
    async fn estimate(&self, request: &WithdrawRequest) -> Result<FeeEstimate, TxFailure> {
        self.pause(TxStep::Estimating).await?;
        let raw = request
            .chain_amount(self.decimals)
            .map_err(|e| TxFailure::new(FailureKind::Estimation, e.to_string()))?;
        if raw == 0 {
            return Err(TxFailure::new(
                FailureKind::Estimation,
                "amount rounds to zero chain units",
            ));
        }
        debug!(%raw, "dry run burn amount");
        Ok(FeeEstimate {
            gas_limit: DRY_RUN_GAS_LIMIT,
            fee_amount: DRY_RUN_FEE_AMOUNT,
            fee_denom: DRY_RUN_FEE_DENOM.to_owned(),
        })
    }

    async fn post(
        &self,
        request: &WithdrawRequest,
        fee: &FeeEstimate,
    ) -> Result<SignedTx, TxFailure> {
        self.pause(TxStep::Posting).await?;
        let body = serde_json::to_vec(&(request, fee))
            .map_err(|e| TxFailure::other(e.to_string()))?;
        Ok(SignedTx(body))
    }

    async fn broadcast(&self, tx: SignedTx) -> Result<TxHash, TxFailure> {
        self.pause(TxStep::Broadcasting).await?;
        let digest = Sha256::digest(&tx.0);
        hex::encode_upper(digest)
            .parse::<TxHash>()
            .map_err(|e| TxFailure::other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use vault_primitives::prelude::AmountInput;

    use super::*;

    fn request(amount: &str) -> WithdrawRequest {
        WithdrawRequest::new(
            "terra1vault".parse().unwrap(),
            "terra1lp".parse().unwrap(),
            AmountInput::new(amount.parse().unwrap(), "LP"),
        )
    }

    async fn run(sub: &DryRunSubmitter, req: &WithdrawRequest) -> Result<TxHash, TxFailure> {
        let fee = sub.estimate(req).await?;
        let signed = sub.post(req, &fee).await?;
        sub.broadcast(signed).await
    }

    #[tokio::test]
    async fn test_hash_is_deterministic() {
        let sub = DryRunSubmitter::new(Duration::ZERO, 6, None);
        let a = run(&sub, &request("5")).await.unwrap();
        let b = run(&sub, &request("5")).await.unwrap();
        let c = run(&sub, &request("6")).await.unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str().len(), 64);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        for (step, kind) in [
            (TxStep::Estimating, FailureKind::Estimation),
            (TxStep::Posting, FailureKind::Rejected),
            (TxStep::Broadcasting, FailureKind::Broadcast),
        ] {
            let sub = DryRunSubmitter::new(Duration::ZERO, 6, Some(step));
            let err = run(&sub, &request("5")).await.unwrap_err();
            assert_eq!(err.kind, kind, "{step}");
        }
    }

    #[tokio::test]
    async fn test_dust_amount_rejected() {
        let sub = DryRunSubmitter::new(Duration::ZERO, 6, None);
        let err = sub.estimate(&request("0.0000001")).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Estimation);
    }
}
