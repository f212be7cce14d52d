use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vault_primitives::prelude::{TxHash, WithdrawRequest};

use crate::failure::TxFailure;

/// Result of simulating the withdraw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEstimate {
    pub gas_limit: u64,
    pub fee_amount: u128,
    pub fee_denom: String,
}

/// Signed transaction ready to be broadcast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTx(pub Vec<u8>);

/// Builds, signs and broadcasts the withdraw transaction.
///
/// Each call maps to one [`TxStep`](crate::TxStep) of the lifecycle:
/// `estimate` runs while estimating, `post` while posting to the wallet and
/// `broadcast` while broadcasting.
#[async_trait]
pub trait TxSubmitter: Send + Sync + 'static {
    async fn estimate(&self, request: &WithdrawRequest) -> Result<FeeEstimate, TxFailure>;

    async fn post(
        &self,
        request: &WithdrawRequest,
        fee: &FeeEstimate,
    ) -> Result<SignedTx, TxFailure>;

    async fn broadcast(&self, tx: SignedTx) -> Result<TxHash, TxFailure>;
}
