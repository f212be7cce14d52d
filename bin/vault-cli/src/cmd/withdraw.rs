use std::{str::FromStr, sync::Arc, time::Duration};

use argh::FromArgs;
use console::Term;
use indicatif::ProgressBar;
use terrors::OneOf;
use tracing::*;
use vault_primitives::prelude::*;
use vault_status::WalletChannel;
use vault_tx_lifecycle::TxLifecycle;
use vault_withdraw_form::{
    asset_input::{check_within_balance, parse_amount},
    pretty_tx_hash, FormConfig, WithdrawError, WithdrawFormController,
};

use super::label::parse_step;
use crate::{
    dry_run::DryRunSubmitter,
    errors::{InternalError, UserInputError},
    settings::Settings,
    term_sink::TermSink,
};

/// Withdraw LP tokens from a vault (dry run, nothing is sent on chain)
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "withdraw")]
pub struct WithdrawArgs {
    /// amount of LP tokens to withdraw, in display units
    #[argh(positional)]
    amount: String,

    /// vault contract address. defaults to the configured one
    #[argh(option)]
    vault: Option<String>,

    /// LP token contract address. defaults to the configured one
    #[argh(option)]
    lp_token: Option<String>,

    /// LP balance in chain units, amounts above it are refused
    #[argh(option)]
    balance: Option<u128>,

    /// make the dry run fail in this step. Options: estimating, posting, broadcasting
    #[argh(option)]
    fail_at: Option<String>,
}

fn resolve_addr(
    arg: Option<String>,
    configured: Option<ContractAddr>,
    missing: UserInputError,
) -> Result<ContractAddr, UserInputError> {
    match arg {
        Some(a) => ContractAddr::from_str(&a).map_err(UserInputError::InvalidAddress),
        None => configured.ok_or(missing),
    }
}

pub async fn withdraw(
    args: WithdrawArgs,
    settings: Settings,
) -> Result<(), OneOf<(InternalError, UserInputError)>> {
    let vault_address = resolve_addr(
        args.vault,
        settings.vault_address.clone(),
        UserInputError::MissingVault,
    )
    .map_err(OneOf::new)?;
    let lp_token = resolve_addr(
        args.lp_token,
        settings.lp_token.clone(),
        UserInputError::MissingLpToken,
    )
    .map_err(OneOf::new)?;
    let fail_at = args
        .fail_at
        .as_deref()
        .map(parse_step)
        .transpose()
        .map_err(OneOf::new)?;

    let amount = parse_amount(&args.amount, &settings.default_token)
        .map_err(|e| OneOf::new(UserInputError::from(e)))?;
    if let Some(balance) = args.balance {
        check_within_balance(&amount, balance, settings.decimals)
            .map_err(|e| OneOf::new(UserInputError::from(e)))?;
    }

    let submitter = DryRunSubmitter::new(
        Duration::from_millis(settings.step_delay_ms),
        settings.decimals,
        fail_at,
    );
    let (lifecycle, mut updates) = TxLifecycle::new(Arc::new(submitter));
    let wallet = WalletChannel::new(WalletState::connected(
        settings.chain_id.clone(),
        settings.wallet_address.clone(),
    ));

    let term = Term::stdout();
    let config = FormConfig {
        vault_address,
        lp_token,
        default_token: settings.default_token.clone(),
        balance: args.balance,
        decimals: settings.decimals,
        explorer_domain: settings.explorer_domain.clone(),
    };
    let mut form = WithdrawFormController::new(
        config,
        wallet.get_wallet_state(),
        lifecycle,
        TermSink::new(term.clone()),
        || debug!("refetching balances"),
    );

    form.set_amount(amount);
    let _ = term.write_line(&format!(
        "Withdrawing {} {} from {}",
        form.amount().amount,
        form.amount().token_symbol,
        form.config().vault_address
    ));
    if let Some(balance) = form.display_balance() {
        let _ = term.write_line(&format!(
            "Balance: {} {}",
            balance,
            form.amount().token_symbol
        ));
    }

    form.submit().map_err(|e| match e {
        e @ (WithdrawError::NotConnected
        | WithdrawError::ZeroAmount
        | WithdrawError::LifecycleBusy(_)) => OneOf::new(UserInputError::Rejected(e)),
        e => OneOf::new(InternalError::Withdraw(e)),
    })?;

    let pb = ProgressBar::new_spinner().with_message(form.button().label);
    pb.enable_steady_tick(Duration::from_millis(100));
    let res = form
        .run_until_settled(&mut updates, |button| pb.set_message(button.label.clone()))
        .await;

    match res {
        Ok(tx_hash) => {
            pb.finish_with_message("Withdraw successful");
            let _ = term.write_line(&pretty_tx_hash(
                &tx_hash,
                &settings.chain_id,
                Some(&settings.explorer_domain),
            ));
            Ok(())
        }
        Err(e) => {
            pb.abandon_with_message(form.button().label);
            if let Err(ack) = form.acknowledge_failure() {
                warn!(%ack, "could not reset lifecycle after failure");
            }
            Err(OneOf::new(InternalError::Withdraw(e)))
        }
    }
}
