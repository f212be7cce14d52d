use argh::FromArgs;
use console::Term;
use terrors::OneOf;
use vault_primitives::prelude::ConnectionStatus;
use vault_tx_lifecycle::{TxStatus, TxStep};
use vault_withdraw_form::{asset_input::parse_amount, ButtonState};

use crate::{
    errors::{InternalError, UserInputError},
    settings::Settings,
};

/// Prints the withdraw button for a given wallet status, amount and step
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "label")]
pub struct LabelArgs {
    /// wallet status. Options: idle, connecting, connected, disconnected, error
    #[argh(option, default = "String::from(\"connected\")")]
    status: String,

    /// amount entered in the form, blank for none
    #[argh(option, default = "String::new()")]
    amount: String,

    /// lifecycle step. Options: ready, estimating, posting, broadcasting, success, error
    #[argh(option, default = "String::from(\"ready\")")]
    step: String,
}

pub(crate) fn parse_status(s: &str) -> Result<ConnectionStatus, UserInputError> {
    ConnectionStatus::ALL
        .into_iter()
        .find(|st| st.to_string() == s.to_lowercase())
        .ok_or_else(|| UserInputError::UnknownStatus(s.to_owned()))
}

pub(crate) fn parse_step(s: &str) -> Result<TxStep, UserInputError> {
    s.parse::<TxStep>()
        .map_err(|_| UserInputError::UnknownStep(s.to_owned()))
}

pub(crate) fn render(status: ConnectionStatus, amount: &str, step: TxStep, token: &str) -> Result<ButtonState, UserInputError> {
    let amount = parse_amount(amount, token)?;
    let lifecycle = TxStatus {
        step,
        ..Default::default()
    };
    let label = lifecycle.button_label();
    Ok(ButtonState::derive(status, &amount, step, label.as_deref()))
}

pub async fn label(
    args: LabelArgs,
    settings: Settings,
) -> Result<(), OneOf<(InternalError, UserInputError)>> {
    let status = parse_status(&args.status).map_err(OneOf::new)?;
    let step = parse_step(&args.step).map_err(OneOf::new)?;
    let button =
        render(status, &args.amount, step, &settings.default_token).map_err(OneOf::new)?;

    let out = serde_json::to_string_pretty(&button)
        .map_err(|e| OneOf::new(InternalError::Serialize(e.to_string())))?;
    let _ = Term::stdout().write_line(&out);
    Ok(())
}
