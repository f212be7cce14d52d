use argh::FromArgs;

use self::{config::ConfigArgs, label::LabelArgs, withdraw::WithdrawArgs};

pub mod config;
pub mod label;
pub mod withdraw;

/// A CLI for withdrawing liquidity from vaults
#[derive(FromArgs, PartialEq, Debug)]
pub struct TopLevel {
    #[argh(subcommand)]
    pub cmd: Commands,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub enum Commands {
    Withdraw(WithdrawArgs),
    Label(LabelArgs),
    Config(ConfigArgs),
}
