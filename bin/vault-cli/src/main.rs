pub mod cmd;
pub mod constants;
pub mod dry_run;
pub mod errors;
pub mod settings;
pub mod term_sink;

use cmd::{config::config, label::label, withdraw::withdraw, Commands, TopLevel};
use settings::Settings;
use vault_common::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let TopLevel { cmd } = argh::from_env();

    let mut lconfig = logging::LoggerConfig::with_base_name("vault-cli");
    if let Some(url) = logging::get_otlp_url_from_env() {
        lconfig.set_otlp_url(url);
    }
    logging::init(lconfig);

    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("{:?}", e);
        std::process::exit(1);
    });

    let res = match cmd {
        Commands::Withdraw(args) => withdraw(args, settings).await,
        Commands::Label(args) => label(args, settings).await,
        Commands::Config(args) => config(args, settings).await,
    };

    logging::finalize();

    if let Err(e) = res {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
