use argh::FromArgs;
use console::{style, Term};
use terrors::OneOf;

use crate::{
    errors::{InternalError, UserInputError},
    settings::Settings,
};

/// Prints the effective settings and where the config file lives
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "config")]
pub struct ConfigArgs {}

pub async fn config(
    _args: ConfigArgs,
    settings: Settings,
) -> Result<(), OneOf<(InternalError, UserInputError)>> {
    let term = Term::stdout();
    let rendered = toml::to_string_pretty(&settings)
        .map_err(|e| OneOf::new(InternalError::Serialize(e.to_string())))?;
    let _ = term.write_line(&format!(
        "# {}",
        style(settings.config_file.to_string_lossy()).dim()
    ));
    let _ = term.write_str(&rendered);
    Ok(())
}
