use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fieldstate::{
    DocumentFormat, FieldConfig, FieldPrompt, PolicyConfig, PromptOptions, load_field_config,
    registry,
};

const LOG_ENV: &str = "FIELDSTATE_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "fieldstate",
    version,
    about = "Prompt for one validated value in the terminal"
)]
struct Cli {
    /// Field config: file path or inline JSON/YAML/TOML document
    #[arg(short = 'c', long = "config", value_name = "SOURCE")]
    config: Option<String>,

    /// Validator name; repeat to require several
    #[arg(short = 'v', long = "validate", value_name = "NAME", action = ArgAction::Append)]
    validate: Vec<String>,

    /// Label shown on the input border
    #[arg(short = 'l', long = "label", value_name = "TEXT")]
    label: Option<String>,

    /// Text shown while the input is empty
    #[arg(long = "placeholder", value_name = "TEXT")]
    placeholder: Option<String>,

    /// Initial value
    #[arg(long = "value", value_name = "TEXT")]
    value: Option<String>,

    /// Validate the initial value as soon as the prompt opens
    #[arg(long = "on-start")]
    on_start: bool,

    /// Validate on every keystroke
    #[arg(long = "on-change")]
    on_change: bool,

    /// Validate when the input loses focus
    #[arg(long = "on-blur")]
    on_blur: bool,

    /// Treat unknown validator names as failures
    #[arg(long = "strict")]
    strict: bool,

    /// Mask the typed text
    #[arg(long = "secure")]
    secure: bool,

    /// Accept the value on Enter even when it is invalid
    #[arg(long = "allow-invalid")]
    allow_invalid: bool,

    /// Output destinations ("-" writes to stdout). Accepts multiple values per flag use.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Print the built-in validator names and exit
    #[arg(long = "list-validators")]
    list_validators: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();

    if cli.list_validators {
        for name in registry::shared().names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = build_config(&cli)?;
    debug!(?config, "resolved field config");
    let options = PromptOptions::default().with_allow_invalid(cli.allow_invalid);
    let outcome = FieldPrompt::from_config(&config, options)
        .map_err(|err| eyre!("{err:#}"))?
        .run()
        .map_err(|err| eyre!("{err:#}"))?;

    let payload = serialize(&outcome.to_json(), !cli.no_pretty)?;
    for destination in destinations(&cli.outputs) {
        write_payload(&destination, &payload)?;
    }

    if !outcome.submitted {
        return Err(eyre!("prompt cancelled"));
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Merge the optional config document with the command line flags. Flags
/// win over the document; trigger flags only ever switch triggers on.
fn build_config(cli: &Cli) -> Result<FieldConfig> {
    let mut config = match cli.config.as_deref() {
        Some(source) => load_config(source)?,
        None => FieldConfig::default(),
    };

    if let Some(label) = &cli.label {
        config.label = label.clone();
    }
    if config.label.is_empty() {
        config.label = "Value".to_string();
    }
    if let Some(placeholder) = &cli.placeholder {
        config.placeholder = Some(placeholder.clone());
    }
    if let Some(value) = &cli.value {
        config.value = value.as_str().into();
    }
    if !cli.validate.is_empty() {
        config.validate = match cli.validate.as_slice() {
            [single] => PolicyConfig::One(single.clone()),
            many => PolicyConfig::All(many.to_vec()),
        };
    }
    config.validate_on_start |= cli.on_start;
    config.validate_on_change |= cli.on_change;
    config.validate_on_blur |= cli.on_blur;
    config.strict |= cli.strict;
    config.secure |= cli.secure;
    Ok(config)
}

fn load_config(source: &str) -> Result<FieldConfig> {
    let path = Path::new(source);
    if path.is_file() {
        return load_field_config(path).map_err(|err| eyre!("{err:#}"));
    }
    FieldConfig::parse(source, DocumentFormat::default())
        .map_err(|err| eyre!("failed to parse inline config: {err:#}"))
}

#[derive(Debug, Clone, PartialEq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

fn destinations(outputs: &[String]) -> Vec<Destination> {
    if outputs.is_empty() {
        return vec![Destination::Stdout];
    }
    outputs
        .iter()
        .map(|raw| {
            if raw == "-" {
                Destination::Stdout
            } else {
                Destination::File(PathBuf::from(raw))
            }
        })
        .collect()
}

fn serialize(value: &Value, pretty: bool) -> Result<String> {
    let payload = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    payload.wrap_err("failed to serialize JSON")
}

fn write_payload(destination: &Destination, payload: &str) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{payload}").wrap_err("failed to write to stdout")?;
            stdout.flush().wrap_err("failed to flush stdout")
        }
        Destination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
            }
            let mut file = File::create(path)
                .wrap_err_with(|| format!("failed to write to file {}", path.display()))?;
            writeln!(file, "{payload}")?;
            file.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("fieldstate").chain(args.iter().copied()))
    }

    #[test]
    fn flags_override_inline_config() {
        let cli = parse(&[
            "--config",
            r#"{"label": "Email", "validate": "email", "validate_on_blur": true}"#,
            "--label",
            "Work email",
            "-v",
            "required",
            "-v",
            "email",
            "--on-change",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.label, "Work email");
        assert_eq!(
            config.validate,
            PolicyConfig::All(vec!["required".to_string(), "email".to_string()])
        );
        assert!(config.validate_on_blur);
        assert!(config.validate_on_change);
        assert!(!config.validate_on_start);
    }

    #[test]
    fn defaults_to_a_labelled_field_without_validators() {
        let config = build_config(&parse(&["--value", "x"])).unwrap();
        assert_eq!(config.label, "Value");
        assert_eq!(config.value.as_str(), Some("x"));
        assert_eq!(config.validate, PolicyConfig::default());
    }

    #[test]
    fn rejects_unparseable_inline_config() {
        assert!(build_config(&parse(&["--config", "{ nope"])).is_err());
    }

    #[test]
    fn dash_means_stdout() {
        assert_eq!(destinations(&[]), vec![Destination::Stdout]);
        assert_eq!(
            destinations(&["-".to_string(), "out.json".to_string()]),
            vec![Destination::Stdout, Destination::File(PathBuf::from("out.json"))]
        );
    }
}
