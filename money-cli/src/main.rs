//! Money CLI
//!
//! Command-line interface for currency amounts: construction, arithmetic,
//! comparison and currency conversion against a populated registry.

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use money_types::{Amount, Currency, CurrencyRegistry};

use config::Config;

#[derive(Parser)]
#[command(name = "money")]
#[command(author, version, about = "Currency amount calculator", long_about = None)]
struct Cli {
    /// Currency list source: `builtin`, `online`, or a path to an ISO-4217 XML file
    #[arg(long, env = "MONEY_CURRENCY_SOURCE", default_value = "builtin")]
    source: String,

    /// URL of the ISO-4217 XML list used by the `online` source
    #[arg(long, env = "MONEY_ISO4217_URL", default_value = iso4217::DEFAULT_ISO4217_URL)]
    iso4217_url: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered currencies
    Currencies,
    /// Create an amount and print its canonical form
    #[command(allow_negative_numbers = true)]
    Show {
        /// Currency code
        code: String,
        /// Value in the basic unit (e.g. 1.50), or minor units with --minor
        value: String,
        /// Interpret VALUE as an integer count of minor units
        #[arg(long)]
        minor: bool,
    },
    /// Add two amounts
    #[command(allow_negative_numbers = true)]
    Add { code: String, a: String, b: String },
    /// Subtract B from A
    #[command(allow_negative_numbers = true)]
    Sub { code: String, a: String, b: String },
    /// Multiply an amount by a factor
    #[command(allow_negative_numbers = true)]
    Mul {
        code: String,
        value: String,
        factor: f64,
    },
    /// Divide an amount by a factor
    #[command(allow_negative_numbers = true)]
    Div {
        code: String,
        value: String,
        factor: f64,
    },
    /// Convert an amount into another currency
    #[command(allow_negative_numbers = true)]
    Convert {
        code: String,
        value: String,
        /// Target currency code
        target: String,
        /// Target units per basic unit of CODE
        #[arg(long)]
        rate: f64,
    },
    /// Compare two amounts
    #[command(allow_negative_numbers = true)]
    Compare { code: String, a: String, b: String },
}

/// Result of one command, ready for printing.
#[derive(Debug)]
enum Output {
    Amount(Amount),
    Currencies(Vec<Currency>),
    Comparison { greater: bool, equal: bool },
}

impl Output {
    fn render(&self, json: bool) -> Result<String> {
        let rendered = match (self, json) {
            (Output::Amount(amount), false) => amount.to_string(),
            (Output::Amount(amount), true) => serde_json::to_string_pretty(amount)?,
            (Output::Currencies(currencies), false) => currencies
                .iter()
                .map(|c| format!("{} {}", c.code(), c.minor_unit_digits()))
                .collect::<Vec<_>>()
                .join("\n"),
            (Output::Currencies(currencies), true) => serde_json::to_string_pretty(currencies)?,
            (Output::Comparison { greater, equal }, false) => {
                let symbol = match (greater, equal) {
                    (true, _) => ">",
                    (false, true) => "=",
                    (false, false) => "<",
                };
                symbol.to_string()
            }
            (Output::Comparison { greater, equal }, true) => {
                serde_json::json!({ "greater": greater, "equal": equal }).to_string()
            }
        };
        Ok(rendered)
    }
}

fn amount(registry: &CurrencyRegistry, code: &str, value: &str) -> Result<Amount> {
    Ok(registry.amount_from_basic_unit(code, value)?)
}

fn execute(registry: &CurrencyRegistry, command: Commands) -> Result<Output> {
    let output = match command {
        Commands::Currencies => Output::Currencies(registry.currencies()),
        Commands::Show { code, value, minor } => {
            if minor {
                let minor_units: i64 = value
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid minor unit value: {}", value))?;
                Output::Amount(registry.amount_from_minor_unit(&code, minor_units)?)
            } else {
                Output::Amount(amount(registry, &code, &value)?)
            }
        }
        Commands::Add { code, a, b } => {
            let a = amount(registry, &code, &a)?;
            let b = amount(registry, &code, &b)?;
            Output::Amount(a.add(&b)?)
        }
        Commands::Sub { code, a, b } => {
            let a = amount(registry, &code, &a)?;
            let b = amount(registry, &code, &b)?;
            Output::Amount(a.subtract(&b)?)
        }
        Commands::Mul {
            code,
            value,
            factor,
        } => Output::Amount(amount(registry, &code, &value)?.multiply(factor)?),
        Commands::Div {
            code,
            value,
            factor,
        } => Output::Amount(amount(registry, &code, &value)?.divide(factor)?),
        Commands::Convert {
            code,
            value,
            target,
            rate,
        } => Output::Amount(
            amount(registry, &code, &value)?.convert_currency(registry, &target, rate)?,
        ),
        Commands::Compare { code, a, b } => {
            let a = amount(registry, &code, &a)?;
            let b = amount(registry, &code, &b)?;
            Output::Comparison {
                greater: a.greater_than(&b)?,
                equal: a.equals(&b),
            }
        }
    };
    Ok(output)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config::new(&cli.source, cli.iso4217_url)?;

    let registry = CurrencyRegistry::new();
    let source = config.currency_source();
    let added = registry.populate_once(source.as_ref()).await?;
    tracing::info!("Loaded {} currencies from {}", added, source.name());

    let output = execute(&registry, cli.command)?;
    println!("{}", output.render(cli.json)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CurrencyRegistry {
        let registry = CurrencyRegistry::new();
        registry.register_entries(iso4217::BuiltinSource::entries());
        registry
    }

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("money").chain(args.iter().copied()))?;
        execute(&registry(), cli.command)?.render(cli.json)
    }

    #[test]
    fn test_source_flags() {
        let cli = Cli::try_parse_from(["money", "--source", "online", "currencies"]).unwrap();
        assert_eq!(cli.source, "online");

        let cli = Cli::try_parse_from([
            "money",
            "--iso4217-url",
            "http://localhost:8080/list.xml",
            "--source",
            "./list-one.xml",
            "currencies",
        ])
        .unwrap();
        let config = Config::new(&cli.source, cli.iso4217_url).unwrap();
        assert_eq!(config.iso4217_url, "http://localhost:8080/list.xml");
        assert_eq!(config.currency_source().name(), "file:./list-one.xml");
    }

    #[test]
    fn test_source_defaults() {
        if std::env::var_os("MONEY_CURRENCY_SOURCE").is_some()
            || std::env::var_os("MONEY_ISO4217_URL").is_some()
        {
            return;
        }
        let cli = Cli::try_parse_from(["money", "currencies"]).unwrap();
        assert_eq!(cli.source, "builtin");
        assert_eq!(cli.iso4217_url, iso4217::DEFAULT_ISO4217_URL);
    }

    #[test]
    fn test_show() {
        assert_eq!(run(&["show", "usd", "2"]).unwrap(), "USD 2.00");
        assert_eq!(run(&["show", "USD", "-1", "--minor"]).unwrap(), "USD -0.01");
        assert_eq!(run(&["show", "JPY", "100"]).unwrap(), "JPY 100");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(run(&["add", "USD", "1.567", "0.43"]).unwrap(), "USD 2.00");
        assert_eq!(run(&["sub", "USD", "2", "1.567"]).unwrap(), "USD 0.43");
        assert_eq!(run(&["mul", "USD", "2", "0.436"]).unwrap(), "USD 0.87");
        assert_eq!(run(&["div", "USD", "2", "0.436"]).unwrap(), "USD 4.59");
        assert_eq!(run(&["sub", "USD", "1", "2.5"]).unwrap(), "USD -1.50");
    }

    #[test]
    fn test_convert() {
        assert_eq!(
            run(&["convert", "USD", "2", "CNY", "--rate", "6.789"]).unwrap(),
            "CNY 13.58"
        );
        assert_eq!(
            run(&["convert", "USD", "2", "usd", "--rate", "0"]).unwrap(),
            "USD 2.00"
        );
        assert!(run(&["convert", "USD", "2", "CNY", "--rate", "0"]).is_err());
    }

    #[test]
    fn test_compare() {
        assert_eq!(run(&["compare", "USD", "2.01", "2"]).unwrap(), ">");
        assert_eq!(run(&["compare", "USD", "2", "2.001"]).unwrap(), "=");
        assert_eq!(run(&["compare", "USD", "1", "2"]).unwrap(), "<");
    }

    #[test]
    fn test_errors() {
        assert!(run(&["show", "XYZ", "1"]).is_err());
        assert!(run(&["show", "US", "1"]).is_err());
        assert!(run(&["show", "USD", "one"]).is_err());
        assert!(run(&["show", "USD", "1.5", "--minor"]).is_err());
        assert!(run(&["div", "USD", "1", "0"]).is_err());
    }

    #[test]
    fn test_json_output() {
        let json: serde_json::Value =
            serde_json::from_str(&run(&["show", "USD", "12.5", "--json"]).unwrap()).unwrap();
        assert_eq!(json["value"], "12.50");
        assert_eq!(json["minor_units"], 1250);
        assert_eq!(json["currency"]["code"], "USD");
    }

    #[test]
    fn test_currencies_listing() {
        let listing = run(&["currencies"]).unwrap();
        assert!(listing.lines().any(|l| l == "JPY 0"));
        assert!(listing.lines().any(|l| l == "USD 2"));
    }
}
