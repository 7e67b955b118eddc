use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use steamid::Format;
use tracing_subscriber::EnvFilter;

/// How results are written to stdout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One block per input, one line per format.
    Text,
    /// One JSON document per input, one per line.
    Json,
}

/// Command-line configuration for the `steamid` binary.
///
/// Every option can also be set through an environment variable or a
/// `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "steamid",
    version,
    about = "Convert Steam account identifiers between notations"
)]
pub struct CliArgs {
    /// Identifiers to convert, in any supported notation.
    ///
    /// Example: `STEAM_1:1:0`, `[U:1:1]`, `76561197960265729`, `AJJJS-ABAA`
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Notation the inputs are written in.
    ///
    /// One of `any`, `xuid`, `id64`, `id2`, `id3`, `invite`, `friend`,
    /// `profile-url`, `user-url`, `url`. `any` tries each notation in a fixed
    /// order.
    ///
    /// Environment variable: `STEAMID_FORMAT`
    #[arg(long, env = "STEAMID_FORMAT", default_value_t = String::from("any"))]
    pub from: String,

    /// Notation to print. Prints every notation when unset or `any`.
    ///
    /// Environment variable: `STEAMID_TO`
    #[arg(long, env = "STEAMID_TO")]
    pub to: Option<String>,

    /// Output mode.
    ///
    /// Environment variable: `STEAMID_OUTPUT`
    #[arg(long, env = "STEAMID_OUTPUT", value_enum, default_value_t = OutputMode::Text)]
    pub output: OutputMode,

    /// Log filter used when `RUST_LOG` is unset, e.g. `debug` or
    /// `steamid=trace`.
    ///
    /// Environment variable: `STEAMID_LOG`
    #[arg(long, env = "STEAMID_LOG", default_value_t = String::from("warn"))]
    pub log: String,
}

/// Formats printed when no single target is requested.
pub const ALL_TARGETS: [Format; 7] = [
    Format::Steam64,
    Format::Steam2,
    Format::Steam3,
    Format::InviteCode,
    Format::FriendCode,
    Format::ProfileUrl,
    Format::UserUrl,
];

#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<String>,
    pub from: Format,
    pub targets: Vec<Format>,
    pub output: OutputMode,
    pub log: String,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let inputs: Vec<String> = args
            .inputs
            .into_iter()
            .map(|input| input.trim().to_owned())
            .filter(|input| !input.is_empty())
            .collect();
        if inputs.is_empty() {
            bail!("at least one non-empty input is required");
        }

        let from: Format = args
            .from
            .parse()
            .with_context(|| format!("invalid STEAMID_FORMAT `{}`", args.from))?;

        let targets = match args.to.as_deref().map(str::parse::<Format>).transpose() {
            Ok(None | Some(Format::Any)) => ALL_TARGETS.to_vec(),
            Ok(Some(Format::Url)) => vec![Format::ProfileUrl],
            Ok(Some(format)) => vec![format],
            Err(err) => bail!("invalid STEAMID_TO: {err}"),
        };

        if EnvFilter::try_new(&args.log).is_err() {
            bail!("invalid STEAMID_LOG filter `{}`", args.log);
        }

        Ok(Self {
            inputs,
            from,
            targets,
            output: args.output,
            log: args.log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Config> {
        let args = CliArgs::try_parse_from(std::iter::once("steamid").chain(args.iter().copied()))?;
        Config::try_from(args)
    }

    #[test]
    fn defaults() {
        let config = parse(&["[U:1:1]"]).unwrap();
        assert_eq!(config.inputs, vec!["[U:1:1]"]);
        assert_eq!(config.from, Format::Any);
        assert_eq!(config.targets, ALL_TARGETS.to_vec());
        assert_eq!(config.output, OutputMode::Text);
        assert_eq!(config.log, "warn");
    }

    #[test]
    fn explicit_formats() {
        let config = parse(&[
            "--from",
            "id2",
            "--to",
            "friend",
            "--output",
            "json",
            "STEAM_1:1:0",
        ])
        .unwrap();
        assert_eq!(config.from, Format::Steam2);
        assert_eq!(config.targets, vec![Format::FriendCode]);
        assert_eq!(config.output, OutputMode::Json);
    }

    #[test]
    fn url_target_is_the_profile_url() {
        let config = parse(&["--to", "url", "c"]).unwrap();
        assert_eq!(config.targets, vec![Format::ProfileUrl]);
    }

    #[test]
    fn rejects_blank_inputs() {
        assert!(parse(&["   "]).is_err());
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn rejects_unknown_formats() {
        assert!(parse(&["--from", "steam4", "c"]).is_err());
        assert!(parse(&["--to", "steam4", "c"]).is_err());
    }
}
