use crate::config::OutputMode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use steamid::{AccountType, Format, Instance, SteamId, Universe};

/// The fields of a decoded identifier.
#[derive(Debug, Serialize)]
pub struct Fields {
    pub xuid: Option<u32>,
    pub universe: Option<Universe>,
    pub instance: Option<Instance>,
    pub account_type: Option<AccountType>,
}

impl From<&SteamId> for Fields {
    fn from(id: &SteamId) -> Self {
        Self {
            xuid: id.xuid(),
            universe: id.universe(),
            instance: id.instance(),
            account_type: id.account_type(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Rendering {
    Value(String),
    Error { error: String },
}

/// The outcome of converting one input.
#[derive(Debug, Serialize)]
pub struct Report {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Fields>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub renderings: BTreeMap<Format, Rendering>,
}

impl Report {
    /// Decodes `input` as `from` and renders it in every target format.
    pub fn new(input: &str, from: Format, targets: &[Format]) -> Self {
        match SteamId::decode(from, input) {
            Ok(id) => {
                tracing::debug!(input, %id, "decoded");
                let renderings = targets
                    .iter()
                    .map(|&format| {
                        let rendering = match id.render(format) {
                            Ok(value) => Rendering::Value(value),
                            Err(err) => Rendering::Error {
                                error: err.to_string(),
                            },
                        };
                        (format, rendering)
                    })
                    .collect();
                Self {
                    input: input.to_owned(),
                    error: None,
                    fields: Some(Fields::from(&id)),
                    renderings,
                }
            }
            Err(err) => {
                tracing::warn!(input, %err, "could not decode input");
                Self {
                    input: input.to_owned(),
                    error: Some(err.to_string()),
                    fields: None,
                    renderings: BTreeMap::new(),
                }
            }
        }
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

/// Writes every report in the requested mode.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[Report],
    mode: OutputMode,
) -> anyhow::Result<()> {
    for report in reports {
        match mode {
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, report)?;
                writeln!(out)?;
            }
            OutputMode::Text => write_text(out, report)?,
        }
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    if let Some(error) = &report.error {
        return writeln!(out, "{}: {error}", report.input);
    }

    writeln!(out, "{}", report.input)?;
    let width = report
        .renderings
        .keys()
        .map(|format| format.name().len())
        .max()
        .unwrap_or(0);
    for (format, rendering) in &report.renderings {
        let value = match rendering {
            Rendering::Value(value) => value.as_str(),
            Rendering::Error { error } => error.as_str(),
        };
        writeln!(out, "  {:<width$}  {value}", format.name())?;
    }
    Ok(())
}
