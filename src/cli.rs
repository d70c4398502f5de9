//! Command-line host for the style settings.
//!
//! The binary stands in for the CMS: it loads [`Config`], opens the JSON store,
//! and calls the same projector and form a page render or form post would.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use console::Style;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::host::ActivePlugins;
use crate::inject::StyleQueue;
use crate::projector::SettingsProjector;
use crate::setting::StyleSettingKey;
use crate::store::JsonFileStore;
use crate::submit::{FormField, SettingsForm};

/// Notice printed after a successful reset.
pub const RESET_NOTICE: &str = "All FireHawkCRM Style settings have been reset to defaults.";

#[derive(Debug, Parser)]
#[command(name = "fcrm-styles", version, about = "Manage FireHawkCRM Tributes colour settings")]
pub struct Cli {
    /// Config file (defaults to ./fcrm-styles.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Settings store, overriding the config
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the :root custom property block
    Render,
    /// Print the stylesheet link and inline block for the document head
    Head,
    /// Print one setting's value (empty when unset)
    Get { key: StyleSettingKey },
    /// Save settings as KEY=VALUE pairs; an empty VALUE clears the setting
    Set {
        #[arg(required = true, value_parser = parse_assignment)]
        fields: Vec<(String, String)>,
    },
    /// Clear every style setting
    Reset,
    /// List every setting with its label and value
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

struct Session {
    config: Config,
    store: JsonFileStore,
}

impl Session {
    fn open(cli: &Cli, cwd: &Path) -> anyhow::Result<Self> {
        let config = Config::discover(cli.config.as_deref(), cwd)?;
        let path = cli.store.clone().unwrap_or_else(|| config.store.clone());
        let path = if path.is_relative() { cwd.join(path) } else { path };
        let store = JsonFileStore::open(path)?;
        Ok(Self { config, store })
    }

    fn projector(&self) -> SettingsProjector<&ActivePlugins> {
        SettingsProjector::new(&self.config.host)
    }

    fn form(&self) -> SettingsForm<&ActivePlugins> {
        SettingsForm::new(&self.config.host).strict_colors(self.config.strict_colors)
    }
}

/// Runs one command against the store, writing results to `out`.
///
/// Relative config and store paths resolve against `cwd`. When the tributes
/// plugin is inactive nothing is printed and nothing is saved.
pub fn run<W: Write>(cli: Cli, cwd: &Path, out: &mut W) -> anyhow::Result<()> {
    let mut session = Session::open(&cli, cwd)?;

    match cli.command {
        Command::Render => {
            if let Some(css) = session.projector().render(&session.store) {
                writeln!(out, "{}", css)?;
            }
        }
        Command::Head => {
            let mut queue = StyleQueue::new();
            if session
                .projector()
                .inject(&session.store, &mut queue, &session.config.stylesheet)?
            {
                write!(out, "{}", queue.render_head()?)?;
            }
        }
        Command::Get { key } => {
            if let Some(value) = session.projector().field_value(&session.store, key) {
                writeln!(out, "{}", value)?;
            }
        }
        Command::Set { fields } => {
            let form = SettingsForm::new(&session.config.host)
                .strict_colors(session.config.strict_colors);
            let Some(report) = form.submit(&mut session.store, fields) else {
                return Ok(());
            };
            if report.changed() {
                session.store.save()?;
            }
            for name in &report.ignored {
                writeln!(out, "ignored unknown setting '{}'", name)?;
            }
            for rejection in &report.rejected {
                writeln!(out, "{}", rejection)?;
            }
            if !report.rejected.is_empty() {
                bail!("{} value(s) were not valid colours", report.rejected.len());
            }
            if report.changed() {
                writeln!(out, "Settings saved.")?;
            }
        }
        Command::Reset => {
            let projector = SettingsProjector::new(&session.config.host);
            if projector.reset(&mut session.store) {
                session
                    .store
                    .save()
                    .context("settings were reset in memory but could not be saved")?;
                writeln!(out, "{}", RESET_NOTICE)?;
            }
        }
        Command::List { json } => {
            if let Some(fields) = session.form().fields(&session.store) {
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&fields)?)?;
                } else {
                    write!(out, "{}", format_table(&fields))?;
                }
            }
        }
    }
    Ok(())
}

/// Lays out fields as `label  key  value`, with labels padded to one column.
fn format_table(fields: &[FormField]) -> String {
    let label_width = fields.iter().map(|f| f.label.width()).max().unwrap_or(0);
    let key_width = fields.iter().map(|f| f.key.as_str().width()).max().unwrap_or(0);
    let label_style = Style::new().bold();
    let key_style = Style::new().cyan();
    let unset_style = Style::new().dim();

    let mut table = String::new();
    for field in fields {
        let label_pad = " ".repeat(label_width - field.label.width());
        let key_pad = " ".repeat(key_width - field.key.as_str().width());
        let value = if field.value.is_empty() {
            unset_style.apply_to("(default)").to_string()
        } else {
            field.value.clone()
        };
        table.push_str(&format!(
            "{}{}  {}{}  {}\n",
            label_style.apply_to(field.label),
            label_pad,
            key_style.apply_to(field.key),
            key_pad,
            value
        ));
    }
    table
}
