//! Line-oriented interactive session over the page state machine.

use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{bail, Context};
use portfolio_core::{AboutTab, CategoryFilter, ContactField, Msg};
use site_logging::site_debug;

use crate::app::Session;
use crate::config::SiteConfig;
use crate::site::{render_page, render_text};

pub const HELP: &str = "\
commands:
  go PATH              navigate, e.g. `go /projects/2`
  category KEY         all | web | mobile | fullstack
  search [TEXT]        set the project search (rest of line, untrimmed)
  reset                clear project filters
  set FIELD VALUE      name | email | subject | message
  submit               send the contact form
  another              start a new message after a successful send
  tab KEY              experience | education | skills
  group KEY            skill group on the skills page
  wait                 block until the pending submission settles
  html                 print the current page as HTML
  help                 this text
  quit";

const TICK_INTERVAL: Duration = Duration::from_millis(75);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Dispatch(Msg),
    Wait,
    Html,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> anyhow::Result<BrowseCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };
    let command = match word {
        "go" => BrowseCommand::Dispatch(Msg::Navigate(required(rest, "go PATH")?)),
        "category" => BrowseCommand::Dispatch(Msg::CategorySelected(CategoryFilter::from_label(
            &required(rest, "category KEY")?,
        ))),
        "search" => BrowseCommand::Dispatch(Msg::SearchChanged(rest.to_string())),
        "reset" => BrowseCommand::Dispatch(Msg::ResetFilters),
        "set" => {
            let (key, value) = rest
                .split_once(' ')
                .unwrap_or((rest, ""));
            let field = ContactField::from_key(key.trim())
                .with_context(|| format!("unknown field {key:?}"))?;
            BrowseCommand::Dispatch(Msg::ContactFieldChanged {
                field,
                value: value.to_string(),
            })
        }
        "submit" => BrowseCommand::Dispatch(Msg::ContactSubmitClicked),
        "another" => BrowseCommand::Dispatch(Msg::SendAnotherClicked),
        "tab" => {
            let key = required(rest, "tab KEY")?;
            let tab = AboutTab::from_key(&key).with_context(|| format!("unknown tab {key:?}"))?;
            BrowseCommand::Dispatch(Msg::AboutTabSelected(tab))
        }
        "group" => BrowseCommand::Dispatch(Msg::SkillGroupSelected(required(rest, "group KEY")?)),
        "wait" => BrowseCommand::Wait,
        "html" => BrowseCommand::Html,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" => BrowseCommand::Quit,
        "" => bail!("empty command"),
        other => bail!("unknown command {other:?}; type `help`"),
    };
    Ok(command)
}

fn required(rest: &str, usage: &str) -> anyhow::Result<String> {
    let value = rest.trim();
    if value.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(value.to_string())
}

/// Reads commands from `input` until `quit` or end of input.
pub fn run(
    session: &mut Session,
    config: &SiteConfig,
    input: impl BufRead,
    mut out: impl Write,
) -> anyhow::Result<()> {
    session.spawn_ticker(TICK_INTERVAL);
    writeln!(out, "{}", render_text(&session.view()))?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            if let Some(view) = session.process_pending() {
                writeln!(out, "{}", render_text(&view))?;
            }
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        site_debug!("browse command {:?}", command);

        let mut latest = None;
        match command {
            BrowseCommand::Dispatch(msg) => latest = session.dispatch(msg),
            BrowseCommand::Wait => {
                let timeout = Duration::from_millis(config.contact.request_timeout_ms)
                    + Duration::from_millis(config.contact.simulated_delay_ms);
                if !session.wait_for_submission(timeout) {
                    writeln!(out, "still waiting after {timeout:?}")?;
                }
            }
            BrowseCommand::Html => {
                writeln!(out, "{}", render_page(&session.view(), config))?;
                continue;
            }
            BrowseCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            BrowseCommand::Quit => break,
        }
        if let Some(view) = session.process_pending() {
            latest = Some(view);
        }
        let view = latest.unwrap_or_else(|| session.view());
        writeln!(out, "{}", render_text(&view))?;
    }
    Ok(())
}
