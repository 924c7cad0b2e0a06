use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use portfolio_app::app::Session;
use portfolio_app::browse;
use portfolio_app::config::{self, SiteConfig, CONFIG_FILENAME};
use portfolio_app::effects::EffectRunner;
use portfolio_app::logging::{self, LogDestination};
use portfolio_app::site::{render_page, render_site, render_text, settled_view};
use portfolio_core::{Catalog, CategoryFilter, ContactField, ContactPhase, Msg, ProjectQuery};
use portfolio_engine::{write_site, SiteOptions};
use site_logging::{site_error, site_info, EXPORT_TARGET};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Build and browse a personal portfolio site")]
struct Cli {
    /// Site configuration file
    #[arg(long, value_name = "FILE", default_value = CONFIG_FILENAME, global = true)]
    config: PathBuf,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal, global = true)]
    log: LogDestination,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into a static site
    Build {
        /// Output directory (overrides the config)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// List projects through the category and search filter
    Projects {
        /// all, web, mobile or fullstack
        #[arg(long, default_value = "all")]
        category: String,
        /// Case-insensitive search over title, description and technologies
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Print one page
    Show {
        /// Site path, e.g. /projects/2
        #[arg(value_name = "PATH")]
        path: String,
        /// Print HTML instead of text
        #[arg(long)]
        html: bool,
    },
    /// Fill in and send the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
        /// Form endpoint (overrides the config)
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
        /// Give up waiting after this many seconds
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
    },
    /// Interactive session on stdin
    Browse,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);

    run(cli).inspect_err(|err| site_error!("{:#}", err))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::load_config(&cli.config);
    let catalog = config::load_catalog(&config)?;

    match cli.command {
        Command::Build { out } => {
            if let Some(out) = out {
                config.output_dir = out;
            }
            let pages = render_site(&catalog, &config);
            let options = SiteOptions {
                generated_utc: Arc::new(|| chrono::Utc::now().to_rfc3339()),
                ..SiteOptions::default()
            };
            let summary = write_site(&config.output_dir, &pages, &options)
                .with_context(|| format!("writing site to {}", config.output_dir.display()))?;
            site_info!(
                target: EXPORT_TARGET,
                "Wrote {} pages ({} bytes) to {:?}",
                summary.page_count,
                summary.total_bytes,
                config.output_dir
            );
            println!(
                "Built {} pages into {}",
                summary.page_count,
                config.output_dir.display()
            );
        }
        Command::Projects { category, search } => {
            let query = ProjectQuery::new(CategoryFilter::from_label(&category), search);
            let matches = query.apply(&catalog);
            for project in &matches {
                println!(
                    "{:>3}  {:<24} {:<16} {}",
                    project.id,
                    project.title,
                    project.category.label(),
                    project.technologies.join(", ")
                );
            }
            println!(
                "Showing {} {}",
                matches.len(),
                if matches.len() == 1 { "project" } else { "projects" }
            );
        }
        Command::Show { path, html } => {
            let view = settled_view(&catalog, &path);
            if html {
                println!("{}", render_page(&view, &config));
            } else {
                print!("{}", render_text(&view));
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
            endpoint,
            timeout_secs,
        } => {
            if endpoint.is_some() {
                config.contact.endpoint = endpoint;
            }
            send_contact(&config, catalog, [name, email, subject, message], timeout_secs)?;
        }
        Command::Browse => {
            let runner = EffectRunner::new(&config.contact.submit_settings())
                .context("starting submission engine")?;
            let mut session = Session::new(catalog, runner);
            let stdin = io::stdin();
            browse::run(&mut session, &config, stdin.lock(), io::stdout())?;
        }
    }
    Ok(())
}

fn send_contact(
    config: &SiteConfig,
    catalog: Catalog,
    values: [String; 4],
    timeout_secs: u64,
) -> anyhow::Result<()> {
    let runner = EffectRunner::new(&config.contact.submit_settings())
        .context("starting submission engine")?;
    let mut session = Session::new(catalog, runner);
    session.dispatch(Msg::Navigate("/contact".to_string()));
    for (field, value) in ContactField::ALL.into_iter().zip(values) {
        session.dispatch(Msg::ContactFieldChanged { field, value });
    }
    session.dispatch(Msg::ContactSubmitClicked);

    let contact = session.state().contact();
    if !contact.missing().is_empty() {
        let names: Vec<&str> = contact.missing().iter().map(|f| f.key()).collect();
        bail!("required fields are empty: {}", names.join(", "));
    }

    if !session.wait_for_submission(Duration::from_secs(timeout_secs)) {
        bail!("no response within {timeout_secs}s");
    }
    let contact = session.state().contact();
    match contact.phase() {
        ContactPhase::Submitted => {
            println!("Message sent.");
            Ok(())
        }
        _ => bail!(
            "{}",
            contact
                .error()
                .unwrap_or("submission did not complete")
        ),
    }
}
