use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use swarmscribe::{RunOptions, run};
use swarmscribe_config::{CONFIG_ENV, Settings};
use swarmscribe_docker::{DockerInvocation, ProcessExecutor, SwarmClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swarmscribe")]
#[command(version, about = "Rebuild docker-compose files from a running Docker Swarm", long_about = None)]
struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Directory the Compose files are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File name prefix placed before the stack name
    #[arg(long)]
    prefix: Option<String>,

    /// docker CLI program
    #[arg(long)]
    docker: Option<String>,

    /// Run docker without sudo
    #[arg(long)]
    no_sudo: bool,

    /// Value of the top-level `version` key
    #[arg(long)]
    compose_version: Option<String>,

    /// Only rebuild this stack (repeatable)
    #[arg(short, long = "stack")]
    stacks: Vec<String>,

    /// Print the Compose files instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            settings.file_prefix = prefix.clone();
        }
        if let Some(docker) = &self.docker {
            settings.docker = docker.clone();
        }
        if self.no_sudo {
            settings.sudo = false;
        }
        if let Some(version) = &self.compose_version {
            settings.compose_version = Some(version.clone());
        }
        settings
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = execute(cli).await {
        eprintln!();
        eprintln!("{} {:#}", "An error occurred:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.apply(Settings::load(cli.config.as_deref())?);
    tracing::debug!("Settings: {:?}", settings);

    let client = SwarmClient::new(
        ProcessExecutor,
        DockerInvocation {
            program: settings.docker.clone(),
            sudo: settings.sudo,
        },
    );
    let options = RunOptions {
        settings,
        stacks: cli.stacks,
        dry_run: cli.dry_run,
    };

    run(&client, &options).await?;
    Ok(())
}
