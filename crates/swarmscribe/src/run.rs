//! One rebuild pass over the swarm

use crate::error::{Result, RunError};
use crate::writer::write_atomically;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use swarmscribe_config::Settings;
use swarmscribe_core::{
    ComposeDocument, InspectRecord, NetworkMap, ServiceIdentity, StackDocumentBuilder, serialize,
    validate,
};
use swarmscribe_docker::{CommandExecutor, SwarmClient};

/// What to do in a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub settings: Settings,
    /// Only process these stacks; empty means every stack
    pub stacks: Vec<String>,
    /// Print documents to stdout instead of writing files
    pub dry_run: bool,
}

/// How a stack ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOutcome {
    Written(PathBuf),
    Printed,
    /// Emitted YAML did not parse back; nothing was written
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackReport {
    pub stack: String,
    pub services: Vec<String>,
    pub outcome: StackOutcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub stacks: Vec<StackReport>,
    /// Requested stacks that do not exist on the swarm
    pub missing: Vec<String>,
}

impl RunReport {
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.stacks.iter().filter_map(|s| match &s.outcome {
            StackOutcome::Written(path) => Some(path),
            _ => None,
        })
    }

    pub fn has_invalid(&self) -> bool {
        self.stacks
            .iter()
            .any(|s| s.outcome == StackOutcome::Invalid)
    }

    fn print_summary(&self) {
        println!();
        println!("{}", "Summary:".bold());
        for report in &self.stacks {
            println!("Stack: {}", report.stack.cyan());
            println!("  Services: {}", report.services.join(", "));
            match &report.outcome {
                StackOutcome::Written(path) => {
                    println!("  Docker Compose file: {}", path.display())
                }
                StackOutcome::Printed => println!("  Docker Compose file: (stdout)"),
                StackOutcome::Invalid => println!("  Docker Compose file: {}", "not written".red()),
            }
            println!();
        }
    }
}

/// Group services by stack, ordered by stack then full name
pub fn group_by_stack(
    services: &BTreeMap<String, ServiceIdentity>,
) -> BTreeMap<String, Vec<&ServiceIdentity>> {
    let mut stacks: BTreeMap<String, Vec<&ServiceIdentity>> = BTreeMap::new();
    for identity in services.values() {
        stacks
            .entry(identity.stack.clone())
            .or_default()
            .push(identity);
    }
    stacks
}

/// Translate every service of one stack into a single document
///
/// Each identity must have an inspect record.
pub fn stack_document(
    identities: &[&ServiceIdentity],
    records: &BTreeMap<String, InspectRecord>,
    networks: &NetworkMap,
    version: Option<String>,
) -> Result<ComposeDocument> {
    let mut builder = StackDocumentBuilder::new(version, networks);
    for identity in identities {
        let record = records
            .get(&identity.full_name)
            .ok_or_else(|| RunError::MissingInspect(identity.full_name.clone()))?;
        builder.add(identity, record);
    }
    Ok(builder.build())
}

/// Enumerate, inspect, translate and emit every stack
///
/// Stacks are handled one after another in name order. The first docker,
/// parse or write error ends the run; files written for earlier stacks stay
/// on disk. A document that fails validation is reported and skipped.
pub async fn run<E: CommandExecutor>(
    client: &SwarmClient<E>,
    options: &RunOptions,
) -> Result<RunReport> {
    println!("{}", "Fetching service and stack information...".blue());
    let services = client.list_services().await?;

    println!("{}", "Fetching network information...".blue());
    let networks = client.resolve_networks().await?;

    let mut stacks = group_by_stack(&services);
    let mut report = RunReport::default();

    if !options.stacks.is_empty() {
        stacks.retain(|stack, _| options.stacks.contains(stack));
        for requested in &options.stacks {
            if !stacks.contains_key(requested) && !report.missing.contains(requested) {
                tracing::warn!("Stack not found on the swarm: {}", requested);
                println!("{} stack '{}' not found", "⚠".yellow(), requested);
                report.missing.push(requested.clone());
            }
        }
    }

    if stacks.is_empty() {
        println!("{}", "No stacks found.".yellow());
    }

    for (stack, identities) in &stacks {
        let service_names: Vec<String> = identities.iter().map(|i| i.service.clone()).collect();

        println!();
        println!("Processing stack: {}", stack.cyan().bold());
        println!("Services in {}: {}", stack, service_names.join(", "));

        let records = client
            .inspect(identities.iter().map(|i| i.full_name.as_str()))
            .await?;

        println!("Generating Docker Compose file...");
        let document = stack_document(
            identities,
            &records,
            &networks,
            options.settings.compose_version.clone(),
        )?;
        let text = serialize(&document)?;

        let outcome = if !validate(&text) {
            println!(
                "{} Generated Docker Compose file for {} is not valid. Please check the services and try again.",
                "✗".red(),
                stack
            );
            StackOutcome::Invalid
        } else if options.dry_run {
            println!("{}", "---".dimmed());
            print!("{}", text);
            StackOutcome::Printed
        } else {
            let path = options.settings.output_path(stack);
            write_atomically(&path, &text).map_err(|source| RunError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::info!("Wrote {}", path.display());
            println!(
                "{} Docker Compose file for {} saved as {}",
                "✓".green(),
                stack,
                path.display().to_string().cyan()
            );
            StackOutcome::Written(path)
        };

        report.stacks.push(StackReport {
            stack: stack.clone(),
            services: service_names,
            outcome,
        });
    }

    report.print_summary();
    Ok(report)
}
