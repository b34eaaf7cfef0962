use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;

use atlas_application::{FormSubmission, MutationHandle, MutationOutcome, MutationStatus};
use atlas_core::AtlasError;
use atlas_core::config::LatencyConfig;
use atlas_core::profile::{Coordinates, ProfileFormData, ValidationReport, validate};

use super::utils::CliContext;

/// Validates a JSON form payload. Needs no directory.
pub fn validate_file(path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let form: ProfileFormData = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as profile form JSON", path.display()))?;

    let report = validate(&form);
    if report.is_valid() {
        println!("{} {}", "✓".green(), "Form is valid".bold());
        return Ok(());
    }

    print_field_errors(&report);
    bail!("{} field(s) failed validation", report.field_errors.len())
}

fn print_field_errors(report: &ValidationReport) {
    for (field, message) in &report.field_errors {
        println!("  {} {:<22} {}", "✗".red(), field, message);
    }
}

fn latency_summary(latency: &LatencyConfig) -> String {
    format!(
        "create {}ms, update {}ms, delete {}ms",
        latency.create_ms, latency.update_ms, latency.delete_ms
    )
}

/// A delete submitted after an update only overtakes it when its window is shorter.
fn delete_overtakes_update(latency: &LatencyConfig) -> bool {
    latency.update() > latency.delete()
}

fn describe(outcome: &MutationOutcome) -> String {
    match outcome {
        MutationOutcome::Created(p) => format!("created {} ({})", p.name, p.id),
        MutationOutcome::Updated(p) => format!("updated {} ({})", p.name, p.id),
        MutationOutcome::Deleted { id, removed: true } => format!("deleted {id}"),
        MutationOutcome::Deleted { id, removed: false } => format!("{id} was already gone"),
    }
}

fn submitted(label: &str, handle: MutationHandle) -> MutationHandle {
    println!(
        "  [{}] #{} {} submitted",
        handle.status().to_string().yellow(),
        handle.ticket(),
        label
    );
    handle
}

async fn settle(handle: &MutationHandle) -> Result<MutationOutcome> {
    let settlement = handle.settled().await;
    match &settlement {
        Ok(outcome) => println!(
            "  [{}] #{} {}",
            handle.status().to_string().green(),
            handle.ticket(),
            describe(outcome)
        ),
        Err(e) => println!(
            "  [{}] #{} {}",
            handle.status().to_string().red(),
            handle.ticket(),
            e
        ),
    }
    Ok(settlement?)
}

pub async fn demo(ctx: &CliContext) -> Result<()> {
    let directory = &ctx.directory;
    let latency = directory.pipeline().latency().clone();
    let profiles = directory.profiles().await;
    let first = profiles
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("Seed produced no profiles; raise [seed] count"))?;

    println!("{}", "== Seeded directory".bold());
    println!("  {} profiles, latency {}", profiles.len(), latency_summary(&latency));

    println!("{}", "== Selection".bold());
    directory.select(Some(&first.id)).await;
    println!("  selected {} in {}", first.name, first.location_label());

    println!("{}", "== Form boundary rejects invalid input".bold());
    let mut invalid = ProfileFormData::from(&first);
    invalid.contact.email = "not-an-email".to_string();
    invalid.address.coordinates = Coordinates::default();
    match directory.submit_form(FormSubmission::Create(invalid)) {
        Err(AtlasError::Validation(report)) => print_field_errors(&report),
        Err(e) => return Err(e.into()),
        Ok(_) => bail!("invalid form was submitted"),
    }

    println!("{}", "== Create".bold());
    let mut new_form = ProfileFormData::default();
    new_form.name = "Rowan Avery".to_string();
    new_form.description = "cartographer based in Omaha".to_string();
    new_form.address.street = "12 Prairie Ln".to_string();
    new_form.address.city = "Omaha".to_string();
    new_form.address.state = "Nebraska".to_string();
    new_form.address.zip_code = "68102".to_string();
    new_form.address.coordinates = Coordinates::new(41.2565, -95.9345);
    new_form.contact.email = "rowan.avery@example.com".to_string();
    new_form.add_interest("maps");
    new_form.add_interest("  rowing ");

    let create = submitted(
        "create",
        directory.submit_form(FormSubmission::Create(new_form))?,
    );
    println!(
        "  while {}: {} profiles visible",
        create.status(),
        directory.profiles().await.len()
    );
    let created = settle(&create).await?;
    let rowan = created
        .profile()
        .cloned()
        .ok_or_else(|| anyhow!("create settled without a profile"))?;
    println!(
        "  after settling: {} profiles visible",
        directory.profiles().await.len()
    );

    println!("{}", "== Update refreshes the selection".bold());
    let mut renamed = ProfileFormData::from(&first);
    renamed.name = format!("{} (edited)", first.name);
    let update = submitted(
        "update",
        directory.submit_form(FormSubmission::Update {
            id: first.id.clone(),
            form: renamed,
        })?,
    );
    settle(&update).await?;
    if let Some(selected) = directory.selected_profile().await {
        println!("  selection now reads: {}", selected.name);
    }

    let overtakes = delete_overtakes_update(&latency);
    if overtakes {
        println!("{}", "== Settle order follows latency, not submission".bold());
    } else {
        println!("{}", "== Update and delete in flight together".bold());
    }
    let mut moved = ProfileFormData::from(&rowan);
    moved.address.city = "Lincoln".to_string();
    let slow_update = submitted(
        "update",
        directory.submit_form(FormSubmission::Update {
            id: rowan.id.clone(),
            form: moved,
        })?,
    );
    let fast_delete = submitted("delete", directory.delete_profile(first.id.clone()));
    settle(&fast_delete).await?;
    if overtakes {
        println!(
            "  update still {} while delete is {}",
            slow_update.status(),
            fast_delete.status()
        );
    }
    settle(&slow_update).await?;

    println!("{}", "== Deleting the selection clears it".bold());
    match directory.selected_profile().await {
        None => println!("  selection: {}", "none".dimmed()),
        Some(p) => bail!("selection still points at {}", p.id),
    }

    println!("{}", "== Update of a missing id settles as not found".bold());
    let missing = submitted(
        "update",
        directory.submit_form(FormSubmission::Update {
            id: first.id.clone(),
            form: ProfileFormData::from(&rowan),
        })?,
    );
    if let Err(e) = settle(&missing).await {
        tracing::debug!(error = %e, "Expected failure in demo");
    }

    debug_assert_eq!(directory.mutation_status(), MutationStatus::Settled);
    println!(
        "{} pipeline {}",
        "✓".green(),
        directory.mutation_status().to_string().bold()
    );
    Ok(())
}
