use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use atlas_application::DirectoryUseCase;
use atlas_core::config::{LatencyConfig, RootConfig};
use atlas_core::profile::Profile;
use atlas_infrastructure::ConfigService;
use atlas_infrastructure::seed::generate_profiles;

/// Everything a subcommand needs: the loaded config and a seeded directory.
pub struct CliContext {
    pub config: RootConfig,
    pub directory: DirectoryUseCase,
}

/// Loads config, installs the tracing subscriber and seeds the directory.
pub async fn bootstrap(config_path: Option<&Path>, instant: bool) -> Result<CliContext> {
    let service = match config_path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new().context("Failed to resolve config path")?,
    };
    let config = service
        .get_config()
        .await
        .with_context(|| format!("Failed to load {}", service.path().display()))?;

    init_tracing(config.log_level.as_str());

    let latency = if instant {
        LatencyConfig::immediate()
    } else {
        config.latency.clone()
    };

    let directory = DirectoryUseCase::in_memory(latency);
    directory
        .load_seed(generate_profiles(&config.seed))
        .await
        .context("Failed to seed directory")?;

    Ok(CliContext { config, directory })
}

/// `RUST_LOG` wins over the configured level.
fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One table row per profile.
pub fn print_profiles(profiles: &[Profile]) {
    if profiles.is_empty() {
        println!("{}", "No profiles found.".dimmed());
        return;
    }

    for profile in profiles {
        println!(
            "{}  {:<20} {:<28} {}",
            profile.id.dimmed(),
            profile.name.bold(),
            profile.location_label(),
            profile.interests.join(", ").cyan()
        );
    }
}

pub fn print_profile_detail(profile: &Profile) {
    println!("{}", profile.name.bold());
    println!("  {}", profile.description);
    println!("  id:        {}", profile.id);
    println!(
        "  address:   {}, {}, {} {}, {}",
        profile.address.street,
        profile.address.city,
        profile.address.state,
        profile.address.zip_code,
        profile.address.country
    );
    println!(
        "  location:  {:.5}, {:.5}",
        profile.address.coordinates.lat, profile.address.coordinates.lng
    );
    println!("  email:     {}", profile.contact.email);
    println!("  phone:     {}", profile.contact.phone);
    println!("  interests: {}", profile.interests.join(", "));
    println!("  created:   {}", profile.created_at.to_rfc3339());
}
