use anyhow::{Result, bail};
use colored::Colorize;

use atlas_core::filter::ProfileFilters;

use super::utils::{CliContext, print_json, print_profile_detail, print_profiles};

pub async fn list(ctx: &CliContext, json: bool) -> Result<()> {
    let profiles = ctx.directory.profiles().await;
    if json {
        return print_json(&profiles);
    }
    print_profiles(&profiles);
    Ok(())
}

pub async fn search(
    ctx: &CliContext,
    term: Option<String>,
    location: Option<String>,
    json: bool,
) -> Result<()> {
    let filters = ProfileFilters::new(term, location);
    ctx.directory.set_filters(filters.clone()).await;
    let visible = ctx.directory.filtered_profiles().await;

    if json {
        return print_json(&visible);
    }

    let mut summary = format!(
        "Showing {} result{}",
        visible.len(),
        if visible.len() == 1 { "" } else { "s" }
    );
    if let Some(term) = filters.active_search_term() {
        summary.push_str(&format!(" for \"{term}\""));
    }
    if let Some(location) = filters.active_location() {
        summary.push_str(&format!(" in \"{location}\""));
    }
    println!("{}", summary.blue());
    print_profiles(&visible);
    Ok(())
}

pub async fn show(ctx: &CliContext, id: &str) -> Result<()> {
    if ctx.directory.select(Some(id)).await.is_none() {
        bail!("No profile with id '{}'", id);
    }

    // Resolve through the selection so the map viewport matches the detail view.
    let snapshot = ctx.directory.snapshot().await;
    let Some(profile) = snapshot.selected else {
        bail!("Profile '{}' disappeared while loading", id);
    };

    print_profile_detail(&profile);
    let viewport = snapshot.map.viewport;
    println!(
        "  map:       centre {:.4}, {:.4} at zoom {}",
        viewport.center.lat, viewport.center.lng, viewport.zoom
    );
    Ok(())
}
