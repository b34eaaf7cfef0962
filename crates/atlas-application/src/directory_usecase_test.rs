#[cfg(test)]
mod tests {
    use std::time::Duration;

    use atlas_core::config::LatencyConfig;
    use atlas_core::filter::ProfileFilters;
    use atlas_core::profile::validation::{FIELD_COORDINATES, FIELD_EMAIL};
    use atlas_core::profile::{Address, Contact, Coordinates, Profile, ProfileFormData};
    use atlas_core::selection::map::{DEFAULT_ZOOM, FOCUSED_ZOOM};
    use chrono::Utc;

    use crate::directory_usecase::{DirectoryUseCase, FormSubmission};
    use crate::mutation::{MutationOutcome, MutationStatus};

    fn form(name: &str, city: &str) -> ProfileFormData {
        ProfileFormData {
            name: name.to_string(),
            image: format!("https://example.com/{name}.png"),
            description: format!("{name} from {city}"),
            address: Address {
                street: "1 Main St".to_string(),
                city: city.to_string(),
                state: "Somewhere".to_string(),
                country: "United States".to_string(),
                zip_code: "00001".to_string(),
                coordinates: Coordinates::new(40.0, -100.0),
            },
            contact: Contact {
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "555-0100".to_string(),
            },
            interests: vec!["reading".to_string()],
        }
    }

    fn seeded(id: &str, name: &str, city: &str) -> Profile {
        Profile::with_identity(id.to_string(), Utc::now(), form(name, city))
    }

    async fn directory_with(profiles: Vec<Profile>) -> DirectoryUseCase {
        let directory = DirectoryUseCase::in_memory(LatencyConfig::immediate());
        directory.load_seed(profiles).await.unwrap();
        directory
    }

    fn names(profiles: &[Profile]) -> Vec<&str> {
        profiles.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_location_filter_scenario() {
        let directory = directory_with(vec![
            seeded("a", "Ana", "Boston"),
            seeded("b", "Ben", "Austin"),
        ])
        .await;

        directory.set_filters(ProfileFilters::location("aus")).await;
        assert_eq!(names(&directory.filtered_profiles().await), vec!["Ben"]);

        directory.reset_filters().await;
        assert_eq!(directory.filtered_profiles().await.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_filtered_view_tracks_mutations() {
        let directory = directory_with(vec![seeded("a", "Ana", "Boston")]).await;
        directory.set_filters(ProfileFilters::location("austin")).await;
        assert!(directory.filtered_profiles().await.is_empty());

        let handle = directory
            .submit_form(FormSubmission::Create(form("Ben", "Austin")))
            .unwrap();
        handle.settled().await.unwrap();

        assert_eq!(names(&directory.filtered_profiles().await), vec!["Ben"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_then_update_scenario() {
        let directory = directory_with(vec![seeded("a", "Ana", "Boston")]).await;

        let created = directory
            .submit_form(FormSubmission::Create(form("Cy", "Denver")))
            .unwrap()
            .settled()
            .await
            .unwrap();
        let cy = created.profile().unwrap().clone();

        let updated = directory
            .submit_form(FormSubmission::Update {
                id: cy.id.clone(),
                form: form("Cy2", "Denver"),
            })
            .unwrap()
            .settled()
            .await
            .unwrap();

        let profiles = directory.profiles().await;
        assert_eq!(names(&profiles), vec!["Ana", "Cy2"]);
        let stored = &profiles[1];
        assert_eq!(stored.id, cy.id);
        assert_eq!(stored.created_at, cy.created_at);
        assert_eq!(Some(stored), updated.profile());
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_then_delete_clears_selection() {
        let directory = directory_with(vec![
            seeded("a", "Ana", "Boston"),
            seeded("b", "Ben", "Austin"),
        ])
        .await;

        assert!(directory.select(Some("b")).await.is_some());
        let outcome = directory.delete_profile("b").settled().await.unwrap();

        assert_eq!(
            outcome,
            MutationOutcome::Deleted {
                id: "b".to_string(),
                removed: true
            }
        );
        assert!(directory.selected_profile().await.is_none());
        assert_eq!(directory.map_view().await.viewport.zoom, DEFAULT_ZOOM);
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_then_update_refreshes_selection() {
        let directory = directory_with(vec![seeded("a", "Ana", "Boston")]).await;
        directory.select(Some("a")).await;

        let mut new_form = form("Ana", "Boston");
        new_form.address.coordinates = Coordinates::new(42.36, -71.06);
        directory
            .submit_form(FormSubmission::Update {
                id: "a".to_string(),
                form: new_form,
            })
            .unwrap()
            .settled()
            .await
            .unwrap();

        let selected = directory.selected_profile().await.unwrap();
        assert_eq!(selected.address.coordinates, Coordinates::new(42.36, -71.06));

        let map = directory.map_view().await;
        assert_eq!(map.viewport.center, Coordinates::new(42.36, -71.06));
        assert_eq!(map.viewport.zoom, FOCUSED_ZOOM);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_is_never_submitted() {
        let directory = directory_with(vec![]).await;

        let mut bad = form("Ana", "Boston");
        bad.contact.email = "not-an-email".to_string();
        bad.address.coordinates = Coordinates::default();

        let err = directory
            .submit_form(FormSubmission::Create(bad))
            .unwrap_err();
        let report = err.validation_report().unwrap();
        assert!(report.error_for(FIELD_EMAIL).is_some());
        assert!(report.error_for(FIELD_COORDINATES).is_some());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(directory.profiles().await.is_empty());
        assert_eq!(directory.mutation_status(), MutationStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_of_deleted_profile_settles_not_found() {
        let directory = DirectoryUseCase::in_memory(LatencyConfig::default());
        directory
            .load_seed(vec![seeded("a", "Ana", "Boston")])
            .await
            .unwrap();

        // Delete (300ms) lands before the update (500ms).
        let update = directory
            .submit_form(FormSubmission::Update {
                id: "a".to_string(),
                form: form("Ana2", "Boston"),
            })
            .unwrap();
        let delete = directory.delete_profile("a");

        assert!(delete.settled().await.is_ok());
        assert!(update.settled().await.unwrap_err().is_not_found());
        assert!(directory.profiles().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_reflects_pending_and_loading() {
        let directory = std::sync::Arc::new(DirectoryUseCase::in_memory(LatencyConfig::default()));

        let loader = {
            let directory = directory.clone();
            tokio::spawn(async move { directory.load_seed(vec![seeded("a", "Ana", "Boston")]).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(directory.snapshot().await.loading);

        assert_eq!(loader.await.unwrap().unwrap(), 1);
        assert!(!directory.is_loading());

        let handle = directory
            .submit_form(FormSubmission::Create(form("Ben", "Austin")))
            .unwrap();
        let pending = directory.snapshot().await;
        assert_eq!(pending.mutation_status, MutationStatus::Pending);
        assert_eq!(names(&pending.visible), vec!["Ana"]);

        handle.settled().await.unwrap();
        let settled = directory.snapshot().await;
        assert_eq!(settled.mutation_status, MutationStatus::Settled);
        assert_eq!(names(&settled.visible), vec!["Ana", "Ben"]);
        assert_eq!(settled.map.markers.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unseeded_directory_reports_loading() {
        let directory = DirectoryUseCase::in_memory(LatencyConfig::immediate());

        let before = directory.snapshot().await;
        assert!(before.loading);
        assert!(before.visible.is_empty());

        directory.load_seed(vec![seeded("a", "Ana", "Boston")]).await.unwrap();
        let after = directory.snapshot().await;
        assert!(!after.loading);
        assert_eq!(names(&after.visible), vec!["Ana"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_selection_agrees_with_visible_list() {
        let directory = DirectoryUseCase::in_memory(LatencyConfig::default());
        directory
            .load_seed(vec![seeded("a", "Ana", "Boston"), seeded("b", "Ben", "Austin")])
            .await
            .unwrap();
        directory.select(Some("b")).await;

        let delete = directory.delete_profile("b");
        let pending = directory.snapshot().await;
        assert_eq!(names(&pending.visible), vec!["Ana", "Ben"]);
        assert_eq!(pending.selected.as_ref().map(|p| p.id.as_str()), Some("b"));
        assert_eq!(pending.map.viewport.zoom, FOCUSED_ZOOM);

        delete.settled().await.unwrap();
        let settled = directory.snapshot().await;
        assert_eq!(names(&settled.visible), vec!["Ana"]);
        assert!(settled.selected.is_none());
        assert_eq!(settled.map.viewport.zoom, DEFAULT_ZOOM);
    }

    #[tokio::test(start_paused = true)]
    async fn test_seed_with_duplicate_ids_is_rejected() {
        let directory = DirectoryUseCase::in_memory(LatencyConfig::immediate());

        let result = directory
            .load_seed(vec![seeded("x", "Ana", "Boston"), seeded("x", "Ben", "Austin")])
            .await;

        assert!(result.is_err());
        assert!(!directory.is_loading());
        assert!(directory.profiles().await.is_empty());
    }
}
