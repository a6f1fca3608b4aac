//! Seeding orchestrator.
//!
//! Runs the full repopulation procedure: clear the property collection,
//! snapshot the referenced agent/review/gallery collections, then generate
//! a fixed number of property documents whose foreign identifiers are
//! drawn from those snapshots.

use bson::doc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info, warn};

use crate::config::{SeedConfig, SubsetBounds};
use crate::error::SeedError;
use crate::fields::{
    bounded_int, facility_subset, pick_one, select_image, FACILITIES, PROPERTY_IMAGES,
    PROPERTY_TYPES,
};
use crate::sample::random_subset;
use crate::store::{unique_id, DocumentStore, StoredDocument};

/// Terminal status of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStatus {
    /// All generation cycles were attempted. Individual cycles may still
    /// have failed; see the counters.
    Completed,
    /// The run aborted before generation (clearing or loading failed).
    Failed,
}

/// Aggregate outcome of a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub succeeded: u64,
    pub failed: u64,
    pub status: SeedStatus,
}

impl SeedReport {
    fn completed() -> Self {
        Self {
            succeeded: 0,
            failed: 0,
            status: SeedStatus::Completed,
        }
    }

    fn aborted() -> Self {
        Self {
            succeeded: 0,
            failed: 0,
            status: SeedStatus::Failed,
        }
    }

    /// Merge one generation-cycle outcome into the aggregate.
    fn record(&mut self, outcome: &Result<StoredDocument, SeedError>) {
        match outcome {
            Ok(_) => self.succeeded += 1,
            Err(_) => self.failed += 1,
        }
    }
}

/// Read-only snapshot of the referenced collections, taken at run start.
struct Dependencies {
    agents: Vec<StoredDocument>,
    reviews: Vec<StoredDocument>,
    galleries: Vec<StoredDocument>,
}

/// Seeding orchestrator over a document store.
pub struct Seeder<S> {
    store: S,
    config: SeedConfig,
    rng: StdRng,
}

impl<S: DocumentStore> Seeder<S> {
    /// Create a seeder seeded from OS entropy.
    pub fn new(store: S, config: SeedConfig) -> Self {
        Self {
            store,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a seeder with a fixed RNG seed (same seed = same data).
    pub fn with_seed(store: S, config: SeedConfig, seed: u64) -> Self {
        Self {
            store,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the seeding procedure to its terminal state.
    ///
    /// A clearing or loading failure aborts the run with a `Failed`
    /// report before any document is generated. Once generation starts,
    /// individual create failures are logged, counted, and tolerated; the
    /// run still reaches `Completed` after all cycles were attempted.
    pub async fn run(&mut self) -> SeedReport {
        if let Err(err) = self.clear_properties().await {
            error!("Seeding aborted while clearing properties: {err}");
            return SeedReport::aborted();
        }

        let deps = match self.load_dependencies().await {
            Ok(deps) => deps,
            Err(err) => {
                error!("Seeding aborted while loading dependencies: {err}");
                return SeedReport::aborted();
            }
        };

        let mut report = SeedReport::completed();
        for index in 1..=self.config.property_count {
            let outcome = self.seed_property(index, &deps).await;
            match &outcome {
                Ok(document) => {
                    let name = document.fields.get_str("name").unwrap_or(&document.id);
                    info!("Seeded property: {name}");
                }
                Err(err) => warn!("Failed to seed property {index}: {err}"),
            }
            report.record(&outcome);
        }

        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "Data seeding completed"
        );
        report
    }

    /// Delete every existing property document.
    ///
    /// A failed individual delete is logged and skipped; only a failed
    /// listing aborts the run.
    async fn clear_properties(&self) -> Result<(), SeedError> {
        let existing = self
            .store
            .list_documents(&self.config.properties_collection)
            .await?;

        for document in &existing {
            if let Err(err) = self
                .store
                .delete_document(&self.config.properties_collection, &document.id)
                .await
            {
                warn!("Failed to delete property '{}': {err}", document.id);
            }
        }

        info!("Cleared {} existing properties", existing.len());
        Ok(())
    }

    /// Snapshot the referenced collections, in store order.
    async fn load_dependencies(&self) -> Result<Dependencies, SeedError> {
        let agents = self.load_all(&self.config.agents_collection).await?;
        let reviews = self.load_all(&self.config.reviews_collection).await?;
        let galleries = self.load_all(&self.config.galleries_collection).await?;

        info!(
            "Found: {} agents, {} reviews, {} galleries",
            agents.len(),
            reviews.len(),
            galleries.len()
        );

        Ok(Dependencies {
            agents,
            reviews,
            galleries,
        })
    }

    /// Load every document of one referenced collection. Store errors
    /// propagate unchanged, no local recovery.
    async fn load_all(&self, collection_id: &str) -> Result<Vec<StoredDocument>, SeedError> {
        Ok(self.store.list_documents(collection_id).await?)
    }

    /// One generation cycle: assemble a property document and create it.
    async fn seed_property(
        &mut self,
        index: u64,
        deps: &Dependencies,
    ) -> Result<StoredDocument, SeedError> {
        let agent = pick_agent(&mut self.rng, &deps.agents)?;

        let reviews = sample_refs(&mut self.rng, &deps.reviews, self.config.review_bounds)?;
        let galleries = sample_refs(&mut self.rng, &deps.galleries, self.config.gallery_bounds)?;

        let facilities = facility_subset(&mut self.rng, FACILITIES)?;
        let image = select_image(&mut self.rng, index as usize, PROPERTY_IMAGES)?;

        let fields = doc! {
            "name": format!("Property {index}"),
            "type": pick_one(&mut self.rng, PROPERTY_TYPES, "property types")?,
            "description": format!("This is the description for Property {index}."),
            "address": format!("123 Property Street, City {index}"),
            "geolocation": format!("192.168.1.{index}, 192.168.1.{index}"),
            "price": bounded_int(&mut self.rng, 1000, 10000),
            "area": bounded_int(&mut self.rng, 500, 3500),
            "bedrooms": bounded_int(&mut self.rng, 1, 6),
            "bathrooms": bounded_int(&mut self.rng, 1, 6),
            "rating": bounded_int(&mut self.rng, 1, 6),
            "facilities": facilities,
            "image": image,
            "agent": agent.id.clone(),
            "reviews": reviews,
            "gallery": galleries,
        };

        let document = self
            .store
            .create_document(&self.config.properties_collection, &unique_id(), fields)
            .await?;

        Ok(document)
    }
}

/// Uniform pick of one agent, guarding the empty case explicitly.
fn pick_agent<'a, R: Rng>(
    rng: &mut R,
    agents: &'a [StoredDocument],
) -> Result<&'a StoredDocument, SeedError> {
    if agents.is_empty() {
        return Err(SeedError::EmptyDependency("agents"));
    }
    Ok(&agents[rng.gen_range(0..agents.len())])
}

/// Sample a foreign-id subset, clamping the bounds to the number of
/// documents actually loaded.
fn sample_refs<R: Rng>(
    rng: &mut R,
    documents: &[StoredDocument],
    bounds: SubsetBounds,
) -> Result<Vec<String>, SeedError> {
    let max_items = bounds.max.min(documents.len());
    let min_items = bounds.min.min(max_items);

    let subset = random_subset(rng, documents, min_items, max_items)?;
    Ok(subset.into_iter().map(|document| document.id).collect())
}
