//! Demo data generator.
//!
//! Produces plausible saved requests, history entries and projects for the
//! binary's scripted session. A fixed seed gives a reproducible data set.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use saved_requests_domain::{NewProject, SavedRequestRecord};
use serde_json::json;

const METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS"];
const HOSTS: &[&str] = &[
    "api.domain.com",
    "httpbin.org",
    "staging.example.org",
    "localhost:8080",
];
const RESOURCES: &[&str] = &[
    "users", "orders", "invoices", "products", "sessions", "reports", "files",
];
const PROJECT_NAMES: &[&str] = &[
    "Billing", "Onboarding", "Search", "Mobile API", "Partners", "Internal tools",
];

/// Seedable generator of demo records.
#[derive(Debug)]
pub struct RecordGenerator {
    rng: StdRng,
}

impl RecordGenerator {
    /// Creates a generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, values: &[&'static str]) -> &'static str {
        values.choose(&mut self.rng).copied().unwrap_or_default()
    }

    /// Generates one unsaved request.
    pub fn generate_saved_item(&mut self) -> SavedRequestRecord {
        let method = self.pick(METHODS);
        let host = self.pick(HOSTS);
        let resource = self.pick(RESOURCES);
        let url = if self.rng.random_bool(0.5) {
            format!("https://{host}/{resource}/{}", self.rng.random_range(1..=999))
        } else {
            format!("https://{host}/{resource}")
        };

        let mut record = SavedRequestRecord::new(method, url, format!("{method} {resource}"));
        record.extra.insert(
            "headers".into(),
            json!(format!("accept: application/json\nx-request-id: {}", self.rng.random::<u32>())),
        );
        if matches!(method, "POST" | "PUT" | "PATCH") {
            record.extra.insert(
                "payload".into(),
                json!(format!(r#"{{"id":{}}}"#, self.rng.random_range(1..=999))),
            );
        }
        record
    }

    /// Generates `count` unsaved requests.
    pub fn generate_requests(&mut self, count: usize) -> Vec<SavedRequestRecord> {
        (0..count).map(|_| self.generate_saved_item()).collect()
    }

    /// Generates `count` history entries, with the history display fields set.
    pub fn generate_history(&mut self, count: usize) -> Vec<SavedRequestRecord> {
        (0..count)
            .map(|index| {
                let mut record = self.generate_saved_item();
                record.name = None;
                let hour = self.rng.random_range(0..24);
                let minute = self.rng.random_range(0..60);
                record
                    .extra
                    .insert("timeLabel".into(), json!(format!("{hour:02}:{minute:02}")));
                record
                    .extra
                    .insert("dayTime".into(), json!(hour * 60 + minute));
                record.extra.insert("hasHeader".into(), json!(index == 0));
                record.extra.insert("header".into(), json!("Today"));
                record
            })
            .collect()
    }

    /// Generates `count` projects with distinct names.
    pub fn generate_projects(&mut self, count: usize) -> Vec<NewProject> {
        let mut names: Vec<&str> = PROJECT_NAMES.to_vec();
        let taken = count.min(names.len());
        let (chosen, _) = names.partial_shuffle(&mut self.rng, taken);
        chosen
            .iter()
            .map(|name| NewProject {
                name: (*name).to_string(),
                requests: Vec::new(),
            })
            .collect()
    }
}
