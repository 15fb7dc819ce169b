use std::fmt;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Control values: which site, which payload window
// ---------------------------------------------------------------------------

/// Dropdown selection. Any name not present in the dataset is still a valid
/// `Site` and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

/// Inclusive payload window in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// `low <= mass <= high`. An inverted range contains nothing.
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

// ---------------------------------------------------------------------------
// Site / outcome aggregation (pie chart)
// ---------------------------------------------------------------------------

/// What a pie slice represents, used to pick its colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceKind {
    Site(String),
    Outcome(Outcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    pub kind: SliceKind,
}

/// Chart specification for the success pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSummary {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSummary {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Aggregate launches for the pie chart.
///
/// * `All` → one slice per site holding that site's success count.
/// * `Site` → a failure slice and a success slice for that site, or no
///   slices at all when the site has no launches.
pub fn site_outcome_summary(dataset: &LaunchDataset, site: &SiteSelection) -> PieSummary {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites
                .iter()
                .map(|name| PieSlice {
                    label: name.clone(),
                    value: dataset
                        .records
                        .iter()
                        .filter(|r| &r.launch_site == name && r.outcome.is_success())
                        .count(),
                    kind: SliceKind::Site(name.clone()),
                })
                .collect();
            PieSummary {
                title: "Successful Launches".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let (mut failures, mut successes) = (0, 0);
            for rec in dataset.records.iter().filter(|r| &r.launch_site == name) {
                match rec.outcome {
                    Outcome::Failure => failures += 1,
                    Outcome::Success => successes += 1,
                }
            }

            let slices = if failures + successes == 0 {
                Vec::new()
            } else {
                [(Outcome::Failure, failures), (Outcome::Success, successes)]
                    .into_iter()
                    .map(|(outcome, value)| PieSlice {
                        label: outcome.to_string(),
                        value,
                        kind: SliceKind::Outcome(outcome),
                    })
                    .collect()
            };
            PieSummary {
                title: format!("Successful Launches for {name}"),
                slices,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Payload / outcome scatter filter
// ---------------------------------------------------------------------------

pub const SCATTER_TITLE: &str = "Correlation between Payload Mass and Success";

/// Return the launches inside `range` (and at `site`, unless `All`), in
/// dataset order.
pub fn payload_scatter<'a>(
    dataset: &'a LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .collect()
}
