use std::path::Path;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{
    payload_scatter, site_outcome_summary, PayloadRange, PieSummary, SiteSelection,
};
use crate::data::loader;
use crate::data::model::{LaunchDataset, LaunchRecord};

/// Launch sites offered in the dropdown even before (or without) data.
pub const KNOWN_SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1000.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (None only if a reload was attempted with nothing loaded).
    pub dataset: Option<LaunchDataset>,

    /// Dropdown value.
    pub site: SiteSelection,

    /// Text typed into the dropdown's search box.
    pub site_search: String,

    /// Slider value, `low <= high` always.
    pub payload_range: PayloadRange,

    /// Pie chart for the current site (recomputed on change).
    pub pie: Option<PieSummary>,

    /// Launches plotted in the scatter chart (recomputed on change).
    pub scatter_rows: Vec<LaunchRecord>,

    /// Colours for booster version categories.
    pub category_colors: ColorMap,

    /// Colours for sites in the all-sites pie.
    pub site_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            dataset: None,
            site: SiteSelection::All,
            site_search: String::new(),
            payload_range: PayloadRange::new(PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX),
            pie: None,
            scatter_rows: Vec::new(),
            category_colors: ColorMap::new(&Vec::<String>::new()),
            site_colors: ColorMap::new(&Vec::<String>::new()),
            status_message: None,
        }
    }

    /// Ingest a newly loaded dataset, reset controls and recompute charts.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.category_colors = ColorMap::new(&dataset.booster_categories);
        self.site_colors = ColorMap::new(&dataset.sites);
        self.payload_range = PayloadRange::new(dataset.min_payload, dataset.max_payload);
        self.site = SiteSelection::All;
        self.site_search.clear();

        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh();
    }

    /// Re-run both chart filters against the current control values.
    pub fn refresh(&mut self) {
        let Some(ds) = &self.dataset else {
            self.pie = None;
            self.scatter_rows.clear();
            return;
        };
        self.pie = Some(site_outcome_summary(ds, &self.site));
        self.scatter_rows = payload_scatter(ds, &self.site, self.payload_range)
            .into_iter()
            .cloned()
            .collect();
    }

    pub fn select_site(&mut self, site: SiteSelection) {
        if self.site != site {
            log::debug!("Site selection → {site}");
            self.site = site;
            self.refresh();
        }
    }

    /// Move the slider handles; each handle is clamped so they cannot cross.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let prev = self.payload_range;
        let range = if low != prev.low {
            PayloadRange::new(low.min(high), high)
        } else {
            PayloadRange::new(low, high.max(low))
        };
        if range != prev {
            self.payload_range = range;
            self.refresh();
        }
    }

    /// Upper bound of the slider: 10000 kg, extended to the next whole step
    /// if the dataset holds heavier payloads.
    pub fn slider_max(&self) -> f64 {
        let data_max = self.dataset.as_ref().map_or(0.0, |ds| ds.max_payload);
        let rounded = (data_max / PAYLOAD_SLIDER_STEP).ceil() * PAYLOAD_SLIDER_STEP;
        rounded.max(PAYLOAD_SLIDER_MAX)
    }

    /// Dropdown entries after "All Sites": the fixed list, then any extra
    /// sites found in the data, narrowed by the search text.
    pub fn site_options(&self) -> Vec<String> {
        let mut options: Vec<String> = KNOWN_SITES.iter().map(|s| s.to_string()).collect();
        if let Some(ds) = &self.dataset {
            for site in &ds.sites {
                if !options.contains(site) {
                    options.push(site.clone());
                }
            }
        }
        let needle = self.site_search.trim().to_lowercase();
        options.retain(|s| needle.is_empty() || s.to_lowercase().contains(&needle));
        options
    }

    /// Re-fetch the configured source. On failure the current dataset stays.
    pub fn reload(&mut self) {
        match loader::load_source(&self.config) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to reload dataset: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Replace the dataset with a local CSV file.
    pub fn open_file(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => self.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::DatasetSource;
    use crate::data::model::tests::record;
    use crate::data::model::Outcome;

    fn loaded_state() -> AppState {
        let mut state = AppState::new(DashboardConfig::default());
        state.set_dataset(LaunchDataset::from_records(vec![
            record("CCAFS LC-40", 500.0, Outcome::Success, "v1.0"),
            record("CCAFS LC-40", 2000.0, Outcome::Failure, "v1.1"),
            record("KSC LC-39A", 9000.0, Outcome::Success, "FT"),
        ]));
        state
    }

    #[test]
    fn set_dataset_starts_with_full_payload_span() {
        let state = loaded_state();
        assert_eq!(state.payload_range, PayloadRange::new(500.0, 9000.0));
        assert_eq!(state.scatter_rows.len(), 3);
        assert_eq!(state.pie.as_ref().map(|p| p.total()), Some(2));
    }

    #[test]
    fn selecting_site_recomputes_both_charts() {
        let mut state = loaded_state();
        state.select_site(SiteSelection::Site("KSC LC-39A".into()));

        let pie = state.pie.as_ref().unwrap();
        assert_eq!(pie.title, "Successful Launches for KSC LC-39A");
        assert_eq!(state.scatter_rows.len(), 1);
    }

    #[test]
    fn known_site_without_data_gives_empty_charts() {
        let mut state = loaded_state();
        state.select_site(SiteSelection::Site("VAFB SLC-4E".into()));
        assert!(state.pie.as_ref().unwrap().slices.is_empty());
        assert!(state.scatter_rows.is_empty());
    }

    #[test]
    fn slider_handles_cannot_cross() {
        let mut state = loaded_state();
        state.set_payload_range(1000.0, 3000.0);
        assert_eq!(state.payload_range, PayloadRange::new(1000.0, 3000.0));
        assert_eq!(state.scatter_rows.len(), 1);

        state.set_payload_range(5000.0, 3000.0);
        assert_eq!(state.payload_range, PayloadRange::new(3000.0, 3000.0));

        state.set_payload_range(3000.0, 1000.0);
        assert_eq!(state.payload_range, PayloadRange::new(3000.0, 3000.0));
    }

    #[test]
    fn slider_max_extends_for_heavy_payloads() {
        let mut state = loaded_state();
        assert_eq!(state.slider_max(), PAYLOAD_SLIDER_MAX);

        state.set_dataset(LaunchDataset::from_records(vec![record(
            "KSC LC-39A",
            15600.0,
            Outcome::Success,
            "B5",
        )]));
        assert_eq!(state.slider_max(), 16000.0);
    }

    #[test]
    fn site_options_merge_and_filter() {
        let mut state = loaded_state();
        state.set_dataset(LaunchDataset::from_records(vec![record(
            "Kwajalein",
            100.0,
            Outcome::Failure,
            "F1",
        )]));
        assert_eq!(state.site_options().len(), 5);

        state.site_search = "ccafs".into();
        assert_eq!(state.site_options(), vec!["CCAFS LC-40", "CCAFS SLC-40"]);
    }

    #[test]
    fn failed_reload_keeps_previous_dataset() {
        let mut state = loaded_state();
        state.config.source = DatasetSource::Path("/no/such/launches.csv".into());
        state.reload();

        assert_eq!(state.dataset.as_ref().map(|d| d.len()), Some(3));
        assert!(state.status_message.as_deref().unwrap().starts_with("Error"));
    }
}
