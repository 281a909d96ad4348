//! Long-lived chart engine: configured divisions plus a shared calibration
//! store. `Send + Sync`; one instance can serve many threads.

use std::sync::Arc;

use varga_base::{CalibrationTable, Division};

use crate::chart::{build_chart, build_charts, build_charts_for};
use crate::chart_types::{BaseChart, VargaChart};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::store::CalibrationStore;

#[derive(Debug)]
pub struct VargaEngine {
    divisions: Vec<Division>,
    store: CalibrationStore,
}

impl VargaEngine {
    /// Validate the config and load its calibration source.
    pub fn new(config: &ChartConfig) -> Result<Self, ChartError> {
        let divisions = config.resolved_divisions()?;
        let table = config.calibration.load()?;
        tracing::debug!(
            divisions = divisions.len(),
            calibration = table.version(),
            "varga engine ready"
        );
        Ok(Self::with_calibration(divisions, table))
    }

    pub fn with_calibration(divisions: Vec<Division>, table: CalibrationTable) -> Self {
        Self {
            divisions,
            store: CalibrationStore::new(table),
        }
    }

    /// Divisions computed by [`Self::charts`].
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    pub fn calibration(&self) -> Arc<CalibrationTable> {
        self.store.snapshot()
    }

    /// Swap in a new calibration table. Charts already in progress finish
    /// against the table they started with.
    pub fn reload_calibration(&self, table: CalibrationTable) {
        self.store.replace(table);
    }

    /// One chart for a single division.
    pub fn chart(&self, base: &BaseChart, division: Division) -> VargaChart {
        let table = self.store.snapshot();
        build_chart(base, &division.spec(), Some(&*table))
    }

    /// Charts for all configured divisions.
    pub fn charts(&self, base: &BaseChart) -> Vec<VargaChart> {
        let table = self.store.snapshot();
        build_charts_for(base, &self.divisions, Some(&*table))
    }

    /// Charts for caller-supplied D-number codes.
    pub fn charts_for_codes(
        &self,
        base: &BaseChart,
        codes: &[u16],
    ) -> Result<Vec<VargaChart>, ChartError> {
        let table = self.store.snapshot();
        build_charts(base, codes, Some(&*table))
    }
}

impl Default for VargaEngine {
    /// All supported divisions, no calibration table.
    fn default() -> Self {
        Self::with_calibration(varga_base::ALL_DIVISIONS.to_vec(), CalibrationTable::default())
    }
}
