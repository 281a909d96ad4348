//! Varga chart assembly.
//!
//! The lagna is derived first, since every graha's house is counted from
//! its varga sign. Each graha is then resolved, decomposed, derived and
//! housed independently: one graha failing leaves the others intact.

use varga_base::{
    ALL_GRAHAS, ALL_RASHIS, CalibrationTable, CelestialLongitude, ChartBody, Division, DivisionSpec,
    VargaError, deg_to_dms, house_of,
};

use crate::chart_types::{BaseChart, VargaChart, VargaPlacement};
use crate::error::ChartError;

/// Build one divisional chart from a D1 snapshot.
pub fn build_chart(
    base: &BaseChart,
    spec: &DivisionSpec,
    calibration: Option<&CalibrationTable>,
) -> VargaChart {
    let lagna = base
        .lagna_position()
        .and_then(|pos| place(&pos, spec, calibration, None, false));
    let lagna_sign = lagna.as_ref().ok().map(|p| p.rashi_index);

    let grahas = ALL_GRAHAS.map(|graha| {
        base.graha_position(graha).and_then(|pos| {
            place(
                &pos,
                spec,
                calibration,
                lagna_sign,
                base.is_retrograde(graha),
            )
        })
    });

    let chart = VargaChart {
        division: spec.division,
        lagna,
        grahas,
    };
    log_outcome(&chart);
    chart
}

/// Build one chart per requested D-number code.
///
/// Every code is validated before any chart is computed; an unsupported
/// code fails the whole request.
pub fn build_charts(
    base: &BaseChart,
    codes: &[u16],
    calibration: Option<&CalibrationTable>,
) -> Result<Vec<VargaChart>, ChartError> {
    let divisions = codes
        .iter()
        .map(|&code| Division::from_code(code))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_charts_for(base, &divisions, calibration))
}

/// Build one chart per already-validated division.
pub fn build_charts_for(
    base: &BaseChart,
    divisions: &[Division],
    calibration: Option<&CalibrationTable>,
) -> Vec<VargaChart> {
    divisions
        .iter()
        .map(|d| build_chart(base, &d.spec(), calibration))
        .collect()
}

/// Derive one position and house it against `lagna_sign`.
///
/// The lagna is always house 1. Other bodies get no house when the lagna
/// could not be placed (`lagna_sign == None`).
fn place(
    pos: &CelestialLongitude,
    spec: &DivisionSpec,
    calibration: Option<&CalibrationTable>,
    lagna_sign: Option<u8>,
    retrograde: bool,
) -> Result<VargaPlacement, VargaError> {
    let derived = spec.derive(pos.rashi_index, pos.degrees_in_rashi, calibration)?;
    let house = match (pos.body, lagna_sign) {
        (ChartBody::Lagna, _) => Some(house_of(derived.sign, derived.sign)),
        (_, Some(lagna)) => Some(house_of(lagna, derived.sign)),
        (_, None) => None,
    };
    Ok(VargaPlacement {
        body: pos.body,
        sidereal_longitude: pos.sidereal_longitude,
        rashi: ALL_RASHIS[derived.sign as usize],
        rashi_index: derived.sign,
        degrees_in_rashi: derived.varga_degree,
        dms: deg_to_dms(derived.varga_degree),
        slot: derived.slot,
        house,
        verified: derived.verified,
        retrograde,
    })
}

fn log_outcome(chart: &VargaChart) {
    let failures = chart.failures();
    for (body, err) in &failures {
        tracing::warn!(
            division = chart.division.name(),
            body = body.name(),
            error = %err,
            "body could not be placed"
        );
    }
    if failures.is_empty() {
        tracing::debug!(division = chart.division.name(), "chart built");
    } else {
        tracing::warn!(
            division = chart.division.name(),
            failed = failures.len(),
            "partial chart"
        );
    }
}
