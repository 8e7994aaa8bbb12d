//! End-to-end pipeline tests over a deterministic oracle.

use iri::{
    CoordinateSystem, DateSpec, Error, HeightRange, Hour, IriModel, ModelRequest, Oracle,
    OracleInputs, OracleStatus, RawHeightBuffer,
};

/// Deterministic stand-in for the Fortran model: fills every computed
/// height step with synthetic but plausible values.
struct SyntheticOracle;

impl Oracle for SyntheticOracle {
    fn prime(&mut self) -> iri::Result<()> {
        Ok(())
    }

    fn compute(&mut self, inputs: &OracleInputs, outf: &mut [f32], oarr: &mut [f32]) {
        let rows =
            ((inputs.height_end - inputs.height_begin) / inputs.height_step).floor() as usize + 1;
        for row in 0..rows {
            let height = inputs.height_begin + row as f32 * inputs.height_step;
            // electron density in m^-3, falling off with height
            outf[RawHeightBuffer::native_offset(row, 0)] = 1.0e11 * (1000.0 / height);
            outf[RawHeightBuffer::native_offset(row, 2)] = 305.2; // hmF2
            outf[RawHeightBuffer::native_offset(row, 3)] = 1800.0 + height; // TeF2
        }
        oarr[0] = 4.2e11; // NmF2
        oarr[1] = 305.2; // hmF2
        oarr[45] = 77.3; // 81-day F10.7
    }
}

fn reference_request() -> ModelRequest {
    ModelRequest::new(
        CoordinateSystem::Geographic,
        37.8,
        -75.4,
        2021,
        DateSpec::MonthDay { month: 3, day: 3 },
        Hour::Utc(11.0),
        HeightRange::new(600.0, 800.0, 10.0).unwrap(),
    )
    .unwrap()
}

#[test]
fn reference_run_writes_the_expected_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.csv");

    let mut model = IriModel::new(SyntheticOracle).unwrap();
    let outcome = iri::run_to_csv(&mut model, &reference_request(), &path).unwrap();

    assert_eq!(outcome.status, OracleStatus::Complete);
    assert_eq!(outcome.num_rows, 21);
    assert_eq!(outcome.scalars.peak_f2_density, 4.2e11);
    assert_eq!(outcome.scalars.f2_peak_height, 305.2);
    assert_eq!(outcome.scalars.f107_81day, 77.3);

    let report = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 22);
    assert!(lines[0].starts_with("Height (km),Ne (cm^-3),NmF2 (cm^-3)"));
    assert!(lines[1].starts_with("600,"));
    assert!(lines[21].starts_with("800,"));

    // column 0 converted to cm^-3 then rounded half up:
    // 1.0e11 * (1000/600) / 1.0e6 = 166666.6..
    let first: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(first[1], "166667");
    // hmF2 column passes through unconverted, 305.2 rounds to 305
    assert_eq!(first[3], "305");
}

#[test]
fn zero_step_fails_before_the_oracle_runs() {
    let mut request = reference_request();
    request.heights.step = 0.0;
    let mut model = IriModel::new(SyntheticOracle).unwrap();
    assert!(matches!(
        model.run(&request),
        Err(Error::InvalidHeightRange(_))
    ));
}

#[test]
fn unwritable_sink_is_only_an_output_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("output.csv");

    let mut model = IriModel::new(SyntheticOracle).unwrap();
    // validation passed; the one failure left is the sink
    assert!(matches!(
        iri::run_to_csv(&mut model, &reference_request(), &path),
        Err(Error::OutputWrite(_))
    ));
    assert!(!path.exists());
}

#[test]
fn silent_oracle_degrades_but_still_renders() {
    struct SilentOracle;
    impl Oracle for SilentOracle {
        fn prime(&mut self) -> iri::Result<()> {
            Ok(())
        }
        fn compute(&mut self, _: &OracleInputs, _: &mut [f32], _: &mut [f32]) {}
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.csv");

    let mut model = IriModel::new(SilentOracle).unwrap();
    let outcome = iri::run_to_csv(&mut model, &reference_request(), &path).unwrap();
    assert_eq!(outcome.status, OracleStatus::Degraded);
    assert_eq!(outcome.num_rows, 21);
    // zero-filled rows render as zeros rather than aborting the run
    let report = std::fs::read_to_string(&path).unwrap();
    assert_eq!(report.lines().count(), 22);
    assert!(report.lines().nth(1).unwrap().starts_with("600,0,0,"));
}
