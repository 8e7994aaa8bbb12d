//! Command-line driver: run one model request and write the CSV report.
//!
//! Usage: `iri-profile [request.json] [output.csv]`
//!
//! Without arguments it runs the reference request (Wallops Island,
//! 2021-03-03, 11:00 UT, 600..800 km by 10) and writes `output.csv`.

use iri::{
    CoordinateSystem, DateSpec, FortranOracle, HeightRange, Hour, IriModel, ModelRequest,
    OracleStatus,
};
use std::process::ExitCode;

fn reference_request() -> iri::Result<ModelRequest> {
    ModelRequest::new(
        CoordinateSystem::Geographic,
        37.8,
        -75.4,
        2021,
        DateSpec::MonthDay { month: 3, day: 3 },
        Hour::Utc(11.0),
        HeightRange::new(600.0, 800.0, 10.0)?,
    )
}

fn run() -> iri::Result<()> {
    let mut args = std::env::args().skip(1);
    let request = match args.next() {
        Some(path) => ModelRequest::from_file(&path)?,
        None => reference_request()?,
    };
    let output_path = args.next().unwrap_or_else(|| "output.csv".to_string());

    let mut model = IriModel::new(FortranOracle::new())?;
    let outcome = iri::run_to_csv(&mut model, &request, &output_path)?;

    if outcome.status == OracleStatus::Degraded {
        log::warn!("model returned no scalar output; report may be empty");
    }
    println!("{} rows written to {}", outcome.num_rows, output_path);
    println!("{}", serde_json::to_string_pretty(&outcome.scalars)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
