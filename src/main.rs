use anyhow::Context;
use gridraw::{record, Grid};

/// Output path of the generated fixture, relative to the working directory
const FIXTURE_PATH: &str = "test3.raw";

const FIXTURE_WIDTH: usize = 3;
const FIXTURE_HEIGHT: usize = 3;
const FIXTURE_BASE: i64 = 10;

/// Sample buffer for the windowed decode demo: two whole records and a partial
/// trailing one.
const SAMPLE: [u8; 10] = [1, 0, 0, 0, 5, 0, 0, 0, 9, 10];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let grid = Grid::new(FIXTURE_WIDTH, FIXTURE_HEIGHT, FIXTURE_BASE);
    grid.write_file(FIXTURE_PATH)
        .with_context(|| format!("failed to write fixture to {}", FIXTURE_PATH))?;
    log::info!(
        "wrote {} records ({} bytes) to {}",
        grid.len(),
        grid.encoded_len(),
        FIXTURE_PATH
    );

    let value = record::decode_record_at(&SAMPLE, 1).context("failed to decode sample window")?;
    println!("{}", value);
    Ok(())
}
