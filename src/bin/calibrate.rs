extern crate chronal_calibration as cal;
extern crate env_logger;
extern crate failure;

use cal::{first_repeat, read_changes, total, DEFAULT_INPUT};
use failure::Error;

fn main() -> Result<(), Error> {
    env_logger::init();

    let changes = read_changes(DEFAULT_INPUT)?;

    println!("part1: {}", total(&changes));
    println!("part2: {}", first_repeat(&changes)?);

    Ok(())
}
