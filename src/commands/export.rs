use anyhow::Result;
use monthcal_core::DayCell;

pub fn run(cells: &[DayCell]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(cells)?);
    Ok(())
}
