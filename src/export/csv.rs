use crate::models::gain::Gain;
use csv::Writer;
use std::path::Path;

/// Writes ranked gains as `rank,name,amount` rows.
pub fn write_csv(path: &Path, gains: &[Gain]) -> csv::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["rank", "name", "amount"])?;

    for (i, g) in gains.iter().enumerate() {
        wtr.write_record(&[(i + 1).to_string(), g.name.clone(), g.amount.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
