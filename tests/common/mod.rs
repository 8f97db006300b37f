use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `rows` debts with growing balances and rates between 0% and 4%.
pub fn generate_debts_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["name", "balance", "apr", "min_payment"])?;

    for i in 1..=rows {
        wtr.write_record([
            format!("Debt {i}"),
            format!("{}.50", 100 * i),
            (i % 5).to_string(),
            "5".to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
