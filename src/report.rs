use std::path::Path;

use crate::error::Error;
use crate::models::ProductRecord;
use crate::store;

/// Write the delta to the report file. An empty delta still writes the
/// header row, so the file reads as an explicit "nothing new" rather than
/// a missing result.
pub fn write(path: &Path, delta: &[ProductRecord]) -> Result<(), Error> {
    store::write_records(path, delta)
}

/// Print the delta to stdout in the same delimited form as the report
/// file, or a distinct message when there is nothing new.
pub fn print(delta: &[ProductRecord]) -> Result<(), Error> {
    if delta.is_empty() {
        println!("No new products since the last run. Check again later.");
        return Ok(());
    }

    println!("{} new product(s):", delta.len());
    print!("{}", render(delta)?);
    Ok(())
}

fn render(delta: &[ProductRecord]) -> Result<String, Error> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(&mut buf);
        writer.write_record(ProductRecord::HEADER)?;
        for record in delta {
            writer.serialize(record)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
