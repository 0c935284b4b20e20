use crate::error::Result;
use crate::types::HackathonRecord;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// Where the two result files go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

impl OutputPaths {
    /// `<prefix>.csv` and `<prefix>.json`; the prefix may include directories
    pub fn from_prefix(prefix: impl AsRef<Path>) -> Self {
        let prefix = prefix.as_ref().as_os_str().to_os_string();
        let mut csv = prefix.clone();
        csv.push(".csv");
        let mut json = prefix;
        json.push(".json");
        Self {
            csv: PathBuf::from(csv),
            json: PathBuf::from(json),
        }
    }
}

/// One CSV line. List fields are stored as JSON arrays inside the cell.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    name: Option<&'a str>,
    link: Option<&'a str>,
    sponsors: String,
    contacts: String,
}

impl<'a> CsvRow<'a> {
    fn from_record(record: &'a HackathonRecord) -> Result<Self> {
        Ok(Self {
            name: record.name.as_deref(),
            link: record.link.as_deref(),
            sponsors: serde_json::to_string(&record.sponsors)?,
            contacts: serde_json::to_string(&record.contacts)?,
        })
    }
}

/// Write records to both the CSV and the JSON file, replacing existing files.
///
/// The two writes are independent: if the second fails the first stays written.
#[instrument(skip(records), fields(count = records.len()))]
pub fn write_results(records: &[HackathonRecord], paths: &OutputPaths) -> Result<()> {
    write_csv(records, &paths.csv)?;
    write_json(records, &paths.json)?;
    Ok(())
}

pub fn write_csv(records: &[HackathonRecord], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    if records.is_empty() {
        // serialize() only emits the header alongside the first row
        writer.write_record(["name", "link", "sponsors", "contacts"])?;
    }
    for record in records {
        writer.serialize(CsvRow::from_record(record)?)?;
    }
    writer.flush()?;
    info!("💾 Saved {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn write_json(records: &[HackathonRecord], path: &Path) -> Result<()> {
    let json_content = serde_json::to_string_pretty(records)?;
    fs::write(path, json_content)?;
    info!("💾 Saved {} records to {}", records.len(), path.display());
    Ok(())
}

/// Load records previously written by [`write_json`]
pub fn read_json(path: &Path) -> Result<Vec<HackathonRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
