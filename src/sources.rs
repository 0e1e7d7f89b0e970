//! CSV and JSON I/O for the CRM and mailing-list collaborators.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::models::{AddressRecord, EnrichmentReport, MailingListEntry, MailingListRow, CRM_FIELDS};
use crate::pipeline::MailingList;

// ============================================================================
// Readers
// ============================================================================

/// Read CRM rows. Headers are the CRM field names; missing columns are empty.
pub fn read_crm_records<R: Read>(reader: R) -> Result<Vec<AddressRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in rdr.deserialize().enumerate() {
        let record: AddressRecord = row.with_context(|| format!("Invalid CRM row {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Read mailing-list rows keyed by exact email. Rows without an email cannot
/// be joined and are dropped; for duplicate emails the last row wins.
pub fn read_mailing_list<R: Read>(reader: R) -> Result<MailingList> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut entries = MailingList::default();
    for (i, row) in rdr.deserialize().enumerate() {
        let row: MailingListRow = row.with_context(|| format!("Invalid mailing-list row {}", i + 1))?;
        if row.email.is_empty() {
            continue;
        }
        let entry = MailingListEntry::from(row);
        entries.insert(entry.email.clone(), entry);
    }
    Ok(entries)
}

pub fn read_crm_file(path: &Path) -> Result<Vec<AddressRecord>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_crm_records(file).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn read_mailing_list_file(path: &Path) -> Result<MailingList> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_mailing_list(file).with_context(|| format!("Failed to read {}", path.display()))
}

// ============================================================================
// Writers
// ============================================================================

/// Write the change-sets and failures as pretty JSON.
pub fn write_report<W: Write>(writer: W, report: &EnrichmentReport) -> Result<()> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Write full enriched rows, every field quoted.
pub fn write_records<W: Write>(writer: W, records: &[AddressRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(writer);
    wtr.write_record(CRM_FIELDS)?;
    for record in records {
        wtr.write_record(record.fields().iter().map(|(_, value)| *value))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_report_file(path: &Path, report: &EnrichmentReport) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

pub fn write_records_file(path: &Path, records: &[AddressRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_records(BufWriter::new(file), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MailingListSource, RecordFailure, RecordUpdate};

    const CRM_CSV: &str = "\
Id,Email,MailingCity,MailingCountry,MailingLatitude,MailingLongitude,MailingPostalCode,MailingState,MailingStreet,Metro_Area__c
003A,a@example.org,ST. PAUL,US,,,02134-2314,Arizona,1 Main St,
003B,,,,,,,,,
";

    #[test]
    fn test_read_crm_records() {
        let records = read_crm_records(CRM_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        let first = &records[0];
        assert_eq!(first.uid(), "003A");
        assert_eq!(first.email(), "a@example.org");
        assert_eq!(first.city, "ST. PAUL");
        // Leading zeros survive
        assert_eq!(first.zipcode, "02134-2314");
        assert_eq!(first.metro, "");
        assert_eq!(records[1].email(), "");
    }

    #[test]
    fn test_read_crm_missing_columns() {
        let data = "Id,MailingCountry\n003A,Canada\n";
        let records = read_crm_records(data.as_bytes()).unwrap();
        assert_eq!(records[0].country, "Canada");
        assert_eq!(records[0].street, "");
    }

    #[test]
    fn test_read_mailing_list() {
        let data = "\
Email Address,Address,LATITUDE,LONGITUDE,City State Country
a@example.org,,1.1,'4.2,
b@example.org,,,,\"Toronto, ON, Canada\"
,,1.0,2.0,
c@example.org,HQ,,,
";
        let list = read_mailing_list(data.as_bytes()).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(
            list["a@example.org"].source,
            MailingListSource::Coordinates {
                latitude: "1.1".to_string(),
                longitude: "4.2".to_string(),
            }
        );
        assert_eq!(
            list["b@example.org"].source,
            MailingListSource::CityStateCountry("Toronto, ON, Canada".to_string())
        );
        assert_eq!(
            list["c@example.org"].source,
            MailingListSource::AddressLabel("HQ".to_string())
        );
    }

    #[test]
    fn test_read_mailing_list_coordinates_only_export() {
        let data = "Email Address,LATITUDE,LONGITUDE\na@example.org,40.7,-74.0\n";
        let list = read_mailing_list(data.as_bytes()).unwrap();
        assert!(matches!(
            list["a@example.org"].source,
            MailingListSource::Coordinates { .. }
        ));
    }

    #[test]
    fn test_write_report() {
        let mut changes = crate::models::ChangeSet::new();
        changes.insert("MailingCountry", "USA".to_string());
        let report = EnrichmentReport {
            updates: vec![RecordUpdate {
                uid: "003A".to_string(),
                changes,
            }],
            failures: vec![RecordFailure {
                uid: "003B".to_string(),
                reason: "unrecognized country 'ZZ' for 003B".to_string(),
            }],
            records: Vec::new(),
        };
        let mut out = Vec::new();
        write_report(&mut out, &report).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["updates"][0]["Id"], "003A");
        assert_eq!(json["updates"][0]["changes"]["MailingCountry"], "USA");
        assert_eq!(json["failures"][0]["Id"], "003B");
        assert!(json.get("records").is_none());
    }

    #[test]
    fn test_write_records_quotes_everything() {
        let mut record = AddressRecord::new("003A", "a@example.org");
        record.city = "St. Paul".to_string();
        let mut out = Vec::new();
        write_records(&mut out, &[record]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "\"Id\",\"Email\",\"MailingCity\",\"MailingCountry\",\"MailingLatitude\",\"MailingLongitude\",\"MailingPostalCode\",\"MailingState\",\"MailingStreet\",\"Metro_Area__c\"");
        assert_eq!(
            lines.next().unwrap(),
            "\"003A\",\"a@example.org\",\"St. Paul\",\"\",\"\",\"\",\"\",\"\",\"\",\"\""
        );
    }

    #[test]
    fn test_records_file_roundtrip_through_reader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("enriched.csv");
        let records = read_crm_records(CRM_CSV.as_bytes()).unwrap();
        write_records_file(&path, &records).unwrap();
        assert_eq!(read_crm_file(&path).unwrap(), records);
    }
}
