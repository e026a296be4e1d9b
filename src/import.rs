//! Reading records from a CSV file.
//!
//! The file has the headers `Amount,Comment,Date`. `Date` uses the `DD.MM.YYYY` format and may be
//! left blank, in which case the record is dated today. `Comment` and `Date` columns are optional.

use crate::model::Record;
use crate::{utils, Result};
use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

// "Amount","Comment","Date"
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CsvRecord {
    pub(crate) amount: String,
    #[serde(default)]
    pub(crate) comment: String,
    #[serde(default)]
    pub(crate) date: String,
}

impl TryFrom<CsvRecord> for Record {
    type Error = crate::Error;

    fn try_from(value: CsvRecord) -> Result<Self> {
        let amount = Decimal::from_str(&value.amount)
            .with_context(|| format!("Invalid amount '{}'", value.amount))?;
        Ok(Record::dated(amount, value.comment, &value.date)?)
    }
}

/// Parses CSV text into records, in file order.
pub fn parse_records(data: &str) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());
    let mut records = Vec::new();
    for (row_ix, result) in rdr.deserialize().enumerate() {
        // row 1 is the header
        let row = row_ix + 2;
        let csv_record: CsvRecord =
            result.with_context(|| format!("Unable to read the record at row {row}"))?;
        let record = Record::try_from(csv_record)
            .with_context(|| format!("Invalid record at row {row}"))?;
        records.push(record);
    }
    Ok(records)
}

/// Reads a records CSV file.
pub async fn load_records(path: &Path) -> Result<Vec<Record>> {
    let data = utils::read(path).await?;
    let records = parse_records(&data)
        .with_context(|| format!("Unable to parse records from {}", path.display()))?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::today;
    use crate::test::write_records;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_parse_records() {
        let data = "Amount,Comment,Date\n\
                    145,coffee,08.11.2019\n\
                    300.50,lunch,\n\
                    -20,refund,09.11.2019\n";
        let records = parse_records(data).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            Record::on(145, "coffee", NaiveDate::from_ymd_opt(2019, 11, 8).unwrap())
        );
        assert_eq!(records[1].amount(), Decimal::from_str("300.50").unwrap());
        assert_eq!(records[1].date(), today());
        assert_eq!(records[2].amount(), Decimal::from(-20));
    }

    #[test]
    fn test_parse_records_without_optional_columns() {
        let records = parse_records("Amount\n10\n20\n").unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.date() == today() && r.comment().is_empty()));
    }

    #[test]
    fn test_parse_records_trims_padded_fields() {
        let data = "Amount,Comment,Date\n 5 , tea , 24.02.2019 \n7,cake,   \n";
        let records = parse_records(data).unwrap();
        assert_eq!(
            records[0],
            Record::on(5, "tea", NaiveDate::from_ymd_opt(2019, 2, 24).unwrap())
        );
        assert_eq!(records[1].date(), today());
    }

    #[test]
    fn test_parse_records_bad_date() {
        let err = parse_records("Amount,Comment,Date\n10,x,2019-11-08\n").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("row 2"), "{msg}");
        assert!(msg.contains("DD.MM.YYYY"), "{msg}");
    }

    #[test]
    fn test_parse_records_bad_amount() {
        let err = parse_records("Amount,Comment,Date\nlots,x,\n").unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("row 2"), "{msg}");
        assert!(msg.contains("Invalid amount 'lots'"), "{msg}");
    }

    #[tokio::test]
    async fn test_load_records() {
        let dir = TempDir::new().unwrap();
        let path = write_records(dir.path(), &[("100", "bread", ""), ("50", "milk", "")]).await;
        let records = load_records(&path).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].comment(), "milk");
    }

    #[tokio::test]
    async fn test_load_records_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(load_records(&dir.path().join("missing.csv")).await.is_err());
    }
}
