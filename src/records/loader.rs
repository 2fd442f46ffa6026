//! CSV Loader
//!
//! Reads the healthcare source table into an immutable `RecordTable`.
//! Columns are located by header name, so column order and extra columns in
//! the source file do not matter.

use super::error::{LoadError, LoadResult};
use super::types::{CategoryField, Record, RecordTable};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::io::Read;
use std::path::Path;

const AGE: &str = "Age";
const BILLING_AMOUNT: &str = "Billing Amount";
const DATE_OF_ADMISSION: &str = "Date of Admission";

/// Date-only formats tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time formats tried in order; the time part is discarded
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Header positions of the columns the dashboard uses
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    gender: usize,
    age: usize,
    medical_condition: usize,
    insurance_provider: usize,
    billing_amount: usize,
    date_of_admission: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> LoadResult<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };

        Ok(Self {
            gender: find(CategoryField::Gender.column_name())?,
            age: find(AGE)?,
            medical_condition: find(CategoryField::MedicalCondition.column_name())?,
            insurance_provider: find(CategoryField::InsuranceProvider.column_name())?,
            billing_amount: find(BILLING_AMOUNT)?,
            date_of_admission: find(DATE_OF_ADMISSION)?,
        })
    }
}

/// Loads the record table from CSV
#[derive(Debug, Clone, Default)]
pub struct TableLoader;

impl TableLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a table from a file on disk
    pub fn load(&self, path: &Path) -> LoadResult<RecordTable> {
        let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = self.load_reader(file)?;

        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            missing_billing = table.missing_billing_count(),
            "Loaded record table"
        );

        Ok(table)
    }

    /// Load a table from a CSV string (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> LoadResult<RecordTable> {
        self.load_reader(csv_data.as_bytes())
    }

    fn load_reader<R: Read>(&self, reader: R) -> LoadResult<RecordTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let columns = ColumnMap::from_headers(reader.headers()?)?;

        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = result?;
            // Header occupies line 1
            let line = row
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(idx + 2);
            records.push(parse_row(&row, &columns, line)?);
        }

        Ok(RecordTable::new(records))
    }
}

fn parse_row(row: &csv::StringRecord, columns: &ColumnMap, line: usize) -> LoadResult<Record> {
    let field = |idx: usize| row.get(idx).unwrap_or("").trim();

    let age_str = field(columns.age);
    let age = parse_age(age_str).ok_or_else(|| LoadError::InvalidAge {
        line,
        value: age_str.to_string(),
    })?;

    let date_str = field(columns.date_of_admission);
    let date_of_admission = parse_date(date_str).ok_or_else(|| LoadError::InvalidDate {
        line,
        value: date_str.to_string(),
    })?;

    let billing_str = field(columns.billing_amount);
    let billing_amount = parse_billing(billing_str);
    if billing_amount.is_none() {
        tracing::debug!(line, value = billing_str, "Billing amount coerced to missing");
    }

    Ok(Record::new(
        field(columns.gender),
        age,
        field(columns.medical_condition),
        field(columns.insurance_provider),
        billing_amount,
        date_of_admission,
    ))
}

/// Parse a billing amount; anything that is not a finite number is missing
pub fn parse_billing(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an age, accepting whole-number float forms such as `42.0`
pub fn parse_age(s: &str) -> Option<u32> {
    if let Ok(age) = s.parse::<u32>() {
        return Some(age);
    }

    let value = s.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Some(value as u32)
    } else {
        None
    }
}

/// Parse an admission date in any of the accepted formats
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::YearMonth;
    use std::io::Write;

    const HEADER: &str =
        "Name,Age,Gender,Medical Condition,Date of Admission,Insurance Provider,Billing Amount";

    #[test]
    fn test_load_scenario_with_bad_billing() {
        let csv_data = format!(
            "{HEADER}
Alice,30,F,Diabetes,2021-03-05,Aetna,200
Bob,41,M,Diabetes,2021-03-20,Cigna,bad-value"
        );

        let table = TableLoader::new().load_str(&csv_data).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.missing_billing_count(), 1);
        assert_eq!(table.records()[0].billing_amount, Some(200.0));
        for record in table.iter() {
            assert_eq!(record.year_month, YearMonth::new(2021, 3));
        }
    }

    #[test]
    fn test_columns_found_by_name_with_whitespace() {
        let csv_data = " Billing Amount , Date of Admission ,Gender,Age,Insurance Provider,Medical Condition
1500.5,2022-01-10,Female,52,Medicare,Cancer";

        let table = TableLoader::new().load_str(csv_data).unwrap();
        let record = &table.records()[0];
        assert_eq!(record.gender, "Female");
        assert_eq!(record.age, 52);
        assert_eq!(record.billing_amount, Some(1500.5));
        assert_eq!(record.medical_condition, "Cancer");
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let csv_data = "Age,Gender,Medical Condition,Date of Admission,Insurance Provider
30,F,Diabetes,2021-03-05,Aetna";

        let err = TableLoader::new().load_str(csv_data).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Billing Amount")));
    }

    #[test]
    fn test_missing_category_column_named() {
        let csv_data = "Age,Gender,Medical Condition,Date of Admission,Billing Amount
30,F,Diabetes,2021-03-05,200";

        let err = TableLoader::new().load_str(csv_data).unwrap_err();
        match err {
            LoadError::MissingColumn(name) => {
                assert_eq!(name, CategoryField::InsuranceProvider.column_name());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_date_is_fatal() {
        let csv_data = format!(
            "{HEADER}
Alice,30,F,Diabetes,2021-03-05,Aetna,200
Bob,41,M,Diabetes,not-a-date,Cigna,300"
        );

        let err = TableLoader::new().load_str(&csv_data).unwrap_err();
        match err {
            LoadError::InvalidDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_age_is_fatal() {
        let csv_data = format!(
            "{HEADER}
Alice,thirty,F,Diabetes,2021-03-05,Aetna,200"
        );

        let err = TableLoader::new().load_str(&csv_data).unwrap_err();
        assert!(matches!(err, LoadError::InvalidAge { line: 2, .. }));
    }

    #[test]
    fn test_parse_billing() {
        assert_eq!(parse_billing("18856.281305978155"), Some(18856.281305978155));
        assert_eq!(parse_billing(" -502.5 "), Some(-502.5));
        assert_eq!(parse_billing(""), None);
        assert_eq!(parse_billing("NaN"), None);
        assert_eq!(parse_billing("inf"), None);
        assert_eq!(parse_billing("$100"), None);
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("42"), Some(42));
        assert_eq!(parse_age("42.0"), Some(42));
        assert_eq!(parse_age("42.5"), None);
        assert_eq!(parse_age("-1"), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 5).unwrap();
        assert_eq!(parse_date("2021-03-05"), Some(expected));
        assert_eq!(parse_date("2021/03/05"), Some(expected));
        assert_eq!(parse_date("03/05/2021"), Some(expected));
        assert_eq!(parse_date("2021-03-05 14:30:00"), Some(expected));
        assert_eq!(parse_date("2021-03-05T14:30:00"), Some(expected));
        assert_eq!(parse_date("2021-03-05T14:30:00+00:00"), Some(expected));
        assert_eq!(parse_date("March 5th"), None);
    }

    #[test]
    fn test_load_from_file_twice_is_identical() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "Alice,30,F,Diabetes,2021-03-05,Aetna,200").unwrap();
        writeln!(file, "Bob,41,M,Asthma,2020-11-20,Cigna,oops").unwrap();
        file.flush().unwrap();

        let loader = TableLoader::new();
        let first = loader.load(file.path()).unwrap();
        let second = loader.load(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unreadable_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = TableLoader::new()
            .load(&dir.path().join("missing.csv"))
            .unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
