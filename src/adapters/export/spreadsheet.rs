//! Spreadsheet export: two-sheet xlsx workbook and flat CSV.
//!
//! Workbook layout: a Requirements sheet (ID, Requirement) and a Test
//! Cases sheet (ID, Description, Precondition, Type, Expected Result,
//! Priority, Requirement). The CSV interleaves both record kinds under a
//! single header, requirement rows first.

use rust_xlsxwriter::Workbook;

use crate::domain::{ExportFormat, Priority, Requirement, TestCase, TestCaseType};
use crate::ports::{ExportArtifact, ExportError, SpreadsheetWriter};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const CSV_CONTENT_TYPE: &str = "text/csv";

const TEST_CASE_HEADERS: [&str; 7] = [
    "ID",
    "Description",
    "Precondition",
    "Type",
    "Expected Result",
    "Priority",
    "Requirement",
];

/// Writer producing xlsx workbooks and CSV text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetExporter;

impl SpreadsheetWriter for SpreadsheetExporter {
    fn write(
        &self,
        requirements: &[Requirement],
        test_cases: &[TestCase],
        format: ExportFormat,
        title: &str,
    ) -> Result<ExportArtifact, ExportError> {
        match format {
            ExportFormat::Excel => Ok(ExportArtifact {
                bytes: write_workbook(requirements, test_cases)?,
                content_type: XLSX_CONTENT_TYPE,
                filename: format!("{}.xlsx", title),
            }),
            ExportFormat::Csv => Ok(ExportArtifact {
                bytes: write_csv(requirements, test_cases)?,
                content_type: CSV_CONTENT_TYPE,
                filename: format!("{}.csv", title),
            }),
        }
    }
}

fn case_type_label(case_type: TestCaseType) -> &'static str {
    match case_type {
        TestCaseType::Positive => "positive",
        TestCaseType::Negative => "negative",
        TestCaseType::EdgeCase => "edge_case",
        TestCaseType::Performance => "performance",
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Low => "low",
    }
}

fn write_workbook(
    requirements: &[Requirement],
    test_cases: &[TestCase],
) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();

    let requirements_sheet = workbook.add_worksheet();
    requirements_sheet
        .set_name("Requirements")
        .map_err(|e| ExportError::serialization(e.to_string()))?;
    requirements_sheet
        .write_string(0, 0, "ID")
        .and_then(|sheet| sheet.write_string(0, 1, "Requirement"))
        .map_err(|e| ExportError::serialization(e.to_string()))?;
    for (row, requirement) in requirements.iter().enumerate() {
        let row = (row + 1) as u32;
        requirements_sheet
            .write_string(row, 0, &requirement.id)
            .and_then(|sheet| sheet.write_string(row, 1, &requirement.text))
            .map_err(|e| ExportError::serialization(e.to_string()))?;
    }

    let cases_sheet = workbook.add_worksheet();
    cases_sheet
        .set_name("Test Cases")
        .map_err(|e| ExportError::serialization(e.to_string()))?;
    for (column, header) in TEST_CASE_HEADERS.iter().enumerate() {
        cases_sheet
            .write_string(0, column as u16, *header)
            .map_err(|e| ExportError::serialization(e.to_string()))?;
    }
    for (row, case) in test_cases.iter().enumerate() {
        let row = (row + 1) as u32;
        cases_sheet
            .write_string(row, 0, &case.id)
            .and_then(|sheet| sheet.write_string(row, 1, &case.description))
            .and_then(|sheet| sheet.write_string(row, 2, &case.precondition))
            .and_then(|sheet| sheet.write_string(row, 3, case_type_label(case.case_type)))
            .and_then(|sheet| sheet.write_string(row, 4, &case.expected_result))
            .and_then(|sheet| sheet.write_string(row, 5, priority_label(case.priority)))
            .and_then(|sheet| sheet.write_string(row, 6, &case.requirement))
            .map_err(|e| ExportError::serialization(e.to_string()))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::serialization(e.to_string()))
}

fn write_csv(requirements: &[Requirement], test_cases: &[TestCase]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record([
            "Type",
            "ID",
            "Description",
            "TestType",
            "ExpectedResult",
            "RequirementID",
        ])
        .map_err(|e| ExportError::serialization(e.to_string()))?;

    for requirement in requirements {
        writer
            .write_record([
                "Requirement",
                requirement.id.as_str(),
                requirement.text.as_str(),
                "",
                "",
                "",
            ])
            .map_err(|e| ExportError::serialization(e.to_string()))?;
    }

    for case in test_cases {
        writer
            .write_record([
                "TestCase",
                case.id.as_str(),
                case.description.as_str(),
                case_type_label(case.case_type),
                case.expected_result.as_str(),
                case.requirement.as_str(),
            ])
            .map_err(|e| ExportError::serialization(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::serialization(e.to_string()))
}
