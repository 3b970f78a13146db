//! Word document text extraction via docx-rs.
//!
//! Walks the document structurally (paragraphs, runs, hyperlinks,
//! tracked insertions, and tables) and emits one line per paragraph,
//! table rows as ` | `-joined cells. Legacy `.doc` buffers fail the OOXML
//! parse and pass to the next chain link.

use docx_rs::{
    read_docx, Docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCell, TableCellContent, TableChild, TableRow, TableRowChild,
};

use crate::ports::{DecodeInput, DocumentTextExtractor};

/// Structural text extractor for DOCX buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxTextExtractor;

impl DocumentTextExtractor for DocxTextExtractor {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn extract(&self, input: &DecodeInput<'_>) -> Option<String> {
        let docx = read_docx(input.bytes).ok()?;
        let text = extract_text(&docx);
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

fn extract_text(docx: &Docx) -> String {
    let mut lines = Vec::new();
    for child in &docx.document.children {
        extract_document_child(child, &mut lines);
    }
    lines.join("\n")
}

fn extract_document_child(child: &DocumentChild, lines: &mut Vec<String>) {
    match child {
        DocumentChild::Paragraph(paragraph) => {
            let text = extract_paragraph(paragraph);
            if !text.trim().is_empty() {
                lines.push(text);
            }
        }
        DocumentChild::Table(table) => {
            extract_table(table, lines);
        }
        _ => {}
    }
}

fn extract_paragraph(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        extract_paragraph_child(child, &mut buffer);
    }
    buffer
}

fn extract_paragraph_child(child: &ParagraphChild, buffer: &mut String) {
    match child {
        ParagraphChild::Run(run) => {
            extract_run(run, buffer);
        }
        ParagraphChild::Hyperlink(link) => {
            for link_child in &link.children {
                extract_paragraph_child(link_child, buffer);
            }
        }
        ParagraphChild::Insert(insert) => {
            for insert_child in &insert.children {
                if let InsertChild::Run(run) = insert_child {
                    extract_run(run, buffer);
                }
            }
        }
        _ => {}
    }
}

fn extract_run(run: &Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => buffer.push_str(&text.text),
            RunChild::InstrTextString(text) => buffer.push_str(text),
            RunChild::Tab(_) | RunChild::PTab(_) => buffer.push('\t'),
            RunChild::Break(_) => buffer.push('\n'),
            RunChild::Sym(sym) => buffer.push_str(&sym.char),
            _ => {}
        }
    }
}

fn extract_table(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        let row_text = extract_table_row(row);
        if !row_text.trim().is_empty() {
            lines.push(row_text);
        }
    }
}

fn extract_table_row(row: &TableRow) -> String {
    let mut cells = Vec::new();
    for cell in &row.cells {
        let TableRowChild::TableCell(cell) = cell;
        let text = extract_table_cell(cell);
        if !text.trim().is_empty() {
            cells.push(text);
        }
    }
    cells.join(" | ")
}

fn extract_table_cell(cell: &TableCell) -> String {
    let mut parts = Vec::new();
    for content in &cell.children {
        match content {
            TableCellContent::Paragraph(paragraph) => {
                let text = extract_paragraph(paragraph);
                if !text.trim().is_empty() {
                    parts.push(text);
                }
            }
            TableCellContent::Table(table) => {
                let mut nested_lines = Vec::new();
                extract_table(table, &mut nested_lines);
                if !nested_lines.is_empty() {
                    parts.push(nested_lines.join(" "));
                }
            }
            _ => {}
        }
    }
    parts.join(" ")
}
