//! # Report Exporter
//!
//! Read-only projections of the history log: JSON, CSV, plain-text, and a
//! print-ready HTML document. The exporter consumes records plus project
//! metadata and produces strings; it holds no business logic and never
//! touches storage itself.
//!
//! Field names in the exported documents are the localized (Spanish) names
//! of the established wire format; changing them would break downstream
//! consumers of previously exported reports.
//!
//! No binary PDF is generated: the HTML document is styled for A4 printing
//! and handed to the host's print-to-PDF facility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::VoltResult;
use crate::history::CalculationRecord;

/// Application version string stamped into report metadata.
pub const APP_VERSION: &str = concat!("Voltaic v", env!("CARGO_PKG_VERSION"));

/// Project metadata supplied by the configuration layer, consumed verbatim.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportMeta {
    /// Project name
    pub project: String,
    /// Responsible party
    pub responsible: String,
    /// Free-text notes
    pub notes: String,
}

impl ReportMeta {
    fn notes_or_na(&self) -> &str {
        if self.notes.is_empty() {
            "N/A"
        } else {
            &self.notes
        }
    }
}

/// JSON envelope. Field names are the export wire format.
#[derive(Debug, Serialize)]
struct JsonEnvelope<'a> {
    proyecto: &'a str,
    responsable: &'a str,
    datos: &'a str,
    fecha_generacion: String,
    version_app: &'static str,
    historial: Vec<JsonEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    id: String,
    fecha: String,
    calculadora: &'a str,
    formula: &'a str,
    entradas: &'a str,
    resultado: &'a str,
    pasos: &'a [String],
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn format_time(date: &DateTime<Utc>) -> String {
    date.format("%H:%M:%S").to_string()
}

fn format_timestamp(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Group records by calendar date, preserving first-seen (newest-first)
/// order of the groups and of the records within each group.
fn group_by_date(records: &[CalculationRecord]) -> Vec<(String, Vec<&CalculationRecord>)> {
    let mut groups: Vec<(String, Vec<&CalculationRecord>)> = Vec::new();
    for record in records {
        let key = format_date(&record.date);
        match groups.iter_mut().find(|(date, _)| *date == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }
    groups
}

/// Export the history as a pretty-printed JSON report.
pub fn export_json(meta: &ReportMeta, records: &[CalculationRecord]) -> VoltResult<String> {
    let envelope = JsonEnvelope {
        proyecto: &meta.project,
        responsable: &meta.responsible,
        datos: meta.notes_or_na(),
        fecha_generacion: format_timestamp(&Utc::now()),
        version_app: APP_VERSION,
        historial: records
            .iter()
            .map(|r| JsonEntry {
                id: r.id.to_string(),
                fecha: format_timestamp(&r.date),
                calculadora: &r.calculator,
                formula: r.formula.as_deref().unwrap_or("N/A"),
                entradas: &r.inputs,
                resultado: &r.result,
                pasos: &r.steps,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Export the history as UTF-8 CSV with BOM.
///
/// Layout: metadata header lines, a blank line, the fixed column header
/// row, one row per record, then a summary row with the total count.
pub fn export_csv(meta: &ReportMeta, records: &[CalculationRecord]) -> String {
    let mut csv = String::from("\u{feff}");
    csv.push_str("REPORTE TÉCNICO - FORMATO CSV PROFESIONAL\n");
    csv.push_str(&format!("Proyecto,{}\n", csv_field(&meta.project)));
    csv.push_str(&format!("Responsable,{}\n", csv_field(&meta.responsible)));
    csv.push_str(&format!("Notas,{}\n", csv_field(meta.notes_or_na())));
    csv.push_str(&format!(
        "Fecha de generación,{}\n",
        format_timestamp(&Utc::now())
    ));
    csv.push_str(&format!("Versión,{APP_VERSION}\n"));
    csv.push('\n');

    csv.push_str("ID,Fecha,Hora,Calculadora,Fórmula,Entradas,Resultado,Pasos_Detallados\n");

    for record in records {
        let row = [
            record.id.to_string(),
            format_date(&record.date),
            format_time(&record.date),
            record.calculator.clone(),
            record.formula.clone().unwrap_or_default(),
            record.inputs.clone(),
            record.result.clone(),
            record.steps.join(" | "),
        ];
        let quoted: Vec<String> = row.iter().map(|f| csv_field(f)).collect();
        csv.push_str(&quoted.join(","));
        csv.push('\n');
    }

    csv.push_str(&format!(
        "\nRESUMEN,,,Total Registros:,{},,,",
        records.len()
    ));
    csv
}

/// Export the history as a formatted plain-text report grouped by date.
pub fn export_txt(meta: &ReportMeta, records: &[CalculationRecord]) -> String {
    let mut txt = String::new();
    txt.push_str("=======================================================\n");
    txt.push_str("               REPORTE TÉCNICO - VOLTAIC\n");
    txt.push_str("=======================================================\n\n");
    txt.push_str(&format!("PROYECTO: {}\n", meta.project));
    txt.push_str(&format!("RESPONSABLE: {}\n", meta.responsible));
    txt.push_str(&format!(
        "FECHA DE GENERACIÓN: {}\n",
        format_timestamp(&Utc::now())
    ));
    txt.push_str(&format!("NOTAS: {}\n", meta.notes_or_na()));
    txt.push_str(&format!("VERSIÓN: {APP_VERSION}\n\n"));

    for (date, members) in group_by_date(records) {
        txt.push_str(&format!("FECHA: {date}\n"));
        txt.push_str(&"-".repeat(40));
        txt.push('\n');

        for (idx, record) in members.iter().enumerate() {
            txt.push_str(&format!("\n{}. [{}]\n", idx + 1, record.calculator));
            if let Some(formula) = &record.formula {
                txt.push_str(&format!("   Fórmula: {formula}\n"));
            }
            txt.push_str(&format!("   Entradas: {}\n", record.inputs));
            txt.push_str(&format!("   Resultado: {}\n", record.result));
            if !record.steps.is_empty() {
                txt.push_str("   Procedimiento:\n");
                for step in &record.steps {
                    txt.push_str(&format!("      - {step}\n"));
                }
            }
        }
        txt.push('\n');
    }

    txt.push_str("=======================================================\n");
    txt.push_str(&format!("Total de registros: {}\n", records.len()));
    txt
}

/// Minimal HTML entity escaping for text nodes and attribute values.
fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Export the history as a self-contained, A4-print-styled HTML document.
pub fn export_html(meta: &ReportMeta, records: &[CalculationRecord]) -> String {
    let mut body = String::new();
    for (date, members) in group_by_date(records) {
        body.push_str(&format!("    <section class=\"day\">\n      <h2>{date}</h2>\n"));
        for record in members {
            body.push_str("      <article class=\"record\">\n");
            body.push_str(&format!(
                "        <h3>{} <span class=\"time\">{}</span></h3>\n",
                html_escape(&record.calculator),
                format_time(&record.date)
            ));
            if let Some(formula) = &record.formula {
                body.push_str(&format!(
                    "        <p class=\"formula\">{}</p>\n",
                    html_escape(formula)
                ));
            }
            body.push_str(&format!(
                "        <p><strong>Entradas:</strong> {}</p>\n",
                html_escape(&record.inputs)
            ));
            body.push_str(&format!(
                "        <p><strong>Resultado:</strong> {}</p>\n",
                html_escape(&record.result)
            ));
            if !record.steps.is_empty() {
                body.push_str("        <ol class=\"steps\">\n");
                for step in &record.steps {
                    body.push_str(&format!("          <li>{}</li>\n", html_escape(step)));
                }
                body.push_str("        </ol>\n");
            }
            body.push_str("      </article>\n");
        }
        body.push_str("    </section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Reporte Técnico - {project}</title>\n\
         <style>\n\
         @page {{ size: A4 portrait; margin: 1.5cm; }}\n\
         body {{ font-family: sans-serif; color: #000; line-height: 1.4; margin: 0; }}\n\
         header {{ border-bottom: 3px solid #000; padding-bottom: 12px; margin-bottom: 24px; }}\n\
         h1 {{ margin: 0 0 4px 0; }}\n\
         .meta {{ color: #333; font-size: 0.9em; }}\n\
         .day h2 {{ border-bottom: 1px solid #999; padding-bottom: 4px; }}\n\
         .record {{ margin: 12px 0; page-break-inside: avoid; }}\n\
         .record .time {{ color: #666; font-weight: normal; font-size: 0.8em; }}\n\
         .formula {{ font-style: italic; }}\n\
         .steps li {{ margin: 2px 0; }}\n\
         footer {{ margin-top: 24px; border-top: 1px solid #999; font-size: 0.85em; }}\n\
         </style>\n</head>\n<body>\n\
         <header>\n\
         <h1>Reporte Técnico - {project}</h1>\n\
         <p class=\"meta\">Responsable: {responsible} · Generado: {generated} · {version}</p>\n\
         <p class=\"meta\">Notas: {notes}</p>\n\
         </header>\n\
         <main>\n{body}  </main>\n\
         <footer>Total de registros: {count}</footer>\n\
         </body>\n</html>\n",
        project = html_escape(&meta.project),
        responsible = html_escape(&meta.responsible),
        generated = format_timestamp(&Utc::now()),
        version = APP_VERSION,
        notes = html_escape(meta.notes_or_na()),
        body = body,
        count = records.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::Calculator;
    use crate::history::{HistoryStore, RecordDraft};
    use crate::storage::MemoryStorage;

    fn sample_records() -> Vec<CalculationRecord> {
        let mut store = HistoryStore::new(MemoryStorage::new());
        store
            .save(
                RecordDraft::new(Calculator::Ohm, "V = 12 V, I = 2 A", "R = 6.00 Ω")
                    .formula("R = V / I")
                    .step("R = 12 / 2 = 6.00 Ω"),
            )
            .unwrap();
        store
            .save(RecordDraft::new(
                Calculator::LedResistor,
                "Vin = 5 V, Vled = 2 V, I = 20 mA",
                "R = 150.00 Ω, P = 0.060 W",
            ))
            .unwrap();
        store.records()
    }

    fn meta() -> ReportMeta {
        ReportMeta {
            project: "Plant A".to_string(),
            responsible: "J. Doe".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_json_envelope() {
        let json = export_json(&meta(), &sample_records()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["proyecto"], "Plant A");
        assert_eq!(value["datos"], "N/A");
        assert_eq!(value["version_app"], APP_VERSION);
        let historial = value["historial"].as_array().unwrap();
        assert_eq!(historial.len(), 2);
        // newest first: the LED record was saved last
        assert_eq!(historial[0]["calculadora"], "LED Resistor");
        // missing formula maps to "N/A"
        assert_eq!(historial[0]["formula"], "N/A");
        assert_eq!(historial[1]["formula"], "R = V / I");
    }

    #[test]
    fn test_csv_layout() {
        let csv = export_csv(&meta(), &sample_records());

        assert!(csv.starts_with('\u{feff}'));
        assert!(csv.contains("Proyecto,\"Plant A\"\n"));
        assert!(csv.contains(
            "ID,Fecha,Hora,Calculadora,Fórmula,Entradas,Resultado,Pasos_Detallados\n"
        ));
        // one quoted row per record plus the summary
        assert!(csv.contains("\"Ohm's Law\""));
        assert!(csv.contains("RESUMEN,,,Total Registros:,2,,,"));
        // blank line between metadata and the header row
        assert!(csv.contains("\n\nID,"));
    }

    #[test]
    fn test_csv_quote_escaping() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        store
            .save(RecordDraft::new(
                Calculator::Capacitor,
                "C = 10 \"uF\"",
                "total",
            ))
            .unwrap();
        let csv = export_csv(&meta(), &store.records());
        assert!(csv.contains("\"C = 10 \"\"uF\"\"\""));
    }

    #[test]
    fn test_csv_metadata_is_quoted() {
        let meta = ReportMeta {
            project: "Plant A, Line 2".to_string(),
            responsible: "Doe, J.".to_string(),
            notes: "48 V \"DC\" bus".to_string(),
        };
        let csv = export_csv(&meta, &[]);
        // commas and quotes in metadata stay inside one field
        assert!(csv.contains("Proyecto,\"Plant A, Line 2\"\n"));
        assert!(csv.contains("Responsable,\"Doe, J.\"\n"));
        assert!(csv.contains("Notas,\"48 V \"\"DC\"\" bus\"\n"));
    }

    #[test]
    fn test_txt_grouping_and_steps() {
        let records = sample_records();
        let txt = export_txt(&meta(), &records);

        assert!(txt.contains("PROYECTO: Plant A"));
        assert!(txt.contains("1. [LED Resistor]"));
        assert!(txt.contains("2. [Ohm's Law]"));
        assert!(txt.contains("- R = 12 / 2 = 6.00 Ω"));
        assert!(txt.contains("Total de registros: 2"));
        // both records share a date, so one group header
        assert_eq!(txt.matches("FECHA: ").count(), 1);
    }

    #[test]
    fn test_html_document() {
        let html = export_html(&meta(), &sample_records());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Reporte Técnico - Plant A"));
        assert!(html.contains("size: A4 portrait"));
        assert!(html.contains("Ohm&#39;s Law") || html.contains("Ohm's Law"));
        assert!(html.contains("Total de registros: 2"));
    }

    #[test]
    fn test_html_escaping() {
        let mut store = HistoryStore::new(MemoryStorage::new());
        store
            .save(RecordDraft::new(
                Calculator::Power,
                "<script>alert(1)</script>",
                "P & Q",
            ))
            .unwrap();
        let html = export_html(&meta(), &store.records());
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("P &amp; Q"));
    }

    #[test]
    fn test_empty_history() {
        let json = export_json(&meta(), &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["historial"].as_array().unwrap().len(), 0);

        let csv = export_csv(&meta(), &[]);
        assert!(csv.contains("Total Registros:,0"));

        let txt = export_txt(&meta(), &[]);
        assert!(txt.contains("Total de registros: 0"));
    }
}
