//! # Voltaic CLI Application
//!
//! Terminal front end for the electrical calculator suite. Currently a
//! simple prompt-driven demo: runs a voltage-drop check, saves it to the
//! history in the local data directory, and prints a TXT or CSV report on
//! request.

use std::io::{self, BufRead, Write};

use volt_core::calculators::voltage_drop::{calculate, DropStatus, Phase, VoltageDropInput};
use volt_core::calculators::Calculator;
use volt_core::history::{HistoryStore, RecordDraft};
use volt_core::materials::ConductorMaterial;
use volt_core::report::{self, ReportMeta};
use volt_core::storage::FileStorage;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|line| line.parse().ok())
        .unwrap_or(default)
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn main() {
    println!("Voltaic CLI - Electrical Calculator Suite");
    println!("=========================================");
    println!();
    println!("Running voltage-drop demo...");
    println!();

    let current_a = prompt_f64("Enter load current (A) [20.0]: ", 20.0);
    let distance_m = prompt_f64("Enter one-way distance (m) [50.0]: ", 50.0);
    let voltage_v = prompt_f64("Enter source voltage (V) [220.0]: ", 220.0);
    let area_mm2 = prompt_f64("Enter conductor cross-section (mm²) [2.5]: ", 2.5);

    let input = VoltageDropInput {
        current_a,
        distance_m,
        voltage_v,
        material: ConductorMaterial::Copper,
        area_mm2,
        phase: Phase::Single,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  VOLTAGE DROP RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Current:   {:.1} A", input.current_a);
            println!("  Distance:  {:.1} m (single-phase)", input.distance_m);
            println!("  Voltage:   {:.1} V", input.voltage_v);
            println!("  Conductor: Copper, {:.2} mm²", input.area_mm2);
            println!();
            println!("Result:");
            println!("  Effective length: {:.2} m", result.total_length_m);
            println!("  Drop:             {:.2} V ({:.2} %)", result.drop_v, result.percentage);
            println!("  Max current @3%:  {:.2} A", result.max_current_a);
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  RESULT: {} - {}",
                status_icon(result.status),
                result.status.advisory()
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }

            save_and_report(&input, result.drop_v, result.percentage, result.status);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn save_and_report(input: &VoltageDropInput, drop_v: f64, percentage: f64, status: DropStatus) {
    let storage = match FileStorage::open("voltaic_data") {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("History unavailable: {}", e);
            return;
        }
    };

    let mut history = HistoryStore::new(storage);
    let draft = RecordDraft::new(
        Calculator::VoltageDrop,
        format!(
            "I = {} A, L = {} m, V = {} V, Cu {} mm²",
            input.current_a, input.distance_m, input.voltage_v, input.area_mm2
        ),
        format!("ΔV = {:.2} V ({:.2} %)", drop_v, percentage),
    )
    .formula("ΔV = L·ρ·I/A")
    .step(format!("Effective length = {} × 2 m", input.distance_m))
    .step(status.advisory());

    match history.save(draft) {
        Ok(id) => println!("\nSaved to history as {}", id),
        Err(e) => {
            eprintln!("Could not save history: {}", e);
            return;
        }
    }

    let meta = ReportMeta {
        project: "CLI Demo".to_string(),
        responsible: "Voltaic".to_string(),
        notes: String::new(),
    };
    println!();
    let format = prompt_line("Print report? [txt/csv/none] (none): ").unwrap_or_default();
    match format.as_str() {
        "txt" => {
            println!();
            println!("{}", report::export_txt(&meta, &history.records()));
        }
        "csv" => {
            println!();
            println!("{}", report::export_csv(&meta, &history.records()));
        }
        _ => {}
    }
}

fn status_icon(status: DropStatus) -> &'static str {
    match status {
        DropStatus::Compliant => "[OK]",
        DropStatus::Marginal => "[WARN]",
        DropStatus::NonCompliant => "[FAIL]",
    }
}
