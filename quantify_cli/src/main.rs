//! # Quantify CLI Application
//!
//! Terminal front end for the estimation engine. Picks an element type,
//! prompts for its catalog fields, and prints the materials breakdown plus
//! the JSON result.

use std::io::{self, BufRead, Write};

use quantify_core::config::GlobalConfig;
use quantify_core::estimates::{calculate, ElementType};
use quantify_core::inputs::{FieldValue, InputMap};
use quantify_core::schema::{fields_for, FieldKind};

fn prompt_line(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt, "").parse().unwrap_or(default)
}

fn main() {
    println!("Quantify CLI - Construction Quantity Estimator");
    println!("==============================================");
    println!();
    println!("Element types:");
    for element in ElementType::ALL {
        println!("  [{:>3}] {}", element.code(), element.display_name());
    }
    println!();

    let raw = prompt_line("Element type [C]: ", "C");
    let element = match ElementType::from_str_flexible(&raw) {
        Ok(element) => element,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    println!();
    println!("Entering {} parameters (blank keeps the default):", element.display_name());
    println!();

    let mut inputs = InputMap::new();
    for spec in fields_for(element) {
        let unit = spec.unit.map(|u| format!(" ({})", u)).unwrap_or_default();
        match spec.kind {
            FieldKind::Number { fallback } => {
                let value = prompt_f64(
                    &format!("  {}{} [{}]: ", spec.label, unit, fallback),
                    fallback,
                );
                inputs.insert(spec.key.to_string(), FieldValue::Number(value));
            }
            FieldKind::Select { options, fallback } => {
                let value = prompt_f64(
                    &format!("  {}{} {:?} [{}]: ", spec.label, unit, options, fallback),
                    fallback,
                );
                inputs.insert(spec.key.to_string(), FieldValue::Number(value));
            }
            FieldKind::Mix { options } => {
                println!("  {} options:", spec.label);
                for option in options {
                    println!("    {}", option);
                }
                let value = prompt_line(&format!("  {} [{}]: ", spec.label, options[0]), options[0]);
                inputs.insert(spec.key.to_string(), FieldValue::Choice(value));
            }
        }
    }

    let config = GlobalConfig::default();
    let result = calculate(element, &inputs, &config);

    println!();
    println!("═══════════════════════════════════════");
    println!("  {} ESTIMATE", element.display_name().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    println!("Materials:");
    println!("  Cement:    {:.2} bags", result.cement_bags);
    println!("  Sand:      {:.2} cft", result.sand_cft);
    println!("  Aggregate: {:.2} cft", result.aggregate_cft);
    println!("  Steel:     {:.2} kg", result.steel_kg);
    println!();
    if !result.details.is_empty() {
        println!("Notes:");
        for line in &result.details {
            println!("  {}", line);
        }
        println!();
    }
    println!("═══════════════════════════════════════");
    println!("  TOTAL COST: {:.2}", result.total_cost);
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(&result) {
        println!("{}", json);
    }
}
