// CLI entry point - Single-shot identity verification
// Reference CSV + extracted-fields JSON + optional face score -> verdict

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use id_verify::{load_reference_csv, ExtractedFields, FieldName, VerificationPipeline};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: id-verify <reference.csv> <extracted.json> [face_score]");
        eprintln!("  face_score: cosine similarity in [-1, 1], omit when no face was detected");
        std::process::exit(2);
    }

    let reference_path = Path::new(&args[1]);
    let extracted_path = Path::new(&args[2]);
    let face_score = match args.get(3) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .with_context(|| format!("Invalid face score: {}", raw))?,
        ),
        None => None,
    };

    run_verification(reference_path, extracted_path, face_score)
}

fn run_verification(
    reference_path: &Path,
    extracted_path: &Path,
    face_score: Option<f64>,
) -> Result<()> {
    println!("🪪 Identity Verification");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load reference store
    println!("\n📂 Loading reference store...");
    let candidates = load_reference_csv(reference_path)?;
    if candidates.is_empty() {
        println!("⚠️  Reference store is empty");
    } else {
        println!("✓ Loaded {} reference records", candidates.len());
    }

    // 2. Load extracted fields
    let json = fs::read_to_string(extracted_path)
        .with_context(|| format!("Failed to read extracted fields: {}", extracted_path.display()))?;
    let raw: ExtractedFields = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse extracted fields: {}", extracted_path.display()))?;

    // 3. Run the pipeline
    let pipeline = VerificationPipeline::new();
    let report = pipeline.verify(raw, &candidates, face_score);

    // 4. Render
    println!("\n📄 Extracted & Cleaned OCR Data:");
    for field in FieldName::ALL {
        println!("{}: {}", field.as_str(), report.fields.get(field));
    }

    println!("\n📊 Best OCR Match Score: {:.1}%", report.text_score);
    match report.face_score {
        Some(score) => println!("🧑 Face Similarity Score: {:.2}%", score * 100.0),
        None => println!("❌ Face not detected in one of the images."),
    }

    println!("\n🔍 Final Identity Verification Result:");
    if report.is_accepted() {
        println!("✅ Identity Verified");
        Ok(())
    } else {
        println!("❌ Identity Verification Failed");
        for reason in &report.verdict.reasons {
            println!("- {}", reason.description());
        }
        std::process::exit(1);
    }
}
