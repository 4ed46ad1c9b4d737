//! Terminal presentation of a session. Formatting only: every number and
//! list printed here arrives precomputed in the report.

use crossterm::style::Stylize;
use readvox_analysis::{FluencyReport, VisSpan};

const RULE: &str = "----------------------------------------";
const BANNER: &str = "========================================";

pub fn print_reference(reference_text: &str) {
    println!("{}", "-".repeat(50));
    println!("TEXT TO READ:\n");
    println!("{}\n", reference_text.bold());
    println!("{}", "-".repeat(50));
}

pub fn print_recording_banner() {
    println!("{}", ">>> RECORDING... (Read the text now!) <<<".green());
}

pub fn print_processing() {
    println!("{}", "Processing audio...".cyan());
}

pub fn print_silent_take_warning() {
    println!(
        "{}",
        "Heads up: the recording never rose above the noise floor.".yellow()
    );
}

pub fn print_transcription_error(message: &str) {
    println!("{} {}", "Error during transcription:".red(), message);
}

pub fn print_report(report: &FluencyReport) {
    println!("\n{} {}", "Reference :".yellow(), report.reference);
    println!("{} {}\n", "Transcript:".yellow(), report.transcript);

    println!("{}\n", "--- Visualization ---".blue());
    for span in &report.visualization {
        match span {
            VisSpan::Correct(text) => print!("{} ", text.as_str().green()),
            VisSpan::Substituted(text) => print!("{} ", format!("[SUB: {}]", text).red()),
            VisSpan::Inserted(text) => print!("{} ", format!("[STUTTER: {}]", text).red()),
            VisSpan::Skipped(text) => print!("{} ", format!("[SKIPPED: {}]", text).red()),
        }
    }
    println!();

    println!("\n{}", BANNER);
    println!(
        "      {}",
        format!("FLUENCY SCORE: {}/100", report.score).magenta()
    );
    println!("{}", BANNER);

    println!("\n{}", "--- Words You Struggled With ---".cyan());
    if report.struggled.is_empty() {
        println!("{}", "None! Clean reading.".green());
    } else {
        println!("These are the words where you stuttered, repeated, or fumbled just before:");
        println!("{}", report.struggled.join(", ").yellow());
    }

    println!("\n{}", "--- Detailed Error Report ---".red());
    if report.is_perfect() {
        println!("{}", "Perfect reading! No errors detected.".green());
    } else {
        print_section("Extra Sounds / Repetitions:", &report.stutters);
        print_section("Mispronunciations:", &report.mispronunciations);
        print_section("Skipped Words:", &report.skips);
    }
    println!("{}", RULE);
}

fn print_section(title: &str, entries: &[String]) {
    if entries.is_empty() {
        return;
    }
    println!("\n{}", title.yellow());
    for entry in entries {
        println!("  - {}", entry);
    }
}
