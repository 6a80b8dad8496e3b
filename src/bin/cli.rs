//! Excuse Generator interactive CLI.
//!
//! Walks the user through numbered menus (generation type, scenario, tone,
//! urgency), renders the result, records it in the history log, and offers
//! follow-ups: supporting proof, an apology message, and, for high
//! urgency, a staged emergency call.
//!
//! An optional first argument names a JSON config file; the
//! `GEMINI_API_KEY` environment variable overrides the configured key.

use excuse_gen::config::{load_config, ExcuseGenConfig};
use excuse_gen::emergency::EmergencySystem;
use excuse_gen::generators::{ApologyGenerator, ExcuseGenerator};
use excuse_gen::history::HistoryLog;
use excuse_gen::llm::GeminiClient;
use excuse_gen::proof::ProofGenerator;
use excuse_gen::ui;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

const GENERATION_TYPES: &[&str] = &["excuse", "apology", "proof"];
const SCENARIOS: &[&str] = &["work", "business", "school", "social", "family"];
const TONES: &[&str] = &["professional", "casual", "emotional", "urgent"];
const URGENCY_LEVELS: &[&str] = &["low", "medium", "high"];

struct App {
    excuse: ExcuseGenerator,
    apology: ApologyGenerator,
    proof: ProofGenerator,
    emergency: EmergencySystem,
    history: HistoryLog,
    config: ExcuseGenConfig,
}

#[tokio::main]
async fn main() {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if config.gemini_api_key.is_empty() {
        eprintln!("Warning: GEMINI_API_KEY is not set; generation calls will fail.");
    }

    let history = match HistoryLog::load(&config.history_file, config.max_history_items) {
        Ok(history) => history,
        Err(e) => {
            eprintln!("Error: failed to open history file: {}", e);
            std::process::exit(1);
        }
    };

    let client = match GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        Duration::from_millis(config.timeout),
    ) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App {
        excuse: ExcuseGenerator::new(client.clone(), config.default_language.clone()),
        apology: ApologyGenerator::new(client),
        proof: ProofGenerator::new(),
        emergency: EmergencySystem::new(),
        history,
        config,
    };

    println!("{}", ui::format_header("INTELLIGENT EXCUSE GENERATOR"));

    loop {
        app.run_once().await;

        if !ask_yes_no("\nGenerate something else? (y/n): ") {
            println!("{}", ui::format_header("THANK YOU FOR USING OUR SERVICE"));
            break;
        }
    }
}

impl App {
    async fn run_once(&mut self) {
        let gen_type = choose("What would you like to generate?", GENERATION_TYPES);
        let scenario = choose("Select scenario:", SCENARIOS);
        let tone = choose("Select tone:", TONES);

        let urgency = if gen_type == "excuse" || gen_type == "proof" {
            choose("Select urgency level:", URGENCY_LEVELS)
        } else {
            "medium"
        };

        match gen_type {
            "excuse" => self.generate_excuse(scenario, urgency, tone).await,
            "apology" => self.generate_apology(scenario, tone).await,
            "proof" => self.generate_proof(scenario, urgency).await,
            _ => unreachable!("menu only offers known types"),
        }
    }

    async fn generate_excuse(&mut self, scenario: &str, urgency: &str, tone: &str) {
        let excuse = self.excuse.generate_excuse(scenario, urgency, tone).await;
        println!(
            "{}",
            ui::format_section("Generated Excuse", &excuse, ui::SECTION_WIDTH)
        );
        self.record(
            excuse,
            scenario,
            vec![tone.to_string(), urgency.to_string()],
        );

        if ask_yes_no("Would you like supporting proof? (y/n): ") {
            self.generate_proof(scenario, urgency).await;
        }

        if ask_yes_no("Would you like an apology message? (y/n): ") {
            self.generate_apology(scenario, tone).await;
        }
    }

    async fn generate_apology(&mut self, scenario: &str, tone: &str) {
        let apology = self.apology.generate_apology(scenario, tone).await;
        println!(
            "{}",
            ui::format_section("Generated Apology", &apology, ui::SECTION_WIDTH)
        );
        self.record(
            apology,
            scenario,
            vec!["apology".to_string(), tone.to_string()],
        );
    }

    async fn generate_proof(&mut self, scenario: &str, urgency: &str) {
        println!(
            "{}",
            ui::format_section(
                "Supporting Evidence",
                "Generating proof documents...",
                ui::SECTION_WIDTH
            )
        );

        let doc = self.proof.generate_document(scenario);
        println!("\n■ 1. OFFICIAL DOCUMENT ■");
        println!("{}", ui::format_document(&doc));

        let location = self.proof.generate_location_log();
        println!("\n■ 2. LOCATION VERIFICATION ■");
        println!("{}", ui::format_location(&location));

        let screenshot = self
            .proof
            .generate_chat_screenshot(&format!("Excuse for {} with {} urgency", scenario, urgency));
        match screenshot.save(&self.config.screenshot_path) {
            Ok(()) => println!(
                "\n■ 3. CHAT SCREENSHOT ■\n  Saved as '{}'",
                self.config.screenshot_path
            ),
            Err(e) => eprintln!("Error: failed to save chat screenshot: {}", e),
        }

        if urgency == "high" && ask_yes_no("Simulate emergency contact? (y/n): ") {
            self.emergency
                .simulate_call_with("Emergency Contact", |line| println!("{}", line))
                .await;

            let message = self
                .emergency
                .emergency_text("Family Member", &format!("Urgent {} situation", scenario));
            println!(
                "{}",
                ui::format_section("Emergency Message Sent", &message, ui::SECTION_WIDTH)
            );
        }
    }

    /// Records a result in the history log; persistence failures are shown
    /// to the user, not fatal.
    fn record(&mut self, content: String, scenario: &str, tags: Vec<String>) {
        if let Err(e) = self.history.add(content, scenario.to_string(), tags) {
            eprintln!("Error: failed to save history: {}", e);
        }
    }
}

/// Prints a numbered menu and returns the chosen option, re-prompting on
/// invalid input.
fn choose<'a>(prompt: &str, options: &[&'a str]) -> &'a str {
    loop {
        println!("\n{}", prompt);
        for (i, option) in options.iter().enumerate() {
            println!("{}. {}", i + 1, capitalize(option));
        }
        print!("Your choice (1-{}): ", options.len());
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            continue;
        }

        match input.trim().parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => {
                return options[choice - 1];
            }
            Ok(_) => println!("Invalid choice. Please try again."),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn ask_yes_no(prompt: &str) -> bool {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim().eq_ignore_ascii_case("y")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
