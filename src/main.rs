use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use care_assist::adapters::{ContentCatalog, RandomContentProvider};
use care_assist::application::{
    CheckPrescriptionCommand, CheckPrescriptionHandler, SendMessageCommand, SendMessageError,
    SendMessageHandler, StartConsultationCommand, StartConsultationHandler,
};
use care_assist::config::{AppConfig, LoggingSettings};
use care_assist::domain::consultation::{DialogueEngine, MEDICAL_DISCLAIMER};
use care_assist::domain::prescription::{
    PatientForm, PrescriptionEntry, PrescriptionList, ValidationReport, ValidationStatus,
};

#[derive(Parser)]
#[command(name = "care-assist")]
#[command(about = "Symptom intake assistant and prescription checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the symptom intake dialogue on stdin/stdout
    Chat,
    /// Validate a prescription for a patient
    Check {
        /// Diagnosis the prescription treats
        #[arg(long, default_value = "")]
        diagnosis: String,
        /// Patient age in years
        #[arg(long, default_value = "")]
        age: String,
        /// Patient weight in kg
        #[arg(long, default_value = "")]
        weight: String,
        /// Known allergies (comma-separated)
        #[arg(long, default_value = "")]
        allergies: String,
        /// Existing conditions (comma-separated)
        #[arg(long, default_value = "")]
        conditions: String,
        /// Medication name for a single form entry
        #[arg(long, default_value = "")]
        medication: String,
        /// Dosage for the form entry
        #[arg(long, default_value = "")]
        dosage: String,
        /// Frequency for the form entry
        #[arg(long, default_value = "")]
        frequency: String,
        /// Duration for the form entry
        #[arg(long, default_value = "")]
        duration: String,
        /// Free-text prescription, e.g. "Paracetamol 500mg twice daily for 7 days"
        #[arg(long, default_value = "")]
        text: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Chat => run_chat(&config).await?,
        Commands::Check {
            diagnosis,
            age,
            weight,
            allergies,
            conditions,
            medication,
            dosage,
            frequency,
            duration,
            text,
            json,
        } => {
            let cmd = CheckPrescriptionCommand {
                diagnosis,
                patient: PatientForm {
                    age,
                    weight,
                    allergies,
                    conditions,
                },
                entries: PrescriptionList::from_entries(vec![PrescriptionEntry::new(
                    medication, dosage, frequency, duration,
                )]),
                free_text: text,
            };
            let result = CheckPrescriptionHandler::new().handle(cmd);
            if json {
                println!("{}", serde_json::to_string_pretty(&result.report)?);
            } else {
                print_report(&result.report);
            }
        }
    }

    Ok(())
}

fn init_tracing(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if settings.is_json() {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

async fn run_chat(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &config.content.catalog_path {
        Some(path) => ContentCatalog::from_yaml_file(path)?,
        None => ContentCatalog::builtin(),
    };
    let content = Arc::new(RandomContentProvider::new(catalog));
    let engine = DialogueEngine::new(config.dialogue.dialogue_config(), content);
    let handler = SendMessageHandler::new(engine, config.dialogue.reply_delay());

    let started = StartConsultationHandler::new().handle(StartConsultationCommand);
    info!(consultation_id = %started.consultation_id, "Chat session opened");

    println!("{}\n", MEDICAL_DISCLAIMER);
    println!("Assistant: {}\n", started.greeting.content());

    let mut state = started.state;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = SendMessageCommand::new(started.consultation_id, state.clone(), line);
        match handler.handle(cmd).await {
            Ok(turn) => {
                println!(
                    "[{}] Assistant: {}\n",
                    turn.reply.created_at().time_of_day(),
                    turn.reply.content()
                );
                state = turn.state;
            }
            Err(SendMessageError::EmptyContent) => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn print_report(report: &ValidationReport) {
    println!(
        "Overall status: {} ({} approved, {} warning, {} rejected)",
        report.overall_status,
        report.count(ValidationStatus::Approved),
        report.count(ValidationStatus::Warning),
        report.count(ValidationStatus::Rejected),
    );
    for item in &report.items {
        println!("  [{}] {}: {}", item.status, item.medication_name, item.summary());
    }
    println!("Recommendations:");
    for recommendation in &report.recommendations {
        println!("  • {}", recommendation);
    }
}
