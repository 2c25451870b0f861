//! AssetDesk - IT Asset Management Console
//!
//! Command-line front-end over the asset management REST backend.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assetdesk::{
    config::AppConfig,
    console::Console,
    models::{
        AssignmentStatus, CreateHardware, HardwareType, InventoryStatus, LoanStatus,
        SoftwareForm, SoftwareStatus,
    },
    services::inventory::AssignmentDraft,
    AppState,
};

#[derive(Parser, Debug)]
#[command(name = "assetdesk")]
#[command(about = "AssetDesk - IT asset management console.", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage departments
    Departments {
        #[command(subcommand)]
        action: DepartmentCommand,
    },
    /// List the employee directory
    Employees,
    /// Manage hardware records
    Hardware {
        #[command(subcommand)]
        action: HardwareCommand,
    },
    /// Manage device loans
    Loans {
        #[command(subcommand)]
        action: LoanCommand,
    },
    /// Manage software licenses
    Software {
        #[command(subcommand)]
        action: SoftwareCommand,
    },
    /// Manage inventory assignments
    Inventory {
        #[command(subcommand)]
        action: InventoryCommand,
    },
    /// Manage generic data items
    Data {
        #[command(subcommand)]
        action: DataCommand,
    },
    /// Log in against the backend
    Login { username: String, password: String },
    /// Show the backend's export preview verbatim
    ExportPreview,
}

#[derive(Subcommand, Debug)]
enum DepartmentCommand {
    /// List all departments
    List,
    /// Add a department
    Add { name: String },
    /// List the employees of one department
    Employees { id: i64 },
}

#[derive(Subcommand, Debug)]
enum HardwareCommand {
    /// List hardware, optionally restricted to one category view
    List {
        #[arg(long = "type")]
        hardware_type: Option<HardwareType>,
    },
    /// Show one hardware record
    Show { id: i64 },
    /// Add a hardware record
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        model: String,
        #[arg(long, default_value = "")]
        serial_number: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "type")]
        hardware_type: Option<HardwareType>,
    },
    /// Edit the assignment dimension of a record
    Assign {
        id: i64,
        /// e.g. "In Stock", "Assigned", "In Repair", "Decommissioned"
        #[arg(long)]
        status: AssignmentStatus,
        #[arg(long)]
        employee: Option<i64>,
    },
    /// Stage a record for removal
    StageRemoval { id: i64 },
    /// List records staged for removal
    Pending,
    /// Permanently delete a staged record
    ApproveRemoval { id: i64 },
    /// Delete a hardware record
    Delete { id: i64 },
}

#[derive(Subcommand, Debug)]
enum LoanCommand {
    /// List all hardware with its loan columns
    List,
    /// Edit the loan dimension of a record
    Update {
        id: i64,
        /// e.g. "Available", "Loaned Out", "In Repair", "Returned to Stock"
        #[arg(long)]
        status: LoanStatus,
        /// Borrower; required when the status is "Loaned Out"
        #[arg(long)]
        employee: Option<i64>,
    },
}

#[derive(Subcommand, Debug)]
enum SoftwareCommand {
    /// List all software licenses
    List,
    /// Show one software license
    Show { id: i64 },
    /// Add a software license
    Add {
        #[command(flatten)]
        form: SoftwareFormArgs,
    },
    /// Update a software license
    Update {
        id: i64,
        #[command(flatten)]
        form: SoftwareFormArgs,
    },
    /// Delete a software license
    Delete { id: i64 },
}

#[derive(clap::Args, Debug)]
struct SoftwareFormArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    brand: String,
    #[arg(long)]
    version: String,
    #[arg(long, default_value = "")]
    license_key: String,
    #[arg(long)]
    purchase_date: Option<NaiveDate>,
    #[arg(long)]
    expiration_date: Option<NaiveDate>,
    /// e.g. "Active", "Expired", "Pending Renewal", "Unused"
    #[arg(long, default_value = "Active")]
    status: SoftwareStatus,
    #[arg(long)]
    employee: Option<i64>,
}

impl From<SoftwareFormArgs> for SoftwareForm {
    fn from(args: SoftwareFormArgs) -> Self {
        SoftwareForm {
            name: args.name,
            brand: args.brand,
            version: args.version,
            license_key: args.license_key,
            purchase_date: args.purchase_date,
            expiration_date: args.expiration_date,
            status: args.status,
            assigned_to_employee_id: args.employee,
        }
    }
}

#[derive(Subcommand, Debug)]
enum InventoryCommand {
    /// List all inventory assignments
    List,
    /// Add an inventory assignment
    Add {
        #[arg(long, default_value = "")]
        device_id: String,
        #[arg(long, default_value = "")]
        employee_id: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        date: String,
        /// assigned | returned | maintenance | decommissioned
        #[arg(long, default_value = "")]
        status: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Update an assignment's status and notes
    Update {
        id: i64,
        #[arg(long)]
        status: InventoryStatus,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete an inventory assignment
    Delete { id: i64 },
    /// Export assignments as CSV
    Export {
        /// Output path (defaults to inventory_export.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum DataCommand {
    /// List all data items
    List,
    /// Add a data item
    Add { name: String, value: String },
    /// Update a data item
    Update { id: i64, name: String, value: String },
    /// Delete a data item
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("assetdesk={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Using backend at {}", config.api.base_url);

    let console = Console::new(AppState::new(config));
    let output = run(&console, cli.command).await;
    println!("{}", output);

    Ok(())
}

async fn run(console: &Console, command: Command) -> String {
    match command {
        Command::Departments { action } => match action {
            DepartmentCommand::List => console.departments().await,
            DepartmentCommand::Add { name } => console.add_department(&name).await,
            DepartmentCommand::Employees { id } => console.department_employees(id).await,
        },
        Command::Employees => console.employees().await,
        Command::Hardware { action } => match action {
            HardwareCommand::List { hardware_type } => console.hardware(hardware_type).await,
            HardwareCommand::Show { id } => console.show_hardware(id).await,
            HardwareCommand::Add {
                name,
                model,
                serial_number,
                description,
                hardware_type,
            } => {
                console
                    .add_hardware(CreateHardware {
                        name,
                        model,
                        serial_number,
                        description,
                        hardware_type,
                    })
                    .await
            }
            HardwareCommand::Assign {
                id,
                status,
                employee,
            } => console.assign_hardware(id, status, employee).await,
            HardwareCommand::StageRemoval { id } => console.stage_removal(id).await,
            HardwareCommand::Pending => console.pending_removals().await,
            HardwareCommand::ApproveRemoval { id } => console.approve_removal(id).await,
            HardwareCommand::Delete { id } => console.delete_hardware(id).await,
        },
        Command::Loans { action } => match action {
            LoanCommand::List => console.loans().await,
            LoanCommand::Update {
                id,
                status,
                employee,
            } => console.update_loan(id, status, employee).await,
        },
        Command::Software { action } => match action {
            SoftwareCommand::List => console.software().await,
            SoftwareCommand::Show { id } => console.show_software(id).await,
            SoftwareCommand::Add { form } => console.add_software(form.into()).await,
            SoftwareCommand::Update { id, form } => {
                console.update_software(id, form.into()).await
            }
            SoftwareCommand::Delete { id } => console.delete_software(id).await,
        },
        Command::Inventory { action } => match action {
            InventoryCommand::List => console.inventory().await,
            InventoryCommand::Add {
                device_id,
                employee_id,
                date,
                status,
                notes,
            } => {
                console
                    .add_assignment(AssignmentDraft {
                        device_id,
                        employee_id,
                        assigned_date: date,
                        status,
                        notes,
                    })
                    .await
            }
            InventoryCommand::Update { id, status, notes } => {
                console.update_assignment(id, status, notes).await
            }
            InventoryCommand::Delete { id } => console.delete_assignment(id).await,
            InventoryCommand::Export { out } => console.export_inventory(out).await,
        },
        Command::Data { action } => match action {
            DataCommand::List => console.data().await,
            DataCommand::Add { name, value } => console.add_data(name, value).await,
            DataCommand::Update { id, name, value } => {
                console.update_data(id, name, value).await
            }
            DataCommand::Delete { id } => console.delete_data(id).await,
        },
        Command::Login { username, password } => console.login(&username, &password).await,
        Command::ExportPreview => console.export_preview().await,
    }
}
