//! EMS CLI
//!
//! Command-line front end over the EMS engine. Results print as JSON.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use ems::config::SyncStrategy;
use ems::model::{
    Decision, Department, EmployeeStatus, LeaveApplication, LeaveType, NewEmployee,
};
use ems::views::{EmployeeFilter, Selector};
use ems::{Command, Config, EmsError, Engine, Outcome};
use tracing_subscriber::{fmt, EnvFilter};

/// EMS CLI
#[derive(Parser, Debug)]
#[command(name = "ems-cli")]
#[command(about = "Employee records, attendance and leave from the command line")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, env = "EMS_DATA_DIR", default_value = "./ems_data")]
    data_dir: PathBuf,

    /// Start with empty collections instead of sample data
    #[arg(long)]
    no_seed: bool,

    /// Check-ins after this hour (local time) are marked Late
    #[arg(long, default_value = "9")]
    late_after_hour: u32,

    /// Skip fsync when saving
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage employee records
    #[command(subcommand)]
    Employees(EmployeeCommands),

    /// Department, salary and status breakdowns
    Analytics,

    /// Headline figures, recent hires and top positions
    Dashboard,

    /// Check in, check out and inspect attendance
    #[command(subcommand)]
    Attendance(AttendanceCommands),

    /// Submit, review and list leave requests
    #[command(subcommand)]
    Leave(LeaveCommands),

    /// Delete all stored data; sample data is seeded again on next use
    Reset,
}

#[derive(Subcommand, Debug)]
enum EmployeeCommands {
    /// List employees, optionally filtered
    List {
        /// Case-insensitive text matched against name, position, department
        #[arg(short, long, default_value = "")]
        search: String,

        /// Department or "All"
        #[arg(long, default_value = "All")]
        department: Selector<Department>,

        /// Status or "All"
        #[arg(long, default_value = "All")]
        status: Selector<EmployeeStatus>,
    },

    /// Show one employee
    Show { id: String },

    /// Add an employee
    Add(EmployeeFields),

    /// Change fields of an existing employee
    Edit {
        id: String,

        #[command(flatten)]
        fields: EmployeeChanges,
    },

    /// Delete an employee
    Delete { id: String },
}

#[derive(ClapArgs, Debug)]
struct EmployeeFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    department: Department,
    #[arg(long)]
    position: String,
    #[arg(long)]
    salary: f64,
    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    hire_date: NaiveDate,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "Active")]
    status: EmployeeStatus,
}

#[derive(ClapArgs, Debug)]
struct EmployeeChanges {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    department: Option<Department>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    salary: Option<f64>,
    #[arg(long)]
    hire_date: Option<NaiveDate>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    status: Option<EmployeeStatus>,
}

#[derive(Subcommand, Debug)]
enum AttendanceCommands {
    /// Open today's session
    CheckIn { subject: String },

    /// Close today's session
    CheckOut { subject: String },

    /// Today's state
    Today { subject: String },

    /// All records of a subject
    History { subject: String },
}

#[derive(Subcommand, Debug)]
enum LeaveCommands {
    /// File a new request
    Submit {
        #[arg(long)]
        employee: String,
        #[arg(long = "type")]
        leave_type: LeaveType,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        #[arg(long)]
        reason: String,
    },

    /// Approve or reject a pending request
    Decide {
        id: String,
        /// Approved or Rejected
        decision: Decision,
    },

    /// List requests
    List {
        /// Only this employee's requests
        #[arg(long)]
        employee: Option<String>,

        /// Only requests awaiting review
        #[arg(long)]
        pending: bool,
    },
}

fn main() {
    // Logs go to stderr so stdout stays valid JSON
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,ems=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .seed_sample_data(!args.no_seed)
        .late_after_hour(args.late_after_hour)
        .sync_strategy(if args.no_sync {
            SyncStrategy::OsBuffered
        } else {
            SyncStrategy::EveryWrite
        })
        .build();

    let engine = match Engine::open(config) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    match run(&engine, args.command) {
        Ok(Some(outcome)) => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to render output: {}", e);
                std::process::exit(1);
            }
        },
        Ok(None) => {}
        Err(e) => {
            eprintln!("error ({:?}): {}", e.kind(), e);
            std::process::exit(1);
        }
    }

    if let Err(e) = engine.close() {
        tracing::error!("Failed to close engine: {}", e);
        std::process::exit(1);
    }
}

/// Translate parsed arguments into a command and execute it
fn run(engine: &Engine, command: Commands) -> Result<Option<Outcome>, EmsError> {
    let command = match command {
        Commands::Employees(cmd) => employee_command(engine, cmd)?,
        Commands::Analytics => Command::Analytics,
        Commands::Dashboard => Command::Dashboard,
        Commands::Attendance(cmd) => match cmd {
            AttendanceCommands::CheckIn { subject } => Command::CheckIn { subject },
            AttendanceCommands::CheckOut { subject } => Command::CheckOut { subject },
            AttendanceCommands::Today { subject } => Command::AttendanceToday { subject },
            AttendanceCommands::History { subject } => Command::AttendanceHistory { subject },
        },
        Commands::Leave(cmd) => match cmd {
            LeaveCommands::Submit {
                employee,
                leave_type,
                start,
                end,
                reason,
            } => Command::SubmitLeave(LeaveApplication {
                employee_id: employee,
                leave_type,
                start_date: start,
                end_date: end,
                reason,
            }),
            LeaveCommands::Decide { id, decision } => Command::DecideLeave { id, decision },
            LeaveCommands::List { employee, pending } => Command::ListLeaves {
                employee_id: employee,
                pending_only: pending,
            },
        },
        Commands::Reset => {
            engine.reset()?;
            eprintln!("all collections removed");
            return Ok(None);
        }
    };

    engine.execute(command).map(Some)
}

fn employee_command(engine: &Engine, cmd: EmployeeCommands) -> Result<Command, EmsError> {
    Ok(match cmd {
        EmployeeCommands::List {
            search,
            department,
            status,
        } => Command::ListEmployees {
            filter: EmployeeFilter {
                query: search,
                department,
                status,
            },
        },
        EmployeeCommands::Show { id } => Command::GetEmployee { id },
        EmployeeCommands::Add(f) => Command::AddEmployee(NewEmployee {
            name: f.name,
            department: f.department,
            position: f.position,
            salary: f.salary,
            hire_date: f.hire_date,
            email: f.email,
            phone: f.phone,
            status: f.status,
        }),
        EmployeeCommands::Edit { id, fields } => {
            let mut employee = engine.employee(&id)?;
            if let Some(name) = fields.name {
                employee.name = name;
            }
            if let Some(department) = fields.department {
                employee.department = department;
            }
            if let Some(position) = fields.position {
                employee.position = position;
            }
            if let Some(salary) = fields.salary {
                employee.salary = salary;
            }
            if let Some(hire_date) = fields.hire_date {
                employee.hire_date = hire_date;
            }
            if let Some(email) = fields.email {
                employee.email = email;
            }
            if let Some(phone) = fields.phone {
                employee.phone = phone;
            }
            if let Some(status) = fields.status {
                employee.status = status;
            }
            Command::UpdateEmployee(employee)
        }
        EmployeeCommands::Delete { id } => Command::DeleteEmployee { id },
    })
}
