//! CLI argument definitions for `campuserp`

use campus_erp::config::ConfigOverrides;
use campus_erp::core::models::{LeaveKind, LeaveStatus, Role, Status, StockStatus};
use campus_erp::logger::Level;
use chrono::NaiveDate;
use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Level::from(*self).as_str())
    }
}

/// Portal section to sign in to
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum RoleArg {
    /// Administrator
    Admin,
    /// Faculty member
    Teacher,
    /// Student
    Student,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Self::Admin,
            RoleArg::Teacher => Self::Teacher,
            RoleArg::Student => Self::Student,
        }
    }
}

/// Active/inactive filter value
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StatusArg {
    /// Currently enrolled or employed
    Active,
    /// Left, graduated, or on hold
    Inactive,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => Self::Active,
            StatusArg::Inactive => Self::Inactive,
        }
    }
}

/// Library stock filter value
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StockArg {
    /// At or above the low-stock threshold
    Available,
    /// Below the threshold
    LowStock,
    /// No copies on the shelf
    OutOfStock,
}

impl From<StockArg> for StockStatus {
    fn from(arg: StockArg) -> Self {
        match arg {
            StockArg::Available => Self::Available,
            StockArg::LowStock => Self::LowStock,
            StockArg::OutOfStock => Self::OutOfStock,
        }
    }
}

/// Leave reason category
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LeaveKindArg {
    /// Illness
    Sick,
    /// Short casual leave
    Casual,
    /// Personal matters
    Personal,
    /// Conferences, competitions, field work
    Academic,
}

impl From<LeaveKindArg> for LeaveKind {
    fn from(arg: LeaveKindArg) -> Self {
        match arg {
            LeaveKindArg::Sick => Self::Sick,
            LeaveKindArg::Casual => Self::Casual,
            LeaveKindArg::Personal => Self::Personal,
            LeaveKindArg::Academic => Self::Academic,
        }
    }
}

/// Leave review state filter value
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LeaveStatusArg {
    /// Awaiting review
    Pending,
    /// Granted
    Approved,
    /// Refused
    Rejected,
}

impl From<LeaveStatusArg> for LeaveStatus {
    fn from(arg: LeaveStatusArg) -> Self {
        match arg {
            LeaveStatusArg::Pending => Self::Pending,
            LeaveStatusArg::Approved => Self::Approved,
            LeaveStatusArg::Rejected => Self::Rejected,
        }
    }
}

/// Search and paging flags shared by list commands
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Case-insensitive search text
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Page to show (1-based)
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub page: usize,
}

/// List criteria for rendered pages; each applies only to the page that has it
#[derive(Debug, Clone, Default, Args)]
pub struct PageCriteriaArgs {
    /// Student list: degree id
    #[arg(long, value_name = "DEGREE")]
    pub degree: Option<String>,
    /// Student list: branch id
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,
    /// Student and faculty lists: status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    /// Faculty list: department id
    #[arg(long, value_name = "DEPT")]
    pub department: Option<String>,
    /// Library: shelf category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,
    /// Library: stock status
    #[arg(long, value_enum)]
    pub stock: Option<StockArg>,
    /// Events ending on or after this day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<NaiveDate>,
    /// Events starting on or before this day (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `page_size`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum AcademicsSubcommand {
    /// Resolve a branch to its degree and course.
    Resolve {
        /// Branch id or code (e.g., `br-cse` or `CSE`)
        #[arg(value_name = "BRANCH")]
        branch: String,
    },
    /// List the courses under a degree.
    Courses {
        /// Degree id
        #[arg(value_name = "DEGREE")]
        degree_id: String,
    },
    /// List branches under a course or a degree.
    Branches {
        /// Course id
        #[arg(long, value_name = "COURSE", conflicts_with = "degree")]
        course: Option<String>,
        /// Degree id
        #[arg(long, value_name = "DEGREE")]
        degree: Option<String>,
    },
    /// Print the whole degree → course → branch tree.
    Tree,
}

#[derive(Debug, Subcommand)]
pub enum LeaveSubcommand {
    /// List leave requests.
    List {
        /// Only requests in this state
        #[arg(long, value_enum)]
        status: Option<LeaveStatusArg>,
        /// Only requests filed by this role
        #[arg(long, value_enum)]
        applicant_role: Option<RoleArg>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Apply for leave as the signed-in student or teacher.
    Apply {
        /// Reason category
        #[arg(long, value_enum)]
        kind: LeaveKindArg,
        /// First day away (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: NaiveDate,
        /// Last day away (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: NaiveDate,
        /// Reason text
        #[arg(long, value_name = "TEXT")]
        reason: String,
    },
    /// Approve or reject a pending request (admin or teacher).
    Review {
        /// Leave request id
        #[arg(value_name = "ID")]
        id: String,
        /// Approve the request
        #[arg(long, conflicts_with = "reject", required_unless_present = "reject")]
        approve: bool,
        /// Reject the request
        #[arg(long)]
        reject: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Browse the academic structure.
    Academics {
        #[command(subcommand)]
        subcommand: AcademicsSubcommand,
    },
    /// Generate a roll number.
    ///
    /// Without --serial, uses the next free serial for the batch and branch.
    Roll {
        /// Batch (admission) year
        #[arg(long, value_name = "YEAR")]
        batch: u16,
        /// Branch id or code
        #[arg(long, value_name = "BRANCH")]
        branch: String,
        /// Explicit serial number
        #[arg(long, value_name = "N")]
        serial: Option<u32>,
    },
    /// List students.
    Students {
        /// Degree id
        #[arg(long, value_name = "DEGREE")]
        degree: Option<String>,
        /// Branch id
        #[arg(long, value_name = "BRANCH")]
        branch: Option<String>,
        /// Semester number
        #[arg(long, value_name = "N")]
        semester: Option<u8>,
        /// Batch year
        #[arg(long, value_name = "YEAR")]
        batch: Option<u16>,
        /// Enrolment status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// List faculty.
    Teachers {
        /// Department id
        #[arg(long, value_name = "DEPT")]
        department: Option<String>,
        /// Designation (e.g., Professor)
        #[arg(long, value_name = "TITLE")]
        designation: Option<String>,
        /// Subject taught
        #[arg(long, value_name = "SUBJECT")]
        subject: Option<String>,
        /// Employment status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// List campus events.
    Events {
        /// Events ending on or after this day (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        from: Option<NaiveDate>,
        /// Events starting on or before this day (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        to: Option<NaiveDate>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// List the library catalogue with derived stock status.
    Library {
        /// Shelf category
        #[arg(long, value_name = "CATEGORY")]
        category: Option<String>,
        /// Stock status
        #[arg(long, value_enum)]
        stock: Option<StockArg>,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Manage leave requests.
    Leave {
        #[command(subcommand)]
        subcommand: LeaveSubcommand,
    },
    /// Submit a new-student admission (simulated).
    Admit {
        /// Full name
        #[arg(long)]
        name: String,
        /// Contact email
        #[arg(long)]
        email: String,
        /// Branch id or code
        #[arg(long, value_name = "BRANCH")]
        branch: String,
        /// Admission year
        #[arg(long, value_name = "YEAR")]
        batch: u16,
        /// Starting semester
        #[arg(long, value_name = "N", default_value_t = 1)]
        semester: u8,
    },
    /// Render a portal page as HTML.
    Page {
        /// Route path (e.g., `/admin/students`)
        #[arg(value_name = "PATH")]
        path: String,
        /// Write into the configured pages directory instead of stdout
        #[arg(long)]
        save: bool,
        #[command(flatten)]
        list: ListArgs,
        #[command(flatten)]
        criteria: PageCriteriaArgs,
    },
    /// Show the signed-in user's dashboard.
    Dashboard,
}

#[derive(Parser, Debug)]
#[command(
    name = "campuserp",
    about = "Campus ERP academic records portal",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Session ---
    /// Sign in as this user (id, employee id, or roll number)
    #[arg(short, long, value_name = "ID", requires = "role", global = true)]
    pub user: Option<String>,

    /// Password for --user
    #[arg(long, value_name = "PASSWORD", global = true)]
    pub password: Option<String>,

    /// Section to sign in to
    #[arg(short, long, value_enum, global = true)]
    pub role: Option<RoleArg>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Use this catalog file instead of the configured one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Override the pages output directory
    #[arg(long = "pages-dir", value_name = "DIR")]
    pub pages_dir: Option<PathBuf>,

    /// Override the library low-stock threshold (percent)
    #[arg(long = "low-stock-percent", value_name = "PERCENT", value_parser = clap::value_parser!(u8).range(0..=100))]
    pub low_stock_percent: Option<u8>,

    /// Override rows per list page
    #[arg(long = "page-size", value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub page_size: Option<u16>,

    /// Override the simulated submit delay
    #[arg(long = "submit-delay-ms", value_name = "MS")]
    pub submit_delay_ms: Option<u64>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides for this run
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path),
            verbose: self.config_verbose,
            catalog_file: self.catalog.as_ref().map(path),
            pages_dir: self.pages_dir.as_ref().map(path),
            low_stock_percent: self.low_stock_percent,
            page_size: self.page_size.map(usize::from),
            submit_delay_ms: self.submit_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_page_accepts_list_criteria() {
        let cli = Cli::try_parse_from([
            "campuserp",
            "page",
            "/admin/students",
            "--degree",
            "deg-btech",
            "--status",
            "inactive",
            "-s",
            "nair",
        ])
        .unwrap();

        let Command::Page { list, criteria, .. } = cli.command else {
            panic!("expected the page command");
        };
        assert_eq!(list.search.as_deref(), Some("nair"));
        assert_eq!(criteria.degree.as_deref(), Some("deg-btech"));
        assert_eq!(criteria.status, Some(StatusArg::Inactive));
        assert!(criteria.branch.is_none());
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::try_parse_from(["campuserp", "dashboard"]).unwrap();

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.catalog_file.is_none());
        assert!(overrides.page_size.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::try_parse_from([
            "campuserp",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "true",
            "--catalog",
            "/data/catalog.toml",
            "--low-stock-percent",
            "40",
            "--page-size",
            "5",
            "students",
        ])
        .unwrap();

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.catalog_file, Some("/data/catalog.toml".to_string()));
        assert_eq!(overrides.low_stock_percent, Some(40));
        assert_eq!(overrides.page_size, Some(5));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["campuserp", "--low-stock-percent", "150", "library"]).is_err());
        assert!(Cli::try_parse_from(["campuserp", "--page-size", "0", "students"]).is_err());
    }

    #[test]
    fn test_user_requires_role() {
        assert!(Cli::try_parse_from(["campuserp", "--user", "admin", "dashboard"]).is_err());

        let cli = Cli::try_parse_from([
            "campuserp", "dashboard", "--user", "admin", "--role", "admin",
        ])
        .unwrap();
        assert_eq!(cli.user.as_deref(), Some("admin"));
        assert_eq!(cli.role.map(Role::from), Some(Role::Admin));
    }

    #[test]
    fn test_leave_review_needs_a_decision() {
        assert!(Cli::try_parse_from(["campuserp", "leave", "review", "lv-001"]).is_err());
        assert!(
            Cli::try_parse_from(["campuserp", "leave", "review", "lv-001", "--approve", "--reject"])
                .is_err()
        );

        let cli = Cli::try_parse_from(["campuserp", "leave", "review", "lv-001", "--reject"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Leave {
                subcommand: LeaveSubcommand::Review { reject: true, .. }
            }
        ));
    }

    #[test]
    fn test_dates_parse() {
        let cli = Cli::try_parse_from(["campuserp", "events", "--from", "2025-01-01"]).unwrap();
        let Command::Events { from, to, .. } = cli.command else {
            panic!("expected events command");
        };
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert!(to.is_none());
    }
}
