//! Clap derive structures for the `lcadmin` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This file is also compiled by `build.rs` for man-page generation, so
//! it only depends on clap + clap_complete.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// lcadmin -- console for administering LCA data catalogs
#[derive(Debug, Parser)]
#[command(
    name = "lcadmin",
    version,
    about = "Administer an LCA data catalog from the command line",
    long_about = "Browse, search, and maintain the reference entities of a\n\
        life-cycle-assessment data catalog: impact methods and categories,\n\
        units and unit groups, organizations, industry codes, emission\n\
        compartments, and console users.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "LCADMIN_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend base URL (overrides profile)
    #[arg(long, short = 'S', env = "LCADMIN_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "LCADMIN_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "LCADMIN_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "LCADMIN_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage impact assessment methods
    #[command(alias = "method", alias = "m")]
    Methods(MethodsArgs),

    /// Manage impact categories
    #[command(alias = "cat", alias = "c")]
    Categories(CategoriesArgs),

    /// Manage midpoint impact categories
    #[command(alias = "mid")]
    Midpoints(MidpointsArgs),

    /// Manage measurement units
    #[command(alias = "unit", alias = "u")]
    Units(UnitsArgs),

    /// Manage unit groups
    #[command(alias = "groups", alias = "ug")]
    UnitGroups(UnitGroupsArgs),

    /// Manage organizations
    #[command(alias = "org")]
    Organizations(OrganizationsArgs),

    /// Manage ISIC industry codes
    #[command(alias = "isic")]
    IndustryCodes(IndustryCodesArgs),

    /// Manage emission compartments
    #[command(alias = "comp")]
    Compartments(CompartmentsArgs),

    /// Administer console users
    Users(UsersArgs),

    /// Bulk import / export the emission-factor table
    Factors(FactorsArgs),

    /// Show catalog record counts
    #[command(alias = "dash")]
    Dashboard,

    /// Sign in and store the session token
    Login {
        /// Username (defaults to the profile's)
        #[arg(long)]
        username: Option<String>,
    },

    /// Drop the stored session
    Logout,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared List Arguments ────────────────────────────────────────────

/// Shared pagination and search arguments for all list commands.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Rows per page (5, 10, or 20)
    #[arg(long, default_value = "10")]
    pub page_size: u32,

    /// Search keyword
    #[arg(long, short = 'K')]
    pub keyword: Option<String>,

    /// Fetch all pages automatically
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Resume a saved view state (query-string form, e.g.
    /// "page=2&pageSize=20&search=kg"); explicit flags override it
    #[arg(long)]
    pub query: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  IMPACT METHODS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MethodsArgs {
    #[command(subcommand)]
    pub command: MethodsCommand,
}

#[derive(Debug, Subcommand)]
pub enum MethodsCommand {
    /// List impact methods
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get impact method details
    Get {
        /// Impact method ID (UUID)
        id: String,
    },

    /// Create an impact method
    #[command(disable_version_flag = true)]
    Create {
        /// Method name
        #[arg(long, required = true)]
        name: String,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Method version (e.g. "1.1")
        #[arg(long)]
        version: Option<String>,

        /// Literature reference
        #[arg(long)]
        reference: Option<String>,

        /// Perspective ID (UUID)
        #[arg(long)]
        perspective: Option<String>,
    },

    /// Update an impact method (unset flags keep current values)
    #[command(disable_version_flag = true)]
    Update {
        /// Impact method ID (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        version: Option<String>,

        #[arg(long)]
        reference: Option<String>,

        /// Perspective ID (UUID)
        #[arg(long)]
        perspective: Option<String>,
    },

    /// Delete an impact method
    Delete {
        /// Impact method ID (UUID)
        id: String,
    },

    /// List selectable perspectives
    Perspectives,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  IMPACT CATEGORIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// List impact categories
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Scope to one impact method (UUID, or 'all')
        #[arg(long)]
        method: Option<String>,

        /// Scope to one emission compartment (UUID, or 'all')
        #[arg(long, conflicts_with = "method")]
        compartment: Option<String>,
    },

    /// Get impact category details
    Get {
        /// Impact category ID (UUID)
        id: String,
    },

    /// Create an impact category
    Create {
        /// Category name
        #[arg(long, required = true)]
        name: String,

        /// Indicator name (e.g. "kg CO2 eq")
        #[arg(long, required = true)]
        indicator: String,

        /// Indicator description
        #[arg(long)]
        indicator_description: Option<String>,

        /// Indicator unit ID (UUID)
        #[arg(long)]
        unit: Option<String>,

        /// Midpoint category ID (UUID)
        #[arg(long)]
        midpoint: Option<String>,

        /// Emission compartment ID (UUID)
        #[arg(long)]
        compartment: Option<String>,
    },

    /// Update an impact category (unset flags keep current values)
    Update {
        /// Impact category ID (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        indicator: Option<String>,

        #[arg(long)]
        indicator_description: Option<String>,

        /// Indicator unit ID (UUID)
        #[arg(long)]
        unit: Option<String>,

        /// Midpoint category ID (UUID)
        #[arg(long)]
        midpoint: Option<String>,

        /// Emission compartment ID (UUID)
        #[arg(long)]
        compartment: Option<String>,
    },

    /// Delete an impact category
    Delete {
        /// Impact category ID (UUID)
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MIDPOINT CATEGORIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MidpointsArgs {
    #[command(subcommand)]
    pub command: MidpointsCommand,
}

#[derive(Debug, Subcommand)]
pub enum MidpointsCommand {
    /// List midpoint categories
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get midpoint category details
    Get {
        /// Midpoint category ID (UUID)
        id: String,
    },

    /// Create a midpoint category
    Create {
        /// Midpoint name
        #[arg(long, required = true)]
        name: String,

        /// Abbreviation (e.g. "GWP")
        #[arg(long)]
        abbr: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Update a midpoint category (unset flags keep current values)
    Update {
        /// Midpoint category ID (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        abbr: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a midpoint category
    Delete {
        /// Midpoint category ID (UUID)
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  UNITS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UnitsArgs {
    #[command(subcommand)]
    pub command: UnitsCommand,
}

#[derive(Debug, Subcommand)]
pub enum UnitsCommand {
    /// List units
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        list: ListArgs,

        /// Scope to one unit group (UUID, or 'all')
        #[arg(long)]
        group: Option<String>,
    },

    /// Get unit details
    Get {
        /// Unit ID (UUID)
        id: String,
    },

    /// Create a unit
    Create {
        /// Unit name (e.g. "kg")
        #[arg(long, required = true)]
        name: String,

        /// Conversion factor to the group's default unit
        #[arg(long, required = true)]
        factor: f64,

        /// Mark as the group's default unit
        #[arg(long)]
        default: bool,

        /// Unit group ID (UUID)
        #[arg(long)]
        group: Option<String>,
    },

    /// Update a unit (unset flags keep current values)
    Update {
        /// Unit ID (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        factor: Option<f64>,

        /// Mark or unmark as the group's default unit
        #[arg(long, action = clap::ArgAction::Set)]
        default: Option<bool>,

        /// Unit group ID (UUID)
        #[arg(long)]
        group: Option<String>,
    },

    /// Delete a unit
    Delete {
        /// Unit ID (UUID)
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  UNIT GROUPS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UnitGroupsArgs {
    #[command(subcommand)]
    pub command: UnitGroupsCommand,
}

#[derive(Debug, Subcommand)]
pub enum UnitGroupsCommand {
    /// List unit groups
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get unit group details
    Get {
        /// Unit group ID (UUID)
        id: String,
    },

    /// Create a unit group
    Create {
        /// Group name (e.g. "Mass")
        #[arg(long, required = true)]
        name: String,
    },

    /// Rename a unit group
    Update {
        /// Unit group ID (UUID)
        id: String,

        #[arg(long, required = true)]
        name: String,
    },

    /// Delete a unit group
    Delete {
        /// Unit group ID (UUID)
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ORGANIZATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OrganizationsArgs {
    #[command(subcommand)]
    pub command: OrganizationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum OrganizationsCommand {
    /// List organizations
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get organization details
    Get {
        /// Organization ID (UUID)
        id: String,
    },

    /// Create an organization
    Create {
        /// Organization name
        #[arg(long, required = true)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Tax / registry code
        #[arg(long)]
        tax_code: Option<String>,

        /// Industry code IDs (comma-separated UUIDs)
        #[arg(long, value_delimiter = ',')]
        industry_codes: Option<Vec<String>>,
    },

    /// Update an organization (unset flags keep current values)
    Update {
        /// Organization ID (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        tax_code: Option<String>,

        /// Industry code IDs (replaces the existing set)
        #[arg(long, value_delimiter = ',')]
        industry_codes: Option<Vec<String>>,
    },

    /// Delete an organization
    Delete {
        /// Organization ID (UUID)
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INDUSTRY CODES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct IndustryCodesArgs {
    #[command(subcommand)]
    pub command: IndustryCodesCommand,
}

#[derive(Debug, Subcommand)]
pub enum IndustryCodesCommand {
    /// List industry codes
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get industry code details
    Get {
        /// Industry code ID (UUID)
        id: String,
    },

    /// Create an industry code
    Create {
        /// ISIC code (e.g. "C1061")
        #[arg(long, required = true)]
        code: String,

        /// Activity name
        #[arg(long, required = true)]
        name: String,
    },

    /// Update an industry code (unset flags keep current values)
    Update {
        /// Industry code ID (UUID)
        id: String,

        #[arg(long)]
        code: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Delete an industry code
    Delete {
        /// Industry code ID (UUID)
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  EMISSION COMPARTMENTS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompartmentsArgs {
    #[command(subcommand)]
    pub command: CompartmentsCommand,
}

#[derive(Debug, Subcommand)]
pub enum CompartmentsCommand {
    /// List emission compartments
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get emission compartment details
    Get {
        /// Compartment ID (UUID)
        id: String,
    },

    /// Create an emission compartment
    Create {
        /// Compartment name (e.g. "Freshwater")
        #[arg(long, required = true)]
        name: String,

        #[arg(long)]
        description: Option<String>,
    },

    /// Update an emission compartment (unset flags keep current values)
    Update {
        /// Compartment ID (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an emission compartment
    Delete {
        /// Compartment ID (UUID)
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  USERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum RoleArg {
    Admin,
    Manager,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List console users
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get user details
    Get {
        /// User ID (UUID)
        id: String,
    },

    /// Create a user (prompts for the initial password)
    Create {
        /// Login name
        #[arg(long, required = true)]
        username: String,

        #[arg(long, required = true)]
        email: String,

        /// Console role
        #[arg(long, default_value = "manager", value_enum)]
        role: RoleArg,

        /// Create in a deactivated state
        #[arg(long)]
        inactive: bool,
    },

    /// Update a user (unset flags keep current values)
    Update {
        /// User ID (UUID)
        id: String,

        #[arg(long)]
        username: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, value_enum)]
        role: Option<RoleArg>,

        /// Activate or deactivate the account
        #[arg(long, action = clap::ArgAction::Set)]
        active: Option<bool>,
    },

    /// Delete a user
    Delete {
        /// User ID (UUID)
        id: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  EMISSION FACTORS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct FactorsArgs {
    #[command(subcommand)]
    pub command: FactorsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FactorsCommand {
    /// Download the reference-factor table
    Export {
        /// Output path (default: factors.xlsx in the current directory)
        #[arg(long, short = 'O')]
        output: Option<PathBuf>,
    },

    /// Upload a reference-factor table
    Import {
        /// File to upload
        file: PathBuf,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Set a configuration value
    Set {
        /// Config key (dot-separated path, e.g. "profiles.staging.server")
        key: String,

        /// Value to set
        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
