//! Command-line configuration for the `finlens` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::export::{ExportFormat, ExportOptions, FieldSelection, FilterSpec, KindFilter};

const CLI_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Personal-finance analytics and export for a remote tracker API.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the remote data store API.
    #[arg(long, default_value = "http://localhost:8080/")]
    pub api_url: String,

    /// Bearer token for the API.
    #[arg(long, env = "FINLENS_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Canonical timezone for generated-on dates, e.g. "Europe/Berlin".
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// What to do with the fetched records.
    #[command(subcommand)]
    pub command: Command,
}

/// The available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch all records and print the dashboard summary.
    Dashboard {
        /// Also write ECharts option JSON files into this directory.
        #[arg(long)]
        charts_dir: Option<PathBuf>,
    },
    /// Export filtered transactions to a spreadsheet or report file.
    Export(ExportArgs),
}

/// Filter, column, and format flags for the export subcommand.
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Earliest transaction date to include (YYYY-MM-DD), inclusive.
    #[arg(long, value_parser = parse_cli_date)]
    pub from: Option<Date>,

    /// Latest transaction date to include (YYYY-MM-DD), inclusive.
    #[arg(long, value_parser = parse_cli_date)]
    pub to: Option<Date>,

    /// Restrict the export to one transaction type.
    #[arg(long = "type", value_enum, default_value = "all")]
    pub kind: TypeArg,

    /// Category ids to include (comma separated). Omit for all.
    #[arg(long, value_delimiter = ',')]
    pub categories: Vec<i64>,

    /// Smallest amount to include, inclusive.
    #[arg(long)]
    pub min_amount: Option<f64>,

    /// Largest amount to include, inclusive.
    #[arg(long)]
    pub max_amount: Option<f64>,

    /// Columns to include (comma separated). Omit for all columns.
    #[arg(long, value_enum, value_delimiter = ',')]
    pub fields: Vec<FieldArg>,

    /// Output document shape.
    #[arg(long, value_enum, default_value = "csv")]
    pub format: FormatArg,

    /// Report title shown at the top of the artifact.
    #[arg(long)]
    pub title: Option<String>,

    /// Directory the artifact is written into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

impl ExportArgs {
    /// Assembles the export options from the parsed flags.
    pub fn to_options(&self) -> ExportOptions {
        ExportOptions {
            filter: FilterSpec {
                date_from: self.from,
                date_to: self.to,
                kind: self.kind.into(),
                category_ids: self.categories.clone(),
                min_amount: self.min_amount,
                max_amount: self.max_amount,
            },
            selection: field_selection(&self.fields),
            format: self.format.into(),
            title: self.title.clone(),
        }
    }
}

/// Transaction type restriction as a command-line value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeArg {
    /// Include both income and expenses.
    All,
    /// Only income transactions.
    Income,
    /// Only expense transactions.
    Expense,
}

impl From<TypeArg> for KindFilter {
    fn from(value: TypeArg) -> Self {
        match value {
            TypeArg::All => KindFilter::All,
            TypeArg::Income => KindFilter::Income,
            TypeArg::Expense => KindFilter::Expense,
        }
    }
}

/// Export column as a command-line value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldArg {
    /// The record identifier.
    Id,
    /// The occurrence date.
    Date,
    /// The free-text description.
    Description,
    /// The income/expense type.
    Type,
    /// The resolved category name.
    Category,
    /// The formatted amount.
    Amount,
}

/// Output format as a command-line value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Tabular CSV artifact.
    Csv,
    /// Paginated text report.
    Report,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ExportFormat::Spreadsheet,
            FormatArg::Report => ExportFormat::Document,
        }
    }
}

/// Builds the field selection from the `--fields` flag; no flag means
/// every column.
fn field_selection(fields: &[FieldArg]) -> FieldSelection {
    if fields.is_empty() {
        return FieldSelection::default();
    }

    FieldSelection {
        id: fields.contains(&FieldArg::Id),
        date: fields.contains(&FieldArg::Date),
        description: fields.contains(&FieldArg::Description),
        kind: fields.contains(&FieldArg::Type),
        category: fields.contains(&FieldArg::Category),
        amount: fields.contains(&FieldArg::Amount),
    }
}

fn parse_cli_date(text: &str) -> Result<Date, String> {
    Date::parse(text, &CLI_DATE_FORMAT)
        .map_err(|_| format!("\"{text}\" is not a date in YYYY-MM-DD form"))
}
