use std::path::Path;

use clap::Parser;

use finlens::{
    Error,
    analytics::{expense_breakdown, monthly_series, summary_stats},
    api::ApiClient,
    charts,
    config::{Args, Command},
    export::export_transactions,
    format::format_currency,
    logging,
    model::{Category, Salary, Transaction},
    timezone,
};

#[tokio::main]
async fn main() {
    logging::initialize();

    let args = Args::parse();

    if let Err(error) = run(args).await {
        tracing::error!("{error}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let client = ApiClient::new(&args.api_url, &args.token)?;
    let today = timezone::local_date(&args.timezone)?;

    let (transactions, categories, salaries) = tokio::try_join!(
        client.fetch_transactions(),
        client.fetch_categories(),
        client.fetch_salaries(),
    )?;

    tracing::info!(
        "fetched {} transactions, {} categories, {} salaries",
        transactions.len(),
        categories.len(),
        salaries.len()
    );

    match args.command {
        Command::Dashboard { charts_dir } => {
            print_dashboard(&transactions, &categories, &salaries);

            if let Some(dir) = charts_dir {
                write_charts(&transactions, &categories, &salaries, &dir)?;
            }

            Ok(())
        }
        Command::Export(export_args) => {
            let options = export_args.to_options();
            let outcome = export_transactions(
                &transactions,
                &salaries,
                &categories,
                &options,
                &export_args.out_dir,
                today,
            )?;

            if outcome.row_count == 0 {
                tracing::warn!("the filters matched no transactions");
            }

            println!(
                "Wrote {} ({} row(s))",
                outcome.path.display(),
                outcome.row_count
            );

            Ok(())
        }
    }
}

fn print_dashboard(transactions: &[Transaction], categories: &[Category], salaries: &[Salary]) {
    let stats = summary_stats(transactions, salaries);
    let series = monthly_series(transactions, salaries);
    let breakdown = expense_breakdown(transactions, categories);

    println!("Summary");
    println!(
        "  Total income:        {}",
        format_currency(stats.total_income)
    );
    println!(
        "  Total expenses:      {}",
        format_currency(stats.total_expenses)
    );
    println!(
        "  Net balance:         {}",
        format_currency(stats.net_balance)
    );
    println!(
        "  Avg income/month:    {}",
        format_currency(stats.monthly_avg_income)
    );
    println!(
        "  Avg expenses/month:  {}",
        format_currency(stats.monthly_avg_expenses)
    );
    println!("  Expense categories:  {}", stats.expense_category_count);

    println!();
    println!(
        "{:<10} {:>14} {:>14} {:>14}",
        "Month", "Income", "Expenses", "Net"
    );
    for entry in &series {
        println!(
            "{:<10} {:>14} {:>14} {:>14}",
            entry.label,
            format_currency(entry.income),
            format_currency(entry.expenses),
            format_currency(entry.net)
        );
    }

    println!();
    println!("{:<22} {:>14} {:>7}", "Category", "Amount", "Share");
    for slice in &breakdown {
        println!(
            "{:<22} {:>14} {:>6.1}%",
            slice.name,
            format_currency(slice.amount),
            slice.percentage
        );
    }
}

fn write_charts(
    transactions: &[Transaction],
    categories: &[Category],
    salaries: &[Salary],
    dir: &Path,
) -> Result<(), Error> {
    let series = monthly_series(transactions, salaries);
    let breakdown = expense_breakdown(transactions, categories);

    std::fs::create_dir_all(dir)?;
    std::fs::write(
        dir.join("cash_flow.json"),
        charts::monthly_series_chart(&series).to_string(),
    )?;
    std::fs::write(
        dir.join("expense_breakdown.json"),
        charts::expense_breakdown_chart(&breakdown).to_string(),
    )?;

    tracing::info!("wrote chart options to {}", dir.display());

    Ok(())
}
