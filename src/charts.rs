//! ECharts option generation for the analytics views.
//!
//! Builds chart configurations from the derived aggregates:
//! - **Cash Flow Chart**: monthly income and expense bars with a net line
//! - **Expense Breakdown Chart**: pie of expense totals per category
//!
//! Each chart serializes to an ECharts option JSON string via
//! `Chart::to_string()`, ready for the presentation layer to embed.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Emphasis, EmphasisFocus, JsFunction,
        Tooltip, Trigger,
    },
    series::{Line, Pie, bar},
};

use crate::analytics::{CategorySlice, MonthlyEntry};

/// Builds the monthly cash-flow chart: income and expense bars per period
/// with a line for the net.
pub fn monthly_series_chart(series: &[MonthlyEntry]) -> Chart {
    let labels: Vec<String> = series.iter().map(|entry| entry.label.clone()).collect();
    let income: Vec<f64> = series.iter().map(|entry| entry.income).collect();
    let expenses: Vec<f64> = series.iter().map(|entry| entry.expenses).collect();
    let net: Vec<f64> = series.iter().map(|entry| entry.net).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Cash Flow")
                .subtext("Last twelve months"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().top("bottom"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            bar::Bar::new()
                .name("Income")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(income),
        )
        .series(
            bar::Bar::new()
                .name("Expenses")
                .emphasis(Emphasis::new().focus(EmphasisFocus::Series))
                .data(expenses),
        )
        .series(Line::new().name("Net").data(net))
}

/// Builds the expense-breakdown pie chart from the category slices.
///
/// Slice order follows the breakdown's descending sort, so the legend
/// reads largest-first.
pub fn expense_breakdown_chart(breakdown: &[CategorySlice]) -> Chart {
    let data: Vec<(f64, &str)> = breakdown
        .iter()
        .map(|slice| (slice.amount, slice.name.as_str()))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Expenses by Category")
                .subtext("Share of total expenses"),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().top("bottom"))
        .series(
            Pie::new().name("Expenses").radius("60%").data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
