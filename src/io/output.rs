use crate::core::metrics::sort_by_value_score;
use crate::core::{PlanPoint, PricingReport};
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &PricingReport) -> anyhow::Result<()>;
}

pub fn create_writer(
    format: OutputFormat,
    destination: Box<dyn Write>,
    limit: Option<usize>,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination, limit)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, limit)),
    }
}

fn format_price(symbol: &str, value: f64) -> String {
    format!("{symbol}{value:.2}")
}

fn format_optional_price(symbol: &str, value: Option<f64>) -> String {
    value
        .map(|v| format_price(symbol, v))
        .unwrap_or_else(|| "n/a".to_string())
}

fn owner_label(point: &PlanPoint) -> &str {
    if point.is_user {
        "You"
    } else {
        point.competitor.as_deref().unwrap_or("Competitor")
    }
}

fn signal_label(point: &PlanPoint) -> &'static str {
    if point.value_score.is_estimated {
        "estimated"
    } else {
        "measured"
    }
}

/// Points in listing order: best value score first, limited to `limit`.
fn listed_points(report: &PricingReport, limit: Option<usize>) -> Vec<PlanPoint> {
    let sorted = sort_by_value_score(report.points.iter().cloned().collect());
    match limit {
        Some(n) => sorted.into_iter().take(n).collect(),
        None => sorted,
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    limit: Option<usize>,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W, limit: Option<usize>) -> Self {
        Self { writer, limit }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_positioning(report)?;
        self.write_presets(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Pricing Position Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        if let Some(company) = &report.company {
            writeln!(self.writer, "Company: {company}")?;
        }
        writeln!(
            self.writer,
            "Currency: {} ({})",
            report.currency, report.currency_symbol
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        let symbol = &report.currency_symbol;

        writeln!(self.writer, "## Market Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Chartable plans | {} |", summary.total_points)?;
        writeln!(self.writer, "| Your plans | {} |", summary.user_plan_count)?;
        writeln!(
            self.writer,
            "| Competitor plans | {} |",
            summary.competitor_plan_count
        )?;
        writeln!(
            self.writer,
            "| Dropped (no positive price) | {} |",
            summary.excluded_count
        )?;
        writeln!(
            self.writer,
            "| Median price | {} |",
            format_optional_price(symbol, report.median_price)
        )?;
        writeln!(
            self.writer,
            "| Price range | {} - {} |",
            format_optional_price(symbol, summary.min_price),
            format_optional_price(symbol, summary.max_price)
        )?;
        writeln!(
            self.writer,
            "| Average price | {} |",
            format_optional_price(symbol, summary.average_price)
        )?;
        writeln!(
            self.writer,
            "| Estimated value scores | {} |",
            summary.estimated_count
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_positioning(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Price Positioning")?;
        writeln!(self.writer)?;

        if report.points.is_empty() {
            writeln!(self.writer, "No chartable plans.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Plan | Owner | Price | Value score | Signal |")?;
        writeln!(self.writer, "|------|-------|-------|-------------|--------|")?;
        for point in listed_points(report, self.limit) {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.0} | {} |",
                point.name,
                owner_label(&point),
                format_price(&point.currency_symbol, point.price),
                point.value_score.score,
                signal_label(&point)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_presets(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        if report.presets.is_empty() {
            return Ok(());
        }

        let symbol = &report.currency_symbol;
        writeln!(self.writer, "## Price Presets")?;
        writeln!(self.writer)?;
        for presets in &report.presets {
            writeln!(
                self.writer,
                "### {} ({})",
                presets.plan,
                format_price(symbol, presets.current_price)
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Preset | Target price |")?;
            writeln!(self.writer, "|--------|--------------|")?;
            for quote in &presets.quotes {
                writeln!(
                    self.writer,
                    "| {} | {} |",
                    quote.token,
                    format_optional_price(symbol, quote.target)
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

pub struct TerminalWriter {
    writer: Box<dyn Write>,
    limit: Option<usize>,
}

impl TerminalWriter {
    pub fn new(writer: Box<dyn Write>, limit: Option<usize>) -> Self {
        Self { writer, limit }
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Pricing Position Report".bold().blue())?;
        writeln!(self.writer, "{}", "=======================".blue())?;
        writeln!(self.writer)?;

        self.print_summary(report)?;
        self.print_points(report)?;
        self.print_presets(report)?;
        Ok(())
    }
}

impl TerminalWriter {
    fn print_summary(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        let symbol = &report.currency_symbol;

        writeln!(self.writer, "{} Market summary:", "📊".bold())?;
        if let Some(company) = &report.company {
            writeln!(self.writer, "  Company: {company}")?;
        }
        writeln!(
            self.writer,
            "  Currency: {} ({})",
            report.currency, symbol
        )?;
        writeln!(
            self.writer,
            "  Chartable plans: {} ({} yours, {} competitors)",
            summary.total_points, summary.user_plan_count, summary.competitor_plan_count
        )?;
        if summary.excluded_count > 0 {
            writeln!(
                self.writer,
                "  Dropped (no positive price): {}",
                summary.excluded_count.to_string().yellow()
            )?;
        }
        writeln!(
            self.writer,
            "  Median price: {}",
            format_optional_price(symbol, report.median_price).bold()
        )?;
        writeln!(
            self.writer,
            "  Price range: {} - {}",
            format_optional_price(symbol, summary.min_price),
            format_optional_price(symbol, summary.max_price)
        )?;
        writeln!(
            self.writer,
            "  Average price: {}",
            format_optional_price(symbol, summary.average_price)
        )?;
        if summary.estimated_count > 0 {
            writeln!(
                self.writer,
                "  Estimated value scores: {} of {}",
                summary.estimated_count.to_string().yellow(),
                summary.total_points
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_points(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        if report.points.is_empty() {
            writeln!(self.writer, "{}", "No chartable plans.".yellow())?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Plan", "Owner", "Price", "Value score", "Signal"]);
        for point in listed_points(report, self.limit) {
            table.add_row(vec![
                point.name.clone(),
                owner_label(&point).to_string(),
                format_price(&point.currency_symbol, point.price),
                format!("{:.0}", point.value_score.score),
                signal_label(&point).to_string(),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_presets(&mut self, report: &PricingReport) -> anyhow::Result<()> {
        if report.presets.is_empty() {
            return Ok(());
        }

        let symbol = &report.currency_symbol;
        writeln!(self.writer, "{} Price presets:", "🎯".bold())?;
        for presets in &report.presets {
            let quotes: Vec<String> = presets
                .quotes
                .iter()
                .map(|q| {
                    format!(
                        "{} -> {}",
                        q.token,
                        format_optional_price(symbol, q.target)
                    )
                })
                .collect();
            writeln!(
                self.writer,
                "  {} ({}): {}",
                presets.plan.green(),
                format_price(symbol, presets.current_price),
                quotes.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}
