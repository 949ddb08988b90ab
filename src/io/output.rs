use crate::aggregation::{Aggregation, SampleWarning, StatisticOutput};
use crate::cli::OutputFormat;
use crate::core::Log;
use crate::formatting::{FormattingConfig, Painter};
use crate::scoring::ScoringMode;
use chrono::{DateTime, Utc};
use comfy_table::{presets, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::Write;

/// Report heading for logs without a topic.
pub const DEFAULT_TITLE: &str = "Custom Analysis";

/// One aggregation pass, ready to be written in any output format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationReport {
    pub generated_at: DateTime<Utc>,
    pub title: String,
    pub mode: ScoringMode,
    pub samples: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub context: StatisticOutput,
    pub risk: StatisticOutput,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SampleWarning>,
}

impl AggregationReport {
    pub fn new(log: &Log, mode: ScoringMode, aggregation: Aggregation) -> Self {
        Self {
            generated_at: Utc::now(),
            title: log.topic().unwrap_or(DEFAULT_TITLE).to_string(),
            mode,
            samples: log.len(),
            description: log
                .meta
                .as_ref()
                .and_then(|m| m.description.clone())
                .filter(|d| !d.is_empty()),
            context: aggregation.statistics.context,
            risk: aggregation.statistics.risk,
            warnings: aggregation.warnings,
        }
    }

    /// Every country present in either channel, in name order.
    pub fn countries(&self) -> BTreeSet<&str> {
        self.context
            .values
            .keys()
            .chain(self.risk.values.keys())
            .map(String::as_str)
            .collect()
    }

    fn subtitle(&self) -> String {
        match &self.description {
            Some(description) => description.clone(),
            None => format!("Visualizing {} Data Points", self.samples),
        }
    }
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[AggregationReport]) -> anyhow::Result<()>;
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
    /// A single report is written as an object, several as an array.
    fn write_reports(&mut self, reports: &[AggregationReport]) -> anyhow::Result<()> {
        let json = match reports {
            [report] => serde_json::to_string_pretty(report)?,
            _ => serde_json::to_string_pretty(reports)?,
        };
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_reports(&mut self, reports: &[AggregationReport]) -> anyhow::Result<()> {
        for report in reports {
            self.write_header(report)?;
            self.write_channels(report)?;
            self.write_values(report)?;
            self.write_warnings(&report.warnings)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AggregationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# {}", report.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", report.subtitle())?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Mode: {}", report.mode)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_channels(&mut self, report: &AggregationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "| Channel | Name | Unit | Domain | Colors |")?;
        writeln!(self.writer, "|---------|------|------|--------|--------|")?;
        for (channel, stat) in [("Context", &report.context), ("Risk", &report.risk)] {
            let (min, max) = stat.domain();
            writeln!(
                self.writer,
                "| {} | {} | {} | {} to {} | {} |",
                channel,
                stat.name,
                stat.unit,
                min,
                max,
                stat.color_scale().join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_values(&mut self, report: &AggregationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Values")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Country | {} | {} |", report.context.name, report.risk.name)?;
        writeln!(self.writer, "|---------|------|------|")?;
        for country in report.countries() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                display_country(country),
                cell_text(&report.context, country),
                cell_text(&report.risk, country)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_warnings(&mut self, warnings: &[SampleWarning]) -> anyhow::Result<()> {
        if warnings.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Warnings")?;
        writeln!(self.writer)?;
        for warning in warnings {
            writeln!(self.writer, "- {warning}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    painter: Painter,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            painter: Painter::new(formatting),
        }
    }

    fn value_table(&self, report: &AggregationReport) -> Table {
        let mut table = Table::new();
        if self.painter.use_color() {
            table.load_preset(presets::UTF8_FULL).enforce_styling();
        } else {
            table.load_preset(presets::ASCII_FULL).force_no_tty();
        }
        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Country"),
                Cell::new(&report.context.name),
                Cell::new(&report.risk.name),
            ]);

        for country in report.countries() {
            table.add_row(vec![
                Cell::new(display_country(country)),
                value_cell(&report.context, country),
                value_cell(&report.risk, country),
            ]);
        }
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[AggregationReport]) -> anyhow::Result<()> {
        for report in reports {
            let title = format!("{} ({} mode)", report.title, report.mode);
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", self.painter.header(&title))?;
            writeln!(self.writer, "{}", self.painter.dim(&report.subtitle()))?;
            writeln!(self.writer)?;

            if report.countries().is_empty() {
                writeln!(self.writer, "No countries to display.")?;
            } else {
                let table = self.value_table(report);
                writeln!(self.writer, "{table}")?;
            }

            if !report.warnings.is_empty() {
                writeln!(self.writer)?;
                let heading = format!("{} warning(s)", report.warnings.len());
                writeln!(self.writer, "{}", self.painter.warning(&heading))?;
                for warning in &report.warnings {
                    writeln!(self.writer, "  - {warning}")?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Lower third green, middle yellow, upper red.
fn value_cell(stat: &StatisticOutput, country: &str) -> Cell {
    let Some(&value) = stat.values.get(country) else {
        return Cell::new("-").set_alignment(CellAlignment::Right);
    };
    let color = match stat.domain_fraction(value) {
        f if f < 1.0 / 3.0 => Color::Green,
        f if f < 2.0 / 3.0 => Color::Yellow,
        _ => Color::Red,
    };
    Cell::new(stat.display(value))
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

fn cell_text(stat: &StatisticOutput, country: &str) -> String {
    stat.values
        .get(country)
        .map(|&v| stat.display(v))
        .unwrap_or_else(|| "-".to_string())
}

fn display_country(country: &str) -> &str {
    if country.is_empty() {
        "(unknown)"
    } else {
        country
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}
