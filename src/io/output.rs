use crate::benchmark::Rating;
use crate::core::Severity;
use crate::engine::AnalysisReport;
use crate::forecast::ForecastResult;
use crate::trends::TrendResult;
use colored::*;
use comfy_table::{Cell, Color, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
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
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_metrics(report)?;
        self.write_trends(report)?;
        self.write_forecasts(report)?;
        self.write_alerts(report)?;
        self.write_insights(report)?;
        Ok(())
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => "HIGH".red().bold(),
        Severity::Medium => "MEDIUM".yellow(),
        Severity::Low => "LOW".green(),
    }
}

fn rating_cell(rating: Rating) -> Cell {
    let cell = Cell::new(rating);
    match rating {
        Rating::Poor => cell.fg(Color::Red),
        Rating::Excellent => cell.fg(Color::Green),
        Rating::Average | Rating::Good => cell,
    }
}

fn describe_trend(trend: Option<&TrendResult>) -> String {
    trend
        .map(|t| format!("{} (strength {:.3})", t.direction, t.strength))
        .unwrap_or_else(|| "insufficient data".to_string())
}

fn describe_forecast(forecast: Option<&ForecastResult>) -> String {
    forecast
        .map(|f| {
            let points: Vec<String> = f.forecast.iter().map(|v| format!("{v:.1}")).collect();
            format!("[{}] confidence {:.2}", points.join(", "), f.confidence)
        })
        .unwrap_or_else(|| "insufficient data".to_string())
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let rule = "═".repeat(44);
        writeln!(self.writer, "{}", rule.cyan())?;
        writeln!(self.writer, "{}", "        FORECOURT PERFORMANCE REPORT".bold().cyan())?;
        writeln!(self.writer, "{}", rule.cyan())?;
        writeln!(
            self.writer,
            "Site score: {:.1} / {:.1} ({:.0}%) grade {}",
            report.score.score,
            report.score.max_score,
            report.score.percentage,
            report.score.grade.to_string().bold()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        let mut table = Table::new();
        table.set_header(vec!["Metric", "Value", "Rating"]);
        let rated = [
            (
                "Margin per liter",
                format!("{:.2}", m.fuel_efficiency.efficiency_ratio),
                m.ratings.fuel_efficiency,
            ),
            (
                "Gross profit margin %",
                format!("{:.1}", m.profitability.gross_profit_margin),
                m.ratings.profit_margin,
            ),
            (
                "Shop / fuel ratio",
                format!("{:.2}", m.shop.shop_fuel_ratio),
                m.ratings.shop_fuel_ratio,
            ),
            (
                "Volume vs target",
                format!("{:.2}", m.volume.volume_efficiency),
                m.ratings.volume_efficiency,
            ),
        ];
        for (label, value, rating) in rated {
            table.add_row(vec![Cell::new(label), Cell::new(value), rating_cell(rating)]);
        }
        let unrated = [
            (
                "Net profit margin %",
                format!("{:.1}", m.profitability.net_profit_margin),
            ),
            (
                "Labor cost %",
                format!("{:.1}", m.operational.labor_cost_ratio),
            ),
            (
                "Break-even volume",
                format!("{:.0}", m.operational.break_even_volume),
            ),
        ];
        for (label, value) in unrated {
            table.add_row(vec![Cell::new(label), Cell::new(value), Cell::new("-")]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trends(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let t = &report.trends;
        writeln!(self.writer, "{}", "TRENDS".bold())?;
        writeln!(
            self.writer,
            "  moving average:    {}",
            describe_trend(t.moving_average.as_ref())
        )?;
        writeln!(
            self.writer,
            "  linear regression: {}",
            describe_trend(t.linear_regression.as_ref())
        )?;
        match &t.seasonality {
            Some(s) => writeln!(
                self.writer,
                "  seasonality:       peak phase {} of {} (strength {:.2})",
                s.dominant_period, s.period, s.strength
            )?,
            None => writeln!(self.writer, "  seasonality:       insufficient data")?,
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_forecasts(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let f = &report.forecasts;
        writeln!(self.writer, "{}", "FORECASTS".bold())?;
        writeln!(
            self.writer,
            "  moving average:    {}",
            describe_forecast(f.moving_average.as_ref())
        )?;
        writeln!(
            self.writer,
            "  linear regression: {}",
            describe_forecast(f.linear_regression.as_ref())
        )?;
        if let Some(seasonal) = &f.seasonal {
            writeln!(
                self.writer,
                "  seasonal:          {}",
                describe_forecast(Some(seasonal))
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_alerts(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "ALERTS".bold())?;
        if report.alerts.is_empty() {
            writeln!(self.writer, "  {}", "No alerts triggered".green())?;
        }
        for alert in &report.alerts {
            writeln!(
                self.writer,
                "  [{}] {}",
                severity_label(alert.severity),
                alert.message
            )?;
            writeln!(self.writer, "         └─ {}", alert.recommendation)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_insights(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.insights.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", "INSIGHTS".bold())?;
        for insight in &report.insights {
            writeln!(
                self.writer,
                "  • [{}] {}: {}",
                severity_label(insight.severity),
                insight.title,
                insight.message
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::core::PeriodRecord;
    use crate::engine::AnalyticsEngine;

    fn report() -> AnalysisReport {
        let engine = AnalyticsEngine::new(EngineConfig::default()).unwrap();
        let record = PeriodRecord::fuel(1000.0, 20000.0, 19700.0);
        engine
            .analyze(&record, &[100.0, 110.0, 120.0, 130.0], 3)
            .unwrap()
    }

    #[test]
    fn test_json_writer_emits_report_sections() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        for key in ["metrics", "trends", "forecasts", "alerts", "insights", "score"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["alerts"][0]["rule"], "low_fuel_efficiency");
        assert!(value["trends"]["moving_average"].is_null());
        assert_eq!(value["forecasts"]["linear_regression"]["method"], "linear_regression");
    }

    #[test]
    fn test_terminal_writer_sections() {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&report())
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("FORECOURT PERFORMANCE REPORT"));
        assert!(text.contains("Margin per liter"));
        assert!(text.contains("moving average:    insufficient data"));
        assert!(text.contains("[HIGH]"));
    }
}
