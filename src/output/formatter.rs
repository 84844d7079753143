//! Output formatters for score reports

use crate::config::OutputFormat;
use crate::error::{Result, ScorerError};
use crate::output::report::ScoreReport;
use crate::processing::recommendations::{Priority, Recommendation};
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for formatting score reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>ATS Compatibility Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        .score-badge {
            display: inline-block;
            padding: 8px 16px;
            border-radius: 20px;
            font-weight: bold;
            color: white;
            margin-left: 10px;
        }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section h2 {
            color: #007acc;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        table { width: 100%; border-collapse: collapse; }
        td, th { padding: 8px; border-bottom: 1px solid #e9ecef; text-align: left; }
        .recommendation {
            background: #f8f9fa;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #17a2b8;
        }
        .priority-critical { border-left-color: #dc3545; }
        .priority-high { border-left-color: #ffc107; }
        .priority-medium { border-left-color: #17a2b8; }
        .priority-low { border-left-color: #28a745; }
        .keyword { font-family: monospace; }
        .footer { margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>ATS Compatibility Report</h1>
            <p>
                <strong>{{ overall_score }}%</strong>
                <span class="score-badge {{ score_class }}">{{ score_label }}</span>
            </p>
            <p>{{ verdict }}</p>
        </div>
        <div class="section">
            <h2>Score Breakdown</h2>
            <table>
                <tr><th>Category</th><th>Score</th><th>Weight</th></tr>
                {% for row in breakdown %}
                <tr><td>{{ row.label }}</td><td>{{ row.percent }}%</td><td>{{ row.weight }}%</td></tr>
                {% endfor %}
            </table>
        </div>
        {% if !keyword_gaps.is_empty() %}
        <div class="section">
            <h2>Missing Keywords ({{ industry_focus }})</h2>
            <ul>
                {% for gap in keyword_gaps %}
                <li><span class="keyword">{{ gap.keyword }}</span>{% if gap.has_near_match %} (close to <span class="keyword">{{ gap.near_skill }}</span>){% endif %}</li>
                {% endfor %}
            </ul>
        </div>
        {% endif %}
        {% if !recommendations.is_empty() %}
        <div class="section">
            <h2>Recommendations</h2>
            {% for rec in recommendations %}
            <div class="recommendation priority-{{ rec.priority_class }}">
                <h3>{{ rec.title }}</h3>
                <p><strong>{{ rec.priority }}</strong> | {{ rec.section }} | +{{ rec.points }} pts</p>
                <p>{{ rec.description }}</p>
                {% if !rec.steps.is_empty() %}
                <ul>
                    {% for step in rec.steps %}
                    <li>{{ step }}</li>
                    {% endfor %}
                </ul>
                {% endif %}
            </div>
            {% endfor %}
        </div>
        {% endif %}
        <div class="footer">
            <p><strong>Generated:</strong> {{ generated_at }} | <strong>Version:</strong> {{ version }}</p>
            <p><strong>Resume:</strong> {{ resume_file }} | <strong>Role:</strong> {{ target_role }} | <strong>Keyword scope:</strong> {{ keyword_scope }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    overall_score: u32,
    score_class: String,
    score_label: String,
    verdict: String,
    breakdown: Vec<HtmlBreakdownRow>,
    industry_focus: String,
    keyword_gaps: Vec<HtmlKeywordGap>,
    recommendations: Vec<HtmlRecommendation>,
    generated_at: String,
    version: String,
    resume_file: String,
    target_role: String,
    keyword_scope: String,
}

#[derive(Debug, Clone)]
struct HtmlBreakdownRow {
    label: &'static str,
    percent: u32,
    weight: u32,
}

#[derive(Debug, Clone)]
struct HtmlKeywordGap {
    keyword: String,
    has_near_match: bool,
    near_skill: String,
}

#[derive(Debug, Clone)]
struct HtmlRecommendation {
    priority_class: String,
    priority: &'static str,
    title: String,
    section: String,
    points: String,
    description: String,
    steps: Vec<String>,
}

fn score_label(score: u32) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        80..=89 => "VERY GOOD",
        70..=79 => "GOOD",
        60..=69 => "FAIR",
        50..=59 => "BELOW AVG",
        _ => "POOR",
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "Critical",
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

fn display_or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        "(none)"
    } else {
        value
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let color = match score {
            90..=100 => Color::Green,
            80..=89 => Color::BrightGreen,
            70..=79 => Color::Yellow,
            60..=69 => Color::BrightYellow,
            50..=59 => Color::Red,
            _ => Color::BrightRed,
        };
        let badge = score_label(score);

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> String {
        if self.use_colors {
            let icon = match priority {
                Priority::Critical => "🚨",
                Priority::High => "⚠️",
                Priority::Medium => "📋",
                Priority::Low => "💡",
            };
            format!("{} ", icon)
        } else {
            let text_icon = match priority {
                Priority::Critical => "[!]",
                Priority::High => "[*]",
                Priority::Medium => "[-]",
                Priority::Low => "[+]",
            };
            format!("{} ", text_icon)
        }
    }

    fn format_bar(&self, percent: u32) -> String {
        let filled = (percent.min(100) / 5) as usize;
        let bar = format!("{}{}", "■".repeat(filled), "·".repeat(20 - filled));
        let color = match percent {
            0..=39 => Color::Red,
            40..=74 => Color::Yellow,
            _ => Color::Green,
        };
        self.colorize(&bar, color)
    }

    fn format_recommendation(&self, rec: &Recommendation) -> String {
        let mut output = format!(
            "  {}{} ({}, +{:.1} pts)\n",
            self.format_priority_icon(rec.priority),
            self.colorize(&rec.title, Color::Cyan),
            rec.section,
            rec.points_available
        );
        output.push_str(&format!("     {}\n", rec.description));
        if self.detailed {
            for step in &rec.actionable_steps {
                output.push_str(&format!("       → {}\n", step));
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS COMPATIBILITY REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Resume: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.resume_file
        ));
        output.push_str(&format!(
            "Target role: {} | Industry: {}\n",
            display_or_none(&report.metadata.target_role),
            display_or_none(&report.metadata.industry_focus)
        ));

        output.push_str(&self.format_header("Overall Score", 2));
        output.push_str(&format!(
            "Overall Score: {}% {}\n",
            report.result.overall,
            self.format_score_badge(report.result.overall)
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(&report.verdict, Color::Cyan)));

        output.push_str(&self.format_header("Score Breakdown", 3));
        for (label, percent, weight) in report.breakdown_rows() {
            output.push_str(&format!(
                "  {:<18} {} {:>4}% (weight: {}%)\n",
                label,
                self.format_bar(percent),
                percent,
                weight
            ));
        }

        if !report.result.missing_keywords.is_empty() {
            output.push_str(&self.format_header("🔍 Missing Keywords", 3));
            if self.detailed {
                for gap in &report.keyword_gaps {
                    match &gap.near_match {
                        Some(near) => output.push_str(&format!(
                            "  • {} (close to your skill \"{}\", {:.0}% similar)\n",
                            self.colorize(&gap.keyword, Color::Yellow),
                            near.skill,
                            near.similarity * 100.0
                        )),
                        None => output.push_str(&format!(
                            "  • {}\n",
                            self.colorize(&gap.keyword, Color::Yellow)
                        )),
                    }
                }
            } else {
                output.push_str(&format!(
                    "  {}\n",
                    self.colorize(&report.result.missing_keywords.join(", "), Color::Yellow)
                ));
            }
        }

        if !report.recommendations.is_empty() {
            output.push_str(&self.format_header("💡 Recommendations", 2));
            for rec in &report.recommendations {
                output.push_str(&self.format_recommendation(rec));
            }
        }

        output.push('\n');
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(score: u32) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }

    fn format_markdown_recommendation(index: usize, rec: &Recommendation) -> String {
        let mut output = format!("#### {}. {}\n\n", index, rec.title);
        output.push_str(&format!(
            "**Priority:** {} | **Section:** {} | **Points available:** {:.1}\n\n",
            priority_label(rec.priority),
            rec.section,
            rec.points_available
        ));
        output.push_str(&format!("{}\n\n", rec.description));

        for step in &rec.actionable_steps {
            output.push_str(&format!("- {}\n", step));
        }
        if !rec.actionable_steps.is_empty() {
            output.push('\n');
        }

        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 ATS Compatibility Report\n\n");

        if self.include_metadata {
            let resume_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}`\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                resume_name
            ));
            output.push_str(&format!(
                "**Target role:** {} | **Industry:** {} | **Keyword scope:** {}\n\n",
                display_or_none(&report.metadata.target_role),
                display_or_none(&report.metadata.industry_focus),
                report.metadata.keyword_scope
            ));
        }

        output.push_str("## Overall Score\n\n");
        output.push_str(&format!(
            "**Overall Score:** {}% {}\n\n",
            report.result.overall,
            Self::markdown_score_badge(report.result.overall)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict));

        output.push_str("### Score Breakdown\n\n");
        output.push_str("| Category | Score | Weight |\n");
        output.push_str("|----------|-------|--------|\n");
        for (label, percent, weight) in report.breakdown_rows() {
            output.push_str(&format!("| {} | {}% | {}% |\n", label, percent, weight));
        }
        output.push('\n');

        if !report.keyword_gaps.is_empty() {
            output.push_str("### 🔍 Missing Keywords\n\n");
            for gap in &report.keyword_gaps {
                match &gap.near_match {
                    Some(near) => output.push_str(&format!(
                        "- `{}` (close to `{}`)\n",
                        gap.keyword, near.skill
                    )),
                    None => output.push_str(&format!("- `{}`\n", gap.keyword)),
                }
            }
            output.push('\n');
        }

        if !report.recommendations.is_empty() {
            output.push_str("## 💡 Recommendations\n\n");
            for (i, rec) in report.recommendations.iter().enumerate() {
                output.push_str(&Self::format_markdown_recommendation(i + 1, rec));
            }
        }

        output.push_str("---\n\n");
        output.push_str(&format!(
            "*Generated by resume-ats-scorer v{}*\n",
            report.metadata.scorer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &ScoreReport) -> HtmlTemplate {
        let score_class = match report.result.overall {
            80..=100 => "score-excellent",
            70..=79 => "score-good",
            60..=69 => "score-fair",
            _ => "score-poor",
        };

        let breakdown = report
            .breakdown_rows()
            .into_iter()
            .map(|(label, percent, weight)| HtmlBreakdownRow { label, percent, weight })
            .collect();

        let keyword_gaps = report
            .keyword_gaps
            .iter()
            .map(|gap| HtmlKeywordGap {
                keyword: gap.keyword.clone(),
                has_near_match: gap.near_match.is_some(),
                near_skill: gap
                    .near_match
                    .as_ref()
                    .map(|near| near.skill.clone())
                    .unwrap_or_default(),
            })
            .collect();

        let recommendations = report
            .recommendations
            .iter()
            .map(|rec| HtmlRecommendation {
                priority_class: priority_label(rec.priority).to_lowercase(),
                priority: priority_label(rec.priority),
                title: rec.title.clone(),
                section: rec.section.to_string(),
                points: format!("{:.1}", rec.points_available),
                description: rec.description.clone(),
                steps: rec.actionable_steps.clone(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            overall_score: report.result.overall,
            score_class: score_class.to_string(),
            score_label: score_label(report.result.overall).to_string(),
            verdict: report.verdict.clone(),
            breakdown,
            industry_focus: report.metadata.industry_focus.clone(),
            keyword_gaps,
            recommendations,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            version: report.metadata.scorer_version.clone(),
            resume_file: report.metadata.resume_file.clone(),
            target_role: display_or_none(&report.metadata.target_role).to_string(),
            keyword_scope: report.metadata.keyword_scope.to_string(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ScorerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            formatters: vec![
                Box::new(ConsoleFormatter::new(use_colors, detailed)),
                Box::new(JsonFormatter::new(pretty_json)),
                Box::new(MarkdownFormatter::new(include_metadata)),
                Box::new(HtmlFormatter::new(include_html_styles)),
            ],
        }
    }

    pub fn generate_report(&self, report: &ScoreReport, format: OutputFormat) -> Result<String> {
        self.formatters
            .iter()
            .find(|formatter| formatter.supports_format() == format)
            .ok_or_else(|| {
                ScorerError::OutputFormatting(format!("No formatter for {:?} output", format))
            })?
            .format_report(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Where `score --save` writes: `target` itself, or a suggested file name
/// inside it when `target` is an existing directory.
pub fn resolve_report_path(target: &Path, format: OutputFormat, resume_file: &str) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, resume_file, false))
    } else {
        target.to_path_buf()
    }
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}_ats_score{}.{}", base_name, timestamp_suffix, extension)
}
