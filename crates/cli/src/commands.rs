//! Command handlers. Each one writes its result to `out` and logs progress.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;

use jewelai_ai::{
    AiFeature, AiScheduler, GeminiClient, GeminiConfig, KeywordAnalysisJob, LocalAiScheduler,
};
use jewelai_analytics::{
    Dimension, InventoryPolicy, KpiSummary, LifecycleShare, ReportData, TypeSummary,
    distribution_by, lifecycle_shares, type_summaries,
};
use jewelai_inventory::{InventoryItem, parse_inventory};
use jewelai_report::{ReportBuilder, render_markdown, report_file_name};

use crate::cli::ReportFormat;

pub fn load_inventory(path: &Path) -> Result<Vec<InventoryItem>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory file {}", path.display()))?;
    let items = parse_inventory(&raw)
        .with_context(|| format!("invalid inventory file {}", path.display()))?;
    tracing::info!(path = %path.display(), items = items.len(), "loaded inventory");
    Ok(items)
}

pub fn load_policy(path: Option<&Path>) -> Result<InventoryPolicy> {
    let Some(path) = path else {
        return Ok(InventoryPolicy::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file {}", path.display()))?;
    let policy = InventoryPolicy::from_json(&raw)
        .with_context(|| format!("invalid policy file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded inventory policy");
    Ok(policy)
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Dashboard view: KPI cards at the top level, then the lifecycle value
/// breakdown and the per-type category table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub kpis: KpiSummary,
    pub lifecycle_shares: Vec<LifecycleShare>,
    pub types: Vec<TypeSummary>,
}

pub fn summary(items: &[InventoryItem], policy: &InventoryPolicy, out: &mut impl Write) -> Result<()> {
    policy.validate().context("invalid inventory policy")?;
    let dashboard = DashboardSummary {
        kpis: KpiSummary::compute(items),
        lifecycle_shares: lifecycle_shares(items),
        types: type_summaries(items, policy),
    };
    write_json(out, &dashboard)
}

pub fn distribution(items: &[InventoryItem], dimension: Dimension, out: &mut impl Write) -> Result<()> {
    let buckets = distribution_by(items, dimension);
    tracing::debug!(dimension = dimension.label(), buckets = buckets.len(), "computed distribution");
    write_json(out, &buckets)
}

/// Render the report for `items` in the requested format.
pub fn render_report(
    items: &[InventoryItem],
    policy: &InventoryPolicy,
    format: ReportFormat,
    generated_at: NaiveDateTime,
) -> Result<String> {
    let data = ReportData::build(items);
    match format {
        ReportFormat::Json => {
            policy.validate().context("invalid inventory policy")?;
            let mut json = serde_json::to_string_pretty(&data)?;
            json.push('\n');
            Ok(json)
        }
        ReportFormat::Markdown => {
            let doc = ReportBuilder::new(&data, policy)
                .generated_at(generated_at)
                .build()
                .context("failed to build report")?;
            Ok(render_markdown(&doc)?)
        }
    }
}

/// Where a report goes: an explicit file, a file named by date inside a
/// directory, or stdout when `None`.
pub fn report_destination(output: Option<&Path>, generated_at: NaiveDateTime) -> Option<PathBuf> {
    let output = output?;
    if output.is_dir() {
        Some(output.join(report_file_name(generated_at.date())))
    } else {
        Some(output.to_path_buf())
    }
}

pub fn keyword(keyword: &str, config: GeminiConfig, out: &mut impl Write) -> Result<()> {
    let scheduler = LocalAiScheduler::new(AiFeature::from_flag(config.has_api_key()));
    if !scheduler.feature().is_enabled() {
        anyhow::bail!("keyword analysis needs GEMINI_API_KEY (flag --api-key or environment)");
    }

    let client = GeminiClient::new(config).context("failed to configure Gemini client")?;
    tracing::info!(model = client.model(), "keyword analysis via Gemini");

    let analysis = scheduler
        .run(KeywordAnalysisJob::new(keyword, client))
        .with_context(|| format!("keyword analysis for {keyword:?} failed"))?;
    write_json(out, &analysis)
}

pub fn gemini_config(api_key: Option<String>, model: Option<String>, timeout_secs: u64) -> GeminiConfig {
    let mut config = GeminiConfig::default().with_timeout(Duration::from_secs(timeout_secs));
    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }
    if let Some(model) = model.filter(|m| !m.trim().is_empty()) {
        config = config.with_model(model);
    }
    config
}
