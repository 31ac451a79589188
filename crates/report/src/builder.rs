//! Narrative report assembled from a [`ReportData`] snapshot.
//!
//! Every number in the text comes from the snapshot; every threshold comes
//! from the [`InventoryPolicy`]. The builder itself only decides wording and
//! layout.

use chrono::{NaiveDate, NaiveDateTime};

use jewelai_analytics::{Dimension, DistributionBucket, InventoryPolicy, ReportData};
use jewelai_inventory::InventoryItem;

use crate::currency::format_inr;
use crate::document::{Block, ReportDocument, Run, Table};
use crate::error::ReportError;

const NOT_AVAILABLE: &str = "N/A";

/// File name for a report generated on `date`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("Bracelet_Inventory_Report_{}.md", date.format("%Y-%m-%d"))
}

pub struct ReportBuilder<'a> {
    data: &'a ReportData,
    policy: &'a InventoryPolicy,
    generated_at: Option<NaiveDateTime>,
    doc: ReportDocument,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(data: &'a ReportData, policy: &'a InventoryPolicy) -> Self {
        Self {
            data,
            policy,
            generated_at: None,
            doc: ReportDocument::default(),
        }
    }

    /// Timestamp printed under the title. Omitted when not set.
    pub fn generated_at(mut self, at: NaiveDateTime) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn build(mut self) -> Result<ReportDocument, ReportError> {
        self.policy.validate()?;

        self.title();
        self.executive_summary();
        self.overall_prediction();
        self.specific_insights();
        self.purchase_recommendations();
        self.distribution_analysis();
        self.liquidation_recommendations();
        self.key_metrics();
        self.conclusion();

        tracing::debug!(blocks = self.doc.blocks.len(), "assembled inventory report");
        Ok(self.doc)
    }

    fn top_type(&self) -> &str {
        self.data
            .top_performing
            .as_ref()
            .map_or(NOT_AVAILABLE, |p| p.item_type.as_str())
    }

    fn worst_type(&self) -> &str {
        self.data
            .worst_performing
            .as_ref()
            .map_or(NOT_AVAILABLE, |p| p.item_type.as_str())
    }

    fn fast_top_type(&self) -> &str {
        self.data
            .fast_moving_top_type
            .as_deref()
            .unwrap_or(NOT_AVAILABLE)
    }

    fn velocity(&self) -> String {
        format!("{:.1}", self.data.fast_moving_avg_velocity)
    }

    fn heading(&mut self, level: u8, text: impl Into<String>) {
        self.doc.push(Block::Heading {
            level,
            text: text.into(),
        });
    }

    fn paragraph(&mut self, runs: Vec<Run>) {
        self.doc.push(Block::Paragraph { runs });
    }

    fn bullet(&mut self, runs: Vec<Run>) {
        self.doc.push(Block::Bullet { runs });
    }

    fn title(&mut self) {
        self.doc.push(Block::Title {
            text: "Bracelet Inventory Analysis Report".to_string(),
        });
        if let Some(at) = self.generated_at {
            self.doc.push(Block::Subtitle {
                text: format!("Generated on {}", at.format("%B %-d, %Y at %H:%M")),
            });
        }
    }

    fn executive_summary(&mut self) {
        let d = self.data;
        self.heading(1, "Executive Summary");
        self.paragraph(vec![
            Run::bold(format!(
                "This report analyzes {} bracelet items in inventory with a total value of {}. ",
                d.total_items,
                format_inr(d.total_stock_value)
            )),
            Run::plain(
                "It summarizes inventory performance, identifies fast-moving products for \
                 restocking, and highlights items requiring liquidation.",
            ),
        ]);
    }

    fn overall_prediction(&mut self) {
        let d = self.data;
        self.heading(1, "Overall AI Prediction");

        self.heading(2, "📊 Overall Performance");
        self.paragraph(vec![
            Run::plain(format!(
                "Your bracelet inventory consists of {} items valued at {}. ",
                d.total_items,
                format_inr(d.total_stock_value)
            )),
            Run::plain(format!(
                "Fast-moving items account for {}% of inventory with an average sales velocity of {} units/month. ",
                d.fast_moving.percentage,
                self.velocity()
            )),
            Run::plain(format!(
                "The average time items spend in inventory is {} days.",
                d.avg_days_in_inventory
            )),
        ]);

        self.heading(2, "⚠️ Dead Stock Alert");
        self.paragraph(vec![
            Run::plain(format!(
                "{} items ({}%) are classified as dead stock, representing ",
                d.dead_stock.len(),
                d.dead_stock.percentage
            )),
            Run::bold(format_inr(d.dead_stock.value)),
            Run::plain(" in tied-up capital. These items have been in inventory for an average of "),
            Run::bold(format!("{} days", d.dead_stock.avg_days)),
            Run::plain(" with zero sales activity."),
        ]);

        self.heading(2, "🏆 Top Performer Analysis");
        let runs = match (&d.top_performing, &d.worst_performing) {
            (Some(top), Some(worst)) => vec![
                Run::plain(format!(
                    "{} bracelets are your star performers with {} items selling at an average velocity of {:.1} units/month. ",
                    top.item_type, top.count, top.avg_velocity
                )),
                Run::plain(format!(
                    "{} bracelets need strategic intervention with only {} items showing minimal movement.",
                    worst.item_type, worst.count
                )),
            ],
            _ => vec![Run::plain("No bracelet types are available for performance ranking.")],
        };
        self.paragraph(runs);
    }

    fn specific_insights(&mut self) {
        let d = self.data;
        let limit = self.policy.table_row_limit;
        self.heading(1, "Specific AI Insights");

        self.heading(2, "Fast-Moving Goods Analysis");
        self.paragraph(vec![
            Run::plain(format!(
                "You have {} fast-moving bracelets valued at ",
                d.fast_moving.len()
            )),
            Run::bold(format_inr(d.fast_moving.value)),
            Run::plain(format!(
                ". These items are selling at {} units/month (fast-moving means {}+ units/month), indicating strong market demand. ",
                self.velocity(),
                self.policy.fast_moving_velocity_threshold
            )),
            Run::bold(format!(
                "{} bracelets are your top performers in this category.",
                self.fast_top_type()
            )),
        ]);
        self.item_table(&d.fast_moving.items, &format!("Top {limit} Fast-Moving Items"));

        self.heading(2, "Slow-Moving Goods Analysis");
        self.paragraph(vec![
            Run::plain(format!(
                "Your {} slow-moving bracelets (valued at ",
                d.slow_moving.len()
            )),
            Run::bold(format_inr(d.slow_moving.value)),
            Run::plain(format!(
                ") have been in inventory for an average of {} days. Strategic intervention is needed to prevent them from becoming dead stock.",
                d.slow_moving.avg_days
            )),
        ]);
        self.item_table(&d.slow_moving.items, &format!("Top {limit} Slow-Moving Items"));

        self.heading(2, "Dead Stock Analysis");
        self.paragraph(vec![
            Run::plain(format!(
                "Your {} dead stock items (valued at ",
                d.dead_stock.len()
            )),
            Run::bold(format_inr(d.dead_stock.value)),
            Run::plain(format!(
                ") have been in inventory for an average of {} days with zero sales. ",
                d.dead_stock.avg_days
            )),
            Run::bold(
                "This represents significant tied-up capital that could be reinvested in fast-moving inventory.",
            ),
        ]);
        self.item_table(&d.dead_stock.items, &format!("Top {limit} Dead Stock Items"));
    }

    fn item_table(&mut self, items: &[InventoryItem], title: &str) {
        if items.is_empty() {
            self.paragraph(vec![Run::plain(format!("{title}: No items available"))]);
            return;
        }

        self.heading(3, title);
        let rows = items
            .iter()
            .take(self.policy.table_row_limit)
            .map(|item| {
                vec![
                    item.sku().to_string(),
                    item.item_type().to_string(),
                    format!("{} ({})", item.metal(), item.metal_purity()),
                    format_inr(item.final_selling_price()),
                    item.days_in_inventory().to_string(),
                    self.policy.age_band(item.days_in_inventory()).label().to_string(),
                    item.stock_location().to_string(),
                    item.lifecycle_stage().to_string(),
                ]
            })
            .collect();

        self.doc.push(Block::Table(Table {
            headers: ["SKU", "Type", "Metal", "Price", "Days", "Age", "Location", "Status"]
                .map(String::from)
                .to_vec(),
            rows,
        }));
    }

    fn purchase_recommendations(&mut self) {
        let d = self.data;
        let top = self.top_type().to_string();
        let fast_top = self.fast_top_type().to_string();

        self.heading(1, "Purchase Recommendations - What to Buy Next");
        self.paragraph(vec![Run::plain(
            "Based on fast-moving goods analysis, the following purchase decisions are recommended \
             to optimize inventory turnover and maximize profitability:",
        )]);

        let restock = match &d.top_performing {
            Some(p) => format!(
                "{} bracelets should be your highest priority for restocking. With {} items showing a sales velocity of {:.1} units/month, this type demonstrates consistent market demand. ",
                p.item_type, p.count, p.avg_velocity
            ),
            None => "No bracelet type currently stands out for restocking. ".to_string(),
        };
        self.paragraph(vec![
            Run::bold("1. Priority Restock - Bracelet Types: "),
            Run::plain(restock),
            Run::bold(format!(
                "Additionally, focus on {fast_top} bracelets as they are your top performers in the fast-moving category."
            )),
        ]);

        self.paragraph(vec![
            Run::bold("2. Recommended Bracelet Types to Purchase: "),
            Run::plain(format!(
                "Prioritize purchasing {top} and {fast_top} bracelets. These types show the strongest \
                 sales performance and should be maintained at higher inventory levels."
            )),
        ]);

        self.paragraph(vec![
            Run::bold("3. Metal Preferences for New Purchases: "),
            Run::plain(
                "Focus on purchasing bracelets in metals that are performing well in your fast-moving inventory. ",
            ),
            Run::bold(format!(
                "The average price point of fast-moving items is {}, which can guide your purchasing budget allocation.",
                format_inr(d.fast_moving.avg_price)
            )),
        ]);

        self.paragraph(vec![
            Run::bold("4. Design Style Recommendations: "),
            Run::plain(
                "Maintain inventory levels of design styles that match your fast-moving items and review \
                 the design style distribution to prioritize similar designs in new purchases.",
            ),
        ]);

        self.paragraph(vec![
            Run::bold("5. Inventory Management Strategy: "),
            Run::plain(format!(
                "Maintain 2-3 months of inventory for fast-moving items based on current sales velocity of {} units/month. ",
                self.velocity()
            )),
            Run::plain("Set reorder points at 30-40% stock levels to avoid stockouts while preventing overstocking. "),
            Run::bold(format!(
                "Consider increasing inventory for {top} bracelets by 20-30% to meet growing demand."
            )),
        ]);

        self.paragraph(vec![
            Run::bold("6. Budget Allocation: "),
            Run::plain(format!(
                "With {} in fast-moving inventory, allocate 60-70% of your purchasing budget to restocking these types. ",
                format_inr(d.fast_moving.value)
            )),
            Run::plain("Use the remaining budget for testing new designs that align with fast-moving patterns."),
        ]);
    }

    fn distribution_analysis(&mut self) {
        self.heading(2, "Inventory Distribution Analysis");
        for (dimension, title) in [
            (Dimension::Type, "Distribution by Bracelet Type"),
            (Dimension::Metal, "Distribution by Metal Type"),
            (Dimension::DesignStyle, "Distribution by Design Style"),
            (Dimension::Location, "Distribution by Stock Location"),
        ] {
            self.heading(3, title);
            let buckets = self.data.distributions.get(dimension);
            self.doc.push(Block::Table(distribution_table(dimension, buckets)));
        }
    }

    fn liquidation_recommendations(&mut self) {
        let d = self.data;
        let p = self.policy;

        self.heading(1, "Liquidation Recommendations - What to Liquidate");
        self.paragraph(vec![Run::plain(
            "Based on dead stock and slow-moving goods analysis, the following liquidation actions are recommended:",
        )]);

        self.heading(2, "Immediate Liquidation (Dead Stock)");
        self.bullet(vec![Run::plain(format!(
            "Implement a clearance sale for items with {}+ days in inventory",
            p.dead_stock_days_threshold
        ))]);
        self.bullet(vec![Run::plain(
            "Launch a 'Final Clearance' event with 30-50% discounts - better to recover 50-70% quickly than hold indefinitely",
        )]);
        self.bullet(vec![Run::plain(
            "Offer bulk promotions ('Buy 2, Get 1 Free') to move multiple units per transaction",
        )]);
        self.bullet(vec![Run::plain(
            "Consider liquidation channels: outlet stores, online marketplaces, auction sites, or wholesale",
        )]);
        self.bullet(vec![Run::plain("Bundle as 'free gifts' with fast-moving product purchases")]);
        self.bullet(vec![
            Run::plain(format!(
                "Financial Impact: Freeing up {} could be reinvested in approximately ",
                format_inr(d.dead_stock.value)
            )),
            Run::bold(d.reinvestment_capacity().to_string()),
            Run::plain(" fast-moving bracelets generating regular sales"),
        ]);

        self.heading(2, "Strategic Clearance (Slow-Moving)");
        self.bullet(vec![Run::plain(format!(
            "Implement 15-25% discounts for items approaching {} days and create 'Featured Deals' sections",
            p.slow_moving_days_threshold
        ))]);
        self.bullet(vec![Run::plain(
            "Bundle with fast-moving items (e.g., 'Buy fast-moving, get 30% off slow-moving')",
        )]);
        self.bullet(vec![Run::plain(
            "Relocate to high-traffic areas and create eye-catching displays with signage",
        )]);
        self.bullet(vec![Run::plain(
            "Launch targeted social media campaigns and seasonal promotions",
        )]);
        self.bullet(vec![Run::plain(format!(
            "If unsold after {} days, consider transferring to different locations or channels",
            p.transfer_days_threshold
        ))]);
    }

    fn key_metrics(&mut self) {
        let d = self.data;
        self.heading(1, "Key Metrics Summary");

        let metrics: Vec<(&str, String)> = vec![
            ("Total Stock Value", format_inr(d.total_stock_value)),
            ("Total Items", d.total_items.to_string()),
            (
                "Fast-Moving Items",
                format!("{} ({}%)", d.fast_moving.len(), d.fast_moving.percentage),
            ),
            ("Fast-Moving Value", format_inr(d.fast_moving.value)),
            (
                "Slow-Moving Items",
                format!("{} ({}%)", d.slow_moving.len(), d.slow_moving.percentage),
            ),
            ("Slow-Moving Value", format_inr(d.slow_moving.value)),
            (
                "Dead Stock Items",
                format!("{} ({}%)", d.dead_stock.len(), d.dead_stock.percentage),
            ),
            ("Dead Stock Value", format_inr(d.dead_stock.value)),
            (
                "Average Days in Inventory",
                format!("{} days", d.avg_days_in_inventory),
            ),
            (
                "Average Sales Velocity",
                format!("{} units/month", self.velocity()),
            ),
            ("Top Performing Type", self.top_type().to_string()),
            ("Worst Performing Type", self.worst_type().to_string()),
        ];

        self.doc.push(Block::Table(Table {
            headers: vec!["Metric".to_string(), "Value".to_string()],
            rows: metrics
                .into_iter()
                .map(|(metric, value)| vec![metric.to_string(), value])
                .collect(),
        }));
    }

    fn conclusion(&mut self) {
        let top = self.top_type().to_string();
        let fast_top = self.fast_top_type().to_string();

        self.heading(1, "Conclusion");
        self.paragraph(vec![
            Run::plain("This report provides insights into your bracelet inventory performance. "),
            Run::plain("Focus on restocking fast-moving items, particularly "),
            Run::bold(format!("{top} and {fast_top}")),
            Run::plain(" bracelets, while implementing aggressive clearance strategies for dead stock items. "),
            Run::bold(
                "Following these recommendations will improve inventory turnover, free up capital, and raise overall profitability.",
            ),
        ]);
    }
}

fn distribution_table(dimension: Dimension, buckets: &[DistributionBucket]) -> Table {
    Table {
        headers: vec![
            dimension.label().to_string(),
            "Count".to_string(),
            "Value".to_string(),
        ],
        rows: buckets
            .iter()
            .map(|b| vec![b.name.clone(), b.count.to_string(), format_inr(b.value)])
            .collect(),
    }
}
