use crate::config::ReportConfig;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Date,
    CampaignId,
    CampaignName,
    AdId,
    AdName,
    Platform,
    Country,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    Impressions,
    Clicks,
    ClickThroughRate,
    Installs,
    EstimatedCost,
    AverageCpi,
    Interactions,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSpec {
    pub date_range: DateRange,
    pub dimensions: Vec<Dimension>,
    pub metrics: Vec<Metric>,
}

/// Body of a `campaignReport:generate` call.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub report_spec: ReportSpec,
}

impl From<&ReportConfig> for ReportRequest {
    fn from(report: &ReportConfig) -> Self {
        ReportRequest {
            report_spec: ReportSpec {
                date_range: DateRange {
                    start_date: report.start_date.into(),
                    end_date: report.end_date.into(),
                },
                dimensions: report.dimensions.clone(),
                metrics: report.metrics.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Dimension,
    Metric,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(serde_json::Number),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(number) => write!(f, "{}", number),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => CellValue::Text(text),
            Value::Number(number) => CellValue::Number(number),
            Value::Bool(flag) => CellValue::Text(flag.to_string()),
            Value::Null => CellValue::Empty,
            // Single-value wrappers carry their scalar as the first entry,
            // e.g. {"value": "US", "displayLabel": "United States"}.
            Value::Object(wrapper) => wrapper
                .into_iter()
                .next()
                .map(|(_, inner)| CellValue::from(inner))
                .unwrap_or(CellValue::Empty),
            Value::Array(items) => CellValue::Text(Value::Array(items).to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportValue {
    pub kind: ValueKind,
    pub name: String,
    pub value: CellValue,
}

impl ReportValue {
    pub fn dimension(name: &str, value: CellValue) -> Self {
        ReportValue {
            kind: ValueKind::Dimension,
            name: name.to_string(),
            value,
        }
    }

    pub fn metric(name: &str, value: CellValue) -> Self {
        ReportValue {
            kind: ValueKind::Metric,
            name: name.to_string(),
            value,
        }
    }
}

/// One report row: every dimension value followed by every metric value,
/// each in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportRow {
    pub values: Vec<ReportValue>,
}

impl ReportRow {
    pub fn column_names(&self) -> Vec<String> {
        self.values.iter().map(|v| v.name.clone()).collect()
    }

    pub fn has_same_columns(&self, other: &ReportRow) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.kind == b.kind && a.name == b.name)
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawReportRow {
    #[serde(default)]
    dimension_values: Map<String, Value>,
    #[serde(default)]
    metric_values: Map<String, Value>,
}

impl From<RawReportRow> for ReportRow {
    fn from(raw: RawReportRow) -> Self {
        let dimensions = raw
            .dimension_values
            .into_iter()
            .map(|(name, value)| ReportValue::dimension(&name, value.into()));
        let metrics = raw
            .metric_values
            .into_iter()
            .map(|(name, value)| ReportValue::metric(&name, value.into()));

        ReportRow {
            values: dimensions.chain(metrics).collect(),
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct GenerateCampaignReportResponse {
    #[serde(default)]
    pub(crate) rows: Vec<RawReportRow>,
}

impl GenerateCampaignReportResponse {
    pub(crate) fn into_rows(self) -> Vec<ReportRow> {
        self.rows.into_iter().map(ReportRow::from).collect()
    }
}
