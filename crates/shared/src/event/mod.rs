use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Announcement category published by a listed company.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    DrillingResults,
    AssayResults,
    ExplorationUpdate,
    JorcResource,
    ResourceUpdate,
    ProductionUpdate,
    FeasibilityStudy,
    PermitsApprovals,
    CapitalRaise,
    QuarterlyReport,
    AgmEgm,
    #[default]
    #[serde(other)]
    Other,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::DrillingResults => "Drilling Results",
            EventType::AssayResults => "Assay Results",
            EventType::ExplorationUpdate => "Exploration Update",
            EventType::JorcResource => "JORC Resource",
            EventType::ResourceUpdate => "Resource Update",
            EventType::ProductionUpdate => "Production Update",
            EventType::FeasibilityStudy => "Feasibility Study",
            EventType::PermitsApprovals => "Permits & Approvals",
            EventType::CapitalRaise => "Capital Raise",
            EventType::QuarterlyReport => "Quarterly Report",
            EventType::AgmEgm => "AGM/EGM",
            EventType::Other => "Other",
        }
    }
}

/// Calendar event as supplied by the data store. Read-only for the calendar.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// `YYYY-MM-DD`, optionally followed by a `T` time suffix that is ignored.
    pub event_date: String,
    #[serde(default)]
    pub event_type: EventType,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub asx_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance_score: Option<f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commodities: Vec<String>,
}

impl Event {
    /// Date portion of `event_date`, used as the join key against grid days.
    pub fn day_key(&self) -> &str {
        match self.event_date.split_once('T') {
            Some((date, _)) => date,
            None => &self.event_date,
        }
    }
}
