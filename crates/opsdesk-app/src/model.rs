// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::Date;

use crate::filter::SearchFields;
use crate::ids::*;

pub const SALES_DEPARTMENT: &str = "Sales";
pub const ENGINEERING_DEPARTMENT: &str = "Engineering";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Cancelled")]
    Cancelled,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Yet to Start")]
    YetToStart,
}

impl ProjectStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Cancelled => "Cancelled",
            Self::Completed => "Completed",
            Self::YetToStart => "Yet to Start",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "In Progress" => Some(Self::InProgress),
            "Cancelled" => Some(Self::Cancelled),
            "Completed" => Some(Self::Completed),
            "Yet to Start" => Some(Self::YetToStart),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceStatus {
    #[serde(rename = "DRAFT")]
    Draft,
    #[serde(rename = "SENT")]
    Sent,
    #[serde(rename = "PAID")]
    Paid,
    #[serde(rename = "CANCELLED")]
    Cancelled,
}

impl InvoiceStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Sent => "SENT",
            Self::Paid => "PAID",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DRAFT" => Some(Self::Draft),
            "SENT" => Some(Self::Sent),
            "PAID" => Some(Self::Paid),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentChannel {
    #[serde(rename = "WISE")]
    Wise,
    #[serde(rename = "BANK_TRANSFER")]
    BankTransfer,
    #[serde(rename = "OTHER")]
    Other,
}

impl PaymentChannel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wise => "WISE",
            Self::BankTransfer => "BANK_TRANSFER",
            Self::Other => "OTHER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "WISE" => Some(Self::Wise),
            "BANK_TRANSFER" => Some(Self::BankTransfer),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Billability {
    #[serde(rename = "Billable")]
    Billable,
    #[serde(rename = "Not Billable")]
    NotBillable,
    #[serde(rename = "Shadow")]
    Shadow,
}

impl Billability {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Billable => "Billable",
            Self::NotBillable => "Not Billable",
            Self::Shadow => "Shadow",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Billable" => Some(Self::Billable),
            "Not Billable" => Some(Self::NotBillable),
            "Shadow" => Some(Self::Shadow),
            _ => None,
        }
    }
}

/// One line item on an invoice. Tax rates stay as the server's display
/// strings ("Nil", "9%", ...); only amounts are numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mile_stone: String,
    #[serde(default)]
    pub hours: Option<f64>,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    #[serde(default)]
    pub discount_amount: Option<f64>,
    #[serde(rename = "SAC", default)]
    pub sac: String,
    #[serde(default)]
    pub time_tracker_report_url: String,
    #[serde(default)]
    pub taxable_amount: Option<f64>,
    #[serde(default)]
    pub sgst_rate: String,
    #[serde(default)]
    pub sgst_amount: Option<f64>,
    #[serde(default)]
    pub cgst_rate: String,
    #[serde(default)]
    pub cgst_amount: Option<f64>,
    #[serde(default)]
    pub igst_rate: String,
    #[serde(default)]
    pub igst_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id")]
    pub id: InvoiceId,
    #[serde(default)]
    pub client_id: ClientId,
    #[serde(default)]
    pub project_id: ProjectId,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub po_number: String,
    #[serde(default)]
    pub date: Option<Date>,
    #[serde(default)]
    pub service_from_date: Option<Date>,
    #[serde(default)]
    pub service_to_date: Option<Date>,
    #[serde(default)]
    pub due_date: Option<Date>,
    #[serde(default)]
    pub mile_stones: Vec<String>,
    #[serde(default)]
    pub prepared_by: String,
    #[serde(default)]
    pub reviewed_by: Vec<String>,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub paid_amount: Option<f64>,
    #[serde(default)]
    pub forgiven_amount: Option<f64>,
    #[serde(rename = "paidAmountINR", default)]
    pub paid_amount_inr: Option<f64>,
    #[serde(default)]
    pub forgiven_reason: String,
    #[serde(default)]
    pub cancellation_reason: String,
    pub payment_channel: PaymentChannel,
    #[serde(rename = "lostAmountINR", default)]
    pub lost_amount_inr: f64,
}

impl SearchFields for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.client_id.as_str(),
            self.project_id.as_str(),
            self.prepared_by.as_str(),
        ];
        fields.extend(self.reviewed_by.iter().map(String::as_str));
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeAllocation {
    #[serde(default)]
    pub date: Option<Date>,
    #[serde(default)]
    pub hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResource {
    #[serde(default)]
    pub person_id: PersonId,
    pub default_allocation: i32,
    #[serde(default)]
    pub start_date: Option<Date>,
    #[serde(default)]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub acquisition_person_id: PersonId,
    pub billability: Billability,
    #[serde(default)]
    pub billing_rate: Option<f64>,
    #[serde(default)]
    pub billable_hours: Vec<f64>,
    #[serde(default)]
    pub overtime_allocations: Vec<OvertimeAllocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ProjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub client_id: ClientId,
    #[serde(default)]
    pub manager_id: PersonId,
    #[serde(default)]
    pub acquisition_person_id: PersonId,
    pub status: ProjectStatus,
    #[serde(default)]
    pub start_date: Option<Date>,
    #[serde(default)]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub resources: Vec<ProjectResource>,
}

impl SearchFields for Project {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.status.as_str(),
            self.client_id.as_str(),
            self.manager_id.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: ClientId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub primary_contact_person: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: PersonId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub work_email: String,
}

#[cfg(test)]
mod tests {
    use super::{Billability, InvoiceStatus, PaymentChannel, ProjectStatus};

    #[test]
    fn project_status_round_trips_wire_labels() {
        for status in [
            ProjectStatus::InProgress,
            ProjectStatus::Cancelled,
            ProjectStatus::Completed,
            ProjectStatus::YetToStart,
        ] {
            assert_eq!(ProjectStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::parse("in progress"), None);
    }

    #[test]
    fn invoice_status_round_trips_wire_labels() {
        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::Sent,
            InvoiceStatus::Paid,
            InvoiceStatus::Cancelled,
        ] {
            assert_eq!(InvoiceStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn payment_channel_and_billability_parse() {
        assert_eq!(PaymentChannel::parse("WISE"), Some(PaymentChannel::Wise));
        assert_eq!(PaymentChannel::parse("wise"), None);
        assert_eq!(
            Billability::parse("Not Billable"),
            Some(Billability::NotBillable)
        );
    }
}
