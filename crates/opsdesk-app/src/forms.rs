// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::ids::{ClientId, PersonId, ProjectId};
use crate::model::{
    Adjustment, Billability, InvoiceStatus, PaymentChannel, ProjectResource, ProjectStatus,
    ServiceLine,
};

pub const DEFAULT_SAC_CODE: &str = "998311";
pub const DEFAULT_ALLOCATION: i32 = 5;
pub const MAX_ALLOCATION: i32 = 40;

/// Body of a project create/update. Serializes to the wire shape the server
/// expects; also deserializes from form files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFormInput {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceFormInput {
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormPayload {
    Invoice(InvoiceFormInput),
    Project(ProjectFormInput),
}

impl FormPayload {
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Invoice(invoice) => invoice.validate(),
            Self::Project(project) => project.validate(),
        }
    }
}

impl ProjectFormInput {
    /// Empty form as presented before any input.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            client_id: ClientId::default(),
            manager_id: PersonId::default(),
            acquisition_person_id: PersonId::default(),
            status: ProjectStatus::InProgress,
            start_date: None,
            end_date: None,
            resources: vec![ProjectResource {
                person_id: PersonId::default(),
                default_allocation: DEFAULT_ALLOCATION,
                start_date: None,
                end_date: None,
                acquisition_person_id: PersonId::default(),
                billability: Billability::Billable,
                billing_rate: None,
                billable_hours: Vec::new(),
                overtime_allocations: Vec::new(),
            }],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("project name is required -- enter a name and retry");
        }
        if self.client_id.is_blank() {
            bail!("project client is required -- choose a client and retry");
        }
        if self.manager_id.is_blank() {
            bail!("project manager is required -- choose a manager and retry");
        }
        if self.acquisition_person_id.is_blank() {
            bail!("acquisition person is required -- choose a person and retry");
        }
        let Some(start_date) = self.start_date else {
            bail!("project start date is required");
        };
        let Some(end_date) = self.end_date else {
            bail!("project end date is required");
        };
        if end_date < start_date {
            bail!("project end date must be on/after start date");
        }
        for resource in &self.resources {
            resource.validate()?;
        }
        Ok(())
    }
}

impl ProjectResource {
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_ALLOCATION).contains(&self.default_allocation) {
            bail!(
                "resource allocation must be between 1 and {MAX_ALLOCATION} hours, got {}",
                self.default_allocation
            );
        }
        if self.billability == Billability::Billable
            && let Some(rate) = self.billing_rate
            && rate <= 0.0
        {
            bail!("billing rate must be a non-zero positive value when billability is Billable");
        }
        if let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date)
            && end_date < start_date
        {
            bail!("resource end date must be on/after start date");
        }
        Ok(())
    }
}

impl InvoiceFormInput {
    pub fn blank() -> Self {
        Self {
            client_id: ClientId::default(),
            project_id: ProjectId::default(),
            number: String::new(),
            po_number: String::new(),
            date: None,
            service_from_date: None,
            service_to_date: None,
            due_date: None,
            mile_stones: Vec::new(),
            prepared_by: String::new(),
            reviewed_by: Vec::new(),
            services: vec![ServiceLine {
                name: String::new(),
                description: String::new(),
                mile_stone: String::new(),
                hours: None,
                rate: None,
                discount_percent: None,
                discount_amount: None,
                sac: DEFAULT_SAC_CODE.to_owned(),
                time_tracker_report_url: String::new(),
                taxable_amount: None,
                sgst_rate: "Nil".to_owned(),
                sgst_amount: None,
                cgst_rate: "Nil".to_owned(),
                cgst_amount: None,
                igst_rate: "Nil".to_owned(),
                igst_amount: None,
            }],
            adjustments: Vec::new(),
            status: InvoiceStatus::Draft,
            paid_amount: None,
            forgiven_amount: None,
            paid_amount_inr: None,
            forgiven_reason: String::new(),
            cancellation_reason: String::new(),
            payment_channel: PaymentChannel::Wise,
            lost_amount_inr: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_blank() {
            bail!("invoice client is required -- choose a client and retry");
        }
        if self.project_id.is_blank() {
            bail!("invoice project is required -- choose a project and retry");
        }
        if self.number.trim().is_empty() {
            bail!("invoice number is required -- enter a number and retry");
        }
        if self.date.is_none() {
            bail!("invoice date is required");
        }
        if self.due_date.is_none() {
            bail!("invoice due date is required");
        }
        if let (Some(from), Some(to)) = (self.service_from_date, self.service_to_date)
            && to < from
        {
            bail!("service period end must be on/after its start");
        }
        for amount in [self.paid_amount, self.forgiven_amount, self.paid_amount_inr]
            .into_iter()
            .flatten()
        {
            if amount < 0.0 {
                bail!("invoice amounts cannot be negative");
            }
        }
        if self.lost_amount_inr < 0.0 {
            bail!("invoice amounts cannot be negative");
        }
        Ok(())
    }
}
