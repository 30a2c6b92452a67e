// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic sample data and canned server envelopes for tests.

use opsdesk_app::{
    Adjustment, Billability, Client as ClientRecord, ClientId, Invoice, InvoiceFormInput,
    InvoiceId, InvoiceStatus, PaymentChannel, Person, PersonId, Project, ProjectFormInput,
    ProjectId, ProjectResource, ProjectStatus, ServiceLine,
};
use time::{Date, Month};

const CONTACT_NAMES: [&str; 8] = [
    "Dana Reyes",
    "Sam Ortiz",
    "Lee Chen",
    "Kim Patel",
    "Noa Berg",
    "Ira Novak",
    "Mia Lang",
    "Ravi Iyer",
];

const PROJECT_NAMES: [&str; 6] = [
    "Portal Revamp",
    "Billing Migration",
    "Data Warehouse",
    "Mobile Onboarding",
    "Support Console",
    "Audit Automation",
];

fn sample_date(day: usize) -> Date {
    Date::from_calendar_date(2026, Month::January, (day % 27 + 1) as u8)
        .expect("valid sample date")
}

fn contact(n: usize) -> &'static str {
    CONTACT_NAMES[n % CONTACT_NAMES.len()]
}

pub fn sample_client(n: usize) -> ClientRecord {
    ClientRecord {
        id: ClientId::new(format!("client-{n:03}")),
        name: format!("Client {n:03}"),
        primary_contact_person: contact(n).to_owned(),
    }
}

pub fn sample_clients(count: usize) -> Vec<ClientRecord> {
    (1..=count).map(sample_client).collect()
}

pub fn sample_person(n: usize, department: &str) -> Person {
    Person {
        id: PersonId::new(format!("person-{n:03}")),
        display_name: contact(n).to_owned(),
        department: department.to_owned(),
        mobile: format!("+1-555-01{n:02}"),
        work_email: format!("person{n}@opsdesk.test"),
    }
}

/// A mixed roster: odd people in Sales, even in Engineering.
pub fn sample_people(count: usize) -> Vec<Person> {
    (1..=count)
        .map(|n| {
            let department = if n % 2 == 1 { "Sales" } else { "Engineering" };
            sample_person(n, department)
        })
        .collect()
}

pub fn sample_invoice(n: usize) -> Invoice {
    Invoice {
        id: InvoiceId::new(format!("inv-{n:04}")),
        client_id: ClientId::new(format!("client-{:03}", n % 3 + 1)),
        project_id: ProjectId::new(format!("project-{:03}", n % 4 + 1)),
        number: format!("INV-{n:04}"),
        po_number: format!("PO-{n:04}"),
        date: Some(sample_date(n)),
        service_from_date: Some(sample_date(n)),
        service_to_date: Some(sample_date(n + 5)),
        due_date: Some(sample_date(n + 10)),
        mile_stones: Vec::new(),
        prepared_by: contact(n).to_owned(),
        reviewed_by: vec![contact(n + 1).to_owned()],
        services: vec![ServiceLine {
            name: "Development".to_owned(),
            description: "Sprint work".to_owned(),
            mile_stone: String::new(),
            hours: Some(80.0),
            rate: Some(95.0),
            discount_percent: None,
            discount_amount: None,
            sac: "998311".to_owned(),
            time_tracker_report_url: String::new(),
            taxable_amount: Some(7600.0),
            sgst_rate: "Nil".to_owned(),
            sgst_amount: None,
            cgst_rate: "Nil".to_owned(),
            cgst_amount: None,
            igst_rate: "Nil".to_owned(),
            igst_amount: None,
        }],
        adjustments: vec![Adjustment {
            name: "Rounding".to_owned(),
            amount: Some(-0.5),
        }],
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

pub fn sample_invoices(count: usize) -> Vec<Invoice> {
    (1..=count).map(sample_invoice).collect()
}

pub fn sample_project(n: usize) -> Project {
    Project {
        id: ProjectId::new(format!("project-{n:03}")),
        name: PROJECT_NAMES[n % PROJECT_NAMES.len()].to_owned(),
        client_id: ClientId::new(format!("client-{:03}", n % 3 + 1)),
        manager_id: PersonId::new(format!("person-{:03}", n % 4 + 1)),
        acquisition_person_id: PersonId::new(format!("person-{:03}", n % 5 + 1)),
        status: ProjectStatus::InProgress,
        start_date: Some(sample_date(n)),
        end_date: Some(sample_date(n + 14)),
        resources: vec![ProjectResource {
            person_id: PersonId::new(format!("person-{:03}", n % 4 + 1)),
            default_allocation: 20,
            start_date: Some(sample_date(n)),
            end_date: Some(sample_date(n + 14)),
            acquisition_person_id: PersonId::new(format!("person-{:03}", n % 5 + 1)),
            billability: Billability::Billable,
            billing_rate: Some(95.0),
            billable_hours: Vec::new(),
            overtime_allocations: Vec::new(),
        }],
    }
}

pub fn sample_projects(count: usize) -> Vec<Project> {
    (1..=count).map(sample_project).collect()
}

pub fn invoice_form_fixture() -> InvoiceFormInput {
    let mut form = InvoiceFormInput::blank();
    form.client_id = ClientId::new("client-001");
    form.project_id = ProjectId::new("project-001");
    form.number = "INV-9001".to_owned();
    form.date = Some(sample_date(3));
    form.due_date = Some(sample_date(24));
    form.prepared_by = contact(1).to_owned();
    form
}

pub fn project_form_fixture() -> ProjectFormInput {
    let mut form = ProjectFormInput::blank();
    form.name = "Portal Revamp".to_owned();
    form.client_id = ClientId::new("client-001");
    form.manager_id = PersonId::new("person-002");
    form.acquisition_person_id = PersonId::new("person-001");
    form.start_date = Some(sample_date(2));
    form.end_date = Some(sample_date(20));
    form
}

pub fn invoices_envelope(invoices: &[Invoice]) -> String {
    serde_json::json!({ "data": { "invoices": invoices } }).to_string()
}

pub fn projects_envelope(projects: &[Project]) -> String {
    serde_json::json!({ "data": { "projects": projects } }).to_string()
}

pub fn clients_envelope(clients: &[ClientRecord]) -> String {
    serde_json::json!({ "data": { "clients": clients } }).to_string()
}

pub fn people_envelope(people: &[Person]) -> String {
    serde_json::json!({ "data": { "people": people } }).to_string()
}

pub fn invoice_json(invoice: &Invoice) -> String {
    serde_json::to_string(invoice).expect("encode invoice")
}

pub fn project_json(project: &Project) -> String {
    serde_json::to_string(project).expect("encode project")
}
