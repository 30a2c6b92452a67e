// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use opsdesk_api::Client;
use opsdesk_app::{
    Directory, Invoice, InvoiceFormInput, InvoiceId, Project, ProjectFormInput, ProjectId,
    TableScreen,
};
use std::fs;
use std::path::{Path, PathBuf};
use time::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenDefaults {
    pub items_per_page: usize,
    pub sort_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    List,
    Show(String),
    Create(PathBuf),
    Update(String, PathBuf),
    Delete(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOptions {
    pub page: usize,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub action: ScreenAction,
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            page: 1,
            search: None,
            sort: None,
            action: ScreenAction::List,
        }
    }
}

pub fn run_invoices(
    client: &Client,
    options: &ScreenOptions,
    defaults: &ScreenDefaults,
) -> Result<String> {
    match &options.action {
        ScreenAction::List => {
            let directory = client.fetch_directory()?;
            let mut screen = screen_for::<Invoice>(options, defaults);
            screen.sync(&client.invoices())?;
            Ok(render_invoice_table(&screen, &directory))
        }
        ScreenAction::Show(id) => {
            let directory = client.fetch_directory()?;
            let invoice = client.get_invoice(&InvoiceId::new(id.as_str()))?;
            Ok(render_invoice_detail(&invoice, &directory))
        }
        ScreenAction::Create(path) => {
            let form: InvoiceFormInput = read_form(path)?;
            let created = client.create_invoice(&form)?;
            let directory = client.fetch_directory()?;
            let mut screen = screen_for::<Invoice>(options, defaults);
            screen.note_created();
            screen.sync(&client.invoices())?;
            Ok(format!(
                "created invoice {}\n{}",
                created.number,
                render_invoice_table(&screen, &directory)
            ))
        }
        ScreenAction::Update(id, path) => {
            let id = InvoiceId::new(id.as_str());
            client
                .get_invoice(&id)
                .with_context(|| format!("load invoice {id} for update"))?;
            let form: InvoiceFormInput = read_form(path)?;
            let updated = client.update_invoice(&id, &form)?;
            let directory = client.fetch_directory()?;
            let mut screen = screen_for::<Invoice>(options, defaults);
            screen.note_updated();
            screen.sync(&client.invoices())?;
            Ok(format!(
                "updated invoice {}\n{}",
                updated.number,
                render_invoice_table(&screen, &directory)
            ))
        }
        ScreenAction::Delete(id) => {
            let id = InvoiceId::new(id.as_str());
            let directory = client.fetch_directory()?;
            let mut screen = screen_for::<Invoice>(options, defaults);
            screen.sync(&client.invoices())?;
            client.delete_invoice(&id)?;
            screen.note_deleted(|invoice| invoice.id == id);
            screen.sync(&client.invoices())?;
            Ok(format!(
                "deleted invoice {id}\n{}",
                render_invoice_table(&screen, &directory)
            ))
        }
    }
}

pub fn run_projects(
    client: &Client,
    options: &ScreenOptions,
    defaults: &ScreenDefaults,
) -> Result<String> {
    match &options.action {
        ScreenAction::List => {
            let directory = client.fetch_directory()?;
            let mut screen = screen_for::<Project>(options, defaults);
            screen.sync(&client.projects())?;
            Ok(render_project_table(&screen, &directory))
        }
        ScreenAction::Show(id) => {
            let directory = client.fetch_directory()?;
            let project = client.get_project(&ProjectId::new(id.as_str()))?;
            Ok(render_project_detail(&project, &directory))
        }
        ScreenAction::Create(path) => {
            let form: ProjectFormInput = read_form(path)?;
            let created = client.create_project(&form)?;
            let directory = client.fetch_directory()?;
            let mut screen = screen_for::<Project>(options, defaults);
            screen.note_created();
            screen.sync(&client.projects())?;
            Ok(format!(
                "created project {}\n{}",
                created.name,
                render_project_table(&screen, &directory)
            ))
        }
        ScreenAction::Update(id, path) => {
            let id = ProjectId::new(id.as_str());
            client
                .get_project(&id)
                .with_context(|| format!("load project {id} for update"))?;
            let form: ProjectFormInput = read_form(path)?;
            let updated = client.update_project(&id, &form)?;
            let directory = client.fetch_directory()?;
            let mut screen = screen_for::<Project>(options, defaults);
            screen.note_updated();
            screen.sync(&client.projects())?;
            Ok(format!(
                "updated project {}\n{}",
                updated.name,
                render_project_table(&screen, &directory)
            ))
        }
        ScreenAction::Delete(id) => {
            let id = ProjectId::new(id.as_str());
            let directory = client.fetch_directory()?;
            let mut screen = screen_for::<Project>(options, defaults);
            screen.sync(&client.projects())?;
            client.delete_project(&id)?;
            screen.note_deleted(|project| project.id == id);
            screen.sync(&client.projects())?;
            Ok(format!(
                "deleted project {id}\n{}",
                render_project_table(&screen, &directory)
            ))
        }
    }
}

fn screen_for<T>(options: &ScreenOptions, defaults: &ScreenDefaults) -> TableScreen<T> {
    let sort_key = options.sort.as_deref().unwrap_or(&defaults.sort_key);
    let mut screen = TableScreen::new(defaults.items_per_page, sort_key);
    if let Some(query) = &options.search {
        screen.set_query(query);
    }
    screen.set_page(options.page);
    screen
}

fn read_form<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read form file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parse form file {}", path.display()))
}

fn render_invoice_table(screen: &TableScreen<Invoice>, directory: &Directory) -> String {
    let rows: Vec<Vec<String>> = screen
        .visible_rows()
        .iter()
        .map(|numbered| {
            let invoice = numbered.row;
            vec![
                format!("{}.", numbered.ordinal),
                invoice.number.clone(),
                directory.display_client(&invoice.client_id).to_owned(),
                directory.display_project(&invoice.project_id).to_owned(),
                display_date(invoice.date),
                display_date(invoice.due_date),
                invoice.status.as_str().to_owned(),
            ]
        })
        .collect();

    let mut out = format_rows(
        &["#", "number", "client", "project", "date", "due", "status"],
        &rows,
    );
    out.push_str(&page_line(screen.effective_page(), rows.len(), screen.items().len()));
    out
}

fn render_project_table(screen: &TableScreen<Project>, directory: &Directory) -> String {
    let rows: Vec<Vec<String>> = screen
        .visible_rows()
        .iter()
        .map(|numbered| {
            let project = numbered.row;
            vec![
                format!("{}.", numbered.ordinal),
                project.name.clone(),
                project.status.as_str().to_owned(),
                display_date(project.start_date),
                display_date(project.end_date),
                directory.display_client(&project.client_id).to_owned(),
                directory.display_person(&project.manager_id).to_owned(),
            ]
        })
        .collect();

    let mut out = format_rows(
        &["#", "name", "status", "start", "end", "client", "manager"],
        &rows,
    );
    out.push_str(&page_line(screen.effective_page(), rows.len(), screen.items().len()));
    out
}

fn render_invoice_detail(invoice: &Invoice, directory: &Directory) -> String {
    let mut out = String::new();
    out.push_str(&format!("invoice {}\n", invoice.id));
    out.push_str(&format!("  number: {}\n", invoice.number));
    out.push_str(&format!("  po number: {}\n", invoice.po_number));
    out.push_str(&format!(
        "  client: {}\n",
        directory.display_client(&invoice.client_id)
    ));
    out.push_str(&format!(
        "  project: {}\n",
        directory.display_project(&invoice.project_id)
    ));
    out.push_str(&format!("  date: {}\n", display_date(invoice.date)));
    out.push_str(&format!("  due: {}\n", display_date(invoice.due_date)));
    out.push_str(&format!("  status: {}\n", invoice.status.as_str()));
    out.push_str(&format!("  prepared by: {}\n", invoice.prepared_by));
    out.push_str(&format!(
        "  payment channel: {}\n",
        invoice.payment_channel.as_str()
    ));
    out.push_str(&format!("  service lines: {}\n", invoice.services.len()));
    out
}

fn render_project_detail(project: &Project, directory: &Directory) -> String {
    let mut out = String::new();
    out.push_str(&format!("project {}\n", project.id));
    out.push_str(&format!("  name: {}\n", project.name));
    out.push_str(&format!("  status: {}\n", project.status.as_str()));
    out.push_str(&format!(
        "  client: {}\n",
        directory.display_client(&project.client_id)
    ));
    out.push_str(&format!(
        "  manager: {}\n",
        directory.display_person(&project.manager_id)
    ));
    out.push_str(&format!(
        "  acquisition: {}\n",
        directory.display_person(&project.acquisition_person_id)
    ));
    out.push_str(&format!("  start: {}\n", display_date(project.start_date)));
    out.push_str(&format!("  end: {}\n", display_date(project.end_date)));
    out.push_str(&format!("  resources: {}\n", project.resources.len()));
    out
}

fn format_rows(columns: &[&str], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(no rows)\n".to_owned();
    }

    let mut out = String::new();
    out.push_str(&columns.join(" | "));
    out.push('\n');
    for row in rows {
        out.push_str(&row.join(" | "));
        out.push('\n');
    }
    out
}

fn page_line(effective_page: usize, shown: usize, total: usize) -> String {
    format!("page {effective_page} -- {shown} of {total} rows\n")
}

fn display_date(date: Option<Date>) -> String {
    match date {
        Some(date) => date.to_string(),
        None => "-".to_owned(),
    }
}
