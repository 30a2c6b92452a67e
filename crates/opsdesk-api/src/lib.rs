// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

use opsdesk_app::{
    Client as ClientRecord, CollectionSource, Directory, Invoice, InvoiceFormInput, InvoiceId,
    Person, Project, ProjectFormInput, ProjectId,
};

/// Blocking client for the operations backend.
///
/// Reads go out unauthenticated; mutations carry the configured bearer
/// token. Form inputs are validated locally before any request is built.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    pub fn new(base_url: &str, token: Option<&str>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("api.base_url must not be empty");
        }
        let parsed =
            Url::parse(&base_url).with_context(|| format!("invalid api.base_url {base_url:?}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!(
                "api.base_url must use http or https, got {:?}",
                parsed.scheme()
            );
        }

        let token = token
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self {
            base_url,
            token,
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn list_invoices(&self, sort_key: &str) -> Result<Vec<Invoice>> {
        let request = self
            .http
            .get(format!("{}/invoices", self.base_url))
            .query(&[("sort", sort_key)]);
        let parsed: InvoiceListEnvelope = self.send(request)?.json().context("decode invoice list")?;
        Ok(parsed.data.invoices)
    }

    pub fn get_invoice(&self, id: &InvoiceId) -> Result<Invoice> {
        let request = self.http.get(format!("{}/invoices/{id}", self.base_url));
        self.send(request)?.json().context("decode invoice")
    }

    pub fn create_invoice(&self, input: &InvoiceFormInput) -> Result<Invoice> {
        input.validate()?;
        let request = self
            .authorized(self.http.post(format!("{}/invoices", self.base_url)))?
            .json(input);
        self.send(request)?.json().context("decode created invoice")
    }

    pub fn update_invoice(&self, id: &InvoiceId, input: &InvoiceFormInput) -> Result<Invoice> {
        input.validate()?;
        let request = self
            .authorized(self.http.put(format!("{}/invoices/{id}", self.base_url)))?
            .json(input);
        self.send(request)?.json().context("decode updated invoice")
    }

    pub fn delete_invoice(&self, id: &InvoiceId) -> Result<()> {
        let request = self.authorized(self.http.delete(format!("{}/invoices/{id}", self.base_url)))?;
        self.send(request)?;
        Ok(())
    }

    pub fn list_projects(&self, sort_key: &str) -> Result<Vec<Project>> {
        let request = self
            .http
            .get(format!("{}/projects", self.base_url))
            .query(&[("sort", sort_key)]);
        let parsed: ProjectListEnvelope = self.send(request)?.json().context("decode project list")?;
        Ok(parsed.data.projects)
    }

    pub fn get_project(&self, id: &ProjectId) -> Result<Project> {
        let request = self.http.get(format!("{}/projects/{id}", self.base_url));
        self.send(request)?.json().context("decode project")
    }

    pub fn create_project(&self, input: &ProjectFormInput) -> Result<Project> {
        input.validate()?;
        let request = self
            .authorized(self.http.post(format!("{}/projects", self.base_url)))?
            .json(input);
        self.send(request)?.json().context("decode created project")
    }

    pub fn update_project(&self, id: &ProjectId, input: &ProjectFormInput) -> Result<Project> {
        input.validate()?;
        let request = self
            .authorized(self.http.put(format!("{}/projects/{id}", self.base_url)))?
            .json(input);
        self.send(request)?.json().context("decode updated project")
    }

    pub fn delete_project(&self, id: &ProjectId) -> Result<()> {
        let request = self.authorized(self.http.delete(format!("{}/projects/{id}", self.base_url)))?;
        self.send(request)?;
        Ok(())
    }

    pub fn list_clients(&self) -> Result<Vec<ClientRecord>> {
        let request = self.http.get(format!("{}/client/", self.base_url));
        let parsed: ClientListEnvelope = self.send(request)?.json().context("decode client list")?;
        Ok(parsed.data.clients)
    }

    pub fn list_people(&self) -> Result<Vec<Person>> {
        let request = self.http.get(format!("{}/people/", self.base_url));
        let parsed: PeopleListEnvelope = self.send(request)?.json().context("decode people list")?;
        Ok(parsed.data.people)
    }

    /// Project lookup used to resolve foreign keys; distinct from the
    /// paginated projects collection.
    pub fn project_lookup(&self) -> Result<Vec<Project>> {
        let request = self.http.get(format!("{}/project/", self.base_url));
        let parsed: ProjectListEnvelope =
            self.send(request)?.json().context("decode project lookup")?;
        Ok(parsed.data.projects)
    }

    /// Fetch all lookup tables a screen needs for display-name resolution
    /// and form selection lists.
    pub fn fetch_directory(&self) -> Result<Directory> {
        Ok(Directory::new(
            self.list_clients()?,
            self.list_people()?,
            self.project_lookup()?,
        ))
    }

    pub fn invoices(&self) -> InvoiceCollection<'_> {
        InvoiceCollection { client: self }
    }

    pub fn projects(&self) -> ProjectCollection<'_> {
        ProjectCollection { client: self }
    }

    fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        match &self.token {
            Some(token) => Ok(request.bearer_auth(token)),
            None => bail!(
                "api.token is required for create/update/delete -- set it under [api] in the config"
            ),
        }
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(clean_error_response(status, &body));
        }
        Ok(response)
    }
}

/// Invoice collection as a refresh source for a table screen.
pub struct InvoiceCollection<'a> {
    client: &'a Client,
}

impl CollectionSource<Invoice> for InvoiceCollection<'_> {
    fn fetch_all(&self, sort_key: &str) -> Result<Vec<Invoice>> {
        self.client.list_invoices(sort_key)
    }
}

pub struct ProjectCollection<'a> {
    client: &'a Client,
}

impl CollectionSource<Project> for ProjectCollection<'_> {
    fn fetch_all(&self, sort_key: &str) -> Result<Vec<Project>> {
        self.client.list_projects(sort_key)
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!(
        "cannot reach {} -- check [api].base_url and that the backend is running ({} )",
        base_url,
        error
    )
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    if let Ok(parsed) = serde_json::from_str::<MessageEnvelope>(body)
        && let Some(message) = parsed.message
        && !message.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), message);
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(error) = parsed.error
        && !error.is_empty()
    {
        return anyhow!("server error ({}): {}", status.as_u16(), error);
    }

    if body.len() < 100 && !body.contains('{') && !body.trim().is_empty() {
        return anyhow!("server error ({}): {}", status.as_u16(), body);
    }

    anyhow!("server returned {}", status.as_u16())
}

#[derive(Debug, Deserialize)]
struct InvoiceListEnvelope {
    data: InvoiceListData,
}

#[derive(Debug, Deserialize)]
struct InvoiceListData {
    invoices: Vec<Invoice>,
}

#[derive(Debug, Deserialize)]
struct ProjectListEnvelope {
    data: ProjectListData,
}

#[derive(Debug, Deserialize)]
struct ProjectListData {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct ClientListEnvelope {
    data: ClientListData,
}

#[derive(Debug, Deserialize)]
struct ClientListData {
    clients: Vec<ClientRecord>,
}

#[derive(Debug, Deserialize)]
struct PeopleListEnvelope {
    data: PeopleListData,
}

#[derive(Debug, Deserialize)]
struct PeopleListData {
    people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
struct MessageEnvelope {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
}
