// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::ids::{ClientId, PersonId, ProjectId};
use crate::model::{Client, ENGINEERING_DEPARTMENT, Person, Project, SALES_DEPARTMENT};

/// Read-only lookup tables fetched alongside a screen, used to resolve
/// foreign keys to display names and to populate form selection lists.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    clients: Vec<Client>,
    people: Vec<Person>,
    projects: Vec<Project>,
}

impl Directory {
    pub fn new(clients: Vec<Client>, people: Vec<Person>, projects: Vec<Project>) -> Self {
        Self {
            clients,
            people,
            projects,
        }
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn client_contact(&self, id: &ClientId) -> Option<&str> {
        self.clients
            .iter()
            .find(|client| client.id == *id)
            .map(|client| client.primary_contact_person.as_str())
    }

    pub fn person_name(&self, id: &PersonId) -> Option<&str> {
        self.people
            .iter()
            .find(|person| person.id == *id)
            .map(|person| person.display_name.as_str())
    }

    pub fn project_name(&self, id: &ProjectId) -> Option<&str> {
        self.projects
            .iter()
            .find(|project| project.id == *id)
            .map(|project| project.name.as_str())
    }

    /// Display name for a client reference, falling back to the raw id when
    /// the lookup has no entry.
    pub fn display_client<'a>(&'a self, id: &'a ClientId) -> &'a str {
        self.client_contact(id).unwrap_or(id.as_str())
    }

    pub fn display_person<'a>(&'a self, id: &'a PersonId) -> &'a str {
        self.person_name(id).unwrap_or(id.as_str())
    }

    pub fn display_project<'a>(&'a self, id: &'a ProjectId) -> &'a str {
        self.project_name(id).unwrap_or(id.as_str())
    }

    /// People eligible as acquisition person on a form.
    pub fn acquisition_people(&self) -> Vec<&Person> {
        self.people_in_department(SALES_DEPARTMENT)
    }

    /// People eligible as project manager on a form.
    pub fn managers(&self) -> Vec<&Person> {
        self.people_in_department(ENGINEERING_DEPARTMENT)
    }

    fn people_in_department(&self, department: &str) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|person| person.department == department)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Directory;
    use crate::ids::{ClientId, PersonId, ProjectId};
    use crate::model::{Client, Person, Project, ProjectStatus};

    fn person(id: &str, name: &str, department: &str) -> Person {
        Person {
            id: PersonId::new(id),
            display_name: name.to_owned(),
            department: department.to_owned(),
            mobile: String::new(),
            work_email: String::new(),
        }
    }

    fn directory() -> Directory {
        Directory::new(
            vec![Client {
                id: ClientId::new("c1"),
                name: "Acme".to_owned(),
                primary_contact_person: "Dana Reyes".to_owned(),
            }],
            vec![
                person("p1", "Sam Ortiz", "Sales"),
                person("p2", "Lee Chen", "Engineering"),
                person("p3", "Kim Patel", "Finance"),
            ],
            vec![Project {
                id: ProjectId::new("pr1"),
                name: "Portal Revamp".to_owned(),
                client_id: ClientId::new("c1"),
                manager_id: PersonId::new("p2"),
                acquisition_person_id: PersonId::new("p1"),
                status: ProjectStatus::InProgress,
                start_date: None,
                end_date: None,
                resources: Vec::new(),
            }],
        )
    }

    #[test]
    fn resolves_foreign_keys_to_display_names() {
        let directory = directory();
        assert_eq!(
            directory.client_contact(&ClientId::new("c1")),
            Some("Dana Reyes")
        );
        assert_eq!(directory.person_name(&PersonId::new("p2")), Some("Lee Chen"));
        assert_eq!(
            directory.project_name(&ProjectId::new("pr1")),
            Some("Portal Revamp")
        );
    }

    #[test]
    fn unresolvable_ids_fall_back_to_the_raw_id() {
        let directory = directory();
        let unknown = ClientId::new("c-missing");
        assert_eq!(directory.display_client(&unknown), "c-missing");
    }

    #[test]
    fn rosters_split_by_department() {
        let directory = directory();
        let sales: Vec<&str> = directory
            .acquisition_people()
            .iter()
            .map(|person| person.display_name.as_str())
            .collect();
        assert_eq!(sales, vec!["Sam Ortiz"]);

        let engineering: Vec<&str> = directory
            .managers()
            .iter()
            .map(|person| person.display_name.as_str())
            .collect();
        assert_eq!(engineering, vec!["Lee Chen"]);
    }
}
