//! Dependency inversion.
//!
//! High-level types (`UserDataManager`, `ContentPrinter`) hold only a trait object;
//! the concrete repositories and printables can be swapped without touching them.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::transcript::Transcript;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn to_json(&self) -> Result<String, DemoError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub trait UserRepository {
    fn get_user_by_id(&self, id: u32) -> UserRecord;

    /// Stores the user and returns a confirmation line.
    fn save_user(&mut self, user: UserRecord) -> Result<String, DemoError>;
}

/// Simulated database backing. Nothing leaves the process.
#[derive(Debug, Default)]
pub struct DatabaseUserRepository {
    saved: Vec<UserRecord>,
}

impl DatabaseUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> &[UserRecord] {
        &self.saved
    }
}

impl UserRepository for DatabaseUserRepository {
    fn get_user_by_id(&self, id: u32) -> UserRecord {
        lookup(&self.saved, id).unwrap_or_else(|| UserRecord::new(id, "John Doe", "john@mail.com"))
    }

    fn save_user(&mut self, user: UserRecord) -> Result<String, DemoError> {
        let line = format!("User saved to database: {}", user.to_json()?);
        tracing::debug!(id = user.id, "saved user to simulated database");
        upsert(&mut self.saved, user);
        Ok(line)
    }
}

/// Simulated remote API backing.
#[derive(Debug, Default)]
pub struct ApiUserRepository {
    saved: Vec<UserRecord>,
}

impl ApiUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> &[UserRecord] {
        &self.saved
    }
}

impl UserRepository for ApiUserRepository {
    fn get_user_by_id(&self, id: u32) -> UserRecord {
        lookup(&self.saved, id).unwrap_or_else(|| UserRecord::new(id, "Jane Doe", "jane@mail.com"))
    }

    fn save_user(&mut self, user: UserRecord) -> Result<String, DemoError> {
        let line = format!("User saved via API: {}", user.to_json()?);
        tracing::debug!(id = user.id, "saved user through simulated API");
        upsert(&mut self.saved, user);
        Ok(line)
    }
}

fn lookup(saved: &[UserRecord], id: u32) -> Option<UserRecord> {
    saved.iter().find(|user| user.id == id).cloned()
}

fn upsert(saved: &mut Vec<UserRecord>, user: UserRecord) {
    match saved.iter_mut().find(|existing| existing.id == user.id) {
        Some(existing) => *existing = user,
        None => saved.push(user),
    }
}

pub struct UserDataManager {
    repository: Box<dyn UserRepository>,
}

impl UserDataManager {
    pub fn new(repository: Box<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub fn get_user(&self, id: u32) -> UserRecord {
        self.repository.get_user_by_id(id)
    }

    pub fn save_user(&mut self, user: UserRecord) -> Result<String, DemoError> {
        self.repository.save_user(user)
    }
}

pub trait Printable {
    fn get_content(&self) -> String;
}

#[derive(Debug, Default)]
pub struct Book;

impl Printable for Book {
    fn get_content(&self) -> String {
        "This is a book.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Magazine;

impl Printable for Magazine {
    fn get_content(&self) -> String {
        "This is a magazine.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct ContentPrinter;

impl ContentPrinter {
    pub fn print_content(&self, printable: &dyn Printable) -> String {
        format!("Print Content: {}", printable.get_content())
    }
}

pub struct RepositoryDemo;

impl Demo for RepositoryDemo {
    fn name(&self) -> &'static str {
        "dependency-inversion"
    }

    fn summary(&self) -> &'static str {
        "user manager depending on a repository trait, not a backend"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let mut manager = UserDataManager::new(Box::new(DatabaseUserRepository::new()));
        let user = manager.get_user(1);
        out.line(format!("User from database: {}", user.to_json()?));
        out.line(manager.save_user(UserRecord::new(1, "John Doe", "john@mailcom"))?);

        let mut manager = UserDataManager::new(Box::new(ApiUserRepository::new()));
        let user = manager.get_user(2);
        out.line(format!("User from API: {}", user.to_json()?));
        out.line(manager.save_user(UserRecord::new(2, "Jane Doe", "jane@mailcom"))?);
        Ok(())
    }
}

pub struct PrintableDemo;

impl Demo for PrintableDemo {
    fn name(&self) -> &'static str {
        "dependency-inversion-printable"
    }

    fn summary(&self) -> &'static str {
        "printer depending on a printable trait, not on books or magazines"
    }

    fn run(&self, out: &mut Transcript) -> Result<(), DemoError> {
        let printer = ContentPrinter;
        out.line(printer.print_content(&Book));
        out.line(printer.print_content(&Magazine));
        Ok(())
    }
}
