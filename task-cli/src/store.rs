use crate::clock::Clock;
use crate::task::{Status, Task};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No task with the requested id exists in the store.
    #[error("Task with ID {0} not found.")]
    TaskNotFound(u32),
    /// Descriptions must contain at least one non-whitespace character.
    #[error("Task description cannot be empty.")]
    EmptyDescription,
    /// The backing file could not be rewritten.
    #[error("Error saving tasks: {0}")]
    Save(#[from] io::Error),
}

/// The authoritative task collection, persisted as a JSON array.
///
/// Task ids are always exactly the contiguous range `1..=N`: `add` assigns
/// one past the current maximum and `delete` renumbers whatever remains, so
/// ids are NOT stable across deletes. Every mutating operation rewrites the
/// whole backing file before returning. The store assumes a single process;
/// concurrent writers simply overwrite each other.
pub struct TaskStore<C: Clock> {
    path: PathBuf,
    clock: C,
    tasks: Vec<Task>,
}

impl<C: Clock> TaskStore<C> {
    /// Loads the store from `path`. A missing, unreadable, or corrupt file
    /// yields an empty store; prior state is never required.
    pub fn load(path: impl Into<PathBuf>, clock: C) -> Self {
        let path = path.into();
        let tasks = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!("Ignoring corrupt task file {}: {}", path.display(), err);
                    Vec::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => {
                warn!("Ignoring unreadable task file {}: {}", path.display(), err);
                Vec::new()
            }
        };
        debug!("Loaded {} tasks from {}", tasks.len(), path.display());
        Self { path, clock, tasks }
    }

    /// Appends a new task with the next id and returns that id.
    pub fn add(&mut self, description: &str) -> Result<u32, Error> {
        let description = validated(description)?;
        let id = self.tasks.iter().map(|task| task.id).max().unwrap_or(0) + 1;
        let now = self.clock.now();
        self.tasks.push(Task {
            id,
            description,
            status: Status::default(),
            created_at: now,
            updated_at: now,
        });
        self.save()?;
        Ok(id)
    }

    /// Replaces the description of an existing task.
    pub fn update(&mut self, id: u32, description: &str) -> Result<(), Error> {
        let description = validated(description)?;
        let now = self.clock.now();
        let task = self.find_mut(id)?;
        task.description = description;
        task.updated_at = now;
        self.save()
    }

    /// Removes a task, then renumbers the remaining tasks 1..=N in ascending
    /// order of their previous ids. Freed ids are deliberately reused.
    pub fn delete(&mut self, id: u32) -> Result<(), Error> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))?;
        self.tasks.remove(index);
        self.tasks.sort_by_key(|task| task.id);
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.id = index as u32 + 1;
        }
        self.save()
    }

    /// Moves an existing task to the given status.
    pub fn mark(&mut self, id: u32, status: Status) -> Result<(), Error> {
        let now = self.clock.now();
        let task = self.find_mut(id)?;
        task.status = status;
        task.updated_at = now;
        self.save()
    }

    /// Returns all tasks, or only those with the given status, in store
    /// order. An empty result is not an error.
    pub fn list(&self, filter: Option<Status>) -> Vec<&Task> {
        match filter {
            Some(status) => self
                .tasks
                .iter()
                .filter(|task| task.status == status)
                .collect(),
            None => self.tasks.iter().collect(),
        }
    }

    fn find_mut(&mut self, id: u32) -> Result<&mut Task, Error> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(Error::TaskNotFound(id))
    }

    fn save(&self) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&self.tasks).map_err(io::Error::from)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

fn validated(description: &str) -> Result<String, Error> {
    if description.trim().is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(description.to_string())
}
