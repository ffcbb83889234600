//! Flat-file planner document store.
//!
//! All planner state lives in a single JSON document: tasks, planning
//! logs, technique-usage counters, plus reserved collections that round
//! trip untouched. Every mutation is a full load -> mutate -> save cycle;
//! there is no locking, so concurrent writers can lose updates. That is a
//! known limitation of the single-user design, not something the store
//! guards against.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{data_dir, Config};
use crate::error::{CoreError, Result, StoreError, ValidationError};
use crate::task::{Task, TaskDraft, TaskId};
use crate::technique;

/// Environment override for the data file path. Takes precedence over
/// the config file; used by the CLI E2E tests.
pub const DATA_FILE_ENV: &str = "STUDYLAB_DATA_FILE";

const DATA_FILE_NAME: &str = "planner.json";

/// One planning decision, recorded for historical tracking. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanningLog {
    pub date: NaiveDate,
    pub mood: u8,
    pub energy: u8,
    pub sleep_hours: f64,
    pub planned_task_ids: Vec<TaskId>,
    /// Reserved for future reconciliation against actually finished work.
    #[serde(default)]
    pub completed_task_ids: Vec<TaskId>,
    #[serde(default)]
    pub technique_used: Option<String>,
}

/// Technique usage counter row, joined with the catalog for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TechniqueUsage {
    pub code: String,
    pub name: String,
    pub count: u32,
}

/// The persisted planner document.
///
/// `journals` and `achievements` are reserved collections: they are kept
/// as raw JSON, never inspected, and always written back unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub logs: Vec<PlanningLog>,
    #[serde(default)]
    pub technique_stats: BTreeMap<String, u32>,
    #[serde(default)]
    pub journals: Vec<serde_json::Value>,
    #[serde(default)]
    pub achievements: Vec<serde_json::Value>,
    /// Monotonic task id counter. Ids are never reused, even after every
    /// task has been deleted.
    #[serde(default)]
    pub next_task_id: TaskId,
}

impl Document {
    /// Hand out the next task id and advance the counter.
    pub fn allocate_task_id(&mut self) -> TaskId {
        let id = self.next_task_id.max(1);
        self.next_task_id = id + 1;
        id
    }

    /// Repair the id counter after loading: documents written before the
    /// counter existed carry `0`, and a hand-edited file may lag behind
    /// the highest task id.
    fn reconcile_next_id(&mut self) {
        let highest = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        self.next_task_id = self.next_task_id.max(highest + 1);
    }
}

/// Durable mapping between the planner document and a JSON file.
#[derive(Debug, Clone)]
pub struct PlannerStore {
    path: PathBuf,
}

impl PlannerStore {
    /// Open the store at the resolved data file location:
    /// `STUDYLAB_DATA_FILE` env var, then the config override, then
    /// `planner.json` in the data directory.
    pub fn open() -> Result<Self> {
        if let Ok(path) = std::env::var(DATA_FILE_ENV) {
            return Ok(Self { path: path.into() });
        }
        let config = Config::load_or_default();
        let path = match config.storage.data_file {
            Some(path) => path,
            None => data_dir()?.join(DATA_FILE_NAME),
        };
        Ok(Self { path })
    }

    /// Open the store at an explicit path. Used by tests.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full document. A missing file is the empty default, never
    /// an error; an unreadable or corrupt file is.
    pub fn load(&self) -> Result<Document, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let mut doc: Document =
                    serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                        path: self.path.clone(),
                        source,
                    })?;
                doc.reconcile_next_id();
                Ok(doc)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no planner data at {}, starting empty", self.path.display());
                let mut doc = Document::default();
                doc.reconcile_next_id();
                Ok(doc)
            }
            Err(source) => Err(StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Overwrite the persisted document. The whole document is the unit
    /// of persistence; there is no partial update.
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            "saved planner data: {} task(s), {} log(s)",
            doc.tasks.len(),
            doc.logs.len()
        );
        Ok(())
    }

    /// All tasks, in insertion order.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.load()?.tasks)
    }

    /// Add a task from a draft. The store assigns the id.
    pub fn add_task(&self, draft: TaskDraft) -> Result<Task> {
        draft.validate()?;
        let mut doc = self.load()?;
        let task = Task {
            id: doc.allocate_task_id(),
            subject: draft.subject,
            topic: draft.topic,
            difficulty: draft.difficulty,
            estimated_minutes: draft.estimated_minutes,
            due_date: draft.due_date,
            completed: false,
        };
        doc.tasks.push(task.clone());
        self.save(&doc)?;
        Ok(task)
    }

    /// Delete a task. Returns whether a task with that id existed.
    pub fn delete_task(&self, id: TaskId) -> Result<bool> {
        let mut doc = self.load()?;
        let before = doc.tasks.len();
        doc.tasks.retain(|t| t.id != id);
        let removed = doc.tasks.len() != before;
        if removed {
            self.save(&doc)?;
        }
        Ok(removed)
    }

    /// Set the completion flag on a task. Unknown ids are a no-op;
    /// repeated calls with the same flag leave the state unchanged.
    pub fn set_task_completed(&self, id: TaskId, completed: bool) -> Result<()> {
        let mut doc = self.load()?;
        for task in &mut doc.tasks {
            if task.id == id {
                task.completed = completed;
            }
        }
        self.save(&doc)?;
        Ok(())
    }

    /// Past planning logs, oldest first.
    pub fn list_logs(&self) -> Result<Vec<PlanningLog>> {
        Ok(self.load()?.logs)
    }

    /// Count one use of a technique. The code must exist in the catalog.
    pub fn log_technique_usage(&self, code: &str) -> Result<()> {
        if technique::find(code).is_none() {
            return Err(ValidationError::UnknownTechnique(code.to_string()).into());
        }
        let mut doc = self.load()?;
        *doc.technique_stats.entry(code.to_string()).or_insert(0) += 1;
        self.save(&doc)?;
        Ok(())
    }

    /// Usage counters joined with the catalog, sorted by code. Codes no
    /// longer in the catalog fall back to the raw code as the name.
    pub fn technique_stats(&self) -> Result<Vec<TechniqueUsage>> {
        let doc = self.load()?;
        Ok(doc
            .technique_stats
            .iter()
            .map(|(code, &count)| TechniqueUsage {
                code: code.clone(),
                name: technique::find(code)
                    .map(|t| t.name.to_string())
                    .unwrap_or_else(|| code.clone()),
                count,
            })
            .collect())
    }
}
