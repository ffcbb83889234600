//! # Studylab Core Library
//!
//! This library provides the core business logic for Studylab, an
//! emotion-aware study planner. It implements a CLI-first philosophy
//! where all operations are available through plain-data function calls,
//! with the CLI binary being a thin presentation layer over the same
//! core library.
//!
//! ## Architecture
//!
//! - **Planner**: Pure decision logic -- daily budget from a mood/energy/
//!   sleep check-in, difficulty gating, greedy task selection under the
//!   budget, technique suggestion from an injected random source
//! - **Storage**: Single JSON document for tasks, planning logs, and
//!   technique-usage counters, plus TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Checkin`]: Validated daily self-report
//! - [`planner::plan_today`]: The planning transaction
//! - [`PlannerStore`]: Document persistence (load -> mutate -> save)
//! - [`technique::CATALOG`]: Static study-technique catalog

pub mod checkin;
pub mod error;
pub mod planner;
pub mod storage;
pub mod task;
pub mod technique;

pub use checkin::Checkin;
pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use planner::{
    allowed_difficulties, daily_budget, plan_today, select_tasks, suggest_technique, PlanResult,
    Selection,
};
pub use storage::{Config, Document, PlannerStore, PlanningLog, TechniqueUsage};
pub use task::{deadline_info, DeadlineInfo, Difficulty, Task, TaskDraft, TaskId};
pub use technique::{motivation_line, Technique};
