//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.coursedash.toml` files.

use crate::dashboard::ListLimits;
use crate::models::{Course, CourseStatus};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".coursedash.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Store snapshot settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Dashboard list settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Courses taught by the instructor.
    #[serde(default = "default_courses")]
    pub courses: Vec<CourseConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            store: StoreConfig::default(),
            dashboard: DashboardConfig::default(),
            courses: default_courses(),
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default output file path. Empty means stdout.
    #[serde(default)]
    pub output: String,
}

/// Where the local storage snapshot lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the snapshot file.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    "dashboard_store.json".to_string()
}

/// Sizes of the ranked dashboard lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Number of lectures shown in "Recent Lectures".
    #[serde(default = "default_list_len")]
    pub recent_lectures: usize,

    /// Number of students shown in "Top Students".
    #[serde(default = "default_list_len")]
    pub top_students: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_lectures: default_list_len(),
            top_students: default_list_len(),
        }
    }
}

fn default_list_len() -> usize {
    4
}

/// One course in the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    pub title: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub status: CourseStatus,

    #[serde(default = "default_rating")]
    pub rating: f32,

    /// Display date of the last update; today when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

fn default_rating() -> f32 {
    5.0
}

fn default_courses() -> Vec<CourseConfig> {
    vec![CourseConfig {
        title: "Introduction to Computer Technology".to_string(),
        category: "Computer Science".to_string(),
        status: CourseStatus::Published,
        rating: default_rating(),
        last_updated: None,
    }]
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(CONFIG_FILE_NAME);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref store) = args.store {
            self.store.path = store.display().to_string();
        }
        if let Some(ref output) = args.output {
            self.general.output = output.display().to_string();
        }
        if let Some(n) = args.recent_lectures {
            self.dashboard.recent_lectures = n;
        }
        if let Some(n) = args.top_students {
            self.dashboard.top_students = n;
        }
    }

    /// Check settings that can come from either the file or the CLI.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.dashboard.recent_lectures >= 1,
            "dashboard.recent_lectures must be at least 1"
        );
        ensure!(
            self.dashboard.top_students >= 1,
            "dashboard.top_students must be at least 1"
        );
        Ok(())
    }

    /// Build the course catalogue, numbering courses from 1.
    pub fn catalogue(&self) -> Vec<Course> {
        let today = chrono::Local::now().format("%-m/%-d/%Y").to_string();

        self.courses
            .iter()
            .zip(1u32..)
            .map(|(course, id)| {
                Course::new(
                    id,
                    course.title.clone(),
                    course.category.clone(),
                    course.status,
                    course.rating,
                    course.last_updated.clone().unwrap_or_else(|| today.clone()),
                )
            })
            .collect()
    }

    pub fn list_limits(&self) -> ListLimits {
        ListLimits {
            recent_lectures: self.dashboard.recent_lectures,
            top_students: self.dashboard.top_students,
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
