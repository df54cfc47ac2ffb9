// src/lib.rs
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

// --- Declare modules ---
pub mod client;
mod config;

// --- Expose public types ---
pub use client::{Workout, WorkoutApi, WorkoutClient, WorkoutPayload};
pub use config::{
    get_config_path as get_config_path_util, load_config as load_config_util,
    save_config as save_config_util, Config, Error as ConfigError,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("No user session found. Set user_id in the config file.")]
    NoUserSession,
    #[error("Workout '{0}' not found.")]
    WorkoutNotFound(String),
}

/// A single workout as the dashboard holds it: its remote identifier and its
/// ordered exercise list, keyed by workout name in [`AppService::workouts`].
/// Keeping id and exercises in one record makes the name→id and
/// name→exercises views share a key set by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutEntry {
    pub id: String,
    pub exercises: Vec<String>,
}

/// Owns the in-memory snapshot of the signed-in user's workouts and
/// orchestrates calls against the remote workout service.
///
/// The snapshot is rebuilt wholesale by [`refresh`](Self::refresh), patched
/// in place by the delete/remove operations, and never mutated before the
/// corresponding remote call has succeeded.
pub struct AppService<A: WorkoutApi> {
    pub config: Config,
    pub api: A,
    pub config_path: PathBuf,
    pub workouts: BTreeMap<String, WorkoutEntry>,
}

impl AppService<WorkoutClient> {
    /// Initializes the service against the configured remote server.
    /// # Errors
    /// Returns `anyhow::Error` if config path determination or loading fails.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load_config(&config_path)
            .context(format!("Failed to load config from {config_path:?}"))?;

        let api = WorkoutClient::new(config.server_url.clone());

        Ok(Self {
            config,
            api,
            config_path,
            workouts: BTreeMap::new(),
        })
    }
}

impl<A: WorkoutApi> AppService<A> {
    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save_config(&self.config_path, &self.config)
    }

    /// The resolved user identity, required before any remote call.
    fn require_user_id(&self) -> Result<String, ServiceError> {
        self.config
            .user_id
            .clone()
            .ok_or(ServiceError::NoUserSession)
    }

    /// Fetches all workouts for the current user and replaces the local
    /// snapshot. On any failure the prior snapshot is left untouched.
    pub fn refresh(&mut self) -> Result<()> {
        let user_id = self.require_user_id()?;
        let list = self
            .api
            .list_workouts(&user_id)
            .context("Failed to fetch workouts")?;

        let mut map = BTreeMap::new();
        for workout in list {
            map.insert(
                workout.name,
                WorkoutEntry {
                    id: workout.id,
                    exercises: workout.exercises,
                },
            );
        }
        info!("Loaded {} workouts for user {}", map.len(), user_id);
        self.workouts = map;
        Ok(())
    }

    /// Creates a new workout remotely, then reloads the full snapshot.
    pub fn add_workout(&mut self, name: &str, exercises: &[String]) -> Result<()> {
        let user_id = self.require_user_id()?;
        let payload = WorkoutPayload {
            name: name.to_string(),
            exercises: exercises.to_vec(),
            user_id,
        };
        self.api
            .create_workout(&payload)
            .context("Failed to add workout")?;
        info!("Created workout '{}'", name);
        // Refresh the list after adding so the server-assigned id is known.
        self.refresh()
    }

    /// Deletes a workout remotely and, on success, drops its entry from the
    /// local snapshot without refetching.
    pub fn delete_workout(&mut self, workout_id: &str, workout_name: &str) -> Result<()> {
        self.require_user_id()?;
        self.api
            .delete_workout(workout_id)
            .context("Failed to delete workout")?;
        if self.workouts.remove(workout_name).is_none() {
            warn!(
                "Deleted workout '{}' was not present in the local snapshot",
                workout_name
            );
        }
        info!("Deleted workout '{}' ({})", workout_name, workout_id);
        Ok(())
    }

    /// Removes the first occurrence of `exercise` from the named workout by
    /// submitting a full update with the remaining list. On success only
    /// that workout's exercise list is patched locally.
    pub fn remove_exercise(&mut self, workout_name: &str, exercise: &str) -> Result<()> {
        let user_id = self.require_user_id()?;
        let entry = self
            .workouts
            .get(workout_name)
            .ok_or_else(|| ServiceError::WorkoutNotFound(workout_name.to_string()))?;

        let mut remaining = entry.exercises.clone();
        if let Some(pos) = remaining.iter().position(|e| e == exercise) {
            remaining.remove(pos);
        }

        let payload = WorkoutPayload {
            name: workout_name.to_string(),
            exercises: remaining.clone(),
            user_id,
        };
        self.api
            .update_workout(&entry.id, &payload)
            .context("Failed to update workout")?;

        if let Some(entry) = self.workouts.get_mut(workout_name) {
            entry.exercises = remaining;
        }
        info!("Removed exercise '{}' from '{}'", exercise, workout_name);
        Ok(())
    }

    /// Workout names in render order.
    pub fn workout_names(&self) -> Vec<&str> {
        self.workouts.keys().map(String::as_str).collect()
    }

    pub fn exercises_for(&self, workout_name: &str) -> Option<&[String]> {
        self.workouts
            .get(workout_name)
            .map(|entry| entry.exercises.as_slice())
    }

    pub fn id_for(&self, workout_name: &str) -> Option<&str> {
        self.workouts
            .get(workout_name)
            .map(|entry| entry.id.as_str())
    }
}
