//src/client.rs
use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// A workout as the remote service returns it. The service owns these; the
/// client only ever holds a transient copy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub exercises: Vec<String>,
    /// Opaque on the wire; never interpreted client-side.
    pub created_at: String,
}

/// Body for create and full-update requests.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorkoutPayload {
    pub name: String,
    pub exercises: Vec<String>,
    pub user_id: String,
}

/// The remote workout-service contract. The service layer talks to this
/// trait so tests can substitute an in-memory backend for the HTTP client.
pub trait WorkoutApi {
    /// GET all workouts belonging to `user_id`.
    fn list_workouts(&self, user_id: &str) -> Result<Vec<Workout>>;
    /// POST a new workout.
    fn create_workout(&self, payload: &WorkoutPayload) -> Result<()>;
    /// PUT a full replacement of the workout identified by `workout_id`.
    fn update_workout(&self, workout_id: &str, payload: &WorkoutPayload) -> Result<()>;
    /// DELETE the workout identified by `workout_id`.
    fn delete_workout(&self, workout_id: &str) -> Result<()>;
}

pub struct WorkoutClient {
    http_client: Client,
    server_url: String,
}

impl WorkoutClient {
    pub fn new(server_url: String) -> Self {
        Self {
            http_client: Client::new(),
            server_url,
        }
    }

    fn workouts_url(&self) -> String {
        format!("{}/workouts/workouts", self.server_url)
    }

    /// Turns a non-success response into an error carrying status and body.
    fn check_status(response: reqwest::blocking::Response, action: &str) -> Result<reqwest::blocking::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .unwrap_or_else(|_| "Could not read error body".to_string());
            error!(
                "{} request failed with status: {}. Body: {}",
                action, status, error_body
            );
            bail!("Server returned error: {} - {}", status, error_body);
        }
        Ok(response)
    }
}

impl WorkoutApi for WorkoutClient {
    fn list_workouts(&self, user_id: &str) -> Result<Vec<Workout>> {
        let url = format!("{}/{}", self.workouts_url(), user_id);
        debug!("Sending GET to {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .context("Failed to send workout list request to server")?;
        let response = Self::check_status(response, "Workout list")?;

        let workouts: Vec<Workout> = response
            .json()
            .context("Failed to deserialize workout list response")?;
        info!("Received {} workouts for user {}", workouts.len(), user_id);
        Ok(workouts)
    }

    fn create_workout(&self, payload: &WorkoutPayload) -> Result<()> {
        let url = self.workouts_url();
        debug!(
            "Sending POST to {} for workout '{}' ({} exercises)",
            url,
            payload.name,
            payload.exercises.len()
        );

        let response = self
            .http_client
            .post(&url)
            .json(payload)
            .send()
            .context("Failed to send workout create request to server")?;
        Self::check_status(response, "Workout create")?;
        Ok(())
    }

    fn update_workout(&self, workout_id: &str, payload: &WorkoutPayload) -> Result<()> {
        let url = format!("{}/{}", self.workouts_url(), workout_id);
        debug!(
            "Sending PUT to {} for workout '{}' ({} exercises)",
            url,
            payload.name,
            payload.exercises.len()
        );

        let response = self
            .http_client
            .put(&url)
            .json(payload)
            .send()
            .context("Failed to send workout update request to server")?;
        Self::check_status(response, "Workout update")?;
        Ok(())
    }

    fn delete_workout(&self, workout_id: &str) -> Result<()> {
        let url = format!("{}/{}", self.workouts_url(), workout_id);
        debug!("Sending DELETE to {}", url);

        let response = self
            .http_client
            .delete(&url)
            .send()
            .context("Failed to send workout delete request to server")?;
        Self::check_status(response, "Workout delete")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workout_deserializes_from_wire_shape() {
        let json = r#"{"_id":"1","name":"Leg Day","exercises":["Squat","Lunge"],"created_at":"t"}"#;
        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.id, "1");
        assert_eq!(workout.name, "Leg Day");
        assert_eq!(workout.exercises, vec!["Squat", "Lunge"]);
        assert_eq!(workout.created_at, "t");
    }

    #[test]
    fn payload_serializes_user_id_field() {
        let payload = WorkoutPayload {
            name: "Leg Day".to_string(),
            exercises: vec!["Squat".to_string()],
            user_id: "u1".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Leg Day");
        assert_eq!(json["user_id"], "u1");
        assert_eq!(json["exercises"][0], "Squat");
    }
}
