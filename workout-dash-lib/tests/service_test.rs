use anyhow::{bail, Result};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use workout_dash_lib::{
    AppService, Config, ServiceError, Workout, WorkoutApi, WorkoutPayload,
};

/// In-memory stand-in for the remote workout service. Records every request
/// and can be told to fail any operation, so tests can drive the service
/// layer through both outcomes without a live server.
#[derive(Default)]
struct FakeApi {
    workouts: RefCell<Vec<Workout>>,
    calls: RefCell<Vec<String>>,
    next_id: Cell<u64>,
    fail_list: Cell<bool>,
    fail_create: Cell<bool>,
    fail_update: Cell<bool>,
    fail_delete: Cell<bool>,
}

impl FakeApi {
    fn with_workouts(workouts: Vec<Workout>) -> Self {
        let api = Self::default();
        api.next_id.set(workouts.len() as u64 + 1);
        *api.workouts.borrow_mut() = workouts;
        api
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl WorkoutApi for FakeApi {
    fn list_workouts(&self, user_id: &str) -> Result<Vec<Workout>> {
        self.calls.borrow_mut().push(format!("LIST {user_id}"));
        if self.fail_list.get() {
            bail!("Server returned error: 500 - list failed");
        }
        Ok(self.workouts.borrow().clone())
    }

    fn create_workout(&self, payload: &WorkoutPayload) -> Result<()> {
        self.calls.borrow_mut().push(format!("CREATE {}", payload.name));
        if self.fail_create.get() {
            bail!("Server returned error: 500 - create failed");
        }
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.workouts.borrow_mut().push(Workout {
            id: id.to_string(),
            name: payload.name.clone(),
            exercises: payload.exercises.clone(),
            created_at: "t".to_string(),
        });
        Ok(())
    }

    fn update_workout(&self, workout_id: &str, payload: &WorkoutPayload) -> Result<()> {
        self.calls.borrow_mut().push(format!("UPDATE {workout_id}"));
        if self.fail_update.get() {
            bail!("Server returned error: 500 - update failed");
        }
        let mut workouts = self.workouts.borrow_mut();
        match workouts.iter_mut().find(|w| w.id == workout_id) {
            Some(workout) => {
                workout.name = payload.name.clone();
                workout.exercises = payload.exercises.clone();
                Ok(())
            }
            None => bail!("Server returned error: 404 - no such workout"),
        }
    }

    fn delete_workout(&self, workout_id: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("DELETE {workout_id}"));
        if self.fail_delete.get() {
            bail!("Server returned error: 500 - delete failed");
        }
        self.workouts.borrow_mut().retain(|w| w.id != workout_id);
        Ok(())
    }
}

fn workout(id: &str, name: &str, exercises: &[&str]) -> Workout {
    Workout {
        id: id.to_string(),
        name: name.to_string(),
        exercises: exercises.iter().map(ToString::to_string).collect(),
        created_at: "t".to_string(),
    }
}

fn create_test_service(workouts: Vec<Workout>) -> AppService<FakeApi> {
    AppService {
        config: Config {
            user_id: Some("u1".to_string()),
            ..Default::default()
        },
        api: FakeApi::with_workouts(workouts),
        config_path: "test_config.toml".into(),
        workouts: BTreeMap::new(),
    }
}

#[test]
fn test_refresh_builds_snapshot_from_list() -> Result<()> {
    let mut service = create_test_service(vec![workout("1", "Leg Day", &["Squat", "Lunge"])]);

    service.refresh()?;

    assert_eq!(service.workouts.len(), 1);
    assert_eq!(
        service.exercises_for("Leg Day"),
        Some(&["Squat".to_string(), "Lunge".to_string()][..])
    );
    assert_eq!(service.id_for("Leg Day"), Some("1"));
    Ok(())
}

#[test]
fn test_name_id_and_exercise_views_share_key_set() -> Result<()> {
    let mut service = create_test_service(vec![
        workout("1", "Leg Day", &["Squat"]),
        workout("2", "Push Day", &["Bench Press", "Dips"]),
        workout("3", "Rest Day", &[]),
    ]);

    service.refresh()?;

    let names = service.workout_names();
    assert_eq!(names.len(), 3);
    for name in names {
        assert!(service.id_for(name).is_some());
        assert!(service.exercises_for(name).is_some());
    }
    Ok(())
}

#[test]
fn test_refresh_failure_leaves_prior_snapshot() -> Result<()> {
    let mut service = create_test_service(vec![workout("1", "Leg Day", &["Squat"])]);
    service.refresh()?;

    service.api.fail_list.set(true);
    let result = service.refresh();

    assert!(result.is_err());
    assert_eq!(service.id_for("Leg Day"), Some("1"));
    assert_eq!(service.exercises_for("Leg Day"), Some(&["Squat".to_string()][..]));
    Ok(())
}

#[test]
fn test_delete_workout_removes_exactly_one_entry() -> Result<()> {
    let mut service = create_test_service(vec![
        workout("1", "Leg Day", &["Squat", "Lunge"]),
        workout("2", "Push Day", &["Bench Press"]),
    ]);
    service.refresh()?;

    service.delete_workout("1", "Leg Day")?;

    assert!(service.id_for("Leg Day").is_none());
    assert!(service.exercises_for("Leg Day").is_none());
    assert_eq!(service.id_for("Push Day"), Some("2"));
    assert_eq!(
        service.exercises_for("Push Day"),
        Some(&["Bench Press".to_string()][..])
    );
    // Deletion patches in place rather than refetching.
    assert_eq!(*service.api.calls.borrow(), vec!["LIST u1", "DELETE 1"]);
    Ok(())
}

#[test]
fn test_delete_workout_failure_changes_nothing() -> Result<()> {
    let mut service = create_test_service(vec![workout("1", "Leg Day", &["Squat"])]);
    service.refresh()?;

    service.api.fail_delete.set(true);
    let result = service.delete_workout("1", "Leg Day");

    assert!(result.is_err());
    assert_eq!(service.id_for("Leg Day"), Some("1"));
    Ok(())
}

#[test]
fn test_remove_exercise_patches_only_that_workout() -> Result<()> {
    let mut service = create_test_service(vec![
        workout("1", "Leg Day", &["Squat", "Lunge"]),
        workout("2", "Push Day", &["Bench Press"]),
    ]);
    service.refresh()?;

    service.remove_exercise("Leg Day", "Lunge")?;

    assert_eq!(service.exercises_for("Leg Day"), Some(&["Squat".to_string()][..]));
    assert_eq!(
        service.exercises_for("Push Day"),
        Some(&["Bench Press".to_string()][..])
    );
    // The full updated list was pushed to the server.
    let remote = service.api.workouts.borrow();
    let leg_day = remote.iter().find(|w| w.id == "1").unwrap();
    assert_eq!(leg_day.exercises, vec!["Squat"]);
    Ok(())
}

#[test]
fn test_remove_exercise_drops_at_most_one_occurrence() -> Result<()> {
    let mut service =
        create_test_service(vec![workout("1", "Leg Day", &["Squat", "Lunge", "Squat"])]);
    service.refresh()?;

    service.remove_exercise("Leg Day", "Squat")?;

    assert_eq!(
        service.exercises_for("Leg Day"),
        Some(&["Lunge".to_string(), "Squat".to_string()][..])
    );
    Ok(())
}

#[test]
fn test_remove_exercise_failure_leaves_list_unchanged() -> Result<()> {
    let mut service = create_test_service(vec![workout("1", "Leg Day", &["Squat", "Lunge"])]);
    service.refresh()?;

    service.api.fail_update.set(true);
    let result = service.remove_exercise("Leg Day", "Lunge");

    assert!(result.is_err());
    assert_eq!(
        service.exercises_for("Leg Day"),
        Some(&["Squat".to_string(), "Lunge".to_string()][..])
    );
    Ok(())
}

#[test]
fn test_remove_exercise_unknown_workout_sends_no_request() -> Result<()> {
    let mut service = create_test_service(vec![workout("1", "Leg Day", &["Squat"])]);
    service.refresh()?;
    let calls_after_refresh = service.api.call_count();

    let result = service.remove_exercise("Pull Day", "Row");

    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ServiceError>(),
        Some(&ServiceError::WorkoutNotFound("Pull Day".to_string()))
    );
    assert_eq!(service.api.call_count(), calls_after_refresh);
    Ok(())
}

#[test]
fn test_add_workout_reloads_and_shows_new_name() -> Result<()> {
    let mut service = create_test_service(vec![workout("1", "Leg Day", &["Squat"])]);
    service.refresh()?;

    service.add_workout("Pull Day", &["Row".to_string(), "Chin Up".to_string()])?;

    assert!(service.workout_names().contains(&"Pull Day"));
    assert_eq!(
        service.exercises_for("Pull Day"),
        Some(&["Row".to_string(), "Chin Up".to_string()][..])
    );
    // Create is followed by a full reload.
    assert_eq!(
        *service.api.calls.borrow(),
        vec!["LIST u1", "CREATE Pull Day", "LIST u1"]
    );
    Ok(())
}

#[test]
fn test_add_workout_failure_leaves_snapshot_unchanged() -> Result<()> {
    let mut service = create_test_service(vec![workout("1", "Leg Day", &["Squat"])]);
    service.refresh()?;

    service.api.fail_create.set(true);
    let result = service.add_workout("Pull Day", &["Row".to_string()]);

    assert!(result.is_err());
    assert!(!service.workout_names().contains(&"Pull Day"));
    Ok(())
}

#[test]
fn test_missing_user_session_fails_before_any_request() -> Result<()> {
    let mut service = create_test_service(vec![workout("1", "Leg Day", &["Squat"])]);
    service.config.user_id = None;

    let refresh_err = service.refresh().unwrap_err();
    assert_eq!(
        refresh_err.downcast_ref::<ServiceError>(),
        Some(&ServiceError::NoUserSession)
    );

    assert!(service.add_workout("Pull Day", &[]).is_err());
    assert!(service.delete_workout("1", "Leg Day").is_err());
    assert!(service.remove_exercise("Leg Day", "Squat").is_err());

    // No operation reached the backend.
    assert_eq!(service.api.call_count(), 0);
    Ok(())
}
