// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout plan model.

use serde::{Deserialize, Serialize};

/// A single workout plan, keyed by exercise name.
///
/// Responses use the capitalized keys. Requests may also use camel case or
/// all-lowercase keys; other casings are ignored. Missing fields decode as
/// zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutPlan {
    #[serde(
        rename = "ExerciseName",
        alias = "exerciseName",
        alias = "exercisename"
    )]
    pub exercise_name: String,
    #[serde(rename = "Repetitions", alias = "repetitions")]
    pub repetitions: i32,
    #[serde(rename = "Sets", alias = "sets")]
    pub sets: i32,
    #[serde(rename = "Weight", alias = "weight")]
    pub weight: i32,
}

impl WorkoutPlan {
    pub fn new(exercise_name: impl Into<String>, repetitions: i32, sets: i32, weight: i32) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            repetitions,
            sets,
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_camel_case_request_keys() {
        let plan: WorkoutPlan = serde_json::from_str(
            r#"{"exerciseName": "pushup", "repetitions": 11, "sets": 2, "weight": 20}"#,
        )
        .unwrap();
        assert_eq!(plan, WorkoutPlan::new("pushup", 11, 2, 20));
    }

    #[test]
    fn test_accepts_lowercase_request_keys() {
        let plan: WorkoutPlan = serde_json::from_str(
            r#"{"exercisename": "pullup", "repetitions": 5, "sets": 2, "weight": 10}"#,
        )
        .unwrap();
        assert_eq!(plan, WorkoutPlan::new("pullup", 5, 2, 10));
    }

    #[test]
    fn test_serializes_capitalized_keys() {
        let json = serde_json::to_string(&WorkoutPlan::new("pushup", 11, 2, 20)).unwrap();
        assert_eq!(
            json,
            r#"{"ExerciseName":"pushup","Repetitions":11,"Sets":2,"Weight":20}"#
        );
    }

    #[test]
    fn test_missing_fields_are_zero() {
        let plan: WorkoutPlan = serde_json::from_str(r#"{"ExerciseName": "squat"}"#).unwrap();
        assert_eq!(plan, WorkoutPlan::new("squat", 0, 0, 0));
    }
}
