// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process store, used for local runs and tests.

use super::{StoreError, WorkoutPlanStore};
use crate::models::{LoginData, UserDetails, WorkoutPlan};
use crate::services::password::{hash_password, verify_password};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Workout plans and users held in memory.
///
/// Plans are kept in a `Vec` so listing returns insertion order. Users map
/// username to password hash.
#[derive(Default)]
pub struct InMemoryStore {
    plans: RwLock<Vec<WorkoutPlan>>,
    users: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkoutPlanStore for InMemoryStore {
    async fn add_workout_plan(&self, plan: WorkoutPlan) -> Result<(), StoreError> {
        self.plans.write().await.push(plan);
        Ok(())
    }

    async fn delete_workout_plan(&self, name: &str) -> Result<(), StoreError> {
        let mut plans = self.plans.write().await;
        if !plans.iter().any(|p| p.exercise_name == name) {
            return Err(StoreError::NotFound(format!("workout plan {:?}", name)));
        }
        plans.retain(|p| p.exercise_name != name);
        Ok(())
    }

    async fn update_workout_plan(&self, plan: WorkoutPlan) -> Result<(), StoreError> {
        let mut plans = self.plans.write().await;
        let mut found = false;
        for existing in plans
            .iter_mut()
            .filter(|p| p.exercise_name == plan.exercise_name)
        {
            existing.repetitions = plan.repetitions;
            existing.sets = plan.sets;
            existing.weight = plan.weight;
            found = true;
        }

        if found {
            Ok(())
        } else {
            Err(StoreError::NotFound(format!(
                "workout plan {:?}",
                plan.exercise_name
            )))
        }
    }

    async fn workout_plan_list(&self) -> Result<Vec<WorkoutPlan>, StoreError> {
        Ok(self.plans.read().await.clone())
    }

    async fn add_user(&self, user: UserDetails) -> Result<(), StoreError> {
        if self.users.read().await.contains_key(&user.username) {
            return Err(StoreError::UserExists);
        }

        let password_hash = hash_password(&user.password)?;

        // Re-check under the write lock; hashing ran without holding it.
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(StoreError::UserExists);
        }
        users.insert(user.username, password_hash);
        Ok(())
    }

    async fn user_login(&self, login: LoginData) -> Result<LoginData, StoreError> {
        let password_hash = self
            .users
            .read()
            .await
            .get(&login.username)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("user {:?}", login.username)))?;

        if !verify_password(&login.password, &password_hash)? {
            return Err(StoreError::InvalidCredentials);
        }

        Ok(LoginData {
            username: login.username,
            password: password_hash,
        })
    }
}
