use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::plan::{Plan, PlanKind};

/// Credit total given to unlimited plans; never reached in practice.
pub const UNLIMITED_CREDITS: i32 = 999;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Subscription {
    pub id: String,
    pub plan_name: String,
    pub total_credits: i32,
    pub used_credits: i32,
    pub expires_at: DateTime<Utc>,
    pub active: bool,
}

impl Subscription {
    pub fn from_plan(plan: &Plan, now: DateTime<Utc>) -> Self {
        let total_credits = match plan.kind {
            PlanKind::Credits => plan.credits,
            PlanKind::Unlimited => UNLIMITED_CREDITS,
        };

        Self {
            id: Uuid::new_v4().to_string(),
            plan_name: plan.name.clone(),
            total_credits,
            used_credits: 0,
            expires_at: now + Duration::days(plan.validity_days),
            active: true,
        }
    }

    pub fn remaining_credits(&self) -> i32 {
        self.total_credits - self.used_credits
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub active_subscription: Option<Subscription>,
    pub last_visit: Option<DateTime<Utc>>,
}

impl Client {
    pub fn new(name: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            phone,
            birth_date: None,
            gender: None,
            active_subscription: None,
            last_visit: None,
        }
    }

    pub fn is_subscriber(&self) -> bool {
        self.active_subscription.as_ref().is_some_and(|s| s.active)
    }
}
