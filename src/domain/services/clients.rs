use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::domain::models::client::{Client, Gender, Subscription};
use crate::domain::ports::{ClientRepository, PlanRepository};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Subscribers,
    Regulars,
}

pub struct NewClientParams {
    pub name: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    /// Subscribes the client on registration when present.
    pub plan_id: Option<String>,
}

pub struct ClientService {
    clients: Arc<dyn ClientRepository>,
    plans: Arc<dyn PlanRepository>,
}

impl ClientService {
    pub fn new(clients: Arc<dyn ClientRepository>, plans: Arc<dyn PlanRepository>) -> Self {
        Self { clients, plans }
    }

    pub fn register(&self, params: NewClientParams, now: DateTime<Utc>) -> Result<Client, AppError> {
        if params.name.trim().is_empty() || params.phone.trim().is_empty() {
            return Err(AppError::Validation(
                "Client name and phone are required".to_string(),
            ));
        }

        let subscription = match &params.plan_id {
            Some(plan_id) => {
                let plan = self
                    .plans
                    .find_by_id(plan_id)?
                    .ok_or_else(|| AppError::NotFound(format!("Plan {plan_id} not found")))?;
                Some(Subscription::from_plan(&plan, now))
            }
            None => None,
        };

        let mut client = Client::new(params.name, params.phone);
        client.birth_date = params.birth_date;
        client.gender = params.gender;
        client.active_subscription = subscription;

        let created = self.clients.create(&client)?;
        info!("Client registered: {} ({})", created.name, created.id);
        Ok(created)
    }

    /// Subscriber/regular split combined with the directory search box:
    /// case-insensitive on name, plain substring on phone.
    pub fn segment(&self, segment: Segment, search: &str) -> Result<Vec<Client>, AppError> {
        let term = search.to_lowercase();

        let list = self
            .clients
            .list()?
            .into_iter()
            .filter(|c| match segment {
                Segment::Subscribers => c.is_subscriber(),
                Segment::Regulars => !c.is_subscriber(),
            })
            .filter(|c| {
                term.is_empty() || c.name.to_lowercase().contains(&term) || c.phone.contains(search)
            })
            .collect();

        Ok(list)
    }

    pub fn subscribe(
        &self,
        client_id: &str,
        plan_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Client, AppError> {
        let mut client = self
            .clients
            .find_by_id(client_id)?
            .ok_or_else(|| AppError::NotFound(format!("Client {client_id} not found")))?;
        let plan = self
            .plans
            .find_by_id(plan_id)?
            .ok_or_else(|| AppError::NotFound(format!("Plan {plan_id} not found")))?;

        client.active_subscription = Some(Subscription::from_plan(&plan, now));

        let updated = self.clients.update(&client)?;
        info!("Client {} subscribed to {}", updated.id, plan.name);
        Ok(updated)
    }

    /// Manual credit correction, clamped into `0..=total_credits`.
    pub fn adjust_credits(&self, client_id: &str, delta: i32) -> Result<Client, AppError> {
        let mut client = self
            .clients
            .find_by_id(client_id)?
            .ok_or_else(|| AppError::NotFound(format!("Client {client_id} not found")))?;

        let sub = client.active_subscription.as_mut().ok_or_else(|| {
            AppError::Conflict(format!("Client {client_id} has no subscription"))
        })?;
        sub.used_credits = (sub.used_credits + delta).clamp(0, sub.total_credits);

        self.clients.update(&client)
    }

    /// Staff action: exhausted credits never flip this switch by themselves.
    pub fn set_subscription_active(&self, client_id: &str, active: bool) -> Result<Client, AppError> {
        let mut client = self
            .clients
            .find_by_id(client_id)?
            .ok_or_else(|| AppError::NotFound(format!("Client {client_id} not found")))?;

        let sub = client.active_subscription.as_mut().ok_or_else(|| {
            AppError::Conflict(format!("Client {client_id} has no subscription"))
        })?;
        sub.active = active;

        self.clients.update(&client)
    }

    pub fn update(&self, client: &Client) -> Result<Client, AppError> {
        self.clients.update(client)
    }
}
