//! Savings goal resources.

use serde::{Deserialize, Serialize};

use crate::client::{Client, Error, ErrorDetail};
use crate::transport::HttpClient;

use super::Amount;

/// A savings goal and its progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsGoal {
    pub uid: String,
    pub name: String,
    pub target: Amount,
    pub total_saved: Amount,
    pub saved_percentage: i32,
}

/// The details needed to create or update a savings goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsGoalRequest {
    pub name: String,
    pub currency: String,
    pub target: Amount,
    pub base64_encoded_photo: String,
}

/// The provider's answer to creating or updating a savings goal.
///
/// `errors` is populated when the request passed HTTP but failed
/// validation; each entry carries a human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsGoalCreated {
    pub savings_goal_uid: String,
    pub success: bool,
    pub errors: Vec<ErrorDetail>,
}

/// The provider's answer to a transfer into or out of a savings goal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsTransfer {
    pub transfer_uid: String,
    pub success: bool,
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TopUpRequest<'a> {
    amount: &'a Amount,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SavingsGoals {
    savings_goal_list: Vec<SavingsGoal>,
}

impl<C: HttpClient> Client<C> {
    /// Returns the customer's savings goals.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn savings_goals(&self) -> Result<Vec<SavingsGoal>, Error> {
        let wrapper: SavingsGoals = self.get_json("/api/v1/savings-goals").await?;
        Ok(wrapper.savings_goal_list)
    }

    /// Returns an individual savings goal.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn savings_goal(&self, goal_uid: &str) -> Result<SavingsGoal, Error> {
        self.get_json(&format!("/api/v1/savings-goals/{goal_uid}"))
            .await
    }

    /// Creates or updates the savings goal with the given uid.
    ///
    /// On a validation failure the API answers 400 with the same
    /// response shape; that body is available as raw text on
    /// [`Error::Api`].
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn put_savings_goal(
        &self,
        goal_uid: &str,
        goal: &SavingsGoalRequest,
    ) -> Result<SavingsGoalCreated, Error> {
        self.put_json(&format!("/api/v1/savings-goals/{goal_uid}"), goal)
            .await
    }

    /// Moves money from the main account into a savings goal.
    ///
    /// A fresh transfer uid is minted for each call; the API echoes it
    /// back in the response.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the API rejects it.
    pub async fn add_money(
        &self,
        goal_uid: &str,
        amount: &Amount,
    ) -> Result<SavingsTransfer, Error> {
        let transfer_uid = uuid::Uuid::new_v4();
        self.put_json(
            &format!("/api/v1/savings-goals/{goal_uid}/add-money/{transfer_uid}"),
            &TopUpRequest { amount },
        )
        .await
    }
}
