use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type ParticipantId = String;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "SHM")]
    Shm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMethod {
    Equal,
    Custom,
    Percentage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Active,
    Completed,
    Cancelled,
}

/// The bill being assembled in the creation wizard. Lives only for the
/// duration of the flow, nothing here is ever stored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BillDraft {
    pub title: String,
    pub amount: String,
    pub description: String,
    pub currency: Currency,
    pub deadline: Option<NaiveDate>,
    pub participants: Vec<ParticipantId>,
    pub split_method: SplitMethod,
    // Declared for custom/percentage methods, which are not computed yet.
    pub custom_splits: HashMap<ParticipantId, f64>,
}

impl Default for BillDraft {
    fn default() -> Self {
        BillDraft {
            title: String::new(),
            amount: String::new(),
            description: String::new(),
            currency: Currency::Usd,
            deadline: None,
            participants: vec![],
            split_method: SplitMethod::Equal,
            custom_splits: HashMap::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Organizer {
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Participant {
    pub name: String,
    pub address: String,
    pub amount: f64,
    pub paid: bool,
    #[serde(default)]
    pub is_you: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Bill {
    pub id: String,
    pub title: String,
    pub description: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub organizer: Organizer,
    pub deadline: NaiveDate,
    pub status: BillStatus,
    pub participants: Vec<Participant>,
    pub created_at: NaiveDate,
}

impl Bill {
    pub fn remaining_amount(&self) -> f64 {
        self.total_amount - self.paid_amount
    }

    pub fn progress_percentage(&self) -> f64 {
        if self.total_amount == 0.0 {
            return 0.0;
        }
        self.paid_amount / self.total_amount * 100.0
    }

    pub fn paid_participants(&self) -> usize {
        self.participants.iter().filter(|p| p.paid).count()
    }

    pub fn your_share(&self) -> f64 {
        self.participants
            .iter()
            .find(|p| p.is_you)
            .map(|p| p.amount)
            .unwrap_or(0.0)
    }

    pub fn you_have_paid(&self) -> bool {
        self.participants
            .iter()
            .find(|p| p.is_you)
            .map(|p| p.paid)
            .unwrap_or(false)
    }
}

/// One settled share on the completion receipt.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SettledParticipant {
    pub name: String,
    pub address: String,
    pub amount: f64,
    pub paid_date: DateTime<Utc>,
    pub transaction_hash: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CompletedBill {
    pub id: String,
    pub title: String,
    pub description: String,
    pub total_amount: f64,
    pub organizer: Organizer,
    pub completed_date: DateTime<Utc>,
    pub participants: Vec<SettledParticipant>,
    pub transaction_hashes: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Pending,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ActiveBillCard {
    pub id: String,
    pub title: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub participants: usize,
    pub deadline: NaiveDate,
    pub status: CardStatus,
    pub your_share: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PastBillCard {
    pub id: String,
    pub title: String,
    pub total_amount: f64,
    pub participants: usize,
    pub completed_date: NaiveDate,
    pub your_share: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn bill_aggregates_follow_participants() {
        let bill = demo::bill_details("BILL-ABC123XYZ");
        assert_eq!(bill.remaining_amount(), 80.0);
        assert_eq!(bill.paid_participants(), 4);
        assert!((bill.progress_percentage() - 100.0 * 160.0 / 240.0).abs() < 1e-9);
        assert_eq!(bill.your_share(), 40.0);
        assert!(!bill.you_have_paid());
    }

    #[test]
    fn split_method_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&SplitMethod::Percentage).unwrap();
        assert_eq!(json, "\"percentage\"");
        let method: SplitMethod = serde_json::from_str("\"equal\"").unwrap();
        assert_eq!(method, SplitMethod::Equal);
    }

    #[test]
    fn currency_round_trips_by_code() {
        let json = serde_json::to_string(&Currency::Shm).unwrap();
        assert_eq!(json, "\"SHM\"");
    }
}
