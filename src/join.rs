use crate::demo;
use crate::schemas::Bill;
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;

/// Simulated settlement latency. There is no chain behind the service, the
/// waits stand in for the lookup round trip and transaction confirmation.
pub const LOOKUP_DELAY: Duration = Duration::from_millis(1500);
pub const PAYMENT_DELAY: Duration = Duration::from_millis(3000);

pub const NETWORK_NAME: &str = "Shardeum";
pub const DEMO_TRANSACTION_HASH: &str = "0xabcd...1234";

/// The latency pair a flow runs with. Handlers take it from app data so
/// tests can run the full flow without sleeping.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedDelays {
    pub lookup: Duration,
    pub payment: Duration,
}

impl Default for SimulatedDelays {
    fn default() -> Self {
        SimulatedDelays {
            lookup: LOOKUP_DELAY,
            payment: PAYMENT_DELAY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinState {
    EnterId,
    Summary,
    Processing,
    Success,
}

/// What a confirmed payment hands back.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaymentReceipt {
    pub transaction_hash: String,
    pub amount_paid: f64,
    pub network: String,
    pub confirmed: bool,
}

/// The join-and-pay flow. Every lookup resolves to the same demo bill and
/// every payment succeeds; failure paths do not exist in this design.
#[derive(Debug)]
pub struct JoinBillFlow {
    state: JoinState,
    bill: Option<Bill>,
    lookup_delay: Duration,
    payment_delay: Duration,
}

impl Default for JoinBillFlow {
    fn default() -> Self {
        Self::with_delays(LOOKUP_DELAY, PAYMENT_DELAY)
    }
}

impl JoinBillFlow {
    /// Delays are injectable so tests run without sleeping.
    pub fn with_delays(lookup_delay: Duration, payment_delay: Duration) -> Self {
        JoinBillFlow {
            state: JoinState::EnterId,
            bill: None,
            lookup_delay,
            payment_delay,
        }
    }

    pub fn state(&self) -> JoinState {
        self.state
    }

    pub fn bill(&self) -> Option<&Bill> {
        self.bill.as_ref()
    }

    /// Resolves a bill id. A blank id is ignored without a state change;
    /// any other id yields the demo bill after the simulated round trip.
    pub async fn lookup(&mut self, bill_id: &str) -> Option<&Bill> {
        if self.state != JoinState::EnterId || bill_id.trim().is_empty() {
            return None;
        }
        sleep(self.lookup_delay).await;
        log::info!("resolved bill id {:?} to demo bill", bill_id.trim());
        self.bill = Some(demo::join_bill());
        self.state = JoinState::Summary;
        self.bill.as_ref()
    }

    /// Back from the summary to the id prompt, keeping nothing.
    pub fn back(&mut self) {
        if self.state == JoinState::Summary {
            self.state = JoinState::EnterId;
            self.bill = None;
        }
    }

    /// Pays your share. Moves through Processing and, after the simulated
    /// confirmation wait, always lands in Success. Not cancellable once the
    /// processing wait has started.
    pub async fn pay(&mut self) -> Option<PaymentReceipt> {
        if self.state != JoinState::Summary {
            return None;
        }
        self.state = JoinState::Processing;
        let share = self.bill.as_ref().map(Bill::your_share).unwrap_or(0.0);
        sleep(self.payment_delay).await;
        self.state = JoinState::Success;
        log::info!("payment of {} confirmed on {}", share, NETWORK_NAME);
        Some(PaymentReceipt {
            transaction_hash: DEMO_TRANSACTION_HASH.to_string(),
            amount_paid: share,
            network: NETWORK_NAME.to_string(),
            confirmed: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_flow() -> JoinBillFlow {
        JoinBillFlow::with_delays(Duration::ZERO, Duration::ZERO)
    }

    #[actix_web::test]
    async fn any_nonempty_id_resolves_to_the_demo_bill() {
        let mut flow = instant_flow();
        let bill = flow.lookup("BILL-WHATEVER").await.cloned().unwrap();
        assert_eq!(flow.state(), JoinState::Summary);
        assert_eq!(bill.total_amount, 240.0);
        assert_eq!(bill.your_share(), 40.0);
        assert_eq!(bill.participants.len(), 6);
    }

    #[actix_web::test]
    async fn blank_id_is_rejected_without_transition() {
        let mut flow = instant_flow();
        assert!(flow.lookup("   ").await.is_none());
        assert_eq!(flow.state(), JoinState::EnterId);
        assert!(flow.bill().is_none());
    }

    #[actix_web::test]
    async fn payment_always_succeeds() {
        let mut flow = instant_flow();
        flow.lookup("BILL-ABC123XYZ").await;
        let receipt = flow.pay().await.unwrap();
        assert_eq!(flow.state(), JoinState::Success);
        assert!(receipt.confirmed);
        assert_eq!(receipt.amount_paid, 40.0);
        assert_eq!(receipt.network, "Shardeum");
    }

    #[actix_web::test]
    async fn pay_requires_a_resolved_summary() {
        let mut flow = instant_flow();
        assert!(flow.pay().await.is_none());
        assert_eq!(flow.state(), JoinState::EnterId);
    }

    #[actix_web::test]
    async fn back_discards_the_summary() {
        let mut flow = instant_flow();
        flow.lookup("BILL-ABC123XYZ").await;
        flow.back();
        assert_eq!(flow.state(), JoinState::EnterId);
        assert!(flow.bill().is_none());
    }

    #[actix_web::test]
    async fn lookup_is_ignored_after_leaving_enter_id() {
        let mut flow = instant_flow();
        flow.lookup("BILL-ONE").await;
        assert!(flow.lookup("BILL-TWO").await.is_none());
        assert_eq!(flow.state(), JoinState::Summary);
    }
}
