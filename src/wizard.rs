use crate::schemas::BillDraft;
use crate::split::share_per_person;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;

pub const INVITE_BASE_URL: &str = "https://splitshard.app/join";

/// The four stations of the bill-creation flow, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Step {
    Details,
    Participants,
    SplitMethod,
    Confirmation,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Participants => 2,
            Step::SplitMethod => 3,
            Step::Confirmation => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Details => "Bill Details",
            Step::Participants => "Add Participants",
            Step::SplitMethod => "Split Method",
            Step::Confirmation => "Confirmation",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Details => "Basic information",
            Step::Participants => "Who's splitting?",
            Step::SplitMethod => "How to divide",
            Step::Confirmation => "Review & create",
        }
    }

    /// Every step in order, for rendering the progress stepper.
    pub fn all() -> [Step; 4] {
        [
            Step::Details,
            Step::Participants,
            Step::SplitMethod,
            Step::Confirmation,
        ]
    }

    fn forward(self) -> Step {
        match self {
            Step::Details => Step::Participants,
            Step::Participants => Step::SplitMethod,
            Step::SplitMethod | Step::Confirmation => Step::Confirmation,
        }
    }

    fn backward(self) -> Step {
        match self {
            Step::Details | Step::Participants => Step::Details,
            Step::SplitMethod => Step::Participants,
            Step::Confirmation => Step::SplitMethod,
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::Details
    }
}

/// What the terminal "Create Bill" action hands back. The draft itself is
/// discarded, nothing is persisted anywhere.
#[derive(Clone, Debug, Serialize)]
pub struct CreatedBill {
    pub bill_id: String,
    pub invite_link: String,
    pub participant_count: usize,
    pub share_per_person: f64,
}

/// The creation wizard: a draft plus the step the creator is on. Progression
/// is never gated on validation, an empty draft may walk to confirmation.
#[derive(Clone, Debug, Default)]
pub struct CreateBillWizard {
    pub draft: BillDraft,
    step: Step,
}

impl CreateBillWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A wizard holding an already-assembled draft, positioned on the
    /// confirmation step.
    pub fn from_draft(draft: BillDraft) -> Self {
        CreateBillWizard {
            draft,
            step: Step::Confirmation,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn next(&mut self) {
        self.step = self.step.forward();
    }

    pub fn previous(&mut self) {
        self.step = self.step.backward();
    }

    /// Adds a participant identifier (wallet address or email). Blank and
    /// duplicate entries are ignored.
    pub fn add_participant(&mut self, entry: &str) -> bool {
        let entry = entry.trim();
        if entry.is_empty() || self.draft.participants.iter().any(|p| p == entry) {
            return false;
        }
        self.draft.participants.push(entry.to_string());
        true
    }

    pub fn remove_participant(&mut self, entry: &str) {
        self.draft.participants.retain(|p| p != entry);
    }

    /// Everyone splitting the bill, the organizer included.
    pub fn participant_count(&self) -> usize {
        self.draft.participants.len() + 1
    }

    pub fn share_per_person(&self) -> f64 {
        share_per_person(&self.draft)
    }

    /// The terminal action. Mints an id and invite link for sharing and
    /// consumes the draft; there is no settlement transaction behind this.
    pub fn create(self) -> CreatedBill {
        let bill_id = generate_bill_id();
        log::info!(
            "creating bill {} ({:?}, {} participants)",
            bill_id,
            self.draft.title,
            self.participant_count()
        );
        CreatedBill {
            invite_link: format!("{}/{}", INVITE_BASE_URL, bill_id),
            participant_count: self.participant_count(),
            share_per_person: self.share_per_person(),
            bill_id,
        }
    }
}

/// `BILL-` followed by nine random uppercase alphanumerics.
pub fn generate_bill_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_uppercase())
        .collect();
    format!("BILL-{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_details() {
        let wizard = CreateBillWizard::new();
        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.step().number(), 1);
    }

    #[test]
    fn stepper_metadata_is_ordered() {
        let steps = Step::all();
        assert_eq!(steps.map(Step::number), [1, 2, 3, 4]);
        assert_eq!(steps[0].title(), "Bill Details");
        assert_eq!(steps[3].description(), "Review & create");
    }

    #[test]
    fn step_number_stays_within_bounds() {
        let mut wizard = CreateBillWizard::new();
        for _ in 0..10 {
            wizard.previous();
        }
        assert_eq!(wizard.step().number(), 1);
        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.step().number(), 4);
    }

    #[test]
    fn walks_forward_and_back_through_every_step() {
        let mut wizard = CreateBillWizard::new();
        wizard.next();
        assert_eq!(wizard.step(), Step::Participants);
        wizard.next();
        assert_eq!(wizard.step(), Step::SplitMethod);
        wizard.next();
        assert_eq!(wizard.step(), Step::Confirmation);
        wizard.previous();
        assert_eq!(wizard.step(), Step::SplitMethod);
    }

    #[test]
    fn participants_are_trimmed_and_deduplicated() {
        let mut wizard = CreateBillWizard::new();
        assert!(wizard.add_participant("  bob@example.com  "));
        assert!(!wizard.add_participant("bob@example.com"));
        assert!(!wizard.add_participant("   "));
        assert_eq!(wizard.draft.participants, vec!["bob@example.com"]);
        assert_eq!(wizard.participant_count(), 2);

        wizard.remove_participant("bob@example.com");
        assert!(wizard.draft.participants.is_empty());
        assert_eq!(wizard.participant_count(), 1);
    }

    #[test]
    fn create_mints_id_and_invite_link() {
        let mut wizard = CreateBillWizard::new();
        wizard.draft.title = "Team Dinner at Olive Garden".to_string();
        wizard.draft.amount = "240".to_string();
        for name in ["bob", "carol", "david", "eve", "frank"] {
            wizard.add_participant(name);
        }
        let created = wizard.create();
        assert!(created.bill_id.starts_with("BILL-"));
        assert_eq!(created.bill_id.len(), "BILL-".len() + 9);
        assert_eq!(
            created.invite_link,
            format!("{}/{}", INVITE_BASE_URL, created.bill_id)
        );
        assert_eq!(created.participant_count, 6);
        assert_eq!(created.share_per_person, 40.0);
    }

    #[test]
    fn bill_ids_are_uppercase_and_distinct() {
        let a = generate_bill_id();
        let b = generate_bill_id();
        assert_ne!(a, b);
        assert!(a
            .strip_prefix("BILL-")
            .unwrap()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn empty_draft_still_reaches_confirmation() {
        let mut wizard = CreateBillWizard::new();
        wizard.next();
        wizard.next();
        wizard.next();
        assert_eq!(wizard.step(), Step::Confirmation);
        let created = wizard.create();
        assert_eq!(created.share_per_person, 0.0);
        assert_eq!(created.participant_count, 1);
    }
}
