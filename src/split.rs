use crate::schemas::{BillDraft, SplitMethod};

/// Evenly divides an amount between `count` people, the organizer included.
/// There is no remainder reconciliation, so shares may carry fractional
/// cents whose sum differs from the total by float error.
pub fn equal_share(amount: f64, count: usize) -> f64 {
    amount / count as f64
}

/// The per-person share for a draft as the wizard previews it. The amount
/// field is free text, anything unparsable counts as zero. Only the equal
/// method computes, the other methods preview as zero.
pub fn share_per_person(draft: &BillDraft) -> f64 {
    let amount = draft.amount.trim().parse::<f64>().unwrap_or(0.0);
    let count = draft.participants.len() + 1; // +1 for the organizer
    match draft.split_method {
        SplitMethod::Equal => equal_share(amount, count),
        SplitMethod::Custom | SplitMethod::Percentage => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(amount: &str, participants: &[&str]) -> BillDraft {
        BillDraft {
            amount: amount.to_string(),
            participants: participants.iter().map(|p| p.to_string()).collect(),
            ..BillDraft::default()
        }
    }

    #[test]
    fn team_dinner_splits_to_forty() {
        let draft = draft_with("240", &["bob", "carol", "david", "eve", "frank"]);
        assert_eq!(share_per_person(&draft), 40.0);
    }

    #[test]
    fn organizer_alone_pays_everything() {
        let draft = draft_with("35.50", &[]);
        assert_eq!(share_per_person(&draft), 35.5);
    }

    #[test]
    fn unparsable_amount_degrades_to_zero() {
        let draft = draft_with("forty bucks", &["bob"]);
        assert_eq!(share_per_person(&draft), 0.0);
    }

    #[test]
    fn empty_amount_degrades_to_zero() {
        let draft = draft_with("", &["bob", "carol"]);
        assert_eq!(share_per_person(&draft), 0.0);
    }

    #[test]
    fn non_equal_methods_preview_as_zero() {
        let mut draft = draft_with("100", &["bob"]);
        draft.split_method = SplitMethod::Custom;
        assert_eq!(share_per_person(&draft), 0.0);
        draft.split_method = SplitMethod::Percentage;
        assert_eq!(share_per_person(&draft), 0.0);
    }

    #[test]
    fn share_scales_with_participant_count() {
        for n in 1..=20 {
            assert!((equal_share(120.0, n) - 120.0 / n as f64).abs() < f64::EPSILON);
        }
    }
}
