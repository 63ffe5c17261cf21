//! The fixed demonstration records served by every read path. There is no
//! store behind the service, each lookup resolves to these constants.

use crate::schemas::{
    ActiveBillCard, Bill, BillStatus, CardStatus, CompletedBill, Organizer, Participant,
    PastBillCard, SettledParticipant,
};
use chrono::{DateTime, NaiveDate, Utc};

pub const DEMO_BILL_ID: &str = "BILL-ABC123XYZ";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse().unwrap()
}

fn organizer() -> Organizer {
    Organizer {
        name: "Alice Johnson".to_string(),
        address: "0x1234...5678".to_string(),
    }
}

fn participant(name: &str, address: &str, paid: bool, is_you: bool) -> Participant {
    Participant {
        name: name.to_string(),
        address: address.to_string(),
        amount: 40.0,
        paid,
        is_you,
    }
}

/// The bill a join lookup resolves to: two shares settled so far.
pub fn join_bill() -> Bill {
    Bill {
        id: DEMO_BILL_ID.to_string(),
        title: "Team Dinner at Olive Garden".to_string(),
        description: "Annual team dinner celebration".to_string(),
        total_amount: 240.0,
        paid_amount: 80.0,
        organizer: organizer(),
        deadline: date(2024, 1, 15),
        status: BillStatus::Active,
        participants: vec![
            participant("Alice Johnson", "0x1234...5678", true, false),
            participant("Bob Smith", "0x2345...6789", true, false),
            participant("Carol Davis", "0x3456...7890", false, false),
            participant("David Wilson", "0x4567...8901", false, false),
            participant("Eve Brown", "0x5678...9012", false, false),
            participant("You", "0x6789...0123", false, true),
        ],
        created_at: date(2024, 1, 1),
    }
}

/// The detail view of the same bill further along: four shares settled.
pub fn bill_details(id: &str) -> Bill {
    Bill {
        id: id.to_string(),
        description: "Annual team dinner celebration with the whole crew".to_string(),
        paid_amount: 160.0,
        participants: vec![
            participant("Alice Johnson", "0x1234...5678", true, false),
            participant("Bob Smith", "0x2345...6789", true, false),
            participant("Carol Davis", "0x3456...7890", true, false),
            participant("David Wilson", "0x4567...8901", true, false),
            participant("Eve Brown", "0x5678...9012", false, false),
            participant("You", "0x6789...0123", false, true),
        ],
        ..join_bill()
    }
}

fn settled(name: &str, address: &str, paid_date: &str, hash: &str) -> SettledParticipant {
    SettledParticipant {
        name: name.to_string(),
        address: address.to_string(),
        amount: 40.0,
        paid_date: timestamp(paid_date),
        transaction_hash: hash.to_string(),
    }
}

pub fn completed_bill(id: &str) -> CompletedBill {
    let participants = vec![
        settled(
            "Alice Johnson",
            "0x1234...5678",
            "2024-01-10T14:20:00Z",
            "0xabcd...1234",
        ),
        settled(
            "Bob Smith",
            "0x2345...6789",
            "2024-01-11T09:15:00Z",
            "0xbcde...2345",
        ),
        settled(
            "Carol Davis",
            "0x3456...7890",
            "2024-01-12T16:45:00Z",
            "0xcdef...3456",
        ),
        settled(
            "David Wilson",
            "0x4567...8901",
            "2024-01-13T11:30:00Z",
            "0xdefg...4567",
        ),
        settled(
            "Eve Brown",
            "0x5678...9012",
            "2024-01-14T20:10:00Z",
            "0xefgh...5678",
        ),
        settled(
            "You",
            "0x6789...0123",
            "2024-01-15T18:30:00Z",
            "0xfghi...6789",
        ),
    ];
    let transaction_hashes = participants
        .iter()
        .map(|p| p.transaction_hash.clone())
        .collect();
    CompletedBill {
        id: id.to_string(),
        title: "Team Dinner at Olive Garden".to_string(),
        description: "Annual team dinner celebration with the whole crew".to_string(),
        total_amount: 240.0,
        organizer: organizer(),
        completed_date: timestamp("2024-01-15T18:30:00Z"),
        participants,
        transaction_hashes,
    }
}

pub fn active_bills() -> Vec<ActiveBillCard> {
    vec![
        ActiveBillCard {
            id: "1".to_string(),
            title: "Team Dinner at Olive Garden".to_string(),
            total_amount: 240.0,
            paid_amount: 160.0,
            participants: 6,
            deadline: date(2024, 1, 15),
            status: CardStatus::Pending,
            your_share: 40.0,
        },
        ActiveBillCard {
            id: "2".to_string(),
            title: "Weekend Trip to Mountains".to_string(),
            total_amount: 800.0,
            paid_amount: 600.0,
            participants: 4,
            deadline: date(2024, 1, 20),
            status: CardStatus::Pending,
            your_share: 200.0,
        },
        ActiveBillCard {
            id: "3".to_string(),
            title: "Office Party Supplies".to_string(),
            total_amount: 150.0,
            paid_amount: 150.0,
            participants: 8,
            deadline: date(2024, 1, 10),
            status: CardStatus::Completed,
            your_share: 18.75,
        },
    ]
}

pub fn past_bills() -> Vec<PastBillCard> {
    vec![
        PastBillCard {
            id: "4".to_string(),
            title: "Movie Night Snacks".to_string(),
            total_amount: 60.0,
            participants: 3,
            completed_date: date(2024, 1, 5),
            your_share: 20.0,
        },
        PastBillCard {
            id: "5".to_string(),
            title: "Birthday Gift for Sarah".to_string(),
            total_amount: 120.0,
            participants: 6,
            completed_date: date(2023, 12, 28),
            your_share: 20.0,
        },
        PastBillCard {
            id: "6".to_string(),
            title: "Lunch at Food Court".to_string(),
            total_amount: 45.0,
            participants: 3,
            completed_date: date(2023, 12, 20),
            your_share: 15.0,
        },
    ]
}
