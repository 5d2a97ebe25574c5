use crate::core::collection::{CalendarMarks, Collection};
use crate::core::state::AppState;
use crate::models::id::unique_uid;
use crate::models::{
    Adoption, AdoptionStatus, CalendarMark, Channel, Donation, Due, Event, MarkType, Rescue,
    RescueStatus,
};
use chrono::{Duration, NaiveDate};

/// Sample data set, with dates relative to `today`.
pub fn sample_state(today: NaiveDate) -> AppState {
    let day = |offset: i64| today + Duration::days(offset);

    let mut taken: Vec<String> = Vec::new();
    let mut id = || {
        let next = unique_uid(taken.iter().map(String::as_str));
        taken.push(next.clone());
        next
    };

    let adoptions = vec![
        Adoption {
            id: id(),
            applicant: "Daniel Borac".into(),
            animal: "Milo (Cat)".into(),
            submitted: day(-4),
            status: AdoptionStatus::Pending,
        },
        Adoption {
            id: id(),
            applicant: "Khen Nuarin".into(),
            animal: "Buddy (Dog)".into(),
            submitted: day(-2),
            status: AdoptionStatus::Approved,
        },
        Adoption {
            id: id(),
            applicant: "Mark Flower".into(),
            animal: "Luna (Cat)".into(),
            submitted: day(-1),
            status: AdoptionStatus::Rejected,
        },
    ];

    let rescues = vec![
        Rescue {
            id: id(),
            reporter: "CJ Arrienda".into(),
            location: "Malfcot".into(),
            date: day(0),
            status: RescueStatus::Urgent,
        },
        Rescue {
            id: id(),
            reporter: "Joan".into(),
            location: "Carafiq".into(),
            date: day(-3),
            status: RescueStatus::InProgress,
        },
    ];

    let donations = vec![
        Donation {
            id: id(),
            donor: "Rex Tan".into(),
            amount: 1000.0,
            channel: Channel::GCash,
            date: day(-1),
        },
        Donation {
            id: id(),
            donor: "Anna Lee".into(),
            amount: 2500.0,
            channel: Channel::Bank,
            date: day(-7),
        },
        Donation {
            id: id(),
            donor: "Anonymous".into(),
            amount: 500.0,
            channel: Channel::Cash,
            date: day(0),
        },
    ];

    let events = vec![Event {
        id: id(),
        title: "Free Vaccination Drive".into(),
        date: day(5),
        location: "Barangay Hall".into(),
        desc: "Community pet care and adoption day.".into(),
    }];

    let dues = vec![
        Due {
            id: id(),
            text: "Rescue in Malfcot".into(),
        },
        Due {
            id: id(),
            text: "Rescue in Carafiq".into(),
        },
    ];

    let marks = vec![
        CalendarMark::new(day(1), MarkType::Rescue),
        CalendarMark::new(day(3), MarkType::Event),
        CalendarMark::new(day(4), MarkType::Due),
    ];

    AppState {
        adoptions: Collection::from_vec(adoptions),
        rescues: Collection::from_vec(rescues),
        donations: Collection::from_vec(donations),
        events: Collection::from_vec(events),
        dues: Collection::from_vec(dues),
        calendar_marks: CalendarMarks::from_vec(marks),
    }
}
