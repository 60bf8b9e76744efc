use incident_model::payload::decode_incidents;
use incident_model::{
    build_cards, CardList, Dialog, DialogState, IncidentCard, Page, ResponsePager,
};
use serde_json::json;

#[derive(Clone, Copy, Debug)]
enum Step {
    Next,
    Previous,
}

fn sequences(len: usize) -> Vec<Vec<Step>> {
    (0..(1u32 << len))
        .map(|bits| {
            (0..len)
                .map(|i| if bits & (1 << i) != 0 { Step::Next } else { Step::Previous })
                .collect()
        })
        .collect()
}

#[test]
fn pager_index_stays_in_bounds_for_every_click_sequence() {
    for size in 0..5usize {
        for seq in sequences(8) {
            let mut pager = ResponsePager::new((0..size).collect::<Vec<_>>());
            let mut expected = 0usize;
            for step in &seq {
                match step {
                    Step::Next => {
                        pager.next();
                        if expected + 1 < size {
                            expected += 1;
                        }
                    }
                    Step::Previous => {
                        pager.previous();
                        expected = expected.saturating_sub(1);
                    }
                }
                assert_eq!(pager.index(), expected, "size {size} seq {seq:?}");
                assert!(pager.index() <= size.saturating_sub(1));
                assert_eq!(pager.current().copied(), (size > 0).then_some(expected));
            }
        }
    }
}

#[test]
fn empty_server_list_renders_message() {
    let incidents = decode_incidents(json!([])).expect("empty list decodes");
    match build_cards(Page::MyIncidents, &incidents, None) {
        CardList::Empty(message) => assert_eq!(message, "No incidents found."),
        CardList::Cards(cards) => panic!("expected empty message, got {cards:?}"),
    }
}

#[test]
fn each_incident_maps_to_one_card() {
    let incidents = decode_incidents(json!([
        {
            "id": 1,
            "title": "Broken streetlight",
            "description": "Corner of 5th",
            "created_at": "t1"
        },
        { "id": 2, "title": "Graffiti", "description": "Library wall", "created_at": "t2" }
    ]))
    .expect("incidents");

    let first = build_cards(Page::MyIncidents, &incidents, None);
    let second = build_cards(Page::MyIncidents, &incidents, None);
    assert_eq!(first, second);

    let cards = first.cards();
    assert_eq!(cards.len(), incidents.len());
    for (card, incident) in cards.iter().zip(&incidents) {
        assert_eq!(card, &IncidentCard::from_incident(incident));
        assert_eq!(card.title, incident.title);
        assert_eq!(card.description, incident.description);
    }
}

#[test]
fn dialog_operations_are_idempotent() {
    type Op = fn(&mut DialogState);
    let ops: [Op; 5] = [
        |s| s.open_respond("1".into()),
        |s| s.open_responses("1".into()),
        |s| s.close_respond(),
        |s| s.close_responses(),
        |s| s.close_all(),
    ];

    let mut starts = vec![DialogState::default()];
    for op in ops {
        let mut s = DialogState::default();
        op(&mut s);
        starts.push(s);
    }

    for start in &starts {
        for op in ops {
            let mut once = start.clone();
            op(&mut once);
            let mut twice = once.clone();
            op(&mut twice);
            assert_eq!(once, twice);
            assert_eq!(
                once.is_blurred(),
                once.is_open(Dialog::Respond) || once.is_open(Dialog::Responses)
            );
        }
    }
}
