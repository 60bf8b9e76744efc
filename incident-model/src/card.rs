use crate::dto::{Incident, IncidentId};
use crate::endpoint::Endpoint;

pub const EMPTY_MESSAGE: &str = "No incidents found.";

/// Which incident list a page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    /// The signed-in user's own incidents.
    #[default]
    MyIncidents,
    /// Everyone else's incidents.
    PublicIncidents,
}

impl Page {
    /// Parses the `data-page` marker of the mount element. Unknown markers
    /// fall back to the user's own incidents.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker.map(|m| m.trim().to_ascii_lowercase()).as_deref() {
            Some("public-incidents") | Some("public") => Page::PublicIncidents,
            _ => Page::MyIncidents,
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            Page::MyIncidents => Endpoint::Incidents,
            Page::PublicIncidents => Endpoint::PublicIncidents,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Page::MyIncidents => "My Incidents",
            Page::PublicIncidents => "Public Incidents",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncidentCard {
    pub id: IncidentId,
    pub title: String,
    pub description: String,
    pub created_at: Option<String>,
    pub status: String,
}

impl IncidentCard {
    pub fn from_incident(incident: &Incident) -> Self {
        Self {
            id: incident.id.clone(),
            title: incident.title.clone(),
            description: incident.description.clone(),
            created_at: incident
                .created_at
                .as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status: incident.status.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardList {
    Empty(&'static str),
    Cards(Vec<IncidentCard>),
}

impl CardList {
    pub fn cards(&self) -> &[IncidentCard] {
        match self {
            CardList::Empty(_) => &[],
            CardList::Cards(cards) => cards,
        }
    }
}

pub fn exclude_owned(incidents: &[Incident], user_id: i64) -> Vec<&Incident> {
    incidents
        .iter()
        .filter(|i| i.user_id != Some(user_id))
        .collect()
}

pub fn build_cards(page: Page, incidents: &[Incident], current_user: Option<i64>) -> CardList {
    let visible: Vec<&Incident> = match (page, current_user) {
        (Page::PublicIncidents, Some(user)) => exclude_owned(incidents, user),
        _ => incidents.iter().collect(),
    };

    if visible.is_empty() {
        return CardList::Empty(EMPTY_MESSAGE);
    }
    CardList::Cards(visible.into_iter().map(IncidentCard::from_incident).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(id: i64, owner: Option<i64>) -> Incident {
        Incident {
            id: id.into(),
            title: format!("incident {id}"),
            description: format!("details {id}"),
            status: "Reported".into(),
            user_id: owner,
            user_email: None,
            created_at: Some(" 2024-06-01 ".into()),
        }
    }

    #[test]
    fn page_markers() {
        assert_eq!(Page::from_marker(Some("public-incidents")), Page::PublicIncidents);
        assert_eq!(Page::from_marker(Some(" Public ")), Page::PublicIncidents);
        assert_eq!(Page::from_marker(Some("dashboard")), Page::MyIncidents);
        assert_eq!(Page::from_marker(None), Page::MyIncidents);
    }

    #[test]
    fn page_endpoints() {
        assert_eq!(Page::MyIncidents.endpoint(), Endpoint::Incidents);
        assert_eq!(Page::PublicIncidents.endpoint(), Endpoint::PublicIncidents);
    }

    #[test]
    fn card_trims_created_at() {
        let card = IncidentCard::from_incident(&incident(1, None));
        assert_eq!(card.created_at.as_deref(), Some("2024-06-01"));

        let mut blank = incident(2, None);
        blank.created_at = Some("  ".into());
        assert_eq!(IncidentCard::from_incident(&blank).created_at, None);
    }

    #[test]
    fn public_page_hides_own_incidents() {
        let incidents = vec![incident(1, Some(10)), incident(2, Some(11)), incident(3, None)];
        let list = build_cards(Page::PublicIncidents, &incidents, Some(10));
        let ids: Vec<&str> = list.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn own_page_never_filters() {
        let incidents = vec![incident(1, Some(10))];
        let list = build_cards(Page::MyIncidents, &incidents, Some(10));
        assert_eq!(list.cards().len(), 1);
    }

    #[test]
    fn unknown_user_shows_everything() {
        let incidents = vec![incident(1, Some(10))];
        let list = build_cards(Page::PublicIncidents, &incidents, None);
        assert_eq!(list.cards().len(), 1);
    }

    #[test]
    fn filtering_everything_out_is_empty() {
        let incidents = vec![incident(1, Some(10))];
        let list = build_cards(Page::PublicIncidents, &incidents, Some(10));
        assert_eq!(list, CardList::Empty(EMPTY_MESSAGE));
    }
}
