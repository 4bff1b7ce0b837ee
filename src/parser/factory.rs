use crate::models::activity::Activity;
use crate::models::activity_type::ActivityType;
use crate::models::airport::Airport;
use chrono::NaiveDateTime;

/// Materializes activities for parsers.
pub trait ActivityFactory: Send + Sync {
    fn create(
        &self,
        kind: ActivityType,
        location: Airport,
        occurred_at: NaiveDateTime,
        to: Option<Airport>,
        scheduled_time_departure: Option<NaiveDateTime>,
        scheduled_time_arrival: Option<NaiveDateTime>,
    ) -> Activity;
}

/// Builds unsaved activities; ids are assigned by the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultActivityFactory;

impl ActivityFactory for DefaultActivityFactory {
    fn create(
        &self,
        kind: ActivityType,
        location: Airport,
        occurred_at: NaiveDateTime,
        to: Option<Airport>,
        scheduled_time_departure: Option<NaiveDateTime>,
        scheduled_time_arrival: Option<NaiveDateTime>,
    ) -> Activity {
        Activity {
            id: None,
            kind,
            location,
            to,
            occurred_at,
            scheduled_time_departure,
            scheduled_time_arrival,
        }
    }
}
