//! Participant entity ↔ model mappers

use batepapo_core::entities::Participant;

use crate::models::ParticipantModel;

use super::datetime_from_millis;

impl From<ParticipantModel> for Participant {
    fn from(model: ParticipantModel) -> Self {
        Self {
            name: model.name,
            last_seen: datetime_from_millis(model.last_seen),
        }
    }
}

impl From<&Participant> for ParticipantModel {
    fn from(entity: &Participant) -> Self {
        Self {
            name: entity.name.clone(),
            last_seen: entity.last_seen.timestamp_millis(),
        }
    }
}
