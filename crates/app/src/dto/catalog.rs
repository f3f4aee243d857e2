use serde::{Deserialize, Serialize};
use smarthome_domain::actuator_model::ActuatorModel;
use smarthome_domain::actuator_type::ActuatorType;
use smarthome_domain::error::ValidationError;
use smarthome_domain::id::{ActuatorModelId, ActuatorTypeId, SensorModelId, SensorTypeId};
use smarthome_domain::sensor_model::SensorModel;
use smarthome_domain::sensor_type::SensorType;
use smarthome_domain::text::{Description, Unit};

/// Sensor type, used both to define one and to report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorTypeDto {
    pub id: String,
    pub description: String,
    pub unit: String,
}

impl From<&SensorType> for SensorTypeDto {
    fn from(sensor_type: &SensorType) -> Self {
        Self {
            id: sensor_type.id().to_string(),
            description: sensor_type.description().to_string(),
            unit: sensor_type.unit().to_string(),
        }
    }
}

impl SensorTypeDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for any blank field.
    pub fn parse(&self) -> Result<(SensorTypeId, Description, Unit), ValidationError> {
        Ok((
            SensorTypeId::new(self.id.as_str())?,
            Description::new(self.description.as_str())?,
            Unit::new(self.unit.as_str())?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorTypeDto {
    pub id: String,
    pub description: String,
    pub unit: String,
}

impl From<&ActuatorType> for ActuatorTypeDto {
    fn from(actuator_type: &ActuatorType) -> Self {
        Self {
            id: actuator_type.id().to_string(),
            description: actuator_type.description().to_string(),
            unit: actuator_type.unit().to_string(),
        }
    }
}

impl ActuatorTypeDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for any blank field.
    pub fn parse(&self) -> Result<(ActuatorTypeId, Description, Unit), ValidationError> {
        Ok((
            ActuatorTypeId::new(self.id.as_str())?,
            Description::new(self.description.as_str())?,
            Unit::new(self.unit.as_str())?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorModelDto {
    /// Hardware code, e.g. `GA100K`.
    pub id: String,
    pub sensor_type_id: String,
}

impl From<&SensorModel> for SensorModelDto {
    fn from(model: &SensorModel) -> Self {
        Self {
            id: model.id().to_string(),
            sensor_type_id: model.sensor_type_id().to_string(),
        }
    }
}

impl TryFrom<&SensorModelDto> for SensorModel {
    type Error = ValidationError;

    fn try_from(dto: &SensorModelDto) -> Result<Self, Self::Error> {
        Ok(SensorModel::new(
            SensorModelId::new(dto.id.as_str())?,
            SensorTypeId::new(dto.sensor_type_id.as_str())?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorModelDto {
    pub id: String,
    pub actuator_type_id: String,
}

impl From<&ActuatorModel> for ActuatorModelDto {
    fn from(model: &ActuatorModel) -> Self {
        Self {
            id: model.id().to_string(),
            actuator_type_id: model.actuator_type_id().to_string(),
        }
    }
}

impl TryFrom<&ActuatorModelDto> for ActuatorModel {
    type Error = ValidationError;

    fn try_from(dto: &ActuatorModelDto) -> Result<Self, Self::Error> {
        Ok(ActuatorModel::new(
            ActuatorModelId::new(dto.id.as_str())?,
            ActuatorTypeId::new(dto.actuator_type_id.as_str())?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_sensor_type_dto() {
        let dto: SensorTypeDto = serde_json::from_str(
            r#"{"id":"temperature","description":"Temperature","unit":"Celsius"}"#,
        )
        .unwrap();
        let (id, description, unit) = dto.parse().unwrap();
        let sensor_type = SensorType::new(id, description, unit);
        assert_eq!(SensorTypeDto::from(&sensor_type), dto);
    }

    #[test]
    fn should_name_blank_unit_when_parsing_actuator_type() {
        let dto = ActuatorTypeDto {
            id: "blind".to_string(),
            description: "Blind Roller".to_string(),
            unit: String::new(),
        };
        assert_eq!(
            dto.parse().unwrap_err(),
            ValidationError::Empty { field: "unit" }
        );
    }

    #[test]
    fn should_build_sensor_model_from_dto() {
        let dto = SensorModelDto {
            id: "PC500W".to_string(),
            sensor_type_id: "power".to_string(),
        };
        let model = SensorModel::try_from(&dto).unwrap();
        assert_eq!(model.sensor_type_id().as_str(), "power");
    }

    #[test]
    fn should_reject_actuator_model_with_blank_type() {
        let dto = ActuatorModelDto {
            id: "SPV300".to_string(),
            actuator_type_id: " ".to_string(),
        };
        assert!(ActuatorModel::try_from(&dto).is_err());
    }
}
