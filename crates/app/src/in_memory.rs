//! In-memory repositories backing the service tests.
//!
//! Clones share the same store so several services can observe one another's
//! writes.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use smarthome_domain::actuator::Actuator;
use smarthome_domain::actuator_model::ActuatorModel;
use smarthome_domain::actuator_type::ActuatorType;
use smarthome_domain::aggregate::AggregateRoot;
use smarthome_domain::device::Device;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::house::House;
use smarthome_domain::id::{
    ActuatorId, ActuatorModelId, ActuatorTypeId, DeviceId, HouseId, RoomId, SensorId,
    SensorModelId, SensorReadingId, SensorTypeId,
};
use smarthome_domain::room::Room;
use smarthome_domain::sensor::Sensor;
use smarthome_domain::sensor_model::SensorModel;
use smarthome_domain::sensor_reading::SensorReading;
use smarthome_domain::sensor_type::SensorType;
use smarthome_domain::time::Period;

use crate::ports::{
    ActuatorModelRepository, ActuatorRepository, ActuatorTypeRepository, DeviceRepository,
    HouseRepository, IdGenerator, RoomRepository, SensorModelRepository, SensorReadingRepository,
    SensorRepository, SensorTypeRepository,
};

pub(crate) struct InMemoryRepo<A: AggregateRoot> {
    store: Arc<Mutex<HashMap<A::Id, A>>>,
}

impl<A: AggregateRoot> Clone for InMemoryRepo<A> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<A: AggregateRoot> Default for InMemoryRepo<A> {
    fn default() -> Self {
        Self {
            store: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<A> InMemoryRepo<A>
where
    A: AggregateRoot + Clone,
    A::Id: Clone + Eq + Hash,
{
    pub(crate) fn insert(&self, aggregate: A) -> A {
        let mut store = self.store.lock().unwrap();
        store.insert(aggregate.identity().clone(), aggregate.clone());
        aggregate
    }

    pub(crate) fn get(&self, id: &A::Id) -> Option<A> {
        self.store.lock().unwrap().get(id).cloned()
    }

    pub(crate) fn filter(&self, predicate: impl Fn(&A) -> bool) -> Vec<A> {
        let store = self.store.lock().unwrap();
        store.values().filter(|a| predicate(a)).cloned().collect()
    }

    pub(crate) fn all(&self) -> Vec<A> {
        self.filter(|_| true)
    }
}

fn ready<T: Send>(value: T) -> impl Future<Output = Result<T, SmartHomeError>> + Send {
    async move { Ok(value) }
}

impl HouseRepository for InMemoryRepo<House> {
    fn save(&self, house: House) -> impl Future<Output = Result<House, SmartHomeError>> + Send {
        ready(self.insert(house))
    }

    fn update(&self, house: House) -> impl Future<Output = Result<House, SmartHomeError>> + Send {
        ready(self.insert(house))
    }

    fn get_by_id(
        &self,
        id: &HouseId,
    ) -> impl Future<Output = Result<Option<House>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<House>, SmartHomeError>> + Send {
        ready(self.all())
    }
}

impl RoomRepository for InMemoryRepo<Room> {
    fn save(&self, room: Room) -> impl Future<Output = Result<Room, SmartHomeError>> + Send {
        ready(self.insert(room))
    }

    fn get_by_id(
        &self,
        id: &RoomId,
    ) -> impl Future<Output = Result<Option<Room>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, SmartHomeError>> + Send {
        ready(self.all())
    }

    fn find_by_house(
        &self,
        house_id: &HouseId,
    ) -> impl Future<Output = Result<Vec<Room>, SmartHomeError>> + Send {
        ready(self.filter(|r| r.house_id() == house_id))
    }
}

impl DeviceRepository for InMemoryRepo<Device> {
    fn save(&self, device: Device) -> impl Future<Output = Result<Device, SmartHomeError>> + Send {
        ready(self.insert(device))
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, SmartHomeError>> + Send {
        ready(self.insert(device))
    }

    fn get_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, SmartHomeError>> + Send {
        ready(self.all())
    }

    fn find_by_room(
        &self,
        room_id: &RoomId,
    ) -> impl Future<Output = Result<Vec<Device>, SmartHomeError>> + Send {
        ready(self.filter(|d| d.room_id() == room_id))
    }

    fn find_active(&self) -> impl Future<Output = Result<Vec<Device>, SmartHomeError>> + Send {
        ready(self.filter(Device::is_active))
    }
}

impl SensorTypeRepository for InMemoryRepo<SensorType> {
    fn save(
        &self,
        sensor_type: SensorType,
    ) -> impl Future<Output = Result<SensorType, SmartHomeError>> + Send {
        ready(self.insert(sensor_type))
    }

    fn get_by_id(
        &self,
        id: &SensorTypeId,
    ) -> impl Future<Output = Result<Option<SensorType>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<SensorType>, SmartHomeError>> + Send {
        ready(self.all())
    }
}

impl ActuatorTypeRepository for InMemoryRepo<ActuatorType> {
    fn save(
        &self,
        actuator_type: ActuatorType,
    ) -> impl Future<Output = Result<ActuatorType, SmartHomeError>> + Send {
        ready(self.insert(actuator_type))
    }

    fn get_by_id(
        &self,
        id: &ActuatorTypeId,
    ) -> impl Future<Output = Result<Option<ActuatorType>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<ActuatorType>, SmartHomeError>> + Send {
        ready(self.all())
    }
}

impl SensorModelRepository for InMemoryRepo<SensorModel> {
    fn save(
        &self,
        model: SensorModel,
    ) -> impl Future<Output = Result<SensorModel, SmartHomeError>> + Send {
        ready(self.insert(model))
    }

    fn get_by_id(
        &self,
        id: &SensorModelId,
    ) -> impl Future<Output = Result<Option<SensorModel>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<SensorModel>, SmartHomeError>> + Send {
        ready(self.all())
    }

    fn find_by_sensor_type(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> impl Future<Output = Result<Vec<SensorModel>, SmartHomeError>> + Send {
        ready(self.filter(|m| m.sensor_type_id() == sensor_type_id))
    }
}

impl ActuatorModelRepository for InMemoryRepo<ActuatorModel> {
    fn save(
        &self,
        model: ActuatorModel,
    ) -> impl Future<Output = Result<ActuatorModel, SmartHomeError>> + Send {
        ready(self.insert(model))
    }

    fn get_by_id(
        &self,
        id: &ActuatorModelId,
    ) -> impl Future<Output = Result<Option<ActuatorModel>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<ActuatorModel>, SmartHomeError>> + Send {
        ready(self.all())
    }

    fn find_by_actuator_type(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> impl Future<Output = Result<Vec<ActuatorModel>, SmartHomeError>> + Send {
        ready(self.filter(|m| m.actuator_type_id() == actuator_type_id))
    }
}

impl SensorRepository for InMemoryRepo<Sensor> {
    fn save(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, SmartHomeError>> + Send {
        ready(self.insert(sensor))
    }

    fn update(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, SmartHomeError>> + Send {
        ready(self.insert(sensor))
    }

    fn get_by_id(
        &self,
        id: &SensorId,
    ) -> impl Future<Output = Result<Option<Sensor>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, SmartHomeError>> + Send {
        ready(self.all())
    }

    fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Vec<Sensor>, SmartHomeError>> + Send {
        ready(self.filter(|s| s.device_id() == device_id))
    }
}

impl ActuatorRepository for InMemoryRepo<Actuator> {
    fn save(
        &self,
        actuator: Actuator,
    ) -> impl Future<Output = Result<Actuator, SmartHomeError>> + Send {
        ready(self.insert(actuator))
    }

    fn update(
        &self,
        actuator: Actuator,
    ) -> impl Future<Output = Result<Actuator, SmartHomeError>> + Send {
        ready(self.insert(actuator))
    }

    fn get_by_id(
        &self,
        id: &ActuatorId,
    ) -> impl Future<Output = Result<Option<Actuator>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Actuator>, SmartHomeError>> + Send {
        ready(self.all())
    }

    fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Vec<Actuator>, SmartHomeError>> + Send {
        ready(self.filter(|a| a.device_id() == device_id))
    }
}

impl SensorReadingRepository for InMemoryRepo<SensorReading> {
    fn save(
        &self,
        reading: SensorReading,
    ) -> impl Future<Output = Result<SensorReading, SmartHomeError>> + Send {
        ready(self.insert(reading))
    }

    fn get_by_id(
        &self,
        id: &SensorReadingId,
    ) -> impl Future<Output = Result<Option<SensorReading>, SmartHomeError>> + Send {
        ready(self.get(id))
    }

    fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Vec<SensorReading>, SmartHomeError>> + Send {
        ready(self.filter(|r| r.device_id() == device_id))
    }

    fn find_by_device_within(
        &self,
        device_id: &DeviceId,
        period: Period,
    ) -> impl Future<Output = Result<Vec<SensorReading>, SmartHomeError>> + Send {
        ready(self.filter(|r| r.device_id() == device_id && period.contains(r.timestamp())))
    }

    fn find_by_sensor_within(
        &self,
        sensor_id: &SensorId,
        period: Period,
    ) -> impl Future<Output = Result<Vec<SensorReading>, SmartHomeError>> + Send {
        ready(self.filter(|r| r.sensor_id() == sensor_id && period.contains(r.timestamp())))
    }

    fn find_latest_by_sensor(
        &self,
        sensor_id: &SensorId,
    ) -> impl Future<Output = Result<Option<SensorReading>, SmartHomeError>> + Send {
        let latest = self
            .filter(|r| r.sensor_id() == sensor_id)
            .into_iter()
            .max_by_key(SensorReading::timestamp);
        ready(latest)
    }
}

/// Deterministic ids `id-1`, `id-2`, …
#[derive(Clone, Default)]
pub(crate) struct SequentialIds {
    counter: Arc<Mutex<u32>>,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        format!("id-{counter}")
    }
}
