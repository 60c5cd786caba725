use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Address, DomainError};

/// Entidad cliente. El `id` es asignado por el caller (no se genera aquí) y
/// junto al nombre es obligatorio; la dirección sólo se exige para activar la
/// cuenta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    /// Crea un cliente inactivo y sin dirección.
    ///
    /// # Errores
    /// Retorna `DomainError::ValidationError` si `id` o `name` están vacíos.
    pub fn new(id: &str, name: &str) -> Result<Self, DomainError> {
        Self::validate(id, name)?;
        Ok(Customer { id: id.to_string(),
                      name: name.to_string(),
                      address: None,
                      active: false,
                      reward_points: 0 })
    }

    fn validate(id: &str, name: &str) -> Result<(), DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError("Id is required".to_string()));
        }
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError("Name is required".to_string()));
        }
        Ok(())
    }

    /// Cambia el nombre del cliente revalidando la entidad.
    pub fn change_name(&mut self, name: &str) -> Result<(), DomainError> {
        Self::validate(&self.id, name)?;
        self.name = name.to_string();
        Ok(())
    }

    /// Reemplaza la dirección del cliente.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activa la cuenta. Requiere una dirección registrada.
    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::ValidationError("Address is mandatory to activate a customer".to_string()));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Acumula puntos de recompensa (nunca descuenta).
    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points += points;
    }

    // Getters
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "Customer(id: {}, name: {}, active: {})",
               self.id, self.name, self.active)
    }
}
