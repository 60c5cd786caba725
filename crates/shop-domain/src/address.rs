use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Objeto de valor para la dirección postal de un cliente. Inmutable una vez
/// construido; todos los campos son obligatorios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    /// Crea una dirección validada.
    ///
    /// # Errores
    /// Retorna `DomainError::ValidationError` si algún campo está vacío o el
    /// número es cero.
    pub fn new(street: &str, number: u32, zip: &str, city: &str) -> Result<Self, DomainError> {
        if street.trim().is_empty() {
            return Err(DomainError::ValidationError("Street is required".to_string()));
        }
        if number == 0 {
            return Err(DomainError::ValidationError("Number is required".to_string()));
        }
        if zip.trim().is_empty() {
            return Err(DomainError::ValidationError("Zip is required".to_string()));
        }
        if city.trim().is_empty() {
            return Err(DomainError::ValidationError("City is required".to_string()));
        }
        Ok(Address { street: street.to_string(),
                     number,
                     zip: zip.to_string(),
                     city: city.to_string() })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
