use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Entidad producto del catálogo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    /// Crea un producto validado.
    ///
    /// # Errores
    /// Retorna `DomainError::ValidationError` si `id` o `name` están vacíos o
    /// el precio no es estrictamente positivo.
    pub fn new(id: &str, name: &str, price: f64) -> Result<Self, DomainError> {
        Self::validate(id, name, price)?;
        Ok(Product { id: id.to_string(),
                     name: name.to_string(),
                     price })
    }

    fn validate(id: &str, name: &str, price: f64) -> Result<(), DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::ValidationError("Id is required".to_string()));
        }
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError("Name is required".to_string()));
        }
        if price <= 0.0 {
            return Err(DomainError::ValidationError("Price must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn change_name(&mut self, name: &str) -> Result<(), DomainError> {
        Self::validate(&self.id, name, self.price)?;
        self.name = name.to_string();
        Ok(())
    }

    pub fn change_price(&mut self, price: f64) -> Result<(), DomainError> {
        Self::validate(&self.id, &self.name, price)?;
        self.price = price;
        Ok(())
    }

    // Getters
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product(id: {}, name: {}, price: {})", self.id, self.name, self.price)
    }
}
