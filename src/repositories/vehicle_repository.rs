use std::sync::Arc;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

/// Catálogo de prueba, en el orden en que se muestra sin filtros
const SEED_VEHICLES: [(&str, &str, u64); 20] = [
    ("Chevrolet", "Onix 1.0T LT", 25_560_900),
    ("Toyota", "Yaris Hatchback XS", 26_721_000),
    ("Fiat", "Cronos 1.3 Like", 27_819_000),
    ("Peugeot", "208 1.6 Active MT", 28_390_000),
    ("Volkswagen", "Polo Track", 25_990_000),
    ("Renault", "Logan Intens 1.6", 31_200_000),
    ("Ford", "Ka SE 1.5", 24_500_000),
    ("Nissan", "Versa Sense MT", 31_450_000),
    ("Honda", "City LX", 39_800_000),
    ("Chevrolet", "Cruze LT AT", 45_200_000),
    ("Toyota", "Corolla XLI 2.0", 54_500_000),
    ("Citroën", "C3 Live Pack", 28_900_000),
    ("Citroën", "C4 Cactus Feel", 38_900_000),
    ("Peugeot", "408 Allure", 61_200_000),
    ("Volkswagen", "Vento 1.4 TSI", 68_700_000),
    ("Kia", "Cerato FE 2.0", 63_900_000),
    ("Hyundai", "Accent GLS", 61_500_000),
    ("Chery", "Arrizo 5 Comfort", 35_200_000),
    ("Audi", "A3 35 TFSI", 145_000_000),
    ("BMW", "320i SportLine", 185_000_000),
];

/// Catálogo en memoria, cargado una vez al arrancar y de sólo lectura.
/// Clonar el repositorio comparte el mismo snapshot.
#[derive(Debug, Clone)]
pub struct VehicleRepository {
    vehicles: Arc<[Vehicle]>,
}

impl VehicleRepository {
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, AppError> {
        if vehicles.is_empty() {
            return Err(AppError::Catalog("el catálogo no puede estar vacío".to_string()));
        }

        Ok(Self {
            vehicles: vehicles.into(),
        })
    }

    /// Repositorio con el catálogo fijo de 20 vehículos
    pub fn new_default() -> Result<Self, AppError> {
        let vehicles = SEED_VEHICLES
            .iter()
            .map(|(brand, model, price)| Vehicle::new(*brand, *model, *price))
            .collect();
        Self::new(vehicles)
    }

    pub fn find_all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let repository = VehicleRepository::new_default().unwrap();
        assert_eq!(repository.len(), 20);

        let first = &repository.find_all()[0];
        assert_eq!(first.brand, "Chevrolet");
        assert_eq!(first.model, "Onix 1.0T LT");
        assert_eq!(first.price, 25_560_900);
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let err = VehicleRepository::new(vec![]).unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn test_clones_share_snapshot() {
        let repository = VehicleRepository::new_default().unwrap();
        let clone = repository.clone();
        assert!(std::ptr::eq(repository.find_all(), clone.find_all()));
    }
}
