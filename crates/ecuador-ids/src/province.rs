// src/province.rs
//! Province codes, the first two digits of every cédula and RUC

/// Highest province code accepted by default.
pub const DEFAULT_MAX_PROVINCE_CODE: u8 = 24;

/// Code assigned to Ecuadorians registered abroad.
pub const ABROAD_PROVINCE_CODE: u8 = 30;

/// Province names, indexed by code minus one.
const PROVINCES: [&str; 24] = [
    "Azuay",
    "Bolívar",
    "Cañar",
    "Carchi",
    "Cotopaxi",
    "Chimborazo",
    "El Oro",
    "Esmeraldas",
    "Guayas",
    "Imbabura",
    "Loja",
    "Los Ríos",
    "Manabí",
    "Morona Santiago",
    "Napo",
    "Pastaza",
    "Pichincha",
    "Tungurahua",
    "Zamora Chinchipe",
    "Galápagos",
    "Sucumbíos",
    "Orellana",
    "Santo Domingo de los Tsáchilas",
    "Santa Elena",
];

/// Name of the province a code was issued in.
///
/// Code `00` passes validation but belongs to no province, so it has no name.
pub fn province_name(code: u8) -> Option<&'static str> {
    match code {
        ABROAD_PROVINCE_CODE => Some("Exterior"),
        code => PROVINCES.get(usize::from(code).checked_sub(1)?).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_provinces() {
        assert_eq!(province_name(1), Some("Azuay"));
        assert_eq!(province_name(9), Some("Guayas"));
        assert_eq!(province_name(17), Some("Pichincha"));
        assert_eq!(province_name(DEFAULT_MAX_PROVINCE_CODE), Some("Santa Elena"));
        assert_eq!(province_name(ABROAD_PROVINCE_CODE), Some("Exterior"));
    }

    #[test]
    fn unnamed_codes() {
        assert_eq!(province_name(0), None);
        assert_eq!(province_name(25), None);
        assert_eq!(province_name(99), None);
    }
}
