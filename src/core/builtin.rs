// File: src/core/builtin.rs
use crate::core::catalog::Catalog;
use crate::core::types::CatalogEntry;
use crate::error::CatalogError;

/// Service intents offered by the marketplace, grouped by category.
/// Order inside each group is the tie-break order for equal scores.
const SERVICE_INTENTS: &[(&str, &[&str])] = &[
    (
        "plomeria",
        &[
            "Destapar mi baño",
            "Destapar tubería",
            "Destapar coladera",
            "Destapar drenaje",
            "Destapar WC",
            "Reparar fuga de agua",
            "Cambiar llave de lavabo",
            "Instalar calentador de agua",
            "Reparar tinaco",
            "Instalar lavabo nuevo",
        ],
    ),
    (
        "pintura",
        &[
            "Pintar interiores",
            "Pintar fachada",
            "Pintar una habitación",
            "Pintar departamento completo",
            "Pintar rejas y portones",
            "Impermeabilizar azotea",
        ],
    ),
    (
        "electricidad",
        &[
            "Instalar contactos eléctricos",
            "Reparar corto circuito",
            "Instalar lámparas",
            "Cambiar apagadores",
            "Revisar instalación eléctrica",
        ],
    ),
    (
        "limpieza",
        &[
            "Limpieza profunda de casa",
            "Limpiar alfombras",
            "Lavar salas y colchones",
            "Limpieza de cisterna",
        ],
    ),
    (
        "carpinteria",
        &[
            "Reparar puertas de madera",
            "Fabricar clóset a medida",
            "Instalar cocina integral",
            "Barnizar muebles",
        ],
    ),
    (
        "cerrajeria",
        &["Abrir puerta sin llave", "Cambiar chapa", "Duplicar llaves"],
    ),
    (
        "jardineria",
        &["Podar árboles", "Cortar pasto", "Diseño de jardín"],
    ),
    (
        "albanileria",
        &["Construir barda", "Colocar piso y azulejo", "Resanar muros"],
    ),
    (
        "electrodomesticos",
        &["Reparar refrigerador", "Reparar lavadora", "Reparar estufa"],
    ),
    (
        "aire acondicionado",
        &["Instalar minisplit", "Mantenimiento de aire acondicionado"],
    ),
];

/// Shown when a query matches little or nothing in the catalog.
const GENERIC_FALLBACKS: &[&str] = &[
    "Buscar un profesional cerca de mí",
    "Solicitar una cotización",
    "Ver todos los servicios",
];

impl Catalog {
    /// The catalog shipped with the marketplace.
    pub fn builtin() -> Result<Self, CatalogError> {
        let entries = SERVICE_INTENTS
            .iter()
            .flat_map(|(category, phrases)| {
                phrases
                    .iter()
                    .map(move |phrase| CatalogEntry::new(*phrase, *category))
            })
            .collect();
        let fallbacks = GENERIC_FALLBACKS.iter().map(|s| s.to_string()).collect();
        Self::new(entries, fallbacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        let expected: usize = SERVICE_INTENTS.iter().map(|(_, p)| p.len()).sum();
        assert_eq!(catalog.len(), expected);
        assert_eq!(catalog.categories().len(), SERVICE_INTENTS.len());
        assert_eq!(catalog.fallbacks().len(), 3);
    }

    #[test]
    fn phrases_are_short() {
        let catalog = Catalog::builtin().unwrap();
        for entry in catalog.entries() {
            let n = entry.phrase.split_whitespace().count();
            assert!((2..=6).contains(&n), "'{}' has {} words", entry.phrase, n);
        }
    }
}
