//! Embedded Spanish cat facts used when every provider fails.

use factcard_core::{CoreError, FallbackPool};

/// Pre-translated local facts.
pub const LOCAL_FACTS: [&str; 20] = [
    "Los gatos pasan el 70% de su vida durmiendo.",
    "Un gato doméstico promedio puede correr a unos 48 km/h.",
    "Los gatos no pueden saborear cosas dulces.",
    "El cerebro de un gato es 90% similar al de un ser humano.",
    "Los gatos pueden hacer más de 100 sonidos vocales diferentes, los perros solo 10.",
    "Los gatos tienen 32 músculos en cada oreja.",
    "La nariz de cada gato tiene un patrón único, como la huella dactilar humana.",
    "Los gatos usan sus bigotes para saber si pueden pasar por un espacio.",
    "El ronroneo de un gato ocurre a una frecuencia que ayuda a curar huesos y tejidos.",
    "Los gatos pueden saltar hasta 6 veces su longitud.",
    "Los antiguos egipcios afeitaban sus cejas en señal de duelo cuando su gato fallecía.",
    "Un grupo de gatitos se llama 'kindergarten'.",
    "Los gatos sudan a través de las almohadillas de sus patas.",
    "El dueño promedio de un gato tiene más educación que el dueño promedio de un perro.",
    "Los gatos tienen un órgano especial en el paladar (órgano de Jacobson) que les permite 'probar' los olores.",
    "Isaac Newton inventó la puerta gatera para que su gato no interrumpiera sus experimentos.",
    "El gato más rico del mundo heredó 13 millones de dólares.",
    "Los gatos no tienen clavículas, lo que les permite pasar por cualquier abertura del tamaño de su cabeza.",
    "Los gatos caminan moviendo ambas patas derechas primero y luego ambas patas izquierdas.",
    "La mayoría de los gatos blancos con ojos azules son sordos.",
];

/// Builds the fallback pool from [`LOCAL_FACTS`].
///
/// # Errors
///
/// Only fails if the embedded list were empty.
pub fn local_fallback_pool() -> Result<FallbackPool, CoreError> {
    FallbackPool::new(LOCAL_FACTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_has_every_fact() {
        let pool = local_fallback_pool().unwrap();
        assert_eq!(pool.len(), LOCAL_FACTS.len());
        for fact in LOCAL_FACTS {
            assert!(pool.contains(fact));
        }
    }
}
