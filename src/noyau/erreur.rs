// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau (volontairement minimale).
// - Le rendu et les propriétés ne peuvent pas échouer : aucune variante pour eux.
// - La double construction d’une constante n’existe pas ici : elle est rendue
//   impossible par les `static` (voir constantes.rs), pas détectée à l’exécution.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurNoyau {
    /// Précision binaire demandée <= 0.
    #[error("précision invalide : {0} bits (doit être > 0)")]
    PrecisionInvalide(i64),

    /// NaN ou ±∞ : pas de représentation mantisse/exposant.
    #[error("flottant non fini : pas de représentation mpf")]
    FlottantNonFini,

    #[error("constante inconnue : {0:?}")]
    ConstanteInconnue(String),
}
