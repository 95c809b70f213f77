//! Noyau des constantes quantiques
//!
//! Organisation interne :
//! - erreur.rs     : taxonomie d’erreurs (précision invalide, constante inconnue…)
//! - mpf.rs        : convertisseur f64 -> mantisse/exposant à précision arbitraire
//! - lecture.rs    : lecture décimale (tronquée / scientifique)
//! - constantes.rs : HBAR, BOHR_RADIUS, E + capacité SymboleNumerique
//! - registre.rs   : nom -> instance unique
//! - rendu.rs      : dispatch Debug / Texte / Joli / Latex + imprimeurs

pub mod constantes;
pub mod erreur;
pub mod lecture;
pub mod mpf;
pub mod registre;
pub mod rendu;

#[cfg(test)]
mod tests_constantes;

// API publique minimale
pub use constantes::{Constante, Proprietes, SymboleNumerique, BOHR_RADIUS, E, HBAR};
pub use erreur::ErreurNoyau;
pub use mpf::{from_float, ValeurMpf};
pub use rendu::{rendu, FormatRendu, Imprimeur};
