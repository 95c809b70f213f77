// src/noyau/registre.rs
//
// Registre : nom -> instance unique.
// - Les constantes sont des `static` (constantes.rs) : rien à construire ici.
// - L’index des noms est bâti UNE fois (OnceLock), puis lu sans verrou.
// - Aucune opération de retrait / mutation.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use super::constantes::{Constante, SymboleNumerique, BOHR_RADIUS, E, HBAR};
use super::erreur::ErreurNoyau;

static TOUTES: [&Constante; 3] = [&HBAR, &BOHR_RADIUS, &E];

static INDEX: OnceLock<HashMap<&'static str, &'static Constante>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, &'static Constante> {
    INDEX.get_or_init(|| {
        let mut m = HashMap::with_capacity(TOUTES.len() * 2);
        for c in TOUTES {
            // nom d’instance + nom de classe (hbar / HBar)
            m.insert(c.nom(), c);
            m.insert(c.classe(), c);
        }
        debug!(entrees = m.len(), "index du registre construit");
        m
    })
}

/// Retourne l’instance unique associée à `nom` (nom d’instance ou de classe).
pub fn get(nom: &str) -> Result<&'static Constante, ErreurNoyau> {
    index()
        .get(nom)
        .copied()
        .ok_or_else(|| ErreurNoyau::ConstanteInconnue(nom.to_string()))
}

/// Toutes les constantes, dans l’ordre de déclaration.
pub fn toutes() -> &'static [&'static Constante] {
    &TOUTES
}
