//! Constantes physiques nommées (hbar, rayon de Bohr, charge élémentaire).
//!
//! Contrats :
//! - Une seule instance par constante : ce sont des `static`, jamais construites
//!   ailleurs (constructeur privé, pas de `Clone`).
//! - Égalité = identité (adresse), hachage = nom (unique dans le registre).
//! - Tout est immuable : l’approximation f64 est la SEULE vérité numérique.
//!   On ne la “corrige” pas avec des valeurs publiées plus précises.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;

use tracing::debug;

use super::erreur::ErreurNoyau;
use super::mpf::{dps_to_prec, from_float, ValeurMpf};
use super::rendu::{rendu, FormatRendu};

/// Propriétés mathématiques affirmées (jamais recalculées).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Proprietes {
    pub is_real: bool,
    pub is_positive: bool,
    pub is_negative: bool,
    pub is_irrational: bool,
}

impl Proprietes {
    /// Réel, strictement positif, irrationnel (cas des trois constantes).
    const REEL_POSITIF_IRRATIONNEL: Proprietes = Proprietes {
        is_real: true,
        is_positive: true,
        is_negative: false,
        is_irrational: true,
    };

    pub fn is_nonnegative(&self) -> bool {
        self.is_real && !self.is_negative
    }

    pub fn is_nonzero(&self) -> bool {
        self.is_positive || self.is_negative
    }

    pub fn is_finite(&self) -> bool {
        self.is_real
    }
}

/// Table des rendus : une chaîne fixe par format (deux pour le format joli).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rendus {
    pub debug: &'static str,
    pub texte: &'static str,
    pub joli_unicode: &'static str,
    pub joli_ascii: &'static str,
    pub latex: &'static str,
}

pub struct Constante {
    nom: &'static str,
    classe: &'static str,
    approx: f64,
    proprietes: Proprietes,
    rendus: Rendus,
}

impl Constante {
    const fn new(
        nom: &'static str,
        classe: &'static str,
        approx: f64,
        proprietes: Proprietes,
        rendus: Rendus,
    ) -> Self {
        Self {
            nom,
            classe,
            approx,
            proprietes,
            rendus,
        }
    }

    /// Nom de classe (forme constructeur sans parenthèses), ex: "HBar".
    pub fn classe(&self) -> &'static str {
        self.classe
    }

    /// Approximation stockée (bit pour bit, jamais modifiée).
    pub fn approx(&self) -> f64 {
        self.approx
    }

    pub fn rendus(&self) -> &Rendus {
        &self.rendus
    }

    /// Lecture scientifique à `chiffres` significatifs, ex: hbar.evalf(15) = 1.05457162000000e-34.
    pub fn evalf(&self, chiffres: u32) -> Result<String, ErreurNoyau> {
        let v = self.eval_mpf(i64::from(dps_to_prec(chiffres)))?;
        Ok(v.to_scientifique(chiffres as usize))
    }

    /// Lecture décimale tronquée (virgule fixe) à une précision binaire donnée.
    pub fn lecture_decimale(&self, precision: i64, digits: usize) -> Result<String, ErreurNoyau> {
        Ok(self.eval_mpf(precision)?.to_decimal(digits))
    }
}

/// Capacité “symbole numérique atomique” attendue par le moteur hôte :
/// identité stable, évaluation numérique, propriétés, rendus.
pub trait SymboleNumerique {
    fn nom(&self) -> &'static str;

    fn proprietes(&self) -> Proprietes;

    /// Évaluation à `precision` bits ; bornée par la précision de l’approximation stockée.
    fn eval_mpf(&self, precision: i64) -> Result<ValeurMpf, ErreurNoyau>;

    fn rendu(&self, format: FormatRendu, unicode: bool) -> &'static str;

    fn is_real(&self) -> bool {
        self.proprietes().is_real
    }

    fn is_positive(&self) -> bool {
        self.proprietes().is_positive
    }

    fn is_negative(&self) -> bool {
        self.proprietes().is_negative
    }

    fn is_irrational(&self) -> bool {
        self.proprietes().is_irrational
    }
}

impl SymboleNumerique for Constante {
    fn nom(&self) -> &'static str {
        self.nom
    }

    fn proprietes(&self) -> Proprietes {
        self.proprietes
    }

    fn eval_mpf(&self, precision: i64) -> Result<ValeurMpf, ErreurNoyau> {
        debug!(constante = self.nom, precision, "évaluation mpf");
        from_float(self.approx, precision)
    }

    fn rendu(&self, format: FormatRendu, unicode: bool) -> &'static str {
        rendu(self, format, unicode)
    }
}

/* ------------------------ Identité ------------------------ */

impl PartialEq for Constante {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for Constante {}

impl Hash for Constante {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.nom.hash(state);
    }
}

/// `{:?}` = forme constructeur, ex: HBar()
impl fmt::Debug for Constante {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rendus.debug)
    }
}

/// `{}` = symbole texte, ex: hbar
impl fmt::Display for Constante {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rendus.texte)
    }
}

/* ------------------------ Les constantes ------------------------ */

/// Constante de Planck réduite (ℏ).
pub static HBAR: Constante = Constante::new(
    "hbar",
    "HBar",
    1.05457162e-34,
    Proprietes::REEL_POSITIF_IRRATIONNEL,
    Rendus {
        debug: "HBar()",
        texte: "hbar",
        joli_unicode: "\u{210F}",
        joli_ascii: "hbar",
        latex: r"\hbar",
    },
);

/// Rayon de Bohr (a₀).
pub static BOHR_RADIUS: Constante = Constante::new(
    "bohr_radius",
    "BohrRadius",
    5.29177210903e-11,
    Proprietes::REEL_POSITIF_IRRATIONNEL,
    Rendus {
        debug: "BohrRadius()",
        texte: "a_0",
        joli_unicode: "a_0",
        joli_ascii: "a_0",
        latex: "a_0",
    },
);

/// Charge élémentaire.
pub static E: Constante = Constante::new(
    "e",
    "ElementaryCharge",
    1.602176634e-19,
    Proprietes::REEL_POSITIF_IRRATIONNEL,
    Rendus {
        debug: "ElementaryCharge()",
        texte: "e",
        joli_unicode: "e",
        joli_ascii: "e",
        latex: "e",
    },
);
