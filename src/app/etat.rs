//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état du visualiseur (constante choisie, drapeau unicode,
//! précision, rendus, lecture, erreur) et offrir des opérations simples.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur bits et chiffres.

/// Précision binaire par défaut (celle d’un f64).
const BITS_DEFAUT: i64 = 53;

/// Garde-fou : au-delà, on ne recopie de toute façon que 53 bits.
const BITS_MAX: i64 = 4096;

/// Chiffres significatifs par défaut (lecture scientifique).
const CHIFFRES_DEFAUT: u32 = 15;

const CHIFFRES_MAX: u32 = 200;

/// Constante affichée au lancement.
const NOM_DEFAUT: &str = "hbar";

#[derive(Clone, Default, Debug)]
pub struct Lecture {
    pub triple: String,       // (signe, mantisse, exposant, bits)
    pub scientifique: String, // ex: 1.05457162000000e-34
    pub proprietes: String,
}

#[derive(Clone, Debug)]
pub struct AppConstantes {
    // --- sélection ---
    pub nom: String,
    pub unicode: bool,

    // --- sorties ---
    pub rendus: Vec<(String, String)>, // (format, rendu)
    pub lecture: Lecture,
    pub erreur: String,
    pub lecture_dispo: bool,

    // --- paramètres ---
    pub bits: i64,
    pub chiffres: u32,

    // vue.rs recalcule au prochain frame si vrai
    pub a_rafraichir: bool,
}

impl Default for AppConstantes {
    fn default() -> Self {
        Self {
            nom: NOM_DEFAUT.to_string(),
            unicode: true,
            rendus: Vec::new(),
            lecture: Lecture::default(),
            erreur: String::new(),
            lecture_dispo: false,
            bits: BITS_DEFAUT,
            chiffres: CHIFFRES_DEFAUT,
            a_rafraichir: true,
        }
    }
}

impl AppConstantes {
    /// Remise à zéro totale (sélection + paramètres par défaut).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    pub fn selectionner(&mut self, nom: impl Into<String>) {
        self.nom = nom.into();
        self.a_rafraichir = true;
    }

    pub fn set_unicode(&mut self, unicode: bool) {
        self.unicode = unicode;
        self.a_rafraichir = true;
    }

    /// Bornée à [0, BITS_MAX] : 0 reste permis pour montrer l’erreur du noyau.
    pub fn set_bits(&mut self, bits: i64) {
        self.bits = bits.clamp(0, BITS_MAX);
        self.a_rafraichir = true;
    }

    pub fn set_chiffres(&mut self, chiffres: u32) {
        self.chiffres = chiffres.clamp(1, CHIFFRES_MAX);
        self.a_rafraichir = true;
    }

    /// Les rendus restent valides (ils ne peuvent pas échouer) ; la lecture est coupée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.lecture = Lecture::default();
        self.lecture_dispo = false;
    }

    pub fn set_resultats(&mut self, rendus: Vec<(String, String)>, lecture: Option<Lecture>) {
        self.erreur.clear();
        self.rendus = rendus;

        if let Some(l) = lecture {
            self.lecture_dispo = true;
            self.lecture = l;
        } else {
            self.lecture_dispo = false;
            self.lecture = Lecture::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bornes() {
        let mut a = AppConstantes::default();
        a.set_bits(-3);
        assert_eq!(a.bits, 0);
        a.set_bits(1 << 20);
        assert_eq!(a.bits, BITS_MAX);
        a.set_chiffres(0);
        assert_eq!(a.chiffres, 1);
    }

    #[test]
    fn erreur_coupe_la_lecture() {
        let mut a = AppConstantes::default();
        a.set_resultats(vec![], Some(Lecture::default()));
        assert!(a.lecture_dispo);
        a.set_erreur("précision invalide");
        assert!(!a.lecture_dispo);
        a.reset_total();
        assert!(a.erreur.is_empty());
        assert_eq!(a.nom, NOM_DEFAUT);
    }
}
