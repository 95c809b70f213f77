// src/noyau/rendu.rs
//
// Dispatch de rendu : format explicite choisi par l’appelant (pas d’introspection).
// - Debug  : forme constructeur, ex: HBar()
// - Texte  : symbole court, ex: hbar, a_0, e
// - Joli   : glyphe unicode si `unicode`, sinon repli ascii (UNE seule branche)
// - Latex  : chaîne de composition fixe, ex: \hbar
//
// Fonctions pures : jamais d’échec, jamais d’état partagé.

use super::constantes::Constante;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatRendu {
    Debug,
    Texte,
    Joli,
    Latex,
}

impl FormatRendu {
    pub const TOUS: [FormatRendu; 4] = [
        FormatRendu::Debug,
        FormatRendu::Texte,
        FormatRendu::Joli,
        FormatRendu::Latex,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            FormatRendu::Debug => "Debug",
            FormatRendu::Texte => "Texte",
            FormatRendu::Joli => "Joli",
            FormatRendu::Latex => "LaTeX",
        }
    }
}

/// Rendu d’une constante dans le format demandé.
/// `unicode` n’est lu que pour le format Joli.
pub fn rendu(c: &Constante, format: FormatRendu, unicode: bool) -> &'static str {
    let r = c.rendus();
    match format {
        FormatRendu::Debug => r.debug,
        FormatRendu::Texte => r.texte,
        FormatRendu::Joli => {
            if unicode {
                r.joli_unicode
            } else {
                r.joli_ascii
            }
        }
        FormatRendu::Latex => r.latex,
    }
}

/* ------------------------ Imprimeurs (moteurs externes) ------------------------ */

/// Contrat d’un moteur d’impression : il choisit le format, fournit le drapeau
/// unicode (format Joli seulement) et appelle le rendu de la constante.
pub trait Imprimeur {
    fn format(&self) -> FormatRendu;

    fn use_unicode(&self) -> bool {
        false
    }

    fn imprime(&self, c: &Constante) -> String {
        rendu(c, self.format(), self.use_unicode()).to_string()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ImprimeurDebug;

#[derive(Clone, Copy, Debug, Default)]
pub struct ImprimeurTexte;

#[derive(Clone, Copy, Debug, Default)]
pub struct ImprimeurJoli {
    pub use_unicode: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ImprimeurLatex;

impl Imprimeur for ImprimeurDebug {
    fn format(&self) -> FormatRendu {
        FormatRendu::Debug
    }
}

impl Imprimeur for ImprimeurTexte {
    fn format(&self) -> FormatRendu {
        FormatRendu::Texte
    }
}

impl Imprimeur for ImprimeurJoli {
    fn format(&self) -> FormatRendu {
        FormatRendu::Joli
    }

    fn use_unicode(&self) -> bool {
        self.use_unicode
    }
}

impl Imprimeur for ImprimeurLatex {
    fn format(&self) -> FormatRendu {
        FormatRendu::Latex
    }
}
