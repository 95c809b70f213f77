//! Constantes Q-pur : constantes physiques nommées (ℏ, a₀, e) comme symboles
//! atomiques : instance unique, évaluation mpf bornée par l’approximation f64,
//! rendus Debug / Texte / Joli / LaTeX.

pub mod noyau;
