// src/noyau/mpf.rs
//
// Convertisseur de précision : f64 -> valeur binaire à précision arbitraire.
// --------------------------------------------------------------------------
// Représentation : (-1)^signe · mantisse · 2^exposant
// - mantisse impaire (normalisée), sauf zéro (mantisse 0, exposant 0)
// - bits = longueur binaire de la mantisse (<= precision)
//
// IMPORTANT (SAFE):
// - from_float() n’invente aucun bit : un f64 porte au plus 53 bits significatifs.
//   Si precision >= bits du double, le résultat est EXACTEMENT le double stocké.
// - Sous `precision` bits : troncature vers zéro. |résultat| <= |double stocké| et
//   les bits retenus sont les bits de tête du double (stables d’une précision à l’autre).

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

use tracing::warn;

use super::erreur::ErreurNoyau;

/// log2(10), pour les conversions chiffres décimaux <-> bits.
const LOG2_10: f64 = std::f64::consts::LOG2_10;

/// Bits significatifs d’un f64 (mantisse implicite comprise).
pub const BITS_F64: u64 = 53;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ValeurMpf {
    negatif: bool,
    mantisse: BigUint,
    exposant: i64,
    bits: u64,
    precision: u32,
}

impl ValeurMpf {
    fn zero(precision: u32) -> Self {
        Self {
            negatif: false,
            mantisse: BigUint::zero(),
            exposant: 0,
            bits: 0,
            precision,
        }
    }

    /// Signe : 1 si négatif, 0 sinon (convention mpf).
    pub fn signe(&self) -> u8 {
        u8::from(self.negatif)
    }

    pub fn mantisse(&self) -> &BigUint {
        &self.mantisse
    }

    pub fn exposant(&self) -> i64 {
        self.exposant
    }

    /// Nombre de bits effectivement portés par la mantisse.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Précision demandée à la conversion (plafond, pas une garantie d’exactitude).
    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn is_zero(&self) -> bool {
        self.mantisse.is_zero()
    }

    /// Valeur rationnelle exacte de la représentation.
    pub fn to_rational(&self) -> BigRational {
        let m = BigInt::from(self.mantisse.clone());
        let m = if self.negatif { -m } else { m };

        let e = self.exposant;
        let deux = BigInt::from(2);
        if e >= 0 {
            BigRational::from_integer(m * deux.pow(e as u32))
        } else {
            BigRational::new(m, deux.pow(e.unsigned_abs() as u32))
        }
    }

    /// Retour en f64 (exact si bits <= 53 et exposant dans la plage normale).
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        // mantisse <= 2^53 dans tous les cas produits par from_float(.., <=53)
        let m = self.mantisse.to_f64().unwrap_or(f64::NAN);
        // deux facteurs : 2^-1074 seul sous-déborde à 0 via powi
        let e = self.exposant as i32;
        let v = m * 2f64.powi(e / 2) * 2f64.powi(e - e / 2);
        if self.negatif {
            -v
        } else {
            v
        }
    }
}

/// Point d’entrée unique : f64 + précision (bits) -> ValeurMpf.
///
/// Erreurs :
/// - precision <= 0 => PrecisionInvalide
/// - NaN / ±∞       => FlottantNonFini
pub fn from_float(x: f64, precision: i64) -> Result<ValeurMpf, ErreurNoyau> {
    if precision <= 0 {
        return Err(ErreurNoyau::PrecisionInvalide(precision));
    }
    if !x.is_finite() {
        return Err(ErreurNoyau::FlottantNonFini);
    }

    // borne haute pratique : au-delà, on ne fait que recopier les 53 bits.
    let prec = u32::try_from(precision).unwrap_or(u32::MAX);
    if u64::from(prec) > BITS_F64 {
        warn!(
            precision = prec,
            "précision > 53 bits : les bits supplémentaires ne sont pas de l’exactitude"
        );
    }

    if x == 0.0 {
        return Ok(ValeurMpf::zero(prec));
    }

    let (m, e, negatif) = decompose_f64(x);
    let (mantisse, exposant) = normalise(BigUint::from(m), e);
    let (mantisse, exposant) = tronque(mantisse, exposant, u64::from(prec));
    let bits = mantisse.bits();

    Ok(ValeurMpf {
        negatif,
        mantisse,
        exposant,
        bits,
        precision: prec,
    })
}

/// Décomposition exacte IEEE-754 : x = ±m · 2^e (m entier, non nul si x != 0).
fn decompose_f64(x: f64) -> (u64, i64, bool) {
    let raw = x.to_bits();
    let negatif = (raw >> 63) == 1;
    let exp_brut = ((raw >> 52) & 0x7ff) as i64;
    let frac = raw & 0x000f_ffff_ffff_ffff;

    if exp_brut == 0 {
        // sous-normal : pas de bit implicite
        (frac, -1074, negatif)
    } else {
        (frac | (1u64 << 52), exp_brut - 1075, negatif)
    }
}

/// Retire les zéros de poids faible : mantisse impaire.
fn normalise(m: BigUint, e: i64) -> (BigUint, i64) {
    if m.is_zero() {
        return (m, 0);
    }
    let tz = m.trailing_zeros().unwrap_or(0);
    (m >> tz, e + tz as i64)
}

/// Troncature vers zéro sur `prec` bits, puis renormalise.
fn tronque(m: BigUint, e: i64, prec: u64) -> (BigUint, i64) {
    let bc = m.bits();
    if bc <= prec {
        return (m, e);
    }

    let decalage = bc - prec;
    normalise(m >> decalage, e + decalage as i64)
}

/// Chiffres décimaux -> bits (convention mpmath).
pub fn dps_to_prec(dps: u32) -> u32 {
    let p = ((f64::from(dps) + 1.0) * LOG2_10).round();
    (p as u32).max(1)
}

/// Bits -> chiffres décimaux fiables (convention mpmath).
pub fn prec_to_dps(prec: u32) -> u32 {
    let d = (f64::from(prec) / LOG2_10).round() - 1.0;
    if d < 1.0 {
        1
    } else {
        d as u32
    }
}
