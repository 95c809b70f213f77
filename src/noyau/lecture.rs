// src/noyau/lecture.rs
//
// Lecture décimale d’une ValeurMpf (affichage seulement, jamais réinjecté).
// - to_decimal      : virgule fixe, tronquée (comme ΣLocal)
// - to_scientifique : n chiffres significatifs, arrondi pair, format d.ddde±X

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed};

use super::mpf::ValeurMpf;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = trunc(r * 10^digits) (troncature vers zéro)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r * BigRational::from_integer(scale)).trunc().to_integer()
}

/* ------------------------ Scientifique ------------------------ */

/// Exposant décimal k tel que 10^k <= r < 10^(k+1), r > 0.
fn exposant_decimal(r: &BigRational) -> i64 {
    let dix = BigRational::from_integer(BigInt::from(10));
    let un = BigRational::one();

    // estimation par les longueurs binaires, puis ajustement exact
    let bits_n = r.numer().bits() as f64;
    let bits_d = r.denom().bits() as f64;
    let mut k = ((bits_n - bits_d) / std::f64::consts::LOG2_10).floor() as i64;

    let puissance = |k: i64| -> BigRational {
        if k >= 0 {
            BigRational::from_integer(pow10(k as usize))
        } else {
            un.clone() / BigRational::from_integer(pow10(k.unsigned_abs() as usize))
        }
    };

    while puissance(k) > *r {
        k -= 1;
    }
    while &puissance(k) * &dix <= *r {
        k += 1;
    }
    k
}

/// Arrondi au plus proche, égalité vers pair (r >= 0).
fn arrondi_pair(r: &BigRational) -> BigInt {
    let plancher = r.floor();
    let frac = r - &plancher;
    let mut q = plancher.to_integer();
    let moitie = BigRational::new(BigInt::one(), BigInt::from(2));

    if frac > moitie || (frac == moitie && (&q % 2u32) == BigInt::one()) {
        q += 1u32;
    }
    q
}

impl ValeurMpf {
    /// Lecture en virgule fixe tronquée à `digits` décimales.
    pub fn to_decimal(&self, digits: usize) -> String {
        scaled_to_decimal(rational_scaled(&self.to_rational(), digits), digits)
    }

    /// Lecture scientifique à `chiffres` significatifs (>= 1), ex: 1.05457162000000e-34.
    pub fn to_scientifique(&self, chiffres: usize) -> String {
        let chiffres = chiffres.max(1);
        if self.is_zero() {
            return "0.0".to_string();
        }

        let r = self.to_rational();
        let neg = r.is_negative();
        let abs = r.abs();

        let mut k = exposant_decimal(&abs);

        // abs · 10^(chiffres-1-k) arrondi => entier à `chiffres` chiffres
        let decale = chiffres as i64 - 1 - k;
        let facteur = if decale >= 0 {
            BigRational::from_integer(pow10(decale as usize))
        } else {
            BigRational::new(BigInt::one(), pow10(decale.unsigned_abs() as usize))
        };
        let mut m = arrondi_pair(&(abs * facteur));

        // retenue : 9.99… -> 10.0…
        if m >= pow10(chiffres) {
            m /= 10u32;
            k += 1;
        }

        let texte = m.to_str_radix(10);
        let (tete, queue) = texte.split_at(1);
        let queue = if queue.is_empty() { "0" } else { queue };
        let signe = if neg { "-" } else { "" };

        let exp = if k < 0 {
            format!("e{k}")
        } else if k > 0 {
            format!("e+{k}")
        } else {
            String::new()
        };

        format!("{signe}{tete}.{queue}{exp}")
    }
}
