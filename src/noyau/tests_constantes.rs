//! Tests constantes (campagne) : identité, évaluation bornée, rendus.
//!
//! Notes :
//! - L’approximation f64 est la seule vérité : au-delà de 53 bits, rien ne change.
//! - Identité testée par adresse (ptr::eq), y compris depuis plusieurs threads.

use std::ptr;
use std::thread;

use approx::assert_relative_eq;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::constantes::{Constante, SymboleNumerique, BOHR_RADIUS, E, HBAR};
use super::erreur::ErreurNoyau;
use super::mpf::{ValeurMpf, BITS_F64};
use super::registre;
use super::rendu::FormatRendu;

const NOMS: [&str; 6] = ["hbar", "HBar", "bohr_radius", "BohrRadius", "e", "ElementaryCharge"];

/* ------------------------ Identité ------------------------ */

#[test]
fn identite_registre() {
    for nom in NOMS {
        let a = registre::get(nom).unwrap();
        let b = registre::get(nom).unwrap();
        assert!(ptr::eq(a, b), "nom={nom:?}");
        assert_eq!(a, b);
    }
    assert!(ptr::eq(registre::get("hbar").unwrap(), &HBAR));
    assert!(ptr::eq(registre::get("e").unwrap(), &E));
    assert_ne!(registre::get("hbar").unwrap(), registre::get("e").unwrap());
}

#[test]
fn identite_multi_threads() {
    let adresses: Vec<usize> = (0..8)
        .map(|_| thread::spawn(|| registre::get("HBar").unwrap() as *const _ as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    let attendu = &HBAR as *const _ as usize;
    assert!(adresses.iter().all(|&a| a == attendu));
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn stabilite_sur_les_precisions() {
    for c in registre::toutes() {
        let p53 = c.eval_mpf(53).unwrap();
        for p in [54, 64, 100, 256, 1000] {
            let v = c.eval_mpf(p).unwrap();
            assert_eq!(v.mantisse(), p53.mantisse(), "{c:?} p={p}");
            assert_eq!(v.exposant(), p53.exposant(), "{c:?} p={p}");
            assert!(v.bits() <= BITS_F64);
        }
        assert_eq!(p53.to_f64(), c.approx());
    }
}

/// Bits de tête de `v` sur `p` bits (troncature), mantisse renormalisée impaire.
fn bits_de_tete(v: &ValeurMpf, p: u64) -> (BigUint, i64) {
    let m = v.mantisse().clone();
    let bc = m.bits();
    if bc <= p {
        return (m, v.exposant());
    }
    let decalage = bc - p;
    let q = m >> decalage;
    let tz = q.trailing_zeros().unwrap_or(0);
    (q >> tz, v.exposant() + (decalage + tz) as i64)
}

#[test]
fn basse_precision_coherente() {
    // troncature : jamais au-dessus du double stocké, écart relatif < 2^-(p-1)
    for c in registre::toutes() {
        for p in [1, 2, 4, 8, 16, 24, 32, 52] {
            let v = c.eval_mpf(p).unwrap();
            assert!(v.bits() <= p as u64, "{c:?} p={p}");
            assert!(v.to_f64() <= c.approx(), "{c:?} p={p} > valeur stockée");
            let rel = 2f64.powi(1 - p as i32);
            assert_relative_eq!(v.to_f64(), c.approx(), max_relative = rel);
        }
    }
}

#[test]
fn stabilite_p1_inferieur_p2() {
    // p1 < p2 <= 53 : eval(p1) = bits de tête de eval(p2), et eval(p1) <= eval(p2)
    for c in registre::toutes() {
        let valeurs: Vec<ValeurMpf> = (1..=53).map(|p| c.eval_mpf(p).unwrap()).collect();
        for p1 in 1..=53u64 {
            let v1 = &valeurs[(p1 - 1) as usize];
            for p2 in (p1 + 1)..=53 {
                let v2 = &valeurs[(p2 - 1) as usize];
                let (m, e) = bits_de_tete(v2, p1);
                assert_eq!(v1.mantisse(), &m, "{c:?} p1={p1} p2={p2}");
                assert_eq!(v1.exposant(), e, "{c:?} p1={p1} p2={p2}");
                assert!(v1.to_rational() <= v2.to_rational(), "{c:?} p1={p1} p2={p2}");
            }
        }
    }
}

#[test]
fn triplets_de_reference() {
    // (signe, mantisse, exposant) attendus pour from_float tronqué
    let cas: [(&Constante, i64, (u8, u64, i64)); 6] = [
        (&HBAR, 24, (0, 4593307, -135)),
        (&HBAR, 53, (0, 4932026077800649, -165)),
        (&BOHR_RADIUS, 8, (0, 29, -39)),
        (&BOHR_RADIUS, 16, (0, 14895, -48)),
        (&E, 16, (0, 24211, -77)),
        (&E, 32, (0, 396679721, -91)),
    ];
    for (c, p, attendu) in cas {
        let v = c.eval_mpf(p).unwrap();
        let obtenu = (v.signe(), v.mantisse().to_u64().unwrap(), v.exposant());
        assert_eq!(obtenu, attendu, "{c:?} p={p}");
    }
}

#[test]
fn precision_invalide() {
    for c in registre::toutes() {
        assert_eq!(c.eval_mpf(0), Err(ErreurNoyau::PrecisionInvalide(0)));
        assert_eq!(c.eval_mpf(-5), Err(ErreurNoyau::PrecisionInvalide(-5)));
    }
}

#[test]
fn approximations_bit_pour_bit() {
    assert_eq!(HBAR.approx().to_bits(), 1.05457162e-34_f64.to_bits());
    assert_eq!(BOHR_RADIUS.approx().to_bits(), 5.29177210903e-11_f64.to_bits());
    assert_eq!(E.approx().to_bits(), 1.602176634e-19_f64.to_bits());

    // évaluer n’altère rien
    let _ = HBAR.eval_mpf(4096).unwrap();
    assert_eq!(HBAR.approx().to_bits(), 1.05457162e-34_f64.to_bits());
}

#[test]
fn hbar_evalf() {
    assert_eq!(HBAR.evalf(15).unwrap(), "1.05457162000000e-34");
    assert_eq!(E.evalf(10).unwrap(), "1.602176634e-19");
    assert_eq!(BOHR_RADIUS.evalf(12).unwrap(), "5.29177210903e-11");
}

#[test]
fn lecture_decimale_tronquee() {
    assert_eq!(BOHR_RADIUS.lecture_decimale(53, 12).unwrap(), "0.000000000052");
    assert!(HBAR.lecture_decimale(0, 10).is_err());
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn proprietes_figees() {
    for c in registre::toutes() {
        assert!(c.is_real());
        assert!(c.is_positive());
        assert!(!c.is_negative());
        assert!(c.is_irrational());
        let p = c.proprietes();
        assert!(p.is_nonnegative() && p.is_nonzero() && p.is_finite());
    }
}

/* ------------------------ Rendus ------------------------ */

#[test]
fn rendus_scenarios() {
    assert_eq!(BOHR_RADIUS.rendu(FormatRendu::Texte, false), "a_0");
    assert_eq!(BOHR_RADIUS.rendu(FormatRendu::Latex, false), "a_0");

    assert_eq!(E.rendu(FormatRendu::Texte, false), "e");
    assert_eq!(E.rendu(FormatRendu::Latex, false), "e");

    assert_eq!(HBAR.rendu(FormatRendu::Latex, false), r"\hbar");
    assert_eq!(HBAR.rendu(FormatRendu::Joli, true), "\u{210F}");
    assert_eq!(HBAR.rendu(FormatRendu::Joli, false), "hbar");
    assert_eq!(HBAR.rendu(FormatRendu::Debug, false), "HBar()");
}

#[test]
fn debug_display() {
    assert_eq!(format!("{:?}", HBAR), "HBar()");
    assert_eq!(format!("{:?}", E), "ElementaryCharge()");
    assert_eq!(format!("{}", BOHR_RADIUS), "a_0");
    for c in registre::toutes() {
        assert_eq!(format!("{c:?}"), format!("{}()", c.classe()));
    }
}

#[test]
fn rendus_deterministes() {
    for c in registre::toutes() {
        for f in FormatRendu::TOUS {
            for u in [true, false] {
                assert_eq!(c.rendu(f, u), c.rendu(f, u));
                assert!(!c.rendu(f, u).is_empty());
            }
        }
    }
}
