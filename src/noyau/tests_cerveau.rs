//! Tests du cerveau : scénarios de saisie complets + propriétés clés.
//!
//! - associativité gauche (pas de précédence)
//! - état “en attente”
//! - réécriture de la description par les unaires
//! - dégradations silencieuses (symbole inconnu, variable non liée, ÷0)

use super::cerveau::Cerveau;
use super::reduction::Variables;

fn cerveau(saisie: &[&str]) -> Cerveau {
    // Saisie compacte : un nombre => opérande, "$X" => variable X, sinon symbole.
    let mut c = Cerveau::new();
    for s in saisie {
        if let Ok(v) = s.parse::<f64>() {
            c.ajoute_operande(v);
        } else if let Some(nom) = s.strip_prefix('$') {
            c.ajoute_variable(nom);
        } else {
            c.ajoute_operation(*s);
        }
    }
    c
}

fn assert_bits_eq(a: Option<f64>, b: Option<f64>) {
    assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits), "a={a:?} b={b:?}");
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn suite_d_operandes_dernier_gagne() {
    let c = cerveau(&["1", "2.5", "$M", "7"]);
    assert_eq!(c.resultat(), Some(7.0));
    assert!(!c.resultat_en_attente());

    let c = cerveau(&["1", "$M"]);
    assert_eq!(c.resultat(), Some(0.0));
    assert!(!c.resultat_en_attente());
}

#[test]
fn idempotence() {
    let c = cerveau(&["9", "√", "+", "$x", "÷", "0", "=", "cos"]);
    let mut vars = Variables::new();
    vars.insert("x".into(), 2.0);

    let a = c.evaluate(&vars);
    let b = c.evaluate(&vars);
    assert_bits_eq(a.resultat, b.resultat);
    assert_eq!(a.en_attente, b.en_attente);
    assert_eq!(a.description, b.description);
}

#[test]
fn associativite_gauche() {
    let c = cerveau(&["3", "+", "4", "×", "2", "="]);
    assert_eq!(c.resultat(), Some(14.0));
    assert_eq!(c.description(), "3.0+4.0×2.0");
}

#[test]
fn binaire_en_attente() {
    let c = cerveau(&["5", "+"]);
    assert!(c.resultat_en_attente());
    assert_eq!(c.resultat(), Some(5.0));
    assert_eq!(c.description(), "5.0+");
}

#[test]
fn unaire_compose_apres_egal() {
    let c = cerveau(&["9", "√", "=", "√"]);
    assert_eq!(c.description(), "√(√(9.0))");
    let r = c.resultat().unwrap_or(f64::NAN);
    assert_eq!(r, 3.0_f64.sqrt());
    assert!((r - 9.0_f64.powf(0.25)).abs() < 1e-15, "r={r}");
}

#[test]
fn variable_non_liee_vaut_zero() {
    let c = cerveau(&["$M", "+", "1", "="]);
    let e = c.evaluate(&Variables::new());
    assert_eq!(e.resultat, Some(1.0));
    assert_eq!(e.description, "M+1.0");
}

#[test]
fn variable_liee_a_l_evaluation() {
    let c = cerveau(&["$M", "+", "1", "="]);
    let mut vars = Variables::new();
    vars.insert("M".into(), 41.0);
    assert_eq!(c.evaluate(&vars).resultat, Some(42.0));
    // Les accesseurs n’utilisent aucune liaison.
    assert_eq!(c.resultat(), Some(1.0));
}

#[test]
fn symbole_inconnu_sans_effet() {
    let c = cerveau(&["2", "∑"]);
    assert_eq!(c.resultat(), Some(2.0));
    assert_eq!(c.description(), "2.0");
    assert!(!c.resultat_en_attente());
    // Le jeton est tout de même conservé dans la file.
    assert_eq!(c.jetons().len(), 2);
}

#[test]
fn division_par_zero() {
    let c = cerveau(&["1", "÷", "0", "="]);
    assert_eq!(c.resultat(), Some(f64::INFINITY));
}

#[test]
fn non_finis_propages() {
    assert!(cerveau(&["0", "÷", "0", "="]).resultat().is_some_and(f64::is_nan));
    assert!(cerveau(&["4", "±", "√"]).resultat().is_some_and(f64::is_nan));
}

/* ------------------------ Résultat absent ------------------------ */

#[test]
fn resultat_absent() {
    assert_eq!(Cerveau::new().resultat(), None);
    assert_eq!(cerveau(&["∑", "=", "√", "+"]).resultat(), None);
}

/* ------------------------ Reset ------------------------ */

#[test]
fn reset_vide_la_file() {
    let mut c = cerveau(&["3", "+", "4"]);
    c.reset();
    assert!(c.jetons().is_empty());
    assert_eq!(c.resultat(), None);
    assert_eq!(c.description(), "");
    assert!(!c.resultat_en_attente());

    c.ajoute_operande(8.0);
    assert_eq!(c.resultat(), Some(8.0));
}

/* ------------------------ Scénarios “calculatrice” ------------------------ */

#[test]
fn constante_puis_unaire() {
    // π puis cos : la description de π ne se termine pas par son texte numérique.
    let c = cerveau(&["π", "cos"]);
    assert_eq!(c.resultat(), Some(-1.0));
    assert_eq!(c.description(), "cos(3.141592653589793)");
}

#[test]
fn pourcent_et_oppose() {
    let c = cerveau(&["200", "×", "5", "%", "="]);
    assert_eq!(c.resultat(), Some(10.0));
    assert_eq!(c.description(), "200.0×%(5.0)");

    let c = cerveau(&["6", "±", "−", "4", "="]);
    assert_eq!(c.resultat(), Some(-10.0));
    assert_eq!(c.description(), "±(6.0)−4.0");
}

#[test]
fn nouveau_nombre_apres_egal_repart() {
    let c = cerveau(&["1", "+", "2", "=", "5"]);
    assert_eq!(c.resultat(), Some(5.0));
    assert_eq!(c.description(), "5.0");
}

#[test]
fn continuer_apres_egal() {
    let c = cerveau(&["1", "+", "2", "=", "×", "4", "="]);
    assert_eq!(c.resultat(), Some(12.0));
    assert_eq!(c.description(), "1.0+2.0×4.0");
}
