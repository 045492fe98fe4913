//! # Rule — Implicação SE…ENTÃO
//!
//! Uma [`Rule`] é uma implicação proposicional `antecedentes → consequente`:
//! se **todos** os fatos do antecedente valem, o consequente vale.
//!
//! ## Forma
//!
//! | Campo | Tipo | Descrição |
//! |-------|------|-----------|
//! | `antecedents` | `BTreeSet<Fact>` | Conjunto de fatos que devem valer (pode ser vazio) |
//! | `consequent` | [`Fact`] | Um único átomo derivado quando a regra dispara |
//!
//! O antecedente é um **conjunto** (sem duplicatas, sem ordem declarada);
//! usamos `BTreeSet` para que a iteração seja determinística e os caminhos
//! de prova do encadeamento para trás sejam reproduzíveis entre execuções.
//!
//! ## Caso-Limite
//!
//! Uma regra com antecedente vazio é permitida: o conjunto vazio é
//! vacuamente subconjunto de qualquer conjunto de fatos, então a regra
//! dispara imediatamente no primeiro passe do encadeamento para frente.
//!
//! ## Exemplo
//!
//! ```rust
//! use crate::core::{Fact, Rule};
//!
//! // SE {chuva, sem_guarda_chuva} ENTÃO molhado
//! let regra = Rule::new(["chuva", "sem_guarda_chuva"], "molhado");
//! assert_eq!(regra.consequent().as_str(), "molhado");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Fact;

/// Implicação proposicional `SE antecedentes ENTÃO consequente`.
///
/// O consequente é sempre **um único átomo** — nunca um conjunto. Essa
/// restrição é garantida pelo próprio tipo, então não existe validação
/// em runtime a fazer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Fatos que devem todos valer para a regra disparar.
    antecedents: BTreeSet<Fact>,
    /// Fato derivado quando a regra dispara.
    consequent: Fact,
}

impl Rule {
    /// Cria uma regra a partir de antecedentes e um consequente.
    ///
    /// Antecedentes duplicados na entrada colapsam em um só (semântica
    /// de conjunto). Um iterador vazio produz uma regra de antecedente
    /// vazio, que dispara incondicionalmente.
    pub fn new<I, A>(antecedents: I, consequent: impl Into<Fact>) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Fact>,
    {
        Self {
            antecedents: antecedents.into_iter().map(Into::into).collect(),
            consequent: consequent.into(),
        }
    }

    /// Conjunto de antecedentes da regra (iteração em ordem determinística).
    pub fn antecedents(&self) -> &BTreeSet<Fact> {
        &self.antecedents
    }

    /// Consequente da regra — o átomo derivado quando ela dispara.
    pub fn consequent(&self) -> &Fact {
        &self.consequent
    }
}

/// Formatação legível no estilo das regras de produção: `SE {a, b} ENTÃO c`.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let se: Vec<&str> = self.antecedents.iter().map(Fact::as_str).collect();
        write!(f, "SE {{{}}} ENTÃO {}", se.join(", "), self.consequent)
    }
}
