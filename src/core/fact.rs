//! # Fact — Proposição Atômica
//!
//! Um [`Fact`] é a menor unidade de conhecimento do shell: um **símbolo
//! proposicional** que o sistema acredita ser verdadeiro. Não há estrutura
//! interna — nada de predicados com argumentos, variáveis ou unificação.
//! "chove", "rua_molhada" e "D" são todos fatos igualmente opacos.
//!
//! ## Semântica de Conjunto
//!
//! Fatos vivem em um `HashSet` dentro da [`KnowledgeStore`]: sem duplicatas,
//! sem multiplicidade, sem ordem significativa entre eles. Adicionar um fato
//! já presente é um no-op observável.
//!
//! ## Exemplo
//!
//! ```rust
//! use crate::core::Fact;
//!
//! let fato = Fact::from("rua_molhada");
//! assert_eq!(fato.to_string(), "rua_molhada");
//! ```
//!
//! [`KnowledgeStore`]: crate::core::KnowledgeStore

use std::fmt;

use serde::{Deserialize, Serialize};

/// Proposição atômica — um símbolo opaco que o sistema considera verdadeiro.
///
/// Internamente é um newtype sobre `String`. A igualdade é textual e
/// case-sensitive: `"Chuva"` e `"chuva"` são fatos distintos (a normalização
/// de entrada, se desejada, é responsabilidade do driver).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fact(String);

impl Fact {
    /// Cria um fato a partir de qualquer texto.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Retorna o símbolo textual do fato.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fact {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for Fact {
    fn from(symbol: String) -> Self {
        Self(symbol)
    }
}

/// Exibe o fato como seu símbolo puro, sem aspas ou decoração.
impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
