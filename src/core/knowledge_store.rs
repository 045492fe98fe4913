//! # KnowledgeStore — Contêiner Central de Conhecimento
//!
//! A [`KnowledgeStore`] é o **coração** do shell — o contêiner que armazena
//! a base de regras e o conjunto de fatos em memória, com operações de
//! mutação e consulta. É um contêiner de dados puro: toda a inteligência
//! (encadeamentos, provas) vive no [`InferenceEngine`].
//!
//! ## Armazenamento
//!
//! - **Regras**: `Vec<Rule>` — a **ordem de inserção é preservada** e é
//!   semanticamente relevante: o encadeamento para trás compromete-se com
//!   a *primeira* regra declarada cujo consequente casa com o objetivo.
//! - **Fatos**: `HashSet<Fact>` — semântica de conjunto, busca O(1).
//!
//! ## Ciclo de Vida
//!
//! A store nasce vazia; regras e fatos iniciais ("dados") são adicionados
//! antes do raciocínio começar. Durante uma sessão de inferência o conjunto
//! de fatos só **cresce** (encadeamento é monotônico — nenhum fato é
//! removido como efeito colateral). O único caminho de remoção é
//! [`clear_facts()`](KnowledgeStore::clear_facts), que zera os fatos para
//! reiniciar uma sessão sem redeclarar as regras.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{Fact, KnowledgeStore, Rule};
//!
//! let mut store = KnowledgeStore::new();
//! store.add_rule(Rule::new(["A", "B"], "C"));
//! store.add_fact(Fact::from("A"));
//! store.add_fact(Fact::from("B"));
//!
//! assert_eq!(store.rule_count(), 1);
//! assert!(store.has_fact(&Fact::from("A")));
//! ```
//!
//! [`InferenceEngine`]: crate::inference::InferenceEngine

use std::collections::HashSet;

use super::{Fact, Rule};

/// Base de conhecimento in-memory — regras ordenadas + conjunto de fatos.
///
/// Acesso é single-writer: o motor de inferência assume exclusividade
/// durante uma chamada de encadeamento. Não há locks porque não há
/// concorrência — o shell inteiro é síncrono e single-threaded.
#[derive(Debug, Default)]
pub struct KnowledgeStore {
    /// Sequência de regras em ordem de declaração.
    rules: Vec<Rule>,
    /// Conjunto de fatos conhecidos (dados + derivados).
    facts: HashSet<Fact>,
}

impl KnowledgeStore {
    /// Cria uma KnowledgeStore vazia — sem regras nem fatos implícitos.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona uma regra ao **final** da sequência.
    ///
    /// Não há validação de ciclos nem deduplicação: regras repetidas são
    /// armazenadas repetidas, e dependências cíclicas entre regras são
    /// aceitas aqui — quem se protege delas é o encadeamento para trás,
    /// com sua guarda de ciclo.
    pub fn add_rule(&mut self, rule: Rule) {
        tracing::debug!(regra = %rule, "store: regra armazenada");
        self.rules.push(rule);
    }

    /// Adiciona um fato ao conjunto. Idempotente.
    ///
    /// Retorna `true` se o fato era novo, `false` se já era conhecido —
    /// o encadeamento para frente usa esse retorno para detectar o
    /// ponto fixo.
    pub fn add_fact(&mut self, fact: Fact) -> bool {
        let inserted = self.facts.insert(fact.clone());
        if inserted {
            tracing::debug!(fato = %fact, "store: fato armazenado");
        }
        inserted
    }

    /// Visão read-only da sequência de regras, em ordem de declaração.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Visão read-only do conjunto de fatos.
    pub fn facts(&self) -> &HashSet<Fact> {
        &self.facts
    }

    /// Verifica se um fato é conhecido (dado ou derivado).
    pub fn has_fact(&self, fact: &Fact) -> bool {
        self.facts.contains(fact)
    }

    /// Esvazia o conjunto de fatos. As regras ficam intocadas.
    ///
    /// Usado para reiniciar uma sessão de raciocínio sem redeclarar
    /// a base de regras.
    pub fn clear_facts(&mut self) {
        tracing::debug!(descartados = self.facts.len(), "store: fatos limpos");
        self.facts.clear();
    }

    /// Número de regras declaradas.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Número de fatos conhecidos.
    pub fn fact_count(&self) -> usize {
        self.facts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Adicionar um fato já presente é um no-op observável.
    #[test]
    fn add_fact_is_idempotent() {
        let mut store = KnowledgeStore::new();
        assert!(store.add_fact(Fact::from("A")));
        assert!(!store.add_fact(Fact::from("A")));
        assert_eq!(store.fact_count(), 1);
    }

    /// Regras duplicadas são armazenadas duplicadas — sem dedup.
    #[test]
    fn duplicate_rules_are_kept() {
        let mut store = KnowledgeStore::new();
        store.add_rule(Rule::new(["A"], "B"));
        store.add_rule(Rule::new(["A"], "B"));
        assert_eq!(store.rule_count(), 2);
    }

    /// A ordem de declaração das regras é preservada.
    #[test]
    fn rules_preserve_insertion_order() {
        let mut store = KnowledgeStore::new();
        store.add_rule(Rule::new(["A"], "X"));
        store.add_rule(Rule::new(["B"], "X"));
        let consequents: Vec<&str> = store
            .rules()
            .iter()
            .map(|r| r.consequent().as_str())
            .collect();
        assert_eq!(consequents, ["X", "X"]);
        assert!(store.rules()[0].antecedents().contains(&Fact::from("A")));
    }

    /// clear_facts zera os fatos mas mantém a base de regras.
    #[test]
    fn clear_facts_keeps_rules() {
        let mut store = KnowledgeStore::new();
        store.add_rule(Rule::new(["A"], "B"));
        store.add_fact(Fact::from("A"));
        store.clear_facts();
        assert_eq!(store.fact_count(), 0);
        assert_eq!(store.rule_count(), 1);
    }
}
